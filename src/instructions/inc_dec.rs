//! # Increment and Decrement Instructions
//!
//! This module implements increment and decrement operations:
//! - INR/DCR: 8-bit, on a register or M. Affect S, Z, P and AC but never CY.
//! - INX/DCX: 16-bit, on a register pair. Affect no flags.

use crate::opcodes::{Reg, RegPair};
use crate::{Bus, Cpu, ExecutionError};

/// Executes INR (Increment Register or Memory).
///
/// Auxiliary-Carry is set when the low nibble rolls over from 0xF to 0x0.
pub(crate) fn execute_inr<B: Bus>(cpu: &mut Cpu<B>, reg: Reg) -> Result<(), ExecutionError> {
    let result = cpu.read_reg(reg)?.wrapping_add(1);

    cpu.write_reg(reg, result)?;

    let flags = &mut cpu.state.flags;
    flags.set_szp(result);
    flags.ac = result & 0x0F == 0x00;

    Ok(())
}

/// Executes DCR (Decrement Register or Memory).
///
/// Computed as an addition of 0xFF, so Auxiliary-Carry is set unless the low
/// nibble borrowed (i.e. unless the result's low nibble is 0xF).
pub(crate) fn execute_dcr<B: Bus>(cpu: &mut Cpu<B>, reg: Reg) -> Result<(), ExecutionError> {
    let result = cpu.read_reg(reg)?.wrapping_sub(1);

    cpu.write_reg(reg, result)?;

    let flags = &mut cpu.state.flags;
    flags.set_szp(result);
    flags.ac = result & 0x0F != 0x0F;

    Ok(())
}

/// Executes INX (Increment Register Pair). Wraps at 0xFFFF.
pub(crate) fn execute_inx<B: Bus>(cpu: &mut Cpu<B>, pair: RegPair) -> Result<(), ExecutionError> {
    let value = cpu.state.pair(pair).wrapping_add(1);
    cpu.state.set_pair(pair, value);
    Ok(())
}

/// Executes DCX (Decrement Register Pair). Wraps at 0x0000.
pub(crate) fn execute_dcx<B: Bus>(cpu: &mut Cpu<B>, pair: RegPair) -> Result<(), ExecutionError> {
    let value = cpu.state.pair(pair).wrapping_sub(1);
    cpu.state.set_pair(pair, value);
    Ok(())
}
