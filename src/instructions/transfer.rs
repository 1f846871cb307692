//! # Register Transfer Operations
//!
//! - MOV dst,src: Copy between registers, or between a register and M
//! - XCHG: Swap HL and DE
//!
//! `MOV M,M` is not an instruction; its encoding (0x76) is HLT. No flags are affected.

use crate::opcodes::Reg;
use crate::{Bus, Cpu, ExecutionError};

pub(crate) fn execute_mov<B: Bus>(cpu: &mut Cpu<B>, dst: Reg, src: Reg) -> Result<(), ExecutionError> {
    let value = cpu.read_reg(src)?;
    cpu.write_reg(dst, value)
}

pub(crate) fn execute_xchg<B: Bus>(cpu: &mut Cpu<B>) -> Result<(), ExecutionError> {
    let state = &mut cpu.state;
    std::mem::swap(&mut state.h, &mut state.d);
    std::mem::swap(&mut state.l, &mut state.e);
    Ok(())
}
