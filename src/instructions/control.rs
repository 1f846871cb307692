//! # Control Flow Instructions
//!
//! This module implements subroutine and processor control:
//! - CALL / Ccc: Push the return address and jump
//! - RET / Rcc: Pop the return address
//! - RST n: One-byte call to address n * 8
//! - HLT: Stop fetching until an interrupt arrives
//!
//! A taken conditional CALL or RET costs 6 cycles more than one that falls
//! through; the penalty comes from the instruction's table entry.

use tracing::debug;

use crate::decoder::Instruction;
use crate::opcodes::Condition;
use crate::{Bus, Cpu, ExecutionError};

/// Executes CALL. The return address is the instruction after the CALL.
pub(crate) fn execute_call<B: Bus>(cpu: &mut Cpu<B>, target: u16) -> Result<(), ExecutionError> {
    cpu.push(cpu.state.pc)?;
    cpu.state.pc = target;
    Ok(())
}

pub(crate) fn execute_call_if<B: Bus>(
    cpu: &mut Cpu<B>,
    condition: Condition,
    instr: &Instruction,
) -> Result<(), ExecutionError> {
    if cpu.state.flags.test(condition) {
        execute_call(cpu, instr.imm16())?;
        cpu.cycles += instr.taken_penalty as u64;
    }
    Ok(())
}

pub(crate) fn execute_ret<B: Bus>(cpu: &mut Cpu<B>) -> Result<(), ExecutionError> {
    cpu.state.pc = cpu.pop()?;
    Ok(())
}

pub(crate) fn execute_ret_if<B: Bus>(
    cpu: &mut Cpu<B>,
    condition: Condition,
    instr: &Instruction,
) -> Result<(), ExecutionError> {
    if cpu.state.flags.test(condition) {
        execute_ret(cpu)?;
        cpu.cycles += instr.taken_penalty as u64;
    }
    Ok(())
}

/// Executes RST n (Restart): a call to `n * 8`.
pub(crate) fn execute_rst<B: Bus>(cpu: &mut Cpu<B>, n: u8) -> Result<(), ExecutionError> {
    execute_call(cpu, (n as u16 & 0x07) * 8)
}

/// Executes HLT. PC stays after the HLT so an interrupt returns past it.
pub(crate) fn execute_hlt<B: Bus>(cpu: &mut Cpu<B>) -> Result<(), ExecutionError> {
    debug!(pc = cpu.state.pc, inte = cpu.state.inte, "halted");
    cpu.state.halted = true;
    Ok(())
}
