//! # Jump Instructions
//!
//! This module implements jumps:
//! - JMP: Unconditional jump to a 16-bit address
//! - Jcc: Conditional jump (JNZ, JZ, JNC, JC, JPO, JPE, JP, JM)
//! - PCHL: Jump to the address in HL
//!
//! Unlike conditional CALL and RET, a conditional jump costs 10 cycles whether or
//! not it is taken. PC already points past the instruction, so a jump that is not
//! taken needs no further work.

use crate::opcodes::Condition;
use crate::{Bus, Cpu, ExecutionError};

pub(crate) fn execute_jmp<B: Bus>(cpu: &mut Cpu<B>, target: u16) -> Result<(), ExecutionError> {
    cpu.state.pc = target;
    Ok(())
}

pub(crate) fn execute_jmp_if<B: Bus>(
    cpu: &mut Cpu<B>,
    condition: Condition,
    target: u16,
) -> Result<(), ExecutionError> {
    if cpu.state.flags.test(condition) {
        cpu.state.pc = target;
    }
    Ok(())
}

pub(crate) fn execute_pchl<B: Bus>(cpu: &mut Cpu<B>) -> Result<(), ExecutionError> {
    cpu.state.pc = cpu.state.hl();
    Ok(())
}
