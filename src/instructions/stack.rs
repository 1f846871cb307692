//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PUSH rp: Decrement SP by two, store the pair (high byte at SP+1)
//! - POP rp: Load the pair from SP, increment SP by two
//! - XTHL: Exchange HL with the word at the top of the stack
//! - SPHL: Load SP from HL
//!
//! The 8080 stack can live anywhere in memory and grows downward. SP wraps modulo
//! 2^16; running off either end is not an error.
//!
//! `PUSH PSW` stores the accumulator and the packed flag byte (`S Z 0 AC 0 P 1 CY`).
//! `POP PSW` restores the five flags and ignores the reserved bits.

use crate::opcodes::RegPair;
use crate::{Bus, Cpu, ExecutionError};

pub(crate) fn execute_push<B: Bus>(cpu: &mut Cpu<B>, pair: RegPair) -> Result<(), ExecutionError> {
    cpu.push(cpu.state.pair(pair))
}

pub(crate) fn execute_pop<B: Bus>(cpu: &mut Cpu<B>, pair: RegPair) -> Result<(), ExecutionError> {
    let value = cpu.pop()?;
    cpu.state.set_pair(pair, value);
    Ok(())
}

pub(crate) fn execute_xthl<B: Bus>(cpu: &mut Cpu<B>) -> Result<(), ExecutionError> {
    let sp = cpu.state.sp;
    let top = cpu.read_word(sp)?;

    cpu.write_word(sp, cpu.state.hl())?;
    cpu.state.set_pair(RegPair::HL, top);

    Ok(())
}

pub(crate) fn execute_sphl<B: Bus>(cpu: &mut Cpu<B>) -> Result<(), ExecutionError> {
    cpu.state.sp = cpu.state.hl();
    Ok(())
}
