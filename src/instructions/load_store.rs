//! # Load and Store Instructions
//!
//! This module implements data movement between registers and memory:
//! - MVI: Move immediate to register or M
//! - LXI: Load 16-bit immediate into a register pair
//! - LDA / STA: Accumulator to/from a direct address
//! - LHLD / SHLD: HL to/from a direct address (L at the address, H at address + 1)
//! - LDAX / STAX: Accumulator to/from the address in BC or DE
//!
//! None of these instructions affect flags.

use crate::opcodes::{Reg, RegPair};
use crate::{Bus, Cpu, ExecutionError};

pub(crate) fn execute_mvi<B: Bus>(cpu: &mut Cpu<B>, reg: Reg, value: u8) -> Result<(), ExecutionError> {
    cpu.write_reg(reg, value)
}

pub(crate) fn execute_lxi<B: Bus>(
    cpu: &mut Cpu<B>,
    pair: RegPair,
    value: u16,
) -> Result<(), ExecutionError> {
    cpu.state.set_pair(pair, value);
    Ok(())
}

pub(crate) fn execute_lda<B: Bus>(cpu: &mut Cpu<B>, addr: u16) -> Result<(), ExecutionError> {
    cpu.state.a = cpu.read(addr)?;
    Ok(())
}

pub(crate) fn execute_sta<B: Bus>(cpu: &mut Cpu<B>, addr: u16) -> Result<(), ExecutionError> {
    cpu.write(addr, cpu.state.a)
}

pub(crate) fn execute_lhld<B: Bus>(cpu: &mut Cpu<B>, addr: u16) -> Result<(), ExecutionError> {
    let value = cpu.read_word(addr)?;
    cpu.state.set_pair(RegPair::HL, value);
    Ok(())
}

pub(crate) fn execute_shld<B: Bus>(cpu: &mut Cpu<B>, addr: u16) -> Result<(), ExecutionError> {
    cpu.write_word(addr, cpu.state.hl())
}

pub(crate) fn execute_ldax<B: Bus>(cpu: &mut Cpu<B>, pair: RegPair) -> Result<(), ExecutionError> {
    cpu.state.a = cpu.read(cpu.state.pair(pair))?;
    Ok(())
}

pub(crate) fn execute_stax<B: Bus>(cpu: &mut Cpu<B>, pair: RegPair) -> Result<(), ExecutionError> {
    cpu.write(cpu.state.pair(pair), cpu.state.a)
}
