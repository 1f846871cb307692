//! # Rotate Instructions
//!
//! The 8080 only rotates the accumulator, and every rotate affects Carry alone:
//! - RLC: Rotate left, bit 7 into bit 0 and CY
//! - RRC: Rotate right, bit 0 into bit 7 and CY
//! - RAL: Rotate left through carry
//! - RAR: Rotate right through carry

use crate::{Bus, Cpu, ExecutionError};

pub(crate) fn execute_rlc<B: Bus>(cpu: &mut Cpu<B>) -> Result<(), ExecutionError> {
    let a = cpu.state.a;
    cpu.state.flags.cy = a & 0x80 != 0;
    cpu.state.a = a.rotate_left(1);
    Ok(())
}

pub(crate) fn execute_rrc<B: Bus>(cpu: &mut Cpu<B>) -> Result<(), ExecutionError> {
    let a = cpu.state.a;
    cpu.state.flags.cy = a & 0x01 != 0;
    cpu.state.a = a.rotate_right(1);
    Ok(())
}

pub(crate) fn execute_ral<B: Bus>(cpu: &mut Cpu<B>) -> Result<(), ExecutionError> {
    let a = cpu.state.a;
    let carry_in = cpu.state.flags.cy as u8;
    cpu.state.flags.cy = a & 0x80 != 0;
    cpu.state.a = (a << 1) | carry_in;
    Ok(())
}

pub(crate) fn execute_rar<B: Bus>(cpu: &mut Cpu<B>) -> Result<(), ExecutionError> {
    let a = cpu.state.a;
    let carry_in = cpu.state.flags.cy as u8;
    cpu.state.flags.cy = a & 0x01 != 0;
    cpu.state.a = (a >> 1) | (carry_in << 7);
    Ok(())
}
