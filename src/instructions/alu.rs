//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements accumulator arithmetic and logic:
//! - ADD/ADC/SUB/SBB/ANA/XRA/ORA/CMP and their immediate forms
//! - DAA: Decimal Adjust Accumulator
//! - CMA: Complement Accumulator
//! - DAD: 16-bit add into HL
//!
//! ## Flag Rules
//!
//! - Subtraction is performed as `A + !operand + !borrow`. Carry is the inverse of
//!   the carry out of that addition (a borrow), while Auxiliary-Carry is the carry
//!   out of bit 3 of the same addition, uninverted.
//! - ANA clears Carry and sets Auxiliary-Carry to bit 3 of `A | operand`.
//! - XRA and ORA clear both Carry and Auxiliary-Carry.

use crate::opcodes::{AluOp, RegPair};
use crate::state::Flags;
use crate::{Bus, Cpu, ExecutionError};

/// 8-bit addition with carry in. Writes all five flags.
pub(crate) fn add(flags: &mut Flags, a: u8, value: u8, carry_in: bool) -> u8 {
    let sum = a as u16 + value as u16 + carry_in as u16;
    let result = sum as u8;

    flags.set_szp(result);
    flags.cy = sum > 0xFF;
    flags.ac = (a & 0x0F) + (value & 0x0F) + carry_in as u8 > 0x0F;

    result
}

/// 8-bit subtraction with borrow in. Writes all five flags.
pub(crate) fn sub(flags: &mut Flags, a: u8, value: u8, borrow_in: bool) -> u8 {
    let result = add(flags, a, !value, !borrow_in);
    flags.cy = !flags.cy;
    result
}

pub(crate) fn and(flags: &mut Flags, a: u8, value: u8) -> u8 {
    let result = a & value;
    flags.set_szp(result);
    flags.cy = false;
    flags.ac = (a | value) & 0x08 != 0;
    result
}

pub(crate) fn xor(flags: &mut Flags, a: u8, value: u8) -> u8 {
    let result = a ^ value;
    flags.set_szp(result);
    flags.cy = false;
    flags.ac = false;
    result
}

pub(crate) fn or(flags: &mut Flags, a: u8, value: u8) -> u8 {
    let result = a | value;
    flags.set_szp(result);
    flags.cy = false;
    flags.ac = false;
    result
}

/// Executes an accumulator operation with an already-fetched operand.
///
/// CMP updates the flags exactly like SUB but leaves the accumulator unchanged.
pub(crate) fn execute_alu<B: Bus>(cpu: &mut Cpu<B>, op: AluOp, value: u8) {
    let a = cpu.state.a;
    let carry = cpu.state.flags.cy;
    let flags = &mut cpu.state.flags;

    let result = match op {
        AluOp::Add => add(flags, a, value, false),
        AluOp::Adc => add(flags, a, value, carry),
        AluOp::Sub => sub(flags, a, value, false),
        AluOp::Sbb => sub(flags, a, value, carry),
        AluOp::Ana => and(flags, a, value),
        AluOp::Xra => xor(flags, a, value),
        AluOp::Ora => or(flags, a, value),
        AluOp::Cmp => {
            sub(flags, a, value, false);
            a
        }
    };

    cpu.state.a = result;
}

/// Executes DAA (Decimal Adjust Accumulator).
///
/// Corrects the accumulator after a BCD addition: adds 0x06 if the low nibble is
/// above 9 or AC is set, and 0x60 if the high nibble (after the low correction
/// would carry into it) is above 9 or CY is set. CY is only ever set by DAA, never
/// cleared.
pub(crate) fn execute_daa<B: Bus>(cpu: &mut Cpu<B>) -> Result<(), ExecutionError> {
    let a = cpu.state.a;
    let flags = &mut cpu.state.flags;

    let lsb = a & 0x0F;
    let msb = a >> 4;
    let mut correction = 0u8;
    let mut carry = flags.cy;

    if flags.ac || lsb > 9 {
        correction |= 0x06;
    }
    if flags.cy || msb > 9 || (msb >= 9 && lsb > 9) {
        correction |= 0x60;
        carry = true;
    }

    cpu.state.a = add(flags, a, correction, false);
    flags.cy = carry;

    Ok(())
}

/// Executes CMA (Complement Accumulator). No flags are affected.
pub(crate) fn execute_cma<B: Bus>(cpu: &mut Cpu<B>) -> Result<(), ExecutionError> {
    cpu.state.a = !cpu.state.a;
    Ok(())
}

/// Executes DAD (Double Add): HL = HL + pair. Only Carry is affected.
pub(crate) fn execute_dad<B: Bus>(cpu: &mut Cpu<B>, pair: RegPair) -> Result<(), ExecutionError> {
    let sum = cpu.state.hl() as u32 + cpu.state.pair(pair) as u32;

    cpu.state.flags.cy = sum > 0xFFFF;
    cpu.state.set_pair(RegPair::HL, sum as u16);

    Ok(())
}
