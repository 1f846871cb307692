//! # Addressing Modes
//!
//! This module defines how the 8080 fetches the operand bytes that follow an
//! opcode. Register operands are encoded in the opcode itself, so the only
//! distinction that matters for fetching is how many bytes follow and how
//! they are interpreted.

/// 8080 operand-fetch rule.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implied
/// - **1 byte**: Immediate8, Port
/// - **2 bytes**: Immediate16, Direct
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand bytes. Registers, if any, are encoded in the opcode.
    ///
    /// Examples: NOP, MOV B,C, ADD M, RST 1
    Implied,

    /// 8-bit constant operand.
    ///
    /// Example: MVI A,05 (load 0x05 into the accumulator)
    Immediate8,

    /// 16-bit constant operand, stored little-endian.
    ///
    /// Example: LXI H,2400 (load 0x2400 into the HL pair)
    Immediate16,

    /// 16-bit memory address, stored little-endian.
    ///
    /// Examples: STA 2000, JMP 0100, CALL 18DC
    Direct,

    /// 8-bit I/O port number.
    ///
    /// Examples: IN 01, OUT 03
    Port,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_len(self) -> u8 {
        match self {
            AddressingMode::Implied => 0,
            AddressingMode::Immediate8 | AddressingMode::Port => 1,
            AddressingMode::Immediate16 | AddressingMode::Direct => 2,
        }
    }
}
