//! # Instruction Decoder
//!
//! Turns the bytes at an address into a fully resolved [`Instruction`]. The engine
//! decodes through this module before every execute, and the disassembler decodes
//! through it for every listing line, so both always agree on length, mnemonic,
//! operands and timing.
//!
//! The decoder only reads memory through [`MemoryView`]; it never touches ports
//! and never mutates anything.

use crate::addressing::AddressingMode;
use crate::memory::MemoryView;
use crate::opcodes::{decode_meta, FlagEffect, OpcodeMetadata, Operation};

/// A decoded instruction.
///
/// Ephemeral: produced by [`decode`] and never stored by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// Memory address where this instruction starts
    pub address: u16,

    /// The opcode byte value (0x00-0xFF)
    pub opcode: u8,

    /// Instruction mnemonic (e.g. "MVI A", "JMP", "MOV B,C")
    pub mnemonic: &'static str,

    /// How the operand bytes are interpreted
    pub addressing_mode: AddressingMode,

    /// What the engine does for this instruction
    pub operation: Operation,

    /// Operand bytes in memory order; only the first `size_bytes - 1` are meaningful
    pub operand_bytes: [u8; 2],

    /// Total size in bytes (1-3 bytes: opcode + operands)
    pub size_bytes: u8,

    /// Cycle cost when no conditional branch is taken
    pub base_cycles: u8,

    /// Extra cycles if a conditional CALL/RET is taken
    pub taken_penalty: u8,

    /// Flags written by this instruction
    pub flags: FlagEffect,

    /// Opcode is an undocumented alias
    pub undocumented: bool,
}

impl Instruction {
    /// Builds an instruction from table metadata and the bytes that follow the opcode.
    pub fn from_meta(address: u16, opcode: u8, meta: &OpcodeMetadata, operand_bytes: [u8; 2]) -> Self {
        Self {
            address,
            opcode,
            mnemonic: meta.mnemonic,
            addressing_mode: meta.addressing_mode,
            operation: meta.operation,
            operand_bytes,
            size_bytes: meta.size_bytes,
            base_cycles: meta.base_cycles,
            taken_penalty: meta.taken_penalty,
            flags: meta.flags,
            undocumented: meta.undocumented,
        }
    }

    /// The meaningful operand bytes (0-2).
    pub fn operands(&self) -> &[u8] {
        &self.operand_bytes[..(self.size_bytes as usize - 1)]
    }

    /// 8-bit operand (immediate or port number).
    #[inline]
    pub fn imm8(&self) -> u8 {
        self.operand_bytes[0]
    }

    /// 16-bit operand (immediate or address), assembled little-endian.
    #[inline]
    pub fn imm16(&self) -> u16 {
        u16::from_le_bytes(self.operand_bytes)
    }

    /// Address of the instruction that follows this one, wrapping at 0xFFFF.
    #[inline]
    pub fn next_address(&self) -> u16 {
        self.address.wrapping_add(self.size_bytes as u16)
    }
}

/// Decodes the instruction starting at `address`.
///
/// Reads 1-3 bytes through `view`; operand addresses wrap at 0xFFFF. Returns the
/// instruction and the address of the next one.
///
/// # Examples
///
/// ```
/// use lib8080::decode;
///
/// let program: &[u8] = &[0x3E, 0x05, 0xC6, 0x03];
/// let (mvi, next) = decode(program, 0x0000);
/// assert_eq!(mvi.mnemonic, "MVI A");
/// assert_eq!(mvi.imm8(), 0x05);
/// assert_eq!(next, 0x0002);
///
/// let (adi, _) = decode(program, next);
/// assert_eq!(adi.mnemonic, "ADI");
/// ```
pub fn decode<V: MemoryView + ?Sized>(view: &V, address: u16) -> (Instruction, u16) {
    let opcode = view.read_byte(address);
    let meta = decode_meta(opcode);

    let mut operand_bytes = [0u8; 2];
    for (i, byte) in operand_bytes
        .iter_mut()
        .take(meta.addressing_mode.operand_len() as usize)
        .enumerate()
    {
        *byte = view.read_byte(address.wrapping_add(1 + i as u16));
    }

    let instruction = Instruction::from_meta(address, opcode, meta, operand_bytes);
    (instruction, instruction.next_address())
}
