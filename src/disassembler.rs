//! 8080 Disassembler Module
//!
//! Converts a memory snapshot into human-readable listing lines. Decoding goes
//! through [`crate::decoder::decode`], the same path the engine uses, so a listing
//! always shows exactly what the CPU would execute.
//!
//! The disassembler works on a caller-supplied byte slice indexed by absolute
//! address and never sees live CPU state.

pub mod formatter;

use std::fmt;

use crate::addressing::AddressingMode;
use crate::decoder::{decode, Instruction};
use crate::memory::MemoryView;
use crate::opcodes::{FlagEffect, Operation};

pub use formatter::{format_instruction, format_line};

/// Mnemonic used for bytes that cannot be decoded as a whole instruction.
pub const DATA_DIRECTIVE: &str = "DB";

/// Options controlling disassembly output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisassemblyOptions {
    /// Whether to include the raw instruction bytes between address and mnemonic
    pub hex_dump: bool,
}

/// One line of a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingLine {
    /// Address of the first byte of the instruction
    pub address: u16,

    /// The decoded instruction (a one-byte `DB` entry for truncated instructions)
    pub instruction: Instruction,

    /// Mnemonic and operands, e.g. `MVI A,05`
    pub text: String,
}

impl ListingLine {
    /// Renders the line with the given options (see [`format_line`]).
    pub fn render(&self, options: &DisassemblyOptions) -> String {
        format_line(&self.instruction, options)
    }
}

impl fmt::Display for ListingLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04X}: {}", self.address, self.text)
    }
}

/// Lazy iterator over the listing lines of a memory range.
///
/// Cloning the iterator restarts from the clone point; the snapshot itself is
/// only borrowed.
#[derive(Debug, Clone)]
pub struct Disassembly<'a> {
    memory: &'a [u8],
    address: u16,
    remaining: usize,
}

impl<'a> Iterator for Disassembly<'a> {
    type Item = ListingLine;

    fn next(&mut self) -> Option<Self::Item> {
        let address = self.address;
        if self.remaining == 0 || address as usize >= self.memory.len() {
            return None;
        }

        let (decoded, _) = decode(self.memory, address);

        // Operands cut off by the end of the snapshot. Addresses wrap at 0xFFFF
        // exactly as they do for the engine's fetch.
        let truncated = (0..decoded.size_bytes as u16)
            .any(|offset| !self.memory.is_mapped(address.wrapping_add(offset)));
        let instruction = if truncated {
            data_byte(address, decoded.opcode)
        } else {
            decoded
        };

        let size = instruction.size_bytes as usize;
        self.address = instruction.next_address();
        self.remaining = self.remaining.saturating_sub(size);

        Some(ListingLine {
            address,
            instruction,
            text: format_instruction(&instruction),
        })
    }
}

fn data_byte(address: u16, byte: u8) -> Instruction {
    Instruction {
        address,
        opcode: byte,
        mnemonic: DATA_DIRECTIVE,
        addressing_mode: AddressingMode::Implied,
        operation: Operation::Nop,
        operand_bytes: [0, 0],
        size_bytes: 1,
        base_cycles: 0,
        taken_penalty: 0,
        flags: FlagEffect::None,
        undocumented: false,
    }
}

/// Disassembles `length` bytes of `memory` starting at `start`.
///
/// `memory[addr]` is the byte at address `addr`. An instruction that starts inside
/// the range is listed whole even if its operands run past `length`; one whose
/// operands run past the end of `memory` is listed as `DB xx`. With a full
/// 64 KiB snapshot operand addresses wrap from 0xFFFF to 0x0000, as they do
/// when the CPU executes.
///
/// # Examples
///
/// ```
/// use lib8080::disassemble;
///
/// let memory = [0x00, 0x00, 0xC3, 0x00, 0x01];
/// let lines: Vec<String> = disassemble(&memory, 0x0002, 3)
///     .map(|line| line.to_string())
///     .collect();
///
/// assert_eq!(lines, ["0002: JMP 0100"]);
/// ```
pub fn disassemble(memory: &[u8], start: u16, length: usize) -> Disassembly<'_> {
    Disassembly {
        memory,
        address: start,
        remaining: length,
    }
}
