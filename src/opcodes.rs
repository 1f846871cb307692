//! # Opcode Metadata Table
//!
//! This module contains the complete 256-entry opcode metadata table that serves as the
//! single source of truth for all 8080 instruction information. The decoder, the
//! execution engine and the disassembler all read from this one table; nothing else in
//! the crate maps opcode values to behavior.
//!
//! The table covers:
//! - **244 documented instructions** - Official Intel 8080 opcodes
//! - **12 undocumented opcodes** - Silicon aliases of NOP, JMP, RET and CALL,
//!   flagged with `undocumented: true`
//!
//! Each opcode entry includes:
//! - Mnemonic, including any register operands encoded in the opcode
//! - Addressing mode (how many operand bytes follow and what they mean)
//! - The [`Operation`] the engine executes
//! - Base cycle cost and the extra cost of a taken conditional CALL/RET
//! - Which flags the instruction writes

use crate::addressing::AddressingMode;
use crate::addressing::AddressingMode::*;

/// 8-bit register operand as encoded in an opcode's 3-bit register field.
///
/// `M` is the memory byte addressed by the HL pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reg {
    B,
    C,
    D,
    E,
    H,
    L,
    M,
    A,
}

/// 16-bit register pair operand.
///
/// `SP` and `PSW` share an encoding slot; which one an opcode means depends on the
/// instruction (PUSH/POP use `PSW`, everything else uses `SP`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegPair {
    BC,
    DE,
    HL,
    SP,
    /// Accumulator (high byte) and flag byte (low byte).
    PSW,
}

/// Branch condition tested by conditional jump, call and return instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    NotZero,
    Zero,
    NoCarry,
    Carry,
    ParityOdd,
    ParityEven,
    Plus,
    Minus,
}

/// Accumulator operation shared by the register (`ADD r`) and immediate (`ADI`) forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AluOp {
    Add,
    Adc,
    Sub,
    Sbb,
    Ana,
    Xra,
    Ora,
    Cmp,
}

/// Which status flags an instruction writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagEffect {
    /// Flags are left untouched.
    None,
    /// Sign, Zero, Auxiliary-Carry, Parity and Carry are all recomputed.
    All,
    /// Everything except Carry (INR/DCR).
    AllButCarry,
    /// Only Carry (DAD, rotates, STC, CMC).
    CarryOnly,
    /// All five flags are reloaded from the stack (POP PSW).
    Restore,
}

/// The operation an opcode performs, with register operands already resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Nop,
    Hlt,
    Lxi(RegPair),
    Stax(RegPair),
    Ldax(RegPair),
    Inx(RegPair),
    Dcx(RegPair),
    Dad(RegPair),
    Inr(Reg),
    Dcr(Reg),
    Mvi(Reg),
    /// MOV destination, source
    Mov(Reg, Reg),
    Rlc,
    Rrc,
    Ral,
    Rar,
    Daa,
    Cma,
    Stc,
    Cmc,
    Shld,
    Lhld,
    Sta,
    Lda,
    Alu(AluOp, Reg),
    AluImm(AluOp),
    Jmp,
    JmpIf(Condition),
    Call,
    CallIf(Condition),
    Ret,
    RetIf(Condition),
    /// RST n, jumps to n * 8
    Rst(u8),
    Pchl,
    Push(RegPair),
    Pop(RegPair),
    Xthl,
    Sphl,
    Xchg,
    In,
    Out,
    Di,
    Ei,
}

/// Metadata for a single 8080 opcode.
///
/// # Examples
///
/// ```
/// use lib8080::{decode_meta, AddressingMode};
///
/// // Look up MVI A (opcode 0x3E)
/// let mvi_a = decode_meta(0x3E);
/// assert_eq!(mvi_a.mnemonic, "MVI A");
/// assert_eq!(mvi_a.addressing_mode, AddressingMode::Immediate8);
/// assert_eq!(mvi_a.base_cycles, 7);
/// assert_eq!(mvi_a.size_bytes, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic with register operands (e.g. "MOV B,C", "LXI H", "JMP").
    pub mnemonic: &'static str,

    /// How the operand bytes following the opcode are interpreted.
    pub addressing_mode: AddressingMode,

    /// What the engine does when executing this opcode.
    pub operation: Operation,

    /// Cycle cost when no conditional branch is taken.
    pub base_cycles: u8,

    /// Extra cycles charged when a conditional CALL or RET is taken.
    ///
    /// Conditional jumps cost the same either way, so this is 0 for them.
    pub taken_penalty: u8,

    /// Total instruction size in bytes (opcode + operands), 1-3.
    pub size_bytes: u8,

    /// Flags written by this instruction.
    pub flags: FlagEffect,

    /// True for opcodes Intel left undefined. They still decode to the
    /// operation the silicon performs for them.
    pub undocumented: bool,
}

const fn entry(
    mnemonic: &'static str,
    addressing_mode: AddressingMode,
    base_cycles: u8,
    operation: Operation,
    flags: FlagEffect,
) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        addressing_mode,
        operation,
        base_cycles,
        taken_penalty: 0,
        size_bytes: 1 + addressing_mode.operand_len(),
        flags,
        undocumented: false,
    }
}

const fn conditional(
    mnemonic: &'static str,
    addressing_mode: AddressingMode,
    base_cycles: u8,
    taken_penalty: u8,
    operation: Operation,
) -> OpcodeMetadata {
    OpcodeMetadata {
        taken_penalty,
        ..entry(mnemonic, addressing_mode, base_cycles, operation, FlagEffect::None)
    }
}

const fn undocumented(
    mnemonic: &'static str,
    addressing_mode: AddressingMode,
    base_cycles: u8,
    operation: Operation,
) -> OpcodeMetadata {
    OpcodeMetadata {
        undocumented: true,
        ..entry(mnemonic, addressing_mode, base_cycles, operation, FlagEffect::None)
    }
}

/// Looks up the metadata for an opcode.
///
/// Total over all 256 values; undocumented opcodes return their alias entry.
#[inline]
pub fn decode_meta(opcode: u8) -> &'static OpcodeMetadata {
    &OPCODE_TABLE[opcode as usize]
}

/// Complete 256-entry opcode metadata table indexed by opcode byte value.
///
/// # Examples
///
/// ```
/// use lib8080::{Operation, OPCODE_TABLE};
///
/// let hlt = &OPCODE_TABLE[0x76];
/// assert_eq!(hlt.mnemonic, "HLT");
/// assert_eq!(hlt.operation, Operation::Hlt);
///
/// // 0xCB is an undocumented alias of JMP
/// let alias = &OPCODE_TABLE[0xCB];
/// assert!(alias.undocumented);
/// assert_eq!(alias.operation, Operation::Jmp);
/// ```
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = [
    /* 0x00 */ entry("NOP", Implied, 4, Operation::Nop, FlagEffect::None),
    /* 0x01 */ entry("LXI B", Immediate16, 10, Operation::Lxi(RegPair::BC), FlagEffect::None),
    /* 0x02 */ entry("STAX B", Implied, 7, Operation::Stax(RegPair::BC), FlagEffect::None),
    /* 0x03 */ entry("INX B", Implied, 5, Operation::Inx(RegPair::BC), FlagEffect::None),
    /* 0x04 */ entry("INR B", Implied, 5, Operation::Inr(Reg::B), FlagEffect::AllButCarry),
    /* 0x05 */ entry("DCR B", Implied, 5, Operation::Dcr(Reg::B), FlagEffect::AllButCarry),
    /* 0x06 */ entry("MVI B", Immediate8, 7, Operation::Mvi(Reg::B), FlagEffect::None),
    /* 0x07 */ entry("RLC", Implied, 4, Operation::Rlc, FlagEffect::CarryOnly),
    /* 0x08 */ undocumented("NOP", Implied, 4, Operation::Nop),
    /* 0x09 */ entry("DAD B", Implied, 10, Operation::Dad(RegPair::BC), FlagEffect::CarryOnly),
    /* 0x0A */ entry("LDAX B", Implied, 7, Operation::Ldax(RegPair::BC), FlagEffect::None),
    /* 0x0B */ entry("DCX B", Implied, 5, Operation::Dcx(RegPair::BC), FlagEffect::None),
    /* 0x0C */ entry("INR C", Implied, 5, Operation::Inr(Reg::C), FlagEffect::AllButCarry),
    /* 0x0D */ entry("DCR C", Implied, 5, Operation::Dcr(Reg::C), FlagEffect::AllButCarry),
    /* 0x0E */ entry("MVI C", Immediate8, 7, Operation::Mvi(Reg::C), FlagEffect::None),
    /* 0x0F */ entry("RRC", Implied, 4, Operation::Rrc, FlagEffect::CarryOnly),
    /* 0x10 */ undocumented("NOP", Implied, 4, Operation::Nop),
    /* 0x11 */ entry("LXI D", Immediate16, 10, Operation::Lxi(RegPair::DE), FlagEffect::None),
    /* 0x12 */ entry("STAX D", Implied, 7, Operation::Stax(RegPair::DE), FlagEffect::None),
    /* 0x13 */ entry("INX D", Implied, 5, Operation::Inx(RegPair::DE), FlagEffect::None),
    /* 0x14 */ entry("INR D", Implied, 5, Operation::Inr(Reg::D), FlagEffect::AllButCarry),
    /* 0x15 */ entry("DCR D", Implied, 5, Operation::Dcr(Reg::D), FlagEffect::AllButCarry),
    /* 0x16 */ entry("MVI D", Immediate8, 7, Operation::Mvi(Reg::D), FlagEffect::None),
    /* 0x17 */ entry("RAL", Implied, 4, Operation::Ral, FlagEffect::CarryOnly),
    /* 0x18 */ undocumented("NOP", Implied, 4, Operation::Nop),
    /* 0x19 */ entry("DAD D", Implied, 10, Operation::Dad(RegPair::DE), FlagEffect::CarryOnly),
    /* 0x1A */ entry("LDAX D", Implied, 7, Operation::Ldax(RegPair::DE), FlagEffect::None),
    /* 0x1B */ entry("DCX D", Implied, 5, Operation::Dcx(RegPair::DE), FlagEffect::None),
    /* 0x1C */ entry("INR E", Implied, 5, Operation::Inr(Reg::E), FlagEffect::AllButCarry),
    /* 0x1D */ entry("DCR E", Implied, 5, Operation::Dcr(Reg::E), FlagEffect::AllButCarry),
    /* 0x1E */ entry("MVI E", Immediate8, 7, Operation::Mvi(Reg::E), FlagEffect::None),
    /* 0x1F */ entry("RAR", Implied, 4, Operation::Rar, FlagEffect::CarryOnly),
    /* 0x20 */ undocumented("NOP", Implied, 4, Operation::Nop),
    /* 0x21 */ entry("LXI H", Immediate16, 10, Operation::Lxi(RegPair::HL), FlagEffect::None),
    /* 0x22 */ entry("SHLD", Direct, 16, Operation::Shld, FlagEffect::None),
    /* 0x23 */ entry("INX H", Implied, 5, Operation::Inx(RegPair::HL), FlagEffect::None),
    /* 0x24 */ entry("INR H", Implied, 5, Operation::Inr(Reg::H), FlagEffect::AllButCarry),
    /* 0x25 */ entry("DCR H", Implied, 5, Operation::Dcr(Reg::H), FlagEffect::AllButCarry),
    /* 0x26 */ entry("MVI H", Immediate8, 7, Operation::Mvi(Reg::H), FlagEffect::None),
    /* 0x27 */ entry("DAA", Implied, 4, Operation::Daa, FlagEffect::All),
    /* 0x28 */ undocumented("NOP", Implied, 4, Operation::Nop),
    /* 0x29 */ entry("DAD H", Implied, 10, Operation::Dad(RegPair::HL), FlagEffect::CarryOnly),
    /* 0x2A */ entry("LHLD", Direct, 16, Operation::Lhld, FlagEffect::None),
    /* 0x2B */ entry("DCX H", Implied, 5, Operation::Dcx(RegPair::HL), FlagEffect::None),
    /* 0x2C */ entry("INR L", Implied, 5, Operation::Inr(Reg::L), FlagEffect::AllButCarry),
    /* 0x2D */ entry("DCR L", Implied, 5, Operation::Dcr(Reg::L), FlagEffect::AllButCarry),
    /* 0x2E */ entry("MVI L", Immediate8, 7, Operation::Mvi(Reg::L), FlagEffect::None),
    /* 0x2F */ entry("CMA", Implied, 4, Operation::Cma, FlagEffect::None),
    /* 0x30 */ undocumented("NOP", Implied, 4, Operation::Nop),
    /* 0x31 */ entry("LXI SP", Immediate16, 10, Operation::Lxi(RegPair::SP), FlagEffect::None),
    /* 0x32 */ entry("STA", Direct, 13, Operation::Sta, FlagEffect::None),
    /* 0x33 */ entry("INX SP", Implied, 5, Operation::Inx(RegPair::SP), FlagEffect::None),
    /* 0x34 */ entry("INR M", Implied, 10, Operation::Inr(Reg::M), FlagEffect::AllButCarry),
    /* 0x35 */ entry("DCR M", Implied, 10, Operation::Dcr(Reg::M), FlagEffect::AllButCarry),
    /* 0x36 */ entry("MVI M", Immediate8, 10, Operation::Mvi(Reg::M), FlagEffect::None),
    /* 0x37 */ entry("STC", Implied, 4, Operation::Stc, FlagEffect::CarryOnly),
    /* 0x38 */ undocumented("NOP", Implied, 4, Operation::Nop),
    /* 0x39 */ entry("DAD SP", Implied, 10, Operation::Dad(RegPair::SP), FlagEffect::CarryOnly),
    /* 0x3A */ entry("LDA", Direct, 13, Operation::Lda, FlagEffect::None),
    /* 0x3B */ entry("DCX SP", Implied, 5, Operation::Dcx(RegPair::SP), FlagEffect::None),
    /* 0x3C */ entry("INR A", Implied, 5, Operation::Inr(Reg::A), FlagEffect::AllButCarry),
    /* 0x3D */ entry("DCR A", Implied, 5, Operation::Dcr(Reg::A), FlagEffect::AllButCarry),
    /* 0x3E */ entry("MVI A", Immediate8, 7, Operation::Mvi(Reg::A), FlagEffect::None),
    /* 0x3F */ entry("CMC", Implied, 4, Operation::Cmc, FlagEffect::CarryOnly),
    /* 0x40 */ entry("MOV B,B", Implied, 5, Operation::Mov(Reg::B, Reg::B), FlagEffect::None),
    /* 0x41 */ entry("MOV B,C", Implied, 5, Operation::Mov(Reg::B, Reg::C), FlagEffect::None),
    /* 0x42 */ entry("MOV B,D", Implied, 5, Operation::Mov(Reg::B, Reg::D), FlagEffect::None),
    /* 0x43 */ entry("MOV B,E", Implied, 5, Operation::Mov(Reg::B, Reg::E), FlagEffect::None),
    /* 0x44 */ entry("MOV B,H", Implied, 5, Operation::Mov(Reg::B, Reg::H), FlagEffect::None),
    /* 0x45 */ entry("MOV B,L", Implied, 5, Operation::Mov(Reg::B, Reg::L), FlagEffect::None),
    /* 0x46 */ entry("MOV B,M", Implied, 7, Operation::Mov(Reg::B, Reg::M), FlagEffect::None),
    /* 0x47 */ entry("MOV B,A", Implied, 5, Operation::Mov(Reg::B, Reg::A), FlagEffect::None),
    /* 0x48 */ entry("MOV C,B", Implied, 5, Operation::Mov(Reg::C, Reg::B), FlagEffect::None),
    /* 0x49 */ entry("MOV C,C", Implied, 5, Operation::Mov(Reg::C, Reg::C), FlagEffect::None),
    /* 0x4A */ entry("MOV C,D", Implied, 5, Operation::Mov(Reg::C, Reg::D), FlagEffect::None),
    /* 0x4B */ entry("MOV C,E", Implied, 5, Operation::Mov(Reg::C, Reg::E), FlagEffect::None),
    /* 0x4C */ entry("MOV C,H", Implied, 5, Operation::Mov(Reg::C, Reg::H), FlagEffect::None),
    /* 0x4D */ entry("MOV C,L", Implied, 5, Operation::Mov(Reg::C, Reg::L), FlagEffect::None),
    /* 0x4E */ entry("MOV C,M", Implied, 7, Operation::Mov(Reg::C, Reg::M), FlagEffect::None),
    /* 0x4F */ entry("MOV C,A", Implied, 5, Operation::Mov(Reg::C, Reg::A), FlagEffect::None),
    /* 0x50 */ entry("MOV D,B", Implied, 5, Operation::Mov(Reg::D, Reg::B), FlagEffect::None),
    /* 0x51 */ entry("MOV D,C", Implied, 5, Operation::Mov(Reg::D, Reg::C), FlagEffect::None),
    /* 0x52 */ entry("MOV D,D", Implied, 5, Operation::Mov(Reg::D, Reg::D), FlagEffect::None),
    /* 0x53 */ entry("MOV D,E", Implied, 5, Operation::Mov(Reg::D, Reg::E), FlagEffect::None),
    /* 0x54 */ entry("MOV D,H", Implied, 5, Operation::Mov(Reg::D, Reg::H), FlagEffect::None),
    /* 0x55 */ entry("MOV D,L", Implied, 5, Operation::Mov(Reg::D, Reg::L), FlagEffect::None),
    /* 0x56 */ entry("MOV D,M", Implied, 7, Operation::Mov(Reg::D, Reg::M), FlagEffect::None),
    /* 0x57 */ entry("MOV D,A", Implied, 5, Operation::Mov(Reg::D, Reg::A), FlagEffect::None),
    /* 0x58 */ entry("MOV E,B", Implied, 5, Operation::Mov(Reg::E, Reg::B), FlagEffect::None),
    /* 0x59 */ entry("MOV E,C", Implied, 5, Operation::Mov(Reg::E, Reg::C), FlagEffect::None),
    /* 0x5A */ entry("MOV E,D", Implied, 5, Operation::Mov(Reg::E, Reg::D), FlagEffect::None),
    /* 0x5B */ entry("MOV E,E", Implied, 5, Operation::Mov(Reg::E, Reg::E), FlagEffect::None),
    /* 0x5C */ entry("MOV E,H", Implied, 5, Operation::Mov(Reg::E, Reg::H), FlagEffect::None),
    /* 0x5D */ entry("MOV E,L", Implied, 5, Operation::Mov(Reg::E, Reg::L), FlagEffect::None),
    /* 0x5E */ entry("MOV E,M", Implied, 7, Operation::Mov(Reg::E, Reg::M), FlagEffect::None),
    /* 0x5F */ entry("MOV E,A", Implied, 5, Operation::Mov(Reg::E, Reg::A), FlagEffect::None),
    /* 0x60 */ entry("MOV H,B", Implied, 5, Operation::Mov(Reg::H, Reg::B), FlagEffect::None),
    /* 0x61 */ entry("MOV H,C", Implied, 5, Operation::Mov(Reg::H, Reg::C), FlagEffect::None),
    /* 0x62 */ entry("MOV H,D", Implied, 5, Operation::Mov(Reg::H, Reg::D), FlagEffect::None),
    /* 0x63 */ entry("MOV H,E", Implied, 5, Operation::Mov(Reg::H, Reg::E), FlagEffect::None),
    /* 0x64 */ entry("MOV H,H", Implied, 5, Operation::Mov(Reg::H, Reg::H), FlagEffect::None),
    /* 0x65 */ entry("MOV H,L", Implied, 5, Operation::Mov(Reg::H, Reg::L), FlagEffect::None),
    /* 0x66 */ entry("MOV H,M", Implied, 7, Operation::Mov(Reg::H, Reg::M), FlagEffect::None),
    /* 0x67 */ entry("MOV H,A", Implied, 5, Operation::Mov(Reg::H, Reg::A), FlagEffect::None),
    /* 0x68 */ entry("MOV L,B", Implied, 5, Operation::Mov(Reg::L, Reg::B), FlagEffect::None),
    /* 0x69 */ entry("MOV L,C", Implied, 5, Operation::Mov(Reg::L, Reg::C), FlagEffect::None),
    /* 0x6A */ entry("MOV L,D", Implied, 5, Operation::Mov(Reg::L, Reg::D), FlagEffect::None),
    /* 0x6B */ entry("MOV L,E", Implied, 5, Operation::Mov(Reg::L, Reg::E), FlagEffect::None),
    /* 0x6C */ entry("MOV L,H", Implied, 5, Operation::Mov(Reg::L, Reg::H), FlagEffect::None),
    /* 0x6D */ entry("MOV L,L", Implied, 5, Operation::Mov(Reg::L, Reg::L), FlagEffect::None),
    /* 0x6E */ entry("MOV L,M", Implied, 7, Operation::Mov(Reg::L, Reg::M), FlagEffect::None),
    /* 0x6F */ entry("MOV L,A", Implied, 5, Operation::Mov(Reg::L, Reg::A), FlagEffect::None),
    /* 0x70 */ entry("MOV M,B", Implied, 7, Operation::Mov(Reg::M, Reg::B), FlagEffect::None),
    /* 0x71 */ entry("MOV M,C", Implied, 7, Operation::Mov(Reg::M, Reg::C), FlagEffect::None),
    /* 0x72 */ entry("MOV M,D", Implied, 7, Operation::Mov(Reg::M, Reg::D), FlagEffect::None),
    /* 0x73 */ entry("MOV M,E", Implied, 7, Operation::Mov(Reg::M, Reg::E), FlagEffect::None),
    /* 0x74 */ entry("MOV M,H", Implied, 7, Operation::Mov(Reg::M, Reg::H), FlagEffect::None),
    /* 0x75 */ entry("MOV M,L", Implied, 7, Operation::Mov(Reg::M, Reg::L), FlagEffect::None),
    /* 0x76 */ entry("HLT", Implied, 7, Operation::Hlt, FlagEffect::None),
    /* 0x77 */ entry("MOV M,A", Implied, 7, Operation::Mov(Reg::M, Reg::A), FlagEffect::None),
    /* 0x78 */ entry("MOV A,B", Implied, 5, Operation::Mov(Reg::A, Reg::B), FlagEffect::None),
    /* 0x79 */ entry("MOV A,C", Implied, 5, Operation::Mov(Reg::A, Reg::C), FlagEffect::None),
    /* 0x7A */ entry("MOV A,D", Implied, 5, Operation::Mov(Reg::A, Reg::D), FlagEffect::None),
    /* 0x7B */ entry("MOV A,E", Implied, 5, Operation::Mov(Reg::A, Reg::E), FlagEffect::None),
    /* 0x7C */ entry("MOV A,H", Implied, 5, Operation::Mov(Reg::A, Reg::H), FlagEffect::None),
    /* 0x7D */ entry("MOV A,L", Implied, 5, Operation::Mov(Reg::A, Reg::L), FlagEffect::None),
    /* 0x7E */ entry("MOV A,M", Implied, 7, Operation::Mov(Reg::A, Reg::M), FlagEffect::None),
    /* 0x7F */ entry("MOV A,A", Implied, 5, Operation::Mov(Reg::A, Reg::A), FlagEffect::None),
    /* 0x80 */ entry("ADD B", Implied, 4, Operation::Alu(AluOp::Add, Reg::B), FlagEffect::All),
    /* 0x81 */ entry("ADD C", Implied, 4, Operation::Alu(AluOp::Add, Reg::C), FlagEffect::All),
    /* 0x82 */ entry("ADD D", Implied, 4, Operation::Alu(AluOp::Add, Reg::D), FlagEffect::All),
    /* 0x83 */ entry("ADD E", Implied, 4, Operation::Alu(AluOp::Add, Reg::E), FlagEffect::All),
    /* 0x84 */ entry("ADD H", Implied, 4, Operation::Alu(AluOp::Add, Reg::H), FlagEffect::All),
    /* 0x85 */ entry("ADD L", Implied, 4, Operation::Alu(AluOp::Add, Reg::L), FlagEffect::All),
    /* 0x86 */ entry("ADD M", Implied, 7, Operation::Alu(AluOp::Add, Reg::M), FlagEffect::All),
    /* 0x87 */ entry("ADD A", Implied, 4, Operation::Alu(AluOp::Add, Reg::A), FlagEffect::All),
    /* 0x88 */ entry("ADC B", Implied, 4, Operation::Alu(AluOp::Adc, Reg::B), FlagEffect::All),
    /* 0x89 */ entry("ADC C", Implied, 4, Operation::Alu(AluOp::Adc, Reg::C), FlagEffect::All),
    /* 0x8A */ entry("ADC D", Implied, 4, Operation::Alu(AluOp::Adc, Reg::D), FlagEffect::All),
    /* 0x8B */ entry("ADC E", Implied, 4, Operation::Alu(AluOp::Adc, Reg::E), FlagEffect::All),
    /* 0x8C */ entry("ADC H", Implied, 4, Operation::Alu(AluOp::Adc, Reg::H), FlagEffect::All),
    /* 0x8D */ entry("ADC L", Implied, 4, Operation::Alu(AluOp::Adc, Reg::L), FlagEffect::All),
    /* 0x8E */ entry("ADC M", Implied, 7, Operation::Alu(AluOp::Adc, Reg::M), FlagEffect::All),
    /* 0x8F */ entry("ADC A", Implied, 4, Operation::Alu(AluOp::Adc, Reg::A), FlagEffect::All),
    /* 0x90 */ entry("SUB B", Implied, 4, Operation::Alu(AluOp::Sub, Reg::B), FlagEffect::All),
    /* 0x91 */ entry("SUB C", Implied, 4, Operation::Alu(AluOp::Sub, Reg::C), FlagEffect::All),
    /* 0x92 */ entry("SUB D", Implied, 4, Operation::Alu(AluOp::Sub, Reg::D), FlagEffect::All),
    /* 0x93 */ entry("SUB E", Implied, 4, Operation::Alu(AluOp::Sub, Reg::E), FlagEffect::All),
    /* 0x94 */ entry("SUB H", Implied, 4, Operation::Alu(AluOp::Sub, Reg::H), FlagEffect::All),
    /* 0x95 */ entry("SUB L", Implied, 4, Operation::Alu(AluOp::Sub, Reg::L), FlagEffect::All),
    /* 0x96 */ entry("SUB M", Implied, 7, Operation::Alu(AluOp::Sub, Reg::M), FlagEffect::All),
    /* 0x97 */ entry("SUB A", Implied, 4, Operation::Alu(AluOp::Sub, Reg::A), FlagEffect::All),
    /* 0x98 */ entry("SBB B", Implied, 4, Operation::Alu(AluOp::Sbb, Reg::B), FlagEffect::All),
    /* 0x99 */ entry("SBB C", Implied, 4, Operation::Alu(AluOp::Sbb, Reg::C), FlagEffect::All),
    /* 0x9A */ entry("SBB D", Implied, 4, Operation::Alu(AluOp::Sbb, Reg::D), FlagEffect::All),
    /* 0x9B */ entry("SBB E", Implied, 4, Operation::Alu(AluOp::Sbb, Reg::E), FlagEffect::All),
    /* 0x9C */ entry("SBB H", Implied, 4, Operation::Alu(AluOp::Sbb, Reg::H), FlagEffect::All),
    /* 0x9D */ entry("SBB L", Implied, 4, Operation::Alu(AluOp::Sbb, Reg::L), FlagEffect::All),
    /* 0x9E */ entry("SBB M", Implied, 7, Operation::Alu(AluOp::Sbb, Reg::M), FlagEffect::All),
    /* 0x9F */ entry("SBB A", Implied, 4, Operation::Alu(AluOp::Sbb, Reg::A), FlagEffect::All),
    /* 0xA0 */ entry("ANA B", Implied, 4, Operation::Alu(AluOp::Ana, Reg::B), FlagEffect::All),
    /* 0xA1 */ entry("ANA C", Implied, 4, Operation::Alu(AluOp::Ana, Reg::C), FlagEffect::All),
    /* 0xA2 */ entry("ANA D", Implied, 4, Operation::Alu(AluOp::Ana, Reg::D), FlagEffect::All),
    /* 0xA3 */ entry("ANA E", Implied, 4, Operation::Alu(AluOp::Ana, Reg::E), FlagEffect::All),
    /* 0xA4 */ entry("ANA H", Implied, 4, Operation::Alu(AluOp::Ana, Reg::H), FlagEffect::All),
    /* 0xA5 */ entry("ANA L", Implied, 4, Operation::Alu(AluOp::Ana, Reg::L), FlagEffect::All),
    /* 0xA6 */ entry("ANA M", Implied, 7, Operation::Alu(AluOp::Ana, Reg::M), FlagEffect::All),
    /* 0xA7 */ entry("ANA A", Implied, 4, Operation::Alu(AluOp::Ana, Reg::A), FlagEffect::All),
    /* 0xA8 */ entry("XRA B", Implied, 4, Operation::Alu(AluOp::Xra, Reg::B), FlagEffect::All),
    /* 0xA9 */ entry("XRA C", Implied, 4, Operation::Alu(AluOp::Xra, Reg::C), FlagEffect::All),
    /* 0xAA */ entry("XRA D", Implied, 4, Operation::Alu(AluOp::Xra, Reg::D), FlagEffect::All),
    /* 0xAB */ entry("XRA E", Implied, 4, Operation::Alu(AluOp::Xra, Reg::E), FlagEffect::All),
    /* 0xAC */ entry("XRA H", Implied, 4, Operation::Alu(AluOp::Xra, Reg::H), FlagEffect::All),
    /* 0xAD */ entry("XRA L", Implied, 4, Operation::Alu(AluOp::Xra, Reg::L), FlagEffect::All),
    /* 0xAE */ entry("XRA M", Implied, 7, Operation::Alu(AluOp::Xra, Reg::M), FlagEffect::All),
    /* 0xAF */ entry("XRA A", Implied, 4, Operation::Alu(AluOp::Xra, Reg::A), FlagEffect::All),
    /* 0xB0 */ entry("ORA B", Implied, 4, Operation::Alu(AluOp::Ora, Reg::B), FlagEffect::All),
    /* 0xB1 */ entry("ORA C", Implied, 4, Operation::Alu(AluOp::Ora, Reg::C), FlagEffect::All),
    /* 0xB2 */ entry("ORA D", Implied, 4, Operation::Alu(AluOp::Ora, Reg::D), FlagEffect::All),
    /* 0xB3 */ entry("ORA E", Implied, 4, Operation::Alu(AluOp::Ora, Reg::E), FlagEffect::All),
    /* 0xB4 */ entry("ORA H", Implied, 4, Operation::Alu(AluOp::Ora, Reg::H), FlagEffect::All),
    /* 0xB5 */ entry("ORA L", Implied, 4, Operation::Alu(AluOp::Ora, Reg::L), FlagEffect::All),
    /* 0xB6 */ entry("ORA M", Implied, 7, Operation::Alu(AluOp::Ora, Reg::M), FlagEffect::All),
    /* 0xB7 */ entry("ORA A", Implied, 4, Operation::Alu(AluOp::Ora, Reg::A), FlagEffect::All),
    /* 0xB8 */ entry("CMP B", Implied, 4, Operation::Alu(AluOp::Cmp, Reg::B), FlagEffect::All),
    /* 0xB9 */ entry("CMP C", Implied, 4, Operation::Alu(AluOp::Cmp, Reg::C), FlagEffect::All),
    /* 0xBA */ entry("CMP D", Implied, 4, Operation::Alu(AluOp::Cmp, Reg::D), FlagEffect::All),
    /* 0xBB */ entry("CMP E", Implied, 4, Operation::Alu(AluOp::Cmp, Reg::E), FlagEffect::All),
    /* 0xBC */ entry("CMP H", Implied, 4, Operation::Alu(AluOp::Cmp, Reg::H), FlagEffect::All),
    /* 0xBD */ entry("CMP L", Implied, 4, Operation::Alu(AluOp::Cmp, Reg::L), FlagEffect::All),
    /* 0xBE */ entry("CMP M", Implied, 7, Operation::Alu(AluOp::Cmp, Reg::M), FlagEffect::All),
    /* 0xBF */ entry("CMP A", Implied, 4, Operation::Alu(AluOp::Cmp, Reg::A), FlagEffect::All),
    /* 0xC0 */ conditional("RNZ", Implied, 5, 6, Operation::RetIf(Condition::NotZero)),
    /* 0xC1 */ entry("POP B", Implied, 10, Operation::Pop(RegPair::BC), FlagEffect::None),
    /* 0xC2 */ conditional("JNZ", Direct, 10, 0, Operation::JmpIf(Condition::NotZero)),
    /* 0xC3 */ entry("JMP", Direct, 10, Operation::Jmp, FlagEffect::None),
    /* 0xC4 */ conditional("CNZ", Direct, 11, 6, Operation::CallIf(Condition::NotZero)),
    /* 0xC5 */ entry("PUSH B", Implied, 11, Operation::Push(RegPair::BC), FlagEffect::None),
    /* 0xC6 */ entry("ADI", Immediate8, 7, Operation::AluImm(AluOp::Add), FlagEffect::All),
    /* 0xC7 */ entry("RST 0", Implied, 11, Operation::Rst(0), FlagEffect::None),
    /* 0xC8 */ conditional("RZ", Implied, 5, 6, Operation::RetIf(Condition::Zero)),
    /* 0xC9 */ entry("RET", Implied, 10, Operation::Ret, FlagEffect::None),
    /* 0xCA */ conditional("JZ", Direct, 10, 0, Operation::JmpIf(Condition::Zero)),
    /* 0xCB */ undocumented("JMP", Direct, 10, Operation::Jmp),
    /* 0xCC */ conditional("CZ", Direct, 11, 6, Operation::CallIf(Condition::Zero)),
    /* 0xCD */ entry("CALL", Direct, 17, Operation::Call, FlagEffect::None),
    /* 0xCE */ entry("ACI", Immediate8, 7, Operation::AluImm(AluOp::Adc), FlagEffect::All),
    /* 0xCF */ entry("RST 1", Implied, 11, Operation::Rst(1), FlagEffect::None),
    /* 0xD0 */ conditional("RNC", Implied, 5, 6, Operation::RetIf(Condition::NoCarry)),
    /* 0xD1 */ entry("POP D", Implied, 10, Operation::Pop(RegPair::DE), FlagEffect::None),
    /* 0xD2 */ conditional("JNC", Direct, 10, 0, Operation::JmpIf(Condition::NoCarry)),
    /* 0xD3 */ entry("OUT", Port, 10, Operation::Out, FlagEffect::None),
    /* 0xD4 */ conditional("CNC", Direct, 11, 6, Operation::CallIf(Condition::NoCarry)),
    /* 0xD5 */ entry("PUSH D", Implied, 11, Operation::Push(RegPair::DE), FlagEffect::None),
    /* 0xD6 */ entry("SUI", Immediate8, 7, Operation::AluImm(AluOp::Sub), FlagEffect::All),
    /* 0xD7 */ entry("RST 2", Implied, 11, Operation::Rst(2), FlagEffect::None),
    /* 0xD8 */ conditional("RC", Implied, 5, 6, Operation::RetIf(Condition::Carry)),
    /* 0xD9 */ undocumented("RET", Implied, 10, Operation::Ret),
    /* 0xDA */ conditional("JC", Direct, 10, 0, Operation::JmpIf(Condition::Carry)),
    /* 0xDB */ entry("IN", Port, 10, Operation::In, FlagEffect::None),
    /* 0xDC */ conditional("CC", Direct, 11, 6, Operation::CallIf(Condition::Carry)),
    /* 0xDD */ undocumented("CALL", Direct, 17, Operation::Call),
    /* 0xDE */ entry("SBI", Immediate8, 7, Operation::AluImm(AluOp::Sbb), FlagEffect::All),
    /* 0xDF */ entry("RST 3", Implied, 11, Operation::Rst(3), FlagEffect::None),
    /* 0xE0 */ conditional("RPO", Implied, 5, 6, Operation::RetIf(Condition::ParityOdd)),
    /* 0xE1 */ entry("POP H", Implied, 10, Operation::Pop(RegPair::HL), FlagEffect::None),
    /* 0xE2 */ conditional("JPO", Direct, 10, 0, Operation::JmpIf(Condition::ParityOdd)),
    /* 0xE3 */ entry("XTHL", Implied, 18, Operation::Xthl, FlagEffect::None),
    /* 0xE4 */ conditional("CPO", Direct, 11, 6, Operation::CallIf(Condition::ParityOdd)),
    /* 0xE5 */ entry("PUSH H", Implied, 11, Operation::Push(RegPair::HL), FlagEffect::None),
    /* 0xE6 */ entry("ANI", Immediate8, 7, Operation::AluImm(AluOp::Ana), FlagEffect::All),
    /* 0xE7 */ entry("RST 4", Implied, 11, Operation::Rst(4), FlagEffect::None),
    /* 0xE8 */ conditional("RPE", Implied, 5, 6, Operation::RetIf(Condition::ParityEven)),
    /* 0xE9 */ entry("PCHL", Implied, 5, Operation::Pchl, FlagEffect::None),
    /* 0xEA */ conditional("JPE", Direct, 10, 0, Operation::JmpIf(Condition::ParityEven)),
    /* 0xEB */ entry("XCHG", Implied, 4, Operation::Xchg, FlagEffect::None),
    /* 0xEC */ conditional("CPE", Direct, 11, 6, Operation::CallIf(Condition::ParityEven)),
    /* 0xED */ undocumented("CALL", Direct, 17, Operation::Call),
    /* 0xEE */ entry("XRI", Immediate8, 7, Operation::AluImm(AluOp::Xra), FlagEffect::All),
    /* 0xEF */ entry("RST 5", Implied, 11, Operation::Rst(5), FlagEffect::None),
    /* 0xF0 */ conditional("RP", Implied, 5, 6, Operation::RetIf(Condition::Plus)),
    /* 0xF1 */ entry("POP PSW", Implied, 10, Operation::Pop(RegPair::PSW), FlagEffect::Restore),
    /* 0xF2 */ conditional("JP", Direct, 10, 0, Operation::JmpIf(Condition::Plus)),
    /* 0xF3 */ entry("DI", Implied, 4, Operation::Di, FlagEffect::None),
    /* 0xF4 */ conditional("CP", Direct, 11, 6, Operation::CallIf(Condition::Plus)),
    /* 0xF5 */ entry("PUSH PSW", Implied, 11, Operation::Push(RegPair::PSW), FlagEffect::None),
    /* 0xF6 */ entry("ORI", Immediate8, 7, Operation::AluImm(AluOp::Ora), FlagEffect::All),
    /* 0xF7 */ entry("RST 6", Implied, 11, Operation::Rst(6), FlagEffect::None),
    /* 0xF8 */ conditional("RM", Implied, 5, 6, Operation::RetIf(Condition::Minus)),
    /* 0xF9 */ entry("SPHL", Implied, 5, Operation::Sphl, FlagEffect::None),
    /* 0xFA */ conditional("JM", Direct, 10, 0, Operation::JmpIf(Condition::Minus)),
    /* 0xFB */ entry("EI", Implied, 4, Operation::Ei, FlagEffect::None),
    /* 0xFC */ conditional("CM", Direct, 11, 6, Operation::CallIf(Condition::Minus)),
    /* 0xFD */ undocumented("CALL", Direct, 17, Operation::Call),
    /* 0xFE */ entry("CPI", Immediate8, 7, Operation::AluImm(AluOp::Cmp), FlagEffect::All),
    /* 0xFF */ entry("RST 7", Implied, 11, Operation::Rst(7), FlagEffect::None),
];
