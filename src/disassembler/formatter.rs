//! Formatting functions for disassembled instructions

use crate::addressing::AddressingMode;
use crate::decoder::Instruction;
use crate::disassembler::{DisassemblyOptions, DATA_DIRECTIVE};

/// Format a single instruction as assembly text
///
/// Operands are uppercase hex without a prefix. A mnemonic that already names a
/// register (`MVI A`, `LXI H`) takes its operand after a comma; any other takes it
/// after a space. Undocumented opcodes are marked with a leading `*`.
pub fn format_instruction(instr: &Instruction) -> String {
    if instr.mnemonic == DATA_DIRECTIVE {
        return format!("{} {:02X}", DATA_DIRECTIVE, instr.opcode);
    }

    let mnemonic = if instr.undocumented {
        format!("*{}", instr.mnemonic)
    } else {
        instr.mnemonic.to_string()
    };

    match format_operand(instr) {
        None => mnemonic,
        Some(operand) => {
            let separator = if instr.mnemonic.contains(' ') { ',' } else { ' ' };
            format!("{mnemonic}{separator}{operand}")
        }
    }
}

/// Format the operand based on addressing mode
fn format_operand(instr: &Instruction) -> Option<String> {
    use AddressingMode::*;

    match instr.addressing_mode {
        Implied => None,
        Immediate8 | Port => Some(format!("{:02X}", instr.imm8())),
        Immediate16 | Direct => Some(format!("{:04X}", instr.imm16())),
    }
}

/// Format a full listing line: `ADDR: TEXT`, or `ADDR: BB BB BB  TEXT` with a hex dump.
pub fn format_line(instr: &Instruction, options: &DisassemblyOptions) -> String {
    let text = format_instruction(instr);

    if !options.hex_dump {
        return format!("{:04X}: {}", instr.address, text);
    }

    let bytes: Vec<String> = std::iter::once(instr.opcode)
        .chain(instr.operands().iter().copied())
        .map(|byte| format!("{:02X}", byte))
        .collect();

    format!("{:04X}: {:<8}  {}", instr.address, bytes.join(" "), text)
}
