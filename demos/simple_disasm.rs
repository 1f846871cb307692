//! Basic disassembler usage example

use lib8080::disassembler::{disassemble, DisassemblyOptions};

fn main() {
    // Example machine code bytes, placed at 0x0100
    let mut memory = vec![0u8; 0x0100];
    memory.extend_from_slice(&[
        0x31, 0x00, 0x24, // LXI SP,2400
        0x3E, 0x05, // MVI A,05
        0xC6, 0x03, // ADI 03
        0x32, 0x00, 0x20, // STA 2000
        0xC3, 0x00, 0x01, // JMP 0100
    ]);

    let options = DisassemblyOptions { hex_dump: true };

    println!("Disassembled code:");
    for line in disassemble(&memory, 0x0100, memory.len() - 0x0100) {
        println!("{}", line.render(&options));
    }
}
