//! Runs a tiny program on the arcade machine for a few frames.
//!
//! The program enables interrupts and spins. The mid-screen handler counts
//! interrupts in RAM; the vblank handler copies the count into video RAM.

use lib8080::{Input, Machine, MachineConfig};

fn main() {
    let mut rom = vec![0u8; 0x40];

    // 0x0000: LXI SP,2400 / EI / JMP 0004 (spin)
    rom[0x00..0x07].copy_from_slice(&[0x31, 0x00, 0x24, 0xFB, 0xC3, 0x04, 0x00]);

    // Restart vectors: RST 1 -> 0x0020, RST 2 -> 0x0030
    rom[0x08..0x0B].copy_from_slice(&[0xC3, 0x20, 0x00]);
    rom[0x10..0x13].copy_from_slice(&[0xC3, 0x30, 0x00]);

    // 0x0020: PUSH PSW / LDA 2000 / INR A / STA 2000 / POP PSW / EI / RET
    rom[0x20..0x2B].copy_from_slice(&[0xF5, 0x3A, 0x00, 0x20, 0x3C, 0x32, 0x00, 0x20, 0xF1, 0xFB, 0xC9]);

    // 0x0030: PUSH PSW / LDA 2000 / STA 2400 / POP PSW / EI / RET
    rom[0x30..0x3A].copy_from_slice(&[0xF5, 0x3A, 0x00, 0x20, 0x32, 0x00, 0x24, 0xF1, 0xFB, 0xC9]);

    let mut machine = Machine::new(MachineConfig::default());
    if let Err(err) = machine.load_rom(&rom) {
        eprintln!("load failed: {}", err);
        return;
    }

    machine.press(Input::Coin);

    for _ in 0..5 {
        match machine.run_frame() {
            Ok(cycles) => println!(
                "frame {:>2}: {} cycles, vram[0] = {:02X}",
                machine.frame_count(),
                cycles,
                machine.video_ram()[0]
            ),
            Err(err) => {
                eprintln!("execution stopped: {}", err);
                return;
            }
        }
    }
}
