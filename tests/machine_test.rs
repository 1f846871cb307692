//! Arcade board integration tests
//!
//! Small ROMs exercise the memory map, the I/O ports and the two-interrupt
//! frame loop through the full machine.

use lib8080::system::{MID_SCREEN_VECTOR, VBLANK_VECTOR, VRAM_SIZE};
use lib8080::{
    CpuConfig, DipSwitches, ExecutionError, Input, Machine, MachineConfig, MachineError,
    MemoryView, UndocumentedOpcodes,
};

fn machine_with_rom(rom: &[u8]) -> Machine {
    let mut machine = Machine::new(MachineConfig::default());
    machine.load_rom(rom).unwrap();
    machine
}

fn run_steps(machine: &mut Machine, steps: usize) {
    for _ in 0..steps {
        machine.cpu_mut().step().unwrap();
    }
}

#[test]
fn test_shift_register_through_ports() {
    let rom = [
        0x3E, 0xAB, 0xD3, 0x04, // MVI A,AB / OUT 4
        0x3E, 0xCD, 0xD3, 0x04, // MVI A,CD / OUT 4
        0x3E, 0x03, 0xD3, 0x02, // MVI A,03 / OUT 2
        0xDB, 0x03, // IN 3
    ];
    let mut machine = machine_with_rom(&rom);

    run_steps(&mut machine, 7);

    // 0xCDAB shifted left by 3, high byte
    assert_eq!(machine.cpu().a(), 0x6D);
    assert_eq!(machine.cpu().bus().shifter.value(), 0xCDAB);
}

#[test]
fn test_input_ports() {
    // IN 0 / MOV B,A / IN 1 / MOV C,A / IN 2
    let rom = [0xDB, 0x00, 0x47, 0xDB, 0x01, 0x4F, 0xDB, 0x02];
    let mut machine = machine_with_rom(&rom);

    machine.press(Input::Coin);
    machine.press(Input::P1Fire);
    machine.press(Input::P2Left);
    run_steps(&mut machine, 5);

    let state = machine.cpu().snapshot();
    assert_eq!(state.b, 0x0E);
    // Bit 3 of port 1 always reads 1
    assert_eq!(state.c, 0x08 | 0x01 | 0x10);
    assert_eq!(state.a, 0x20);
}

#[test]
fn test_released_input_clears_bit() {
    let rom = [0xDB, 0x01];
    let mut machine = machine_with_rom(&rom);

    machine.press(Input::P1Start);
    machine.release(Input::P1Start);
    run_steps(&mut machine, 1);

    assert_eq!(machine.cpu().a(), 0x08);
}

#[test]
fn test_dip_switches_on_port_2() {
    let config = MachineConfig {
        dip: DipSwitches {
            lives: 5,
            bonus_life_at_1000: true,
            coin_info: false,
        },
        ..MachineConfig::default()
    };
    let mut machine = Machine::new(config);
    machine.load_rom(&[0xDB, 0x02]).unwrap();

    machine.cpu_mut().step().unwrap();

    assert_eq!(machine.cpu().a(), 0x02 | 0x08 | 0x80);
}

#[test]
fn test_rom_is_write_protected_and_ram_mirrors() {
    let rom = [
        0x3E, 0x77, // MVI A,77
        0x32, 0x00, 0x00, // STA 0000
        0x32, 0x10, 0x60, // STA 6010 (mirror of 2010)
    ];
    let mut machine = machine_with_rom(&rom);

    run_steps(&mut machine, 3);

    let bus = machine.cpu().bus();
    assert_eq!(bus.read_byte(0x0000), 0x3E);
    assert_eq!(bus.read_byte(0x2010), 0x77);
    assert_eq!(bus.read_byte(0xA010), 0x77);
}

#[test]
fn test_video_ram_window() {
    let rom = [
        0x3E, 0x55, // MVI A,55
        0x32, 0x00, 0x24, // STA 2400
        0x32, 0xFF, 0x3F, // STA 3FFF
    ];
    let mut machine = machine_with_rom(&rom);

    run_steps(&mut machine, 3);

    let vram = machine.video_ram();
    assert_eq!(vram.len(), VRAM_SIZE);
    assert_eq!(vram[0], 0x55);
    assert_eq!(vram[VRAM_SIZE - 1], 0x55);
    assert!(vram[1..VRAM_SIZE - 1].iter().all(|&b| b == 0));
}

#[test]
fn test_sound_latches() {
    // MVI A,0F / OUT 3 / MVI A,1C / OUT 5
    let rom = [0x3E, 0x0F, 0xD3, 0x03, 0x3E, 0x1C, 0xD3, 0x05];
    let mut machine = machine_with_rom(&rom);

    run_steps(&mut machine, 4);

    assert_eq!(machine.sound_latches(), (0x0F, 0x1C));
}

#[test]
fn test_rom_too_large() {
    let mut machine = Machine::new(MachineConfig::default());
    let rom = vec![0u8; 0x2001];

    assert_eq!(
        machine.load_rom(&rom),
        Err(MachineError::RomTooLarge {
            size: 0x2001,
            max: 0x2000,
        })
    );
}

/// Counts RST 1 in RAM 2000 and RST 2 in RAM 2001.
fn counting_rom() -> Vec<u8> {
    let mut rom = vec![0u8; 0x40];
    // 0000: LXI SP,2400 / EI / loop: JMP 0004
    rom[0x00..0x07].copy_from_slice(&[0x31, 0x00, 0x24, 0xFB, 0xC3, 0x04, 0x00]);
    rom[0x08..0x0B].copy_from_slice(&[0xC3, 0x20, 0x00]);
    rom[0x10..0x13].copy_from_slice(&[0xC3, 0x30, 0x00]);
    // LDA / INR A / STA / EI / RET
    rom[0x20..0x29].copy_from_slice(&[0x3A, 0x00, 0x20, 0x3C, 0x32, 0x00, 0x20, 0xFB, 0xC9]);
    rom[0x30..0x39].copy_from_slice(&[0x3A, 0x01, 0x20, 0x3C, 0x32, 0x01, 0x20, 0xFB, 0xC9]);
    rom
}

#[test]
fn test_frame_raises_both_interrupts() {
    assert_eq!((MID_SCREEN_VECTOR, VBLANK_VECTOR), (1, 2));

    let mut machine = machine_with_rom(&counting_rom());
    let per_frame = machine.config().cycles_per_frame();

    for _ in 0..3 {
        let cycles = machine.run_frame().unwrap();
        assert!(cycles >= per_frame);
        // Overshoot is bounded by one instruction per half frame
        assert!(cycles < per_frame + 2 * 18);
    }

    // The VBLANK request from the last frame is still pending
    let bus = machine.cpu().bus();
    assert_eq!(bus.read_byte(0x2000), 3);
    assert_eq!(bus.read_byte(0x2001), 2);
    assert_eq!(machine.frame_count(), 3);
}

#[test]
fn test_reset_restarts_frame_count() {
    let mut machine = machine_with_rom(&counting_rom());
    machine.run_frame().unwrap();

    machine.reset();

    assert_eq!(machine.frame_count(), 0);
    assert_eq!(machine.cpu().pc(), 0x0000);
    // RAM survives a reset
    assert_eq!(machine.cpu().bus().read_byte(0x2000), 1);
}

#[test]
fn test_reloading_shorter_rom_clears_old_bytes() {
    let mut machine = machine_with_rom(&[0x3E, 0x42, 0x32, 0x00, 0x20]);

    machine.load_rom(&[0x00]).unwrap();

    let bus = machine.cpu().bus();
    assert_eq!(bus.read_byte(0x0000), 0x00);
    assert!((1..5).all(|addr| bus.read_byte(addr) == 0x00));
}

#[test]
fn test_failed_frame_is_not_counted() {
    let config = MachineConfig {
        cpu: CpuConfig {
            undocumented: UndocumentedOpcodes::Trap,
        },
        ..MachineConfig::default()
    };
    let mut machine = Machine::new(config);
    // NOP / NOP / undocumented 0x08
    machine.load_rom(&[0x00, 0x00, 0x08]).unwrap();

    assert_eq!(
        machine.run_frame(),
        Err(ExecutionError::UnimplementedOpcode {
            opcode: 0x08,
            pc: 0x0002,
        })
    );

    assert_eq!(machine.frame_count(), 0);
    assert_eq!(machine.cpu().cycles(), 8);
    assert_eq!(machine.cpu().pc(), 0x0002);
}
