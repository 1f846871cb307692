//! Tests for data movement: MOV, MVI, LXI, LDA/STA, LHLD/SHLD, LDAX/STAX,
//! XCHG and port I/O. None of these instructions touch the flags.

use lib8080::{Bus, Cpu, FlatBus, Flags, MemoryView};

fn setup_cpu(program: &[u8]) -> Cpu<FlatBus> {
    let mut cpu = Cpu::new(FlatBus::with_program(program));
    cpu.set_sp(0x2400);
    cpu
}

fn all_flags() -> Flags {
    Flags {
        s: true,
        z: true,
        ac: true,
        p: true,
        cy: true,
    }
}

#[test]
fn test_mvi_every_register() {
    // MVI B..A (M skipped): 06 0E 16 1E 26 2E 3E
    let program = [
        0x06, 0x01, 0x0E, 0x02, 0x16, 0x03, 0x1E, 0x04, 0x26, 0x05, 0x2E, 0x06, 0x3E, 0x07,
    ];
    let mut cpu = setup_cpu(&program);

    for _ in 0..7 {
        assert_eq!(cpu.step(), Ok(7));
    }

    let state = cpu.state();
    assert_eq!(
        (state.b, state.c, state.d, state.e, state.h, state.l, state.a),
        (1, 2, 3, 4, 5, 6, 7)
    );
    assert_eq!(cpu.pc(), 14);
}

#[test]
fn test_mvi_memory() {
    // LXI H,2100 / MVI M,5A
    let mut cpu = setup_cpu(&[0x21, 0x00, 0x21, 0x36, 0x5A]);

    cpu.step().unwrap();
    assert_eq!(cpu.step(), Ok(10));

    assert_eq!(cpu.bus().read_byte(0x2100), 0x5A);
}

#[test]
fn test_mov_register_to_register() {
    // MOV B,C
    let mut cpu = setup_cpu(&[0x41]);
    cpu.state_mut().c = 0x99;
    cpu.set_flags(all_flags());

    assert_eq!(cpu.step(), Ok(5));

    assert_eq!(cpu.state().b, 0x99);
    assert_eq!(cpu.flags(), all_flags());
}

#[test]
fn test_mov_through_memory() {
    // LXI H,2050 / MOV M,A / MOV E,M
    let mut cpu = setup_cpu(&[0x21, 0x50, 0x20, 0x77, 0x5E]);
    cpu.set_a(0xC3);

    cpu.step().unwrap();
    assert_eq!(cpu.step(), Ok(7));
    assert_eq!(cpu.bus().read_byte(0x2050), 0xC3);

    assert_eq!(cpu.step(), Ok(7));
    assert_eq!(cpu.state().e, 0xC3);
}

#[test]
fn test_lxi_sp() {
    let mut cpu = setup_cpu(&[0x31, 0xFE, 0x23]);

    assert_eq!(cpu.step(), Ok(10));
    assert_eq!(cpu.sp(), 0x23FE);
}

#[test]
fn test_sta_lda() {
    // STA 2345 / MVI A,00 / LDA 2345
    let mut cpu = setup_cpu(&[0x32, 0x45, 0x23, 0x3E, 0x00, 0x3A, 0x45, 0x23]);
    cpu.set_a(0x6E);

    assert_eq!(cpu.step(), Ok(13));
    assert_eq!(cpu.bus().read_byte(0x2345), 0x6E);

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x00);

    assert_eq!(cpu.step(), Ok(13));
    assert_eq!(cpu.a(), 0x6E);
}

#[test]
fn test_shld_lhld() {
    // LXI H,AE29 / SHLD 210A / LXI H,0000 / LHLD 210A
    let mut cpu = setup_cpu(&[
        0x21, 0x29, 0xAE, 0x22, 0x0A, 0x21, 0x21, 0x00, 0x00, 0x2A, 0x0A, 0x21,
    ]);

    cpu.step().unwrap();
    assert_eq!(cpu.step(), Ok(16));
    // L at the address, H at address + 1
    assert_eq!(cpu.bus().read_byte(0x210A), 0x29);
    assert_eq!(cpu.bus().read_byte(0x210B), 0xAE);

    cpu.step().unwrap();
    assert_eq!(cpu.state().hl(), 0x0000);

    assert_eq!(cpu.step(), Ok(16));
    assert_eq!(cpu.state().hl(), 0xAE29);
}

#[test]
fn test_stax_ldax() {
    // LXI B,2200 / STAX B / LXI D,2200 / MVI A,00 / LDAX D
    let mut cpu = setup_cpu(&[
        0x01, 0x00, 0x22, 0x02, 0x11, 0x00, 0x22, 0x3E, 0x00, 0x1A,
    ]);
    cpu.set_a(0x81);

    cpu.step().unwrap();
    assert_eq!(cpu.step(), Ok(7));
    assert_eq!(cpu.bus().read_byte(0x2200), 0x81);

    cpu.step().unwrap();
    cpu.step().unwrap();
    assert_eq!(cpu.step(), Ok(7));
    assert_eq!(cpu.a(), 0x81);
}

#[test]
fn test_xchg() {
    let mut cpu = setup_cpu(&[0xEB]);
    {
        let state = cpu.state_mut();
        state.d = 0x33;
        state.e = 0x55;
        state.h = 0x00;
        state.l = 0xFF;
    }

    assert_eq!(cpu.step(), Ok(4));

    let state = cpu.state();
    assert_eq!((state.d, state.e, state.h, state.l), (0x00, 0xFF, 0x33, 0x55));
}

#[test]
fn test_in_out_use_port_space() {
    // IN 01 / OUT 03
    let mut cpu = setup_cpu(&[0xDB, 0x01, 0xD3, 0x03]);
    cpu.bus_mut().set_input(0x01, 0x5C);
    cpu.set_flags(all_flags());

    assert_eq!(cpu.step(), Ok(10));
    assert_eq!(cpu.a(), 0x5C);

    assert_eq!(cpu.step(), Ok(10));
    assert_eq!(cpu.bus().output(0x03), 0x5C);

    // Memory at the port numbers is untouched
    assert_eq!(cpu.bus().read_byte(0x0003), 0x03);
    assert_eq!(cpu.flags(), all_flags());
}

#[test]
fn test_nop() {
    let mut cpu = setup_cpu(&[0x00]);
    let before = cpu.snapshot();

    assert_eq!(cpu.step(), Ok(4));

    let after = cpu.snapshot();
    assert_eq!(after.pc, 0x0001);
    assert_eq!(after, lib8080::CpuState { pc: 0x0001, ..before });
}

#[test]
fn test_write_word_helper_is_little_endian() {
    let mut bus = FlatBus::new();
    bus.write_word(0x3000, 0xBEEF);

    assert_eq!(bus.read_byte(0x3000), 0xEF);
    assert_eq!(bus.read_byte(0x3001), 0xBE);
}
