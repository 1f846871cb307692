//! Fuzz target for CPU step execution.
//!
//! This target creates arbitrary CPU states and memory contents,
//! then executes one step to find edge cases and crashes.

#![no_main]

use arbitrary::Arbitrary;
use lib8080::{decode, Cpu, CpuConfig, FlatBus, Flags, UndocumentedOpcodes};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    b: u8,
    c: u8,
    d: u8,
    e: u8,
    h: u8,
    l: u8,
    sp: u16,
    pc: u16,
    /// Packed PSW flag byte
    flags: u8,
    inte: bool,
    halted: bool,
    /// RST vector to request before stepping, if any
    interrupt: Option<u8>,
    trap_undocumented: bool,
}

/// Memory regions for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (instruction + operands)
    instruction_bytes: [u8; 3],
    /// Bytes around the stack pointer
    stack: [u8; 4],
    /// Bytes around HL (the M operand)
    hl_region: [u8; 2],
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
}

fuzz_target!(|input: FuzzInput| {
    let state = &input.cpu_state;
    let mut bus = FlatBus::new();

    let hl = u16::from_be_bytes([state.h, state.l]);
    bus.load(hl, &input.memory.hl_region);
    bus.load(state.sp, &input.memory.stack);
    bus.load(state.pc, &input.memory.instruction_bytes);

    let config = CpuConfig {
        undocumented: if state.trap_undocumented {
            UndocumentedOpcodes::Trap
        } else {
            UndocumentedOpcodes::Alias
        },
    };
    let mut cpu = Cpu::with_config(bus, config);

    {
        let s = cpu.state_mut();
        s.a = state.a;
        s.b = state.b;
        s.c = state.c;
        s.d = state.d;
        s.e = state.e;
        s.h = state.h;
        s.l = state.l;
        s.sp = state.sp;
        s.pc = state.pc;
        s.flags = Flags::from_byte(state.flags);
        s.inte = state.inte;
        s.halted = state.halted;
    }

    if let Some(vector) = state.interrupt {
        cpu.request_interrupt(vector);
    }

    let before = cpu.snapshot();
    let (instruction, _) = decode(cpu.bus(), before.pc);

    match cpu.step() {
        Ok(cycles) => {
            // Every step costs something and the counter matches what was reported
            assert!(cycles > 0);
            assert_eq!(cpu.cycles(), cycles as u64);

            let flags = cpu.flags().to_byte();
            assert_eq!(flags & 0b0010_1010, 0b0000_0010);

            // Straight-line instructions land on the decoder's next address
            if !before.halted && state.interrupt.is_none() && instruction.taken_penalty == 0 {
                let transfers = matches!(
                    instruction.operation,
                    lib8080::Operation::Jmp
                        | lib8080::Operation::JmpIf(_)
                        | lib8080::Operation::Call
                        | lib8080::Operation::Ret
                        | lib8080::Operation::Rst(_)
                        | lib8080::Operation::Pchl
                );
                if !transfers {
                    assert_eq!(cpu.pc(), instruction.next_address());
                }
            }
        }
        Err(_) => {
            // Errors never charge cycles or move PC
            assert_eq!(cpu.cycles(), 0);
            assert_eq!(cpu.pc(), before.pc);
        }
    }
});
