//! Property-based tests for CPU invariants.
//!
//! These tests use proptest to verify that the engine and the opcode table agree
//! across random register files and operands.

use lib8080::state::parity;
use lib8080::{Cpu, CpuState, FlagEffect, FlatBus, Flags, Operation, OPCODE_TABLE};
use proptest::prelude::*;

const PROGRAM_START: u16 = 0x1000;

/// Builds a CPU whose state is `state` with `program` at `PROGRAM_START`.
fn setup_cpu(state: CpuState, program: &[u8]) -> Cpu<FlatBus> {
    let mut bus = FlatBus::new();
    bus.load(PROGRAM_START, program);

    let mut cpu = Cpu::new(bus);
    *cpu.state_mut() = CpuState {
        pc: PROGRAM_START,
        sp: 0x8000,
        inte: false,
        halted: false,
        ..state
    };
    cpu
}

fn documented_opcodes() -> Vec<u8> {
    (0..=255u8)
        .filter(|&op| !OPCODE_TABLE[op as usize].undocumented)
        .collect()
}

/// Opcodes whose next PC is always the following instruction.
fn non_branching_opcodes() -> Vec<u8> {
    documented_opcodes()
        .into_iter()
        .filter(|&op| {
            !matches!(
                OPCODE_TABLE[op as usize].operation,
                Operation::Jmp
                    | Operation::JmpIf(_)
                    | Operation::Call
                    | Operation::CallIf(_)
                    | Operation::Ret
                    | Operation::RetIf(_)
                    | Operation::Rst(_)
                    | Operation::Pchl
            )
        })
        .collect()
}

fn opcodes_with_effect(effect: FlagEffect) -> Vec<u8> {
    documented_opcodes()
        .into_iter()
        .filter(|&op| OPCODE_TABLE[op as usize].flags == effect)
        .collect()
}

prop_compose! {
    fn arb_flags()(byte in any::<u8>()) -> Flags {
        Flags::from_byte(byte)
    }
}

prop_compose! {
    fn arb_state()(
        regs in any::<[u8; 7]>(),
        flags in arb_flags(),
    ) -> CpuState {
        CpuState {
            a: regs[0],
            b: regs[1],
            c: regs[2],
            d: regs[3],
            e: regs[4],
            // Keep HL clear of the program and the stack
            h: 0x20 | (regs[5] & 0x1F),
            l: regs[6],
            flags,
            ..CpuState::new()
        }
    }
}

proptest! {
    /// Non-branching instructions advance PC by their table size
    #[test]
    fn prop_pc_advances_by_size(
        opcode in prop::sample::select(non_branching_opcodes()),
        state in arb_state(),
        operands in any::<[u8; 2]>(),
    ) {
        let mut cpu = setup_cpu(state, &[opcode, operands[0], operands[1]]);
        let size = OPCODE_TABLE[opcode as usize].size_bytes as u16;

        cpu.step().unwrap();

        prop_assert_eq!(
            cpu.pc(),
            PROGRAM_START + size,
            "Opcode 0x{:02X} ({}) advanced PC incorrectly",
            opcode,
            OPCODE_TABLE[opcode as usize].mnemonic
        );
    }

    /// Step returns the table cost, plus the penalty only for taken CALL/RET
    #[test]
    fn prop_cycles_match_table(
        opcode in prop::sample::select(documented_opcodes()),
        state in arb_state(),
        operands in any::<[u8; 2]>(),
    ) {
        let mut cpu = setup_cpu(state, &[opcode, operands[0], operands[1]]);
        let metadata = &OPCODE_TABLE[opcode as usize];
        let base = metadata.base_cycles as u32;

        let cycles = cpu.step().unwrap();

        prop_assert!(
            cycles == base || cycles == base + metadata.taken_penalty as u32,
            "Opcode 0x{:02X} ({}) took {} cycles",
            opcode,
            metadata.mnemonic,
            cycles
        );
        prop_assert_eq!(cpu.cycles(), cycles as u64);
    }
}

proptest! {
    #[test]
    fn prop_no_flag_instructions_preserve_flags(
        opcode in prop::sample::select(opcodes_with_effect(FlagEffect::None)),
        state in arb_state(),
        operands in any::<[u8; 2]>(),
    ) {
        let mut cpu = setup_cpu(state, &[opcode, operands[0], operands[1]]);
        cpu.step().unwrap();

        prop_assert_eq!(cpu.flags(), state.flags);
    }

    #[test]
    fn prop_all_but_carry_preserves_carry(
        opcode in prop::sample::select(opcodes_with_effect(FlagEffect::AllButCarry)),
        state in arb_state(),
    ) {
        let mut cpu = setup_cpu(state, &[opcode]);
        cpu.step().unwrap();

        prop_assert_eq!(cpu.flags().cy, state.flags.cy);
    }

    #[test]
    fn prop_carry_only_preserves_other_flags(
        opcode in prop::sample::select(opcodes_with_effect(FlagEffect::CarryOnly)),
        state in arb_state(),
    ) {
        let mut cpu = setup_cpu(state, &[opcode]);
        cpu.step().unwrap();

        let (before, after) = (state.flags, cpu.flags());
        prop_assert_eq!((after.s, after.z, after.ac, after.p), (before.s, before.z, before.ac, before.p));
    }
}

proptest! {
    /// ADD B sets every flag from the true sum
    #[test]
    fn prop_add_flags(a in any::<u8>(), b in any::<u8>(), state in arb_state()) {
        let mut cpu = setup_cpu(CpuState { a, b, ..state }, &[0x80]);
        cpu.step().unwrap();

        let result = a.wrapping_add(b);
        let flags = cpu.flags();
        prop_assert_eq!(cpu.a(), result);
        prop_assert_eq!(flags.cy, a as u16 + b as u16 > 0xFF);
        prop_assert_eq!(flags.ac, (a & 0x0F) + (b & 0x0F) > 0x0F);
        prop_assert_eq!(flags.z, result == 0);
        prop_assert_eq!(flags.s, result & 0x80 != 0);
        prop_assert_eq!(flags.p, parity(result));
    }

    /// SUB B sets carry on borrow and computes AC from the complement addition
    #[test]
    fn prop_sub_flags(a in any::<u8>(), b in any::<u8>(), state in arb_state()) {
        let mut cpu = setup_cpu(CpuState { a, b, ..state }, &[0x90]);
        cpu.step().unwrap();

        let result = a.wrapping_sub(b);
        let flags = cpu.flags();
        prop_assert_eq!(cpu.a(), result);
        prop_assert_eq!(flags.cy, b > a);
        prop_assert_eq!(flags.ac, (a & 0x0F) + (!b & 0x0F) + 1 > 0x0F);
        prop_assert_eq!(flags.z, result == 0);
        prop_assert_eq!(flags.p, parity(result));
    }

    /// ADD B followed by SUB B restores the accumulator
    #[test]
    fn prop_add_sub_round_trip(a in any::<u8>(), b in any::<u8>(), state in arb_state()) {
        let mut cpu = setup_cpu(CpuState { a, b, ..state }, &[0x80, 0x90]);
        cpu.step().unwrap();
        cpu.step().unwrap();

        prop_assert_eq!(cpu.a(), a);
    }

    /// CMP B compares without writing A
    #[test]
    fn prop_cmp_leaves_accumulator(a in any::<u8>(), b in any::<u8>(), state in arb_state()) {
        let mut cpu = setup_cpu(CpuState { a, b, ..state }, &[0xB8]);
        cpu.step().unwrap();

        prop_assert_eq!(cpu.a(), a);
        prop_assert_eq!(cpu.flags().z, a == b);
        prop_assert_eq!(cpu.flags().cy, a < b);
    }

    /// Logical ops always clear carry
    #[test]
    fn prop_logical_ops_clear_carry(
        opcode in prop::sample::select(vec![0xA0u8, 0xA8, 0xB0]),
        state in arb_state(),
    ) {
        let mut cpu = setup_cpu(state, &[opcode]);
        cpu.step().unwrap();

        prop_assert!(!cpu.flags().cy);
        prop_assert_eq!(cpu.flags().p, parity(cpu.a()));
    }
}

proptest! {
    #[test]
    fn prop_flag_byte_normalization(byte in any::<u8>()) {
        let flags = Flags::from_byte(byte);
        prop_assert_eq!(flags.to_byte(), (byte & 0xD7) | 0x02);
    }

    /// PUSH B / POP D copies BC into DE and leaves SP where it started
    #[test]
    fn prop_push_pop_transfers_pair(state in arb_state()) {
        let mut cpu = setup_cpu(state, &[0xC5, 0xD1]);
        cpu.step().unwrap();
        cpu.step().unwrap();

        let after = cpu.snapshot();
        prop_assert_eq!((after.d, after.e), (state.b, state.c));
        prop_assert_eq!(after.sp, 0x8000);
    }

    /// PUSH PSW / POP PSW restores A and the flags exactly
    #[test]
    fn prop_psw_round_trip(state in arb_state()) {
        // PUSH PSW / XRA A / POP PSW
        let mut cpu = setup_cpu(state, &[0xF5, 0xAF, 0xF1]);
        for _ in 0..3 {
            cpu.step().unwrap();
        }

        prop_assert_eq!(cpu.a(), state.a);
        prop_assert_eq!(cpu.flags(), state.flags);
    }

    /// The 16-bit counters wrap instead of overflowing
    #[test]
    fn prop_inx_dcx_wrap(pair in any::<u16>()) {
        // INX B / DCX B
        let mut cpu = setup_cpu(CpuState::new(), &[0x03, 0x0B]);
        cpu.state_mut().b = (pair >> 8) as u8;
        cpu.state_mut().c = pair as u8;

        cpu.step().unwrap();
        let after_inx = cpu.snapshot();
        prop_assert_eq!(
            u16::from_be_bytes([after_inx.b, after_inx.c]),
            pair.wrapping_add(1)
        );

        cpu.step().unwrap();
        let after_dcx = cpu.snapshot();
        prop_assert_eq!(u16::from_be_bytes([after_dcx.b, after_dcx.c]), pair);
    }
}
