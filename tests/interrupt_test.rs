//! Integration tests for CPU interrupt support.
//!
//! These tests verify the interrupt model:
//! - Requests are recognized only at step boundaries
//! - Requests are dropped (not queued) while interrupts are disabled
//! - Acceptance pushes PC, clears INTE, releases HLT and jumps to vector * 8
//! - Acceptance costs 11 cycles and is a step of its own
//! - EI / DI take effect immediately

use lib8080::{Cpu, FlatBus, MemoryView, RunState, HALT_IDLE_CYCLES, INTERRUPT_CYCLES};

/// Helper: `program` at 0x0000, stack at 0x2400, interrupts enabled.
fn setup_cpu(program: &[u8]) -> Cpu<FlatBus> {
    let mut cpu = Cpu::new(FlatBus::with_program(program));
    cpu.set_sp(0x2400);
    cpu.state_mut().inte = true;
    cpu
}

#[test]
fn test_interrupt_service_sequence() {
    let mut cpu = setup_cpu(&[0x00, 0x00, 0x00]);

    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x0001);

    cpu.request_interrupt(1);
    assert_eq!(cpu.run_state(), RunState::InterruptPending);

    assert_eq!(cpu.step(), Ok(INTERRUPT_CYCLES));

    assert_eq!(cpu.pc(), 0x0008);
    assert_eq!(cpu.sp(), 0x23FE);
    assert_eq!(cpu.bus().read_word(0x23FE), 0x0001);
    assert!(!cpu.interrupts_enabled());
    assert_eq!(cpu.run_state(), RunState::Running);
    assert_eq!(cpu.cycles(), 4 + 11);
}

#[test]
fn test_vector_targets() {
    for vector in 0..8u8 {
        let mut cpu = setup_cpu(&[]);
        cpu.request_interrupt(vector);
        cpu.step().unwrap();
        assert_eq!(cpu.pc(), vector as u16 * 8);
    }
}

#[test]
fn test_vector_masked_to_three_bits() {
    let mut cpu = setup_cpu(&[]);
    cpu.request_interrupt(0x0A);
    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x0010);
}

#[test]
fn test_request_dropped_while_disabled() {
    let mut cpu = setup_cpu(&[0x00, 0x00]);
    cpu.state_mut().inte = false;

    cpu.request_interrupt(2);
    assert_eq!(cpu.run_state(), RunState::Running);

    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x0001);

    // Enabling later does not resurrect the old request
    cpu.state_mut().inte = true;
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x0002);
    assert_eq!(cpu.sp(), 0x2400);
}

#[test]
fn test_di_before_acceptance_drops_request() {
    // DI / NOP
    let mut cpu = setup_cpu(&[0xF3, 0x00]);

    cpu.step().unwrap();
    assert!(!cpu.interrupts_enabled());

    // Request raised with INTE already clear is ignored
    cpu.request_interrupt(1);
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x0002);
}

#[test]
fn test_pending_request_dropped_if_disabled_before_boundary() {
    let mut cpu = setup_cpu(&[0x00, 0x00]);

    cpu.request_interrupt(1);
    assert_eq!(cpu.run_state(), RunState::InterruptPending);

    // Host disables interrupts before the engine reaches the boundary
    cpu.state_mut().inte = false;

    assert_eq!(cpu.step(), Ok(4));
    assert_eq!(cpu.pc(), 0x0001);
    assert_eq!(cpu.run_state(), RunState::Running);
}

#[test]
fn test_repeated_requests_collapse() {
    let mut cpu = setup_cpu(&[0x00]);

    cpu.request_interrupt(1);
    cpu.request_interrupt(1);
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x0008);

    // Second request did not queue: INTE is now clear and nothing is pending
    assert_eq!(cpu.run_state(), RunState::Running);
    assert_eq!(cpu.sp(), 0x23FE);
}

#[test]
fn test_hlt_waits_for_interrupt() {
    // 0000: HLT / MVI A,01
    let mut cpu = setup_cpu(&[0x76, 0x3E, 0x01]);

    assert_eq!(cpu.step(), Ok(7));
    assert!(cpu.halted());
    assert_eq!(cpu.run_state(), RunState::Halted);
    assert_eq!(cpu.pc(), 0x0001);

    // Halted steps idle without fetching
    for _ in 0..3 {
        assert_eq!(cpu.step(), Ok(HALT_IDLE_CYCLES));
        assert_eq!(cpu.pc(), 0x0001);
    }

    cpu.request_interrupt(2);
    assert_eq!(cpu.step(), Ok(INTERRUPT_CYCLES));

    assert!(!cpu.halted());
    assert_eq!(cpu.pc(), 0x0010);
    // Return address is the instruction after HLT
    assert_eq!(cpu.bus().read_word(cpu.sp()), 0x0001);
}

#[test]
fn test_hlt_with_interrupts_disabled_stays_halted() {
    let mut cpu = setup_cpu(&[0xF3, 0x76]);

    cpu.step().unwrap();
    cpu.step().unwrap();
    cpu.request_interrupt(1);

    assert_eq!(cpu.run_for_cycles(50), Ok(50));
    assert!(cpu.halted());
    assert_eq!(cpu.pc(), 0x0002);
}

#[test]
fn test_interrupt_handler_round_trip() {
    // 0000: EI / NOP / NOP / NOP
    // 0008: INR B / EI / RET
    let mut program = vec![0u8; 0x10];
    program[0x00..0x04].copy_from_slice(&[0xFB, 0x00, 0x00, 0x00]);
    program[0x08..0x0B].copy_from_slice(&[0x04, 0xFB, 0xC9]);

    let mut cpu = setup_cpu(&program);
    cpu.state_mut().inte = false;

    cpu.step().unwrap(); // EI
    cpu.step().unwrap(); // NOP at 0001
    cpu.request_interrupt(1);

    cpu.step().unwrap(); // accept
    cpu.step().unwrap(); // INR B
    cpu.step().unwrap(); // EI
    cpu.step().unwrap(); // RET

    assert_eq!(cpu.state().b, 1);
    assert_eq!(cpu.pc(), 0x0002);
    assert_eq!(cpu.sp(), 0x2400);
    assert!(cpu.interrupts_enabled());
}

#[test]
fn test_ei_takes_effect_immediately() {
    // EI / NOP
    let mut cpu = setup_cpu(&[0xFB, 0x00]);
    cpu.state_mut().inte = false;

    cpu.step().unwrap();
    cpu.request_interrupt(3);

    assert_eq!(cpu.step(), Ok(INTERRUPT_CYCLES));
    assert_eq!(cpu.pc(), 0x0018);
}
