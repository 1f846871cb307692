//! # Intel 8080 CPU Emulator Core
//!
//! A cycle-counting Intel 8080 emulator designed to run period arcade ROMs, with a
//! table-driven decoder shared by the execution engine and the disassembler.
//!
//! This crate provides the processor state, a trait-based memory/port bus
//! abstraction, the fetch-decode-execute engine with single-slot interrupt
//! delivery, a disassembler, and a minimal arcade machine (memory map, shift
//! register, input ports, two interrupts per frame) built on top of them.
//!
//! ## Quick Start
//!
//! ```rust
//! use lib8080::{disassemble, Cpu, FlatBus, MemoryView};
//!
//! // MVI A,05 / ADI 03 / STA 2000
//! let program = [0x3E, 0x05, 0xC6, 0x03, 0x32, 0x00, 0x20];
//!
//! let mut cpu = Cpu::new(FlatBus::with_program(&program));
//! for _ in 0..3 {
//!     cpu.step().unwrap();
//! }
//! assert_eq!(cpu.a(), 0x08);
//! assert_eq!(cpu.bus().read_byte(0x2000), 0x08);
//!
//! let listing: Vec<String> = disassemble(&program, 0x0000, program.len())
//!     .map(|line| line.text)
//!     .collect();
//! assert_eq!(listing, ["MVI A,05", "ADI 03", "STA 2000"]);
//! ```
//!
//! ## Architecture
//!
//! - **Table-Driven Design**: one `OPCODE_TABLE` feeds both the engine and the disassembler
//! - **Owned State**: every `Cpu` owns its registers and bus; no global state
//! - **Step Boundaries**: interrupts are only recognized between instructions
//! - **Cycle Counting**: every step reports the cycles it consumed
//!
//! ## Modules
//!
//! - `cpu` - Execution engine
//! - `state` - Registers, flags and PSW packing
//! - `memory` - `MemoryView`/`Bus` traits and `FlatBus`
//! - `opcodes` - Opcode metadata table
//! - `decoder` - Byte stream to `Instruction`
//! - `disassembler` - Listing generation
//! - `devices` - Arcade port hardware
//! - `system` - Arcade memory map and frame driver

pub mod addressing;
pub mod cpu;
pub mod decoder;
pub mod devices;
pub mod disassembler;
pub mod memory;
pub mod opcodes;
pub mod state;
pub mod system;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::AddressingMode;
pub use cpu::{Cpu, CpuConfig, RunState, UndocumentedOpcodes, HALT_IDLE_CYCLES, INTERRUPT_CYCLES};
pub use decoder::{decode, Instruction};
pub use devices::{DipSwitches, Input, InputPorts, ShiftRegister};
pub use disassembler::{disassemble, Disassembly, DisassemblyOptions, ListingLine};
pub use memory::{Bus, FlatBus, MemoryView};
pub use opcodes::{
    decode_meta, AluOp, Condition, FlagEffect, OpcodeMetadata, Operation, Reg, RegPair,
    OPCODE_TABLE,
};
pub use state::{CpuState, Flags};
pub use system::{InvadersBus, Machine, MachineConfig, MachineError};

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    /// An undocumented opcode was fetched while running with
    /// [`UndocumentedOpcodes::Trap`]. PC still points at it.
    #[error("opcode 0x{opcode:02X} at 0x{pc:04X} is not implemented")]
    UnimplementedOpcode { opcode: u8, pc: u16 },

    /// The bus reported the address as unmapped.
    #[error("address 0x{address:04X} is out of range")]
    AddressOutOfRange { address: u16 },
}
