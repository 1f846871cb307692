//! Arcade system integration and frame timing.
//!
//! This module provides the board-level [`InvadersBus`] (memory map and port
//! decoding) and the [`Machine`] that drives the CPU one video frame at a time.

mod invaders_bus;
mod machine;

pub use invaders_bus::{InvadersBus, RAM_START, ROM_SIZE, VRAM_SIZE, VRAM_START};
pub use machine::{Machine, MachineConfig, MachineError, MID_SCREEN_VECTOR, VBLANK_VECTOR};
