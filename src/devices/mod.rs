//! Port-mapped arcade hardware for the 8080.
//!
//! The 8080 reaches peripherals through a separate 256-entry I/O port space
//! (`IN p` / `OUT p`). This module holds the small pieces of board logic that
//! sit behind those ports; [`crate::system::InvadersBus`] wires them to port
//! numbers.
//!
//! - **ShiftRegister**: 16-bit external shifter (OUT 2, OUT 4, IN 3)
//! - **InputPorts**: coin, start and player controls plus DIP switches (IN 1, IN 2)

pub mod inputs;
pub mod shift_register;

pub use inputs::{DipSwitches, Input, InputPorts, PORT0_FIXED};
pub use shift_register::ShiftRegister;
