//! WebAssembly bindings for the lib8080 emulator.
//!
//! This module provides JavaScript-callable interfaces to the arcade machine,
//! enabling browser-based execution of 8080 ROMs.

pub mod api;

pub use api::{DisassemblyLine, Emulator8080, JsError};
