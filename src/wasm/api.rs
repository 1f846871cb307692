//! WASM API for the 8080 arcade emulator.
//!
//! Provides JavaScript-callable interfaces for frame stepping, input, state
//! inspection, and disassembly.

use crate::{Input, Machine, MachineConfig};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

/// One line of a disassembly listing
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct DisassemblyLine {
    address: u16,
    bytes: Vec<u8>,
    text: String,
}

#[wasm_bindgen]
impl DisassemblyLine {
    #[wasm_bindgen(getter)]
    pub fn address(&self) -> u16 {
        self.address
    }

    #[wasm_bindgen(getter)]
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// Mnemonic and operands, e.g. `MVI A,05`
    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Emulator8080 {
    machine: Machine,
}

#[wasm_bindgen]
impl Emulator8080 {
    /// Create an arcade machine with default DIP switches
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Emulator8080 {
            machine: Machine::new(MachineConfig::default()),
        }
    }

    /// Load a program ROM (at most 8 KiB) and reset
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<(), JsError> {
        self.machine
            .load_rom(rom)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Run one video frame and return the cycles executed
    pub fn run_frame(&mut self) -> Result<f64, JsError> {
        self.machine
            .run_frame()
            .map(|cycles| cycles as f64)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Execute a single step
    pub fn step(&mut self) -> Result<u32, JsError> {
        self.machine
            .cpu_mut()
            .step()
            .map_err(|e| JsError::new(&e.to_string()))
    }

    pub fn reset(&mut self) {
        self.machine.reset();
    }

    /// Press an input by index (see `Input::ALL`); unknown indices are ignored
    pub fn press(&mut self, input: usize) {
        if let Some(&input) = Input::ALL.get(input) {
            self.machine.press(input);
        }
    }

    /// Release an input by index
    pub fn release(&mut self, input: usize) {
        if let Some(&input) = Input::ALL.get(input) {
            self.machine.release(input);
        }
    }

    /// Copy of video RAM (7168 bytes, 1 bit per pixel)
    pub fn video_ram(&self) -> js_sys::Uint8Array {
        js_sys::Uint8Array::from(self.machine.video_ram())
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.machine.cpu().a()
    }

    #[wasm_bindgen(getter)]
    pub fn bc(&self) -> u16 {
        self.machine.cpu().state().pair(crate::RegPair::BC)
    }

    #[wasm_bindgen(getter)]
    pub fn de(&self) -> u16 {
        self.machine.cpu().state().pair(crate::RegPair::DE)
    }

    #[wasm_bindgen(getter)]
    pub fn hl(&self) -> u16 {
        self.machine.cpu().state().hl()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.machine.cpu().pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u16 {
        self.machine.cpu().sp()
    }

    /// Packed flag byte (`S Z 0 AC 0 P 1 CY`)
    #[wasm_bindgen(getter)]
    pub fn flags(&self) -> u8 {
        self.machine.cpu().flags().to_byte()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.machine.cpu().cycles() as f64
    }

    #[wasm_bindgen(getter)]
    pub fn frame_count(&self) -> f64 {
        self.machine.frame_count() as f64
    }

    /// Disassemble `length` bytes of memory starting at an address.
    ///
    /// Mirrored addresses (0x4000 and above) are listed from the 16 KiB image.
    pub fn disassemble(&self, start_addr: u16, length: u32) -> Vec<JsValue> {
        self.machine
            .cpu()
            .bus()
            .disassemble(start_addr, length as usize)
            .map(|line| {
                let mut bytes = vec![line.instruction.opcode];
                bytes.extend_from_slice(line.instruction.operands());

                JsValue::from(DisassemblyLine {
                    address: line.address,
                    bytes,
                    text: line.text,
                })
            })
            .collect()
    }
}

impl Default for Emulator8080 {
    fn default() -> Self {
        Self::new()
    }
}
