//! Arcade board memory map and port decoding.
//!
//! Memory Map:
//! - $0000-$1FFF: Program ROM (writes ignored)
//! - $2000-$23FF: Work RAM
//! - $2400-$3FFF: Video RAM (256x224, 1 bit per pixel, rotated)
//! - $4000-$FFFF: Mirror of $0000-$3FFF
//!
//! Ports:
//! - IN 0: fixed bits, IN 1: player 1 / coin / start, IN 2: DIPs / player 2,
//!   IN 3: shift register result
//! - OUT 2: shift amount, OUT 3: sound latch 1, OUT 4: shift data,
//!   OUT 5: sound latch 2, OUT 6: watchdog

use tracing::{debug, trace};

use crate::devices::{DipSwitches, InputPorts, ShiftRegister, PORT0_FIXED};
use crate::disassembler::{disassemble, Disassembly};
use crate::memory::{Bus, MemoryView};

/// Program ROM size.
pub const ROM_SIZE: usize = 0x2000;
/// Work RAM start address.
pub const RAM_START: u16 = 0x2000;
/// Video RAM start address.
pub const VRAM_START: u16 = 0x2400;
/// Video RAM size (256 x 224 / 8).
pub const VRAM_SIZE: usize = 0x1C00;

const ADDRESS_MASK: u16 = 0x3FFF;
const MEMORY_SIZE: usize = 0x4000;

/// Bus for the arcade board: 16 KiB of mirrored memory plus port hardware.
pub struct InvadersBus {
    memory: Box<[u8; MEMORY_SIZE]>,

    /// External shift register (ports 2, 3, 4).
    pub shifter: ShiftRegister,

    /// Player inputs and DIP switches (ports 1, 2).
    pub inputs: InputPorts,

    sound1: u8,
    sound2: u8,
    watchdog: u8,
}

impl InvadersBus {
    pub fn new(dip: DipSwitches) -> Self {
        Self {
            memory: Box::new([0; MEMORY_SIZE]),
            shifter: ShiftRegister::new(),
            inputs: InputPorts::new(dip),
            sound1: 0,
            sound2: 0,
            watchdog: 0,
        }
    }

    /// Copies a ROM image to address 0, bypassing write protection.
    ///
    /// The whole ROM area is cleared first, so a shorter image leaves no bytes of
    /// a previous one behind. Images larger than [`ROM_SIZE`] are truncated;
    /// [`super::Machine::load_rom`] rejects them before getting here.
    pub fn load_rom(&mut self, rom: &[u8]) {
        let len = rom.len().min(ROM_SIZE);
        self.memory[..ROM_SIZE].fill(0);
        self.memory[..len].copy_from_slice(&rom[..len]);
    }

    /// The 7 KiB of video RAM.
    pub fn video_ram(&self) -> &[u8] {
        let start = VRAM_START as usize;
        &self.memory[start..start + VRAM_SIZE]
    }

    /// The whole 16 KiB address space, e.g. as a disassembly snapshot.
    pub fn memory(&self) -> &[u8] {
        &self.memory[..]
    }

    /// Lists `length` bytes from `start` as the CPU sees them.
    ///
    /// Addresses at 0x4000 and above are folded onto the mirrored image, so the
    /// listing starts at `start & 0x3FFF`.
    pub fn disassemble(&self, start: u16, length: usize) -> Disassembly<'_> {
        disassemble(self.memory(), start & ADDRESS_MASK, length)
    }

    /// Last values written to sound ports 3 and 5.
    pub fn sound_latches(&self) -> (u8, u8) {
        (self.sound1, self.sound2)
    }

    /// Last value written to the watchdog port.
    pub fn watchdog(&self) -> u8 {
        self.watchdog
    }
}

impl Default for InvadersBus {
    fn default() -> Self {
        Self::new(DipSwitches::default())
    }
}

impl MemoryView for InvadersBus {
    fn read_byte(&self, addr: u16) -> u8 {
        self.memory[(addr & ADDRESS_MASK) as usize]
    }
}

impl Bus for InvadersBus {
    fn write_byte(&mut self, addr: u16, value: u8) {
        let addr = addr & ADDRESS_MASK;
        if addr < RAM_START {
            trace!(address = addr, value, "write to ROM ignored");
            return;
        }
        self.memory[addr as usize] = value;
    }

    fn read_port(&mut self, port: u8) -> u8 {
        match port {
            0 => PORT0_FIXED,
            1 => self.inputs.port1(),
            2 => self.inputs.port2(),
            3 => self.shifter.read(),
            _ => {
                debug!(port, "read from unknown port");
                0
            }
        }
    }

    fn write_port(&mut self, port: u8, value: u8) {
        match port {
            2 => self.shifter.set_offset(value),
            3 => self.sound1 = value,
            4 => self.shifter.write_data(value),
            5 => self.sound2 = value,
            6 => self.watchdog = value,
            _ => debug!(port, value, "write to unknown port"),
        }
    }
}
