//! # Bus Abstraction
//!
//! This module provides the traits that decouple the CPU from the host's memory and
//! I/O implementation:
//!
//! - [`MemoryView`]: read-only access to the 16-bit memory space. This is all the
//!   decoder and the disassembler ever need.
//! - [`Bus`]: the full capability set the engine uses. Adds memory writes and the
//!   separate 8-bit port space used by `IN`/`OUT`.
//!
//! ## Design Principles
//!
//! - Memory and ports are distinct address spaces even where numbers coincide:
//!   `read_port(0x01)` never touches memory address 0x0001.
//! - No bus errors on individual accesses. A host that maps less than the full
//!   64 KiB reports unmapped addresses through [`MemoryView::is_mapped`], and the
//!   engine turns those into `ExecutionError::AddressOutOfRange`.
//! - 16-bit words in memory are little-endian, as on the real part.

/// Read-only view of the 16-bit memory space.
///
/// Implemented by every [`Bus`] and by plain byte slices, so the decoder can run
/// over live memory or over a snapshot.
///
/// # Examples
///
/// ```
/// use lib8080::MemoryView;
///
/// let image: &[u8] = &[0x3E, 0x05];
/// assert_eq!(image.read_byte(0x0000), 0x3E);
/// assert_eq!(image.read_word(0x0000), 0x053E);
/// ```
pub trait MemoryView {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// This method must never panic. Unmapped addresses may return any value.
    fn read_byte(&self, addr: u16) -> u8;

    /// Reports whether the address is backed by the host.
    ///
    /// Defaults to `true` for the full 64 KiB. Hosts that impose a smaller bound
    /// override this.
    fn is_mapped(&self, addr: u16) -> bool {
        let _ = addr;
        true
    }

    /// Reads a little-endian word. The high byte address wraps at 0xFFFF.
    fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read_byte(addr);
        let hi = self.read_byte(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }
}

/// Full bus capability set consumed by the execution engine.
///
/// # Implementing a Custom Bus
///
/// ```
/// use lib8080::{Bus, MemoryView};
///
/// struct RomRamBus {
///     rom: [u8; 0x2000], // 0x0000-0x1FFF
///     ram: [u8; 0x2000], // 0x2000-0x3FFF
///     last_out: (u8, u8),
/// }
///
/// impl MemoryView for RomRamBus {
///     fn read_byte(&self, addr: u16) -> u8 {
///         match addr {
///             0x0000..=0x1FFF => self.rom[addr as usize],
///             0x2000..=0x3FFF => self.ram[(addr - 0x2000) as usize],
///             _ => 0,
///         }
///     }
///
///     fn is_mapped(&self, addr: u16) -> bool {
///         addr < 0x4000
///     }
/// }
///
/// impl Bus for RomRamBus {
///     fn write_byte(&mut self, addr: u16, value: u8) {
///         // Writes to ROM are silently ignored
///         if (0x2000..0x4000).contains(&addr) {
///             self.ram[(addr - 0x2000) as usize] = value;
///         }
///     }
///
///     fn read_port(&mut self, _port: u8) -> u8 {
///         0xFF
///     }
///
///     fn write_port(&mut self, port: u8, value: u8) {
///         self.last_out = (port, value);
///     }
/// }
/// ```
pub trait Bus: MemoryView {
    /// Writes a byte to the specified 16-bit address.
    ///
    /// Writes to read-only or unmapped regions may be ignored.
    fn write_byte(&mut self, addr: u16, value: u8);

    /// Reads from an input port (`IN`).
    ///
    /// Takes `&mut self` because port reads may have side effects on the host.
    fn read_port(&mut self, port: u8) -> u8;

    /// Writes to an output port (`OUT`).
    fn write_port(&mut self, port: u8, value: u8);

    /// Writes a little-endian word. The high byte address wraps at 0xFFFF.
    fn write_word(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write_byte(addr, lo);
        self.write_byte(addr.wrapping_add(1), hi);
    }
}

impl MemoryView for [u8] {
    fn read_byte(&self, addr: u16) -> u8 {
        self.get(addr as usize).copied().unwrap_or(0)
    }

    fn is_mapped(&self, addr: u16) -> bool {
        (addr as usize) < self.len()
    }
}

impl<const N: usize> MemoryView for [u8; N] {
    fn read_byte(&self, addr: u16) -> u8 {
        self.as_slice().read_byte(addr)
    }

    fn is_mapped(&self, addr: u16) -> bool {
        self.as_slice().is_mapped(addr)
    }
}

impl MemoryView for Vec<u8> {
    fn read_byte(&self, addr: u16) -> u8 {
        self.as_slice().read_byte(addr)
    }

    fn is_mapped(&self, addr: u16) -> bool {
        self.as_slice().is_mapped(addr)
    }
}

/// Simple 64 KiB flat memory with latched ports.
///
/// All 65536 addresses are writable RAM initialized to 0x00. Input ports return
/// whatever the host last stored with [`FlatBus::set_input`]; output ports latch
/// the last value written by the program, readable with [`FlatBus::output`].
///
/// Useful for testing and for running CPU exercisers that do not need any
/// memory-mapped hardware.
///
/// # Examples
///
/// ```
/// use lib8080::{Bus, FlatBus, MemoryView};
///
/// let mut bus = FlatBus::new();
/// bus.write_byte(0x2000, 0x42);
/// assert_eq!(bus.read_byte(0x2000), 0x42);
///
/// bus.set_input(0x01, 0x08);
/// assert_eq!(bus.read_port(0x01), 0x08);
/// // Ports and memory are separate spaces
/// assert_eq!(bus.read_byte(0x0001), 0x00);
/// ```
pub struct FlatBus {
    /// 64KB contiguous memory array
    data: Box<[u8; 65536]>,

    inputs: [u8; 256],

    outputs: [u8; 256],
}

impl FlatBus {
    /// Creates a new FlatBus with all memory and ports zeroed.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
            inputs: [0; 256],
            outputs: [0; 256],
        }
    }

    /// Creates a FlatBus with `program` copied to address 0x0000.
    ///
    /// Bytes beyond 64 KiB are dropped.
    pub fn with_program(program: &[u8]) -> Self {
        let mut bus = Self::new();
        bus.load(0x0000, program);
        bus
    }

    /// Copies `bytes` into memory starting at `addr`, wrapping at 0xFFFF.
    pub fn load(&mut self, addr: u16, bytes: &[u8]) {
        for (offset, &byte) in bytes.iter().take(0x10000).enumerate() {
            self.data[addr.wrapping_add(offset as u16) as usize] = byte;
        }
    }

    /// Sets the value returned by subsequent `IN port` instructions.
    pub fn set_input(&mut self, port: u8, value: u8) {
        self.inputs[port as usize] = value;
    }

    /// Returns the last value the program wrote with `OUT port`.
    pub fn output(&self, port: u8) -> u8 {
        self.outputs[port as usize]
    }

    /// Borrows the whole memory image.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }
}

impl Default for FlatBus {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryView for FlatBus {
    fn read_byte(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }
}

impl Bus for FlatBus {
    fn write_byte(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }

    fn read_port(&mut self, port: u8) -> u8 {
        self.inputs[port as usize]
    }

    fn write_port(&mut self, port: u8, value: u8) {
        self.outputs[port as usize] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_bus_read_write() {
        let mut bus = FlatBus::new();

        // Initially all zeros
        assert_eq!(bus.read_byte(0x0000), 0x00);
        assert_eq!(bus.read_byte(0xFFFF), 0x00);

        // Write and read back
        bus.write_byte(0x1234, 0x42);
        assert_eq!(bus.read_byte(0x1234), 0x42);

        // Verify other addresses unchanged
        assert_eq!(bus.read_byte(0x1233), 0x00);
        assert_eq!(bus.read_byte(0x1235), 0x00);
    }

    #[test]
    fn test_word_access_is_little_endian() {
        let mut bus = FlatBus::new();
        bus.write_word(0x2000, 0xBEEF);
        assert_eq!(bus.read_byte(0x2000), 0xEF);
        assert_eq!(bus.read_byte(0x2001), 0xBE);
        assert_eq!(bus.read_word(0x2000), 0xBEEF);
    }

    #[test]
    fn test_word_access_wraps() {
        let mut bus = FlatBus::new();
        bus.write_word(0xFFFF, 0x1234);
        assert_eq!(bus.read_byte(0xFFFF), 0x34);
        assert_eq!(bus.read_byte(0x0000), 0x12);
        assert_eq!(bus.read_word(0xFFFF), 0x1234);
    }

    #[test]
    fn test_ports_are_separate_from_memory() {
        let mut bus = FlatBus::new();
        bus.write_port(0x03, 0x77);
        assert_eq!(bus.output(0x03), 0x77);
        assert_eq!(bus.read_byte(0x0003), 0x00);
        // Output latches do not feed back into inputs
        assert_eq!(bus.read_port(0x03), 0x00);
    }

    #[test]
    fn test_slice_view_bounds() {
        let image: &[u8] = &[0xC3, 0x00];
        assert!(image.is_mapped(0x0001));
        assert!(!image.is_mapped(0x0002));
        assert_eq!(image.read_byte(0x0002), 0x00);
    }
}
