//! Hardware bit-shift register.
//!
//! The 8080 has no barrel shifter, so arcade boards of the era carried a 16-bit
//! external one. Software writes bytes into it through one output port, selects
//! a shift amount through another, and reads the shifted window back from an
//! input port.

/// 16-bit shift register with a 3-bit read offset.
///
/// # Examples
///
/// ```rust
/// use lib8080::ShiftRegister;
///
/// let mut shifter = ShiftRegister::new();
/// shifter.write_data(0xAB); // value = 0xAB00
/// shifter.write_data(0xCD); // value = 0xCDAB
///
/// assert_eq!(shifter.read(), 0xCD);
///
/// shifter.set_offset(4);
/// assert_eq!(shifter.read(), 0xDA);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShiftRegister {
    value: u16,
    offset: u8,
}

impl ShiftRegister {
    /// Create a cleared shift register.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shift a byte in: it becomes the high byte, the old high byte becomes the low byte.
    pub fn write_data(&mut self, data: u8) {
        self.value = ((data as u16) << 8) | (self.value >> 8);
    }

    /// Set the read offset. Only the low three bits are used.
    pub fn set_offset(&mut self, offset: u8) {
        self.offset = offset & 0x07;
    }

    /// Read the 8-bit window starting `offset` bits below the top of the register.
    pub fn read(&self) -> u8 {
        (self.value >> (8 - self.offset)) as u8
    }

    /// The raw 16-bit contents.
    pub fn value(&self) -> u16 {
        self.value
    }

    pub fn offset(&self) -> u8 {
        self.offset
    }
}
