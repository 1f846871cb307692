//! # CPU State
//!
//! The 8080 register file, status flags, program counter, stack pointer and the
//! two latches (interrupt enable, halt). `CpuState` is plain data: it is owned by
//! the [`Cpu`](crate::Cpu) engine and handed out by value through
//! [`Cpu::snapshot`](crate::Cpu::snapshot), so a copy never aliases live state.
//!
//! ## Flag Byte Layout
//!
//! When the flags are pushed with `PUSH PSW` they are packed as `S Z 0 AC 0 P 1 CY`:
//! - Bit 7: S (Sign)
//! - Bit 6: Z (Zero)
//! - Bit 5: always 0
//! - Bit 4: AC (Auxiliary Carry)
//! - Bit 3: always 0
//! - Bit 2: P (Parity)
//! - Bit 1: always 1
//! - Bit 0: CY (Carry)

use crate::opcodes::{Condition, Reg, RegPair};

/// The five 8080 status flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags {
    /// Sign: bit 7 of the result.
    pub s: bool,
    /// Zero: result was zero.
    pub z: bool,
    /// Auxiliary carry: carry out of bit 3.
    pub ac: bool,
    /// Parity: result has an even number of set bits.
    pub p: bool,
    /// Carry: carry out of bit 7 (or bit 15 for DAD), borrow for subtraction.
    pub cy: bool,
}

impl Flags {
    const SIGN: u8 = 0b1000_0000;
    const ZERO: u8 = 0b0100_0000;
    const AUX_CARRY: u8 = 0b0001_0000;
    const PARITY: u8 = 0b0000_0100;
    const FIXED_ONE: u8 = 0b0000_0010;
    const CARRY: u8 = 0b0000_0001;

    /// Packs the flags into the byte pushed by `PUSH PSW`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib8080::Flags;
    ///
    /// let flags = Flags { z: true, cy: true, ..Flags::default() };
    /// assert_eq!(flags.to_byte(), 0b0100_0011);
    /// assert_eq!(Flags::default().to_byte(), 0b0000_0010);
    /// ```
    pub fn to_byte(self) -> u8 {
        let mut byte = Self::FIXED_ONE;

        if self.s {
            byte |= Self::SIGN;
        }
        if self.z {
            byte |= Self::ZERO;
        }
        if self.ac {
            byte |= Self::AUX_CARRY;
        }
        if self.p {
            byte |= Self::PARITY;
        }
        if self.cy {
            byte |= Self::CARRY;
        }

        byte
    }

    /// Unpacks a flag byte popped by `POP PSW`. Reserved bits are ignored.
    pub fn from_byte(byte: u8) -> Self {
        Self {
            s: byte & Self::SIGN != 0,
            z: byte & Self::ZERO != 0,
            ac: byte & Self::AUX_CARRY != 0,
            p: byte & Self::PARITY != 0,
            cy: byte & Self::CARRY != 0,
        }
    }

    /// Sets Sign, Zero and Parity from an 8-bit result.
    pub fn set_szp(&mut self, result: u8) {
        self.s = result & 0x80 != 0;
        self.z = result == 0;
        self.p = parity(result);
    }

    /// Evaluates a branch condition against the current flags.
    pub fn test(&self, condition: Condition) -> bool {
        match condition {
            Condition::NotZero => !self.z,
            Condition::Zero => self.z,
            Condition::NoCarry => !self.cy,
            Condition::Carry => self.cy,
            Condition::ParityOdd => !self.p,
            Condition::ParityEven => self.p,
            Condition::Plus => !self.s,
            Condition::Minus => self.s,
        }
    }
}

/// Even parity of an 8-bit value.
#[inline]
pub fn parity(value: u8) -> bool {
    value.count_ones() % 2 == 0
}

/// Complete 8080 processor state.
///
/// # Examples
///
/// ```
/// use lib8080::{CpuState, RegPair};
///
/// let mut state = CpuState::new();
/// state.set_pair(RegPair::HL, 0x2400);
/// assert_eq!(state.h, 0x24);
/// assert_eq!(state.l, 0x00);
/// assert_eq!(state.pair(RegPair::HL), 0x2400);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CpuState {
    pub a: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,

    /// Status flags
    pub flags: Flags,

    /// Program counter (address of next instruction)
    pub pc: u16,

    /// Stack pointer (grows downward)
    pub sp: u16,

    /// Interrupt-enable latch (INTE)
    pub inte: bool,

    /// Set by HLT, cleared when an interrupt is accepted
    pub halted: bool,
}

impl CpuState {
    /// Power-on state: PC = 0, flags cleared, interrupts disabled, not halted.
    ///
    /// The 8080 does not initialize SP or the general registers on reset; they
    /// are zeroed here and the program is expected to set SP itself.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads an 8-bit register. `Reg::M` is a memory operand; [`crate::Cpu`]
    /// resolves it through HL and the bus, so here it reads as 0.
    pub(crate) fn reg(&self, reg: Reg) -> u8 {
        match reg {
            Reg::B => self.b,
            Reg::C => self.c,
            Reg::D => self.d,
            Reg::E => self.e,
            Reg::H => self.h,
            Reg::L => self.l,
            Reg::A => self.a,
            Reg::M => 0,
        }
    }

    /// Writes an 8-bit register. `Reg::M` writes go through [`crate::Cpu`].
    pub(crate) fn set_reg(&mut self, reg: Reg, value: u8) {
        match reg {
            Reg::B => self.b = value,
            Reg::C => self.c = value,
            Reg::D => self.d = value,
            Reg::E => self.e = value,
            Reg::H => self.h = value,
            Reg::L => self.l = value,
            Reg::A => self.a = value,
            Reg::M => {}
        }
    }

    /// Reads a register pair, high register first (B is the high byte of BC).
    pub fn pair(&self, pair: RegPair) -> u16 {
        match pair {
            RegPair::BC => u16::from_be_bytes([self.b, self.c]),
            RegPair::DE => u16::from_be_bytes([self.d, self.e]),
            RegPair::HL => u16::from_be_bytes([self.h, self.l]),
            RegPair::SP => self.sp,
            RegPair::PSW => u16::from_be_bytes([self.a, self.flags.to_byte()]),
        }
    }

    /// Writes a register pair, high register first.
    pub fn set_pair(&mut self, pair: RegPair, value: u16) {
        let [hi, lo] = value.to_be_bytes();
        match pair {
            RegPair::BC => {
                self.b = hi;
                self.c = lo;
            }
            RegPair::DE => {
                self.d = hi;
                self.e = lo;
            }
            RegPair::HL => {
                self.h = hi;
                self.l = lo;
            }
            RegPair::SP => self.sp = value,
            RegPair::PSW => {
                self.a = hi;
                self.flags = Flags::from_byte(lo);
            }
        }
    }

    /// The HL pair, used as the address of the `M` operand.
    #[inline]
    pub fn hl(&self) -> u16 {
        self.pair(RegPair::HL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_byte_reserved_bits() {
        let all = Flags {
            s: true,
            z: true,
            ac: true,
            p: true,
            cy: true,
        };
        assert_eq!(all.to_byte(), 0b1101_0111);

        // Reserved bits never leak into the flags
        assert_eq!(Flags::from_byte(0b0010_1010), Flags::default());
        assert_eq!(Flags::from_byte(all.to_byte()), all);
    }

    #[test]
    fn test_parity() {
        assert!(parity(0x00));
        assert!(!parity(0x01));
        assert!(parity(0x03));
        assert!(parity(0xFF));
        assert!(!parity(0x80));
    }

    #[test]
    fn test_register_field_order() {
        let regs = [Reg::B, Reg::C, Reg::D, Reg::E, Reg::H, Reg::L, Reg::A];
        let mut state = CpuState::new();

        for (value, &reg) in (1u8..).zip(regs.iter()) {
            state.set_reg(reg, value);
        }

        assert_eq!(
            (state.b, state.c, state.d, state.e, state.h, state.l, state.a),
            (1, 2, 3, 4, 5, 6, 7)
        );
        assert!(regs.iter().all(|&reg| state.reg(reg) != 0));

        // Memory operand never touches the register file
        state.set_reg(Reg::M, 0xFF);
        assert_eq!(state.reg(Reg::M), 0);
        assert_eq!(state.h, 5);
    }

    #[test]
    fn test_pairs_are_high_register_first() {
        let mut state = CpuState::new();
        state.b = 0x18;
        state.c = 0xD4;
        assert_eq!(state.pair(RegPair::BC), 0x18D4);

        state.set_pair(RegPair::DE, 0xBEEF);
        assert_eq!((state.d, state.e), (0xBE, 0xEF));
    }

    #[test]
    fn test_psw_pair() {
        let mut state = CpuState::new();
        state.set_pair(RegPair::PSW, 0x42FF);
        assert_eq!(state.a, 0x42);
        assert!(state.flags.s && state.flags.z && state.flags.ac && state.flags.p && state.flags.cy);
        assert_eq!(state.pair(RegPair::PSW), 0x42D7);
    }

    #[test]
    fn test_conditions() {
        let flags = Flags {
            z: true,
            cy: false,
            s: true,
            p: false,
            ac: false,
        };
        assert!(flags.test(Condition::Zero));
        assert!(!flags.test(Condition::NotZero));
        assert!(flags.test(Condition::NoCarry));
        assert!(flags.test(Condition::Minus));
        assert!(flags.test(Condition::ParityOdd));
    }
}
