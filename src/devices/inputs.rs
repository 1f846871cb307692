//! Arcade input ports and DIP switches.
//!
//! Port 1 carries the coin slot, start buttons and player 1 controls. Port 2
//! carries the DIP switches, the tilt switch and player 2 controls. Every input
//! bit is active high.
//!
//! | Bit | Port 1          | Port 2                      |
//! |-----|-----------------|-----------------------------|
//! | 0   | Coin            | Lives (DIP, low bit)        |
//! | 1   | P2 Start        | Lives (DIP, high bit)       |
//! | 2   | P1 Start        | Tilt                        |
//! | 3   | always 1        | Bonus life at 1000 (DIP)    |
//! | 4   | P1 Fire         | P2 Fire                     |
//! | 5   | P1 Left         | P2 Left                     |
//! | 6   | P1 Right        | P2 Right                    |
//! | 7   | unused          | Coin info off (DIP)         |

/// Port 0 reads back a fixed pattern on this board.
pub const PORT0_FIXED: u8 = 0x0E;

const PORT1_ALWAYS_SET: u8 = 0x08;

/// A host-driven input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    Coin,
    P1Start,
    P2Start,
    P1Fire,
    P1Left,
    P1Right,
    P2Fire,
    P2Left,
    P2Right,
    Tilt,
}

impl Input {
    /// Every input, in a stable order (index used by the WASM bindings).
    pub const ALL: [Input; 10] = [
        Input::Coin,
        Input::P1Start,
        Input::P2Start,
        Input::P1Fire,
        Input::P1Left,
        Input::P1Right,
        Input::P2Fire,
        Input::P2Left,
        Input::P2Right,
        Input::Tilt,
    ];

    /// Port number and bit mask this input drives.
    pub const fn port_bit(self) -> (u8, u8) {
        match self {
            Input::Coin => (1, 0x01),
            Input::P2Start => (1, 0x02),
            Input::P1Start => (1, 0x04),
            Input::P1Fire => (1, 0x10),
            Input::P1Left => (1, 0x20),
            Input::P1Right => (1, 0x40),
            Input::Tilt => (2, 0x04),
            Input::P2Fire => (2, 0x10),
            Input::P2Left => (2, 0x20),
            Input::P2Right => (2, 0x40),
        }
    }
}

/// Factory DIP switch settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DipSwitches {
    /// Ships per game, 3 to 6 (clamped)
    pub lives: u8,

    /// Extra ship at 1000 points instead of 1500
    pub bonus_life_at_1000: bool,

    /// Show coin information on the attract screen
    pub coin_info: bool,
}

impl Default for DipSwitches {
    fn default() -> Self {
        Self {
            lives: 3,
            bonus_life_at_1000: false,
            coin_info: true,
        }
    }
}

impl DipSwitches {
    /// The DIP bits as they appear on port 2.
    pub fn bits(&self) -> u8 {
        let mut bits = self.lives.clamp(3, 6) - 3;
        if self.bonus_life_at_1000 {
            bits |= 0x08;
        }
        if !self.coin_info {
            bits |= 0x80;
        }
        bits
    }
}

/// Latched state of input ports 1 and 2.
///
/// # Examples
///
/// ```rust
/// use lib8080::{DipSwitches, Input, InputPorts};
///
/// let mut inputs = InputPorts::new(DipSwitches::default());
/// assert_eq!(inputs.port1(), 0x08);
///
/// inputs.press(Input::Coin);
/// inputs.press(Input::P1Fire);
/// assert_eq!(inputs.port1(), 0x19);
///
/// inputs.release(Input::Coin);
/// assert_eq!(inputs.port1(), 0x18);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputPorts {
    port1: u8,
    port2: u8,
    dip: DipSwitches,
}

impl InputPorts {
    pub fn new(dip: DipSwitches) -> Self {
        Self {
            port1: 0,
            port2: 0,
            dip,
        }
    }

    /// Assert an input line.
    pub fn press(&mut self, input: Input) {
        self.set(input, true);
    }

    /// Release an input line.
    pub fn release(&mut self, input: Input) {
        self.set(input, false);
    }

    pub fn set(&mut self, input: Input, pressed: bool) {
        let (port, mask) = input.port_bit();
        let latch = if port == 1 {
            &mut self.port1
        } else {
            &mut self.port2
        };

        if pressed {
            *latch |= mask;
        } else {
            *latch &= !mask;
        }
    }

    pub fn is_pressed(&self, input: Input) -> bool {
        let (port, mask) = input.port_bit();
        let latch = if port == 1 { self.port1 } else { self.port2 };
        latch & mask != 0
    }

    /// Value the CPU reads from port 1.
    pub fn port1(&self) -> u8 {
        self.port1 | PORT1_ALWAYS_SET
    }

    /// Value the CPU reads from port 2.
    pub fn port2(&self) -> u8 {
        self.port2 | self.dip.bits()
    }

    pub fn dip(&self) -> DipSwitches {
        self.dip
    }

    pub fn set_dip(&mut self, dip: DipSwitches) {
        self.dip = dip;
    }
}

impl Default for InputPorts {
    fn default() -> Self {
        Self::new(DipSwitches::default())
    }
}
