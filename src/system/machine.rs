//! Frame driver.
//!
//! The arcade video hardware raises two interrupts per 60 Hz frame: RST 1 when
//! the beam reaches the middle of the screen and RST 2 at vertical blank. The
//! game splits its drawing work around them, so the CPU has to be run in two
//! half-frame slices with the matching interrupt requested after each.

use tracing::debug;

use super::invaders_bus::{InvadersBus, ROM_SIZE};
use crate::cpu::{Cpu, CpuConfig};
use crate::devices::{DipSwitches, Input};
use crate::ExecutionError;

/// RST vector raised when the beam is mid-screen.
pub const MID_SCREEN_VECTOR: u8 = 1;
/// RST vector raised at vertical blank.
pub const VBLANK_VECTOR: u8 = 2;

/// Errors from machine setup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MachineError {
    #[error("ROM image is {size} bytes, at most {max} fit")]
    RomTooLarge { size: usize, max: usize },
}

/// Machine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MachineConfig {
    /// CPU clock in Hz
    pub clock_hz: u32,
    /// Video refresh rate
    pub frames_per_second: u32,
    /// Factory DIP switch settings
    pub dip: DipSwitches,
    /// Engine configuration
    pub cpu: CpuConfig,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            clock_hz: 2_000_000,
            frames_per_second: 60,
            dip: DipSwitches::default(),
            cpu: CpuConfig::default(),
        }
    }
}

impl MachineConfig {
    /// CPU cycles per video frame (33 333 at the defaults).
    pub fn cycles_per_frame(&self) -> u64 {
        self.clock_hz as u64 / self.frames_per_second.max(1) as u64
    }
}

/// An arcade machine: CPU, board bus and frame timing.
///
/// # Examples
///
/// ```rust
/// use lib8080::{Machine, MachineConfig};
///
/// // LXI SP,2400 / EI / loop: JMP loop
/// let rom = [0x31, 0x00, 0x24, 0xFB, 0xC3, 0x04, 0x00];
///
/// let mut machine = Machine::new(MachineConfig::default());
/// machine.load_rom(&rom).unwrap();
///
/// let cycles = machine.run_frame().unwrap();
/// assert!(cycles >= MachineConfig::default().cycles_per_frame());
/// assert_eq!(machine.frame_count(), 1);
/// ```
pub struct Machine {
    cpu: Cpu<InvadersBus>,
    config: MachineConfig,
    frame_count: u64,
}

impl Machine {
    pub fn new(config: MachineConfig) -> Self {
        Self {
            cpu: Cpu::with_config(InvadersBus::new(config.dip), config.cpu),
            config,
            frame_count: 0,
        }
    }

    /// Loads a program ROM at address 0 and resets the CPU.
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<(), MachineError> {
        if rom.len() > ROM_SIZE {
            return Err(MachineError::RomTooLarge {
                size: rom.len(),
                max: ROM_SIZE,
            });
        }

        self.cpu.bus_mut().load_rom(rom);
        self.reset();
        debug!(size = rom.len(), "ROM loaded");
        Ok(())
    }

    /// Resets the CPU and the frame counter. Memory is preserved.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.frame_count = 0;
    }

    /// Runs one video frame and returns the cycles executed.
    ///
    /// Half a frame of cycles, RST 1, the other half, RST 2. Each interrupt is
    /// serviced at the start of the following slice if the game has interrupts
    /// enabled by then.
    ///
    /// An error abandons the frame: the remaining interrupt requests are not
    /// raised and [`Machine::frame_count`] is not advanced. The cycles executed
    /// before the fault are still reflected in `cpu().cycles()`.
    pub fn run_frame(&mut self) -> Result<u64, ExecutionError> {
        let frame = self.config.cycles_per_frame();
        let half = frame / 2;

        let mut cycles = self.cpu.run_for_cycles(half)?;
        self.cpu.request_interrupt(MID_SCREEN_VECTOR);

        cycles += self.cpu.run_for_cycles(frame - half)?;
        self.cpu.request_interrupt(VBLANK_VECTOR);

        self.frame_count += 1;
        Ok(cycles)
    }

    pub fn press(&mut self, input: Input) {
        self.cpu.bus_mut().inputs.press(input);
    }

    pub fn release(&mut self, input: Input) {
        self.cpu.bus_mut().inputs.release(input);
    }

    /// The 7 KiB of video RAM, one bit per pixel.
    pub fn video_ram(&self) -> &[u8] {
        self.cpu.bus().video_ram()
    }

    /// Last values written to sound ports 3 and 5.
    pub fn sound_latches(&self) -> (u8, u8) {
        self.cpu.bus().sound_latches()
    }

    /// Frames run since the last reset.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn config(&self) -> MachineConfig {
        self.config
    }

    pub fn cpu(&self) -> &Cpu<InvadersBus> {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut Cpu<InvadersBus> {
        &mut self.cpu
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new(MachineConfig::default())
    }
}
