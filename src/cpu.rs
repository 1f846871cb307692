//! # CPU Engine
//!
//! This module contains the `Cpu` struct that owns the 8080 state and the bus, and the
//! fetch-decode-execute loop that advances it.
//!
//! ## Execution Model
//!
//! The host drives the engine synchronously:
//! - `step()`: service a pending interrupt, idle one tick while halted, or execute
//!   one instruction; returns the cycles consumed
//! - `run_for_cycles()`: step until a cycle budget is exhausted
//! - `request_interrupt()`: assert the interrupt line; recognized only at the next
//!   step boundary
//!
//! ## Interrupts
//!
//! A request is a single-slot, edge-triggered event. It is dropped, not queued,
//! if the interrupt-enable latch is clear when it is requested or when the next
//! step would accept it. Accepting clears the latch, releases HLT, pushes PC and
//! jumps to `vector * 8` (the RST n target), costing 11 cycles.

use tracing::{debug, trace, warn};

use crate::decoder::{decode, Instruction};
use crate::instructions;
use crate::opcodes::{decode_meta, Reg};
use crate::state::{CpuState, Flags};
use crate::{Bus, ExecutionError};

/// Cycles charged for a `step()` while halted with nothing to service.
pub const HALT_IDLE_CYCLES: u32 = 1;

/// Cycles charged for accepting an interrupt (the cost of the RST it jams).
pub const INTERRUPT_CYCLES: u32 = 11;

/// How the engine treats the twelve opcodes Intel left undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UndocumentedOpcodes {
    /// Execute the silicon alias (NOP, JMP, RET or CALL).
    #[default]
    Alias,
    /// Stop and return `ExecutionError::UnimplementedOpcode` without advancing PC.
    Trap,
}

/// Engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CpuConfig {
    /// Policy for undocumented opcodes
    pub undocumented: UndocumentedOpcodes,
}

/// Coarse engine state, derived from the latches and the interrupt slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Fetching and executing instructions
    Running,
    /// HLT executed; waiting for an interrupt
    Halted,
    /// An interrupt request will be considered at the next step
    InterruptPending,
}

/// Intel 8080 CPU engine.
///
/// Owns the processor state and the bus exclusively. It is generic over the bus
/// implementation via the [`Bus`] trait.
///
/// # Examples
///
/// ```
/// use lib8080::{Cpu, FlatBus, MemoryView};
///
/// // MVI A,05 / ADI 03 / STA 2000
/// let bus = FlatBus::with_program(&[0x3E, 0x05, 0xC6, 0x03, 0x32, 0x00, 0x20]);
/// let mut cpu = Cpu::new(bus);
///
/// for _ in 0..3 {
///     cpu.step().unwrap();
/// }
///
/// assert_eq!(cpu.a(), 8);
/// assert_eq!(cpu.bus().read_byte(0x2000), 8);
/// assert_eq!(cpu.cycles(), 7 + 7 + 13);
/// ```
pub struct Cpu<B: Bus> {
    pub(crate) state: CpuState,

    pub(crate) bus: B,

    /// Total CPU cycles executed
    pub(crate) cycles: u64,

    /// Single-slot interrupt line, holds the RST vector (0-7)
    pub(crate) pending_interrupt: Option<u8>,

    pub(crate) config: CpuConfig,
}

impl<B: Bus> Cpu<B> {
    /// Creates a new CPU in the power-on state with the given bus.
    ///
    /// PC is 0, flags are cleared, interrupts are disabled and the halt latch is
    /// clear. SP is 0 until the program loads it.
    pub fn new(bus: B) -> Self {
        Self::with_config(bus, CpuConfig::default())
    }

    /// Creates a new CPU with an explicit configuration.
    pub fn with_config(bus: B, config: CpuConfig) -> Self {
        Self {
            state: CpuState::new(),
            bus,
            cycles: 0,
            pending_interrupt: None,
            config,
        }
    }

    /// Reinitializes the CPU to power-on values. Memory is left untouched.
    pub fn reset(&mut self) {
        self.state = CpuState::new();
        self.cycles = 0;
        self.pending_interrupt = None;
    }

    /// Advances the CPU by one step and returns the cycles consumed.
    ///
    /// In order of precedence, a step:
    /// 1. Services a pending interrupt if the enable latch is still set
    ///    (otherwise the request is discarded)
    /// 2. Idles for [`HALT_IDLE_CYCLES`] if halted
    /// 3. Fetches, decodes and executes the instruction at PC
    ///
    /// On error the PC is left at the faulting instruction and no cycles are charged.
    /// An interrupt whose return-address push faults stays pending.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib8080::{Cpu, CpuConfig, ExecutionError, FlatBus, UndocumentedOpcodes};
    ///
    /// let bus = FlatBus::with_program(&[0x00, 0x08]); // NOP, undocumented NOP
    /// let config = CpuConfig { undocumented: UndocumentedOpcodes::Trap };
    /// let mut cpu = Cpu::with_config(bus, config);
    ///
    /// assert_eq!(cpu.step(), Ok(4));
    /// assert_eq!(
    ///     cpu.step(),
    ///     Err(ExecutionError::UnimplementedOpcode { opcode: 0x08, pc: 0x0001 })
    /// );
    /// assert_eq!(cpu.pc(), 0x0001);
    /// ```
    pub fn step(&mut self) -> Result<u32, ExecutionError> {
        if let Some(vector) = self.pending_interrupt.take() {
            if self.state.inte {
                let accepted = self.accept_interrupt(vector);
                if accepted.is_err() {
                    // Stack push faulted; the request stays pending
                    self.pending_interrupt = Some(vector);
                }
                return accepted;
            }
            trace!(vector, "interrupt dropped: disabled before acceptance");
        }

        if self.state.halted {
            self.cycles += HALT_IDLE_CYCLES as u64;
            return Ok(HALT_IDLE_CYCLES);
        }

        let pc = self.state.pc;
        let instruction = self.fetch(pc)?;

        if instruction.undocumented && self.config.undocumented == UndocumentedOpcodes::Trap {
            warn!(
                opcode = instruction.opcode,
                pc, "undocumented opcode 0x{:02X} at 0x{:04X}", instruction.opcode, pc
            );
            return Err(ExecutionError::UnimplementedOpcode {
                opcode: instruction.opcode,
                pc,
            });
        }

        let start_cycles = self.cycles;
        self.state.pc = instruction.next_address();

        if let Err(err) = instructions::execute(self, &instruction) {
            self.state.pc = pc;
            self.cycles = start_cycles;
            return Err(err);
        }

        self.cycles += instruction.base_cycles as u64;
        Ok((self.cycles - start_cycles) as u32)
    }

    /// Runs the CPU until at least `cycle_budget` cycles have elapsed.
    ///
    /// Returns the exact number of cycles consumed, which may overshoot the budget
    /// by up to one instruction.
    ///
    /// On error the cycles of the steps that completed before the fault are still
    /// counted in [`Cpu::cycles`]; compare it with its value before the call to
    /// recover the partial count.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib8080::{Cpu, FlatBus};
    ///
    /// // All-zero memory is a sea of NOPs (4 cycles each)
    /// let mut cpu = Cpu::new(FlatBus::new());
    /// assert_eq!(cpu.run_for_cycles(10), Ok(12));
    /// assert_eq!(cpu.pc(), 0x0003);
    /// ```
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> Result<u64, ExecutionError> {
        let mut consumed = 0u64;

        while consumed < cycle_budget {
            consumed += self.step()? as u64;
        }

        Ok(consumed)
    }

    /// Asserts the interrupt line with an RST vector (0-7, higher bits ignored).
    ///
    /// Ignored entirely if interrupts are disabled. Repeating a request before the
    /// next step has no additional effect.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib8080::{Cpu, FlatBus, RunState};
    ///
    /// let mut cpu = Cpu::new(FlatBus::with_program(&[0xFB])); // EI
    ///
    /// cpu.request_interrupt(1); // interrupts still disabled: dropped
    /// assert_eq!(cpu.run_state(), RunState::Running);
    ///
    /// cpu.step().unwrap(); // EI
    /// cpu.set_sp(0x2400);
    /// cpu.request_interrupt(1);
    /// assert_eq!(cpu.run_state(), RunState::InterruptPending);
    /// assert_eq!(cpu.step(), Ok(11));
    /// assert_eq!(cpu.pc(), 0x0008);
    /// ```
    pub fn request_interrupt(&mut self, vector: u8) {
        if !self.state.inte {
            trace!(vector, "interrupt dropped: interrupts disabled");
            return;
        }
        self.pending_interrupt = Some(vector & 0x07);
    }

    fn accept_interrupt(&mut self, vector: u8) -> Result<u32, ExecutionError> {
        self.push(self.state.pc)?;

        if self.state.halted {
            debug!(vector, "halt released by interrupt");
        }
        trace!(vector, return_address = self.state.pc, "interrupt accepted");

        self.state.inte = false;
        self.state.halted = false;
        self.state.pc = (vector as u16) * 8;
        self.cycles += INTERRUPT_CYCLES as u64;

        Ok(INTERRUPT_CYCLES)
    }

    /// Moves PC past the instruction at PC without executing it.
    ///
    /// Lets the host recover from `UnimplementedOpcode`. Returns the skipped instruction.
    pub fn skip_instruction(&mut self) -> Instruction {
        let (instruction, next) = decode(&self.bus, self.state.pc);
        self.state.pc = next;
        instruction
    }

    /// Returns a copy of the processor state. Never aliases live state.
    pub fn snapshot(&self) -> CpuState {
        self.state
    }

    /// Returns the coarse engine state.
    pub fn run_state(&self) -> RunState {
        if self.pending_interrupt.is_some() {
            RunState::InterruptPending
        } else if self.state.halted {
            RunState::Halted
        } else {
            RunState::Running
        }
    }

    // ========== Bus Access ==========

    fn fetch(&self, pc: u16) -> Result<Instruction, ExecutionError> {
        let size = decode_meta(self.bus.read_byte(pc)).size_bytes as u16;
        for offset in 0..size {
            self.check_mapped(pc.wrapping_add(offset))?;
        }
        Ok(decode(&self.bus, pc).0)
    }

    fn check_mapped(&self, addr: u16) -> Result<(), ExecutionError> {
        if self.bus.is_mapped(addr) {
            Ok(())
        } else {
            warn!(address = addr, pc = self.state.pc, "access to unmapped address");
            Err(ExecutionError::AddressOutOfRange { address: addr })
        }
    }

    pub(crate) fn read(&self, addr: u16) -> Result<u8, ExecutionError> {
        self.check_mapped(addr)?;
        Ok(self.bus.read_byte(addr))
    }

    pub(crate) fn write(&mut self, addr: u16, value: u8) -> Result<(), ExecutionError> {
        self.check_mapped(addr)?;
        self.bus.write_byte(addr, value);
        Ok(())
    }

    pub(crate) fn read_word(&self, addr: u16) -> Result<u16, ExecutionError> {
        self.check_mapped(addr)?;
        self.check_mapped(addr.wrapping_add(1))?;
        Ok(self.bus.read_word(addr))
    }

    pub(crate) fn write_word(&mut self, addr: u16, value: u16) -> Result<(), ExecutionError> {
        self.check_mapped(addr)?;
        self.check_mapped(addr.wrapping_add(1))?;
        self.bus.write_word(addr, value);
        Ok(())
    }

    /// Reads an 8-bit operand, resolving `M` through HL.
    pub(crate) fn read_reg(&self, reg: Reg) -> Result<u8, ExecutionError> {
        match reg {
            Reg::M => self.read(self.state.hl()),
            _ => Ok(self.state.reg(reg)),
        }
    }

    /// Writes an 8-bit operand, resolving `M` through HL.
    pub(crate) fn write_reg(&mut self, reg: Reg, value: u8) -> Result<(), ExecutionError> {
        match reg {
            Reg::M => self.write(self.state.hl(), value),
            _ => {
                self.state.set_reg(reg, value);
                Ok(())
            }
        }
    }

    /// Decrements SP by two and stores `value` there.
    pub(crate) fn push(&mut self, value: u16) -> Result<(), ExecutionError> {
        let sp = self.state.sp.wrapping_sub(2);
        self.write_word(sp, value)?;
        self.state.sp = sp;
        Ok(())
    }

    /// Loads the word at SP and increments SP by two.
    pub(crate) fn pop(&mut self) -> Result<u16, ExecutionError> {
        let value = self.read_word(self.state.sp)?;
        self.state.sp = self.state.sp.wrapping_add(2);
        Ok(value)
    }

    // ========== Accessors ==========

    /// Borrows the live processor state.
    pub fn state(&self) -> &CpuState {
        &self.state
    }

    /// Mutably borrows the processor state (test setup, debuggers).
    pub fn state_mut(&mut self) -> &mut CpuState {
        &mut self.state
    }

    /// Borrows the bus.
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Mutably borrows the bus.
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Consumes the CPU and returns the bus.
    pub fn into_bus(self) -> B {
        self.bus
    }

    pub fn config(&self) -> CpuConfig {
        self.config
    }

    /// Returns the accumulator.
    pub fn a(&self) -> u8 {
        self.state.a
    }

    pub fn set_a(&mut self, value: u8) {
        self.state.a = value;
    }

    /// Returns the program counter.
    pub fn pc(&self) -> u16 {
        self.state.pc
    }

    pub fn set_pc(&mut self, value: u16) {
        self.state.pc = value;
    }

    /// Returns the stack pointer.
    pub fn sp(&self) -> u16 {
        self.state.sp
    }

    pub fn set_sp(&mut self, value: u16) {
        self.state.sp = value;
    }

    /// Returns the status flags.
    pub fn flags(&self) -> Flags {
        self.state.flags
    }

    pub fn set_flags(&mut self, flags: Flags) {
        self.state.flags = flags;
    }

    /// Returns true if the interrupt-enable latch is set.
    pub fn interrupts_enabled(&self) -> bool {
        self.state.inte
    }

    /// Returns true if the CPU is halted.
    pub fn halted(&self) -> bool {
        self.state.halted
    }

    /// Returns the total number of cycles executed since creation or reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }
}
