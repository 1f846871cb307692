//! # Status and Latch Manipulation Instructions
//!
//! This module implements instructions that directly modify processor latches:
//! - STC: Set Carry
//! - CMC: Complement Carry
//! - EI: Enable Interrupts
//! - DI: Disable Interrupts
//!
//! EI and DI take effect immediately; the one-instruction delay of the real EI
//! is not modeled.

use tracing::trace;

use crate::{Bus, Cpu, ExecutionError};

/// Executes STC (Set Carry). Only CY is affected.
pub(crate) fn execute_stc<B: Bus>(cpu: &mut Cpu<B>) -> Result<(), ExecutionError> {
    cpu.state.flags.cy = true;
    Ok(())
}

/// Executes CMC (Complement Carry). Only CY is affected.
pub(crate) fn execute_cmc<B: Bus>(cpu: &mut Cpu<B>) -> Result<(), ExecutionError> {
    cpu.state.flags.cy = !cpu.state.flags.cy;
    Ok(())
}

/// Executes EI (Enable Interrupts).
pub(crate) fn execute_ei<B: Bus>(cpu: &mut Cpu<B>) -> Result<(), ExecutionError> {
    cpu.state.inte = true;
    Ok(())
}

/// Executes DI (Disable Interrupts).
///
/// A request already waiting in the interrupt slot is discarded at the next step.
pub(crate) fn execute_di<B: Bus>(cpu: &mut Cpu<B>) -> Result<(), ExecutionError> {
    if cpu.pending_interrupt.is_some() {
        trace!("DI with interrupt pending");
    }
    cpu.state.inte = false;
    Ok(())
}
