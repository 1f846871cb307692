//! # Port I/O Instructions
//!
//! - IN p: Load the accumulator from input port `p`
//! - OUT p: Write the accumulator to output port `p`
//!
//! Ports are a separate 256-entry space reached only through [`Bus::read_port`]
//! and [`Bus::write_port`]. Neither instruction affects flags.

use crate::{Bus, Cpu, ExecutionError};

pub(crate) fn execute_in<B: Bus>(cpu: &mut Cpu<B>, port: u8) -> Result<(), ExecutionError> {
    cpu.state.a = cpu.bus.read_port(port);
    Ok(())
}

pub(crate) fn execute_out<B: Bus>(cpu: &mut Cpu<B>, port: u8) -> Result<(), ExecutionError> {
    cpu.bus.write_port(port, cpu.state.a);
    Ok(())
}
