//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump to address (absolute or indirect)
//! - JSR: Jump to Subroutine
//! - RTS: Return from Subroutine
//! - RTI: Return from Interrupt
//! - NOP: No Operation
//!
//! JSR pushes the address of its own last byte, high byte first. RTS pulls
//! that address and resumes one byte later, so a JSR/RTS pair leaves SP
//! where it started.

use super::effective_address;
use crate::cycles::CycleBudget;
use crate::opcodes::OpcodeMetadata;
use crate::status::StatusFlags;
use crate::{Cpu, ExecutionError, MemoryBus};

/// Executes JMP.
///
/// Cycle timing: 3 cycles absolute, 5 cycles indirect. The indirect form
/// keeps the NMOS page-wrap behavior for pointers at $xxFF.
pub(crate) fn execute_jmp<M: MemoryBus + ?Sized>(
    cpu: &mut Cpu,
    metadata: &OpcodeMetadata,
    memory: &M,
    cycles: &mut CycleBudget,
) -> Result<(), ExecutionError> {
    let target = effective_address(cpu, metadata, memory, cycles)?;
    cpu.pc = target;
    Ok(())
}

/// Executes JSR.
///
/// Cycle timing: 6 cycles (2 operand bytes, 1 internal, 2 pushes, plus the
/// opcode fetch).
pub(crate) fn execute_jsr<M: MemoryBus + ?Sized>(
    cpu: &mut Cpu,
    memory: &mut M,
    cycles: &mut CycleBudget,
) -> Result<(), ExecutionError> {
    let target = cpu.fetch_word(memory, cycles);
    cycles.tick();

    let return_address = cpu.pc.wrapping_sub(1);
    cpu.push_word(memory, return_address, cycles);

    cpu.pc = target;
    Ok(())
}

/// Executes RTS.
///
/// Cycle timing: 6 cycles.
pub(crate) fn execute_rts<M: MemoryBus + ?Sized>(
    cpu: &mut Cpu,
    memory: &M,
    cycles: &mut CycleBudget,
) -> Result<(), ExecutionError> {
    cycles.consume(2);
    let return_address = cpu.pop_word(memory, cycles);
    cycles.tick();

    cpu.pc = return_address.wrapping_add(1);
    Ok(())
}

/// Executes RTI.
///
/// Pulls the status byte and restores it exactly as stored, then pulls PC.
/// Unlike RTS the pulled PC is used as-is.
///
/// Cycle timing: 6 cycles.
pub(crate) fn execute_rti<M: MemoryBus + ?Sized>(
    cpu: &mut Cpu,
    memory: &M,
    cycles: &mut CycleBudget,
) -> Result<(), ExecutionError> {
    cycles.consume(2);
    let status = cpu.pop_byte(memory, cycles);
    cpu.flags = StatusFlags::from_byte(status);
    cpu.pc = cpu.pop_word(memory, cycles);
    Ok(())
}

pub(crate) fn execute_nop(cycles: &mut CycleBudget) -> Result<(), ExecutionError> {
    cycles.tick();
    Ok(())
}
