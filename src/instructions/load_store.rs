//! # Load and Store Instructions
//!
//! - LDA, LDX, LDY: load a register, then set Z and N from it
//! - STA, STX, STY: write a register to memory, flags untouched
//!
//! Loads pay the page-crossing cycle only when the index carries; stores on
//! absolute,X / absolute,Y / (zp),Y always pay it.

use super::{effective_address, invalid_selector, read_operand};
use crate::cycles::CycleBudget;
use crate::opcodes::{OpcodeMetadata, Operation};
use crate::{Cpu, ExecutionError, MemoryBus};

/// Executes LDA, LDX or LDY.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if the loaded value is 0
/// - Negative (N): Set if bit 7 of the loaded value is set
/// - Other flags: Not affected
pub(crate) fn execute_load<M: MemoryBus + ?Sized>(
    cpu: &mut Cpu,
    metadata: &OpcodeMetadata,
    memory: &M,
    cycles: &mut CycleBudget,
) -> Result<(), ExecutionError> {
    let value = read_operand(cpu, metadata, memory, cycles)?;

    let register = match metadata.operation {
        Operation::Lda => &mut cpu.a,
        Operation::Ldx => &mut cpu.x,
        Operation::Ldy => &mut cpu.y,
        _ => return Err(invalid_selector(metadata, "load")),
    };
    *register = value;

    cpu.flags.set_zn(value);
    Ok(())
}

/// Executes STA, STX or STY. No flags are affected.
pub(crate) fn execute_store<M: MemoryBus + ?Sized>(
    cpu: &mut Cpu,
    metadata: &OpcodeMetadata,
    memory: &mut M,
    cycles: &mut CycleBudget,
) -> Result<(), ExecutionError> {
    let value = match metadata.operation {
        Operation::Sta => cpu.a,
        Operation::Stx => cpu.x,
        Operation::Sty => cpu.y,
        _ => return Err(invalid_selector(metadata, "store")),
    };

    let addr = effective_address(cpu, metadata, memory, cycles)?;
    cpu.write_byte(memory, addr, value, cycles);
    Ok(())
}
