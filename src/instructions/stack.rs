//! # Stack Instructions
//!
//! - PHA, PHP: push A or the status byte (3 cycles)
//! - PLA, PLP: pull A or the status byte (4 cycles)
//!
//! PHP always pushes with the B and unused bits set. PLP stores the pulled
//! byte verbatim, so what was pushed comes back bit for bit.

use super::invalid_selector;
use crate::cycles::CycleBudget;
use crate::opcodes::{OpcodeMetadata, Operation};
use crate::status::StatusFlags;
use crate::{Cpu, ExecutionError, MemoryBus};

/// Executes PHA or PHP. No flags are affected.
pub(crate) fn execute_push<M: MemoryBus + ?Sized>(
    cpu: &mut Cpu,
    metadata: &OpcodeMetadata,
    memory: &mut M,
    cycles: &mut CycleBudget,
) -> Result<(), ExecutionError> {
    let value = match metadata.operation {
        Operation::Pha => cpu.a,
        Operation::Php => cpu.flags.pushed_byte(),
        _ => return Err(invalid_selector(metadata, "push")),
    };

    cycles.tick();
    cpu.push_byte(memory, value, cycles);
    Ok(())
}

/// Executes PLA or PLP.
///
/// PLA sets Z and N from the pulled value. PLP replaces every status bit.
pub(crate) fn execute_pull<M: MemoryBus + ?Sized>(
    cpu: &mut Cpu,
    metadata: &OpcodeMetadata,
    memory: &M,
    cycles: &mut CycleBudget,
) -> Result<(), ExecutionError> {
    if !matches!(metadata.operation, Operation::Pla | Operation::Plp) {
        return Err(invalid_selector(metadata, "pull"));
    }

    cycles.consume(2);
    let value = cpu.pop_byte(memory, cycles);

    if metadata.operation == Operation::Pla {
        cpu.a = value;
        cpu.flags.set_zn(value);
    } else {
        cpu.flags = StatusFlags::from_byte(value);
    }
    Ok(())
}
