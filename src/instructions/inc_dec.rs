//! # Increment and Decrement Instructions
//!
//! - INC, DEC: read-modify-write on memory
//! - INX, INY, DEX, DEY: on an index register
//!
//! All wrap at 8 bits and update only Z and N.

use super::{effective_address, invalid_selector};
use crate::cycles::CycleBudget;
use crate::opcodes::{OpcodeMetadata, Operation};
use crate::{Cpu, ExecutionError, MemoryBus};

/// Executes INC or DEC.
pub(crate) fn execute_memory<M: MemoryBus + ?Sized>(
    cpu: &mut Cpu,
    metadata: &OpcodeMetadata,
    memory: &mut M,
    cycles: &mut CycleBudget,
) -> Result<(), ExecutionError> {
    let delta: fn(u8) -> u8 = match metadata.operation {
        Operation::Inc => |v| v.wrapping_add(1),
        Operation::Dec => |v| v.wrapping_sub(1),
        _ => return Err(invalid_selector(metadata, "memory increment")),
    };

    let addr = effective_address(cpu, metadata, memory, cycles)?;
    let value = cpu.read_byte(memory, addr, cycles);
    let result = delta(value);
    cycles.tick();
    cpu.write_byte(memory, addr, result, cycles);

    cpu.flags.set_zn(result);
    Ok(())
}

/// Executes INX, INY, DEX or DEY.
pub(crate) fn execute_register(
    cpu: &mut Cpu,
    metadata: &OpcodeMetadata,
    cycles: &mut CycleBudget,
) -> Result<(), ExecutionError> {
    let result = match metadata.operation {
        Operation::Inx => {
            cpu.x = cpu.x.wrapping_add(1);
            cpu.x
        }
        Operation::Iny => {
            cpu.y = cpu.y.wrapping_add(1);
            cpu.y
        }
        Operation::Dex => {
            cpu.x = cpu.x.wrapping_sub(1);
            cpu.x
        }
        Operation::Dey => {
            cpu.y = cpu.y.wrapping_sub(1);
            cpu.y
        }
        _ => return Err(invalid_selector(metadata, "register increment")),
    };
    cycles.tick();

    cpu.flags.set_zn(result);
    Ok(())
}
