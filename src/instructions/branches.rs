//! # Branch Instructions
//!
//! BCC, BCS, BEQ, BNE, BMI, BPL, BVC and BVS. Each compares one flag with the
//! value the opcode expects and, on a match, adds the signed 8-bit offset to
//! the address of the next instruction.
//!
//! Cycle timing:
//! - 2 cycles if branch not taken
//! - 3 cycles if branch taken to same page
//! - 4 cycles if branch taken to different page
//!
//! No flags are affected.

use super::invalid_selector;
use crate::addressing::crosses_page;
use crate::cycles::CycleBudget;
use crate::opcodes::{OpcodeMetadata, Operation};
use crate::{Cpu, ExecutionError, MemoryBus};

pub(crate) fn execute_branch<M: MemoryBus + ?Sized>(
    cpu: &mut Cpu,
    metadata: &OpcodeMetadata,
    memory: &M,
    cycles: &mut CycleBudget,
) -> Result<(), ExecutionError> {
    let flags = cpu.flags;
    let (flag, expected) = match metadata.operation {
        Operation::Bcc => (flags.carry, false),
        Operation::Bcs => (flags.carry, true),
        Operation::Bne => (flags.zero, false),
        Operation::Beq => (flags.zero, true),
        Operation::Bpl => (flags.negative, false),
        Operation::Bmi => (flags.negative, true),
        Operation::Bvc => (flags.overflow, false),
        Operation::Bvs => (flags.overflow, true),
        _ => return Err(invalid_selector(metadata, "branch")),
    };

    // The offset byte is always fetched, taken or not.
    let offset = cpu.fetch_byte(memory, cycles) as i8;

    if flag == expected {
        let next = cpu.pc;
        let target = next.wrapping_add_signed(i16::from(offset));
        cycles.tick();
        if crosses_page(next, target) {
            cycles.tick();
        }
        cpu.pc = target;
    }

    Ok(())
}
