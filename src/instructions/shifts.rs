//! # Shift and Rotate Instructions
//!
//! ASL, LSR, ROL and ROR on the accumulator or on memory. Every form spends
//! one internal cycle on the shift itself; the memory forms read, shift and
//! write back (read-modify-write) and always pay the indexed fix-up cycle.

use crate::addressing::AddressingMode;
use crate::alu::ShiftOp;
use crate::cycles::CycleBudget;
use crate::opcodes::OpcodeMetadata;
use crate::{Cpu, ExecutionError, MemoryBus};

use super::effective_address;

/// Executes ASL, LSR, ROL or ROR. Updates C, Z and N.
pub(crate) fn execute_shift<M: MemoryBus + ?Sized>(
    cpu: &mut Cpu,
    metadata: &OpcodeMetadata,
    memory: &mut M,
    cycles: &mut CycleBudget,
) -> Result<(), ExecutionError> {
    let op = ShiftOp::try_from(metadata.operation)?;

    let result = if metadata.addressing_mode == AddressingMode::Accumulator {
        let (result, carry) = op.apply(cpu.a, cpu.flags.carry);
        cycles.tick();
        cpu.flags.carry = carry;
        cpu.a = result;
        result
    } else {
        let addr = effective_address(cpu, metadata, memory, cycles)?;
        let value = cpu.read_byte(memory, addr, cycles);
        let (result, carry) = op.apply(value, cpu.flags.carry);
        cycles.tick();
        cpu.flags.carry = carry;
        cpu.write_byte(memory, addr, result, cycles);
        result
    };

    cpu.flags.set_zn(result);
    Ok(())
}
