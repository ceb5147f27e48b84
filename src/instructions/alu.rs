//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module applies the rules in [`crate::alu`] to the CPU:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, EOR, ORA: bytewise logic into the accumulator
//! - CMP, CPX, CPY: compare a register with memory
//! - BIT: test accumulator bits against memory
//!
//! All of them read their operand and pay the page-crossing cycle only when
//! the index carries.

use super::{invalid_selector, read_operand};
use crate::alu::{add_with_carry, bit_test, compare, subtract_with_borrow, LogicalOp};
use crate::cycles::CycleBudget;
use crate::opcodes::{OpcodeMetadata, Operation};
use crate::{Cpu, ExecutionError, MemoryBus};

/// Executes ADC or SBC.
///
/// Updates C, Z, V and N. Binary mode only: the D flag is ignored.
pub(crate) fn execute_arithmetic<M: MemoryBus + ?Sized>(
    cpu: &mut Cpu,
    metadata: &OpcodeMetadata,
    memory: &M,
    cycles: &mut CycleBudget,
) -> Result<(), ExecutionError> {
    let operand = read_operand(cpu, metadata, memory, cycles)?;

    let sum = match metadata.operation {
        Operation::Adc => add_with_carry(cpu.a, operand, cpu.flags.carry),
        Operation::Sbc => subtract_with_borrow(cpu.a, operand, cpu.flags.carry),
        _ => return Err(invalid_selector(metadata, "arithmetic")),
    };

    cpu.a = sum.value;
    cpu.flags.carry = sum.carry;
    cpu.flags.overflow = sum.overflow;
    cpu.flags.set_zn(sum.value);
    Ok(())
}

/// Executes AND, EOR or ORA. Updates Z and N.
pub(crate) fn execute_logical<M: MemoryBus + ?Sized>(
    cpu: &mut Cpu,
    metadata: &OpcodeMetadata,
    memory: &M,
    cycles: &mut CycleBudget,
) -> Result<(), ExecutionError> {
    let op = LogicalOp::try_from(metadata.operation)?;
    let operand = read_operand(cpu, metadata, memory, cycles)?;

    cpu.a = op.apply(cpu.a, operand);
    cpu.flags.set_zn(cpu.a);
    Ok(())
}

/// Executes CMP, CPX or CPY.
///
/// C is set when the register is greater than or equal to the operand as
/// unsigned bytes; Z and N come from the wrapped difference. The register is
/// not changed.
pub(crate) fn execute_compare<M: MemoryBus + ?Sized>(
    cpu: &mut Cpu,
    metadata: &OpcodeMetadata,
    memory: &M,
    cycles: &mut CycleBudget,
) -> Result<(), ExecutionError> {
    let register = match metadata.operation {
        Operation::Cmp => cpu.a,
        Operation::Cpx => cpu.x,
        Operation::Cpy => cpu.y,
        _ => return Err(invalid_selector(metadata, "compare")),
    };
    let operand = read_operand(cpu, metadata, memory, cycles)?;

    let result = compare(register, operand);
    cpu.flags.carry = result.carry;
    cpu.flags.set_zn(result.difference);
    Ok(())
}

/// Executes BIT.
///
/// Z reflects `A & M`; N and V are copied from bits 7 and 6 of M. A is left
/// alone.
pub(crate) fn execute_bit<M: MemoryBus + ?Sized>(
    cpu: &mut Cpu,
    metadata: &OpcodeMetadata,
    memory: &M,
    cycles: &mut CycleBudget,
) -> Result<(), ExecutionError> {
    let operand = read_operand(cpu, metadata, memory, cycles)?;

    let result = bit_test(cpu.a, operand);
    cpu.flags.zero = result.zero;
    cpu.flags.negative = result.negative;
    cpu.flags.overflow = result.overflow;
    Ok(())
}
