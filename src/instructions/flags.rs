//! # Status Flag Manipulation Instructions
//!
//! This module implements instructions that directly modify processor status flags:
//! - CLC: Clear Carry Flag
//! - SEC: Set Carry Flag
//! - CLI: Clear Interrupt Disable
//! - SEI: Set Interrupt Disable
//! - CLV: Clear Overflow Flag
//! - CLD: Clear Decimal Mode
//! - SED: Set Decimal Mode
//!
//! These instructions use implied addressing mode and execute in 2 cycles.
//! There is no SEV; V is only set by ADC, SBC, BIT, PLP and RTI.

use super::invalid_selector;
use crate::cycles::CycleBudget;
use crate::opcodes::{OpcodeMetadata, Operation};
use crate::{Cpu, ExecutionError};

pub(crate) fn execute_flag(
    cpu: &mut Cpu,
    metadata: &OpcodeMetadata,
    cycles: &mut CycleBudget,
) -> Result<(), ExecutionError> {
    let flags = &mut cpu.flags;
    match metadata.operation {
        Operation::Clc => flags.carry = false,
        Operation::Sec => flags.carry = true,
        Operation::Cli => flags.interrupt_disable = false,
        Operation::Sei => flags.interrupt_disable = true,
        Operation::Cld => flags.decimal = false,
        Operation::Sed => flags.decimal = true,
        Operation::Clv => flags.overflow = false,
        _ => return Err(invalid_selector(metadata, "flag")),
    }

    cycles.tick();
    Ok(())
}
