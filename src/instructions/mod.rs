//! # 6502 Instruction Implementations
//!
//! One module per instruction family. [`execute`] routes an opcode's
//! [`Operation`] tag to its family, and each family function matches the tag
//! again to pick the register, flag or combinator it works on. A tag that
//! reaches the wrong family is an [`ExecutionError::InvalidOperationSelector`].
//!
//! ## Categories
//!
//! - **alu**: ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT
//! - **branches**: BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS
//! - **shifts**: ASL, LSR, ROL, ROR
//! - **load_store**: LDA, LDX, LDY, STA, STX, STY
//! - **inc_dec**: INC, DEC, INX, INY, DEX, DEY
//! - **control**: JMP, JSR, RTS, RTI, NOP
//! - **stack**: PHA, PHP, PLA, PLP
//! - **flags**: CLC, SEC, CLI, SEI, CLD, SED, CLV
//! - **transfer**: TAX, TAY, TXA, TYA, TSX, TXS

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::addressing::AddressingMode;
use crate::cycles::CycleBudget;
use crate::opcodes::{OpcodeMetadata, Operation};
use crate::{Cpu, ExecutionError, MemoryBus};

/// Executes the instruction described by `metadata`. The opcode byte has
/// already been fetched and charged.
pub(crate) fn execute<M: MemoryBus + ?Sized>(
    cpu: &mut Cpu,
    metadata: &OpcodeMetadata,
    memory: &mut M,
    cycles: &mut CycleBudget,
) -> Result<(), ExecutionError> {
    match metadata.operation {
        Operation::Lda | Operation::Ldx | Operation::Ldy => {
            load_store::execute_load(cpu, metadata, memory, cycles)
        }
        Operation::Sta | Operation::Stx | Operation::Sty => {
            load_store::execute_store(cpu, metadata, memory, cycles)
        }
        Operation::Adc | Operation::Sbc => {
            alu::execute_arithmetic(cpu, metadata, memory, cycles)
        }
        Operation::And | Operation::Eor | Operation::Ora => {
            alu::execute_logical(cpu, metadata, memory, cycles)
        }
        Operation::Cmp | Operation::Cpx | Operation::Cpy => {
            alu::execute_compare(cpu, metadata, memory, cycles)
        }
        Operation::Bit => alu::execute_bit(cpu, metadata, memory, cycles),
        Operation::Asl | Operation::Lsr | Operation::Rol | Operation::Ror => {
            shifts::execute_shift(cpu, metadata, memory, cycles)
        }
        Operation::Inc | Operation::Dec => {
            inc_dec::execute_memory(cpu, metadata, memory, cycles)
        }
        Operation::Inx | Operation::Iny | Operation::Dex | Operation::Dey => {
            inc_dec::execute_register(cpu, metadata, cycles)
        }
        Operation::Bcc
        | Operation::Bcs
        | Operation::Beq
        | Operation::Bne
        | Operation::Bmi
        | Operation::Bpl
        | Operation::Bvc
        | Operation::Bvs => branches::execute_branch(cpu, metadata, memory, cycles),
        Operation::Jmp => control::execute_jmp(cpu, metadata, memory, cycles),
        Operation::Jsr => control::execute_jsr(cpu, memory, cycles),
        Operation::Rts => control::execute_rts(cpu, memory, cycles),
        Operation::Rti => control::execute_rti(cpu, memory, cycles),
        Operation::Nop => control::execute_nop(cycles),
        Operation::Pha | Operation::Php => stack::execute_push(cpu, metadata, memory, cycles),
        Operation::Pla | Operation::Plp => stack::execute_pull(cpu, metadata, memory, cycles),
        Operation::Clc
        | Operation::Sec
        | Operation::Cli
        | Operation::Sei
        | Operation::Cld
        | Operation::Sed
        | Operation::Clv => flags::execute_flag(cpu, metadata, cycles),
        Operation::Tax
        | Operation::Tay
        | Operation::Txa
        | Operation::Tya
        | Operation::Tsx
        | Operation::Txs => transfer::execute_transfer(cpu, metadata, cycles),
        Operation::Brk | Operation::Illegal => Err(invalid_selector(metadata, "dispatch")),
    }
}

/// Reads the operand of a read-only instruction: the byte after the opcode
/// for immediate mode, otherwise the byte at the effective address.
pub(crate) fn read_operand<M: MemoryBus + ?Sized>(
    cpu: &mut Cpu,
    metadata: &OpcodeMetadata,
    memory: &M,
    cycles: &mut CycleBudget,
) -> Result<u8, ExecutionError> {
    if metadata.addressing_mode == AddressingMode::Immediate {
        return Ok(cpu.fetch_byte(memory, cycles));
    }

    let addr = effective_address(cpu, metadata, memory, cycles)?;
    Ok(cpu.read_byte(memory, addr, cycles))
}

pub(crate) fn effective_address<M: MemoryBus + ?Sized>(
    cpu: &mut Cpu,
    metadata: &OpcodeMetadata,
    memory: &M,
    cycles: &mut CycleBudget,
) -> Result<u16, ExecutionError> {
    cpu.resolve_address(
        metadata.addressing_mode,
        metadata.operation.page_cross_penalty(),
        memory,
        cycles,
    )
}

pub(crate) fn invalid_selector(
    metadata: &OpcodeMetadata,
    family: &'static str,
) -> ExecutionError {
    ExecutionError::InvalidOperationSelector {
        operation: metadata.operation,
        family,
    }
}
