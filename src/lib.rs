//! # 6502 Interpreter Core
//!
//! A cycle-counting interpreter for the NMOS 6502 instruction set. Given a
//! memory image and a register state it fetches, decodes and executes
//! instructions, consuming a caller-specified cycle budget the way the chip
//! does, including page-crossing and branch-taken penalties.
//!
//! ## Quick Start
//!
//! ```rust
//! use m6502::{Cpu, FlatMemory, MemoryBus};
//!
//! let mut memory = FlatMemory::new();
//!
//! // JSR $8000 / LDA #$42 at $FF00, RTS at $8000
//! memory.write(0xFF00, 0x20);
//! memory.write(0xFF01, 0x00);
//! memory.write(0xFF02, 0x80);
//! memory.write(0xFF03, 0xA9);
//! memory.write(0xFF04, 0x42);
//! memory.write(0x8000, 0x60);
//!
//! let mut cpu = Cpu::new();
//! cpu.reset_to(0xFF00);
//!
//! let used = cpu.execute(6 + 6 + 2, &mut memory).unwrap();
//! assert_eq!(used, 14);
//! assert_eq!(cpu.a, 0x42);
//! assert_eq!(cpu.sp, 0xFF);
//! ```
//!
//! ## Modules
//!
//! - `cpu` - processor state, reset and the fetch-decode-execute loop
//! - `addressing` - addressing modes and the effective-address resolver
//! - `alu` - pure flag and arithmetic rules (ADC, SBC, compare, shifts, BIT)
//! - `status` - the status register as named flags and as a packed byte
//! - `cycles` - the cycle budget threaded through every helper
//! - `memory` - `MemoryBus` trait, flat 64KB memory and the program loader
//! - `opcodes` - the 256-entry opcode table
//!
//! ## Scope
//!
//! Documented opcodes only, binary arithmetic only (the D flag is kept but
//! ADC/SBC ignore it), and no interrupt servicing: BRK and unassigned bytes
//! are logged through the `log` facade and skipped.

pub mod addressing;
pub mod alu;
pub mod cpu;
pub mod cycles;
pub mod memory;
pub mod opcodes;
pub mod status;

// Internal instruction implementations (not part of public API)
mod instructions;
mod stack;

use thiserror::Error;

// Re-export public API
pub use addressing::{AddressingMode, PageCrossPenalty};
pub use cpu::{Cpu, StepOutcome, RESET_VECTOR, SP_RESET, STACK_BASE};
pub use cycles::CycleBudget;
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{OpcodeMetadata, Operation, OPCODE_TABLE};
pub use status::{StatusBits, StatusFlags};

/// Internal-consistency failures during execution.
///
/// Neither variant can be triggered by the emulated program: both mean the
/// opcode table sent an instruction somewhere that cannot handle it. They
/// abort the `execute` or `step` call that hit them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutionError {
    /// An operation tag reached a combinator for a different family.
    #[error("operation {operation:?} is not a valid {family} selector")]
    InvalidOperationSelector {
        operation: Operation,
        family: &'static str,
    },

    /// An instruction asked for a memory operand in a mode that has none.
    #[error("addressing mode {0:?} has no effective address")]
    NoEffectiveAddress(AddressingMode),
}

/// Errors from [`MemoryBus::load_program`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The image is shorter than its two-byte load address header.
    #[error("program image of {0} bytes has no load address")]
    TooShort(usize),
}
