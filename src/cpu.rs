//! # CPU State and Execution
//!
//! This module contains the [`Cpu`] struct holding the 6502 processor state
//! and the fetch-decode-execute loop that drives it.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of the next byte to fetch
//! - **Stack pointer** (SP): 8-bit offset into the stack page (0x0100-0x01FF)
//! - **Status flags**: N, V, B, D, I, Z, C as a [`StatusFlags`] struct
//! - **Cycle counter**: lifetime total of cycles consumed
//!
//! Memory is not part of the CPU. Every call that touches the bus borrows a
//! [`MemoryBus`] from the caller, so one `Cpu` and one memory form the
//! emulated machine and the caller serializes access to both.
//!
//! ## Execution Model
//!
//! - [`Cpu::execute`]: run until a requested cycle budget is used up
//! - [`Cpu::step`]: run exactly one instruction
//!
//! An instruction that has started always runs to completion, so `execute`
//! can report more cycles than were requested.

use std::fmt;

use crate::cycles::CycleBudget;
use crate::instructions;
use crate::opcodes::{Operation, OPCODE_TABLE};
use crate::status::StatusFlags;
use crate::{ExecutionError, MemoryBus};

/// Address of the little-endian reset vector.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Base address of the hardware stack page.
pub const STACK_BASE: u16 = 0x0100;

/// Stack pointer value after reset.
pub const SP_RESET: u8 = 0xFF;

/// What a single instruction did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// A documented instruction ran to completion.
    Executed { opcode: u8, cycles: u32 },

    /// The byte at `pc` has no semantics in this core. It was skipped at the
    /// cost of its fetch cycle.
    Unsupported { opcode: u8, pc: u16 },
}

/// 6502 processor state.
///
/// # Examples
///
/// ```
/// use m6502::{Cpu, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00);
/// memory.write(0xFFFD, 0x80);
/// memory.write(0x8000, 0xA9); // LDA #$42
/// memory.write(0x8001, 0x42);
///
/// let mut cpu = Cpu::new();
/// cpu.reset(&memory);
/// assert_eq!(cpu.pc, 0x8000);
/// assert_eq!(cpu.sp, 0xFF);
///
/// let used = cpu.execute(2, &mut memory).unwrap();
/// assert_eq!(used, 2);
/// assert_eq!(cpu.a, 0x42);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cpu {
    /// Accumulator register
    pub a: u8,

    /// X index register
    pub x: u8,

    /// Y index register
    pub y: u8,

    /// Program counter (address of next byte to fetch)
    pub pc: u16,

    /// Stack pointer (0x0100 | sp gives the stack address)
    pub sp: u8,

    /// Status flags
    pub flags: StatusFlags,

    total_cycles: u64,
}

impl Cpu {
    /// Creates a CPU in the reset state with PC at 0x0000.
    ///
    /// Call [`reset`](Self::reset) or [`reset_to`](Self::reset_to) to pick
    /// the start address.
    pub fn new() -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: 0x0000,
            sp: SP_RESET,
            flags: StatusFlags::default(),
            total_cycles: 0,
        }
    }

    /// Resets the CPU and loads PC from the reset vector at 0xFFFC/0xFFFD.
    ///
    /// A, X and Y are zeroed, SP is set to 0xFF and every status bit is
    /// cleared. Memory is left untouched.
    pub fn reset<M: MemoryBus + ?Sized>(&mut self, memory: &M) {
        let start = u16::from_le_bytes([
            memory.read(RESET_VECTOR),
            memory.read(RESET_VECTOR.wrapping_add(1)),
        ]);
        log::debug!("reset via vector ${RESET_VECTOR:04X} to ${start:04X}");
        self.reset_registers(start);
    }

    /// Resets the CPU with an explicit start address, skipping the vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use m6502::Cpu;
    ///
    /// let mut cpu = Cpu::new();
    /// cpu.a = 0x12;
    /// cpu.reset_to(0xFF00);
    ///
    /// assert_eq!(cpu.pc, 0xFF00);
    /// assert_eq!(cpu.a, 0x00);
    /// assert_eq!(cpu.status(), 0x00);
    /// ```
    pub fn reset_to(&mut self, start: u16) {
        log::debug!("reset to ${start:04X}");
        self.reset_registers(start);
    }

    fn reset_registers(&mut self, start: u16) {
        self.a = 0x00;
        self.x = 0x00;
        self.y = 0x00;
        self.pc = start;
        self.sp = SP_RESET;
        self.flags = StatusFlags::default();
        self.total_cycles = 0;
    }

    /// Runs instructions until `cycles` cycles have been consumed.
    ///
    /// Returns the cycles actually used. The instruction in flight when the
    /// budget runs out is always finished, so the result can exceed
    /// `cycles`. A budget of zero runs nothing and returns zero.
    ///
    /// Unsupported opcodes are logged and skipped; they never end the run.
    ///
    /// # Errors
    ///
    /// [`ExecutionError::InvalidOperationSelector`] or
    /// [`ExecutionError::NoEffectiveAddress`] if the opcode table routes an
    /// instruction to code that cannot handle it. Either one means the table
    /// is wired wrong; the call is abandoned mid-instruction.
    ///
    /// # Examples
    ///
    /// ```
    /// use m6502::{Cpu, FlatMemory};
    ///
    /// let mut memory = FlatMemory::new();
    /// memory[0x0200] = 0x20; // JSR $0300 (6 cycles)
    /// memory[0x0201] = 0x00;
    /// memory[0x0202] = 0x03;
    ///
    /// let mut cpu = Cpu::new();
    /// cpu.reset_to(0x0200);
    ///
    /// // Only 1 cycle asked for, but JSR runs to completion
    /// assert_eq!(cpu.execute(1, &mut memory).unwrap(), 6);
    /// assert_eq!(cpu.pc, 0x0300);
    /// ```
    pub fn execute<M: MemoryBus + ?Sized>(
        &mut self,
        cycles: u32,
        memory: &mut M,
    ) -> Result<u64, ExecutionError> {
        let mut budget = CycleBudget::new(cycles);

        while !budget.is_exhausted() {
            self.run_instruction(memory, &mut budget)?;
        }

        Ok(budget.used())
    }

    /// Runs exactly one instruction.
    ///
    /// # Examples
    ///
    /// ```
    /// use m6502::{Cpu, FlatMemory, StepOutcome};
    ///
    /// let mut memory = FlatMemory::new();
    /// memory[0x0400] = 0xEA; // NOP
    /// memory[0x0401] = 0x02; // unassigned
    ///
    /// let mut cpu = Cpu::new();
    /// cpu.reset_to(0x0400);
    ///
    /// assert_eq!(
    ///     cpu.step(&mut memory).unwrap(),
    ///     StepOutcome::Executed { opcode: 0xEA, cycles: 2 }
    /// );
    /// assert_eq!(
    ///     cpu.step(&mut memory).unwrap(),
    ///     StepOutcome::Unsupported { opcode: 0x02, pc: 0x0401 }
    /// );
    /// ```
    pub fn step<M: MemoryBus + ?Sized>(
        &mut self,
        memory: &mut M,
    ) -> Result<StepOutcome, ExecutionError> {
        let mut budget = CycleBudget::new(0);
        self.run_instruction(memory, &mut budget)
    }

    fn run_instruction<M: MemoryBus + ?Sized>(
        &mut self,
        memory: &mut M,
        budget: &mut CycleBudget,
    ) -> Result<StepOutcome, ExecutionError> {
        let before = budget.remaining();
        let pc = self.pc;

        let opcode = self.fetch_byte(memory, budget);
        let metadata = OPCODE_TABLE[opcode as usize];

        log::trace!(
            "{pc:04X}  {opcode:02X}  {:<3}  {}",
            metadata.mnemonic,
            self
        );

        let outcome = match metadata.operation {
            // BRK would vector through 0xFFFE; interrupt servicing is not
            // part of this core.
            Operation::Illegal | Operation::Brk => {
                log::warn!(
                    "unsupported opcode 0x{opcode:02X} ({}) at ${pc:04X}, skipping",
                    metadata.mnemonic
                );
                StepOutcome::Unsupported { opcode, pc }
            }
            _ => {
                instructions::execute(self, &metadata, memory, budget)?;
                StepOutcome::Executed {
                    opcode,
                    cycles: (before - budget.remaining()) as u32,
                }
            }
        };

        self.total_cycles += (before - budget.remaining()) as u64;
        Ok(outcome)
    }

    // ========== Status Register ==========

    /// Returns the status register as a packed byte (NV-BDIZC).
    pub fn status(&self) -> u8 {
        self.flags.to_byte()
    }

    /// Replaces every status bit from a packed byte.
    pub fn set_status(&mut self, status: u8) {
        self.flags = StatusFlags::from_byte(status);
    }

    /// Total cycles consumed since the last reset.
    pub fn total_cycles(&self) -> u64 {
        self.total_cycles
    }

    // ========== Bus Access ==========
    //
    // Every helper charges one cycle per byte that crosses the bus.

    /// Reads the byte at PC and advances PC.
    pub(crate) fn fetch_byte<M: MemoryBus + ?Sized>(
        &mut self,
        memory: &M,
        cycles: &mut CycleBudget,
    ) -> u8 {
        let data = memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        cycles.tick();
        data
    }

    /// Reads a little-endian word at PC and advances PC past it.
    pub(crate) fn fetch_word<M: MemoryBus + ?Sized>(
        &mut self,
        memory: &M,
        cycles: &mut CycleBudget,
    ) -> u16 {
        let lo = self.fetch_byte(memory, cycles);
        let hi = self.fetch_byte(memory, cycles);
        u16::from_le_bytes([lo, hi])
    }

    pub(crate) fn read_byte<M: MemoryBus + ?Sized>(
        &self,
        memory: &M,
        addr: u16,
        cycles: &mut CycleBudget,
    ) -> u8 {
        cycles.tick();
        memory.read(addr)
    }

    pub(crate) fn write_byte<M: MemoryBus + ?Sized>(
        &self,
        memory: &mut M,
        addr: u16,
        value: u8,
        cycles: &mut CycleBudget,
    ) {
        cycles.tick();
        memory.write(addr, value);
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

/// Register snapshot in the usual trace-log layout.
impl fmt::Display for Cpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X}",
            self.a,
            self.x,
            self.y,
            self.status(),
            self.sp
        )
    }
}
