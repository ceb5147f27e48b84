//! # Addressing Modes
//!
//! This module defines the 13 addressing modes of the 6502 and the resolver
//! that turns the bytes following an opcode into an effective address.
//!
//! The resolver charges the cycle budget as it goes: one cycle per byte
//! fetched from the instruction stream, one per pointer byte read, plus the
//! mode's internal cycles. The final operand read or write is charged by the
//! instruction itself.
//!
//! | Mode          | Resolver cycles                         |
//! |---------------|-----------------------------------------|
//! | zp            | 1                                       |
//! | zp,X / zp,Y   | 2 (index add wraps within page zero)    |
//! | abs           | 2                                       |
//! | abs,X / abs,Y | 2, +1 on page cross or always           |
//! | (ind)         | 4 (JMP only)                            |
//! | (zp,X)        | 4                                       |
//! | (zp),Y        | 3, +1 on page cross or always           |

use crate::cycles::CycleBudget;
use crate::{Cpu, ExecutionError, MemoryBus};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X register, wrapping within zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y register, wrapping within zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BEQ label
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    ///
    /// Example: JMP ($FFFC)
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// When the indexed modes charge their high-byte fix-up cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCrossPenalty {
    /// +1 only if adding the index changes the high byte (reads).
    OnPageCross,
    /// +1 every time (stores and read-modify-write).
    Always,
}

/// True when `before` and `after` lie in different 256-byte pages.
#[inline]
pub fn crosses_page(before: u16, after: u16) -> bool {
    (before ^ after) >> 8 != 0
}

impl Cpu {
    /// Computes the effective address for `mode`, advancing PC past the
    /// operand bytes and charging the mode's cycles to `cycles`.
    ///
    /// `penalty` only matters for AbsoluteX, AbsoluteY and IndirectY.
    ///
    /// # Errors
    ///
    /// [`ExecutionError::NoEffectiveAddress`] for Implicit, Accumulator,
    /// Immediate and Relative, which have no memory operand to point at.
    ///
    /// # Examples
    ///
    /// ```
    /// use m6502::{AddressingMode, Cpu, CycleBudget, FlatMemory, PageCrossPenalty};
    ///
    /// let mut memory = FlatMemory::new();
    /// memory[0x0200] = 0xFF; // operand of LDA $44FF,X
    /// memory[0x0201] = 0x44;
    ///
    /// let mut cpu = Cpu::new();
    /// cpu.reset_to(0x0200);
    /// cpu.x = 0x01;
    ///
    /// let mut cycles = CycleBudget::new(10);
    /// let addr = cpu
    ///     .resolve_address(
    ///         AddressingMode::AbsoluteX,
    ///         PageCrossPenalty::OnPageCross,
    ///         &memory,
    ///         &mut cycles,
    ///     )
    ///     .unwrap();
    ///
    /// assert_eq!(addr, 0x4500);
    /// assert_eq!(cycles.used(), 3); // two operand bytes + page cross
    /// assert_eq!(cpu.pc, 0x0202);
    /// ```
    pub fn resolve_address<M: MemoryBus + ?Sized>(
        &mut self,
        mode: AddressingMode,
        penalty: PageCrossPenalty,
        memory: &M,
        cycles: &mut CycleBudget,
    ) -> Result<u16, ExecutionError> {
        let addr = match mode {
            AddressingMode::ZeroPage => u16::from(self.fetch_byte(memory, cycles)),
            AddressingMode::ZeroPageX => self.zero_page_indexed(self.x, memory, cycles),
            AddressingMode::ZeroPageY => self.zero_page_indexed(self.y, memory, cycles),
            AddressingMode::Absolute => self.fetch_word(memory, cycles),
            AddressingMode::AbsoluteX => {
                let base = self.fetch_word(memory, cycles);
                index_with_penalty(base, self.x, penalty, cycles)
            }
            AddressingMode::AbsoluteY => {
                let base = self.fetch_word(memory, cycles);
                index_with_penalty(base, self.y, penalty, cycles)
            }
            AddressingMode::Indirect => {
                let pointer = self.fetch_word(memory, cycles);
                // NMOS quirk: the high byte is fetched without carrying into
                // the next page, so JMP ($10FF) reads $10FF and $1000.
                let hi_addr = (pointer & 0xFF00) | (pointer.wrapping_add(1) & 0x00FF);
                let lo = self.read_byte(memory, pointer, cycles);
                let hi = self.read_byte(memory, hi_addr, cycles);
                u16::from_le_bytes([lo, hi])
            }
            AddressingMode::IndirectX => {
                let zp = self.fetch_byte(memory, cycles).wrapping_add(self.x);
                cycles.tick();
                self.read_zero_page_word(zp, memory, cycles)
            }
            AddressingMode::IndirectY => {
                let zp = self.fetch_byte(memory, cycles);
                let base = self.read_zero_page_word(zp, memory, cycles);
                index_with_penalty(base, self.y, penalty, cycles)
            }
            AddressingMode::Implicit
            | AddressingMode::Accumulator
            | AddressingMode::Immediate
            | AddressingMode::Relative => {
                return Err(ExecutionError::NoEffectiveAddress(mode));
            }
        };

        Ok(addr)
    }

    fn zero_page_indexed<M: MemoryBus + ?Sized>(
        &mut self,
        index: u8,
        memory: &M,
        cycles: &mut CycleBudget,
    ) -> u16 {
        let zp = self.fetch_byte(memory, cycles).wrapping_add(index);
        cycles.tick();
        u16::from(zp)
    }

    /// Reads a little-endian pointer from zero page; the high byte of a
    /// pointer at 0xFF comes from 0x00.
    fn read_zero_page_word<M: MemoryBus + ?Sized>(
        &self,
        zp: u8,
        memory: &M,
        cycles: &mut CycleBudget,
    ) -> u16 {
        let lo = self.read_byte(memory, u16::from(zp), cycles);
        let hi = self.read_byte(memory, u16::from(zp.wrapping_add(1)), cycles);
        u16::from_le_bytes([lo, hi])
    }
}

fn index_with_penalty(
    base: u16,
    index: u8,
    penalty: PageCrossPenalty,
    cycles: &mut CycleBudget,
) -> u16 {
    let addr = base.wrapping_add(u16::from(index));
    if penalty == PageCrossPenalty::Always || crosses_page(base, addr) {
        cycles.tick();
    }
    addr
}
