//! # Flag Engine
//!
//! Pure functions for the arithmetic, logical, compare and shift rules. None
//! of them touch the CPU: they take operands and return the result byte plus
//! the flags the instruction defines. `instructions::alu` and
//! `instructions::shifts` write those results back into the processor state.
//!
//! Arithmetic is binary only. The decimal flag is never consulted here.

use crate::opcodes::Operation;
use crate::ExecutionError;

/// Result of an ADC or SBC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sum {
    pub value: u8,
    pub carry: bool,
    pub overflow: bool,
}

/// Adds `operand` and the carry to the accumulator.
///
/// The sum is formed at 9 bits: bit 8 becomes the carry. Overflow is set only
/// when both inputs share a sign and the result's sign differs from them.
///
/// # Examples
///
/// ```
/// use m6502::alu::add_with_carry;
///
/// // 20 + (-17) + 1 = 4
/// let sum = add_with_carry(20, 0xEF, true);
/// assert_eq!(sum.value, 4);
/// assert!(sum.carry);
/// assert!(!sum.overflow);
/// ```
pub fn add_with_carry(a: u8, operand: u8, carry_in: bool) -> Sum {
    let sum = u16::from(a) + u16::from(operand) + u16::from(carry_in);
    let value = sum as u8;

    let same_sign_before = (a ^ operand) & 0x80 == 0;
    let overflow = same_sign_before && (value ^ operand) & 0x80 != 0;

    Sum {
        value,
        carry: sum > 0xFF,
        overflow,
    }
}

/// Subtracts `operand` and the borrow (inverted carry) from the accumulator.
///
/// Done as an addition of the one's complement, so carry set means "no
/// borrow" and overflow follows the ADC rule unchanged.
pub fn subtract_with_borrow(a: u8, operand: u8, carry_in: bool) -> Sum {
    add_with_carry(a, !operand, carry_in)
}

/// Result of CMP, CPX or CPY.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    /// `register - operand`, wrapped to 8 bits. Z and N come from this.
    pub difference: u8,
    /// Unsigned `register >= operand`.
    pub carry: bool,
}

/// Compares a register with an operand.
///
/// # Examples
///
/// ```
/// use m6502::alu::compare;
///
/// // 0x10 >= 0x90 is false even though 0x10 - 0x90 = 0x80 looks negative
/// let cmp = compare(0x10, 0x90);
/// assert!(!cmp.carry);
/// assert_eq!(cmp.difference, 0x80);
/// ```
pub fn compare(register: u8, operand: u8) -> Comparison {
    Comparison {
        difference: register.wrapping_sub(operand),
        carry: register >= operand,
    }
}

/// Flags produced by BIT. The accumulator is not changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitTest {
    pub zero: bool,
    pub negative: bool,
    pub overflow: bool,
}

/// Z from `A & operand`; N and V straight from bits 7 and 6 of the operand.
pub fn bit_test(a: u8, operand: u8) -> BitTest {
    BitTest {
        zero: a & operand == 0,
        negative: operand & 0x80 != 0,
        overflow: operand & 0x40 != 0,
    }
}

/// Bytewise boolean combinators used by AND, EOR and ORA.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    And,
    Eor,
    Ora,
}

impl LogicalOp {
    pub fn apply(self, a: u8, operand: u8) -> u8 {
        match self {
            LogicalOp::And => a & operand,
            LogicalOp::Eor => a ^ operand,
            LogicalOp::Ora => a | operand,
        }
    }
}

impl TryFrom<Operation> for LogicalOp {
    type Error = ExecutionError;

    fn try_from(operation: Operation) -> Result<Self, Self::Error> {
        match operation {
            Operation::And => Ok(LogicalOp::And),
            Operation::Eor => Ok(LogicalOp::Eor),
            Operation::Ora => Ok(LogicalOp::Ora),
            other => Err(ExecutionError::InvalidOperationSelector {
                operation: other,
                family: "logical",
            }),
        }
    }
}

/// Shift and rotate family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftOp {
    Asl,
    Lsr,
    Rol,
    Ror,
}

impl ShiftOp {
    /// Shifts `value` one place, returning the result and the new carry.
    ///
    /// The carry out is the bit shifted off the end: bit 7 for left shifts,
    /// bit 0 for right shifts. Rotates feed the old carry into the vacated
    /// bit.
    ///
    /// # Examples
    ///
    /// ```
    /// use m6502::alu::ShiftOp;
    ///
    /// assert_eq!(ShiftOp::Asl.apply(0x81, false), (0x02, true));
    /// assert_eq!(ShiftOp::Ror.apply(0x01, true), (0x80, true));
    /// ```
    pub fn apply(self, value: u8, carry_in: bool) -> (u8, bool) {
        match self {
            ShiftOp::Asl => (value << 1, value & 0x80 != 0),
            ShiftOp::Lsr => (value >> 1, value & 0x01 != 0),
            ShiftOp::Rol => ((value << 1) | u8::from(carry_in), value & 0x80 != 0),
            ShiftOp::Ror => (
                (value >> 1) | (u8::from(carry_in) << 7),
                value & 0x01 != 0,
            ),
        }
    }
}

impl TryFrom<Operation> for ShiftOp {
    type Error = ExecutionError;

    fn try_from(operation: Operation) -> Result<Self, Self::Error> {
        match operation {
            Operation::Asl => Ok(ShiftOp::Asl),
            Operation::Lsr => Ok(ShiftOp::Lsr),
            Operation::Rol => Ok(ShiftOp::Rol),
            Operation::Ror => Ok(ShiftOp::Ror),
            other => Err(ExecutionError::InvalidOperationSelector {
                operation: other,
                family: "shift",
            }),
        }
    }
}
