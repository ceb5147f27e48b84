//! # Processor Status Register
//!
//! The 6502 keeps its condition codes in one packed byte (`NV-BDIZC`). The
//! interpreter works on [`StatusFlags`], a struct of named booleans, and only
//! packs to a byte when the status travels through the stack (PHP, PLP, RTI)
//! or when a caller asks for it.
//!
//! Bit layout:
//! - Bit 7: N (Negative)
//! - Bit 6: V (Overflow)
//! - Bit 5: unused (reads back whatever was last pulled; forced to 1 on push)
//! - Bit 4: B (Break; forced to 1 on push)
//! - Bit 3: D (Decimal)
//! - Bit 2: I (Interrupt Disable)
//! - Bit 1: Z (Zero)
//! - Bit 0: C (Carry)

use bitflags::bitflags;

bitflags! {
    /// Packed form of the status register.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StatusBits: u8 {
        const CARRY = 0b0000_0001;
        const ZERO = 0b0000_0010;
        const INTERRUPT_DISABLE = 0b0000_0100;
        const DECIMAL = 0b0000_1000;
        const BREAK = 0b0001_0000;
        const UNUSED = 0b0010_0000;
        const OVERFLOW = 0b0100_0000;
        const NEGATIVE = 0b1000_0000;
    }
}

/// The status register as individual flags.
///
/// `unused` is carried so that a byte pulled with PLP or RTI comes back out of
/// [`StatusFlags::to_byte`] unchanged.
///
/// # Examples
///
/// ```
/// use m6502::StatusFlags;
///
/// let flags = StatusFlags::from_byte(0xCC);
/// assert!(flags.negative);
/// assert!(flags.overflow);
/// assert!(flags.decimal);
/// assert!(flags.interrupt_disable);
/// assert_eq!(flags.to_byte(), 0xCC);
///
/// // Pushing forces the break and unused bits
/// assert_eq!(flags.pushed_byte(), 0xFC);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusFlags {
    pub carry: bool,
    pub zero: bool,
    pub interrupt_disable: bool,
    pub decimal: bool,
    pub break_command: bool,
    pub unused: bool,
    pub overflow: bool,
    pub negative: bool,
}

impl StatusFlags {
    /// Unpacks a status byte. Every bit, including bit 5, is kept.
    pub fn from_byte(byte: u8) -> Self {
        StatusBits::from_bits_retain(byte).into()
    }

    /// Packs the flags into a status byte.
    pub fn to_byte(self) -> u8 {
        StatusBits::from(self).bits()
    }

    /// The byte PHP writes to the stack: bits 4 and 5 are always set there,
    /// whatever the live flags say.
    pub fn pushed_byte(self) -> u8 {
        (StatusBits::from(self) | StatusBits::BREAK | StatusBits::UNUSED).bits()
    }

    /// Zero and Negative from an 8-bit result.
    ///
    /// Callers must pass the truncated byte, never a wider intermediate.
    #[inline]
    pub fn set_zn(&mut self, result: u8) {
        self.zero = result == 0;
        self.negative = result & 0x80 != 0;
    }
}

impl From<StatusBits> for StatusFlags {
    fn from(bits: StatusBits) -> Self {
        Self {
            carry: bits.contains(StatusBits::CARRY),
            zero: bits.contains(StatusBits::ZERO),
            interrupt_disable: bits.contains(StatusBits::INTERRUPT_DISABLE),
            decimal: bits.contains(StatusBits::DECIMAL),
            break_command: bits.contains(StatusBits::BREAK),
            unused: bits.contains(StatusBits::UNUSED),
            overflow: bits.contains(StatusBits::OVERFLOW),
            negative: bits.contains(StatusBits::NEGATIVE),
        }
    }
}

impl From<StatusFlags> for StatusBits {
    fn from(flags: StatusFlags) -> Self {
        let mut bits = StatusBits::empty();
        bits.set(StatusBits::CARRY, flags.carry);
        bits.set(StatusBits::ZERO, flags.zero);
        bits.set(StatusBits::INTERRUPT_DISABLE, flags.interrupt_disable);
        bits.set(StatusBits::DECIMAL, flags.decimal);
        bits.set(StatusBits::BREAK, flags.break_command);
        bits.set(StatusBits::UNUSED, flags.unused);
        bits.set(StatusBits::OVERFLOW, flags.overflow);
        bits.set(StatusBits::NEGATIVE, flags.negative);
        bits
    }
}
