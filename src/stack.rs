//! Stack primitives.
//!
//! The stack lives in page one and grows downward. SP is an 8-bit offset, so
//! every access lands in 0x0100-0x01FF and over/underflow simply wraps.
//! Each primitive charges one cycle per byte moved; instructions add their
//! own internal cycles.

use crate::cpu::STACK_BASE;
use crate::cycles::CycleBudget;
use crate::{Cpu, MemoryBus};

impl Cpu {
    /// Address SP currently points at.
    pub fn stack_address(&self) -> u16 {
        STACK_BASE | u16::from(self.sp)
    }

    /// Writes at SP, then decrements SP.
    pub(crate) fn push_byte<M: MemoryBus + ?Sized>(
        &mut self,
        memory: &mut M,
        value: u8,
        cycles: &mut CycleBudget,
    ) {
        self.write_byte(memory, self.stack_address(), value, cycles);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// High byte first, so the low byte ends up at the lower address.
    pub(crate) fn push_word<M: MemoryBus + ?Sized>(
        &mut self,
        memory: &mut M,
        value: u16,
        cycles: &mut CycleBudget,
    ) {
        let [lo, hi] = value.to_le_bytes();
        self.push_byte(memory, hi, cycles);
        self.push_byte(memory, lo, cycles);
    }

    /// Increments SP, then reads at SP.
    pub(crate) fn pop_byte<M: MemoryBus + ?Sized>(
        &mut self,
        memory: &M,
        cycles: &mut CycleBudget,
    ) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.read_byte(memory, self.stack_address(), cycles)
    }

    pub(crate) fn pop_word<M: MemoryBus + ?Sized>(
        &mut self,
        memory: &M,
        cycles: &mut CycleBudget,
    ) -> u16 {
        let lo = self.pop_byte(memory, cycles);
        let hi = self.pop_byte(memory, cycles);
        u16::from_le_bytes([lo, hi])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    #[test]
    fn test_push_pop_byte() {
        let mut memory = FlatMemory::new();
        let mut cpu = Cpu::new();
        let mut cycles = CycleBudget::new(0);

        cpu.push_byte(&mut memory, 0x42, &mut cycles);
        assert_eq!(memory[0x01FF], 0x42);
        assert_eq!(cpu.sp, 0xFE);

        assert_eq!(cpu.pop_byte(&memory, &mut cycles), 0x42);
        assert_eq!(cpu.sp, 0xFF);
        assert_eq!(cycles.used(), 2);
    }

    #[test]
    fn test_push_word_is_little_endian_in_memory() {
        let mut memory = FlatMemory::new();
        let mut cpu = Cpu::new();
        let mut cycles = CycleBudget::new(0);

        cpu.push_word(&mut memory, 0x1234, &mut cycles);
        assert_eq!(memory[0x01FF], 0x12);
        assert_eq!(memory[0x01FE], 0x34);
        assert_eq!(cpu.sp, 0xFD);

        assert_eq!(cpu.pop_word(&memory, &mut cycles), 0x1234);
        assert_eq!(cpu.sp, 0xFF);
        assert_eq!(cycles.used(), 4);
    }

    #[test]
    fn test_push_wraps_within_stack_page() {
        let mut memory = FlatMemory::new();
        let mut cpu = Cpu::new();
        cpu.sp = 0x00;
        let mut cycles = CycleBudget::new(0);

        cpu.push_byte(&mut memory, 0xAA, &mut cycles);
        cpu.push_byte(&mut memory, 0xBB, &mut cycles);

        assert_eq!(memory[0x0100], 0xAA);
        assert_eq!(memory[0x01FF], 0xBB);
        assert_eq!(cpu.sp, 0xFE);
        assert_eq!(memory[0x0000], 0x00);
        assert_eq!(memory[0x0200], 0x00);
    }

    #[test]
    fn test_pop_wraps_within_stack_page() {
        let mut memory = FlatMemory::new();
        memory[0x0100] = 0x77;
        let mut cpu = Cpu::new();
        cpu.sp = 0xFF;
        let mut cycles = CycleBudget::new(0);

        assert_eq!(cpu.pop_byte(&memory, &mut cycles), 0x77);
        assert_eq!(cpu.sp, 0x00);
    }
}
