//! CPU initialization and reset tests.

use m6502::{Cpu, FlatMemory, MemoryBus, RESET_VECTOR, SP_RESET};

#[test]
fn test_reset_reads_vector() {
    let mut memory = FlatMemory::new();
    memory.write(RESET_VECTOR, 0x34);
    memory.write(RESET_VECTOR + 1, 0x12);

    let mut cpu = Cpu::new();
    cpu.reset(&memory);

    assert_eq!(cpu.pc, 0x1234);
}

#[test]
fn test_reset_clears_registers_and_flags() {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);

    let mut cpu = Cpu::new();
    cpu.a = 0x11;
    cpu.x = 0x22;
    cpu.y = 0x33;
    cpu.sp = 0x44;
    cpu.set_status(0xFF);
    cpu.reset(&memory);

    assert_eq!(cpu.a, 0x00);
    assert_eq!(cpu.x, 0x00);
    assert_eq!(cpu.y, 0x00);
    assert_eq!(cpu.sp, SP_RESET);
    assert_eq!(cpu.status(), 0x00);
    assert_eq!(cpu.total_cycles(), 0);
}

#[test]
fn test_reset_to_skips_vector() {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);

    let mut cpu = Cpu::new();
    cpu.reset_to(0xFF00);

    assert_eq!(cpu.pc, 0xFF00);
    assert_eq!(cpu.sp, 0xFF);
    assert_eq!(cpu.stack_address(), 0x01FF);
}

#[test]
fn test_reset_after_execution_clears_cycle_count() {
    let mut memory = FlatMemory::new();
    memory.write(0x0200, 0xEA);

    let mut cpu = Cpu::new();
    cpu.reset_to(0x0200);
    cpu.step(&mut memory).unwrap();
    assert_eq!(cpu.total_cycles(), 2);

    cpu.reset_to(0x0200);
    assert_eq!(cpu.total_cycles(), 0);
}

#[test]
fn test_default_matches_new() {
    assert_eq!(Cpu::default(), Cpu::new());
}
