//! Tests for the ASL, LSR, ROL and ROR instructions.
//!
//! Tests cover the accumulator form, the read-modify-write memory forms and
//! their cycle counts.

use m6502::{Cpu, FlatMemory, MemoryBus};

fn setup_cpu() -> (Cpu, FlatMemory) {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0xFF);
    let mut cpu = Cpu::new();
    cpu.reset(&memory);
    (cpu, memory)
}

// ========== ASL ==========

#[test]
fn test_asl_accumulator() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.a = 0x81;

    memory.write(0xFF00, 0x0A);

    cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.a, 0x02);
    assert!(cpu.flags.carry);
    assert!(!cpu.flags.zero);
    assert!(!cpu.flags.negative);
    assert_eq!(cpu.pc, 0xFF01);
    assert_eq!(cpu.total_cycles(), 2);
}

#[test]
fn test_asl_zero_page() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.write(0x0020, 0x40);

    // ASL $20
    memory.write(0xFF00, 0x06);
    memory.write(0xFF01, 0x20);

    cpu.step(&mut memory).unwrap();

    assert_eq!(memory.read(0x0020), 0x80);
    assert!(!cpu.flags.carry);
    assert!(cpu.flags.negative);
    assert_eq!(cpu.total_cycles(), 5);
}

#[test]
fn test_asl_absolute_x_always_seven_cycles() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.x = 0x01;
    memory.write(0x1001, 0x01);

    // ASL $1000,X
    memory.write(0xFF00, 0x1E);
    memory.write(0xFF01, 0x00);
    memory.write(0xFF02, 0x10);

    cpu.step(&mut memory).unwrap();

    assert_eq!(memory.read(0x1001), 0x02);
    assert_eq!(cpu.total_cycles(), 7);
}

// ========== LSR ==========

#[test]
fn test_lsr_accumulator_to_zero() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.a = 0x01;
    cpu.flags.negative = true;

    memory.write(0xFF00, 0x4A);

    cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.a, 0x00);
    assert!(cpu.flags.carry);
    assert!(cpu.flags.zero);
    assert!(!cpu.flags.negative);
}

#[test]
fn test_lsr_zero_page_x() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.x = 0x02;
    memory.write(0x0012, 0xFE);

    // LSR $10,X
    memory.write(0xFF00, 0x56);
    memory.write(0xFF01, 0x10);

    cpu.step(&mut memory).unwrap();

    assert_eq!(memory.read(0x0012), 0x7F);
    assert!(!cpu.flags.carry);
    assert_eq!(cpu.total_cycles(), 6);
}

// ========== ROL ==========

#[test]
fn test_rol_accumulator_through_carry() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.a = 0x80;
    cpu.flags.carry = true;

    memory.write(0xFF00, 0x2A);

    cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.a, 0x01);
    assert!(cpu.flags.carry);
    assert!(!cpu.flags.zero);
}

#[test]
fn test_rol_absolute() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.write(0x0400, 0x80);

    // ROL $0400
    memory.write(0xFF00, 0x2E);
    memory.write(0xFF01, 0x00);
    memory.write(0xFF02, 0x04);

    cpu.step(&mut memory).unwrap();

    assert_eq!(memory.read(0x0400), 0x00);
    assert!(cpu.flags.carry);
    assert!(cpu.flags.zero);
    assert_eq!(cpu.total_cycles(), 6);
}

// ========== ROR ==========

#[test]
fn test_ror_accumulator_through_carry() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.a = 0x01;
    cpu.flags.carry = true;

    memory.write(0xFF00, 0x6A);

    cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.a, 0x80);
    assert!(cpu.flags.carry);
    assert!(cpu.flags.negative);
}

#[test]
fn test_ror_zero_page_without_carry() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.write(0x0030, 0x02);

    // ROR $30
    memory.write(0xFF00, 0x66);
    memory.write(0xFF01, 0x30);

    cpu.step(&mut memory).unwrap();

    assert_eq!(memory.read(0x0030), 0x01);
    assert!(!cpu.flags.carry);
    assert_eq!(cpu.total_cycles(), 5);
}
