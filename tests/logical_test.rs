//! Tests for the AND, EOR and ORA instructions.

use m6502::{Cpu, FlatMemory, MemoryBus};

fn setup_cpu() -> (Cpu, FlatMemory) {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0xFF);
    let mut cpu = Cpu::new();
    cpu.reset(&memory);
    (cpu, memory)
}

// ========== AND ==========

#[test]
fn test_and_immediate() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.a = 0b1100_1100;

    memory.write(0xFF00, 0x29);
    memory.write(0xFF01, 0b1010_1010);

    cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.a, 0b1000_1000);
    assert!(cpu.flags.negative);
    assert!(!cpu.flags.zero);
    assert_eq!(cpu.total_cycles(), 2);
}

#[test]
fn test_and_zero_result() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.a = 0xF0;

    memory.write(0xFF00, 0x29);
    memory.write(0xFF01, 0x0F);

    cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.a, 0x00);
    assert!(cpu.flags.zero);
    assert!(!cpu.flags.negative);
}

#[test]
fn test_and_indirect_x() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.a = 0xFF;
    cpu.x = 0x01;
    memory.write(0x0031, 0x00);
    memory.write(0x0032, 0x50);
    memory.write(0x5000, 0x3C);

    // AND ($30,X)
    memory.write(0xFF00, 0x21);
    memory.write(0xFF01, 0x30);

    cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.a, 0x3C);
    assert_eq!(cpu.total_cycles(), 6);
}

// ========== EOR ==========

#[test]
fn test_eor_immediate() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.a = 0xFF;

    memory.write(0xFF00, 0x49);
    memory.write(0xFF01, 0xCC);

    cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.a, 0x33);
    assert!(!cpu.flags.negative);
}

#[test]
fn test_eor_self_clears() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.a = 0x5A;
    memory.write(0x0010, 0x5A);

    // EOR $10
    memory.write(0xFF00, 0x45);
    memory.write(0xFF01, 0x10);

    cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.a, 0x00);
    assert!(cpu.flags.zero);
    assert_eq!(cpu.total_cycles(), 3);
}

// ========== ORA ==========

#[test]
fn test_ora_immediate() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.a = 0x01;

    memory.write(0xFF00, 0x09);
    memory.write(0xFF01, 0x80);

    cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.a, 0x81);
    assert!(cpu.flags.negative);
}

#[test]
fn test_ora_absolute_x_page_cross() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.a = 0x00;
    cpu.x = 0x20;
    memory.write(0x3010, 0x00);

    // ORA $2FF0,X
    memory.write(0xFF00, 0x1D);
    memory.write(0xFF01, 0xF0);
    memory.write(0xFF02, 0x2F);

    cpu.step(&mut memory).unwrap();

    assert!(cpu.flags.zero);
    assert_eq!(cpu.total_cycles(), 5);
}

#[test]
fn test_logical_ops_leave_carry_and_overflow() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.flags.carry = true;
    cpu.flags.overflow = true;

    // AND #$00 ; EOR #$00 ; ORA #$00
    for (offset, opcode) in [0x29u8, 0x49, 0x09].into_iter().enumerate() {
        memory.write(0xFF00 + offset as u16 * 2, opcode);
        memory.write(0xFF01 + offset as u16 * 2, 0x00);
    }

    assert_eq!(cpu.execute(6, &mut memory), Ok(6));
    assert!(cpu.flags.carry);
    assert!(cpu.flags.overflow);
}
