//! Tests for the LDA (Load Accumulator) instruction.
//!
//! Tests cover:
//! - All 8 addressing modes
//! - Flag updates (Z, N)
//! - Cycle counts including page crossing penalties

use m6502::{Cpu, FlatMemory, MemoryBus};

/// Helper function to create a CPU with reset vector at 0xFF00
fn setup_cpu() -> (Cpu, FlatMemory) {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0xFF);
    let mut cpu = Cpu::new();
    cpu.reset(&memory);
    (cpu, memory)
}

// ========== Basic LDA Operation Tests ==========

#[test]
fn test_lda_immediate_basic() {
    let (mut cpu, mut memory) = setup_cpu();

    // LDA #$42
    memory.write(0xFF00, 0xA9);
    memory.write(0xFF01, 0x42);

    cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.a, 0x42);
    assert!(!cpu.flags.zero);
    assert!(!cpu.flags.negative);
    assert_eq!(cpu.pc, 0xFF02);
    assert_eq!(cpu.total_cycles(), 2);
}

#[test]
fn test_lda_immediate_zero_and_negative() {
    let (mut cpu, mut memory) = setup_cpu();

    // LDA #$00 ; LDA #$80
    memory.write(0xFF00, 0xA9);
    memory.write(0xFF01, 0x00);
    memory.write(0xFF02, 0xA9);
    memory.write(0xFF03, 0x80);

    assert_eq!(cpu.execute(2, &mut memory), Ok(2));
    assert_eq!(cpu.a, 0x00);
    assert!(cpu.flags.zero);
    assert!(!cpu.flags.negative);

    assert_eq!(cpu.execute(2, &mut memory), Ok(2));
    assert_eq!(cpu.a, 0x80);
    assert!(!cpu.flags.zero);
    assert!(cpu.flags.negative);
}

#[test]
fn test_lda_preserves_other_flags() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.flags.carry = true;
    cpu.flags.overflow = true;

    memory.write(0xFF00, 0xA9);
    memory.write(0xFF01, 0x00);

    cpu.step(&mut memory).unwrap();

    assert!(cpu.flags.carry);
    assert!(cpu.flags.overflow);
}

// ========== Addressing Mode Tests ==========

#[test]
fn test_lda_zero_page() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.write(0x0042, 0x37);

    // LDA $42
    memory.write(0xFF00, 0xA5);
    memory.write(0xFF01, 0x42);

    cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.a, 0x37);
    assert_eq!(cpu.total_cycles(), 3);
}

#[test]
fn test_lda_zero_page_x_wraps() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.x = 0xFF;
    memory.write(0x007F, 0x55);
    memory.write(0x017F, 0xEE);

    // LDA $80,X -> $7F, never $017F
    memory.write(0xFF00, 0xB5);
    memory.write(0xFF01, 0x80);

    cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.a, 0x55);
    assert_eq!(cpu.total_cycles(), 4);
}

#[test]
fn test_lda_absolute() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.write(0x1234, 0x99);

    // LDA $1234
    memory.write(0xFF00, 0xAD);
    memory.write(0xFF01, 0x34);
    memory.write(0xFF02, 0x12);

    cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.a, 0x99);
    assert!(cpu.flags.negative);
    assert_eq!(cpu.pc, 0xFF03);
    assert_eq!(cpu.total_cycles(), 4);
}

#[test]
fn test_lda_absolute_x_no_page_cross() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.x = 0x10;
    memory.write(0x1210, 0x21);

    // LDA $1200,X
    memory.write(0xFF00, 0xBD);
    memory.write(0xFF01, 0x00);
    memory.write(0xFF02, 0x12);

    cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.a, 0x21);
    assert_eq!(cpu.total_cycles(), 4);
}

#[test]
fn test_lda_absolute_x_page_cross() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.x = 0x01;
    memory.write(0x4500, 0x66);

    // LDA $44FF,X
    memory.write(0xFF00, 0xBD);
    memory.write(0xFF01, 0xFF);
    memory.write(0xFF02, 0x44);

    cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.a, 0x66);
    assert_eq!(cpu.total_cycles(), 5);
}

#[test]
fn test_lda_absolute_y_page_cross() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.y = 0x80;
    memory.write(0x2070, 0x01);

    // LDA $1FF0,Y
    memory.write(0xFF00, 0xB9);
    memory.write(0xFF01, 0xF0);
    memory.write(0xFF02, 0x1F);

    cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.a, 0x01);
    assert_eq!(cpu.total_cycles(), 5);
}

#[test]
fn test_lda_indirect_x() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.x = 0x04;
    memory.write(0x0024, 0x74);
    memory.write(0x0025, 0x20);
    memory.write(0x2074, 0xAB);

    // LDA ($20,X)
    memory.write(0xFF00, 0xA1);
    memory.write(0xFF01, 0x20);

    cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.a, 0xAB);
    assert_eq!(cpu.total_cycles(), 6);
}

#[test]
fn test_lda_indirect_x_pointer_wraps_in_zero_page() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.x = 0x01;
    memory.write(0x00FF, 0x00);
    memory.write(0x0000, 0x30);
    memory.write(0x0100, 0x40);
    memory.write(0x3000, 0x5A);

    // LDA ($FE,X) -> pointer at $FF/$00
    memory.write(0xFF00, 0xA1);
    memory.write(0xFF01, 0xFE);

    cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.a, 0x5A);
}

#[test]
fn test_lda_indirect_y() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.y = 0x10;
    memory.write(0x0086, 0x28);
    memory.write(0x0087, 0x40);
    memory.write(0x4038, 0x0F);

    // LDA ($86),Y
    memory.write(0xFF00, 0xB1);
    memory.write(0xFF01, 0x86);

    cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.a, 0x0F);
    assert_eq!(cpu.total_cycles(), 5);
}

#[test]
fn test_lda_indirect_y_page_cross() {
    let (mut cpu, mut memory) = setup_cpu();
    cpu.y = 0xFF;
    memory.write(0x0086, 0x01);
    memory.write(0x0087, 0x40);
    memory.write(0x4100, 0x3C);

    // LDA ($86),Y -> $4001 + $FF = $4100
    memory.write(0xFF00, 0xB1);
    memory.write(0xFF01, 0x86);

    cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.a, 0x3C);
    assert_eq!(cpu.total_cycles(), 6);
}
