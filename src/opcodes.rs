//! # Opcode Table
//!
//! The 256-entry table maps every opcode byte to a descriptor: the
//! [`Operation`] it performs and the [`AddressingMode`] it reads its operand
//! with. The dispatcher does one table lookup per instruction and then
//! matches on the operation tag, so every documented opcode shares its
//! family's implementation instead of carrying its own copy.
//!
//! The table covers:
//! - **151 documented instructions**: official NMOS 6502 opcodes
//! - **105 unassigned bytes**: [`Operation::Illegal`], mnemonic "???"
//!
//! `base_cycles` is the documented cost without page-crossing or branch
//! penalties. The dispatcher does not read it; it charges cycles as the
//! instruction touches the bus. The column is kept as reference data and the
//! test suite checks the two agree.

use crate::addressing::{AddressingMode, PageCrossPenalty};

/// Semantic operation tag, one per documented mnemonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
    /// No defined semantics on the NMOS part (as far as this core goes).
    Illegal,
}

impl Operation {
    /// Three-letter assembler mnemonic, "???" for unassigned bytes.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Operation::Adc => "ADC",
            Operation::And => "AND",
            Operation::Asl => "ASL",
            Operation::Bcc => "BCC",
            Operation::Bcs => "BCS",
            Operation::Beq => "BEQ",
            Operation::Bit => "BIT",
            Operation::Bmi => "BMI",
            Operation::Bne => "BNE",
            Operation::Bpl => "BPL",
            Operation::Brk => "BRK",
            Operation::Bvc => "BVC",
            Operation::Bvs => "BVS",
            Operation::Clc => "CLC",
            Operation::Cld => "CLD",
            Operation::Cli => "CLI",
            Operation::Clv => "CLV",
            Operation::Cmp => "CMP",
            Operation::Cpx => "CPX",
            Operation::Cpy => "CPY",
            Operation::Dec => "DEC",
            Operation::Dex => "DEX",
            Operation::Dey => "DEY",
            Operation::Eor => "EOR",
            Operation::Inc => "INC",
            Operation::Inx => "INX",
            Operation::Iny => "INY",
            Operation::Jmp => "JMP",
            Operation::Jsr => "JSR",
            Operation::Lda => "LDA",
            Operation::Ldx => "LDX",
            Operation::Ldy => "LDY",
            Operation::Lsr => "LSR",
            Operation::Nop => "NOP",
            Operation::Ora => "ORA",
            Operation::Pha => "PHA",
            Operation::Php => "PHP",
            Operation::Pla => "PLA",
            Operation::Plp => "PLP",
            Operation::Rol => "ROL",
            Operation::Ror => "ROR",
            Operation::Rti => "RTI",
            Operation::Rts => "RTS",
            Operation::Sbc => "SBC",
            Operation::Sec => "SEC",
            Operation::Sed => "SED",
            Operation::Sei => "SEI",
            Operation::Sta => "STA",
            Operation::Stx => "STX",
            Operation::Sty => "STY",
            Operation::Tax => "TAX",
            Operation::Tay => "TAY",
            Operation::Tsx => "TSX",
            Operation::Txa => "TXA",
            Operation::Txs => "TXS",
            Operation::Tya => "TYA",
            Operation::Illegal => "???",
        }
    }

    /// How an indexed operand address is charged for this operation.
    ///
    /// Stores and read-modify-write instructions always spend the fix-up
    /// cycle on absolute,X / absolute,Y / (zp),Y; everything else spends it
    /// only when the index carries into the high byte.
    pub const fn page_cross_penalty(self) -> PageCrossPenalty {
        match self {
            Operation::Sta
            | Operation::Stx
            | Operation::Sty
            | Operation::Asl
            | Operation::Lsr
            | Operation::Rol
            | Operation::Ror
            | Operation::Inc
            | Operation::Dec => PageCrossPenalty::Always,
            _ => PageCrossPenalty::OnPageCross,
        }
    }
}

/// Descriptor for a single opcode byte.
///
/// # Examples
///
/// ```
/// use m6502::{AddressingMode, Operation, OPCODE_TABLE};
///
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.operation, Operation::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic ("???" for unassigned bytes).
    pub mnemonic: &'static str,

    /// Semantic operation the dispatcher executes.
    pub operation: Operation,

    /// How the operand bytes are interpreted.
    pub addressing_mode: AddressingMode,

    /// Documented cycle cost before page-crossing and branch penalties.
    /// Unassigned bytes cost the single opcode fetch.
    pub base_cycles: u8,

    /// Opcode plus operand bytes (1-3).
    pub size_bytes: u8,
}

impl OpcodeMetadata {
    /// True for bytes with no documented instruction.
    pub const fn is_illegal(&self) -> bool {
        matches!(self.operation, Operation::Illegal)
    }
}

const fn op(
    operation: Operation,
    addressing_mode: AddressingMode,
    base_cycles: u8,
) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic: operation.mnemonic(),
        operation,
        addressing_mode,
        base_cycles,
        size_bytes: 1 + addressing_mode.operand_bytes(),
    }
}

const ILLEGAL: OpcodeMetadata = op(Operation::Illegal, AddressingMode::Implicit, 1);

/// Complete 256-entry opcode table indexed by opcode byte value.
///
/// # Examples
///
/// ```
/// use m6502::OPCODE_TABLE;
///
/// let jsr = &OPCODE_TABLE[0x20];
/// assert_eq!(jsr.mnemonic, "JSR");
/// assert_eq!(jsr.base_cycles, 6);
///
/// assert!(OPCODE_TABLE[0x02].is_illegal());
/// ```
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = [
    // BRK is listed as 1 byte, not the 2 the chip uses with its signature
    // byte. The core never services BRK and skips only the opcode byte.
    op(Operation::Brk, AddressingMode::Implicit, 7), // 0x00
    op(Operation::Ora, AddressingMode::IndirectX, 6), // 0x01
    ILLEGAL, // 0x02
    ILLEGAL, // 0x03
    ILLEGAL, // 0x04
    op(Operation::Ora, AddressingMode::ZeroPage, 3), // 0x05
    op(Operation::Asl, AddressingMode::ZeroPage, 5), // 0x06
    ILLEGAL, // 0x07
    op(Operation::Php, AddressingMode::Implicit, 3), // 0x08
    op(Operation::Ora, AddressingMode::Immediate, 2), // 0x09
    op(Operation::Asl, AddressingMode::Accumulator, 2), // 0x0A
    ILLEGAL, // 0x0B
    ILLEGAL, // 0x0C
    op(Operation::Ora, AddressingMode::Absolute, 4), // 0x0D
    op(Operation::Asl, AddressingMode::Absolute, 6), // 0x0E
    ILLEGAL, // 0x0F
    op(Operation::Bpl, AddressingMode::Relative, 2), // 0x10
    op(Operation::Ora, AddressingMode::IndirectY, 5), // 0x11
    ILLEGAL, // 0x12
    ILLEGAL, // 0x13
    ILLEGAL, // 0x14
    op(Operation::Ora, AddressingMode::ZeroPageX, 4), // 0x15
    op(Operation::Asl, AddressingMode::ZeroPageX, 6), // 0x16
    ILLEGAL, // 0x17
    op(Operation::Clc, AddressingMode::Implicit, 2), // 0x18
    op(Operation::Ora, AddressingMode::AbsoluteY, 4), // 0x19
    ILLEGAL, // 0x1A
    ILLEGAL, // 0x1B
    ILLEGAL, // 0x1C
    op(Operation::Ora, AddressingMode::AbsoluteX, 4), // 0x1D
    op(Operation::Asl, AddressingMode::AbsoluteX, 7), // 0x1E
    ILLEGAL, // 0x1F
    op(Operation::Jsr, AddressingMode::Absolute, 6), // 0x20
    op(Operation::And, AddressingMode::IndirectX, 6), // 0x21
    ILLEGAL, // 0x22
    ILLEGAL, // 0x23
    op(Operation::Bit, AddressingMode::ZeroPage, 3), // 0x24
    op(Operation::And, AddressingMode::ZeroPage, 3), // 0x25
    op(Operation::Rol, AddressingMode::ZeroPage, 5), // 0x26
    ILLEGAL, // 0x27
    op(Operation::Plp, AddressingMode::Implicit, 4), // 0x28
    op(Operation::And, AddressingMode::Immediate, 2), // 0x29
    op(Operation::Rol, AddressingMode::Accumulator, 2), // 0x2A
    ILLEGAL, // 0x2B
    op(Operation::Bit, AddressingMode::Absolute, 4), // 0x2C
    op(Operation::And, AddressingMode::Absolute, 4), // 0x2D
    op(Operation::Rol, AddressingMode::Absolute, 6), // 0x2E
    ILLEGAL, // 0x2F
    op(Operation::Bmi, AddressingMode::Relative, 2), // 0x30
    op(Operation::And, AddressingMode::IndirectY, 5), // 0x31
    ILLEGAL, // 0x32
    ILLEGAL, // 0x33
    ILLEGAL, // 0x34
    op(Operation::And, AddressingMode::ZeroPageX, 4), // 0x35
    op(Operation::Rol, AddressingMode::ZeroPageX, 6), // 0x36
    ILLEGAL, // 0x37
    op(Operation::Sec, AddressingMode::Implicit, 2), // 0x38
    op(Operation::And, AddressingMode::AbsoluteY, 4), // 0x39
    ILLEGAL, // 0x3A
    ILLEGAL, // 0x3B
    ILLEGAL, // 0x3C
    op(Operation::And, AddressingMode::AbsoluteX, 4), // 0x3D
    op(Operation::Rol, AddressingMode::AbsoluteX, 7), // 0x3E
    ILLEGAL, // 0x3F
    op(Operation::Rti, AddressingMode::Implicit, 6), // 0x40
    op(Operation::Eor, AddressingMode::IndirectX, 6), // 0x41
    ILLEGAL, // 0x42
    ILLEGAL, // 0x43
    ILLEGAL, // 0x44
    op(Operation::Eor, AddressingMode::ZeroPage, 3), // 0x45
    op(Operation::Lsr, AddressingMode::ZeroPage, 5), // 0x46
    ILLEGAL, // 0x47
    op(Operation::Pha, AddressingMode::Implicit, 3), // 0x48
    op(Operation::Eor, AddressingMode::Immediate, 2), // 0x49
    op(Operation::Lsr, AddressingMode::Accumulator, 2), // 0x4A
    ILLEGAL, // 0x4B
    op(Operation::Jmp, AddressingMode::Absolute, 3), // 0x4C
    op(Operation::Eor, AddressingMode::Absolute, 4), // 0x4D
    op(Operation::Lsr, AddressingMode::Absolute, 6), // 0x4E
    ILLEGAL, // 0x4F
    op(Operation::Bvc, AddressingMode::Relative, 2), // 0x50
    op(Operation::Eor, AddressingMode::IndirectY, 5), // 0x51
    ILLEGAL, // 0x52
    ILLEGAL, // 0x53
    ILLEGAL, // 0x54
    op(Operation::Eor, AddressingMode::ZeroPageX, 4), // 0x55
    op(Operation::Lsr, AddressingMode::ZeroPageX, 6), // 0x56
    ILLEGAL, // 0x57
    op(Operation::Cli, AddressingMode::Implicit, 2), // 0x58
    op(Operation::Eor, AddressingMode::AbsoluteY, 4), // 0x59
    ILLEGAL, // 0x5A
    ILLEGAL, // 0x5B
    ILLEGAL, // 0x5C
    op(Operation::Eor, AddressingMode::AbsoluteX, 4), // 0x5D
    op(Operation::Lsr, AddressingMode::AbsoluteX, 7), // 0x5E
    ILLEGAL, // 0x5F
    op(Operation::Rts, AddressingMode::Implicit, 6), // 0x60
    op(Operation::Adc, AddressingMode::IndirectX, 6), // 0x61
    ILLEGAL, // 0x62
    ILLEGAL, // 0x63
    ILLEGAL, // 0x64
    op(Operation::Adc, AddressingMode::ZeroPage, 3), // 0x65
    op(Operation::Ror, AddressingMode::ZeroPage, 5), // 0x66
    ILLEGAL, // 0x67
    op(Operation::Pla, AddressingMode::Implicit, 4), // 0x68
    op(Operation::Adc, AddressingMode::Immediate, 2), // 0x69
    op(Operation::Ror, AddressingMode::Accumulator, 2), // 0x6A
    ILLEGAL, // 0x6B
    op(Operation::Jmp, AddressingMode::Indirect, 5), // 0x6C
    op(Operation::Adc, AddressingMode::Absolute, 4), // 0x6D
    op(Operation::Ror, AddressingMode::Absolute, 6), // 0x6E
    ILLEGAL, // 0x6F
    op(Operation::Bvs, AddressingMode::Relative, 2), // 0x70
    op(Operation::Adc, AddressingMode::IndirectY, 5), // 0x71
    ILLEGAL, // 0x72
    ILLEGAL, // 0x73
    ILLEGAL, // 0x74
    op(Operation::Adc, AddressingMode::ZeroPageX, 4), // 0x75
    op(Operation::Ror, AddressingMode::ZeroPageX, 6), // 0x76
    ILLEGAL, // 0x77
    op(Operation::Sei, AddressingMode::Implicit, 2), // 0x78
    op(Operation::Adc, AddressingMode::AbsoluteY, 4), // 0x79
    ILLEGAL, // 0x7A
    ILLEGAL, // 0x7B
    ILLEGAL, // 0x7C
    op(Operation::Adc, AddressingMode::AbsoluteX, 4), // 0x7D
    op(Operation::Ror, AddressingMode::AbsoluteX, 7), // 0x7E
    ILLEGAL, // 0x7F
    ILLEGAL, // 0x80
    op(Operation::Sta, AddressingMode::IndirectX, 6), // 0x81
    ILLEGAL, // 0x82
    ILLEGAL, // 0x83
    op(Operation::Sty, AddressingMode::ZeroPage, 3), // 0x84
    op(Operation::Sta, AddressingMode::ZeroPage, 3), // 0x85
    op(Operation::Stx, AddressingMode::ZeroPage, 3), // 0x86
    ILLEGAL, // 0x87
    op(Operation::Dey, AddressingMode::Implicit, 2), // 0x88
    ILLEGAL, // 0x89
    op(Operation::Txa, AddressingMode::Implicit, 2), // 0x8A
    ILLEGAL, // 0x8B
    op(Operation::Sty, AddressingMode::Absolute, 4), // 0x8C
    op(Operation::Sta, AddressingMode::Absolute, 4), // 0x8D
    op(Operation::Stx, AddressingMode::Absolute, 4), // 0x8E
    ILLEGAL, // 0x8F
    op(Operation::Bcc, AddressingMode::Relative, 2), // 0x90
    op(Operation::Sta, AddressingMode::IndirectY, 6), // 0x91
    ILLEGAL, // 0x92
    ILLEGAL, // 0x93
    op(Operation::Sty, AddressingMode::ZeroPageX, 4), // 0x94
    op(Operation::Sta, AddressingMode::ZeroPageX, 4), // 0x95
    op(Operation::Stx, AddressingMode::ZeroPageY, 4), // 0x96
    ILLEGAL, // 0x97
    op(Operation::Tya, AddressingMode::Implicit, 2), // 0x98
    op(Operation::Sta, AddressingMode::AbsoluteY, 5), // 0x99
    op(Operation::Txs, AddressingMode::Implicit, 2), // 0x9A
    ILLEGAL, // 0x9B
    ILLEGAL, // 0x9C
    op(Operation::Sta, AddressingMode::AbsoluteX, 5), // 0x9D
    ILLEGAL, // 0x9E
    ILLEGAL, // 0x9F
    op(Operation::Ldy, AddressingMode::Immediate, 2), // 0xA0
    op(Operation::Lda, AddressingMode::IndirectX, 6), // 0xA1
    op(Operation::Ldx, AddressingMode::Immediate, 2), // 0xA2
    ILLEGAL, // 0xA3
    op(Operation::Ldy, AddressingMode::ZeroPage, 3), // 0xA4
    op(Operation::Lda, AddressingMode::ZeroPage, 3), // 0xA5
    op(Operation::Ldx, AddressingMode::ZeroPage, 3), // 0xA6
    ILLEGAL, // 0xA7
    op(Operation::Tay, AddressingMode::Implicit, 2), // 0xA8
    op(Operation::Lda, AddressingMode::Immediate, 2), // 0xA9
    op(Operation::Tax, AddressingMode::Implicit, 2), // 0xAA
    ILLEGAL, // 0xAB
    op(Operation::Ldy, AddressingMode::Absolute, 4), // 0xAC
    op(Operation::Lda, AddressingMode::Absolute, 4), // 0xAD
    op(Operation::Ldx, AddressingMode::Absolute, 4), // 0xAE
    ILLEGAL, // 0xAF
    op(Operation::Bcs, AddressingMode::Relative, 2), // 0xB0
    op(Operation::Lda, AddressingMode::IndirectY, 5), // 0xB1
    ILLEGAL, // 0xB2
    ILLEGAL, // 0xB3
    op(Operation::Ldy, AddressingMode::ZeroPageX, 4), // 0xB4
    op(Operation::Lda, AddressingMode::ZeroPageX, 4), // 0xB5
    op(Operation::Ldx, AddressingMode::ZeroPageY, 4), // 0xB6
    ILLEGAL, // 0xB7
    op(Operation::Clv, AddressingMode::Implicit, 2), // 0xB8
    op(Operation::Lda, AddressingMode::AbsoluteY, 4), // 0xB9
    op(Operation::Tsx, AddressingMode::Implicit, 2), // 0xBA
    ILLEGAL, // 0xBB
    op(Operation::Ldy, AddressingMode::AbsoluteX, 4), // 0xBC
    op(Operation::Lda, AddressingMode::AbsoluteX, 4), // 0xBD
    op(Operation::Ldx, AddressingMode::AbsoluteY, 4), // 0xBE
    ILLEGAL, // 0xBF
    op(Operation::Cpy, AddressingMode::Immediate, 2), // 0xC0
    op(Operation::Cmp, AddressingMode::IndirectX, 6), // 0xC1
    ILLEGAL, // 0xC2
    ILLEGAL, // 0xC3
    op(Operation::Cpy, AddressingMode::ZeroPage, 3), // 0xC4
    op(Operation::Cmp, AddressingMode::ZeroPage, 3), // 0xC5
    op(Operation::Dec, AddressingMode::ZeroPage, 5), // 0xC6
    ILLEGAL, // 0xC7
    op(Operation::Iny, AddressingMode::Implicit, 2), // 0xC8
    op(Operation::Cmp, AddressingMode::Immediate, 2), // 0xC9
    op(Operation::Dex, AddressingMode::Implicit, 2), // 0xCA
    ILLEGAL, // 0xCB
    op(Operation::Cpy, AddressingMode::Absolute, 4), // 0xCC
    op(Operation::Cmp, AddressingMode::Absolute, 4), // 0xCD
    op(Operation::Dec, AddressingMode::Absolute, 6), // 0xCE
    ILLEGAL, // 0xCF
    op(Operation::Bne, AddressingMode::Relative, 2), // 0xD0
    op(Operation::Cmp, AddressingMode::IndirectY, 5), // 0xD1
    ILLEGAL, // 0xD2
    ILLEGAL, // 0xD3
    ILLEGAL, // 0xD4
    op(Operation::Cmp, AddressingMode::ZeroPageX, 4), // 0xD5
    op(Operation::Dec, AddressingMode::ZeroPageX, 6), // 0xD6
    ILLEGAL, // 0xD7
    op(Operation::Cld, AddressingMode::Implicit, 2), // 0xD8
    op(Operation::Cmp, AddressingMode::AbsoluteY, 4), // 0xD9
    ILLEGAL, // 0xDA
    ILLEGAL, // 0xDB
    ILLEGAL, // 0xDC
    op(Operation::Cmp, AddressingMode::AbsoluteX, 4), // 0xDD
    op(Operation::Dec, AddressingMode::AbsoluteX, 7), // 0xDE
    ILLEGAL, // 0xDF
    op(Operation::Cpx, AddressingMode::Immediate, 2), // 0xE0
    op(Operation::Sbc, AddressingMode::IndirectX, 6), // 0xE1
    ILLEGAL, // 0xE2
    ILLEGAL, // 0xE3
    op(Operation::Cpx, AddressingMode::ZeroPage, 3), // 0xE4
    op(Operation::Sbc, AddressingMode::ZeroPage, 3), // 0xE5
    op(Operation::Inc, AddressingMode::ZeroPage, 5), // 0xE6
    ILLEGAL, // 0xE7
    op(Operation::Inx, AddressingMode::Implicit, 2), // 0xE8
    op(Operation::Sbc, AddressingMode::Immediate, 2), // 0xE9
    op(Operation::Nop, AddressingMode::Implicit, 2), // 0xEA
    ILLEGAL, // 0xEB
    op(Operation::Cpx, AddressingMode::Absolute, 4), // 0xEC
    op(Operation::Sbc, AddressingMode::Absolute, 4), // 0xED
    op(Operation::Inc, AddressingMode::Absolute, 6), // 0xEE
    ILLEGAL, // 0xEF
    op(Operation::Beq, AddressingMode::Relative, 2), // 0xF0
    op(Operation::Sbc, AddressingMode::IndirectY, 5), // 0xF1
    ILLEGAL, // 0xF2
    ILLEGAL, // 0xF3
    ILLEGAL, // 0xF4
    op(Operation::Sbc, AddressingMode::ZeroPageX, 4), // 0xF5
    op(Operation::Inc, AddressingMode::ZeroPageX, 6), // 0xF6
    ILLEGAL, // 0xF7
    op(Operation::Sed, AddressingMode::Implicit, 2), // 0xF8
    op(Operation::Sbc, AddressingMode::AbsoluteY, 4), // 0xF9
    ILLEGAL, // 0xFA
    ILLEGAL, // 0xFB
    ILLEGAL, // 0xFC
    op(Operation::Sbc, AddressingMode::AbsoluteX, 4), // 0xFD
    op(Operation::Inc, AddressingMode::AbsoluteX, 7), // 0xFE
    ILLEGAL, // 0xFF
];
