use crate::{constants, Address, Immediate, Word};
use num::traits::ToPrimitive;
use num_derive::{FromPrimitive, ToPrimitive};
use util_derive::EnumText;

// Instruction formats
//
//          +------+-----+-----+-----+-----+------+
//          |31    |     |     |     |     |     0|
//          +------+-----+-----+-----+-----+------+
// R-Format |  0x0 | rs  | rt  | rd  |shamt|funct |
//          +------+-----+-----+-----+-----+------+
// I-Format |opcode| rs  | rt  |    immediate     |
//          +------+-----+-----+-----+-----+------+
// J-Format |opcode|           address            |
//          +------+-----+-----+-----+-----+------+

/// Primary opcode field values (bits 31-26).
///
/// R-format instructions all carry [`SPECIAL`](Opcode::SPECIAL) here and
/// select the actual operation through their `funct` field (see [`Funct`]).
#[derive(Clone, Copy, PartialEq, Eq, Debug, FromPrimitive, ToPrimitive, EnumText)]
pub enum Opcode {
    SPECIAL = 0x00,
    J = 0x02,
    JAL = 0x03,
    BEQ = 0x04,
    BNE = 0x05,
    BLEZ = 0x06,
    BGTZ = 0x07,
    ADDI = 0x08,
    ADDIU = 0x09,
    SLTI = 0x0A,
    SLTIU = 0x0B,
    ANDI = 0x0C,
    ORI = 0x0D,
    XORI = 0x0E,
    LUI = 0x0F,
    LB = 0x20,
    LH = 0x21,
    LW = 0x23,
    LBU = 0x24,
    LHU = 0x25,
    SB = 0x28,
    SH = 0x29,
    SW = 0x2B,
}

/// Funct field values (bits 5-0) of R-format instructions.
#[derive(Clone, Copy, PartialEq, Eq, Debug, FromPrimitive, ToPrimitive, EnumText)]
pub enum Funct {
    //  Mnemonic       | Effect
    //-----------------+--------------------------------------------------
    SLL = 0x00,     // | rd = rt << shamt
    SRL = 0x02,     // | rd = rt >> shamt (inserting zeros)
    SRA = 0x03,     // | rd = rt >> shamt (inserting the sign bit)
    SLLV = 0x04,    // | rd = rt << (rs & 0x1F)
    SRLV = 0x06,    // | rd = rt >> (rs & 0x1F) (inserting zeros)
    SRAV = 0x07,    // | rd = rt >> (rs & 0x1F) (inserting the sign bit)
    JR = 0x08,      // | PC = rs
    JALR = 0x09,    // | rd = PC + 4; PC = rs
    SYSCALL = 0x0C, // | halts the machine when $v0 == 10, otherwise no-op
    MFHI = 0x10,    // | rd = HI
    MTHI = 0x11,    // | HI = rs
    MFLO = 0x12,    // | rd = LO
    MTLO = 0x13,    // | LO = rs
    MULT = 0x18,    // | (HI, LO) = rs * rt (signed 64-bit product)
    MULTU = 0x19,   // | (HI, LO) = rs * rt (unsigned 64-bit product)
    DIV = 0x1A,     // | LO = rs / rt, HI = rs % rt (signed; rt == 0 is a no-op)
    DIVU = 0x1B,    // | unsigned variant of DIV
    ADD = 0x20,     // | rd = rs + rt (wrapping)
    ADDU = 0x21,    // | rd = rs + rt (wrapping)
    SUB = 0x22,     // | rd = rs - rt (wrapping)
    SUBU = 0x23,    // | rd = rs - rt (wrapping)
    AND = 0x24,     // | rd = rs & rt
    OR = 0x25,      // | rd = rs | rt
    XOR = 0x26,     // | rd = rs ^ rt
    NOR = 0x27,     // | rd = !(rs | rt)
    SLT = 0x2A,     // | rd = (rs < rt) ? 1 : 0 (signed)
    SLTU = 0x2B,    // | rd = (rs < rt) ? 1 : 0 (unsigned)
}

/// The 32 general purpose registers in encoding order, named after the
/// MIPS calling convention.
#[derive(Clone, Copy, PartialEq, Eq, Debug, FromPrimitive, ToPrimitive, EnumText)]
pub enum RegisterId {
    ZERO, // Always zero; writes are discarded at commit time

    AT, // Assembler temporary

    V0, // Value 0; $v0 == 10 turns syscall into the exit call
    V1, // Value 1

    A0, // Argument 0
    A1, // Argument 1
    A2, // Argument 2
    A3, // Argument 3

    T0, // Temporary 0
    T1, // Temporary 1
    T2, // Temporary 2
    T3, // Temporary 3
    T4, // Temporary 4
    T5, // Temporary 5
    T6, // Temporary 6
    T7, // Temporary 7

    S0, // Saved 0
    S1, // Saved 1
    S2, // Saved 2
    S3, // Saved 3
    S4, // Saved 4
    S5, // Saved 5
    S6, // Saved 6
    S7, // Saved 7

    T8, // Temporary 8
    T9, // Temporary 9

    K0, // Kernel 0
    K1, // Kernel 1

    GP, // Global pointer
    SP, // Stack pointer
    FP, // Frame pointer

    RA, // Return address, written by jal/jalr
}

#[inline]
pub fn enum_to_u32<T: ToPrimitive + Copy>(val: T) -> u32 {
    val.to_u32().unwrap()
}

#[inline]
pub fn register_index(id: RegisterId) -> usize {
    enum_to_u32(id) as usize
}

/// Constructs an R-format instruction word (opcode 0).
#[inline]
pub fn make_r_instruction(
    funct: Funct,
    rd: RegisterId,
    rs: RegisterId,
    rt: RegisterId,
    shamt: u32,
) -> Word {
    ((enum_to_u32(Opcode::SPECIAL) << constants::OPCODE_OFFSET) & constants::OPCODE_MASK)
        | ((enum_to_u32(rs) << constants::RS_OFFSET) & constants::RS_MASK)
        | ((enum_to_u32(rt) << constants::RT_OFFSET) & constants::RT_MASK)
        | ((enum_to_u32(rd) << constants::RD_OFFSET) & constants::RD_MASK)
        | ((shamt << constants::SHAMT_OFFSET) & constants::SHAMT_MASK)
        | ((enum_to_u32(funct) << constants::FUNCT_OFFSET) & constants::FUNCT_MASK)
}

/// Constructs an R-format instruction word.
#[macro_export]
macro_rules! instr_r {
    ($funct:ident, $rd:ident, $rs:ident, $rt:ident) => {
        $crate::make_r_instruction(
            $crate::Funct::$funct,
            $crate::RegisterId::$rd,
            $crate::RegisterId::$rs,
            $crate::RegisterId::$rt,
            0,
        )
    };
}

/// Constructs a constant-shift R-format instruction word (`rs` = 0).
#[macro_export]
macro_rules! instr_shift {
    ($funct:ident, $rd:ident, $rt:ident, $shamt:expr) => {
        $crate::make_r_instruction(
            $crate::Funct::$funct,
            $crate::RegisterId::$rd,
            $crate::RegisterId::ZERO,
            $crate::RegisterId::$rt,
            $shamt,
        )
    };
}

/// Constructs an I-format instruction word.
///
/// The immediate is encoded by its low 16 bits; negative values therefore
/// arrive as their two's complement pattern.
#[inline]
pub fn make_i_instruction(
    oc: Opcode,
    rt: RegisterId,
    rs: RegisterId,
    immediate: Immediate,
) -> Word {
    ((enum_to_u32(oc) << constants::OPCODE_OFFSET) & constants::OPCODE_MASK)
        | ((enum_to_u32(rs) << constants::RS_OFFSET) & constants::RS_MASK)
        | ((enum_to_u32(rt) << constants::RT_OFFSET) & constants::RT_MASK)
        | (((immediate as u32) << constants::IMMEDIATE_OFFSET) & constants::IMMEDIATE_MASK)
}

/// Constructs an I-format instruction word.
#[macro_export]
macro_rules! instr_i {
    ($opcode:ident, $rt:ident, $rs:ident, $imm:expr) => {
        $crate::make_i_instruction(
            $crate::Opcode::$opcode,
            $crate::RegisterId::$rt,
            $crate::RegisterId::$rs,
            $imm,
        )
    };
}

/// Constructs a J-format instruction word.
///
/// `address` is a byte address; the encoded 26-bit field is `address >> 2`.
#[inline]
pub fn make_j_instruction(oc: Opcode, address: Address) -> Word {
    ((enum_to_u32(oc) << constants::OPCODE_OFFSET) & constants::OPCODE_MASK)
        | ((address >> 2) & constants::ADDRESS_MASK)
}

/// Constructs a J-format instruction word.
#[macro_export]
macro_rules! instr_j {
    ($opcode:ident, $addr:expr) => {
        $crate::make_j_instruction($crate::Opcode::$opcode, $addr)
    };
}

/// The canonical no-op, `sll $zero, $zero, 0`, which encodes as all zeros.
#[macro_export]
macro_rules! nop {
    () => {
        $crate::instr_shift!(SLL, ZERO, ZERO, 0)
    };
}
