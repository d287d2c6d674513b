use crate::decode::{self, InstructionFields};
use crate::{Funct, Opcode, RegisterId, Word};
use num::FromPrimitive;
use std::fmt;
use util_derive::EnumText;

/// Arithmetic and logical I-format operations.
#[derive(Clone, Copy, PartialEq, Eq, Debug, EnumText)]
pub enum ImmediateOp {
    ADDI,
    ADDIU,
    SLTI,
    SLTIU,
    ANDI,
    ORI,
    XORI,
    LUI,
}

/// Load and store operations.
#[derive(Clone, Copy, PartialEq, Eq, Debug, EnumText)]
pub enum MemoryOp {
    LB,
    LH,
    LW,
    LBU,
    LHU,
    SB,
    SH,
    SW,
}

/// Conditional branch operations.
#[derive(Clone, Copy, PartialEq, Eq, Debug, EnumText)]
pub enum BranchOp {
    BEQ,
    BNE,
    BLEZ,
    BGTZ,
}

/// Region-based jump operations.
#[derive(Clone, Copy, PartialEq, Eq, Debug, EnumText)]
pub enum JumpOp {
    J,
    JAL,
}

/// A decoded instruction, grouped by execution class.
///
/// Each variant carries only the fields its class consumes, with the
/// concrete operation as an inner enum; the execution engine dispatches by
/// matching on this type, so no mnemonic strings are compared at runtime.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operation {
    Register {
        funct: Funct,
        rs: u8,
        rt: u8,
        rd: u8,
        shamt: u8,
    },
    Immediate {
        op: ImmediateOp,
        rs: u8,
        rt: u8,
        immediate: u16,
    },
    Memory {
        op: MemoryOp,
        base: u8,
        rt: u8,
        offset: i16,
    },
    Branch {
        op: BranchOp,
        rs: u8,
        rt: u8,
        offset: i16,
    },
    Jump {
        op: JumpOp,
        target: u32,
    },
}

impl Operation {
    /// Decodes an instruction word into its execution form.
    ///
    /// Returns `None` for opcode or funct values outside the supported
    /// set.
    pub fn decode(word: Word) -> Option<Operation> {
        let fields = decode::decode(word);
        let opcode = Opcode::from_u8(fields.opcode)?;

        let operation = match opcode {
            Opcode::SPECIAL => Operation::Register {
                funct: Funct::from_u8(fields.funct)?,
                rs: fields.rs,
                rt: fields.rt,
                rd: fields.rd,
                shamt: fields.shamt,
            },

            Opcode::J => Operation::Jump {
                op: JumpOp::J,
                target: fields.address,
            },
            Opcode::JAL => Operation::Jump {
                op: JumpOp::JAL,
                target: fields.address,
            },

            Opcode::BEQ | Opcode::BNE | Opcode::BLEZ | Opcode::BGTZ => {
                let op = match opcode {
                    Opcode::BEQ => BranchOp::BEQ,
                    Opcode::BNE => BranchOp::BNE,
                    Opcode::BLEZ => BranchOp::BLEZ,
                    _ => BranchOp::BGTZ,
                };
                Operation::Branch {
                    op,
                    rs: fields.rs,
                    rt: fields.rt,
                    offset: fields.immediate as i16,
                }
            }

            Opcode::ADDI
            | Opcode::ADDIU
            | Opcode::SLTI
            | Opcode::SLTIU
            | Opcode::ANDI
            | Opcode::ORI
            | Opcode::XORI
            | Opcode::LUI => {
                let op = match opcode {
                    Opcode::ADDI => ImmediateOp::ADDI,
                    Opcode::ADDIU => ImmediateOp::ADDIU,
                    Opcode::SLTI => ImmediateOp::SLTI,
                    Opcode::SLTIU => ImmediateOp::SLTIU,
                    Opcode::ANDI => ImmediateOp::ANDI,
                    Opcode::ORI => ImmediateOp::ORI,
                    Opcode::XORI => ImmediateOp::XORI,
                    _ => ImmediateOp::LUI,
                };
                Operation::Immediate {
                    op,
                    rs: fields.rs,
                    rt: fields.rt,
                    immediate: fields.immediate,
                }
            }

            Opcode::LB
            | Opcode::LH
            | Opcode::LW
            | Opcode::LBU
            | Opcode::LHU
            | Opcode::SB
            | Opcode::SH
            | Opcode::SW => {
                let op = match opcode {
                    Opcode::LB => MemoryOp::LB,
                    Opcode::LH => MemoryOp::LH,
                    Opcode::LW => MemoryOp::LW,
                    Opcode::LBU => MemoryOp::LBU,
                    Opcode::LHU => MemoryOp::LHU,
                    Opcode::SB => MemoryOp::SB,
                    Opcode::SH => MemoryOp::SH,
                    _ => MemoryOp::SW,
                };
                Operation::Memory {
                    op,
                    base: fields.rs,
                    rt: fields.rt,
                    offset: fields.immediate as i16,
                }
            }
        };

        Some(operation)
    }
}

fn reg(id: u8) -> RegisterId {
    // Register fields are five bits wide, so the lookup cannot fail.
    RegisterId::from_u8(id).unwrap()
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Operation::Register {
                funct,
                rs,
                rt,
                rd,
                shamt,
            } => match funct {
                Funct::SLL if rd == 0 && rt == 0 && shamt == 0 => write!(f, "nop"),
                Funct::SLL | Funct::SRL | Funct::SRA => {
                    write!(f, "{} ${}, ${}, {}", funct, reg(rd), reg(rt), shamt)
                }
                Funct::SLLV | Funct::SRLV | Funct::SRAV => {
                    write!(f, "{} ${}, ${}, ${}", funct, reg(rd), reg(rt), reg(rs))
                }
                Funct::JR => write!(f, "jr ${}", reg(rs)),
                Funct::JALR => write!(f, "jalr ${}, ${}", reg(rd), reg(rs)),
                Funct::SYSCALL => write!(f, "syscall"),
                Funct::MFHI | Funct::MFLO => write!(f, "{} ${}", funct, reg(rd)),
                Funct::MTHI | Funct::MTLO => write!(f, "{} ${}", funct, reg(rs)),
                Funct::MULT | Funct::MULTU | Funct::DIV | Funct::DIVU => {
                    write!(f, "{} ${}, ${}", funct, reg(rs), reg(rt))
                }
                _ => write!(f, "{} ${}, ${}, ${}", funct, reg(rd), reg(rs), reg(rt)),
            },

            Operation::Immediate {
                op,
                rs,
                rt,
                immediate,
            } => match op {
                ImmediateOp::LUI => write!(f, "lui ${}, {:#x}", reg(rt), immediate),
                ImmediateOp::ANDI | ImmediateOp::ORI | ImmediateOp::XORI => {
                    write!(f, "{} ${}, ${}, {:#x}", op, reg(rt), reg(rs), immediate)
                }
                _ => write!(
                    f,
                    "{} ${}, ${}, {}",
                    op,
                    reg(rt),
                    reg(rs),
                    immediate as i16
                ),
            },

            Operation::Memory {
                op,
                base,
                rt,
                offset,
            } => write!(f, "{} ${}, {}(${})", op, reg(rt), offset, reg(base)),

            Operation::Branch { op, rs, rt, offset } => match op {
                BranchOp::BLEZ | BranchOp::BGTZ => {
                    write!(f, "{} ${}, {}", op, reg(rs), offset)
                }
                _ => write!(f, "{} ${}, ${}, {}", op, reg(rs), reg(rt), offset),
            },

            Operation::Jump { op, target } => write!(f, "{} {:#010x}", op, target << 2),
        }
    }
}
