use crate::decode::InstructionFields;
use crate::Opcode;
use num::FromPrimitive;

/// ALUOp value for address computation and addi-style arithmetic.
pub const ALU_OP_ADD: u8 = 0;
/// ALUOp value for branch comparisons.
pub const ALU_OP_BRANCH: u8 = 1;
/// ALUOp value for R-format instructions (operation taken from `funct`).
pub const ALU_OP_FUNCT: u8 = 2;
/// ALUOp value for the remaining immediate logic/compare instructions.
pub const ALU_OP_IMMEDIATE: u8 = 3;

/// Control bits of the classic single-cycle MIPS datapath.
///
/// The execution engine never reads these; they are derived per opcode
/// purely so the UI can display what a hardware control unit would assert.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ControlSignals {
    pub reg_write: bool,
    pub mem_read: bool,
    pub mem_write: bool,
    pub mem_to_reg: bool,
    pub branch: bool,
    pub jump: bool,
    pub alu_src: bool,
    pub reg_dst: bool,
    pub alu_op: u8,
}

/// Derives the datapath control bits for a decoded instruction.
///
/// Deterministic in the opcode field alone; unknown opcodes yield the
/// all-false default.
pub fn control_signals(fields: &InstructionFields) -> ControlSignals {
    let mut signals = ControlSignals::default();

    let opcode = match Opcode::from_u8(fields.opcode) {
        Some(opcode) => opcode,
        None => return signals,
    };

    match opcode {
        Opcode::SPECIAL => {
            signals.reg_dst = true;
            signals.reg_write = true;
            signals.alu_op = ALU_OP_FUNCT;
        }

        Opcode::J => {
            signals.jump = true;
        }
        Opcode::JAL => {
            signals.jump = true;
            signals.reg_write = true;
        }

        Opcode::BEQ | Opcode::BNE | Opcode::BLEZ | Opcode::BGTZ => {
            signals.branch = true;
            signals.alu_op = ALU_OP_BRANCH;
        }

        Opcode::ADDI | Opcode::ADDIU => {
            signals.alu_src = true;
            signals.reg_write = true;
            signals.alu_op = ALU_OP_ADD;
        }

        Opcode::SLTI
        | Opcode::SLTIU
        | Opcode::ANDI
        | Opcode::ORI
        | Opcode::XORI
        | Opcode::LUI => {
            signals.alu_src = true;
            signals.reg_write = true;
            signals.alu_op = ALU_OP_IMMEDIATE;
        }

        Opcode::LB | Opcode::LH | Opcode::LW | Opcode::LBU | Opcode::LHU => {
            signals.alu_src = true;
            signals.mem_read = true;
            signals.mem_to_reg = true;
            signals.reg_write = true;
            signals.alu_op = ALU_OP_ADD;
        }

        Opcode::SB | Opcode::SH | Opcode::SW => {
            signals.alu_src = true;
            signals.mem_write = true;
            signals.alu_op = ALU_OP_ADD;
        }
    }

    signals
}
