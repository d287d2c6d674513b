use crate::control::ControlSignals;
use crate::decode::InstructionFields;
use crate::{constants, Word};

/// One committed instruction of the execution history.
///
/// Entries are only recorded while debug mode is enabled. `pc` is the
/// program counter the instruction was fetched from; `registers` is the
/// register file after the instruction committed. All values are raw
/// integers; rendering them in hex or binary is the consumer's concern.
#[derive(Clone, Debug, PartialEq)]
pub struct TraceEntry {
    pub cycle: u64,
    pub pc: u32,
    pub text: String,
    pub word: Word,
    pub fields: InstructionFields,
    pub control: ControlSignals,
    pub registers: [Word; constants::REGISTER_COUNT],
}
