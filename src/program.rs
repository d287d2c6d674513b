use std::collections::HashMap;
use std::error::Error as StdError;
use std::fmt;

use crate::operation::Operation;
use crate::{constants, Word};

/// An instruction word whose opcode or funct field is not part of the
/// supported set.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InvalidInstruction(pub Word);

impl fmt::Display for InvalidInstruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid instruction word {:#010x}", self.0)
    }
}

impl StdError for InvalidInstruction {}

/// A loaded instruction: its source text, encoded word and execution form.
#[derive(Clone, Debug, PartialEq)]
pub struct Instruction {
    text: String,
    word: Word,
    operation: Operation,
}

impl Instruction {
    pub fn new(text: String, word: Word) -> Result<Instruction, InvalidInstruction> {
        let operation = Operation::decode(word).ok_or(InvalidInstruction(word))?;
        Ok(Instruction {
            text,
            word,
            operation,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn word(&self) -> Word {
        self.word
    }

    pub fn operation(&self) -> &Operation {
        &self.operation
    }
}

/// An assembled program: the instruction stream plus the label map
/// collected by the assembler's first pass.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Program {
    instructions: Vec<Instruction>,
    labels: HashMap<String, u32>,
}

impl Program {
    pub fn new(instructions: Vec<Instruction>, labels: HashMap<String, u32>) -> Program {
        Program {
            instructions,
            labels,
        }
    }

    /// Builds a program directly from instruction words, synthesizing the
    /// text of each instruction from its decoded form. Intended for hosts
    /// that generate code programmatically, and for tests.
    pub fn from_words(words: &[Word]) -> Result<Program, InvalidInstruction> {
        let instructions = words
            .iter()
            .map(|&word| {
                let operation = Operation::decode(word).ok_or(InvalidInstruction(word))?;
                Ok(Instruction {
                    text: operation.to_string(),
                    word,
                    operation,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Program {
            instructions,
            labels: HashMap::new(),
        })
    }

    pub fn len(&self) -> u32 {
        self.instructions.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions[..]
    }

    pub fn labels(&self) -> &HashMap<String, u32> {
        &self.labels
    }

    pub fn get(&self, index: u32) -> Option<&Instruction> {
        self.instructions.get(index as usize)
    }

    /// Load address of the instruction with the given index.
    pub fn address(index: u32) -> u32 {
        constants::TEXT_BASE + constants::WORD_BYTES * index
    }

    /// Maps a byte address back to an instruction index. Misaligned or
    /// out-of-range addresses yield `None`.
    pub fn index_of_address(&self, address: u32) -> Option<u32> {
        let offset = address.wrapping_sub(constants::TEXT_BASE);
        if offset % constants::WORD_BYTES != 0 {
            return None;
        }

        let index = offset / constants::WORD_BYTES;
        if index < self.len() {
            Some(index)
        } else {
            None
        }
    }
}
