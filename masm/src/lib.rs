//! Two-pass assembler for the [mcpu](../mcpu/index.html) MIPS32 core.
//!
//! The entry point is [`assemble`], which takes a source listing and
//! produces a loadable [`Program`] — instruction records plus the label
//! map — or the first error encountered. A load is atomic: nothing is
//! produced on failure.
//!
//! Parsing is implemented with [pest]; the single error type of this
//! crate is an alias of `pest::error::Error`, so every failure carries a
//! source span and pretty-prints with context.
//!
//! # Source format
//!
//! One instruction per line. A `#` starts a comment running to the end of
//! the line. A label is an identifier followed by `:` and may share a
//! line with an instruction. Operands are comma-separated; memory
//! operands use the `offset(base)` form. Integer literals are decimal
//! (optionally negative), hexadecimal (`0x`) or binary (`0b`).
//!
//! ```text
//!        addi $t0, $zero, 3
//! loop:  addi $t0, $t0, -1
//!        bne  $t0, $zero, loop   # loop until $t0 == 0
//!        addi $v0, $zero, 10
//!        syscall                 # exit
//! ```
//!
//! # Registers
//!
//! Registers are written `$0`..`$31` or by their conventional names
//! (case-insensitive):
//!
//! Name          | Number | Purpose
//! --------------|--------|------------------------------------------
//! `$zero`       | 0      | Constant zero
//! `$at`         | 1      | Assembler temporary
//! `$v0`-`$v1`   | 2-3    | Values; `$v0 == 10` makes `syscall` exit
//! `$a0`-`$a3`   | 4-7    | Arguments
//! `$t0`-`$t7`   | 8-15   | Temporaries
//! `$s0`-`$s7`   | 16-23  | Saved
//! `$t8`-`$t9`   | 24-25  | Temporaries
//! `$k0`-`$k1`   | 26-27  | Kernel
//! `$gp`         | 28     | Global pointer
//! `$sp`         | 29     | Stack pointer
//! `$fp`         | 30     | Frame pointer
//! `$ra`         | 31     | Return address
//!
//! # Mnemonics
//!
//! Mnemonic                                | Syntax
//! ----------------------------------------|-----------------------
//! `add addu sub subu and or xor nor`      | `mn rd, rs, rt`
//! `slt sltu`                              | `mn rd, rs, rt`
//! `sllv srlv srav`                        | `mn rd, rt, rs`
//! `sll srl sra`                           | `mn rd, rt, shamt`
//! `mult multu div divu`                   | `mn rs, rt`
//! `mfhi mflo`                             | `mn rd`
//! `mthi mtlo`                             | `mn rs`
//! `jr`                                    | `jr rs`
//! `jalr`                                  | `jalr rs` or `jalr rd, rs`
//! `addi addiu slti sltiu andi ori xori`   | `mn rt, rs, imm`
//! `lui`                                   | `lui rt, imm`
//! `lb lbu lh lhu lw sb sh sw`             | `mn rt, offset(base)`
//! `beq bne`                               | `mn rs, rt, target`
//! `bgtz blez`                             | `mn rs, target`
//! `j jal`                                 | `mn target`
//! `nop`, `syscall`                        | bare
//!
//! Branch targets are labels (encoded as the signed distance in
//! instructions from the following instruction) or raw numeric offsets.
//! Jump targets are labels or absolute byte addresses.
//!
//! [pest]: https://docs.rs/pest/

mod instructions;
mod int_util;
mod labels;
mod parser;


use log::debug;
use mcpu::{Instruction, Program};
use pest::iterators::Pair;
use pest::{Parser, Span};

pub use crate::instructions::{JumpTarget, ParsedInstruction};
pub use crate::parser::{MasmParser, Rule};

pub type Error = pest::error::Error<Rule>;

pub type Result<T> = std::result::Result<T, Error>;

/// Assembles a source listing into a loadable [`Program`].
pub fn assemble(input: &str) -> Result<Program> {
    let pair = parse(input)?;
    let (parsed, labels, texts) = instructions::process_program(pair)?;
    let words = instructions::assemble_instructions(&parsed, &labels)?;

    let mut instructions = Vec::with_capacity(words.len());
    for (word, text) in words.into_iter().zip(texts) {
        // Unreachable for words this crate emits.
        let instruction = Instruction::new(text, word).map_err(|err| {
            new_parser_error(
                Span::new(input, 0, input.len()).unwrap(),
                format!("{}", err),
            )
        })?;
        instructions.push(instruction);
    }

    debug!(
        "assembled {} instructions, {} labels",
        instructions.len(),
        labels.len()
    );

    let labels = labels
        .into_iter()
        .map(|(name, index)| (name.to_owned(), index))
        .collect();

    Ok(Program::new(instructions, labels))
}

fn new_parser_error(span: Span, message: String) -> Error {
    Error::new_from_span(pest::error::ErrorVariant::CustomError { message }, span)
}

fn parse(input: &str) -> Result<Pair<Rule>> {
    Ok(MasmParser::parse(Rule::program, input)?.next().unwrap())
}
