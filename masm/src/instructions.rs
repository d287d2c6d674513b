use crate::int_util::process_int;
use crate::labels::{process_statement, LabelMap};
use crate::{new_parser_error, Result, Rule};
use matches::debug_assert_matches;
use mcpu::{
    make_i_instruction, make_j_instruction, make_r_instruction, Address, Funct, Immediate, Opcode,
    Program, RegisterId, Word,
};
use num::{FromPrimitive, Num, NumCast};
use pest::iterators::Pair;
use pest::Span;
use std::str::FromStr;
use util::ParseEnumError;

type InstrVec<'i> = Vec<ParsedInstruction<'i>>;

/// Branch or jump destination as written in the source: either a numeric
/// value or a label resolved in the second pass.
#[derive(Debug, PartialEq)]
pub enum JumpTarget<'i, T: Num + Copy> {
    Address(T),
    Label(Span<'i>),
}

/// Instruction as produced by the first pass. Branches and jumps stay
/// symbolic until every label is known.
#[derive(Debug, PartialEq)]
pub enum ParsedInstruction<'i> {
    Complete(Word),

    Branch {
        opcode: Opcode,
        rs: RegisterId,
        rt: RegisterId,
        target: JumpTarget<'i, Immediate>,
    },

    Jump {
        opcode: Opcode,
        target: JumpTarget<'i, Address>,
    },
}

fn process_enum_inner<T: FromStr<Err = ParseEnumError>>(pair: &Pair<Rule>) -> Result<T> {
    pair.as_str()
        .parse()
        .map_err(|err: ParseEnumError| new_parser_error(pair.as_span(), format!("{}", err)))
}

fn process_register(pair: Pair<Rule>) -> Result<RegisterId> {
    debug_assert_matches!(pair.as_rule(), Rule::register);
    let inner = pair.into_inner().next().unwrap();
    let span = inner.as_span();
    let name = span.as_str();

    if name.bytes().all(|b| b.is_ascii_digit()) {
        return name
            .parse::<u8>()
            .ok()
            .and_then(RegisterId::from_u8)
            .ok_or_else(|| new_parser_error(span, format!("Invalid register \"${}\"", name)));
    }

    name.parse().map_err(|_: ParseEnumError| {
        new_parser_error(span.clone(), format!("Invalid register \"${}\"", name))
    })
}

fn process_jump_target<'i, T>(pair: Pair<'i, Rule>) -> Result<JumpTarget<'i, T>>
where
    T: Num + NumCast + Copy,
{
    debug_assert_matches!(pair.as_rule(), Rule::jump_target);
    let inner = pair.into_inner().next().unwrap();

    match inner.as_rule() {
        Rule::int => {
            let span = inner.as_span();
            let value = process_int(inner)?;
            let target = NumCast::from(value)
                .ok_or_else(|| new_parser_error(span, "Target out of range".to_owned()))?;
            Ok(JumpTarget::Address(target))
        }
        Rule::identifier => Ok(JumpTarget::Label(inner.as_span())),
        _ => unreachable!(),
    }
}

fn process_instruction<'i>(pair: Pair<'i, Rule>, instr: &mut InstrVec<'i>) -> Result<()> {
    debug_assert_matches!(pair.as_rule(), Rule::instruction);
    let inner = pair.into_inner().next().unwrap();
    let rule = inner.as_rule();
    let mut pairs = inner.into_inner();

    match rule {
        Rule::instruction_alu => {
            let funct: Funct = process_enum_inner(&pairs.next().unwrap())?;
            let first = process_register(pairs.next().unwrap())?;
            let second = process_register(pairs.next().unwrap())?;
            let third = process_register(pairs.next().unwrap())?;

            // Variable shifts are written `rd, rt, rs`; everything else
            // `rd, rs, rt`.
            let (rd, rs, rt) = match funct {
                Funct::SLLV | Funct::SRLV | Funct::SRAV => (first, third, second),
                _ => (first, second, third),
            };

            instr.push(ParsedInstruction::Complete(make_r_instruction(
                funct, rd, rs, rt, 0,
            )));
        }

        Rule::instruction_shift => {
            let funct: Funct = process_enum_inner(&pairs.next().unwrap())?;
            let rd = process_register(pairs.next().unwrap())?;
            let rt = process_register(pairs.next().unwrap())?;
            let shamt = process_int(pairs.next().unwrap())? as u32;

            instr.push(ParsedInstruction::Complete(make_r_instruction(
                funct,
                rd,
                RegisterId::ZERO,
                rt,
                shamt,
            )));
        }

        Rule::instruction_muldiv => {
            let funct: Funct = process_enum_inner(&pairs.next().unwrap())?;
            let rs = process_register(pairs.next().unwrap())?;
            let rt = process_register(pairs.next().unwrap())?;

            instr.push(ParsedInstruction::Complete(make_r_instruction(
                funct,
                RegisterId::ZERO,
                rs,
                rt,
                0,
            )));
        }

        Rule::instruction_mf => {
            let funct: Funct = process_enum_inner(&pairs.next().unwrap())?;
            let rd = process_register(pairs.next().unwrap())?;

            instr.push(ParsedInstruction::Complete(make_r_instruction(
                funct,
                rd,
                RegisterId::ZERO,
                RegisterId::ZERO,
                0,
            )));
        }

        Rule::instruction_mt | Rule::instruction_jr => {
            let funct: Funct = process_enum_inner(&pairs.next().unwrap())?;
            let rs = process_register(pairs.next().unwrap())?;

            instr.push(ParsedInstruction::Complete(make_r_instruction(
                funct,
                RegisterId::ZERO,
                rs,
                RegisterId::ZERO,
                0,
            )));
        }

        Rule::instruction_jalr => {
            let funct: Funct = process_enum_inner(&pairs.next().unwrap())?;
            let first = process_register(pairs.next().unwrap())?;

            // `jalr rs` links through $ra, `jalr rd, rs` through rd.
            let (rd, rs) = match pairs.next() {
                Some(second) => (first, process_register(second)?),
                None => (RegisterId::RA, first),
            };

            instr.push(ParsedInstruction::Complete(make_r_instruction(
                funct,
                rd,
                rs,
                RegisterId::ZERO,
                0,
            )));
        }

        Rule::instruction_ls => {
            let opcode: Opcode = process_enum_inner(&pairs.next().unwrap())?;
            let rt = process_register(pairs.next().unwrap())?;
            let mut displacement = pairs.next().unwrap().into_inner();
            let offset = process_int(displacement.next().unwrap())? as Immediate;
            let base = process_register(displacement.next().unwrap())?;

            instr.push(ParsedInstruction::Complete(make_i_instruction(
                opcode, rt, base, offset,
            )));
        }

        Rule::instruction_br => {
            let opcode: Opcode = process_enum_inner(&pairs.next().unwrap())?;
            let rs = process_register(pairs.next().unwrap())?;
            let rt = process_register(pairs.next().unwrap())?;
            let target = process_jump_target(pairs.next().unwrap())?;

            instr.push(ParsedInstruction::Branch {
                opcode,
                rs,
                rt,
                target,
            });
        }

        Rule::instruction_brz => {
            let opcode: Opcode = process_enum_inner(&pairs.next().unwrap())?;
            let rs = process_register(pairs.next().unwrap())?;
            let target = process_jump_target(pairs.next().unwrap())?;

            instr.push(ParsedInstruction::Branch {
                opcode,
                rs,
                rt: RegisterId::ZERO,
                target,
            });
        }

        Rule::instruction_j => {
            let opcode: Opcode = process_enum_inner(&pairs.next().unwrap())?;
            let target = process_jump_target(pairs.next().unwrap())?;

            instr.push(ParsedInstruction::Jump { opcode, target });
        }

        Rule::instruction_i => {
            let opcode: Opcode = process_enum_inner(&pairs.next().unwrap())?;
            let rt = process_register(pairs.next().unwrap())?;
            let rs = process_register(pairs.next().unwrap())?;
            let immediate = process_int(pairs.next().unwrap())? as Immediate;

            instr.push(ParsedInstruction::Complete(make_i_instruction(
                opcode, rt, rs, immediate,
            )));
        }

        Rule::instruction_lui => {
            let opcode: Opcode = process_enum_inner(&pairs.next().unwrap())?;
            let rt = process_register(pairs.next().unwrap())?;
            let immediate = process_int(pairs.next().unwrap())? as Immediate;

            instr.push(ParsedInstruction::Complete(make_i_instruction(
                opcode,
                rt,
                RegisterId::ZERO,
                immediate,
            )));
        }

        Rule::instruction_e => {
            let mnemonic = pairs.next().unwrap();
            let word = if mnemonic.as_str().eq_ignore_ascii_case("syscall") {
                make_r_instruction(
                    Funct::SYSCALL,
                    RegisterId::ZERO,
                    RegisterId::ZERO,
                    RegisterId::ZERO,
                    0,
                )
            } else {
                // nop is sll $zero, $zero, 0.
                0
            };

            instr.push(ParsedInstruction::Complete(word));
        }

        _ => unreachable!(),
    }

    Ok(())
}

/// First pass: collects labels and per-instruction source text, and
/// encodes everything that does not depend on label addresses.
pub fn process_program<'i>(
    pair: Pair<'i, Rule>,
) -> Result<(InstrVec<'i>, LabelMap<'i>, Vec<String>)> {
    debug_assert_matches!(pair.as_rule(), Rule::program);

    let mut instructions = Vec::new();
    let mut labels = LabelMap::new();
    let mut texts = Vec::new();

    for statement in pair.into_inner() {
        if statement.as_rule() != Rule::statement {
            continue; // EOI
        }

        let index = instructions.len() as u32;
        let instr = &mut instructions;
        let text_sink = &mut texts;

        process_statement(statement, &mut labels, index, |p| {
            text_sink.push(p.as_str().trim().to_owned());
            process_instruction(p, instr)
        })?;
    }

    Ok((instructions, labels, texts))
}

fn lookup_label(labels: &LabelMap, span: &Span) -> Result<u32> {
    labels.get(span.as_str()).copied().ok_or_else(|| {
        new_parser_error(span.clone(), format!("Label \"{}\" not found", span.as_str()))
    })
}

fn resolve_branch_offset(
    labels: &LabelMap,
    target: &JumpTarget<Immediate>,
    current: u32,
) -> Result<Immediate> {
    match target {
        JumpTarget::Address(offset) => Ok(*offset),
        JumpTarget::Label(span) => {
            let index = lookup_label(labels, span)?;
            // Distance in instructions from the instruction after the
            // branch.
            let relative = <i64 as From<u32>>::from(index) - <i64 as From<u32>>::from(current) - 1;
            NumCast::from(relative).ok_or_else(|| {
                new_parser_error(span.clone(), "Branch distance too far".to_owned())
            })
        }
    }
}

fn resolve_jump_address(labels: &LabelMap, target: &JumpTarget<Address>) -> Result<Address> {
    match target {
        JumpTarget::Address(address) => Ok(*address),
        JumpTarget::Label(span) => Ok(Program::address(lookup_label(labels, span)?)),
    }
}

fn finalize_instruction(
    labels: &LabelMap,
    instr: &ParsedInstruction,
    current: u32,
) -> Result<Word> {
    Ok(match *instr {
        ParsedInstruction::Complete(word) => word,

        ParsedInstruction::Branch {
            opcode,
            rs,
            rt,
            ref target,
        } => make_i_instruction(
            opcode,
            rt,
            rs,
            resolve_branch_offset(labels, target, current)?,
        ),

        ParsedInstruction::Jump { opcode, ref target } => {
            make_j_instruction(opcode, resolve_jump_address(labels, target)?)
        }
    })
}

/// Second pass: resolves symbolic targets and produces the final words.
pub fn assemble_instructions(instr: &[ParsedInstruction], labels: &LabelMap) -> Result<Vec<Word>> {
    instr
        .iter()
        .enumerate()
        .map(|(i, pi)| finalize_instruction(labels, pi, i as u32))
        .collect()
}
