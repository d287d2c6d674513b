use std::fmt;

use log::debug;

use crate::control::{control_signals, ControlSignals};
use crate::decode::{decode, InstructionFields};
use crate::logic::{self, TickResult};
use crate::memory::Memory;
use crate::program::Program;
use crate::trace::TraceEntry;
use crate::{constants, register_index, RegisterId, Word};

/// Why the machine refused to advance, or stopped advancing.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ExitCode {
    /// The exit system call was executed, or the machine was already
    /// halted.
    Halted,
    /// The program counter left the loaded program.
    OutOfBounds,
    /// A single `run` exceeded its step limit.
    StepLimit,
    /// No program has been loaded.
    NotLoaded,
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            ExitCode::Halted => "program halted",
            ExitCode::OutOfBounds => "PC out of bounds",
            ExitCode::StepLimit => "maximum step limit reached",
            ExitCode::NotLoaded => "no program loaded",
        })
    }
}

/// Summary of one committed instruction, returned by
/// [`Simulator::step`].
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Step {
    /// Index of the executed instruction.
    pub index: u32,
    /// Program counter the instruction was fetched from.
    pub pc: u32,
    /// Program counter after the step committed.
    pub next_pc: u32,
    /// Encoded instruction word.
    pub word: Word,
    pub fields: InstructionFields,
    pub control: ControlSignals,
    /// True if this instruction halted the machine.
    pub halted: bool,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum StepResult {
    Executed(Step),
    Stopped(ExitCode),
}

/// Result of a [`Simulator::run`] invocation.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Exit {
    pub code: ExitCode,
    /// Instructions committed by this invocation.
    pub steps: u32,
}

/// The architecturally visible machine: register file, HI/LO, program
/// counter, data memory, the loaded program, and the execution history.
///
/// All accessors expose a read-only snapshot of the state; mutation
/// happens exclusively through [`load`](Simulator::load),
/// [`step`](Simulator::step), [`run`](Simulator::run) and
/// [`reset`](Simulator::reset) (plus the `*_mut` accessors intended for
/// hosts that seed state before execution).
pub struct Simulator {
    registers: [Word; constants::REGISTER_COUNT],
    hi: Word,
    lo: Word,
    pc: Word,
    memory: Memory,
    program: Option<Program>,
    halted: bool,
    debug_mode: bool,
    cycle: u64,
    instruction_count: u64,
    trace: Vec<TraceEntry>,
}

impl Default for Simulator {
    fn default() -> Simulator {
        Simulator::new()
    }
}

impl Simulator {
    pub fn new() -> Simulator {
        Simulator {
            registers: [0; constants::REGISTER_COUNT],
            hi: 0,
            lo: 0,
            pc: constants::TEXT_BASE,
            memory: Memory::new(constants::MEMORY_SIZE),
            program: None,
            halted: false,
            debug_mode: false,
            cycle: 0,
            instruction_count: 0,
            trace: Vec::new(),
        }
    }

    /// Installs a program and resets the machine state.
    ///
    /// The program arrives fully assembled, so a load either happens
    /// completely or (on the assembler side) not at all.
    pub fn load(&mut self, program: Program) {
        debug!("loading {} instructions", program.len());
        self.program = Some(program);
        self.reset();
    }

    /// Re-zeroes registers, HI/LO, memory, counters and the trace log,
    /// and restores the PC to the start of the text segment. The loaded
    /// program is kept.
    pub fn reset(&mut self) {
        self.registers = [0; constants::REGISTER_COUNT];
        self.hi = 0;
        self.lo = 0;
        self.pc = constants::TEXT_BASE;
        self.memory.clear();
        self.halted = false;
        self.cycle = 0;
        self.instruction_count = 0;
        self.trace.clear();
    }

    /// Enables or disables trace recording. Entries already recorded are
    /// kept.
    pub fn set_debug_mode(&mut self, enabled: bool) {
        self.debug_mode = enabled;
    }

    /// Executes a single instruction.
    ///
    /// Refuses with [`ExitCode::NotLoaded`] before a program is loaded
    /// and with [`ExitCode::Halted`] once the machine has halted; a PC
    /// outside the program halts the machine and reports
    /// [`ExitCode::OutOfBounds`].
    pub fn step(&mut self) -> StepResult {
        let program = match &self.program {
            Some(program) => program,
            None => return StepResult::Stopped(ExitCode::NotLoaded),
        };

        if self.halted {
            return StepResult::Stopped(ExitCode::Halted);
        }

        let pc = self.pc;
        let index = match program.index_of_address(pc) {
            Some(index) => index,
            None => {
                self.halted = true;
                return StepResult::Stopped(ExitCode::OutOfBounds);
            }
        };

        let instruction = &program.instructions()[index as usize];
        let word = instruction.word();

        let mut next_pc = pc.wrapping_add(constants::WORD_BYTES);
        match logic::tick(
            &mut self.registers,
            &mut self.hi,
            &mut self.lo,
            &mut self.memory,
            instruction.operation(),
            pc,
        ) {
            TickResult::Next => {}
            TickResult::Jump(target) => next_pc = target,
            TickResult::Halt => self.halted = true,
        }

        self.registers[register_index(RegisterId::ZERO)] = 0;
        self.pc = next_pc;
        self.cycle += 1;
        self.instruction_count += 1;

        let fields = decode(word);
        let control = control_signals(&fields);

        if self.debug_mode {
            self.trace.push(TraceEntry {
                cycle: self.cycle,
                pc,
                text: instruction.text().to_owned(),
                word,
                fields,
                control,
                registers: self.registers,
            });
        }

        StepResult::Executed(Step {
            index,
            pc,
            next_pc,
            word,
            fields,
            control,
            halted: self.halted,
        })
    }

    /// Executes instructions until the machine halts, the PC leaves the
    /// program, or the per-invocation step limit is reached.
    ///
    /// Hitting the limit halts the machine; a reset is required before it
    /// can be stepped again.
    pub fn run(&mut self) -> Exit {
        let mut steps = 0u32;

        while steps < constants::RUN_STEP_LIMIT {
            match self.step() {
                StepResult::Executed(step) => {
                    steps += 1;
                    if step.halted {
                        debug!("halted after {} steps", steps);
                        return Exit {
                            code: ExitCode::Halted,
                            steps,
                        };
                    }
                }
                StepResult::Stopped(code) => return Exit { code, steps },
            }
        }

        debug!("step limit reached");
        self.halted = true;
        Exit {
            code: ExitCode::StepLimit,
            steps,
        }
    }

    pub fn registers(&self) -> &[Word; constants::REGISTER_COUNT] {
        &self.registers
    }

    pub fn register(&self, id: RegisterId) -> Word {
        self.registers[register_index(id)]
    }

    /// Writing the zero register has no lasting effect; it is forced back
    /// to zero when the next instruction commits.
    pub fn register_mut(&mut self, id: RegisterId) -> &mut Word {
        &mut self.registers[register_index(id)]
    }

    pub fn pc(&self) -> u32 {
        self.pc
    }

    pub fn hi(&self) -> Word {
        self.hi
    }

    pub fn lo(&self) -> Word {
        self.lo
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    pub fn instruction_count(&self) -> u64 {
        self.instruction_count
    }

    pub fn halted(&self) -> bool {
        self.halted
    }

    pub fn loaded(&self) -> bool {
        self.program.is_some()
    }

    pub fn program(&self) -> Option<&Program> {
        self.program.as_ref()
    }

    pub fn trace(&self) -> &[TraceEntry] {
        &self.trace[..]
    }
}
