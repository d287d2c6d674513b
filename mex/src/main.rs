#[macro_use]
extern crate clap;

use byteorder::WriteBytesExt;
use clap::Arg;
use mcpu::{Program, RegisterId, Simulator};
use num::FromPrimitive;
use std::fs::File;
use std::io::prelude::*;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use util::Endian;

#[derive(Debug)]
enum IOErrorContext {
    ReadInput,
    WriteOutput,
}

#[derive(Debug)]
enum Error {
    Asm(masm::Error),
    Io(std::io::Error, IOErrorContext, PathBuf),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err, context, path) => writeln!(
                f,
                "{} file \"{}\" failed: {}",
                match context {
                    IOErrorContext::ReadInput => "Reading input",
                    IOErrorContext::WriteOutput => "Writing output",
                },
                path.display(),
                err
            ),
            Error::Asm(err) => {
                writeln!(f, "Assembling input failed:")?;
                write!(f, "{}", err)
            }
        }
    }
}

fn main() {
    env_logger::init();

    let matches = app_from_crate!()
        .arg(
            Arg::with_name("INPUT")
                .help("Sets the assembly file to run")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("trace")
                .short("t")
                .long("trace")
                .help("Enables debug mode and prints the execution trace"),
        )
        .arg(
            Arg::with_name("emit")
                .short("e")
                .long("emit")
                .takes_value(true)
                .value_name("EMIT")
                .help("Writes the encoded instruction words to a file"),
        )
        .get_matches();

    let input = matches.value_of("INPUT").unwrap();
    let emit = matches.value_of("emit");
    let trace = matches.is_present("trace");

    if let Err(err) = mex(input, emit, trace) {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

fn mex(input: &str, emit: Option<&str>, trace: bool) -> Result<(), Error> {
    let input_path = Path::new(input);
    let source = read_source(input_path)?;

    let program = masm::assemble(&source).map_err(|err| {
        Error::Asm(match input_path.to_str() {
            Some(path_str) => err.with_path(path_str),
            None => err,
        })
    })?;

    if let Some(emit_path_str) = emit {
        let emit_path = PathBuf::from(emit_path_str);
        write_words(&program, &emit_path)
            .map_err(|err| Error::Io(err, IOErrorContext::WriteOutput, emit_path))?;
    }

    let mut simulator = Simulator::new();
    simulator.set_debug_mode(trace);
    simulator.load(program);

    let exit = simulator.run();

    if trace {
        for entry in simulator.trace() {
            println!(
                "{:>5}  {:#010x}  {:#010x}  {}",
                entry.cycle, entry.pc, entry.word, entry.text
            );
        }
        println!();
    }

    println!("{} after {} steps", exit.code, exit.steps);
    print_state(&simulator);

    Ok(())
}

fn read_source(path: &Path) -> Result<String, Error> {
    let file =
        File::open(path).map_err(|err| Error::Io(err, IOErrorContext::ReadInput, path.to_owned()))?;
    let mut reader = BufReader::new(file);
    let mut source = String::new();

    reader
        .read_to_string(&mut source)
        .map_err(|err| Error::Io(err, IOErrorContext::ReadInput, path.to_owned()))?;

    Ok(source)
}

fn write_words(program: &Program, path: &PathBuf) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for instruction in program.instructions() {
        writer.write_u32::<Endian>(instruction.word())?;
    }
    Ok(())
}

fn print_state(simulator: &Simulator) {
    println!(
        "pc = {:#010x}  hi = {:#010x}  lo = {:#010x}  cycles = {}",
        simulator.pc(),
        simulator.hi(),
        simulator.lo(),
        simulator.cycle()
    );

    for row in 0..8 {
        for col in 0..4 {
            let id = RegisterId::from_usize(row * 4 + col).unwrap();
            print!("${:<4} = {:#010x}   ", id.to_string(), simulator.register(id));
        }
        println!();
    }

    print_touched(simulator);
}

fn print_touched(simulator: &Simulator) {
    let touched = simulator.memory().touched_addresses();
    if touched.is_empty() {
        return;
    }

    // Collapse the touched set into contiguous runs for display.
    let mut runs: Vec<(u32, u32)> = Vec::new();
    for &address in &touched {
        match runs.last_mut() {
            Some((_, end)) if *end + 1 == address => *end = address,
            _ => runs.push((address, address)),
        }
    }

    println!("touched memory:");
    for (start, end) in runs {
        print!("  {:#010x}..{:#010x}:", start, end);
        for address in start..=end {
            print!(" {:02x}", simulator.memory().data()[address as usize]);
        }
        println!();
    }
}
