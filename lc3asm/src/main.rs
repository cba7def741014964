#[macro_use]
extern crate clap;

use clap::Arg;
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Debug)]
enum IOErrorContext {
    ReadInput,
    WriteOutput,
}

#[derive(Debug)]
enum Error {
    Asm(lc3asm::Error),
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
                writeln!(f, "Assembly failed:")?;
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
                .help("Sets the assembly file to assemble")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .value_name("OUTPUT")
                .help("Sets the object file to write to"),
        )
        .arg(
            Arg::with_name("symbols")
                .short("s")
                .long("symbols")
                .takes_value(true)
                .value_name("SYMBOLS")
                .help("Sets the symbol listing file to write to"),
        )
        .get_matches();

    let input = matches.value_of("INPUT").unwrap();
    let output = matches.value_of("output");
    let symbols = matches.value_of("symbols");

    if let Err(err) = lc3asm_main(input, output, symbols) {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

fn lc3asm_main(input: &str, output: Option<&str>, symbols: Option<&str>) -> Result<(), Error> {
    let input_path = Path::new(input);

    let input_file = File::open(input_path)
        .map_err(|err| Error::Io(err, IOErrorContext::ReadInput, input_path.to_owned()))?;
    let mut source = String::new();
    BufReader::new(input_file)
        .read_to_string(&mut source)
        .map_err(|err| Error::Io(err, IOErrorContext::ReadInput, input_path.to_owned()))?;

    let (symbol_table, object_bytes) = lc3asm::assemble(&source).map_err(|err| {
        Error::Asm(match input_path.to_str() {
            Some(path_str) => err.with_path(path_str),
            None => err,
        })
    })?;

    let output_path: PathBuf = output
        .map(PathBuf::from)
        .unwrap_or_else(|| input_path.with_extension("obj"));
    std::fs::write(&output_path, &object_bytes)
        .map_err(|err| Error::Io(err, IOErrorContext::WriteOutput, output_path.clone()))?;

    let symbols_path: PathBuf = symbols
        .map(PathBuf::from)
        .unwrap_or_else(|| input_path.with_extension("sym"));
    std::fs::write(&symbols_path, symbol_table.dump())
        .map_err(|err| Error::Io(err, IOErrorContext::WriteOutput, symbols_path))?;

    Ok(())
}
