//! Thin driver around the LC-3 toolchain: loads an object image (or
//! assembles source first) and runs it on a machine wired to the
//! terminal. Program output goes to stdout, diagnostics to stderr, and
//! the keyboard is read in raw mode.

mod terminal;


pub use terminal::Terminal;

use lc3obj::Image;
use lc3vm::{Stderr, Stdout, Vm};
use std::path::Path;
use std::{fmt, io};

#[derive(Debug)]
pub enum Error {
    Asm(lc3asm::Error),
    Obj(lc3obj::Error),
    Vm(lc3vm::Error),
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Asm(err) => write!(f, "assembly failed:\n{}", err),
            Error::Obj(err) => write!(f, "bad object image: {}", err),
            Error::Vm(err) => write!(f, "execution failed: {}", err),
            Error::Io(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {}

impl From<lc3asm::Error> for Error {
    fn from(err: lc3asm::Error) -> Error {
        Error::Asm(err)
    }
}

impl From<lc3obj::Error> for Error {
    fn from(err: lc3obj::Error) -> Error {
        Error::Obj(err)
    }
}

impl From<lc3vm::Error> for Error {
    fn from(err: lc3vm::Error) -> Error {
        Error::Vm(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

/// A machine wired to the terminal.
pub fn terminal_vm() -> Vm {
    Vm::new(Box::new(Terminal), Box::new(Stdout), Box::new(Stderr))
}

/// Resets the machine, loads the image and runs to the halt trap.
/// Returns the finished machine so the caller can inspect registers,
/// memory or the trace.
pub fn run_loaded(mut vm: Vm, image: &Image) -> Result<Vm, Error> {
    vm.reset()?;
    vm.load_image(image);
    vm.run()?;
    Ok(vm)
}

pub fn run_image_file<P: AsRef<Path>>(path: P) -> Result<Vm, Error> {
    run_loaded(terminal_vm(), &lc3obj::read_file(path)?)
}

pub fn run_asm_file<P: AsRef<Path>>(path: P) -> Result<Vm, Error> {
    let source = std::fs::read_to_string(path)?;
    let (_, image) = lc3asm::assemble_image(&source)?;
    run_loaded(terminal_vm(), &image)
}
