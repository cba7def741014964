mod logic;
mod traps;

use crate::instructions::{enum_to_word, register_index, Condition, Reg};
use crate::io::{Input, Output};
use crate::memory::Memory;
use crate::{constants, Word};

use std::error::Error as StdError;
use std::{fmt, io};

use lc3obj::Image;
use log::debug;

/// Snapshot of the register file in trace order `[R0..R7, PC, COND]`.
pub type RegisterSnapshot = [Word; constants::REGISTER_COUNT];

#[derive(Debug)]
pub enum Error {
    /// Fetched a word whose opcode is not defined in user mode; `RTI` and
    /// the reserved opcode land here too.
    BadOpcode(Word),
    /// Malformed or oversized object image.
    Image(lc3obj::Error),
    /// A collaborator failed.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::BadOpcode(instruction) => write!(f, "bad opcode: {:#06x}", instruction),
            Error::Image(err) => err.fmt(f),
            Error::Io(err) => err.fmt(f),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::BadOpcode(_) => None,
            Error::Image(err) => Some(err),
            Error::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<lc3obj::Error> for Error {
    fn from(err: lc3obj::Error) -> Error {
        Error::Image(err)
    }
}

/// The LC-3 machine: memory, register file, flags, running flag, optional
/// trace buffer and the three I/O collaborators.
///
/// A fresh machine is halted; [`reset`](Vm::reset) starts it. `step` and
/// `run` on a halted machine emit `-- HALTED --` on the diagnostic sink and
/// return normally.
pub struct Vm {
    memory: Memory,
    registers: RegisterSnapshot,
    running: bool,
    trace_enabled: bool,
    traces: Vec<RegisterSnapshot>,
    input: Box<dyn Input>,
    output: Box<dyn Output>,
    diagnostic: Box<dyn Output>,
}

impl Vm {
    pub fn new(
        input: Box<dyn Input>,
        output: Box<dyn Output>,
        diagnostic: Box<dyn Output>,
    ) -> Vm {
        Vm {
            memory: Memory::new(),
            registers: [0; constants::REGISTER_COUNT],
            running: false,
            trace_enabled: false,
            traces: Vec::new(),
            input,
            output,
            diagnostic,
        }
    }

    /// Clears the register file, points the PC at the reset vector, raises
    /// the running flag and discards any previous trace.
    pub fn reset(&mut self) -> Result<(), Error> {
        self.diagnostic.write_str("-- RESET --\n")?;
        self.registers = [0; constants::REGISTER_COUNT];
        self.registers[register_index(Reg::PC)] = constants::PC_START;
        self.registers[register_index(Reg::COND)] = enum_to_word(Condition::POS);
        self.running = true;
        self.traces.clear();
        debug!("reset: PC = {:#06x}", constants::PC_START);
        Ok(())
    }

    /// Places an image in memory. Infallible: `Image` values fit by
    /// construction.
    pub fn load_image(&mut self, image: &Image) {
        debug!(
            "loading {} words at {:#06x}",
            image.words().len(),
            image.origin()
        );
        self.memory.load_words(image.origin(), image.words());
    }

    /// Parses a binary object image and places it in memory. Memory is
    /// untouched when the image is rejected.
    pub fn load_binary(&mut self, bytes: &[u8]) -> Result<(), Error> {
        let image = Image::from_bytes(bytes)?;
        self.load_image(&image);
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn register(&self, reg: Reg) -> Word {
        self.registers[register_index(reg)]
    }

    pub fn set_register(&mut self, reg: Reg, value: Word) {
        self.registers[register_index(reg)] = value;
    }

    pub fn registers(&self) -> &RegisterSnapshot {
        &self.registers
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    pub fn set_trace_enabled(&mut self, enabled: bool) {
        self.trace_enabled = enabled;
    }

    /// Register snapshots taken before each executed instruction, oldest
    /// first. Empty unless tracing is enabled.
    pub fn traces(&self) -> &[RegisterSnapshot] {
        &self.traces[..]
    }

    /// Executes one instruction: snapshot (when tracing), fetch, increment
    /// PC, decode, execute. On a halted machine this only emits the
    /// `-- HALTED --` diagnostic.
    pub fn step(&mut self) -> Result<(), Error> {
        if !self.running {
            self.diagnostic.write_str("-- HALTED --\n")?;
            return Ok(());
        }

        if self.trace_enabled {
            self.traces.push(self.registers);
        }

        let pc = self.register(Reg::PC);
        let instruction = self.mem_read(pc)?;
        self.set_register(Reg::PC, pc.wrapping_add(1));
        logic::execute(self, instruction)
    }

    /// Steps until the halt trap clears the running flag.
    pub fn run(&mut self) -> Result<(), Error> {
        if !self.running {
            self.diagnostic.write_str("-- HALTED --\n")?;
            return Ok(());
        }
        while self.running {
            self.step()?;
        }
        Ok(())
    }

    /// Memory read as the program observes it: reading the keyboard status
    /// register polls the keyboard first, updating `KBSR` and `KBDR`.
    pub(crate) fn mem_read(&mut self, address: Word) -> Result<Word, Error> {
        if address == constants::KBSR {
            if self.input.key_ready()? {
                self.memory.write(constants::KBSR, constants::KEY_READY);
                let key = self.input.getchar()?;
                self.memory.write(constants::KBDR, Word::from(key));
            } else {
                self.memory.write(constants::KBSR, 0);
            }
        }
        Ok(self.memory.read(address))
    }

    pub(crate) fn mem_write(&mut self, address: Word, value: Word) {
        self.memory.write(address, value);
    }

    /// Sets COND from the value just written to `reg`.
    pub(crate) fn update_flags(&mut self, reg: Reg) {
        let value = self.register(reg);
        let flag = if value == 0 {
            Condition::ZRO
        } else if value >> 15 != 0 {
            Condition::NEG
        } else {
            Condition::POS
        };
        self.set_register(Reg::COND, enum_to_word(flag));
    }

    pub(crate) fn halt(&mut self) {
        debug!("halt at PC = {:#06x}", self.register(Reg::PC));
        self.running = false;
    }
}
