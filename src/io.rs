//! Character I/O collaborators.
//!
//! The VM talks to the outside world through two small traits: [`Input`]
//! for the keyboard and [`Output`] for the character sinks (program output
//! and diagnostics). The implementations here cover batch and test use;
//! the raw-mode terminal collaborator lives in the `lc3run` driver crate.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{self, Write};
use std::rc::Rc;

/// Keyboard collaborator.
pub trait Input {
    /// Blocks until a key is available and returns its byte value.
    fn getchar(&mut self) -> io::Result<u8>;

    /// Reports whether a key is ready without blocking.
    fn key_ready(&mut self) -> io::Result<bool>;
}

/// Character sink collaborator.
pub trait Output {
    fn write_str(&mut self, text: &str) -> io::Result<()>;
}

/// Scripted keyboard: yields a fixed sequence of key bytes. Reading past
/// the end is an error rather than a hang, which is what a test wants.
pub struct ScriptedInput {
    keys: VecDeque<u8>,
}

impl ScriptedInput {
    pub fn new(keys: &[u8]) -> ScriptedInput {
        ScriptedInput {
            keys: keys.iter().copied().collect(),
        }
    }

    pub fn empty() -> ScriptedInput {
        ScriptedInput::new(&[])
    }
}

impl Input for ScriptedInput {
    fn getchar(&mut self) -> io::Result<u8> {
        self.keys.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "scripted input exhausted")
        })
    }

    fn key_ready(&mut self) -> io::Result<bool> {
        Ok(!self.keys.is_empty())
    }
}

/// Shared, drainable string sink. Cloning yields a handle onto the same
/// buffer, so a test can keep one end while the VM owns the other.
#[derive(Clone, Default)]
pub struct BufferOutput {
    buffer: Rc<RefCell<String>>,
}

impl BufferOutput {
    pub fn new() -> BufferOutput {
        BufferOutput::default()
    }

    pub fn contents(&self) -> String {
        self.buffer.borrow().clone()
    }

    /// Returns the buffered text and clears the buffer.
    pub fn take(&self) -> String {
        std::mem::take(&mut *self.buffer.borrow_mut())
    }
}

impl Output for BufferOutput {
    fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.buffer.borrow_mut().push_str(text);
        Ok(())
    }
}

/// Stdout-backed sink, flushed per write so prompts appear before the VM
/// blocks on input.
pub struct Stdout;

impl Output for Stdout {
    fn write_str(&mut self, text: &str) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(text.as_bytes())?;
        handle.flush()
    }
}

/// Stderr-backed sink for the diagnostic channel.
pub struct Stderr;

impl Output for Stderr {
    fn write_str(&mut self, text: &str) -> io::Result<()> {
        let stderr = io::stderr();
        let mut handle = stderr.lock();
        handle.write_all(text.as_bytes())?;
        handle.flush()
    }
}
