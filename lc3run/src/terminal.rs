use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use lc3vm::Input;
use std::io;
use std::time::Duration;

/// Keyboard collaborator backed by the controlling terminal. Raw mode is
/// entered only for the duration of a blocking read, so the shell gets its
/// terminal back in a sane state whenever the machine is not reading.
pub struct Terminal;

impl Input for Terminal {
    fn getchar(&mut self) -> io::Result<u8> {
        terminal::enable_raw_mode()?;
        let key = read_key();
        terminal::disable_raw_mode()?;
        key
    }

    fn key_ready(&mut self) -> io::Result<bool> {
        event::poll(Duration::from_secs(0))
    }
}

fn read_key() -> io::Result<u8> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                // Conventional exit status for an interrupt from the
                // keyboard; restore the terminal first.
                let _ = terminal::disable_raw_mode();
                std::process::exit(130);
            }
            match key.code {
                KeyCode::Char(c) if c.is_ascii() => return Ok(c as u8),
                KeyCode::Enter => return Ok(b'\r'),
                KeyCode::Tab => return Ok(b'\t'),
                KeyCode::Backspace => return Ok(0x08),
                KeyCode::Esc => return Ok(0x1B),
                _ => {}
            }
        }
    }
}
