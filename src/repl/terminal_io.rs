use std::{
    fmt::Display,
    io::{self, Write},
};

use crossterm::{
    event::{self, Event},
    terminal,
};

/// Everything the REPL needs from a terminal. Tests swap in a scripted implementation.
pub trait TerminalIO {
    fn read_event(&mut self) -> Result<Event, io::Error>;
    fn write<T: Display>(&mut self, output: T) -> io::Result<()>;
    fn writeln<T: Display>(&mut self, output: T) -> io::Result<()>;

    /// Move to the start of a fresh line.
    fn enter(&mut self) -> io::Result<()> {
        self.write("\n")
    }

    /// Whether cursor movement escape codes can be used.
    fn is_real_terminal(&self) -> bool {
        true
    }
}

pub struct CrosstermIO;

impl TerminalIO for CrosstermIO {
    fn read_event(&mut self) -> Result<Event, io::Error> {
        event::read()
    }

    fn write<T: Display>(&mut self, output: T) -> io::Result<()> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", normalize(output)?)?;
        stdout.flush()
    }

    fn writeln<T: Display>(&mut self, output: T) -> io::Result<()> {
        self.write(format!("{}\n", output))
    }
}

/// In raw mode a newline does not return the cursor to the first column, so a carriage return is
/// added after each one.
fn normalize<T: Display>(output: T) -> io::Result<String> {
    let formatted = output.to_string();
    if terminal::is_raw_mode_enabled()? {
        Ok(formatted.replace('\n', "\n\r"))
    } else {
        Ok(formatted)
    }
}
