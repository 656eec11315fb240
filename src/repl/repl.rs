use std::{io, panic};

use crossterm::{
    cursor,
    event::{Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{self, Clear, ClearType},
};
use log::debug;

use crate::{
    errors::NapkinError,
    repl::{CrosstermIO, IncrementalContext, TerminalIO},
};

type ExitCode = i32;

enum ReplControl {
    Continue,
    Exit(ExitCode),
}

/// Install a panic hook to ensure raw mode is disabled on panic.
fn install_custom_panic_hook() {
    panic::set_hook(Box::new(|info| {
        // Without this the shell is left unusable after an unexpected panic.
        let _ = terminal::disable_raw_mode();

        if let Some(s) = info.payload().downcast_ref::<&str>() {
            eprintln!("\nPanic: {s:?}");
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            eprintln!("\nPanic: {s:?}");
        } else {
            eprintln!("\nPanic occurred!");
        }

        if let Some(location) = info.location() {
            eprintln!(
                "  in file '{}' at line {}",
                location.file(),
                location.line()
            );
        }

        std::process::exit(1);
    }));
}

/// Net count of unclosed `{`, ignoring braces inside strings and comments.
fn brace_depth(input: &str) -> i64 {
    let mut depth = 0;
    let mut in_string = false;
    let mut in_comment = false;

    for c in input.chars() {
        match c {
            '\n' => in_comment = false,
            _ if in_comment => {}
            '"' => in_string = !in_string,
            _ if in_string => {}
            '#' => in_comment = true,
            '{' => depth += 1,
            '}' => depth -= 1,
            _ => {}
        }
    }

    depth
}

/// The napkin Read-Evaluate-Print-Loop (REPL).
#[derive(Default)]
pub struct Repl {
    /// Track any interpreter errors so that we can properly emit an useful exit code.
    errors: Vec<NapkinError>,

    /// The current line being manipulated by the user.
    line: Vec<char>,

    /// The cursor position within `line`. This _excludes_ the prompt.
    line_index: usize,

    /// Lines entered so far for an input whose braces are not yet balanced.
    input: String,

    /// Every line entered during this session.
    history: Vec<String>,

    /// If Up/Down has been pressed, the index in `history` the user is currently selecting.
    history_index: Option<usize>,
}

impl Repl {
    /// The primary entrypoint to the REPL, which puts the real terminal in raw mode for the
    /// duration of the session and returns the status the process should exit with.
    pub fn run(&mut self) -> ExitCode {
        let terminal_io = &mut CrosstermIO;
        let _ = terminal_io.writeln(format!(
            "napkin {} REPL (Ctrl-D to quit)",
            env!("CARGO_PKG_VERSION")
        ));

        // Raw mode must be disabled again on every exit path, expected or not.
        install_custom_panic_hook();
        let _ = terminal::enable_raw_mode();
        self.initialize_prompt(terminal_io);

        let mut context = IncrementalContext::default();
        let exit_code = self.run_inner(terminal_io, &mut context);

        let _ = terminal::disable_raw_mode();
        let _ = panic::take_hook();

        exit_code
    }

    fn run_inner<T: TerminalIO>(
        &mut self,
        terminal_io: &mut T,
        context: &mut IncrementalContext,
    ) -> ExitCode {
        loop {
            match terminal_io.read_event() {
                Ok(Event::Key(event)) => match self.handle_key_event(terminal_io, context, event) {
                    ReplControl::Continue => {}
                    ReplControl::Exit(code) => break code,
                },
                Ok(_) => {}
                Err(_) => break 1,
            }
        }
    }

    fn exit_code(&self) -> ExitCode {
        if self.errors.is_empty() {
            0
        } else {
            1
        }
    }

    fn current_line(&self) -> String {
        self.line.iter().collect()
    }

    /// Update the terminal and interpreter state based on the given `KeyEvent`.
    fn handle_key_event<T: TerminalIO>(
        &mut self,
        terminal_io: &mut T,
        context: &mut IncrementalContext,
        event: KeyEvent,
    ) -> ReplControl {
        match (event.code, event.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                let _ = terminal_io.enter();
                self.input.clear();
                self.initialize_prompt(terminal_io);
                return ReplControl::Continue;
            }
            (KeyCode::Char('d'), KeyModifiers::CONTROL) => {
                let _ = terminal_io.enter();
                return ReplControl::Exit(self.exit_code());
            }
            _ => {}
        }

        match event.code {
            KeyCode::Char(c) => {
                self.line.insert(self.line_index, c);
                self.line_index += 1;
                self.redraw_and_position(terminal_io);
            }
            KeyCode::Backspace => {
                if self.line_index > 0 {
                    self.line_index -= 1;
                    self.line.remove(self.line_index);
                    self.redraw_and_position(terminal_io);
                }
            }
            KeyCode::Enter => {
                let line = self.current_line();
                if !line.trim().is_empty() {
                    self.history.push(line.clone());
                }
                self.history_index = None;

                // Move past the typed line first so any output lands below it.
                let _ = terminal_io.enter();
                let control = self.process_line(terminal_io, context, &line);
                if matches!(control, ReplControl::Exit(_)) {
                    return control;
                }

                self.initialize_prompt(terminal_io);
            }
            KeyCode::Up => {
                if let Some(index) = self.history_index {
                    if index > 0 {
                        self.history_index = Some(index - 1);
                    }
                } else if !self.history.is_empty() {
                    self.history_index = Some(self.history.len() - 1);
                }

                if let Some(index) = self.history_index {
                    self.line = self.history[index].chars().collect();
                    self.line_index = self.line.len();
                    self.redraw_and_position(terminal_io);
                }
            }
            KeyCode::Down => {
                if let Some(index) = self.history_index {
                    if index + 1 < self.history.len() {
                        self.history_index = Some(index + 1);
                        self.line = self.history[index + 1].chars().collect();
                    } else {
                        self.history_index = None;
                        self.line.clear();
                    }

                    self.line_index = self.line.len();
                    self.redraw_and_position(terminal_io);
                }
            }
            KeyCode::Right => {
                if self.line_index < self.line.len() {
                    self.line_index += 1;
                    self.redraw_and_position(terminal_io);
                }
            }
            KeyCode::Left => {
                if self.line_index > 0 {
                    self.line_index -= 1;
                    self.redraw_and_position(terminal_io);
                }
            }
            _ => {}
        }

        ReplControl::Continue
    }

    /// `... ` while an input is still missing closing braces.
    fn prompt(&self) -> &str {
        if brace_depth(&self.input) > 0 {
            "... "
        } else {
            "> "
        }
    }

    /// Clear the REPL prompt to prepare for user input.
    fn initialize_prompt<T: TerminalIO>(&mut self, terminal_io: &mut T) {
        self.line.clear();
        self.line_index = 0;
        let _ = terminal_io.write(format!("\r{}", self.prompt()));
    }

    /// Clear the current input, redraw it, and align the cursor to the proper column.
    fn redraw_and_position<T: TerminalIO>(&self, terminal_io: &mut T) {
        if terminal_io.is_real_terminal() {
            let _ = execute!(io::stdout(), Clear(ClearType::CurrentLine));
            let _ = terminal_io.write(format!("\r{}{}", self.prompt(), self.current_line()));

            let cursor_col = (self.line_index + self.prompt().len()) as u16;
            let _ = execute!(io::stdout(), cursor::MoveToColumn(cursor_col));
        } else {
            let _ = terminal_io.write(format!("{}{}", self.prompt(), self.current_line()));
        }
    }

    /// Append the provided line to the pending input and evaluate it once its braces balance.
    fn process_line<T: TerminalIO>(
        &mut self,
        terminal_io: &mut T,
        context: &mut IncrementalContext,
        line: &str,
    ) -> ReplControl {
        self.input.push_str(line);
        self.input.push('\n');

        if brace_depth(&self.input) > 0 {
            return ReplControl::Continue;
        }

        let input = std::mem::take(&mut self.input);
        debug!("evaluating {input:?}");
        let result = context.add_line(&input);

        for printed in context.take_output().lines() {
            let _ = terminal_io.writeln(printed);
        }

        match result {
            Ok(()) => ReplControl::Continue,
            Err(NapkinError::Exit(code)) => ReplControl::Exit(code),
            Err(err) => {
                let _ = terminal_io.writeln(&err);
                self.errors.push(err);
                ReplControl::Continue
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::Display;

    use super::*;

    fn run_inner(terminal: &mut MockTerminalIO) -> ExitCode {
        Repl::default().run_inner(terminal, &mut IncrementalContext::default())
    }

    /// Run the complete flow and collect every full line the REPL printed. If you need any Ctrl
    /// modifiers, use `run_events`.
    fn run(input: &str) -> Vec<String> {
        run_events(string_to_events(input))
    }

    fn run_events(events: Vec<Event>) -> Vec<String> {
        let mut terminal = MockTerminalIO::new(events);
        run_inner(&mut terminal);
        terminal.lines
    }

    fn run_and_exit_code(events: Vec<Event>) -> ExitCode {
        let mut terminal = MockTerminalIO::new(events);
        run_inner(&mut terminal)
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn string_to_events(input: &str) -> Vec<Event> {
        input
            .chars()
            .map(|c| match c {
                '\n' => key(KeyCode::Enter),
                _ => key(KeyCode::Char(c)),
            })
            .collect()
    }

    /// A mock for testing that doesn't use `crossterm`.
    struct MockTerminalIO {
        /// Predefined events for testing
        events: Vec<Event>,

        /// Everything written, for checking prompts
        output: Vec<String>,

        /// Only what was written with `writeln`
        lines: Vec<String>,
    }

    impl MockTerminalIO {
        fn new(events: Vec<Event>) -> Self {
            Self {
                events,
                output: vec![],
                lines: vec![],
            }
        }
    }

    impl TerminalIO for MockTerminalIO {
        fn is_real_terminal(&self) -> bool {
            false
        }

        fn read_event(&mut self) -> Result<Event, io::Error> {
            if self.events.is_empty() {
                Err(io::Error::new(io::ErrorKind::Other, "No more events"))
            } else {
                Ok(self.events.remove(0))
            }
        }

        fn write<T: Display>(&mut self, output: T) -> io::Result<()> {
            self.output.push(format!("{}", output));
            Ok(())
        }

        fn writeln<T: Display>(&mut self, output: T) -> io::Result<()> {
            self.lines.push(format!("{}", output));
            self.write(output)?;
            self.write("\n")?;
            Ok(())
        }
    }

    #[test]
    fn expression_is_echoed() {
        assert_eq!(run("12345\n"), vec!["12345"]);
        assert_eq!(run("j2 + 1\n"), vec!["1 + j2"]);
    }

    #[test]
    fn bindings_are_not_echoed() {
        assert_eq!(run("a := 5.5\na\n"), vec!["5.5"]);
    }

    #[test]
    fn name_error() {
        let lines = run("e\n");
        assert_eq!(lines, vec!["RuntimeError (line 1): undefined variable 'e'."]);
    }

    #[test]
    fn multiline_block() {
        let code = r#"x := 1
bump := -> {
    while x < 3 {
        x = x + 1
        output x
    }
}
bump()
"#;
        assert_eq!(run(code), vec!["2", "3"]);
    }

    #[test]
    fn continuation_prompt() {
        let mut terminal = MockTerminalIO::new(string_to_events("f := -> {\n}\n"));
        run_inner(&mut terminal);

        assert!(terminal.output.contains(&"\r... ".to_string()));
        assert_eq!(terminal.output.last(), Some(&"\r> ".to_string()));
    }

    #[test]
    fn braces_in_strings_do_not_count() {
        assert_eq!(brace_depth("output \"{\""), 0);
        assert_eq!(brace_depth("{ # }"), 1);
        assert_eq!(brace_depth("{\n}"), 0);
    }

    #[test]
    fn line_editing() {
        // Type "13", move left, insert "2", then delete the "3" at the end.
        let events = vec![
            key(KeyCode::Char('1')),
            key(KeyCode::Char('3')),
            key(KeyCode::Left),
            key(KeyCode::Char('2')),
            key(KeyCode::Right),
            key(KeyCode::Backspace),
            key(KeyCode::Enter),
        ];
        assert_eq!(run_events(events), vec!["12"]);
    }

    #[test]
    fn history() {
        let mut events = string_to_events("1 + 1\n2 + 2\n");
        events.extend([
            key(KeyCode::Up),
            key(KeyCode::Up),
            key(KeyCode::Down),
            key(KeyCode::Enter),
        ]);
        assert_eq!(run_events(events), vec!["2", "4", "4"]);
    }

    #[test]
    fn ctrl_c_discards_the_line() {
        let mut events = string_to_events("123456789\n");
        events.insert(4, ctrl('c'));

        assert_eq!(run_events(events), vec!["56789"]);
    }

    #[test]
    fn ctrl_c_discards_a_pending_block() {
        let mut events = string_to_events("f := -> {\n");
        events.push(ctrl('c'));
        events.extend(string_to_events("1 + 1\n"));

        let mut terminal = MockTerminalIO::new(events);
        run_inner(&mut terminal);

        assert_eq!(terminal.lines, vec!["2"]);
        let after_ctrl_c = terminal
            .output
            .iter()
            .rposition(|s| s == "\r... ")
            .expect("Missing continuation prompt!");
        assert_eq!(terminal.output[after_ctrl_c + 2], "\r> ");
        assert_eq!(terminal.output.last(), Some(&"\r> ".to_string()));
    }

    #[test]
    fn ctrl_d() {
        let mut events = string_to_events("123");
        events.push(ctrl('d'));
        assert_eq!(run_and_exit_code(events), 0);

        let mut events = string_to_events("undefined_var\n");
        events.push(ctrl('d'));
        assert_eq!(run_and_exit_code(events), 1);
    }

    #[test]
    fn exit_builtin() {
        assert_eq!(run_and_exit_code(string_to_events("exit(0)\n")), 0);
        assert_eq!(
            run_and_exit_code(string_to_events("undefined_var\nexit(7)\n")),
            7
        );
    }
}
