use std::io;

use crate::{
    core::Container,
    domain::Source,
    errors::NapkinResult,
    NapkinContext,
};

/// A [`NapkinContext`] fed one complete input at a time. Program output is buffered so the REPL
/// can hand it to the terminal itself.
pub struct IncrementalContext {
    context: NapkinContext,
    output: Container<Vec<u8>>,
}

impl Default for IncrementalContext {
    fn default() -> Self {
        let output = Container::new(Vec::new());
        let mut context = NapkinContext::with_io(
            Source::from_text(""),
            Box::new(io::empty()),
            Box::new(output.clone()),
        );
        context.set_echo(true);

        Self { context, output }
    }
}

impl IncrementalContext {
    pub fn add_line(&mut self, line: &str) -> NapkinResult<()> {
        self.context.add_line(line).map(|_| ())
    }

    /// Everything written since the last call.
    pub fn take_output(&self) -> String {
        let bytes = std::mem::take(&mut *self.output.borrow_mut());
        String::from_utf8_lossy(&bytes).into_owned()
    }
}
