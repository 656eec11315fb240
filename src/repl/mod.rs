mod context;
#[allow(clippy::module_inception)]
mod repl;
mod terminal_io;

pub use context::IncrementalContext;
pub use repl::Repl;
pub use terminal_io::{CrosstermIO, TerminalIO};
