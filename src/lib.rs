mod cli;
mod config;
mod context;
mod core;
mod domain;
mod errors;
mod lexer;
mod napkin;
mod parser;
#[cfg(feature = "repl")]
mod repl;
pub mod scope_demo;
mod treewalk;

pub use cli::Cli;
pub use config::Config;
pub use context::NapkinContext;
pub use domain::Source;
pub use errors::{LexerError, NapkinError, NapkinResult, ParserError};
pub use napkin::Napkin;
pub use treewalk::TreewalkValue;
