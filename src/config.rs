use std::path::PathBuf;

/// How the executable was asked to run.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct Config {
    /// Script to run. Without one the REPL starts.
    pub script: Option<PathBuf>,

    pub dump_tokens: bool,
    pub dump_ast: bool,

    /// Run the native scope demo instead of any script.
    pub scope_demo: bool,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Mode {
    ScopeDemo,
    Script,
    Repl,
}

impl Config {
    pub fn mode(&self) -> Mode {
        if self.scope_demo {
            Mode::ScopeDemo
        } else if self.script.is_some() {
            Mode::Script
        } else {
            Mode::Repl
        }
    }
}
