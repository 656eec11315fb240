use std::io;

use log::{debug, error};

#[cfg(feature = "repl")]
use crate::repl::Repl;
use crate::{
    config::Mode, domain::Source, errors::NapkinError, parser::AstPrinter, scope_demo, Config,
    NapkinContext,
};

type ExitCode = i32;

/// The entrypoint to the napkin executable. Supports script mode, REPL mode and the scope demo.
/// Each mode returns the status the process should exit with.
pub struct Napkin;

impl Napkin {
    pub fn run(config: &Config) -> ExitCode {
        debug!("config: {config:?}");

        match config.mode() {
            Mode::ScopeDemo => Self::run_scope_demo(),
            Mode::Script => Self::run_script(config),
            Mode::Repl => Self::run_repl(),
        }
    }

    pub fn run_script(config: &Config) -> ExitCode {
        let Some(path) = &config.script else {
            eprintln!("Error: no script given.");
            return 1;
        };

        let source = match Source::from_path(path) {
            Ok(source) => source,
            Err(err) => {
                debug!("failed to read {}: {err}", path.display());
                eprintln!("Error: could not open file.");
                return 1;
            }
        };

        let mut context = NapkinContext::new(source);

        if config.dump_tokens {
            match context.tokens() {
                Ok(tokens) => tokens.iter().for_each(|token| println!("{token}")),
                Err(err) => return Self::exit_code(err),
            }
        }

        if config.dump_ast {
            match context.ast() {
                Ok(ast) => println!("{}", AstPrinter::new().print(&ast)),
                Err(err) => return Self::exit_code(err),
            }
        }

        match context.run() {
            Ok(_) => 0,
            Err(err) => Self::exit_code(err),
        }
    }

    pub fn run_scope_demo() -> ExitCode {
        match scope_demo::run(&mut io::stdout().lock()) {
            Ok(summary) => {
                debug!("scope demo finished: {summary:?}");
                0
            }
            Err(err) => {
                error!("scope demo failed to write output: {err}");
                1
            }
        }
    }

    #[cfg(feature = "repl")]
    pub fn run_repl() -> ExitCode {
        Repl::default().run()
    }

    #[cfg(not(feature = "repl"))]
    pub fn run_repl() -> ExitCode {
        eprintln!("Must enable 'repl' feature flag!");
        1
    }

    /// `exit(n)` becomes status `n`; every real error is reported and becomes status 1.
    fn exit_code(err: NapkinError) -> ExitCode {
        match err {
            NapkinError::Exit(code) => code,
            err => {
                eprintln!("{err}");
                1
            }
        }
    }
}
