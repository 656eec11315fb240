use std::path::PathBuf;

use clap::Parser;

use crate::Config;

#[derive(Parser, Debug)]
#[command(name = "napkin")]
#[command(about = "Run napkin scripts or start an interactive session", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Script to run (starts the REPL when omitted)
    pub file: Option<PathBuf>,

    /// Print every token before running
    #[arg(long, env = "NAPKIN_DUMP_TOKENS")]
    pub dump_tokens: bool,

    /// Print the parsed program before running
    #[arg(long, env = "NAPKIN_DUMP_AST")]
    pub dump_ast: bool,

    /// Run the built-in scope demo
    #[arg(long)]
    pub scope_demo: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            script: cli.file,
            dump_tokens: cli.dump_tokens,
            dump_ast: cli.dump_ast,
            scope_demo: cli.scope_demo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::Mode;

    fn config(args: &[&str]) -> Config {
        Cli::try_parse_from(args).expect("Failed to parse args!").into()
    }

    #[test]
    fn no_arguments_starts_the_repl() {
        let config = config(&["napkin"]);
        assert_eq!(config, Config::default());
        assert_eq!(config.mode(), Mode::Repl);
    }

    #[test]
    fn script_with_dump_flags() {
        let config = config(&["napkin", "demo.nap", "--dump-tokens", "--dump-ast"]);
        assert_eq!(config.script, Some(PathBuf::from("demo.nap")));
        assert!(config.dump_tokens);
        assert!(config.dump_ast);
        assert_eq!(config.mode(), Mode::Script);
    }

    #[test]
    fn scope_demo_wins() {
        let config = config(&["napkin", "demo.nap", "--scope-demo"]);
        assert_eq!(config.mode(), Mode::ScopeDemo);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["napkin", "--bogus"]).is_err());
    }
}
