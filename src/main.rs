use std::process;

use clap::Parser;
use env_logger::Env;

use napkin::{Cli, Config, Napkin};

fn main() {
    // Logs go to stderr so they never mix with program output.
    env_logger::Builder::from_env(Env::new().filter_or("NAPKIN_LOG", "warn")).init();

    let config = Config::from(Cli::parse());
    process::exit(Napkin::run(&config));
}
