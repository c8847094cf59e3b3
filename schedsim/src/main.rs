//! # schedsim
//!
//! Main entry point for the scheduling simulator.

use clap::Parser;
use schedsim::{cli, Cli};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Cli::parse();
    init_logging(args.verbose);

    let output = args.resolve().and_then(|config| cli::execute(&config));
    match output {
        Ok(text) => print!("{}", text),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Logs go to stderr so stdout only carries the report
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        eprintln!("failed to init logger: {}", e);
    }
}
