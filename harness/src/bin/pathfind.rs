//! Command-line front end.
//!
//! Usage: `pathfind <algorithm> <graphtype> <graph> [<start> <goal>]...`
//!
//! Prints one rendered result per start/goal pair, or a summary of the
//! graph when no pairs are given.

use std::process::ExitCode;

use pathfind_harness::config::{ConfigError, RunConfig};
use pathfind_harness::logging::init_tracing;
use pathfind_harness::runner::run;

fn main() -> ExitCode {
    init_tracing();

    let config = match RunConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e @ ConfigError::Usage { .. }) => {
            eprintln!("{e}");
            return ExitCode::from(1);
        }
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(1);
        }
    };

    match run(&config) {
        Ok(blocks) => {
            for block in blocks {
                println!("{block}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}
