//! Command-line interface for luasyntax
//! Checks a Lua source file for context-free syntax errors and prints a report.
//!
//! Usage:
//!   luasyntax `<path>`
//!
//! The report goes to stdout. Logs go to stderr, filtered by `RUST_LOG` or the
//! configured default.

use clap::{Arg, Command};
use luasyntax::config::{CheckConfig, Loader};
use luasyntax::report;
use luasyntax::{check_file, CheckError};
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> ExitCode {
    let matches = Command::new("luasyntax")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A syntax checker for Lua 5.1 sources")
        .arg(
            Arg::new("path")
                .help("Path to the Lua file to check")
                .required(true)
                .index(1),
        )
        .get_matches();

    let path = matches
        .get_one::<String>("path")
        .expect("path is a required argument");

    match run(path) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(path: &str) -> Result<String, CheckError> {
    let config = Loader::new().build()?;
    init_logging(&config);
    let analysis = check_file(path)?;
    Ok(report::render(&analysis, path, &config.report))
}

fn init_logging(config: &CheckConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
