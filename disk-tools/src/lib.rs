// SPDX-FileCopyrightText: Copyright © 2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

//! Shared command line plumbing for the disk test tools

use std::process;

use clap::Parser;
use log::LevelFilter;

/// Map the number of `-v` flags to a log level
pub fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialise logging to stderr. `RUST_LOG` takes precedence over `verbose`.
pub fn init_logging(verbose: u8) {
    pretty_env_logger::formatted_timed_builder()
        .filter_level(log_level(verbose))
        .parse_default_env()
        .init();
}

/// Parse the command line, exiting with status 1 on usage errors.
///
/// `--help` and `--version` still exit successfully.
pub fn parse_args<T: Parser>() -> T {
    T::try_parse().unwrap_or_else(|err| {
        let code = if err.use_stderr() { 1 } else { 0 };
        let _ = err.print();
        process::exit(code)
    })
}
