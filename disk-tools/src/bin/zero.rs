// SPDX-FileCopyrightText: Copyright © 2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};
use diskio::{
    zerofill::{self, BlockReport, FillPlan, Progress},
    MAX_BLOCK_SIZE, MAX_FILE_OFFSET,
};
use log::debug;
use miette::{IntoDiagnostic, WrapErr};
use units::{format_rate, format_size};

/// Benchmark block writes by filling a file with zeros
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Size of each write, must be greater than zero
    #[arg(
        short,
        long,
        value_name = "SIZE",
        default_value = "1G",
        allow_hyphen_values = true
    )]
    block_size: String,

    /// Total bytes to write [default: one block]
    #[arg(short, long, value_name = "SIZE", allow_hyphen_values = true)]
    total_size: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// File to write, created or truncated
    filename: PathBuf,
}

impl Cli {
    /// Validate the size arguments into a fill plan
    fn plan(&self) -> miette::Result<FillPlan> {
        let block_size = units::parse_size(&self.block_size, MAX_BLOCK_SIZE)?;
        let block_size = usize::try_from(block_size).into_diagnostic()?;

        let plan = match &self.total_size {
            Some(total) => {
                let total = units::parse_size(total, MAX_FILE_OFFSET)?;
                FillPlan::new(block_size, total.unsigned_abs())
            }
            None => FillPlan::single_block(block_size),
        };

        plan.into_diagnostic().wrap_err("invalid block size")
    }
}

/// Prints per-block throughput to stderr
struct Reporter<'a> {
    path: &'a Path,
}

impl Progress for Reporter<'_> {
    fn block_started(&mut self, _index: u64, bytes: usize) {
        eprintln!("writing {} bytes to {}", bytes, self.path.display());
    }

    fn block_written(&mut self, report: &BlockReport) {
        match report.rate() {
            Some(rate) => eprintln!("  wrote at {}", format_rate(rate)),
            None => eprintln!("  wrote too quickly to measure"),
        }
    }
}

fn main() -> miette::Result<()> {
    let cli: Cli = disk_tools::parse_args();
    disk_tools::init_logging(cli.verbose);

    let plan = cli.plan()?;
    debug!("Fill plan: {:?}", plan);

    let mut file = zerofill::open_output(&cli.filename)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to open output file {}", cli.filename.display()))?;

    let mut reporter = Reporter { path: &cli.filename };
    let summary = zerofill::fill(&mut file, &plan, &mut reporter)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed writing to {}", cli.filename.display()))?;

    let rate = summary
        .rate()
        .map(format_rate)
        .unwrap_or_else(|| "rate unavailable".into());
    eprintln!(
        "wrote {} in {} blocks over {:.2?}: {}",
        format_size(summary.bytes),
        summary.blocks,
        summary.elapsed,
        rate
    );

    Ok(())
}
