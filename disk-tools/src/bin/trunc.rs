// SPDX-FileCopyrightText: Copyright © 2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};
use diskio::{sparsefile, MAX_FILE_OFFSET};
use log::{info, warn};
use miette::{IntoDiagnostic, WrapErr};
use units::format_size;

/// Set the length of a file, creating a sparse file when extending it
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// File to create or resize
    filename: PathBuf,

    /// New length, e.g. 1024, 512M or 10G
    #[arg(value_name = "SIZE[K|M|G|T|P]", allow_hyphen_values = true)]
    size: String,
}

impl Cli {
    /// Resize the target file to the requested length
    fn run(&self) -> miette::Result<()> {
        let size = units::parse_size(&self.size, MAX_FILE_OFFSET)?.unsigned_abs();

        sparsefile::resize(&self.filename, size)
            .into_diagnostic()
            .wrap_err_with(|| format!("failed to resize {}", self.filename.display()))?;

        report_allocation(&self.filename, size);

        Ok(())
    }
}

/// Log how much of the file is backed by disk blocks
fn report_allocation(path: &Path, size: u64) {
    match sparsefile::allocated_bytes(path) {
        Ok(allocated) => info!(
            "{} is {} ({} allocated)",
            path.display(),
            format_size(size),
            format_size(allocated)
        ),
        Err(err) => warn!("Unable to query allocation of {}: {}", path.display(), err),
    }
}

fn main() -> miette::Result<()> {
    let cli: Cli = disk_tools::parse_args();
    disk_tools::init_logging(cli.verbose);

    cli.run()
}
