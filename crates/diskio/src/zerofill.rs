// SPDX-FileCopyrightText: Copyright © 2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

//! Block write benchmarking
//!
//! Fills a writer with zero bytes one block at a time, timing every block so
//! that callers can report the throughput of the underlying storage.

use std::{
    fs, io,
    io::Write,
    os::unix::fs::OpenOptionsExt,
    path::Path,
    time::{Duration, Instant},
};

use log::{debug, error, info};

use crate::{Error, FILE_MODE};

/// A validated description of how much to write and in what block size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillPlan {
    block_size: usize,
    total_size: u64,
}

impl FillPlan {
    /// Create a new plan.
    ///
    /// A zero block size is rejected. A zero total size is valid and results
    /// in nothing being written.
    pub fn new(block_size: usize, total_size: u64) -> Result<Self, Error> {
        if block_size == 0 {
            return Err(Error::ZeroBlockSize);
        }

        Ok(Self { block_size, total_size })
    }

    /// Create a plan that writes exactly one block
    pub fn single_block(block_size: usize) -> Result<Self, Error> {
        Self::new(block_size, block_size as u64)
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn total_size(&self) -> u64 {
        self.total_size
    }

    /// Number of writes needed, counting a trailing partial block
    pub fn block_count(&self) -> u64 {
        self.total_size.div_ceil(self.block_size as u64)
    }
}

/// Timing for a single written block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockReport {
    /// Zero-based position of the block
    pub index: u64,
    /// Bytes written in this block
    pub bytes: usize,
    /// Wall-clock time spent in the write
    pub elapsed: Duration,
}

impl BlockReport {
    /// Throughput in bytes per second, or `None` if no time was measurable
    pub fn rate(&self) -> Option<f64> {
        rate(self.bytes as u64, self.elapsed)
    }
}

/// Totals for a complete fill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillSummary {
    pub blocks: u64,
    pub bytes: u64,
    pub elapsed: Duration,
}

impl FillSummary {
    /// Overall throughput in bytes per second
    pub fn rate(&self) -> Option<f64> {
        rate(self.bytes, self.elapsed)
    }
}

fn rate(bytes: u64, elapsed: Duration) -> Option<f64> {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 {
        Some(bytes as f64 / secs)
    } else {
        None
    }
}

/// Receives notifications as a fill progresses
pub trait Progress {
    /// Called before a block is written
    fn block_started(&mut self, _index: u64, _bytes: usize) {}

    /// Called once a block has been written in full
    fn block_written(&mut self, _report: &BlockReport) {}
}

impl Progress for () {}

/// Opens `path` as the benchmark target, creating or truncating it
pub fn open_output<P>(path: P) -> io::Result<fs::File>
where
    P: AsRef<Path>,
{
    fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(FILE_MODE)
        .open(path)
}

/// Writes `plan.total_size()` zero bytes to `writer` in blocks of
/// `plan.block_size()`, the final block being short if the total is not a
/// multiple of the block size.
///
/// Any write failure aborts the fill.
pub fn fill<W, P>(writer: &mut W, plan: &FillPlan, progress: &mut P) -> Result<FillSummary, Error>
where
    W: Write,
    P: Progress + ?Sized,
{
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(plan.block_size)
        .map_err(|_| Error::Allocation {
            bytes: plan.block_size,
        })?;
    buffer.resize(plan.block_size, 0u8);

    info!(
        "Writing {} bytes in {} blocks of {} bytes",
        plan.total_size,
        plan.block_count(),
        plan.block_size
    );

    let started = Instant::now();
    let mut written = 0u64;
    let mut index = 0u64;

    while written < plan.total_size {
        let remaining = plan.total_size - written;
        let len = usize::try_from(remaining).map_or(plan.block_size, |r| r.min(plan.block_size));

        progress.block_started(index, len);

        let start = Instant::now();
        if let Err(err) = writer.write_all(&buffer[..len]) {
            error!("❌ Failed to write block {} ({} bytes): {}", index, len, err);
            return Err(err.into());
        }
        let report = BlockReport {
            index,
            bytes: len,
            elapsed: start.elapsed(),
        };
        debug!("Block {} written in {:?}", index, report.elapsed);

        progress.block_written(&report);

        written += len as u64;
        index += 1;
    }

    writer.flush()?;

    Ok(FillSummary {
        blocks: index,
        bytes: written,
        elapsed: started.elapsed(),
    })
}
