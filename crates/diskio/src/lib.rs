// SPDX-FileCopyrightText: Copyright © 2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

//! Thin file primitives used by the disk test tools
pub mod sparsefile;
pub mod zerofill;

use std::io;

use nix::libc;
use thiserror::Error;

/// Largest offset (and therefore file length) the platform can address
pub const MAX_FILE_OFFSET: i64 = libc::off_t::MAX as i64;

/// Largest single buffer that can be allocated for a block write
pub const MAX_BLOCK_SIZE: i64 = isize::MAX as i64;

/// Permission bits for files created by the tools
pub(crate) const FILE_MODE: u32 = 0o644;

/// Errors that can occur during file operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO operation error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A block size of zero would never make progress
    #[error("block size must be greater than zero")]
    ZeroBlockSize,

    /// The write buffer could not be allocated
    #[error("failed to allocate {bytes} bytes for the write buffer")]
    Allocation { bytes: usize },
}
