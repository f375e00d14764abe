// SPDX-FileCopyrightText: Copyright © 2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

use std::{
    fs, io,
    os::unix::fs::{MetadataExt, OpenOptionsExt},
    path::Path,
};

use log::{debug, error};

use crate::FILE_MODE;

/// Sets the length of the file at the specified path, creating it if needed.
///
/// Existing contents up to `size` are kept. Growing the file leaves a sparse
/// tail that reads back as zeros without allocating disk blocks.
///
/// # Arguments
/// * `path` - Path of the file to resize
/// * `size` - New length in bytes
///
/// # Returns
/// `io::Result<()>` indicating success or failure
pub fn resize<P>(path: P, size: u64) -> io::Result<()>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .mode(FILE_MODE)
        .open(path)?;

    let previous = file.metadata()?.len();
    debug!("Resizing {:?} from {} to {} bytes", path, previous, size);

    if let Err(err) = file.set_len(size) {
        error!("❌ Failed to set length of {:?}: {}", path, err);
        return Err(err);
    }

    Ok(())
}

/// Returns the number of bytes actually allocated on disk for a file
pub fn allocated_bytes<P>(path: P) -> io::Result<u64>
where
    P: AsRef<Path>,
{
    // st_blocks is always in 512 byte units
    Ok(fs::metadata(path)?.blocks() * 512)
}
