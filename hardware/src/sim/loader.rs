//! Binary Loader.
//!
//! Reads flat program images from disk and places them in RAM.

use std::fs;
use std::path::Path;

use crate::common::error::SimError;
use crate::soc::builder::System;

/// Loads a binary file from disk.
///
/// # Errors
///
/// Returns [`SimError::Io`] if the file cannot be read.
pub fn load_binary(path: impl AsRef<Path>) -> Result<Vec<u8>, SimError> {
    let path = path.as_ref();
    fs::read(path).map_err(|source| SimError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Reads the image at `path` and copies it into `system` RAM at `addr`.
///
/// # Returns
///
/// The number of bytes loaded.
pub fn load_into(system: &mut System, path: impl AsRef<Path>, addr: u32) -> Result<usize, SimError> {
    let data = load_binary(path)?;
    system.load_image(&data, addr)?;
    tracing::debug!("loaded {} bytes at {:#010x}", data.len(), addr);
    Ok(data.len())
}
