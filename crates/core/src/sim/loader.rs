//! Bytecode Loader.
//!
//! This module provides utilities for getting program images off disk. It performs:
//! 1. **Binary loading:** Reads a bytecode image from disk into a byte buffer.
//! 2. **Header check:** Accepts an optional version header in front of the bytecode.

use std::fs;
use std::path::Path;

use crate::common::constants::BYTECODE_VERSION;
use crate::common::error::{Result, VmError};

/// Magic bytes that open a versioned bytecode image.
pub const IMAGE_MAGIC: &[u8; 4] = b"RVM\0";

/// Loads a binary file from disk into a byte vector.
///
/// # Arguments
///
/// * `path` - Path to the binary file.
///
/// # Returns
///
/// The raw bytes of the file.
pub fn load_binary(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "binary loaded");
    Ok(bytes)
}

/// Strips the optional image header and returns the bytecode behind it.
///
/// An image either starts with [`IMAGE_MAGIC`] followed by one version byte,
/// or is raw bytecode with no header at all.
///
/// # Errors
///
/// `InvalidConfig` when the header names a version this build cannot run.
pub fn strip_header(image: &[u8]) -> Result<&[u8]> {
    let Some(rest) = image.strip_prefix(IMAGE_MAGIC.as_slice()) else {
        return Ok(image);
    };
    match rest.split_first() {
        Some((&BYTECODE_VERSION, code)) => Ok(code),
        Some((&version, _)) => Err(VmError::InvalidConfig(format!(
            "bytecode version {version} is not supported (expected {BYTECODE_VERSION})"
        ))),
        None => Err(VmError::InvalidConfig(
            "bytecode image header is truncated".to_string(),
        )),
    }
}

/// Reads an image from disk and returns its bytecode with any header removed.
pub fn load_program(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let image = load_binary(path)?;
    strip_header(&image).map(<[u8]>::to_vec)
}
