//! Input reading for the CLI layer
//!
//! Reads raw bytes from a file or stdin. Decoding stays with the counting
//! engine, so malformed encoding surfaces as `WdError::InvalidInput` there
//! rather than as an I/O error here.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

/// Read the full input from a path, or stdin when no path is given
pub fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(p) => fs::read(p).with_context(|| format!("failed to read {}", p.display())),
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}
