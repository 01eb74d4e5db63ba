//! Command handlers for the IGW CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod completions;
pub mod config;
pub mod extract;
pub mod identity;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read an export archive into memory.
pub fn read_archive(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("Failed to read archive: {}", path.display()))
}
