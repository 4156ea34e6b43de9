//! Tracing setup.
//!
//! The terminal itself belongs to ratatui, so log output goes to a file.
//! When no log file is configured, logging stays off entirely.

use std::fs::OpenOptions;
use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::error::Result;

/// Initialize the global tracing subscriber writing to `path`.
///
/// The filter honors `RUST_LOG`, defaulting to `info` for this crate.
pub fn init(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vestibule=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(file)
        .with_ansi(false)
        .init();

    Ok(())
}
