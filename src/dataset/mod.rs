//! Dataset loading and spatial pre-filtering.

mod filter;
mod loader;

pub use filter::{filter_records, BufferWindow};
pub use loader::load_buildings;

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while reading the building table.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("input file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read building csv")]
    Csv(#[from] csv::Error),
}
