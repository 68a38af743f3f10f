//! Recognized pipeline failure kinds.
//!
//! Two conditions are checked explicitly before any output is written:
//! a required input file that does not exist, and a raw dataset that lacks
//! the designated target column. Everything else propagates as a plain
//! `anyhow` error with path context attached at the call site.

use std::path::PathBuf;

use thiserror::Error;

/// Errors the stages check for up front.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The raw dataset is absent from the conventional location.
    #[error("Dataset not found: {}", .0.display())]
    MissingInput(PathBuf),

    /// The model artifact is absent; training has not run yet.
    #[error("Model file missing: {}. Run the training stage first: cargo run --bin train", .0.display())]
    MissingModel(PathBuf),

    /// The raw dataset has no column with the configured target name.
    #[error("Expected target column '{column}' in dataset {}", .path.display())]
    MissingColumn { column: String, path: PathBuf },
}
