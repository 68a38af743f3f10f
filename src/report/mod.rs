//! Report module - result files and console summaries

pub mod summary;

pub use summary::*;
