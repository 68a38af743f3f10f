//! Fixed paths and pipeline constants
//!
//! The stages take no command-line arguments; everything they need lives
//! here. Paths are resolved relative to a root directory (the working
//! directory for the binaries, a temp dir in tests).

use std::path::{Path, PathBuf};

/// Name of the binary label column in the raw dataset.
pub const TARGET_COLUMN: &str = "target";

/// Fraction of rows held out for the test partition.
pub const TEST_RATIO: f64 = 0.2;

/// Seed for the stratified shuffle, fixed for reproducibility.
pub const SPLIT_SEED: u64 = 42;

/// Iteration cap for the logistic-regression solver.
pub const MAX_ITERATIONS: usize = 2000;

/// Gradient-descent step size.
pub const LEARNING_RATE: f64 = 0.1;

/// L2 regularization strength.
pub const L2_REGULARIZATION: f64 = 1e-4;

/// Solver stops early once the gradient norm falls below this.
pub const CONVERGENCE_TOLERANCE: f64 = 1e-8;

/// Resolved file locations for one pipeline run.
#[derive(Debug, Clone)]
pub struct StagePaths {
    pub raw_data: PathBuf,
    pub x_train: PathBuf,
    pub x_test: PathBuf,
    pub y_train: PathBuf,
    pub y_test: PathBuf,
    pub model: PathBuf,
    pub train_accuracy: PathBuf,
    pub evaluation: PathBuf,
}

impl StagePaths {
    /// Build the fixed directory layout under `root`:
    /// `data/raw/`, `data/processed/`, `models/`, `results/`.
    pub fn from_root(root: &Path) -> Self {
        let processed = root.join("data").join("processed");
        Self {
            raw_data: root.join("data").join("raw").join("breast_cancer.csv"),
            x_train: processed.join("X_train.csv"),
            x_test: processed.join("X_test.csv"),
            y_train: processed.join("y_train.csv"),
            y_test: processed.join("y_test.csv"),
            model: root.join("models").join("logistic_regression.json"),
            train_accuracy: root.join("results").join("train_accuracy.txt"),
            evaluation: root.join("results").join("evaluation.txt"),
        }
    }
}

impl Default for StagePaths {
    fn default() -> Self {
        Self::from_root(Path::new("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_follow_directory_convention() {
        let paths = StagePaths::from_root(Path::new("/work"));

        assert_eq!(
            paths.raw_data,
            PathBuf::from("/work/data/raw/breast_cancer.csv")
        );
        assert_eq!(paths.x_train, PathBuf::from("/work/data/processed/X_train.csv"));
        assert_eq!(paths.y_test, PathBuf::from("/work/data/processed/y_test.csv"));
        assert_eq!(
            paths.model,
            PathBuf::from("/work/models/logistic_regression.json")
        );
        assert_eq!(
            paths.evaluation,
            PathBuf::from("/work/results/evaluation.txt")
        );
    }
}
