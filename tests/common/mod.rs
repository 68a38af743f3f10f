//! Shared test utilities and fixture generators

use std::path::{Path, PathBuf};

use polars::prelude::*;
use tempfile::TempDir;

use triage::config::StagePaths;

/// Create a small raw DataFrame with known characteristics:
/// a binary `target`, a clean numeric feature, a feature with missing
/// values (median 3.0), and an integer feature.
pub fn create_raw_dataframe() -> DataFrame {
    df! {
        "mean_radius" => [1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0],
        "mean_texture" => [Some(1.0f64), Some(2.0), None, Some(4.0), Some(5.0),
                           None, Some(2.0), Some(3.0), Some(4.0), Some(3.0)],
        "cell_count" => [10i64, 20, 30, 40, 50, 60, 70, 80, 90, 100],
        "target" => [0i64, 0, 0, 0, 0, 0, 1, 1, 1, 1],
    }
    .unwrap()
}

/// Create a linearly separable dataset with `zeros` class-0 rows followed
/// by `ones` class-1 rows. Class 0 clusters low, class 1 clusters high, so
/// a logistic model scores well on any stratified split of it.
pub fn create_separable_dataframe(zeros: usize, ones: usize) -> DataFrame {
    let total = zeros + ones;
    let mut f1 = Vec::with_capacity(total);
    let mut f2 = Vec::with_capacity(total);
    let mut target = Vec::with_capacity(total);

    for i in 0..zeros {
        f1.push(0.0 + (i % 10) as f64 * 0.1);
        f2.push(5.0 - (i % 7) as f64 * 0.1);
        target.push(0i64);
    }
    for i in 0..ones {
        f1.push(10.0 + (i % 10) as f64 * 0.1);
        f2.push(-5.0 + (i % 7) as f64 * 0.1);
        target.push(1i64);
    }

    df! {
        "f1" => f1,
        "f2" => f2,
        "target" => target,
    }
    .unwrap()
}

/// Create a temp directory laid out as a pipeline root, with the raw
/// dataset written to `data/raw/breast_cancer.csv`.
pub fn create_pipeline_root(raw: &mut DataFrame) -> (TempDir, StagePaths) {
    let temp_dir = TempDir::new().unwrap();
    let paths = StagePaths::from_root(temp_dir.path());

    write_csv(raw, &paths.raw_data);

    (temp_dir, paths)
}

/// Create a temp directory laid out as a pipeline root with no raw data.
pub fn create_empty_root() -> (TempDir, StagePaths) {
    let temp_dir = TempDir::new().unwrap();
    let paths = StagePaths::from_root(temp_dir.path());
    (temp_dir, paths)
}

/// Write a DataFrame as CSV, creating parent directories.
pub fn write_csv(df: &mut DataFrame, path: &Path) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    let mut file = std::fs::File::create(path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();
}

/// The four processed file paths, for existence checks.
pub fn processed_files(paths: &StagePaths) -> Vec<PathBuf> {
    vec![
        paths.x_train.clone(),
        paths.x_test.clone(),
        paths.y_train.clone(),
        paths.y_test.clone(),
    ]
}

/// Assert that a DataFrame has expected shape
pub fn assert_shape(df: &DataFrame, expected_rows: usize, expected_cols: usize) {
    let (rows, cols) = df.shape();
    assert_eq!(
        rows, expected_rows,
        "Row count mismatch: expected {}, got {}",
        expected_rows, rows
    );
    assert_eq!(
        cols, expected_cols,
        "Column count mismatch: expected {}, got {}",
        expected_cols, cols
    );
}
