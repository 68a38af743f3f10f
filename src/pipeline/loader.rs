//! CSV loading, saving, and frame-to-vector conversion

use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::*;

use crate::pipeline::error::PipelineError;
use crate::utils::{create_spinner, finish_with_success};

/// Load a CSV file into an eager DataFrame.
///
/// Fails with [`PipelineError::MissingInput`] when the file does not exist,
/// so callers get the recognized missing-input condition rather than a raw
/// I/O error.
pub fn load_csv(path: &Path) -> Result<DataFrame> {
    if !path.exists() {
        return Err(PipelineError::MissingInput(path.to_path_buf()).into());
    }

    let lf = LazyCsvReader::new(path)
        .finish()
        .with_context(|| format!("Failed to load CSV file: {}", path.display()))?;

    lf.collect()
        .with_context(|| format!("Failed to read CSV file: {}", path.display()))
}

/// Load a CSV file with a spinner, returning the frame plus its statistics
/// (rows, columns, estimated memory in MB).
pub fn load_csv_with_progress(path: &Path) -> Result<(DataFrame, usize, usize, f64)> {
    let spinner = create_spinner(&format!("Loading {}...", path.display()));
    let df = load_csv(path)?;

    let (rows, cols) = df.shape();
    let memory_mb = df.estimated_size() as f64 / (1024.0 * 1024.0);
    finish_with_success(&spinner, "Dataset loaded");

    Ok((df, rows, cols, memory_mb))
}

/// Save a DataFrame as CSV (header row, comma-separated), creating the
/// parent directory if absent.
pub fn save_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    CsvWriter::new(&mut file)
        .finish(df)
        .with_context(|| format!("Failed to write CSV file: {}", path.display()))?;

    Ok(())
}

/// Convert a feature frame into row-major `f64` vectors for the trainer.
///
/// Every column must be castable to `Float64` and free of nulls (the
/// processed CSVs are written after imputation, so a null here means the
/// pipeline was fed files it did not produce).
pub fn feature_matrix(df: &DataFrame) -> Result<Vec<Vec<f64>>> {
    let mut columns: Vec<Vec<f64>> = Vec::with_capacity(df.width());

    for col_name in df.get_column_names() {
        let column = df.column(col_name)?;
        let float_col = column.cast(&DataType::Float64).map_err(|_| {
            anyhow::anyhow!("Feature column '{}' must be numeric", col_name)
        })?;
        let ca = float_col.f64()?;

        let mut values = Vec::with_capacity(df.height());
        for (row, opt_val) in ca.into_iter().enumerate() {
            match opt_val {
                Some(v) => values.push(v),
                None => anyhow::bail!(
                    "Feature column '{}' contains a missing value at row {}",
                    col_name,
                    row
                ),
            }
        }
        columns.push(values);
    }

    let mut rows = vec![Vec::with_capacity(columns.len()); df.height()];
    for column in &columns {
        for (row, value) in column.iter().enumerate() {
            rows[row].push(*value);
        }
    }

    Ok(rows)
}

/// Extract a label vector from a single-column frame (the `y_*.csv` files).
pub fn label_vector(df: &DataFrame) -> Result<Vec<i64>> {
    anyhow::ensure!(
        df.width() == 1,
        "Expected a single label column, found {} columns",
        df.width()
    );

    let column = df.get_columns()[0].clone();
    let name = column.name().to_string();
    let int_col = column
        .cast(&DataType::Int64)
        .map_err(|_| anyhow::anyhow!("Label column '{}' must be numeric", name))?;
    let ca = int_col.i64()?;

    let mut labels = Vec::with_capacity(df.height());
    for (row, opt_val) in ca.into_iter().enumerate() {
        match opt_val {
            Some(v) => labels.push(v),
            None => anyhow::bail!("Label column '{}' contains a missing value at row {}", name, row),
        }
    }

    Ok(labels)
}

/// Column names as owned strings.
pub fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names().iter().map(|s| s.to_string()).collect()
}
