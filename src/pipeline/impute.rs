//! Median imputation for missing numeric values

use anyhow::Result;
use polars::prelude::*;

/// Count missing values across all columns of the frame.
pub fn count_missing(df: &DataFrame) -> usize {
    df.get_columns().iter().map(|c| c.null_count()).sum()
}

/// Per-column medians of the numeric columns, computed from the observed
/// (non-null) values over the full frame.
///
/// Columns that are non-numeric or entirely null are skipped.
pub fn column_medians(df: &DataFrame) -> Result<Vec<(String, f64)>> {
    let mut medians = Vec::new();

    for col_name in df.get_column_names() {
        let column = df.column(col_name)?;
        if !column.dtype().is_primitive_numeric() {
            continue;
        }

        let float_col = column.cast(&DataType::Float64)?;
        let mut observed: Vec<f64> = float_col.f64()?.into_iter().flatten().collect();
        if observed.is_empty() {
            continue;
        }

        observed.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let mid = observed.len() / 2;
        let median = if observed.len() % 2 == 0 {
            (observed[mid - 1] + observed[mid]) / 2.0
        } else {
            observed[mid]
        };

        medians.push((col_name.to_string(), median));
    }

    Ok(medians)
}

/// Fill missing numeric values with their column medians.
///
/// Medians are taken over the full frame, so they must be computed before
/// any split. Returns the filled frame and the number of values replaced.
/// Integer columns holding nulls come back as `Float64` since a median is
/// generally fractional.
pub fn fill_missing_with_medians(df: &DataFrame) -> Result<(DataFrame, usize)> {
    let medians = column_medians(df)?;

    let mut filled_count = 0usize;
    let mut fill_exprs = Vec::new();
    for (col_name, median) in &medians {
        let nulls = df.column(col_name)?.null_count();
        if nulls == 0 {
            continue;
        }
        filled_count += nulls;
        fill_exprs.push(col(col_name.as_str()).fill_null(lit(*median)));
    }

    if fill_exprs.is_empty() {
        return Ok((df.clone(), 0));
    }

    let filled = df.clone().lazy().with_columns(fill_exprs).collect()?;
    Ok((filled, filled_count))
}
