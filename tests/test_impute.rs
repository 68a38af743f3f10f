//! Unit tests for median imputation

use polars::prelude::*;
use triage::pipeline::{column_medians, count_missing, fill_missing_with_medians};

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_column_medians_skip_nulls() {
    let df = df! {
        "complete" => [1.0f64, 2.0, 3.0, 4.0, 5.0],
        "with_nulls" => [Some(10.0f64), None, Some(30.0), None, Some(20.0)],
    }
    .unwrap();

    let medians = column_medians(&df).unwrap();
    let map: std::collections::HashMap<_, _> = medians.into_iter().collect();

    assert!((map["complete"] - 3.0).abs() < 1e-12);
    // Median of the observed values {10, 20, 30}.
    assert!((map["with_nulls"] - 20.0).abs() < 1e-12);
}

#[test]
fn test_column_medians_skip_non_numeric() {
    let df = df! {
        "numeric" => [1.0f64, 2.0, 3.0],
        "text" => ["a", "b", "c"],
    }
    .unwrap();

    let medians = column_medians(&df).unwrap();
    assert_eq!(medians.len(), 1);
    assert_eq!(medians[0].0, "numeric");
}

#[test]
fn test_fill_replaces_every_null() {
    let df = df! {
        "a" => [Some(1.0f64), None, Some(3.0), Some(4.0), None],
        "b" => [1.0f64, 2.0, 3.0, 4.0, 5.0],
    }
    .unwrap();

    let (filled, count) = fill_missing_with_medians(&df).unwrap();

    assert_eq!(count, 2);
    assert_eq!(count_missing(&filled), 0);

    // Nulls in 'a' become the median of {1, 3, 4}.
    let a = filled.column("a").unwrap().f64().unwrap();
    assert_eq!(a.get(1), Some(3.0));
    assert_eq!(a.get(4), Some(3.0));
    // Observed values are untouched.
    assert_eq!(a.get(0), Some(1.0));
}

#[test]
fn test_fill_with_no_missing_is_identity() {
    let df = df! {
        "a" => [1.0f64, 2.0, 3.0],
        "b" => [4i64, 5, 6],
    }
    .unwrap();

    let (filled, count) = fill_missing_with_medians(&df).unwrap();
    assert_eq!(count, 0);
    assert!(filled.equals(&df));
}

#[test]
fn test_fill_promotes_integer_columns_with_nulls() {
    let df = df! {
        "counts" => [Some(1i64), None, Some(2), Some(10)],
    }
    .unwrap();

    let (filled, count) = fill_missing_with_medians(&df).unwrap();
    assert_eq!(count, 1);

    // Median of {1, 2, 10} is 2.0; the column comes back as Float64.
    let counts = filled.column("counts").unwrap();
    assert_eq!(counts.dtype(), &DataType::Float64);
    assert_eq!(counts.f64().unwrap().get(1), Some(2.0));
}

#[test]
fn test_fill_leaves_non_numeric_nulls_in_place() {
    let df = df! {
        "numeric" => [Some(1.0f64), None, Some(3.0)],
        "text" => [Some("a"), None, Some("c")],
    }
    .unwrap();

    let (filled, count) = fill_missing_with_medians(&df).unwrap();
    assert_eq!(count, 1, "Only the numeric null is imputed");
    assert_eq!(filled.column("text").unwrap().null_count(), 1);
}

#[test]
fn test_count_missing_spans_all_columns() {
    let df = common::create_raw_dataframe();
    assert_eq!(count_missing(&df), 2);
}
