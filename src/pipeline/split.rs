//! Seeded stratified train/test splitting

use std::collections::BTreeMap;

use anyhow::{ensure, Result};
use polars::prelude::*;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// The four frames preprocessing persists for the later stages.
#[derive(Debug)]
pub struct ProcessedSplit {
    pub x_train: DataFrame,
    pub x_test: DataFrame,
    pub y_train: DataFrame,
    pub y_test: DataFrame,
}

/// Partition row indices so each label class contributes its rounded share
/// of `test_ratio` to the test set.
///
/// Classes are visited in sorted label order and shuffled with a single
/// seeded RNG, so the same labels and seed always produce the same
/// partition. Returns `(train_indices, test_indices)`.
pub fn stratified_split_indices(
    labels: &[i64],
    test_ratio: f64,
    seed: u64,
) -> Result<(Vec<IdxSize>, Vec<IdxSize>)> {
    ensure!(
        (0.0..1.0).contains(&test_ratio),
        "test_ratio must be between 0 and 1 (exclusive), got {}",
        test_ratio
    );
    ensure!(!labels.is_empty(), "Cannot split an empty dataset");

    let mut classes: BTreeMap<i64, Vec<IdxSize>> = BTreeMap::new();
    for (row, label) in labels.iter().enumerate() {
        classes.entry(*label).or_default().push(row as IdxSize);
    }

    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let mut train_indices = Vec::new();
    let mut test_indices = Vec::new();

    for indices in classes.values() {
        let mut shuffled = indices.clone();
        shuffled.shuffle(&mut rng);

        let quota = ((shuffled.len() as f64) * test_ratio).round() as usize;
        let quota = quota.min(shuffled.len());

        test_indices.extend_from_slice(&shuffled[..quota]);
        train_indices.extend_from_slice(&shuffled[quota..]);
    }

    Ok((train_indices, test_indices))
}

/// Stratified split of a feature frame and its target column.
///
/// The target must be free of nulls; a row without a label cannot be
/// assigned to a stratum.
pub fn stratified_split(
    features: &DataFrame,
    target: &Column,
    test_ratio: f64,
    seed: u64,
) -> Result<ProcessedSplit> {
    ensure!(
        features.height() == target.len(),
        "Feature rows ({}) and target rows ({}) must match",
        features.height(),
        target.len()
    );

    let labels = target_labels(target)?;
    let (train_indices, test_indices) = stratified_split_indices(&labels, test_ratio, seed)?;

    let train_idx = IdxCa::from_vec("train_idx".into(), train_indices);
    let test_idx = IdxCa::from_vec("test_idx".into(), test_indices);

    let y_full = DataFrame::new(vec![target.clone()])?;

    Ok(ProcessedSplit {
        x_train: features.take(&train_idx)?,
        x_test: features.take(&test_idx)?,
        y_train: y_full.take(&train_idx)?,
        y_test: y_full.take(&test_idx)?,
    })
}

/// Extract the label values from the target column.
pub fn target_labels(target: &Column) -> Result<Vec<i64>> {
    let int_col = target.cast(&DataType::Int64).map_err(|_| {
        anyhow::anyhow!("Target column '{}' must be numeric", target.name())
    })?;
    let ca = int_col.i64()?;

    let mut labels = Vec::with_capacity(target.len());
    for (row, opt_val) in ca.into_iter().enumerate() {
        match opt_val {
            Some(v) => labels.push(v),
            None => anyhow::bail!(
                "Target column '{}' contains a missing value at row {}",
                target.name(),
                row
            ),
        }
    }

    Ok(labels)
}
