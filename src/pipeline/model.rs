//! Logistic-regression classifier and its serialized artifact
//!
//! The trainer is deterministic: weights start at zero and full-batch
//! gradient descent visits rows in order, so a given training set always
//! produces the same model. The artifact bundles the fitted model with the
//! feature scaler and enough metadata to validate inputs at prediction
//! time.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

use crate::config;
use crate::pipeline::error::PipelineError;

/// Solver configuration. Defaults come from the fixed pipeline constants.
#[derive(Clone, Copy, Debug)]
pub struct TrainingSettings {
    pub max_iterations: usize,
    pub learning_rate: f64,
    pub l2: f64,
    pub tolerance: f64,
}

impl Default for TrainingSettings {
    fn default() -> Self {
        Self {
            max_iterations: config::MAX_ITERATIONS,
            learning_rate: config::LEARNING_RATE,
            l2: config::L2_REGULARIZATION,
            tolerance: config::CONVERGENCE_TOLERANCE,
        }
    }
}

/// Per-feature standardization fitted on the training partition.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StandardScaler {
    pub means: Vec<f64>,
    pub stds: Vec<f64>,
}

impl StandardScaler {
    /// Fit means and standard deviations column-wise. A constant column
    /// gets a unit deviation so transformation stays finite.
    pub fn fit(rows: &[Vec<f64>]) -> Self {
        let feature_len = rows.first().map_or(0, |r| r.len());
        let n = rows.len() as f64;

        let mut means = vec![0.0; feature_len];
        for row in rows {
            for (i, value) in row.iter().enumerate() {
                means[i] += value;
            }
        }
        for mean in &mut means {
            *mean /= n;
        }

        let mut stds = vec![0.0; feature_len];
        for row in rows {
            for (i, value) in row.iter().enumerate() {
                let delta = value - means[i];
                stds[i] += delta * delta;
            }
        }
        for std in &mut stds {
            *std = (*std / n).sqrt();
            if *std == 0.0 {
                *std = 1.0;
            }
        }

        Self { means, stds }
    }

    pub fn transform_row(&self, features: &[f64]) -> Vec<f64> {
        features
            .iter()
            .zip(self.means.iter().zip(self.stds.iter()))
            .map(|(value, (mean, std))| (value - mean) / std)
            .collect()
    }

    pub fn transform(&self, rows: &[Vec<f64>]) -> Vec<Vec<f64>> {
        rows.iter().map(|row| self.transform_row(row)).collect()
    }
}

/// Fitted linear decision function over standardized features.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LogisticModel {
    pub weights: Vec<f64>,
    pub bias: f64,
}

impl LogisticModel {
    pub fn feature_count(&self) -> usize {
        self.weights.len()
    }

    pub fn predict_probability(&self, features: &[f64]) -> f64 {
        debug_assert_eq!(features.len(), self.weights.len());
        sigmoid(dot(&self.weights, features) + self.bias)
    }
}

/// Fit a logistic model with batch gradient descent and L2 regularization.
///
/// Labels must be 0/1. Returns the scaler fitted on `rows` together with
/// the model; predictions must go through the same scaler.
pub fn fit(
    rows: &[Vec<f64>],
    labels: &[i64],
    settings: TrainingSettings,
) -> Result<(StandardScaler, LogisticModel)> {
    ensure!(!rows.is_empty(), "Training requires at least one sample");
    ensure!(
        rows.len() == labels.len(),
        "Feature rows ({}) and labels ({}) must match",
        rows.len(),
        labels.len()
    );
    ensure!(
        labels.iter().all(|&l| l == 0 || l == 1),
        "Training labels must be binary 0/1"
    );

    let scaler = StandardScaler::fit(rows);
    let scaled = scaler.transform(rows);

    let feature_len = scaled[0].len();
    let mut weights = vec![0.0; feature_len];
    let mut bias = 0.0;

    let lr = settings.learning_rate;
    let l2 = settings.l2;
    let m = scaled.len() as f64;

    for _ in 0..settings.max_iterations {
        let mut grad_w = vec![0.0; feature_len];
        let mut grad_b = 0.0;

        for (row, &label) in scaled.iter().zip(labels.iter()) {
            let prediction = sigmoid(dot(&weights, row) + bias);
            let error = prediction - label as f64;

            for (i, value) in row.iter().enumerate() {
                grad_w[i] += error * value;
            }
            grad_b += error;
        }

        let mut grad_norm_sq = 0.0;
        for (i, weight) in weights.iter_mut().enumerate() {
            let grad = grad_w[i] / m + l2 * *weight;
            grad_norm_sq += grad * grad;
            *weight -= lr * grad;
        }
        let grad_b = grad_b / m;
        grad_norm_sq += grad_b * grad_b;
        bias -= lr * grad_b;

        if grad_norm_sq.sqrt() < settings.tolerance {
            break;
        }
    }

    Ok((scaler, LogisticModel { weights, bias }))
}

/// Provenance recorded alongside the fitted model.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub model_version: String,
    pub trained_at: String,
    pub features: Vec<String>,
}

/// The serialized training output: metadata, scaler, and model.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub metadata: ModelMetadata,
    pub scaler: StandardScaler,
    pub model: LogisticModel,
}

impl ModelArtifact {
    pub fn new(metadata: ModelMetadata, scaler: StandardScaler, model: LogisticModel) -> Self {
        Self {
            metadata,
            scaler,
            model,
        }
    }

    /// Predicted label (0 or 1) for a raw, unscaled feature row.
    pub fn predict_row(&self, features: &[f64]) -> i64 {
        let scaled = self.scaler.transform_row(features);
        (self.model.predict_probability(&scaled) >= 0.5) as i64
    }

    pub fn predict(&self, rows: &[Vec<f64>]) -> Vec<i64> {
        rows.iter().map(|row| self.predict_row(row)).collect()
    }

    /// Serialize as pretty JSON, creating the parent directory if absent.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
        }

        let mut file = File::create(path)
            .with_context(|| format!("Failed to create model file: {}", path.display()))?;
        serde_json::to_writer_pretty(&mut file, self)
            .with_context(|| format!("Failed to serialize model artifact: {}", path.display()))?;
        file.write_all(b"\n")
            .with_context(|| format!("Failed to flush model artifact: {}", path.display()))?;

        Ok(())
    }

    /// Load a previously saved artifact.
    ///
    /// Fails with [`PipelineError::MissingModel`] when the artifact does
    /// not exist, pointing the user at the training stage.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PipelineError::MissingModel(path.to_path_buf()).into());
        }

        let file = File::open(path)
            .with_context(|| format!("Failed to open model file: {}", path.display()))?;
        serde_json::from_reader(file)
            .with_context(|| format!("Failed to parse model artifact: {}", path.display()))
    }
}

/// Numerically stable logistic function.
pub fn sigmoid(value: f64) -> f64 {
    if value >= 0.0 {
        let z = (-value).exp();
        1.0 / (1.0 + z)
    } else {
        let z = value.exp();
        z / (1.0 + z)
    }
}

fn dot(weights: &[f64], features: &[f64]) -> f64 {
    weights
        .iter()
        .zip(features.iter())
        .map(|(w, f)| w * f)
        .sum()
}
