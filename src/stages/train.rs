//! Training stage: fit the classifier, score the hold-out, serialize

use anyhow::{ensure, Result};
use chrono::Utc;

use crate::config::StagePaths;
use crate::pipeline::{
    accuracy, column_names, feature_matrix, fit, label_vector, load_csv, ModelArtifact,
    ModelMetadata, TrainingSettings,
};
use crate::report::write_training_summary;
use crate::utils::{create_spinner, finish_with_success, print_info, print_step_header, print_success};

/// Numbers reported by a training run.
#[derive(Debug)]
pub struct TrainOutcome {
    pub accuracy: f64,
    pub train_rows: usize,
    pub test_rows: usize,
}

/// Run training against the processed CSVs written by preprocessing.
///
/// Any read failure is fatal; there is no retry.
pub fn run(paths: &StagePaths) -> Result<TrainOutcome> {
    print_step_header(1, "Load Processed Data");
    let x_train_df = load_csv(&paths.x_train)?;
    let x_test_df = load_csv(&paths.x_test)?;
    let y_train = label_vector(&load_csv(&paths.y_train)?)?;
    let y_test = label_vector(&load_csv(&paths.y_test)?)?;

    let feature_names = column_names(&x_train_df);
    ensure!(
        feature_names == column_names(&x_test_df),
        "Train and test feature columns disagree; re-run preprocessing"
    );
    print_info(&format!(
        "Training samples: {}, testing samples: {}",
        x_train_df.height(),
        x_test_df.height()
    ));

    let x_train = feature_matrix(&x_train_df)?;
    let x_test = feature_matrix(&x_test_df)?;

    print_step_header(2, "Fit Logistic Regression");
    let spinner = create_spinner("Fitting classifier...");
    let (scaler, model) = fit(&x_train, &y_train, TrainingSettings::default())?;
    finish_with_success(&spinner, "Classifier fitted");

    let metadata = ModelMetadata {
        model_version: env!("CARGO_PKG_VERSION").to_string(),
        trained_at: Utc::now().to_rfc3339(),
        features: feature_names,
    };
    let artifact = ModelArtifact::new(metadata, scaler, model);

    print_step_header(3, "Hold-out Accuracy");
    let predictions = artifact.predict(&x_test);
    let test_accuracy = accuracy(&y_test, &predictions);
    print_info(&format!("Accuracy on held-out split: {:.4}", test_accuracy));

    print_step_header(4, "Save Artifacts");
    artifact.save(&paths.model)?;
    write_training_summary(&paths.train_accuracy, test_accuracy)?;
    print_success(&format!("Model saved to: {}", paths.model.display()));

    Ok(TrainOutcome {
        accuracy: test_accuracy,
        train_rows: x_train.len(),
        test_rows: x_test.len(),
    })
}
