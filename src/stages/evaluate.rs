//! Evaluation stage: load the artifact, predict, score, report

use anyhow::{ensure, Result};

use crate::config::StagePaths;
use crate::pipeline::{
    column_names, feature_matrix, label_vector, load_csv, ClassificationReport, ModelArtifact,
};
use crate::report::{display_metrics_table, write_evaluation_report};
use crate::utils::{print_info, print_step_header, print_success};

/// Numbers reported by an evaluation run.
#[derive(Debug)]
pub struct EvaluateOutcome {
    pub accuracy: f64,
    pub report: ClassificationReport,
}

/// Run evaluation against the serialized model and the processed test
/// split. The model-existence precondition is checked before any file is
/// written; a missing artifact directs the user to the training stage.
pub fn run(paths: &StagePaths) -> Result<EvaluateOutcome> {
    print_step_header(1, "Load Model and Test Data");
    let artifact = ModelArtifact::load(&paths.model)?;
    let x_test_df = load_csv(&paths.x_test)?;
    let y_test = label_vector(&load_csv(&paths.y_test)?)?;

    let test_columns = column_names(&x_test_df);
    ensure!(
        test_columns == artifact.metadata.features,
        "Test feature columns {:?} do not match the columns the model was trained on {:?}",
        test_columns,
        artifact.metadata.features
    );
    print_info(&format!(
        "Model v{} trained at {}",
        artifact.metadata.model_version, artifact.metadata.trained_at
    ));

    print_step_header(2, "Predict and Score");
    let x_test = feature_matrix(&x_test_df)?;
    let predictions = artifact.predict(&x_test);
    let report = ClassificationReport::compute(&y_test, &predictions);
    print_info(&format!("Accuracy: {:.4}", report.accuracy));

    print_step_header(3, "Write Report");
    write_evaluation_report(&paths.evaluation, &report)?;
    print_success(&format!(
        "Detailed report saved to: {}",
        paths.evaluation.display()
    ));

    display_metrics_table(&report);

    Ok(EvaluateOutcome {
        accuracy: report.accuracy,
        report,
    })
}
