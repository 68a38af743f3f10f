//! Preprocessing stage: impute missing values, split, persist

use anyhow::Result;

use crate::config::{self, StagePaths};
use crate::pipeline::{
    column_names, count_missing, fill_missing_with_medians, load_csv_with_progress, save_csv,
    stratified_split, PipelineError,
};
use crate::utils::{print_info, print_step_header, print_success};

/// Numbers reported by a preprocessing run.
#[derive(Debug)]
pub struct PreprocessOutcome {
    pub rows: usize,
    pub columns: usize,
    pub missing_filled: usize,
    pub train_rows: usize,
    pub test_rows: usize,
}

/// Run preprocessing: raw CSV in, four processed CSVs out.
///
/// Both recognized failure conditions (raw file absent, target column
/// absent) are checked before anything is written to disk.
pub fn run(paths: &StagePaths) -> Result<PreprocessOutcome> {
    print_step_header(1, "Load Raw Dataset");
    let (df, rows, columns, memory_mb) = load_csv_with_progress(&paths.raw_data)?;
    print_info(&format!(
        "Loaded dataset shape: ({}, {}), estimated memory {:.2} MB",
        rows, columns, memory_mb
    ));

    if !column_names(&df)
        .iter()
        .any(|c| c.as_str() == config::TARGET_COLUMN)
    {
        return Err(PipelineError::MissingColumn {
            column: config::TARGET_COLUMN.to_string(),
            path: paths.raw_data.clone(),
        }
        .into());
    }

    let features = df.drop(config::TARGET_COLUMN)?;
    let target = df.column(config::TARGET_COLUMN)?.clone();

    print_step_header(2, "Median Imputation");
    let missing_before = count_missing(&features);
    let (features, missing_filled) = fill_missing_with_medians(&features)?;
    print_info(&format!("Missing values before fill: {}", missing_before));
    if missing_filled > 0 {
        print_success(&format!(
            "Filled {} missing numeric value(s) with column medians",
            missing_filled
        ));
    } else {
        print_info("No missing numeric values to fill");
    }

    print_step_header(3, "Stratified Split");
    let mut split = stratified_split(&features, &target, config::TEST_RATIO, config::SPLIT_SEED)?;
    print_info(&format!("Training samples: {}", split.x_train.height()));
    print_info(&format!("Testing samples: {}", split.x_test.height()));

    print_step_header(4, "Save Processed Files");
    let train_rows = split.x_train.height();
    let test_rows = split.x_test.height();
    save_csv(&mut split.x_train, &paths.x_train)?;
    save_csv(&mut split.x_test, &paths.x_test)?;
    save_csv(&mut split.y_train, &paths.y_train)?;
    save_csv(&mut split.y_test, &paths.y_test)?;
    print_success(&format!(
        "Processed files saved to: {}",
        paths
            .x_train
            .parent()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    ));

    Ok(PreprocessOutcome {
        rows,
        columns,
        missing_filled,
        train_rows,
        test_rows,
    })
}
