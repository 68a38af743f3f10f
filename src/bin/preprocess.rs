//! Preprocessing stage executable
//!
//! Runs with zero arguments against the fixed directory layout in the
//! working directory.

use anyhow::Result;

use triage::config::StagePaths;
use triage::stages::preprocess;
use triage::utils::{print_completion, print_stage_banner};

fn main() -> Result<()> {
    print_stage_banner("Preprocess", env!("CARGO_PKG_VERSION"));

    let paths = StagePaths::default();
    let outcome = preprocess::run(&paths)?;

    print_completion(&format!(
        "Preprocessing complete: {} training / {} testing samples",
        outcome.train_rows, outcome.test_rows
    ));
    Ok(())
}
