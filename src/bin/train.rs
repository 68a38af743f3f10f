//! Training stage executable
//!
//! Runs with zero arguments against the fixed directory layout in the
//! working directory.

use anyhow::Result;

use triage::config::StagePaths;
use triage::stages::train;
use triage::utils::{print_completion, print_stage_banner};

fn main() -> Result<()> {
    print_stage_banner("Train", env!("CARGO_PKG_VERSION"));

    let paths = StagePaths::default();
    let outcome = train::run(&paths)?;

    print_completion(&format!(
        "Training complete. Accuracy: {:.4}",
        outcome.accuracy
    ));
    Ok(())
}
