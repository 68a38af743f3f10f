//! Result-file writers and the evaluation summary table

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::pipeline::ClassificationReport;

/// Write the one-line training summary: `accuracy=<4-decimal float>`.
pub fn write_training_summary(path: &Path, accuracy: f64) -> Result<()> {
    write_report_file(path, &format!("accuracy={:.4}\n", accuracy))
}

/// Write the evaluation report: accuracy line, blank line, then the
/// per-class breakdown.
pub fn write_evaluation_report(path: &Path, report: &ClassificationReport) -> Result<()> {
    write_report_file(
        path,
        &format!("Accuracy: {:.4}\n\n{}", report.accuracy, report),
    )
}

fn write_report_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    fs::write(path, contents)
        .with_context(|| format!("Failed to write report file: {}", path.display()))
}

/// Print the per-class metrics as a table after evaluation.
pub fn display_metrics_table(report: &ClassificationReport) {
    println!();
    println!(
        "    {} {}",
        style("📋").cyan(),
        style("EVALUATION SUMMARY").white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
    println!();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Class").add_attribute(Attribute::Bold),
        Cell::new("Precision").add_attribute(Attribute::Bold),
        Cell::new("Recall").add_attribute(Attribute::Bold),
        Cell::new("F1-score").add_attribute(Attribute::Bold),
        Cell::new("Support").add_attribute(Attribute::Bold),
    ]);

    for class in &report.classes {
        table.add_row(vec![
            Cell::new(class.label),
            Cell::new(format!("{:.4}", class.precision)),
            Cell::new(format!("{:.4}", class.recall)),
            Cell::new(format!("{:.4}", class.f1)),
            Cell::new(class.support),
        ]);
    }

    table.add_row(vec![
        Cell::new("accuracy").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(""),
        Cell::new(format!("{:.4}", report.accuracy))
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        Cell::new(report.support),
    ]);

    // Indent the table
    for line in table.to_string().lines() {
        println!("    {}", line);
    }
}
