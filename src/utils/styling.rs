//! Terminal styling utilities for the stage executables

use console::style;

/// Print the stage banner shown at the top of each executable
pub fn print_stage_banner(stage: &str, version: &str) {
    println!();
    println!(
        "    {} {} {}",
        style("triage").cyan().bold(),
        style("│").dim(),
        style(stage).white().bold()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
}

/// Print a step header with styling
pub fn print_step_header(step_num: u8, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", style("ℹ").cyan(), message);
}

/// Print the final completion message for a stage
pub fn print_completion(message: &str) {
    println!();
    println!("    {} {}", style(">>").cyan(), style(message).green().bold());
    println!();
}
