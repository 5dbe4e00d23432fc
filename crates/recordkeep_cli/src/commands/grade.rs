//! Grade command implementation.

use recordkeep_grading::{process_grades, GradingConfig};
use std::path::Path;

/// Runs the grade command.
pub fn run(
    input: &Path,
    output: &Path,
    pass_threshold: i32,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = GradingConfig::new().pass_threshold(pass_threshold);
    let report = process_grades(input, output, &config)?;

    println!("Processed {} students", report.total());
    if let Some(stats) = report.statistics() {
        println!("  Class average: {:.2}", stats.average);
        println!("  Pass rate:     {:.1}%", stats.pass_rate);
    }
    println!("Report written to {}", output.display());

    Ok(())
}
