//! End-to-end grade processing.

use crate::config::GradingConfig;
use crate::error::{GradingError, GradingResult};
use crate::reader::StudentReader;
use crate::report::ClassReport;
use chrono::Local;
use std::path::Path;
use tracing::info;

/// Reads students from `input`, then writes a grade report to `output`.
///
/// Nothing is written when the input is malformed or holds no records.
///
/// # Errors
///
/// - any error from [`StudentReader::read_file`]
/// - [`GradingError::NoRecords`] if `input` holds no student lines
/// - [`GradingError::Io`] if the report cannot be written
pub fn process_grades(
    input: &Path,
    output: &Path,
    config: &GradingConfig,
) -> GradingResult<ClassReport> {
    info!(input = %input.display(), "reading student data");
    let import = StudentReader::new(config.clone()).read_file(input)?;
    if import.students.is_empty() {
        return Err(GradingError::NoRecords);
    }
    info!(
        students = import.students.len(),
        warnings = import.warnings.len(),
        "student data read"
    );

    let report = ClassReport::from_students(&import.students, config);
    report.write_to_file(output, Local::now().naive_local())?;
    info!(output = %output.display(), "report written");
    Ok(report)
}
