//! Flat-file student record reader.

use crate::config::GradingConfig;
use crate::error::{Field, GradingError, GradingResult, MissingReason};
use recordkeep_core::RecordId;
use recordkeep_domain::Student;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

/// A score outside the configured range that was accepted anyway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreWarning {
    /// 1-based line number.
    pub line: usize,
    /// Id of the student.
    pub student_id: RecordId,
    /// Name of the student.
    pub full_name: String,
    /// The out-of-range score.
    pub score: i32,
}

/// Records read from one input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentImport {
    /// Students in input order.
    pub students: Vec<Student>,
    /// Out-of-range scores, in input order.
    pub warnings: Vec<ScoreWarning>,
}

/// Parses `id, name, score` lines into [`Student`] records.
#[derive(Debug, Clone, Default)]
pub struct StudentReader {
    config: GradingConfig,
}

impl StudentReader {
    /// Creates a reader using `config`.
    #[must_use]
    pub fn new(config: GradingConfig) -> Self {
        Self { config }
    }

    /// Parses every line of `reader`. A UTF-8 byte order mark at the start of
    /// the input is ignored.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered:
    /// - [`GradingError::MissingField`] for a wrong field count or blank field
    /// - [`GradingError::InvalidFormat`] for a non-integer id or score
    /// - [`GradingError::Read`] if the stream fails
    pub fn parse<R: BufRead>(&self, reader: R) -> GradingResult<StudentImport> {
        let mut import = StudentImport::default();

        for (index, line) in reader.lines().enumerate() {
            let line_number = index + 1;
            let line = line.map_err(|source| GradingError::Read {
                line: line_number,
                source,
            })?;

            let line = if index == 0 {
                line.strip_prefix('\u{feff}').unwrap_or(&line)
            } else {
                &line
            };
            if line.trim().is_empty() {
                continue;
            }

            let student = parse_line(line_number, line)?;
            if !self.config.score_range.contains(&student.score()) {
                warn!(
                    line = line_number,
                    student = student.full_name(),
                    score = student.score(),
                    "score is outside typical range ({}-{})",
                    self.config.score_range.start(),
                    self.config.score_range.end()
                );
                import.warnings.push(ScoreWarning {
                    line: line_number,
                    student_id: recordkeep_core::Entity::id(&student),
                    full_name: student.full_name().to_string(),
                    score: student.score(),
                });
            }
            import.students.push(student);
        }

        debug!(
            students = import.students.len(),
            warnings = import.warnings.len(),
            "student records parsed"
        );
        Ok(import)
    }

    /// Parses student records from a string.
    ///
    /// # Errors
    ///
    /// See [`StudentReader::parse`].
    pub fn parse_str(&self, input: &str) -> GradingResult<StudentImport> {
        self.parse(input.as_bytes())
    }

    /// Opens and parses the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`GradingError::Io`] if the file cannot be opened, otherwise
    /// see [`StudentReader::parse`].
    pub fn read_file(&self, path: &Path) -> GradingResult<StudentImport> {
        let file = File::open(path).map_err(|source| GradingError::io(path, source))?;
        self.parse(BufReader::new(file))
    }
}

/// Parses student records from `reader` with default settings.
///
/// # Errors
///
/// See [`StudentReader::parse`].
pub fn parse_students<R: BufRead>(reader: R) -> GradingResult<StudentImport> {
    StudentReader::default().parse(reader)
}

/// Parses student records from a string with default settings.
///
/// # Errors
///
/// See [`StudentReader::parse`].
pub fn parse_students_str(input: &str) -> GradingResult<StudentImport> {
    StudentReader::default().parse_str(input)
}

/// Reads student records from a file with default settings.
///
/// # Errors
///
/// See [`StudentReader::read_file`].
pub fn read_students_from_file(path: &Path) -> GradingResult<StudentImport> {
    StudentReader::default().read_file(path)
}

fn parse_line(line_number: usize, line: &str) -> GradingResult<Student> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();

    if fields.len() != Field::ALL.len() {
        return Err(GradingError::MissingField {
            line: line_number,
            reason: MissingReason::FieldCount {
                found: fields.len(),
            },
            content: line.to_string(),
        });
    }

    for (field, value) in Field::ALL.into_iter().zip(&fields) {
        if value.is_empty() {
            return Err(GradingError::MissingField {
                line: line_number,
                reason: MissingReason::Blank(field),
                content: line.to_string(),
            });
        }
    }

    let id = parse_int(line_number, line, Field::StudentId, fields[0])?;
    let score = parse_int(line_number, line, Field::Score, fields[2])?;

    Ok(Student::new(id, fields[1], score))
}

fn parse_int(line_number: usize, line: &str, field: Field, value: &str) -> GradingResult<i32> {
    value.parse().map_err(|_| GradingError::InvalidFormat {
        line: line_number,
        field,
        value: value.to_string(),
        content: line.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use recordkeep_core::Entity;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parses_well_formed_lines() {
        let import = parse_students_str("1, Alice, 85\n2, Bob, 92").unwrap();

        let scores: Vec<_> = import.students.iter().map(Student::score).collect();
        assert_eq!(scores, vec![85, 92]);
        assert_eq!(import.students[0].full_name(), "Alice");
        assert_eq!(import.students[1].id(), RecordId::new(2));
        assert!(import.warnings.is_empty());
    }

    #[test]
    fn trims_fields_and_skips_blank_lines() {
        let input = "\n   \n  10 ,  Ama Mensah  ,  77  \r\n\t\n11,Kofi,60\n";
        let import = parse_students_str(input).unwrap();

        assert_eq!(import.students.len(), 2);
        assert_eq!(import.students[0], Student::new(10, "Ama Mensah", 77));
        assert_eq!(import.students[1], Student::new(11, "Kofi", 60));
    }

    #[test]
    fn two_fields_is_missing_field_on_line_one() {
        let err = parse_students_str("1, Alice\n").unwrap_err();
        match err {
            GradingError::MissingField {
                line,
                reason,
                content,
            } => {
                assert_eq!(line, 1);
                assert_eq!(reason, MissingReason::FieldCount { found: 2 });
                assert_eq!(content, "1, Alice");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn extra_field_is_missing_field() {
        let err = parse_students_str("1, Alice, 85, extra").unwrap_err();
        assert!(matches!(
            err,
            GradingError::MissingField {
                reason: MissingReason::FieldCount { found: 4 },
                ..
            }
        ));
    }

    #[test]
    fn blank_field_is_named() {
        let err = parse_students_str("1, Alice, 85\n2,   , 70\n").unwrap_err();
        match err {
            GradingError::MissingField { line, reason, .. } => {
                assert_eq!(line, 2);
                assert_eq!(reason, MissingReason::Blank(Field::FullName));
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = parse_students_str(", Alice, 85").unwrap_err();
        assert!(matches!(
            err,
            GradingError::MissingField {
                reason: MissingReason::Blank(Field::StudentId),
                ..
            }
        ));
    }

    #[test]
    fn non_integer_score_is_invalid_format() {
        let err = parse_students_str("1, Alice, XX\n").unwrap_err();
        match err {
            GradingError::InvalidFormat {
                line,
                field,
                value,
                content,
            } => {
                assert_eq!(line, 1);
                assert_eq!(field, Field::Score);
                assert_eq!(value, "XX");
                assert_eq!(content, "1, Alice, XX");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_integer_id_is_invalid_format() {
        let err = parse_students_str("A1, Alice, 85").unwrap_err();
        assert!(matches!(
            err,
            GradingError::InvalidFormat {
                field: Field::StudentId,
                ..
            }
        ));
    }

    #[test]
    fn line_numbers_count_skipped_blank_lines() {
        let err = parse_students_str("1, Alice, 85\n\n3, Bob, 9.5\n").unwrap_err();
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn first_error_aborts_whole_read() {
        let result = parse_students_str("1, Alice, 85\n2, Bob\n3, Carol, XX\n");
        assert!(matches!(
            result,
            Err(GradingError::MissingField { line: 2, .. })
        ));
    }

    #[test]
    fn out_of_range_scores_warn_but_are_kept() {
        let import = parse_students_str("1, Alice, 105\n2, Bob, -3\n3, Carol, 100").unwrap();

        assert_eq!(import.students.len(), 3);
        assert_eq!(import.warnings.len(), 2);
        assert_eq!(import.warnings[0].line, 1);
        assert_eq!(import.warnings[0].score, 105);
        assert_eq!(import.warnings[1].full_name, "Bob");
        assert_eq!(import.warnings[1].student_id, RecordId::new(2));
    }

    #[test]
    fn custom_score_range_changes_warnings_only() {
        let reader = StudentReader::new(GradingConfig::new().score_range(0..=120));
        let import = reader.parse_str("1, Alice, 105").unwrap();
        assert!(import.warnings.is_empty());
    }

    #[test]
    fn leading_byte_order_mark_is_ignored() {
        let import = parse_students_str("\u{feff}1, Alice, 85\n2, Bob, 92\n").unwrap();
        assert_eq!(import.students[0], Student::new(1, "Alice", 85));
        assert_eq!(import.students.len(), 2);

        let err = parse_students_str("1, Alice, 85\n\u{feff}2, Bob, 92\n").unwrap_err();
        assert!(matches!(
            err,
            GradingError::InvalidFormat {
                line: 2,
                field: Field::StudentId,
                ..
            }
        ));
    }

    #[test]
    fn file_with_byte_order_mark_reads() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"\xEF\xBB\xBF101, Ama, 88\r\n102, Kojo, 47\r\n")
            .unwrap();

        let import = read_students_from_file(file.path()).unwrap();
        assert_eq!(import.students[0].id(), RecordId::new(101));
        assert_eq!(import.students.len(), 2);
    }

    #[test]
    fn empty_input_yields_no_students() {
        let import = parse_students_str("").unwrap();
        assert!(import.students.is_empty());
    }

    #[test]
    fn reads_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "101, Ama, 88").unwrap();
        writeln!(file, "102, Kojo, 47").unwrap();

        let import = read_students_from_file(file.path()).unwrap();
        assert_eq!(import.students.len(), 2);
    }

    #[test]
    fn missing_file_is_io_error_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.txt");

        let err = read_students_from_file(&path).unwrap_err();
        match err {
            GradingError::Io { path: reported, source } => {
                assert_eq!(reported, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn invalid_utf8_is_read_error() {
        let bytes: &[u8] = b"1, Alice, 85\n2, \xff\xfe, 70\n";
        let err = parse_students(bytes).unwrap_err();
        assert!(matches!(err, GradingError::Read { line: 2, .. }));
    }
}
