//! Class grade report.

use crate::config::GradingConfig;
use crate::error::{GradingError, GradingResult};
use crate::grade::Grade;
use chrono::NaiveDateTime;
use recordkeep_core::Entity;
use recordkeep_domain::Student;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::debug;

const RULE_WIDTH: usize = 80;

/// Number of students holding one grade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradeCount {
    /// The grade.
    pub grade: Grade,
    /// Students with this grade.
    pub count: usize,
    /// Share of the whole class, 0-100.
    pub percentage: f64,
}

/// Summary statistics over a non-empty class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassStatistics {
    /// Mean score.
    pub average: f64,
    /// Highest score.
    pub highest: i32,
    /// Name of the first student, in input order, with the highest score.
    pub top_student: String,
    /// Lowest score.
    pub lowest: i32,
    /// Percentage of students at or above the pass threshold.
    pub pass_rate: f64,
}

/// A grade report for one class.
///
/// ```rust
/// use recordkeep_domain::Student;
/// use recordkeep_grading::{ClassReport, Grade, GradingConfig};
///
/// let students = vec![Student::new(2, "Bob", 92), Student::new(1, "Alice", 45)];
/// let report = ClassReport::from_students(&students, &GradingConfig::default());
///
/// assert_eq!(report.students()[0].full_name(), "Alice");
/// assert_eq!(report.count_for(Grade::F), 1);
/// assert_eq!(report.statistics().unwrap().pass_rate, 50.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassReport {
    students: Vec<Student>,
    distribution: Vec<GradeCount>,
    statistics: Option<ClassStatistics>,
    pass_threshold: i32,
}

impl ClassReport {
    /// Builds a report over `students`.
    #[must_use]
    pub fn from_students(students: &[Student], config: &GradingConfig) -> Self {
        let mut sorted = students.to_vec();
        sorted.sort_by_key(Entity::id);

        let total = students.len();
        let distribution = Grade::BANDS
            .into_iter()
            .map(|grade| {
                let count = students
                    .iter()
                    .filter(|s| Grade::from_score(s.score()) == grade)
                    .count();
                GradeCount {
                    grade,
                    count,
                    percentage: percentage(count, total),
                }
            })
            .collect();

        Self {
            students: sorted,
            distribution,
            statistics: statistics(students, config.pass_threshold),
            pass_threshold: config.pass_threshold,
        }
    }

    /// Students ordered by id.
    #[must_use]
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Number of students in the report.
    #[must_use]
    pub fn total(&self) -> usize {
        self.students.len()
    }

    /// Counts for grades A through F, best first.
    #[must_use]
    pub fn distribution(&self) -> &[GradeCount] {
        &self.distribution
    }

    /// Number of students holding `grade`.
    ///
    /// [`Grade::Invalid`] is not part of the distribution and is counted
    /// directly.
    #[must_use]
    pub fn count_for(&self, grade: Grade) -> usize {
        match self.distribution.iter().find(|c| c.grade == grade) {
            Some(entry) => entry.count,
            None => self
                .students
                .iter()
                .filter(|s| Grade::from_score(s.score()) == grade)
                .count(),
        }
    }

    /// Class statistics, or `None` for an empty class.
    #[must_use]
    pub fn statistics(&self) -> Option<&ClassStatistics> {
        self.statistics.as_ref()
    }

    /// Threshold used for the pass rate.
    #[must_use]
    pub fn pass_threshold(&self) -> i32 {
        self.pass_threshold
    }

    /// Renders the plain-text report.
    #[must_use]
    pub fn render(&self, generated_on: NaiveDateTime) -> String {
        Rendered {
            report: self,
            generated_on,
        }
        .to_string()
    }

    /// Renders the report and writes it to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`GradingError::Io`] if the file cannot be written.
    pub fn write_to_file(&self, path: &Path, generated_on: NaiveDateTime) -> GradingResult<()> {
        let text = self.render(generated_on);
        fs::write(path, &text).map_err(|source| GradingError::io(path, source))?;
        debug!(path = %path.display(), bytes = text.len(), "report written");
        Ok(())
    }
}

struct Rendered<'a> {
    report: &'a ClassReport,
    generated_on: NaiveDateTime,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);

        writeln!(f, "{heavy}")?;
        writeln!(f, "{:>46}", "STUDENT GRADE REPORT")?;
        writeln!(f, "{heavy}")?;
        writeln!(
            f,
            "Generated on: {}",
            self.generated_on.format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(f, "Total Students: {}", report.total())?;
        writeln!(f)?;

        writeln!(f, "INDIVIDUAL RESULTS:")?;
        writeln!(f, "{light}")?;
        for student in &report.students {
            writeln!(f, "{}, Grade = {}", student, Grade::from_score(student.score()))?;
        }

        writeln!(f)?;
        writeln!(f, "GRADE DISTRIBUTION:")?;
        writeln!(f, "{light}")?;
        for entry in &report.distribution {
            writeln!(
                f,
                "Grade {}: {:3} students ({:5.1}%)",
                entry.grade, entry.count, entry.percentage
            )?;
        }

        writeln!(f)?;
        writeln!(f, "CLASS STATISTICS:")?;
        writeln!(f, "{light}")?;
        if let Some(stats) = &report.statistics {
            writeln!(f, "Class Average: {:.2}", stats.average)?;
            writeln!(f, "Highest Score: {} ({})", stats.highest, stats.top_student)?;
            writeln!(f, "Lowest Score: {}", stats.lowest)?;
            writeln!(
                f,
                "Pass Rate (\u{2265}{}): {:.1}%",
                report.pass_threshold, stats.pass_rate
            )?;
        }

        writeln!(f)?;
        writeln!(f, "{heavy}")?;
        writeln!(f, "{:>43}", "END OF REPORT")?;
        writeln!(f, "{heavy}")
    }
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 * 100.0 / total as f64
    }
}

fn statistics(students: &[Student], pass_threshold: i32) -> Option<ClassStatistics> {
    let first = students.first()?;

    let mut top = first;
    let mut lowest = first.score();
    let mut sum = 0_i64;
    let mut passed = 0_usize;

    for student in students {
        let score = student.score();
        sum += i64::from(score);
        if score > top.score() {
            top = student;
        }
        lowest = lowest.min(score);
        if score >= pass_threshold {
            passed += 1;
        }
    }

    Some(ClassStatistics {
        average: sum as f64 / students.len() as f64,
        highest: top.score(),
        top_student: top.full_name().to_string(),
        lowest,
        pass_rate: percentage(passed, students.len()),
    })
}
