use crate::domain::semester::{format_gpa, Semester};
use crate::utils::error::{Result, TranscriptError};
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcript {
    source_path: Option<PathBuf>,
    semesters: Vec<Semester>,
}

/// Cross-semester totals. `overall_gpa` is `None` when no credit hours exist.
#[derive(Debug)]
pub struct Summary {
    pub total_quality_points: Decimal,
    pub total_credit_hours: Decimal,
    pub overall_gpa: Option<Decimal>,
    pub warnings: Vec<TranscriptError>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_semesters(source_path: impl Into<PathBuf>, semesters: Vec<Semester>) -> Self {
        Self {
            source_path: Some(source_path.into()),
            semesters,
        }
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    pub fn semesters(&self) -> &[Semester] {
        &self.semesters
    }

    pub fn is_empty(&self) -> bool {
        self.semesters.is_empty()
    }

    pub(crate) fn push(&mut self, semester: Semester) {
        self.semesters.push(semester);
    }

    pub fn next_semester_number(&self) -> u32 {
        self.semesters
            .iter()
            .map(Semester::number)
            .max()
            .map_or(1, |highest| highest.saturating_add(1))
    }

    /// A semester with an unknown grade contributes zero quality points but
    /// keeps its credit hours in the denominator.
    pub fn aggregate(&self) -> Result<Summary> {
        if self.semesters.is_empty() {
            return Err(TranscriptError::EmptyTranscript);
        }

        let mut total_quality_points = Decimal::ZERO;
        let mut total_credit_hours = Decimal::ZERO;
        let mut warnings = Vec::new();

        for semester in &self.semesters {
            match semester.total_quality_points() {
                Ok(points) => total_quality_points += points,
                Err(e) => {
                    tracing::warn!(
                        "Semester {} counted as 0 quality points: {}",
                        semester.number(),
                        e
                    );
                    warnings.push(e);
                }
            }
            total_credit_hours += semester.total_credit_hours();
        }

        let overall_gpa = if total_credit_hours.is_zero() {
            None
        } else {
            Some(total_quality_points / total_credit_hours)
        };

        Ok(Summary {
            total_quality_points,
            total_credit_hours,
            overall_gpa,
            warnings,
        })
    }

    pub fn render(&self) -> String {
        match self.aggregate() {
            Ok(summary) => self.render_with(&summary),
            Err(e) => format!("{}\n", e.user_friendly_message()),
        }
    }

    /// Renders the tables plus an already computed summary of this transcript.
    pub fn render_with(&self, summary: &Summary) -> String {
        let tables: Vec<String> = self.semesters.iter().map(Semester::render).collect();
        let mut out = tables.join("\n");
        out.push('\n');
        out.push_str("======== Overall ========\n");
        out.push_str(&format!(
            "Total credit hours:   {}\n",
            summary.total_credit_hours.normalize()
        ));
        out.push_str(&format!(
            "Total quality points: {}\n",
            summary.total_quality_points.normalize()
        ));
        out.push_str(&format!(
            "Overall GPA:          {}\n",
            format_gpa(summary.overall_gpa)
        ));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::course::Course;

    fn course(name: &str, grade: &str, credit_hours: i64) -> Course {
        Course::new(name, grade, Decimal::from(credit_hours)).unwrap()
    }

    fn sample() -> Transcript {
        Transcript::with_semesters(
            "grades.json",
            vec![
                Semester::new(1, vec![course("MA261", "B+", 4), course("CS180", "A", 3)]),
                Semester::new(2, vec![course("MA262", "A-", 4), course("CS182", "B", 3)]),
            ],
        )
    }

    #[test]
    fn test_aggregate_sums_semesters() {
        let summary = sample().aggregate().unwrap();
        assert_eq!(summary.total_credit_hours, Decimal::from(14));
        // 25.2 + (14.8 + 9.0)
        assert_eq!(summary.total_quality_points, Decimal::new(490, 1));
        assert_eq!(summary.overall_gpa, Some(Decimal::new(35, 1)));
        assert!(summary.warnings.is_empty());
    }

    #[test]
    fn test_aggregate_empty_transcript() {
        let transcript = Transcript::new();
        assert!(matches!(
            transcript.aggregate(),
            Err(TranscriptError::EmptyTranscript)
        ));
        assert_eq!(transcript.render(), "No semesters recorded yet\n");
    }

    #[test]
    fn test_unknown_grade_keeps_credit_hours() {
        let transcript = Transcript::with_semesters(
            "grades.json",
            vec![
                Semester::new(1, vec![course("MA261", "B+", 4), course("CS180", "A", 3)]),
                Semester::new(2, vec![course("HIST101", "Z", 3)]),
            ],
        );
        let summary = transcript.aggregate().unwrap();
        assert_eq!(summary.total_quality_points, Decimal::new(252, 1));
        assert_eq!(summary.total_credit_hours, Decimal::from(10));
        assert_eq!(summary.overall_gpa, Some(Decimal::new(252, 2)));
        assert_eq!(summary.warnings.len(), 1);
        assert!(summary.warnings[0].to_string().contains("semester 2"));
    }

    #[test]
    fn test_zero_credit_transcript_gpa_undefined() {
        let transcript = Transcript::with_semesters("grades.json", vec![Semester::new(1, vec![])]);
        let summary = transcript.aggregate().unwrap();
        assert_eq!(summary.overall_gpa, None);
        assert!(transcript.render().contains("Overall GPA:          N/A"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let transcript = sample();
        let first = transcript.render();
        assert_eq!(first, transcript.render());
        assert!(first.contains("-------- Semester:  1 --------"));
        assert!(first.contains("|\n\n-------- Semester:  2 --------"));
        assert!(first.ends_with("Overall GPA:          3.50\n"));
    }

    #[test]
    fn test_render_with_matches_render() {
        let transcript = sample();
        let summary = transcript.aggregate().unwrap();
        assert_eq!(transcript.render_with(&summary), transcript.render());
    }

    #[test]
    fn test_next_semester_number() {
        assert_eq!(Transcript::new().next_semester_number(), 1);
        assert_eq!(sample().next_semester_number(), 3);
    }
}
