use crate::domain::course::Course;
use crate::domain::model::SemesterRecord;
use crate::utils::error::{Result, TranscriptError};
use rust_decimal::Decimal;
use std::fmt;

pub const GPA_PLACEHOLDER: &str = "N/A";

#[derive(Debug, Clone, PartialEq)]
pub struct Semester {
    number: u32,
    courses: Vec<Course>,
}

impl Semester {
    pub fn new(number: u32, courses: Vec<Course>) -> Self {
        Self { number, courses }
    }

    pub fn from_record(record: SemesterRecord) -> Result<Self> {
        let courses = record
            .courses
            .into_iter()
            .map(Course::from_record)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(record.num, courses))
    }

    pub fn to_record(&self) -> SemesterRecord {
        SemesterRecord {
            num: self.number,
            courses: self.courses.iter().map(Course::to_record).collect(),
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn total_credit_hours(&self) -> Decimal {
        self.courses.iter().map(Course::credit_hours).sum()
    }

    /// Fails on the first course whose grade is missing from the grade table.
    pub fn total_quality_points(&self) -> Result<Decimal> {
        let mut total = Decimal::ZERO;
        for course in &self.courses {
            total += course.quality_points().map_err(|e| match e {
                TranscriptError::UnknownGrade { grade, .. } => TranscriptError::UnknownGrade {
                    grade,
                    semester: Some(self.number),
                },
                other => other,
            })?;
        }
        Ok(total)
    }

    pub fn gpa(&self) -> Result<Decimal> {
        let credit_hours = self.total_credit_hours();
        if credit_hours.is_zero() {
            return Err(TranscriptError::DivisionByZero {
                scope: format!("semester {}", self.number),
            });
        }
        Ok(self.total_quality_points()? / credit_hours)
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

pub(crate) fn format_gpa(gpa: Option<Decimal>) -> String {
    match gpa {
        Some(value) => {
            let mut rounded = value.round_dp(2);
            rounded.rescale(2);
            rounded.to_string()
        }
        None => GPA_PLACEHOLDER.to_string(),
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "-------- Semester: {:2} --------", self.number)?;
        writeln!(f, "| CLASS      | GRADE | CR HR |")?;
        writeln!(f, "|------------|-------|-------|")?;
        for course in &self.courses {
            write!(f, "{}", course)?;
        }
        writeln!(
            f,
            "| TOTAL      | {:>5} | {:>5} |",
            format_gpa(self.gpa().ok()),
            self.total_credit_hours().normalize().to_string()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(name: &str, grade: &str, credit_hours: i64) -> Course {
        Course::new(name, grade, Decimal::from(credit_hours)).unwrap()
    }

    fn first_semester() -> Semester {
        Semester::new(1, vec![course("MA261", "B+", 4), course("CS180", "A", 3)])
    }

    #[test]
    fn test_semester_totals() {
        let semester = first_semester();
        assert_eq!(semester.total_credit_hours(), Decimal::from(7));
        assert_eq!(semester.total_quality_points().unwrap(), Decimal::new(252, 1));
        assert_eq!(semester.gpa().unwrap(), Decimal::new(36, 1));
    }

    #[test]
    fn test_quality_points_are_exact() {
        let semester = Semester::new(
            2,
            vec![
                course("ENGL106", "A-", 4),
                course("CHEM115", "C+", 4),
                course("COM114", "b-", 3),
            ],
        );
        let expected = Decimal::from(4) * Decimal::new(37, 1)
            + Decimal::from(4) * Decimal::new(23, 1)
            + Decimal::from(3) * Decimal::new(27, 1);
        assert_eq!(semester.total_quality_points().unwrap(), expected);
        assert_eq!(expected, Decimal::new(321, 1));
    }

    #[test]
    fn test_empty_semester_gpa_is_undefined() {
        let semester = Semester::new(4, vec![]);
        assert_eq!(semester.total_credit_hours(), Decimal::ZERO);
        assert!(matches!(
            semester.gpa(),
            Err(TranscriptError::DivisionByZero { .. })
        ));
        assert!(semester.render().contains("|   N/A |     0 |"));
    }

    #[test]
    fn test_unknown_grade_names_semester() {
        let semester = Semester::new(3, vec![course("HIST101", "Z", 3)]);
        match semester.total_quality_points() {
            Err(TranscriptError::UnknownGrade { grade, semester }) => {
                assert_eq!(grade, "Z");
                assert_eq!(semester, Some(3));
            }
            other => panic!("expected UnknownGrade, got {:?}", other),
        }
        assert!(semester.render().contains("| TOTAL      |   N/A |     3 |"));
    }

    #[test]
    fn test_render_table() {
        let expected = "\
-------- Semester:  1 --------
| CLASS      | GRADE | CR HR |
|------------|-------|-------|
| MA261      | B+    |     4 |
| CS180      | A     |     3 |
| TOTAL      |  3.60 |     7 |
";
        assert_eq!(first_semester().render(), expected);
    }

    #[test]
    fn test_record_constructor_matches_structured() {
        let record = first_semester().to_record();
        assert_eq!(Semester::from_record(record).unwrap(), first_semester());
    }
}
