use crate::utils::error::{Result, TranscriptError};
use rust_decimal::Decimal;

/// Letter grade to quality points, in tenths.
static GRADE_TABLE: [(&str, i64); 13] = [
    ("A+", 40),
    ("A", 40),
    ("A-", 37),
    ("B+", 33),
    ("B", 30),
    ("B-", 27),
    ("C+", 23),
    ("C", 20),
    ("C-", 17),
    ("D+", 13),
    ("D", 10),
    ("D-", 7),
    ("F", 0),
];

fn lookup(grade: &str) -> Option<Decimal> {
    let normalized = grade.trim().to_ascii_uppercase();
    GRADE_TABLE
        .iter()
        .find(|(letter, _)| *letter == normalized)
        .map(|(_, tenths)| Decimal::new(*tenths, 1))
}

pub fn points_for(grade: &str) -> Result<Decimal> {
    lookup(grade).ok_or_else(|| TranscriptError::UnknownGrade {
        grade: grade.to_string(),
        semester: None,
    })
}

pub fn is_known_grade(grade: &str) -> bool {
    lookup(grade).is_some()
}

/// Grade letters in table order, for prompts.
pub fn known_grades() -> impl Iterator<Item = &'static str> {
    GRADE_TABLE.iter().map(|(letter, _)| *letter)
}
