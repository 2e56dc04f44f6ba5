use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// On-disk shape of one course: `{ "name", "grade", "crhr" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub name: String,
    pub grade: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub crhr: Decimal,
}

/// On-disk shape of one semester: `{ "num", "courses" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemesterRecord {
    pub num: u32,
    pub courses: Vec<CourseRecord>,
}
