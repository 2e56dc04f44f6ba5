use crate::domain::grade::points_for;
use crate::domain::model::CourseRecord;
use crate::utils::error::Result;
use crate::utils::validation::validate_credit_hours;
use rust_decimal::Decimal;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    name: String,
    grade: String,
    credit_hours: Decimal,
}

impl Course {
    pub fn new(
        name: impl Into<String>,
        grade: impl Into<String>,
        credit_hours: Decimal,
    ) -> Result<Self> {
        validate_credit_hours(credit_hours)?;
        Ok(Self {
            name: name.into(),
            grade: grade.into(),
            credit_hours,
        })
    }

    /// A bad record surfaces as `InvalidInput`; the store rewraps it as
    /// `MalformedData` with the offending file path.
    pub fn from_record(record: CourseRecord) -> Result<Self> {
        Self::new(record.name, record.grade, record.crhr)
    }

    pub fn to_record(&self) -> CourseRecord {
        CourseRecord {
            name: self.name.clone(),
            grade: self.grade.clone(),
            crhr: self.credit_hours,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grade(&self) -> &str {
        &self.grade
    }

    pub fn credit_hours(&self) -> Decimal {
        self.credit_hours
    }

    pub fn quality_points(&self) -> Result<Decimal> {
        Ok(self.credit_hours * points_for(&self.grade)?)
    }
}

/// One row of a semester table.
impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "| {:<10} | {:<5} | {:>5} |",
            self.name,
            self.grade,
            self.credit_hours.normalize().to_string()
        )
    }
}
