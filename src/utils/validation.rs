use crate::utils::error::{Result, TranscriptError};
use rust_decimal::Decimal;
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let raw = path.to_string_lossy();
    if raw.trim().is_empty() {
        return Err(TranscriptError::ConfigError {
            message: format!("{}: path cannot be empty", field_name),
        });
    }

    if raw.contains('\0') {
        return Err(TranscriptError::ConfigError {
            message: format!("{}: path contains null bytes", field_name),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TranscriptError::invalid_input(format!(
            "{} cannot be empty or whitespace-only",
            field_name
        )));
    }
    Ok(())
}

pub fn validate_non_negative(field_name: &str, value: Decimal) -> Result<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(TranscriptError::invalid_input(format!(
            "{} must not be negative, got {}",
            field_name, value
        )));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(TranscriptError::invalid_input(format!(
            "{} must be between {} and {}, got {}",
            field_name, min, max, value
        )));
    }
    Ok(())
}

/// Largest credit-hour value a single course may carry.
pub const MAX_CREDIT_HOURS: i64 = 1000;

/// Keeps every later sum and product of credit hours well inside `Decimal`'s range.
pub fn validate_credit_hours(value: Decimal) -> Result<()> {
    validate_non_negative("credit hours", value)?;
    validate_range(
        "credit hours",
        value,
        Decimal::ZERO,
        Decimal::from(MAX_CREDIT_HOURS),
    )
}
