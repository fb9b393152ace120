//! Field rules shared by the per-entity validators.
//!
//! Each entity lists its rules in a fixed order and stops at the first failure, so the error a
//! client sees is deterministic. Field labels are the human-readable names used in messages
//! ("first name"), not JSON keys.

use std::sync::LazyLock;

use regex::Regex;

use super::errors::{Result, ServiceError};

/// Accepted formats: 123-456-7890, 1234567890, 12345678 and 1234567
static TELEPHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{3}-\d{3}-\d{4}|\d{10}|\d{8}|\d{7})$").expect("telephone pattern is valid"));

pub fn required(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ServiceError::FieldRequired { field });
    }
    Ok(())
}

/// Required and at least `min` characters long
pub fn min_len(field: &'static str, value: &str, min: usize) -> Result<()> {
    if value.chars().count() < min {
        return Err(ServiceError::FieldRequired { field });
    }
    Ok(())
}

/// Identifiers and other required numbers must be strictly positive
pub fn positive_id(field: &'static str, value: i64) -> Result<()> {
    if value <= 0 {
        return Err(ServiceError::FieldRequired { field });
    }
    Ok(())
}

pub fn not_negative(field: &'static str, value: impl Into<i64>) -> Result<()> {
    if value.into() < 0 {
        return Err(ServiceError::NotNegativeField { field });
    }
    Ok(())
}

/// Physical measures (sizes, weights) must be greater than zero
pub fn positive_measure(field: &'static str, value: f64) -> Result<()> {
    if !(value > 0.0) {
        return Err(ServiceError::InvalidField { field });
    }
    Ok(())
}

pub fn at_least(field: &'static str, value: f64, min: f64) -> Result<()> {
    if value < min {
        return Err(ServiceError::InvalidField { field });
    }
    Ok(())
}

pub fn telephone(field: &'static str, value: &str) -> Result<()> {
    if !TELEPHONE.is_match(value) {
        return Err(ServiceError::InvalidField { field });
    }
    Ok(())
}
