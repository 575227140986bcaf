//! Field checks shared by the request payloads.
//!
//! Each check returns `ApiError::Validation` naming the offending field.

use lazy_static::lazy_static;
use regex::Regex;

use super::error::ApiError;

lazy_static! {
    // local@label(.label)*.tld, anchored; no empty labels
    static ref EMAIL_REGEX: Regex = Regex::new(
        r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9-]+(?:\.[A-Z0-9-]+)*\.[A-Z]{2,}$"
    ).unwrap();
}

pub fn require_non_empty(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::validation(format!("{} must not be empty", field)));
    }
    Ok(())
}

pub fn require_email(value: &str) -> Result<(), ApiError> {
    require_non_empty("email", value)?;

    if !EMAIL_REGEX.is_match(value.trim()) {
        return Err(ApiError::validation(format!(
            "email is not a valid address: {}",
            value
        )));
    }
    Ok(())
}

pub fn require_finite(field: &str, value: f64) -> Result<(), ApiError> {
    if !value.is_finite() {
        return Err(ApiError::validation(format!("{} must be a finite number", field)));
    }
    Ok(())
}
