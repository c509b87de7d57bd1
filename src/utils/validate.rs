//! Form-level validation shared by the directory operations.

use crate::errors::{AppError, AppResult};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap()
});

/// Names are required and must be non-empty after trimming.
pub fn require_name(name: &str) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::EmptyName);
    }
    Ok(())
}

/// Email is optional; when given it must match the standard pattern.
pub fn optional_email(email: Option<&str>) -> AppResult<()> {
    if let Some(e) = email
        && !EMAIL_RE.is_match(e)
    {
        return Err(AppError::InvalidEmail(e.to_string()));
    }
    Ok(())
}
