//! Shape validation shared by every domain record.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation errors returned before a record is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required text field is empty after trimming.
    EmptyField(&'static str),
    /// Score fields are percentages.
    ScoreOutOfRange { field: &'static str, value: u8 },
    /// Progress is a percentage.
    ProgressOutOfRange(u8),
    /// Dates are calendar dates written `YYYY-MM-DD`.
    InvalidDate { field: &'static str, value: String },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "{field} must not be empty"),
            Self::ScoreOutOfRange { field, value } => {
                write!(f, "{field} ({value}) must be within 0..=100")
            }
            Self::ProgressOutOfRange(value) => {
                write!(f, "progress ({value}) must be within 0..=100")
            }
            Self::InvalidDate { field, value } => {
                write!(f, "{field} `{value}` must be a date written YYYY-MM-DD")
            }
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(())
}

pub(crate) fn require_percent(field: &'static str, value: u8) -> Result<(), ValidationError> {
    if value > 100 {
        return Err(ValidationError::ScoreOutOfRange { field, value });
    }
    Ok(())
}

pub(crate) fn require_progress(value: u8) -> Result<(), ValidationError> {
    if value > 100 {
        return Err(ValidationError::ProgressOutOfRange(value));
    }
    Ok(())
}

static ISO_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$").expect("valid iso date regex")
});

/// Accepts absent dates and zero-padded calendar dates, so text order is
/// chronological.
pub(crate) fn require_iso_date(
    field: &'static str,
    value: Option<&str>,
) -> Result<(), ValidationError> {
    let Some(value) = value else {
        return Ok(());
    };
    if is_calendar_date(value) {
        return Ok(());
    }
    Err(ValidationError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

fn is_calendar_date(value: &str) -> bool {
    let Some(caps) = ISO_DATE_RE.captures(value) else {
        return false;
    };
    let number = |index: usize| {
        caps.get(index)
            .and_then(|m| m.as_str().parse::<u32>().ok())
            .unwrap_or(0)
    };
    let (year, month, day) = (number(1), number(2), number(3));
    let leap = (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
    let days_in_month = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if leap => 29,
        2 => 28,
        _ => return false,
    };
    (1..=days_in_month).contains(&day)
}
