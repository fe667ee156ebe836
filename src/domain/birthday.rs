//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Date format accepted on input and used for storage.
pub const BIRTHDAY_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Date format used when showing a birthday to the user.
pub const BIRTHDAY_DISPLAY_FORMAT: &str = "%d.%m.%Y";

/// A contact's date of birth.
///
/// Birthdays are validated at construction time: the input must be a
/// `YYYY-MM-DD` date strictly before today.
///
/// Stored birthdays are deserialized without the "before today" check; they
/// were valid when they were saved.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use contact_assistant::domain::Birthday;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let birthday = Birthday::parse_on("1990-05-05", today).unwrap();
/// assert_eq!(birthday.display_dotted(), "05.05.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday, validated against the local clock date.
    ///
    /// # Errors
    ///
    /// See [`Birthday::parse_on`].
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        Self::parse_on(raw, Local::now().date_naive())
    }

    /// Create a new Birthday, validated against an explicit `today`.
    ///
    /// # Errors
    ///
    /// - `ValidationError::InvalidDateFormat` if `raw` is not a `YYYY-MM-DD` date
    /// - `ValidationError::FutureDate` if the date is not strictly before `today`
    pub fn parse_on(raw: &str, today: NaiveDate) -> Result<Self, ValidationError> {
        let date = NaiveDate::parse_from_str(raw, BIRTHDAY_INPUT_FORMAT)
            .map_err(|_| ValidationError::InvalidDateFormat(raw.to_string()))?;

        if date >= today {
            return Err(ValidationError::FutureDate(raw.to_string()));
        }

        Ok(Self(date))
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Format as `DD.MM.YYYY`.
    pub fn display_dotted(&self) -> String {
        self.0.format(BIRTHDAY_DISPLAY_FORMAT).to_string()
    }
}

// Display support - YYYY-MM-DD
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_INPUT_FORMAT))
    }
}
