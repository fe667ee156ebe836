//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not exactly ten digits.
    InvalidPhone(String),

    /// The provided birthday is not a `YYYY-MM-DD` date.
    InvalidDateFormat(String),

    /// The provided birthday is today or later.
    FutureDate(String),

    /// The record has no phone equal to the given value.
    PhoneNotFound(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::InvalidPhone(phone) => {
                write!(f, "Phone number must be exactly 10 digits: {}", phone)
            }
            Self::InvalidDateFormat(date) => write!(
                f,
                "Incorrect date format, expected YYYY-MM-DD: {}",
                date
            ),
            Self::FutureDate(date) => write!(f, "Birthday cannot be in the future: {}", date),
            Self::PhoneNotFound(phone) => write!(f, "Phone number not found: {}", phone),
        }
    }
}

impl std::error::Error for ValidationError {}
