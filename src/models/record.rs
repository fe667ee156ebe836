//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, PhoneNumber, ValidationError};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: a name, its phone numbers and an optional birthday.
///
/// Phones keep their insertion order and may contain duplicates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    /// Contact name, also the address book key
    name: Name,

    /// Phone numbers in insertion order
    #[serde(default)]
    phones: Vec<PhoneNumber>,

    /// Date of birth, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.phones.push(PhoneNumber::new(raw)?);
        Ok(())
    }

    /// Remove every phone equal to `value`. Absent values are ignored.
    pub fn remove_phone(&mut self, value: &str) {
        self.phones.retain(|phone| phone.as_str() != value);
    }

    /// Replace the first phone equal to `old` with a validated `new`.
    ///
    /// The phone list is only modified when both the lookup and the
    /// validation succeed.
    ///
    /// # Errors
    ///
    /// - `ValidationError::PhoneNotFound` if no phone equals `old`
    /// - `ValidationError::InvalidPhone` if `new` is not a valid phone
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), ValidationError> {
        let index = self
            .phones
            .iter()
            .position(|phone| phone.as_str() == old)
            .ok_or_else(|| ValidationError::PhoneNotFound(old.to_string()))?;

        self.phones[index] = PhoneNumber::new(new)?;
        Ok(())
    }

    /// Find the first phone equal to `value`.
    pub fn find_phone(&self, value: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|phone| phone.as_str() == value)
    }

    /// Validate and set the birthday, replacing any previous one.
    pub fn set_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.set_birthday_on(raw, Local::now().date_naive())
    }

    /// Like [`Record::set_birthday`], validated against an explicit `today`.
    pub fn set_birthday_on(&mut self, raw: &str, today: NaiveDate) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::parse_on(raw, today)?);
        Ok(())
    }

    /// Set an already validated birthday.
    pub fn with_birthday(mut self, birthday: Birthday) -> Self {
        self.birthday = Some(birthday);
        self
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");

        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
