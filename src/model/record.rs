use serde::{Deserialize, Serialize};
use std::fmt;

use super::birthday::Birthday;
use super::phone::PhoneNumber;
use crate::error::{BookError, BookResult};
use crate::validation;

/// One contact: a name, its phone numbers and an optional birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecordFields")]
pub struct ContactRecord {
    name: String,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

/// Snapshot shape of a record before the name is checked.
#[derive(Deserialize)]
struct RecordFields {
    name: String,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

impl TryFrom<RecordFields> for ContactRecord {
    type Error = BookError;

    fn try_from(fields: RecordFields) -> BookResult<Self> {
        Ok(Self {
            name: validation::non_blank(&fields.name, "name")?,
            phones: fields.phones,
            birthday: fields.birthday,
        })
    }
}

impl ContactRecord {
    pub fn new(name: &str) -> BookResult<Self> {
        Ok(Self {
            name: validation::non_blank(name, "name")?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn add_phone(&mut self, value: &str) -> BookResult<()> {
        let phone = PhoneNumber::parse(value)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Removes the first phone equal to `value`.
    pub fn remove_phone(&mut self, value: &str) -> BookResult<PhoneNumber> {
        let index = self.position_of(value)?;
        Ok(self.phones.remove(index))
    }

    /// Replaces the first phone equal to `old` in place.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let index = self.position_of(old)?;
        self.phones[index] = PhoneNumber::parse(new)?;
        Ok(())
    }

    pub fn find_phone(&self, value: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    /// Drops every phone and keeps only `phone`.
    pub fn replace_phones(&mut self, phone: PhoneNumber) {
        self.phones.clear();
        self.phones.push(phone);
    }

    pub fn set_birthday(&mut self, value: &str) -> BookResult<()> {
        self.birthday = Some(Birthday::parse(value)?);
        Ok(())
    }

    fn position_of(&self, value: &str) -> BookResult<usize> {
        self.phones
            .iter()
            .position(|p| p.as_str() == value)
            .ok_or_else(|| BookError::phone_not_found(value))
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(PhoneNumber::as_str).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))
    }
}
