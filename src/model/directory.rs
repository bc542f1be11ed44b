use chrono::NaiveDate;
use tracing::debug;

use super::record::ContactRecord;
use crate::error::{BookError, BookResult};
use crate::queries::birthday_queries::{self, UpcomingBirthday};

/// All contacts, keyed by name, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDirectory {
    records: Vec<ContactRecord>,
}

impl ContactDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `record`, overwriting any record with the same name.
    /// An overwritten record keeps its position.
    pub fn add_record(&mut self, record: ContactRecord) {
        match self.records.iter_mut().find(|r| r.name() == record.name()) {
            Some(existing) => {
                debug!(name = record.name(), "overwriting contact");
                *existing = record;
            }
            None => {
                debug!(name = record.name(), "adding contact");
                self.records.push(record);
            }
        }
    }

    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.iter().find(|r| r.name() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records.iter_mut().find(|r| r.name() == name)
    }

    pub fn delete(&mut self, name: &str) -> BookResult<ContactRecord> {
        let index = self
            .records
            .iter()
            .position(|r| r.name() == name)
            .ok_or_else(|| BookError::contact_not_found(name))?;
        debug!(name, "deleting contact");
        Ok(self.records.remove(index))
    }

    pub fn list_all(&self) -> BookResult<&[ContactRecord]> {
        if self.records.is_empty() {
            Err(BookError::EmptyDirectory)
        } else {
            Ok(&self.records)
        }
    }

    pub fn records(&self) -> &[ContactRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// See [`birthday_queries::upcoming_birthdays`].
    pub fn upcoming_birthdays(&self, window_days: u32, as_of: NaiveDate) -> Vec<UpcomingBirthday> {
        birthday_queries::upcoming_birthdays(self, window_days, as_of)
    }
}

impl FromIterator<ContactRecord> for ContactDirectory {
    fn from_iter<I: IntoIterator<Item = ContactRecord>>(iter: I) -> Self {
        let mut directory = Self::new();
        for record in iter {
            directory.add_record(record);
        }
        directory
    }
}
