use tracing::debug;

use crate::error::{BookError, BookResult};
use crate::model::{Birthday, ContactDirectory, ContactRecord, PhoneNumber};

/// Whether `add_contact` created a record or extended an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    Updated,
}

/// Adds `phone` to the contact called `name`, creating the contact if needed.
/// Nothing is stored when the phone is invalid.
pub fn add_contact(book: &mut ContactDirectory, name: &str, phone: &str) -> BookResult<AddOutcome> {
    let phone = PhoneNumber::parse(phone)?;

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone.as_str())?;
        debug!(name, "appended phone to existing contact");
        return Ok(AddOutcome::Updated);
    }

    let mut record = ContactRecord::new(name)?;
    record.add_phone(phone.as_str())?;
    book.add_record(record);
    Ok(AddOutcome::Added)
}

/// Replaces every phone of `name` with `phone`.
pub fn change_contact(book: &mut ContactDirectory, name: &str, phone: &str) -> BookResult<()> {
    let record = book
        .find_mut(name)
        .ok_or_else(|| BookError::contact_not_found(name))?;
    let phone = PhoneNumber::parse(phone)?;
    record.replace_phones(phone);
    Ok(())
}

pub fn contact<'a>(book: &'a ContactDirectory, name: &str) -> BookResult<&'a ContactRecord> {
    book.find(name)
        .ok_or_else(|| BookError::contact_not_found(name))
}

pub fn add_birthday(book: &mut ContactDirectory, name: &str, date: &str) -> BookResult<()> {
    let record = book
        .find_mut(name)
        .ok_or_else(|| BookError::contact_not_found(name))?;
    record.set_birthday(date)
}

/// `Ok(None)` when the contact exists but has no birthday set.
pub fn birthday_of<'a>(book: &'a ContactDirectory, name: &str) -> BookResult<Option<&'a Birthday>> {
    Ok(contact(book, name)?.birthday())
}

pub fn remove_phone(book: &mut ContactDirectory, name: &str, phone: &str) -> BookResult<PhoneNumber> {
    let record = book
        .find_mut(name)
        .ok_or_else(|| BookError::contact_not_found(name))?;
    record.remove_phone(phone)
}

pub fn edit_phone(book: &mut ContactDirectory, name: &str, old: &str, new: &str) -> BookResult<()> {
    let record = book
        .find_mut(name)
        .ok_or_else(|| BookError::contact_not_found(name))?;
    record.edit_phone(old, new)
}

pub fn delete_contact(book: &mut ContactDirectory, name: &str) -> BookResult<ContactRecord> {
    book.delete(name)
}
