use crate::cli::context::arg;
use crate::error::BookResult;
use crate::model::ContactDirectory;
use crate::ops::contact_ops::{self, AddOutcome};

pub fn add(book: &mut ContactDirectory, args: &[&str]) -> BookResult<String> {
    let usage = "add <name> <phone>";
    let name = arg(args, 0, usage)?;
    let phone = arg(args, 1, usage)?;

    let message = match contact_ops::add_contact(book, name, phone)? {
        AddOutcome::Added => "Contact added.",
        AddOutcome::Updated => "Contact updated.",
    };
    Ok(message.to_string())
}

pub fn change(book: &mut ContactDirectory, args: &[&str]) -> BookResult<String> {
    let usage = "change <name> <phone>";
    let name = arg(args, 0, usage)?;
    let phone = arg(args, 1, usage)?;

    contact_ops::change_contact(book, name, phone)?;
    Ok(format!("Contact {} updated.", name))
}

pub fn phone(book: &ContactDirectory, args: &[&str]) -> BookResult<String> {
    let name = arg(args, 0, "phone <name>")?;
    Ok(contact_ops::contact(book, name)?.to_string())
}

pub fn all(book: &ContactDirectory) -> BookResult<String> {
    let lines: Vec<String> = book.list_all()?.iter().map(|r| r.to_string()).collect();
    Ok(lines.join("\n"))
}

pub fn remove_phone(book: &mut ContactDirectory, args: &[&str]) -> BookResult<String> {
    let usage = "remove-phone <name> <phone>";
    let name = arg(args, 0, usage)?;
    let phone = arg(args, 1, usage)?;

    let removed = contact_ops::remove_phone(book, name, phone)?;
    Ok(format!("Phone {} removed from {}.", removed, name))
}

pub fn edit_phone(book: &mut ContactDirectory, args: &[&str]) -> BookResult<String> {
    let usage = "edit-phone <name> <old phone> <new phone>";
    let name = arg(args, 0, usage)?;
    let old = arg(args, 1, usage)?;
    let new = arg(args, 2, usage)?;

    contact_ops::edit_phone(book, name, old, new)?;
    Ok(format!("Phone for {} updated.", name))
}

pub fn delete(book: &mut ContactDirectory, args: &[&str]) -> BookResult<String> {
    let name = arg(args, 0, "delete <name>")?;
    contact_ops::delete_contact(book, name)?;
    Ok(format!("Contact {} deleted.", name))
}
