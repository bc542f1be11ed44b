use chrono::NaiveDate;

use crate::cli::context::arg;
use crate::error::BookResult;
use crate::model::birthday::DATE_FORMAT;
use crate::model::ContactDirectory;
use crate::ops::contact_ops;
use crate::validation;

pub fn add_birthday(book: &mut ContactDirectory, args: &[&str]) -> BookResult<String> {
    let usage = "add-birthday <name> <DD.MM.YYYY>";
    let name = arg(args, 0, usage)?;
    let date = arg(args, 1, usage)?;

    contact_ops::add_birthday(book, name, date)?;
    Ok("Birthday added.".to_string())
}

pub fn show_birthday(book: &ContactDirectory, args: &[&str]) -> BookResult<String> {
    let name = arg(args, 0, "show-birthday <name>")?;
    Ok(match contact_ops::birthday_of(book, name)? {
        Some(bd) => format!("Birthday for {}: {}", name, bd),
        None => "Birthday not found for this contact.".to_string(),
    })
}

/// `birthdays [days]`; without an argument the configured window is used.
pub fn birthdays(
    book: &ContactDirectory,
    args: &[&str],
    default_window: u32,
    as_of: NaiveDate,
) -> BookResult<String> {
    let window = match args.first() {
        Some(days) => validation::window_days(days, "days")?,
        None => default_window,
    };

    let upcoming = book.upcoming_birthdays(window, as_of);
    if upcoming.is_empty() {
        return Ok("No upcoming birthdays.".to_string());
    }

    let mut out = String::from("Upcoming birthdays:");
    for entry in &upcoming {
        out.push('\n');
        out.push_str(&format!("{}: {}", entry.name, entry.date.format(DATE_FORMAT)));
    }
    Ok(out)
}
