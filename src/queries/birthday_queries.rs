use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::model::ContactDirectory;

pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// A contact whose birthday should be celebrated on `date`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub date: NaiveDate,
}

/// Birthdays falling within `as_of ..= as_of + window_days` this year.
///
/// The window is checked against the unadjusted date; a match on a weekend
/// is then moved to the following Monday, which may lie past the window.
/// The year is always `as_of`'s year, so a birthday early in January is not
/// reported when checked in late December. A window reaching past the last
/// representable date ends there. Results follow directory order.
pub fn upcoming_birthdays(
    directory: &ContactDirectory,
    window_days: u32,
    as_of: NaiveDate,
) -> Vec<UpcomingBirthday> {
    let end = as_of
        .checked_add_signed(Duration::days(i64::from(window_days)))
        .unwrap_or(NaiveDate::MAX);
    let mut results = Vec::new();

    for record in directory.records() {
        let occurrence = match record.birthday().and_then(|b| b.in_year(as_of.year())) {
            Some(d) => d,
            None => continue,
        };

        if as_of <= occurrence && occurrence <= end {
            results.push(UpcomingBirthday {
                name: record.name().to_string(),
                date: adjust_for_weekend(occurrence),
            });
        }
    }

    results
}

/// Saturday and Sunday move forward to the next Monday.
pub fn adjust_for_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}
