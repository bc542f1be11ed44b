use chrono::Local;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::{BookError, BookResult};
use crate::model::ContactDirectory;

/// State owned by the REPL for the length of a session.
pub struct CLIContext {
    pub book: ContactDirectory,
    pub snapshot_path: PathBuf,
    pub window_days: u32,
}

impl CLIContext {
    pub fn new(book: ContactDirectory, config: &Config) -> Self {
        Self {
            book,
            snapshot_path: config.snapshot_path.clone(),
            window_days: config.birthday_window_days,
        }
    }

    pub fn today() -> chrono::NaiveDate {
        Local::now().date_naive()
    }
}

/// The positional argument at `index`, or `MissingArgument` with `usage`.
pub fn arg<'a>(args: &[&'a str], index: usize, usage: &str) -> BookResult<&'a str> {
    args.get(index).copied().ok_or_else(|| BookError::MissingArgument {
        usage: usage.to_string(),
    })
}

/// One line for the user; never ends the session.
pub fn render_error(e: &BookError) -> String {
    match e {
        BookError::EmptyDirectory => e.to_string(),
        BookError::InvalidFormat { .. }
        | BookError::NotFound { .. }
        | BookError::MissingArgument { .. }
        | BookError::BlankField { .. }
        | BookError::InvalidArgument { .. } => format!("Error: {}", e),
        BookError::Io(_) | BookError::Json(_) => format!("Unexpected error: {}", e),
    }
}
