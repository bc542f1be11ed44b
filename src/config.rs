//! Runtime configuration from command-line arguments, with environment
//! variable fallbacks.
//!
//! - `CONTACT_BOOK_FILE`: snapshot path (default: `.data/address_book.json`)
//! - `CONTACT_BOOK_BIRTHDAY_WINDOW`: default `birthdays` window in days (default: 7)

use std::path::PathBuf;

use crate::error::{BookError, BookResult};
use crate::queries::birthday_queries::DEFAULT_WINDOW_DAYS;
use crate::validation;

pub const FILE_ENV: &str = "CONTACT_BOOK_FILE";
pub const WINDOW_ENV: &str = "CONTACT_BOOK_BIRTHDAY_WINDOW";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub snapshot_path: PathBuf,
    pub birthday_window_days: u32,
}

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Run(Config),
    Help,
}

impl Config {
    pub fn default_snapshot_path() -> PathBuf {
        PathBuf::from(".data").join("address_book.json")
    }

    pub fn from_args<I>(args: I) -> BookResult<Invocation>
    where
        I: IntoIterator<Item = String>,
    {
        Self::from_args_and_env(args, |key| std::env::var(key).ok())
    }

    /// Arguments win over the environment, which wins over defaults.
    pub fn from_args_and_env<I, F>(args: I, env: F) -> BookResult<Invocation>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut args = args.into_iter();
        let mut snapshot_path: Option<PathBuf> = None;
        let mut window: Option<u32> = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--file" | "-f" => {
                    let value = args.next().ok_or_else(|| BookError::MissingArgument {
                        usage: "--file <PATH>".into(),
                    })?;
                    snapshot_path = Some(PathBuf::from(value));
                }
                "--days" | "-d" => {
                    let value = args.next().ok_or_else(|| BookError::MissingArgument {
                        usage: "--days <N>".into(),
                    })?;
                    window = Some(validation::window_days(&value, "--days")?);
                }
                "--help" | "-h" => return Ok(Invocation::Help),
                other => {
                    return Err(BookError::InvalidArgument {
                        field: "argument".into(),
                        reason: format!("unknown argument '{}'", other),
                    })
                }
            }
        }

        let snapshot_path = match snapshot_path {
            Some(p) => p,
            None => env(FILE_ENV)
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(Self::default_snapshot_path),
        };

        let birthday_window_days = match window {
            Some(w) => w,
            None => match env(WINDOW_ENV) {
                Some(v) => validation::window_days(&v, WINDOW_ENV)?,
                None => DEFAULT_WINDOW_DAYS,
            },
        };

        Ok(Invocation::Run(Config {
            snapshot_path,
            birthday_window_days,
        }))
    }
}
