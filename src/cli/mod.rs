pub mod birthday_commands;
pub mod contact_commands;
pub mod context;

use std::io::{self, BufRead, Write};
use std::path::Path;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::config::Config;
use crate::db::snapshot;
use crate::error::BookResult;
use crate::model::ContactDirectory;
use context::{render_error, CLIContext};

const PROMPT: &str = "Enter a command: ";

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Exit,
}

/// Run the interactive REPL on stdin/stdout.
pub fn run(config: &Config) -> BookResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "Welcome to the assistant bot!")?;

    let book = load_or_init(&config.snapshot_path, &mut out)?;
    let mut ctx = CLIContext::new(book, config);

    let stdin = io::stdin();
    repl_loop(&mut ctx, stdin.lock(), &mut out)
}

/// Loads the snapshot, falling back to an empty directory when it is
/// missing or unreadable.
pub fn load_or_init<W: Write>(path: &Path, out: &mut W) -> BookResult<ContactDirectory> {
    match snapshot::load(path) {
        Ok(Some(book)) => {
            writeln!(out, "Address book loaded: {} contact(s).", book.len())?;
            Ok(book)
        }
        Ok(None) => {
            writeln!(out, "No existing address book found. Creating a new one.")?;
            Ok(ContactDirectory::new())
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "snapshot unreadable, starting empty");
            writeln!(out, "Error loading address book: {}", e)?;
            writeln!(out, "Starting with an empty address book.")?;
            Ok(ContactDirectory::new())
        }
    }
}

/// Reads commands until `close`/`exit` or end of input, then saves.
pub fn repl_loop<R: BufRead, W: Write>(ctx: &mut CLIContext, mut input: R, out: &mut W) -> BookResult<()> {
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        match dispatch(ctx, &line, CLIContext::today()) {
            Reply::Text(text) => writeln!(out, "{}", text)?,
            Reply::Exit => break,
        }
    }

    match snapshot::save(&ctx.book, &ctx.snapshot_path) {
        Ok(()) => writeln!(out, "Address book saved.")?,
        Err(e) => writeln!(out, "Error saving address book: {}", e)?,
    }
    writeln!(out, "Good bye!")?;
    Ok(())
}

/// Executes one line of input against the directory. Every error is
/// rendered into the reply.
pub fn dispatch(ctx: &mut CLIContext, input: &str, as_of: NaiveDate) -> Reply {
    let (command, args) = parse_command(input);
    let command = match command {
        Some(c) => c,
        None => return Reply::Text("Please enter a command.".to_string()),
    };
    debug!(command = %command, args = args.len(), "dispatching");

    let book = &mut ctx.book;
    let result = match command.as_str() {
        "close" | "exit" => return Reply::Exit,
        "hello" => Ok("How can I help you?".to_string()),
        "help" | "?" => Ok(HELP.trim_matches('\n').to_string()),

        "add" => contact_commands::add(book, &args),
        "change" => contact_commands::change(book, &args),
        "phone" => contact_commands::phone(book, &args),
        "all" => contact_commands::all(book),
        "remove-phone" => contact_commands::remove_phone(book, &args),
        "edit-phone" => contact_commands::edit_phone(book, &args),
        "delete" => contact_commands::delete(book, &args),

        "add-birthday" => birthday_commands::add_birthday(book, &args),
        "show-birthday" => birthday_commands::show_birthday(book, &args),
        "birthdays" => birthday_commands::birthdays(book, &args, ctx.window_days, as_of),

        other => Ok(format!("Unknown command: {}. Type 'help' for commands.", other)),
    };

    Reply::Text(result.unwrap_or_else(|e| render_error(&e)))
}

/// Splits input on whitespace. The command word is lowercased; arguments
/// keep their case.
pub fn parse_command(input: &str) -> (Option<String>, Vec<&str>) {
    let mut tokens = input.split_whitespace();
    let command = tokens.next().map(|c| c.to_lowercase());
    (command, tokens.collect())
}

const HELP: &str = r#"
COMMANDS:

  Contacts:
    add <name> <phone>                  Add a contact, or a phone to an existing one
    change <name> <phone>               Replace all phones of a contact
    phone <name>                        Show a contact's phones
    all                                 List all contacts
    remove-phone <name> <phone>         Remove one phone from a contact
    edit-phone <name> <old> <new>       Replace one phone of a contact
    delete <name>                       Delete a contact

  Birthdays:
    add-birthday <name> <DD.MM.YYYY>    Set a contact's birthday
    show-birthday <name>                Show a contact's birthday
    birthdays [days]                    Birthdays in the coming days (weekends move to Monday)

  Other:
    hello                               Greeting
    help                                Show this help
    close / exit                        Save and exit

Phones are exactly 10 digits."#;
