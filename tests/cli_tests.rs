use std::io::Cursor;
use std::path::Path;

use chrono::NaiveDate;
use contact_book::cli::context::{render_error, CLIContext};
use contact_book::cli::{self, dispatch, parse_command, Reply};
use contact_book::db::snapshot;
use contact_book::model::ContactDirectory;
use contact_book::{BookError, Config};

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
}

fn context(path: &Path) -> CLIContext {
    let config = Config {
        snapshot_path: path.to_path_buf(),
        birthday_window_days: 7,
    };
    CLIContext::new(ContactDirectory::new(), &config)
}

fn say(ctx: &mut CLIContext, input: &str) -> String {
    match dispatch(ctx, input, monday()) {
        Reply::Text(text) => text,
        Reply::Exit => panic!("unexpected exit for {input:?}"),
    }
}

// ==========================================================================
// PARSING
// ==========================================================================

#[test]
fn parse_command_lowercases_only_the_command() {
    let (command, args) = parse_command("  ADD John   1234567890 ");
    assert_eq!(command.as_deref(), Some("add"));
    assert_eq!(args, vec!["John", "1234567890"]);
}

#[test]
fn parse_command_empty_input() {
    let (command, args) = parse_command("   \n");
    assert!(command.is_none());
    assert!(args.is_empty());
}

// ==========================================================================
// DISPATCH
// ==========================================================================

#[test]
fn hello_and_empty_input() {
    let dir = tempfile::tempdir().unwrap();
    let mut ctx = context(&dir.path().join("book.json"));
    assert_eq!(say(&mut ctx, "hello"), "How can I help you?");
    assert_eq!(say(&mut ctx, ""), "Please enter a command.");
}

#[test]
fn unknown_command_keeps_going() {
    let dir = tempfile::tempdir().unwrap();
    let mut ctx = context(&dir.path().join("book.json"));
    assert_eq!(
        say(&mut ctx, "fly away"),
        "Unknown command: fly. Type 'help' for commands."
    );
}

#[test]
fn add_change_phone_flow() {
    let dir = tempfile::tempdir().unwrap();
    let mut ctx = context(&dir.path().join("book.json"));

    assert_eq!(say(&mut ctx, "add John 1234567890"), "Contact added.");
    assert_eq!(say(&mut ctx, "add John 5555555555"), "Contact updated.");
    assert_eq!(
        say(&mut ctx, "phone John"),
        "Contact name: John, phones: 1234567890; 5555555555"
    );
    assert_eq!(say(&mut ctx, "change John 0000000000"), "Contact John updated.");
    assert_eq!(say(&mut ctx, "phone John"), "Contact name: John, phones: 0000000000");
}

#[test]
fn all_lists_every_contact_or_reports_empty() {
    let dir = tempfile::tempdir().unwrap();
    let mut ctx = context(&dir.path().join("book.json"));

    assert_eq!(say(&mut ctx, "all"), "No contacts found.");
    say(&mut ctx, "add John 1234567890");
    say(&mut ctx, "add Jane 9876543210");
    assert_eq!(
        say(&mut ctx, "all"),
        "Contact name: John, phones: 1234567890\nContact name: Jane, phones: 9876543210"
    );
}

#[test]
fn errors_are_rendered_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let mut ctx = context(&dir.path().join("book.json"));

    assert!(say(&mut ctx, "add John").starts_with("Error: Missing argument"));
    assert!(say(&mut ctx, "add John 12").starts_with("Error: Invalid phone number"));
    assert!(say(&mut ctx, "phone Nobody").starts_with("Error: Contact not found"));
    assert!(say(&mut ctx, "add-birthday").starts_with("Error: Missing argument"));

    say(&mut ctx, "add John 1234567890");
    assert!(say(&mut ctx, "add-birthday John 1990-01-01").starts_with("Error: Invalid date"));
    assert!(say(&mut ctx, "birthdays soon").starts_with("Error: Invalid days"));
    assert_eq!(say(&mut ctx, "hello"), "How can I help you?");
}

#[test]
fn failed_add_leaves_directory_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let mut ctx = context(&dir.path().join("book.json"));
    say(&mut ctx, "add John 12");
    assert!(ctx.book.is_empty());
}

#[test]
fn phone_edit_remove_and_delete_commands() {
    let dir = tempfile::tempdir().unwrap();
    let mut ctx = context(&dir.path().join("book.json"));
    say(&mut ctx, "add John 1234567890");
    say(&mut ctx, "add John 5555555555");

    assert_eq!(
        say(&mut ctx, "edit-phone John 5555555555 6666666666"),
        "Phone for John updated."
    );
    assert_eq!(
        say(&mut ctx, "remove-phone John 1234567890"),
        "Phone 1234567890 removed from John."
    );
    assert_eq!(say(&mut ctx, "phone John"), "Contact name: John, phones: 6666666666");
    assert_eq!(say(&mut ctx, "delete John"), "Contact John deleted.");
    assert!(say(&mut ctx, "delete John").starts_with("Error: Contact not found"));
}

#[test]
fn birthday_commands() {
    let dir = tempfile::tempdir().unwrap();
    let mut ctx = context(&dir.path().join("book.json"));
    say(&mut ctx, "add Alice 1234567890");
    say(&mut ctx, "add Bob 5555555555");

    assert_eq!(
        say(&mut ctx, "show-birthday Alice"),
        "Birthday not found for this contact."
    );
    assert_eq!(say(&mut ctx, "add-birthday Alice 15.06.1990"), "Birthday added.");
    assert_eq!(say(&mut ctx, "show-birthday Alice"), "Birthday for Alice: 15.06.1990");
    say(&mut ctx, "add-birthday Bob 20.06.1990");

    assert_eq!(
        say(&mut ctx, "birthdays"),
        "Upcoming birthdays:\nAlice: 17.06.2024"
    );
    assert_eq!(
        say(&mut ctx, "birthdays 10"),
        "Upcoming birthdays:\nAlice: 17.06.2024\nBob: 20.06.2024"
    );
    assert_eq!(say(&mut ctx, "birthdays 1"), "No upcoming birthdays.");
}

#[test]
fn close_and_exit_end_the_session() {
    let dir = tempfile::tempdir().unwrap();
    let mut ctx = context(&dir.path().join("book.json"));
    assert_eq!(dispatch(&mut ctx, "close", monday()), Reply::Exit);
    assert_eq!(dispatch(&mut ctx, "EXIT", monday()), Reply::Exit);
}

#[test]
fn render_error_formats() {
    assert_eq!(render_error(&BookError::EmptyDirectory), "No contacts found.");
    assert_eq!(
        render_error(&BookError::contact_not_found("Ann")),
        "Error: Contact not found: Ann"
    );
}

// ==========================================================================
// REPL
// ==========================================================================

#[test]
fn repl_saves_on_exit() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.json");
    let mut ctx = context(&path);
    let input = Cursor::new("add John 1234567890\nexit\nadd Jane 9876543210\n");
    let mut out = Vec::new();

    cli::repl_loop(&mut ctx, input, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Contact added."));
    assert!(text.contains("Address book saved."));
    assert!(text.ends_with("Good bye!\n"));

    let saved = snapshot::load(&path).unwrap().unwrap();
    assert!(saved.find("John").is_some());
    assert!(saved.find("Jane").is_none());
}

#[test]
fn repl_saves_on_end_of_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.json");
    let mut ctx = context(&path);
    let mut out = Vec::new();

    cli::repl_loop(&mut ctx, Cursor::new("add John 1234567890\n"), &mut out).unwrap();

    assert!(snapshot::load(&path).unwrap().unwrap().find("John").is_some());
}

#[test]
fn load_or_init_reports_missing_and_corrupt_snapshots() {
    let dir = tempfile::tempdir().unwrap();

    let mut out = Vec::new();
    let book = cli::load_or_init(&dir.path().join("missing.json"), &mut out).unwrap();
    assert!(book.is_empty());
    assert!(String::from_utf8(out)
        .unwrap()
        .contains("No existing address book found. Creating a new one."));

    let corrupt = dir.path().join("corrupt.json");
    std::fs::write(&corrupt, "{{{").unwrap();
    let mut out = Vec::new();
    let book = cli::load_or_init(&corrupt, &mut out).unwrap();
    assert!(book.is_empty());
    assert!(String::from_utf8(out).unwrap().contains("Error loading address book"));
}

#[test]
fn load_or_init_reads_existing_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.json");
    let mut ctx = context(&path);
    say(&mut ctx, "add John 1234567890");
    snapshot::save(&ctx.book, &path).unwrap();

    let mut out = Vec::new();
    let book = cli::load_or_init(&path, &mut out).unwrap();
    assert_eq!(book.len(), 1);
    assert!(String::from_utf8(out).unwrap().contains("Address book loaded: 1 contact(s)."));
}

#[test]
fn huge_birthday_window_does_not_end_the_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.json");
    let mut ctx = context(&path);
    let input = Cursor::new(
        "add Alice 1234567890\nadd-birthday Alice 15.06.1990\nbirthdays 4294967295\nexit\n",
    );
    let mut out = Vec::new();

    cli::repl_loop(&mut ctx, input, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Address book saved."));
    assert!(snapshot::load(&path).unwrap().unwrap().find("Alice").is_some());
}

#[test]
fn huge_birthday_window_lists_rest_of_year() {
    let dir = tempfile::tempdir().unwrap();
    let mut ctx = context(&dir.path().join("book.json"));
    say(&mut ctx, "add Alice 1234567890");
    say(&mut ctx, "add-birthday Alice 15.06.1990");
    assert_eq!(
        say(&mut ctx, "birthdays 4294967295"),
        "Upcoming birthdays:\nAlice: 17.06.2024"
    );
}
