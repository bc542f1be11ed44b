use contact_book::{Config, Invocation};
use tracing_subscriber::EnvFilter;

fn main() {
    // stdout is the conversation with the user; logs go to stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(Invocation::Run(config)) => config,
        Ok(Invocation::Help) => {
            print_usage();
            return;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Use --help for usage information.");
            std::process::exit(1);
        }
    };

    if let Err(e) = contact_book::cli::run(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("contact-book - interactive address book with birthday reminders");
    println!();
    println!("Usage: contact-book [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -f, --file <PATH>   Snapshot file (default: .data/address_book.json, env: CONTACT_BOOK_FILE)");
    println!("  -d, --days <N>      Default window for 'birthdays' (default: 7, env: CONTACT_BOOK_BIRTHDAY_WINDOW)");
    println!("  -h, --help          Show this help");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=debug) for diagnostic output on stderr.");
}
