//! Contact Assistant - main entry point
//!
//! Reads commands from stdin and answers on stdout. Logs go to stderr.

use anyhow::Result;
use contact_assistant::{Config, JsonFileRepository, Repl};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging (stderr only; stdout is the conversation)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        path = %config.address_book_path.display(),
        window_days = config.birthday_window_days,
        "Configuration loaded"
    );

    let repository = JsonFileRepository::new(&config.address_book_path);
    let repl = Repl::new(&repository, config.birthday_window_days);

    let stdin = io::stdin();
    repl.run(stdin.lock(), io::stdout())?;

    Ok(())
}
