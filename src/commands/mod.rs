//! Command layer: parsing a line and routing it to a handler.

pub mod handlers;
pub mod parser;

pub use handlers::{input_error, Handler};
pub use parser::{parse_input, Command};

use crate::models::AddressBook;
use crate::services::DEFAULT_WINDOW_DAYS;
use chrono::{Local, NaiveDate};
use tracing::debug;

/// Per-command inputs that do not come from the typed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandContext {
    /// Date used for birthday validation and reminders
    pub today: NaiveDate,

    /// Days after `today` covered by `birthdays`
    pub birthday_window_days: u32,
}

impl CommandContext {
    pub fn new(today: NaiveDate, birthday_window_days: u32) -> Self {
        Self {
            today,
            birthday_window_days,
        }
    }

    /// Context for the current local date.
    pub fn for_today(birthday_window_days: u32) -> Self {
        Self::new(Local::now().date_naive(), birthday_window_days)
    }
}

impl Default for CommandContext {
    fn default() -> Self {
        Self::for_today(DEFAULT_WINDOW_DAYS)
    }
}

/// What the input loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print this reply and read the next line
    Reply(String),
    /// Persist the book and stop
    Exit,
}

/// Run one parsed command against the book.
pub fn dispatch(
    command: &Command,
    args: &[String],
    book: &mut AddressBook,
    ctx: &CommandContext,
) -> Outcome {
    debug!(command = ?command, args = args.len(), "Dispatching command");

    let handler: Handler = match command {
        Command::Exit => return Outcome::Exit,
        Command::Hello => return Outcome::Reply("How can I help you?".to_string()),
        Command::Unknown(_) => return Outcome::Reply("Invalid command.".to_string()),
        Command::Add => handlers::add_contact,
        Command::Change => handlers::change_contact,
        Command::Phone => handlers::show_phones,
        Command::All => handlers::show_all,
        Command::AddBirthday => handlers::add_birthday,
        Command::ShowBirthday => handlers::show_birthday,
        Command::Birthdays => handlers::birthdays,
    };

    Outcome::Reply(input_error(|| handler(args, book, ctx)))
}

/// Parse and run one input line.
pub fn execute_line(line: &str, book: &mut AddressBook, ctx: &CommandContext) -> Outcome {
    let (command, args) = parse_input(line);
    dispatch(&command, &args, book, ctx)
}
