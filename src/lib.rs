//! Contact Assistant - a command-line contact manager with birthday reminders.
//!
//! Contacts hold a name, phone numbers and an optional birthday. The
//! assistant reads one command per line, applies it to the in-memory address
//! book and persists the book between sessions.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: Contact records and the address book
//! - **services**: Upcoming birthday computation
//! - **commands**: Line parsing, command handlers and uniform error replies
//! - **repositories**: Address book persistence
//! - **repl**: The interactive input loop
//! - **config**: Configuration from environment variables
//! - **error**: Error types

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;
pub mod repositories;
pub mod services;

pub use commands::{dispatch, execute_line, parse_input, Command, CommandContext, Outcome};
pub use config::Config;
pub use domain::{Birthday, Name, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError, StorageError};
pub use models::{AddressBook, Record};
pub use repl::Repl;
pub use repositories::{AddressBookRepository, JsonFileRepository};
pub use services::{upcoming_birthdays, upcoming_birthdays_within, UpcomingBirthday};
