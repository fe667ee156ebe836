//! Command handlers.
//!
//! Each handler maps pre-split arguments and the address book to a reply.
//! Handlers return `CommandResult`; [`input_error`] turns every outcome into
//! the single line shown to the user.

use super::CommandContext;
use crate::domain::Name;
use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record};
use crate::services::upcoming_birthdays_within;
use once_cell::sync::Lazy;
use std::any::Any;
use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, error};

/// Signature shared by every handler.
pub type Handler = fn(&[String], &mut AddressBook, &CommandContext) -> CommandResult<String>;

pub const NOT_ENOUGH_ARGUMENTS: &str = "Error: not enough input arguments";
pub const WRONG_VALUE_FORMAT: &str = "Error: wrong value format";
pub const CONTACT_NOT_FOUND: &str = "Contact not found.";

thread_local! {
    static IN_HANDLER: Cell<bool> = const { Cell::new(false) };
}

/// Panics inside a handler go to the log; other panics reach the previous hook.
static HANDLER_PANIC_HOOK: Lazy<()> = Lazy::new(|| {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        if IN_HANDLER.with(Cell::get) {
            error!(panic = %info, "Command handler panicked");
        } else {
            previous(info);
        }
    }));
});

/// Run a handler and convert its result, error or panic into a reply.
pub fn input_error<F>(handler: F) -> String
where
    F: FnOnce() -> CommandResult<String>,
{
    Lazy::force(&HANDLER_PANIC_HOOK);

    IN_HANDLER.with(|flag| flag.set(true));
    let outcome = panic::catch_unwind(AssertUnwindSafe(handler));
    IN_HANDLER.with(|flag| flag.set(false));

    match outcome {
        Ok(Ok(reply)) => reply,
        Ok(Err(CommandError::NotEnoughArguments)) => NOT_ENOUGH_ARGUMENTS.to_string(),
        Ok(Err(CommandError::Validation(e))) => {
            debug!(error = %e, "Rejected command input");
            WRONG_VALUE_FORMAT.to_string()
        }
        Ok(Err(CommandError::Unexpected(message))) => format!("Unexpected error: {}", message),
        Err(payload) => format!("Unexpected error: {}", panic_message(&*payload)),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "unknown panic"
    }
}

/// Positional argument, or `NotEnoughArguments` when the line is too short.
fn arg(args: &[String], index: usize) -> CommandResult<&str> {
    args.get(index)
        .map(String::as_str)
        .ok_or(CommandError::NotEnoughArguments)
}

/// `add <name> <phone>`: create the contact if needed, then append the phone.
pub fn add_contact(
    args: &[String],
    book: &mut AddressBook,
    _ctx: &CommandContext,
) -> CommandResult<String> {
    let name = arg(args, 0)?;
    let phone = arg(args, 1)?;

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        return Ok("Contact updated.".to_string());
    }

    let mut record = Record::new(Name::new(name)?);
    record.add_phone(phone)?;
    book.add_record(record);
    Ok("Contact added.".to_string())
}

/// `change <name> <old phone> <new phone>`
pub fn change_contact(
    args: &[String],
    book: &mut AddressBook,
    _ctx: &CommandContext,
) -> CommandResult<String> {
    let name = arg(args, 0)?;
    let old_phone = arg(args, 1)?;
    let new_phone = arg(args, 2)?;

    match book.find_mut(name) {
        Some(record) => {
            record.edit_phone(old_phone, new_phone)?;
            Ok("Phone number updated.".to_string())
        }
        None => Ok(CONTACT_NOT_FOUND.to_string()),
    }
}

/// `phone <name>`
pub fn show_phones(
    args: &[String],
    book: &mut AddressBook,
    _ctx: &CommandContext,
) -> CommandResult<String> {
    let name = arg(args, 0)?;

    Ok(match book.find(name) {
        Some(record) => {
            let phones = record
                .phones()
                .iter()
                .map(|p| p.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            format!("Phones: {}", phones)
        }
        None => CONTACT_NOT_FOUND.to_string(),
    })
}

/// `all`
pub fn show_all(
    _args: &[String],
    book: &mut AddressBook,
    _ctx: &CommandContext,
) -> CommandResult<String> {
    if book.is_empty() {
        return Ok("Address book is empty.".to_string());
    }

    Ok(book
        .values()
        .map(Record::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// `add-birthday <name> <YYYY-MM-DD>`
pub fn add_birthday(
    args: &[String],
    book: &mut AddressBook,
    ctx: &CommandContext,
) -> CommandResult<String> {
    let name = arg(args, 0)?;
    let date = arg(args, 1)?;

    match book.find_mut(name) {
        Some(record) => {
            record.set_birthday_on(date, ctx.today)?;
            Ok("Birthday added.".to_string())
        }
        None => Ok(CONTACT_NOT_FOUND.to_string()),
    }
}

/// `show-birthday <name>`
pub fn show_birthday(
    args: &[String],
    book: &mut AddressBook,
    _ctx: &CommandContext,
) -> CommandResult<String> {
    let name = arg(args, 0)?;

    Ok(match book.find(name).and_then(Record::birthday) {
        Some(birthday) => format!("{}'s birthday is on {}", name, birthday.display_dotted()),
        None => "Birthday not found for this contact.".to_string(),
    })
}

/// `birthdays`
pub fn birthdays(
    _args: &[String],
    book: &mut AddressBook,
    ctx: &CommandContext,
) -> CommandResult<String> {
    let upcoming = upcoming_birthdays_within(book, ctx.today, ctx.birthday_window_days);
    if upcoming.is_empty() {
        return Ok(format!(
            "No birthdays in the next {} days.",
            ctx.birthday_window_days
        ));
    }

    Ok(upcoming
        .iter()
        .map(|u| format!("{} - {}", u.name, u.congratulation_date))
        .collect::<Vec<_>>()
        .join("\n"))
}
