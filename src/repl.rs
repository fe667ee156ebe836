//! Interactive input loop.
//!
//! The loop owns the address book for the whole session: it loads it from the
//! repository, feeds every line to the command layer and saves it once when
//! the user leaves with `close`/`exit` or the input ends.

use crate::commands::{execute_line, CommandContext, Outcome};
use crate::models::AddressBook;
use crate::repositories::AddressBookRepository;
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use std::io::{self, BufRead, Write};
use tracing::{error, info, warn};

pub const GREETING: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const FAREWELL: &str = "Good bye!";

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Line-oriented session over any reader and writer.
pub struct Repl<'a, S: AddressBookRepository + ?Sized> {
    repository: &'a S,
    birthday_window_days: u32,
    clock: fn() -> NaiveDate,
}

impl<'a, S: AddressBookRepository + ?Sized> Repl<'a, S> {
    pub fn new(repository: &'a S, birthday_window_days: u32) -> Self {
        Self {
            repository,
            birthday_window_days,
            clock: local_today,
        }
    }

    /// Replace the source of "today" (tests pin the date).
    pub fn with_clock(mut self, clock: fn() -> NaiveDate) -> Self {
        self.clock = clock;
        self
    }

    /// Run until `close`/`exit` or end of input, then save the book.
    ///
    /// The book is saved even when reading input or writing replies fails;
    /// that failure is returned after the save. Returns the book as it was
    /// saved.
    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> Result<AddressBook> {
        let mut book = self
            .repository
            .load()
            .context("Failed to load address book")?;
        info!(records = book.len(), "Session started");

        let session = self.converse(input, &mut output, &mut book);
        if let Err(e) = &session {
            error!(error = %e, "Input loop failed, saving and exiting");
        }

        self.repository
            .save(&book)
            .context("Failed to save address book")?;
        session.context("Input loop failed")?;

        writeln!(output, "{}", FAREWELL)?;
        info!(records = book.len(), "Session finished");

        Ok(book)
    }

    /// Greet, then answer lines until `close`/`exit` or end of input.
    ///
    /// Lines that are not valid UTF-8 are decoded lossily and handled like
    /// any other line.
    fn converse<R: BufRead, W: Write>(
        &self,
        mut input: R,
        output: &mut W,
        book: &mut AddressBook,
    ) -> io::Result<()> {
        writeln!(output, "{}", GREETING)?;

        let mut buf = Vec::new();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                // Keep the prompt line terminated on end of input.
                writeln!(output)?;
                warn!("Input closed, saving and exiting");
                return Ok(());
            }

            let line = String::from_utf8_lossy(&buf);
            let ctx = CommandContext::new((self.clock)(), self.birthday_window_days);
            match execute_line(&line, book, &ctx) {
                Outcome::Reply(reply) => writeln!(output, "{}", reply)?,
                Outcome::Exit => return Ok(()),
            }
        }
    }
}
