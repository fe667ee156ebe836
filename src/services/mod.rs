//! Application services.
//!
//! Services hold the computations that read across the whole address book.

pub mod birthday_scheduler;

pub use birthday_scheduler::{
    upcoming_birthdays, upcoming_birthdays_within, UpcomingBirthday, DEFAULT_WINDOW_DAYS,
};
