//! Upcoming birthday computation.
//!
//! A contact's congratulation date is its next birthday within the window,
//! moved to the following Monday when it lands on a weekend.

use crate::models::AddressBook;
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Default reminder window, in days after today.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// A contact to congratulate and the date to do it on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,

    /// Formatted `YYYY-MM-DD`
    pub congratulation_date: String,
}

/// Birthdays falling within the next seven days, in address book order.
pub fn upcoming_birthdays(book: &AddressBook, today: NaiveDate) -> Vec<UpcomingBirthday> {
    upcoming_birthdays_within(book, today, DEFAULT_WINDOW_DAYS)
}

/// Birthdays falling in `today..=today + days`, in address book order.
///
/// The window is tested on the birthday itself; the weekend shift is applied
/// afterwards and may push the congratulation date past the window.
pub fn upcoming_birthdays_within(
    book: &AddressBook,
    today: NaiveDate,
    days: u32,
) -> Vec<UpcomingBirthday> {
    let end = today + Duration::days(i64::from(days));

    book.values()
        .filter_map(|record| {
            let birthday = record.birthday()?.date();
            let mut candidate = anniversary_in(birthday, today.year());
            if candidate < today {
                candidate = anniversary_in(birthday, today.year() + 1);
            }

            if candidate > end {
                return None;
            }

            let congratulation = shift_off_weekend(candidate);
            tracing::trace!(
                name = %record.name(),
                birthday = %candidate,
                congratulation = %congratulation,
                "Upcoming birthday"
            );

            Some(UpcomingBirthday {
                name: record.name().as_str().to_string(),
                congratulation_date: congratulation.format("%Y-%m-%d").to_string(),
            })
        })
        .collect()
}

/// The birthday's month and day in `year`; Feb 29 becomes Feb 28 in common years.
pub fn anniversary_in(birthday: NaiveDate, year: i32) -> NaiveDate {
    birthday
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, birthday.month(), 28))
        .unwrap_or(birthday)
}

/// Saturday and Sunday move to the next Monday; weekdays are unchanged.
pub fn shift_off_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Birthday, Name};
    use crate::models::Record;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn book_with(entries: &[(&str, NaiveDate)]) -> AddressBook {
        entries
            .iter()
            .map(|(name, born)| {
                let birthday =
                    Birthday::parse_on(&born.format("%Y-%m-%d").to_string(), day(2100, 1, 1))
                        .unwrap();
                Record::new(Name::new(*name).unwrap()).with_birthday(birthday)
            })
            .collect()
    }

    fn upcoming(name: &str, date: &str) -> UpcomingBirthday {
        UpcomingBirthday {
            name: name.to_string(),
            congratulation_date: date.to_string(),
        }
    }

    // 2024-06-05 is a Wednesday.
    const TODAY: (i32, u32, u32) = (2024, 6, 5);

    fn today() -> NaiveDate {
        day(TODAY.0, TODAY.1, TODAY.2)
    }

    #[test]
    fn test_birthday_today_is_included() {
        let book = book_with(&[("Alice", day(1990, 6, 5))]);
        assert_eq!(
            upcoming_birthdays(&book, today()),
            vec![upcoming("Alice", "2024-06-05")]
        );
    }

    #[test]
    fn test_window_is_inclusive_of_seventh_day() {
        // 2024-06-12 is a Wednesday.
        let book = book_with(&[("Alice", day(1990, 6, 12)), ("Bob", day(1990, 6, 13))]);
        assert_eq!(
            upcoming_birthdays(&book, today()),
            vec![upcoming("Alice", "2024-06-12")]
        );
    }

    #[test]
    fn test_past_birthday_this_year_is_excluded() {
        let book = book_with(&[("Alice", day(1990, 6, 4))]);
        assert!(upcoming_birthdays(&book, today()).is_empty());
    }

    #[test]
    fn test_saturday_rolls_to_monday() {
        // 2024-06-08 is a Saturday, two days after Thursday 2024-06-06.
        let book = book_with(&[("Alice", day(1985, 6, 8))]);
        assert_eq!(
            upcoming_birthdays(&book, day(2024, 6, 6)),
            vec![upcoming("Alice", "2024-06-10")]
        );
    }

    #[test]
    fn test_sunday_rolls_to_monday() {
        let book = book_with(&[("Alice", day(1985, 6, 9))]);
        assert_eq!(
            upcoming_birthdays(&book, today()),
            vec![upcoming("Alice", "2024-06-10")]
        );
    }

    #[test]
    fn test_weekend_shift_may_leave_window() {
        // Window ends Sunday 2024-06-16; congratulation lands on Monday 06-17.
        let book = book_with(&[("Alice", day(1985, 6, 16))]);
        assert_eq!(
            upcoming_birthdays(&book, day(2024, 6, 9)),
            vec![upcoming("Alice", "2024-06-17")]
        );
    }

    #[test]
    fn test_year_rollover() {
        // 2024-12-29 is a Sunday; 2025-01-02 is a Thursday.
        let book = book_with(&[("Alice", day(1990, 1, 2)), ("Bob", day(1990, 12, 28))]);
        assert_eq!(
            upcoming_birthdays(&book, day(2024, 12, 29)),
            vec![upcoming("Alice", "2025-01-02")]
        );
    }

    #[test]
    fn test_keeps_book_order() {
        let book = book_with(&[
            ("Late", day(1990, 6, 11)),
            ("NoMatch", day(1990, 1, 1)),
            ("Early", day(1990, 6, 6)),
        ]);
        let names: Vec<String> = upcoming_birthdays(&book, today())
            .into_iter()
            .map(|u| u.name)
            .collect();
        assert_eq!(names, ["Late", "Early"]);
    }

    #[test]
    fn test_records_without_birthday_are_skipped() {
        let mut book = book_with(&[("Alice", day(1990, 6, 6))]);
        book.add_record(Record::new(Name::new("Bob").unwrap()));
        assert_eq!(upcoming_birthdays(&book, today()).len(), 1);
    }

    #[test]
    fn test_custom_window() {
        let book = book_with(&[("Alice", day(1990, 6, 20))]);
        assert!(upcoming_birthdays(&book, today()).is_empty());
        assert_eq!(upcoming_birthdays_within(&book, today(), 30).len(), 1);
        assert!(upcoming_birthdays_within(&book, today(), 0).is_empty());
    }

    #[test]
    fn test_leap_day_in_common_year_becomes_feb_28() {
        assert_eq!(anniversary_in(day(2000, 2, 29), 2023), day(2023, 2, 28));
        assert_eq!(anniversary_in(day(2000, 2, 29), 2024), day(2024, 2, 29));

        // 2023-02-28 is a Tuesday.
        let book = book_with(&[("Leap", day(2000, 2, 29))]);
        assert_eq!(
            upcoming_birthdays(&book, day(2023, 2, 25)),
            vec![upcoming("Leap", "2023-02-28")]
        );
    }

    #[test]
    fn test_shift_off_weekend() {
        assert_eq!(shift_off_weekend(day(2024, 6, 7)), day(2024, 6, 7));
        assert_eq!(shift_off_weekend(day(2024, 6, 8)), day(2024, 6, 10));
        assert_eq!(shift_off_weekend(day(2024, 6, 9)), day(2024, 6, 10));
        assert_eq!(shift_off_weekend(day(2024, 6, 10)), day(2024, 6, 10));
    }
}
