//! Upcoming birthday report over a whole address book.

use chrono::NaiveDate;
use contact_book::{AddressBook, ContactRecord, UpcomingBirthday};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn book_with_birthdays(entries: &[(&str, Option<&str>)]) -> AddressBook {
    entries
        .iter()
        .map(|(name, birthday)| {
            let mut record = ContactRecord::new(*name).unwrap();
            if let Some(birthday) = birthday {
                record.add_birthday(*birthday).unwrap();
            }
            record
        })
        .collect()
}

#[test]
fn test_upcoming_birthdays_reference_week() {
    let book = book_with_birthdays(&[
        ("Soon", Some("12.06.1990")),
        ("NewYear", Some("01.01.1990")),
        ("NineDays", Some("19.06.1990")),
        ("Today", Some("10.06.1985")),
        ("NoBirthday", None),
    ]);

    let report = book.upcoming_birthdays(ymd(2024, 6, 10));
    assert_eq!(
        report,
        vec![
            UpcomingBirthday {
                name: "Soon".to_string(),
                birthday: "12.06.2024".to_string(),
            },
            UpcomingBirthday {
                name: "Today".to_string(),
                birthday: "10.06.2024".to_string(),
            },
        ]
    );
}

#[test]
fn test_seven_days_out_is_included_eight_is_not() {
    let book = book_with_birthdays(&[
        ("Seven", Some("17.06.1990")),
        ("Eight", Some("18.06.1990")),
    ]);

    let names: Vec<String> = book
        .upcoming_birthdays(ymd(2024, 6, 10))
        .into_iter()
        .map(|b| b.name)
        .collect();
    assert_eq!(names, ["Seven"]);
}

#[test]
fn test_report_follows_insertion_order_not_date() {
    let book = book_with_birthdays(&[
        ("Later", Some("16.06.1970")),
        ("Sooner", Some("11.06.1980")),
    ]);

    let names: Vec<String> = book
        .upcoming_birthdays(ymd(2024, 6, 10))
        .into_iter()
        .map(|b| b.name)
        .collect();
    assert_eq!(names, ["Later", "Sooner"]);
}

#[test]
fn test_leap_day_birthday() {
    let book = book_with_birthdays(&[("Leap", Some("29.02.2004"))]);

    let leap_year = book.upcoming_birthdays(ymd(2024, 2, 27));
    assert_eq!(leap_year[0].birthday, "29.02.2024");

    let common_year = book.upcoming_birthdays(ymd(2023, 2, 27));
    assert_eq!(common_year[0].birthday, "28.02.2023");

    // 28.02 is already past on 01.03 of a common year.
    assert!(book.upcoming_birthdays(ymd(2023, 3, 1)).is_empty());
}
