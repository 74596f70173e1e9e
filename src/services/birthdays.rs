//! Upcoming birthday report.
//!
//! Finds the contacts whose birthday, moved into the current year, lands
//! between today and a week from today.

use crate::domain::birthday::BIRTHDAY_FORMAT;
use crate::models::ContactRecord;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Days ahead of today, inclusive, that count as "upcoming".
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

/// One entry of the upcoming birthday report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// This year's occurrence, as `DD.MM.YYYY`
    pub birthday: String,
}

/// Report every record whose birthday falls in `today ..= today + 7 days`.
///
/// The birthday's day and month are moved into `today`'s year. Birthdays
/// already past this year are not reported, even when next year's
/// occurrence is within a week (late December looking into January).
///
/// The reported date is the occurrence itself. A Saturday or Sunday
/// occurrence is NOT shifted to the following Monday: no business-day
/// rule is applied.
///
/// A 29 February birthday in a non-leap year is treated as 28 February.
///
/// Output follows the iteration order of `records`.
pub fn upcoming_birthdays<'a, I>(records: I, today: NaiveDate) -> Vec<UpcomingBirthday>
where
    I: IntoIterator<Item = &'a ContactRecord>,
{
    records
        .into_iter()
        .filter_map(|record| {
            let birthday = record.birthday()?;
            let occurrence = occurrence_in_year(birthday.date(), today.year())?;
            let delta = (occurrence - today).num_days();

            (0..=UPCOMING_WINDOW_DAYS).contains(&delta).then(|| UpcomingBirthday {
                name: record.name().as_str().to_string(),
                birthday: occurrence.format(BIRTHDAY_FORMAT).to_string(),
            })
        })
        .collect()
}

/// The anniversary of `date` in `year`, clamping 29 February to the 28th.
fn occurrence_in_year(date: NaiveDate, year: i32) -> Option<NaiveDate> {
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, date.month(), 28))
}
