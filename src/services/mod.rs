//! Application service layer.
//!
//! Services hold the date-dependent logic: the upcoming birthday report
//! and the clock that tells it what "today" is.

pub mod birthdays;
pub mod clock;

pub use birthdays::{upcoming_birthdays, UpcomingBirthday, UPCOMING_WINDOW_DAYS};
pub use clock::{Clock, FixedClock, SystemClock};
