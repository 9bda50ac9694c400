//! Conversions between calendar dates and week numbers.
//!
//! A week is located by a [`WeekStart`] (the weekday opening it) and a
//! [`FirstWeekRule`] (which week of the year counts as week 1). Dates go to
//! week numbers with [`week_of_year`] and week numbers go back to dates with
//! [`start_of_week`]; [`YearWeek`] reads and writes the compact `YYYYWW` form.

mod consts;
mod policy;
mod prelude;
mod token;
mod types;
mod week;

pub use consts::*;
pub use policy::{FirstWeekRule, WeekPolicy, WeekStart};
pub use token::YearWeek;
pub use types::Year;
pub use week::{
    WeekSpec, end_of_week, is_in_next_year_first_week, start_of_week, week_of_year,
    week_of_year_with_last_week_policy, weeks_in_year, year_week_of,
};

/// A plain calendar date.
pub type CivilDate = chrono::NaiveDate;

/// Invalid input to a week conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WeekError {
    /// Week numbers start at 1.
    #[error("Invalid week number: {0} (must be at least 1)")]
    InvalidWeek(i32),

    /// Year outside `1..=MAX_YEAR`.
    #[error("Invalid year: {0} (must be 1-{max})", max = MAX_YEAR)]
    InvalidYear(i32),

    /// Malformed year-week token or policy name.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// The requested week lies outside the representable calendar.
    #[error("Week {week} of {year} is outside the supported date range")]
    OutOfRange { year: i32, week: i32 },
}
