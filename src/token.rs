use std::str::FromStr;

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

use crate::{
    CivilDate, LONG_TOKEN_LEN, MAX_TOKEN_WEEK, SHORT_TOKEN_LEN, WEEK_DIGITS, WeekError, WeekPolicy,
    WeekSpec, Year, prelude::*, year_week_of,
};

/// A year and week number written as `YYYYWW` (or `YYWW`, completed with a
/// reference century).
///
/// The week number is limited to its two token digits (`0..=MAX_TOKEN_WEEK`);
/// resolving a week below 1 to a date fails in [`crate::start_of_week`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}{:02}", "year.get()", week)]
pub struct YearWeek {
    year: Year,
    week: i32,
}

impl YearWeek {
    /// Creates a token from a year and a week number.
    ///
    /// # Errors
    /// Returns `WeekError::InvalidWeek` if the week does not fit the token's
    /// two digits.
    pub fn new(year: Year, week: i32) -> Result<Self, WeekError> {
        if !(0..=MAX_TOKEN_WEEK).contains(&week) {
            return Err(WeekError::InvalidWeek(week));
        }
        Ok(Self { year, week })
    }

    /// Returns the year
    pub const fn year(&self) -> Year {
        self.year
    }

    /// Returns the week number as written
    pub const fn week(&self) -> i32 {
        self.week
    }

    /// Parses a token, completing a two-digit year with the century of
    /// `reference`.
    ///
    /// # Errors
    /// Returns `WeekError::InvalidToken` if the token is not 4 or 6 ASCII
    /// digits, and `WeekError::InvalidYear` if the year digits are 0.
    pub fn parse_with_reference(token: &str, reference: Year) -> Result<Self, WeekError> {
        let trimmed = token.trim();
        if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(WeekError::InvalidToken(format!("non-digit characters in {token:?}")));
        }

        let split = match trimmed.len() {
            SHORT_TOKEN_LEN | LONG_TOKEN_LEN => trimmed.len() - WEEK_DIGITS,
            len => {
                return Err(WeekError::InvalidToken(format!(
                    "expected {SHORT_TOKEN_LEN} or {LONG_TOKEN_LEN} digits, found {len} in {token:?}"
                )));
            },
        };
        let (year_part, week_part) = trimmed.split_at(split);

        let year = if year_part.len() == WEEK_DIGITS {
            Year::from_two_digits(Self::parse_digits(year_part)?, reference)?
        } else {
            let year = year_part
                .parse::<u16>()
                .map_err(|_| WeekError::InvalidToken(token.to_owned()))?;
            Year::new(year)?
        };
        let week = i32::from(Self::parse_digits(week_part)?);

        Self::new(year, week)
    }

    fn parse_digits(s: &str) -> Result<u8, WeekError> {
        s.parse::<u8>()
            .map_err(|_| WeekError::InvalidToken(s.to_owned()))
    }

    /// Year and week holding `date`, the inverse of [`Self::start_date`].
    ///
    /// # Errors
    /// Returns `WeekError::InvalidYear` if the week belongs to a year outside
    /// `1..=MAX_YEAR` (the first days of year 1 or the last days of 9999).
    pub fn from_date(date: CivilDate, policy: WeekPolicy, last_full_week: bool) -> Result<Self, WeekError> {
        let (year, week) = year_week_of(date, policy.start, policy.rule, last_full_week);
        let week = i32::try_from(week).map_err(|_| WeekError::InvalidWeek(i32::MAX))?;
        Self::new(Year::try_from(year)?, week)
    }

    /// The week request this token describes under `policy`.
    pub fn to_spec(self, policy: WeekPolicy, last_year_fallback: bool) -> WeekSpec {
        WeekSpec::with_policy(i32::from(self.year), self.week, policy, last_year_fallback)
    }

    /// First day of the week under `policy`.
    ///
    /// # Errors
    /// Same as [`crate::start_of_week`].
    pub fn start_date(self, policy: WeekPolicy, last_year_fallback: bool) -> Result<CivilDate, WeekError> {
        self.to_spec(policy, last_year_fallback).start_date()
    }
}

impl FromStr for YearWeek {
    type Err = WeekError;

    /// Parses a token; two-digit years take the century of the local
    /// clock's current year.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let reference = Year::try_from(Local::now().year())?;
        Self::parse_with_reference(s, reference)
    }
}

impl Serialize for YearWeek {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for YearWeek {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
