use crate::consts::{DECEMBER, LAST_DAY_OF_DECEMBER, MAX_YEAR, YEARS_PER_CENTURY};
use crate::{CivilDate, WeekError};
use chrono::NaiveDate;
use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `WeekError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, WeekError> {
        let non_zero = NonZeroU16::new(value).ok_or(WeekError::InvalidYear(i32::from(value)))?;
        if value > MAX_YEAR {
            return Err(WeekError::InvalidYear(i32::from(value)));
        }
        Ok(Self(non_zero))
    }

    /// Completes a two-digit year with the century of `reference`.
    ///
    /// `34` against a 2026 reference is 2034; against 1999 it is 1934.
    ///
    /// # Errors
    /// Returns `WeekError::InvalidYear` if the completed year is 0, which
    /// happens for `00` in the first century.
    pub fn from_two_digits(two_digits: u8, reference: Self) -> Result<Self, WeekError> {
        let century = reference.get() / YEARS_PER_CENTURY * YEARS_PER_CENTURY;
        let year = century + u16::from(two_digits) % YEARS_PER_CENTURY;
        trace!("completed two-digit year {two_digits:02} to {year} (reference {reference})");
        Self::new(year)
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// January 1st of this year
    pub fn first_day(self) -> CivilDate {
        // 1..=MAX_YEAR is well inside chrono's supported range
        NaiveDate::from_yo_opt(i32::from(self.get()), 1).unwrap_or(NaiveDate::MIN)
    }

    /// December 31st of this year
    pub fn last_day(self) -> CivilDate {
        NaiveDate::from_ymd_opt(i32::from(self.get()), DECEMBER, LAST_DAY_OF_DECEMBER)
            .unwrap_or(NaiveDate::MAX)
    }
}

impl TryFrom<u16> for Year {
    type Error = WeekError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i32> for Year {
    type Error = WeekError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        let value = u16::try_from(value).map_err(|_| WeekError::InvalidYear(value))?;
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl From<Year> for i32 {
    fn from(year: Year) -> Self {
        Self::from(year.0.get())
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
