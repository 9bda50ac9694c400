use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::{CivilDate, WeekError, Year, prelude::*};

/// The weekday that opens a week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekStart {
    /// Weeks run Sunday..Saturday
    #[display(fmt = "sunday")]
    Sunday,
    /// Weeks run Monday..Sunday
    #[display(fmt = "monday")]
    Monday,
}

impl WeekStart {
    /// Offset (0..=6) of `weekday` inside a week opening on this start.
    pub fn days_from_start(self, weekday: Weekday) -> u32 {
        match self {
            Self::Sunday => weekday.num_days_from_sunday(),
            Self::Monday => weekday.num_days_from_monday(),
        }
    }

    /// Days left in the week after `weekday` (0 on the last day of the week).
    pub fn days_until_end(self, weekday: Weekday) -> u32 {
        6 - self.days_from_start(weekday)
    }

    /// The weekday that closes a week.
    pub const fn last_day(self) -> Weekday {
        match self {
            Self::Sunday => Weekday::Sat,
            Self::Monday => Weekday::Sun,
        }
    }
}

impl From<WeekStart> for Weekday {
    fn from(start: WeekStart) -> Self {
        match start {
            WeekStart::Sunday => Self::Sun,
            WeekStart::Monday => Self::Mon,
        }
    }
}

impl TryFrom<Weekday> for WeekStart {
    type Error = WeekError;

    fn try_from(weekday: Weekday) -> Result<Self, Self::Error> {
        match weekday {
            Weekday::Sun => Ok(Self::Sunday),
            Weekday::Mon => Ok(Self::Monday),
            other => Err(WeekError::InvalidToken(format!(
                "{other} cannot open a week (expected sunday or monday)"
            ))),
        }
    }
}

impl FromStr for WeekStart {
    type Err = WeekError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sunday" | "sun" => Ok(Self::Sunday),
            "monday" | "mon" => Ok(Self::Monday),
            _ => Err(WeekError::InvalidToken(s.to_owned())),
        }
    }
}

/// How week 1 of a year is determined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstWeekRule {
    /// The week containing January 1st is week 1
    #[default]
    #[display(fmt = "first_day")]
    FirstDay,
    /// Week 1 is the first week lying entirely inside the year
    #[display(fmt = "first_full_week")]
    FirstFullWeek,
    /// Week 1 is the first week with at least four days inside the year
    #[display(fmt = "first_four_day_week")]
    FirstFourDayWeek,
}

impl FirstWeekRule {
    /// Minimum number of days the week holding January 1st must have inside
    /// the year to count as week 1.
    pub const fn min_days_in_first_week(self) -> u32 {
        match self {
            Self::FirstDay => 1,
            Self::FirstFullWeek => 7,
            Self::FirstFourDayWeek => 4,
        }
    }
}

impl FromStr for FirstWeekRule {
    type Err = WeekError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "first_day" => Ok(Self::FirstDay),
            "first_full_week" => Ok(Self::FirstFullWeek),
            "first_four_day_week" => Ok(Self::FirstFourDayWeek),
            _ => Err(WeekError::InvalidToken(s.to_owned())),
        }
    }
}

/// A week start and first-week rule travelling together.
///
/// Converts from and into a `(WeekStart, FirstWeekRule)` tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From, Into, Serialize, Deserialize)]
#[display(fmt = "{start}/{rule}")]
pub struct WeekPolicy {
    pub start: WeekStart,
    pub rule:  FirstWeekRule,
}

/// Regions whose weeks open on Sunday and count the week of January 1st as week 1
const SUNDAY_FIRST_DAY_REGIONS: &[&str] = &[
    "US", "CA", "MX", "BR", "JP", "KR", "TW", "HK", "IL", "PH", "ZA", "SA", "IN",
];

/// Regions using Monday start, first four-day week (no year-end rollover)
const FOUR_DAY_WEEK_REGIONS: &[&str] = &[
    "DE", "FR", "GB", "IT", "ES", "NL", "BE", "AT", "CH", "SE", "NO", "DK", "FI", "PL", "CZ",
    "IE", "PT", "LU", "IS", "EE", "LT", "HU",
];

/// Regions with Monday weeks numbered from the week of January 1st
const MONDAY_FIRST_DAY_REGIONS: &[&str] = &["CN", "AU", "NZ", "RU", "UA", "TR", "SG"];

impl WeekPolicy {
    pub const fn new(start: WeekStart, rule: FirstWeekRule) -> Self {
        Self { start, rule }
    }

    /// Sunday-start weeks numbered from the week containing January 1st
    pub const fn sunday_first_day() -> Self {
        Self::new(WeekStart::Sunday, FirstWeekRule::FirstDay)
    }

    /// Monday start, first four-day week (no year-end rollover).
    ///
    /// Week 1 matches ISO 8601, but late-December days stay in the last week
    /// of their own year unless the last-week policy is applied, so this is
    /// not full ISO week numbering.
    pub const fn iso() -> Self {
        Self::new(WeekStart::Monday, FirstWeekRule::FirstFourDayWeek)
    }

    /// The policy customarily used in a region, by ISO 3166 alpha-2 code.
    ///
    /// Returns `None` for regions not in the table.
    pub fn for_region(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_uppercase();
        let code = code.as_str();
        if SUNDAY_FIRST_DAY_REGIONS.contains(&code) {
            Some(Self::sunday_first_day())
        } else if FOUR_DAY_WEEK_REGIONS.contains(&code) {
            Some(Self::iso())
        } else if MONDAY_FIRST_DAY_REGIONS.contains(&code) {
            Some(Self::new(WeekStart::Monday, FirstWeekRule::FirstDay))
        } else {
            None
        }
    }

    /// See [`crate::week_of_year`].
    pub fn week_of_year(self, date: CivilDate) -> u32 {
        crate::week_of_year(date, self.start, self.rule)
    }

    /// See [`crate::week_of_year_with_last_week_policy`].
    pub fn week_of_year_with_last_week_policy(self, date: CivilDate, last_full_week: bool) -> u32 {
        crate::week_of_year_with_last_week_policy(date, self.start, self.rule, last_full_week)
    }

    /// See [`crate::weeks_in_year`].
    pub fn weeks_in_year(self, year: Year) -> u32 {
        crate::weeks_in_year(year, self.start, self.rule)
    }
}
