use chrono::{Datelike, Days, NaiveDate};
use log::trace;
use serde::{Deserialize, Serialize};

use crate::consts::{DAYS_IN_WEEK, DECEMBER, LAST_DAY_OF_DECEMBER};
use crate::{CivilDate, FirstWeekRule, WeekError, WeekPolicy, WeekStart, Year};

/// A numbered week of a year together with the policy used to locate it.
///
/// The week number is kept as given; [`start_of_week`] rejects values below 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeekSpec {
    year:               i32,
    week:               i32,
    start:              WeekStart,
    rule:               FirstWeekRule,
    last_year_fallback: bool,
}

impl WeekSpec {
    pub const fn new(
        year: i32,
        week: i32,
        start: WeekStart,
        rule: FirstWeekRule,
        last_year_fallback: bool,
    ) -> Self {
        Self {
            year,
            week,
            start,
            rule,
            last_year_fallback,
        }
    }

    pub const fn with_policy(year: i32, week: i32, policy: WeekPolicy, last_year_fallback: bool) -> Self {
        Self::new(year, week, policy.start, policy.rule, last_year_fallback)
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn week(&self) -> i32 {
        self.week
    }

    pub const fn start(&self) -> WeekStart {
        self.start
    }

    pub const fn rule(&self) -> FirstWeekRule {
        self.rule
    }

    pub const fn policy(&self) -> WeekPolicy {
        WeekPolicy::new(self.start, self.rule)
    }

    /// Whether week 1 walks back to the Sunday on or before its anchor,
    /// even when that lands in the previous year.
    pub const fn last_year_fallback(&self) -> bool {
        self.last_year_fallback
    }

    /// See [`start_of_week`].
    ///
    /// # Errors
    /// Same as [`start_of_week`].
    pub fn start_date(self) -> Result<CivilDate, WeekError> {
        start_of_week(self)
    }

    /// See [`end_of_week`].
    ///
    /// # Errors
    /// Same as [`start_of_week`].
    pub fn end_date(self) -> Result<CivilDate, WeekError> {
        end_of_week(self)
    }

    const fn out_of_range(self) -> WeekError {
        WeekError::OutOfRange {
            year: self.year,
            week: self.week,
        }
    }
}

/// Offset of January 1st of `date`'s year inside its week.
fn jan1_days_from_start(date: CivilDate, start: WeekStart) -> u32 {
    let offset = start.days_from_start(date.weekday());
    (offset + DAYS_IN_WEEK - date.ordinal0() % DAYS_IN_WEEK) % DAYS_IN_WEEK
}

/// Week ordinal of `date` within its own year, or `None` when the rule
/// leaves it in the last week of the previous year.
fn week_in_own_year(date: CivilDate, start: WeekStart, rule: FirstWeekRule) -> Option<u32> {
    let day_of_year = date.ordinal0();
    let jan1_offset = jan1_days_from_start(date, start);
    // days from Jan 1st to the first day that opens a week
    let lead = (DAYS_IN_WEEK - jan1_offset) % DAYS_IN_WEEK;

    if lead == 0 || lead >= rule.min_days_in_first_week() {
        Some((day_of_year + jan1_offset) / DAYS_IN_WEEK + 1)
    } else if day_of_year >= lead {
        Some((day_of_year - lead) / DAYS_IN_WEEK + 1)
    } else {
        None
    }
}

fn last_week_of_previous_year(date: CivilDate, start: WeekStart, rule: FirstWeekRule) -> u32 {
    date.checked_sub_days(Days::new(u64::from(date.ordinal())))
        .and_then(|dec31| week_in_own_year(dec31, start, rule))
        // chrono's first year has no predecessor to borrow a week from
        .unwrap_or(1)
}

/// Week number (1..=54) of `date` counted within its own calendar year.
///
/// Under [`FirstWeekRule::FirstDay`] the week containing January 1st is
/// week 1 and every later week starts exactly 7 days after the previous one.
/// Under the other rules the days before week 1 report the last week number
/// of the previous year.
pub fn week_of_year(date: CivilDate, start: WeekStart, rule: FirstWeekRule) -> u32 {
    week_in_own_year(date, start, rule)
        .unwrap_or_else(|| last_week_of_previous_year(date, start, rule))
}

/// Like [`week_of_year`], but with `last_full_week` set a short trailing
/// week at the end of the year is reported as week 1 of the next year.
pub fn week_of_year_with_last_week_policy(
    date: CivilDate,
    start: WeekStart,
    rule: FirstWeekRule,
    last_full_week: bool,
) -> u32 {
    if last_full_week && is_in_next_year_first_week(date, start) {
        return 1;
    }
    week_of_year(date, start, rule)
}

/// Week-numbering year and week of `date`.
///
/// Differs from `(date.year(), week_of_year(..))` only where a date is
/// attributed to a neighbouring year: early January days that precede week 1,
/// and (with `last_full_week`) a short trailing December week.
pub fn year_week_of(
    date: CivilDate,
    start: WeekStart,
    rule: FirstWeekRule,
    last_full_week: bool,
) -> (i32, u32) {
    if last_full_week && is_in_next_year_first_week(date, start) {
        return (date.year() + 1, 1);
    }
    match week_in_own_year(date, start, rule) {
        Some(week) => (date.year(), week),
        None => (date.year() - 1, last_week_of_previous_year(date, start, rule)),
    }
}

/// Number of the week holding December 31st of `year`.
pub fn weeks_in_year(year: Year, start: WeekStart, rule: FirstWeekRule) -> u32 {
    week_of_year(year.last_day(), start, rule)
}

/// Whether `date` lies in a short week closing its year, one that stops at
/// December 31st before reaching the last weekday of the week.
pub fn is_in_next_year_first_week(date: CivilDate, start: WeekStart) -> bool {
    let Some(dec31) = NaiveDate::from_ymd_opt(date.year(), DECEMBER, LAST_DAY_OF_DECEMBER) else {
        return false;
    };
    if dec31.weekday() == start.last_day() {
        return false;
    }

    let trailing = dec31.checked_sub_days(Days::new(u64::from(start.days_from_start(dec31.weekday()))));
    let inside = trailing.is_some_and(|first| first <= date);
    if inside {
        trace!("{date} falls in the short week closing {}", date.year());
    }
    inside
}

/// Day from which week 1 of `year` is counted: January 1st, or the first day
/// opening a week when the rule leaves January 1st in the previous year.
fn first_week_anchor(spec: WeekSpec, year: Year) -> Result<CivilDate, WeekError> {
    let jan1 = year.first_day();
    if week_of_year(jan1, spec.start, spec.rule) == 1 {
        return Ok(jan1);
    }

    let remaining = spec.start.days_until_end(jan1.weekday());
    let anchor = jan1
        .checked_add_days(Days::new(u64::from(remaining) + 1))
        .ok_or_else(|| spec.out_of_range())?;
    trace!("{jan1} is not in week 1 under {}, week 1 anchored at {anchor}", spec.rule);
    Ok(anchor)
}

/// First calendar day of the week described by `spec`.
///
/// Week 1 opens on the start weekday on or before its anchor, which can be
/// in the previous year. With `last_year_fallback` set, week 1 instead opens
/// on the Sunday on or before the anchor. Every later week opens exactly
/// 7 days after the one before it.
///
/// # Errors
/// Returns `WeekError::InvalidWeek` if the week number is below 1,
/// `WeekError::InvalidYear` if the year is outside `1..=MAX_YEAR`, and
/// `WeekError::OutOfRange` if the resulting date cannot be represented.
pub fn start_of_week(spec: WeekSpec) -> Result<CivilDate, WeekError> {
    if spec.week < 1 {
        return Err(WeekError::InvalidWeek(spec.week));
    }
    let year = Year::try_from(spec.year)?;
    let anchor = first_week_anchor(spec, year)?;

    let back = if spec.week == 1 && spec.last_year_fallback {
        anchor.weekday().num_days_from_sunday()
    } else {
        spec.start.days_from_start(anchor.weekday())
    };
    let week_one = anchor
        .checked_sub_days(Days::new(u64::from(back)))
        .ok_or_else(|| spec.out_of_range())?;

    let weeks_after_first = u64::from(spec.week.unsigned_abs() - 1);
    let first = week_one
        .checked_add_days(Days::new(weeks_after_first * u64::from(DAYS_IN_WEEK)))
        .ok_or_else(|| spec.out_of_range())?;
    trace!("week {} of {} under {} starts {first}", spec.week, spec.year, spec.policy());
    Ok(first)
}

/// Last calendar day of the week described by `spec`, six days after its
/// first day under `spec`'s week start (`last_year_fallback` is ignored).
///
/// # Errors
/// Same as [`start_of_week`].
pub fn end_of_week(spec: WeekSpec) -> Result<CivilDate, WeekError> {
    let first = start_of_week(WeekSpec {
        last_year_fallback: false,
        ..spec
    })?;
    first
        .checked_add_days(Days::new(u64::from(DAYS_IN_WEEK - 1)))
        .ok_or_else(|| spec.out_of_range())
}
