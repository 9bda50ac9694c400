/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Number of days in a week
pub const DAYS_IN_WEEK: u32 = 7;

/// Highest week ordinal any rule can produce (a leap year whose Jan 1st
/// is the last day of its week spans 54 weeks under `FirstDay`)
pub const MAX_WEEKS_IN_YEAR: u32 = 54;

/// Month number for December
pub const DECEMBER: u32 = 12;
/// Last day of December
pub const LAST_DAY_OF_DECEMBER: u32 = 31;

/// Length of a `YYWW` token
pub const SHORT_TOKEN_LEN: usize = 4;
/// Length of a `YYYYWW` token
pub const LONG_TOKEN_LEN: usize = 6;
/// Number of trailing week digits in a token
pub const WEEK_DIGITS: usize = 2;
/// Largest week number a token's two digits can hold
pub const MAX_TOKEN_WEEK: i32 = 99;

/// Two-digit years are completed with the century of a reference year
pub(crate) const YEARS_PER_CENTURY: u16 = 100;
