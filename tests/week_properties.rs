//! Property tests for week <-> date conversions.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use proptest::prelude::*;

use week_date::{
    FirstWeekRule, WeekPolicy, WeekSpec, WeekStart, Year, YearWeek, is_in_next_year_first_week,
    start_of_week, week_of_year, weeks_in_year,
};

fn week_start() -> impl Strategy<Value = WeekStart> {
    prop_oneof![Just(WeekStart::Sunday), Just(WeekStart::Monday)]
}

fn first_week_rule() -> impl Strategy<Value = FirstWeekRule> {
    prop_oneof![
        Just(FirstWeekRule::FirstDay),
        Just(FirstWeekRule::FirstFullWeek),
        Just(FirstWeekRule::FirstFourDayWeek),
    ]
}

fn civil_date(years: std::ops::RangeInclusive<i32>) -> impl Strategy<Value = NaiveDate> {
    (years, 1u32..=366).prop_filter_map("ordinal past year end", |(year, ordinal)| {
        NaiveDate::from_yo_opt(year, ordinal)
    })
}

#[test]
fn week_one_starts_within_six_days_of_new_year() {
    for year in 1..=9999 {
        let jan1 = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
        let dec25 = NaiveDate::from_ymd_opt(year - 1, 12, 25).unwrap();
        for start in [WeekStart::Sunday, WeekStart::Monday] {
            let spec = WeekSpec::new(year, 1, start, FirstWeekRule::FirstDay, false);
            let first = start_of_week(spec).unwrap();
            assert!(
                first <= jan1 && first > dec25,
                "week 1 of {year} ({start}) starts {first}"
            );
            assert_eq!(first.weekday(), Weekday::from(start), "week 1 of {year} ({start})");
        }
    }
}

#[test]
fn every_week_start_falls_on_the_start_weekday() {
    for year in [1, 1900, 2000, 2020, 2021, 2022, 2023, 2024, 9999] {
        for start in [WeekStart::Sunday, WeekStart::Monday] {
            for rule in [
                FirstWeekRule::FirstDay,
                FirstWeekRule::FirstFullWeek,
                FirstWeekRule::FirstFourDayWeek,
            ] {
                for week in 1..=53 {
                    let first = start_of_week(WeekSpec::new(year, week, start, rule, false)).unwrap();
                    assert_eq!(
                        first.weekday(),
                        Weekday::from(start),
                        "week {week} of {year} ({start}, {rule})"
                    );
                }
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every in-year day of the week returned by `start_of_week`
    /// is numbered with that same week.
    #[test]
    fn property_start_of_week_round_trips(
        year in 1u16..=9999,
        week in 1u32..=54,
        start in week_start(),
        rule in first_week_rule(),
    ) {
        let y = Year::new(year).unwrap();
        prop_assume!(week <= weeks_in_year(y, start, rule));

        let spec = WeekSpec::new(i32::from(year), i32::try_from(week).unwrap(), start, rule, false);
        let first = start_of_week(spec).unwrap();
        if week > 1 {
            prop_assert_eq!(first.year(), i32::from(year));
            prop_assert_eq!(week_of_year(first, start, rule), week);
        }
        for offset in 0..7 {
            let day = first.checked_add_days(Days::new(offset)).unwrap();
            if day.year() == i32::from(year) {
                prop_assert_eq!(week_of_year(day, start, rule), week, "day {}", day);
            }
        }
    }

    /// PROPERTY: consecutive weeks start exactly 7 days apart.
    #[test]
    fn property_weeks_are_seven_days_apart(
        year in 1i32..=9999,
        week in 1i32..=53,
        start in week_start(),
        rule in first_week_rule(),
        last_year_fallback in any::<bool>(),
    ) {
        // the fallback only moves week 1
        prop_assume!(week > 1 || !last_year_fallback);

        let this = start_of_week(WeekSpec::new(year, week, start, rule, last_year_fallback)).unwrap();
        let next = start_of_week(WeekSpec::new(year, week + 1, start, rule, last_year_fallback)).unwrap();
        prop_assert_eq!(next.signed_duration_since(this).num_days(), 7);
    }

    /// PROPERTY: a short trailing week is exactly the start of the next
    /// year's first week.
    #[test]
    fn property_short_trailing_week_opens_next_year(
        year in 1i32..=9998,
        start in week_start(),
        back in 0u32..7,
    ) {
        let dec31 = NaiveDate::from_ymd_opt(year, 12, 31).unwrap();
        // a year closing on the last weekday has no short trailing week
        prop_assume!(dec31.weekday() != start.last_day());

        let back = back % (start.days_from_start(dec31.weekday()) + 1);
        let date = dec31.checked_sub_days(Days::new(u64::from(back))).unwrap();
        prop_assert!(is_in_next_year_first_week(date, start), "{} ({})", date, start);

        let spec = WeekSpec::new(date.year() + 1, 1, start, FirstWeekRule::FirstDay, false);
        let week_one = start_of_week(spec).unwrap();
        prop_assert!(week_one <= date, "{} starts after {}", week_one, date);
        prop_assert_eq!(week_one.year(), date.year());
    }

    /// PROPERTY: the week resolved from a date's token contains the date.
    #[test]
    fn property_year_week_token_contains_date(
        date in civil_date(2..=9998),
        start in week_start(),
        rule in first_week_rule(),
    ) {
        let policy = WeekPolicy::new(start, rule);
        let token = YearWeek::from_date(date, policy, false).unwrap();
        let first = token.start_date(policy, false).unwrap();
        let days = date.signed_duration_since(first).num_days();
        prop_assert!((0..7).contains(&days), "{} resolved to {} starting {}", date, token, first);

        let reparsed: YearWeek = token.to_string().parse().unwrap();
        prop_assert_eq!(reparsed, token);
    }
}
