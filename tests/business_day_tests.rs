//! Property-based tests for business-day arithmetic

use bunker::chronos::{
    add_business_days, business_days_between, is_business_day, is_weekend, try_add_business_days,
    HolidaySet,
};
use bunker::BunkerError;
use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use quickcheck::QuickCheck;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn reference_start() -> NaiveDate {
    date("2022-10-03")
}

#[test]
fn test_reference_scenario_without_holidays() {
    assert_eq!(
        add_business_days(7, reference_start(), None),
        date("2022-10-12")
    );
    assert_eq!(
        add_business_days(7, reference_start(), Some(&HolidaySet::new())),
        date("2022-10-12")
    );
}

#[test]
fn test_reference_scenario_with_weekend_holiday() {
    let holidays: HolidaySet = [date("2022-10-08")].into_iter().collect();
    assert_eq!(
        add_business_days(7, reference_start(), Some(&holidays)),
        date("2022-10-12")
    );
}

#[test]
fn test_reference_scenario_with_weekday_holiday() {
    let holidays: HolidaySet = [date("2022-10-10")].into_iter().collect();
    assert_eq!(
        add_business_days(7, reference_start(), Some(&holidays)),
        date("2022-10-13")
    );
}

#[test]
fn test_negative_count_is_invalid_argument() {
    let result = try_add_business_days(-3, reference_start(), None);
    assert!(matches!(result, Err(BunkerError::InvalidArgument { .. })));
}

#[test]
fn test_consecutive_holidays_across_weekend() {
    // Thu 2022-12-22 + 3 with Fri 23rd and Mon 26th off lands on Thu 29th
    let holidays: HolidaySet = [date("2022-12-23"), date("2022-12-26")]
        .into_iter()
        .collect();
    assert_eq!(
        add_business_days(3, date("2022-12-22"), Some(&holidays)),
        date("2022-12-29")
    );
}

/// Property: adding zero business days is the identity
#[test]
fn prop_zero_days_is_identity() {
    fn check(offset: u16, holiday_offsets: Vec<u16>) -> bool {
        let start = reference_start() + Days::new(u64::from(offset));
        let holidays: HolidaySet = holiday_offsets
            .iter()
            .map(|o| start + Days::new(u64::from(*o)))
            .collect();
        add_business_days(0, start, Some(&holidays)) == start
    }

    QuickCheck::new()
        .tests(100)
        .quickcheck(check as fn(u16, Vec<u16>) -> bool);
}

fn start_date() -> impl Strategy<Value = NaiveDate> {
    (0u64..20_000).prop_map(|offset| date("2000-01-01") + Days::new(offset))
}

fn holiday_offsets() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(0u64..120, 0..15)
}

proptest! {
    #[test]
    fn prop_result_is_business_day_after_start(
        start in start_date(),
        count in 1u32..200,
        offsets in holiday_offsets(),
    ) {
        let holidays: HolidaySet = offsets.iter().map(|o| start + Days::new(*o)).collect();
        let result = add_business_days(count, start, Some(&holidays));

        prop_assert!(result > start);
        prop_assert!(!is_weekend(result));
        prop_assert!(!holidays.contains(result));
        prop_assert!(is_business_day(result, Some(&holidays)));
    }

    #[test]
    fn prop_counts_exactly_n_business_days(
        start in start_date(),
        count in 0u32..200,
        offsets in holiday_offsets(),
    ) {
        let holidays: HolidaySet = offsets.iter().map(|o| start + Days::new(*o)).collect();
        let result = add_business_days(count, start, Some(&holidays));
        prop_assert_eq!(business_days_between(start, result, Some(&holidays)), count);
    }

    #[test]
    fn prop_empty_holidays_counts_weekdays(
        start in start_date(),
        count in 0u32..500,
    ) {
        let result = add_business_days(count, start, None);
        let weekdays = start
            .iter_days()
            .skip(1)
            .take_while(|d| *d <= result)
            .filter(|d| !is_weekend(*d))
            .count();
        prop_assert_eq!(weekdays, count as usize);
    }

    #[test]
    fn prop_duplicates_and_order_do_not_matter(
        start in start_date(),
        count in 0u32..100,
        offsets in holiday_offsets(),
    ) {
        let days: Vec<NaiveDate> = offsets.iter().map(|o| start + Days::new(*o)).collect();

        let mut doubled = days.clone();
        doubled.extend(days.iter().copied());
        let mut reversed = days.clone();
        reversed.reverse();

        let base: HolidaySet = days.into_iter().collect();
        let doubled: HolidaySet = doubled.into_iter().collect();
        let reversed: HolidaySet = reversed.into_iter().collect();

        let expected = add_business_days(count, start, Some(&base));
        prop_assert_eq!(add_business_days(count, start, Some(&doubled)), expected);
        prop_assert_eq!(add_business_days(count, start, Some(&reversed)), expected);
    }

    #[test]
    fn prop_weekend_holidays_are_redundant(
        start in start_date(),
        count in 0u32..100,
        offsets in holiday_offsets(),
    ) {
        let weekend_only: HolidaySet = offsets
            .iter()
            .map(|o| start + Days::new(*o))
            .filter(|d| is_weekend(*d))
            .collect();
        prop_assert_eq!(
            add_business_days(count, start, Some(&weekend_only)),
            add_business_days(count, start, None)
        );
    }

    #[test]
    fn prop_past_holidays_never_match(
        start in start_date(),
        count in 0u32..100,
        offsets in prop::collection::vec(0u64..365, 0..10),
    ) {
        let past: HolidaySet = offsets.iter().map(|o| start - Days::new(*o)).collect();
        prop_assert_eq!(
            add_business_days(count, start, Some(&past)),
            add_business_days(count, start, None)
        );
    }

    #[test]
    fn prop_try_add_agrees_for_non_negative(
        start in start_date(),
        count in 0u32..200,
    ) {
        prop_assert_eq!(
            try_add_business_days(i64::from(count), start, None).unwrap(),
            add_business_days(count, start, None)
        );
    }
}
