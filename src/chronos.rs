//! Business-day date arithmetic.
//!
//! A business day is any calendar day that is neither a Saturday nor a Sunday
//! and is not listed in the caller's [`HolidaySet`]. Advancing always starts by
//! stepping one day forward, so the start date itself is never counted.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Weekday};
use std::collections::BTreeSet;

use crate::error::{BunkerError, Result};

/// Anything that can be reduced to a calendar day, dropping time-of-day.
pub trait CalendarDay {
    fn calendar_day(&self) -> NaiveDate;
}

impl CalendarDay for NaiveDate {
    fn calendar_day(&self) -> NaiveDate {
        *self
    }
}

impl CalendarDay for NaiveDateTime {
    fn calendar_day(&self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> CalendarDay for DateTime<Tz> {
    fn calendar_day(&self) -> NaiveDate {
        self.date_naive()
    }
}

impl<T: CalendarDay + ?Sized> CalendarDay for &T {
    fn calendar_day(&self) -> NaiveDate {
        (**self).calendar_day()
    }
}

/// Dates excluded from business-day counting in addition to weekends.
///
/// Entries are compared by calendar day only; duplicates collapse and
/// insertion order is irrelevant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    days: BTreeSet<NaiveDate>,
}

impl HolidaySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, day: impl CalendarDay) -> bool {
        self.days.insert(day.calendar_day())
    }

    pub fn contains(&self, day: impl CalendarDay) -> bool {
        self.days.contains(&day.calendar_day())
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NaiveDate> {
        self.days.iter()
    }
}

impl<D: CalendarDay> FromIterator<D> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = D>>(iter: I) -> Self {
        Self {
            days: iter.into_iter().map(|d| d.calendar_day()).collect(),
        }
    }
}

impl<D: CalendarDay> Extend<D> for HolidaySet {
    fn extend<I: IntoIterator<Item = D>>(&mut self, iter: I) {
        self.days.extend(iter.into_iter().map(|d| d.calendar_day()));
    }
}

pub fn is_weekend(day: impl CalendarDay) -> bool {
    matches!(day.calendar_day().weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn is_business_day(day: impl CalendarDay, holidays: Option<&HolidaySet>) -> bool {
    let day = day.calendar_day();
    !is_weekend(day) && !holidays.is_some_and(|h| h.contains(day))
}

/// Step forward from `start` until `count` business days have been consumed.
///
/// Returns `None` when the walk would leave the range `NaiveDate` can represent.
fn step_business_days(
    count: u64,
    start: NaiveDate,
    holidays: Option<&HolidaySet>,
) -> Option<NaiveDate> {
    let mut remaining = count;
    let mut cursor = start;
    while remaining > 0 {
        cursor = cursor.succ_opt()?;
        if is_business_day(cursor, holidays) {
            remaining -= 1;
        }
    }
    Some(cursor)
}

/// Advance `start` by `count` business days.
///
/// `count == 0` returns `start` unchanged. Holidays that fall on weekends,
/// repeat, or lie outside the stepped range have no effect.
///
/// Near the end of chrono's calendar (year 262143) the walk stops at the last
/// representable business day instead of overflowing.
pub fn add_business_days(count: u32, start: NaiveDate, holidays: Option<&HolidaySet>) -> NaiveDate {
    match step_business_days(u64::from(count), start, holidays) {
        Some(day) => {
            tracing::debug!(%start, count, result = %day, "Advanced business days");
            day
        }
        None => {
            tracing::warn!(%start, count, "Business day walk reached the end of the calendar");
            let mut last = NaiveDate::MAX;
            while !is_business_day(last, holidays) && last > start {
                last = last.pred_opt().unwrap_or(start);
            }
            last
        }
    }
}

/// Validating variant of [`add_business_days`].
///
/// Negative counts are rejected before any stepping happens.
pub fn try_add_business_days(
    count: i64,
    start: NaiveDate,
    holidays: Option<&HolidaySet>,
) -> Result<NaiveDate> {
    let steps = u64::try_from(count).map_err(|_| {
        BunkerError::invalid_argument("count", format!("must not be negative, got {count}"))
    })?;
    step_business_days(steps, start, holidays).ok_or(BunkerError::DateOutOfRange { start, count })
}

/// Advance a timestamp by `count` business days, keeping its time-of-day.
pub fn add_business_days_at(
    count: u32,
    start: NaiveDateTime,
    holidays: Option<&HolidaySet>,
) -> NaiveDateTime {
    add_business_days(count, start.date(), holidays).and_time(start.time())
}

/// Number of business days in `(start, end]`, zero when `end <= start`.
pub fn business_days_between(
    start: NaiveDate,
    end: NaiveDate,
    holidays: Option<&HolidaySet>,
) -> u32 {
    start
        .iter_days()
        .skip(1)
        .take_while(|d| *d <= end)
        .filter(|d| is_business_day(*d, holidays))
        .fold(0u32, |acc, _| acc.saturating_add(1))
}
