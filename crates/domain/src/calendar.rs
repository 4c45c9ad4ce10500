// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Eligible match-day calculation.
//!
//! Walks a calendar window day by day and keeps the dates a league can
//! actually play on: the weekday must be allowed, the date must not be a
//! weekend day, a national holiday, or a season blackout day. Each kept
//! date carries the daily slot capacity supplied by the caller.
//!
//! ## Invariants
//!
//! - The returned sequence is strictly ascending by date.
//! - Blackout matching is exact calendar-date equality; time of day never
//!   participates.
//! - The weekend check is evaluated even when the allowed weekdays already
//!   exclude Saturday and Sunday.

use crate::error::DomainError;
use crate::holidays;
use chrono::{Datelike, NaiveDate};
use time::{Date, Month, Weekday};

/// A calendar date a league can play on, with its slot capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayableDate {
    /// The eligible calendar date.
    date: Date,
    /// How many matches may be placed on this date.
    available_slots: u32,
}

impl PlayableDate {
    /// Creates a new `PlayableDate`.
    #[must_use]
    pub const fn new(date: Date, available_slots: u32) -> Self {
        Self {
            date,
            available_slots,
        }
    }

    /// Returns the calendar date.
    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }

    /// Returns the slot capacity for this date.
    #[must_use]
    pub const fn available_slots(&self) -> u32 {
        self.available_slots
    }
}

/// Computes the ordered eligible match days within a window.
///
/// Every calendar day from `window_start` to `window_end` inclusive is
/// considered. A day is kept iff its weekday is in `allowed_weekdays`, it
/// is not in `blackout_dates`, it is not a weekend day, and it is not a
/// national holiday. Each kept day is assigned `daily_capacity` slots.
///
/// An inverted window (start after end) yields an empty sequence.
///
/// # Arguments
///
/// * `window_start` - First day of the window (inclusive)
/// * `window_end` - Last day of the window (inclusive)
/// * `blackout_dates` - Season blackout dates, matched exactly
/// * `allowed_weekdays` - Weekdays scheduling may use
/// * `daily_capacity` - Slots assigned to every eligible day
///
/// # Errors
///
/// Returns an error if a date conversion or the holiday derivation fails.
pub fn eligible_match_days(
    window_start: Date,
    window_end: Date,
    blackout_dates: &[Date],
    allowed_weekdays: &[Weekday],
    daily_capacity: u32,
) -> Result<Vec<PlayableDate>, DomainError> {
    // Weekday comparison happens on Sunday-based indices, which both date
    // crates can produce.
    let allowed_indices: Vec<u8> = allowed_weekdays
        .iter()
        .copied()
        .map(Weekday::number_days_from_sunday)
        .collect();

    let mut current: NaiveDate = to_chrono_date(window_start)?;
    let end: NaiveDate = to_chrono_date(window_end)?;

    let mut eligible: Vec<PlayableDate> = Vec::new();
    while current <= end {
        let weekday_index: u8 =
            u8::try_from(current.weekday().num_days_from_sunday()).map_err(|_| {
                DomainError::DateArithmeticOverflow {
                    operation: String::from("indexing the weekday"),
                }
            })?;

        if allowed_indices.contains(&weekday_index) {
            let day: Date = to_time_date(current)?;
            if !blackout_dates.contains(&day)
                && !holidays::is_weekend(day)
                && !holidays::is_holiday(day)?
            {
                eligible.push(PlayableDate::new(day, daily_capacity));
            }
        }

        current = current
            .succ_opt()
            .ok_or_else(|| DomainError::DateArithmeticOverflow {
                operation: String::from("advancing the calendar day"),
            })?;
    }

    Ok(eligible)
}

/// Converts a `time::Date` to a `chrono::NaiveDate`.
fn to_chrono_date(date: Date) -> Result<NaiveDate, DomainError> {
    NaiveDate::from_ymd_opt(
        date.year(),
        u32::from(u8::from(date.month())),
        u32::from(date.day()),
    )
    .ok_or_else(|| DomainError::DateArithmeticOverflow {
        operation: format!("converting {date} for the calendar walk"),
    })
}

/// Converts a `chrono::NaiveDate` back to a `time::Date`.
fn to_time_date(date: NaiveDate) -> Result<Date, DomainError> {
    let month: Month = u8::try_from(date.month())
        .ok()
        .and_then(|value| Month::try_from(value).ok())
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: String::from("converting the month from the calendar walk"),
        })?;
    let day: u8 = u8::try_from(date.day()).map_err(|_| DomainError::DateArithmeticOverflow {
        operation: String::from("converting the day from the calendar walk"),
    })?;
    Date::from_calendar_date(date.year(), month, day).map_err(|_| {
        DomainError::DateArithmeticOverflow {
            operation: String::from("converting the date from the calendar walk"),
        }
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_eligible_match_days_keeps_allowed_weekdays() {
        // Sep 2026: Fridays fall on the 4th, 11th, 18th and 25th.
        let days = eligible_match_days(
            date!(2026 - 09 - 01),
            date!(2026 - 09 - 30),
            &[],
            &[Weekday::Friday],
            2,
        )
        .unwrap();

        let dates: Vec<Date> = days.iter().map(PlayableDate::date).collect();
        assert_eq!(
            dates,
            vec![
                date!(2026 - 09 - 04),
                date!(2026 - 09 - 11),
                date!(2026 - 09 - 18),
                date!(2026 - 09 - 25),
            ]
        );
        assert!(days.iter().all(|day| day.available_slots() == 2));
    }

    #[test]
    fn test_eligible_match_days_excludes_fixed_holidays() {
        // Dec 25, 2026 is a Friday and Navidad.
        let days = eligible_match_days(
            date!(2026 - 12 - 01),
            date!(2026 - 12 - 31),
            &[],
            &[Weekday::Friday],
            3,
        )
        .unwrap();

        let dates: Vec<Date> = days.iter().map(PlayableDate::date).collect();
        assert_eq!(
            dates,
            vec![
                date!(2026 - 12 - 04),
                date!(2026 - 12 - 11),
                date!(2026 - 12 - 18),
            ]
        );
    }

    #[test]
    fn test_eligible_match_days_excludes_blackout_days() {
        let blackouts = [date!(2026 - 12 - 18), date!(2026 - 12 - 20)];
        let days = eligible_match_days(
            date!(2026 - 12 - 01),
            date!(2026 - 12 - 31),
            &blackouts,
            &[Weekday::Friday],
            2,
        )
        .unwrap();

        let dates: Vec<Date> = days.iter().map(PlayableDate::date).collect();
        assert_eq!(dates, vec![date!(2026 - 12 - 04), date!(2026 - 12 - 11)]);
    }

    #[test]
    fn test_eligible_match_days_rejects_weekend_days() {
        let days = eligible_match_days(
            date!(2026 - 09 - 01),
            date!(2026 - 09 - 30),
            &[],
            &[Weekday::Saturday, Weekday::Sunday],
            2,
        )
        .unwrap();
        assert!(days.is_empty());
    }

    #[test]
    fn test_eligible_match_days_inverted_window() {
        let days = eligible_match_days(
            date!(2026 - 09 - 30),
            date!(2026 - 09 - 01),
            &[],
            &[Weekday::Friday],
            2,
        )
        .unwrap();
        assert!(days.is_empty());
    }

    #[test]
    fn test_eligible_match_days_excludes_good_friday() {
        // Easter 2026 is April 5; Good Friday is April 3, a Friday by
        // definition.
        let days = eligible_match_days(
            date!(2026 - 04 - 01),
            date!(2026 - 04 - 10),
            &[],
            &[Weekday::Friday],
            2,
        )
        .unwrap();

        let dates: Vec<Date> = days.iter().map(PlayableDate::date).collect();
        assert_eq!(dates, vec![date!(2026 - 04 - 10)]);
    }
}
