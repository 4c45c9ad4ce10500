// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mexican school-calendar holiday calculations.
//!
//! Fixed national holidays are matched by month and day, ignoring the year.
//! Movable holidays (Holy Thursday and Good Friday) are derived from Easter
//! Sunday, computed per calendar year with the Gauss algorithm.
//!
//! ## Invariants
//!
//! - Easter Sunday falls in March or April for every Gregorian year.
//! - Holiday checks never consult anything beyond the date itself; blackout
//!   days declared by a season are handled by the calendar module.

use crate::error::DomainError;
use time::{Date, Duration, Month, Weekday};

/// Fixed national holidays as (month, day) pairs.
///
/// Jan 1 (Año Nuevo), Feb 5 (Día de la Constitución), Mar 21 (Natalicio de
/// Benito Juárez), May 1 (Día del Trabajo), Sep 16 (Día de la
/// Independencia), Nov 20 (Día de la Revolución), Dec 25 (Navidad).
const FIXED_HOLIDAYS: [(u8, u8); 7] = [
    (1, 1),
    (2, 5),
    (3, 21),
    (5, 1),
    (9, 16),
    (11, 20),
    (12, 25),
];

/// Computes Easter Sunday for the given Gregorian year.
///
/// Uses the Gauss integer algorithm. The intermediate names follow the
/// classical formulation.
///
/// # Arguments
///
/// * `year` - The Gregorian calendar year
///
/// # Errors
///
/// Returns an error if the computed month/day cannot form a valid date
/// (unreachable for any Gregorian year, but propagated rather than assumed).
#[allow(clippy::many_single_char_names)]
pub fn easter_sunday(year: i32) -> Result<Date, DomainError> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    let month: Month = u8::try_from(month)
        .ok()
        .and_then(|value| Month::try_from(value).ok())
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: format!("computing the Easter month for year {year}"),
        })?;
    let day: u8 = u8::try_from(day).map_err(|_| DomainError::DateArithmeticOverflow {
        operation: format!("computing the Easter day for year {year}"),
    })?;

    Date::from_calendar_date(year, month, day).map_err(|_| DomainError::DateArithmeticOverflow {
        operation: format!("constructing Easter Sunday for year {year}"),
    })
}

/// Computes the movable holidays for the given year.
///
/// Returns Holy Thursday (Easter − 3 days) and Good Friday (Easter − 2
/// days), in that order.
///
/// # Errors
///
/// Returns an error if the Easter computation or the day offsets overflow.
pub fn movable_holidays(year: i32) -> Result<[Date; 2], DomainError> {
    let easter: Date = easter_sunday(year)?;
    let holy_thursday: Date =
        easter
            .checked_sub(Duration::days(3))
            .ok_or_else(|| DomainError::DateArithmeticOverflow {
                operation: format!("deriving Holy Thursday for year {year}"),
            })?;
    let good_friday: Date =
        easter
            .checked_sub(Duration::days(2))
            .ok_or_else(|| DomainError::DateArithmeticOverflow {
                operation: format!("deriving Good Friday for year {year}"),
            })?;
    Ok([holy_thursday, good_friday])
}

/// Checks whether the date is a national holiday, fixed or movable.
///
/// Fixed holidays match by (month, day) regardless of year; movable
/// holidays are computed for the date's own year.
///
/// # Errors
///
/// Returns an error if the movable-holiday derivation fails.
pub fn is_holiday(date: Date) -> Result<bool, DomainError> {
    let month: u8 = u8::from(date.month());
    let day: u8 = date.day();
    if FIXED_HOLIDAYS
        .iter()
        .any(|&(holiday_month, holiday_day)| holiday_month == month && holiday_day == day)
    {
        return Ok(true);
    }

    let movable: [Date; 2] = movable_holidays(date.year())?;
    Ok(movable.contains(&date))
}

/// Checks whether the date falls on a Saturday or Sunday.
#[must_use]
pub fn is_weekend(date: Date) -> bool {
    matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday)
}
