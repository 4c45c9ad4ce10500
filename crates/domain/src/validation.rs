// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Weekday index validation.
//!
//! Weekday selections are exchanged as Sunday-based indices, 0 through 6.
//! These helpers convert between that form and [`time::Weekday`],
//! rejecting anything out of range.

use crate::error::DomainError;
use time::Weekday;

/// Converts a Sunday-based weekday index into a [`Weekday`].
///
/// # Errors
///
/// Returns [`DomainError::InvalidWeekday`] for indices above 6.
pub const fn weekday_from_index(index: u8) -> Result<Weekday, DomainError> {
    match index {
        0 => Ok(Weekday::Sunday),
        1 => Ok(Weekday::Monday),
        2 => Ok(Weekday::Tuesday),
        3 => Ok(Weekday::Wednesday),
        4 => Ok(Weekday::Thursday),
        5 => Ok(Weekday::Friday),
        6 => Ok(Weekday::Saturday),
        _ => Err(DomainError::InvalidWeekday { index }),
    }
}

/// Converts a [`Weekday`] into its Sunday-based index.
#[must_use]
pub const fn weekday_index(weekday: Weekday) -> u8 {
    weekday.number_days_from_sunday()
}

/// Converts a slice of Sunday-based indices into weekdays.
///
/// Duplicates are preserved; they make no difference to eligibility
/// checks.
///
/// # Errors
///
/// Returns [`DomainError::InvalidWeekday`] for the first index above 6.
pub fn weekdays_from_indices(indices: &[u8]) -> Result<Vec<Weekday>, DomainError> {
    indices.iter().map(|index| weekday_from_index(*index)).collect()
}
