// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Conversions between stored text columns and `time` values.
//!
//! Calendar days are stored as ISO-8601 text (`YYYY-MM-DD`) and kickoff
//! timestamps as `YYYY-MM-DD HH:MM:SS`. Day columns are written with
//! `Date::to_string()`, which produces the ISO form.

use time::format_description::well_known::Iso8601;
use time::macros::format_description;
use time::{Date, PrimitiveDateTime};

use crate::error::PersistenceError;

/// Parses a stored `YYYY-MM-DD` text column back into a [`Date`].
///
/// # Errors
///
/// Returns an error if the stored text is not a valid ISO-8601 date.
pub(crate) fn parse_stored_date(value: &str) -> Result<Date, PersistenceError> {
    Date::parse(value, &Iso8601::DEFAULT).map_err(|e| {
        PersistenceError::InvalidStoredValue(format!("Failed to parse date '{value}': {e}"))
    })
}

/// Parses a stored `YYYY-MM-DD HH:MM:SS` text column back into a
/// [`PrimitiveDateTime`].
///
/// # Errors
///
/// Returns an error if the stored text is not a valid timestamp.
pub(crate) fn parse_stored_datetime(value: &str) -> Result<PrimitiveDateTime, PersistenceError> {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    PrimitiveDateTime::parse(value, &format).map_err(|e| {
        PersistenceError::InvalidStoredValue(format!("Failed to parse timestamp '{value}': {e}"))
    })
}

/// Formats a [`PrimitiveDateTime`] as `YYYY-MM-DD HH:MM:SS` text for storage.
///
/// # Errors
///
/// Returns an error if formatting fails.
pub(crate) fn format_datetime(value: PrimitiveDateTime) -> Result<String, PersistenceError> {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    value
        .format(&format)
        .map_err(|e| PersistenceError::Other(format!("Failed to format timestamp: {e}")))
}
