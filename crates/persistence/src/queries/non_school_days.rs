// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Non-school day queries.
//!
//! The `(season_id, day)` pair is unique, so declaring the same blackout
//! date twice for a season surfaces as a conflict.

use diesel::SqliteConnection;
use diesel::prelude::*;
use liga_escolar_domain::NonSchoolDay;
use time::Date;
use tracing::debug;

use crate::backend;
use crate::dates;
use crate::diesel_schema::non_school_days;
use crate::error::PersistenceError;

/// Diesel Queryable struct for non-school day rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = non_school_days)]
struct NonSchoolDayRow {
    non_school_day_id: i64,
    season_id: i64,
    day: String,
    description: String,
}

impl NonSchoolDayRow {
    fn into_non_school_day(self) -> Result<NonSchoolDay, PersistenceError> {
        let day: Date = dates::parse_stored_date(&self.day)?;
        Ok(NonSchoolDay::with_id(
            self.non_school_day_id,
            self.season_id,
            day,
            self.description,
        ))
    }
}

/// Inserts a new non-school day.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `non_school_day` - The blackout day to insert
///
/// # Errors
///
/// Returns an error if the insert fails (e.g., duplicate date within
/// the season).
pub fn insert_non_school_day(
    conn: &mut SqliteConnection,
    non_school_day: &NonSchoolDay,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(non_school_days::table)
        .values((
            non_school_days::season_id.eq(non_school_day.season_id()),
            non_school_days::day.eq(non_school_day.day().to_string()),
            non_school_days::description.eq(non_school_day.description()),
        ))
        .execute(conn)?;

    let non_school_day_id: i64 = backend::get_last_insert_rowid(conn)?;
    debug!(
        non_school_day_id,
        day = %non_school_day.day(),
        "Inserted non-school day"
    );
    Ok(non_school_day_id)
}

/// Lists all non-school days for a season in date order.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `season_id` - The owning season ID
///
/// # Errors
///
/// Returns an error if the query fails or a stored date cannot be parsed.
pub fn list_non_school_days_for_season(
    conn: &mut SqliteConnection,
    season_id: i64,
) -> Result<Vec<NonSchoolDay>, PersistenceError> {
    let rows = non_school_days::table
        .filter(non_school_days::season_id.eq(season_id))
        .order(non_school_days::day.asc())
        .select(NonSchoolDayRow::as_select())
        .load::<NonSchoolDayRow>(conn)?;

    rows.into_iter()
        .map(NonSchoolDayRow::into_non_school_day)
        .collect()
}

/// Gets a single non-school day by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `non_school_day_id` - The blackout day ID
///
/// # Errors
///
/// Returns an error if the query fails or the stored date cannot be parsed.
/// Returns `Ok(None)` if the day is not found.
pub fn get_non_school_day(
    conn: &mut SqliteConnection,
    non_school_day_id: i64,
) -> Result<Option<NonSchoolDay>, PersistenceError> {
    let result: Result<NonSchoolDayRow, diesel::result::Error> = non_school_days::table
        .filter(non_school_days::non_school_day_id.eq(non_school_day_id))
        .select(NonSchoolDayRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into_non_school_day()?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Updates a non-school day's date and description.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `non_school_day_id` - The blackout day ID
/// * `day` - The new date
/// * `description` - The new description
///
/// # Errors
///
/// Returns an error if the day does not exist or the new date collides
/// with another blackout in the same season.
pub fn update_non_school_day(
    conn: &mut SqliteConnection,
    non_school_day_id: i64,
    day: Date,
    description: &str,
) -> Result<(), PersistenceError> {
    let updated: usize = diesel::update(
        non_school_days::table.filter(non_school_days::non_school_day_id.eq(non_school_day_id)),
    )
    .set((
        non_school_days::day.eq(day.to_string()),
        non_school_days::description.eq(description),
    ))
    .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Non-school day not found: {non_school_day_id}"
        )));
    }

    debug!(non_school_day_id, day = %day, "Updated non-school day");
    Ok(())
}

/// Deletes a non-school day.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `non_school_day_id` - The blackout day to delete
///
/// # Errors
///
/// Returns an error if the day does not exist or the delete fails.
pub fn delete_non_school_day(
    conn: &mut SqliteConnection,
    non_school_day_id: i64,
) -> Result<(), PersistenceError> {
    let deleted: usize = diesel::delete(
        non_school_days::table.filter(non_school_days::non_school_day_id.eq(non_school_day_id)),
    )
    .execute(conn)?;

    if deleted == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Non-school day not found: {non_school_day_id}"
        )));
    }

    debug!(non_school_day_id, "Deleted non-school day");
    Ok(())
}
