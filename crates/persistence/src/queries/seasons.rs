// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Season queries.
//!
//! Seasons carry the single `is_active` flag: activating one season
//! deactivates every other row in the same statement sequence.

use diesel::SqliteConnection;
use diesel::prelude::*;
use liga_escolar_domain::Season;
use tracing::debug;

use crate::backend;
use crate::dates;
use crate::diesel_schema::seasons;
use crate::error::PersistenceError;

/// Diesel Queryable struct for season rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = seasons)]
struct SeasonRow {
    season_id: i64,
    name: String,
    start_date: String,
    end_date: String,
    is_active: i32,
}

impl SeasonRow {
    fn into_season(self) -> Result<Season, PersistenceError> {
        let start_date = dates::parse_stored_date(&self.start_date)?;
        let end_date = dates::parse_stored_date(&self.end_date)?;
        Ok(Season::with_id(
            self.season_id,
            self.name,
            start_date,
            end_date,
            self.is_active != 0,
        ))
    }
}

/// Inserts a new season.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `season` - The season to insert
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_season(
    conn: &mut SqliteConnection,
    season: &Season,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(seasons::table)
        .values((
            seasons::name.eq(season.name()),
            seasons::start_date.eq(season.start_date().to_string()),
            seasons::end_date.eq(season.end_date().to_string()),
            seasons::is_active.eq(i32::from(season.is_active())),
        ))
        .execute(conn)?;

    let season_id: i64 = backend::get_last_insert_rowid(conn)?;
    debug!(season_id, name = season.name(), "Inserted season");
    Ok(season_id)
}

/// Lists all seasons, most recent first.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if the query fails or a stored date cannot be parsed.
pub fn list_seasons(conn: &mut SqliteConnection) -> Result<Vec<Season>, PersistenceError> {
    let rows = seasons::table
        .order(seasons::start_date.desc())
        .select(SeasonRow::as_select())
        .load::<SeasonRow>(conn)?;

    rows.into_iter().map(SeasonRow::into_season).collect()
}

/// Gets a single season by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `season_id` - The season ID
///
/// # Errors
///
/// Returns an error if the query fails.
/// Returns `Ok(None)` if the season is not found.
pub fn get_season(
    conn: &mut SqliteConnection,
    season_id: i64,
) -> Result<Option<Season>, PersistenceError> {
    let result: Result<SeasonRow, diesel::result::Error> = seasons::table
        .filter(seasons::season_id.eq(season_id))
        .select(SeasonRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into_season()?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Gets the currently active season, if any.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if the query fails.
/// Returns `Ok(None)` if no season is active.
pub fn get_active_season(
    conn: &mut SqliteConnection,
) -> Result<Option<Season>, PersistenceError> {
    let result: Result<SeasonRow, diesel::result::Error> = seasons::table
        .filter(seasons::is_active.eq(1))
        .select(SeasonRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into_season()?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Marks a season as active and deactivates every other season.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `season_id` - The season to activate
///
/// # Errors
///
/// Returns an error if the season does not exist or the update fails.
pub fn activate_season(
    conn: &mut SqliteConnection,
    season_id: i64,
) -> Result<(), PersistenceError> {
    let updated: usize = diesel::update(seasons::table.filter(seasons::season_id.eq(season_id)))
        .set(seasons::is_active.eq(1))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::SeasonNotFound(season_id));
    }

    diesel::update(seasons::table.filter(seasons::season_id.ne(season_id)))
        .set(seasons::is_active.eq(0))
        .execute(conn)?;

    debug!(season_id, "Activated season");
    Ok(())
}

/// Deletes a season.
///
/// Leagues, teams, matches and non-school days belonging to the season
/// are removed by foreign key cascades.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `season_id` - The season to delete
///
/// # Errors
///
/// Returns an error if the season does not exist or the delete fails.
pub fn delete_season(
    conn: &mut SqliteConnection,
    season_id: i64,
) -> Result<(), PersistenceError> {
    let deleted: usize =
        diesel::delete(seasons::table.filter(seasons::season_id.eq(season_id))).execute(conn)?;

    if deleted == 0 {
        return Err(PersistenceError::SeasonNotFound(season_id));
    }

    debug!(season_id, "Deleted season");
    Ok(())
}
