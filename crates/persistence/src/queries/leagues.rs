// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! League queries.
//!
//! The `sport` and `category` columns hold the canonical string forms
//! (`FOOTBALL`, `CATEGORY_1_2`, ...) and are converted back through the
//! domain `FromStr` implementations on load.

use diesel::SqliteConnection;
use diesel::prelude::*;
use liga_escolar_domain::{Category, League, Sport};
use tracing::debug;

use crate::backend;
use crate::diesel_schema::leagues;
use crate::error::PersistenceError;

/// Diesel Queryable struct for league rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = leagues)]
struct LeagueRow {
    league_id: i64,
    season_id: i64,
    name: String,
    sport: String,
    category: String,
}

impl LeagueRow {
    fn into_league(self) -> Result<League, PersistenceError> {
        let sport: Sport = self
            .sport
            .parse()
            .map_err(|e| PersistenceError::InvalidStoredValue(format!("{e}")))?;
        let category: Category = self
            .category
            .parse()
            .map_err(|e| PersistenceError::InvalidStoredValue(format!("{e}")))?;
        Ok(League::with_id(
            self.league_id,
            self.season_id,
            self.name,
            sport,
            category,
        ))
    }
}

/// Inserts a new league.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `league` - The league to insert
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_league(
    conn: &mut SqliteConnection,
    league: &League,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(leagues::table)
        .values((
            leagues::season_id.eq(league.season_id()),
            leagues::name.eq(league.name()),
            leagues::sport.eq(league.sport().as_str()),
            leagues::category.eq(league.category().as_str()),
        ))
        .execute(conn)?;

    let league_id: i64 = backend::get_last_insert_rowid(conn)?;
    debug!(league_id, name = league.name(), "Inserted league");
    Ok(league_id)
}

/// Lists all leagues, ordered by name.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if the query fails or a stored value cannot be parsed.
pub fn list_leagues(conn: &mut SqliteConnection) -> Result<Vec<League>, PersistenceError> {
    let rows = leagues::table
        .order((leagues::name.asc(), leagues::league_id.asc()))
        .select(LeagueRow::as_select())
        .load::<LeagueRow>(conn)?;

    rows.into_iter().map(LeagueRow::into_league).collect()
}

/// Lists all leagues belonging to a season, ordered by name.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `season_id` - The owning season ID
///
/// # Errors
///
/// Returns an error if the query fails or a stored value cannot be parsed.
pub fn list_leagues_for_season(
    conn: &mut SqliteConnection,
    season_id: i64,
) -> Result<Vec<League>, PersistenceError> {
    let rows = leagues::table
        .filter(leagues::season_id.eq(season_id))
        .order((leagues::name.asc(), leagues::league_id.asc()))
        .select(LeagueRow::as_select())
        .load::<LeagueRow>(conn)?;

    rows.into_iter().map(LeagueRow::into_league).collect()
}

/// Gets a single league by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `league_id` - The league ID
///
/// # Errors
///
/// Returns an error if the query fails.
/// Returns `Ok(None)` if the league is not found.
pub fn get_league(
    conn: &mut SqliteConnection,
    league_id: i64,
) -> Result<Option<League>, PersistenceError> {
    let result: Result<LeagueRow, diesel::result::Error> = leagues::table
        .filter(leagues::league_id.eq(league_id))
        .select(LeagueRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into_league()?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Deletes every league, together with its teams and matches.
///
/// Teams, players, matches, results and goals are removed by foreign key
/// cascades.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_all_leagues(conn: &mut SqliteConnection) -> Result<usize, PersistenceError> {
    let deleted: usize = diesel::delete(leagues::table).execute(conn)?;
    debug!(deleted, "Deleted all leagues");
    Ok(deleted)
}
