// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Team queries.
//!
//! Teams are listed in name order, which is also the roster order the
//! scheduler works from. Deleting a team is refused while matches still
//! reference it.

use diesel::SqliteConnection;
use diesel::prelude::*;
use liga_escolar_domain::Team;
use tracing::debug;

use crate::backend;
use crate::diesel_schema::{matches, teams};
use crate::error::PersistenceError;

/// Inserts a new team.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `team` - The team to insert
///
/// # Errors
///
/// Returns an error if the insert fails (e.g., duplicate name within
/// the league).
pub fn insert_team(conn: &mut SqliteConnection, team: &Team) -> Result<i64, PersistenceError> {
    diesel::insert_into(teams::table)
        .values((
            teams::league_id.eq(team.league_id()),
            teams::name.eq(team.name()),
        ))
        .execute(conn)?;

    let team_id: i64 = backend::get_last_insert_rowid(conn)?;
    debug!(team_id, name = team.name(), "Inserted team");
    Ok(team_id)
}

/// Lists all teams in a league, ordered by name.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `league_id` - The owning league ID
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_teams_for_league(
    conn: &mut SqliteConnection,
    league_id: i64,
) -> Result<Vec<Team>, PersistenceError> {
    let rows = teams::table
        .filter(teams::league_id.eq(league_id))
        .order(teams::name.asc())
        .select((teams::team_id, teams::league_id, teams::name))
        .load::<(i64, i64, String)>(conn)?;

    Ok(rows
        .into_iter()
        .map(|(team_id, league_id, name)| Team::with_id(team_id, league_id, name))
        .collect())
}

/// Gets a single team by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `team_id` - The team ID
///
/// # Errors
///
/// Returns an error if the query fails.
/// Returns `Ok(None)` if the team is not found.
pub fn get_team(
    conn: &mut SqliteConnection,
    team_id: i64,
) -> Result<Option<Team>, PersistenceError> {
    let result: Result<(i64, i64, String), diesel::result::Error> = teams::table
        .filter(teams::team_id.eq(team_id))
        .select((teams::team_id, teams::league_id, teams::name))
        .first(conn);

    match result {
        Ok((team_id, league_id, name)) => Ok(Some(Team::with_id(team_id, league_id, name))),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Renames a team.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `team_id` - The team ID
/// * `name` - The new name
///
/// # Errors
///
/// Returns an error if the team does not exist or the new name collides
/// with another team in the same league.
pub fn update_team_name(
    conn: &mut SqliteConnection,
    team_id: i64,
    name: &str,
) -> Result<(), PersistenceError> {
    let updated: usize = diesel::update(teams::table.filter(teams::team_id.eq(team_id)))
        .set(teams::name.eq(name))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::TeamNotFound(team_id));
    }

    debug!(team_id, name, "Renamed team");
    Ok(())
}

/// Deletes a team.
///
/// The delete is refused while any match references the team as home or
/// away side. Players belonging to the team are removed by cascade.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `team_id` - The team to delete
///
/// # Errors
///
/// Returns an error if the team does not exist or is still referenced
/// by matches.
pub fn delete_team(conn: &mut SqliteConnection, team_id: i64) -> Result<(), PersistenceError> {
    let match_count: i64 = matches::table
        .filter(
            matches::home_team_id
                .eq(team_id)
                .or(matches::away_team_id.eq(team_id)),
        )
        .count()
        .get_result(conn)?;

    if match_count > 0 {
        return Err(PersistenceError::TeamReferenced { team_id });
    }

    let deleted: usize =
        diesel::delete(teams::table.filter(teams::team_id.eq(team_id))).execute(conn)?;

    if deleted == 0 {
        return Err(PersistenceError::TeamNotFound(team_id));
    }

    debug!(team_id, "Deleted team");
    Ok(())
}
