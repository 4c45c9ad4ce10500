// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Player queries.
//!
//! Deleting a player is refused while recorded goals still reference it,
//! so scorer history stays intact.

use diesel::SqliteConnection;
use diesel::prelude::*;
use liga_escolar_domain::Player;
use tracing::debug;

use crate::backend;
use crate::diesel_schema::{goals, players};
use crate::error::PersistenceError;

/// Inserts a new player.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `player` - The player to insert
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_player(
    conn: &mut SqliteConnection,
    player: &Player,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(players::table)
        .values((
            players::team_id.eq(player.team_id()),
            players::name.eq(player.name()),
        ))
        .execute(conn)?;

    let player_id: i64 = backend::get_last_insert_rowid(conn)?;
    debug!(player_id, name = player.name(), "Inserted player");
    Ok(player_id)
}

/// Lists all players in a team, ordered by name.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `team_id` - The owning team ID
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_players_for_team(
    conn: &mut SqliteConnection,
    team_id: i64,
) -> Result<Vec<Player>, PersistenceError> {
    let rows = players::table
        .filter(players::team_id.eq(team_id))
        .order(players::name.asc())
        .select((players::player_id, players::team_id, players::name))
        .load::<(i64, i64, String)>(conn)?;

    Ok(rows
        .into_iter()
        .map(|(player_id, team_id, name)| Player::with_id(player_id, team_id, name))
        .collect())
}

/// Gets a single player by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `player_id` - The player ID
///
/// # Errors
///
/// Returns an error if the query fails.
/// Returns `Ok(None)` if the player is not found.
pub fn get_player(
    conn: &mut SqliteConnection,
    player_id: i64,
) -> Result<Option<Player>, PersistenceError> {
    let result: Result<(i64, i64, String), diesel::result::Error> = players::table
        .filter(players::player_id.eq(player_id))
        .select((players::player_id, players::team_id, players::name))
        .first(conn);

    match result {
        Ok((player_id, team_id, name)) => Ok(Some(Player::with_id(player_id, team_id, name))),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Renames a player.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `player_id` - The player ID
/// * `name` - The new name
///
/// # Errors
///
/// Returns an error if the player does not exist or the update fails.
pub fn update_player_name(
    conn: &mut SqliteConnection,
    player_id: i64,
    name: &str,
) -> Result<(), PersistenceError> {
    let updated: usize = diesel::update(players::table.filter(players::player_id.eq(player_id)))
        .set(players::name.eq(name))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::PlayerNotFound(player_id));
    }

    debug!(player_id, name, "Renamed player");
    Ok(())
}

/// Deletes a player.
///
/// The delete is refused while any recorded goal references the player.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `player_id` - The player to delete
///
/// # Errors
///
/// Returns an error if the player does not exist or is still referenced
/// by goals.
pub fn delete_player(
    conn: &mut SqliteConnection,
    player_id: i64,
) -> Result<(), PersistenceError> {
    let goal_count: i64 = goals::table
        .filter(goals::player_id.eq(player_id))
        .count()
        .get_result(conn)?;

    if goal_count > 0 {
        return Err(PersistenceError::PlayerReferenced { player_id });
    }

    let deleted: usize =
        diesel::delete(players::table.filter(players::player_id.eq(player_id))).execute(conn)?;

    if deleted == 0 {
        return Err(PersistenceError::PlayerNotFound(player_id));
    }

    debug!(player_id, "Deleted player");
    Ok(())
}
