// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Match queries.
//!
//! Fixture writes are all-or-nothing: the schedule insert runs inside a
//! transaction and re-checks that the league has no existing fixtures,
//! so two concurrent generation requests cannot interleave into a
//! duplicate fixture set.

use diesel::SqliteConnection;
use diesel::prelude::*;
use liga_escolar_domain::{Match, ScheduledMatch};
use num_traits::cast::ToPrimitive;
use tracing::debug;

use crate::dates;
use crate::diesel_schema::matches;
use crate::error::PersistenceError;

/// Diesel Queryable struct for match rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = matches)]
struct MatchRow {
    match_id: i64,
    league_id: i64,
    home_team_id: i64,
    away_team_id: i64,
    kickoff: String,
    venue: String,
    round: i32,
    cycle: i32,
    is_completed: i32,
}

impl MatchRow {
    fn into_match(self) -> Result<Match, PersistenceError> {
        let kickoff = dates::parse_stored_datetime(&self.kickoff)?;
        Ok(Match::with_id(
            self.match_id,
            self.league_id,
            self.home_team_id,
            self.away_team_id,
            kickoff,
            self.venue,
            self.round.to_u32().unwrap_or(0),
            self.cycle.to_u32().unwrap_or(0),
            self.is_completed != 0,
        ))
    }
}

/// Inserts a generated schedule for a league.
///
/// The insert runs inside a transaction and fails if the league already
/// has fixtures, keeping generation all-or-nothing even when callers
/// race.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `league_id` - The league the fixtures belong to
/// * `scheduled` - The generated matches in emission order
///
/// # Errors
///
/// Returns an error if the league already has fixtures or the insert
/// fails.
pub fn insert_schedule(
    conn: &mut SqliteConnection,
    league_id: i64,
    scheduled: &[ScheduledMatch],
) -> Result<usize, PersistenceError> {
    conn.transaction::<usize, PersistenceError, _>(|conn| {
        let existing: i64 = matches::table
            .filter(matches::league_id.eq(league_id))
            .count()
            .get_result(conn)?;

        if existing > 0 {
            return Err(PersistenceError::Conflict(format!(
                "League {league_id} already has {existing} scheduled matches"
            )));
        }

        let mut rows = Vec::with_capacity(scheduled.len());
        for scheduled_match in scheduled {
            let kickoff: String = dates::format_datetime(scheduled_match.kickoff())?;
            let round: i32 = scheduled_match
                .round()
                .to_i32()
                .ok_or_else(|| PersistenceError::Other("Round out of range".to_string()))?;
            let cycle: i32 = scheduled_match
                .cycle()
                .to_i32()
                .ok_or_else(|| PersistenceError::Other("Cycle out of range".to_string()))?;

            rows.push((
                matches::league_id.eq(league_id),
                matches::home_team_id.eq(scheduled_match.home_team_id()),
                matches::away_team_id.eq(scheduled_match.away_team_id()),
                matches::kickoff.eq(kickoff),
                matches::venue.eq(scheduled_match.venue()),
                matches::round.eq(round),
                matches::cycle.eq(cycle),
                matches::is_completed.eq(0),
            ));
        }

        let inserted: usize = diesel::insert_into(matches::table)
            .values(&rows)
            .execute(conn)?;

        debug!(league_id, inserted, "Inserted generated schedule");
        Ok(inserted)
    })
}

/// Lists all matches for a league in kickoff order.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `league_id` - The owning league ID
///
/// # Errors
///
/// Returns an error if the query fails or a stored timestamp cannot be
/// parsed.
pub fn list_matches_for_league(
    conn: &mut SqliteConnection,
    league_id: i64,
) -> Result<Vec<Match>, PersistenceError> {
    let rows = matches::table
        .filter(matches::league_id.eq(league_id))
        .order((matches::kickoff.asc(), matches::match_id.asc()))
        .select(MatchRow::as_select())
        .load::<MatchRow>(conn)?;

    rows.into_iter().map(MatchRow::into_match).collect()
}

/// Gets a single match by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `match_id` - The match ID
///
/// # Errors
///
/// Returns an error if the query fails.
/// Returns `Ok(None)` if the match is not found.
pub fn get_match(
    conn: &mut SqliteConnection,
    match_id: i64,
) -> Result<Option<Match>, PersistenceError> {
    let result: Result<MatchRow, diesel::result::Error> = matches::table
        .filter(matches::match_id.eq(match_id))
        .select(MatchRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into_match()?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Counts the matches recorded for a league.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `league_id` - The league ID
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn count_matches_for_league(
    conn: &mut SqliteConnection,
    league_id: i64,
) -> Result<usize, PersistenceError> {
    let count: i64 = matches::table
        .filter(matches::league_id.eq(league_id))
        .count()
        .get_result(conn)?;

    count
        .to_usize()
        .ok_or_else(|| PersistenceError::Other("Match count out of range".to_string()))
}

/// Deletes a single match together with its result and goals.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `match_id` - The match to delete
///
/// # Errors
///
/// Returns an error if the match does not exist or the delete fails.
pub fn delete_match(conn: &mut SqliteConnection, match_id: i64) -> Result<(), PersistenceError> {
    let deleted: usize =
        diesel::delete(matches::table.filter(matches::match_id.eq(match_id))).execute(conn)?;

    if deleted == 0 {
        return Err(PersistenceError::MatchNotFound(match_id));
    }

    debug!(match_id, "Deleted match");
    Ok(())
}

/// Deletes every match for a league, the regeneration path.
///
/// Results and goals are removed by foreign key cascades.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `league_id` - The league to clear
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_matches_for_league(
    conn: &mut SqliteConnection,
    league_id: i64,
) -> Result<usize, PersistenceError> {
    let deleted: usize =
        diesel::delete(matches::table.filter(matches::league_id.eq(league_id))).execute(conn)?;

    debug!(league_id, deleted, "Deleted league fixtures");
    Ok(deleted)
}
