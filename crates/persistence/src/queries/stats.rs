// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Aggregation queries for standings and the health probe.

use diesel::SqliteConnection;
use diesel::prelude::*;
use liga_escolar_domain::ScorerTally;
use num_traits::cast::ToPrimitive;

use crate::diesel_schema::{goals, leagues, match_results, matches, players, seasons, teams};
use crate::error::PersistenceError;

/// Row counts for the health probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityCounts {
    /// Number of seasons.
    pub seasons: usize,
    /// Number of leagues.
    pub leagues: usize,
    /// Number of teams.
    pub teams: usize,
    /// Number of players.
    pub players: usize,
    /// Number of matches.
    pub matches: usize,
}

fn count_to_usize(count: i64, what: &str) -> Result<usize, PersistenceError> {
    count
        .to_usize()
        .ok_or_else(|| PersistenceError::Other(format!("{what} count out of range")))
}

/// Tallies goals per player for a league.
///
/// Each row carries the player's name and team name so the caller can
/// build a scorer table without further lookups. Players without goals
/// do not appear.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `league_id` - The league ID
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn scorer_tallies_for_league(
    conn: &mut SqliteConnection,
    league_id: i64,
) -> Result<Vec<ScorerTally>, PersistenceError> {
    let rows = goals::table
        .inner_join(
            match_results::table.on(goals::match_result_id.eq(match_results::match_result_id)),
        )
        .inner_join(matches::table.on(match_results::match_id.eq(matches::match_id)))
        .inner_join(players::table.on(goals::player_id.eq(players::player_id)))
        .inner_join(teams::table.on(players::team_id.eq(teams::team_id)))
        .filter(matches::league_id.eq(league_id))
        .group_by((players::player_id, players::name, teams::name))
        .select((
            players::player_id,
            players::name,
            teams::name,
            diesel::dsl::count(goals::goal_id),
        ))
        .load::<(i64, String, String, i64)>(conn)?;

    Ok(rows
        .into_iter()
        .map(|(player_id, player_name, team_name, goal_count)| {
            ScorerTally::new(
                player_id,
                player_name,
                team_name,
                goal_count.to_u32().unwrap_or(0),
            )
        })
        .collect())
}

/// Counts the stored entities for the health probe.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if any count query fails.
pub fn entity_counts(conn: &mut SqliteConnection) -> Result<EntityCounts, PersistenceError> {
    let season_count: i64 = seasons::table.count().get_result(conn)?;
    let league_count: i64 = leagues::table.count().get_result(conn)?;
    let team_count: i64 = teams::table.count().get_result(conn)?;
    let player_count: i64 = players::table.count().get_result(conn)?;
    let match_count: i64 = matches::table.count().get_result(conn)?;

    Ok(EntityCounts {
        seasons: count_to_usize(season_count, "Season")?,
        leagues: count_to_usize(league_count, "League")?,
        teams: count_to_usize(team_count, "Team")?,
        players: count_to_usize(player_count, "Player")?,
        matches: count_to_usize(match_count, "Match")?,
    })
}
