// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Match result queries.
//!
//! A match holds at most one result. Recording a result replaces any
//! previous one wholesale, goals included, and marks the match
//! completed. The replace runs inside a transaction so a failed write
//! never leaves a match with a half-recorded score.

use diesel::SqliteConnection;
use diesel::prelude::*;
use liga_escolar_domain::{CompletedMatch, Goal, MatchResult};
use num_traits::cast::ToPrimitive;
use tracing::debug;

use crate::backend;
use crate::diesel_schema::{goals, match_results, matches, players};
use crate::error::PersistenceError;

/// Records or replaces the result of a match.
///
/// Every referenced scorer must exist. Any previously recorded result
/// and its goals are deleted first; the match is marked completed.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `match_id` - The match the result belongs to
/// * `home_score` - Goals or points scored by the home team
/// * `away_score` - Goals or points scored by the away team
/// * `goal_scorers` - `(player_id, minute)` pairs, one per goal
///
/// # Errors
///
/// Returns an error if the match or a referenced player does not exist,
/// or if a write fails.
pub fn record_match_result(
    conn: &mut SqliteConnection,
    match_id: i64,
    home_score: u32,
    away_score: u32,
    goal_scorers: &[(i64, Option<u32>)],
) -> Result<i64, PersistenceError> {
    conn.transaction::<i64, PersistenceError, _>(|conn| {
        let match_exists: Result<i64, diesel::result::Error> = matches::table
            .filter(matches::match_id.eq(match_id))
            .select(matches::match_id)
            .first(conn);

        match match_exists {
            Ok(_) => {}
            Err(diesel::result::Error::NotFound) => {
                return Err(PersistenceError::MatchNotFound(match_id));
            }
            Err(e) => return Err(PersistenceError::from(e)),
        }

        let scorer_ids: Vec<i64> = goal_scorers.iter().map(|(player_id, _)| *player_id).collect();
        let known_ids: Vec<i64> = players::table
            .filter(players::player_id.eq_any(&scorer_ids))
            .select(players::player_id)
            .load::<i64>(conn)?;
        for player_id in &scorer_ids {
            if !known_ids.contains(player_id) {
                return Err(PersistenceError::PlayerNotFound(*player_id));
            }
        }

        // Replace wholesale: goals cascade with the old result row.
        diesel::delete(match_results::table.filter(match_results::match_id.eq(match_id)))
            .execute(conn)?;

        let home_score_i32: i32 = home_score
            .to_i32()
            .ok_or_else(|| PersistenceError::Other("Home score out of range".to_string()))?;
        let away_score_i32: i32 = away_score
            .to_i32()
            .ok_or_else(|| PersistenceError::Other("Away score out of range".to_string()))?;

        diesel::insert_into(match_results::table)
            .values((
                match_results::match_id.eq(match_id),
                match_results::home_score.eq(home_score_i32),
                match_results::away_score.eq(away_score_i32),
            ))
            .execute(conn)?;

        let match_result_id: i64 = backend::get_last_insert_rowid(conn)?;

        let mut goal_rows = Vec::with_capacity(goal_scorers.len());
        for (player_id, minute) in goal_scorers {
            let minute_i32: Option<i32> = match minute {
                Some(m) => Some(m.to_i32().ok_or_else(|| {
                    PersistenceError::Other("Goal minute out of range".to_string())
                })?),
                None => None,
            };
            goal_rows.push((
                goals::match_result_id.eq(match_result_id),
                goals::player_id.eq(*player_id),
                goals::minute.eq(minute_i32),
            ));
        }

        if !goal_rows.is_empty() {
            diesel::insert_into(goals::table)
                .values(&goal_rows)
                .execute(conn)?;
        }

        diesel::update(matches::table.filter(matches::match_id.eq(match_id)))
            .set(matches::is_completed.eq(1))
            .execute(conn)?;

        debug!(
            match_id,
            match_result_id,
            home_score,
            away_score,
            goal_count = goal_scorers.len(),
            "Recorded match result"
        );
        Ok(match_result_id)
    })
}

/// Gets the recorded result and goals for a match, if any.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `match_id` - The match ID
///
/// # Errors
///
/// Returns an error if the query fails.
/// Returns `Ok(None)` if no result has been recorded.
pub fn get_result_for_match(
    conn: &mut SqliteConnection,
    match_id: i64,
) -> Result<Option<(MatchResult, Vec<Goal>)>, PersistenceError> {
    let result: Result<(i64, i64, i32, i32), diesel::result::Error> = match_results::table
        .filter(match_results::match_id.eq(match_id))
        .select((
            match_results::match_result_id,
            match_results::match_id,
            match_results::home_score,
            match_results::away_score,
        ))
        .first(conn);

    let (match_result_id, match_id, home_score, away_score) = match result {
        Ok(row) => row,
        Err(diesel::result::Error::NotFound) => return Ok(None),
        Err(e) => return Err(PersistenceError::from(e)),
    };

    let goal_rows = goals::table
        .filter(goals::match_result_id.eq(match_result_id))
        .order(goals::goal_id.asc())
        .select((
            goals::goal_id,
            goals::match_result_id,
            goals::player_id,
            goals::minute,
        ))
        .load::<(i64, i64, i64, Option<i32>)>(conn)?;

    let match_result = MatchResult::with_id(
        match_result_id,
        match_id,
        home_score.to_u32().unwrap_or(0),
        away_score.to_u32().unwrap_or(0),
    );
    let goal_list: Vec<Goal> = goal_rows
        .into_iter()
        .map(|(goal_id, match_result_id, player_id, minute)| {
            Goal::with_id(
                goal_id,
                match_result_id,
                player_id,
                minute.and_then(|m| m.to_u32()),
            )
        })
        .collect();

    Ok(Some((match_result, goal_list)))
}

/// Lists the completed results for a league as standings inputs.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `league_id` - The league ID
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_completed_matches(
    conn: &mut SqliteConnection,
    league_id: i64,
) -> Result<Vec<CompletedMatch>, PersistenceError> {
    let rows = match_results::table
        .inner_join(matches::table.on(match_results::match_id.eq(matches::match_id)))
        .filter(matches::league_id.eq(league_id))
        .select((
            matches::home_team_id,
            matches::away_team_id,
            match_results::home_score,
            match_results::away_score,
        ))
        .load::<(i64, i64, i32, i32)>(conn)?;

    Ok(rows
        .into_iter()
        .map(|(home_team_id, away_team_id, home_score, away_score)| {
            CompletedMatch::new(
                home_team_id,
                away_team_id,
                home_score.to_u32().unwrap_or(0),
                away_score.to_u32().unwrap_or(0),
            )
        })
        .collect())
}
