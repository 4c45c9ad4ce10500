// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Liga Escolar league system.
//!
//! This crate provides database persistence for seasons, leagues, teams,
//! players, non-school days, matches, results and goals. It is built on
//! Diesel over `SQLite`.
//!
//! ## Database Backend
//!
//! `SQLite` is the only backend:
//!
//! - File-based databases for the running server (WAL mode enabled)
//! - Shared in-memory databases for unit and integration tests
//!
//! Migrations are embedded in the binary and applied automatically when a
//! connection is initialized, so a fresh database file is always usable.
//! Foreign key enforcement is verified at startup; the schema relies on
//! `ON DELETE CASCADE` for child cleanup.
//!
//! ## Testing Philosophy
//!
//! - Standard tests (`cargo test`) run against in-memory `SQLite`
//! - Each test receives a unique database via an atomic counter, never
//!   a timestamp, so isolation is deterministic
//! - No external database infrastructure is required

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use liga_escolar_domain::{
    CompletedMatch, Goal, League, Match, MatchResult, NonSchoolDay, Player, ScheduledMatch,
    ScorerTally, Season, Team,
};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use time::Date;

mod backend;
mod dates;
mod diesel_schema;
mod error;
mod queries;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use queries::stats::EntityCounts;

/// Atomic counter for generating unique in-memory database names.
///
/// This ensures deterministic test isolation by eliminating time-based collisions.
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter for the league database.
///
/// Owns a single `SQLite` connection; the server serializes access behind
/// a mutex, so no connection pool is needed.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Uses a shared in-memory database via `Diesel`.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// ensuring deterministic test isolation without time-based collisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        // Create a unique shared in-memory database name per call so tests are isolated.
        // Use atomic counter instead of timestamp to eliminate race conditions.
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_test_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        // Initialize database with Diesel migrations
        let mut conn: SqliteConnection = backend::initialize_database(&shared_memory_url)?;

        // Verify foreign key enforcement is active
        backend::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        // Initialize database with Diesel migrations
        let mut conn: SqliteConnection = backend::initialize_database(path_str)?;

        // Enable WAL mode for better read concurrency
        backend::enable_wal_mode(&mut conn)?;

        // Verify foreign key enforcement is active
        backend::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// This is a startup-time check required to ensure
    /// referential integrity constraints are enforced.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        backend::verify_foreign_key_enforcement(&mut self.conn)
    }

    // ========================================================================
    // Seasons
    // ========================================================================

    /// Inserts a new season and returns its assigned ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_season(&mut self, season: &Season) -> Result<i64, PersistenceError> {
        queries::seasons::insert_season(&mut self.conn, season)
    }

    /// Lists all seasons, most recent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_seasons(&mut self) -> Result<Vec<Season>, PersistenceError> {
        queries::seasons::list_seasons(&mut self.conn)
    }

    /// Gets a season by ID, or `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_season(&mut self, season_id: i64) -> Result<Option<Season>, PersistenceError> {
        queries::seasons::get_season(&mut self.conn, season_id)
    }

    /// Gets the currently active season, or `None` if no season is active.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_active_season(&mut self) -> Result<Option<Season>, PersistenceError> {
        queries::seasons::get_active_season(&mut self.conn)
    }

    /// Marks a season as active and deactivates every other season.
    ///
    /// # Errors
    ///
    /// Returns an error if the season does not exist or the update fails.
    pub fn activate_season(&mut self, season_id: i64) -> Result<(), PersistenceError> {
        queries::seasons::activate_season(&mut self.conn, season_id)
    }

    /// Deletes a season and, by cascade, everything it owns.
    ///
    /// # Errors
    ///
    /// Returns an error if the season does not exist or the delete fails.
    pub fn delete_season(&mut self, season_id: i64) -> Result<(), PersistenceError> {
        queries::seasons::delete_season(&mut self.conn, season_id)
    }

    // ========================================================================
    // Leagues
    // ========================================================================

    /// Inserts a new league and returns its assigned ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_league(&mut self, league: &League) -> Result<i64, PersistenceError> {
        queries::leagues::insert_league(&mut self.conn, league)
    }

    /// Lists all leagues, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_leagues(&mut self) -> Result<Vec<League>, PersistenceError> {
        queries::leagues::list_leagues(&mut self.conn)
    }

    /// Lists the leagues belonging to a season, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_leagues_for_season(
        &mut self,
        season_id: i64,
    ) -> Result<Vec<League>, PersistenceError> {
        queries::leagues::list_leagues_for_season(&mut self.conn, season_id)
    }

    /// Gets a league by ID, or `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_league(&mut self, league_id: i64) -> Result<Option<League>, PersistenceError> {
        queries::leagues::get_league(&mut self.conn, league_id)
    }

    /// Deletes every league together with its teams and matches.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_all_leagues(&mut self) -> Result<usize, PersistenceError> {
        queries::leagues::delete_all_leagues(&mut self.conn)
    }

    // ========================================================================
    // Teams
    // ========================================================================

    /// Inserts a new team and returns its assigned ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, including when the name
    /// collides with another team in the same league.
    pub fn create_team(&mut self, team: &Team) -> Result<i64, PersistenceError> {
        queries::teams::insert_team(&mut self.conn, team)
    }

    /// Lists the teams in a league, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_teams_for_league(
        &mut self,
        league_id: i64,
    ) -> Result<Vec<Team>, PersistenceError> {
        queries::teams::list_teams_for_league(&mut self.conn, league_id)
    }

    /// Gets a team by ID, or `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_team(&mut self, team_id: i64) -> Result<Option<Team>, PersistenceError> {
        queries::teams::get_team(&mut self.conn, team_id)
    }

    /// Renames a team.
    ///
    /// # Errors
    ///
    /// Returns an error if the team does not exist or the new name
    /// collides with another team in the same league.
    pub fn update_team_name(
        &mut self,
        team_id: i64,
        name: &str,
    ) -> Result<(), PersistenceError> {
        queries::teams::update_team_name(&mut self.conn, team_id, name)
    }

    /// Deletes a team; refused while matches still reference it.
    ///
    /// # Errors
    ///
    /// Returns an error if the team does not exist or is still referenced
    /// by matches.
    pub fn delete_team(&mut self, team_id: i64) -> Result<(), PersistenceError> {
        queries::teams::delete_team(&mut self.conn, team_id)
    }

    // ========================================================================
    // Players
    // ========================================================================

    /// Inserts a new player and returns its assigned ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_player(&mut self, player: &Player) -> Result<i64, PersistenceError> {
        queries::players::insert_player(&mut self.conn, player)
    }

    /// Lists the players in a team, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_players_for_team(
        &mut self,
        team_id: i64,
    ) -> Result<Vec<Player>, PersistenceError> {
        queries::players::list_players_for_team(&mut self.conn, team_id)
    }

    /// Gets a player by ID, or `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_player(&mut self, player_id: i64) -> Result<Option<Player>, PersistenceError> {
        queries::players::get_player(&mut self.conn, player_id)
    }

    /// Renames a player.
    ///
    /// # Errors
    ///
    /// Returns an error if the player does not exist or the update fails.
    pub fn update_player_name(
        &mut self,
        player_id: i64,
        name: &str,
    ) -> Result<(), PersistenceError> {
        queries::players::update_player_name(&mut self.conn, player_id, name)
    }

    /// Deletes a player; refused while recorded goals reference it.
    ///
    /// # Errors
    ///
    /// Returns an error if the player does not exist or is still
    /// referenced by goals.
    pub fn delete_player(&mut self, player_id: i64) -> Result<(), PersistenceError> {
        queries::players::delete_player(&mut self.conn, player_id)
    }

    // ========================================================================
    // Non-school days
    // ========================================================================

    /// Inserts a new non-school day and returns its assigned ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, including when the date is
    /// already declared for the season.
    pub fn create_non_school_day(
        &mut self,
        non_school_day: &NonSchoolDay,
    ) -> Result<i64, PersistenceError> {
        queries::non_school_days::insert_non_school_day(&mut self.conn, non_school_day)
    }

    /// Lists the non-school days for a season in date order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_non_school_days_for_season(
        &mut self,
        season_id: i64,
    ) -> Result<Vec<NonSchoolDay>, PersistenceError> {
        queries::non_school_days::list_non_school_days_for_season(&mut self.conn, season_id)
    }

    /// Gets a non-school day by ID, or `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_non_school_day(
        &mut self,
        non_school_day_id: i64,
    ) -> Result<Option<NonSchoolDay>, PersistenceError> {
        queries::non_school_days::get_non_school_day(&mut self.conn, non_school_day_id)
    }

    /// Updates a non-school day's date and description.
    ///
    /// # Errors
    ///
    /// Returns an error if the day does not exist or the new date is
    /// already declared for the season.
    pub fn update_non_school_day(
        &mut self,
        non_school_day_id: i64,
        day: Date,
        description: &str,
    ) -> Result<(), PersistenceError> {
        queries::non_school_days::update_non_school_day(
            &mut self.conn,
            non_school_day_id,
            day,
            description,
        )
    }

    /// Deletes a non-school day.
    ///
    /// # Errors
    ///
    /// Returns an error if the day does not exist or the delete fails.
    pub fn delete_non_school_day(
        &mut self,
        non_school_day_id: i64,
    ) -> Result<(), PersistenceError> {
        queries::non_school_days::delete_non_school_day(&mut self.conn, non_school_day_id)
    }

    // ========================================================================
    // Matches
    // ========================================================================

    /// Stores a generated schedule for a league, all-or-nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the league already has fixtures or the insert
    /// fails.
    pub fn insert_schedule(
        &mut self,
        league_id: i64,
        scheduled: &[ScheduledMatch],
    ) -> Result<usize, PersistenceError> {
        queries::matches::insert_schedule(&mut self.conn, league_id, scheduled)
    }

    /// Lists the matches for a league in kickoff order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_matches_for_league(
        &mut self,
        league_id: i64,
    ) -> Result<Vec<Match>, PersistenceError> {
        queries::matches::list_matches_for_league(&mut self.conn, league_id)
    }

    /// Gets a match by ID, or `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_match(&mut self, match_id: i64) -> Result<Option<Match>, PersistenceError> {
        queries::matches::get_match(&mut self.conn, match_id)
    }

    /// Counts the matches recorded for a league.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_matches_for_league(
        &mut self,
        league_id: i64,
    ) -> Result<usize, PersistenceError> {
        queries::matches::count_matches_for_league(&mut self.conn, league_id)
    }

    /// Deletes a single match together with its result and goals.
    ///
    /// # Errors
    ///
    /// Returns an error if the match does not exist or the delete fails.
    pub fn delete_match(&mut self, match_id: i64) -> Result<(), PersistenceError> {
        queries::matches::delete_match(&mut self.conn, match_id)
    }

    /// Deletes every match for a league, the regeneration path.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_matches_for_league(
        &mut self,
        league_id: i64,
    ) -> Result<usize, PersistenceError> {
        queries::matches::delete_matches_for_league(&mut self.conn, league_id)
    }

    // ========================================================================
    // Results
    // ========================================================================

    /// Records or replaces the result of a match and marks it completed.
    ///
    /// # Arguments
    ///
    /// * `match_id` - The match the result belongs to
    /// * `home_score` - Goals or points scored by the home team
    /// * `away_score` - Goals or points scored by the away team
    /// * `goal_scorers` - `(player_id, minute)` pairs, one per goal
    ///
    /// # Errors
    ///
    /// Returns an error if the match or a referenced player does not
    /// exist, or if a write fails.
    pub fn record_match_result(
        &mut self,
        match_id: i64,
        home_score: u32,
        away_score: u32,
        goal_scorers: &[(i64, Option<u32>)],
    ) -> Result<i64, PersistenceError> {
        queries::results::record_match_result(
            &mut self.conn,
            match_id,
            home_score,
            away_score,
            goal_scorers,
        )
    }

    /// Gets the recorded result and goals for a match, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_result_for_match(
        &mut self,
        match_id: i64,
    ) -> Result<Option<(MatchResult, Vec<Goal>)>, PersistenceError> {
        queries::results::get_result_for_match(&mut self.conn, match_id)
    }

    /// Lists the completed results for a league as standings inputs.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_completed_matches(
        &mut self,
        league_id: i64,
    ) -> Result<Vec<CompletedMatch>, PersistenceError> {
        queries::results::list_completed_matches(&mut self.conn, league_id)
    }

    // ========================================================================
    // Aggregations
    // ========================================================================

    /// Tallies goals per player for a league.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn scorer_tallies_for_league(
        &mut self,
        league_id: i64,
    ) -> Result<Vec<ScorerTally>, PersistenceError> {
        queries::stats::scorer_tallies_for_league(&mut self.conn, league_id)
    }

    /// Counts the stored entities for the health probe.
    ///
    /// # Errors
    ///
    /// Returns an error if any count query fails.
    pub fn entity_counts(&mut self) -> Result<EntityCounts, PersistenceError> {
        queries::stats::entity_counts(&mut self.conn)
    }

    /// Deletes every row from every table, children before parents.
    ///
    /// This backs the gated reset endpoint; nothing else should call it.
    ///
    /// # Errors
    ///
    /// Returns an error if any delete fails.
    pub fn delete_all_data(&mut self) -> Result<(), PersistenceError> {
        queries::delete_all_data(&mut self.conn)
    }
}
