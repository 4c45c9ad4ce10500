// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query modules for the persistence layer.
//!
//! All queries are expressed in Diesel DSL against a `SqliteConnection`
//! and are dispatched through the `Persistence` adapter in `lib.rs`.
//!
//! ## Module Organization
//!
//! - `seasons` — Season rows and the single-active-season flag
//! - `leagues` — League rows
//! - `teams` — Team rows and the delete guard against scheduled matches
//! - `players` — Player rows and the delete guard against recorded goals
//! - `non_school_days` — Season blackout dates
//! - `matches` — Fixture rows and the transactional schedule insert
//! - `results` — Match results and goals
//! - `stats` — Scorer tallies and health-probe counts

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::info;

use crate::diesel_schema;
use crate::error::PersistenceError;

pub mod leagues;
pub mod matches;
pub mod non_school_days;
pub mod players;
pub mod results;
pub mod seasons;
pub mod stats;
pub mod teams;

/// Deletes every row from every table, children before parents.
///
/// This backs the gated reset endpoint; nothing else should call it.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if any delete fails.
pub fn delete_all_data(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    diesel::delete(diesel_schema::goals::table).execute(conn)?;
    diesel::delete(diesel_schema::match_results::table).execute(conn)?;
    diesel::delete(diesel_schema::matches::table).execute(conn)?;
    diesel::delete(diesel_schema::non_school_days::table).execute(conn)?;
    diesel::delete(diesel_schema::players::table).execute(conn)?;
    diesel::delete(diesel_schema::teams::table).execute(conn)?;
    diesel::delete(diesel_schema::leagues::table).execute(conn)?;
    diesel::delete(diesel_schema::seasons::table).execute(conn)?;

    info!("Deleted all stored data");
    Ok(())
}
