// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `SQLite` connection setup and raw-SQL edges.
//!
//! Everything that cannot be said in Diesel DSL lives here: establishing
//! a connection, applying the embedded migrations, PRAGMA statements,
//! and the `last_insert_rowid()` lookup. Diesel has no DSL for PRAGMA or
//! `last_insert_rowid()`, so those run as raw SQL. All domain queries
//! stay in the `queries` module.

use diesel::SqliteConnection;
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Integer};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

use crate::error::PersistenceError;

/// Embedded migrations, applied on every connection initialization so a
/// fresh database file or in-memory instance is immediately usable.
const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Opens a `SQLite` database, enables foreign keys and applies pending
/// migrations.
///
/// # Arguments
///
/// * `database_url` - The `SQLite` database URL (a file path or an
///   in-memory URL)
///
/// # Errors
///
/// Returns an error if the connection cannot be established, the
/// foreign key PRAGMA fails, or a migration fails to apply.
pub fn initialize_database(database_url: &str) -> Result<SqliteConnection, PersistenceError> {
    info!(database_url, "Initializing SQLite database");

    let mut conn: SqliteConnection = SqliteConnection::establish(database_url)
        .map_err(|e| PersistenceError::DatabaseConnectionFailed(e.to_string()))?;

    diesel::sql_query("PRAGMA foreign_keys = ON")
        .execute(&mut conn)
        .map_err(|e| PersistenceError::QueryFailed(e.to_string()))?;

    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| PersistenceError::MigrationFailed(e.to_string()))?;

    Ok(conn)
}

/// Switches a file-backed database to WAL journaling.
///
/// WAL (Write-Ahead Logging) gives better read concurrency than the
/// default rollback journal. In-memory databases ignore it.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if the PRAGMA statement fails.
pub fn enable_wal_mode(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    diesel::sql_query("PRAGMA journal_mode = WAL")
        .execute(conn)
        .map_err(|e| PersistenceError::QueryFailed(e.to_string()))?;
    Ok(())
}

/// Row shape for the `PRAGMA foreign_keys` probe.
#[derive(QueryableByName)]
struct PragmaRow {
    #[diesel(sql_type = Integer)]
    foreign_keys: i32,
}

/// Checks that foreign key enforcement is active on the connection.
///
/// The schema leans on cascading deletes and reference checks, so a
/// connection without enforcement cannot uphold integrity.
///
/// # Arguments
///
/// * `conn` - The database connection to probe
///
/// # Errors
///
/// Returns an error if foreign key enforcement is switched off.
pub fn verify_foreign_key_enforcement(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    let foreign_keys_enabled: i32 = diesel::sql_query("PRAGMA foreign_keys")
        .get_result::<PragmaRow>(conn)?
        .foreign_keys;

    if foreign_keys_enabled == 0 {
        return Err(PersistenceError::ForeignKeyEnforcementNotEnabled);
    }

    info!("SQLite foreign key enforcement is enabled");
    Ok(())
}

/// Returns the row ID of the most recent insert on this connection.
///
/// `SQLite` does not support `RETURNING` in every statement form, so
/// inserts read the ID back through `last_insert_rowid()`.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_last_insert_rowid(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    Ok(diesel::select(sql::<BigInt>("last_insert_rowid()")).get_result(conn)?)
}
