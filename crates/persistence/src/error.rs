// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// A database error occurred.
    DatabaseError(String),
    /// Database connection failed.
    DatabaseConnectionFailed(String),
    /// Database migration failed.
    MigrationFailed(String),
    /// Query execution failed.
    QueryFailed(String),
    /// Initialization error.
    InitializationError(String),
    /// Foreign key enforcement is not enabled.
    ForeignKeyEnforcementNotEnabled,
    /// The requested season was not found.
    SeasonNotFound(i64),
    /// The requested league was not found.
    LeagueNotFound(i64),
    /// The requested team was not found.
    TeamNotFound(i64),
    /// The requested player was not found.
    PlayerNotFound(i64),
    /// The requested match was not found.
    MatchNotFound(i64),
    /// Team cannot be deleted because scheduled matches reference it.
    TeamReferenced { team_id: i64 },
    /// Player cannot be deleted because recorded goals reference it.
    PlayerReferenced { player_id: i64 },
    /// A uniqueness constraint was violated.
    Conflict(String),
    /// A stored value could not be converted back into its domain type.
    InvalidStoredValue(String),
    /// The requested resource was not found.
    NotFound(String),
    /// A general error occurred.
    Other(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::DatabaseConnectionFailed(msg) => {
                write!(f, "Database connection failed: {msg}")
            }
            Self::MigrationFailed(msg) => write!(f, "Migration failed: {msg}"),
            Self::QueryFailed(msg) => write!(f, "Query failed: {msg}"),
            Self::InitializationError(msg) => write!(f, "Initialization error: {msg}"),
            Self::ForeignKeyEnforcementNotEnabled => {
                write!(f, "Foreign key enforcement is not enabled")
            }
            Self::SeasonNotFound(id) => write!(f, "Season not found: {id}"),
            Self::LeagueNotFound(id) => write!(f, "League not found: {id}"),
            Self::TeamNotFound(id) => write!(f, "Team not found: {id}"),
            Self::PlayerNotFound(id) => write!(f, "Player not found: {id}"),
            Self::MatchNotFound(id) => write!(f, "Match not found: {id}"),
            Self::TeamReferenced { team_id } => {
                write!(
                    f,
                    "Team {team_id} cannot be deleted: scheduled matches reference it"
                )
            }
            Self::PlayerReferenced { player_id } => {
                write!(
                    f,
                    "Player {player_id} cannot be deleted: recorded goals reference it"
                )
            }
            Self::Conflict(msg) => write!(f, "Conflict: {msg}"),
            Self::InvalidStoredValue(msg) => write!(f, "Invalid stored value: {msg}"),
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => Self::NotFound("Record not found".to_string()),
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                info,
            ) => Self::Conflict(info.message().to_string()),
            _ => Self::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}
