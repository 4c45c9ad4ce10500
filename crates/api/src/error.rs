// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use liga_escolar_domain::DomainError;
use liga_escolar_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain and persistence errors and represent the
/// API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InsufficientTeams { count } => ApiError::DomainRuleViolation {
            rule: String::from("minimum_teams"),
            message: format!("A schedule needs at least 2 teams, but the league has {count}"),
        },
        DomainError::ExistingFixtures { league_id, count } => ApiError::DomainRuleViolation {
            rule: String::from("no_existing_fixtures"),
            message: format!(
                "League {league_id} already has {count} matches. Delete existing matches first"
            ),
        },
        DomainError::NoEligibleDates {
            window_start,
            window_end,
        } => ApiError::DomainRuleViolation {
            rule: String::from("eligible_dates"),
            message: format!(
                "No eligible match days between {window_start} and {window_end}"
            ),
        },
        DomainError::NoMatchesScheduled {
            eligible_dates,
            days_needed_per_cycle,
        } => ApiError::DomainRuleViolation {
            rule: String::from("full_cycle"),
            message: format!(
                "A full cycle needs {days_needed_per_cycle} match days but only {eligible_dates} are available"
            ),
        },
        DomainError::InvalidDailyCapacity { capacity } => ApiError::InvalidInput {
            field: String::from("daily_capacity"),
            message: format!("Invalid daily capacity: {capacity}. Must be at least 1"),
        },
        DomainError::InvalidSeasonName(msg) => ApiError::InvalidInput {
            field: String::from("name"),
            message: msg,
        },
        DomainError::InvalidSeasonDates {
            start_date,
            end_date,
        } => ApiError::InvalidInput {
            field: String::from("start_date"),
            message: format!("Season start date {start_date} is after end date {end_date}"),
        },
        DomainError::InvalidLeagueName(msg) => ApiError::InvalidInput {
            field: String::from("name"),
            message: msg,
        },
        DomainError::InvalidSport(value) => ApiError::InvalidInput {
            field: String::from("sport"),
            message: format!("Invalid sport: '{value}'. Must be 'FOOTBALL' or 'BASKETBALL'"),
        },
        DomainError::InvalidCategory(value) => ApiError::InvalidInput {
            field: String::from("category"),
            message: format!(
                "Invalid category: '{value}'. Must be 'CATEGORY_1_2', 'CATEGORY_3_4' or 'CATEGORY_5_6'"
            ),
        },
        DomainError::InvalidTeamName(msg) => ApiError::InvalidInput {
            field: String::from("name"),
            message: msg,
        },
        DomainError::DuplicateTeamName { league_id, name } => ApiError::DomainRuleViolation {
            rule: String::from("unique_team_name"),
            message: format!("A team named '{name}' already exists in league {league_id}"),
        },
        DomainError::InvalidPlayerName(msg) => ApiError::InvalidInput {
            field: String::from("name"),
            message: msg,
        },
        DomainError::InvalidDescription(msg) => ApiError::InvalidInput {
            field: String::from("description"),
            message: msg,
        },
        DomainError::DuplicateNonSchoolDay { season_id, day } => ApiError::DomainRuleViolation {
            rule: String::from("unique_non_school_day"),
            message: format!("{day} is already a non-school day in season {season_id}"),
        },
        DomainError::InvalidWeekday { index } => ApiError::InvalidInput {
            field: String::from("weekday"),
            message: format!("Invalid weekday index: {index}. Must be between 0 and 6"),
        },
        DomainError::DateArithmeticOverflow { operation } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Date arithmetic overflow while {operation}"),
        },
    }
}

/// Translates a persistence error into an API error.
///
/// Lookup failures become `ResourceNotFound`, constraint conflicts become
/// `DomainRuleViolation`, and everything infrastructural is folded into
/// `Internal` so database details never reach clients.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::SeasonNotFound(season_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Season"),
            message: format!("Season {season_id} does not exist"),
        },
        PersistenceError::LeagueNotFound(league_id) => ApiError::ResourceNotFound {
            resource_type: String::from("League"),
            message: format!("League {league_id} does not exist"),
        },
        PersistenceError::TeamNotFound(team_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Team"),
            message: format!("Team {team_id} does not exist"),
        },
        PersistenceError::PlayerNotFound(player_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Player"),
            message: format!("Player {player_id} does not exist"),
        },
        PersistenceError::MatchNotFound(match_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Match"),
            message: format!("Match {match_id} does not exist"),
        },
        PersistenceError::NotFound(message) => ApiError::ResourceNotFound {
            resource_type: String::from("Record"),
            message,
        },
        PersistenceError::TeamReferenced { team_id } => ApiError::DomainRuleViolation {
            rule: String::from("team_not_referenced"),
            message: format!(
                "Team {team_id} still has scheduled matches. Delete the matches first"
            ),
        },
        PersistenceError::PlayerReferenced { player_id } => ApiError::DomainRuleViolation {
            rule: String::from("player_not_referenced"),
            message: format!(
                "Player {player_id} still has recorded goals. Delete the results first"
            ),
        },
        PersistenceError::Conflict(message) => ApiError::DomainRuleViolation {
            rule: String::from("unique_constraint"),
            message,
        },
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}
