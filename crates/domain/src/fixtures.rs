// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Double round-robin fixture generation.
//!
//! Produces every ordered pairing of a league roster. Each pair of teams
//! meets exactly twice, once with each side at home, giving `N * (N - 1)`
//! fixtures for `N` teams.
//!
//! ## Invariants
//!
//! - Pairing order is a pure function of roster order. The outer index
//!   supplies the home side, the inner index the away side.
//! - The roster is taken as given; callers decide the ordering.

use crate::error::DomainError;

/// One team entry of a league roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    team_id: i64,
    name: String,
}

impl RosterEntry {
    /// Creates a new roster entry.
    #[must_use]
    pub const fn new(team_id: i64, name: String) -> Self {
        Self { team_id, name }
    }

    /// Returns the team identifier.
    #[must_use]
    pub const fn team_id(&self) -> i64 {
        self.team_id
    }

    /// Returns the team name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A single home/away pairing of two teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixturePairing {
    home_team_id: i64,
    away_team_id: i64,
}

impl FixturePairing {
    /// Creates a new pairing.
    #[must_use]
    pub const fn new(home_team_id: i64, away_team_id: i64) -> Self {
        Self {
            home_team_id,
            away_team_id,
        }
    }

    /// Returns the home team identifier.
    #[must_use]
    pub const fn home_team_id(&self) -> i64 {
        self.home_team_id
    }

    /// Returns the away team identifier.
    #[must_use]
    pub const fn away_team_id(&self) -> i64 {
        self.away_team_id
    }
}

/// Generates the double round-robin pairing list for a roster.
///
/// Walks every ordered index pair `(i, j)` with `i != j` and emits the
/// fixture `roster[i]` at home against `roster[j]`. For `N` teams this
/// yields exactly `N * (N - 1)` pairings in a deterministic order.
///
/// # Errors
///
/// Returns [`DomainError::InsufficientTeams`] when the roster holds fewer
/// than two teams.
pub fn round_robin_pairings(roster: &[RosterEntry]) -> Result<Vec<FixturePairing>, DomainError> {
    if roster.len() < 2 {
        return Err(DomainError::InsufficientTeams {
            count: roster.len(),
        });
    }

    let mut pairings: Vec<FixturePairing> = Vec::with_capacity(roster.len() * (roster.len() - 1));
    for home in roster {
        for away in roster {
            if home.team_id() != away.team_id() {
                pairings.push(FixturePairing::new(home.team_id(), away.team_id()));
            }
        }
    }

    Ok(pairings)
}
