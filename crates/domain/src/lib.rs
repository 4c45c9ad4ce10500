// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod calendar;
mod error;
mod fixtures;
mod holidays;
mod schedule;
mod standings;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use calendar::{PlayableDate, eligible_match_days};
pub use fixtures::{FixturePairing, RosterEntry, round_robin_pairings};
pub use holidays::{easter_sunday, is_holiday, is_weekend, movable_holidays};
pub use schedule::{
    ScheduleOutcome, SchedulePlan, ScheduleSummary, ScheduledMatch, TeamTally, build_schedule,
};
pub use standings::{CompletedMatch, ScorerTally, TeamStanding, league_table, top_scorers};

// Re-export public types
pub use error::DomainError;
pub use types::{
    Category, Goal, League, Match, MatchResult, NonSchoolDay, Player, Season, Sport, Team,
};
pub use validation::{weekday_from_index, weekday_index, weekdays_from_indices};
