// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation and schedule derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Fewer than two teams were supplied to the scheduler.
    InsufficientTeams {
        /// The number of teams actually supplied.
        count: usize,
    },
    /// Matches already exist for the league; they must be cleared first.
    ExistingFixtures {
        /// The league that already has fixtures.
        league_id: i64,
        /// The number of existing fixtures.
        count: usize,
    },
    /// The scheduling window contains no usable dates after exclusions.
    NoEligibleDates {
        /// The start of the window that was searched.
        window_start: time::Date,
        /// The end of the window that was searched.
        window_end: time::Date,
    },
    /// Eligible dates exist, but not enough for a single full cycle.
    NoMatchesScheduled {
        /// The number of eligible dates found.
        eligible_dates: usize,
        /// The number of dates one full cycle requires.
        days_needed_per_cycle: usize,
    },
    /// Daily capacity must be at least one match per day.
    InvalidDailyCapacity {
        /// The invalid capacity value.
        capacity: u32,
    },
    /// Season name is empty or invalid.
    InvalidSeasonName(String),
    /// Season date range is inverted or otherwise invalid.
    InvalidSeasonDates {
        /// The supplied start date.
        start_date: time::Date,
        /// The supplied end date.
        end_date: time::Date,
    },
    /// League name is empty or invalid.
    InvalidLeagueName(String),
    /// Sport designation is not recognized.
    InvalidSport(String),
    /// Category designation is not recognized.
    InvalidCategory(String),
    /// Team name is empty or invalid.
    InvalidTeamName(String),
    /// A team with this name already exists in the league.
    DuplicateTeamName {
        /// The league containing the duplicate.
        league_id: i64,
        /// The duplicate name.
        name: String,
    },
    /// Player name is empty or invalid.
    InvalidPlayerName(String),
    /// Non-school day description is empty or invalid.
    InvalidDescription(String),
    /// A non-school day already exists for this date in the season.
    DuplicateNonSchoolDay {
        /// The season containing the duplicate.
        season_id: i64,
        /// The duplicate date.
        day: time::Date,
    },
    /// A weekday index outside 0..=6 was supplied.
    InvalidWeekday {
        /// The invalid index (0 = Sunday .. 6 = Saturday).
        index: u8,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsufficientTeams { count } => {
                write!(
                    f,
                    "At least 2 teams are required to generate a schedule, got {count}"
                )
            }
            Self::ExistingFixtures { league_id, count } => {
                write!(
                    f,
                    "League {league_id} already has {count} matches. Delete existing matches first"
                )
            }
            Self::NoEligibleDates {
                window_start,
                window_end,
            } => {
                write!(
                    f,
                    "No eligible match days between {window_start} and {window_end} after excluding weekends, holidays and non-school days"
                )
            }
            Self::NoMatchesScheduled {
                eligible_dates,
                days_needed_per_cycle,
            } => {
                write!(
                    f,
                    "Not enough eligible dates for a full cycle: {eligible_dates} available, {days_needed_per_cycle} needed"
                )
            }
            Self::InvalidDailyCapacity { capacity } => {
                write!(
                    f,
                    "Invalid daily capacity: {capacity}. Must be greater than 0"
                )
            }
            Self::InvalidSeasonName(msg) => write!(f, "Invalid season name: {msg}"),
            Self::InvalidSeasonDates {
                start_date,
                end_date,
            } => {
                write!(
                    f,
                    "Season start date {start_date} must not be after end date {end_date}"
                )
            }
            Self::InvalidLeagueName(msg) => write!(f, "Invalid league name: {msg}"),
            Self::InvalidSport(value) => write!(f, "Invalid sport: '{value}'"),
            Self::InvalidCategory(value) => write!(f, "Invalid category: '{value}'"),
            Self::InvalidTeamName(msg) => write!(f, "Invalid team name: {msg}"),
            Self::DuplicateTeamName { league_id, name } => {
                write!(
                    f,
                    "A team named '{name}' already exists in league {league_id}"
                )
            }
            Self::InvalidPlayerName(msg) => write!(f, "Invalid player name: {msg}"),
            Self::InvalidDescription(msg) => write!(f, "Invalid description: {msg}"),
            Self::DuplicateNonSchoolDay { season_id, day } => {
                write!(
                    f,
                    "A non-school day for {day} already exists in season {season_id}"
                )
            }
            Self::InvalidWeekday { index } => {
                write!(
                    f,
                    "Invalid weekday index: {index}. Must be between 0 (Sunday) and 6 (Saturday)"
                )
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
