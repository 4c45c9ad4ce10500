// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use std::str::FromStr;
use time::{Date, PrimitiveDateTime};

/// The sport a league plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sport {
    /// Association football.
    Football,
    /// Basketball.
    Basketball,
}

impl FromStr for Sport {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "FOOTBALL" => Ok(Self::Football),
            "BASKETBALL" => Ok(Self::Basketball),
            _ => Err(DomainError::InvalidSport(s.to_string())),
        }
    }
}

impl std::fmt::Display for Sport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Sport {
    /// Converts this sport to its stored string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Football => "FOOTBALL",
            Self::Basketball => "BASKETBALL",
        }
    }

    /// Returns the Spanish display name used in league names.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Football => "Fútbol",
            Self::Basketball => "Baloncesto",
        }
    }
}

/// The school-grade category a league covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Grades 1 and 2.
    Grades1And2,
    /// Grades 3 and 4.
    Grades3And4,
    /// Grades 5 and 6.
    Grades5And6,
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "CATEGORY_1_2" => Ok(Self::Grades1And2),
            "CATEGORY_3_4" => Ok(Self::Grades3And4),
            "CATEGORY_5_6" => Ok(Self::Grades5And6),
            _ => Err(DomainError::InvalidCategory(s.to_string())),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Category {
    /// All categories in presentation order.
    pub const ALL: [Self; 3] = [Self::Grades1And2, Self::Grades3And4, Self::Grades5And6];

    /// Converts this category to its stored string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Grades1And2 => "CATEGORY_1_2",
            Self::Grades3And4 => "CATEGORY_3_4",
            Self::Grades5And6 => "CATEGORY_5_6",
        }
    }

    /// Returns the grade-range fragment used when composing league names.
    #[must_use]
    pub const fn grade_range(&self) -> &'static str {
        match self {
            Self::Grades1And2 => "1-2",
            Self::Grades3And4 => "3-4",
            Self::Grades5And6 => "5-6",
        }
    }

    /// Returns the Spanish display label for standings tables.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Grades1And2 => "Categoría 1-2",
            Self::Grades3And4 => "Categoría 3-4",
            Self::Grades5And6 => "Categoría 5-6",
        }
    }
}

/// A school-year season. At most one season is active at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Season {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the season has not been persisted yet.
    season_id: Option<i64>,
    /// Display name, e.g. "2025-2026".
    name: String,
    /// First day of the season (inclusive).
    start_date: Date,
    /// Last day of the season (inclusive).
    end_date: Date,
    /// Whether this is the currently active season.
    is_active: bool,
}

impl Season {
    /// Creates a new `Season` without a persisted ID.
    ///
    /// The name is trimmed; the date range must not be inverted.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty after trimming or if
    /// `start_date` is after `end_date`.
    pub fn new(name: &str, start_date: Date, end_date: Date) -> Result<Self, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidSeasonName(String::from(
                "Season name cannot be empty",
            )));
        }
        if start_date > end_date {
            return Err(DomainError::InvalidSeasonDates {
                start_date,
                end_date,
            });
        }
        Ok(Self {
            season_id: None,
            name: name.to_string(),
            start_date,
            end_date,
            is_active: false,
        })
    }

    /// Creates a `Season` with an existing persisted ID.
    #[must_use]
    pub const fn with_id(
        season_id: i64,
        name: String,
        start_date: Date,
        end_date: Date,
        is_active: bool,
    ) -> Self {
        Self {
            season_id: Some(season_id),
            name,
            start_date,
            end_date,
            is_active,
        }
    }

    /// Returns the canonical numeric identifier if persisted.
    #[must_use]
    pub const fn season_id(&self) -> Option<i64> {
        self.season_id
    }

    /// Returns the season name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the first day of the season.
    #[must_use]
    pub const fn start_date(&self) -> Date {
        self.start_date
    }

    /// Returns the last day of the season.
    #[must_use]
    pub const fn end_date(&self) -> Date {
        self.end_date
    }

    /// Returns whether this season is the active one.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }
}

/// A league within a season, identified by sport and grade category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct League {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the league has not been persisted yet.
    league_id: Option<i64>,
    /// The season this league belongs to.
    season_id: i64,
    /// Display name, e.g. "Fútbol 3-4".
    name: String,
    /// The sport played.
    sport: Sport,
    /// The grade category.
    category: Category,
}

impl League {
    /// Creates a new `League` without a persisted ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty after trimming.
    pub fn new(
        season_id: i64,
        name: &str,
        sport: Sport,
        category: Category,
    ) -> Result<Self, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidLeagueName(String::from(
                "League name cannot be empty",
            )));
        }
        Ok(Self {
            league_id: None,
            season_id,
            name: name.to_string(),
            sport,
            category,
        })
    }

    /// Creates a `League` with an existing persisted ID.
    #[must_use]
    pub const fn with_id(
        league_id: i64,
        season_id: i64,
        name: String,
        sport: Sport,
        category: Category,
    ) -> Self {
        Self {
            league_id: Some(league_id),
            season_id,
            name,
            sport,
            category,
        }
    }

    /// Composes the standard league name for a sport/category pair,
    /// e.g. "Baloncesto 5-6".
    #[must_use]
    pub fn standard_name(sport: Sport, category: Category) -> String {
        format!("{} {}", sport.display_name(), category.grade_range())
    }

    /// Returns the canonical numeric identifier if persisted.
    #[must_use]
    pub const fn league_id(&self) -> Option<i64> {
        self.league_id
    }

    /// Returns the owning season's identifier.
    #[must_use]
    pub const fn season_id(&self) -> i64 {
        self.season_id
    }

    /// Returns the league name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the sport played in this league.
    #[must_use]
    pub const fn sport(&self) -> Sport {
        self.sport
    }

    /// Returns the grade category of this league.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }
}

/// A team within a league. Team names are unique per league.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the team has not been persisted yet.
    team_id: Option<i64>,
    /// The league this team belongs to.
    league_id: i64,
    /// Display name, unique within the league.
    name: String,
}

impl Team {
    /// Creates a new `Team` without a persisted ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty after trimming.
    pub fn new(league_id: i64, name: &str) -> Result<Self, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidTeamName(String::from(
                "Team name cannot be empty",
            )));
        }
        Ok(Self {
            team_id: None,
            league_id,
            name: name.to_string(),
        })
    }

    /// Creates a `Team` with an existing persisted ID.
    #[must_use]
    pub const fn with_id(team_id: i64, league_id: i64, name: String) -> Self {
        Self {
            team_id: Some(team_id),
            league_id,
            name,
        }
    }

    /// Returns the canonical numeric identifier if persisted.
    #[must_use]
    pub const fn team_id(&self) -> Option<i64> {
        self.team_id
    }

    /// Returns the owning league's identifier.
    #[must_use]
    pub const fn league_id(&self) -> i64 {
        self.league_id
    }

    /// Returns the team name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A player registered to a team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the player has not been persisted yet.
    player_id: Option<i64>,
    /// The team this player belongs to.
    team_id: i64,
    /// Display name.
    name: String,
}

impl Player {
    /// Creates a new `Player` without a persisted ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty after trimming.
    pub fn new(team_id: i64, name: &str) -> Result<Self, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidPlayerName(String::from(
                "Player name cannot be empty",
            )));
        }
        Ok(Self {
            player_id: None,
            team_id,
            name: name.to_string(),
        })
    }

    /// Creates a `Player` with an existing persisted ID.
    #[must_use]
    pub const fn with_id(player_id: i64, team_id: i64, name: String) -> Self {
        Self {
            player_id: Some(player_id),
            team_id,
            name,
        }
    }

    /// Returns the canonical numeric identifier if persisted.
    #[must_use]
    pub const fn player_id(&self) -> Option<i64> {
        self.player_id
    }

    /// Returns the owning team's identifier.
    #[must_use]
    pub const fn team_id(&self) -> i64 {
        self.team_id
    }

    /// Returns the player name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A season-scoped blackout date excluded from scheduling regardless
/// of weekday or holiday status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonSchoolDay {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the day has not been persisted yet.
    non_school_day_id: Option<i64>,
    /// The season this blackout belongs to.
    season_id: i64,
    /// The excluded calendar date.
    day: Date,
    /// Human-readable reason, e.g. "Semana Santa".
    description: String,
}

impl NonSchoolDay {
    /// Creates a new `NonSchoolDay` without a persisted ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the description is empty after trimming.
    pub fn new(season_id: i64, day: Date, description: &str) -> Result<Self, DomainError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(DomainError::InvalidDescription(String::from(
                "Non-school day description cannot be empty",
            )));
        }
        Ok(Self {
            non_school_day_id: None,
            season_id,
            day,
            description: description.to_string(),
        })
    }

    /// Creates a `NonSchoolDay` with an existing persisted ID.
    #[must_use]
    pub const fn with_id(
        non_school_day_id: i64,
        season_id: i64,
        day: Date,
        description: String,
    ) -> Self {
        Self {
            non_school_day_id: Some(non_school_day_id),
            season_id,
            day,
            description,
        }
    }

    /// Returns the canonical numeric identifier if persisted.
    #[must_use]
    pub const fn non_school_day_id(&self) -> Option<i64> {
        self.non_school_day_id
    }

    /// Returns the owning season's identifier.
    #[must_use]
    pub const fn season_id(&self) -> i64 {
        self.season_id
    }

    /// Returns the excluded calendar date.
    #[must_use]
    pub const fn day(&self) -> Date {
        self.day
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// A match between two teams, bound to a kickoff date-time and venue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the match has not been persisted yet.
    match_id: Option<i64>,
    /// The league this match belongs to.
    league_id: i64,
    /// The home team's identifier.
    home_team_id: i64,
    /// The away team's identifier.
    away_team_id: i64,
    /// Kickoff date-time, normalized to 12:00:00.
    kickoff: PrimitiveDateTime,
    /// Venue label, e.g. "Fútbol 3-4 - Cancha 2".
    venue: String,
    /// Match day number within the cycle (1-based).
    round: u32,
    /// Which repetition of the full round-robin this match belongs to (1-based).
    cycle: u32,
    /// Whether a result has been recorded.
    is_completed: bool,
}

impl Match {
    /// Creates a `Match` with an existing persisted ID.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn with_id(
        match_id: i64,
        league_id: i64,
        home_team_id: i64,
        away_team_id: i64,
        kickoff: PrimitiveDateTime,
        venue: String,
        round: u32,
        cycle: u32,
        is_completed: bool,
    ) -> Self {
        Self {
            match_id: Some(match_id),
            league_id,
            home_team_id,
            away_team_id,
            kickoff,
            venue,
            round,
            cycle,
            is_completed,
        }
    }

    /// Returns the canonical numeric identifier if persisted.
    #[must_use]
    pub const fn match_id(&self) -> Option<i64> {
        self.match_id
    }

    /// Returns the owning league's identifier.
    #[must_use]
    pub const fn league_id(&self) -> i64 {
        self.league_id
    }

    /// Returns the home team's identifier.
    #[must_use]
    pub const fn home_team_id(&self) -> i64 {
        self.home_team_id
    }

    /// Returns the away team's identifier.
    #[must_use]
    pub const fn away_team_id(&self) -> i64 {
        self.away_team_id
    }

    /// Returns the kickoff date-time.
    #[must_use]
    pub const fn kickoff(&self) -> PrimitiveDateTime {
        self.kickoff
    }

    /// Returns the venue label.
    #[must_use]
    pub fn venue(&self) -> &str {
        &self.venue
    }

    /// Returns the pairing index within the cycle.
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    /// Returns the cycle number.
    #[must_use]
    pub const fn cycle(&self) -> u32 {
        self.cycle
    }

    /// Returns whether a result has been recorded.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.is_completed
    }
}

/// The recorded final score of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the result has not been persisted yet.
    match_result_id: Option<i64>,
    /// The match this result belongs to.
    match_id: i64,
    /// Goals or points scored by the home team.
    home_score: u32,
    /// Goals or points scored by the away team.
    away_score: u32,
}

impl MatchResult {
    /// Creates a new `MatchResult` without a persisted ID.
    #[must_use]
    pub const fn new(match_id: i64, home_score: u32, away_score: u32) -> Self {
        Self {
            match_result_id: None,
            match_id,
            home_score,
            away_score,
        }
    }

    /// Creates a `MatchResult` with an existing persisted ID.
    #[must_use]
    pub const fn with_id(
        match_result_id: i64,
        match_id: i64,
        home_score: u32,
        away_score: u32,
    ) -> Self {
        Self {
            match_result_id: Some(match_result_id),
            match_id,
            home_score,
            away_score,
        }
    }

    /// Returns the canonical numeric identifier if persisted.
    #[must_use]
    pub const fn match_result_id(&self) -> Option<i64> {
        self.match_result_id
    }

    /// Returns the match identifier.
    #[must_use]
    pub const fn match_id(&self) -> i64 {
        self.match_id
    }

    /// Returns the home team's score.
    #[must_use]
    pub const fn home_score(&self) -> u32 {
        self.home_score
    }

    /// Returns the away team's score.
    #[must_use]
    pub const fn away_score(&self) -> u32 {
        self.away_score
    }
}

/// A single goal (or basket) credited to a player within a match result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Goal {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the goal has not been persisted yet.
    goal_id: Option<i64>,
    /// The match result this goal belongs to.
    match_result_id: i64,
    /// The scoring player.
    player_id: i64,
    /// Minute of play, when recorded.
    minute: Option<u32>,
}

impl Goal {
    /// Creates a new `Goal` without a persisted ID.
    #[must_use]
    pub const fn new(match_result_id: i64, player_id: i64, minute: Option<u32>) -> Self {
        Self {
            goal_id: None,
            match_result_id,
            player_id,
            minute,
        }
    }

    /// Creates a `Goal` with an existing persisted ID.
    #[must_use]
    pub const fn with_id(
        goal_id: i64,
        match_result_id: i64,
        player_id: i64,
        minute: Option<u32>,
    ) -> Self {
        Self {
            goal_id: Some(goal_id),
            match_result_id,
            player_id,
            minute,
        }
    }

    /// Returns the canonical numeric identifier if persisted.
    #[must_use]
    pub const fn goal_id(&self) -> Option<i64> {
        self.goal_id
    }

    /// Returns the owning match result's identifier.
    #[must_use]
    pub const fn match_result_id(&self) -> i64 {
        self.match_result_id
    }

    /// Returns the scoring player's identifier.
    #[must_use]
    pub const fn player_id(&self) -> i64 {
        self.player_id
    }

    /// Returns the minute of play, when recorded.
    #[must_use]
    pub const fn minute(&self) -> Option<u32> {
        self.minute
    }
}
