// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Calendar dates cross the wire as `YYYY-MM-DD` strings and kickoff
//! timestamps as `YYYY-MM-DD HH:MM:SS`, matching the stored forms.

/// API request to create a new season.
///
/// The created season becomes the active one; every other season is
/// deactivated. The standard six leagues and the default holiday blackouts
/// are seeded along with it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateSeasonRequest {
    /// Display name, e.g. "2026-2027".
    pub name: String,
    /// First day of the season (inclusive), as `YYYY-MM-DD`.
    pub start_date: String,
    /// Last day of the season (inclusive), as `YYYY-MM-DD`.
    pub end_date: String,
}

/// A league as embedded in season payloads.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LeagueSummary {
    /// The canonical numeric identifier.
    pub league_id: i64,
    /// The league name, e.g. "Fútbol 3-4".
    pub name: String,
    /// The sport in canonical form, e.g. "FOOTBALL".
    pub sport: String,
    /// The category in canonical form, e.g. "CATEGORY_3_4".
    pub category: String,
    /// The number of teams registered in the league.
    pub team_count: usize,
}

/// A non-school day as it appears in API payloads.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NonSchoolDayInfo {
    /// The canonical numeric identifier.
    pub non_school_day_id: i64,
    /// The owning season's identifier.
    pub season_id: i64,
    /// The excluded date, as `YYYY-MM-DD`.
    pub day: String,
    /// Human-readable reason, e.g. "Semana Santa".
    pub description: String,
}

/// A season with its leagues and non-school days.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SeasonInfo {
    /// The canonical numeric identifier.
    pub season_id: i64,
    /// The season name.
    pub name: String,
    /// First day of the season, as `YYYY-MM-DD`.
    pub start_date: String,
    /// Last day of the season, as `YYYY-MM-DD`.
    pub end_date: String,
    /// Whether this is the currently active season.
    pub is_active: bool,
    /// The leagues belonging to this season.
    pub leagues: Vec<LeagueSummary>,
    /// The blackout days declared for this season.
    pub non_school_days: Vec<NonSchoolDayInfo>,
}

/// API response for a successful season creation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateSeasonResponse {
    /// The created season with its seeded leagues and blackouts.
    pub season: SeasonInfo,
}

/// API response for listing seasons.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListSeasonsResponse {
    /// All seasons, most recent start date first.
    pub seasons: Vec<SeasonInfo>,
}

/// API response for fetching a single season.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GetSeasonResponse {
    /// The requested season.
    pub season: SeasonInfo,
}

/// API response for activating a season.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ActivateSeasonResponse {
    /// The newly active season.
    pub season: SeasonInfo,
}

/// API response for deleting a season.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeleteSeasonResponse {
    /// The identifier of the deleted season.
    pub season_id: i64,
    /// The name of the deleted season.
    pub name: String,
}

/// API request to create a league with auto-named teams.
///
/// The league name is derived from the sport and category, e.g.
/// "Baloncesto 5-6", and the teams are named "Equipo 1" through
/// "Equipo N".
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateLeagueRequest {
    /// The season the league belongs to.
    pub season_id: i64,
    /// The sport, e.g. "FOOTBALL".
    pub sport: String,
    /// The category, e.g. "CATEGORY_3_4".
    pub category: String,
    /// How many placeholder teams to create.
    pub team_count: u32,
}

/// A team as it appears in API payloads.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TeamInfo {
    /// The canonical numeric identifier.
    pub team_id: i64,
    /// The owning league's identifier.
    pub league_id: i64,
    /// The team name, unique within its league.
    pub name: String,
}

/// A league with its teams and owning season.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LeagueInfo {
    /// The canonical numeric identifier.
    pub league_id: i64,
    /// The owning season's identifier.
    pub season_id: i64,
    /// The owning season's name.
    pub season_name: String,
    /// The league name.
    pub name: String,
    /// The sport in canonical form.
    pub sport: String,
    /// The category in canonical form.
    pub category: String,
    /// The teams in the league, ordered by name.
    pub teams: Vec<TeamInfo>,
}

/// API response for a successful league creation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateLeagueResponse {
    /// The created league with its seeded teams.
    pub league: LeagueInfo,
}

/// API response for listing leagues.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListLeaguesResponse {
    /// All leagues, ordered by name.
    pub leagues: Vec<LeagueInfo>,
}

/// API response for wiping all leagues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeleteAllLeaguesResponse {
    /// The number of leagues removed.
    pub leagues_deleted: usize,
    /// The number of teams removed by cascade.
    pub teams_deleted: usize,
    /// The number of matches removed by cascade.
    pub matches_deleted: usize,
}

/// API request to create a team.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateTeamRequest {
    /// The league the team belongs to.
    pub league_id: i64,
    /// The team name, unique within the league.
    pub name: String,
}

/// API response for a successful team creation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateTeamResponse {
    /// The created team.
    pub team: TeamInfo,
}

/// API request to rename a team.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UpdateTeamRequest {
    /// The new team name.
    pub name: String,
}

/// API response for a successful team rename.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UpdateTeamResponse {
    /// The renamed team.
    pub team: TeamInfo,
}

/// API response for deleting a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeleteTeamResponse {
    /// The identifier of the deleted team.
    pub team_id: i64,
}

/// API request to create a player.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreatePlayerRequest {
    /// The team the player belongs to.
    pub team_id: i64,
    /// The player name.
    pub name: String,
}

/// A player as it appears in API payloads.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlayerInfo {
    /// The canonical numeric identifier.
    pub player_id: i64,
    /// The owning team's identifier.
    pub team_id: i64,
    /// The player name.
    pub name: String,
}

/// API response for a successful player creation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreatePlayerResponse {
    /// The created player.
    pub player: PlayerInfo,
}

/// API request to rename a player.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UpdatePlayerRequest {
    /// The new player name.
    pub name: String,
}

/// API response for a successful player rename.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UpdatePlayerResponse {
    /// The renamed player.
    pub player: PlayerInfo,
}

/// API response for deleting a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeletePlayerResponse {
    /// The identifier of the deleted player.
    pub player_id: i64,
}

/// API request to declare a non-school day.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateNonSchoolDayRequest {
    /// The season the blackout belongs to.
    pub season_id: i64,
    /// The excluded date, as `YYYY-MM-DD`.
    pub day: String,
    /// Human-readable reason.
    pub description: String,
}

/// API response for a successful non-school day creation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateNonSchoolDayResponse {
    /// The created blackout day.
    pub non_school_day: NonSchoolDayInfo,
}

/// API response for listing a season's non-school days.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListNonSchoolDaysResponse {
    /// The blackout days in date order.
    pub non_school_days: Vec<NonSchoolDayInfo>,
}

/// API request to update a non-school day.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UpdateNonSchoolDayRequest {
    /// The new date, as `YYYY-MM-DD`.
    pub day: String,
    /// The new description.
    pub description: String,
}

/// API response for a successful non-school day update.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UpdateNonSchoolDayResponse {
    /// The updated blackout day.
    pub non_school_day: NonSchoolDayInfo,
}

/// API response for deleting a non-school day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeleteNonSchoolDayResponse {
    /// The identifier of the deleted blackout day.
    pub non_school_day_id: i64,
}

/// API request to generate a league's schedule.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GenerateScheduleRequest {
    /// The league to schedule.
    pub league_id: i64,
    /// Requested first match day, as `YYYY-MM-DD`. Clamped to the season
    /// window before scheduling.
    pub start_date: String,
}

/// A recorded goal as it appears in match payloads.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GoalInfo {
    /// The canonical numeric identifier.
    pub goal_id: i64,
    /// The scoring player's identifier.
    pub player_id: i64,
    /// The scoring player's name.
    pub player_name: String,
    /// Minute of play, if recorded.
    pub minute: Option<u32>,
}

/// A recorded result as embedded in match payloads.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MatchResultInfo {
    /// Goals or points scored by the home team.
    pub home_score: u32,
    /// Goals or points scored by the away team.
    pub away_score: u32,
    /// The attributed goals in recording order.
    pub goals: Vec<GoalInfo>,
}

/// A match with team names and, when completed, its result.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MatchInfo {
    /// The canonical numeric identifier.
    pub match_id: i64,
    /// The owning league's identifier.
    pub league_id: i64,
    /// The home team's identifier.
    pub home_team_id: i64,
    /// The home team's name.
    pub home_team_name: String,
    /// The away team's identifier.
    pub away_team_id: i64,
    /// The away team's name.
    pub away_team_name: String,
    /// Kickoff date-time, as `YYYY-MM-DD HH:MM:SS`.
    pub kickoff: String,
    /// Venue label, e.g. "Fútbol 3-4 - Cancha 1".
    pub venue: String,
    /// Match day number within the cycle (1-based).
    pub round: u32,
    /// Round-robin cycle number (1-based).
    pub cycle: u32,
    /// Whether a result has been recorded.
    pub is_completed: bool,
    /// The recorded result, if any.
    pub result: Option<MatchResultInfo>,
}

/// Per-team match counts for a generated schedule.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TeamScheduleInfo {
    /// The team's identifier.
    pub team_id: i64,
    /// The team's name.
    pub name: String,
    /// Matches played at home.
    pub home_matches: u32,
    /// Matches played away.
    pub away_matches: u32,
    /// Total matches.
    pub total_matches: u32,
}

/// Summary of a schedule generation run.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScheduleSummaryInfo {
    /// Total matches placed on the calendar.
    pub total_matches: usize,
    /// Number of teams scheduled.
    pub total_teams: usize,
    /// Number of complete double round-robin cycles.
    pub total_cycles: u32,
    /// Eligible match days found in the window.
    pub eligible_dates: usize,
    /// Match days consumed by one full cycle.
    pub days_needed_per_cycle: usize,
    /// First day of the scheduling window, as `YYYY-MM-DD`.
    pub window_start: String,
    /// Last day of the scheduling window, as `YYYY-MM-DD`.
    pub window_end: String,
    /// Date of the first scheduled match, as `YYYY-MM-DD`.
    pub first_match_day: String,
    /// Date of the last scheduled match, as `YYYY-MM-DD`.
    pub last_match_day: String,
    /// Per-team home/away tallies.
    pub teams: Vec<TeamScheduleInfo>,
}

/// API response for a successful schedule generation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GenerateScheduleResponse {
    /// The created matches in kickoff order.
    pub matches: Vec<MatchInfo>,
    /// Aggregate information about the run.
    pub summary: ScheduleSummaryInfo,
}

/// API response for listing a league's matches.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListMatchesResponse {
    /// The matches in kickoff order.
    pub matches: Vec<MatchInfo>,
}

/// One goal attribution in a result submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GoalEntry {
    /// The scoring player's identifier.
    pub player_id: i64,
    /// Minute of play, if known.
    pub minute: Option<u32>,
}

/// API request to record or replace a match result.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RecordResultRequest {
    /// Goals or points scored by the home team.
    pub home_score: u32,
    /// Goals or points scored by the away team.
    pub away_score: u32,
    /// The attributed goals. May be shorter than the scoreline when
    /// scorers are unknown.
    pub goals: Vec<GoalEntry>,
}

/// API response for a successful result recording.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RecordResultResponse {
    /// The completed match with its recorded result.
    pub match_info: MatchInfo,
}

/// API response for deleting a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeleteMatchResponse {
    /// The identifier of the deleted match.
    pub match_id: i64,
}

/// API response for clearing a league's fixtures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeleteLeagueMatchesResponse {
    /// The league whose fixtures were cleared.
    pub league_id: i64,
    /// The number of matches removed.
    pub matches_deleted: usize,
}

/// One row of a league table.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TeamStandingInfo {
    /// The team's identifier.
    pub team_id: i64,
    /// The team's name.
    pub name: String,
    /// Completed matches played.
    pub played: u32,
    /// Matches won.
    pub won: u32,
    /// Matches drawn.
    pub drawn: u32,
    /// Matches lost.
    pub lost: u32,
    /// Goals scored.
    pub goals_for: u32,
    /// Goals conceded.
    pub goals_against: u32,
    /// Goals scored minus goals conceded.
    pub goal_difference: i64,
    /// League points (2 per win, 1 per draw).
    pub points: u32,
}

/// One row of a top-scorer table.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TopScorerInfo {
    /// The player's identifier.
    pub player_id: i64,
    /// The player's name.
    pub player_name: String,
    /// The name of the player's team.
    pub team_name: String,
    /// Goals scored across the league.
    pub goals: u32,
}

/// Standings and top scorers for one category of a sport.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CategoryStandingsInfo {
    /// The category display label, e.g. "Categoría 3-4".
    pub category: String,
    /// The league's identifier.
    pub league_id: i64,
    /// The league's name.
    pub league_name: String,
    /// The league table, best first.
    pub standings: Vec<TeamStandingInfo>,
    /// The top scorers, capped at ten.
    pub top_scorers: Vec<TopScorerInfo>,
}

/// API response for the standings endpoint.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StandingsResponse {
    /// The sport in canonical form.
    pub sport: String,
    /// The active season's identifier.
    pub season_id: i64,
    /// The active season's name.
    pub season_name: String,
    /// Per-category tables in category order.
    pub categories: Vec<CategoryStandingsInfo>,
}

/// API response for the health probe.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    /// Fixed "ok" marker; the probe fails by status code, not by body.
    pub status: String,
    /// Number of stored seasons.
    pub seasons: usize,
    /// Number of stored leagues.
    pub leagues: usize,
    /// Number of stored teams.
    pub teams: usize,
    /// Number of stored players.
    pub players: usize,
    /// Number of stored matches.
    pub matches: usize,
    /// Probe time in UTC, RFC 3339.
    pub timestamp: String,
}

/// API response for the gated full reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ResetResponse {
    /// Seasons removed.
    pub seasons_deleted: usize,
    /// Leagues removed.
    pub leagues_deleted: usize,
    /// Teams removed.
    pub teams_deleted: usize,
    /// Players removed.
    pub players_deleted: usize,
    /// Matches removed.
    pub matches_deleted: usize,
}
