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
    clippy::all
)]

pub mod error;
pub mod handlers;
pub mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_domain_error, translate_persistence_error};
pub use handlers::{
    activate_season, create_league, create_non_school_day, create_player, create_season,
    create_team, delete_all_leagues, delete_league_matches, delete_match, delete_non_school_day,
    delete_player, delete_season, delete_team, generate_schedule, get_season, health,
    list_leagues, list_matches, list_non_school_days, list_seasons, record_result, reset,
    standings, update_non_school_day, update_player, update_team,
};
pub use request_response::{
    ActivateSeasonResponse, CategoryStandingsInfo, CreateLeagueRequest, CreateLeagueResponse,
    CreateNonSchoolDayRequest, CreateNonSchoolDayResponse, CreatePlayerRequest,
    CreatePlayerResponse, CreateSeasonRequest, CreateSeasonResponse, CreateTeamRequest,
    CreateTeamResponse, DeleteAllLeaguesResponse, DeleteLeagueMatchesResponse,
    DeleteMatchResponse, DeleteNonSchoolDayResponse, DeletePlayerResponse, DeleteSeasonResponse,
    DeleteTeamResponse, GenerateScheduleRequest, GenerateScheduleResponse, GetSeasonResponse,
    GoalEntry, GoalInfo, HealthResponse, LeagueInfo, LeagueSummary, ListLeaguesResponse,
    ListMatchesResponse, ListNonSchoolDaysResponse, ListSeasonsResponse, MatchInfo,
    MatchResultInfo, NonSchoolDayInfo, PlayerInfo, RecordResultRequest, RecordResultResponse,
    ResetResponse, ScheduleSummaryInfo, SeasonInfo, StandingsResponse, TeamInfo,
    TeamScheduleInfo, TeamStandingInfo, TopScorerInfo, UpdateNonSchoolDayRequest,
    UpdateNonSchoolDayResponse, UpdatePlayerRequest, UpdatePlayerResponse, UpdateTeamRequest,
    UpdateTeamResponse,
};
