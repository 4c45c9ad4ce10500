// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Handler functions for every API operation.
//!
//! Each handler takes `&mut Persistence` plus a request DTO (or plain
//! identifiers for path-addressed operations) and returns a response DTO.
//! Domain and persistence errors are translated at this boundary; nothing
//! below the API layer leaks to callers.

use std::collections::HashMap;

use liga_escolar_domain::{
    Category, CompletedMatch, DomainError, League, Match, NonSchoolDay, Player, RosterEntry,
    SchedulePlan, ScheduleOutcome, ScheduleSummary, ScorerTally, Season, Sport, Team,
    TeamStanding, build_schedule, league_table, top_scorers,
};
use liga_escolar_persistence::{EntityCounts, Persistence};
use time::format_description::well_known::{Iso8601, Rfc3339};
use time::macros::format_description;
use time::{Date, Month, OffsetDateTime, PrimitiveDateTime};
use tracing::info;

use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::request_response::{
    ActivateSeasonResponse, CategoryStandingsInfo, CreateLeagueRequest, CreateLeagueResponse,
    CreateNonSchoolDayRequest, CreateNonSchoolDayResponse, CreatePlayerRequest,
    CreatePlayerResponse, CreateSeasonRequest, CreateSeasonResponse, CreateTeamRequest,
    CreateTeamResponse, DeleteAllLeaguesResponse, DeleteLeagueMatchesResponse,
    DeleteMatchResponse, DeleteNonSchoolDayResponse, DeletePlayerResponse, DeleteSeasonResponse,
    DeleteTeamResponse, GenerateScheduleRequest, GenerateScheduleResponse, GetSeasonResponse,
    GoalInfo, HealthResponse, LeagueInfo, LeagueSummary, ListLeaguesResponse,
    ListMatchesResponse, ListNonSchoolDaysResponse, ListSeasonsResponse, MatchInfo,
    MatchResultInfo, NonSchoolDayInfo, PlayerInfo, RecordResultRequest, RecordResultResponse,
    ResetResponse, ScheduleSummaryInfo, SeasonInfo, StandingsResponse, TeamInfo,
    TeamScheduleInfo, TeamStandingInfo, TopScorerInfo, UpdateNonSchoolDayRequest,
    UpdateNonSchoolDayResponse, UpdatePlayerRequest, UpdatePlayerResponse, UpdateTeamRequest,
    UpdateTeamResponse,
};

/// Upper bound on placeholder teams seeded by a single league creation.
const MAX_SEEDED_TEAMS: u32 = 64;

// ============================================================================
// Shared helpers
// ============================================================================

fn parse_date_field(field: &str, value: &str) -> Result<Date, ApiError> {
    Date::parse(value, &Iso8601::DEFAULT).map_err(|_| ApiError::InvalidInput {
        field: String::from(field),
        message: format!("Invalid date '{value}'. Expected YYYY-MM-DD"),
    })
}

fn format_kickoff(kickoff: PrimitiveDateTime) -> Result<String, ApiError> {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    kickoff.format(&format).map_err(|err| ApiError::Internal {
        message: format!("Failed to format kickoff: {err}"),
    })
}

fn persisted_id(id: Option<i64>, what: &str) -> Result<i64, ApiError> {
    id.ok_or_else(|| ApiError::Internal {
        message: format!("{what} row is missing its identifier"),
    })
}

fn require_season(persistence: &mut Persistence, season_id: i64) -> Result<Season, ApiError> {
    persistence
        .get_season(season_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Season"),
            message: format!("Season {season_id} does not exist"),
        })
}

fn require_league(persistence: &mut Persistence, league_id: i64) -> Result<League, ApiError> {
    persistence
        .get_league(league_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("League"),
            message: format!("League {league_id} does not exist"),
        })
}

fn require_team(persistence: &mut Persistence, team_id: i64) -> Result<Team, ApiError> {
    persistence
        .get_team(team_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Team"),
            message: format!("Team {team_id} does not exist"),
        })
}

fn require_player(persistence: &mut Persistence, player_id: i64) -> Result<Player, ApiError> {
    persistence
        .get_player(player_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Player"),
            message: format!("Player {player_id} does not exist"),
        })
}

fn require_match(persistence: &mut Persistence, match_id: i64) -> Result<Match, ApiError> {
    persistence
        .get_match(match_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Match"),
            message: format!("Match {match_id} does not exist"),
        })
}

fn require_non_school_day(
    persistence: &mut Persistence,
    non_school_day_id: i64,
) -> Result<NonSchoolDay, ApiError> {
    persistence
        .get_non_school_day(non_school_day_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Non-school day"),
            message: format!("Non-school day {non_school_day_id} does not exist"),
        })
}

/// Refuses a team name already present in the league. The schema's UNIQUE
/// constraint backs this up, but checking here yields the precise error.
fn ensure_team_name_free(
    persistence: &mut Persistence,
    league_id: i64,
    name: &str,
    ignore_team_id: Option<i64>,
) -> Result<(), ApiError> {
    let teams: Vec<Team> = persistence
        .list_teams_for_league(league_id)
        .map_err(translate_persistence_error)?;
    let taken: bool = teams.iter().any(|team| {
        team.name() == name && (ignore_team_id.is_none() || team.team_id() != ignore_team_id)
    });
    if taken {
        return Err(translate_domain_error(DomainError::DuplicateTeamName {
            league_id,
            name: String::from(name),
        }));
    }
    Ok(())
}

/// Refuses a calendar date already declared as a non-school day in the
/// season.
fn ensure_day_not_declared(
    persistence: &mut Persistence,
    season_id: i64,
    day: Date,
    ignore_non_school_day_id: Option<i64>,
) -> Result<(), ApiError> {
    let declared: Vec<NonSchoolDay> = persistence
        .list_non_school_days_for_season(season_id)
        .map_err(translate_persistence_error)?;
    let duplicate: bool = declared.iter().any(|existing| {
        existing.day() == day
            && (ignore_non_school_day_id.is_none()
                || existing.non_school_day_id() != ignore_non_school_day_id)
    });
    if duplicate {
        return Err(translate_domain_error(DomainError::DuplicateNonSchoolDay {
            season_id,
            day,
        }));
    }
    Ok(())
}

fn team_info(team: &Team) -> Result<TeamInfo, ApiError> {
    Ok(TeamInfo {
        team_id: persisted_id(team.team_id(), "Team")?,
        league_id: team.league_id(),
        name: team.name().to_string(),
    })
}

fn player_info(player: &Player) -> Result<PlayerInfo, ApiError> {
    Ok(PlayerInfo {
        player_id: persisted_id(player.player_id(), "Player")?,
        team_id: player.team_id(),
        name: player.name().to_string(),
    })
}

fn non_school_day_info(day: &NonSchoolDay) -> Result<NonSchoolDayInfo, ApiError> {
    Ok(NonSchoolDayInfo {
        non_school_day_id: persisted_id(day.non_school_day_id(), "Non-school day")?,
        season_id: day.season_id(),
        day: day.day().to_string(),
        description: day.description().to_string(),
    })
}

fn league_summary(
    persistence: &mut Persistence,
    league: &League,
) -> Result<LeagueSummary, ApiError> {
    let league_id: i64 = persisted_id(league.league_id(), "League")?;
    let teams: Vec<Team> = persistence
        .list_teams_for_league(league_id)
        .map_err(translate_persistence_error)?;
    Ok(LeagueSummary {
        league_id,
        name: league.name().to_string(),
        sport: league.sport().as_str().to_string(),
        category: league.category().as_str().to_string(),
        team_count: teams.len(),
    })
}

fn season_info(persistence: &mut Persistence, season: &Season) -> Result<SeasonInfo, ApiError> {
    let season_id: i64 = persisted_id(season.season_id(), "Season")?;
    let leagues: Vec<League> = persistence
        .list_leagues_for_season(season_id)
        .map_err(translate_persistence_error)?;
    let mut league_summaries: Vec<LeagueSummary> = Vec::with_capacity(leagues.len());
    for league in &leagues {
        league_summaries.push(league_summary(persistence, league)?);
    }
    let day_rows: Vec<NonSchoolDay> = persistence
        .list_non_school_days_for_season(season_id)
        .map_err(translate_persistence_error)?;
    let day_infos: Vec<NonSchoolDayInfo> = day_rows
        .iter()
        .map(non_school_day_info)
        .collect::<Result<_, _>>()?;
    Ok(SeasonInfo {
        season_id,
        name: season.name().to_string(),
        start_date: season.start_date().to_string(),
        end_date: season.end_date().to_string(),
        is_active: season.is_active(),
        leagues: league_summaries,
        non_school_days: day_infos,
    })
}

fn league_info(
    persistence: &mut Persistence,
    league: &League,
    season_name: &str,
) -> Result<LeagueInfo, ApiError> {
    let league_id: i64 = persisted_id(league.league_id(), "League")?;
    let teams: Vec<Team> = persistence
        .list_teams_for_league(league_id)
        .map_err(translate_persistence_error)?;
    let team_infos: Vec<TeamInfo> = teams.iter().map(team_info).collect::<Result<_, _>>()?;
    Ok(LeagueInfo {
        league_id,
        season_id: league.season_id(),
        season_name: season_name.to_string(),
        name: league.name().to_string(),
        sport: league.sport().as_str().to_string(),
        category: league.category().as_str().to_string(),
        teams: team_infos,
    })
}

fn team_name_map(
    persistence: &mut Persistence,
    league_id: i64,
) -> Result<HashMap<i64, String>, ApiError> {
    let teams: Vec<Team> = persistence
        .list_teams_for_league(league_id)
        .map_err(translate_persistence_error)?;
    let mut names: HashMap<i64, String> = HashMap::with_capacity(teams.len());
    for team in &teams {
        names.insert(persisted_id(team.team_id(), "Team")?, team.name().to_string());
    }
    Ok(names)
}

fn match_info(
    stored: &Match,
    team_names: &HashMap<i64, String>,
    result: Option<MatchResultInfo>,
) -> Result<MatchInfo, ApiError> {
    let match_id: i64 = persisted_id(stored.match_id(), "Match")?;
    let home_team_name: String = team_names
        .get(&stored.home_team_id())
        .cloned()
        .ok_or_else(|| ApiError::Internal {
            message: format!(
                "Match {match_id} references unknown team {}",
                stored.home_team_id()
            ),
        })?;
    let away_team_name: String = team_names
        .get(&stored.away_team_id())
        .cloned()
        .ok_or_else(|| ApiError::Internal {
            message: format!(
                "Match {match_id} references unknown team {}",
                stored.away_team_id()
            ),
        })?;
    Ok(MatchInfo {
        match_id,
        league_id: stored.league_id(),
        home_team_id: stored.home_team_id(),
        home_team_name,
        away_team_id: stored.away_team_id(),
        away_team_name,
        kickoff: format_kickoff(stored.kickoff())?,
        venue: stored.venue().to_string(),
        round: stored.round(),
        cycle: stored.cycle(),
        is_completed: stored.is_completed(),
        result,
    })
}

fn result_info_for_match(
    persistence: &mut Persistence,
    match_id: i64,
) -> Result<Option<MatchResultInfo>, ApiError> {
    let Some((result, goals)) = persistence
        .get_result_for_match(match_id)
        .map_err(translate_persistence_error)?
    else {
        return Ok(None);
    };
    let mut goal_infos: Vec<GoalInfo> = Vec::with_capacity(goals.len());
    for goal in &goals {
        let player: Player = persistence
            .get_player(goal.player_id())
            .map_err(translate_persistence_error)?
            .ok_or_else(|| ApiError::Internal {
                message: format!("Goal references unknown player {}", goal.player_id()),
            })?;
        goal_infos.push(GoalInfo {
            goal_id: persisted_id(goal.goal_id(), "Goal")?,
            player_id: goal.player_id(),
            player_name: player.name().to_string(),
            minute: goal.minute(),
        });
    }
    Ok(Some(MatchResultInfo {
        home_score: result.home_score(),
        away_score: result.away_score(),
        goals: goal_infos,
    }))
}

/// The four default blackout periods seeded with every new season:
/// Christmas break boundaries in the starting year and Easter week in
/// the following year.
fn default_non_school_days(start_date: Date) -> Result<Vec<(Date, &'static str)>, ApiError> {
    let start_year: i32 = start_date.year();
    let compose = |year: i32, month: Month, day: u8| -> Result<Date, ApiError> {
        Date::from_calendar_date(year, month, day).map_err(|err| ApiError::Internal {
            message: format!("Failed to compose holiday date: {err}"),
        })
    };
    Ok(vec![
        (
            compose(start_year, Month::December, 20)?,
            "Inicio de Vacaciones de Navidad",
        ),
        (
            compose(start_year + 1, Month::January, 7)?,
            "Fin de Vacaciones de Navidad",
        ),
        (compose(start_year + 1, Month::March, 24)?, "Semana Santa"),
        (compose(start_year + 1, Month::March, 31)?, "Semana Santa"),
    ])
}

// ============================================================================
// Health
// ============================================================================

/// Reports entity counts and the current time.
///
/// # Errors
///
/// Returns an error if a count query fails.
pub fn health(persistence: &mut Persistence) -> Result<HealthResponse, ApiError> {
    let counts: EntityCounts = persistence
        .entity_counts()
        .map_err(translate_persistence_error)?;
    let timestamp: String = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|err| ApiError::Internal {
            message: format!("Failed to format timestamp: {err}"),
        })?;
    Ok(HealthResponse {
        status: String::from("ok"),
        seasons: counts.seasons,
        leagues: counts.leagues,
        teams: counts.teams,
        players: counts.players,
        matches: counts.matches,
        timestamp,
    })
}

// ============================================================================
// Seasons
// ============================================================================

/// Creates a season, activates it, and seeds the standard six leagues and
/// the default holiday blackouts.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - The season to create
///
/// # Errors
///
/// Returns an error if a date cannot be parsed, the season is invalid, or
/// a write fails.
pub fn create_season(
    persistence: &mut Persistence,
    request: &CreateSeasonRequest,
) -> Result<CreateSeasonResponse, ApiError> {
    let start_date: Date = parse_date_field("start_date", &request.start_date)?;
    let end_date: Date = parse_date_field("end_date", &request.end_date)?;
    let season: Season =
        Season::new(&request.name, start_date, end_date).map_err(translate_domain_error)?;

    let season_id: i64 = persistence
        .create_season(&season)
        .map_err(translate_persistence_error)?;
    persistence
        .activate_season(season_id)
        .map_err(translate_persistence_error)?;

    for sport in [Sport::Football, Sport::Basketball] {
        for category in Category::ALL {
            let name: String = League::standard_name(sport, category);
            let league: League =
                League::new(season_id, &name, sport, category).map_err(translate_domain_error)?;
            persistence
                .create_league(&league)
                .map_err(translate_persistence_error)?;
        }
    }

    for (day, description) in default_non_school_days(start_date)? {
        let non_school_day: NonSchoolDay =
            NonSchoolDay::new(season_id, day, description).map_err(translate_domain_error)?;
        persistence
            .create_non_school_day(&non_school_day)
            .map_err(translate_persistence_error)?;
    }

    info!(
        season_id,
        name = season.name(),
        "Created season with seeded leagues and blackouts"
    );

    let stored: Season = require_season(persistence, season_id)?;
    Ok(CreateSeasonResponse {
        season: season_info(persistence, &stored)?,
    })
}

/// Lists every season, most recent start date first, with nested leagues
/// and non-school days.
///
/// # Errors
///
/// Returns an error if a query fails.
pub fn list_seasons(persistence: &mut Persistence) -> Result<ListSeasonsResponse, ApiError> {
    let seasons: Vec<Season> = persistence
        .list_seasons()
        .map_err(translate_persistence_error)?;
    let mut infos: Vec<SeasonInfo> = Vec::with_capacity(seasons.len());
    for season in &seasons {
        infos.push(season_info(persistence, season)?);
    }
    Ok(ListSeasonsResponse { seasons: infos })
}

/// Fetches a single season with nested leagues and non-school days.
///
/// # Errors
///
/// Returns an error if the season does not exist or a query fails.
pub fn get_season(
    persistence: &mut Persistence,
    season_id: i64,
) -> Result<GetSeasonResponse, ApiError> {
    let season: Season = require_season(persistence, season_id)?;
    Ok(GetSeasonResponse {
        season: season_info(persistence, &season)?,
    })
}

/// Marks a season active and deactivates every other season.
///
/// # Errors
///
/// Returns an error if the season does not exist or the update fails.
pub fn activate_season(
    persistence: &mut Persistence,
    season_id: i64,
) -> Result<ActivateSeasonResponse, ApiError> {
    persistence
        .activate_season(season_id)
        .map_err(translate_persistence_error)?;
    info!(season_id, "Activated season");
    let season: Season = require_season(persistence, season_id)?;
    Ok(ActivateSeasonResponse {
        season: season_info(persistence, &season)?,
    })
}

/// Deletes a season and, by cascade, everything it owns.
///
/// # Errors
///
/// Returns an error if the season does not exist or the delete fails.
pub fn delete_season(
    persistence: &mut Persistence,
    season_id: i64,
) -> Result<DeleteSeasonResponse, ApiError> {
    let season: Season = require_season(persistence, season_id)?;
    persistence
        .delete_season(season_id)
        .map_err(translate_persistence_error)?;
    info!(season_id, name = season.name(), "Deleted season");
    Ok(DeleteSeasonResponse {
        season_id,
        name: season.name().to_string(),
    })
}

// ============================================================================
// Leagues
// ============================================================================

/// Lists every league with its teams and owning season's name.
///
/// # Errors
///
/// Returns an error if a query fails.
pub fn list_leagues(persistence: &mut Persistence) -> Result<ListLeaguesResponse, ApiError> {
    let leagues: Vec<League> = persistence
        .list_leagues()
        .map_err(translate_persistence_error)?;
    let seasons: Vec<Season> = persistence
        .list_seasons()
        .map_err(translate_persistence_error)?;
    let mut season_names: HashMap<i64, String> = HashMap::with_capacity(seasons.len());
    for season in &seasons {
        season_names.insert(
            persisted_id(season.season_id(), "Season")?,
            season.name().to_string(),
        );
    }

    let mut infos: Vec<LeagueInfo> = Vec::with_capacity(leagues.len());
    for league in &leagues {
        let season_name: String = season_names
            .get(&league.season_id())
            .cloned()
            .ok_or_else(|| ApiError::Internal {
                message: format!("League references unknown season {}", league.season_id()),
            })?;
        infos.push(league_info(persistence, league, &season_name)?);
    }
    Ok(ListLeaguesResponse { leagues: infos })
}

/// Creates a league named after its sport and category, seeded with
/// `team_count` placeholder teams ("Equipo 1".."Equipo N").
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - The league to create
///
/// # Errors
///
/// Returns an error if the sport or category is invalid, the season does
/// not exist, the team count exceeds the limit, or a write fails.
pub fn create_league(
    persistence: &mut Persistence,
    request: &CreateLeagueRequest,
) -> Result<CreateLeagueResponse, ApiError> {
    let sport: Sport = request.sport.parse().map_err(translate_domain_error)?;
    let category: Category = request.category.parse().map_err(translate_domain_error)?;
    if request.team_count > MAX_SEEDED_TEAMS {
        return Err(ApiError::InvalidInput {
            field: String::from("team_count"),
            message: format!(
                "Team count {} exceeds the limit of {MAX_SEEDED_TEAMS}",
                request.team_count
            ),
        });
    }
    let season: Season = require_season(persistence, request.season_id)?;

    let name: String = League::standard_name(sport, category);
    let league: League =
        League::new(request.season_id, &name, sport, category).map_err(translate_domain_error)?;
    let league_id: i64 = persistence
        .create_league(&league)
        .map_err(translate_persistence_error)?;

    for index in 1..=request.team_count {
        let team: Team =
            Team::new(league_id, &format!("Equipo {index}")).map_err(translate_domain_error)?;
        persistence
            .create_team(&team)
            .map_err(translate_persistence_error)?;
    }

    info!(
        league_id,
        name = %name,
        teams = request.team_count,
        "Created league"
    );

    let stored: League = require_league(persistence, league_id)?;
    Ok(CreateLeagueResponse {
        league: league_info(persistence, &stored, season.name())?,
    })
}

/// Deletes every league together with its teams and matches.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_all_leagues(
    persistence: &mut Persistence,
) -> Result<DeleteAllLeaguesResponse, ApiError> {
    let counts: EntityCounts = persistence
        .entity_counts()
        .map_err(translate_persistence_error)?;
    let leagues_deleted: usize = persistence
        .delete_all_leagues()
        .map_err(translate_persistence_error)?;
    info!(leagues_deleted, "Deleted all leagues");
    Ok(DeleteAllLeaguesResponse {
        leagues_deleted,
        teams_deleted: counts.teams,
        matches_deleted: counts.matches,
    })
}

// ============================================================================
// Teams
// ============================================================================

/// Creates a team in a league.
///
/// # Errors
///
/// Returns an error if the league does not exist, the name is invalid or
/// already taken in the league, or the insert fails.
pub fn create_team(
    persistence: &mut Persistence,
    request: &CreateTeamRequest,
) -> Result<CreateTeamResponse, ApiError> {
    require_league(persistence, request.league_id)?;
    let team: Team = Team::new(request.league_id, &request.name).map_err(translate_domain_error)?;
    ensure_team_name_free(persistence, request.league_id, team.name(), None)?;
    let team_id: i64 = persistence
        .create_team(&team)
        .map_err(translate_persistence_error)?;
    info!(team_id, league_id = request.league_id, "Created team");
    let stored: Team = require_team(persistence, team_id)?;
    Ok(CreateTeamResponse {
        team: team_info(&stored)?,
    })
}

/// Renames a team.
///
/// # Errors
///
/// Returns an error if the team does not exist, the name is invalid or
/// already taken in the league, or the update fails.
pub fn update_team(
    persistence: &mut Persistence,
    team_id: i64,
    request: &UpdateTeamRequest,
) -> Result<UpdateTeamResponse, ApiError> {
    let existing: Team = require_team(persistence, team_id)?;
    let renamed: Team =
        Team::new(existing.league_id(), &request.name).map_err(translate_domain_error)?;
    ensure_team_name_free(persistence, existing.league_id(), renamed.name(), Some(team_id))?;
    persistence
        .update_team_name(team_id, renamed.name())
        .map_err(translate_persistence_error)?;
    info!(team_id, name = renamed.name(), "Renamed team");
    let stored: Team = require_team(persistence, team_id)?;
    Ok(UpdateTeamResponse {
        team: team_info(&stored)?,
    })
}

/// Deletes a team; refused while matches still reference it.
///
/// # Errors
///
/// Returns an error if the team does not exist or still has matches.
pub fn delete_team(
    persistence: &mut Persistence,
    team_id: i64,
) -> Result<DeleteTeamResponse, ApiError> {
    persistence
        .delete_team(team_id)
        .map_err(translate_persistence_error)?;
    info!(team_id, "Deleted team");
    Ok(DeleteTeamResponse { team_id })
}

// ============================================================================
// Players
// ============================================================================

/// Creates a player in a team.
///
/// # Errors
///
/// Returns an error if the team does not exist, the name is invalid, or
/// the insert fails.
pub fn create_player(
    persistence: &mut Persistence,
    request: &CreatePlayerRequest,
) -> Result<CreatePlayerResponse, ApiError> {
    require_team(persistence, request.team_id)?;
    let player: Player =
        Player::new(request.team_id, &request.name).map_err(translate_domain_error)?;
    let player_id: i64 = persistence
        .create_player(&player)
        .map_err(translate_persistence_error)?;
    info!(player_id, team_id = request.team_id, "Created player");
    let stored: Player = require_player(persistence, player_id)?;
    Ok(CreatePlayerResponse {
        player: player_info(&stored)?,
    })
}

/// Renames a player.
///
/// # Errors
///
/// Returns an error if the player does not exist, the name is invalid, or
/// the update fails.
pub fn update_player(
    persistence: &mut Persistence,
    player_id: i64,
    request: &UpdatePlayerRequest,
) -> Result<UpdatePlayerResponse, ApiError> {
    let existing: Player = require_player(persistence, player_id)?;
    let renamed: Player =
        Player::new(existing.team_id(), &request.name).map_err(translate_domain_error)?;
    persistence
        .update_player_name(player_id, renamed.name())
        .map_err(translate_persistence_error)?;
    info!(player_id, name = renamed.name(), "Renamed player");
    let stored: Player = require_player(persistence, player_id)?;
    Ok(UpdatePlayerResponse {
        player: player_info(&stored)?,
    })
}

/// Deletes a player; refused while recorded goals reference it.
///
/// # Errors
///
/// Returns an error if the player does not exist or still has goals.
pub fn delete_player(
    persistence: &mut Persistence,
    player_id: i64,
) -> Result<DeletePlayerResponse, ApiError> {
    persistence
        .delete_player(player_id)
        .map_err(translate_persistence_error)?;
    info!(player_id, "Deleted player");
    Ok(DeletePlayerResponse { player_id })
}

// ============================================================================
// Non-school days
// ============================================================================

/// Lists a season's non-school days in date order.
///
/// # Errors
///
/// Returns an error if the season does not exist or the query fails.
pub fn list_non_school_days(
    persistence: &mut Persistence,
    season_id: i64,
) -> Result<ListNonSchoolDaysResponse, ApiError> {
    require_season(persistence, season_id)?;
    let days: Vec<NonSchoolDay> = persistence
        .list_non_school_days_for_season(season_id)
        .map_err(translate_persistence_error)?;
    let infos: Vec<NonSchoolDayInfo> = days
        .iter()
        .map(non_school_day_info)
        .collect::<Result<_, _>>()?;
    Ok(ListNonSchoolDaysResponse {
        non_school_days: infos,
    })
}

/// Declares a non-school day for a season.
///
/// # Errors
///
/// Returns an error if the season does not exist, the date cannot be
/// parsed, the description is invalid, or the date is already declared.
pub fn create_non_school_day(
    persistence: &mut Persistence,
    request: &CreateNonSchoolDayRequest,
) -> Result<CreateNonSchoolDayResponse, ApiError> {
    require_season(persistence, request.season_id)?;
    let day: Date = parse_date_field("day", &request.day)?;
    let non_school_day: NonSchoolDay =
        NonSchoolDay::new(request.season_id, day, &request.description)
            .map_err(translate_domain_error)?;
    ensure_day_not_declared(persistence, request.season_id, day, None)?;
    let non_school_day_id: i64 = persistence
        .create_non_school_day(&non_school_day)
        .map_err(translate_persistence_error)?;
    info!(
        non_school_day_id,
        season_id = request.season_id,
        "Declared non-school day"
    );
    let stored: NonSchoolDay = require_non_school_day(persistence, non_school_day_id)?;
    Ok(CreateNonSchoolDayResponse {
        non_school_day: non_school_day_info(&stored)?,
    })
}

/// Updates a non-school day's date and description.
///
/// # Errors
///
/// Returns an error if the day does not exist, the new date cannot be
/// parsed, or the new date is already declared for the season.
pub fn update_non_school_day(
    persistence: &mut Persistence,
    non_school_day_id: i64,
    request: &UpdateNonSchoolDayRequest,
) -> Result<UpdateNonSchoolDayResponse, ApiError> {
    let existing: NonSchoolDay = require_non_school_day(persistence, non_school_day_id)?;
    let day: Date = parse_date_field("day", &request.day)?;
    let updated: NonSchoolDay = NonSchoolDay::new(existing.season_id(), day, &request.description)
        .map_err(translate_domain_error)?;
    ensure_day_not_declared(persistence, existing.season_id(), day, Some(non_school_day_id))?;
    persistence
        .update_non_school_day(non_school_day_id, updated.day(), updated.description())
        .map_err(translate_persistence_error)?;
    info!(non_school_day_id, "Updated non-school day");
    let stored: NonSchoolDay = require_non_school_day(persistence, non_school_day_id)?;
    Ok(UpdateNonSchoolDayResponse {
        non_school_day: non_school_day_info(&stored)?,
    })
}

/// Deletes a non-school day.
///
/// # Errors
///
/// Returns an error if the day does not exist or the delete fails.
pub fn delete_non_school_day(
    persistence: &mut Persistence,
    non_school_day_id: i64,
) -> Result<DeleteNonSchoolDayResponse, ApiError> {
    require_non_school_day(persistence, non_school_day_id)?;
    persistence
        .delete_non_school_day(non_school_day_id)
        .map_err(translate_persistence_error)?;
    info!(non_school_day_id, "Deleted non-school day");
    Ok(DeleteNonSchoolDayResponse { non_school_day_id })
}

// ============================================================================
// Matches
// ============================================================================

/// Generates and stores the double round-robin schedule for a league.
///
/// The scheduling window is clamped to the later of the requested start
/// and the season start, through the season end. Season non-school days
/// are excluded. The league must have no existing fixtures.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - The league and requested start date
///
/// # Errors
///
/// Returns an error if the league does not exist, fixtures already exist,
/// the roster is too small, no full cycle fits the window, or a write
/// fails.
#[allow(clippy::too_many_lines)]
pub fn generate_schedule(
    persistence: &mut Persistence,
    request: &GenerateScheduleRequest,
) -> Result<GenerateScheduleResponse, ApiError> {
    let league: League = require_league(persistence, request.league_id)?;
    let league_id: i64 = persisted_id(league.league_id(), "League")?;
    let season: Season = persistence
        .get_season(league.season_id())
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::Internal {
            message: format!(
                "League {league_id} references unknown season {}",
                league.season_id()
            ),
        })?;

    let existing: usize = persistence
        .count_matches_for_league(league_id)
        .map_err(translate_persistence_error)?;
    if existing > 0 {
        return Err(translate_domain_error(DomainError::ExistingFixtures {
            league_id,
            count: existing,
        }));
    }

    let requested_start: Date = parse_date_field("start_date", &request.start_date)?;
    let window_start: Date = requested_start.max(season.start_date());
    let window_end: Date = season.end_date();

    let teams: Vec<Team> = persistence
        .list_teams_for_league(league_id)
        .map_err(translate_persistence_error)?;
    let mut roster: Vec<RosterEntry> = Vec::with_capacity(teams.len());
    for team in &teams {
        roster.push(RosterEntry::new(
            persisted_id(team.team_id(), "Team")?,
            team.name().to_string(),
        ));
    }

    let blackout_days: Vec<NonSchoolDay> = persistence
        .list_non_school_days_for_season(league.season_id())
        .map_err(translate_persistence_error)?;
    let blackout_dates: Vec<Date> = blackout_days.iter().map(NonSchoolDay::day).collect();

    let plan: SchedulePlan = SchedulePlan::new(window_start, window_end, league.name().to_string())
        .with_blackout_dates(blackout_dates);
    let outcome: ScheduleOutcome = build_schedule(&plan, &roster).map_err(translate_domain_error)?;

    let inserted: usize = persistence
        .insert_schedule(league_id, outcome.matches())
        .map_err(translate_persistence_error)?;

    let team_names: HashMap<i64, String> = team_name_map(persistence, league_id)?;
    let stored: Vec<Match> = persistence
        .list_matches_for_league(league_id)
        .map_err(translate_persistence_error)?;
    let mut match_infos: Vec<MatchInfo> = Vec::with_capacity(stored.len());
    for stored_match in &stored {
        match_infos.push(match_info(stored_match, &team_names, None)?);
    }

    let (_, summary): (_, ScheduleSummary) = outcome.into_parts();
    let first_match_day: String = summary.first_match_day().to_string();
    let last_match_day: String = summary.last_match_day().to_string();
    let team_tallies: Vec<TeamScheduleInfo> = summary
        .team_tallies()
        .iter()
        .map(|tally| TeamScheduleInfo {
            team_id: tally.team_id(),
            name: tally.name().to_string(),
            home_matches: tally.home(),
            away_matches: tally.away(),
            total_matches: tally.total(),
        })
        .collect();

    info!(
        league_id,
        matches = inserted,
        cycles = summary.total_cycles(),
        "Generated schedule"
    );

    Ok(GenerateScheduleResponse {
        matches: match_infos,
        summary: ScheduleSummaryInfo {
            total_matches: summary.scheduled(),
            total_teams: roster.len(),
            total_cycles: summary.total_cycles(),
            eligible_dates: summary.eligible_dates(),
            days_needed_per_cycle: summary.days_needed_per_cycle(),
            window_start: window_start.to_string(),
            window_end: window_end.to_string(),
            first_match_day,
            last_match_day,
            teams: team_tallies,
        },
    })
}

/// Lists a league's matches in kickoff order with team names and any
/// recorded results.
///
/// # Errors
///
/// Returns an error if the league does not exist or a query fails.
pub fn list_matches(
    persistence: &mut Persistence,
    league_id: i64,
) -> Result<ListMatchesResponse, ApiError> {
    require_league(persistence, league_id)?;
    let team_names: HashMap<i64, String> = team_name_map(persistence, league_id)?;
    let stored: Vec<Match> = persistence
        .list_matches_for_league(league_id)
        .map_err(translate_persistence_error)?;
    let mut infos: Vec<MatchInfo> = Vec::with_capacity(stored.len());
    for stored_match in &stored {
        let result: Option<MatchResultInfo> = if stored_match.is_completed() {
            let match_id: i64 = persisted_id(stored_match.match_id(), "Match")?;
            result_info_for_match(persistence, match_id)?
        } else {
            None
        };
        infos.push(match_info(stored_match, &team_names, result)?);
    }
    Ok(ListMatchesResponse { matches: infos })
}

/// Records or replaces a match result and marks the match completed.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `match_id` - The match the result belongs to
/// * `request` - The scores and goal attributions
///
/// # Errors
///
/// Returns an error if the match or a referenced player does not exist,
/// or a write fails.
pub fn record_result(
    persistence: &mut Persistence,
    match_id: i64,
    request: &RecordResultRequest,
) -> Result<RecordResultResponse, ApiError> {
    require_match(persistence, match_id)?;
    let goal_scorers: Vec<(i64, Option<u32>)> = request
        .goals
        .iter()
        .map(|goal| (goal.player_id, goal.minute))
        .collect();
    persistence
        .record_match_result(match_id, request.home_score, request.away_score, &goal_scorers)
        .map_err(translate_persistence_error)?;
    info!(
        match_id,
        home_score = request.home_score,
        away_score = request.away_score,
        "Recorded match result"
    );

    let stored: Match = require_match(persistence, match_id)?;
    let team_names: HashMap<i64, String> = team_name_map(persistence, stored.league_id())?;
    let result: Option<MatchResultInfo> = result_info_for_match(persistence, match_id)?;
    Ok(RecordResultResponse {
        match_info: match_info(&stored, &team_names, result)?,
    })
}

/// Deletes a single match together with its result and goals.
///
/// # Errors
///
/// Returns an error if the match does not exist or the delete fails.
pub fn delete_match(
    persistence: &mut Persistence,
    match_id: i64,
) -> Result<DeleteMatchResponse, ApiError> {
    persistence
        .delete_match(match_id)
        .map_err(translate_persistence_error)?;
    info!(match_id, "Deleted match");
    Ok(DeleteMatchResponse { match_id })
}

/// Clears every fixture for a league, the regeneration path.
///
/// # Errors
///
/// Returns an error if the league does not exist or the delete fails.
pub fn delete_league_matches(
    persistence: &mut Persistence,
    league_id: i64,
) -> Result<DeleteLeagueMatchesResponse, ApiError> {
    require_league(persistence, league_id)?;
    let matches_deleted: usize = persistence
        .delete_matches_for_league(league_id)
        .map_err(translate_persistence_error)?;
    info!(league_id, matches_deleted, "Cleared league fixtures");
    Ok(DeleteLeagueMatchesResponse {
        league_id,
        matches_deleted,
    })
}

// ============================================================================
// Standings
// ============================================================================

/// Builds league tables and top-scorer lists for the active season,
/// one entry per category of the requested sport.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `sport` - The sport, e.g. "football" or "FOOTBALL"
///
/// # Errors
///
/// Returns an error if the sport is invalid, no season is active, or a
/// query fails.
pub fn standings(
    persistence: &mut Persistence,
    sport: &str,
) -> Result<StandingsResponse, ApiError> {
    let sport: Sport = sport.parse().map_err(translate_domain_error)?;
    let season: Season = persistence
        .get_active_season()
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Season"),
            message: String::from("No season is currently active"),
        })?;
    let season_id: i64 = persisted_id(season.season_id(), "Season")?;

    let leagues: Vec<League> = persistence
        .list_leagues_for_season(season_id)
        .map_err(translate_persistence_error)?;
    let mut sport_leagues: Vec<League> = leagues
        .into_iter()
        .filter(|league| league.sport() == sport)
        .collect();
    sport_leagues.sort_by(|a, b| {
        a.category()
            .cmp(&b.category())
            .then_with(|| a.name().cmp(b.name()))
    });

    let mut categories: Vec<CategoryStandingsInfo> = Vec::with_capacity(sport_leagues.len());
    for league in &sport_leagues {
        let league_id: i64 = persisted_id(league.league_id(), "League")?;
        let teams: Vec<Team> = persistence
            .list_teams_for_league(league_id)
            .map_err(translate_persistence_error)?;
        let mut roster: Vec<RosterEntry> = Vec::with_capacity(teams.len());
        for team in &teams {
            roster.push(RosterEntry::new(
                persisted_id(team.team_id(), "Team")?,
                team.name().to_string(),
            ));
        }

        let results: Vec<CompletedMatch> = persistence
            .list_completed_matches(league_id)
            .map_err(translate_persistence_error)?;
        let table: Vec<TeamStanding> = league_table(&roster, &results);
        let tallies: Vec<ScorerTally> = persistence
            .scorer_tallies_for_league(league_id)
            .map_err(translate_persistence_error)?;
        let scorers: Vec<ScorerTally> = top_scorers(tallies);

        categories.push(CategoryStandingsInfo {
            category: String::from(league.category().label()),
            league_id,
            league_name: league.name().to_string(),
            standings: table.iter().map(standing_info).collect(),
            top_scorers: scorers.iter().map(scorer_info).collect(),
        });
    }

    Ok(StandingsResponse {
        sport: sport.as_str().to_string(),
        season_id,
        season_name: season.name().to_string(),
        categories,
    })
}

fn standing_info(standing: &TeamStanding) -> TeamStandingInfo {
    TeamStandingInfo {
        team_id: standing.team_id(),
        name: standing.name().to_string(),
        played: standing.played(),
        won: standing.won(),
        drawn: standing.drawn(),
        lost: standing.lost(),
        goals_for: standing.goals_for(),
        goals_against: standing.goals_against(),
        goal_difference: standing.goal_difference(),
        points: standing.points(),
    }
}

fn scorer_info(tally: &ScorerTally) -> TopScorerInfo {
    TopScorerInfo {
        player_id: tally.player_id(),
        player_name: tally.player_name().to_string(),
        team_name: tally.team_name().to_string(),
        goals: tally.goals(),
    }
}

// ============================================================================
// Reset
// ============================================================================

/// Wipes every stored entity. The HTTP layer gates this behind a server
/// flag; the handler itself is unconditional.
///
/// # Errors
///
/// Returns an error if a delete fails.
pub fn reset(persistence: &mut Persistence) -> Result<ResetResponse, ApiError> {
    let counts: EntityCounts = persistence
        .entity_counts()
        .map_err(translate_persistence_error)?;
    persistence
        .delete_all_data()
        .map_err(translate_persistence_error)?;
    info!(
        seasons = counts.seasons,
        leagues = counts.leagues,
        matches = counts.matches,
        "Reset all data"
    );
    Ok(ResetResponse {
        seasons_deleted: counts.seasons,
        leagues_deleted: counts.leagues,
        teams_deleted: counts.teams,
        players_deleted: counts.players,
        matches_deleted: counts.matches,
    })
}
