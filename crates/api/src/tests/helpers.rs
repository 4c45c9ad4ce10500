// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use liga_escolar_persistence::Persistence;

use crate::{
    CreateNonSchoolDayRequest, CreatePlayerRequest, CreateSeasonRequest, CreateSeasonResponse,
    CreateTeamRequest, GenerateScheduleRequest, GenerateScheduleResponse, LeagueSummary,
    MatchInfo, PlayerInfo, SeasonInfo, TeamInfo, create_non_school_day, create_player,
    create_season, create_team, generate_schedule,
};

/// Four team names in alphabetical order, which is also roster order.
pub const TEST_TEAM_NAMES: [&str; 4] = [
    "Academia Goya",
    "Colegio San José",
    "Escuela Picasso",
    "Instituto Cervantes",
];

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

/// Creates the autumn test season: Sep 1 through Dec 15, 2026. The window
/// holds fourteen eligible Fridays, Nov 20 being Día de la Revolución.
pub fn create_autumn_season(persistence: &mut Persistence) -> SeasonInfo {
    let request: CreateSeasonRequest = CreateSeasonRequest {
        name: String::from("Otoño 2026"),
        start_date: String::from("2026-09-01"),
        end_date: String::from("2026-12-15"),
    };
    let response: CreateSeasonResponse =
        create_season(persistence, &request).expect("Failed to create season");
    response.season
}

/// Creates a full school-year season starting a year after the autumn one.
pub fn create_school_year_season(persistence: &mut Persistence) -> SeasonInfo {
    let request: CreateSeasonRequest = CreateSeasonRequest {
        name: String::from("2027-2028"),
        start_date: String::from("2027-09-01"),
        end_date: String::from("2028-06-30"),
    };
    let response: CreateSeasonResponse =
        create_season(persistence, &request).expect("Failed to create season");
    response.season
}

pub fn find_league<'a>(season: &'a SeasonInfo, name: &str) -> &'a LeagueSummary {
    season
        .leagues
        .iter()
        .find(|league| league.name == name)
        .expect("League not found in season")
}

pub fn add_team(persistence: &mut Persistence, league_id: i64, name: &str) -> TeamInfo {
    let request: CreateTeamRequest = CreateTeamRequest {
        league_id,
        name: String::from(name),
    };
    create_team(persistence, &request)
        .expect("Failed to create team")
        .team
}

pub fn add_player(persistence: &mut Persistence, team_id: i64, name: &str) -> PlayerInfo {
    let request: CreatePlayerRequest = CreatePlayerRequest {
        team_id,
        name: String::from(name),
    };
    create_player(persistence, &request)
        .expect("Failed to create player")
        .player
}

pub fn add_non_school_day(
    persistence: &mut Persistence,
    season_id: i64,
    day: &str,
    description: &str,
) -> i64 {
    let request: CreateNonSchoolDayRequest = CreateNonSchoolDayRequest {
        season_id,
        day: String::from(day),
        description: String::from(description),
    };
    create_non_school_day(persistence, &request)
        .expect("Failed to create non-school day")
        .non_school_day
        .non_school_day_id
}

/// A league with four named teams and a generated autumn schedule.
pub struct ScheduledLeague {
    pub season: SeasonInfo,
    pub league_id: i64,
    pub teams: Vec<TeamInfo>,
    pub matches: Vec<MatchInfo>,
}

/// Seeds the autumn season, fills the Fútbol 3-4 league with the four
/// test teams, and generates its schedule (24 matches over two cycles).
pub fn setup_scheduled_league(persistence: &mut Persistence) -> ScheduledLeague {
    let season: SeasonInfo = create_autumn_season(persistence);
    let league_id: i64 = find_league(&season, "Fútbol 3-4").league_id;
    let mut teams: Vec<TeamInfo> = Vec::new();
    for name in TEST_TEAM_NAMES {
        teams.push(add_team(persistence, league_id, name));
    }
    let request: GenerateScheduleRequest = GenerateScheduleRequest {
        league_id,
        start_date: String::from("2026-09-01"),
    };
    let response: GenerateScheduleResponse =
        generate_schedule(persistence, &request).expect("Failed to generate schedule");
    ScheduledLeague {
        season,
        league_id,
        teams,
        matches: response.matches,
    }
}

/// Finds the first fixture pairing the given home and away sides.
pub fn find_fixture(matches: &[MatchInfo], home_team_id: i64, away_team_id: i64) -> i64 {
    matches
        .iter()
        .find(|info| info.home_team_id == home_team_id && info.away_team_id == away_team_id)
        .expect("Fixture not found")
        .match_id
}
