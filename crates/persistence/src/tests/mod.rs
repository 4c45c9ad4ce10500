// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used)]

mod initialization_tests;
mod season_tests;

use liga_escolar_domain::{
    Category, League, Player, RosterEntry, ScheduleOutcome, SchedulePlan, Season, Sport, Team,
    build_schedule,
};
use time::macros::date;

use crate::Persistence;

/// Creates a season spanning the 2026-2027 school year.
pub fn create_test_season(persistence: &mut Persistence) -> i64 {
    let season: Season =
        Season::new("2026-2027", date!(2026 - 09 - 01), date!(2027 - 06 - 30)).unwrap();
    persistence.create_season(&season).unwrap()
}

/// Creates a football league for grades 3-4 in the given season.
pub fn create_test_league(persistence: &mut Persistence, season_id: i64) -> i64 {
    let league: League = League::new(
        season_id,
        "Fútbol 3-4",
        Sport::Football,
        Category::Grades3And4,
    )
    .unwrap();
    persistence.create_league(&league).unwrap()
}

pub fn create_test_team(persistence: &mut Persistence, league_id: i64, name: &str) -> i64 {
    let team: Team = Team::new(league_id, name).unwrap();
    persistence.create_team(&team).unwrap()
}

pub fn create_test_player(persistence: &mut Persistence, team_id: i64, name: &str) -> i64 {
    let player: Player = Player::new(team_id, name).unwrap();
    persistence.create_player(&player).unwrap()
}

/// Generates a schedule for the league's stored roster over the autumn
/// 2026 window.
pub fn generate_test_schedule(persistence: &mut Persistence, league_id: i64) -> ScheduleOutcome {
    let roster: Vec<RosterEntry> = persistence
        .list_teams_for_league(league_id)
        .unwrap()
        .iter()
        .map(|team| RosterEntry::new(team.team_id().unwrap(), team.name().to_string()))
        .collect();

    let plan: SchedulePlan = SchedulePlan::new(
        date!(2026 - 09 - 01),
        date!(2026 - 12 - 15),
        String::from("Fútbol 3-4"),
    );
    build_schedule(&plan, &roster).unwrap()
}
