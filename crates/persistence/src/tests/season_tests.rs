// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Season persistence tests: round trips, the single-active-season flag
//! and cascading deletes.

use liga_escolar_domain::Season;
use time::macros::date;

use crate::Persistence;
use crate::error::PersistenceError;
use crate::tests::{
    create_test_league, create_test_player, create_test_season, create_test_team,
    generate_test_schedule,
};

#[test]
fn test_create_and_get_season() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let season_id = create_test_season(&mut persistence);
    let stored: Season = persistence.get_season(season_id).unwrap().unwrap();

    assert_eq!(stored.season_id(), Some(season_id));
    assert_eq!(stored.name(), "2026-2027");
    assert_eq!(stored.start_date(), date!(2026 - 09 - 01));
    assert_eq!(stored.end_date(), date!(2027 - 06 - 30));
    assert!(!stored.is_active());
}

#[test]
fn test_get_missing_season_returns_none() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    assert!(persistence.get_season(999).unwrap().is_none());
}

#[test]
fn test_list_seasons_most_recent_first() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let older: Season =
        Season::new("2025-2026", date!(2025 - 09 - 01), date!(2026 - 06 - 30)).unwrap();
    let newer: Season =
        Season::new("2026-2027", date!(2026 - 09 - 01), date!(2027 - 06 - 30)).unwrap();
    persistence.create_season(&older).unwrap();
    persistence.create_season(&newer).unwrap();

    let seasons = persistence.list_seasons().unwrap();
    let names: Vec<&str> = seasons.iter().map(Season::name).collect();
    assert_eq!(names, vec!["2026-2027", "2025-2026"]);
}

#[test]
fn test_no_active_season_initially() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    create_test_season(&mut persistence);

    assert!(persistence.get_active_season().unwrap().is_none());
}

#[test]
fn test_activate_season_switches_the_flag() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let first: Season =
        Season::new("2025-2026", date!(2025 - 09 - 01), date!(2026 - 06 - 30)).unwrap();
    let second: Season =
        Season::new("2026-2027", date!(2026 - 09 - 01), date!(2027 - 06 - 30)).unwrap();
    let first_id = persistence.create_season(&first).unwrap();
    let second_id = persistence.create_season(&second).unwrap();

    persistence.activate_season(first_id).unwrap();
    let active = persistence.get_active_season().unwrap().unwrap();
    assert_eq!(active.season_id(), Some(first_id));

    persistence.activate_season(second_id).unwrap();
    let active = persistence.get_active_season().unwrap().unwrap();
    assert_eq!(active.season_id(), Some(second_id));

    let first_again = persistence.get_season(first_id).unwrap().unwrap();
    assert!(!first_again.is_active(), "Previous season must deactivate");
}

#[test]
fn test_activate_missing_season() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let result = persistence.activate_season(42);
    assert_eq!(result, Err(PersistenceError::SeasonNotFound(42)));
}

#[test]
fn test_delete_season_cascades_to_children() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let season_id = create_test_season(&mut persistence);
    let league_id = create_test_league(&mut persistence, season_id);
    let team_a = create_test_team(&mut persistence, league_id, "Halcones");
    create_test_team(&mut persistence, league_id, "Jaguares");
    let player_id = create_test_player(&mut persistence, team_a, "Ana Torres");

    let outcome = generate_test_schedule(&mut persistence, league_id);
    persistence
        .insert_schedule(league_id, outcome.matches())
        .unwrap();
    assert!(persistence.count_matches_for_league(league_id).unwrap() > 0);

    persistence.delete_season(season_id).unwrap();

    assert!(persistence.get_season(season_id).unwrap().is_none());
    assert!(persistence.get_league(league_id).unwrap().is_none());
    assert!(persistence.get_team(team_a).unwrap().is_none());
    assert!(persistence.get_player(player_id).unwrap().is_none());
    assert_eq!(persistence.count_matches_for_league(league_id).unwrap(), 0);
}

#[test]
fn test_delete_missing_season() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let result = persistence.delete_season(7);
    assert_eq!(result, Err(PersistenceError::SeasonNotFound(7)));
}

#[test]
fn test_entity_counts_track_stored_rows() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let season_id = create_test_season(&mut persistence);
    let league_id = create_test_league(&mut persistence, season_id);
    let team_id = create_test_team(&mut persistence, league_id, "Halcones");
    create_test_player(&mut persistence, team_id, "Ana Torres");

    let counts = persistence.entity_counts().unwrap();
    assert_eq!(counts.seasons, 1);
    assert_eq!(counts.leagues, 1);
    assert_eq!(counts.teams, 1);
    assert_eq!(counts.players, 1);
    assert_eq!(counts.matches, 0);
}
