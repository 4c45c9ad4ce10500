// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Season lifecycle tests: creation with seeding, activation, deletion.

use liga_escolar_persistence::Persistence;

use crate::{
    ApiError, CreateSeasonRequest, DeleteSeasonResponse, GetSeasonResponse, ListLeaguesResponse,
    ListSeasonsResponse, activate_season, create_season, delete_season, get_season, list_leagues,
    list_seasons,
};

use super::helpers::{
    add_team, create_autumn_season, create_school_year_season, create_test_persistence,
    find_league,
};

// ============================================================================
// Creation and Seeding Tests
// ============================================================================

#[test]
fn test_create_season_seeds_six_standard_leagues() {
    let mut persistence: Persistence = create_test_persistence();
    let season = create_autumn_season(&mut persistence);

    assert_eq!(season.name, "Otoño 2026");
    assert_eq!(season.start_date, "2026-09-01");
    assert_eq!(season.end_date, "2026-12-15");
    assert!(season.is_active);

    let names: Vec<&str> = season.leagues.iter().map(|league| league.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Baloncesto 1-2",
            "Baloncesto 3-4",
            "Baloncesto 5-6",
            "Fútbol 1-2",
            "Fútbol 3-4",
            "Fútbol 5-6",
        ]
    );
    for league in &season.leagues {
        assert_eq!(league.team_count, 0);
    }
    assert_eq!(find_league(&season, "Fútbol 1-2").sport, "FOOTBALL");
    assert_eq!(find_league(&season, "Fútbol 1-2").category, "CATEGORY_1_2");
    assert_eq!(find_league(&season, "Baloncesto 5-6").sport, "BASKETBALL");
    assert_eq!(
        find_league(&season, "Baloncesto 5-6").category,
        "CATEGORY_5_6"
    );
}

#[test]
fn test_create_season_seeds_default_non_school_days() {
    let mut persistence: Persistence = create_test_persistence();
    let season = create_autumn_season(&mut persistence);

    let days: Vec<(&str, &str)> = season
        .non_school_days
        .iter()
        .map(|day| (day.day.as_str(), day.description.as_str()))
        .collect();
    assert_eq!(
        days,
        vec![
            ("2026-12-20", "Inicio de Vacaciones de Navidad"),
            ("2027-01-07", "Fin de Vacaciones de Navidad"),
            ("2027-03-24", "Semana Santa"),
            ("2027-03-31", "Semana Santa"),
        ]
    );
}

#[test]
fn test_create_season_rejects_blank_name() {
    let mut persistence: Persistence = create_test_persistence();
    let request: CreateSeasonRequest = CreateSeasonRequest {
        name: String::from("   "),
        start_date: String::from("2026-09-01"),
        end_date: String::from("2026-12-15"),
    };

    let err: ApiError = create_season(&mut persistence, &request).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "name"));
}

#[test]
fn test_create_season_rejects_inverted_dates() {
    let mut persistence: Persistence = create_test_persistence();
    let request: CreateSeasonRequest = CreateSeasonRequest {
        name: String::from("Invertida"),
        start_date: String::from("2026-12-15"),
        end_date: String::from("2026-09-01"),
    };

    let err: ApiError = create_season(&mut persistence, &request).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "start_date"));
}

#[test]
fn test_create_season_rejects_malformed_date() {
    let mut persistence: Persistence = create_test_persistence();
    let request: CreateSeasonRequest = CreateSeasonRequest {
        name: String::from("Rota"),
        start_date: String::from("01/09/2026"),
        end_date: String::from("2026-12-15"),
    };

    let err: ApiError = create_season(&mut persistence, &request).unwrap_err();
    if let ApiError::InvalidInput { field, message } = err {
        assert_eq!(field, "start_date");
        assert!(message.contains("YYYY-MM-DD"));
    } else {
        panic!("Expected an invalid input error");
    }
}

// ============================================================================
// Activation Tests
// ============================================================================

#[test]
fn test_new_season_deactivates_previous_one() {
    let mut persistence: Persistence = create_test_persistence();
    let autumn = create_autumn_season(&mut persistence);
    let school_year = create_school_year_season(&mut persistence);
    assert!(school_year.is_active);

    let response: ListSeasonsResponse = list_seasons(&mut persistence).unwrap();
    assert_eq!(response.seasons.len(), 2);
    // Most recent start date first.
    assert_eq!(response.seasons[0].season_id, school_year.season_id);
    assert!(response.seasons[0].is_active);
    assert_eq!(response.seasons[1].season_id, autumn.season_id);
    assert!(!response.seasons[1].is_active);
}

#[test]
fn test_activate_season_switches_the_active_flag() {
    let mut persistence: Persistence = create_test_persistence();
    let autumn = create_autumn_season(&mut persistence);
    let school_year = create_school_year_season(&mut persistence);

    let response = activate_season(&mut persistence, autumn.season_id).unwrap();
    assert!(response.season.is_active);

    let reloaded: GetSeasonResponse =
        get_season(&mut persistence, school_year.season_id).unwrap();
    assert!(!reloaded.season.is_active);
}

#[test]
fn test_activate_missing_season_returns_not_found() {
    let mut persistence: Persistence = create_test_persistence();
    let err: ApiError = activate_season(&mut persistence, 404).unwrap_err();
    assert!(matches!(
        err,
        ApiError::ResourceNotFound { ref resource_type, .. } if resource_type == "Season"
    ));
}

// ============================================================================
// Retrieval and Deletion Tests
// ============================================================================

#[test]
fn test_get_season_returns_nested_details() {
    let mut persistence: Persistence = create_test_persistence();
    let season = create_autumn_season(&mut persistence);
    let league_id: i64 = find_league(&season, "Fútbol 3-4").league_id;
    add_team(&mut persistence, league_id, "Colegio Central");

    let response: GetSeasonResponse = get_season(&mut persistence, season.season_id).unwrap();
    assert_eq!(response.season.leagues.len(), 6);
    assert_eq!(find_league(&response.season, "Fútbol 3-4").team_count, 1);
    assert_eq!(response.season.non_school_days.len(), 4);
}

#[test]
fn test_get_missing_season_returns_not_found() {
    let mut persistence: Persistence = create_test_persistence();
    let err: ApiError = get_season(&mut persistence, 99).unwrap_err();
    assert!(matches!(
        err,
        ApiError::ResourceNotFound { ref resource_type, .. } if resource_type == "Season"
    ));
}

#[test]
fn test_delete_season_removes_owned_entities() {
    let mut persistence: Persistence = create_test_persistence();
    let season = create_autumn_season(&mut persistence);
    let league_id: i64 = find_league(&season, "Fútbol 3-4").league_id;
    add_team(&mut persistence, league_id, "Colegio Central");

    let response: DeleteSeasonResponse =
        delete_season(&mut persistence, season.season_id).unwrap();
    assert_eq!(response.season_id, season.season_id);
    assert_eq!(response.name, "Otoño 2026");

    let err: ApiError = get_season(&mut persistence, season.season_id).unwrap_err();
    assert!(matches!(err, ApiError::ResourceNotFound { .. }));

    let leagues: ListLeaguesResponse = list_leagues(&mut persistence).unwrap();
    assert!(leagues.leagues.is_empty());
}

#[test]
fn test_delete_missing_season_returns_not_found() {
    let mut persistence: Persistence = create_test_persistence();
    let err: ApiError = delete_season(&mut persistence, 12).unwrap_err();
    assert!(matches!(err, ApiError::ResourceNotFound { .. }));
}
