// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Match result recording tests.

use liga_escolar_persistence::Persistence;

use crate::{
    ApiError, GoalEntry, ListMatchesResponse, RecordResultRequest, RecordResultResponse,
    delete_player, list_matches, record_result,
};

use super::helpers::{add_player, create_test_persistence, find_fixture, setup_scheduled_league};

// ============================================================================
// Recording Tests
// ============================================================================

#[test]
fn test_record_result_marks_the_match_completed() {
    let mut persistence: Persistence = create_test_persistence();
    let scheduled = setup_scheduled_league(&mut persistence);
    let home = &scheduled.teams[0];
    let away = &scheduled.teams[1];
    let match_id: i64 = find_fixture(&scheduled.matches, home.team_id, away.team_id);

    let lucia = add_player(&mut persistence, home.team_id, "Lucía Fernández");
    let diego = add_player(&mut persistence, home.team_id, "Diego Martín");
    let ana = add_player(&mut persistence, away.team_id, "Ana Belén");

    let request: RecordResultRequest = RecordResultRequest {
        home_score: 2,
        away_score: 1,
        goals: vec![
            GoalEntry {
                player_id: lucia.player_id,
                minute: Some(12),
            },
            GoalEntry {
                player_id: diego.player_id,
                minute: Some(55),
            },
            GoalEntry {
                player_id: ana.player_id,
                minute: Some(78),
            },
        ],
    };
    let response: RecordResultResponse =
        record_result(&mut persistence, match_id, &request).unwrap();

    assert!(response.match_info.is_completed);
    let result = response.match_info.result.expect("Result missing");
    assert_eq!(result.home_score, 2);
    assert_eq!(result.away_score, 1);
    assert_eq!(result.goals.len(), 3);
    assert_eq!(result.goals[0].player_name, "Lucía Fernández");
    assert_eq!(result.goals[0].minute, Some(12));
    assert_eq!(result.goals[2].player_name, "Ana Belén");
}

#[test]
fn test_record_result_allows_unattributed_goals() {
    let mut persistence: Persistence = create_test_persistence();
    let scheduled = setup_scheduled_league(&mut persistence);
    let home = &scheduled.teams[2];
    let away = &scheduled.teams[3];
    let match_id: i64 = find_fixture(&scheduled.matches, home.team_id, away.team_id);

    // Scores stand on their own; the goal list may be partial or empty.
    let request: RecordResultRequest = RecordResultRequest {
        home_score: 3,
        away_score: 0,
        goals: Vec::new(),
    };
    let response: RecordResultResponse =
        record_result(&mut persistence, match_id, &request).unwrap();

    let result = response.match_info.result.expect("Result missing");
    assert_eq!(result.home_score, 3);
    assert!(result.goals.is_empty());
}

#[test]
fn test_record_result_accepts_goals_without_minutes() {
    let mut persistence: Persistence = create_test_persistence();
    let scheduled = setup_scheduled_league(&mut persistence);
    let home = &scheduled.teams[0];
    let away = &scheduled.teams[2];
    let match_id: i64 = find_fixture(&scheduled.matches, home.team_id, away.team_id);
    let lucia = add_player(&mut persistence, home.team_id, "Lucía Fernández");

    let request: RecordResultRequest = RecordResultRequest {
        home_score: 1,
        away_score: 0,
        goals: vec![GoalEntry {
            player_id: lucia.player_id,
            minute: None,
        }],
    };
    let response: RecordResultResponse =
        record_result(&mut persistence, match_id, &request).unwrap();

    let result = response.match_info.result.expect("Result missing");
    assert_eq!(result.goals[0].minute, None);
}

#[test]
fn test_record_result_replaces_the_previous_one() {
    let mut persistence: Persistence = create_test_persistence();
    let scheduled = setup_scheduled_league(&mut persistence);
    let home = &scheduled.teams[0];
    let away = &scheduled.teams[1];
    let match_id: i64 = find_fixture(&scheduled.matches, home.team_id, away.team_id);
    let lucia = add_player(&mut persistence, home.team_id, "Lucía Fernández");
    let diego = add_player(&mut persistence, home.team_id, "Diego Martín");

    let first: RecordResultRequest = RecordResultRequest {
        home_score: 2,
        away_score: 0,
        goals: vec![
            GoalEntry {
                player_id: lucia.player_id,
                minute: Some(10),
            },
            GoalEntry {
                player_id: lucia.player_id,
                minute: Some(70),
            },
        ],
    };
    record_result(&mut persistence, match_id, &first).unwrap();

    let corrected: RecordResultRequest = RecordResultRequest {
        home_score: 1,
        away_score: 0,
        goals: vec![GoalEntry {
            player_id: diego.player_id,
            minute: Some(44),
        }],
    };
    let response: RecordResultResponse =
        record_result(&mut persistence, match_id, &corrected).unwrap();

    let result = response.match_info.result.expect("Result missing");
    assert_eq!(result.home_score, 1);
    assert_eq!(result.goals.len(), 1);
    assert_eq!(result.goals[0].player_name, "Diego Martín");
}

#[test]
fn test_record_result_for_missing_match_returns_not_found() {
    let mut persistence: Persistence = create_test_persistence();
    setup_scheduled_league(&mut persistence);

    let request: RecordResultRequest = RecordResultRequest {
        home_score: 1,
        away_score: 0,
        goals: Vec::new(),
    };
    let err: ApiError = record_result(&mut persistence, 999, &request).unwrap_err();
    assert!(matches!(
        err,
        ApiError::ResourceNotFound { ref resource_type, .. } if resource_type == "Match"
    ));
}

// ============================================================================
// Listing and Guard Tests
// ============================================================================

#[test]
fn test_list_matches_carries_recorded_results() {
    let mut persistence: Persistence = create_test_persistence();
    let scheduled = setup_scheduled_league(&mut persistence);
    let home = &scheduled.teams[0];
    let away = &scheduled.teams[1];
    let match_id: i64 = find_fixture(&scheduled.matches, home.team_id, away.team_id);

    let request: RecordResultRequest = RecordResultRequest {
        home_score: 2,
        away_score: 2,
        goals: Vec::new(),
    };
    record_result(&mut persistence, match_id, &request).unwrap();

    let response: ListMatchesResponse =
        list_matches(&mut persistence, scheduled.league_id).unwrap();
    let completed: Vec<_> = response
        .matches
        .iter()
        .filter(|info| info.is_completed)
        .collect();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].match_id, match_id);
    let result = completed[0].result.as_ref().expect("Result missing");
    assert_eq!(result.home_score, 2);
    assert_eq!(result.away_score, 2);
}

#[test]
fn test_delete_player_with_goals_is_refused() {
    let mut persistence: Persistence = create_test_persistence();
    let scheduled = setup_scheduled_league(&mut persistence);
    let home = &scheduled.teams[0];
    let away = &scheduled.teams[1];
    let match_id: i64 = find_fixture(&scheduled.matches, home.team_id, away.team_id);
    let lucia = add_player(&mut persistence, home.team_id, "Lucía Fernández");

    let request: RecordResultRequest = RecordResultRequest {
        home_score: 1,
        away_score: 0,
        goals: vec![GoalEntry {
            player_id: lucia.player_id,
            minute: Some(21),
        }],
    };
    record_result(&mut persistence, match_id, &request).unwrap();

    let err: ApiError = delete_player(&mut persistence, lucia.player_id).unwrap_err();
    assert!(matches!(
        err,
        ApiError::DomainRuleViolation { ref rule, .. } if rule == "player_not_referenced"
    ));
}
