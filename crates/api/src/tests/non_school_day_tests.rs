// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Non-school day management tests.

use liga_escolar_persistence::Persistence;

use crate::{
    ApiError, CreateNonSchoolDayRequest, ListNonSchoolDaysResponse, UpdateNonSchoolDayRequest,
    create_non_school_day, delete_non_school_day, list_non_school_days, update_non_school_day,
};

use super::helpers::{add_non_school_day, create_autumn_season, create_test_persistence};

// ============================================================================
// Creation and Listing Tests
// ============================================================================

#[test]
fn test_create_non_school_day_and_list_in_date_order() {
    let mut persistence: Persistence = create_test_persistence();
    let season = create_autumn_season(&mut persistence);

    add_non_school_day(
        &mut persistence,
        season.season_id,
        "2026-11-16",
        "Puente de la Revolución",
    );
    add_non_school_day(
        &mut persistence,
        season.season_id,
        "2026-10-12",
        "Consejo Técnico",
    );

    let response: ListNonSchoolDaysResponse =
        list_non_school_days(&mut persistence, season.season_id).unwrap();
    let days: Vec<&str> = response
        .non_school_days
        .iter()
        .map(|day| day.day.as_str())
        .collect();
    // The four seeded holidays plus the two declared above, date order.
    assert_eq!(
        days,
        vec![
            "2026-10-12",
            "2026-11-16",
            "2026-12-20",
            "2027-01-07",
            "2027-03-24",
            "2027-03-31",
        ]
    );
}

#[test]
fn test_create_non_school_day_rejects_duplicate_date() {
    let mut persistence: Persistence = create_test_persistence();
    let season = create_autumn_season(&mut persistence);
    add_non_school_day(&mut persistence, season.season_id, "2026-10-12", "Consejo");

    let request: CreateNonSchoolDayRequest = CreateNonSchoolDayRequest {
        season_id: season.season_id,
        day: String::from("2026-10-12"),
        description: String::from("Otra vez"),
    };
    let err: ApiError = create_non_school_day(&mut persistence, &request).unwrap_err();
    assert!(matches!(
        err,
        ApiError::DomainRuleViolation { ref rule, .. } if rule == "unique_non_school_day"
    ));
}

#[test]
fn test_create_non_school_day_rejects_malformed_date() {
    let mut persistence: Persistence = create_test_persistence();
    let season = create_autumn_season(&mut persistence);

    let request: CreateNonSchoolDayRequest = CreateNonSchoolDayRequest {
        season_id: season.season_id,
        day: String::from("12 de octubre"),
        description: String::from("Consejo"),
    };
    let err: ApiError = create_non_school_day(&mut persistence, &request).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "day"));
}

#[test]
fn test_create_non_school_day_rejects_blank_description() {
    let mut persistence: Persistence = create_test_persistence();
    let season = create_autumn_season(&mut persistence);

    let request: CreateNonSchoolDayRequest = CreateNonSchoolDayRequest {
        season_id: season.season_id,
        day: String::from("2026-10-12"),
        description: String::from("  "),
    };
    let err: ApiError = create_non_school_day(&mut persistence, &request).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "description"));
}

#[test]
fn test_create_non_school_day_for_missing_season_returns_not_found() {
    let mut persistence: Persistence = create_test_persistence();
    let request: CreateNonSchoolDayRequest = CreateNonSchoolDayRequest {
        season_id: 44,
        day: String::from("2026-10-12"),
        description: String::from("Consejo"),
    };
    let err: ApiError = create_non_school_day(&mut persistence, &request).unwrap_err();
    assert!(matches!(err, ApiError::ResourceNotFound { .. }));
}

#[test]
fn test_list_non_school_days_for_missing_season_returns_not_found() {
    let mut persistence: Persistence = create_test_persistence();
    let err: ApiError = list_non_school_days(&mut persistence, 44).unwrap_err();
    assert!(matches!(err, ApiError::ResourceNotFound { .. }));
}

// ============================================================================
// Update and Deletion Tests
// ============================================================================

#[test]
fn test_update_non_school_day_changes_date_and_description() {
    let mut persistence: Persistence = create_test_persistence();
    let season = create_autumn_season(&mut persistence);
    let day_id: i64 =
        add_non_school_day(&mut persistence, season.season_id, "2026-11-16", "Puente");

    let request: UpdateNonSchoolDayRequest = UpdateNonSchoolDayRequest {
        day: String::from("2026-11-23"),
        description: String::from("Puente recorrido"),
    };
    let response = update_non_school_day(&mut persistence, day_id, &request).unwrap();
    assert_eq!(response.non_school_day.day, "2026-11-23");
    assert_eq!(response.non_school_day.description, "Puente recorrido");
    assert_eq!(response.non_school_day.season_id, season.season_id);
}

#[test]
fn test_update_non_school_day_rejects_duplicate_date() {
    let mut persistence: Persistence = create_test_persistence();
    let season = create_autumn_season(&mut persistence);
    let day_id: i64 =
        add_non_school_day(&mut persistence, season.season_id, "2026-11-16", "Puente");

    // 2026-12-20 is already seeded as the start of the Christmas break.
    let request: UpdateNonSchoolDayRequest = UpdateNonSchoolDayRequest {
        day: String::from("2026-12-20"),
        description: String::from("Colisión"),
    };
    let err: ApiError = update_non_school_day(&mut persistence, day_id, &request).unwrap_err();
    assert!(matches!(
        err,
        ApiError::DomainRuleViolation { ref rule, .. } if rule == "unique_non_school_day"
    ));
}

#[test]
fn test_update_non_school_day_accepts_its_own_date() {
    let mut persistence: Persistence = create_test_persistence();
    let season = create_autumn_season(&mut persistence);
    let day_id: i64 =
        add_non_school_day(&mut persistence, season.season_id, "2026-11-16", "Puente");

    let request: UpdateNonSchoolDayRequest = UpdateNonSchoolDayRequest {
        day: String::from("2026-11-16"),
        description: String::from("Puente confirmado"),
    };
    let response = update_non_school_day(&mut persistence, day_id, &request).unwrap();
    assert_eq!(response.non_school_day.day, "2026-11-16");
    assert_eq!(response.non_school_day.description, "Puente confirmado");
}

#[test]
fn test_update_missing_non_school_day_returns_not_found() {
    let mut persistence: Persistence = create_test_persistence();
    let request: UpdateNonSchoolDayRequest = UpdateNonSchoolDayRequest {
        day: String::from("2026-11-23"),
        description: String::from("Puente"),
    };
    let err: ApiError = update_non_school_day(&mut persistence, 61, &request).unwrap_err();
    assert!(matches!(err, ApiError::ResourceNotFound { .. }));
}

#[test]
fn test_delete_non_school_day() {
    let mut persistence: Persistence = create_test_persistence();
    let season = create_autumn_season(&mut persistence);
    let day_id: i64 =
        add_non_school_day(&mut persistence, season.season_id, "2026-11-16", "Puente");

    let response = delete_non_school_day(&mut persistence, day_id).unwrap();
    assert_eq!(response.non_school_day_id, day_id);

    let remaining: ListNonSchoolDaysResponse =
        list_non_school_days(&mut persistence, season.season_id).unwrap();
    assert_eq!(remaining.non_school_days.len(), 4);
}

#[test]
fn test_delete_missing_non_school_day_returns_not_found() {
    let mut persistence: Persistence = create_test_persistence();
    let err: ApiError = delete_non_school_day(&mut persistence, 61).unwrap_err();
    assert!(matches!(err, ApiError::ResourceNotFound { .. }));
}
