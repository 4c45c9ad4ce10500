// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend initialization tests.
//!
//! Connection establishment, migration application and foreign key
//! enforcement are also exercised implicitly by every test that calls
//! `Persistence::new_in_memory()`; the tests here pin the explicit
//! guarantees.

use crate::Persistence;
use crate::tests::create_test_season;

#[test]
fn test_persistence_initialization() {
    let result: Result<Persistence, crate::error::PersistenceError> = Persistence::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_multiple_in_memory_instances_are_isolated() {
    // Each in-memory instance should be isolated
    let mut db1 = Persistence::new_in_memory().unwrap();
    let mut db2 = Persistence::new_in_memory().unwrap();

    create_test_season(&mut db1);

    let seasons1 = db1.list_seasons().unwrap();
    let seasons2 = db2.list_seasons().unwrap();

    assert_eq!(seasons1.len(), 1, "db1 should have 1 season");
    assert_eq!(seasons2.len(), 0, "db2 should have 0 seasons (isolated)");
}

#[test]
fn test_migrations_applied_on_initialization() {
    // If migrations didn't run, the schema wouldn't exist and this would fail
    let mut persistence = Persistence::new_in_memory().unwrap();

    let result = persistence.list_seasons();

    assert!(
        result.is_ok(),
        "Migrations must have applied for the seasons table to exist"
    );
}

#[test]
fn test_foreign_key_enforcement_is_active() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    assert!(persistence.verify_foreign_key_enforcement().is_ok());
}
