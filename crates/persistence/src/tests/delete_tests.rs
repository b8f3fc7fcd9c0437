// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use school_contest_domain::{ContestKind, EntityKind};

use crate::PersistenceError;
use crate::tests::{Fixture, create_contest, create_fixture, enroll, submit};

#[test]
fn test_school_with_groups_is_protected() {
    let mut fixture: Fixture = create_fixture();

    let result: Result<(), PersistenceError> =
        fixture.persistence.delete_school(fixture.school_id);

    assert_eq!(
        result,
        Err(PersistenceError::ReferentialIntegrityViolation {
            entity: EntityKind::School,
            id: fixture.school_id,
            dependent: EntityKind::Group,
            dependents: 1,
        })
    );
    assert!(fixture.persistence.get_school(fixture.school_id).is_ok());
}

#[test]
fn test_group_with_candidates_is_protected() {
    let mut fixture: Fixture = create_fixture();

    let result: Result<(), PersistenceError> =
        fixture.persistence.delete_group(fixture.group_id);

    assert_eq!(
        result,
        Err(PersistenceError::ReferentialIntegrityViolation {
            entity: EntityKind::Group,
            id: fixture.group_id,
            dependent: EntityKind::Candidate,
            dependents: 2,
        })
    );
}

#[test]
fn test_village_with_candidates_is_protected() {
    let mut fixture: Fixture = create_fixture();

    let result: Result<(), PersistenceError> =
        fixture.persistence.delete_village(fixture.village_id);

    assert!(matches!(
        result,
        Err(PersistenceError::ReferentialIntegrityViolation {
            entity: EntityKind::Village,
            dependents: 2,
            ..
        })
    ));
}

#[test]
fn test_unreferenced_records_delete_bottom_up() {
    let mut fixture: Fixture = create_fixture();

    fixture.persistence.delete_candidate(fixture.boy_id).unwrap();
    fixture.persistence.delete_candidate(fixture.girl_id).unwrap();
    fixture.persistence.delete_group(fixture.group_id).unwrap();
    fixture.persistence.delete_village(fixture.village_id).unwrap();
    fixture.persistence.delete_school(fixture.school_id).unwrap();

    assert!(fixture.persistence.list_schools().unwrap().is_empty());
}

#[test]
fn test_deleting_contest_cascades_results_and_enrollments() {
    let mut fixture: Fixture = create_fixture();
    let contest_id: i64 =
        create_contest(&mut fixture.persistence, "Literature", ContestKind::All, 100);
    enroll(&mut fixture.persistence, fixture.boy_id, contest_id).unwrap();
    submit(&mut fixture.persistence, contest_id, fixture.boy_id, 64.0).unwrap();

    fixture.persistence.delete_contest(contest_id).unwrap();

    assert!(fixture.persistence.list_results(None).unwrap().is_empty());
    assert_eq!(
        fixture
            .persistence
            .count_contests_for_candidate(fixture.boy_id)
            .unwrap(),
        0
    );
}

#[test]
fn test_deleting_candidate_cascades_results() {
    let mut fixture: Fixture = create_fixture();
    let contest_id: i64 =
        create_contest(&mut fixture.persistence, "Literature", ContestKind::All, 100);
    submit(&mut fixture.persistence, contest_id, fixture.boy_id, 64.0).unwrap();
    submit(&mut fixture.persistence, contest_id, fixture.girl_id, 71.0).unwrap();

    fixture.persistence.delete_candidate(fixture.boy_id).unwrap();

    assert_eq!(
        fixture.persistence.count_results_in_contest(contest_id).unwrap(),
        1
    );
}

#[test]
fn test_deleting_result_frees_the_pair() {
    let mut fixture: Fixture = create_fixture();
    let contest_id: i64 =
        create_contest(&mut fixture.persistence, "Literature", ContestKind::All, 100);
    let result_id: i64 = submit(&mut fixture.persistence, contest_id, fixture.boy_id, 64.0)
        .unwrap()
        .record_id
        .unwrap();

    fixture.persistence.delete_result(result_id).unwrap();

    assert!(submit(&mut fixture.persistence, contest_id, fixture.boy_id, 66.0).is_ok());
}

#[test]
fn test_deleting_unknown_record_is_not_found() {
    let mut fixture: Fixture = create_fixture();

    assert_eq!(
        fixture.persistence.delete_contest(31),
        Err(PersistenceError::NotFound {
            entity: EntityKind::Contest,
            id: 31,
        })
    );
    assert_eq!(
        fixture.persistence.delete_result(32),
        Err(PersistenceError::NotFound {
            entity: EntityKind::Result,
            id: 32,
        })
    );
}
