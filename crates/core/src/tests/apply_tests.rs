// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_candidate, create_test_contest, create_test_date};
use crate::{Command, Context, CoreError, Transition, apply, apply_enrollment};
use school_contest_domain::{ContestKind, DomainError, Gender};

fn catalog(duplicate: bool) -> Context {
    Context::Catalog { duplicate }
}

#[test]
fn test_create_school_produces_insert() {
    let command: Command = Command::CreateSchool {
        name: String::from("  School No. 5 "),
        address: Some(String::from("Navoi street 10")),
    };

    let transition: Transition = apply(command, catalog(false)).unwrap();

    let Transition::InsertSchool(school) = transition else {
        panic!("expected InsertSchool");
    };
    assert_eq!(school.name, "School No. 5");
    assert_eq!(school.school_id, None);
    assert_eq!(school.address.as_deref(), Some("Navoi street 10"));
}

#[test]
fn test_create_school_rejects_duplicate_name() {
    let command: Command = Command::CreateSchool {
        name: String::from("School No. 5"),
        address: None,
    };

    let result: Result<Transition, CoreError> = apply(command, catalog(true));

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::DuplicateSchool(
            String::from("School No. 5")
        )))
    );
}

#[test]
fn test_field_rules_are_checked_before_uniqueness() {
    let command: Command = Command::CreateSchool {
        name: String::from("   "),
        address: None,
    };

    let result: Result<Transition, CoreError> = apply(command, catalog(true));

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::InvalidSchoolName(_)))
    ));
}

#[test]
fn test_create_group_normalizes_letter() {
    let command: Command = Command::CreateGroup {
        school_id: 1,
        year: 7,
        letter: String::from("b"),
    };

    let transition: Transition = apply(command, catalog(false)).unwrap();

    let Transition::InsertGroup(group) = transition else {
        panic!("expected InsertGroup");
    };
    assert_eq!(group.code(), "7-B");
}

#[test]
fn test_create_group_rejects_year_out_of_range() {
    let command: Command = Command::CreateGroup {
        school_id: 1,
        year: 12,
        letter: String::from("A"),
    };

    let result: Result<Transition, CoreError> = apply(command, catalog(false));

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::InvalidGroupYear {
            year: 12
        }))
    );
}

#[test]
fn test_create_group_rejects_duplicate() {
    let command: Command = Command::CreateGroup {
        school_id: 1,
        year: 2,
        letter: String::from("b"),
    };

    let result: Result<Transition, CoreError> = apply(command, catalog(true));

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::DuplicateGroup {
            school_id: 1,
            year: 2,
            letter: 'B',
        }))
    );
}

#[test]
fn test_create_village_rejects_duplicate() {
    let command: Command = Command::CreateVillage {
        name: String::from("Bo'stonliq"),
    };

    let result: Result<Transition, CoreError> = apply(command, catalog(true));

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::DuplicateVillage(_)))
    ));
}

#[test]
fn test_create_contest_rejects_zero_max_score() {
    let command: Command = Command::CreateContest {
        title: String::from("Chemistry"),
        contest_type: ContestKind::All,
        held_on: create_test_date(),
        max_score: 0,
    };

    let result: Result<Transition, CoreError> = apply(command, catalog(false));

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::InvalidMaxScore {
            max_score: 0
        }))
    );
}

#[test]
fn test_create_contest_produces_insert() {
    let command: Command = Command::CreateContest {
        title: String::from("Chemistry"),
        contest_type: ContestKind::Female,
        held_on: create_test_date(),
        max_score: 40,
    };

    let transition: Transition = apply(command, catalog(false)).unwrap();

    let Transition::InsertContest(contest) = transition else {
        panic!("expected InsertContest");
    };
    assert_eq!(contest.contest_type, ContestKind::Female);
    assert_eq!(contest.max_score.value(), 40);
}

#[test]
fn test_register_candidate_requires_both_names() {
    let command: Command = Command::RegisterCandidate {
        first_name: String::from("Bekzod"),
        last_name: String::new(),
        gender: Gender::Male,
        group_id: 1,
        village_id: 1,
    };

    let result: Result<Transition, CoreError> = apply(command, catalog(false));

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::InvalidCandidateName(_)
        ))
    ));
}

#[test]
fn test_enrollment_checks_eligibility() {
    let contest = create_test_contest(ContestKind::Male, 100);
    let candidate = create_test_candidate(9, Gender::Female);

    let result: Result<Transition, CoreError> = apply_enrollment(&contest, &candidate, false);

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::GenderMismatch { .. }))
    ));
}

#[test]
fn test_enrollment_rejects_repeat() {
    let contest = create_test_contest(ContestKind::All, 100);
    let candidate = create_test_candidate(9, Gender::Female);

    let result: Result<Transition, CoreError> = apply_enrollment(&contest, &candidate, true);

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::DuplicateEnrollment {
                candidate_id: 9,
                contest_id: 3,
            }
        ))
    );
}

#[test]
fn test_enrollment_produces_insert() {
    let command: Command = Command::EnrollCandidate {
        candidate_id: 9,
        contest_id: 3,
    };
    let context: Context = Context::Enrollment {
        contest: create_test_contest(ContestKind::All, 100),
        candidate: create_test_candidate(9, Gender::Male),
        already_enrolled: false,
    };

    let transition: Transition = apply(command, context).unwrap();

    assert_eq!(
        transition,
        Transition::InsertEnrollment {
            candidate_id: 9,
            contest_id: 3,
        }
    );
}
