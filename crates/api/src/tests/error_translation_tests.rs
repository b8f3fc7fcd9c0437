// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use school_contest::CoreError;
use school_contest_domain::{ContestKind, DomainError, EntityKind, Gender};
use school_contest_persistence::PersistenceError;

use crate::{
    ApiError, ErrorKind, rules, translate_core_error, translate_domain_error,
    translate_persistence_error,
};

#[test]
fn test_gender_mismatch_names_both_sides() {
    let err: ApiError = translate_domain_error(DomainError::GenderMismatch {
        contest_type: ContestKind::Female,
        gender: Gender::Male,
    });

    assert_eq!(
        err,
        ApiError::DomainRuleViolation {
            rule: String::from(rules::GENDER_ELIGIBILITY),
            message: String::from("A male candidate cannot take part in a female contest"),
        }
    );
}

#[test]
fn test_score_out_of_range_carries_values() {
    let err: ApiError = translate_domain_error(DomainError::ScoreOutOfRange {
        score: 75.0,
        max_score: 50,
    });

    assert_eq!(err.kind(), ErrorKind::ScoreOutOfRange);
    assert_eq!(
        err.to_string(),
        "Domain rule violation (score_range): Score 75 is outside the range 0 to 50"
    );
}

#[test]
fn test_revision_conflict_includes_reason() {
    let err: ApiError = translate_domain_error(DomainError::ContestRevisionConflict {
        contest_id: 2,
        candidate_id: 6,
        reason: Box::new(DomainError::ScoreOutOfRange {
            score: 90.0,
            max_score: 80,
        }),
    });

    assert_eq!(err.kind(), ErrorKind::ContestRevisionConflict);
    assert!(err.to_string().contains("candidate 6"));
}

#[test]
fn test_field_errors_become_invalid_input() {
    let cases: Vec<(DomainError, &str)> = vec![
        (DomainError::InvalidGroupYear { year: 0 }, "year"),
        (DomainError::InvalidGroupLetter(String::from("7")), "letter"),
        (DomainError::InvalidMaxScore { max_score: 101 }, "max_score"),
        (DomainError::InvalidGender(String::from("x")), "gender"),
        (DomainError::InvalidContestTitle(String::from("empty")), "title"),
    ];

    for (domain_err, expected_field) in cases {
        match translate_domain_error(domain_err) {
            ApiError::InvalidInput { field, .. } => assert_eq!(field, expected_field),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }
}

#[test]
fn test_uniqueness_errors_are_duplicates() {
    let errors: Vec<DomainError> = vec![
        DomainError::DuplicateSchool(String::from("Lyceum")),
        DomainError::DuplicateVillage(String::from("Chorbog'")),
        DomainError::DuplicateContest(String::from("Chess")),
        DomainError::DuplicateGroup {
            school_id: 1,
            year: 5,
            letter: 'V',
        },
        DomainError::DuplicateEnrollment {
            candidate_id: 1,
            contest_id: 1,
        },
    ];

    for domain_err in errors {
        assert_eq!(translate_domain_error(domain_err).kind(), ErrorKind::Duplicate);
    }
}

#[test]
fn test_command_mismatch_is_internal() {
    let err: ApiError = translate_core_error(CoreError::CommandMismatch {
        command: "SubmitResult",
        context: "Catalog",
    });

    assert_eq!(err.kind(), ErrorKind::Internal);
}

#[test]
fn test_persistence_errors_translate_by_kind() {
    let rejected: ApiError = translate_persistence_error(PersistenceError::Rejected(
        CoreError::DomainViolation(DomainError::DuplicateResult {
            contest_id: 1,
            candidate_id: 2,
        }),
    ));
    let missing: ApiError = translate_persistence_error(PersistenceError::NotFound {
        entity: EntityKind::Result,
        id: 5,
    });
    let protected: ApiError =
        translate_persistence_error(PersistenceError::ReferentialIntegrityViolation {
            entity: EntityKind::School,
            id: 1,
            dependent: EntityKind::Group,
            dependents: 3,
        });
    let failed: ApiError =
        translate_persistence_error(PersistenceError::QueryFailed(String::from("disk I/O")));

    assert_eq!(rejected.kind(), ErrorKind::DuplicateResult);
    assert_eq!(missing.kind(), ErrorKind::NotFound);
    assert_eq!(protected.kind(), ErrorKind::ReferentialIntegrityViolation);
    assert_eq!(
        protected.to_string(),
        "School is still referenced: School 1 is referenced by 3 group record(s)"
    );
    assert_eq!(failed.kind(), ErrorKind::Internal);
}
