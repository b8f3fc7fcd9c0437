// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ContestKind, DomainError, Gender};

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::GenderMismatch {
        contest_type: ContestKind::Female,
        gender: Gender::Male,
    };
    assert_eq!(
        format!("{err}"),
        "Contest of type 'female' does not admit a candidate of gender 'male'"
    );

    let err: DomainError = DomainError::ScoreOutOfRange {
        score: 75.0,
        max_score: 50,
    };
    assert_eq!(
        format!("{err}"),
        "Score 75 is out of range. Must be between 0 and 50"
    );

    let err: DomainError = DomainError::DuplicateResult {
        contest_id: 3,
        candidate_id: 9,
    };
    assert_eq!(
        format!("{err}"),
        "Candidate 9 already has a result in contest 3"
    );

    let err: DomainError = DomainError::InvalidGroupYear { year: 12 };
    assert_eq!(
        format!("{err}"),
        "Invalid group year: 12. Must be between 1 and 11"
    );

    let err: DomainError = DomainError::DuplicateGroup {
        school_id: 1,
        year: 7,
        letter: 'B',
    };
    assert_eq!(format!("{err}"), "Group 7-B already exists in school 1");

    let err: DomainError = DomainError::DuplicateSchool(String::from("School 12"));
    assert_eq!(format!("{err}"), "School 'School 12' already exists");
}

#[test]
fn test_contest_revision_conflict_display_includes_reason() {
    let err: DomainError = DomainError::ContestRevisionConflict {
        contest_id: 2,
        candidate_id: 5,
        reason: Box::new(DomainError::ScoreOutOfRange {
            score: 80.5,
            max_score: 50,
        }),
    };

    assert_eq!(
        format!("{err}"),
        "Revision of contest 2 would invalidate the record of candidate 5: Score 80.5 is out of range. Must be between 0 and 50"
    );
}
