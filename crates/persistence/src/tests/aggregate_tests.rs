// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use school_contest_domain::{ContestKind, EntityKind, Gender};

use crate::tests::{
    create_contest, create_group, create_school, create_village, enroll, register_candidate,
    submit,
};
use crate::{Persistence, PersistenceError};

#[test]
fn test_school_candidate_count_spans_all_groups() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let school_id: i64 = create_school(&mut persistence, "A");
    let group_1a: i64 = create_group(&mut persistence, school_id, 1, "A");
    let group_2b: i64 = create_group(&mut persistence, school_id, 2, "B");
    let village_id: i64 = create_village(&mut persistence, "Qoraqamish");

    for name in ["Ali", "Vali", "Sardor"] {
        register_candidate(&mut persistence, name, Gender::Male, group_1a, village_id);
    }
    for name in ["Nodira", "Zarina"] {
        register_candidate(&mut persistence, name, Gender::Female, group_2b, village_id);
    }

    assert_eq!(persistence.count_candidates_in_school(school_id).unwrap(), 5);
    assert_eq!(persistence.count_groups_in_school(school_id).unwrap(), 2);
    assert_eq!(persistence.count_candidates_in_group(group_1a).unwrap(), 3);
    assert_eq!(persistence.count_candidates_in_group(group_2b).unwrap(), 2);
    assert_eq!(persistence.count_candidates_in_village(village_id).unwrap(), 5);
}

#[test]
fn test_school_counts_do_not_leak_across_schools() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let first: i64 = create_school(&mut persistence, "First");
    let second: i64 = create_school(&mut persistence, "Second");
    let group_first: i64 = create_group(&mut persistence, first, 3, "A");
    create_group(&mut persistence, second, 3, "A");
    let village_id: i64 = create_village(&mut persistence, "Sho'rtepa");
    register_candidate(&mut persistence, "Farrux", Gender::Male, group_first, village_id);

    assert_eq!(persistence.count_candidates_in_school(first).unwrap(), 1);
    assert_eq!(persistence.count_candidates_in_school(second).unwrap(), 0);
}

#[test]
fn test_contest_and_candidate_counts() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let school_id: i64 = create_school(&mut persistence, "A");
    let group_id: i64 = create_group(&mut persistence, school_id, 8, "G");
    let village_id: i64 = create_village(&mut persistence, "Oqtosh");
    let a: i64 =
        register_candidate(&mut persistence, "Bobur", Gender::Male, group_id, village_id);
    let b: i64 =
        register_candidate(&mut persistence, "Shoira", Gender::Female, group_id, village_id);
    let maths: i64 = create_contest(&mut persistence, "Maths", ContestKind::All, 100);
    let physics: i64 = create_contest(&mut persistence, "Physics", ContestKind::All, 100);

    enroll(&mut persistence, a, maths).unwrap();
    enroll(&mut persistence, b, maths).unwrap();
    enroll(&mut persistence, a, physics).unwrap();
    submit(&mut persistence, maths, a, 90.0).unwrap();

    assert_eq!(persistence.count_candidates_in_contest(maths).unwrap(), 2);
    assert_eq!(persistence.count_results_in_contest(maths).unwrap(), 1);
    assert_eq!(persistence.count_results_in_contest(physics).unwrap(), 0);
    assert_eq!(persistence.count_contests_for_candidate(a).unwrap(), 2);
    assert_eq!(persistence.count_contests_for_candidate(b).unwrap(), 1);
}

#[test]
fn test_aggregate_of_unknown_entity_is_not_found() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let result: Result<usize, PersistenceError> = persistence.count_candidates_in_school(12);

    assert_eq!(
        result,
        Err(PersistenceError::NotFound {
            entity: EntityKind::School,
            id: 12,
        })
    );
    assert!(matches!(
        persistence.count_contests_for_candidate(3),
        Err(PersistenceError::NotFound {
            entity: EntityKind::Candidate,
            ..
        })
    ));
}
