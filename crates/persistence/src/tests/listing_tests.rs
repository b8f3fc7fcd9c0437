// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use school_contest_domain::{
    Candidate, Contest, ContestKind, ContestResult, EntityKind, Gender, Group,
};

use crate::tests::{
    Fixture, create_contest, create_fixture, create_group, create_school, register_candidate,
};
use crate::{CandidateFilter, ContestFilter, GroupFilter, PersistenceError};

#[test]
fn test_candidates_filter_by_gender() {
    let mut fixture: Fixture = create_fixture();

    let girls: Vec<Candidate> = fixture
        .persistence
        .list_candidates(&CandidateFilter {
            gender: Some(Gender::Female),
            ..CandidateFilter::default()
        })
        .unwrap();

    assert_eq!(girls.len(), 1);
    assert_eq!(girls[0].first_name, "Malika");
}

#[test]
fn test_candidates_filter_by_school_and_year() {
    let mut fixture: Fixture = create_fixture();
    let other_school: i64 = create_school(&mut fixture.persistence, "School No. 2");
    let other_group: i64 = create_group(&mut fixture.persistence, other_school, 4, "B");
    register_candidate(
        &mut fixture.persistence,
        "Sanjar",
        Gender::Male,
        other_group,
        fixture.village_id,
    );

    let in_first: Vec<Candidate> = fixture
        .persistence
        .list_candidates(&CandidateFilter {
            school_id: Some(fixture.school_id),
            ..CandidateFilter::default()
        })
        .unwrap();
    let fourth_year: Vec<Candidate> = fixture
        .persistence
        .list_candidates(&CandidateFilter {
            year: Some(4),
            ..CandidateFilter::default()
        })
        .unwrap();

    assert_eq!(in_first.len(), 2);
    assert_eq!(fourth_year.len(), 1);
    assert_eq!(fourth_year[0].first_name, "Sanjar");
}

#[test]
fn test_candidate_search_is_case_insensitive() {
    let mut fixture: Fixture = create_fixture();

    let found: Vec<Candidate> = fixture
        .persistence
        .list_candidates(&CandidateFilter {
            search: Some(String::from("JAS")),
            ..CandidateFilter::default()
        })
        .unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].candidate_id, Some(fixture.boy_id));
}

#[test]
fn test_groups_filter_by_school() {
    let mut fixture: Fixture = create_fixture();
    let other_school: i64 = create_school(&mut fixture.persistence, "School No. 2");
    create_group(&mut fixture.persistence, other_school, 9, "A");

    let groups: Vec<Group> = fixture
        .persistence
        .list_groups(&GroupFilter {
            school_id: Some(other_school),
            year: None,
        })
        .unwrap();

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].school_id, other_school);
    assert_eq!(
        fixture
            .persistence
            .list_groups(&GroupFilter::default())
            .unwrap()
            .len(),
        2
    );
}

#[test]
fn test_contests_filter_by_type() {
    let mut fixture: Fixture = create_fixture();
    create_contest(&mut fixture.persistence, "Open Maths", ContestKind::All, 100);
    create_contest(&mut fixture.persistence, "Girls' Football", ContestKind::Female, 10);

    let female: Vec<Contest> = fixture
        .persistence
        .list_contests(&ContestFilter {
            contest_type: Some(ContestKind::Female),
        })
        .unwrap();

    assert_eq!(female.len(), 1);
    assert_eq!(female[0].title, "Girls' Football");
}

#[test]
fn test_unknown_filter_ids_are_not_found() {
    let mut fixture: Fixture = create_fixture();

    let groups: Result<Vec<Group>, PersistenceError> =
        fixture.persistence.list_groups(&GroupFilter {
            school_id: Some(999),
            year: None,
        });
    let candidates: Result<Vec<Candidate>, PersistenceError> =
        fixture.persistence.list_candidates(&CandidateFilter {
            school_id: Some(999),
            ..CandidateFilter::default()
        });
    let results: Result<Vec<ContestResult>, PersistenceError> =
        fixture.persistence.list_results(Some(999));

    assert_eq!(
        groups,
        Err(PersistenceError::NotFound {
            entity: EntityKind::School,
            id: 999,
        })
    );
    assert_eq!(
        candidates,
        Err(PersistenceError::NotFound {
            entity: EntityKind::School,
            id: 999,
        })
    );
    assert_eq!(
        results,
        Err(PersistenceError::NotFound {
            entity: EntityKind::Contest,
            id: 999,
        })
    );
}

#[test]
fn test_known_filter_ids_without_rows_list_empty() {
    let mut fixture: Fixture = create_fixture();
    let empty_school: i64 = create_school(&mut fixture.persistence, "School No. 9");
    let quiet_contest: i64 =
        create_contest(&mut fixture.persistence, "Chess", ContestKind::All, 100);

    let groups: Vec<Group> = fixture
        .persistence
        .list_groups(&GroupFilter {
            school_id: Some(empty_school),
            year: None,
        })
        .unwrap();
    let results: Vec<ContestResult> = fixture
        .persistence
        .list_results(Some(quiet_contest))
        .unwrap();

    assert!(groups.is_empty());
    assert!(results.is_empty());
}
