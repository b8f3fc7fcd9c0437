// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod aggregate_tests;
mod concurrency_tests;
mod delete_tests;
mod listing_tests;

use school_contest::Command;
use school_contest_domain::{ContestKind, Gender};
use time::{Date, Month};

use crate::{CommitOutcome, Persistence, PersistenceError};

pub fn create_test_date() -> Date {
    Date::from_calendar_date(2026, Month::May, 20).unwrap()
}

pub fn create_school(persistence: &mut Persistence, name: &str) -> i64 {
    persistence
        .execute(Command::CreateSchool {
            name: name.to_string(),
            address: None,
        })
        .unwrap()
        .record_id
        .unwrap()
}

pub fn create_group(persistence: &mut Persistence, school_id: i64, year: u8, letter: &str) -> i64 {
    persistence
        .execute(Command::CreateGroup {
            school_id,
            year,
            letter: letter.to_string(),
        })
        .unwrap()
        .record_id
        .unwrap()
}

pub fn create_village(persistence: &mut Persistence, name: &str) -> i64 {
    persistence
        .execute(Command::CreateVillage {
            name: name.to_string(),
        })
        .unwrap()
        .record_id
        .unwrap()
}

pub fn create_contest(
    persistence: &mut Persistence,
    title: &str,
    contest_type: ContestKind,
    max_score: u16,
) -> i64 {
    persistence
        .execute(Command::CreateContest {
            title: title.to_string(),
            contest_type,
            held_on: create_test_date(),
            max_score,
        })
        .unwrap()
        .record_id
        .unwrap()
}

pub fn register_candidate(
    persistence: &mut Persistence,
    first_name: &str,
    gender: Gender,
    group_id: i64,
    village_id: i64,
) -> i64 {
    persistence
        .execute(Command::RegisterCandidate {
            first_name: first_name.to_string(),
            last_name: String::from("Tursunov"),
            gender,
            group_id,
            village_id,
        })
        .unwrap()
        .record_id
        .unwrap()
}

pub fn submit(
    persistence: &mut Persistence,
    contest_id: i64,
    candidate_id: i64,
    score: f64,
) -> Result<CommitOutcome, PersistenceError> {
    persistence.execute(Command::SubmitResult {
        contest_id,
        candidate_id,
        score,
    })
}

pub fn enroll(
    persistence: &mut Persistence,
    candidate_id: i64,
    contest_id: i64,
) -> Result<CommitOutcome, PersistenceError> {
    persistence.execute(Command::EnrollCandidate {
        candidate_id,
        contest_id,
    })
}

/// One school with one group, one village, and one candidate of each gender.
pub struct Fixture {
    pub persistence: Persistence,
    pub school_id: i64,
    pub group_id: i64,
    pub village_id: i64,
    pub boy_id: i64,
    pub girl_id: i64,
}

pub fn create_fixture() -> Fixture {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let school_id: i64 = create_school(&mut persistence, "School No. 1");
    let group_id: i64 = create_group(&mut persistence, school_id, 9, "A");
    let village_id: i64 = create_village(&mut persistence, "Yangiobod");
    let boy_id: i64 =
        register_candidate(&mut persistence, "Jasur", Gender::Male, group_id, village_id);
    let girl_id: i64 =
        register_candidate(&mut persistence, "Malika", Gender::Female, group_id, village_id);

    Fixture {
        persistence,
        school_id,
        group_id,
        village_id,
        boy_id,
        girl_id,
    }
}
