// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use school_contest_persistence::Persistence;

use crate::{
    CreateContestRequest, CreateGroupRequest, CreateSchoolRequest, CreateVillageRequest,
    RegisterCandidateRequest, create_contest, create_group, create_school, create_village,
    register_candidate,
};

/// A store with one school, one group 5-V, one village, a boy and a girl.
pub struct Registry {
    pub persistence: Persistence,
    pub school_id: i64,
    pub group_id: i64,
    pub village_id: i64,
    pub boy_id: i64,
    pub girl_id: i64,
}

pub fn create_test_registry() -> Registry {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let school_id: i64 = create_school(
        &mut persistence,
        CreateSchoolRequest {
            name: String::from("Lyceum No. 3"),
            address: Some(String::from("Mustaqillik ko'chasi 12")),
        },
    )
    .unwrap()
    .school
    .school_id;
    let group_id: i64 = create_group(
        &mut persistence,
        CreateGroupRequest {
            school_id,
            year: 5,
            letter: String::from("v"),
        },
    )
    .unwrap()
    .group
    .group_id;
    let village_id: i64 = create_village(
        &mut persistence,
        CreateVillageRequest {
            name: String::from("Chorbog'"),
        },
    )
    .unwrap()
    .village
    .village_id;
    let boy_id: i64 = register(&mut persistence, "Otabek", "male", group_id, village_id);
    let girl_id: i64 = register(&mut persistence, "Gulnora", "female", group_id, village_id);

    Registry {
        persistence,
        school_id,
        group_id,
        village_id,
        boy_id,
        girl_id,
    }
}

pub fn register(
    persistence: &mut Persistence,
    first_name: &str,
    gender: &str,
    group_id: i64,
    village_id: i64,
) -> i64 {
    register_candidate(
        persistence,
        RegisterCandidateRequest {
            first_name: first_name.to_string(),
            last_name: String::from("Yusupov"),
            gender: Some(gender.to_string()),
            group_id,
            village_id,
        },
    )
    .unwrap()
    .candidate
    .candidate_id
}

pub fn contest(
    persistence: &mut Persistence,
    title: &str,
    contest_type: &str,
    max_score: u16,
) -> i64 {
    create_contest(
        persistence,
        CreateContestRequest {
            title: title.to_string(),
            contest_type: Some(contest_type.to_string()),
            date: String::from("2026-09-15"),
            max_score: Some(max_score),
        },
    )
    .unwrap()
    .contest
    .contest_id
}
