// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use school_contest_domain::{Candidate, Contest, ContestKind, Gender, MaxScore};
use time::{Date, Month};

pub fn create_test_date() -> Date {
    Date::from_calendar_date(2026, Month::April, 2).unwrap()
}

pub fn create_test_contest(contest_type: ContestKind, max_score: u16) -> Contest {
    Contest::with_id(
        3,
        String::from("Regional Physics Contest"),
        contest_type,
        create_test_date(),
        MaxScore::new(max_score).unwrap(),
    )
}

pub fn create_test_candidate(candidate_id: i64, gender: Gender) -> Candidate {
    Candidate::with_id(
        candidate_id,
        String::from("Dilnoza"),
        String::from("Rashidova"),
        gender,
        2,
        4,
    )
}
