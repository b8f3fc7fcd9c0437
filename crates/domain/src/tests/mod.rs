// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod error;

use time::{Date, Month};

use crate::{Candidate, Contest, ContestKind, Gender, MaxScore};

pub fn create_test_date() -> Date {
    Date::from_calendar_date(2026, Month::March, 14).unwrap()
}

pub fn create_test_contest(contest_type: ContestKind, max_score: u16) -> Contest {
    Contest::with_id(
        1,
        String::from("Mathematics Olympiad"),
        contest_type,
        create_test_date(),
        MaxScore::new(max_score).unwrap(),
    )
}

pub fn create_test_candidate(candidate_id: i64, gender: Gender) -> Candidate {
    Candidate::with_id(
        candidate_id,
        String::from("Aziz"),
        String::from("Karimov"),
        gender,
        1,
        1,
    )
}
