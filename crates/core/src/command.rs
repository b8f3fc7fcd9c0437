// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use school_contest_domain::{ContestKind, Gender};
use time::Date;

/// A command represents operator intent as data only.
///
/// Commands are the only way to request a write. Deletions are not commands;
/// they carry no rule beyond referential integrity, which the store enforces.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Create a new school.
    CreateSchool {
        /// The school name.
        name: String,
        /// The postal address, if known.
        address: Option<String>,
    },
    /// Create a new class group within a school.
    CreateGroup {
        /// The owning school.
        school_id: i64,
        /// The school year, 1-11.
        year: u8,
        /// The parallel-group letter.
        letter: String,
    },
    /// Create a new village.
    CreateVillage {
        /// The village name.
        name: String,
    },
    /// Create a new contest.
    CreateContest {
        /// The contest title.
        title: String,
        /// The audience the contest admits.
        contest_type: ContestKind,
        /// The day the contest is held.
        held_on: Date,
        /// The highest score awarded.
        max_score: u16,
    },
    /// Register a new candidate.
    RegisterCandidate {
        /// The candidate's first name.
        first_name: String,
        /// The candidate's last name.
        last_name: String,
        /// The candidate's gender.
        gender: Gender,
        /// The group the candidate studies in.
        group_id: i64,
        /// The village the candidate comes from.
        village_id: i64,
    },
    /// Enroll a candidate in a contest.
    EnrollCandidate {
        /// The candidate to enroll.
        candidate_id: i64,
        /// The contest to enroll in.
        contest_id: i64,
    },
    /// Change a contest's fields. `None` keeps the current value.
    ReviseContest {
        /// The contest to revise.
        contest_id: i64,
        /// The new title.
        title: Option<String>,
        /// The new audience.
        contest_type: Option<ContestKind>,
        /// The new date.
        held_on: Option<Date>,
        /// The new maximum score.
        max_score: Option<u16>,
    },
    /// Record a candidate's score in a contest.
    SubmitResult {
        /// The contest the score belongs to.
        contest_id: i64,
        /// The scored candidate.
        candidate_id: i64,
        /// The proposed score.
        score: f64,
    },
    /// Change the score of an existing result.
    UpdateResult {
        /// The result to change.
        result_id: i64,
        /// The proposed score.
        score: f64,
    },
}

impl Command {
    /// Returns the command name used in logs and error messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CreateSchool { .. } => "CreateSchool",
            Self::CreateGroup { .. } => "CreateGroup",
            Self::CreateVillage { .. } => "CreateVillage",
            Self::CreateContest { .. } => "CreateContest",
            Self::RegisterCandidate { .. } => "RegisterCandidate",
            Self::EnrollCandidate { .. } => "EnrollCandidate",
            Self::ReviseContest { .. } => "ReviseContest",
            Self::SubmitResult { .. } => "SubmitResult",
            Self::UpdateResult { .. } => "UpdateResult",
        }
    }
}
