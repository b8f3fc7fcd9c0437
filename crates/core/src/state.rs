// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use school_contest_domain::{Candidate, Contest, ContestResult, Group, School, Village};

/// The stored records a command is decided against.
///
/// The store loads the context inside its write transaction, so the
/// decision and the commit see the same state.
#[derive(Debug, Clone, PartialEq)]
pub enum Context {
    /// Context for creating a school, group, village, contest or candidate.
    Catalog {
        /// Whether a record with the same natural key already exists.
        duplicate: bool,
    },
    /// Context for enrolling a candidate.
    Enrollment {
        /// The contest being enrolled in.
        contest: Contest,
        /// The candidate being enrolled.
        candidate: Candidate,
        /// Whether the pair is already enrolled.
        already_enrolled: bool,
    },
    /// Context for revising a contest.
    Revision {
        /// The contest as currently stored.
        current: Contest,
        /// Whether another contest already uses the revised title.
        title_taken: bool,
        /// The contest's results, each with its candidate.
        results: Vec<(ContestResult, Candidate)>,
        /// The candidates enrolled in the contest.
        enrolled: Vec<Candidate>,
    },
    /// Context for submitting a new result.
    Submission {
        /// The contest the score belongs to.
        contest: Contest,
        /// The scored candidate.
        candidate: Candidate,
        /// The result already stored for this pair, if any.
        existing: Option<ContestResult>,
    },
    /// Context for changing a stored result's score.
    Rescoring {
        /// The result's contest.
        contest: Contest,
        /// The result's candidate.
        candidate: Candidate,
        /// The result as currently stored.
        current: ContestResult,
    },
}

impl Context {
    /// Returns the context name used in error messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Catalog { .. } => "Catalog",
            Self::Enrollment { .. } => "Enrollment",
            Self::Revision { .. } => "Revision",
            Self::Submission { .. } => "Submission",
            Self::Rescoring { .. } => "Rescoring",
        }
    }
}

/// A validated write, ready to commit.
///
/// Records to insert carry no identifier; the store assigns one.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    InsertSchool(School),
    InsertGroup(Group),
    InsertVillage(Village),
    InsertContest(Contest),
    InsertCandidate(Candidate),
    InsertEnrollment {
        candidate_id: i64,
        contest_id: i64,
    },
    UpdateContest(Contest),
    InsertResult(ContestResult),
    UpdateResult(ContestResult),
}

impl Transition {
    /// Returns a short description of the write for logging.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::InsertSchool(school) => format!("insert school '{}'", school.name),
            Self::InsertGroup(group) => {
                format!("insert group {} in school {}", group.code(), group.school_id)
            }
            Self::InsertVillage(village) => format!("insert village '{}'", village.name),
            Self::InsertContest(contest) => format!("insert contest '{}'", contest.title),
            Self::InsertCandidate(candidate) => {
                format!("insert candidate '{}'", candidate.full_name())
            }
            Self::InsertEnrollment {
                candidate_id,
                contest_id,
            } => format!("enroll candidate {candidate_id} in contest {contest_id}"),
            Self::UpdateContest(contest) => format!(
                "update contest {}",
                contest.contest_id.unwrap_or_default()
            ),
            Self::InsertResult(result) => format!(
                "insert result for candidate {} in contest {}: {}",
                result.candidate_id, result.contest_id, result.score
            ),
            Self::UpdateResult(result) => format!(
                "update result {}: {}",
                result.result_id.unwrap_or_default(),
                result.score
            ),
        }
    }
}
