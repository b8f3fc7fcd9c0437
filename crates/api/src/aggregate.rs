// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::str::FromStr;

use school_contest_domain::EntityKind;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// The counts served by [`crate::get_aggregate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregateKind {
    /// Groups owned by a school.
    GroupsPerSchool,
    /// Distinct candidates across all groups of a school.
    CandidatesPerSchool,
    /// Candidates studying in a group.
    CandidatesPerGroup,
    /// Candidates coming from a village.
    CandidatesPerVillage,
    /// Distinct candidates enrolled in a contest.
    CandidatesPerContest,
    /// Results recorded for a contest.
    ResultsPerContest,
    /// Distinct contests a candidate is enrolled in.
    ContestsPerCandidate,
}

impl AggregateKind {
    pub const ALL: [Self; 7] = [
        Self::GroupsPerSchool,
        Self::CandidatesPerSchool,
        Self::CandidatesPerGroup,
        Self::CandidatesPerVillage,
        Self::CandidatesPerContest,
        Self::ResultsPerContest,
        Self::ContestsPerCandidate,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GroupsPerSchool => "groups_per_school",
            Self::CandidatesPerSchool => "candidates_per_school",
            Self::CandidatesPerGroup => "candidates_per_group",
            Self::CandidatesPerVillage => "candidates_per_village",
            Self::CandidatesPerContest => "candidates_per_contest",
            Self::ResultsPerContest => "results_per_contest",
            Self::ContestsPerCandidate => "contests_per_candidate",
        }
    }

    /// The kind of entity whose id the aggregate is keyed by.
    #[must_use]
    pub const fn subject(&self) -> EntityKind {
        match self {
            Self::GroupsPerSchool | Self::CandidatesPerSchool => EntityKind::School,
            Self::CandidatesPerGroup => EntityKind::Group,
            Self::CandidatesPerVillage => EntityKind::Village,
            Self::CandidatesPerContest | Self::ResultsPerContest => EntityKind::Contest,
            Self::ContestsPerCandidate => EntityKind::Candidate,
        }
    }
}

impl FromStr for AggregateKind {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| ApiError::InvalidInput {
                field: String::from("kind"),
                message: format!("Unknown aggregate '{s}'"),
            })
    }
}

impl std::fmt::Display for AggregateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
