// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Enumerated fields (gender, contest type) and dates travel as strings and
//! are parsed by the handlers, so a malformed value surfaces as
//! `ApiError::InvalidInput` naming the field.

use school_contest_domain::{
    Candidate, Contest, ContestResult, Describable, EntityKind, Group, RankingEntry, School,
    Village, format_contest_date,
};
use serde::{Deserialize, Serialize};

use crate::aggregate::AggregateKind;

// ============================================================================
// Results
// ============================================================================

/// API request to record a candidate's score in a contest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubmitResultRequest {
    /// The contest.
    pub contest_id: i64,
    /// The scored candidate.
    pub candidate_id: i64,
    /// The awarded score.
    pub score: f64,
}

/// API response for a recorded result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitResultResponse {
    /// The canonical result identifier.
    pub result_id: i64,
    /// The contest.
    pub contest_id: i64,
    /// The scored candidate.
    pub candidate_id: i64,
    /// The stored score.
    pub score: f64,
    /// A success message.
    pub message: String,
}

/// API request to change the score of a stored result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UpdateResultRequest {
    /// The result to change.
    pub result_id: i64,
    /// The new score.
    pub score: f64,
}

/// API response for a changed result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateResultResponse {
    /// The result identifier.
    pub result_id: i64,
    /// The stored score.
    pub score: f64,
    /// A success message.
    pub message: String,
}

/// A stored result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultInfo {
    pub result_id: i64,
    pub contest_id: i64,
    pub candidate_id: i64,
    pub score: f64,
    pub label: String,
}

impl From<&ContestResult> for ResultInfo {
    fn from(result: &ContestResult) -> Self {
        Self {
            result_id: result.result_id.unwrap_or_default(),
            contest_id: result.contest_id,
            candidate_id: result.candidate_id,
            score: result.score,
            label: result.display_label(),
        }
    }
}

/// API response listing results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResultsResponse {
    pub results: Vec<ResultInfo>,
}

// ============================================================================
// Aggregates
// ============================================================================

/// API response for a single count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetAggregateResponse {
    /// The aggregate computed.
    pub kind: AggregateKind,
    /// The entity the aggregate is keyed by.
    pub entity_id: i64,
    /// The count.
    pub count: usize,
}

/// API response for a contest ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetRankingResponse {
    /// The ranked contest.
    pub contest_id: i64,
    /// The contest's title.
    pub contest_title: String,
    /// Ranked results, best first.
    pub entries: Vec<RankingEntry>,
}

// ============================================================================
// Schools, groups, villages
// ============================================================================

/// API request to create a school.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSchoolRequest {
    /// The school's unique name.
    pub name: String,
    /// Optional postal address.
    pub address: Option<String>,
}

/// API response for a created school.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSchoolResponse {
    pub school: SchoolInfo,
    pub message: String,
}

/// A stored school.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolInfo {
    pub school_id: i64,
    pub name: String,
    pub address: Option<String>,
    pub label: String,
}

impl From<&School> for SchoolInfo {
    fn from(school: &School) -> Self {
        Self {
            school_id: school.school_id.unwrap_or_default(),
            name: school.name.clone(),
            address: school.address.clone(),
            label: school.display_label(),
        }
    }
}

/// API response listing schools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSchoolsResponse {
    pub schools: Vec<SchoolInfo>,
}

/// API request to create a group inside a school.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGroupRequest {
    /// The owning school.
    pub school_id: i64,
    /// School year, 1 through 11.
    pub year: u8,
    /// Single-letter section; stored uppercase.
    pub letter: String,
}

/// API response for a created group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGroupResponse {
    pub group: GroupInfo,
    pub message: String,
}

/// A stored group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupInfo {
    pub group_id: i64,
    pub school_id: i64,
    pub year: u8,
    pub letter: char,
    /// The display code, e.g. `7-B`.
    pub code: String,
    pub label: String,
}

impl From<&Group> for GroupInfo {
    fn from(group: &Group) -> Self {
        Self {
            group_id: group.group_id.unwrap_or_default(),
            school_id: group.school_id,
            year: group.year.value(),
            letter: group.letter.value(),
            code: group.code(),
            label: group.display_label(),
        }
    }
}

/// API request to filter groups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListGroupsRequest {
    pub school_id: Option<i64>,
    pub year: Option<u8>,
}

/// API response listing groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListGroupsResponse {
    pub groups: Vec<GroupInfo>,
}

/// API request to create a village.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateVillageRequest {
    /// The village's unique name.
    pub name: String,
}

/// API response for a created village.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateVillageResponse {
    pub village: VillageInfo,
    pub message: String,
}

/// A stored village.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VillageInfo {
    pub village_id: i64,
    pub name: String,
    pub label: String,
}

impl From<&Village> for VillageInfo {
    fn from(village: &Village) -> Self {
        Self {
            village_id: village.village_id.unwrap_or_default(),
            name: village.name.clone(),
            label: village.display_label(),
        }
    }
}

/// API response listing villages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListVillagesResponse {
    pub villages: Vec<VillageInfo>,
}

// ============================================================================
// Contests
// ============================================================================

/// API request to create a contest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateContestRequest {
    /// The contest's unique title.
    pub title: String,
    /// `male`, `female` or `all`; `all` when omitted.
    pub contest_type: Option<String>,
    /// The day the contest is held (ISO 8601).
    pub date: String,
    /// Highest attainable score, 1 through 100; 100 when omitted.
    pub max_score: Option<u16>,
}

/// API response for a created contest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateContestResponse {
    pub contest: ContestInfo,
    pub message: String,
}

/// API request to change a contest.
///
/// Omitted fields keep their stored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviseContestRequest {
    pub contest_id: i64,
    pub title: Option<String>,
    pub contest_type: Option<String>,
    pub date: Option<String>,
    pub max_score: Option<u16>,
}

/// API response for a revised contest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviseContestResponse {
    pub contest: ContestInfo,
    pub message: String,
}

/// A stored contest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContestInfo {
    pub contest_id: i64,
    pub title: String,
    /// The stored code: `male`, `female` or `all`.
    pub contest_type: String,
    /// The operator-facing label for the contest type.
    pub contest_type_label: String,
    /// ISO 8601 date.
    pub date: String,
    pub max_score: u16,
    /// Title and contest type label, e.g. `Chess (Qiz bolalar uchun)`.
    pub label: String,
}

impl From<&Contest> for ContestInfo {
    fn from(contest: &Contest) -> Self {
        Self {
            contest_id: contest.contest_id.unwrap_or_default(),
            title: contest.title.clone(),
            contest_type: contest.contest_type.as_str().to_string(),
            contest_type_label: contest.contest_type.label().to_string(),
            date: format_contest_date(contest.held_on),
            max_score: contest.max_score.value(),
            label: contest.display_label(),
        }
    }
}

/// API request to filter contests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListContestsRequest {
    pub contest_type: Option<String>,
}

/// API response listing contests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListContestsResponse {
    pub contests: Vec<ContestInfo>,
}

// ============================================================================
// Candidates
// ============================================================================

/// API request to register a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterCandidateRequest {
    pub first_name: String,
    pub last_name: String,
    /// `male` or `female`; `male` when omitted.
    pub gender: Option<String>,
    /// The candidate's group.
    pub group_id: i64,
    /// The candidate's home village.
    pub village_id: i64,
}

/// API response for a registered candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterCandidateResponse {
    pub candidate: CandidateInfo,
    pub message: String,
}

/// API request to enroll a candidate in a contest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollCandidateRequest {
    pub candidate_id: i64,
    pub contest_id: i64,
}

/// API response for an enrollment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollCandidateResponse {
    pub candidate_id: i64,
    pub contest_id: i64,
    pub message: String,
}

/// A stored candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateInfo {
    pub candidate_id: i64,
    pub first_name: String,
    pub last_name: String,
    /// The stored code: `male` or `female`.
    pub gender: String,
    /// The operator-facing label for the gender.
    pub gender_label: String,
    pub group_id: i64,
    pub village_id: i64,
    /// The full name.
    pub label: String,
}

impl From<&Candidate> for CandidateInfo {
    fn from(candidate: &Candidate) -> Self {
        Self {
            candidate_id: candidate.candidate_id.unwrap_or_default(),
            first_name: candidate.first_name.clone(),
            last_name: candidate.last_name.clone(),
            gender: candidate.gender.as_str().to_string(),
            gender_label: candidate.gender.label().to_string(),
            group_id: candidate.group_id,
            village_id: candidate.village_id,
            label: candidate.display_label(),
        }
    }
}

/// API request to filter and search candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListCandidatesRequest {
    pub gender: Option<String>,
    pub school_id: Option<i64>,
    pub year: Option<u8>,
    /// Case-insensitive substring of the first or last name.
    pub search: Option<String>,
}

/// API response listing candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListCandidatesResponse {
    pub candidates: Vec<CandidateInfo>,
}

// ============================================================================
// Entity registry
// ============================================================================

/// API response describing how an entity type is listed and searched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescribeEntityResponse {
    pub entity: EntityKind,
    pub list_columns: Vec<String>,
    pub list_filters: Vec<String>,
    pub search_fields: Vec<String>,
}

fn owned(fields: &[&str]) -> Vec<String> {
    fields.iter().map(ToString::to_string).collect()
}

impl From<EntityKind> for DescribeEntityResponse {
    fn from(entity: EntityKind) -> Self {
        Self {
            entity,
            list_columns: owned(entity.list_columns()),
            list_filters: owned(entity.list_filters()),
            search_fields: owned(entity.search_fields()),
        }
    }
}

// ============================================================================
// Deletes
// ============================================================================

/// API response for any successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// The kind of record deleted.
    pub entity: String,
    /// The deleted record.
    pub id: i64,
    /// A success message.
    pub message: String,
}
