// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Every write goes through [`Persistence::execute`], which validates and
//! commits inside one immediate transaction. Handlers only parse requests,
//! build commands and shape responses.

use std::str::FromStr;

use school_contest::Command;
use school_contest_domain::{
    Candidate, Contest, ContestKind, ContestResult, Describable, EntityKind, Gender, Group,
    Ranking, School, Village, parse_contest_date,
};
use school_contest_persistence::{
    CandidateFilter, CommitOutcome, ContestFilter, GroupFilter, Persistence, PersistenceError,
};
use time::Date;
use tracing::{debug, info};

use crate::aggregate::AggregateKind;
use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::request_response::{
    CandidateInfo, ContestInfo, CreateContestRequest, CreateContestResponse, CreateGroupRequest,
    CreateGroupResponse, CreateSchoolRequest, CreateSchoolResponse, CreateVillageRequest,
    CreateVillageResponse, DeleteResponse, DescribeEntityResponse, EnrollCandidateRequest,
    EnrollCandidateResponse, GetAggregateResponse, GetRankingResponse, GroupInfo,
    ListCandidatesRequest, ListCandidatesResponse, ListContestsRequest, ListContestsResponse,
    ListGroupsRequest, ListGroupsResponse, ListResultsResponse, ListSchoolsResponse,
    ListVillagesResponse, RegisterCandidateRequest, RegisterCandidateResponse,
    ReviseContestRequest, ReviseContestResponse, SchoolInfo, SubmitResultRequest,
    SubmitResultResponse, UpdateResultRequest, UpdateResultResponse, VillageInfo,
};

/// Runs a command and returns the id of the written record.
fn commit(persistence: &mut Persistence, command: Command) -> Result<i64, ApiError> {
    let name: &'static str = command.name();
    let outcome: CommitOutcome = persistence
        .execute(command)
        .map_err(translate_persistence_error)?;
    outcome.record_id.ok_or_else(|| ApiError::Internal {
        message: format!("{name} committed without a record id"),
    })
}

/// Converts stored records into their response views.
fn views<'a, T, V>(records: &'a [T]) -> Vec<V>
where
    T: Describable,
    V: From<&'a T>,
{
    debug!(entity = %T::KIND, count = records.len(), "Listed records");
    records.iter().map(V::from).collect()
}

fn parse_optional<T>(value: Option<&str>) -> Result<Option<T>, ApiError>
where
    T: FromStr<Err = school_contest_domain::DomainError>,
{
    value
        .map(str::parse::<T>)
        .transpose()
        .map_err(translate_domain_error)
}

fn parse_optional_date(value: Option<&str>) -> Result<Option<Date>, ApiError> {
    value
        .map(parse_contest_date)
        .transpose()
        .map_err(translate_domain_error)
}

// ============================================================================
// Results
// ============================================================================

/// Records a candidate's score in a contest.
///
/// The eligibility, score bound and uniqueness rules are checked, in that
/// order, inside the write transaction.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown contest or candidate, or a
/// `DomainRuleViolation` naming the first rule the result breaks.
pub fn submit_result(
    persistence: &mut Persistence,
    request: SubmitResultRequest,
) -> Result<SubmitResultResponse, ApiError> {
    let result_id: i64 = commit(
        persistence,
        Command::SubmitResult {
            contest_id: request.contest_id,
            candidate_id: request.candidate_id,
            score: request.score,
        },
    )?;

    info!(
        result_id,
        contest_id = request.contest_id,
        candidate_id = request.candidate_id,
        "Result submitted"
    );

    Ok(SubmitResultResponse {
        result_id,
        contest_id: request.contest_id,
        candidate_id: request.candidate_id,
        score: request.score,
        message: format!(
            "Recorded score {} for candidate {} in contest {}",
            request.score, request.candidate_id, request.contest_id
        ),
    })
}

/// Changes the score of a stored result, re-running every result rule.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown result, or a
/// `DomainRuleViolation` if the new score is rejected.
pub fn update_result(
    persistence: &mut Persistence,
    request: UpdateResultRequest,
) -> Result<UpdateResultResponse, ApiError> {
    let result_id: i64 = commit(
        persistence,
        Command::UpdateResult {
            result_id: request.result_id,
            score: request.score,
        },
    )?;

    Ok(UpdateResultResponse {
        result_id,
        score: request.score,
        message: format!("Result {result_id} now scores {}", request.score),
    })
}

/// Lists stored results, optionally restricted to one contest.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown contest, or `Internal` if the
/// store cannot be read.
pub fn list_results(
    persistence: &mut Persistence,
    contest_id: Option<i64>,
) -> Result<ListResultsResponse, ApiError> {
    let results: Vec<ContestResult> = persistence
        .list_results(contest_id)
        .map_err(translate_persistence_error)?;
    Ok(ListResultsResponse {
        results: views(&results),
    })
}

// ============================================================================
// Aggregates
// ============================================================================

/// Computes one count over the current store state.
///
/// # Errors
///
/// Returns `ResourceNotFound` if `entity_id` does not name an entity of
/// [`AggregateKind::subject`].
pub fn get_aggregate(
    persistence: &mut Persistence,
    entity_id: i64,
    kind: AggregateKind,
) -> Result<GetAggregateResponse, ApiError> {
    let count: Result<usize, PersistenceError> = match kind {
        AggregateKind::GroupsPerSchool => persistence.count_groups_in_school(entity_id),
        AggregateKind::CandidatesPerSchool => persistence.count_candidates_in_school(entity_id),
        AggregateKind::CandidatesPerGroup => persistence.count_candidates_in_group(entity_id),
        AggregateKind::CandidatesPerVillage => persistence.count_candidates_in_village(entity_id),
        AggregateKind::CandidatesPerContest => persistence.count_candidates_in_contest(entity_id),
        AggregateKind::ResultsPerContest => persistence.count_results_in_contest(entity_id),
        AggregateKind::ContestsPerCandidate => persistence.count_contests_for_candidate(entity_id),
    };
    let count: usize = count.map_err(translate_persistence_error)?;

    debug!(%kind, entity_id, count, "Computed aggregate");

    Ok(GetAggregateResponse {
        kind,
        entity_id,
        count,
    })
}

/// Ranks a contest's results, best first.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown contest.
pub fn get_ranking(
    persistence: &mut Persistence,
    contest_id: i64,
) -> Result<GetRankingResponse, ApiError> {
    let contest: Contest = persistence
        .get_contest(contest_id)
        .map_err(translate_persistence_error)?;
    let ranking: Ranking = persistence
        .get_ranking(contest_id)
        .map_err(translate_persistence_error)?;

    Ok(GetRankingResponse {
        contest_id,
        contest_title: contest.title,
        entries: ranking.into_entries(),
    })
}

// ============================================================================
// Schools, groups, villages
// ============================================================================

/// Creates a school.
///
/// # Errors
///
/// Returns `InvalidInput` for a blank name, or a `DomainRuleViolation` if
/// the name is taken.
pub fn create_school(
    persistence: &mut Persistence,
    request: CreateSchoolRequest,
) -> Result<CreateSchoolResponse, ApiError> {
    let school_id: i64 = commit(
        persistence,
        Command::CreateSchool {
            name: request.name,
            address: request.address,
        },
    )?;
    let school: School = persistence
        .get_school(school_id)
        .map_err(translate_persistence_error)?;

    Ok(CreateSchoolResponse {
        message: format!("Created school '{}'", school.name),
        school: SchoolInfo::from(&school),
    })
}

/// Lists every school by name.
///
/// # Errors
///
/// Returns `Internal` if the store cannot be read.
pub fn list_schools(persistence: &mut Persistence) -> Result<ListSchoolsResponse, ApiError> {
    let schools: Vec<School> = persistence
        .list_schools()
        .map_err(translate_persistence_error)?;
    Ok(ListSchoolsResponse {
        schools: views(&schools),
    })
}

/// Creates a group inside a school.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown school, `InvalidInput` for a
/// bad year or letter, or a `DomainRuleViolation` if the group exists.
pub fn create_group(
    persistence: &mut Persistence,
    request: CreateGroupRequest,
) -> Result<CreateGroupResponse, ApiError> {
    let group_id: i64 = commit(
        persistence,
        Command::CreateGroup {
            school_id: request.school_id,
            year: request.year,
            letter: request.letter,
        },
    )?;
    let group: Group = persistence
        .get_group(group_id)
        .map_err(translate_persistence_error)?;

    Ok(CreateGroupResponse {
        message: format!("Created group {} in school {}", group.code(), group.school_id),
        group: GroupInfo::from(&group),
    })
}

/// Lists groups, optionally by school and year.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown school, or `Internal` if the
/// store cannot be read.
pub fn list_groups(
    persistence: &mut Persistence,
    request: ListGroupsRequest,
) -> Result<ListGroupsResponse, ApiError> {
    let filter: GroupFilter = GroupFilter {
        school_id: request.school_id,
        year: request.year,
    };
    let groups: Vec<Group> = persistence
        .list_groups(&filter)
        .map_err(translate_persistence_error)?;
    Ok(ListGroupsResponse {
        groups: views(&groups),
    })
}

/// Creates a village.
///
/// # Errors
///
/// Returns `InvalidInput` for a blank name, or a `DomainRuleViolation` if
/// the name is taken.
pub fn create_village(
    persistence: &mut Persistence,
    request: CreateVillageRequest,
) -> Result<CreateVillageResponse, ApiError> {
    let village_id: i64 = commit(persistence, Command::CreateVillage { name: request.name })?;
    let village: Village = persistence
        .get_village(village_id)
        .map_err(translate_persistence_error)?;

    Ok(CreateVillageResponse {
        message: format!("Created village '{}'", village.name),
        village: VillageInfo::from(&village),
    })
}

/// Lists every village by name.
///
/// # Errors
///
/// Returns `Internal` if the store cannot be read.
pub fn list_villages(persistence: &mut Persistence) -> Result<ListVillagesResponse, ApiError> {
    let villages: Vec<Village> = persistence
        .list_villages()
        .map_err(translate_persistence_error)?;
    Ok(ListVillagesResponse {
        villages: views(&villages),
    })
}

// ============================================================================
// Contests
// ============================================================================

/// Creates a contest.
///
/// The contest type defaults to `all` and the maximum score to 100.
///
/// # Errors
///
/// Returns `InvalidInput` for a bad title, type, date or maximum score, or
/// a `DomainRuleViolation` if the title is taken.
pub fn create_contest(
    persistence: &mut Persistence,
    request: CreateContestRequest,
) -> Result<CreateContestResponse, ApiError> {
    let contest_type: ContestKind =
        parse_optional::<ContestKind>(request.contest_type.as_deref())?.unwrap_or_default();
    let held_on: Date = parse_contest_date(&request.date).map_err(translate_domain_error)?;

    let contest_id: i64 = commit(
        persistence,
        Command::CreateContest {
            title: request.title,
            contest_type,
            held_on,
            max_score: request.max_score.unwrap_or(100),
        },
    )?;
    let contest: Contest = persistence
        .get_contest(contest_id)
        .map_err(translate_persistence_error)?;

    Ok(CreateContestResponse {
        message: format!("Created contest '{}'", contest.title),
        contest: ContestInfo::from(&contest),
    })
}

/// Changes a contest's title, type, date or maximum score.
///
/// A change of type or maximum score is refused if any stored result or
/// enrollment would stop satisfying the contest's rules.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown contest, `InvalidInput` for
/// a malformed field, or a `DomainRuleViolation` for a conflicting revision
/// or a taken title.
pub fn revise_contest(
    persistence: &mut Persistence,
    request: ReviseContestRequest,
) -> Result<ReviseContestResponse, ApiError> {
    let contest_type: Option<ContestKind> = parse_optional(request.contest_type.as_deref())?;
    let held_on: Option<Date> = parse_optional_date(request.date.as_deref())?;

    let contest_id: i64 = commit(
        persistence,
        Command::ReviseContest {
            contest_id: request.contest_id,
            title: request.title,
            contest_type,
            held_on,
            max_score: request.max_score,
        },
    )?;
    let contest: Contest = persistence
        .get_contest(contest_id)
        .map_err(translate_persistence_error)?;

    Ok(ReviseContestResponse {
        message: format!("Revised contest '{}'", contest.title),
        contest: ContestInfo::from(&contest),
    })
}

/// Lists contests, optionally of one type.
///
/// # Errors
///
/// Returns `InvalidInput` for an unknown contest type.
pub fn list_contests(
    persistence: &mut Persistence,
    request: &ListContestsRequest,
) -> Result<ListContestsResponse, ApiError> {
    let filter: ContestFilter = ContestFilter {
        contest_type: parse_optional(request.contest_type.as_deref())?,
    };
    let contests: Vec<Contest> = persistence
        .list_contests(&filter)
        .map_err(translate_persistence_error)?;
    Ok(ListContestsResponse {
        contests: views(&contests),
    })
}

// ============================================================================
// Candidates
// ============================================================================

/// Registers a candidate in a group and village.
///
/// Gender defaults to `male`.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown group or village, or
/// `InvalidInput` for a blank name or unknown gender.
pub fn register_candidate(
    persistence: &mut Persistence,
    request: RegisterCandidateRequest,
) -> Result<RegisterCandidateResponse, ApiError> {
    let gender: Gender = parse_optional::<Gender>(request.gender.as_deref())?.unwrap_or_default();

    let candidate_id: i64 = commit(
        persistence,
        Command::RegisterCandidate {
            first_name: request.first_name,
            last_name: request.last_name,
            gender,
            group_id: request.group_id,
            village_id: request.village_id,
        },
    )?;
    let candidate: Candidate = persistence
        .get_candidate(candidate_id)
        .map_err(translate_persistence_error)?;

    Ok(RegisterCandidateResponse {
        message: format!("Registered candidate {}", candidate.full_name()),
        candidate: CandidateInfo::from(&candidate),
    })
}

/// Enrolls a candidate in a contest the candidate is eligible for.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown candidate or contest, or a
/// `DomainRuleViolation` for an ineligible or repeated enrollment.
pub fn enroll_candidate(
    persistence: &mut Persistence,
    request: EnrollCandidateRequest,
) -> Result<EnrollCandidateResponse, ApiError> {
    persistence
        .execute(Command::EnrollCandidate {
            candidate_id: request.candidate_id,
            contest_id: request.contest_id,
        })
        .map_err(translate_persistence_error)?;

    Ok(EnrollCandidateResponse {
        candidate_id: request.candidate_id,
        contest_id: request.contest_id,
        message: format!(
            "Enrolled candidate {} in contest {}",
            request.candidate_id, request.contest_id
        ),
    })
}

/// Lists candidates matching the filters and name search.
///
/// # Errors
///
/// Returns `InvalidInput` for an unknown gender, or `ResourceNotFound` for
/// an unknown school.
pub fn list_candidates(
    persistence: &mut Persistence,
    request: &ListCandidatesRequest,
) -> Result<ListCandidatesResponse, ApiError> {
    let filter: CandidateFilter = CandidateFilter {
        gender: parse_optional(request.gender.as_deref())?,
        school_id: request.school_id,
        year: request.year,
        search: request.search.clone(),
    };
    let candidates: Vec<Candidate> = persistence
        .list_candidates(&filter)
        .map_err(translate_persistence_error)?;
    Ok(ListCandidatesResponse {
        candidates: views(&candidates),
    })
}

// ============================================================================
// Entity registry
// ============================================================================

/// Describes the list columns, filters and search fields of an entity type.
///
/// # Errors
///
/// Returns `InvalidInput` if `entity` names no registered entity type.
pub fn describe_entity(entity: &str) -> Result<DescribeEntityResponse, ApiError> {
    let wanted: String = entity.trim().to_lowercase();
    EntityKind::ALL
        .into_iter()
        .find(|kind| kind.as_str() == wanted)
        .map(DescribeEntityResponse::from)
        .ok_or_else(|| ApiError::InvalidInput {
            field: String::from("entity"),
            message: format!("Unknown entity type '{entity}'"),
        })
}

// ============================================================================
// Deletes
// ============================================================================

fn deleted(entity: &str, id: i64) -> DeleteResponse {
    DeleteResponse {
        entity: entity.to_string(),
        id,
        message: format!("Deleted {entity} {id}"),
    }
}

/// Deletes a school that owns no groups.
///
/// # Errors
///
/// Returns `ResourceNotFound`, or `ReferentialIntegrityViolation` while the
/// school has groups.
pub fn delete_school(
    persistence: &mut Persistence,
    school_id: i64,
) -> Result<DeleteResponse, ApiError> {
    persistence
        .delete_school(school_id)
        .map_err(translate_persistence_error)?;
    Ok(deleted("school", school_id))
}

/// Deletes a group with no candidates.
///
/// # Errors
///
/// Returns `ResourceNotFound`, or `ReferentialIntegrityViolation` while
/// candidates study in the group.
pub fn delete_group(
    persistence: &mut Persistence,
    group_id: i64,
) -> Result<DeleteResponse, ApiError> {
    persistence
        .delete_group(group_id)
        .map_err(translate_persistence_error)?;
    Ok(deleted("group", group_id))
}

/// Deletes a village no candidate comes from.
///
/// # Errors
///
/// Returns `ResourceNotFound`, or `ReferentialIntegrityViolation` while
/// candidates reference the village.
pub fn delete_village(
    persistence: &mut Persistence,
    village_id: i64,
) -> Result<DeleteResponse, ApiError> {
    persistence
        .delete_village(village_id)
        .map_err(translate_persistence_error)?;
    Ok(deleted("village", village_id))
}

/// Deletes a contest along with its results and enrollments.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown contest.
pub fn delete_contest(
    persistence: &mut Persistence,
    contest_id: i64,
) -> Result<DeleteResponse, ApiError> {
    persistence
        .delete_contest(contest_id)
        .map_err(translate_persistence_error)?;
    Ok(deleted("contest", contest_id))
}

/// Deletes a candidate along with their results and enrollments.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown candidate.
pub fn delete_candidate(
    persistence: &mut Persistence,
    candidate_id: i64,
) -> Result<DeleteResponse, ApiError> {
    persistence
        .delete_candidate(candidate_id)
        .map_err(translate_persistence_error)?;
    Ok(deleted("candidate", candidate_id))
}

/// Deletes a single result.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown result.
pub fn delete_result(
    persistence: &mut Persistence,
    result_id: i64,
) -> Result<DeleteResponse, ApiError> {
    persistence
        .delete_result(result_id)
        .map_err(translate_persistence_error)?;
    Ok(deleted("result", result_id))
}
