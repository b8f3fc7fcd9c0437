// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Candidate, Contest, ContestResult, School, Village};

/// Longest accepted school, village or candidate name.
pub const MAX_NAME_LENGTH: usize = 127;

/// Longest accepted contest title.
pub const MAX_TITLE_LENGTH: usize = 255;

fn check_text(value: &str, max_len: usize) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(String::from("must not be empty"));
    }
    let len: usize = value.chars().count();
    if len > max_len {
        return Err(format!("must be at most {max_len} characters, got {len}"));
    }
    Ok(())
}

/// Validates that a school's name is present and within length limits.
///
/// This does NOT check uniqueness (that requires the store).
///
/// # Errors
///
/// Returns `DomainError::InvalidSchoolName` if the name is empty or too long.
pub fn validate_school_fields(school: &School) -> Result<(), DomainError> {
    check_text(&school.name, MAX_NAME_LENGTH).map_err(DomainError::InvalidSchoolName)
}

/// Validates that a village's name is present and within length limits.
///
/// # Errors
///
/// Returns `DomainError::InvalidVillageName` if the name is empty or too long.
pub fn validate_village_fields(village: &Village) -> Result<(), DomainError> {
    check_text(&village.name, MAX_NAME_LENGTH).map_err(DomainError::InvalidVillageName)
}

/// Validates that a contest's title is present and within length limits.
///
/// Year, letter and maximum score are checked when their value types are
/// constructed, so only the free-text title is left here.
///
/// # Errors
///
/// Returns `DomainError::InvalidContestTitle` if the title is empty or too long.
pub fn validate_contest_fields(contest: &Contest) -> Result<(), DomainError> {
    check_text(&contest.title, MAX_TITLE_LENGTH).map_err(DomainError::InvalidContestTitle)
}

/// Validates that both of a candidate's names are present.
///
/// # Errors
///
/// Returns `DomainError::InvalidCandidateName` if either name is empty or too long.
pub fn validate_candidate_fields(candidate: &Candidate) -> Result<(), DomainError> {
    check_text(&candidate.first_name, MAX_NAME_LENGTH)
        .map_err(|e| DomainError::InvalidCandidateName(format!("first name {e}")))?;
    check_text(&candidate.last_name, MAX_NAME_LENGTH)
        .map_err(|e| DomainError::InvalidCandidateName(format!("last name {e}")))?;
    Ok(())
}

/// Checks that the contest admits the candidate's gender.
///
/// # Errors
///
/// Returns `DomainError::GenderMismatch` if the contest is restricted to the
/// other gender.
pub const fn check_eligibility(contest: &Contest, candidate: &Candidate) -> Result<(), DomainError> {
    if contest.contest_type.admits(candidate.gender) {
        Ok(())
    } else {
        Err(DomainError::GenderMismatch {
            contest_type: contest.contest_type,
            gender: candidate.gender,
        })
    }
}

/// Checks that a score lies within `0..=contest.max_score`.
///
/// Non-finite scores are always out of range.
///
/// # Errors
///
/// Returns `DomainError::ScoreOutOfRange` if the score is rejected.
pub fn check_score(contest: &Contest, score: f64) -> Result<(), DomainError> {
    let max_score: u16 = contest.max_score.value();
    if score.is_finite() && (0.0..=f64::from(max_score)).contains(&score) {
        Ok(())
    } else {
        Err(DomainError::ScoreOutOfRange { score, max_score })
    }
}

/// Checks that no other result occupies the `(contest, candidate)` pair.
///
/// # Arguments
///
/// * `existing` - The result already stored for the pair, if any
/// * `updating` - The id of the result being updated, `None` for a new result
///
/// # Errors
///
/// Returns `DomainError::DuplicateResult` if `existing` is a different result.
pub fn check_result_unique(
    existing: Option<&ContestResult>,
    updating: Option<i64>,
) -> Result<(), DomainError> {
    match existing {
        None => Ok(()),
        Some(result) if updating.is_some() && result.result_id == updating => Ok(()),
        Some(result) => Err(DomainError::DuplicateResult {
            contest_id: result.contest_id,
            candidate_id: result.candidate_id,
        }),
    }
}

/// Decides whether a result may be committed.
///
/// Rules are checked in order (eligibility, score bound, uniqueness) and
/// the first violation is returned. This function is pure.
///
/// # Arguments
///
/// * `contest` - The contest the result belongs to
/// * `candidate` - The scored candidate
/// * `score` - The proposed score
/// * `existing` - The result already stored for this pair, if any
/// * `updating` - The id of the result being updated, `None` when creating
///
/// # Errors
///
/// Returns `GenderMismatch`, `ScoreOutOfRange` or `DuplicateResult`.
pub fn validate_result(
    contest: &Contest,
    candidate: &Candidate,
    score: f64,
    existing: Option<&ContestResult>,
    updating: Option<i64>,
) -> Result<(), DomainError> {
    check_eligibility(contest, candidate)?;
    check_score(contest, score)?;
    check_result_unique(existing, updating)?;
    Ok(())
}

/// Checks that a revised contest keeps every existing record valid.
///
/// Each stored result is re-checked for eligibility and score bound, and
/// each enrolled candidate for eligibility, against the revised contest.
///
/// # Arguments
///
/// * `revised` - The contest with its proposed new values
/// * `results` - Stored results of the contest, paired with their candidates
/// * `enrolled` - Candidates enrolled in the contest
///
/// # Errors
///
/// Returns `DomainError::ContestRevisionConflict` naming the first record
/// that would become invalid.
pub fn validate_contest_revision(
    revised: &Contest,
    results: &[(ContestResult, Candidate)],
    enrolled: &[Candidate],
) -> Result<(), DomainError> {
    validate_contest_fields(revised)?;

    let contest_id: i64 = revised.contest_id.unwrap_or_default();
    let conflict = |candidate_id: Option<i64>, reason: DomainError| {
        DomainError::ContestRevisionConflict {
            contest_id,
            candidate_id: candidate_id.unwrap_or_default(),
            reason: Box::new(reason),
        }
    };

    for (result, candidate) in results {
        check_eligibility(revised, candidate)
            .and_then(|()| check_score(revised, result.score))
            .map_err(|e| conflict(Some(result.candidate_id), e))?;
    }

    for candidate in enrolled {
        check_eligibility(revised, candidate).map_err(|e| conflict(candidate.candidate_id, e))?;
    }

    Ok(())
}
