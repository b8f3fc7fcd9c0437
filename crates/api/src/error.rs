// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use school_contest::CoreError;
use school_contest_domain::{DomainError, EntityKind};
use school_contest_persistence::PersistenceError;

/// The rule names carried by [`ApiError::DomainRuleViolation`].
pub mod rules {
    /// The contest is restricted to the other gender.
    pub const GENDER_ELIGIBILITY: &str = "gender_eligibility";
    /// The score is outside the contest's range.
    pub const SCORE_RANGE: &str = "score_range";
    /// A result already exists for the contest and candidate.
    pub const UNIQUE_RESULT: &str = "unique_result";
    /// A contest edit would invalidate stored records.
    pub const CONTEST_REVISION: &str = "contest_revision";
    /// A school with the same name exists.
    pub const UNIQUE_SCHOOL: &str = "unique_school";
    /// A group with the same year and letter exists in the school.
    pub const UNIQUE_GROUP: &str = "unique_group";
    /// A village with the same name exists.
    pub const UNIQUE_VILLAGE: &str = "unique_village";
    /// A contest with the same title exists.
    pub const UNIQUE_CONTEST: &str = "unique_contest";
    /// The candidate is already enrolled.
    pub const UNIQUE_ENROLLMENT: &str = "unique_enrollment";
}

/// The category of an API error, independent of its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The contest does not admit the candidate's gender.
    GenderMismatch,
    /// The score is out of range.
    ScoreOutOfRange,
    /// A result already exists for the pair.
    DuplicateResult,
    /// A contest revision would invalidate stored records.
    ContestRevisionConflict,
    /// Another uniqueness rule was violated.
    Duplicate,
    /// A request field failed validation.
    InvalidInput,
    /// The referenced record does not exist.
    NotFound,
    /// The record is still referenced and cannot be deleted.
    ReferentialIntegrityViolation,
    /// The store failed.
    Internal,
}

impl ErrorKind {
    /// Returns the name of this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GenderMismatch => "GenderMismatch",
            Self::ScoreOutOfRange => "ScoreOutOfRange",
            Self::DuplicateResult => "DuplicateResult",
            Self::ContestRevisionConflict => "ContestRevisionConflict",
            Self::Duplicate => "Duplicate",
            Self::InvalidInput => "InvalidInput",
            Self::NotFound => "NotFound",
            Self::ReferentialIntegrityViolation => "ReferentialIntegrityViolation",
            Self::Internal => "Internal",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated, one of [`rules`].
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The resource is still referenced by other records.
    ReferentialIntegrityViolation {
        /// The type of resource that could not be deleted.
        resource_type: String,
        /// A human-readable description of the references.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl ApiError {
    /// Classifies this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DomainRuleViolation { rule, .. } => match rule.as_str() {
                rules::GENDER_ELIGIBILITY => ErrorKind::GenderMismatch,
                rules::SCORE_RANGE => ErrorKind::ScoreOutOfRange,
                rules::UNIQUE_RESULT => ErrorKind::DuplicateResult,
                rules::CONTEST_REVISION => ErrorKind::ContestRevisionConflict,
                _ => ErrorKind::Duplicate,
            },
            Self::InvalidInput { .. } => ErrorKind::InvalidInput,
            Self::ResourceNotFound { .. } => ErrorKind::NotFound,
            Self::ReferentialIntegrityViolation { .. } => ErrorKind::ReferentialIntegrityViolation,
            Self::Internal { .. } => ErrorKind::Internal,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::ReferentialIntegrityViolation {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} is still referenced: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

const fn resource_type(entity: EntityKind) -> &'static str {
    match entity {
        EntityKind::School => "School",
        EntityKind::Group => "Group",
        EntityKind::Village => "Village",
        EntityKind::Contest => "Contest",
        EntityKind::Candidate => "Candidate",
        EntityKind::Result => "Result",
    }
}

fn violation(rule: &str, message: String) -> ApiError {
    ApiError::DomainRuleViolation {
        rule: String::from(rule),
        message,
    }
}

fn invalid(field: &str, message: String) -> ApiError {
    ApiError::InvalidInput {
        field: String::from(field),
        message,
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidSchoolName(msg) => invalid("name", format!("School name {msg}")),
        DomainError::InvalidVillageName(msg) => invalid("name", format!("Village name {msg}")),
        DomainError::InvalidContestTitle(msg) => invalid("title", format!("Contest title {msg}")),
        DomainError::InvalidCandidateName(msg) => invalid("name", format!("Candidate {msg}")),
        DomainError::InvalidGroupYear { year } => invalid(
            "year",
            format!("Invalid group year: {year}. Must be between 1 and 11"),
        ),
        DomainError::InvalidGroupLetter(msg) => invalid("letter", msg),
        DomainError::InvalidMaxScore { max_score } => invalid(
            "max_score",
            format!("Invalid maximum score: {max_score}. Must be between 1 and 100"),
        ),
        DomainError::InvalidGender(msg) => invalid("gender", msg),
        DomainError::InvalidContestKind(msg) => invalid("contest_type", msg),
        DomainError::DateParseError { date_string, error } => invalid(
            "date",
            format!("Failed to parse date '{date_string}': {error}"),
        ),
        DomainError::GenderMismatch {
            contest_type,
            gender,
        } => violation(
            rules::GENDER_ELIGIBILITY,
            format!("A {gender} candidate cannot take part in a {contest_type} contest"),
        ),
        DomainError::ScoreOutOfRange { score, max_score } => violation(
            rules::SCORE_RANGE,
            format!("Score {score} is outside the range 0 to {max_score}"),
        ),
        DomainError::DuplicateResult {
            contest_id,
            candidate_id,
        } => violation(
            rules::UNIQUE_RESULT,
            format!("Candidate {candidate_id} already has a result in contest {contest_id}"),
        ),
        DomainError::DuplicateSchool(name) => violation(
            rules::UNIQUE_SCHOOL,
            format!("School '{name}' already exists"),
        ),
        DomainError::DuplicateGroup {
            school_id,
            year,
            letter,
        } => violation(
            rules::UNIQUE_GROUP,
            format!("Group {year}-{letter} already exists in school {school_id}"),
        ),
        DomainError::DuplicateVillage(name) => violation(
            rules::UNIQUE_VILLAGE,
            format!("Village '{name}' already exists"),
        ),
        DomainError::DuplicateContest(title) => violation(
            rules::UNIQUE_CONTEST,
            format!("Contest '{title}' already exists"),
        ),
        DomainError::DuplicateEnrollment {
            candidate_id,
            contest_id,
        } => violation(
            rules::UNIQUE_ENROLLMENT,
            format!("Candidate {candidate_id} is already enrolled in contest {contest_id}"),
        ),
        DomainError::ContestRevisionConflict {
            contest_id,
            candidate_id,
            reason,
        } => violation(
            rules::CONTEST_REVISION,
            format!(
                "Revising contest {contest_id} would invalidate the record of candidate {candidate_id}: {reason}"
            ),
        ),
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        err @ CoreError::CommandMismatch { .. } => ApiError::Internal {
            message: err.to_string(),
        },
    }
}

/// Translates a persistence error into an API error.
///
/// Rejections carry the domain rule that failed; store failures become
/// `Internal`.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::Rejected(core_err) => translate_core_error(core_err),
        PersistenceError::NotFound { entity, id } => ApiError::ResourceNotFound {
            resource_type: String::from(resource_type(entity)),
            message: format!("{} {id} does not exist", resource_type(entity)),
        },
        PersistenceError::ReferentialIntegrityViolation {
            entity,
            id,
            dependent,
            dependents,
        } => ApiError::ReferentialIntegrityViolation {
            resource_type: String::from(resource_type(entity)),
            message: format!(
                "{} {id} is referenced by {dependents} {dependent} record(s)",
                resource_type(entity)
            ),
        },
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}
