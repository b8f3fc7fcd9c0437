// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{ContestKind, Gender};

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// School name is empty or too long.
    InvalidSchoolName(String),
    /// Village name is empty or too long.
    InvalidVillageName(String),
    /// Contest title is empty or too long.
    InvalidContestTitle(String),
    /// Candidate first or last name is empty or too long.
    InvalidCandidateName(String),
    /// Group year is outside the school years.
    InvalidGroupYear {
        /// The rejected year.
        year: u8,
    },
    /// Group letter is not a single alphabetic character.
    InvalidGroupLetter(String),
    /// Contest maximum score is outside the allowed range.
    InvalidMaxScore {
        /// The rejected maximum score.
        max_score: u16,
    },
    /// Gender code is not recognized.
    InvalidGender(String),
    /// Contest type code is not recognized.
    InvalidContestKind(String),
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// The candidate's gender is not admitted by the contest type.
    GenderMismatch {
        /// The contest's restricted type.
        contest_type: ContestKind,
        /// The candidate's gender.
        gender: Gender,
    },
    /// The score lies outside `0..=max_score` or is not a finite number.
    ScoreOutOfRange {
        /// The rejected score.
        score: f64,
        /// The contest's maximum score.
        max_score: u16,
    },
    /// A result already exists for this contest and candidate.
    DuplicateResult {
        /// The contest.
        contest_id: i64,
        /// The candidate.
        candidate_id: i64,
    },
    /// A school with this name already exists.
    DuplicateSchool(String),
    /// A group with this year and letter already exists in the school.
    DuplicateGroup {
        /// The owning school.
        school_id: i64,
        /// The group year.
        year: u8,
        /// The group letter.
        letter: char,
    },
    /// A village with this name already exists.
    DuplicateVillage(String),
    /// A contest with this title already exists.
    DuplicateContest(String),
    /// The candidate is already enrolled in the contest.
    DuplicateEnrollment {
        /// The candidate.
        candidate_id: i64,
        /// The contest.
        contest_id: i64,
    },
    /// A contest edit would invalidate an existing result or enrollment.
    ContestRevisionConflict {
        /// The contest being revised.
        contest_id: i64,
        /// The first candidate whose record would become invalid.
        candidate_id: i64,
        /// The rule the record would violate.
        reason: Box<Self>,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSchoolName(msg) => write!(f, "Invalid school name: {msg}"),
            Self::InvalidVillageName(msg) => write!(f, "Invalid village name: {msg}"),
            Self::InvalidContestTitle(msg) => write!(f, "Invalid contest title: {msg}"),
            Self::InvalidCandidateName(msg) => write!(f, "Invalid candidate name: {msg}"),
            Self::InvalidGroupYear { year } => {
                write!(f, "Invalid group year: {year}. Must be between 1 and 11")
            }
            Self::InvalidGroupLetter(msg) => write!(f, "Invalid group letter: {msg}"),
            Self::InvalidMaxScore { max_score } => {
                write!(
                    f,
                    "Invalid maximum score: {max_score}. Must be between 1 and 100"
                )
            }
            Self::InvalidGender(msg) => write!(f, "Invalid gender: {msg}"),
            Self::InvalidContestKind(msg) => write!(f, "Invalid contest type: {msg}"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::GenderMismatch {
                contest_type,
                gender,
            } => {
                write!(
                    f,
                    "Contest of type '{contest_type}' does not admit a candidate of gender '{gender}'"
                )
            }
            Self::ScoreOutOfRange { score, max_score } => {
                write!(
                    f,
                    "Score {score} is out of range. Must be between 0 and {max_score}"
                )
            }
            Self::DuplicateResult {
                contest_id,
                candidate_id,
            } => {
                write!(
                    f,
                    "Candidate {candidate_id} already has a result in contest {contest_id}"
                )
            }
            Self::DuplicateSchool(name) => write!(f, "School '{name}' already exists"),
            Self::DuplicateGroup {
                school_id,
                year,
                letter,
            } => {
                write!(
                    f,
                    "Group {year}-{letter} already exists in school {school_id}"
                )
            }
            Self::DuplicateVillage(name) => write!(f, "Village '{name}' already exists"),
            Self::DuplicateContest(title) => write!(f, "Contest '{title}' already exists"),
            Self::DuplicateEnrollment {
                candidate_id,
                contest_id,
            } => {
                write!(
                    f,
                    "Candidate {candidate_id} is already enrolled in contest {contest_id}"
                )
            }
            Self::ContestRevisionConflict {
                contest_id,
                candidate_id,
                reason,
            } => {
                write!(
                    f,
                    "Revision of contest {contest_id} would invalidate the record of candidate {candidate_id}: {reason}"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
