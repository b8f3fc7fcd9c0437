// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;
use time::macros::format_description;

/// A candidate's gender.
///
/// Stored as the lowercase codes `male` and `female`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    /// Returns the stored code for this gender.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    /// Returns the display label shown to operators.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Male => "O'g'il bola",
            Self::Female => "Qiz bola",
        }
    }
}

impl FromStr for Gender {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            _ => Err(DomainError::InvalidGender(s.to_string())),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The audience a contest is open to.
///
/// Stored as the lowercase codes `male`, `female` and `all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContestKind {
    Male,
    Female,
    #[default]
    All,
}

impl ContestKind {
    /// Returns the stored code for this contest type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::All => "all",
        }
    }

    /// Returns the display label shown to operators.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Male => "O'g'il bolalar uchun",
            Self::Female => "Qiz bolalar uchun",
            Self::All => "Hamma uchun",
        }
    }

    /// Returns whether a candidate of the given gender may take part.
    #[must_use]
    pub const fn admits(&self, gender: Gender) -> bool {
        match (self, gender) {
            (Self::All, _) | (Self::Male, Gender::Male) | (Self::Female, Gender::Female) => true,
            (Self::Male, Gender::Female) | (Self::Female, Gender::Male) => false,
        }
    }
}

impl FromStr for ContestKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "all" => Ok(Self::All),
            _ => Err(DomainError::InvalidContestKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for ContestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A school year, 1 through 11.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupYear {
    year: u8,
}

impl GroupYear {
    /// The first school year.
    pub const MIN: u8 = 1;
    /// The last school year.
    pub const MAX: u8 = 11;

    /// Creates a new `GroupYear`.
    ///
    /// # Errors
    ///
    /// Returns an error if the year is not in the range 1-11.
    pub const fn new(year: u8) -> Result<Self, DomainError> {
        if year >= Self::MIN && year <= Self::MAX {
            Ok(Self { year })
        } else {
            Err(DomainError::InvalidGroupYear { year })
        }
    }

    /// Returns the year value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.year
    }
}

/// The letter that distinguishes parallel groups of the same year.
///
/// Letters are normalized to uppercase so "a" and "A" name the same group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupLetter {
    letter: char,
}

impl GroupLetter {
    /// Creates a new `GroupLetter`.
    ///
    /// # Errors
    ///
    /// Returns an error if the character is not alphabetic, or if its
    /// uppercase form is not a single character (e.g. 'ß').
    pub fn new(letter: char) -> Result<Self, DomainError> {
        if !letter.is_alphabetic() {
            return Err(DomainError::InvalidGroupLetter(format!(
                "'{letter}' is not a letter"
            )));
        }
        let mut upper = letter.to_uppercase();
        match (upper.next(), upper.next()) {
            (Some(single), None) => Ok(Self { letter: single }),
            _ => Err(DomainError::InvalidGroupLetter(format!(
                "'{letter}' has no single-letter uppercase form"
            ))),
        }
    }

    /// Parses a group letter from a string holding exactly one character.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is empty, longer than one character,
    /// or not alphabetic.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Self::new(letter),
            _ => Err(DomainError::InvalidGroupLetter(format!(
                "'{s}' must be exactly one character"
            ))),
        }
    }

    /// Returns the letter value.
    #[must_use]
    pub const fn value(&self) -> char {
        self.letter
    }
}

/// The highest score a contest awards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaxScore {
    value: u16,
}

impl MaxScore {
    /// The default maximum score for a new contest.
    pub const DEFAULT: u16 = 100;
    /// Upper bound shared with the result score range.
    pub const CEILING: u16 = 100;

    /// Creates a new `MaxScore`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero or above 100.
    pub const fn new(value: u16) -> Result<Self, DomainError> {
        if value >= 1 && value <= Self::CEILING {
            Ok(Self { value })
        } else {
            Err(DomainError::InvalidMaxScore { max_score: value })
        }
    }

    /// Returns the maximum score value.
    #[must_use]
    pub const fn value(&self) -> u16 {
        self.value
    }
}

impl Default for MaxScore {
    fn default() -> Self {
        Self {
            value: Self::DEFAULT,
        }
    }
}

/// Parses a contest date in `YYYY-MM-DD` form.
///
/// # Errors
///
/// Returns an error if the string is not a valid calendar date.
pub fn parse_contest_date(s: &str) -> Result<Date, DomainError> {
    Date::parse(s.trim(), format_description!("[year]-[month]-[day]")).map_err(|e| {
        DomainError::DateParseError {
            date_string: s.to_string(),
            error: e.to_string(),
        }
    })
}

/// Formats a contest date in `YYYY-MM-DD` form.
#[must_use]
pub fn format_contest_date(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| date.to_string())
}

/// A school that owns groups of candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct School {
    /// The canonical identifier, `None` until persisted.
    pub school_id: Option<i64>,
    /// The unique school name.
    pub name: String,
    /// The postal address, if known.
    pub address: Option<String>,
}

impl School {
    /// Creates a new `School` without a persisted ID.
    ///
    /// The name and address are trimmed; a blank address is treated as absent.
    #[must_use]
    pub fn new(name: &str, address: Option<&str>) -> Self {
        Self {
            school_id: None,
            name: name.trim().to_string(),
            address: address
                .map(str::trim)
                .filter(|a| !a.is_empty())
                .map(str::to_string),
        }
    }

    /// Creates a `School` with an existing persisted ID.
    #[must_use]
    pub const fn with_id(school_id: i64, name: String, address: Option<String>) -> Self {
        Self {
            school_id: Some(school_id),
            name,
            address,
        }
    }
}

/// A class group, such as "7-B", within one school.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// The canonical identifier, `None` until persisted.
    pub group_id: Option<i64>,
    /// The owning school.
    pub school_id: i64,
    /// The school year.
    pub year: GroupYear,
    /// The parallel-group letter.
    pub letter: GroupLetter,
}

impl Group {
    /// Creates a new `Group` without a persisted ID.
    #[must_use]
    pub const fn new(school_id: i64, year: GroupYear, letter: GroupLetter) -> Self {
        Self {
            group_id: None,
            school_id,
            year,
            letter,
        }
    }

    /// Creates a `Group` with an existing persisted ID.
    #[must_use]
    pub const fn with_id(
        group_id: i64,
        school_id: i64,
        year: GroupYear,
        letter: GroupLetter,
    ) -> Self {
        Self {
            group_id: Some(group_id),
            school_id,
            year,
            letter,
        }
    }

    /// Returns the conventional short name, e.g. `"7-B"`.
    #[must_use]
    pub fn code(&self) -> String {
        format!("{}-{}", self.year.value(), self.letter.value())
    }
}

/// A village candidates come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Village {
    /// The canonical identifier, `None` until persisted.
    pub village_id: Option<i64>,
    /// The unique village name.
    pub name: String,
}

impl Village {
    /// Creates a new `Village` without a persisted ID.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            village_id: None,
            name: name.trim().to_string(),
        }
    }

    /// Creates a `Village` with an existing persisted ID.
    #[must_use]
    pub const fn with_id(village_id: i64, name: String) -> Self {
        Self {
            village_id: Some(village_id),
            name,
        }
    }
}

/// A contest candidates are scored in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contest {
    /// The canonical identifier, `None` until persisted.
    pub contest_id: Option<i64>,
    /// The unique contest title.
    pub title: String,
    /// The audience the contest admits.
    pub contest_type: ContestKind,
    /// The day the contest is held.
    pub held_on: Date,
    /// The highest score the contest awards.
    pub max_score: MaxScore,
}

impl Contest {
    /// Creates a new `Contest` without a persisted ID.
    #[must_use]
    pub fn new(title: &str, contest_type: ContestKind, held_on: Date, max_score: MaxScore) -> Self {
        Self {
            contest_id: None,
            title: title.trim().to_string(),
            contest_type,
            held_on,
            max_score,
        }
    }

    /// Creates a `Contest` with an existing persisted ID.
    #[must_use]
    pub const fn with_id(
        contest_id: i64,
        title: String,
        contest_type: ContestKind,
        held_on: Date,
        max_score: MaxScore,
    ) -> Self {
        Self {
            contest_id: Some(contest_id),
            title,
            contest_type,
            held_on,
            max_score,
        }
    }
}

/// A pupil who takes part in contests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// The canonical identifier, `None` until persisted.
    pub candidate_id: Option<i64>,
    /// The candidate's first name.
    pub first_name: String,
    /// The candidate's last name.
    pub last_name: String,
    /// The candidate's gender.
    pub gender: Gender,
    /// The group the candidate studies in.
    pub group_id: i64,
    /// The village the candidate comes from.
    pub village_id: i64,
}

impl Candidate {
    /// Creates a new `Candidate` without a persisted ID.
    #[must_use]
    pub fn new(
        first_name: &str,
        last_name: &str,
        gender: Gender,
        group_id: i64,
        village_id: i64,
    ) -> Self {
        Self {
            candidate_id: None,
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            gender,
            group_id,
            village_id,
        }
    }

    /// Creates a `Candidate` with an existing persisted ID.
    #[must_use]
    pub const fn with_id(
        candidate_id: i64,
        first_name: String,
        last_name: String,
        gender: Gender,
        group_id: i64,
        village_id: i64,
    ) -> Self {
        Self {
            candidate_id: Some(candidate_id),
            first_name,
            last_name,
            gender,
            group_id,
            village_id,
        }
    }

    /// Returns `"First Last"`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A candidate's recorded score in one contest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContestResult {
    /// The canonical identifier, `None` until persisted.
    pub result_id: Option<i64>,
    /// The contest the score belongs to.
    pub contest_id: i64,
    /// The scored candidate.
    pub candidate_id: i64,
    /// The score awarded.
    pub score: f64,
}

impl ContestResult {
    /// Creates a new `ContestResult` without a persisted ID.
    #[must_use]
    pub const fn new(contest_id: i64, candidate_id: i64, score: f64) -> Self {
        Self {
            result_id: None,
            contest_id,
            candidate_id,
            score,
        }
    }

    /// Creates a `ContestResult` with an existing persisted ID.
    #[must_use]
    pub const fn with_id(result_id: i64, contest_id: i64, candidate_id: i64, score: f64) -> Self {
        Self {
            result_id: Some(result_id),
            contest_id,
            candidate_id,
            score,
        }
    }
}
