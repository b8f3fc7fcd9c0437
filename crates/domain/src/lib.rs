// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod describe;
mod error;
mod ranking;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use describe::{Describable, EntityKind};
pub use error::DomainError;
pub use ranking::{Ranking, RankingEntry, ScoredCandidate};
pub use types::{
    Candidate, Contest, ContestKind, ContestResult, Gender, Group, GroupLetter, GroupYear,
    MaxScore, School, Village, format_contest_date, parse_contest_date,
};
pub use validation::{
    MAX_NAME_LENGTH, MAX_TITLE_LENGTH, check_eligibility, check_result_unique, check_score,
    validate_candidate_fields, validate_contest_fields, validate_contest_revision,
    validate_result, validate_school_fields, validate_village_fields,
};
