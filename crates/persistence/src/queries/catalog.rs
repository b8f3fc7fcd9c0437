// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Single-record lookups and natural-key existence checks.

use diesel::SqliteConnection;
use diesel::prelude::*;
use school_contest_domain::{Candidate, Contest, ContestResult, EntityKind, Group, School, Village};
use tracing::debug;

use crate::data_models::{CandidateRow, ContestRow, GroupRow, ResultRow, SchoolRow, VillageRow};
use crate::diesel_schema::{
    candidates, class_groups, contests, enrollments, results, schools, villages,
};
use crate::error::PersistenceError;

fn not_found(entity: EntityKind, id: i64) -> impl FnOnce() -> PersistenceError {
    move || PersistenceError::NotFound { entity, id }
}

/// Retrieves a school by ID.
///
/// # Errors
///
/// Returns `NotFound` if no school has this ID, or an error if the query fails.
pub fn get_school(conn: &mut SqliteConnection, school_id: i64) -> Result<School, PersistenceError> {
    debug!(school_id, "Looking up school");
    schools::table
        .find(school_id)
        .select(SchoolRow::as_select())
        .first::<SchoolRow>(conn)
        .optional()?
        .map(School::from)
        .ok_or_else(not_found(EntityKind::School, school_id))
}

/// Retrieves a class group by ID.
///
/// # Errors
///
/// Returns `NotFound` if no group has this ID, or an error if the query fails.
pub fn get_group(conn: &mut SqliteConnection, group_id: i64) -> Result<Group, PersistenceError> {
    debug!(group_id, "Looking up group");
    let row: GroupRow = class_groups::table
        .find(group_id)
        .select(GroupRow::as_select())
        .first::<GroupRow>(conn)
        .optional()?
        .ok_or_else(not_found(EntityKind::Group, group_id))?;
    Group::try_from(row)
}

/// Retrieves a village by ID.
///
/// # Errors
///
/// Returns `NotFound` if no village has this ID, or an error if the query fails.
pub fn get_village(
    conn: &mut SqliteConnection,
    village_id: i64,
) -> Result<Village, PersistenceError> {
    debug!(village_id, "Looking up village");
    villages::table
        .find(village_id)
        .select(VillageRow::as_select())
        .first::<VillageRow>(conn)
        .optional()?
        .map(Village::from)
        .ok_or_else(not_found(EntityKind::Village, village_id))
}

/// Retrieves a contest by ID.
///
/// # Errors
///
/// Returns `NotFound` if no contest has this ID, or an error if the query fails.
pub fn get_contest(
    conn: &mut SqliteConnection,
    contest_id: i64,
) -> Result<Contest, PersistenceError> {
    debug!(contest_id, "Looking up contest");
    let row: ContestRow = contests::table
        .find(contest_id)
        .select(ContestRow::as_select())
        .first::<ContestRow>(conn)
        .optional()?
        .ok_or_else(not_found(EntityKind::Contest, contest_id))?;
    Contest::try_from(row)
}

/// Retrieves a candidate by ID.
///
/// # Errors
///
/// Returns `NotFound` if no candidate has this ID, or an error if the query fails.
pub fn get_candidate(
    conn: &mut SqliteConnection,
    candidate_id: i64,
) -> Result<Candidate, PersistenceError> {
    debug!(candidate_id, "Looking up candidate");
    let row: CandidateRow = candidates::table
        .find(candidate_id)
        .select(CandidateRow::as_select())
        .first::<CandidateRow>(conn)
        .optional()?
        .ok_or_else(not_found(EntityKind::Candidate, candidate_id))?;
    Candidate::try_from(row)
}

/// Retrieves a result by ID.
///
/// # Errors
///
/// Returns `NotFound` if no result has this ID, or an error if the query fails.
pub fn get_result(
    conn: &mut SqliteConnection,
    result_id: i64,
) -> Result<ContestResult, PersistenceError> {
    debug!(result_id, "Looking up result");
    results::table
        .find(result_id)
        .select(ResultRow::as_select())
        .first::<ResultRow>(conn)
        .optional()?
        .map(ContestResult::from)
        .ok_or_else(not_found(EntityKind::Result, result_id))
}

/// Retrieves the result stored for a `(contest, candidate)` pair, if any.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn find_result(
    conn: &mut SqliteConnection,
    contest_id: i64,
    candidate_id: i64,
) -> Result<Option<ContestResult>, PersistenceError> {
    Ok(results::table
        .filter(results::contest_id.eq(contest_id))
        .filter(results::candidate_id.eq(candidate_id))
        .select(ResultRow::as_select())
        .first::<ResultRow>(conn)
        .optional()?
        .map(ContestResult::from))
}

/// Loads a contest's results, each paired with its candidate.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is invalid.
pub fn results_with_candidates(
    conn: &mut SqliteConnection,
    contest_id: i64,
) -> Result<Vec<(ContestResult, Candidate)>, PersistenceError> {
    let rows: Vec<(ResultRow, CandidateRow)> = results::table
        .inner_join(candidates::table)
        .filter(results::contest_id.eq(contest_id))
        .order(results::result_id.asc())
        .select((ResultRow::as_select(), CandidateRow::as_select()))
        .load(conn)?;

    rows.into_iter()
        .map(|(result, candidate)| {
            Ok((ContestResult::from(result), Candidate::try_from(candidate)?))
        })
        .collect()
}

/// Loads the candidates enrolled in a contest.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is invalid.
pub fn enrolled_candidates(
    conn: &mut SqliteConnection,
    contest_id: i64,
) -> Result<Vec<Candidate>, PersistenceError> {
    let rows: Vec<CandidateRow> = enrollments::table
        .inner_join(candidates::table)
        .filter(enrollments::contest_id.eq(contest_id))
        .order(candidates::candidate_id.asc())
        .select(CandidateRow::as_select())
        .load(conn)?;

    rows.into_iter().map(Candidate::try_from).collect()
}

/// Returns whether a candidate is enrolled in a contest.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn is_enrolled(
    conn: &mut SqliteConnection,
    candidate_id: i64,
    contest_id: i64,
) -> Result<bool, PersistenceError> {
    Ok(diesel::select(diesel::dsl::exists(
        enrollments::table.find((candidate_id, contest_id)),
    ))
    .get_result(conn)?)
}

/// Returns whether a school with this name exists.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn school_name_exists(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<bool, PersistenceError> {
    Ok(diesel::select(diesel::dsl::exists(
        schools::table.filter(schools::name.eq(name)),
    ))
    .get_result(conn)?)
}

/// Returns whether the school already has a group with this year and letter.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn group_exists(
    conn: &mut SqliteConnection,
    school_id: i64,
    year: u8,
    letter: char,
) -> Result<bool, PersistenceError> {
    Ok(diesel::select(diesel::dsl::exists(
        class_groups::table
            .filter(class_groups::school_id.eq(school_id))
            .filter(class_groups::year.eq(i32::from(year)))
            .filter(class_groups::letter.eq(letter.to_string())),
    ))
    .get_result(conn)?)
}

/// Returns whether a village with this name exists.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn village_name_exists(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<bool, PersistenceError> {
    Ok(diesel::select(diesel::dsl::exists(
        villages::table.filter(villages::name.eq(name)),
    ))
    .get_result(conn)?)
}

/// Returns whether a contest other than `excluding` uses this title.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn contest_title_exists(
    conn: &mut SqliteConnection,
    title: &str,
    excluding: Option<i64>,
) -> Result<bool, PersistenceError> {
    let taken: bool = diesel::select(diesel::dsl::exists(
        contests::table
            .filter(contests::title.eq(title))
            .filter(contests::contest_id.ne(excluding.unwrap_or(0))),
    ))
    .get_result(conn)?;
    Ok(taken)
}
