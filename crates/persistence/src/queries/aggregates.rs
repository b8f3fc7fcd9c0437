// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Distinct counts over the entity relationships.
//!
//! Every count is computed from the current rows and checks that the
//! subject record exists first, so an unknown ID is `NotFound` rather
//! than zero.

use diesel::SqliteConnection;
use diesel::dsl::count;
use diesel::prelude::*;
use num_traits::ToPrimitive;

use crate::diesel_schema::{candidates, class_groups, enrollments, results};
use crate::error::PersistenceError;
use crate::queries::catalog::{get_candidate, get_contest, get_group, get_school, get_village};

fn to_count(value: i64) -> Result<usize, PersistenceError> {
    value
        .to_usize()
        .ok_or_else(|| PersistenceError::DatabaseError("Count conversion failed".to_string()))
}

/// Counts the class groups of a school.
///
/// # Errors
///
/// Returns `NotFound` for an unknown school, or an error if the query fails.
pub fn count_groups_in_school(
    conn: &mut SqliteConnection,
    school_id: i64,
) -> Result<usize, PersistenceError> {
    get_school(conn, school_id)?;
    let total: i64 = class_groups::table
        .filter(class_groups::school_id.eq(school_id))
        .select(count(class_groups::group_id))
        .first(conn)?;
    to_count(total)
}

/// Counts the distinct candidates across all groups of a school.
///
/// # Errors
///
/// Returns `NotFound` for an unknown school, or an error if the query fails.
pub fn count_candidates_in_school(
    conn: &mut SqliteConnection,
    school_id: i64,
) -> Result<usize, PersistenceError> {
    get_school(conn, school_id)?;
    let total: i64 = candidates::table
        .inner_join(class_groups::table)
        .filter(class_groups::school_id.eq(school_id))
        .select(count(candidates::candidate_id).aggregate_distinct())
        .first(conn)?;
    to_count(total)
}

/// Counts the candidates studying in a group.
///
/// # Errors
///
/// Returns `NotFound` for an unknown group, or an error if the query fails.
pub fn count_candidates_in_group(
    conn: &mut SqliteConnection,
    group_id: i64,
) -> Result<usize, PersistenceError> {
    get_group(conn, group_id)?;
    let total: i64 = candidates::table
        .filter(candidates::group_id.eq(group_id))
        .select(count(candidates::candidate_id).aggregate_distinct())
        .first(conn)?;
    to_count(total)
}

/// Counts the candidates from a village.
///
/// # Errors
///
/// Returns `NotFound` for an unknown village, or an error if the query fails.
pub fn count_candidates_in_village(
    conn: &mut SqliteConnection,
    village_id: i64,
) -> Result<usize, PersistenceError> {
    get_village(conn, village_id)?;
    let total: i64 = candidates::table
        .filter(candidates::village_id.eq(village_id))
        .select(count(candidates::candidate_id).aggregate_distinct())
        .first(conn)?;
    to_count(total)
}

/// Counts the distinct candidates enrolled in a contest.
///
/// # Errors
///
/// Returns `NotFound` for an unknown contest, or an error if the query fails.
pub fn count_candidates_in_contest(
    conn: &mut SqliteConnection,
    contest_id: i64,
) -> Result<usize, PersistenceError> {
    get_contest(conn, contest_id)?;
    let total: i64 = enrollments::table
        .filter(enrollments::contest_id.eq(contest_id))
        .select(count(enrollments::candidate_id).aggregate_distinct())
        .first(conn)?;
    to_count(total)
}

/// Counts the results recorded in a contest.
///
/// # Errors
///
/// Returns `NotFound` for an unknown contest, or an error if the query fails.
pub fn count_results_in_contest(
    conn: &mut SqliteConnection,
    contest_id: i64,
) -> Result<usize, PersistenceError> {
    get_contest(conn, contest_id)?;
    let total: i64 = results::table
        .filter(results::contest_id.eq(contest_id))
        .select(count(results::result_id))
        .first(conn)?;
    to_count(total)
}

/// Counts the distinct contests a candidate is enrolled in.
///
/// # Errors
///
/// Returns `NotFound` for an unknown candidate, or an error if the query fails.
pub fn count_contests_for_candidate(
    conn: &mut SqliteConnection,
    candidate_id: i64,
) -> Result<usize, PersistenceError> {
    get_candidate(conn, candidate_id)?;
    let total: i64 = enrollments::table
        .filter(enrollments::candidate_id.eq(candidate_id))
        .select(count(enrollments::contest_id).aggregate_distinct())
        .first(conn)?;
    to_count(total)
}
