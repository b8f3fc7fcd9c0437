// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Deletions.
//!
//! Schools, groups and villages are protected while referenced. Contests
//! and candidates cascade to their results and enrollments through the
//! schema's `ON DELETE CASCADE`. The protect checks run before the delete
//! so the caller gets a typed error instead of a constraint failure.

use diesel::SqliteConnection;
use diesel::dsl::count;
use diesel::prelude::*;
use num_traits::ToPrimitive;
use school_contest_domain::EntityKind;
use tracing::info;

use crate::diesel_schema::{candidates, class_groups, contests, results, schools, villages};
use crate::error::PersistenceError;
use crate::queries::catalog::{
    get_candidate, get_contest, get_group, get_result, get_school, get_village,
};

fn protect(
    entity: EntityKind,
    id: i64,
    dependent: EntityKind,
    dependents: i64,
) -> Result<(), PersistenceError> {
    if dependents == 0 {
        return Ok(());
    }
    Err(PersistenceError::ReferentialIntegrityViolation {
        entity,
        id,
        dependent,
        dependents: dependents.to_usize().unwrap_or(usize::MAX),
    })
}

/// Deletes a school that owns no groups.
///
/// # Errors
///
/// Returns `NotFound`, `ReferentialIntegrityViolation` while groups exist,
/// or an error if the delete fails.
pub fn delete_school(conn: &mut SqliteConnection, school_id: i64) -> Result<(), PersistenceError> {
    get_school(conn, school_id)?;
    let groups: i64 = class_groups::table
        .filter(class_groups::school_id.eq(school_id))
        .select(count(class_groups::group_id))
        .first(conn)?;
    protect(EntityKind::School, school_id, EntityKind::Group, groups)?;

    diesel::delete(schools::table.find(school_id)).execute(conn)?;
    info!(school_id, "Deleted school");
    Ok(())
}

/// Deletes a group no candidate studies in.
///
/// # Errors
///
/// Returns `NotFound`, `ReferentialIntegrityViolation` while candidates
/// reference it, or an error if the delete fails.
pub fn delete_group(conn: &mut SqliteConnection, group_id: i64) -> Result<(), PersistenceError> {
    get_group(conn, group_id)?;
    let members: i64 = candidates::table
        .filter(candidates::group_id.eq(group_id))
        .select(count(candidates::candidate_id))
        .first(conn)?;
    protect(EntityKind::Group, group_id, EntityKind::Candidate, members)?;

    diesel::delete(class_groups::table.find(group_id)).execute(conn)?;
    info!(group_id, "Deleted group");
    Ok(())
}

/// Deletes a village no candidate comes from.
///
/// # Errors
///
/// Returns `NotFound`, `ReferentialIntegrityViolation` while candidates
/// reference it, or an error if the delete fails.
pub fn delete_village(
    conn: &mut SqliteConnection,
    village_id: i64,
) -> Result<(), PersistenceError> {
    get_village(conn, village_id)?;
    let residents: i64 = candidates::table
        .filter(candidates::village_id.eq(village_id))
        .select(count(candidates::candidate_id))
        .first(conn)?;
    protect(EntityKind::Village, village_id, EntityKind::Candidate, residents)?;

    diesel::delete(villages::table.find(village_id)).execute(conn)?;
    info!(village_id, "Deleted village");
    Ok(())
}

/// Deletes a contest together with its results and enrollments.
///
/// # Errors
///
/// Returns `NotFound`, or an error if the delete fails.
pub fn delete_contest(
    conn: &mut SqliteConnection,
    contest_id: i64,
) -> Result<(), PersistenceError> {
    get_contest(conn, contest_id)?;
    diesel::delete(contests::table.find(contest_id)).execute(conn)?;
    info!(contest_id, "Deleted contest with its results and enrollments");
    Ok(())
}

/// Deletes a candidate together with their results and enrollments.
///
/// # Errors
///
/// Returns `NotFound`, or an error if the delete fails.
pub fn delete_candidate(
    conn: &mut SqliteConnection,
    candidate_id: i64,
) -> Result<(), PersistenceError> {
    get_candidate(conn, candidate_id)?;
    diesel::delete(candidates::table.find(candidate_id)).execute(conn)?;
    info!(
        candidate_id,
        "Deleted candidate with their results and enrollments"
    );
    Ok(())
}

/// Deletes a single result.
///
/// # Errors
///
/// Returns `NotFound`, or an error if the delete fails.
pub fn delete_result(conn: &mut SqliteConnection, result_id: i64) -> Result<(), PersistenceError> {
    get_result(conn, result_id)?;
    diesel::delete(results::table.find(result_id)).execute(conn)?;
    info!(result_id, "Deleted result");
    Ok(())
}
