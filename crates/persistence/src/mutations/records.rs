// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row inserts and updates for committed transitions.

use diesel::SqliteConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use school_contest::{CoreError, Transition};
use school_contest_domain::{
    Candidate, Contest, ContestResult, DomainError, Group, School, Village, format_contest_date,
};

use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::{
    candidates, class_groups, contests, enrollments, results, schools, villages,
};
use crate::error::PersistenceError;

/// Writes a validated transition to the store.
///
/// # Returns
///
/// The identifier of the inserted or updated record, or `None` for an
/// enrollment, which has no identifier of its own.
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn commit_transition(
    conn: &mut SqliteConnection,
    transition: &Transition,
) -> Result<Option<i64>, PersistenceError> {
    let record_id: Option<i64> = match transition {
        Transition::InsertSchool(school) => Some(insert_school(conn, school)?),
        Transition::InsertGroup(group) => Some(insert_group(conn, group)?),
        Transition::InsertVillage(village) => Some(insert_village(conn, village)?),
        Transition::InsertContest(contest) => Some(insert_contest(conn, contest)?),
        Transition::InsertCandidate(candidate) => Some(insert_candidate(conn, candidate)?),
        Transition::InsertEnrollment {
            candidate_id,
            contest_id,
        } => {
            insert_enrollment(conn, *candidate_id, *contest_id)?;
            None
        }
        Transition::UpdateContest(contest) => Some(update_contest(conn, contest)?),
        Transition::InsertResult(result) => Some(insert_result(conn, result)?),
        Transition::UpdateResult(result) => Some(update_result(conn, result)?),
    };
    Ok(record_id)
}

/// Inserts a school and returns its new ID.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_school(
    conn: &mut SqliteConnection,
    school: &School,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(schools::table)
        .values((
            schools::name.eq(&school.name),
            schools::address.eq(school.address.as_deref()),
        ))
        .execute(conn)?;
    get_last_insert_rowid(conn)
}

/// Inserts a class group and returns its new ID.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_group(conn: &mut SqliteConnection, group: &Group) -> Result<i64, PersistenceError> {
    diesel::insert_into(class_groups::table)
        .values((
            class_groups::school_id.eq(group.school_id),
            class_groups::year.eq(i32::from(group.year.value())),
            class_groups::letter.eq(group.letter.value().to_string()),
        ))
        .execute(conn)?;
    get_last_insert_rowid(conn)
}

/// Inserts a village and returns its new ID.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_village(
    conn: &mut SqliteConnection,
    village: &Village,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(villages::table)
        .values(villages::name.eq(&village.name))
        .execute(conn)?;
    get_last_insert_rowid(conn)
}

/// Inserts a contest and returns its new ID.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_contest(
    conn: &mut SqliteConnection,
    contest: &Contest,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(contests::table)
        .values((
            contests::title.eq(&contest.title),
            contests::contest_type.eq(contest.contest_type.as_str()),
            contests::held_on.eq(format_contest_date(contest.held_on)),
            contests::max_score.eq(i32::from(contest.max_score.value())),
        ))
        .execute(conn)?;
    get_last_insert_rowid(conn)
}

/// Inserts a candidate and returns the new ID.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_candidate(
    conn: &mut SqliteConnection,
    candidate: &Candidate,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(candidates::table)
        .values((
            candidates::first_name.eq(&candidate.first_name),
            candidates::last_name.eq(&candidate.last_name),
            candidates::gender.eq(candidate.gender.as_str()),
            candidates::group_id.eq(candidate.group_id),
            candidates::village_id.eq(candidate.village_id),
        ))
        .execute(conn)?;
    get_last_insert_rowid(conn)
}

/// Records a candidate's enrollment in a contest.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_enrollment(
    conn: &mut SqliteConnection,
    candidate_id: i64,
    contest_id: i64,
) -> Result<(), PersistenceError> {
    diesel::insert_into(enrollments::table)
        .values((
            enrollments::candidate_id.eq(candidate_id),
            enrollments::contest_id.eq(contest_id),
        ))
        .execute(conn)?;
    Ok(())
}

/// Overwrites a contest's fields and returns its ID.
///
/// # Errors
///
/// Returns an error if the contest has no ID or the update fails.
pub fn update_contest(
    conn: &mut SqliteConnection,
    contest: &Contest,
) -> Result<i64, PersistenceError> {
    let contest_id: i64 = contest.contest_id.ok_or_else(|| {
        PersistenceError::DatabaseError(String::from("Cannot update a contest without an ID"))
    })?;

    diesel::update(contests::table.find(contest_id))
        .set((
            contests::title.eq(&contest.title),
            contests::contest_type.eq(contest.contest_type.as_str()),
            contests::held_on.eq(format_contest_date(contest.held_on)),
            contests::max_score.eq(i32::from(contest.max_score.value())),
        ))
        .execute(conn)?;
    Ok(contest_id)
}

/// Inserts a result and returns its new ID.
///
/// The `UNIQUE (contest_id, candidate_id)` constraint backs the uniqueness
/// rule; a violation is reported as `DuplicateResult`.
///
/// # Errors
///
/// Returns `Rejected(DuplicateResult)` on a unique violation, or an error
/// if the insert fails otherwise.
pub fn insert_result(
    conn: &mut SqliteConnection,
    result: &ContestResult,
) -> Result<i64, PersistenceError> {
    let inserted: Result<usize, DieselError> = diesel::insert_into(results::table)
        .values((
            results::contest_id.eq(result.contest_id),
            results::candidate_id.eq(result.candidate_id),
            results::score.eq(result.score),
        ))
        .execute(conn);

    match inserted {
        Ok(_) => get_last_insert_rowid(conn),
        Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
            Err(PersistenceError::Rejected(CoreError::DomainViolation(
                DomainError::DuplicateResult {
                    contest_id: result.contest_id,
                    candidate_id: result.candidate_id,
                },
            )))
        }
        Err(e) => Err(e.into()),
    }
}

/// Overwrites a result's score and returns its ID.
///
/// # Errors
///
/// Returns an error if the result has no ID or the update fails.
pub fn update_result(
    conn: &mut SqliteConnection,
    result: &ContestResult,
) -> Result<i64, PersistenceError> {
    let result_id: i64 = result.result_id.ok_or_else(|| {
        PersistenceError::DatabaseError(String::from("Cannot update a result without an ID"))
    })?;

    diesel::update(results::table.find(result_id))
        .set(results::score.eq(result.score))
        .execute(conn)?;
    Ok(result_id)
}
