// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Filtered record lists.
//!
//! Filters narrow in SQL. Free-text candidate search runs afterwards through
//! `Describable::matches_search`, so list screens and the domain agree on
//! what a match is.

use diesel::SqliteConnection;
use diesel::prelude::*;
use school_contest_domain::{Candidate, Contest, ContestResult, Describable, Group, School, Village};
use tracing::debug;

use crate::data_models::{
    CandidateFilter, CandidateRow, ContestFilter, ContestRow, GroupFilter, GroupRow, ResultRow,
    SchoolRow, VillageRow,
};
use crate::diesel_schema::{candidates, class_groups, contests, results, schools, villages};
use crate::error::PersistenceError;
use crate::queries::catalog::{get_contest, get_school};

/// Lists all schools ordered by name.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_schools(conn: &mut SqliteConnection) -> Result<Vec<School>, PersistenceError> {
    let rows: Vec<SchoolRow> = schools::table
        .order(schools::name.asc())
        .select(SchoolRow::as_select())
        .load(conn)?;
    Ok(rows.into_iter().map(School::from).collect())
}

/// Lists class groups ordered by school, year and letter.
///
/// # Errors
///
/// Returns `NotFound` if the school filter names an unknown school, or an
/// error if the query fails or a stored row is invalid.
pub fn list_groups(
    conn: &mut SqliteConnection,
    filter: &GroupFilter,
) -> Result<Vec<Group>, PersistenceError> {
    let mut query = class_groups::table
        .select(GroupRow::as_select())
        .order((
            class_groups::school_id.asc(),
            class_groups::year.asc(),
            class_groups::letter.asc(),
        ))
        .into_boxed();

    if let Some(school_id) = filter.school_id {
        get_school(conn, school_id)?;
        query = query.filter(class_groups::school_id.eq(school_id));
    }
    if let Some(year) = filter.year {
        query = query.filter(class_groups::year.eq(i32::from(year)));
    }

    let rows: Vec<GroupRow> = query.load(conn)?;
    debug!(count = rows.len(), "Listed groups");
    rows.into_iter().map(Group::try_from).collect()
}

/// Lists all villages ordered by name.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_villages(conn: &mut SqliteConnection) -> Result<Vec<Village>, PersistenceError> {
    let rows: Vec<VillageRow> = villages::table
        .order(villages::name.asc())
        .select(VillageRow::as_select())
        .load(conn)?;
    Ok(rows.into_iter().map(Village::from).collect())
}

/// Lists contests ordered by date, then title.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is invalid.
pub fn list_contests(
    conn: &mut SqliteConnection,
    filter: &ContestFilter,
) -> Result<Vec<Contest>, PersistenceError> {
    let mut query = contests::table
        .select(ContestRow::as_select())
        .order((contests::held_on.asc(), contests::title.asc()))
        .into_boxed();

    if let Some(contest_type) = filter.contest_type {
        query = query.filter(contests::contest_type.eq(contest_type.as_str()));
    }

    let rows: Vec<ContestRow> = query.load(conn)?;
    rows.into_iter().map(Contest::try_from).collect()
}

/// Lists candidates ordered by last name, then first name.
///
/// School and year filters apply through the candidate's group.
///
/// # Errors
///
/// Returns `NotFound` if the school filter names an unknown school, or an
/// error if the query fails or a stored row is invalid.
pub fn list_candidates(
    conn: &mut SqliteConnection,
    filter: &CandidateFilter,
) -> Result<Vec<Candidate>, PersistenceError> {
    let mut query = candidates::table
        .inner_join(class_groups::table)
        .select(CandidateRow::as_select())
        .order((
            candidates::last_name.asc(),
            candidates::first_name.asc(),
            candidates::candidate_id.asc(),
        ))
        .into_boxed();

    if let Some(gender) = filter.gender {
        query = query.filter(candidates::gender.eq(gender.as_str()));
    }
    if let Some(school_id) = filter.school_id {
        get_school(conn, school_id)?;
        query = query.filter(class_groups::school_id.eq(school_id));
    }
    if let Some(year) = filter.year {
        query = query.filter(class_groups::year.eq(i32::from(year)));
    }

    let rows: Vec<CandidateRow> = query.load(conn)?;
    let mut found: Vec<Candidate> = rows
        .into_iter()
        .map(Candidate::try_from)
        .collect::<Result<_, _>>()?;

    if let Some(term) = filter.search.as_deref() {
        found.retain(|candidate| candidate.matches_search(term));
    }

    debug!(count = found.len(), "Listed candidates");
    Ok(found)
}

/// Lists results in submission order, optionally for one contest only.
///
/// # Errors
///
/// Returns `NotFound` for an unknown contest, or an error if the query fails.
pub fn list_results(
    conn: &mut SqliteConnection,
    contest_id: Option<i64>,
) -> Result<Vec<ContestResult>, PersistenceError> {
    let mut query = results::table
        .select(ResultRow::as_select())
        .order(results::result_id.asc())
        .into_boxed();

    if let Some(contest_id) = contest_id {
        get_contest(conn, contest_id)?;
        query = query.filter(results::contest_id.eq(contest_id));
    }

    let rows: Vec<ResultRow> = query.load(conn)?;
    Ok(rows.into_iter().map(ContestResult::from).collect())
}
