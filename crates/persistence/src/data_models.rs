// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row types and list filters.
//!
//! Rows mirror the tables column for column. Converting a row back into a
//! domain value re-checks every field, so a hand-edited database surfaces as
//! `ReconstructionError` rather than as an invalid domain value.

use diesel::prelude::*;
use num_traits::ToPrimitive;
use school_contest_domain::{
    Candidate, Contest, ContestKind, ContestResult, Gender, Group, GroupLetter, GroupYear,
    MaxScore, School, Village, parse_contest_date,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::diesel_schema::{candidates, class_groups, contests, results, schools, villages};
use crate::error::PersistenceError;

fn corrupt(table: &str, id: i64, detail: &dyn std::fmt::Display) -> PersistenceError {
    PersistenceError::ReconstructionError(format!("{table} row {id}: {detail}"))
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = schools)]
pub struct SchoolRow {
    pub school_id: i64,
    pub name: String,
    pub address: Option<String>,
}

impl From<SchoolRow> for School {
    fn from(row: SchoolRow) -> Self {
        Self::with_id(row.school_id, row.name, row.address)
    }
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = class_groups)]
pub struct GroupRow {
    pub group_id: i64,
    pub school_id: i64,
    pub year: i32,
    pub letter: String,
}

impl TryFrom<GroupRow> for Group {
    type Error = PersistenceError;

    fn try_from(row: GroupRow) -> Result<Self, Self::Error> {
        let year: u8 = row
            .year
            .to_u8()
            .ok_or_else(|| corrupt("class_groups", row.group_id, &"year out of range"))?;
        let year: GroupYear =
            GroupYear::new(year).map_err(|e| corrupt("class_groups", row.group_id, &e))?;
        let letter: GroupLetter = GroupLetter::parse(&row.letter)
            .map_err(|e| corrupt("class_groups", row.group_id, &e))?;
        Ok(Self::with_id(row.group_id, row.school_id, year, letter))
    }
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = villages)]
pub struct VillageRow {
    pub village_id: i64,
    pub name: String,
}

impl From<VillageRow> for Village {
    fn from(row: VillageRow) -> Self {
        Self::with_id(row.village_id, row.name)
    }
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = contests)]
pub struct ContestRow {
    pub contest_id: i64,
    pub title: String,
    pub contest_type: String,
    pub held_on: String,
    pub max_score: i32,
}

impl TryFrom<ContestRow> for Contest {
    type Error = PersistenceError;

    fn try_from(row: ContestRow) -> Result<Self, Self::Error> {
        let id: i64 = row.contest_id;
        let contest_type: ContestKind =
            ContestKind::from_str(&row.contest_type).map_err(|e| corrupt("contests", id, &e))?;
        let held_on = parse_contest_date(&row.held_on).map_err(|e| corrupt("contests", id, &e))?;
        let max_score: u16 = row
            .max_score
            .to_u16()
            .ok_or_else(|| corrupt("contests", id, &"max_score out of range"))?;
        let max_score: MaxScore =
            MaxScore::new(max_score).map_err(|e| corrupt("contests", id, &e))?;
        Ok(Self::with_id(id, row.title, contest_type, held_on, max_score))
    }
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = candidates)]
pub struct CandidateRow {
    pub candidate_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub group_id: i64,
    pub village_id: i64,
}

impl TryFrom<CandidateRow> for Candidate {
    type Error = PersistenceError;

    fn try_from(row: CandidateRow) -> Result<Self, Self::Error> {
        let gender: Gender = Gender::from_str(&row.gender)
            .map_err(|e| corrupt("candidates", row.candidate_id, &e))?;
        Ok(Self::with_id(
            row.candidate_id,
            row.first_name,
            row.last_name,
            gender,
            row.group_id,
            row.village_id,
        ))
    }
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = results)]
pub struct ResultRow {
    pub result_id: i64,
    pub contest_id: i64,
    pub candidate_id: i64,
    pub score: f64,
}

impl From<ResultRow> for ContestResult {
    fn from(row: ResultRow) -> Self {
        Self::with_id(row.result_id, row.contest_id, row.candidate_id, row.score)
    }
}

/// Narrows a group listing. Unset fields do not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupFilter {
    /// Only groups of this school.
    pub school_id: Option<i64>,
    /// Only groups of this school year.
    pub year: Option<u8>,
}

/// Narrows a contest listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContestFilter {
    /// Only contests open to this audience.
    pub contest_type: Option<ContestKind>,
}

/// Narrows a candidate listing. Unset fields do not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateFilter {
    /// Only candidates of this gender.
    pub gender: Option<Gender>,
    /// Only candidates studying at this school.
    pub school_id: Option<i64>,
    /// Only candidates in this school year.
    pub year: Option<u8>,
    /// Case-insensitive substring of the first or last name.
    pub search: Option<String>,
}
