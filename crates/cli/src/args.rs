// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use school_contest_api::AggregateKind;

/// School Contest - record contest results and report counts and rankings
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    pub database: Option<PathBuf>,

    #[command(subcommand)]
    pub command: EntityCommand,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum EntityCommand {
    /// Manage schools
    School {
        #[command(subcommand)]
        action: SchoolAction,
    },
    /// Manage groups (classes) inside schools
    Group {
        #[command(subcommand)]
        action: GroupAction,
    },
    /// Manage villages
    Village {
        #[command(subcommand)]
        action: VillageAction,
    },
    /// Manage contests
    Contest {
        #[command(subcommand)]
        action: ContestAction,
    },
    /// Manage candidates
    Candidate {
        #[command(subcommand)]
        action: CandidateAction,
    },
    /// Record and correct scores
    #[command(name = "result")]
    Results {
        #[command(subcommand)]
        action: ResultAction,
    },
    /// Print one count, e.g. `candidates_per_school 3`
    Aggregate {
        /// Which count to compute
        kind: AggregateKind,
        /// The school, group, village, contest or candidate id
        id: i64,
    },
    /// Print the list columns, filters and search fields of an entity type
    Describe {
        /// school, group, village, contest, candidate or result
        entity: String,
    },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum SchoolAction {
    /// Create a school
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        address: Option<String>,
    },
    /// List schools
    List,
    /// Delete a school without groups
    Delete { id: i64 },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum GroupAction {
    /// Create a group in a school
    Create {
        #[arg(long)]
        school_id: i64,
        /// School year, 1 through 11
        #[arg(long)]
        year: u8,
        /// Section letter
        #[arg(long)]
        letter: String,
    },
    /// List groups
    List {
        #[arg(long)]
        school_id: Option<i64>,
        #[arg(long)]
        year: Option<u8>,
    },
    /// Delete a group without candidates
    Delete { id: i64 },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum VillageAction {
    /// Create a village
    Create {
        #[arg(long)]
        name: String,
    },
    /// List villages
    List,
    /// Delete a village no candidate comes from
    Delete { id: i64 },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ContestAction {
    /// Create a contest
    Create {
        #[arg(long)]
        title: String,
        /// male, female or all
        #[arg(long = "type")]
        contest_type: Option<String>,
        /// ISO 8601 date, e.g. 2026-09-15
        #[arg(long)]
        date: String,
        #[arg(long)]
        max_score: Option<u16>,
    },
    /// Change a contest; refused if stored results would become invalid
    Revise {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long = "type")]
        contest_type: Option<String>,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        max_score: Option<u16>,
    },
    /// List contests
    List {
        #[arg(long = "type")]
        contest_type: Option<String>,
    },
    /// Print the ranking of a contest
    Ranking { id: i64 },
    /// Delete a contest with its results and enrollments
    Delete { id: i64 },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum CandidateAction {
    /// Register a candidate
    Register {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        /// male or female
        #[arg(long)]
        gender: Option<String>,
        #[arg(long)]
        group_id: i64,
        #[arg(long)]
        village_id: i64,
    },
    /// Enroll a candidate in a contest
    Enroll {
        id: i64,
        #[arg(long)]
        contest_id: i64,
    },
    /// List and search candidates
    List {
        #[arg(long)]
        gender: Option<String>,
        #[arg(long)]
        school_id: Option<i64>,
        #[arg(long)]
        year: Option<u8>,
        #[arg(long)]
        search: Option<String>,
    },
    /// Delete a candidate with their results and enrollments
    Delete { id: i64 },
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum ResultAction {
    /// Record a score
    Submit {
        #[arg(long)]
        contest_id: i64,
        #[arg(long)]
        candidate_id: i64,
        #[arg(long)]
        score: f64,
    },
    /// Change a recorded score
    Update {
        id: i64,
        #[arg(long)]
        score: f64,
    },
    /// List results
    List {
        #[arg(long)]
        contest_id: Option<i64>,
    },
    /// Delete a result
    Delete { id: i64 },
}
