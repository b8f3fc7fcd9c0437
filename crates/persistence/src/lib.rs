// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the school contest registry.
//!
//! This crate is the Entity Store: schools, groups, villages, contests,
//! candidates, enrollments and results in `SQLite` through Diesel, plus the
//! read-only aggregate and ranking queries over them.
//!
//! ## Write Path
//!
//! Every write runs inside a `BEGIN IMMEDIATE` transaction. Commands load
//! their context, are decided by the core, and are committed in that same
//! transaction, so two writers can never both pass the uniqueness rule for
//! the same `(contest, candidate)` pair. The schema's unique constraint
//! backs the rule.
//!
//! ## Referential Integrity
//!
//! Foreign keys are switched on at connection time and verified at startup.
//! Schools, groups and villages are protected while referenced; contests and
//! candidates cascade to their results and enrollments.
//!
//! ## Testing
//!
//! Tests use `Persistence::new_in_memory()`, which gives every call its own
//! shared-cache in-memory database.

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
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use school_contest::Command;
use school_contest_domain::{Candidate, Contest, ContestResult, Group, Ranking, School, Village};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use data_models::{CandidateFilter, ContestFilter, GroupFilter};
pub use error::PersistenceError;
pub use mutations::CommitOutcome;

/// The Entity Store.
///
/// Owns one `SQLite` connection. Writers are serialized by `SQLite`'s
/// immediate transactions; readers see committed state only.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Creates a store backed by a fresh in-memory `SQLite` database.
    ///
    /// Each call gets its own database, so tests are isolated.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String =
            format!("file:contest_memdb_{db_id}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a store backed by a `SQLite` file, creating it if needed.
    ///
    /// File-backed stores use WAL mode so aggregate reads can run alongside
    /// a writer.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        backend::sqlite::verify_foreign_key_enforcement(&mut self.conn)
    }

    // ========================================================================
    // Writes
    // ========================================================================

    /// Decides and commits a command in one immediate transaction.
    ///
    /// Nothing is written unless every rule accepts the command.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `NotFound` if a referenced record does not exist
    /// - `Rejected` if a domain rule rejects the command
    /// - a database error if the transaction fails
    pub fn execute(&mut self, command: Command) -> Result<CommitOutcome, PersistenceError> {
        self.conn
            .immediate_transaction(|conn| mutations::execute_command(conn, command))
    }

    /// Deletes a school that owns no groups.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`, `ReferentialIntegrityViolation`, or a database error.
    pub fn delete_school(&mut self, school_id: i64) -> Result<(), PersistenceError> {
        self.conn
            .immediate_transaction(|conn| mutations::deletes::delete_school(conn, school_id))
    }

    /// Deletes a group no candidate studies in.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`, `ReferentialIntegrityViolation`, or a database error.
    pub fn delete_group(&mut self, group_id: i64) -> Result<(), PersistenceError> {
        self.conn
            .immediate_transaction(|conn| mutations::deletes::delete_group(conn, group_id))
    }

    /// Deletes a village no candidate comes from.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`, `ReferentialIntegrityViolation`, or a database error.
    pub fn delete_village(&mut self, village_id: i64) -> Result<(), PersistenceError> {
        self.conn
            .immediate_transaction(|conn| mutations::deletes::delete_village(conn, village_id))
    }

    /// Deletes a contest with its results and enrollments.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`, or a database error.
    pub fn delete_contest(&mut self, contest_id: i64) -> Result<(), PersistenceError> {
        self.conn
            .immediate_transaction(|conn| mutations::deletes::delete_contest(conn, contest_id))
    }

    /// Deletes a candidate with their results and enrollments.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`, or a database error.
    pub fn delete_candidate(&mut self, candidate_id: i64) -> Result<(), PersistenceError> {
        self.conn.immediate_transaction(|conn| {
            mutations::deletes::delete_candidate(conn, candidate_id)
        })
    }

    /// Deletes a single result.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`, or a database error.
    pub fn delete_result(&mut self, result_id: i64) -> Result<(), PersistenceError> {
        self.conn
            .immediate_transaction(|conn| mutations::deletes::delete_result(conn, result_id))
    }

    // ========================================================================
    // Lookups
    // ========================================================================

    /// Retrieves a school by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown ID, or a database error.
    pub fn get_school(&mut self, school_id: i64) -> Result<School, PersistenceError> {
        queries::catalog::get_school(&mut self.conn, school_id)
    }

    /// Retrieves a group by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown ID, or a database error.
    pub fn get_group(&mut self, group_id: i64) -> Result<Group, PersistenceError> {
        queries::catalog::get_group(&mut self.conn, group_id)
    }

    /// Retrieves a village by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown ID, or a database error.
    pub fn get_village(&mut self, village_id: i64) -> Result<Village, PersistenceError> {
        queries::catalog::get_village(&mut self.conn, village_id)
    }

    /// Retrieves a contest by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown ID, or a database error.
    pub fn get_contest(&mut self, contest_id: i64) -> Result<Contest, PersistenceError> {
        queries::catalog::get_contest(&mut self.conn, contest_id)
    }

    /// Retrieves a candidate by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown ID, or a database error.
    pub fn get_candidate(&mut self, candidate_id: i64) -> Result<Candidate, PersistenceError> {
        queries::catalog::get_candidate(&mut self.conn, candidate_id)
    }

    /// Retrieves a result by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown ID, or a database error.
    pub fn get_result(&mut self, result_id: i64) -> Result<ContestResult, PersistenceError> {
        queries::catalog::get_result(&mut self.conn, result_id)
    }

    // ========================================================================
    // Listings
    // ========================================================================

    /// Lists all schools by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_schools(&mut self) -> Result<Vec<School>, PersistenceError> {
        queries::listing::list_schools(&mut self.conn)
    }

    /// Lists groups matching the filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_groups(&mut self, filter: &GroupFilter) -> Result<Vec<Group>, PersistenceError> {
        queries::listing::list_groups(&mut self.conn, filter)
    }

    /// Lists all villages by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_villages(&mut self) -> Result<Vec<Village>, PersistenceError> {
        queries::listing::list_villages(&mut self.conn)
    }

    /// Lists contests matching the filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_contests(
        &mut self,
        filter: &ContestFilter,
    ) -> Result<Vec<Contest>, PersistenceError> {
        queries::listing::list_contests(&mut self.conn, filter)
    }

    /// Lists candidates matching the filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_candidates(
        &mut self,
        filter: &CandidateFilter,
    ) -> Result<Vec<Candidate>, PersistenceError> {
        queries::listing::list_candidates(&mut self.conn, filter)
    }

    /// Lists results in submission order, optionally for one contest.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_results(
        &mut self,
        contest_id: Option<i64>,
    ) -> Result<Vec<ContestResult>, PersistenceError> {
        queries::listing::list_results(&mut self.conn, contest_id)
    }

    // ========================================================================
    // Aggregates
    // ========================================================================

    /// Counts the groups of a school.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown school, or a database error.
    pub fn count_groups_in_school(&mut self, school_id: i64) -> Result<usize, PersistenceError> {
        queries::aggregates::count_groups_in_school(&mut self.conn, school_id)
    }

    /// Counts the distinct candidates of a school, across all its groups.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown school, or a database error.
    pub fn count_candidates_in_school(
        &mut self,
        school_id: i64,
    ) -> Result<usize, PersistenceError> {
        queries::aggregates::count_candidates_in_school(&mut self.conn, school_id)
    }

    /// Counts the candidates of a group.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown group, or a database error.
    pub fn count_candidates_in_group(&mut self, group_id: i64) -> Result<usize, PersistenceError> {
        queries::aggregates::count_candidates_in_group(&mut self.conn, group_id)
    }

    /// Counts the candidates from a village.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown village, or a database error.
    pub fn count_candidates_in_village(
        &mut self,
        village_id: i64,
    ) -> Result<usize, PersistenceError> {
        queries::aggregates::count_candidates_in_village(&mut self.conn, village_id)
    }

    /// Counts the distinct candidates enrolled in a contest.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown contest, or a database error.
    pub fn count_candidates_in_contest(
        &mut self,
        contest_id: i64,
    ) -> Result<usize, PersistenceError> {
        queries::aggregates::count_candidates_in_contest(&mut self.conn, contest_id)
    }

    /// Counts the results of a contest.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown contest, or a database error.
    pub fn count_results_in_contest(&mut self, contest_id: i64) -> Result<usize, PersistenceError> {
        queries::aggregates::count_results_in_contest(&mut self.conn, contest_id)
    }

    /// Counts the distinct contests a candidate is enrolled in.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown candidate, or a database error.
    pub fn count_contests_for_candidate(
        &mut self,
        candidate_id: i64,
    ) -> Result<usize, PersistenceError> {
        queries::aggregates::count_contests_for_candidate(&mut self.conn, candidate_id)
    }

    /// Ranks a contest's results, best score first.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown contest, or a database error.
    pub fn get_ranking(&mut self, contest_id: i64) -> Result<Ranking, PersistenceError> {
        queries::ranking::get_ranking(&mut self.conn, contest_id)
    }
}
