// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use school_contest::CoreError;
use school_contest_domain::EntityKind;

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq)]
pub enum PersistenceError {
    /// A database error occurred.
    DatabaseError(String),
    /// Database connection failed.
    DatabaseConnectionFailed(String),
    /// Database migration failed.
    MigrationFailed(String),
    /// Query execution failed.
    QueryFailed(String),
    /// A stored row could not be turned back into a domain value.
    ReconstructionError(String),
    /// Initialization error.
    InitializationError(String),
    /// Foreign key enforcement is not enabled.
    ForeignKeyEnforcementNotEnabled,
    /// The requested record does not exist.
    NotFound {
        /// The kind of record looked up.
        entity: EntityKind,
        /// The identifier looked up.
        id: i64,
    },
    /// The record cannot be deleted while other records reference it.
    ReferentialIntegrityViolation {
        /// The kind of record being deleted.
        entity: EntityKind,
        /// The identifier of the record being deleted.
        id: i64,
        /// The kind of the referencing records.
        dependent: EntityKind,
        /// How many records reference it.
        dependents: usize,
    },
    /// The command was rejected by a domain rule; nothing was written.
    Rejected(CoreError),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::DatabaseConnectionFailed(msg) => {
                write!(f, "Database connection failed: {msg}")
            }
            Self::MigrationFailed(msg) => write!(f, "Migration failed: {msg}"),
            Self::QueryFailed(msg) => write!(f, "Query failed: {msg}"),
            Self::ReconstructionError(msg) => write!(f, "Stored record is invalid: {msg}"),
            Self::InitializationError(msg) => write!(f, "Initialization error: {msg}"),
            Self::ForeignKeyEnforcementNotEnabled => {
                write!(f, "Foreign key enforcement is not enabled")
            }
            Self::NotFound { entity, id } => write!(f, "No {entity} with id {id}"),
            Self::ReferentialIntegrityViolation {
                entity,
                id,
                dependent,
                dependents,
            } => write!(
                f,
                "Cannot delete {entity} {id}: referenced by {dependents} {dependent} record(s)"
            ),
            Self::Rejected(err) => write!(f, "Rejected: {err}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        Self::DatabaseError(err.to_string())
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}

impl From<CoreError> for PersistenceError {
    fn from(err: CoreError) -> Self {
        Self::Rejected(err)
    }
}
