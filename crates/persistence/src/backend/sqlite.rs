// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `SQLite` connection setup.
//!
//! PRAGMA statements and `last_insert_rowid()` have no Diesel DSL, so they
//! are issued as raw SQL here and nowhere else.

use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Integer};
use diesel::{Connection, RunQueryDsl, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info};

use crate::error::PersistenceError;

/// Schema migrations compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// How long a writer waits for another writer's lock before failing.
const BUSY_TIMEOUT_MS: u32 = 5_000;

#[derive(QueryableByName)]
struct ForeignKeysPragma {
    #[diesel(sql_type = Integer)]
    foreign_keys: i32,
}

/// Returns the row id assigned by the most recent insert on this connection.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_last_insert_rowid(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    Ok(diesel::select(sql::<BigInt>("last_insert_rowid()")).get_result(conn)?)
}

/// Fails unless `SQLite` is enforcing foreign keys on this connection.
///
/// Protect and cascade rules on delete depend on it.
///
/// # Errors
///
/// Returns `ForeignKeyEnforcementNotEnabled` if enforcement is off.
pub fn verify_foreign_key_enforcement(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    let pragma: ForeignKeysPragma =
        diesel::sql_query("PRAGMA foreign_keys").get_result::<ForeignKeysPragma>(conn)?;

    if pragma.foreign_keys == 0 {
        return Err(PersistenceError::ForeignKeyEnforcementNotEnabled);
    }

    debug!("SQLite foreign key enforcement is enabled");
    Ok(())
}

/// Applies all pending schema migrations.
///
/// # Errors
///
/// Returns an error if a migration fails.
pub fn run_migrations(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    info!("Running SQLite database migrations");
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| PersistenceError::MigrationFailed(e.to_string()))?;
    Ok(())
}

/// Opens the database at `database_url`, configures it and migrates it.
///
/// # Arguments
///
/// * `database_url` - A file path or `SQLite` URI
///
/// # Errors
///
/// Returns an error if the connection, configuration or migration fails.
pub fn initialize_database(database_url: &str) -> Result<SqliteConnection, PersistenceError> {
    info!(database_url, "Opening SQLite database");

    let mut conn: SqliteConnection = SqliteConnection::establish(database_url)?;

    for pragma in [
        String::from("PRAGMA foreign_keys = ON"),
        format!("PRAGMA busy_timeout = {BUSY_TIMEOUT_MS}"),
    ] {
        diesel::sql_query(pragma)
            .execute(&mut conn)
            .map_err(|e| PersistenceError::QueryFailed(e.to_string()))?;
    }

    run_migrations(&mut conn)?;

    Ok(conn)
}

/// Switches a file-backed database to write-ahead logging.
///
/// Readers then proceed while a writer holds its lock.
///
/// # Errors
///
/// Returns an error if the PRAGMA statement fails.
pub fn enable_wal_mode(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    diesel::sql_query("PRAGMA journal_mode = WAL")
        .execute(conn)
        .map_err(|e| PersistenceError::QueryFailed(e.to_string()))?;
    Ok(())
}
