// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The single write path.
//!
//! Every command goes through [`execute_command`]: load the records the
//! command depends on, let the core decide, then commit the transition. The
//! caller runs this inside one immediate transaction, so no other writer can
//! change the context between the decision and the commit.

use diesel::SqliteConnection;
use school_contest::{Command, Context, Transition, apply};
use school_contest_domain::{Contest, ContestResult, GroupLetter};
use tracing::{info, warn};

use crate::error::PersistenceError;
use crate::mutations::records::commit_transition;
use crate::queries::catalog::{
    contest_title_exists, enrolled_candidates, find_result, get_candidate, get_contest,
    get_group, get_result, get_school, get_village, group_exists, is_enrolled,
    results_with_candidates, school_name_exists, village_name_exists,
};

/// The outcome of a committed command.
#[derive(Debug, Clone, PartialEq)]
pub struct CommitOutcome {
    /// The transition that was written.
    pub transition: Transition,
    /// The ID of the inserted or updated record; `None` for enrollments.
    pub record_id: Option<i64>,
}

/// Loads the stored records a command is decided against.
///
/// Referenced records that do not exist are reported here as `NotFound`,
/// before any rule runs.
///
/// # Errors
///
/// Returns `NotFound` for a missing referenced record, or an error if a
/// query fails.
pub fn load_context(
    conn: &mut SqliteConnection,
    command: &Command,
) -> Result<Context, PersistenceError> {
    let context: Context = match command {
        Command::CreateSchool { name, .. } => Context::Catalog {
            duplicate: school_name_exists(conn, name.trim())?,
        },
        Command::CreateGroup {
            school_id,
            year,
            letter,
        } => {
            get_school(conn, *school_id)?;
            let duplicate: bool = match GroupLetter::parse(letter) {
                Ok(letter) => group_exists(conn, *school_id, *year, letter.value())?,
                Err(_) => false,
            };
            Context::Catalog { duplicate }
        }
        Command::CreateVillage { name } => Context::Catalog {
            duplicate: village_name_exists(conn, name.trim())?,
        },
        Command::CreateContest { title, .. } => Context::Catalog {
            duplicate: contest_title_exists(conn, title.trim(), None)?,
        },
        Command::RegisterCandidate {
            group_id,
            village_id,
            ..
        } => {
            get_group(conn, *group_id)?;
            get_village(conn, *village_id)?;
            Context::Catalog { duplicate: false }
        }
        Command::EnrollCandidate {
            candidate_id,
            contest_id,
        } => Context::Enrollment {
            contest: get_contest(conn, *contest_id)?,
            candidate: get_candidate(conn, *candidate_id)?,
            already_enrolled: is_enrolled(conn, *candidate_id, *contest_id)?,
        },
        Command::ReviseContest {
            contest_id, title, ..
        } => {
            let current: Contest = get_contest(conn, *contest_id)?;
            let title_taken: bool = match title {
                Some(title) => contest_title_exists(conn, title.trim(), Some(*contest_id))?,
                None => false,
            };
            Context::Revision {
                current,
                title_taken,
                results: results_with_candidates(conn, *contest_id)?,
                enrolled: enrolled_candidates(conn, *contest_id)?,
            }
        }
        Command::SubmitResult {
            contest_id,
            candidate_id,
            ..
        } => Context::Submission {
            contest: get_contest(conn, *contest_id)?,
            candidate: get_candidate(conn, *candidate_id)?,
            existing: find_result(conn, *contest_id, *candidate_id)?,
        },
        Command::UpdateResult { result_id, .. } => {
            let current: ContestResult = get_result(conn, *result_id)?;
            Context::Rescoring {
                contest: get_contest(conn, current.contest_id)?,
                candidate: get_candidate(conn, current.candidate_id)?,
                current,
            }
        }
    };
    Ok(context)
}

/// Decides a command against the current store and commits it if accepted.
///
/// Must be called inside an immediate transaction.
///
/// # Errors
///
/// Returns:
/// - `NotFound` if a referenced record does not exist
/// - `Rejected` if a domain rule rejects the command
/// - a database error if a read or write fails
pub fn execute_command(
    conn: &mut SqliteConnection,
    command: Command,
) -> Result<CommitOutcome, PersistenceError> {
    let command_name: &'static str = command.name();
    let context: Context = load_context(conn, &command)?;

    let transition: Transition = apply(command, context).map_err(|err| {
        warn!(command = command_name, error = %err, "Command rejected");
        PersistenceError::Rejected(err)
    })?;

    let record_id: Option<i64> = commit_transition(conn, &transition)?;
    info!(
        command = command_name,
        record_id,
        "Committed {}",
        transition.describe()
    );

    Ok(CommitOutcome {
        transition,
        record_id,
    })
}
