// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{Context, Transition};
use school_contest_domain::{
    Candidate, Contest, ContestResult, DomainError, Group, GroupLetter, GroupYear, MaxScore,
    School, Village, check_eligibility, validate_candidate_fields, validate_contest_fields,
    validate_contest_revision, validate_result, validate_school_fields, validate_village_fields,
};

/// Decides a command against the stored context, producing a transition.
///
/// This function is pure: it reads only its arguments and never touches the
/// store. Field rules are checked before uniqueness, and the result rules
/// are checked in order (eligibility, score bound, uniqueness).
///
/// # Arguments
///
/// * `command` - The command to decide
/// * `context` - The stored records the command depends on
///
/// # Returns
///
/// * `Ok(Transition)` describing the write to commit
/// * `Err(CoreError)` if the command is rejected
///
/// # Errors
///
/// Returns an error if:
/// - The command violates a field or domain rule
/// - The context was loaded for a different kind of command
pub fn apply(command: Command, context: Context) -> Result<Transition, CoreError> {
    match (command, context) {
        (command, Context::Catalog { duplicate }) => apply_registration(command, duplicate),
        (
            Command::EnrollCandidate { .. },
            Context::Enrollment {
                contest,
                candidate,
                already_enrolled,
            },
        ) => apply_enrollment(&contest, &candidate, already_enrolled),
        (
            Command::ReviseContest {
                contest_id: _,
                title,
                contest_type,
                held_on,
                max_score,
            },
            Context::Revision {
                current,
                title_taken,
                results,
                enrolled,
            },
        ) => {
            let mut revised: Contest = current;
            if let Some(title) = title {
                revised.title = title.trim().to_string();
            }
            if let Some(contest_type) = contest_type {
                revised.contest_type = contest_type;
            }
            if let Some(held_on) = held_on {
                revised.held_on = held_on;
            }
            if let Some(max_score) = max_score {
                revised.max_score = MaxScore::new(max_score)?;
            }

            validate_contest_revision(&revised, &results, &enrolled)?;
            if title_taken {
                return Err(DomainError::DuplicateContest(revised.title).into());
            }
            Ok(Transition::UpdateContest(revised))
        }
        (
            Command::SubmitResult {
                contest_id,
                candidate_id,
                score,
            },
            Context::Submission {
                contest,
                candidate,
                existing,
            },
        ) => {
            validate_result(&contest, &candidate, score, existing.as_ref(), None)?;
            Ok(Transition::InsertResult(ContestResult::new(
                contest_id,
                candidate_id,
                score,
            )))
        }
        (
            Command::UpdateResult { result_id, score },
            Context::Rescoring {
                contest,
                candidate,
                current,
            },
        ) => {
            if current.result_id != Some(result_id) {
                return Err(CoreError::CommandMismatch {
                    command: "UpdateResult",
                    context: "Rescoring",
                });
            }
            validate_result(&contest, &candidate, score, Some(&current), Some(result_id))?;
            Ok(Transition::UpdateResult(ContestResult::with_id(
                result_id,
                current.contest_id,
                current.candidate_id,
                score,
            )))
        }
        (command, context) => Err(CoreError::CommandMismatch {
            command: command.name(),
            context: context.name(),
        }),
    }
}

/// Decides a command that creates a catalog record.
///
/// # Arguments
///
/// * `command` - A create or register command
/// * `duplicate` - Whether a record with the same natural key already exists
///
/// # Errors
///
/// Returns an error if:
/// - A field rule is violated
/// - The natural key is already taken
/// - The command does not create a catalog record
pub fn apply_registration(command: Command, duplicate: bool) -> Result<Transition, CoreError> {
    match command {
        Command::CreateSchool { name, address } => {
            let school: School = School::new(&name, address.as_deref());
            validate_school_fields(&school)?;
            if duplicate {
                return Err(DomainError::DuplicateSchool(school.name).into());
            }
            Ok(Transition::InsertSchool(school))
        }
        Command::CreateGroup {
            school_id,
            year,
            letter,
        } => {
            let year: GroupYear = GroupYear::new(year)?;
            let letter: GroupLetter = GroupLetter::parse(&letter)?;
            if duplicate {
                return Err(DomainError::DuplicateGroup {
                    school_id,
                    year: year.value(),
                    letter: letter.value(),
                }
                .into());
            }
            Ok(Transition::InsertGroup(Group::new(school_id, year, letter)))
        }
        Command::CreateVillage { name } => {
            let village: Village = Village::new(&name);
            validate_village_fields(&village)?;
            if duplicate {
                return Err(DomainError::DuplicateVillage(village.name).into());
            }
            Ok(Transition::InsertVillage(village))
        }
        Command::CreateContest {
            title,
            contest_type,
            held_on,
            max_score,
        } => {
            let max_score: MaxScore = MaxScore::new(max_score)?;
            let contest: Contest = Contest::new(&title, contest_type, held_on, max_score);
            validate_contest_fields(&contest)?;
            if duplicate {
                return Err(DomainError::DuplicateContest(contest.title).into());
            }
            Ok(Transition::InsertContest(contest))
        }
        Command::RegisterCandidate {
            first_name,
            last_name,
            gender,
            group_id,
            village_id,
        } => {
            let candidate: Candidate =
                Candidate::new(&first_name, &last_name, gender, group_id, village_id);
            validate_candidate_fields(&candidate)?;
            Ok(Transition::InsertCandidate(candidate))
        }
        other => Err(CoreError::CommandMismatch {
            command: other.name(),
            context: "Catalog",
        }),
    }
}

/// Decides an enrollment.
///
/// Enrollment follows the same eligibility rule as results.
///
/// # Errors
///
/// Returns an error if the contest does not admit the candidate's gender or
/// the candidate is already enrolled.
pub fn apply_enrollment(
    contest: &Contest,
    candidate: &Candidate,
    already_enrolled: bool,
) -> Result<Transition, CoreError> {
    check_eligibility(contest, candidate)?;

    let candidate_id: i64 = candidate.candidate_id.unwrap_or_default();
    let contest_id: i64 = contest.contest_id.unwrap_or_default();
    if already_enrolled {
        return Err(DomainError::DuplicateEnrollment {
            candidate_id,
            contest_id,
        }
        .into());
    }

    Ok(Transition::InsertEnrollment {
        candidate_id,
        contest_id,
    })
}
