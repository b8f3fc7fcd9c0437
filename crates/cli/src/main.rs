// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod args;
mod error;

use std::process::ExitCode;

use clap::Parser;
use school_contest_api::{
    CreateContestRequest, CreateGroupRequest, CreateSchoolRequest, CreateVillageRequest,
    EnrollCandidateRequest, ListCandidatesRequest, ListContestsRequest, ListGroupsRequest,
    RegisterCandidateRequest, ReviseContestRequest, SubmitResultRequest, UpdateResultRequest,
};
use school_contest_persistence::Persistence;
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

use crate::args::{
    Args, CandidateAction, ContestAction, EntityCommand, GroupAction, ResultAction,
    SchoolAction, VillageAction,
};
use crate::error::CliError;

fn to_json<T: Serialize>(response: &T) -> Result<Value, CliError> {
    Ok(serde_json::to_value(response)?)
}

fn run_school(persistence: &mut Persistence, action: SchoolAction) -> Result<Value, CliError> {
    match action {
        SchoolAction::Create { name, address } => to_json(&school_contest_api::create_school(
            persistence,
            CreateSchoolRequest { name, address },
        )?),
        SchoolAction::List => to_json(&school_contest_api::list_schools(persistence)?),
        SchoolAction::Delete { id } => {
            to_json(&school_contest_api::delete_school(persistence, id)?)
        }
    }
}

fn run_group(persistence: &mut Persistence, action: GroupAction) -> Result<Value, CliError> {
    match action {
        GroupAction::Create {
            school_id,
            year,
            letter,
        } => to_json(&school_contest_api::create_group(
            persistence,
            CreateGroupRequest {
                school_id,
                year,
                letter,
            },
        )?),
        GroupAction::List { school_id, year } => to_json(&school_contest_api::list_groups(
            persistence,
            ListGroupsRequest { school_id, year },
        )?),
        GroupAction::Delete { id } => to_json(&school_contest_api::delete_group(persistence, id)?),
    }
}

fn run_village(persistence: &mut Persistence, action: VillageAction) -> Result<Value, CliError> {
    match action {
        VillageAction::Create { name } => to_json(&school_contest_api::create_village(
            persistence,
            CreateVillageRequest { name },
        )?),
        VillageAction::List => to_json(&school_contest_api::list_villages(persistence)?),
        VillageAction::Delete { id } => {
            to_json(&school_contest_api::delete_village(persistence, id)?)
        }
    }
}

fn run_contest(persistence: &mut Persistence, action: ContestAction) -> Result<Value, CliError> {
    match action {
        ContestAction::Create {
            title,
            contest_type,
            date,
            max_score,
        } => to_json(&school_contest_api::create_contest(
            persistence,
            CreateContestRequest {
                title,
                contest_type,
                date,
                max_score,
            },
        )?),
        ContestAction::Revise {
            id,
            title,
            contest_type,
            date,
            max_score,
        } => to_json(&school_contest_api::revise_contest(
            persistence,
            ReviseContestRequest {
                contest_id: id,
                title,
                contest_type,
                date,
                max_score,
            },
        )?),
        ContestAction::List { contest_type } => to_json(&school_contest_api::list_contests(
            persistence,
            &ListContestsRequest { contest_type },
        )?),
        ContestAction::Ranking { id } => {
            to_json(&school_contest_api::get_ranking(persistence, id)?)
        }
        ContestAction::Delete { id } => {
            to_json(&school_contest_api::delete_contest(persistence, id)?)
        }
    }
}

fn run_candidate(
    persistence: &mut Persistence,
    action: CandidateAction,
) -> Result<Value, CliError> {
    match action {
        CandidateAction::Register {
            first_name,
            last_name,
            gender,
            group_id,
            village_id,
        } => to_json(&school_contest_api::register_candidate(
            persistence,
            RegisterCandidateRequest {
                first_name,
                last_name,
                gender,
                group_id,
                village_id,
            },
        )?),
        CandidateAction::Enroll { id, contest_id } => {
            to_json(&school_contest_api::enroll_candidate(
                persistence,
                EnrollCandidateRequest {
                    candidate_id: id,
                    contest_id,
                },
            )?)
        }
        CandidateAction::List {
            gender,
            school_id,
            year,
            search,
        } => to_json(&school_contest_api::list_candidates(
            persistence,
            &ListCandidatesRequest {
                gender,
                school_id,
                year,
                search,
            },
        )?),
        CandidateAction::Delete { id } => {
            to_json(&school_contest_api::delete_candidate(persistence, id)?)
        }
    }
}

fn run_result(persistence: &mut Persistence, action: ResultAction) -> Result<Value, CliError> {
    match action {
        ResultAction::Submit {
            contest_id,
            candidate_id,
            score,
        } => to_json(&school_contest_api::submit_result(
            persistence,
            SubmitResultRequest {
                contest_id,
                candidate_id,
                score,
            },
        )?),
        ResultAction::Update { id, score } => to_json(&school_contest_api::update_result(
            persistence,
            UpdateResultRequest {
                result_id: id,
                score,
            },
        )?),
        ResultAction::List { contest_id } => {
            to_json(&school_contest_api::list_results(persistence, contest_id)?)
        }
        ResultAction::Delete { id } => {
            to_json(&school_contest_api::delete_result(persistence, id)?)
        }
    }
}

/// Runs one command against the store and returns its JSON response.
fn dispatch(persistence: &mut Persistence, command: EntityCommand) -> Result<Value, CliError> {
    match command {
        EntityCommand::School { action } => run_school(persistence, action),
        EntityCommand::Group { action } => run_group(persistence, action),
        EntityCommand::Village { action } => run_village(persistence, action),
        EntityCommand::Contest { action } => run_contest(persistence, action),
        EntityCommand::Candidate { action } => run_candidate(persistence, action),
        EntityCommand::Results { action } => run_result(persistence, action),
        EntityCommand::Aggregate { kind, id } => {
            to_json(&school_contest_api::get_aggregate(persistence, id, kind)?)
        }
        EntityCommand::Describe { entity } => {
            to_json(&school_contest_api::describe_entity(&entity)?)
        }
    }
}

fn open(args: &Args) -> Result<Persistence, CliError> {
    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path.display());
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };
    Ok(persistence)
}

fn run(args: Args) -> Result<Value, CliError> {
    let mut persistence: Persistence = open(&args)?;
    dispatch(&mut persistence, args.command)
}

fn main() -> ExitCode {
    let args: Args = Args::parse();

    // Logs go to stderr so stdout carries only JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(args) {
        Ok(output) => {
            println!("{output:#}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests;
