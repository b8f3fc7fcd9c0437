// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use clap::Parser;
use school_contest_api::{AggregateKind, ErrorKind};
use school_contest_persistence::Persistence;
use serde_json::Value;

use crate::args::{Args, ContestAction, EntityCommand, ResultAction, SchoolAction};
use crate::dispatch;
use crate::error::CliError;

fn parse(argv: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("school-contest").chain(argv.iter().copied())).unwrap()
}

fn exec(persistence: &mut Persistence, argv: &[&str]) -> Result<Value, CliError> {
    dispatch(persistence, parse(argv).command)
}

#[test]
fn test_database_defaults_to_in_memory() {
    let args: Args = parse(&["school", "list"]);

    assert!(args.database.is_none());
    assert_eq!(
        args.command,
        EntityCommand::School {
            action: SchoolAction::List
        }
    );
}

#[test]
fn test_parses_contest_type_flag() {
    let args: Args = parse(&[
        "--database",
        "contests.db",
        "contest",
        "create",
        "--title",
        "Geography",
        "--type",
        "female",
        "--date",
        "2026-10-01",
    ]);

    assert_eq!(
        args.database.as_deref(),
        Some(std::path::Path::new("contests.db"))
    );
    assert_eq!(
        args.command,
        EntityCommand::Contest {
            action: ContestAction::Create {
                title: String::from("Geography"),
                contest_type: Some(String::from("female")),
                date: String::from("2026-10-01"),
                max_score: None,
            }
        }
    );
}

#[test]
fn test_parses_result_and_aggregate_commands() {
    let submit: Args = parse(&[
        "result",
        "submit",
        "--contest-id",
        "2",
        "--candidate-id",
        "7",
        "--score",
        "81.5",
    ]);
    let aggregate: Args = parse(&["aggregate", "candidates-per-school", "3"]);

    assert_eq!(
        submit.command,
        EntityCommand::Results {
            action: ResultAction::Submit {
                contest_id: 2,
                candidate_id: 7,
                score: 81.5,
            }
        }
    );
    assert_eq!(
        aggregate.command,
        EntityCommand::Aggregate {
            kind: AggregateKind::CandidatesPerSchool,
            id: 3,
        }
    );
}

#[test]
fn test_unknown_aggregate_is_a_usage_error() {
    let parsed: Result<Args, clap::Error> =
        Args::try_parse_from(["school-contest", "aggregate", "medals", "1"]);

    assert!(parsed.is_err());
}

#[test]
fn test_describe_prints_registry_entry() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let described: Value = exec(&mut persistence, &["describe", "candidate"]).unwrap();

    assert_eq!(described["entity"], "candidate");
    assert_eq!(described["search_fields"][0], "first_name");
    assert_eq!(described["search_fields"][1], "last_name");
}

#[test]
fn test_commands_share_one_store() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    exec(&mut persistence, &["school", "create", "--name", "School No. 7"]).unwrap();
    exec(
        &mut persistence,
        &["group", "create", "--school-id", "1", "--year", "3", "--letter", "b"],
    )
    .unwrap();
    exec(&mut persistence, &["village", "create", "--name", "Olmazor"]).unwrap();
    exec(
        &mut persistence,
        &[
            "candidate",
            "register",
            "--first-name",
            "Shahzoda",
            "--last-name",
            "Ergasheva",
            "--gender",
            "female",
            "--group-id",
            "1",
            "--village-id",
            "1",
        ],
    )
    .unwrap();
    exec(
        &mut persistence,
        &[
            "contest", "create", "--title", "Reading", "--date", "2026-10-01", "--max-score",
            "40",
        ],
    )
    .unwrap();
    let submitted: Value = exec(
        &mut persistence,
        &[
            "result",
            "submit",
            "--contest-id",
            "1",
            "--candidate-id",
            "1",
            "--score",
            "38",
        ],
    )
    .unwrap();
    let ranking: Value = exec(&mut persistence, &["contest", "ranking", "1"]).unwrap();
    let count: Value = exec(
        &mut persistence,
        &["aggregate", "candidates_per_school", "1"],
    )
    .unwrap();

    assert_eq!(submitted["result_id"], 1);
    assert_eq!(ranking["entries"][0]["candidate_name"], "Shahzoda Ergasheva");
    assert_eq!(ranking["entries"][0]["position"], 1);
    assert_eq!(count["count"], 1);
}

#[test]
fn test_rejections_surface_as_api_errors() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    exec(
        &mut persistence,
        &[
            "contest", "create", "--title", "Reading", "--date", "2026-10-01", "--max-score",
            "40",
        ],
    )
    .unwrap();

    let err: CliError = exec(
        &mut persistence,
        &[
            "result",
            "submit",
            "--contest-id",
            "1",
            "--candidate-id",
            "9",
            "--score",
            "10",
        ],
    )
    .unwrap_err();

    match err {
        CliError::Api(api_err) => assert_eq!(api_err.kind(), ErrorKind::NotFound),
        other => panic!("expected an API error, got {other}"),
    }
}
