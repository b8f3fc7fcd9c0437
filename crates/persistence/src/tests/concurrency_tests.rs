// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::PathBuf;
use std::sync::{Arc, Barrier};
use std::thread::{self, JoinHandle};

use school_contest::CoreError;
use school_contest_domain::{ContestKind, ContestResult, DomainError, Gender};
use tempfile::TempDir;

use crate::tests::{
    create_contest, create_group, create_school, create_village, register_candidate, submit,
};
use crate::{CommitOutcome, Persistence, PersistenceError};

const WRITERS: usize = 8;

struct FileStore {
    _dir: TempDir,
    path: PathBuf,
    contest_id: i64,
    candidate_id: i64,
}

fn create_file_store() -> FileStore {
    let dir: TempDir = TempDir::new().unwrap();
    let path: PathBuf = dir.path().join("contest.db");

    let mut persistence: Persistence = Persistence::new_with_file(&path).unwrap();
    let school_id: i64 = create_school(&mut persistence, "School No. 4");
    let group_id: i64 = create_group(&mut persistence, school_id, 10, "C");
    let village_id: i64 = create_village(&mut persistence, "Qoraqamish");
    let candidate_id: i64 =
        register_candidate(&mut persistence, "Bekzod", Gender::Male, group_id, village_id);
    let contest_id: i64 = create_contest(&mut persistence, "Physics", ContestKind::All, 100);

    FileStore {
        _dir: dir,
        path,
        contest_id,
        candidate_id,
    }
}

#[test]
fn test_file_store_survives_reopen() {
    let store: FileStore = create_file_store();

    let mut reopened: Persistence = Persistence::new_with_file(&store.path).unwrap();

    assert!(reopened.verify_foreign_key_enforcement().is_ok());
    assert_eq!(reopened.list_schools().unwrap().len(), 1);
    assert_eq!(
        reopened.get_contest(store.contest_id).unwrap().title,
        "Physics"
    );
}

#[test]
fn test_concurrent_submissions_for_one_pair_store_one_result() {
    let store: FileStore = create_file_store();
    let barrier: Arc<Barrier> = Arc::new(Barrier::new(WRITERS));

    // Handles are opened up front so migrations do not race each other
    let writers: Vec<Persistence> = (0..WRITERS)
        .map(|_| Persistence::new_with_file(&store.path).unwrap())
        .collect();

    let handles: Vec<JoinHandle<Result<CommitOutcome, PersistenceError>>> = writers
        .into_iter()
        .enumerate()
        .map(|(index, mut persistence)| {
            let barrier: Arc<Barrier> = Arc::clone(&barrier);
            let contest_id: i64 = store.contest_id;
            let candidate_id: i64 = store.candidate_id;
            let score: f64 = f64::from(u32::try_from(index).unwrap()) + 50.0;
            thread::spawn(move || {
                barrier.wait();
                submit(&mut persistence, contest_id, candidate_id, score)
            })
        })
        .collect();

    let outcomes: Vec<Result<CommitOutcome, PersistenceError>> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    let accepted: usize = outcomes.iter().filter(|outcome| outcome.is_ok()).count();
    let duplicates: usize = outcomes
        .iter()
        .filter(|outcome| {
            matches!(
                outcome,
                Err(PersistenceError::Rejected(CoreError::DomainViolation(
                    DomainError::DuplicateResult { .. }
                )))
            )
        })
        .count();

    let mut reader: Persistence = Persistence::new_with_file(&store.path).unwrap();
    let stored: Vec<ContestResult> = reader.list_results(Some(store.contest_id)).unwrap();

    assert_eq!(accepted, 1);
    assert_eq!(duplicates, WRITERS - 1);
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].candidate_id, store.candidate_id);
}
