// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use school_contest_domain::{Ranking, ScoredCandidate};
use tracing::debug;

use crate::diesel_schema::{candidates, results};
use crate::error::PersistenceError;
use crate::queries::catalog::get_contest;

/// Builds the ranking of a contest from its stored results.
///
/// The ranking is read fresh on every call.
///
/// # Errors
///
/// Returns `NotFound` for an unknown contest, or an error if the query fails.
pub fn get_ranking(
    conn: &mut SqliteConnection,
    contest_id: i64,
) -> Result<Ranking, PersistenceError> {
    get_contest(conn, contest_id)?;

    let rows: Vec<(i64, i64, String, String, f64)> = results::table
        .inner_join(candidates::table)
        .filter(results::contest_id.eq(contest_id))
        .order((results::score.desc(), results::result_id.asc()))
        .select((
            results::result_id,
            results::candidate_id,
            candidates::first_name,
            candidates::last_name,
            results::score,
        ))
        .load(conn)?;

    debug!(contest_id, count = rows.len(), "Loaded scored candidates");

    let scored: Vec<ScoredCandidate> = rows
        .into_iter()
        .map(
            |(result_id, candidate_id, first_name, last_name, score)| ScoredCandidate {
                result_id,
                candidate_id,
                first_name,
                last_name,
                score,
            },
        )
        .collect();

    Ok(Ranking::new(contest_id, scored))
}
