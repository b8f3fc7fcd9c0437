// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Contest ranking.
//!
//! Results are ordered by score, highest first. Equal scores keep
//! submission order (ascending `result_id`) and share a position, with the
//! following position skipped (1, 2, 2, 4).

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A stored result joined with its candidate's name, as read from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    /// The result identifier; lower means submitted earlier.
    pub result_id: i64,
    /// The scored candidate.
    pub candidate_id: i64,
    /// The candidate's first name.
    pub first_name: String,
    /// The candidate's last name.
    pub last_name: String,
    /// The awarded score.
    pub score: f64,
}

/// One line of a contest ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    /// 1-based competition position.
    pub position: usize,
    /// The result identifier.
    pub result_id: i64,
    /// The ranked candidate.
    pub candidate_id: i64,
    /// `"First Last"`.
    pub candidate_name: String,
    /// The awarded score.
    pub score: f64,
}

/// The ordered results of one contest.
///
/// A `Ranking` is built fresh from the store on every request and may be
/// iterated any number of times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    contest_id: i64,
    entries: Vec<RankingEntry>,
}

fn rank_order(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.result_id.cmp(&b.result_id))
}

impl Ranking {
    /// Orders the scored candidates of a contest and assigns positions.
    ///
    /// The input order does not matter.
    #[must_use]
    pub fn new(contest_id: i64, mut scored: Vec<ScoredCandidate>) -> Self {
        scored.sort_by(rank_order);

        let mut entries: Vec<RankingEntry> = Vec::with_capacity(scored.len());
        let mut previous: Option<(f64, usize)> = None;

        for (index, item) in scored.into_iter().enumerate() {
            let position: usize = match previous {
                Some((score, position)) if score.total_cmp(&item.score) == Ordering::Equal => {
                    position
                }
                _ => index + 1,
            };
            previous = Some((item.score, position));

            entries.push(RankingEntry {
                position,
                result_id: item.result_id,
                candidate_id: item.candidate_id,
                candidate_name: format!("{} {}", item.first_name, item.last_name),
                score: item.score,
            });
        }

        Self {
            contest_id,
            entries,
        }
    }

    /// Returns the ranked contest.
    #[must_use]
    pub const fn contest_id(&self) -> i64 {
        self.contest_id
    }

    /// Returns an iterator over the entries, best first.
    pub fn iter(&self) -> std::slice::Iter<'_, RankingEntry> {
        self.entries.iter()
    }

    /// Returns the entries as a slice, best first.
    #[must_use]
    pub fn entries(&self) -> &[RankingEntry] {
        &self.entries
    }

    /// Returns the number of ranked results.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the contest has no results yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the ranking, returning its entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<RankingEntry> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a Ranking {
    type Item = &'a RankingEntry;
    type IntoIter = std::slice::Iter<'a, RankingEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
