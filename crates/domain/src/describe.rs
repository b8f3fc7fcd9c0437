// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Presentation metadata for entities.
//!
//! Every entity type registers itself explicitly by implementing
//! [`Describable`]. List screens and search boxes outside this workspace read
//! labels, search fields and filters from here instead of inspecting types.

use crate::types::{Candidate, Contest, ContestResult, Group, School, Village};
use serde::{Deserialize, Serialize};

/// The entity types known to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    School,
    Group,
    Village,
    Contest,
    Candidate,
    Result,
}

impl EntityKind {
    /// Every registered entity kind, in display order.
    pub const ALL: [Self; 6] = [
        Self::School,
        Self::Group,
        Self::Village,
        Self::Contest,
        Self::Candidate,
        Self::Result,
    ];

    /// Returns the lowercase entity name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::School => "school",
            Self::Group => "group",
            Self::Village => "village",
            Self::Contest => "contest",
            Self::Candidate => "candidate",
            Self::Result => "result",
        }
    }

    /// Columns shown in list views.
    #[must_use]
    pub const fn list_columns(&self) -> &'static [&'static str] {
        match self {
            Self::School | Self::Village => &["name"],
            Self::Group => &["school", "year", "letter"],
            Self::Contest => &["title", "contest_type"],
            Self::Candidate => &["first_name", "last_name", "gender", "group"],
            Self::Result => &["contest", "candidate", "score"],
        }
    }

    /// Fields list views may filter on.
    #[must_use]
    pub const fn list_filters(&self) -> &'static [&'static str] {
        match self {
            Self::Group => &["school", "year"],
            Self::Contest => &["contest_type"],
            Self::Candidate => &["gender", "school", "year"],
            Self::School | Self::Village | Self::Result => &[],
        }
    }

    /// Fields matched by free-text search.
    #[must_use]
    pub const fn search_fields(&self) -> &'static [&'static str] {
        match self {
            Self::Candidate => &["first_name", "last_name"],
            Self::School | Self::Group | Self::Village | Self::Contest | Self::Result => &[],
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Capability implemented by every entity shown to operators.
pub trait Describable {
    /// The registry entry for this type.
    const KIND: EntityKind;

    /// A short human-readable label for one record.
    fn display_label(&self) -> String;

    /// The values of [`EntityKind::search_fields`], in the same order.
    fn search_values(&self) -> Vec<&str>;

    /// Case-insensitive substring match of `term` against the search values.
    ///
    /// A blank term matches every record.
    fn matches_search(&self, term: &str) -> bool {
        let needle: String = term.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.search_values()
            .iter()
            .any(|value| value.to_lowercase().contains(&needle))
    }
}

impl Describable for School {
    const KIND: EntityKind = EntityKind::School;

    fn display_label(&self) -> String {
        self.name.clone()
    }

    fn search_values(&self) -> Vec<&str> {
        Vec::new()
    }
}

impl Describable for Group {
    const KIND: EntityKind = EntityKind::Group;

    fn display_label(&self) -> String {
        self.code()
    }

    fn search_values(&self) -> Vec<&str> {
        Vec::new()
    }
}

impl Describable for Village {
    const KIND: EntityKind = EntityKind::Village;

    fn display_label(&self) -> String {
        self.name.clone()
    }

    fn search_values(&self) -> Vec<&str> {
        Vec::new()
    }
}

impl Describable for Contest {
    const KIND: EntityKind = EntityKind::Contest;

    fn display_label(&self) -> String {
        format!("{} ({})", self.title, self.contest_type.label())
    }

    fn search_values(&self) -> Vec<&str> {
        Vec::new()
    }
}

impl Describable for Candidate {
    const KIND: EntityKind = EntityKind::Candidate;

    fn display_label(&self) -> String {
        self.full_name()
    }

    fn search_values(&self) -> Vec<&str> {
        vec![self.first_name.as_str(), self.last_name.as_str()]
    }
}

impl Describable for ContestResult {
    const KIND: EntityKind = EntityKind::Result;

    fn display_label(&self) -> String {
        format!(
            "contest {} / candidate {}: {}",
            self.contest_id, self.candidate_id, self.score
        )
    }

    fn search_values(&self) -> Vec<&str> {
        Vec::new()
    }
}
