// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.
//!
//! ## Module Organization
//!
//! - `catalog`: Single-record lookups and natural-key existence checks
//! - `listing`: Filtered lists of records
//! - `aggregates`: Distinct counts over the entity relationships
//! - `ranking`: Contest rankings
//!
//! Nothing here writes. Every function reads the store's current state.

pub mod aggregates;
pub mod catalog;
pub mod listing;
pub mod ranking;
