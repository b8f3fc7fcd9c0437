// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations.
//!
//! ## Module Organization
//!
//! - `write`: The single write path: load context, decide, commit
//! - `records`: Row inserts and updates for committed transitions
//! - `deletes`: Deletions with protect and cascade rules
//!
//! Callers wrap each operation in an immediate transaction; nothing here
//! opens one itself.

pub mod deletes;
pub mod records;
pub mod write;

pub use write::{CommitOutcome, execute_command};
