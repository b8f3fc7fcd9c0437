// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use school_contest_api::ApiError;
use school_contest_persistence::PersistenceError;
use thiserror::Error;

/// Errors reported by the command-line front end.
#[derive(Debug, Error)]
pub enum CliError {
    /// The request was refused or failed.
    #[error("{kind}: {0}", kind = .0.kind())]
    Api(#[from] ApiError),

    /// The database could not be opened.
    #[error("Failed to open database: {0}")]
    Database(#[from] PersistenceError),

    /// The response could not be written as JSON.
    #[error("Failed to encode output: {0}")]
    Output(#[from] serde_json::Error),
}
