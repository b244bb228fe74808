//! Shell error handling
//!
//! The generation core has no recoverable failure path: every input is
//! a pre-validated catalog value, and arithmetic edge cases are
//! asserted rather than surfaced. Errors exist only at the boundary:
//! loading an external roster and writing the dataset files.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FabricError {
    #[error("failed to read roster {path}")]
    RosterRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("roster {path} is not valid JSON")]
    RosterParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("roster {0} contains no projects")]
    EmptyRoster(PathBuf),

    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[error("serialization error")]
    Json(#[from] serde_json::Error),
}
