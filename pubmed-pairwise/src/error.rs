use std::io;
use std::path::PathBuf;
use std::result;

use thiserror::Error;

/// Error types for pairwise query generation
///
/// Pairing, formatting and joining never fail. Errors only come from
/// reading term lists and search plans.
#[derive(Error, Debug)]
pub enum PairwiseError {
    /// Term list file missing or unreadable
    #[error("Failed to read term list {}: {source}", .path.display())]
    TermFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Term list not registered in an in-memory source
    #[error("Unknown term list: {}", .path.display())]
    UnknownTermList { path: PathBuf },

    /// Search plan file missing or unreadable
    #[error("Failed to read search plan {}: {source}", .path.display())]
    PlanFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Search plan YAML is malformed
    #[error("Invalid search plan: {0}")]
    PlanParse(#[from] serde_yaml::Error),
}

pub type Result<T> = result::Result<T, PairwiseError>;
