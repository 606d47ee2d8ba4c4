//! Error types and the public status taxonomy

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for conveyor operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in conveyor
///
/// Only the configuration layer is fallible today. Engine lifecycle and
/// processing operations never return these.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file could not be found
    #[error("configuration file not found: {path}")]
    ConfigNotFound {
        /// Path that was searched
        path: String,
    },

    /// Failed to parse YAML configuration
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse outcome taxonomy exposed to external tooling.
///
/// Declared as part of the public contract; only [`Status::Success`] is
/// produced today (by [`crate::initialize`]). The non-success variants are
/// reserved for future operations and callers should not assume any current
/// operation yields them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Operation completed
    Success,
    /// A required resource was missing
    NotFound,
    /// Operation exceeded its time budget
    Timeout,
    /// Unclassified failure
    Unknown,
}

impl Status {
    /// Integer code used at process boundaries (0 on success).
    pub fn code(self) -> i32 {
        match self {
            Status::Success => 0,
            Status::NotFound => 1,
            Status::Timeout => 2,
            Status::Unknown => 3,
        }
    }

    /// Whether this status represents success
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }
}
