//! Error types for Roster
//!
//! Provides a unified error type for all store, registry and persistence operations.

use thiserror::Error;

/// Result type alias using RosterError
pub type Result<T> = std::result::Result<T, RosterError>;

/// Unified error type for Roster operations
#[derive(Debug, Error)]
pub enum RosterError {
    // -------------------------------------------------------------------------
    // Index Errors
    // -------------------------------------------------------------------------
    #[error("Duplicate key: employee {0} already exists")]
    DuplicateKey(u64),

    #[error("Employee {0} not found")]
    NotFound(u64),

    #[error("Invalid iterator state: {0}")]
    InvalidIteratorState(&'static str),

    // -------------------------------------------------------------------------
    // Persistence Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("Unknown record kind: {0}")]
    UnknownKind(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl RosterError {
    /// True for failures of a save or restore call (I/O, encoding, or a bad line)
    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            RosterError::Io(_)
                | RosterError::MalformedRecord { .. }
                | RosterError::UnknownKind(_)
                | RosterError::Serialization(_)
        )
    }

    /// Attach a line number to a parse failure raised without one
    pub(crate) fn at_line(self, line: usize) -> Self {
        match self {
            RosterError::MalformedRecord { reason, .. } => {
                RosterError::MalformedRecord { line, reason }
            }
            other => other,
        }
    }
}

impl From<serde_json::Error> for RosterError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            return RosterError::Io(err.into());
        }
        RosterError::MalformedRecord {
            line: 0,
            reason: err.to_string(),
        }
    }
}
