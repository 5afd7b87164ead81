//! Error types for store operations.

use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The collection lock was poisoned by a panicking writer.
    #[error("store lock poisoned: {0}")]
    LockPoisoned(String),

    /// A policy name could not be parsed.
    #[error("unknown {kind} policy: {value}")]
    UnknownPolicy { kind: &'static str, value: String },
}

/// Convenience type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
