//! Error types for fleet coordination

use thiserror::Error;

use crate::{AssignmentStatus, EntityKind, Role};

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Could not resolve a data directory for this platform")]
    NoDataDir,
}

/// Snapshot persistence errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Lifecycle engine errors
///
/// Every engine operation returns either a success value or exactly one of
/// these; the entity store is never left partially mutated.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    #[error("Job {0} is not accepting applications")]
    Capacity(String),

    #[error("Assignment cannot move from {from} to {to}")]
    InvalidTransition {
        from: AssignmentStatus,
        to: AssignmentStatus,
    },

    #[error("Cannot remove protected account: {0}")]
    Protected(String),
}

impl EngineError {
    /// Shorthand for a not-found error
    pub fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        EngineError::NotFound {
            kind,
            id: id.into(),
        }
    }
}

/// Session and role-gate errors
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("No credentials supplied")]
    MissingCredentials,

    #[error("Operation requires the {0} role")]
    Forbidden(Role),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
