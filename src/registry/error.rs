//! Error types for registry operations.

use thiserror::Error;

/// Errors that can occur during registry operations.
///
/// Lookup misses propagate unmodified up to the caller boundary (the console),
/// which presents them and continues the interaction loop. The worker
/// maintenance rejection is *not* an error — see
/// [`MaintenanceOutcome`](crate::registry::MaintenanceOutcome).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RegistryError {
    /// No resource is registered under the given id.
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    /// No project is registered under the given id.
    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    /// An add operation was issued with an id that is already present.
    /// Adds reject rather than overwrite; the existing entry is untouched.
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// The operation is not applicable to the target entity.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// The registry actor's channel is closed.
    #[error("Registry actor closed")]
    ActorClosed,

    /// The registry actor dropped the response channel.
    #[error("Registry actor dropped response channel")]
    ActorDropped,
}
