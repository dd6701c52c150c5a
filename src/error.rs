//! Server error types

use thiserror::Error;

/// Main server error type
#[derive(Debug, Error)]
pub enum ServerError {
    // ========== Hierarchy Errors ==========
    /// Component not found (surfaced to the web layer as a 404)
    #[error("component not found: {0}")]
    ComponentNotFound(i64),

    /// Stored ancestry path failed to parse (data-integrity defect, 500)
    #[error("malformed ancestry path: {path}")]
    MalformedAncestry { path: String },

    /// Descendant's parent chain is incomplete (data-integrity defect, 500)
    #[error("component {component} references missing parent {parent}")]
    OrphanedNode { component: i64, parent: i64 },

    // ========== Validation Errors ==========
    /// Invalid argument
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    // ========== Storage Errors ==========
    /// Storage operation failed (NOT a missing row - that becomes ComponentNotFound)
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    // ========== Server Errors ==========
    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Storage-specific errors
///
/// Produced by `ComponentStore` implementations; the core only passes them
/// through.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Database connection failed
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Query execution failed
    #[error("query failed: {0}")]
    QueryFailed(String),
}

/// Server result type alias
pub type ServerResult<T> = Result<T, ServerError>;

impl ServerError {
    /// Get error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            ServerError::ComponentNotFound(_) => "COMPONENT_NOT_FOUND",
            ServerError::MalformedAncestry { .. } => "MALFORMED_ANCESTRY",
            ServerError::OrphanedNode { .. } => "ORPHANED_NODE",
            ServerError::InvalidArgument(_) => "INVALID_ARGUMENT",
            ServerError::Storage(_) => "STORAGE_ERROR",
            ServerError::Internal(_) => "INTERNAL_ERROR",
            ServerError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Whether the error is recoverable (client can retry)
    ///
    /// Missing rows and broken ancestry are permanent until the data is
    /// fixed; only a failed storage connection is worth retrying.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ServerError::Storage(StorageError::ConnectionFailed(_))
        )
    }
}
