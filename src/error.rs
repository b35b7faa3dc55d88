//! Error types shared across the auth and record-store seams

use thiserror::Error;

/// Failures from the session provider
#[derive(Debug, Error)]
pub enum AuthError {
    /// The provider rejected the call; carries its message verbatim
    #[error("{0}")]
    Provider(String),
    /// The host page never loaded the cloud bridge
    #[error("authentication is unavailable: cloud bridge not loaded")]
    BridgeUnavailable,
}

/// Failures from either record-store backend
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("failed to encode records: {0}")]
    Encode(String),
    #[error("failed to decode records: {0}")]
    Decode(String),
    #[error("browser storage is unavailable")]
    StorageUnavailable,
    #[error("no record with id {0}")]
    UnknownId(String),
    #[error("store backend error: {0}")]
    Backend(String),
}
