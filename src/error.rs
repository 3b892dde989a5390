//! Error types for logkv
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using StoreError
pub type Result<T> = std::result::Result<T, StoreError>;

/// Unified error type for logkv operations
///
/// Note: an absent key is NOT an error anywhere in this crate. `get`
/// returns `Option` and `delete` of a missing key is a logged no-op.
#[derive(Debug, Error)]
pub enum StoreError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Codec Errors
    // -------------------------------------------------------------------------
    #[error("record encode failed: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("corrupt record at log line {line}: {source}")]
    Decode {
        /// 1-based line number of the frame that failed to parse
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}
