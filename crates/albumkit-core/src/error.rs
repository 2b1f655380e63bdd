//! Error handling for AlbumKit.
//!
//! The engine absorbs invalid gestures silently by design; these errors
//! exist for the document boundary, where externally supplied data
//! (a loaded design, a preset id) enters the engine and must be
//! validated before it is trusted.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Design document error type.
///
/// Raised when an externally supplied document or payload cannot be
/// accepted as-is.
#[derive(Error, Debug, Clone)]
pub enum DesignError {
    /// The document could not be parsed.
    #[error("Invalid design document: {reason}")]
    InvalidDocument {
        /// What made the document unreadable.
        reason: String,
    },

    /// A print-spec preset id failed to resolve.
    #[error("Unknown print spec preset: {id}")]
    UnknownPreset {
        /// The preset id that failed to resolve.
        id: String,
    },
}

/// Convenience result alias for boundary operations.
pub type Result<T> = std::result::Result<T, DesignError>;
