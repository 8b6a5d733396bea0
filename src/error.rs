//! Error handling types and utilities.

use thiserror::Error;

/// A specialized Result type for retrieval operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Failures surfaced by the retrieval core.
///
/// All variants are deterministic, synchronous failures; nothing here is
/// transient, so no retry policy applies. The calling layer decides the
/// user-visible presentation (e.g. mapping [`SearchError::NotInitialized`]
/// to a "service warming up" message).
#[derive(Debug, Error)]
pub enum SearchError {
    /// Ranking was attempted against an empty document store. This is a
    /// distinct failure rather than an empty result set, so callers can
    /// tell "index not loaded yet" apart from "no matches".
    #[error("search index not initialized: no documents loaded")]
    NotInitialized,

    /// A loaded document carried a `source_type` tag outside the four known
    /// variants. Rejected at load time; partially-typed documents are never
    /// admitted into the store.
    #[error("invalid source type '{0}'")]
    InvalidSourceType(String),

    /// A caller-supplied argument was out of range (e.g. `max_results == 0`).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Reading or writing the document cache failed.
    #[error("document cache I/O failed")]
    Io(#[from] std::io::Error),

    /// The document cache contained malformed JSON.
    #[error("document cache parse failed")]
    Json(#[from] serde_json::Error),
}
