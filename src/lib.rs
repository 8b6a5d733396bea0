//! Retrieval-and-ranking core for a bilingual Xinference Q&A assistant.
//!
//! Turns a free-text question (English or Chinese) into a ranked list of
//! relevant passages drawn from scraped documentation pages, GitHub issue
//! records, source-code hits and FAQ entries. The calling layer forwards
//! the ranked passages to an external LLM collaborator for answer
//! synthesis; endpoints, accounts and scraping all live outside this crate.
//!
//! Data flow:
//!
//! ```text
//! raw query ── expand ──> term set ── score per document ──> matches
//!                                          │
//!                 DocumentStore snapshot ──┘
//!                                          │
//!            stable sort by relevance, truncate ──> Vec<SearchResult>
//! ```
//!
//! Module overview:
//!
//! - [`document`] - `Document`, `SourceType`, typed metadata, `SearchResult`
//! - [`store`] - in-memory snapshot holder with atomic wholesale replacement
//! - [`expand`] - keyword expansion with the bilingual synonym table
//! - [`score`] - bounded relevance heuristics (aggregate and per-source)
//! - [`rank`] - orchestration: scan, filter, sort, truncate
//! - [`loader`] - `DocumentLoader` seam and the JSON cache implementation
//! - [`popular`] - frequency-ranked question analytics
//! - [`service`] - `QaSearchService` facade driving the whole lifecycle
//! - [`error`] - the `SearchError` taxonomy
//!
//! The matcher is deliberately a linear scan over lowercased substrings,
//! with no inverted index, stemming or embeddings. At the corpus sizes involved
//! (a few hundred pages and issues) that is fast, predictable and easy to
//! reason about.

pub mod document;
pub mod error;
pub mod expand;
pub mod loader;
pub mod popular;
pub mod rank;
pub mod score;
pub mod service;
pub mod store;
pub mod tracing;

pub use document::{Document, DocumentMeta, SearchResult, SourceType};
pub use error::{Result, SearchError};
pub use loader::{DocumentLoader, JsonCacheLoader, StaticLoader};
pub use rank::Ranker;
pub use service::QaSearchService;
pub use store::DocumentStore;
