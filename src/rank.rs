//! Ranking orchestration: expansion, scoring, sorting and truncation over
//! the document store.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;

use crate::document::{Document, SearchResult, SourceType};
use crate::error::{Result, SearchError};
use crate::expand::expand;
use crate::score;
use crate::store::DocumentStore;

/// Content preview length for aggregate ranking results.
const RESULT_CONTENT_CHARS: usize = 500;
/// Preview length for the documentation-only search path.
const DOC_RESULT_CONTENT_CHARS: usize = 300;
/// Preview length for the issue-only search path.
const ISSUE_RESULT_CONTENT_CHARS: usize = 400;

/// Stateless per call; each operation reads one store snapshot and scans it
/// linearly. Safe to share across concurrent request handlers.
pub struct Ranker {
    store: Arc<DocumentStore>,
}

impl Ranker {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }

    /// Ranks the whole store against a free-text query.
    ///
    /// Results are sorted by relevance descending; equal scores keep their
    /// store order (stable sort), and the list is cut to `max_results`.
    /// Fewer matches than requested is not an error. Fails with
    /// [`SearchError::InvalidArgument`] for `max_results == 0` and
    /// [`SearchError::NotInitialized`] when no documents are loaded.
    pub fn rank(&self, query: &str, max_results: usize) -> Result<Vec<SearchResult>> {
        let snapshot = self.checked_snapshot(max_results)?;
        let start = Instant::now();

        let terms = expand(query);
        let mut results: Vec<SearchResult> = snapshot
            .iter()
            .filter_map(|doc| {
                score::score(doc, &terms)
                    .map(|s| SearchResult::from_document(doc, s, RESULT_CONTENT_CHARS))
            })
            .collect();

        sort_by_relevance(&mut results);
        results.truncate(max_results);

        tracing::debug!(
            "ranked {} of {} documents for '{}' ({} terms) in {:?}",
            results.len(),
            snapshot.len(),
            query,
            terms.len(),
            start.elapsed()
        );
        Ok(results)
    }

    /// Ranks across all sources, then keeps only `source_type`.
    ///
    /// Oversamples the aggregate ranking by 3x before filtering, as the
    /// original service did; when one source dominates the top of the
    /// ranking this can return fewer than `limit` even if more matches
    /// exist further down.
    pub fn rank_by_source(
        &self,
        query: &str,
        source_type: SourceType,
        limit: usize,
    ) -> Result<Vec<SearchResult>> {
        let mut results = self.rank(query, limit.saturating_mul(3))?;
        results.retain(|r| r.source_type == source_type);
        results.truncate(limit);
        Ok(results)
    }

    /// Documentation-only search with the whole-query scorer.
    pub fn search_documentation(&self, query: &str, limit: usize) -> Result<Vec<SearchResult>> {
        let snapshot = self.checked_snapshot(limit)?;
        let needle = query.to_lowercase();

        let mut results: Vec<SearchResult> = snapshot
            .iter()
            .filter(|doc| doc.source_type == SourceType::Documentation)
            .filter_map(|doc| {
                score::score_documentation(doc, &needle)
                    .map(|s| SearchResult::from_document(doc, s, DOC_RESULT_CONTENT_CHARS))
            })
            .collect();

        sort_by_relevance(&mut results);
        results.truncate(limit);
        Ok(results)
    }

    /// Issue-only search with the whole-query scorer and state boosts.
    pub fn search_issues(&self, query: &str, limit: usize) -> Result<Vec<SearchResult>> {
        let snapshot = self.checked_snapshot(limit)?;
        let needle = query.to_lowercase();
        let now = Utc::now();

        let mut results: Vec<SearchResult> = snapshot
            .iter()
            .filter(|doc| doc.source_type == SourceType::GithubIssue)
            .filter_map(|doc| {
                score::score_issue(doc, &needle, now)
                    .map(|s| SearchResult::from_document(doc, s, ISSUE_RESULT_CONTENT_CHARS))
            })
            .collect();

        sort_by_relevance(&mut results);
        results.truncate(limit);
        Ok(results)
    }

    /// Validates the request bound and grabs a non-empty snapshot.
    ///
    /// An empty store is a hard error: a silent empty result set would be
    /// indistinguishable from "no matches".
    fn checked_snapshot(&self, max_results: usize) -> Result<Arc<Vec<Document>>> {
        if max_results == 0 {
            return Err(SearchError::InvalidArgument(
                "max_results must be at least 1".to_string(),
            ));
        }
        let snapshot = self.store.snapshot();
        if snapshot.is_empty() {
            return Err(SearchError::NotInitialized);
        }
        Ok(snapshot)
    }
}

/// Stable descending sort; ties retain store-iteration order.
fn sort_by_relevance(results: &mut [SearchResult]) {
    results.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));
}
