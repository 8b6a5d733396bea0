//! Service facade: wires the store, ranker, loader seam and question
//! analytics into the lifecycle the calling layer drives.
//!
//! The surrounding endpoint layer clamps `max_results` to [1, 50] before it
//! gets here and hands the returned source list to the external
//! answer-generation collaborator; neither concern lives in this crate.

use std::sync::{Arc, Mutex};

use crate::document::{SearchResult, SourceType};
use crate::error::Result;
use crate::loader::DocumentLoader;
use crate::popular::{PopularQuestion, PopularQuestions};
use crate::rank::Ranker;
use crate::store::DocumentStore;

pub struct QaSearchService {
    store: Arc<DocumentStore>,
    ranker: Ranker,
    popular: Mutex<PopularQuestions>,
}

impl QaSearchService {
    pub fn new() -> Self {
        let store = Arc::new(DocumentStore::new());
        let ranker = Ranker::new(Arc::clone(&store));
        Self {
            store,
            ranker,
            popular: Mutex::new(PopularQuestions::with_defaults()),
        }
    }

    /// Loads the initial document set. Called once at service startup.
    pub async fn initialize(&self, loader: &dyn DocumentLoader) -> Result<()> {
        tracing::info!("initializing search service");
        let documents = loader.load().await?;
        self.store.load(documents);
        Ok(())
    }

    /// Wholesale index refresh from a fresh scrape/cache run. In-flight
    /// searches keep the snapshot they started with.
    pub async fn refresh_index(&self, loader: &dyn DocumentLoader) -> Result<()> {
        tracing::info!("refreshing search index");
        let documents = loader.load().await?;
        self.store.load(documents);
        Ok(())
    }

    /// Ranks all sources for a question; the caller forwards the result list
    /// to answer generation.
    pub fn search_all_sources(
        &self,
        question: &str,
        max_results: usize,
    ) -> Result<Vec<SearchResult>> {
        self.ranker.rank(question, max_results)
    }

    /// Ranked results restricted to one source type.
    pub fn search_by_source(
        &self,
        question: &str,
        source_type: SourceType,
        limit: usize,
    ) -> Result<Vec<SearchResult>> {
        self.ranker.rank_by_source(question, source_type, limit)
    }

    /// Documentation-only search path.
    pub fn search_documentation(&self, query: &str, limit: usize) -> Result<Vec<SearchResult>> {
        self.ranker.search_documentation(query, limit)
    }

    /// Issue-only search path.
    pub fn search_issues(&self, query: &str, limit: usize) -> Result<Vec<SearchResult>> {
        self.ranker.search_issues(query, limit)
    }

    /// Analytics sink: notes that a question was asked.
    pub fn record_question(&self, question: &str, category: &str) {
        self.popular
            .lock()
            .expect("popular questions lock poisoned")
            .record(question, category);
    }

    /// Frequently asked questions, most frequent first.
    pub fn popular_questions(&self) -> Vec<PopularQuestion> {
        self.popular
            .lock()
            .expect("popular questions lock poisoned")
            .sorted()
    }

    pub fn document_count(&self) -> usize {
        self.store.len()
    }

    /// The shared store, for callers that manage loading themselves.
    pub fn store(&self) -> &Arc<DocumentStore> {
        &self.store
    }
}

impl Default for QaSearchService {
    fn default() -> Self {
        Self::new()
    }
}
