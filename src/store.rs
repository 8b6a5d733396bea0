//! In-memory document store with atomic snapshot replacement.

use std::sync::{Arc, RwLock};

use crate::document::Document;

/// Holds the current snapshot of indexable documents.
///
/// The collection is replaced wholesale: [`DocumentStore::load`] swaps an
/// immutable `Arc` under a write lock, so a ranking call that already cloned
/// the snapshot keeps a consistent view while a concurrent refresh publishes
/// a new one. No partially-updated collection is ever observable.
#[derive(Debug, Default)]
pub struct DocumentStore {
    snapshot: RwLock<Arc<Vec<Document>>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the entire snapshot. Insertion order is preserved; it is the
    /// tie-break order for equal-score results.
    pub fn load(&self, documents: Vec<Document>) {
        let count = documents.len();
        *self
            .snapshot
            .write()
            .expect("document store lock poisoned") = Arc::new(documents);
        tracing::info!("loaded {} documents into the search index", count);
    }

    /// The current collection. Callers must treat it as read-only.
    pub fn snapshot(&self) -> Arc<Vec<Document>> {
        Arc::clone(&self.snapshot.read().expect("document store lock poisoned"))
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{DocumentMeta, SourceType};
    use assert2::check;

    fn doc(title: &str) -> Document {
        Document::new(title, "", "", SourceType::Faq, DocumentMeta::default())
    }

    #[test]
    fn starts_empty() {
        let store = DocumentStore::new();
        check!(store.is_empty());
        check!(store.len() == 0);
    }

    #[test]
    fn load_replaces_wholesale() {
        let store = DocumentStore::new();
        store.load(vec![doc("a"), doc("b")]);
        check!(store.len() == 2);

        store.load(vec![doc("c")]);
        let snapshot = store.snapshot();
        check!(snapshot.len() == 1);
        check!(snapshot[0].title == "c");
    }

    #[test]
    fn readers_keep_their_snapshot_across_a_reload() {
        let store = DocumentStore::new();
        store.load(vec![doc("a")]);
        let before = store.snapshot();

        store.load(vec![doc("b"), doc("c")]);
        check!(before.len() == 1);
        check!(store.len() == 2);
    }
}
