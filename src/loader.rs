//! Document loading seam.
//!
//! The store does not own its persistence: it consumes a [`DocumentLoader`]
//! capability, independently implementable as file-backed, HTTP-backed, or
//! in-memory for tests. The scrape/fetch collaborators that produce the
//! cache file live outside this crate.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::document::{Document, RawDocument};
use crate::error::Result;

/// A source of flattened document records.
#[async_trait]
pub trait DocumentLoader: Send + Sync {
    /// Produces the full document set for a wholesale store load.
    async fn load(&self) -> Result<Vec<Document>>;
}

/// File-backed loader over the persisted JSON document cache
/// (the original `data/documents.json` format: a flat array of
/// `title, content, url, source_type, metadata` records).
pub struct JsonCacheLoader {
    path: PathBuf,
}

impl JsonCacheLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes a document snapshot back to the cache file.
    ///
    /// Writes to a sibling temp file first and renames over the target, so
    /// a crash mid-write never leaves a truncated cache behind.
    pub async fn save(&self, documents: &[Document]) -> Result<()> {
        let json = serde_json::to_vec_pretty(documents)?;
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, &json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        tracing::debug!(
            "cached {} documents to {}",
            documents.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[async_trait]
impl DocumentLoader for JsonCacheLoader {
    async fn load(&self) -> Result<Vec<Document>> {
        let bytes = tokio::fs::read(&self.path).await?;

        // Parse the flat records first, then validate source types one by
        // one: a single unknown tag rejects the whole load rather than
        // admitting a partially-typed collection.
        let raw: Vec<RawDocument> = serde_json::from_slice(&bytes)?;
        let documents = raw
            .into_iter()
            .map(Document::try_from)
            .collect::<Result<Vec<_>>>()?;

        tracing::info!(
            "loaded {} documents from cache at {}",
            documents.len(),
            self.path.display()
        );
        Ok(documents)
    }
}

/// Fixture loader serving a fixed in-memory document set.
#[derive(Debug, Default)]
pub struct StaticLoader {
    documents: Vec<Document>,
}

impl StaticLoader {
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }
}

#[async_trait]
impl DocumentLoader for StaticLoader {
    async fn load(&self) -> Result<Vec<Document>> {
        Ok(self.documents.clone())
    }
}
