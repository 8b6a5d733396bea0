//! Document data model: indexed units of retrievable text and ranked results.
//!
//! The persisted wire shape is a flat JSON object
//! (`title, content, url, source_type, metadata`) matching the existing
//! document cache fixtures. Internally `metadata` is a tagged union per
//! source type, with a generic key lookup for the scoring rules that key on
//! `section`, `state` and `labels`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;

/// A string-keyed JSON object, the raw shape of a metadata bag.
pub type JsonMap = serde_json::Map<String, Value>;

/// Source classification for an indexed document.
///
/// Exactly four variants; any other tag is a load-time error
/// ([`SearchError::InvalidSourceType`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    Documentation,
    GithubIssue,
    SourceCode,
    Faq,
}

impl SourceType {
    /// The wire tag used in the persisted document cache.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Documentation => "documentation",
            Self::GithubIssue => "github_issue",
            Self::SourceCode => "source_code",
            Self::Faq => "faq",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceType {
    type Err = SearchError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "documentation" => Ok(Self::Documentation),
            "github_issue" => Ok(Self::GithubIssue),
            "source_code" => Ok(Self::SourceCode),
            "faq" => Ok(Self::Faq),
            other => Err(SearchError::InvalidSourceType(other.to_string())),
        }
    }
}

/// Metadata attached to a documentation page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentationMeta {
    pub section: String,
    #[serde(flatten)]
    pub extra: JsonMap,
}

/// Metadata attached to a GitHub issue record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueMeta {
    pub number: i64,
    pub state: String,
    #[serde(default)]
    pub labels: Vec<String>,
    pub author: String,
    /// Unmodeled keys (e.g. `created_at`/`updated_at` timestamps) carried
    /// through untouched.
    #[serde(flatten)]
    pub extra: JsonMap,
}

/// Metadata attached to a source-code search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeMeta {
    pub file_path: String,
    pub repository: String,
    pub language: String,
    #[serde(flatten)]
    pub extra: JsonMap,
}

/// Metadata bag for a document, typed per source where the shape is known.
///
/// Loading is tolerant: a bag that does not parse as the typed shape for its
/// source degrades to [`DocumentMeta::Other`] rather than rejecting the
/// document. Only the `source_type` tag itself is validated strictly.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DocumentMeta {
    Documentation(DocumentationMeta),
    Issue(IssueMeta),
    Code(CodeMeta),
    Other(JsonMap),
}

impl DocumentMeta {
    /// Interprets a raw metadata object in the context of its source type.
    pub fn from_map(source_type: SourceType, map: JsonMap) -> Self {
        let value = Value::Object(map);
        match source_type {
            SourceType::Documentation => serde_json::from_value(value.clone())
                .map_or_else(|_| Self::other(value), Self::Documentation),
            SourceType::GithubIssue => serde_json::from_value(value.clone())
                .map_or_else(|_| Self::other(value), Self::Issue),
            SourceType::SourceCode => serde_json::from_value(value.clone())
                .map_or_else(|_| Self::other(value), Self::Code),
            SourceType::Faq => Self::other(value),
        }
    }

    fn other(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::Other(map),
            _ => Self::Other(JsonMap::new()),
        }
    }

    /// The raw object form, as it appears on the wire.
    pub fn to_map(&self) -> JsonMap {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => JsonMap::new(),
        }
    }

    /// Generic lookup by wire key, across all variants.
    pub fn get(&self, key: &str) -> Option<Value> {
        let mut map = self.to_map();
        map.remove(key)
    }

    /// Documentation section name, if present.
    pub fn section(&self) -> Option<&str> {
        match self {
            Self::Documentation(meta) => Some(&meta.section),
            Self::Other(map) => map.get("section").and_then(Value::as_str),
            _ => None,
        }
    }

    /// Issue state (`"open"` / `"closed"`), if present.
    pub fn issue_state(&self) -> Option<&str> {
        match self {
            Self::Issue(meta) => Some(&meta.state),
            Self::Other(map) => map.get("state").and_then(Value::as_str),
            _ => None,
        }
    }

    /// Issue labels; empty when absent.
    pub fn labels(&self) -> Vec<String> {
        match self {
            Self::Issue(meta) => meta.labels.clone(),
            Self::Other(map) => map
                .get("labels")
                .and_then(Value::as_array)
                .map(|labels| {
                    labels
                        .iter()
                        .filter_map(Value::as_str)
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    /// Raw `updated_at` timestamp of an issue, if carried in the bag.
    pub fn issue_updated_at(&self) -> Option<&str> {
        match self {
            Self::Issue(meta) => meta.extra.get("updated_at").and_then(Value::as_str),
            Self::Other(map) => map.get("updated_at").and_then(Value::as_str),
            _ => None,
        }
    }
}

impl Default for DocumentMeta {
    fn default() -> Self {
        Self::Other(JsonMap::new())
    }
}

/// Flat wire form of a document, bridging serde to the typed model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct RawDocument {
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) url: String,
    pub(crate) source_type: String,
    #[serde(default)]
    pub(crate) metadata: JsonMap,
}

/// An indexed unit of retrievable text with a source classification.
///
/// `title` and `content` are always present (possibly empty). Documents are
/// loaded wholesale and never individually mutated; the store replaces the
/// full collection on refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDocument", into = "RawDocument")]
pub struct Document {
    pub title: String,
    pub content: String,
    pub url: String,
    pub source_type: SourceType,
    pub metadata: DocumentMeta,
}

impl Document {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        url: impl Into<String>,
        source_type: SourceType,
        metadata: DocumentMeta,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            url: url.into(),
            source_type,
            metadata,
        }
    }
}

impl TryFrom<RawDocument> for Document {
    type Error = SearchError;

    fn try_from(raw: RawDocument) -> Result<Self, Self::Error> {
        let source_type = raw.source_type.parse::<SourceType>()?;
        Ok(Self {
            title: raw.title,
            content: raw.content,
            url: raw.url,
            source_type,
            metadata: DocumentMeta::from_map(source_type, raw.metadata),
        })
    }
}

impl From<Document> for RawDocument {
    fn from(doc: Document) -> Self {
        Self {
            title: doc.title,
            content: doc.content,
            url: doc.url,
            source_type: doc.source_type.as_str().to_string(),
            metadata: doc.metadata.to_map(),
        }
    }
}

/// A ranked match produced per query: the document's fields plus a bounded
/// relevance score and a lossy content preview. Request-scoped; never
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub title: String,
    pub content: String,
    pub url: String,
    pub source_type: SourceType,
    pub relevance_score: f32,
    pub metadata: DocumentMeta,
}

impl SearchResult {
    pub(crate) fn from_document(
        doc: &Document,
        relevance_score: f32,
        max_content_chars: usize,
    ) -> Self {
        Self {
            title: doc.title.clone(),
            content: truncate_chars(&doc.content, max_content_chars),
            url: doc.url.clone(),
            source_type: doc.source_type,
            relevance_score,
            metadata: doc.metadata.clone(),
        }
    }
}

/// Truncates to a character-counted prefix with a trailing ellipsis marker.
///
/// Counting characters rather than bytes matters: content is routinely CJK
/// text and a byte slice could split a code point.
pub(crate) fn truncate_chars(content: &str, max_chars: usize) -> String {
    match content.char_indices().nth(max_chars) {
        Some((byte_end, _)) => {
            let mut truncated = content[..byte_end].to_string();
            truncated.push_str("...");
            truncated
        }
        None => content.to_string(),
    }
}
