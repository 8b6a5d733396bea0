//! Shared corpus fixtures for integration tests.

#![allow(dead_code)]

use serde_json::json;
use std::sync::Arc;
use xinference_qa::document::{
    CodeMeta, Document, DocumentMeta, DocumentationMeta, IssueMeta, JsonMap,
};
use xinference_qa::{DocumentStore, Ranker, SourceType};

pub fn doc_page(title: &str, content: &str, url: &str, section: &str) -> Document {
    Document::new(
        title,
        content,
        url,
        SourceType::Documentation,
        DocumentMeta::Documentation(DocumentationMeta {
            section: section.to_string(),
            extra: JsonMap::new(),
        }),
    )
}

pub fn issue(
    number: i64,
    title: &str,
    body: &str,
    state: &str,
    labels: &[&str],
    updated_at: &str,
) -> Document {
    let mut extra = JsonMap::new();
    extra.insert("updated_at".to_string(), json!(updated_at));
    Document::new(
        title,
        body,
        format!("https://github.com/xorbitsai/inference/issues/{number}"),
        SourceType::GithubIssue,
        DocumentMeta::Issue(IssueMeta {
            number,
            state: state.to_string(),
            labels: labels.iter().map(|l| (*l).to_string()).collect(),
            author: "reporter".to_string(),
            extra,
        }),
    )
}

pub fn faq(title: &str, content: &str) -> Document {
    Document::new(
        title,
        content,
        "https://example.invalid/faq",
        SourceType::Faq,
        DocumentMeta::default(),
    )
}

pub fn code_hit(title: &str, content: &str, file_path: &str) -> Document {
    Document::new(
        title,
        content,
        format!("https://github.com/xorbitsai/inference/blob/main/{file_path}"),
        SourceType::SourceCode,
        DocumentMeta::Code(CodeMeta {
            file_path: file_path.to_string(),
            repository: "xorbitsai/inference".to_string(),
            language: "python".to_string(),
            extra: JsonMap::new(),
        }),
    )
}

/// A small mixed-source corpus in a deliberate load order; several tests
/// depend on this order for tie-break assertions.
pub fn corpus() -> Vec<Document> {
    vec![
        doc_page(
            "Installation Guide",
            "To install the project run the setup command",
            "https://inference.readthedocs.io/en/latest/getting_started/installation.html",
            "Getting Started",
        ),
        doc_page(
            "Using the Docker Image",
            "Deploy models with the official docker image",
            "https://inference.readthedocs.io/en/latest/getting_started/using_docker_image.html",
            "Getting Started",
        ),
        doc_page(
            "Troubleshooting",
            "Common errors when loading models",
            "https://inference.readthedocs.io/en/latest/getting_started/troubleshooting.html",
            "Getting Started",
        ),
        issue(
            421,
            "CUDA out of memory when loading a large model",
            "Reduce gpu layers or enable quantization",
            "closed",
            &["bug"],
            "2024-03-01T10:00:00+00:00",
        ),
        issue(
            532,
            "How to use the vLLM backend",
            "The vllm backend needs a recent CUDA toolkit",
            "open",
            &["question"],
            "2024-02-11T08:30:00+00:00",
        ),
        faq(
            "What is Xinference",
            "Xinference is a model serving framework by Xorbits",
        ),
        code_hit(
            "core.py - xinference/core",
            "def launch_model(self, model_name): ...",
            "xinference/core.py",
        ),
    ]
}

/// Installs the capture-aware tracing subscriber for this test binary.
pub fn init_tracing() {
    xinference_qa::tracing::init();
}

/// A ranker over a freshly loaded corpus store.
pub fn loaded_ranker() -> (Arc<DocumentStore>, Ranker) {
    init_tracing();
    let store = Arc::new(DocumentStore::new());
    store.load(corpus());
    let ranker = Ranker::new(Arc::clone(&store));
    (store, ranker)
}
