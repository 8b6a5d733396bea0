//! Query keyword expansion: term extraction, bilingual synonym substitution
//! and project-term injection.
//!
//! Raw substring matching is blind to cross-language queries; a large share
//! of incoming questions is written in Chinese while the indexed corpus is
//! mostly English. The fixed synonym table below is a cheap precision/recall
//! lever that avoids a real NLP pipeline.

use ahash::AHashSet;

/// Fixed bilingual synonym table: Chinese domain phrases mapped to the
/// English terms used by the indexed corpus. Keys are matched by substring
/// containment on the lowercased query; every matching key contributes all
/// of its expansions.
const SYNONYMS: &[(&str, &[&str])] = &[
    ("安装", &["install", "installation", "setup"]),
    ("部署", &["deploy", "deployment"]),
    ("配置", &["configure", "configuration", "config"]),
    ("模型", &["model", "models"]),
    ("推理", &["inference"]),
    ("错误", &["error", "bug", "issue"]),
    ("问题", &["problem", "question"]),
    ("使用", &["use", "usage"]),
    ("运行", &["run", "running"]),
    ("启动", &["start", "launch"]),
    ("下载", &["download"]),
    ("文档", &["documentation", "docs"]),
];

/// Substrings that mark a query as being about the project itself.
const PROJECT_TRIGGERS: &[&str] = &["xinference", "安装", "部署", "模型"];

/// Project identifiers injected when a trigger fires, so project-specific
/// documents stay candidates even when not asked for by name.
const PROJECT_TERMS: &[&str] = &["xinference", "xorbits", "inference"];

/// Expands a raw query into a deduplicated list of lowercase search terms.
///
/// Order is insertion order (original terms, then synonym expansions, then
/// project terms), which keeps repeated calls deterministic. An empty or
/// whitespace-only query yields an empty list.
pub fn expand(query: &str) -> Vec<String> {
    let query = query.to_lowercase();
    let mut terms = Vec::new();
    let mut seen: AHashSet<String> = AHashSet::new();

    for term in extract_terms(&query) {
        if seen.insert(term.clone()) {
            terms.push(term);
        }
    }

    for (key, expansions) in SYNONYMS {
        if query.contains(key) {
            for term in *expansions {
                if seen.insert((*term).to_string()) {
                    terms.push((*term).to_string());
                }
            }
        }
    }

    if PROJECT_TRIGGERS.iter().any(|trigger| query.contains(trigger)) {
        for term in PROJECT_TERMS {
            if seen.insert((*term).to_string()) {
                terms.push((*term).to_string());
            }
        }
    }

    terms
}

/// Extracts maximal runs of alphanumeric-or-underscore characters.
///
/// `char::is_alphanumeric` covers CJK, so a Chinese question contributes its
/// own runs as terms alongside whatever the synonym table adds.
pub(crate) fn extract_terms(query: &str) -> Vec<String> {
    let mut terms = Vec::new();
    let mut start = None;

    for (i, c) in query.char_indices() {
        if c.is_alphanumeric() || c == '_' {
            if start.is_none() {
                start = Some(i);
            }
        } else if let Some(run_start) = start.take() {
            terms.push(query[run_start..i].to_string());
        }
    }
    if let Some(run_start) = start {
        terms.push(query[run_start..].to_string());
    }

    terms
}
