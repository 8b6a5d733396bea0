//! Relevance scoring heuristics.
//!
//! The aggregate scorer works on an expanded term set; the per-source
//! scorers treat the whole query as a single needle. All scores are clamped
//! to [0.0, 1.0], and "no match" is a distinct `None` rather than a zero
//! score so the ranker can exclude non-matches entirely.
//!
//! None of the formulas normalize by title or content length. That is a
//! deliberate simplicity choice preserved from the original corpus tuning;
//! the weights are load-bearing for the test fixtures.

use chrono::{DateTime, Duration, Utc};

use crate::document::{Document, SourceType};

const TITLE_WEIGHT: f32 = 0.7;
const CONTENT_WEIGHT: f32 = 0.3;
const PARTIAL_WEIGHT: f32 = 0.1;
const DOCUMENTATION_BOOST: f32 = 0.2;
const SETUP_BOOST: f32 = 0.1;

/// Fixed prefix length for partial matching. Tuned for the original
/// English/Chinese corpus mix, not a general-purpose heuristic; CJK terms
/// shorter than four characters never partial-match.
const PARTIAL_PREFIX_CHARS: usize = 4;

/// Content phrases that mark a document as onboarding material.
const SETUP_PHRASES: &[&str] = &["install", "setup", "getting started"];

/// Scores one document against an expanded term set.
///
/// Returns `None` when no term matches at all; otherwise a score in
/// [0.0, 1.0] built from distinct-term overlap ratios plus source boosts.
/// An empty term set (empty/whitespace query) matches nothing.
pub fn score(doc: &Document, terms: &[String]) -> Option<f32> {
    if terms.is_empty() {
        return None;
    }

    let title = doc.title.to_lowercase();
    let content = doc.content.to_lowercase();

    // Each distinct matching term counts once, not per occurrence.
    let title_matches = terms.iter().filter(|t| title.contains(t.as_str())).count();
    let content_matches = terms
        .iter()
        .filter(|t| content.contains(t.as_str()))
        .count();

    // Terms longer than 3 chars also get a prefix probe, additive with the
    // full-term matches above.
    let mut partial_matches = 0.0f32;
    for term in terms {
        if term.chars().count() <= 3 {
            continue;
        }
        let prefix = match term.char_indices().nth(PARTIAL_PREFIX_CHARS) {
            Some((byte_end, _)) => &term[..byte_end],
            None => term.as_str(),
        };
        if title.contains(prefix) || content.contains(prefix) {
            partial_matches += 0.5;
        }
    }

    if title_matches == 0 && content_matches == 0 && partial_matches == 0.0 {
        return None;
    }

    let term_count = terms.len() as f32;
    let mut score = 0.0f32;
    if title_matches > 0 {
        score += TITLE_WEIGHT * (title_matches as f32 / term_count);
    }
    if content_matches > 0 {
        score += CONTENT_WEIGHT * (content_matches as f32 / term_count);
    }
    if partial_matches > 0.0 {
        score += PARTIAL_WEIGHT * (partial_matches / term_count);
    }
    if doc.source_type == SourceType::Documentation {
        score += DOCUMENTATION_BOOST;
    }
    if SETUP_PHRASES.iter().any(|phrase| content.contains(phrase)) {
        score += SETUP_BOOST;
    }

    Some(score.min(1.0))
}

const DOC_TITLE_WEIGHT: f32 = 0.7;
const DOC_CONTENT_WEIGHT: f32 = 0.3;
const TROUBLESHOOTING_BOOST: f32 = 0.2;

/// Documentation-path scorer: the whole lowercased query as one needle.
///
/// Troubleshooting and error pages get a boost; they answer a
/// disproportionate share of incoming questions.
pub fn score_documentation(doc: &Document, query: &str) -> Option<f32> {
    if query.is_empty() {
        return None;
    }

    let title = doc.title.to_lowercase();
    let content = doc.content.to_lowercase();

    let title_match = title.contains(query);
    let content_match = content.contains(query);
    if !title_match && !content_match {
        return None;
    }

    let mut score = 0.0f32;
    if title_match {
        score += DOC_TITLE_WEIGHT;
    }
    if content_match {
        score += DOC_CONTENT_WEIGHT;
    }
    if title.contains("troubleshoot") || title.contains("error") {
        score += TROUBLESHOOTING_BOOST;
    }

    Some(score.min(1.0))
}

const ISSUE_TITLE_WEIGHT: f32 = 0.8;
const ISSUE_BODY_WEIGHT: f32 = 0.4;
const CLOSED_ISSUE_BOOST: f32 = 0.2;
const HELPFUL_LABEL_BOOST: f32 = 0.1;
const RECENT_ISSUE_BOOST: f32 = 0.1;
const RECENT_ISSUE_WINDOW_DAYS: i64 = 30;

/// Labels that tend to mark issues with reusable answers.
const HELPFUL_LABELS: &[&str] = &["bug", "question", "documentation", "help wanted"];

/// Issue-path scorer: whole-query needle plus issue-state boosts.
///
/// Closed issues usually carry a resolution; recently updated ones reflect
/// the current release. `now` is a parameter so the recency window is
/// testable. A missing or unparseable `updated_at` simply earns no boost.
pub fn score_issue(doc: &Document, query: &str, now: DateTime<Utc>) -> Option<f32> {
    if query.is_empty() {
        return None;
    }

    let title_match = doc.title.to_lowercase().contains(query);
    let body_match = doc.content.to_lowercase().contains(query);
    if !title_match && !body_match {
        return None;
    }

    let mut score = 0.0f32;
    if title_match {
        score += ISSUE_TITLE_WEIGHT;
    }
    if body_match {
        score += ISSUE_BODY_WEIGHT;
    }
    if doc.metadata.issue_state() == Some("closed") {
        score += CLOSED_ISSUE_BOOST;
    }
    let labels = doc.metadata.labels();
    if labels.iter().any(|l| HELPFUL_LABELS.contains(&l.as_str())) {
        score += HELPFUL_LABEL_BOOST;
    }
    if updated_within_window(doc, now) {
        score += RECENT_ISSUE_BOOST;
    }

    Some(score.min(1.0))
}

/// Whether the issue's `updated_at` timestamp falls inside the recency
/// window. Absent or unparseable timestamps count as stale.
fn updated_within_window(doc: &Document, now: DateTime<Utc>) -> bool {
    doc.metadata
        .issue_updated_at()
        .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
        .is_some_and(|updated| {
            now.signed_duration_since(updated.with_timezone(&Utc))
                < Duration::days(RECENT_ISSUE_WINDOW_DAYS)
        })
}
