//! Popular-question bookkeeping.
//!
//! A small frequency-ranked registry seeded with the questions the service
//! answers most often. The ranking layer records asked questions here as an
//! optional analytics sink; nothing in scoring depends on it.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopularQuestion {
    pub question: String,
    pub frequency: u32,
    pub category: String,
    pub last_asked: DateTime<Utc>,
}

/// Frequency-ranked question registry.
#[derive(Debug, Default)]
pub struct PopularQuestions {
    questions: Vec<PopularQuestion>,
}

impl PopularQuestions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with the historically most-asked questions.
    pub fn with_defaults() -> Self {
        let now = Utc::now();
        let seed = |question: &str, frequency: u32, category: &str, hours_ago: i64| {
            PopularQuestion {
                question: question.to_string(),
                frequency,
                category: category.to_string(),
                last_asked: now - Duration::hours(hours_ago),
            }
        };

        Self {
            questions: vec![
                seed("How to install Xinference?", 45, "installation", 2),
                seed("How to deploy models with Docker?", 38, "deployment", 5),
                seed("CUDA out of memory error", 32, "troubleshooting", 1),
                seed("How to use vLLM backend?", 28, "configuration", 3),
                seed("Model loading fails", 25, "troubleshooting", 4),
            ],
        }
    }

    /// Records one ask: bumps an existing entry or starts a new one.
    pub fn record(&mut self, question: &str, category: &str) {
        let now = Utc::now();
        if let Some(entry) = self.questions.iter_mut().find(|q| q.question == question) {
            entry.frequency += 1;
            entry.last_asked = now;
        } else {
            self.questions.push(PopularQuestion {
                question: question.to_string(),
                frequency: 1,
                category: category.to_string(),
                last_asked: now,
            });
        }
    }

    /// Questions sorted by frequency descending.
    pub fn sorted(&self) -> Vec<PopularQuestion> {
        let mut questions = self.questions.clone();
        questions.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        questions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn defaults_are_sorted_by_frequency() {
        let registry = PopularQuestions::with_defaults();
        let sorted = registry.sorted();
        check!(sorted.len() == 5);
        check!(sorted.windows(2).all(|w| w[0].frequency >= w[1].frequency));
        check!(sorted[0].question == "How to install Xinference?");
    }

    #[test]
    fn record_bumps_existing_and_inserts_new() {
        let mut registry = PopularQuestions::new();
        registry.record("How to quantize?", "models");
        registry.record("How to quantize?", "models");
        registry.record("What is a replica?", "deployment");

        let sorted = registry.sorted();
        check!(sorted.len() == 2);
        check!(sorted[0].question == "How to quantize?");
        check!(sorted[0].frequency == 2);
        check!(sorted[1].frequency == 1);
    }
}
