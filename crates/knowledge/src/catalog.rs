//! Read-only index over the explanation tables.
//!
//! Built once at startup and shared behind an `Arc`; lookups never mutate.

use std::collections::HashMap;

use dsamentor_core::Level;

use crate::explanations::{EXPLANATIONS, ExplanationRecord, TopicExplanations};

/// Normalize a topic name into a lookup key: trim, lowercase, and collapse
/// every run of whitespace into a single hyphen.
pub fn normalize_key(topic: &str) -> String {
    topic
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// One record resolved together with the topic and level it came from.
#[derive(Debug, Clone, Copy)]
pub struct Explanation {
    pub key: &'static str,
    pub title: &'static str,
    pub level: Level,
    pub record: &'static ExplanationRecord,
}

/// Lookup table keyed by normalized topic name.
#[derive(Debug, Clone)]
pub struct ExplanationCatalog {
    entries: HashMap<&'static str, &'static TopicExplanations>,
}

impl ExplanationCatalog {
    /// The catalog of all built-in explanations.
    pub fn builtin() -> Self {
        Self::from_tables(EXPLANATIONS)
    }

    pub fn from_tables(tables: &'static [TopicExplanations]) -> Self {
        let entries = tables.iter().map(|t| (t.key, t)).collect();
        Self { entries }
    }

    /// Look up the record for a topic at a level.
    ///
    /// `None` is an expected outcome: callers fall back to a generic reply.
    pub fn lookup(&self, topic: &str, level: Level) -> Option<&'static ExplanationRecord> {
        self.explain(topic, level).map(|e| e.record)
    }

    /// Like [`lookup`](Self::lookup), keeping the topic title alongside.
    pub fn explain(&self, topic: &str, level: Level) -> Option<Explanation> {
        let key = normalize_key(topic);
        let entry = *self.entries.get(key.as_str())?;
        Some(Explanation {
            key: entry.key,
            title: entry.title,
            level,
            record: entry.at(level),
        })
    }

    /// First catalog topic mentioned in a free-form question.
    ///
    /// The earliest mention wins. Mentions starting at the same offset go
    /// to the longer key, so "binary search" beats any shorter key it
    /// starts with.
    pub fn detect_topic(&self, question: &str) -> Option<&'static str> {
        let haystack = normalize_key(question);
        self.entries
            .values()
            .filter_map(|t| haystack.find(t.key).map(|offset| (offset, t.key)))
            .min_by(|(a_off, a_key), (b_off, b_key)| {
                a_off
                    .cmp(b_off)
                    .then(b_key.len().cmp(&a_key.len()))
                    .then(a_key.cmp(b_key))
            })
            .map(|(_, key)| key)
    }

    /// Titles of every topic with a prepared explanation, sorted.
    pub fn titles(&self) -> Vec<&'static str> {
        let mut titles: Vec<&'static str> = self.entries.values().map(|t| t.title).collect();
        titles.sort_unstable();
        titles
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ExplanationCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
