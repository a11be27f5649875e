//! Normalized-key index over stored sentences
//!
//! Three structures back the three lookup tiers:
//! - `exact`: full normalized key -> sentence id
//! - `prefix`: 20-char prefix key claimed by long sentences -> sentence id
//! - `scan`: every index key of 10+ chars, kept sorted by descending
//!   length, for the fuzzy substring tier
//!
//! Lookup tries the tiers in strict order; the first hit wins. All lengths
//! are Unicode scalar counts, never byte counts.

use std::collections::HashMap;

/// Sentences longer than this many chars also claim a prefix key.
pub const PREFIX_KEY_CHARS: usize = 20;

/// Keys shorter than this never match in the fuzzy scan tier.
pub const FUZZY_MIN_KEY_CHARS: usize = 10;

/// Which tier produced a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    Exact,
    Prefix,
    Fuzzy,
}

/// A hit from the index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexHit {
    pub id: u64,
    pub tier: MatchTier,
}

#[derive(Debug)]
struct ScanEntry {
    key: String,
    chars: usize,
    id: u64,
}

/// Index mapping normalized sentence keys to sentence ids
#[derive(Debug, Default)]
pub struct SentenceIndex {
    exact: HashMap<String, u64>,
    prefix: HashMap<String, u64>,
    scan: Vec<ScanEntry>,
}

impl SentenceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sentence id stored under this exact full key, if any
    pub fn full_key(&self, key: &str) -> Option<u64> {
        self.exact.get(key).copied()
    }

    /// Number of index entries across both maps
    pub fn key_count(&self) -> usize {
        self.exact.len() + self.prefix.len()
    }

    /// A bounded sample of full keys, for diagnostics
    pub fn sample_keys(&self, limit: usize) -> Vec<&str> {
        self.exact.keys().take(limit).map(String::as_str).collect()
    }

    /// Index a sentence under its full normalized key.
    ///
    /// The caller must have checked [`SentenceIndex::full_key`] for
    /// duplicates first. Keys longer than [`PREFIX_KEY_CHARS`] also claim
    /// their prefix, unless an earlier sentence already holds that key.
    pub fn insert(&mut self, key: String, id: u64) {
        let chars = key.chars().count();

        if chars >= FUZZY_MIN_KEY_CHARS {
            self.push_scan(key.clone(), chars, id);
        }

        if chars > PREFIX_KEY_CHARS {
            let prefix: String = key.chars().take(PREFIX_KEY_CHARS).collect();
            if !self.exact.contains_key(&prefix) && !self.prefix.contains_key(&prefix) {
                self.push_scan(prefix.clone(), PREFIX_KEY_CHARS, id);
                self.prefix.insert(prefix, id);
            }
        }

        self.exact.insert(key, id);
    }

    /// Insert into the scan list keeping descending length order.
    /// Equal lengths keep insertion order, so earlier sentences win ties.
    fn push_scan(&mut self, key: String, chars: usize, id: u64) {
        let pos = self.scan.partition_point(|e| e.chars >= chars);
        self.scan.insert(pos, ScanEntry { key, chars, id });
    }

    /// Resolve a normalized query through the three tiers
    pub fn lookup(&self, query: &str) -> Option<IndexHit> {
        if let Some(&id) = self.exact.get(query) {
            return Some(IndexHit {
                id,
                tier: MatchTier::Exact,
            });
        }

        if query.chars().count() > PREFIX_KEY_CHARS {
            let prefix: String = query.chars().take(PREFIX_KEY_CHARS).collect();
            if let Some(&id) = self.exact.get(&prefix).or_else(|| self.prefix.get(&prefix)) {
                return Some(IndexHit {
                    id,
                    tier: MatchTier::Prefix,
                });
            }
        }

        // Longest key first; sub-10-char keys never made it into the list.
        for entry in &self.scan {
            if entry.key.contains(query) || query.contains(entry.key.as_str()) {
                return Some(IndexHit {
                    id: entry.id,
                    tier: MatchTier::Fuzzy,
                });
            }
        }

        None
    }
}
