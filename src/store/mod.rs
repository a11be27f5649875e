//! In-memory sentence simplification repository
//!
//! Provides:
//! - User records with sequential ids and username lookup
//! - Idempotent sentence inserts keyed by normalized text
//! - Three-tier fuzzy lookup from raw sentence text to a stored record
//!
//! All state lives in memory for the lifetime of the store; nothing is
//! evicted or persisted.

mod index;
mod normalize;
mod types;

pub use index::{IndexHit, MatchTier, SentenceIndex, FUZZY_MIN_KEY_CHARS, PREFIX_KEY_CHARS};
pub use normalize::normalize;
pub use types::{NewSentence, NewUser, Sentence, SimplificationLevel, User};

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, warn};

/// Keys included in the diagnostic dump when a lookup exhausts all tiers.
const KEY_DUMP_LIMIT: usize = 10;

#[derive(Debug, Default)]
struct StoreInner {
    users: HashMap<u64, User>,
    next_user_id: u64,
    sentences: Vec<Sentence>,
    index: SentenceIndex,
}

/// In-memory store for users and sentence simplifications.
///
/// Construct one per process and hand it to consumers. Every operation
/// takes the interior lock once, so concurrent callers cannot observe a
/// half-applied insert.
#[derive(Debug, Default)]
pub struct SentenceStore {
    inner: RwLock<StoreInner>,
}

impl SentenceStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a shared instance
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Get a user by id
    pub fn get_user(&self, id: u64) -> Option<User> {
        self.inner.read().users.get(&id).cloned()
    }

    /// Get a user by username (linear scan over all users)
    pub fn get_user_by_username(&self, username: &str) -> Option<User> {
        let inner = self.inner.read();
        inner
            .users
            .values()
            .find(|u| u.username == username)
            .cloned()
    }

    /// Create a user with the next sequential id
    pub fn create_user(&self, data: NewUser) -> User {
        let mut inner = self.inner.write();
        inner.next_user_id += 1;
        let user = User {
            id: inner.next_user_id,
            username: data.username,
            email: data.email,
            created_at: chrono::Utc::now(),
        };
        debug!("created user {} ({})", user.id, user.username);
        inner.users.insert(user.id, user.clone());
        user
    }

    /// Number of stored users
    pub fn user_count(&self) -> usize {
        self.inner.read().users.len()
    }

    /// Insert a sentence, deduplicating on its normalized text.
    ///
    /// If an equivalent sentence (same full normalized key) is already
    /// stored, the existing record is returned and nothing changes.
    pub fn insert_sentence(&self, data: NewSentence) -> Sentence {
        let key = normalize(&data.complex_sentence);
        let mut inner = self.inner.write();

        if let Some(id) = inner.index.full_key(&key) {
            // Ids are assigned from the list position, so this cannot miss.
            let existing = inner.sentences[id as usize - 1].clone();
            debug!("sentence {:?} already stored as id {}", key, existing.id);
            return existing;
        }

        let sentence = Sentence {
            id: inner.sentences.len() as u64 + 1,
            complex_sentence: data.complex_sentence,
            simplified_sentence: data.simplified_sentence,
            level: data.level,
            created_at: chrono::Utc::now(),
        };
        debug!("stored sentence {} under key {:?}", sentence.id, key);
        inner.index.insert(key, sentence.id);
        inner.sentences.push(sentence.clone());
        sentence
    }

    /// Snapshot of all stored sentences in insertion order
    pub fn all_sentences(&self) -> Vec<Sentence> {
        self.inner.read().sentences.clone()
    }

    /// Number of stored sentences
    pub fn sentence_count(&self) -> usize {
        self.inner.read().sentences.len()
    }

    /// Find the stored simplification for a raw complex sentence.
    ///
    /// `level` does not narrow the candidate set; it is carried for
    /// diagnostics only. Matching runs through the index tiers in order:
    /// exact normalized key, 20-char prefix key, fuzzy substring scan.
    pub fn get_simplified_sentence(
        &self,
        complex_sentence: &str,
        level: SimplificationLevel,
    ) -> Option<Sentence> {
        let key = normalize(complex_sentence);
        debug!(
            "lookup (level {}) for {:?}, normalized {:?}",
            level.as_str(),
            complex_sentence,
            key
        );

        let inner = self.inner.read();
        match inner.index.lookup(&key) {
            Some(hit) => {
                debug!("{:?} match: sentence id {}", hit.tier, hit.id);
                inner.sentences.get(hit.id as usize - 1).cloned()
            }
            None => {
                warn!(
                    "no match for {:?}; {} keys indexed, sample: {:?}",
                    key,
                    inner.index.key_count(),
                    inner.index.sample_keys(KEY_DUMP_LIMIT)
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(complex: &str, simplified: &str) -> NewSentence {
        NewSentence {
            complex_sentence: complex.to_string(),
            simplified_sentence: simplified.to_string(),
            level: SimplificationLevel::Medium,
        }
    }

    #[test]
    fn test_user_ids_are_sequential() {
        let store = SentenceStore::new();

        let alice = store.create_user(NewUser {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
        });
        let bob = store.create_user(NewUser {
            username: "bob".to_string(),
            email: "bob@example.com".to_string(),
        });

        assert_eq!(alice.id, 1);
        assert_eq!(bob.id, 2);
        assert_eq!(store.user_count(), 2);
    }

    #[test]
    fn test_get_user() {
        let store = SentenceStore::new();
        let alice = store.create_user(NewUser {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
        });

        assert_eq!(store.get_user(alice.id).unwrap().username, "alice");
        assert!(store.get_user(99).is_none());
    }

    #[test]
    fn test_get_user_by_username() {
        let store = SentenceStore::new();
        store.create_user(NewUser {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
        });

        assert!(store.get_user_by_username("alice").is_some());
        assert!(store.get_user_by_username("mallory").is_none());
    }

    #[test]
    fn test_insert_dedups_on_normalized_text() {
        let store = SentenceStore::new();

        let first = store.insert_sentence(sentence("The rain fell today.", "It rained."));
        let second = store.insert_sentence(sentence("the  rain fell today", "It rained again."));

        assert_eq!(first.id, second.id);
        assert_eq!(second.simplified_sentence, "It rained.");
        assert_eq!(store.sentence_count(), 1);
    }

    #[test]
    fn test_exact_round_trip() {
        let store = SentenceStore::new();
        let stored = store.insert_sentence(sentence(
            "The committee deliberated at length before reaching a verdict.",
            "The group talked, then decided.",
        ));

        let found = store
            .get_simplified_sentence(
                "The committee deliberated at length before reaching a verdict.",
                SimplificationLevel::Easy,
            )
            .unwrap();
        assert_eq!(found.id, stored.id);
    }

    #[test]
    fn test_level_does_not_filter() {
        let store = SentenceStore::new();
        let stored = store.insert_sentence(NewSentence {
            complex_sentence: "The weather deteriorated rapidly overnight.".to_string(),
            simplified_sentence: "The weather got bad fast.".to_string(),
            level: SimplificationLevel::Easy,
        });

        let found = store
            .get_simplified_sentence(
                "The weather deteriorated rapidly overnight.",
                SimplificationLevel::Hard,
            )
            .unwrap();
        assert_eq!(found.id, stored.id);
    }

    #[test]
    fn test_bengali_round_trip() {
        let store = SentenceStore::new();
        let stored = store.insert_sentence(sentence("আমি ভাত খাই।", "আমি ভাত খাই।"));

        let with_danda = store
            .get_simplified_sentence("আমি ভাত খাই।", SimplificationLevel::Medium)
            .unwrap();
        let without_danda = store
            .get_simplified_sentence("আমি ভাত খাই", SimplificationLevel::Medium)
            .unwrap();

        assert_eq!(with_danda.id, stored.id);
        assert_eq!(without_danda.id, stored.id);
    }

    #[test]
    fn test_all_sentences_in_insertion_order() {
        let store = SentenceStore::new();
        store.insert_sentence(sentence("First sentence of the corpus here.", "First."));
        store.insert_sentence(sentence("Second sentence of the corpus here.", "Second."));

        let all = store.all_sentences();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, 1);
        assert_eq!(all[1].id, 2);
    }

    #[test]
    fn test_lookup_miss_is_none() {
        let store = SentenceStore::new();
        store.insert_sentence(sentence("Something entirely different.", "Different."));

        assert!(store
            .get_simplified_sentence("xyzzy", SimplificationLevel::Medium)
            .is_none());
    }
}
