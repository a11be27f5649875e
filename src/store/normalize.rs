//! Sentence text normalization
//!
//! Produces the canonical key form used for indexing and lookup: quotes,
//! commas, and sentence-ending periods are stripped, whitespace runs
//! collapse to a single space, and the result is trimmed and lower-cased.

use regex::Regex;
use std::sync::LazyLock;

/// Characters removed entirely before whitespace handling.
/// U+0964 is the danda, the sentence terminator in Bengali text.
const STRIPPED: [char; 4] = ['"', ',', '.', '।'];

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Normalize raw sentence text into its canonical key form.
///
/// Two raw sentences that normalize to the same string are treated as the
/// same sentence by the store. Normalization is idempotent.
pub fn normalize(raw: &str) -> String {
    let stripped: String = raw.chars().filter(|c| !STRIPPED.contains(c)).collect();
    WHITESPACE.replace_all(&stripped, " ").trim().to_lowercase()
}
