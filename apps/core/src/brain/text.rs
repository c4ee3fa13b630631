//! Text normalization.
//!
//! Every comparison the matchers make goes through [`normalize`] first, so
//! "What is your return policy?" and "what is your return policy" compare equal.
//!
//! Word characters are letters, numbers (any numeric category, so `²` and `½`
//! count) and `_`. Separators are Unicode whitespace plus the ASCII
//! information separators `\x1C`..`\x1F`.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static NON_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\p{L}\p{N}_\s\x1C-\x1F]").expect("Invalid regex: non-word characters")
});

/// Whether `c` separates words
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\x1C'..='\x1F')
}

/// True when `text` holds nothing but separators
pub fn is_blank(text: &str) -> bool {
    text.chars().all(is_separator)
}

/// Lower-case, trim, and drop every character that is neither a word
/// character nor a separator. Internal separator runs are left untouched.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    NON_WORD
        .replace_all(lowered.trim_matches(is_separator), "")
        .into_owned()
}

/// Words of `text` in order, split on separator runs. Does not normalize.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_separator).filter(|word| !word.is_empty())
}

/// Words of `text`, duplicates collapsed. Does not normalize.
pub fn token_set(text: &str) -> HashSet<&str> {
    words(text).collect()
}
