//! Text normalization shared by every analysis in this module.

use std::sync::LazyLock;

use regex::Regex;

static NON_KEYWORD_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s]").expect("static pattern compiles"));

/// Lowercases `text` and removes everything that is not an ASCII letter, an
/// ASCII digit or whitespace. Accented and other non-ASCII letters are dropped,
/// not transliterated.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    NON_KEYWORD_CHARS
        .replace_all(&text.to_lowercase(), "")
        .into_owned()
}

/// Splits normalized text into terms. After [`normalize`] only alphanumeric
/// runs separated by whitespace remain, so a whitespace split is a word split.
pub fn tokenize(normalized: &str) -> impl Iterator<Item = &str> + '_ {
    normalized.split_whitespace()
}
