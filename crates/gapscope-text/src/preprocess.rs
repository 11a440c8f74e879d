use regex::Regex;
use std::sync::LazyLock;

static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());
static URL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://\S+").unwrap());
static EMAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+@\S+").unwrap());
static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s.,!?\-:;]").unwrap());
static NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d+\b").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\w-]+").unwrap());

/// Normalize raw page text for keyword extraction.
///
/// Lowercases, strips HTML tags, URLs, e-mail addresses, and standalone
/// numbers, keeps only sentence punctuation (`. , ! ? - : ;`), and collapses
/// whitespace.
pub fn preprocess(text: &str) -> String {
    let text = text.to_lowercase();
    let text = HTML_TAG.replace_all(&text, " ");
    let text = URL.replace_all(&text, " ");
    let text = EMAIL.replace_all(&text, " ");
    let text = DISALLOWED.replace_all(&text, " ");
    let text = NUMBER.replace_all(&text, " ");
    let text = WHITESPACE.replace_all(&text, " ");
    text.trim().to_string()
}

/// Word tokens of preprocessed text. Punctuation-only runs are dropped.
pub fn tokenize(text: &str) -> Vec<&str> {
    WORD.find_iter(text)
        .map(|m| m.as_str())
        .filter(|w| !is_punctuation(w))
        .collect()
}

/// Sentences of preprocessed text, split on `.`, `!`, and `?`.
pub fn sentences(text: &str) -> impl Iterator<Item = &str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

pub(crate) fn is_punctuation(word: &str) -> bool {
    word.chars().all(|c| c.is_ascii_punctuation())
}
