use gapscope_core::SimilaritySettings;
use std::collections::HashSet;

/// Lowercase whitespace tokens of a keyword, deduplicated.
pub fn token_set(keyword: &str) -> HashSet<String> {
    keyword
        .split_whitespace()
        .map(|w| w.to_lowercase())
        .collect()
}

/// Jaccard index `|A ∩ B| / |A ∪ B|`. Zero when either set is empty.
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    intersection as f64 / union as f64
}

/// Jaccard overlap of two keywords' token sets, with no partial-match bonus.
pub fn keyword_overlap(a: &str, b: &str) -> f64 {
    jaccard(&token_set(a), &token_set(b))
}

/// Token-overlap similarity with a bonus for words contained in one another.
///
/// This is not a semantic model: "seo" and "optimization" are unrelated to it.
#[derive(Debug, Clone)]
pub struct SimilarityMatcher {
    partial_match_bonus: f64,
    max_partial_bonus: f64,
}

impl SimilarityMatcher {
    pub fn new(settings: &SimilaritySettings) -> Self {
        Self {
            partial_match_bonus: settings.partial_match_bonus,
            max_partial_bonus: settings.max_partial_bonus,
        }
    }

    /// Similarity in [0.0, 1.0].
    ///
    /// Jaccard of the token sets plus `partial_match_bonus` for every
    /// (word of `a`, word of `b`) pair where one contains the other, with the
    /// bonus capped at `max_partial_bonus`. Identical words are such a pair too,
    /// so shared tokens count toward both terms.
    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        let words_a = token_set(a);
        let words_b = token_set(b);

        if words_a.is_empty() || words_b.is_empty() {
            return 0.0;
        }

        let base = jaccard(&words_a, &words_b);

        let mut partial_matches = 0usize;
        for wa in &words_a {
            for wb in &words_b {
                if wa.contains(wb.as_str()) || wb.contains(wa.as_str()) {
                    partial_matches += 1;
                }
            }
        }
        let bonus = (partial_matches as f64 * self.partial_match_bonus).min(self.max_partial_bonus);

        (base + bonus).min(1.0)
    }
}

impl Default for SimilarityMatcher {
    fn default() -> Self {
        Self::new(&SimilaritySettings::default())
    }
}
