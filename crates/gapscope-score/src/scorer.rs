use crate::similarity::{jaccard, token_set};
use gapscope_core::{KeywordMap, ScoringWeights, word_count};
use serde::Serialize;

/// Upper bound of every opportunity score, whatever the configured `max_score`.
const SCORE_CEILING: f64 = 100.0;

/// Per-component contributions to an opportunity score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub frequency: f64,
    pub document_frequency: f64,
    pub importance: f64,
    pub length: f64,
    pub relevance: f64,
}

impl ScoreBreakdown {
    pub fn sum(&self) -> f64 {
        self.frequency + self.document_frequency + self.importance + self.length + self.relevance
    }
}

/// Opportunity scorer for a missing keyword.
///
/// Scoring signals, each capped independently:
/// - Competitor frequency (0 - 30)
/// - Number of competitor documents using the keyword (0 - 25)
/// - Average competitor importance (0 - 20)
/// - Keyword length (0 - 10)
/// - Token overlap with the user's existing keywords (0 - 15)
#[derive(Debug, Clone)]
pub struct OpportunityScorer {
    weights: ScoringWeights,
}

impl OpportunityScorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Score a keyword. Returns a value in [0.0, 100.0].
    pub fn score(
        &self,
        frequency: u64,
        document_frequency: u64,
        avg_importance: f64,
        keyword: &str,
        user_keywords: &KeywordMap,
    ) -> f64 {
        let breakdown =
            self.breakdown(frequency, document_frequency, avg_importance, keyword, user_keywords);
        breakdown
            .sum()
            .min(self.weights.max_score)
            .clamp(0.0, SCORE_CEILING)
    }

    /// Compute each capped component without summing.
    pub fn breakdown(
        &self,
        frequency: u64,
        document_frequency: u64,
        avg_importance: f64,
        keyword: &str,
        user_keywords: &KeywordMap,
    ) -> ScoreBreakdown {
        let w = &self.weights;

        // Negative or NaN importance contributes nothing
        let importance = if avg_importance.is_finite() {
            avg_importance.max(0.0)
        } else {
            0.0
        };

        ScoreBreakdown {
            frequency: (frequency as f64 * w.frequency_multiplier).min(w.frequency_cap),
            document_frequency: (document_frequency as f64 * w.document_frequency_multiplier)
                .min(w.document_frequency_cap),
            importance: (importance / w.importance_divisor).min(w.importance_cap),
            length: (word_count(keyword) as f64 * w.length_multiplier).min(w.length_cap),
            relevance: self.relevance(keyword, user_keywords),
        }
    }

    /// Sum of Jaccard overlaps with every user keyword, weighted and capped.
    pub fn relevance(&self, keyword: &str, user_keywords: &KeywordMap) -> f64 {
        if user_keywords.is_empty() {
            return 0.0;
        }

        let keyword_words = token_set(keyword);
        let total: f64 = user_keywords
            .keys()
            .map(|uk| jaccard(&keyword_words, &token_set(uk)) * self.weights.relevance_multiplier)
            .sum();

        total.min(self.weights.relevance_cap)
    }
}

impl Default for OpportunityScorer {
    fn default() -> Self {
        Self::new(ScoringWeights::default())
    }
}
