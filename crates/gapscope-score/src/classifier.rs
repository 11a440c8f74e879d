use gapscope_core::{Difficulty, IndicatorSets, KeywordType, SearchIntent, word_count};

/// Word count at or above which a keyword without competitive terms is easy.
const LONG_TAIL_MIN_WORDS: usize = 4;

/// Type, difficulty, and intent of one keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordProfile {
    pub keyword_type: KeywordType,
    pub difficulty: Difficulty,
    pub intent: SearchIntent,
}

/// Indicator-based keyword classifier.
///
/// Every check is a case-insensitive substring test against an indicator
/// list, so "at" matches inside "strategy". Type and intent are independent
/// passes; a keyword like "buy seo" is both commercial and transactional.
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    indicators: IndicatorSets,
}

impl KeywordClassifier {
    pub fn new(indicators: &IndicatorSets) -> Self {
        let lower = |list: &[String]| -> Vec<String> {
            list.iter()
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect()
        };
        Self {
            indicators: IndicatorSets {
                commercial: lower(&indicators.commercial),
                informational: lower(&indicators.informational),
                local: lower(&indicators.local),
                transactional: lower(&indicators.transactional),
                navigational: lower(&indicators.navigational),
                competitive: lower(&indicators.competitive),
            },
        }
    }

    /// Classify type, difficulty, and intent together.
    pub fn profile(&self, keyword: &str) -> KeywordProfile {
        KeywordProfile {
            keyword_type: self.classify_type(keyword),
            difficulty: self.estimate_difficulty(keyword),
            intent: self.classify_intent(keyword),
        }
    }

    /// Commercial, then local, then informational; otherwise bucket by length.
    pub fn classify_type(&self, keyword: &str) -> KeywordType {
        let lower = keyword.to_lowercase();
        let ind = &self.indicators;

        if contains_any(&lower, &ind.commercial) {
            return KeywordType::Commercial;
        }
        if contains_any(&lower, &ind.local) {
            return KeywordType::Local;
        }
        if contains_any(&lower, &ind.informational) {
            return KeywordType::Informational;
        }

        match word_count(keyword) {
            0 | 1 => KeywordType::Head,
            2 => KeywordType::Body,
            _ => KeywordType::LongTail,
        }
    }

    /// Single words are hard; competitive terms are hard unless the keyword is
    /// long; four or more plain words are easy.
    pub fn estimate_difficulty(&self, keyword: &str) -> Difficulty {
        let words = word_count(keyword);
        let lower = keyword.to_lowercase();

        if words <= 1 {
            return Difficulty::High;
        }
        if contains_any(&lower, &self.indicators.competitive) {
            return if words <= 2 {
                Difficulty::High
            } else {
                Difficulty::Medium
            };
        }
        if words >= LONG_TAIL_MIN_WORDS {
            return Difficulty::Low;
        }
        Difficulty::Medium
    }

    /// Transactional, then navigational, then informational; otherwise commercial.
    pub fn classify_intent(&self, keyword: &str) -> SearchIntent {
        let lower = keyword.to_lowercase();
        let ind = &self.indicators;

        if contains_any(&lower, &ind.transactional) {
            SearchIntent::Transactional
        } else if contains_any(&lower, &ind.navigational) {
            SearchIntent::Navigational
        } else if contains_any(&lower, &ind.informational) {
            SearchIntent::Informational
        } else {
            SearchIntent::Commercial
        }
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new(&IndicatorSets::default())
    }
}

fn contains_any(haystack: &str, needles: &[String]) -> bool {
    needles.iter().any(|n| haystack.contains(n.as_str()))
}
