use serde::{Deserialize, Serialize};

/// Keyword extraction settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Shortest single keyword, in characters. Values below 2 act as 2, so
    /// one-letter tokens never become keywords.
    pub min_keyword_length: usize,
    pub max_keyword_length: usize,
    pub min_phrase_words: usize,
    pub max_phrase_words: usize,
    /// Terms seen fewer times are dropped.
    pub min_frequency: u64,
    /// Documents analysed per parallel batch.
    pub batch_size: usize,
    /// Extra stop words on top of the built-in lists.
    pub custom_stopwords: Vec<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            min_keyword_length: 2,
            max_keyword_length: 50,
            min_phrase_words: 2,
            max_phrase_words: 5,
            min_frequency: 2,
            batch_size: 5,
            custom_stopwords: Vec::new(),
        }
    }
}
