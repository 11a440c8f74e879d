use crate::config::PriorityThresholds;
use crate::error::GapError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Keyword statistics keyed by keyword, in insertion order.
///
/// Iteration order is part of the contract: related-keyword lookup returns
/// the first matches encountered, and equal-score opportunities keep the
/// order in which their keywords were inserted.
pub type KeywordMap = IndexMap<String, KeywordStats>;

/// Number of whitespace-separated tokens in a keyword.
pub fn word_count(keyword: &str) -> usize {
    keyword.split_whitespace().count()
}

/// Aggregate statistics for one keyword, as produced by text analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordStats {
    /// Lowercase keyword; may be omitted in serialized maps where the key carries it.
    #[serde(default)]
    pub keyword: String,
    /// Raw occurrence count. Summed across documents on the competitor side.
    #[serde(default)]
    pub frequency: u64,
    /// Number of distinct source documents containing the keyword.
    #[serde(default)]
    pub document_frequency: u64,
    /// Mean per-document importance in [0, 100]. Zero for user-side stats.
    #[serde(default)]
    pub avg_importance: f64,
    /// Indices of the documents the keyword was found in.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub sources: BTreeSet<usize>,
}

impl KeywordStats {
    pub fn new(
        keyword: &str,
        frequency: u64,
        document_frequency: u64,
        avg_importance: f64,
    ) -> Self {
        Self {
            keyword: keyword.to_string(),
            frequency,
            document_frequency,
            avg_importance,
            sources: BTreeSet::new(),
        }
    }

    /// Attach provenance. Document frequency follows the number of sources.
    pub fn with_sources(mut self, sources: impl IntoIterator<Item = usize>) -> Self {
        self.sources = sources.into_iter().collect();
        self.document_frequency = self.sources.len() as u64;
        self
    }

    pub fn word_count(&self) -> usize {
        word_count(&self.keyword)
    }

    /// Reject statistics no keyword producer should emit.
    ///
    /// The gap engine itself never calls this; it is meant for input
    /// boundaries such as files loaded from disk.
    pub fn validate(&self) -> Result<(), GapError> {
        if self.keyword.trim().is_empty() {
            return Err(GapError::InvalidStats("empty keyword".to_string()));
        }
        if !self.avg_importance.is_finite() || !(0.0..=100.0).contains(&self.avg_importance) {
            return Err(GapError::InvalidStats(format!(
                "{}: avg_importance {} outside [0, 100]",
                self.keyword, self.avg_importance
            )));
        }
        if !self.sources.is_empty() && self.sources.len() as u64 != self.document_frequency {
            return Err(GapError::InvalidStats(format!(
                "{}: {} sources but document_frequency {}",
                self.keyword,
                self.sources.len(),
                self.document_frequency
            )));
        }
        Ok(())
    }
}

/// Priority bucket derived from an opportunity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Bucket a score. There is no bucket below `low`: those scores are low too.
    pub fn from_score(score: f64, thresholds: &PriorityThresholds) -> Self {
        if score >= thresholds.high {
            Priority::High
        } else if score >= thresholds.medium {
            Priority::Medium
        } else {
            Priority::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strategic keyword type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordType {
    Commercial,
    Local,
    Informational,
    Head,
    Body,
    LongTail,
}

impl KeywordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeywordType::Commercial => "commercial",
            KeywordType::Local => "local",
            KeywordType::Informational => "informational",
            KeywordType::Head => "head",
            KeywordType::Body => "body",
            KeywordType::LongTail => "long_tail",
        }
    }
}

impl fmt::Display for KeywordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Likely intent of a searcher typing the keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchIntent {
    Transactional,
    Navigational,
    Informational,
    Commercial,
}

impl SearchIntent {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchIntent::Transactional => "transactional",
            SearchIntent::Navigational => "navigational",
            SearchIntent::Informational => "informational",
            SearchIntent::Commercial => "commercial",
        }
    }
}

impl fmt::Display for SearchIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Estimated ranking difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Low,
    Medium,
    High,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Low => "low",
            Difficulty::Medium => "medium",
            Difficulty::High => "high",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a gap was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GapType {
    /// The keyword is absent from the user's keywords by exact string match.
    Exact,
    /// No user keyword reaches the similarity threshold.
    Semantic,
}

impl GapType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GapType::Exact => "exact",
            GapType::Semantic => "semantic",
        }
    }
}

impl fmt::Display for GapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One missing-keyword opportunity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpportunityRecord {
    pub keyword: String,
    pub opportunity_score: f64,
    pub priority: Priority,
    pub competitor_frequency: u64,
    pub found_in_sites: u64,
    pub avg_competitor_importance: f64,
    pub keyword_type: KeywordType,
    pub search_intent: SearchIntent,
    pub estimated_difficulty: Difficulty,
    pub word_count: usize,
    pub recommendations: Vec<String>,
    pub related_user_keywords: Vec<String>,
    pub gap_type: GapType,
}

/// Count of opportunities per priority bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrioritySummary {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl PrioritySummary {
    pub fn from_records(records: &[OpportunityRecord]) -> Self {
        let mut summary = Self::default();
        for record in records {
            match record.priority {
                Priority::High => summary.high += 1,
                Priority::Medium => summary.medium += 1,
                Priority::Low => summary.low += 1,
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }
}
