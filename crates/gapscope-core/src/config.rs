use crate::error::GapError;
use crate::types::{KeywordType, SearchIntent};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// File name searched for by [`discover_file`].
pub const CONFIG_FILE_NAME: &str = "gapscope.toml";

/// Configuration for the gap engine. Immutable for the duration of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GapConfig {
    pub thresholds: PriorityThresholds,
    pub weights: ScoringWeights,
    pub indicators: IndicatorSets,
    pub similarity: SimilaritySettings,
    pub recommendations: RecommendationTemplates,
    /// Maximum number of related user keywords attached to a record.
    pub related_limit: usize,
}

impl Default for GapConfig {
    fn default() -> Self {
        Self {
            thresholds: PriorityThresholds::default(),
            weights: ScoringWeights::default(),
            indicators: IndicatorSets::default(),
            similarity: SimilaritySettings::default(),
            recommendations: RecommendationTemplates::default(),
            related_limit: 5,
        }
    }
}

/// Score cut-offs for the priority buckets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityThresholds {
    pub high: f64,
    pub medium: f64,
    pub low: f64,
}

impl Default for PriorityThresholds {
    fn default() -> Self {
        Self {
            high: 75.0,
            medium: 50.0,
            low: 25.0,
        }
    }
}

/// Multipliers and per-component caps of the opportunity score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub frequency_multiplier: f64,
    pub frequency_cap: f64,
    pub document_frequency_multiplier: f64,
    pub document_frequency_cap: f64,
    pub importance_divisor: f64,
    pub importance_cap: f64,
    pub length_multiplier: f64,
    pub length_cap: f64,
    pub relevance_multiplier: f64,
    pub relevance_cap: f64,
    pub max_score: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            frequency_multiplier: 2.0,
            frequency_cap: 30.0,
            document_frequency_multiplier: 5.0,
            document_frequency_cap: 25.0,
            importance_divisor: 5.0,
            importance_cap: 20.0,
            length_multiplier: 2.0,
            length_cap: 10.0,
            relevance_multiplier: 3.0,
            relevance_cap: 15.0,
            max_score: 100.0,
        }
    }
}

/// Indicator word lists used for classification. Matched as lowercase substrings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorSets {
    pub commercial: Vec<String>,
    pub informational: Vec<String>,
    pub local: Vec<String>,
    pub transactional: Vec<String>,
    pub navigational: Vec<String>,
    pub competitive: Vec<String>,
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

impl Default for IndicatorSets {
    fn default() -> Self {
        Self {
            commercial: words(&[
                "buy", "purchase", "order", "shop", "sale", "deal", "discount", "cheap", "best",
                "top", "review", "compare", "vs", "versus",
            ]),
            informational: words(&[
                "how",
                "what",
                "why",
                "when",
                "where",
                "guide",
                "tutorial",
                "tips",
                "learn",
                "understand",
                "explain",
                "definition",
            ]),
            local: words(&["near", "local", "nearby", "around", "close", "in", "at"]),
            transactional: words(&[
                "buy", "purchase", "order", "book", "hire", "contact", "quote", "price", "cost",
                "signup", "register",
            ]),
            navigational: words(&[
                "login", "website", "homepage", "official", "store", "shop", "account",
                "dashboard",
            ]),
            competitive: words(&[
                "best",
                "top",
                "cheap",
                "free",
                "review",
                "buy",
                "online",
                "service",
                "company",
                "business",
                "professional",
            ]),
        }
    }
}

/// Parameters of the token-overlap similarity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilaritySettings {
    /// Added per ordered word pair where one word contains the other.
    pub partial_match_bonus: f64,
    pub max_partial_bonus: f64,
    /// Minimum plain Jaccard overlap for a user keyword to count as related.
    pub related_threshold: f64,
    /// Default threshold below which a competitor keyword is a semantic gap.
    pub semantic_threshold: f64,
}

impl Default for SimilaritySettings {
    fn default() -> Self {
        Self {
            partial_match_bonus: 0.1,
            max_partial_bonus: 0.3,
            related_threshold: 0.3,
            semantic_threshold: 0.8,
        }
    }
}

/// Text templates for recommendations and action plans.
///
/// Placeholders: `{frequency}`, `{document_frequency}` in the keyword
/// templates and `{count}` in the action templates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationTemplates {
    /// Frequency strictly above this triggers `high_frequency`.
    pub high_frequency_min: u64,
    /// Document frequency strictly above this triggers `multi_competitor`.
    pub multi_competitor_min: u64,
    pub high_frequency: String,
    pub multi_competitor: String,
    /// Advice per keyword type, keyed by the type's name (`long_tail`, ...).
    pub by_type: BTreeMap<String, String>,
    /// Advice per search intent, keyed by the intent's name.
    pub by_intent: BTreeMap<String, String>,
    pub actions: ActionTemplates,
}

impl Default for RecommendationTemplates {
    fn default() -> Self {
        let by_type: BTreeMap<String, String> = BTreeMap::from([
            (
                KeywordType::Informational.as_str().to_string(),
                "Create comprehensive guide or tutorial content".to_string(),
            ),
            (
                KeywordType::Commercial.as_str().to_string(),
                "Optimize product/service pages and create comparison content".to_string(),
            ),
            (
                KeywordType::Local.as_str().to_string(),
                "Optimize for local SEO and create location-specific content".to_string(),
            ),
            (
                KeywordType::LongTail.as_str().to_string(),
                "Target with specific, detailed content pages".to_string(),
            ),
        ]);
        let by_intent: BTreeMap<String, String> = BTreeMap::from([
            (
                SearchIntent::Transactional.as_str().to_string(),
                "Focus on conversion-optimized landing pages".to_string(),
            ),
            (
                SearchIntent::Informational.as_str().to_string(),
                "Create educational blog posts or resource pages".to_string(),
            ),
        ]);

        Self {
            high_frequency_min: 10,
            multi_competitor_min: 3,
            high_frequency:
                "High-priority target: appears {frequency} times across competitor sites"
                    .to_string(),
            multi_competitor:
                "Strong opportunity: used by {document_frequency} different competitors"
                    .to_string(),
            by_type,
            by_intent,
            actions: ActionTemplates::default(),
        }
    }
}

/// Templates for the content-strategy action plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionTemplates {
    pub high_priority: String,
    pub informational_content: String,
    pub commercial_pages: String,
    pub local_content: String,
    pub transactional_pages: String,
    pub informational_resources: String,
}

impl Default for ActionTemplates {
    fn default() -> Self {
        Self {
            high_priority: "Immediately target {count} high-priority keywords".to_string(),
            informational_content: "Create {count} educational blog posts or guides".to_string(),
            commercial_pages: "Optimize {count} product/service pages".to_string(),
            local_content: "Develop {count} location-specific content pieces".to_string(),
            transactional_pages: "Create {count} conversion-focused landing pages".to_string(),
            informational_resources: "Develop {count} educational resources".to_string(),
        }
    }
}

/// Most related user keywords a record may carry.
pub const MAX_RELATED_KEYWORDS: usize = 5;

impl GapConfig {
    /// Reject settings that would push scores or related lists out of range.
    pub fn validate(&self) -> Result<(), GapError> {
        let max_score = self.weights.max_score;
        if !max_score.is_finite() || max_score < 0.0 {
            return Err(GapError::Config(format!(
                "weights.max_score must be a non-negative number, got {max_score}"
            )));
        }
        let threshold = self.similarity.semantic_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(GapError::Config(format!(
                "similarity.semantic_threshold must be within [0, 1], got {threshold}"
            )));
        }
        if self.related_limit > MAX_RELATED_KEYWORDS {
            return Err(GapError::Config(format!(
                "related_limit must be at most {MAX_RELATED_KEYWORDS}, got {}",
                self.related_limit
            )));
        }
        Ok(())
    }
}

/// Deserialize a `.toml` or `.json` config file into any settings type.
pub fn load_config<T: DeserializeOwned>(path: &Path) -> Result<T, GapError> {
    let format = match path.extension().and_then(|e| e.to_str()) {
        Some(ext @ ("toml" | "json")) => ext,
        _ => {
            return Err(GapError::Config(format!(
                "Unsupported config format: {} (expected .toml or .json)",
                path.display()
            )));
        }
    };

    let content = read_config(path)?;
    if format == "toml" {
        toml::from_str(&content)
            .map_err(|e| GapError::Config(format!("Invalid TOML in {}: {}", path.display(), e)))
    } else {
        serde_json::from_str(&content)
            .map_err(|e| GapError::Config(format!("Invalid JSON in {}: {}", path.display(), e)))
    }
}

/// Read a config file, mapping failures to [`GapError::Config`].
fn read_config(path: &Path) -> Result<String, GapError> {
    std::fs::read_to_string(path).map_err(|e| {
        GapError::Config(format!("Failed to read config file {}: {}", path.display(), e))
    })
}

/// Locate the nearest `gapscope.toml`, walking up from the current directory.
pub fn discover_file() -> Result<Option<PathBuf>, GapError> {
    Ok(discover_from(&std::env::current_dir()?))
}

/// Locate the nearest `gapscope.toml` in `start` or one of its ancestors.
pub fn discover_from(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}
