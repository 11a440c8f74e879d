//! gapscope core domain types, configuration, and errors.

mod config;
mod error;
mod types;

pub use config::{
    ActionTemplates, CONFIG_FILE_NAME, GapConfig, IndicatorSets, MAX_RELATED_KEYWORDS,
    PriorityThresholds, RecommendationTemplates, ScoringWeights, SimilaritySettings,
    discover_file, discover_from, load_config,
};
pub use error::GapError;
pub use types::{
    Difficulty, GapType, KeywordMap, KeywordStats, KeywordType, OpportunityRecord, Priority,
    PrioritySummary, SearchIntent, word_count,
};
