//! Opportunity scoring, keyword classification, and content gap detection.

mod classifier;
mod gap;
mod recommend;
mod scorer;
mod similarity;
mod strategy;

pub use classifier::{KeywordClassifier, KeywordProfile};
pub use gap::{GapFinder, GapOptions};
pub use recommend::{Recommender, fill};
pub use scorer::{OpportunityScorer, ScoreBreakdown};
pub use similarity::{SimilarityMatcher, jaccard, keyword_overlap, token_set};
pub use strategy::ContentStrategy;
