//! Keyword statistics from page text: preprocessing, word and phrase
//! extraction, importance scoring, and multi-document aggregation.

mod analyzer;
mod config;
mod preprocess;
mod report;
pub mod stopwords;

pub use analyzer::{KeywordAnalyzer, importance_score, keyword_density};
pub use config::AnalyzerConfig;
pub use preprocess::{preprocess, sentences, tokenize};
pub use report::keyword_report;
