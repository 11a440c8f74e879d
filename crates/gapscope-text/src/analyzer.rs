use crate::config::AnalyzerConfig;
use crate::preprocess::{is_punctuation, preprocess, sentences, tokenize};
use crate::stopwords;
use gapscope_core::{KeywordMap, KeywordStats, word_count};
use indexmap::IndexMap;
use rayon::prelude::*;
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, info};

/// Bytes of surrounding text kept on each side of a keyword match.
const CONTEXT_WINDOW: usize = 50;
const MIN_PHRASE_CHARS: usize = 4;
const MAX_PHRASE_CHARS: usize = 100;
const CONTEXT_BOOST: f64 = 0.1;

/// Extracts keyword statistics from page text.
///
/// Single words and multi-word phrases are both counted as terms. A text is
/// first normalized with [`preprocess`], so callers pass raw content.
#[derive(Debug, Clone)]
pub struct KeywordAnalyzer {
    config: AnalyzerConfig,
    stopwords: HashSet<String>,
    irrelevant: HashSet<&'static str>,
    connectors: HashSet<&'static str>,
}

#[derive(Default)]
struct Aggregate {
    frequency: u64,
    total_importance: f64,
    sources: BTreeSet<usize>,
}

impl KeywordAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        let mut stop: HashSet<String> = stopwords::ENGLISH
            .iter()
            .chain(stopwords::SEO)
            .map(|w| w.to_string())
            .collect();
        stop.extend(
            config
                .custom_stopwords
                .iter()
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );

        Self {
            config,
            stopwords: stop,
            irrelevant: stopwords::IRRELEVANT.iter().copied().collect(),
            connectors: stopwords::CONNECTORS.iter().copied().collect(),
        }
    }

    /// Single-word keywords of preprocessed text, in text order with repeats.
    pub fn extract_keywords(&self, processed: &str) -> Vec<String> {
        let min = self.config.min_keyword_length.max(2);
        let max = self.config.max_keyword_length;

        tokenize(processed)
            .into_iter()
            .filter(|w| {
                let len = w.chars().count();
                len >= min && len <= max
            })
            .map(str::to_lowercase)
            .filter(|w| !self.stopwords.contains(w) && !self.irrelevant.contains(w.as_str()))
            .collect()
    }

    /// Multi-word phrases of preprocessed text.
    ///
    /// Phrases never cross a sentence boundary. Within a sentence, all
    /// n-grams of every allowed length are emitted, shortest first.
    pub fn extract_phrases(&self, processed: &str) -> Vec<String> {
        let min = self.config.min_phrase_words.max(1);
        let max = self.config.max_phrase_words;
        let mut phrases = Vec::new();

        for sentence in sentences(processed) {
            let words = tokenize(sentence);
            for n in min..=max {
                if n > words.len() {
                    break;
                }
                for window in words.windows(n) {
                    if self.is_valid_phrase(window) {
                        phrases.push(window.join(" "));
                    }
                }
            }
        }

        phrases
    }

    /// A phrase needs a content word, no connector at either end, something
    /// other than digits and punctuation, and a sane length.
    pub fn is_valid_phrase(&self, words: &[&str]) -> bool {
        let (Some(first), Some(last)) = (words.first(), words.last()) else {
            return false;
        };
        if words.iter().all(|w| self.stopwords.contains(*w)) {
            return false;
        }
        if self.connectors.contains(*first) || self.connectors.contains(*last) {
            return false;
        }
        if words
            .iter()
            .all(|w| w.chars().all(|c| c.is_ascii_digit()) || is_punctuation(w))
        {
            return false;
        }

        let chars = words.iter().map(|w| w.chars().count()).sum::<usize>() + words.len() - 1;
        (MIN_PHRASE_CHARS..=MAX_PHRASE_CHARS).contains(&chars)
    }

    /// Keyword statistics for one document.
    ///
    /// Terms appear in first-occurrence order, single words before phrases.
    /// Every entry has document frequency 1 and source 0.
    pub fn analyze_text(&self, text: &str, min_frequency: u64) -> KeywordMap {
        let processed = preprocess(text);

        let mut counts: IndexMap<String, u64> = IndexMap::new();
        let terms = self
            .extract_keywords(&processed)
            .into_iter()
            .chain(self.extract_phrases(&processed));
        for term in terms {
            *counts.entry(term).or_default() += 1;
        }

        counts
            .into_iter()
            .filter(|(_, frequency)| *frequency >= min_frequency)
            .map(|(term, frequency)| {
                let importance = importance_score(&term, frequency, &processed);
                let stats = KeywordStats::new(&term, frequency, 1, importance).with_sources([0]);
                (term, stats)
            })
            .collect()
    }

    /// Aggregate keyword statistics across documents.
    ///
    /// Documents are analysed in parallel, `batch_size` at a time, and merged
    /// in document order, so the result does not depend on scheduling.
    /// Frequencies are summed, sources hold document indices, and importance
    /// is the mean over the documents containing the term.
    pub fn analyze_documents<S>(&self, texts: &[S], min_frequency: u64) -> KeywordMap
    where
        S: AsRef<str> + Sync,
    {
        if texts.is_empty() {
            return KeywordMap::new();
        }

        let batch_size = self.config.batch_size.max(1);
        let batches = texts.len().div_ceil(batch_size);
        let mut aggregate: IndexMap<String, Aggregate> = IndexMap::new();

        for (b, batch) in texts.chunks(batch_size).enumerate() {
            debug!(batch = b + 1, of = batches, "analyzing documents");

            let analyses: Vec<KeywordMap> = batch
                .par_iter()
                .map(|text| self.analyze_text(text.as_ref(), 1))
                .collect();

            for (offset, analysis) in analyses.into_iter().enumerate() {
                let doc = b * batch_size + offset;
                for (keyword, stats) in analysis {
                    let entry = aggregate.entry(keyword).or_default();
                    entry.frequency += stats.frequency;
                    entry.total_importance += stats.avg_importance;
                    entry.sources.insert(doc);
                }
            }
        }

        let keywords: KeywordMap = aggregate
            .into_iter()
            .filter(|(_, agg)| agg.frequency >= min_frequency)
            .map(|(keyword, agg)| {
                let avg = agg.total_importance / agg.sources.len() as f64;
                let stats =
                    KeywordStats::new(&keyword, agg.frequency, 0, avg).with_sources(agg.sources);
                (keyword, stats)
            })
            .collect();

        info!(
            "Analyzed {} documents, {} keywords above frequency {}",
            texts.len(),
            keywords.len(),
            min_frequency
        );
        keywords
    }

    /// Terms of `text` ranked by closeness to `primary`.
    ///
    /// Score is token Jaccard with the primary keyword, plus a boost for each
    /// occurrence whose surrounding text mentions it, plus importance / 100.
    pub fn related_terms(&self, primary: &str, text: &str, top_n: usize) -> Vec<(String, f64)> {
        let processed = preprocess(text);
        let primary = primary.to_lowercase();
        let primary_words: HashSet<&str> = primary.split_whitespace().collect();

        let mut scored: Vec<(String, f64)> = self
            .analyze_text(text, 1)
            .into_iter()
            .map(|(keyword, stats)| {
                let score = {
                    let words: HashSet<&str> = keyword.split_whitespace().collect();
                    let union = primary_words.union(&words).count();
                    let similarity = if union == 0 {
                        0.0
                    } else {
                        primary_words.intersection(&words).count() as f64 / union as f64
                    };
                    let boost = if primary.is_empty() {
                        0.0
                    } else {
                        contexts(&processed, &keyword)
                            .filter(|c| c.contains(primary.as_str()))
                            .count() as f64
                            * CONTEXT_BOOST
                    };
                    similarity + boost + stats.avg_importance / 100.0
                };
                (keyword, score)
            })
            .collect();

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(top_n);
        scored
    }
}

impl Default for KeywordAnalyzer {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

/// Importance of a term within one preprocessed text, in [0, 100].
///
/// - Frequency: 10 per occurrence (max 50)
/// - Length: 5 per word (max 20)
/// - Position: 15 / 10 / 5 when the mean match offset falls in the first
///   10% / 25% / 50% of the text
/// - Density: twice the percentage of words (max 15)
pub fn importance_score(keyword: &str, frequency: u64, text: &str) -> f64 {
    let frequency_score = (frequency as f64 * 10.0).min(50.0);
    let length_bonus = (word_count(keyword) as f64 * 5.0).min(20.0);

    let needle = keyword.to_lowercase();
    let positions: Vec<usize> = if needle.is_empty() {
        Vec::new()
    } else {
        text.match_indices(needle.as_str()).map(|(i, _)| i).collect()
    };
    let position_bonus = if positions.is_empty() {
        0.0
    } else {
        let mean = positions.iter().sum::<usize>() as f64 / positions.len() as f64;
        let fraction = mean / text.len() as f64;
        if fraction < 0.1 {
            15.0
        } else if fraction < 0.25 {
            10.0
        } else if fraction < 0.5 {
            5.0
        } else {
            0.0
        }
    };

    let total_words = text.split_whitespace().count();
    let density = if total_words > 0 {
        frequency as f64 / total_words as f64 * 100.0
    } else {
        0.0
    };
    let density_score = (density * 2.0).min(15.0);

    (frequency_score + length_bonus + position_bonus + density_score).min(100.0)
}

/// Percentage of words in `text` taken up by occurrences of `keyword`,
/// rounded to two decimals.
pub fn keyword_density(text: &str, keyword: &str) -> f64 {
    let text = text.to_lowercase();
    let keyword = keyword.to_lowercase();
    let text_words: Vec<&str> = text.split_whitespace().collect();
    let keyword_words: Vec<&str> = keyword.split_whitespace().collect();

    if text_words.is_empty() || keyword_words.is_empty() {
        return 0.0;
    }

    let count = text_words
        .windows(keyword_words.len())
        .filter(|w| *w == keyword_words.as_slice())
        .count();
    let density = count as f64 / text_words.len() as f64 * 100.0;
    (density * 100.0).round() / 100.0
}

fn contexts<'a>(text: &'a str, keyword: &'a str) -> impl Iterator<Item = &'a str> {
    text.match_indices(keyword).map(move |(pos, matched)| {
        let mut start = pos.saturating_sub(CONTEXT_WINDOW);
        while !text.is_char_boundary(start) {
            start -= 1;
        }
        let mut end = (pos + matched.len() + CONTEXT_WINDOW).min(text.len());
        while !text.is_char_boundary(end) {
            end += 1;
        }
        &text[start..end]
    })
}
