use crate::classifier::KeywordClassifier;
use crate::recommend::Recommender;
use crate::scorer::OpportunityScorer;
use crate::similarity::{SimilarityMatcher, keyword_overlap};
use gapscope_core::{
    GapConfig, GapType, KeywordMap, KeywordStats, MAX_RELATED_KEYWORDS, OpportunityRecord,
    Priority, word_count,
};
use std::collections::HashSet;
use tracing::{debug, info};

/// Content gap finder: competitor keywords the user's content lacks, ranked
/// by opportunity score.
///
/// Gaps come from two passes:
/// 1. Exact: competitor keywords that are not keys of the user map.
/// 2. Semantic: competitor keywords with no user keyword at or above the
///    similarity threshold. Skipped when the user map is empty.
///
/// A keyword found by both passes is reported once (the exact record) unless
/// [`GapOptions::keep_duplicates`] is set.
#[derive(Debug, Clone)]
pub struct GapFinder {
    config: GapConfig,
    scorer: OpportunityScorer,
    classifier: KeywordClassifier,
    matcher: SimilarityMatcher,
    recommender: Recommender,
    options: GapOptions,
}

/// Per-run knobs for [`GapFinder::find_gaps`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapOptions {
    pub similarity_threshold: f64,
    pub keep_duplicates: bool,
}

impl GapOptions {
    pub fn from_config(config: &GapConfig) -> Self {
        Self {
            similarity_threshold: config.similarity.semantic_threshold,
            keep_duplicates: false,
        }
    }
}

impl Default for GapOptions {
    fn default() -> Self {
        Self::from_config(&GapConfig::default())
    }
}

impl GapFinder {
    pub fn new(config: GapConfig) -> Self {
        Self {
            scorer: OpportunityScorer::new(config.weights.clone()),
            classifier: KeywordClassifier::new(&config.indicators),
            matcher: SimilarityMatcher::new(&config.similarity),
            recommender: Recommender::new(config.recommendations.clone()),
            options: GapOptions::from_config(&config),
            config,
        }
    }

    /// Report a keyword from both passes instead of once.
    pub fn keep_duplicates(mut self, keep: bool) -> Self {
        self.options.keep_duplicates = keep;
        self
    }

    pub fn with_options(mut self, options: GapOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &GapOptions {
        &self.options
    }

    /// Find gaps using the threshold from the finder's options.
    pub fn find_gaps(
        &self,
        competitor_keywords: &KeywordMap,
        user_keywords: &KeywordMap,
    ) -> Vec<OpportunityRecord> {
        self.find_missing_keywords(
            competitor_keywords,
            user_keywords,
            self.options.similarity_threshold,
        )
    }

    /// Find missing keywords, sorted by opportunity score (descending).
    ///
    /// Equal scores keep the order in which they were found: exact gaps in
    /// competitor-map order, then semantic gaps in the same order.
    pub fn find_missing_keywords(
        &self,
        competitor_keywords: &KeywordMap,
        user_keywords: &KeywordMap,
        similarity_threshold: f64,
    ) -> Vec<OpportunityRecord> {
        info!(
            "Analyzing {} competitor keywords against {} user keywords",
            competitor_keywords.len(),
            user_keywords.len()
        );

        let mut opportunities: Vec<OpportunityRecord> = competitor_keywords
            .iter()
            .filter(|(keyword, _)| !user_keywords.contains_key(keyword.as_str()))
            .map(|(keyword, stats)| {
                self.analyze_keyword_opportunity(keyword, stats, user_keywords)
            })
            .collect();
        let exact = opportunities.len();

        let semantic =
            self.find_semantic_gaps(competitor_keywords, user_keywords, similarity_threshold);
        debug!(exact, semantic = semantic.len(), "gap passes complete");
        opportunities.extend(semantic);

        if !self.options.keep_duplicates {
            let before = opportunities.len();
            let mut seen: HashSet<String> = HashSet::new();
            opportunities.retain(|o| seen.insert(o.keyword.clone()));
            debug!(removed = before - opportunities.len(), "deduplicated gaps");
        }

        // sort_by is stable: ties keep insertion order
        opportunities.sort_by(|a, b| {
            b.opportunity_score
                .partial_cmp(&a.opportunity_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        info!("Found {} keyword opportunities", opportunities.len());
        opportunities
    }

    /// Score, classify, and annotate one missing keyword as an exact gap.
    pub fn analyze_keyword_opportunity(
        &self,
        keyword: &str,
        stats: &KeywordStats,
        user_keywords: &KeywordMap,
    ) -> OpportunityRecord {
        let score = self.scorer.score(
            stats.frequency,
            stats.document_frequency,
            stats.avg_importance,
            keyword,
            user_keywords,
        );
        let profile = self.classifier.profile(keyword);

        OpportunityRecord {
            keyword: keyword.to_string(),
            opportunity_score: score,
            priority: self.determine_priority(score),
            competitor_frequency: stats.frequency,
            found_in_sites: stats.document_frequency,
            avg_competitor_importance: stats.avg_importance,
            keyword_type: profile.keyword_type,
            search_intent: profile.intent,
            estimated_difficulty: profile.difficulty,
            word_count: word_count(keyword),
            recommendations: self.recommender.recommend(stats, &profile),
            related_user_keywords: self.find_related_user_keywords(keyword, user_keywords),
            gap_type: GapType::Exact,
        }
    }

    /// Competitor keywords with no user keyword reaching `similarity_threshold`.
    ///
    /// Returns nothing when the user has no keywords.
    pub fn find_semantic_gaps(
        &self,
        competitor_keywords: &KeywordMap,
        user_keywords: &KeywordMap,
        similarity_threshold: f64,
    ) -> Vec<OpportunityRecord> {
        if user_keywords.is_empty() {
            return Vec::new();
        }

        competitor_keywords
            .iter()
            .filter(|(keyword, _)| {
                !user_keywords
                    .keys()
                    .any(|uk| self.matcher.similarity(keyword, uk) >= similarity_threshold)
            })
            .map(|(keyword, stats)| {
                let mut record = self.analyze_keyword_opportunity(keyword, stats, user_keywords);
                record.gap_type = GapType::Semantic;
                record
            })
            .collect()
    }

    /// First user keywords (in map order) sharing enough tokens with `keyword`.
    pub fn find_related_user_keywords(
        &self,
        keyword: &str,
        user_keywords: &KeywordMap,
    ) -> Vec<String> {
        let threshold = self.config.similarity.related_threshold;
        user_keywords
            .keys()
            .filter(|uk| {
                let overlap = keyword_overlap(keyword, uk);
                overlap > 0.0 && overlap >= threshold
            })
            .take(self.config.related_limit.min(MAX_RELATED_KEYWORDS))
            .cloned()
            .collect()
    }

    pub fn determine_priority(&self, score: f64) -> Priority {
        Priority::from_score(score, &self.config.thresholds)
    }
}

impl Default for GapFinder {
    fn default() -> Self {
        Self::new(GapConfig::default())
    }
}
