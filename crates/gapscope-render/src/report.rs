use gapscope_core::{KeywordMap, OpportunityRecord, PrioritySummary};
use gapscope_score::ContentStrategy;
use serde::Serialize;
use std::io::Write;

const TOP_COMPETITOR_KEYWORDS: usize = 10;

/// Writes one pretty-printed JSON document with the full analysis.
pub struct ReportWriter {
    similarity_threshold: f64,
    user_keywords: usize,
}

#[derive(Serialize)]
struct Report<'a> {
    metadata: Metadata,
    competitor_keywords: &'a KeywordMap,
    missing_keywords: &'a [OpportunityRecord],
    summary_statistics: SummaryStatistics<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    strategy: Option<&'a ContentStrategy>,
}

#[derive(Serialize)]
struct Metadata {
    tool: &'static str,
    version: &'static str,
    similarity_threshold: f64,
    total_competitor_keywords: usize,
    total_user_keywords: usize,
    total_missing_keywords: usize,
}

#[derive(Serialize)]
struct SummaryStatistics<'a> {
    competitor_analysis: CompetitorAnalysis<'a>,
    opportunity_analysis: OpportunityAnalysis,
}

#[derive(Serialize)]
struct CompetitorAnalysis<'a> {
    total_keywords: usize,
    avg_frequency: f64,
    top_keywords: Vec<&'a str>,
}

#[derive(Serialize)]
struct OpportunityAnalysis {
    total_opportunities: usize,
    high_priority: usize,
    medium_priority: usize,
    low_priority: usize,
    avg_opportunity_score: f64,
}

impl ReportWriter {
    pub fn new(similarity_threshold: f64) -> Self {
        Self {
            similarity_threshold,
            user_keywords: 0,
        }
    }

    pub fn user_keywords(mut self, count: usize) -> Self {
        self.user_keywords = count;
        self
    }

    pub fn render(
        &self,
        competitor_keywords: &KeywordMap,
        records: &[OpportunityRecord],
        strategy: Option<&ContentStrategy>,
    ) -> anyhow::Result<String> {
        let mut buf = Vec::new();
        self.write_to(&mut buf, competitor_keywords, records, strategy)?;
        Ok(String::from_utf8(buf)?)
    }

    pub fn write_to(
        &self,
        writer: &mut dyn Write,
        competitor_keywords: &KeywordMap,
        records: &[OpportunityRecord],
        strategy: Option<&ContentStrategy>,
    ) -> anyhow::Result<()> {
        let report = Report {
            metadata: Metadata {
                tool: "gapscope",
                version: env!("CARGO_PKG_VERSION"),
                similarity_threshold: self.similarity_threshold,
                total_competitor_keywords: competitor_keywords.len(),
                total_user_keywords: self.user_keywords,
                total_missing_keywords: records.len(),
            },
            competitor_keywords,
            missing_keywords: records,
            summary_statistics: SummaryStatistics {
                competitor_analysis: competitor_analysis(competitor_keywords),
                opportunity_analysis: opportunity_analysis(records),
            },
            strategy,
        };

        serde_json::to_writer_pretty(&mut *writer, &report)?;
        writeln!(writer)?;
        Ok(())
    }
}

fn competitor_analysis(keywords: &KeywordMap) -> CompetitorAnalysis<'_> {
    let avg_frequency = if keywords.is_empty() {
        0.0
    } else {
        keywords.values().map(|s| s.frequency).sum::<u64>() as f64 / keywords.len() as f64
    };

    let mut by_frequency: Vec<(&String, u64)> =
        keywords.iter().map(|(k, s)| (k, s.frequency)).collect();
    by_frequency.sort_by(|a, b| b.1.cmp(&a.1));

    CompetitorAnalysis {
        total_keywords: keywords.len(),
        avg_frequency,
        top_keywords: by_frequency
            .into_iter()
            .take(TOP_COMPETITOR_KEYWORDS)
            .map(|(k, _)| k.as_str())
            .collect(),
    }
}

fn opportunity_analysis(records: &[OpportunityRecord]) -> OpportunityAnalysis {
    let summary = PrioritySummary::from_records(records);
    let avg_opportunity_score = if records.is_empty() {
        0.0
    } else {
        records.iter().map(|r| r.opportunity_score).sum::<f64>() / records.len() as f64
    };

    OpportunityAnalysis {
        total_opportunities: records.len(),
        high_priority: summary.high,
        medium_priority: summary.medium,
        low_priority: summary.low,
        avg_opportunity_score,
    }
}
