use gapscope_core::{OpportunityRecord, PrioritySummary};
use serde::Serialize;
use std::io::Write;

/// Format version written in the header line.
pub const JSONL_VERSION: &str = "1.0";

/// Writes opportunities as JSONL: a header line, one line per opportunity,
/// and a footer line with priority counts.
pub struct JsonlWriter {
    similarity_threshold: f64,
    competitor_keywords: usize,
    user_keywords: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Header {
    version: String,
    similarity_threshold: f64,
    competitor_keywords: usize,
    user_keywords: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Entry<'a> {
    keyword: &'a str,
    score: f64,
    priority: &'static str,
    competitor_frequency: u64,
    found_in_sites: u64,
    keyword_type: &'static str,
    search_intent: &'static str,
    difficulty: &'static str,
    gap_type: &'static str,
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    related: &'a [String],
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Footer {
    total_opportunities: usize,
    high: usize,
    medium: usize,
    low: usize,
}

impl JsonlWriter {
    pub fn new(similarity_threshold: f64) -> Self {
        Self {
            similarity_threshold,
            competitor_keywords: 0,
            user_keywords: 0,
        }
    }

    /// Sizes of the two keyword maps the opportunities were computed from.
    pub fn inputs(mut self, competitor_keywords: usize, user_keywords: usize) -> Self {
        self.competitor_keywords = competitor_keywords;
        self.user_keywords = user_keywords;
        self
    }

    pub fn render(&self, records: &[OpportunityRecord]) -> anyhow::Result<String> {
        let mut buf = Vec::new();
        self.write_to(&mut buf, records)?;
        Ok(String::from_utf8(buf)?)
    }

    pub fn write_to(
        &self,
        writer: &mut dyn Write,
        records: &[OpportunityRecord],
    ) -> anyhow::Result<()> {
        let header = Header {
            version: JSONL_VERSION.to_string(),
            similarity_threshold: self.similarity_threshold,
            competitor_keywords: self.competitor_keywords,
            user_keywords: self.user_keywords,
        };
        serde_json::to_writer(&mut *writer, &header)?;
        writeln!(writer)?;

        for record in records {
            let entry = Entry {
                keyword: &record.keyword,
                score: record.opportunity_score,
                priority: record.priority.as_str(),
                competitor_frequency: record.competitor_frequency,
                found_in_sites: record.found_in_sites,
                keyword_type: record.keyword_type.as_str(),
                search_intent: record.search_intent.as_str(),
                difficulty: record.estimated_difficulty.as_str(),
                gap_type: record.gap_type.as_str(),
                related: &record.related_user_keywords,
            };
            serde_json::to_writer(&mut *writer, &entry)?;
            writeln!(writer)?;
        }

        let summary = PrioritySummary::from_records(records);
        let footer = Footer {
            total_opportunities: records.len(),
            high: summary.high,
            medium: summary.medium,
            low: summary.low,
        };
        serde_json::to_writer(&mut *writer, &footer)?;
        writeln!(writer)?;

        Ok(())
    }
}
