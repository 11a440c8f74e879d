use anyhow::Context;
use gapscope_core::{GapError, OpportunityRecord};
use std::io::Write;

const HEADER: [&str; 12] = [
    "Keyword",
    "Opportunity_Score",
    "Priority",
    "Competitor_Frequency",
    "Found_In_Sites",
    "Keyword_Type",
    "Search_Intent",
    "Estimated_Difficulty",
    "Word_Count",
    "Gap_Type",
    "Related_User_Keywords",
    "Recommendations",
];

/// Writes one CSV row per opportunity, in the order given.
pub struct CsvWriter;

impl CsvWriter {
    pub fn render(records: &[OpportunityRecord]) -> anyhow::Result<String> {
        let mut buf = Vec::new();
        Self::write_to(&mut buf, records)?;
        let out = String::from_utf8(buf).map_err(|e| GapError::Render(e.to_string()))?;
        Ok(out)
    }

    pub fn write_to(writer: &mut dyn Write, records: &[OpportunityRecord]) -> anyhow::Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(HEADER).context("Failed to write CSV header")?;

        for record in records {
            wtr.write_record([
                record.keyword.clone(),
                format!("{:.1}", record.opportunity_score),
                record.priority.to_string(),
                record.competitor_frequency.to_string(),
                record.found_in_sites.to_string(),
                record.keyword_type.to_string(),
                record.search_intent.to_string(),
                record.estimated_difficulty.to_string(),
                record.word_count.to_string(),
                record.gap_type.to_string(),
                record.related_user_keywords.join("; "),
                record.recommendations.join("; "),
            ])
            .context("Failed to write CSV record")?;
        }

        wtr.flush().context("Failed to flush CSV writer")?;
        Ok(())
    }
}
