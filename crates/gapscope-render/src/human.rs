use gapscope_core::{OpportunityRecord, PrioritySummary};
use gapscope_score::ContentStrategy;

/// Aligned plain-text table for terminals.
pub struct HumanWriter {
    top: Option<usize>,
}

impl HumanWriter {
    pub fn new() -> Self {
        Self { top: None }
    }

    /// Show at most `top` rows.
    pub fn top(mut self, top: Option<usize>) -> Self {
        self.top = top;
        self
    }

    pub fn render(
        &self,
        records: &[OpportunityRecord],
        strategy: Option<&ContentStrategy>,
    ) -> String {
        if records.is_empty() {
            return "No missing keywords found.\n".to_string();
        }

        let summary = PrioritySummary::from_records(records);
        let mut out = format!(
            "Missing keywords: {} (high {}, medium {}, low {})\n\n",
            summary.total(),
            summary.high,
            summary.medium,
            summary.low
        );

        out.push_str(&format!(
            "{:>3}  {:>5}  {:<8}  {:<13}  {:<13}  {:>5}  {}\n",
            "#", "Score", "Priority", "Type", "Intent", "Sites", "Keyword"
        ));
        let shown = self.top.unwrap_or(records.len()).min(records.len());
        for (i, r) in records.iter().take(shown).enumerate() {
            out.push_str(&format!(
                "{:>3}  {:>5.1}  {:<8}  {:<13}  {:<13}  {:>5}  {}\n",
                i + 1,
                r.opportunity_score,
                r.priority.as_str(),
                r.keyword_type.as_str(),
                r.search_intent.as_str(),
                r.found_in_sites,
                r.keyword
            ));
        }
        if shown < records.len() {
            out.push_str(&format!("  ... {} more\n", records.len() - shown));
        }

        if let Some(strategy) = strategy {
            if !strategy.recommended_actions.is_empty() {
                out.push_str("\nRecommended actions:\n");
                for action in &strategy.recommended_actions {
                    out.push_str(&format!("  - {action}\n"));
                }
            }
            if !strategy.quick_wins.is_empty() {
                let names: Vec<&str> = strategy
                    .quick_wins
                    .iter()
                    .map(|r| r.keyword.as_str())
                    .collect();
                out.push_str(&format!("\nQuick wins: {}\n", names.join(", ")));
            }
            if !strategy.high_impact_targets.is_empty() {
                let names: Vec<&str> = strategy
                    .high_impact_targets
                    .iter()
                    .map(|r| r.keyword.as_str())
                    .collect();
                out.push_str(&format!("High-impact targets: {}\n", names.join(", ")));
            }
        }

        out
    }
}

impl Default for HumanWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::sample_records;
    use gapscope_core::GapConfig;

    #[test]
    fn table_rows() {
        let out = HumanWriter::new().render(&sample_records(), None);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Missing keywords: 2 (high 1, medium 0, low 1)");
        assert!(lines[2].starts_with("  #  Score  Priority"));
        assert!(lines[3].starts_with("  1   82.0  high"));
        assert!(lines[3].ends_with("buy seo audit"));
        assert!(lines[4].ends_with("keyword clustering guide"));
    }

    #[test]
    fn top_truncates() {
        let out = HumanWriter::new().top(Some(1)).render(&sample_records(), None);
        assert!(out.contains("  ... 1 more"));
        assert!(!out.contains("keyword clustering guide"));
    }

    #[test]
    fn strategy_sections() {
        let records = sample_records();
        let strategy = ContentStrategy::build(&records, 20, &GapConfig::default()).unwrap();
        let out = HumanWriter::new().render(&records, Some(&strategy));
        assert!(out.contains("Recommended actions:"));
        assert!(out.contains("Quick wins: keyword clustering guide"));
        assert!(out.contains("High-impact targets: buy seo audit"));
    }

    #[test]
    fn empty() {
        assert_eq!(HumanWriter::new().render(&[], None), "No missing keywords found.\n");
    }
}
