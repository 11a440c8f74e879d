use crate::recommend::fill;
use gapscope_core::{
    ActionTemplates, Difficulty, GapConfig, KeywordType, OpportunityRecord, Priority,
    PrioritySummary, SearchIntent,
};
use serde::Serialize;
use std::collections::BTreeMap;

/// Number of records listed in each of the quick-win and high-impact lists.
const SHORTLIST_LEN: usize = 5;

/// Content plan derived from the top opportunities.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentStrategy {
    /// All opportunities, not just the top N.
    pub total_opportunities: usize,
    pub priority_breakdown: PrioritySummary,
    /// Count per keyword type among the top N.
    pub keyword_type_breakdown: BTreeMap<String, usize>,
    /// Count per search intent among the top N.
    pub intent_breakdown: BTreeMap<String, usize>,
    pub recommended_actions: Vec<String>,
    /// Low-difficulty opportunities, best first.
    pub quick_wins: Vec<OpportunityRecord>,
    /// High-priority opportunities, best first.
    pub high_impact_targets: Vec<OpportunityRecord>,
}

impl ContentStrategy {
    /// Build a strategy from opportunities already sorted by score.
    ///
    /// Returns `None` when there are no opportunities.
    pub fn build(
        opportunities: &[OpportunityRecord],
        top_n: usize,
        config: &GapConfig,
    ) -> Option<Self> {
        if opportunities.is_empty() {
            return None;
        }

        let top = &opportunities[..top_n.min(opportunities.len())];

        let mut keyword_type_breakdown: BTreeMap<String, usize> = BTreeMap::new();
        let mut intent_breakdown: BTreeMap<String, usize> = BTreeMap::new();
        for o in top {
            *keyword_type_breakdown
                .entry(o.keyword_type.as_str().to_string())
                .or_default() += 1;
            *intent_breakdown
                .entry(o.search_intent.as_str().to_string())
                .or_default() += 1;
        }

        let priority_breakdown = PrioritySummary::from_records(top);

        Some(Self {
            total_opportunities: opportunities.len(),
            priority_breakdown,
            recommended_actions: action_plan(
                top,
                &priority_breakdown,
                &config.recommendations.actions,
            ),
            keyword_type_breakdown,
            intent_breakdown,
            quick_wins: top
                .iter()
                .filter(|o| o.estimated_difficulty == Difficulty::Low)
                .take(SHORTLIST_LEN)
                .cloned()
                .collect(),
            high_impact_targets: top
                .iter()
                .filter(|o| o.priority == Priority::High)
                .take(SHORTLIST_LEN)
                .cloned()
                .collect(),
        })
    }
}

/// Ordered action list: priority first, then content types, then intents.
fn action_plan(
    top: &[OpportunityRecord],
    priorities: &PrioritySummary,
    templates: &ActionTemplates,
) -> Vec<String> {
    let count_type = |t: KeywordType| top.iter().filter(|o| o.keyword_type == t).count();
    let count_intent = |i: SearchIntent| top.iter().filter(|o| o.search_intent == i).count();

    let steps = [
        (priorities.high, &templates.high_priority),
        (
            count_type(KeywordType::Informational),
            &templates.informational_content,
        ),
        (count_type(KeywordType::Commercial), &templates.commercial_pages),
        (count_type(KeywordType::Local), &templates.local_content),
        (
            count_intent(SearchIntent::Transactional),
            &templates.transactional_pages,
        ),
        (
            count_intent(SearchIntent::Informational),
            &templates.informational_resources,
        ),
    ];

    steps
        .into_iter()
        .filter(|(count, _)| *count > 0)
        .map(|(count, template)| fill(template, &[("count", count.to_string())]))
        .collect()
}
