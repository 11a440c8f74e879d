use crate::classifier::KeywordProfile;
use gapscope_core::{KeywordStats, RecommendationTemplates};

/// Substitute `{name}` placeholders in a template.
pub fn fill(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (name, value) in vars {
        out = out.replace(&format!("{{{name}}}"), value);
    }
    out
}

/// Builds recommendation text for an opportunity from configured templates.
#[derive(Debug, Clone)]
pub struct Recommender {
    templates: RecommendationTemplates,
}

impl Recommender {
    pub fn new(templates: RecommendationTemplates) -> Self {
        Self { templates }
    }

    /// Recommendations in a fixed order: usage notes, then type advice, then intent advice.
    pub fn recommend(&self, stats: &KeywordStats, profile: &KeywordProfile) -> Vec<String> {
        let t = &self.templates;
        let vars = [
            ("frequency", stats.frequency.to_string()),
            ("document_frequency", stats.document_frequency.to_string()),
        ];
        let mut out = Vec::new();

        if stats.frequency > t.high_frequency_min {
            out.push(fill(&t.high_frequency, &vars));
        }
        if stats.document_frequency > t.multi_competitor_min {
            out.push(fill(&t.multi_competitor, &vars));
        }
        if let Some(advice) = t.by_type.get(profile.keyword_type.as_str()) {
            out.push(fill(advice, &vars));
        }
        if let Some(advice) = t.by_intent.get(profile.intent.as_str()) {
            out.push(fill(advice, &vars));
        }

        out
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new(RecommendationTemplates::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gapscope_core::{Difficulty, KeywordType, SearchIntent};

    fn profile(keyword_type: KeywordType, intent: SearchIntent) -> KeywordProfile {
        KeywordProfile {
            keyword_type,
            difficulty: Difficulty::Medium,
            intent,
        }
    }

    #[test]
    fn fill_replaces_placeholders() {
        let s = fill(
            "{a} and {b} and {a}",
            &[("a", "1".to_string()), ("b", "2".to_string())],
        );
        assert_eq!(s, "1 and 2 and 1");
    }

    #[test]
    fn high_frequency_and_multi_site_notes() {
        let r = Recommender::default();
        let stats = KeywordStats::new("seo tools", 12, 4, 50.0);
        let recs = r.recommend(&stats, &profile(KeywordType::Body, SearchIntent::Commercial));
        assert_eq!(recs.len(), 2);
        assert!(recs[0].contains("12 times"));
        assert!(recs[1].contains("4 different competitors"));
    }

    #[test]
    fn thresholds_are_strict() {
        let r = Recommender::default();
        let stats = KeywordStats::new("seo tools", 10, 3, 50.0);
        let recs = r.recommend(&stats, &profile(KeywordType::Body, SearchIntent::Commercial));
        assert!(recs.is_empty());
    }

    #[test]
    fn type_and_intent_advice() {
        let r = Recommender::default();
        let stats = KeywordStats::new("how to buy seo", 1, 1, 0.0);
        let recs = r.recommend(
            &stats,
            &profile(KeywordType::Informational, SearchIntent::Transactional),
        );
        assert_eq!(recs.len(), 2);
        assert!(recs[0].contains("guide or tutorial"));
        assert!(recs[1].contains("landing pages"));
    }

    #[test]
    fn custom_templates() {
        let mut templates = RecommendationTemplates::default();
        templates.high_frequency = "{frequency}x".to_string();
        templates.by_type.clear();
        templates.by_intent.clear();
        let r = Recommender::new(templates);
        let stats = KeywordStats::new("seo", 20, 1, 0.0);
        let recs = r.recommend(&stats, &profile(KeywordType::Head, SearchIntent::Commercial));
        assert_eq!(recs, vec!["20x".to_string()]);
    }
}
