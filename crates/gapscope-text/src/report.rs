use gapscope_core::{KeywordMap, KeywordStats, word_count};

/// Plain-text listing of the `top` most important keywords.
pub fn keyword_report(keywords: &KeywordMap, top: usize) -> String {
    let mut ranked: Vec<(&String, &KeywordStats)> = keywords.iter().collect();
    ranked.sort_by(|a, b| {
        b.1.avg_importance
            .partial_cmp(&a.1.avg_importance)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut lines = vec![
        "KEYWORD ANALYSIS REPORT".to_string(),
        "=".repeat(50),
        String::new(),
        format!("Total Keywords Found: {}", ranked.len()),
        "Top Keywords by Importance:".to_string(),
        String::new(),
    ];

    for (i, (keyword, stats)) in ranked.iter().take(top).enumerate() {
        lines.push(format!(
            "{:2}. {:<30} | Freq: {:3} | Importance: {:5.1} | Words: {}",
            i + 1,
            keyword,
            stats.frequency,
            stats.avg_importance,
            word_count(keyword)
        ));
    }

    lines.join("\n")
}
