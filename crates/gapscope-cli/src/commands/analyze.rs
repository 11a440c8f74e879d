use super::{find_and_render, read_text};
use crate::{AnalyzeArgs, Cli};
use anyhow::Result;
use gapscope_core::KeywordMap;
use gapscope_text::KeywordAnalyzer;

pub fn run(cli: &Cli, args: &AnalyzeArgs) -> Result<()> {
    let config = cli.load_config()?;
    let analyzer = KeywordAnalyzer::new(config.analyzer.clone());
    let min_frequency = args.min_frequency.unwrap_or(config.analyzer.min_frequency);

    let texts = args
        .competitor
        .iter()
        .map(|path| read_text(path))
        .collect::<Result<Vec<_>>>()?;

    if !cli.is_quiet() {
        eprintln!("Analyzing {} competitor pages...", texts.len());
    }
    let competitor = analyzer.analyze_documents(&texts, min_frequency);

    // Every term on the user's own page counts, even if it appears once
    let user = match &args.user {
        Some(path) => analyzer.analyze_text(&read_text(path)?, 1),
        None => KeywordMap::new(),
    };

    if !cli.is_quiet() {
        eprintln!(
            "Competitor keywords: {}, user keywords: {}",
            competitor.len(),
            user.len()
        );
    }

    find_and_render(cli, &args.output, &config, &competitor, &user)
}
