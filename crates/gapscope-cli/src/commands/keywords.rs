use super::read_text;
use crate::Cli;
use anyhow::Result;
use gapscope_text::{KeywordAnalyzer, keyword_report};
use std::path::Path;

pub fn run(cli: &Cli, file: &Path, min_frequency: Option<u64>, top: usize) -> Result<()> {
    let config = cli.load_config()?;
    let analyzer = KeywordAnalyzer::new(config.analyzer.clone());
    let min_frequency = min_frequency.unwrap_or(config.analyzer.min_frequency);

    let text = read_text(file)?;
    let keywords = analyzer.analyze_text(&text, min_frequency);

    println!("{}", keyword_report(&keywords, top));
    Ok(())
}
