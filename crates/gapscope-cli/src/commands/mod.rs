pub mod analyze;
pub mod gaps;
pub mod keywords;

use crate::config::AppConfig;
use crate::{Cli, Format, OutputArgs};
use anyhow::{Context, Result, bail};
use gapscope_core::KeywordMap;
use gapscope_render::{CsvWriter, HumanWriter, JsonlWriter, ReportWriter};
use gapscope_score::{ContentStrategy, GapFinder, GapOptions};
use std::fs;
use std::path::Path;

/// Find gaps between two keyword maps and write them in the requested format.
pub(crate) fn find_and_render(
    cli: &Cli,
    args: &OutputArgs,
    config: &AppConfig,
    competitor: &KeywordMap,
    user: &KeywordMap,
) -> Result<()> {
    let threshold = args
        .threshold
        .unwrap_or(config.gap.similarity.semantic_threshold);
    if threshold.is_nan() {
        bail!("Similarity threshold must be a number");
    }

    let finder = GapFinder::new(config.gap.clone()).with_options(GapOptions {
        similarity_threshold: threshold,
        keep_duplicates: args.keep_duplicates,
    });
    let records = finder.find_gaps(competitor, user);
    let strategy = if args.strategy {
        ContentStrategy::build(&records, args.top, &config.gap)
    } else {
        None
    };

    let rendered = match args.format {
        Format::Human => HumanWriter::new()
            .top(Some(args.top))
            .render(&records, strategy.as_ref()),
        Format::Json => ReportWriter::new(threshold)
            .user_keywords(user.len())
            .render(competitor, &records, strategy.as_ref())?,
        Format::Jsonl => JsonlWriter::new(threshold)
            .inputs(competitor.len(), user.len())
            .render(&records)?,
        Format::Csv => CsvWriter::render(&records)?,
    };

    write_output(cli, args.output.as_deref(), &rendered)
}

pub(crate) fn write_output(cli: &Cli, path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            if !cli.is_quiet() {
                eprintln!("Wrote {}", path.display());
            }
        }
        None => print!("{content}"),
    }
    Ok(())
}

pub(crate) fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
