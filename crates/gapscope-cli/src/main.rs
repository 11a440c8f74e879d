mod commands;
mod config;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// gapscope: find the keywords competitors rank for that your content lacks.
#[derive(Parser, Debug)]
#[command(name = "gapscope", version, about)]
pub struct Cli {
    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Config file (.toml or .json); defaults to the nearest gapscope.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract keywords from competitor and user text files, then find gaps
    Analyze(AnalyzeArgs),

    /// Find gaps between two precomputed keyword-statistics files
    Gaps(GapsArgs),

    /// Print a keyword report for one text file
    Keywords {
        /// Text file to analyze
        file: PathBuf,

        /// Minimum occurrences for a term to be listed
        #[arg(long)]
        min_frequency: Option<u64>,

        /// Number of keywords to list
        #[arg(long, default_value_t = 20)]
        top: usize,
    },
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Competitor page text, one file per page
    #[arg(long, required = true, num_args = 1..)]
    competitor: Vec<PathBuf>,

    /// Your own page text
    #[arg(long)]
    user: Option<PathBuf>,

    /// Minimum summed frequency for competitor keywords
    #[arg(long)]
    min_frequency: Option<u64>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct GapsArgs {
    /// JSON object mapping keyword to competitor statistics
    #[arg(long)]
    competitor_stats: PathBuf,

    /// JSON object mapping keyword to user statistics
    #[arg(long)]
    user_stats: Option<PathBuf>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Similarity at or above which a user keyword covers a competitor keyword
    #[arg(long)]
    threshold: Option<f64>,

    /// Report keywords found by both the exact and the semantic pass twice
    #[arg(long)]
    keep_duplicates: bool,

    /// Opportunities considered for the strategy and shown in the table
    #[arg(long, default_value_t = 20)]
    top: usize,

    /// Include a content strategy
    #[arg(long)]
    strategy: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Human)]
    format: Format,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Human,
    Json,
    Jsonl,
    Csv,
}

impl Cli {
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn load_config(&self) -> Result<config::AppConfig> {
        config::AppConfig::load(self.config.as_deref())
    }

    fn log_filter(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

fn init_logging(cli: &Cli) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(cli.log_filter()))
        .context("Invalid log filter")?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    match &cli.command {
        Command::Analyze(args) => commands::analyze::run(&cli, args),
        Command::Gaps(args) => commands::gaps::run(&cli, args),
        Command::Keywords {
            file,
            min_frequency,
            top,
        } => commands::keywords::run(&cli, file, *min_frequency, *top),
    }
}
