use super::{find_and_render, read_text};
use crate::{Cli, GapsArgs};
use anyhow::{Context, Result};
use gapscope_core::{GapError, KeywordMap};
use std::path::Path;

pub fn run(cli: &Cli, args: &GapsArgs) -> Result<()> {
    let config = cli.load_config()?;

    let competitor = load_stats(&args.competitor_stats)?;
    let user = match &args.user_stats {
        Some(path) => load_stats(path)?,
        None => KeywordMap::new(),
    };

    if !cli.is_quiet() {
        eprintln!(
            "Loaded {} competitor keywords, {} user keywords",
            competitor.len(),
            user.len()
        );
    }

    find_and_render(cli, &args.output, &config, &competitor, &user)
}

/// Read a JSON object mapping keyword to statistics.
///
/// Entries without a `keyword` field take the map key. Every entry is
/// validated before it reaches the gap finder.
pub fn load_stats(path: &Path) -> Result<KeywordMap> {
    let content = read_text(path)?;
    let mut map: KeywordMap = serde_json::from_str(&content)
        .map_err(|e| GapError::Parse(format!("{}: {}", path.display(), e)))?;

    for (key, stats) in map.iter_mut() {
        if stats.keyword.is_empty() {
            stats.keyword = key.clone();
        }
        stats
            .validate()
            .with_context(|| format!("Invalid keyword statistics in {}", path.display()))?;
    }

    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn load_fills_keyword_from_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user.json");
        fs::write(
            &path,
            r#"{"seo tools": {"frequency": 3, "document_frequency": 1}, "content plan": {"frequency": 1}}"#,
        )
        .unwrap();

        let map = load_stats(&path).unwrap();
        let keys: Vec<&str> = map.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["seo tools", "content plan"]);
        assert_eq!(map["seo tools"].keyword, "seo tools");
        assert_eq!(map["seo tools"].frequency, 3);
        assert_eq!(map["content plan"].avg_importance, 0.0);
    }

    #[test]
    fn load_rejects_out_of_range_importance() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("competitor.json");
        fs::write(&path, r#"{"seo": {"frequency": 3, "avg_importance": 250.0}}"#).unwrap();

        let err = load_stats(&path).unwrap_err();
        assert!(format!("{err:#}").contains("avg_importance"));
    }

    #[test]
    fn load_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "[1, 2").unwrap();
        assert!(load_stats(&path).is_err());
    }
}
