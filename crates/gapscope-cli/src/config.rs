use anyhow::{Context, Result};
use gapscope_core::{GapConfig, discover_file, load_config};
use gapscope_text::AnalyzerConfig;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Everything a `gapscope.toml` can set.
///
/// Gap settings sit at the top level of the file, analyzer settings under
/// `[analyzer]`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(flatten)]
    pub gap: GapConfig,
    pub analyzer: AnalyzerConfig,
}

impl AppConfig {
    /// Load from an explicit path, else the nearest `gapscope.toml`, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match discover_file()? {
                Some(path) => path,
                None => {
                    debug!("no config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        debug!(path = %path.display(), "loading config");
        let config: Self = load_config(&path)?;
        config
            .gap
            .validate()
            .with_context(|| format!("Invalid settings in {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn toml_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gapscope.toml");
        fs::write(
            &path,
            "related_limit = 3\n\n[thresholds]\nhigh = 70\n\n[analyzer]\nmin_frequency = 4\ncustom_stopwords = [\"acme\"]\n",
        )
        .unwrap();

        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.gap.related_limit, 3);
        assert_eq!(config.gap.thresholds.high, 70.0);
        assert_eq!(config.gap.thresholds.medium, 50.0);
        assert_eq!(config.analyzer.min_frequency, 4);
        assert_eq!(config.analyzer.custom_stopwords, vec!["acme".to_string()]);
        assert_eq!(config.analyzer.batch_size, 5);
    }

    #[test]
    fn json_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"similarity": {"semantic_threshold": 0.6}}"#).unwrap();

        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.gap.similarity.semantic_threshold, 0.6);
        assert_eq!(config.analyzer, AnalyzerConfig::default());
    }

    #[test]
    fn unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "x: 1").unwrap();
        let err = AppConfig::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Unsupported config format"));
    }

    #[test]
    fn missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AppConfig::load(Some(&dir.path().join("nope.toml"))).is_err());
    }

    #[test]
    fn rejects_negative_max_score() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gapscope.toml");
        fs::write(&path, "[weights]\nmax_score = -1\n").unwrap();

        let err = AppConfig::load(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("max_score"));
    }

    #[test]
    fn rejects_related_limit_above_five() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gapscope.json");
        fs::write(&path, r#"{"related_limit": 8}"#).unwrap();

        let err = AppConfig::load(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("related_limit"));
    }
}
