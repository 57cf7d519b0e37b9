//! Configuration management for the job fit analyzer

use crate::error::{JobFitError, Result};
use crate::processing::skills::DEFAULT_SKILLS;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub matching: MatchingConfig,
    pub vocabulary: VocabularyConfig,
    pub corpus: CorpusConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Lowest score classified as a strong fit
    pub strong_threshold: f64,
    /// Lowest score classified as a medium fit
    pub medium_threshold: f64,
    /// Terms shorter than this get no dimension in the vector space
    pub min_term_length: usize,
    pub tie_break: TieBreak,
    pub require_alternative: bool,
}

/// How candidates with exactly equal scores are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Ascending lexicographic order of the document identifier.
    Identifier,
    /// The order in which the corpus provider enumerated the documents.
    CorpusOrder,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    pub skills: Vec<String>,
    pub extra_stopwords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    pub job_descriptions_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            strong_threshold: 0.65,
            medium_threshold: 0.40,
            min_term_length: 2,
            tie_break: TieBreak::Identifier,
            require_alternative: true,
        }
    }
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            skills: DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect(),
            extra_stopwords: Vec::new(),
        }
    }
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            job_descriptions_dir: PathBuf::from("data").join("job_descriptions"),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            matching: MatchingConfig::default(),
            vocabulary: VocabularyConfig::default(),
            corpus: CorpusConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults there on first use
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    /// Load from an explicit path; the file must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| JobFitError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| JobFitError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("job-fit-analyzer")
            .join("config.toml")
    }

    /// Reject threshold combinations that would make a fit band unreachable
    pub fn validate(&self) -> Result<()> {
        let m = &self.matching;
        let in_range = |v: f64| (0.0..=1.0).contains(&v);

        if !in_range(m.strong_threshold) || !in_range(m.medium_threshold) {
            return Err(JobFitError::Configuration(format!(
                "Fit thresholds must lie in [0, 1], got strong={} medium={}",
                m.strong_threshold, m.medium_threshold
            )));
        }
        if m.medium_threshold > m.strong_threshold {
            return Err(JobFitError::Configuration(format!(
                "medium_threshold ({}) must not exceed strong_threshold ({})",
                m.medium_threshold, m.strong_threshold
            )));
        }
        if self.vocabulary.skills.is_empty() {
            return Err(JobFitError::Configuration(
                "Skill vocabulary must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn jobs_dir(&self) -> &PathBuf {
        &self.corpus.job_descriptions_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.matching.strong_threshold, 0.65);
        assert_eq!(config.matching.medium_threshold, 0.40);
        assert_eq!(config.matching.tie_break, TieBreak::Identifier);
        assert_eq!(config.vocabulary.skills.len(), DEFAULT_SKILLS.len());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.matching.tie_break = TieBreak::CorpusOrder;
        config.vocabulary.extra_stopwords = vec!["experience".to_string()];
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.matching.tie_break, TieBreak::CorpusOrder);
        assert_eq!(loaded.vocabulary.extra_stopwords, vec!["experience".to_string()]);
        assert_eq!(loaded.output.format, OutputFormat::Console);
    }

    #[test]
    fn test_inverted_thresholds_rejected() {
        let mut config = Config::default();
        config.matching.medium_threshold = 0.8;
        assert!(matches!(config.validate(), Err(JobFitError::Configuration(_))));
    }

    #[test]
    fn test_out_of_range_threshold_rejected() {
        let mut config = Config::default();
        config.matching.strong_threshold = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_sections_fill_in_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[matching]\nstrong_threshold = 0.7\n\n[output]\ndetailed = true\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.matching.strong_threshold, 0.7);
        assert_eq!(config.matching.medium_threshold, 0.40);
        assert_eq!(config.matching.min_term_length, 2);
        assert!(config.matching.require_alternative);
        assert!(config.output.detailed);
        assert!(config.output.color_output);
        assert_eq!(config.vocabulary.skills.len(), DEFAULT_SKILLS.len());
        assert_eq!(config.jobs_dir(), &PathBuf::from("data").join("job_descriptions"));
    }

    #[test]
    fn test_malformed_file_is_configuration_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "matching = 3").unwrap();

        assert!(matches!(Config::load_from(&path), Err(JobFitError::Configuration(_))));
    }
}
