//! Runtime configuration loaded from an optional YAML file.
//!
//! ```yaml
//! output_prefix: "clean_"
//! required_fields: [url, title, body, host, uid]
//! stopwords:
//!   builtin: true
//!   extra: ["dijo", "según"]
//!   file: ./stopwords_es.txt
//! ```
//!
//! Every key is optional. The configuration is read once at startup and
//! handed to the pipeline builder; nothing reads it afterwards.

use crate::error::{CleanerError, Result};
use crate::models::Field;
use crate::stopwords::StopWords;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CleanerConfig {
    /// Prefix for the derived output filename.
    pub output_prefix: String,
    /// Fields a record must hold to survive the completeness filter.
    pub required_fields: Vec<Field>,
    /// Stopword sources for the token feature extractor.
    pub stopwords: StopwordConfig,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        CleanerConfig {
            output_prefix: "clean_".to_string(),
            required_fields: vec![
                Field::Url,
                Field::Title,
                Field::Body,
                Field::Host,
                Field::Uid,
            ],
            stopwords: StopwordConfig::default(),
        }
    }
}

/// Where stopwords come from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct StopwordConfig {
    /// Include the built-in Spanish list.
    pub builtin: bool,
    /// Additional words.
    pub extra: Vec<String>,
    /// Optional newline-separated word list, relative to the config file.
    pub file: Option<PathBuf>,
}

impl Default for StopwordConfig {
    fn default() -> Self {
        StopwordConfig {
            builtin: true,
            extra: Vec::new(),
            file: None,
        }
    }
}

impl CleanerConfig {
    /// Parse a configuration from YAML text.
    pub fn from_yaml(text: &str, origin: &Path) -> Result<Self> {
        let parsed = serde_yaml::from_str::<CleanerConfig>(text);
        let mut config = parsed.map_err(|e| CleanerError::Config {
            path: origin.to_path_buf(),
            reason: e.to_string(),
        })?;

        // Word list paths are relative to the config file, not the cwd.
        if let (Some(file), Some(dir)) = (config.stopwords.file.as_mut(), origin.parent()) {
            if file.is_relative() {
                *file = dir.join(&*file);
            }
        }
        Ok(config)
    }

    /// Load the configuration at `path`, or the defaults when `path` is `None`.
    #[instrument(level = "info")]
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            debug!("No config file given; using defaults");
            return Ok(CleanerConfig::default());
        };
        let text = fs::read_to_string(path).map_err(|e| CleanerError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let config = CleanerConfig::from_yaml(&text, path)?;
        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Assemble the stopword set described by this configuration.
    pub fn stop_words(&self) -> Result<StopWords> {
        let mut words = if self.stopwords.builtin {
            StopWords::spanish()
        } else {
            StopWords::empty()
        };
        words.extend(&self.stopwords.extra);

        if let Some(file) = &self.stopwords.file {
            let list = fs::read_to_string(file).map_err(|e| CleanerError::Config {
                path: file.clone(),
                reason: format!("cannot read stopword list: {e}"),
            })?;
            words.extend_from_list(&list);
        }
        debug!(count = words.len(), "Stopword set ready");
        Ok(words)
    }
}
