//! Exclusion configuration for the copy.
//! Loads glob patterns from `dropin.json`, `dropin.yaml` or `dropin.yml` in the
//! source root and merges them after the built-in defaults.

use crate::constants::{CONFIG_FILES, ENTITY_ROLE_FILES, SCHEMA_FILE};
use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::path::Path;

/// Patterns that are always excluded from the bulk copy.
const DEFAULT_EXCLUDE_PATTERNS: &[&str] = &[
    "node_modules",
    "**/node_modules",
    "**/node_modules/**",
    "gen",
    "gen/**",
    "web/dist",
    "web/dist/**",
    "**/__pycache__",
    "**/*.pyc",
    "dropin.json",
    "dropin.yaml",
    "dropin.yml",
    "*.backup",
    SCHEMA_FILE,
];

/// Two ordered lists of glob patterns, loaded once at startup.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ExclusionConfig {
    /// Paths never copied.
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Paths only skipped when the template entity is excluded.
    #[serde(default)]
    pub entity_exclude: Vec<String>,
}

impl ExclusionConfig {
    /// The built-in patterns alone.
    pub fn defaults() -> Self {
        Self {
            exclude: DEFAULT_EXCLUDE_PATTERNS.iter().map(|p| p.to_string()).collect(),
            entity_exclude: ENTITY_ROLE_FILES.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Appends another config's patterns after this one's.
    pub fn merge(mut self, other: ExclusionConfig) -> Self {
        self.exclude.extend(other.exclude);
        self.entity_exclude.extend(other.entity_exclude);
        self
    }
}

/// Parses config content, trying JSON first and falling back to YAML.
pub fn parse_config(content: &str, config_path: &Path) -> Result<ExclusionConfig> {
    if content.trim().is_empty() {
        return Ok(ExclusionConfig::default());
    }
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str(content).map_err(|e| Error::ConfigParseError {
            config_path: config_path.display().to_string(),
            e: e.to_string(),
        }),
    }
}

/// Loads the exclusion config for a run.
///
/// # Arguments
/// * `source_root` - The template source directory searched for a config file
/// * `explicit` - A config path given on the command line, which must exist
///
/// # Returns
/// * `Result<ExclusionConfig>` - Defaults followed by any configured patterns
pub fn load_config<P: AsRef<Path>>(
    source_root: P,
    explicit: Option<&Path>,
) -> Result<ExclusionConfig> {
    let defaults = ExclusionConfig::defaults();

    let config_path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => CONFIG_FILES
            .iter()
            .map(|file| source_root.as_ref().join(file))
            .find(|path| path.exists()),
    };

    let Some(config_path) = config_path else {
        debug!("No exclusion config found, using default patterns");
        return Ok(defaults);
    };

    debug!("Loading exclusion config from {}", config_path.display());
    let content = std::fs::read_to_string(&config_path)?;
    Ok(defaults.merge(parse_config(&content, &config_path)?))
}
