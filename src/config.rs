//! Configuration management for the extractor.
//!
//! All paths are relative to a project root. Defaults match the standard
//! project layout; an optional `empirbus-channels.toml` in the root overrides
//! them. The configuration is resolved once into [`ProjectPaths`] and passed
//! read-only through the pipeline.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{
    CONFIG_FILE_NAME, DEFAULT_EXTRACTED_AT, DEFAULT_OUTPUT_DIR, DEFAULT_PROJECT_FILE,
    DEFAULT_SIGNAL_FILE,
};

/// Input and output locations, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    /// EmpirBus project export (.ebp)
    pub project_file: PathBuf,
    /// Signal catalog (signal-info.json)
    pub signal_file: PathBuf,
    /// Directory the generated files are written to
    pub output_dir: PathBuf,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            project_file: PathBuf::from(DEFAULT_PROJECT_FILE),
            signal_file: PathBuf::from(DEFAULT_SIGNAL_FILE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

/// Settings for the generated files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Stamp written to the channel mapping metadata
    pub extracted_at: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            extracted_at: DEFAULT_EXTRACTED_AT.to_string(),
        }
    }
}

/// Signal catalog handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Abort when two catalog entries share a description
    pub fail_on_duplicates: bool,
}

/// Extractor configuration.
///
/// # File Location
///
/// `<project root>/empirbus-channels.toml`, optional. Every key may be omitted:
///
/// ```toml
/// [paths]
/// project_file = "core-v2_9-30-25_v1.ebp"
/// signal_file = "web/signal-info.json"
/// output_dir = "configuration"
///
/// [output]
/// extracted_at = "2025-10-03"
///
/// [catalog]
/// fail_on_duplicates = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File system paths
    pub paths: PathConfig,
    /// Generated file settings
    pub output: OutputConfig,
    /// Signal catalog settings
    pub catalog: CatalogConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the path of the config file for a project root.
    pub fn config_file_path(root: &Path) -> PathBuf {
        root.join(CONFIG_FILE_NAME)
    }

    /// Loads the configuration for a project root.
    ///
    /// If the root has no config file, returns the default configuration.
    pub fn load(root: &Path) -> Result<Self> {
        let config_path = Self::config_file_path(root);

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::new());
        }

        Self::load_file(&config_path)
    }

    /// Loads and validates a configuration file.
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config
            .validate()
            .context(format!("Invalid config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Validation
    ///
    /// - No path may be empty
    /// - `extracted_at` must not be empty
    pub fn validate(&self) -> Result<()> {
        for (key, path) in [
            ("paths.project_file", &self.paths.project_file),
            ("paths.signal_file", &self.paths.signal_file),
            ("paths.output_dir", &self.paths.output_dir),
        ] {
            if path.as_os_str().is_empty() {
                anyhow::bail!("{key} cannot be empty");
            }
        }

        if self.output.extracted_at.trim().is_empty() {
            anyhow::bail!("output.extracted_at cannot be empty");
        }

        Ok(())
    }

    /// Resolves the configured paths against a project root.
    pub fn resolve(&self, root: &Path) -> ProjectPaths {
        ProjectPaths {
            project_file: root.join(&self.paths.project_file),
            signal_file: root.join(&self.paths.signal_file),
            output_dir: root.join(&self.paths.output_dir),
        }
    }
}

/// Absolute (or root-joined) locations used by one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    /// EmpirBus project export
    pub project_file: PathBuf,
    /// Signal catalog
    pub signal_file: PathBuf,
    /// Output directory
    pub output_dir: PathBuf,
}

impl ProjectPaths {
    /// File name of the project export, as recorded in the mapping metadata.
    pub fn source_name(&self) -> String {
        self.project_file
            .file_name()
            .map_or_else(
                || self.project_file.display().to_string(),
                |name| name.to_string_lossy().into_owned(),
            )
    }
}
