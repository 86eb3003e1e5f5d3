//! Writing the generated artifacts to the output directory.
//!
//! Files are written one at a time with no rollback: if a later write fails,
//! files written before it stay on disk.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CHANNEL_MAPPING_FILE, COMPONENT_EXAMPLES_FILE, HARDWARE_CONFIG_FILE};
use crate::models::{ChannelMapping, ComponentExamplesFile, HardwareConfig};
use crate::services::generator::GeneratedArtifacts;

/// Serializes a value as 2-space indented JSON and writes it to `path`.
pub fn write_pretty_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .context(format!("Failed to serialize {}", path.display()))?;

    fs::write(path, json).context(format!("Failed to write {}", path.display()))?;

    tracing::info!(path = %path.display(), "wrote artifact");
    Ok(())
}

/// Paths of the files written by [`ArtifactWriter::write_all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenArtifacts {
    /// `hardware-config.json`
    pub hardware_config: PathBuf,
    /// `component-examples.json`
    pub component_examples: PathBuf,
    /// `channel-mapping.json`
    pub channel_mapping: PathBuf,
}

/// Writes the configuration artifacts into one directory.
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    output_dir: PathBuf,
}

impl ArtifactWriter {
    /// Creates a writer for the given output directory.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Creates the output directory (and missing parents) if needed.
    pub fn prepare(&self) -> Result<()> {
        fs::create_dir_all(&self.output_dir).context(format!(
            "Failed to create output directory: {}",
            self.output_dir.display()
        ))
    }

    /// Writes `hardware-config.json` and returns its path.
    pub fn write_hardware_config(&self, config: &HardwareConfig) -> Result<PathBuf> {
        self.write(HARDWARE_CONFIG_FILE, config)
    }

    /// Writes `component-examples.json` and returns its path.
    pub fn write_component_examples(&self, examples: &ComponentExamplesFile) -> Result<PathBuf> {
        self.write(COMPONENT_EXAMPLES_FILE, examples)
    }

    /// Writes `channel-mapping.json` and returns its path.
    pub fn write_channel_mapping(&self, mapping: &ChannelMapping) -> Result<PathBuf> {
        self.write(CHANNEL_MAPPING_FILE, mapping)
    }

    /// Creates the output directory and writes all three artifacts in order.
    pub fn write_all(&self, artifacts: &GeneratedArtifacts) -> Result<WrittenArtifacts> {
        self.prepare()?;

        Ok(WrittenArtifacts {
            hardware_config: self.write_hardware_config(&artifacts.hardware_config)?,
            component_examples: self.write_component_examples(&artifacts.component_examples)?,
            channel_mapping: self.write_channel_mapping(&artifacts.channel_mapping)?,
        })
    }

    fn write<T: Serialize>(&self, file_name: &str, value: &T) -> Result<PathBuf> {
        let path = self.output_dir.join(file_name);
        write_pretty_json(&path, value)?;
        Ok(path)
    }
}
