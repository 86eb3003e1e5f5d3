//! EmpirBus project (.ebp) channel extraction.
//!
//! The project export is XML-like, but only output channel declarations are
//! needed, so they are picked out with a single pattern instead of a full
//! document parse:
//!
//! ```text
//! <channel number="3" name="out-channel-bilge-pump" direction="Output" ... outMainChannelSettingId="48">
//! ```
//!
//! Declarations that do not match the pattern are skipped. A file without any
//! match yields an empty list.

use anyhow::{Context, Result};
use regex::Regex;
use std::fs;
use std::path::Path;

use crate::models::RawChannel;

/// Output channel declaration. Attributes must appear in this order; anything
/// may sit between `direction` and `outMainChannelSettingId` inside the tag.
const OUTPUT_CHANNEL_PATTERN: &str =
    r#"<channel number="(\d+)" name="([^"]*)" direction="Output"[^>]*outMainChannelSettingId="(\d+)""#;

/// Extracts output channel declarations from project text.
#[derive(Debug, Clone)]
pub struct ChannelExtractor {
    pattern: Regex,
}

impl ChannelExtractor {
    /// Creates an extractor with the output channel pattern compiled.
    pub fn new() -> Result<Self> {
        let pattern =
            Regex::new(OUTPUT_CHANNEL_PATTERN).context("Failed to compile channel pattern")?;
        Ok(Self { pattern })
    }

    /// Returns every output channel in order of appearance.
    ///
    /// Numbers that do not fit a `u32` are skipped like any other
    /// non-matching declaration.
    pub fn extract(&self, content: &str) -> Vec<RawChannel> {
        self.pattern
            .captures_iter(content)
            .filter_map(|caps| {
                let number = caps[1].parse::<u32>();
                let setting_id = caps[3].parse::<u32>();
                match (number, setting_id) {
                    (Ok(number), Ok(setting_id)) => {
                        tracing::debug!(number, setting_id, name = &caps[2], "extracted channel");
                        Some(RawChannel::new(number, &caps[2], setting_id))
                    }
                    _ => {
                        tracing::debug!(declaration = &caps[0], "skipping out-of-range channel");
                        None
                    }
                }
            })
            .collect()
    }
}

/// Reads an EmpirBus project file and extracts its output channels.
///
/// # Arguments
///
/// * `path` - Path to the .ebp project file
///
/// # Returns
///
/// Output channels in order of appearance (possibly empty)
pub fn read_project_channels(path: &Path) -> Result<Vec<RawChannel>> {
    let content = fs::read_to_string(path)
        .context(format!("Failed to read project file: {}", path.display()))?;

    let extractor = ChannelExtractor::new()?;
    Ok(extractor.extract(&content))
}
