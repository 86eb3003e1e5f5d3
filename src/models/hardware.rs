//! Hardware configuration written to `hardware-config.json`.

use crate::models::{ClassifiedChannel, ControlType, HardwareSource};
use serde::{Deserialize, Serialize};

/// Single hardware output entry.
///
/// This is a [`ClassifiedChannel`] without the signal ids and the original
/// project-file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardwareOutput {
    /// Output id (e.g., "core-01")
    pub id: String,
    /// Hardware module
    pub source: HardwareSource,
    /// Hardware channel number
    pub channel: u32,
    /// Assigned control type
    pub control: ControlType,
    /// Human-readable label
    pub label: String,
    /// Suggested icon path
    pub icon: String,
}

impl From<&ClassifiedChannel> for HardwareOutput {
    fn from(channel: &ClassifiedChannel) -> Self {
        Self {
            id: channel.id.clone(),
            source: channel.source,
            channel: channel.channel,
            control: channel.control,
            label: channel.label.clone(),
            icon: channel.icon.clone(),
        }
    }
}

/// Root of `hardware-config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareConfig {
    /// Hardware system type ("core")
    pub system_type: String,
    /// Outputs sorted ascending by channel number
    pub outputs: Vec<HardwareOutput>,
}
