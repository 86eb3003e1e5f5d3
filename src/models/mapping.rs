//! Full channel mapping written to `channel-mapping.json`.

use crate::models::ChannelMap;
use serde::{Deserialize, Serialize};

/// Provenance of a channel mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingMetadata {
    /// Number of classified channels
    pub total_channels: usize,
    /// File name of the EmpirBus project the channels came from
    pub source: String,
    /// Extraction stamp
    pub extracted_at: String,
}

/// Root of `channel-mapping.json`.
///
/// Channel numbers become string keys in JSON and stay in numeric order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelMapping {
    /// Classified channels by channel number
    pub channels: ChannelMap,
    /// Provenance
    pub metadata: MappingMetadata,
}
