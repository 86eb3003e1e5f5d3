//! Output channel data structures.

use crate::constants::{ICON_DIMMER, ICON_LIGHT, ICON_POWER, ICON_SETTINGS};
use crate::models::SignalId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Output channel as declared in the EmpirBus project file.
///
/// Created by the channel extractor and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawChannel {
    /// Hardware channel number
    pub number: u32,
    /// Channel name as written in the project file (e.g., "out-channel-bilge-pump")
    pub name: String,
    /// Output channel setting id (48 = standard, 53 = special function)
    pub setting_id: u32,
}

impl RawChannel {
    /// Creates a new `RawChannel`.
    pub fn new(number: u32, name: impl Into<String>, setting_id: u32) -> Self {
        Self {
            number,
            name: name.into(),
            setting_id,
        }
    }
}

/// UI/behavioral category assigned to a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlType {
    /// Latching on/off control
    ToggleButton,
    /// Momentary control, active while pressed
    PushButton,
    /// Intensity control
    Dimmer,
    /// Channel with custom hardware behavior
    SpecialFunction,
}

impl ControlType {
    /// Returns the kebab-case name used in the generated files.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ToggleButton => "toggle-button",
            Self::PushButton => "push-button",
            Self::Dimmer => "dimmer",
            Self::SpecialFunction => "special-function",
        }
    }

    /// Returns the suggested icon path for this control type.
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::ToggleButton => ICON_LIGHT,
            Self::PushButton => ICON_POWER,
            Self::Dimmer => ICON_DIMMER,
            Self::SpecialFunction => ICON_SETTINGS,
        }
    }
}

impl fmt::Display for ControlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hardware module an output belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HardwareSource {
    /// EmpirBus core module
    #[default]
    Core,
}

/// Signal ids correlated to a channel by naming convention.
///
/// Absent signals serialize as `null`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChannelSignals {
    /// `toggle-channel-N-on-off`
    pub toggle: Option<SignalId>,
    /// `mom-channel-N-on-off`
    pub momentary: Option<SignalId>,
    /// `dcu-channel-N`
    pub dimmer: Option<SignalId>,
}

/// A channel after classification, as written to `channel-mapping.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedChannel {
    /// Output id (e.g., "core-03")
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
    /// Correlated signal ids
    pub signals: ChannelSignals,
    /// Channel name from the project file
    pub original_name: String,
}

/// Classified channels keyed and ordered by channel number.
pub type ChannelMap = BTreeMap<u32, ClassifiedChannel>;
