//! Channel classification by signal naming convention.
//!
//! Each output channel `N` is correlated with up to three catalog signals:
//!
//! | Description              | Meaning                     |
//! |--------------------------|-----------------------------|
//! | `toggle-channel-N-on-off`| latching on/off             |
//! | `mom-channel-N-on-off`   | momentary on/off            |
//! | `dcu-channel-N`          | intensity (dimmer) control  |
//!
//! The control type is decided by [`CLASSIFICATION_RULES`], evaluated top to
//! bottom. The first rule that applies wins; a channel no rule applies to is a
//! toggle button.

use crate::constants::SETTING_ID_SPECIAL_FUNCTION;
use crate::models::{
    ChannelMap, ChannelSignals, ClassifiedChannel, ControlType, HardwareSource, RawChannel,
};
use crate::parser::SignalCatalog;

/// What the classification rules look at for one channel.
#[derive(Debug, Clone, Copy)]
pub struct ChannelEvidence<'a> {
    /// Output channel setting id
    pub setting_id: u32,
    /// Signals found for the channel
    pub signals: &'a ChannelSignals,
}

/// A predicate that assigns a control type when it applies.
#[derive(Debug, Clone, Copy)]
pub struct ClassificationRule {
    /// Short rule name for logs and tests
    pub name: &'static str,
    /// Control type assigned when the rule applies
    pub control: ControlType,
    /// Whether the rule applies to a channel
    pub applies: fn(&ChannelEvidence<'_>) -> bool,
}

/// Control type of a channel that no rule applies to.
pub const DEFAULT_CONTROL: ControlType = ControlType::ToggleButton;

/// Classification rules in priority order.
///
/// A dimmer signal beats everything; a momentary-only channel beats the
/// special-function setting id.
pub const CLASSIFICATION_RULES: &[ClassificationRule] = &[
    ClassificationRule {
        name: "dcu-signal",
        control: ControlType::Dimmer,
        applies: |evidence| evidence.signals.dimmer.is_some(),
    },
    ClassificationRule {
        name: "momentary-without-toggle",
        control: ControlType::PushButton,
        applies: |evidence| {
            evidence.signals.momentary.is_some() && evidence.signals.toggle.is_none()
        },
    },
    ClassificationRule {
        name: "special-function-setting",
        control: ControlType::SpecialFunction,
        applies: |evidence| evidence.setting_id == SETTING_ID_SPECIAL_FUNCTION,
    },
];

/// Catalog description of the toggle signal for a channel.
pub fn toggle_description(number: u32) -> String {
    format!("toggle-channel-{number}-on-off")
}

/// Catalog description of the momentary signal for a channel.
pub fn momentary_description(number: u32) -> String {
    format!("mom-channel-{number}-on-off")
}

/// Catalog description of the dimmer signal for a channel.
pub fn dimmer_description(number: u32) -> String {
    format!("dcu-channel-{number}")
}

/// Decides the control type from the first applicable rule.
pub fn classify_control(evidence: &ChannelEvidence<'_>) -> ControlType {
    CLASSIFICATION_RULES
        .iter()
        .find(|rule| (rule.applies)(evidence))
        .map_or(DEFAULT_CONTROL, |rule| rule.control)
}

/// Looks up the three convention signals for a channel.
pub fn lookup_signals(number: u32, catalog: &SignalCatalog) -> ChannelSignals {
    let signal_id = |description: String| {
        catalog
            .get(&description)
            .map(|record| record.signal_id.clone())
    };

    ChannelSignals {
        toggle: signal_id(toggle_description(number)),
        momentary: signal_id(momentary_description(number)),
        dimmer: signal_id(dimmer_description(number)),
    }
}

/// Output id for a channel ("core-" + two-digit channel number).
pub fn channel_id(number: u32) -> String {
    format!("core-{number:02}")
}

/// Converts an EmpirBus channel name into a user-facing label.
///
/// `out-channel-` and `channel-` are removed wherever they occur. Names that
/// are then bare numbers, or read `Channel N`, become `Output N`; anything else
/// is title-cased with hyphens and underscores as word breaks.
///
/// # Examples
///
/// ```
/// use empirbus_channels::services::classifier::format_label;
///
/// assert_eq!(format_label("channel-nav-lights", 7), "Nav Lights");
/// assert_eq!(format_label("Channel 7", 7), "Output 7");
/// assert_eq!(format_label("12", 12), "Output 12");
/// ```
pub fn format_label(name: &str, number: u32) -> String {
    let name = name.replace("out-channel-", "").replace("channel-", "");

    let is_number = !name.is_empty() && name.chars().all(|c| c.is_ascii_digit());
    if is_number || name == format!("Channel {number}") {
        return format!("Output {number}");
    }

    name.replace(['-', '_'], " ")
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Upper-cases the first character and lower-cases the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Classifies a single channel.
pub fn classify_channel(raw: &RawChannel, catalog: &SignalCatalog) -> ClassifiedChannel {
    let signals = lookup_signals(raw.number, catalog);
    let control = classify_control(&ChannelEvidence {
        setting_id: raw.setting_id,
        signals: &signals,
    });

    tracing::debug!(
        channel = raw.number,
        control = %control,
        "classified channel"
    );

    ClassifiedChannel {
        id: channel_id(raw.number),
        source: HardwareSource::Core,
        channel: raw.number,
        control,
        label: format_label(&raw.name, raw.number),
        icon: control.icon().to_string(),
        signals,
        original_name: raw.name.clone(),
    }
}

/// Classifies every channel into a map ordered by channel number.
///
/// A channel number declared more than once keeps the last declaration.
pub fn classify_channels(channels: &[RawChannel], catalog: &SignalCatalog) -> ChannelMap {
    let mut map = ChannelMap::new();

    for raw in channels {
        if let Some(previous) = map.insert(raw.number, classify_channel(raw, catalog)) {
            tracing::warn!(
                channel = raw.number,
                replaced = %previous.original_name,
                kept = %raw.name,
                "channel declared more than once, keeping the last declaration"
            );
        }
    }

    map
}
