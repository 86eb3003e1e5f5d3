//! Application-wide constants.
//!
//! This module defines the application name, the default project layout,
//! and the fixed strings that appear in the generated configuration files.

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "empirbus-channels";

/// Optional configuration file looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "empirbus-channels.toml";

/// Default EmpirBus project export, relative to the project root.
pub const DEFAULT_PROJECT_FILE: &str = "core-v2_9-30-25_v1.ebp";

/// Default signal catalog, relative to the project root.
pub const DEFAULT_SIGNAL_FILE: &str = "web/signal-info.json";

/// Default output directory, relative to the project root.
pub const DEFAULT_OUTPUT_DIR: &str = "configuration";

/// Hardware configuration artifact.
pub const HARDWARE_CONFIG_FILE: &str = "hardware-config.json";

/// Component examples artifact.
pub const COMPONENT_EXAMPLES_FILE: &str = "component-examples.json";

/// Full channel mapping artifact.
pub const CHANNEL_MAPPING_FILE: &str = "channel-mapping.json";

/// Extraction stamp written into the channel mapping metadata.
pub const DEFAULT_EXTRACTED_AT: &str = "2025-10-03";

/// Output channel setting id for standard toggle/momentary channels.
pub const SETTING_ID_STANDARD: u32 = 48;

/// Output channel setting id for special-function channels.
pub const SETTING_ID_SPECIAL_FUNCTION: u32 = 53;

/// Hardware system type written into `hardware-config.json`.
pub const SYSTEM_TYPE_CORE: &str = "core";

/// Number of channels that get an example component.
pub const COMPONENT_EXAMPLE_COUNT: usize = 5;

/// Note attached to `component-examples.json`.
pub const COMPONENT_EXAMPLES_NOTE: &str =
    "These are example components for the first 5 channels. Copy and modify as needed.";

/// Icon suggested for toggle buttons.
pub const ICON_LIGHT: &str = "/icons/Light.svg";
/// Icon suggested for push buttons.
pub const ICON_POWER: &str = "/icons/Power.svg";
/// Icon suggested for dimmers.
pub const ICON_DIMMER: &str = "/icons/Dimmer.svg";
/// Icon suggested for special-function channels.
pub const ICON_SETTINGS: &str = "/icons/Settings.svg";

/// Width of the `=`/`-` rules in the console report.
pub const REPORT_WIDTH: usize = 100;
