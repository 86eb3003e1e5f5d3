//! Example HMI component definitions written to `component-examples.json`.

use serde::{Deserialize, Serialize};

/// HMI component type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentType {
    /// On/off toggle
    Toggle,
    /// Push button
    Button,
    /// Intensity slider
    Dimmer,
}

/// Transport a binding talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BindingType {
    /// EmpirBus hardware channel
    #[default]
    Empirbus,
}

/// Binding of a component property to a hardware output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    /// Binding transport
    #[serde(rename = "type")]
    pub binding_type: BindingType,
    /// Hardware output id (e.g., "core-04")
    pub channel: String,
}

impl Binding {
    /// Creates an EmpirBus binding to the given output id.
    pub fn empirbus(channel: impl Into<String>) -> Self {
        Self {
            binding_type: BindingType::Empirbus,
            channel: channel.into(),
        }
    }
}

/// Bindings of a component. Exactly one is set per generated example.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComponentBindings {
    /// Dimmer intensity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<Binding>,
    /// Momentary action
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<Binding>,
    /// Toggle state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<Binding>,
}

/// Slider range for dimmer components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRange {
    /// Minimum intensity
    pub min: u8,
    /// Maximum intensity
    pub max: u8,
    /// Slider step
    pub step: u8,
}

impl Default for ComponentRange {
    fn default() -> Self {
        Self {
            min: 0,
            max: 100,
            step: 5,
        }
    }
}

/// Button behavior for push-button components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentAction {
    /// Active while pressed
    Momentary,
}

/// A generated example component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentExample {
    /// Component id ("comp-" + output id)
    pub id: String,
    /// Component type
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    /// Label copied from the channel
    pub label: String,
    /// Property bindings
    pub bindings: ComponentBindings,
    /// Range, dimmers only
    #[serde(flatten)]
    pub range: Option<ComponentRange>,
    /// Action, push buttons only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<ComponentAction>,
}

/// Root of `component-examples.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentExamplesFile {
    /// Example components
    pub components: Vec<ComponentExample>,
    /// Usage note
    pub note: String,
}
