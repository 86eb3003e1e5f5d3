//! Generation of the three configuration artifacts from classified channels.

use crate::constants::{COMPONENT_EXAMPLES_NOTE, COMPONENT_EXAMPLE_COUNT, SYSTEM_TYPE_CORE};
use crate::models::{
    Binding, ChannelMap, ChannelMapping, ClassifiedChannel, ComponentAction, ComponentBindings,
    ComponentExample, ComponentExamplesFile, ComponentRange, ComponentType, ControlType,
    HardwareConfig, HardwareOutput, MappingMetadata,
};

/// Builds the hardware output list, ascending by channel number.
pub fn build_hardware_config(channels: &ChannelMap) -> HardwareConfig {
    HardwareConfig {
        system_type: SYSTEM_TYPE_CORE.to_string(),
        outputs: channels.values().map(HardwareOutput::from).collect(),
    }
}

/// Component type used for a control type.
pub const fn component_type_for(control: ControlType) -> ComponentType {
    match control {
        ControlType::ToggleButton => ComponentType::Toggle,
        ControlType::PushButton => ComponentType::Button,
        ControlType::Dimmer => ComponentType::Dimmer,
        ControlType::SpecialFunction => ComponentType::Button,
    }
}

/// Builds the example component for one channel.
///
/// Special-function channels get the same `state` binding as toggle buttons.
pub fn build_component_example(channel: &ClassifiedChannel) -> ComponentExample {
    let binding = Binding::empirbus(&channel.id);
    let mut example = ComponentExample {
        id: format!("comp-{}", channel.id),
        component_type: component_type_for(channel.control),
        label: channel.label.clone(),
        bindings: ComponentBindings::default(),
        range: None,
        action: None,
    };

    match channel.control {
        ControlType::Dimmer => {
            example.range = Some(ComponentRange::default());
            example.bindings.intensity = Some(binding);
        }
        ControlType::PushButton => {
            example.action = Some(ComponentAction::Momentary);
            example.bindings.action = Some(binding);
        }
        ControlType::ToggleButton | ControlType::SpecialFunction => {
            example.bindings.state = Some(binding);
        }
    }

    example
}

/// Builds example components for the lowest-numbered channels.
pub fn build_component_examples(channels: &ChannelMap) -> Vec<ComponentExample> {
    channels
        .values()
        .take(COMPONENT_EXAMPLE_COUNT)
        .map(build_component_example)
        .collect()
}

/// Wraps the component examples with the usage note.
pub fn build_component_examples_file(channels: &ChannelMap) -> ComponentExamplesFile {
    ComponentExamplesFile {
        components: build_component_examples(channels),
        note: COMPONENT_EXAMPLES_NOTE.to_string(),
    }
}

/// Builds the full reference mapping.
///
/// # Arguments
///
/// * `channels` - Classified channels
/// * `source` - File name of the project the channels came from
/// * `extracted_at` - Extraction stamp for the metadata
pub fn build_channel_mapping(
    channels: &ChannelMap,
    source: &str,
    extracted_at: &str,
) -> ChannelMapping {
    ChannelMapping {
        channels: channels.clone(),
        metadata: MappingMetadata {
            total_channels: channels.len(),
            source: source.to_string(),
            extracted_at: extracted_at.to_string(),
        },
    }
}

/// The three artifacts of one extraction run.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedArtifacts {
    /// `hardware-config.json`
    pub hardware_config: HardwareConfig,
    /// `component-examples.json`
    pub component_examples: ComponentExamplesFile,
    /// `channel-mapping.json`
    pub channel_mapping: ChannelMapping,
}

impl GeneratedArtifacts {
    /// Builds all three artifacts from the classified channels.
    pub fn build(channels: &ChannelMap, source: &str, extracted_at: &str) -> Self {
        Self {
            hardware_config: build_hardware_config(channels),
            component_examples: build_component_examples_file(channels),
            channel_mapping: build_channel_mapping(channels, source, extracted_at),
        }
    }
}
