//! Pipeline stages between parsing and the CLI.
//!
//! - [`classifier`]: control type, label and icon per channel
//! - [`generator`]: hardware config, component examples, channel mapping
//! - [`output`]: writing the artifacts
//! - [`signals`]: attaching mapped signals to an existing hardware config

pub mod classifier;
pub mod generator;
pub mod output;
pub mod signals;

pub use classifier::{classify_channel, classify_channels, format_label};
pub use generator::{
    build_channel_mapping, build_component_examples, build_component_examples_file,
    build_hardware_config, GeneratedArtifacts,
};
pub use output::{ArtifactWriter, WrittenArtifacts};
