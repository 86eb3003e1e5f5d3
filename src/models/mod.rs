//! Data models for channels, signals, and the generated configuration files.
//!
//! This module contains all the core data structures used throughout the application.
//! Models are plain serde types with no I/O.

pub mod channel;
pub mod component;
pub mod hardware;
pub mod mapping;
pub mod signal;

// Re-export all model types
pub use channel::{
    ChannelMap, ChannelSignals, ClassifiedChannel, ControlType, HardwareSource, RawChannel,
};
pub use component::{
    Binding, BindingType, ComponentAction, ComponentBindings, ComponentExample,
    ComponentExamplesFile, ComponentRange, ComponentType,
};
pub use hardware::{HardwareConfig, HardwareOutput};
pub use mapping::{ChannelMapping, MappingMetadata};
pub use signal::{SignalId, SignalRecord};
