//! Parsing for the two input files.
//!
//! This module reads output channel declarations from EmpirBus project
//! exports and builds the signal catalog from `signal-info.json`.

pub mod ebp;
pub mod signal_info;

// Re-export commonly used functions
pub use ebp::{read_project_channels, ChannelExtractor};
pub use signal_info::{load_signal_catalog, SignalCatalog, SignalCollision};
