//! EmpirBus Channels Library
//!
//! This library provides the extraction pipeline behind the
//! `empirbus-channels` binary: reading output channels from an EmpirBus
//! project export, matching them against the signal catalog, classifying
//! their control type and generating the panel configuration files.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod parser;
pub mod report;
pub mod services;
