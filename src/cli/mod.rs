//! CLI command handlers.
//!
//! Each command is a clap `Args` struct with an `execute` method; the binary
//! only parses arguments, sets up logging and maps errors to exit codes.

pub mod attach_signals;
pub mod common;
pub mod extract;

// Re-export types used by main.rs and tests
pub use attach_signals::AttachSignalsArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use extract::ExtractArgs;
