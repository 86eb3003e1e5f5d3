//! Error and exit-code types shared by the CLI commands.

use std::fmt;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Input could not be parsed or failed a consistency check
    ValidationError = 1,
    /// A file could not be read, created or written
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code the process should end with
    pub exit_code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// File system failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Parse or consistency failure.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// Converts a loader error, classifying JSON/TOML syntax problems as
    /// validation errors and everything else as I/O errors.
    pub fn from_load_error(context: &str, err: &anyhow::Error) -> Self {
        let is_parse_error = err.chain().any(|cause| {
            cause.downcast_ref::<serde_json::Error>().is_some()
                || cause.downcast_ref::<toml::de::Error>().is_some()
        });

        let message = format!("{context}: {err:#}");
        if is_parse_error {
            Self::validation(message)
        } else {
            Self::io(message)
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::Success.code(), 0);
        assert_eq!(ExitCode::ValidationError.code(), 1);
        assert_eq!(ExitCode::IoError.code(), 2);
    }

    #[test]
    fn test_from_load_error_json_is_validation() {
        let err = serde_json::from_str::<Vec<u32>>("{")
            .context("Failed to parse signal catalog")
            .unwrap_err();

        let cli_err = CliError::from_load_error("Signal catalog", &err);
        assert_eq!(cli_err.exit_code, ExitCode::ValidationError);
        assert!(cli_err.message.starts_with("Signal catalog: Failed to parse signal catalog"));
    }

    #[test]
    fn test_from_load_error_io_is_io() {
        let err = std::fs::read_to_string("/definitely/not/here.ebp")
            .context("Failed to read project file")
            .unwrap_err();

        let cli_err = CliError::from_load_error("Project file", &err);
        assert_eq!(cli_err.exit_code, ExitCode::IoError);
    }
}
