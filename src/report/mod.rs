//! Human-readable console output.
//!
//! The report is built as a string so it can be tested without capturing
//! stdout; the CLI prints it.

pub mod formatter;

pub use formatter::ReportFormatter;
