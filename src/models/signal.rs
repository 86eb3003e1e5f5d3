//! Signal catalog records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a signal in the catalog.
///
/// Catalogs exported by the EmpirBus tooling use integers; textual ids are
/// accepted as well and written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SignalId {
    /// Numeric id (the common case)
    Number(serde_json::Number),
    /// Textual id
    Text(String),
}

impl SignalId {
    /// Creates a numeric signal id.
    #[must_use]
    pub fn number(id: u64) -> Self {
        Self::Number(id.into())
    }

    /// Whether the id is `0` or an empty string.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Number(n) => n.as_f64().is_some_and(|n| n.abs() < f64::EPSILON),
            Self::Text(s) => s.is_empty(),
        }
    }
}

impl fmt::Display for SignalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// One entry of `signal-info.json`.
///
/// Only the fields the extractor correlates on are kept; anything else in the
/// catalog entry is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalRecord {
    /// Naming-convention description (e.g., "dcu-channel-4")
    pub description: String,
    /// Stable signal identifier
    pub signal_id: SignalId,
}

impl SignalRecord {
    /// Creates a new `SignalRecord`.
    pub fn new(description: impl Into<String>, signal_id: SignalId) -> Self {
        Self {
            description: description.into(),
            signal_id,
        }
    }
}
