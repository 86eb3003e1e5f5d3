//! Signal catalog (`signal-info.json`) loading.
//!
//! The catalog is a flat JSON array of signal objects. Channels are correlated
//! to signals by the `description` field, so the catalog is indexed by it.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::models::{SignalId, SignalRecord};

/// Two catalog entries sharing a description.
///
/// The later entry is the one used for lookups.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalCollision {
    /// Shared description
    pub description: String,
    /// Signal id that was overwritten
    pub replaced: SignalId,
    /// Signal id that is kept
    pub kept: SignalId,
}

/// Signal records indexed by description.
#[derive(Debug, Clone, Default)]
pub struct SignalCatalog {
    by_description: HashMap<String, SignalRecord>,
    record_count: usize,
    collisions: Vec<SignalCollision>,
}

impl SignalCatalog {
    /// Builds a catalog from records in file order.
    ///
    /// When descriptions repeat, the last record wins and the overwrite is
    /// recorded in [`SignalCatalog::collisions`].
    pub fn from_records(records: Vec<SignalRecord>) -> Self {
        let record_count = records.len();
        let mut by_description = HashMap::with_capacity(record_count);
        let mut collisions = Vec::new();

        for record in records {
            let description = record.description.clone();
            let kept = record.signal_id.clone();
            if let Some(previous) = by_description.insert(description.clone(), record) {
                tracing::warn!(
                    description = %description,
                    replaced = %previous.signal_id,
                    kept = %kept,
                    "duplicate signal description in catalog, keeping the last entry"
                );
                collisions.push(SignalCollision {
                    description,
                    replaced: previous.signal_id,
                    kept,
                });
            }
        }

        Self {
            by_description,
            record_count,
            collisions,
        }
    }

    /// Parses catalog JSON text.
    ///
    /// Fails unless the text is an array of objects that each carry
    /// `description` and `signalId`.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let records: Vec<SignalRecord> = serde_json::from_str(content)
            .context("Signal catalog must be a list of objects with description and signalId")?;
        Ok(Self::from_records(records))
    }

    /// Looks up a signal by its description.
    pub fn get(&self, description: &str) -> Option<&SignalRecord> {
        self.by_description.get(description)
    }

    /// Number of records read from the catalog, duplicates included.
    pub fn len(&self) -> usize {
        self.record_count
    }

    /// Returns true if the catalog has no records.
    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }

    /// Duplicate descriptions found while building the catalog, in file order.
    pub fn collisions(&self) -> &[SignalCollision] {
        &self.collisions
    }
}

/// Loads the signal catalog from a `signal-info.json` file.
///
/// # Arguments
///
/// * `path` - Path to the catalog file
///
/// # Returns
///
/// The indexed catalog, or an error if the file is missing or malformed
pub fn load_signal_catalog(path: &Path) -> Result<SignalCatalog> {
    let content = fs::read_to_string(path)
        .context(format!("Failed to read signal catalog: {}", path.display()))?;

    SignalCatalog::from_json_str(&content)
        .context(format!("Failed to parse signal catalog: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_json_str_indexes_by_description() {
        let catalog = SignalCatalog::from_json_str(
            r#"[
                {"description": "toggle-channel-1-on-off", "signalId": 101},
                {"description": "dcu-channel-1", "signalId": 301, "unit": 2}
            ]"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
        assert_eq!(
            catalog.get("dcu-channel-1").unwrap().signal_id,
            SignalId::number(301)
        );
        assert!(catalog.get("mom-channel-1-on-off").is_none());
        assert!(catalog.collisions().is_empty());
    }

    #[test]
    fn test_duplicate_description_last_wins_and_is_recorded() {
        let catalog = SignalCatalog::from_records(vec![
            SignalRecord::new("mom-channel-3-on-off", SignalId::number(200)),
            SignalRecord::new("mom-channel-3-on-off", SignalId::number(201)),
        ]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.get("mom-channel-3-on-off").unwrap().signal_id,
            SignalId::number(201)
        );
        assert_eq!(
            catalog.collisions(),
            &[SignalCollision {
                description: "mom-channel-3-on-off".to_string(),
                replaced: SignalId::number(200),
                kept: SignalId::number(201),
            }]
        );
    }

    #[test]
    fn test_empty_list_is_valid() {
        let catalog = SignalCatalog::from_json_str("[]").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_rejects_non_list() {
        assert!(SignalCatalog::from_json_str(r#"{"signals": []}"#).is_err());
        assert!(SignalCatalog::from_json_str("not json").is_err());
        assert!(SignalCatalog::from_json_str("[1, 2, 3]").is_err());
    }

    #[test]
    fn test_rejects_records_missing_fields() {
        assert!(SignalCatalog::from_json_str(r#"[{"signalId": 5}]"#).is_err());
    }

    #[test]
    fn test_load_signal_catalog_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("signal-info.json");

        let err = load_signal_catalog(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read signal catalog"));
    }

    #[test]
    fn test_load_signal_catalog_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("signal-info.json");
        fs::write(&path, "{ broken").unwrap();

        let err = load_signal_catalog(&path).unwrap_err();
        assert!(err
            .chain()
            .any(|cause| cause.downcast_ref::<serde_json::Error>().is_some()));
    }
}
