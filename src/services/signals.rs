//! Copying signal ids from the channel mapping into the hardware config.
//!
//! `hardware-config.json` is meant to be edited by hand after extraction, so it
//! is handled as untyped JSON: only the `signals` field of matching outputs is
//! touched and every other field is kept as found.

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::services::output::write_pretty_json;

/// An output that received signals.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalUpdate {
    /// Output id, if the output has one
    pub id: Option<String>,
    /// Hardware channel number
    pub channel: u64,
    /// Signals copied onto the output
    pub signals: Value,
}

/// Returns the channel number of a JSON entry, treating 0 and non-numbers as absent.
fn channel_number(entry: &Map<String, Value>) -> Option<u64> {
    entry
        .get("channel")
        .and_then(Value::as_u64)
        .filter(|channel| *channel != 0)
}

/// Whether a JSON value counts as set: `null`, `false`, `0` and `""` do not.
fn is_set(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n.abs() > 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Collects `signals` per channel number from a channel mapping document.
///
/// Accepts either the `{ "channels": {...}, "metadata": {...} }` layout or a
/// bare map of channel entries. Entries without a channel number or with
/// unset `signals` (missing, `null`, `false`, `0`, `""`) are skipped.
pub fn collect_mapping_signals(mapping: &Value) -> BTreeMap<u64, Value> {
    let channels = mapping.get("channels").unwrap_or(mapping);

    channels
        .as_object()
        .into_iter()
        .flat_map(|map| map.values())
        .filter_map(Value::as_object)
        .filter_map(|entry| {
            let channel = channel_number(entry)?;
            let signals = entry.get("signals").filter(|signals| is_set(signals))?;
            Some((channel, signals.clone()))
        })
        .collect()
}

/// Sets `signals` on every hardware output whose channel has mapped signals.
///
/// # Returns
///
/// The outputs that were updated, in output order
pub fn attach_signals(
    hardware: &mut Value,
    signals: &BTreeMap<u64, Value>,
) -> Result<Vec<SignalUpdate>> {
    let outputs = hardware
        .get_mut("outputs")
        .and_then(Value::as_array_mut)
        .context("Hardware config has no 'outputs' array")?;

    let mut updates = Vec::new();
    for output in outputs.iter_mut().filter_map(Value::as_object_mut) {
        let Some(channel) = channel_number(output) else {
            continue;
        };
        let Some(channel_signals) = signals.get(&channel) else {
            continue;
        };

        output.insert("signals".to_string(), channel_signals.clone());
        updates.push(SignalUpdate {
            id: output.get("id").and_then(Value::as_str).map(String::from),
            channel,
            signals: channel_signals.clone(),
        });
    }

    Ok(updates)
}

fn read_json(path: &Path) -> Result<Value> {
    let content =
        fs::read_to_string(path).context(format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).context(format!("Failed to parse {}", path.display()))
}

/// Reads both files, attaches the mapped signals and rewrites the hardware config.
///
/// Nothing is written when either file cannot be read or parsed.
pub fn attach_signals_to_file(
    hardware_path: &Path,
    mapping_path: &Path,
) -> Result<Vec<SignalUpdate>> {
    let mut hardware = read_json(hardware_path)?;
    let mapping = read_json(mapping_path)?;

    let signals = collect_mapping_signals(&mapping);
    let updates = attach_signals(&mut hardware, &signals)
        .context(format!("Invalid hardware config: {}", hardware_path.display()))?;

    write_pretty_json(hardware_path, &hardware)?;
    Ok(updates)
}
