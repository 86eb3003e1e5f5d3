//! Console report formatting.
//!
//! Renders the classified channels as fixed-width tables grouped by control
//! type:
//!
//! ```text
//! PUSH BUTTONS (1 channels)
//! ----------------------------------------------------------------------------------------------------
//! ID             Ch Label                            Toggle      Mom      DCU Original Name
//! ----------------------------------------------------------------------------------------------------
//! core-03         3 Bilge Pump                            -      201        - out-channel-bilge-pump
//! ```

use crate::constants::REPORT_WIDTH;
use crate::models::{ChannelMap, ClassifiedChannel, SignalId};
use crate::parser::SignalCollision;
use std::collections::BTreeMap;
use std::fmt::Write;

/// Formatter for the channel mapping report.
#[derive(Debug, Clone, Copy)]
pub struct ReportFormatter {
    width: usize,
}

impl ReportFormatter {
    /// Creates a formatter with the default rule width.
    #[must_use]
    pub fn new() -> Self {
        Self {
            width: REPORT_WIDTH,
        }
    }

    fn heavy_rule(&self) -> String {
        "=".repeat(self.width)
    }

    fn light_rule(&self) -> String {
        "-".repeat(self.width)
    }

    /// Formats the grouped channel report with the grand total.
    ///
    /// Groups are sorted by control type name, channels within a group by
    /// channel number.
    pub fn format_report(&self, channels: &ChannelMap) -> String {
        let mut output = String::new();

        output.push_str(&self.heavy_rule());
        output.push('\n');
        output.push_str("EMPIRBUS CHANNEL MAPPING REPORT\n");
        output.push_str(&self.heavy_rule());
        output.push_str("\n\n");

        let mut by_type: BTreeMap<&str, Vec<&ClassifiedChannel>> = BTreeMap::new();
        for channel in channels.values() {
            by_type
                .entry(channel.control.as_str())
                .or_default()
                .push(channel);
        }

        for (control, group) in &by_type {
            writeln!(
                output,
                "\n{}S ({} channels)",
                control.to_uppercase().replace('-', " "),
                group.len()
            )
            .expect("Writing to String should not fail");
            output.push_str(&self.light_rule());
            output.push('\n');
            writeln!(
                output,
                "{:<12} {:>4} {:<30} {:>8} {:>8} {:>8} {:<30}",
                "ID", "Ch", "Label", "Toggle", "Mom", "DCU", "Original Name"
            )
            .expect("Writing to String should not fail");
            output.push_str(&self.light_rule());
            output.push('\n');

            for channel in group {
                writeln!(
                    output,
                    "{:<12} {:>4} {:<30} {:>8} {:>8} {:>8} {:<30}",
                    channel.id,
                    channel.channel,
                    channel.label,
                    signal_cell(channel.signals.toggle.as_ref()),
                    signal_cell(channel.signals.momentary.as_ref()),
                    signal_cell(channel.signals.dimmer.as_ref()),
                    channel.original_name
                )
                .expect("Writing to String should not fail");
            }
        }

        output.push('\n');
        output.push_str(&self.heavy_rule());
        output.push('\n');
        writeln!(output, "TOTAL CHANNELS: {}", channels.len())
            .expect("Writing to String should not fail");
        output.push_str(&self.heavy_rule());
        output.push('\n');

        output
    }

    /// Formats the duplicate-description warning section.
    ///
    /// Returns an empty string when there are no collisions.
    pub fn format_collisions(&self, collisions: &[SignalCollision]) -> String {
        if collisions.is_empty() {
            return String::new();
        }

        let mut output = String::new();
        writeln!(
            output,
            "\n⚠ DUPLICATE SIGNAL DESCRIPTIONS ({})",
            collisions.len()
        )
        .expect("Writing to String should not fail");
        output.push_str(&self.light_rule());
        output.push('\n');
        for collision in collisions {
            writeln!(
                output,
                "  {}: signal {} replaced by {}",
                collision.description, collision.replaced, collision.kept
            )
            .expect("Writing to String should not fail");
        }
        output.push_str("  The last entry for each description is used.\n");

        output
    }

    /// Formats the closing guidance block.
    pub fn format_next_steps(&self) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str(&self.heavy_rule());
        output.push('\n');
        output.push_str("NEXT STEPS:\n");
        output.push_str(&self.heavy_rule());
        output.push('\n');
        output.push_str("1. Review hardware-config.json and update channel labels as needed\n");
        output.push_str("2. Copy the 'outputs' array to your schema.json hardware section\n");
        output.push_str("3. Use component-examples.json as a template for creating UI components\n");
        output
            .push_str("4. Reference channel-mapping.json for signal IDs and detailed information\n");
        output.push_str(&self.heavy_rule());
        output.push('\n');

        output
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Table cell for an optional signal id. Blank ids print as missing.
fn signal_cell(signal: Option<&SignalId>) -> String {
    match signal {
        Some(id) if !id.is_blank() => id.to_string(),
        _ => "-".to_string(),
    }
}
