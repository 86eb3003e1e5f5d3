//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Default project file name inside a fixture root.
pub const PROJECT_FILE: &str = "core-v2_9-30-25_v1.ebp";

/// Default signal catalog inside a fixture root.
pub const SIGNAL_FILE: &str = "web/signal-info.json";

/// One `<channel>` declaration for a fixture project file.
pub struct ChannelDecl<'a> {
    pub number: u32,
    pub name: &'a str,
    pub direction: &'a str,
    pub setting_id: u32,
}

impl<'a> ChannelDecl<'a> {
    /// An output channel with the given setting id.
    pub const fn output(number: u32, name: &'a str, setting_id: u32) -> Self {
        Self {
            number,
            name,
            direction: "Output",
            setting_id,
        }
    }

    /// An input channel, which the extractor must ignore.
    pub const fn input(number: u32, name: &'a str) -> Self {
        Self {
            number,
            name,
            direction: "Input",
            setting_id: 48,
        }
    }
}

/// Renders an EmpirBus-style project export around the given channels.
pub fn ebp_content(channels: &[ChannelDecl<'_>]) -> String {
    let mut content = String::from(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<project name=\"test-boat\">\n  <module id=\"1\" type=\"core\">\n",
    );

    for channel in channels {
        content.push_str(&format!(
            "    <channel number=\"{}\" name=\"{}\" direction=\"{}\" type=\"digital\" outMainChannelSettingId=\"{}\" />\n",
            channel.number, channel.name, channel.direction, channel.setting_id
        ));
    }

    content.push_str("  </module>\n</project>\n");
    content
}

/// Renders a `signal-info.json` catalog from (description, signalId) pairs.
pub fn signal_info_content(signals: &[(&str, u64)]) -> String {
    let records: Vec<serde_json::Value> = signals
        .iter()
        .map(|(description, signal_id)| {
            serde_json::json!({ "description": description, "signalId": signal_id })
        })
        .collect();
    serde_json::to_string_pretty(&records).expect("Failed to serialize catalog")
}

/// A project root in a temp dir.
pub struct TestProject {
    pub temp_dir: TempDir,
}

impl TestProject {
    /// Creates a project root with both input files at their default paths.
    pub fn new(channels: &[ChannelDecl<'_>], signals: &[(&str, u64)]) -> Self {
        let project = Self::empty();
        project.write_file(PROJECT_FILE, &ebp_content(channels));
        project.write_file(SIGNAL_FILE, &signal_info_content(signals));
        project
    }

    /// Creates an empty project root.
    pub fn empty() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn root_arg(&self) -> &str {
        self.root().to_str().expect("Temp dir path is not UTF-8")
    }

    /// Writes a file relative to the root, creating parent directories.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create fixture directory");
        }
        fs::write(&path, content).expect("Failed to write fixture file");
        path
    }

    /// Path of a generated file in the default output directory.
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.root().join("configuration").join(file_name)
    }

    pub fn read_output(&self, file_name: &str) -> String {
        fs::read_to_string(self.output_path(file_name)).expect("Failed to read output file")
    }

    pub fn read_output_json(&self, file_name: &str) -> serde_json::Value {
        serde_json::from_str(&self.read_output(file_name)).expect("Output is not valid JSON")
    }
}

/// The standard small boat: a light, a bilge pump, a dimmer and a horn.
pub fn boat_project() -> TestProject {
    TestProject::new(
        &[
            ChannelDecl::output(1, "out-channel-nav-lights", 48),
            ChannelDecl::output(3, "out-channel-bilge-pump", 48),
            ChannelDecl::output(2, "cabin_dimmer", 48),
            ChannelDecl::output(4, "Channel 4", 53),
            ChannelDecl::input(9, "in-channel-float-switch"),
        ],
        &[
            ("toggle-channel-1-on-off", 101),
            ("mom-channel-3-on-off", 201),
            ("dcu-channel-2", 302),
            ("toggle-channel-2-on-off", 102),
        ],
    )
}
