//! Attach-signals command: copy mapped signal ids into hardware-config.json.

use crate::cli::common::{CliError, CliResult};
use crate::cli::extract::{load_config, resolve_root};
use crate::constants::{CHANNEL_MAPPING_FILE, HARDWARE_CONFIG_FILE};
use crate::services::signals::attach_signals_to_file;
use clap::Args;
use std::path::PathBuf;

/// Add signal mappings from channel-mapping.json to hardware-config.json
#[derive(Debug, Clone, Default, Args)]
pub struct AttachSignalsArgs {
    /// Project root (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Config file (defaults to <root>/empirbus-channels.toml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding both files, relative to the root
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

impl AttachSignalsArgs {
    /// Execute the attach-signals command
    pub fn execute(&self) -> CliResult<()> {
        let root = resolve_root(self.root.as_deref())?;
        let mut config = load_config(&root, self.config.as_deref())?;
        if let Some(dir) = &self.output_dir {
            config.paths.output_dir.clone_from(dir);
        }

        let output_dir = config.resolve(&root).output_dir;
        let hardware_path = output_dir.join(HARDWARE_CONFIG_FILE);
        let mapping_path = output_dir.join(CHANNEL_MAPPING_FILE);

        let updates = attach_signals_to_file(&hardware_path, &mapping_path)
            .map_err(|e| CliError::from_load_error("Failed to attach signals", &e))?;

        for update in &updates {
            println!(
                "✓ Added signals to {} (channel {}): {}",
                update.id.as_deref().unwrap_or("<no id>"),
                update.channel,
                update.signals
            );
        }

        println!("\n✅ Updated {} outputs with signal mappings", updates.len());
        println!("📝 Updated: {}", hardware_path.display());

        Ok(())
    }
}
