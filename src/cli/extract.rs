//! Extract command: project file + signal catalog to configuration files.

use crate::cli::common::{CliError, CliResult};
use crate::config::{Config, ProjectPaths};
use crate::parser::{load_signal_catalog, read_project_channels};
use crate::report::ReportFormatter;
use crate::services::{classify_channels, ArtifactWriter, GeneratedArtifacts};
use clap::Args;
use std::env;
use std::path::{Path, PathBuf};

/// Extract channel mappings from an EmpirBus project
#[derive(Debug, Clone, Default, Args)]
pub struct ExtractArgs {
    /// Project root (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Config file (defaults to <root>/empirbus-channels.toml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// EmpirBus project file, relative to the root
    #[arg(long, value_name = "FILE")]
    pub project_file: Option<PathBuf>,

    /// Signal catalog, relative to the root
    #[arg(long, value_name = "FILE")]
    pub signal_file: Option<PathBuf>,

    /// Output directory, relative to the root
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Fail when the signal catalog repeats a description
    #[arg(long)]
    pub strict_signals: bool,
}

/// Resolves the project root, defaulting to the current directory.
pub(crate) fn resolve_root(root: Option<&Path>) -> CliResult<PathBuf> {
    match root {
        Some(root) => Ok(root.to_path_buf()),
        None => env::current_dir()
            .map_err(|e| CliError::io(format!("Failed to determine current directory: {e}"))),
    }
}

/// Loads the config from an explicit file or from the project root.
pub(crate) fn load_config(root: &Path, config_file: Option<&Path>) -> CliResult<Config> {
    let result = match config_file {
        Some(path) => Config::load_file(path),
        None => Config::load(root),
    };
    result.map_err(|e| CliError::from_load_error("Failed to load configuration", &e))
}

impl ExtractArgs {
    /// Builds the run configuration: defaults, then config file, then flags.
    fn build_config(&self, root: &Path) -> CliResult<Config> {
        let mut config = load_config(root, self.config.as_deref())?;

        if let Some(path) = &self.project_file {
            config.paths.project_file.clone_from(path);
        }
        if let Some(path) = &self.signal_file {
            config.paths.signal_file.clone_from(path);
        }
        if let Some(path) = &self.output_dir {
            config.paths.output_dir.clone_from(path);
        }
        if self.strict_signals {
            config.catalog.fail_on_duplicates = true;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e}")))?;
        Ok(config)
    }

    /// Execute the extract command
    pub fn execute(&self) -> CliResult<()> {
        let root = resolve_root(self.root.as_deref())?;
        let config = self.build_config(&root)?;
        let paths = config.resolve(&root);

        run_extraction(&config, &paths)
    }
}

/// Runs the full pipeline for a resolved configuration.
///
/// Both inputs are read before anything is written.
pub fn run_extraction(config: &Config, paths: &ProjectPaths) -> CliResult<()> {
    println!("Extracting channel mappings from EmpirBus project...");
    println!("EBP File: {}", paths.project_file.display());
    println!("Signal Info: {}", paths.signal_file.display());
    println!();

    let channels = read_project_channels(&paths.project_file)
        .map_err(|e| CliError::from_load_error("Failed to load project file", &e))?;
    let catalog = load_signal_catalog(&paths.signal_file)
        .map_err(|e| CliError::from_load_error("Failed to load signal catalog", &e))?;

    println!("Found {} output channels in EmpirBus project", channels.len());
    println!("Found {} signal definitions", catalog.len());
    println!();

    let formatter = ReportFormatter::new();

    if config.catalog.fail_on_duplicates && !catalog.collisions().is_empty() {
        print!("{}", formatter.format_collisions(catalog.collisions()));
        return Err(CliError::validation(format!(
            "Signal catalog has {} duplicate description(s)",
            catalog.collisions().len()
        )));
    }

    let channel_map = classify_channels(&channels, &catalog);
    let artifacts = GeneratedArtifacts::build(
        &channel_map,
        &paths.source_name(),
        &config.output.extracted_at,
    );

    print!("{}", formatter.format_report(&channel_map));
    print!("{}", formatter.format_collisions(catalog.collisions()));

    let written = ArtifactWriter::new(&paths.output_dir)
        .write_all(&artifacts)
        .map_err(|e| CliError::io(format!("{e:#}")))?;

    println!(
        "\n✅ Hardware configuration saved to: {}",
        written.hardware_config.display()
    );
    println!(
        "✅ Component examples saved to: {}",
        written.component_examples.display()
    );
    println!(
        "✅ Full channel mapping saved to: {}",
        written.channel_mapping.display()
    );

    print!("{}", formatter.format_next_steps());

    Ok(())
}
