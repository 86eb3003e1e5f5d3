//! EmpirBus Channels - extract output channels from an EmpirBus project
//!
//! Reads an EmpirBus project export and a signal catalog, classifies every
//! output channel and writes the hardware configuration, component examples
//! and full channel mapping used by the control panel.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use empirbus_channels::cli::{AttachSignalsArgs, CliResult, ExitCode, ExtractArgs};
use empirbus_channels::constants::APP_BINARY_NAME;

/// EmpirBus Channels - generate panel configuration from an EmpirBus project
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract channels and write the configuration files (default)
    Extract(ExtractArgs),
    /// Copy signal ids from channel-mapping.json into hardware-config.json
    AttachSignals(AttachSignalsArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(command: Option<Command>) -> CliResult<()> {
    match command {
        Some(Command::Extract(args)) => args.execute(),
        Some(Command::AttachSignals(args)) => args.execute(),
        None => ExtractArgs::default().execute(),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let exit_code = match run(cli.command) {
        Ok(()) => ExitCode::Success,
        Err(err) => {
            eprintln!("Error: {}", err.message);
            err.exit_code
        }
    };
    std::process::exit(exit_code.code());
}
