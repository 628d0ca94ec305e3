//! Linkguard CLI.
//!
//! Computes CRC-16 checksums and pushes data through a bounded staging
//! buffer, the way a serial link receiver would.
//!
//! # Quick Start
//!
//! ```bash
//! # XModem CRC of a string
//! linkguard checksum --text "Hello World"
//!
//! # Modbus CRC of raw bytes
//! linkguard checksum --preset modbus --hex "01 03 00 00 00 0A"
//!
//! # Split a capture into 128-byte frames and checksum each one
//! linkguard stage capture.bin --frame 128
//! ```

mod commands;
mod style;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use linkguard_config::{ConfigLoader, LinkguardConfig};
use tracing_subscriber::EnvFilter;

use commands::checksum::ChecksumArgs;
use commands::stage::StageArgs;

/// Linkguard - CRC-16 checksums and bounded staging for binary links.
#[derive(Parser)]
#[command(name = "linkguard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Project directory holding linkguard.toml.
    #[arg(long, global = true, default_value = ".")]
    project: PathBuf,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version information.
    Version,

    /// Compute the CRC-16 of some bytes.
    Checksum(ChecksumArgs),

    /// List the built-in CRC presets and verify their check values.
    Presets,

    /// Stage a file through the bounded buffer and checksum fixed-size frames.
    Stage(StageArgs),

    /// Configuration management.
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration.
    Show {
        /// Output format (text, json, toml).
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Validate configuration files.
    Validate {
        /// Validate a single file instead of the layered project config.
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        style::set_no_color(true);
    }

    let loader = ConfigLoader::new().with_project_dir(&cli.project);
    let sources = loader.sources();
    let loaded = loader.load();
    init_logging(loaded.as_ref().ok());

    match cli.command {
        Commands::Version => {
            commands::version::run();
            Ok(())
        }
        Commands::Checksum(args) => commands::checksum::run(&args, &loaded?),
        Commands::Presets => commands::presets::run(),
        Commands::Stage(args) => commands::stage::run(&args, &loaded?),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show { format } => commands::config::show(&loaded?, &format),
            ConfigCommands::Validate { file } => {
                commands::config::validate(&sources, file.as_deref(), loaded)
            }
        },
    }
}

/// Logs go to stderr so command output stays machine-readable.
fn init_logging(config: Option<&LinkguardConfig>) {
    let level = config.map_or("info", |c| c.logging.level.as_str());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
