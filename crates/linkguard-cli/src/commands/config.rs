//! Configuration management commands.

use anyhow::{Context, Result};
use linkguard_config::{ConfigSources, LinkguardConfig, PROJECT_FILE};
use std::path::Path;

use crate::style::{Status, print_field, print_parameters};

/// Show current configuration.
pub fn show(config: &LinkguardConfig, format: &str) -> Result<()> {
    match format {
        "json" => {
            let json = serde_json::to_string_pretty(config)?;
            println!("{json}");
        }
        "toml" => {
            let toml_str = toml::to_string_pretty(config)?;
            println!("{toml_str}");
        }
        _ => {
            let params = config.crc.parameters();

            println!("Linkguard Configuration");
            println!("=======================\n");

            println!("CRC:");
            match &config.crc.custom {
                Some(_) => print_field("Source", "custom parameters"),
                None => print_field("Preset", config.crc.preset),
            }
            print_parameters(&params);
            println!();

            println!("Buffer:");
            print_field("Capacity", config.buffer.capacity);
            print_field("Chunk size", config.buffer.chunk_size);
            println!();

            println!("Logging:");
            print_field("Level", &config.logging.level);
        }
    }

    Ok(())
}

/// Validate configuration files.
///
/// `loaded` is the result of layering every file in `sources` plus the
/// environment.
pub fn validate(
    sources: &ConfigSources,
    file: Option<&Path>,
    loaded: Result<LinkguardConfig>,
) -> Result<()> {
    let result = match file {
        Some(path) => {
            println!("Validating {}...", path.display());
            LinkguardConfig::from_file(path)
                .with_context(|| format!("Invalid configuration in {}", path.display()))
        }
        None => {
            println!(
                "Validating configuration in {}...",
                sources.project_dir().display()
            );
            for (layer, path) in sources.present() {
                print_field(layer.name(), path.display());
            }
            if !sources.has_project_file() {
                Status::Warn.print(format_args!("No {PROJECT_FILE} found; built-in defaults apply"));
                Status::Hint.print(format_args!(
                    "Create {PROJECT_FILE} to pin the CRC preset and buffer sizes"
                ));
            }
            loaded
        }
    };

    match result {
        Ok(_) => {
            Status::Pass.print("Configuration is valid");
            Ok(())
        }
        Err(e) => {
            Status::Fail.print("Configuration validation failed:");
            eprintln!("  {e:#}");
            Err(e)
        }
    }
}
