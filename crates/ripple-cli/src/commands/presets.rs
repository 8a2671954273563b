//! Preset management commands.
//!
//! Lists the factory presets, prints a preset as TOML, and saves flag
//! combinations as new preset files.

use anyhow::Context;
use clap::{Args, Subcommand};
use ripple_config::{FilterPreset, factory_presets};
use std::path::PathBuf;

use super::{FilterArgs, load_preset};

/// Sample rate recorded in presets saved without one.
const DEFAULT_PRESET_RATE: u32 = 48000;

#[derive(Args)]
pub struct PresetsArgs {
    #[command(subcommand)]
    command: PresetsCommand,
}

#[derive(Subcommand)]
enum PresetsCommand {
    /// List factory presets
    List,

    /// Print a preset as TOML
    Show {
        /// Factory preset name or path to a preset file
        name: String,
    },

    /// Save a filter design as a preset file
    Save {
        /// Destination TOML file
        path: PathBuf,

        /// Preset name
        #[arg(short, long)]
        name: String,

        /// Description of the preset
        #[arg(short, long)]
        description: Option<String>,

        #[command(flatten)]
        filter: FilterArgs,

        /// Overwrite if the file already exists
        #[arg(long)]
        force: bool,
    },
}

pub fn run(args: PresetsArgs) -> anyhow::Result<()> {
    match args.command {
        PresetsCommand::List => list(),
        PresetsCommand::Show { name } => show(&name),
        PresetsCommand::Save {
            path,
            name,
            description,
            filter,
            force,
        } => save(path, name, description, &filter, force),
    }
}

fn list() -> anyhow::Result<()> {
    println!("Factory Presets:");
    for preset in factory_presets() {
        println!(
            "  {:<12} {:<12} order {:<3} {:>8.1} Hz @ {} Hz",
            preset.name,
            preset.filter.family,
            preset.filter.order,
            preset.cutoff_hz(),
            preset.sample_rate
        );
        if let Some(description) = &preset.description {
            println!("               {description}");
        }
    }
    Ok(())
}

fn show(name: &str) -> anyhow::Result<()> {
    let preset = load_preset(name)?;
    print!("{}", preset.to_toml()?);
    Ok(())
}

fn save(
    path: PathBuf,
    name: String,
    description: Option<String>,
    filter: &FilterArgs,
    force: bool,
) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite",
            path.display()
        );
    }

    let resolved = filter.resolve(None)?;
    let mut preset = FilterPreset::new(name, resolved.config)
        .with_sample_rate(resolved.sample_rate.unwrap_or(DEFAULT_PRESET_RATE));
    preset.description = description;

    preset
        .save(&path)
        .with_context(|| format!("failed to save preset to {}", path.display()))?;
    tracing::info!(path = %path.display(), "saved preset");
    println!("Saved preset '{}' to {}", preset.name, path.display());
    Ok(())
}
