//! Ripple CLI - design, inspect and apply low-pass filter cascades.

mod commands;
mod wav;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ripple")]
#[command(author, version, about = "Butterworth and Chebyshev low-pass filter designer", long_about = None)]
struct Cli {
    /// Log design details (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the sections, coefficients and poles of a design
    Design(commands::design::DesignArgs),

    /// Print the magnitude response of a design
    Response(commands::response::ResponseArgs),

    /// Filter a WAV file
    Process(commands::process::ProcessArgs),

    /// List, show and save filter presets
    Presets(commands::presets::PresetsArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so that --json output stays machine-readable
    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Design(args) => commands::design::run(args),
        Commands::Response(args) => commands::response::run(args),
        Commands::Process(args) => commands::process::run(args),
        Commands::Presets(args) => commands::presets::run(args),
    }
}
