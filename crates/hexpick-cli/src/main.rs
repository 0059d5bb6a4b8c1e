mod commands;
mod summary;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hexpick", about = "Sample paint colors from reference images")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Picker config file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the averaged color at a pixel of each image
    Sample(commands::sample::SampleArgs),
    /// Show the columns and rows of a color CSV
    Inspect(commands::inspect::InspectArgs),
    /// Normalize a CSV that lacks required columns
    Repair(commands::repair::RepairArgs),
    /// Pick one row's color from an image and export the CSV
    Pick(commands::pick::PickArgs),
    /// Print or save the default config
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = commands::load_config(cli.config.as_deref())?;

    match &cli.command {
        Commands::Sample(args) => commands::sample::run(args, &config),
        Commands::Inspect(args) => commands::inspect::run(args),
        Commands::Repair(args) => commands::repair::run(args),
        Commands::Pick(args) => commands::pick::run(args, &config),
        Commands::Config(args) => commands::config::run(args, &config),
    }
}
