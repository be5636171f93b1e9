mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "histostretch", about = "Region-based histogram contrast stretching")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Stretch one image into an 8-bit grayscale output
    Stretch(commands::stretch::StretchArgs),
    /// Show the histogram and stretch bounds without writing output
    Bounds(commands::bounds::BoundsArgs),
    /// Stretch every job listed in a TOML config
    Batch(commands::batch::BatchArgs),
    /// Print a sample batch config
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Stretch(args) => commands::stretch::run(args),
        Commands::Bounds(args) => commands::bounds::run(args),
        Commands::Batch(args) => commands::batch::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
