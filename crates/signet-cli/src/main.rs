use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{check, clean, init, resolve};

#[derive(Parser)]
#[command(name = "signet")]
#[command(about = "Android release-signing configuration for Flutter projects", long_about = None)]
#[command(version = signet_core::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve and display the release signing configuration
    Resolve(resolve::ResolveArgs),

    /// Diagnose the resolved signing configuration
    Check(check::CheckArgs),

    /// Write a key.properties file at the project root
    Init(init::InitArgs),

    /// Remove key.properties from the project root
    Clean(clean::CleanArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve(args) => resolve::run(args),
        Commands::Check(args) => check::run(args),
        Commands::Init(args) => init::run(args),
        Commands::Clean(args) => clean::run(args),
    }
}
