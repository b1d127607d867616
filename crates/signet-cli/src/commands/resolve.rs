//! Resolve and display the release signing configuration.

use anyhow::{Context, Result};
use clap::Args;
use signet_core::models::SigningConfigSummary;
use signet_core::resolver;

use super::common::ProjectArgs;

#[derive(Args)]
pub struct ResolveArgs {
    #[command(flatten)]
    project: ProjectArgs,

    /// Print the resolved configuration as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: ResolveArgs) -> Result<()> {
    let project = args.project.to_project();
    let config = resolver::resolve(&project).context("Failed to resolve signing configuration")?;

    let Some(config) = config else {
        // Not an error: release builds simply stay unsigned.
        println!("No key.properties found; release builds will be unsigned.");
        return Ok(());
    };

    if args.json {
        let summary = SigningConfigSummary::from(&config);
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Signing configuration");
    println!("  Properties file: {}", config.properties_file.display());
    println!("  Keystore:        {}", config.store_file.display());
    println!(
        "  Store type:      {}",
        config.store_type.as_deref().unwrap_or("(platform default)")
    );
    println!("  Key alias:       {}", config.key_alias);

    Ok(())
}
