//! Diagnose the resolved signing configuration.

use anyhow::{bail, Context, Result};
use clap::Args;
use signet_core::{keystore, resolver};

use super::common::ProjectArgs;

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    project: ProjectArgs,
}

pub fn run(args: CheckArgs) -> Result<()> {
    let project = args.project.to_project();
    let config = resolver::resolve(&project).context("Failed to resolve signing configuration")?;

    let Some(config) = config else {
        println!("No key.properties found; nothing to check.");
        return Ok(());
    };

    let findings =
        keystore::verify_config(&config).context("Failed to inspect signing configuration")?;

    if findings.is_empty() {
        println!(
            "Signing configuration looks good ({})",
            config.properties_file.display()
        );
        return Ok(());
    }

    println!("Signing configuration problems:");
    for finding in &findings {
        println!("  - {}", finding);
    }
    bail!("{} signing issue(s) found", findings.len());
}
