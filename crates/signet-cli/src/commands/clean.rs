//! Remove key.properties from the project root.

use anyhow::{Context, Result};
use clap::Args;
use signet_core::emit;

use super::common::ProjectArgs;

#[derive(Args)]
pub struct CleanArgs {
    #[command(flatten)]
    project: ProjectArgs,
}

pub fn run(args: CleanArgs) -> Result<()> {
    let project = args.project.to_project();

    let removed = emit::remove_key_properties(&project.project_root)
        .context("Failed to remove key.properties")?;

    if removed {
        println!(
            "Removed key.properties from {}",
            project.project_root.display()
        );
    } else {
        println!("No key.properties to remove.");
    }

    Ok(())
}
