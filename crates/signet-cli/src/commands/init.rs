//! Write a key.properties file at the project root.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use signet_core::emit;
use signet_core::models::KEY_PROPERTIES_FILE;

use super::common::ProjectArgs;

#[derive(Args)]
pub struct InitArgs {
    #[command(flatten)]
    project: ProjectArgs,

    /// Keystore path, as it should appear in key.properties
    #[arg(long)]
    store_file: PathBuf,

    /// Keystore password
    #[arg(long)]
    store_password: String,

    /// Key alias within the keystore
    #[arg(long)]
    key_alias: String,

    /// Key password
    #[arg(long)]
    key_password: String,

    /// Keystore type override (e.g. pkcs12)
    #[arg(long)]
    store_type: Option<String>,

    /// Overwrite an existing key.properties
    #[arg(long)]
    force: bool,
}

pub fn run(args: InitArgs) -> Result<()> {
    let project = args.project.to_project();

    let existing = project.project_root.join(KEY_PROPERTIES_FILE);
    if existing.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            existing.display()
        );
    }

    let path = emit::write_key_properties(
        &project.project_root,
        &args.store_file,
        &args.store_password,
        &args.key_alias,
        &args.key_password,
        args.store_type.as_deref(),
    )
    .context("Failed to write key.properties")?;

    println!("Wrote {}", path.display());
    Ok(())
}
