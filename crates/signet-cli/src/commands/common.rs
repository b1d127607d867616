//! Shared project-location flags.

use std::path::{Path, PathBuf};

use clap::Args;
use signet_core::models::AndroidProject;

#[derive(Args, Debug)]
pub struct ProjectArgs {
    /// Android project root (defaults to ./android when it exists, else .)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Application module directory (defaults to <root>/app)
    #[arg(long)]
    module: Option<PathBuf>,
}

impl ProjectArgs {
    pub fn to_project(&self) -> AndroidProject {
        let root = match &self.root {
            Some(root) => root.clone(),
            None => AndroidProject::from_flutter_workspace(Path::new("."))
                .map(|project| project.project_root)
                .unwrap_or_else(|| PathBuf::from(".")),
        };
        let module = self
            .module
            .clone()
            .unwrap_or_else(|| root.join("app"));
        AndroidProject::new(root, module)
    }
}
