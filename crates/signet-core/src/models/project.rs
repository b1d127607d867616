//! Android project layout.

use std::path::{Path, PathBuf};

/// Filename of the Gradle signing credentials file.
pub const KEY_PROPERTIES_FILE: &str = "key.properties";

/// Location of an Android Gradle project within a checkout.
///
/// Replaces the ambient Gradle evaluation context (`rootProject`, module
/// `file()` resolution) with explicit paths, so resolution is a pure
/// function of the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AndroidProject {
    /// Gradle project root (the `android/` directory of a Flutter app).
    pub project_root: PathBuf,
    /// Application module directory (`android/app/`).
    pub module_dir: PathBuf,
}

impl AndroidProject {
    pub fn new(project_root: impl Into<PathBuf>, module_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            module_dir: module_dir.into(),
        }
    }

    /// Detects the standard Flutter layout under a workspace checkout.
    ///
    /// Returns `None` unless both `<workspace>/android` and
    /// `<workspace>/android/app` exist.
    pub fn from_flutter_workspace(workspace: &Path) -> Option<Self> {
        let project_root = workspace.join("android");
        let module_dir = project_root.join("app");
        if project_root.is_dir() && module_dir.is_dir() {
            Some(Self {
                project_root,
                module_dir,
            })
        } else {
            None
        }
    }

    /// Candidate `key.properties` locations, in priority order.
    ///
    /// First existing file wins:
    /// 1. `<project_root>/key.properties` (location recommended by Android docs)
    /// 2. `<project_root>/../key.properties` (secrets kept above the android/ folder)
    /// 3. `<module_dir>/key.properties`
    /// 4. `<module_dir>/../../key.properties`
    pub fn candidate_properties_files(&self) -> Vec<PathBuf> {
        vec![
            self.project_root.join(KEY_PROPERTIES_FILE),
            self.project_root.join("..").join(KEY_PROPERTIES_FILE),
            self.module_dir.join(KEY_PROPERTIES_FILE),
            self.module_dir.join("..").join("..").join(KEY_PROPERTIES_FILE),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_order() {
        let project = AndroidProject::new("android", "android/app");
        let candidates = project.candidate_properties_files();

        assert_eq!(candidates.len(), 4);
        assert_eq!(candidates[0], PathBuf::from("android/key.properties"));
        assert_eq!(candidates[1], PathBuf::from("android/../key.properties"));
        assert_eq!(candidates[2], PathBuf::from("android/app/key.properties"));
        assert_eq!(
            candidates[3],
            PathBuf::from("android/app/../../key.properties")
        );
    }

    #[test]
    fn test_from_flutter_workspace() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("android/app")).unwrap();

        let project = AndroidProject::from_flutter_workspace(dir.path()).unwrap();
        assert_eq!(project.project_root, dir.path().join("android"));
        assert_eq!(project.module_dir, dir.path().join("android/app"));
    }

    #[test]
    fn test_from_flutter_workspace_missing_module() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("android")).unwrap();

        assert!(AndroidProject::from_flutter_workspace(dir.path()).is_none());
    }

    #[test]
    fn test_from_flutter_workspace_not_flutter() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AndroidProject::from_flutter_workspace(dir.path()).is_none());
    }
}
