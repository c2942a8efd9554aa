//! core::paths
//!
//! Centralized path routing for project locations.
//!
//! # Architecture
//!
//! All project-relative locations are routed through [`ProjectPaths`]:
//! - `package.json` - the project manifest
//! - `node_modules/.bin/` - locally installed executables, prepended to the
//!   child's `PATH`
//! - `.runlet/config.toml` - project-scoped configuration
//!
//! No code outside this module should compute these joins directly.

use std::path::{Path, PathBuf};

/// Name of the project marker / manifest file.
pub const MANIFEST_FILE: &str = "package.json";

/// Path routing for one located project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    /// Directory containing the manifest. Scripts run with this as their
    /// working directory.
    pub root: PathBuf,
}

impl ProjectPaths {
    /// Create project paths rooted at the manifest's directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// The project root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path to the project manifest.
    ///
    /// # Example
    ///
    /// ```
    /// use runlet::core::paths::ProjectPaths;
    /// use std::path::PathBuf;
    ///
    /// let paths = ProjectPaths::new(PathBuf::from("/proj"));
    /// assert_eq!(paths.manifest_path(), PathBuf::from("/proj/package.json"));
    /// ```
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE)
    }

    /// Directory of locally installed executables.
    ///
    /// This is `<root>/node_modules/.bin`, made available first on the
    /// child's search path.
    pub fn local_bin_dir(&self) -> PathBuf {
        self.root.join("node_modules").join(".bin")
    }

    /// Path to the project-scoped configuration file.
    ///
    /// This is `<root>/.runlet/config.toml`.
    pub fn config_path(&self) -> PathBuf {
        self.root.join(".runlet").join("config.toml")
    }
}

/// Locate the nearest project root at or above `start`.
///
/// Walks upward until a directory containing [`MANIFEST_FILE`] is found.
/// Returns `None` when the walk reaches the filesystem root without a hit.
pub fn find_project_root(start: &Path) -> Option<ProjectPaths> {
    let mut dir = Some(start);
    while let Some(d) = dir {
        if d.join(MANIFEST_FILE).is_file() {
            return Some(ProjectPaths::new(d.to_path_buf()));
        }
        dir = d.parent();
    }
    None
}
