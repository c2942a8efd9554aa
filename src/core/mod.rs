//! core
//!
//! Domain types and project file access: the manifest, the script table,
//! naming rules, path routing, and configuration.
//!
//! Nothing in this layer runs processes or prints; that belongs to
//! [`crate::engine`] and [`crate::ui`].

pub mod config;
pub mod manifest;
pub mod naming;
pub mod paths;
pub mod scripts;

pub use config::{Config, ConfigError, Hooks};
pub use manifest::{Manifest, ManifestError};
pub use paths::{find_project_root, ProjectPaths, MANIFEST_FILE};
pub use scripts::ScriptTable;
