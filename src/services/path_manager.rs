//! Centralized naming for task workspace locations.
//!
//! This module owns the on-disk layout used by the task preparation hook:
//!
//! ```text
//! <cwd>/claude-code-storage/
//! ├── claude-instance-1/
//! │   ├── INVESTIGATION_REPORT.md
//! │   ├── FLOW_REPORT.md
//! │   └── PLAN.md
//! └── claude-instance-2/
//! ```
//!
//! The report files are written by downstream agents; nothing here checks
//! that they exist.
//!
//! # Examples
//!
//! ```rust
//! use sessionhooks::services::PathManager;
//! use std::path::Path;
//!
//! let paths = PathManager::default();
//! let root = paths.workspace_root(Path::new("/repo"));
//! assert_eq!(root, Path::new("/repo/claude-code-storage"));
//! assert_eq!(paths.instance_name(4), "claude-instance-4");
//! ```

use crate::{Error, Result};
use regex::Regex;
use std::path::{Path, PathBuf};

/// Name of the workspace root directory under the session cwd.
pub const STORAGE_DIR_NAME: &str = "claude-code-storage";

/// Prefix of numbered instance directories.
pub const INSTANCE_PREFIX: &str = "claude-instance";

/// Report files each instance directory is expected to receive.
pub const REPORT_FILES: [&str; 3] = ["INVESTIGATION_REPORT.md", "FLOW_REPORT.md", "PLAN.md"];

/// Builds workspace and instance paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathManager {
    /// Workspace root directory name, relative to the session cwd.
    storage_dir: String,
    /// Instance directory prefix (without the trailing `-`).
    instance_prefix: String,
}

impl Default for PathManager {
    fn default() -> Self {
        Self::new(STORAGE_DIR_NAME, INSTANCE_PREFIX)
    }
}

impl PathManager {
    /// Creates a path manager with custom names.
    #[must_use]
    pub fn new(storage_dir: impl Into<String>, instance_prefix: impl Into<String>) -> Self {
        Self {
            storage_dir: storage_dir.into(),
            instance_prefix: instance_prefix.into(),
        }
    }

    /// Returns the workspace root directory name.
    #[must_use]
    pub fn storage_dir(&self) -> &str {
        &self.storage_dir
    }

    /// Returns the instance prefix.
    #[must_use]
    pub fn instance_prefix(&self) -> &str {
        &self.instance_prefix
    }

    /// Returns `{cwd}/{storage_dir}`.
    #[must_use]
    pub fn workspace_root(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.storage_dir)
    }

    /// Returns `{instance_prefix}-{id}`.
    #[must_use]
    pub fn instance_name(&self, id: u64) -> String {
        format!("{}-{id}", self.instance_prefix)
    }

    /// Returns `{storage_dir}/{instance_prefix}-{id}/`, the form shown to agents.
    #[must_use]
    pub fn display_instance_dir(&self, id: u64) -> String {
        format!("{}/{}/", self.storage_dir, self.instance_name(id))
    }

    /// Compiles the pattern matching instance directory names.
    ///
    /// The whole name must match; the numeric suffix is capture group 1.
    pub fn instance_pattern(&self) -> Result<Regex> {
        let pattern = format!(r"^{}-(\d+)$", regex::escape(&self.instance_prefix));
        Regex::new(&pattern).map_err(|e| Error::InvalidInput(e.to_string()))
    }
}
