//! Monotonic instance directory allocation.
//!
//! Each call scans the workspace root, picks one past the highest existing
//! `claude-instance-<N>` suffix, and creates that directory. There is no
//! in-process counter: every hook run is a fresh process, so the directory
//! names on disk are the only record of previous allocations.
//!
//! # Concurrency
//!
//! The scan and the create are not atomic across processes. Two hooks that
//! scan the same snapshot compute the same ID, and because creation tolerates
//! an existing directory both report success for the same instance. Sequential
//! runs never reuse an ID.

use crate::models::{AllocationOutcome, InstanceDirectory};
use crate::services::{FsWorkspace, PathManager, WorkspaceFs};
use crate::{Error, Result};
use std::path::Path;
use tracing::instrument;

/// Allocates numbered instance directories under a workspace root.
#[derive(Debug, Clone, Default)]
pub struct InstanceAllocator<W = FsWorkspace> {
    fs: W,
    paths: PathManager,
}

impl InstanceAllocator {
    /// Creates an allocator over the real filesystem with default names.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<W: WorkspaceFs> InstanceAllocator<W> {
    /// Creates an allocator with a custom filesystem implementation.
    #[must_use]
    pub fn with_workspace(fs: W) -> Self {
        Self {
            fs,
            paths: PathManager::default(),
        }
    }

    /// Sets the naming scheme.
    #[must_use]
    pub fn with_paths(mut self, paths: PathManager) -> Self {
        self.paths = paths;
        self
    }

    /// Returns the naming scheme.
    #[must_use]
    pub const fn paths(&self) -> &PathManager {
        &self.paths
    }

    /// Computes the next unused instance ID without creating anything.
    ///
    /// Returns 1 if the root does not exist or holds no instance directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the root cannot be listed or the ID space is
    /// exhausted.
    pub fn next_id(&self, root: &Path) -> Result<u64> {
        let Some(children) = self.fs.child_dirs(root).map_err(|e| Error::OperationFailed {
            operation: "list_workspace".to_string(),
            cause: format!("{}: {e}", root.display()),
        })?
        else {
            return Ok(1);
        };

        let pattern = self.paths.instance_pattern()?;
        // Suffixes too large for u64 are ignored like any other non-match.
        let highest = children
            .iter()
            .filter_map(|name| pattern.captures(name))
            .filter_map(|caps| caps.get(1))
            .filter_map(|suffix| suffix.as_str().parse::<u64>().ok())
            .max();

        match highest {
            None => Ok(1),
            Some(max) => max.checked_add(1).ok_or_else(|| Error::OperationFailed {
                operation: "next_instance_id".to_string(),
                cause: format!("{}: instance id space exhausted", root.display()),
            }),
        }
    }

    /// Creates the next instance directory under `root`, creating `root` too
    /// if needed.
    ///
    /// Never panics; filesystem errors come back as
    /// [`AllocationOutcome::Failure`].
    #[instrument(skip(self, root), fields(root = %root.display()))]
    pub fn allocate(&self, root: &Path) -> AllocationOutcome {
        match self.try_allocate(root) {
            Ok(instance) => {
                tracing::debug!(id = instance.id, path = %instance.path.display(), "allocated instance");
                AllocationOutcome::Success(instance)
            },
            Err(err) => {
                tracing::warn!(error = %err, "instance allocation failed");
                AllocationOutcome::Failure {
                    cause: err.to_string(),
                }
            },
        }
    }

    fn try_allocate(&self, root: &Path) -> Result<InstanceDirectory> {
        let id = self.next_id(root)?;
        let name = self.paths.instance_name(id);
        let path = root.join(&name);

        self.fs
            .create_dir_all(&path)
            .map_err(|e| Error::OperationFailed {
                operation: "create_instance_dir".to_string(),
                cause: format!("{}: {e}", path.display()),
            })?;

        Ok(InstanceDirectory { id, name, path })
    }
}
