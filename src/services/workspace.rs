//! Filesystem access for instance allocation.

use std::fs;
use std::io;
use std::path::Path;

/// Directory operations the instance allocator depends on.
///
/// Implementations must not cache listings: every call reflects the
/// directory tree at that moment, because allocation state lives only on
/// disk.
pub trait WorkspaceFs: Send + Sync {
    /// Lists the names of the immediate child directories of `root`.
    ///
    /// Returns `Ok(None)` when `root` does not exist. Files and entries whose
    /// names are not valid UTF-8 are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` exists but cannot be read.
    fn child_dirs(&self, root: &Path) -> io::Result<Option<Vec<String>>>;

    /// Creates `path` and any missing parents. An existing directory is not
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns an error if creation fails or a non-directory is in the way.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
}

/// [`WorkspaceFs`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsWorkspace;

impl WorkspaceFs for FsWorkspace {
    fn child_dirs(&self, root: &Path) -> io::Result<Option<Vec<String>>> {
        let entries = match fs::read_dir(root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry?;
            // Follows symlinks, so a link to a directory counts.
            if !entry.path().is_dir() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        Ok(Some(names))
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }
}
