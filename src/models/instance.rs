//! Task instance directories and allocation outcomes.

use std::path::PathBuf;

/// A numbered per-session workspace directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceDirectory {
    /// Numeric suffix, unique within the workspace root.
    pub id: u64,
    /// Directory name, e.g. `claude-instance-3`.
    pub name: String,
    /// Absolute or cwd-relative path of the created directory.
    pub path: PathBuf,
}

/// Result of a task preparation request.
///
/// `NoMatch` and `Failure` both leave stdout empty but stay separate so the
/// caller can tell a skipped prompt from a broken filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllocationOutcome {
    /// The prompt did not start with the command token. Nothing was touched.
    NoMatch,
    /// A new instance directory was created.
    Success(InstanceDirectory),
    /// Allocation was attempted and failed.
    Failure {
        /// Human-readable cause, including the offending path.
        cause: String,
    },
}

impl AllocationOutcome {
    /// Returns the created directory on success.
    #[must_use]
    pub const fn instance(&self) -> Option<&InstanceDirectory> {
        match self {
            Self::Success(dir) => Some(dir),
            Self::NoMatch | Self::Failure { .. } => None,
        }
    }

    /// Returns true if a directory was created.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}
