//! # Sessionhooks
//!
//! Lifecycle hooks for AI coding assistant sessions.
//!
//! Two independent filters are invoked by the host agent, one per process run:
//!
//! - **Stop**: scans the finished transcript for signs of investigation,
//!   flow tracing, or implementation planning and suggests saving what was
//!   learned to memory.
//! - **User prompt submit**: when the prompt starts with `/task_medium`,
//!   allocates a fresh `claude-code-storage/claude-instance-<N>/` directory
//!   and injects its location into the conversation.
//!
//! ## Example
//!
//! ```rust
//! use sessionhooks::hooks::{KeywordTaxonomy, classify};
//! use sessionhooks::models::{Message, SkillLabel};
//!
//! let transcript = vec![Message::assistant("My hypothesis is a stale cache.")];
//! let skills = classify(&transcript, KeywordTaxonomy::builtin());
//! assert!(skills.contains(SkillLabel::Investigate));
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error as ThisError;

pub mod cli;
pub mod config;
pub mod hooks;
pub mod models;
pub mod observability;
pub mod services;

pub use config::HooksConfig;
pub use hooks::{HookHandler, HookResponse, KeywordTaxonomy, StopHandler, UserPromptHandler};
pub use models::{AllocationOutcome, InstanceDirectory, Message, Role, SkillLabel, SkillSet};
pub use services::{FsWorkspace, InstanceAllocator, PathManager, WorkspaceFs};

/// Error type for sessionhooks operations.
///
/// Neither hook lets these escape to the host: the command layer turns them
/// into defaults or warnings and the process still exits with status 0.
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `InvalidInput` | Empty trigger list in a taxonomy, unreadable config values |
/// | `OperationFailed` | I/O errors, serialization failures, logging init failures |
#[derive(Debug, ThisError)]
pub enum Error {
    /// Invalid input was provided.
    ///
    /// Raised when:
    /// - A skill label is given an empty trigger list
    /// - A config file names an unknown skill label
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation failed.
    ///
    /// Raised when:
    /// - Reading stdin or a config file fails
    /// - A hook response cannot be serialized
    /// - The log subscriber cannot be installed
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },
}

/// Result type alias for sessionhooks operations.
pub type Result<T> = std::result::Result<T, Error>;
