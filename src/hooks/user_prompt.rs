//! User prompt submit hook handler.

use super::task_command::{TASK_COMMAND, compose_context, match_command};
use super::{HookHandler, HookResponse, parse_envelope};
use crate::Result;
use crate::models::AllocationOutcome;
use crate::services::{FsWorkspace, InstanceAllocator, PathManager, WorkspaceFs};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::instrument;

/// Handles `UserPromptSubmit` hook events.
///
/// Prompts starting with `/task_medium` get a fresh
/// `claude-code-storage/claude-instance-<N>/` directory under the session cwd,
/// and the directory location is injected into the conversation. Any other
/// prompt passes through without output.
#[derive(Debug, Clone)]
pub struct UserPromptHandler<W = FsWorkspace> {
    command: String,
    allocator: InstanceAllocator<W>,
}

impl Default for UserPromptHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl UserPromptHandler {
    /// Creates a handler with the default command and filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self::with_allocator(InstanceAllocator::new())
    }
}

impl<W: WorkspaceFs> UserPromptHandler<W> {
    /// Creates a handler around an existing allocator.
    #[must_use]
    pub fn with_allocator(allocator: InstanceAllocator<W>) -> Self {
        Self {
            command: TASK_COMMAND.to_string(),
            allocator,
        }
    }

    /// Sets the command token.
    #[must_use]
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    /// Sets the workspace naming scheme.
    #[must_use]
    pub fn with_paths(mut self, paths: PathManager) -> Self {
        self.allocator = self.allocator.with_paths(paths);
        self
    }

    /// Returns the command token.
    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Gates on the command token and allocates an instance directory.
    ///
    /// Returns [`AllocationOutcome::NoMatch`] without touching the filesystem
    /// when the prompt does not start with the command.
    pub fn prepare(&self, prompt: &str, cwd: &Path) -> AllocationOutcome {
        if match_command(prompt, &self.command).is_none() {
            return AllocationOutcome::NoMatch;
        }
        self.allocate(cwd)
    }

    fn allocate(&self, cwd: &Path) -> AllocationOutcome {
        let root = self.allocator.paths().workspace_root(cwd);
        self.allocator.allocate(&root)
    }
}

impl<W: WorkspaceFs> HookHandler for UserPromptHandler<W> {
    fn event_type(&self) -> &'static str {
        "UserPromptSubmit"
    }

    #[instrument(skip(self, input), fields(hook = "UserPromptSubmit"))]
    fn handle(&self, input: &str) -> Result<HookResponse> {
        // Unparseable input is not ours to act on.
        let Some(envelope) = parse_envelope(input) else {
            return Ok(HookResponse::silent());
        };

        let prompt = envelope
            .get("prompt")
            .and_then(|v| v.as_str())
            .unwrap_or("");

        let Some(command) = match_command(prompt, &self.command) else {
            tracing::debug!("prompt does not start with the task command");
            return Ok(HookResponse::silent());
        };

        let cwd = resolve_cwd(&envelope);

        let response = match self.allocate(&cwd) {
            AllocationOutcome::Success(instance) => {
                tracing::info!(id = instance.id, path = %instance.path.display(), "prepared task instance");
                HookResponse::output(compose_context(
                    &instance,
                    self.allocator.paths(),
                    &command.remainder,
                ))
            },
            AllocationOutcome::Failure { cause } => HookResponse::warning(format!(
                "Warning: Failed to create instance directory: {cause}"
            )),
            AllocationOutcome::NoMatch => HookResponse::silent(),
        };
        Ok(response)
    }
}

/// Session directory from the envelope, or the process working directory
/// when `cwd` is missing, blank, or not a string.
fn resolve_cwd(envelope: &Value) -> PathBuf {
    envelope
        .get("cwd")
        .and_then(Value::as_str)
        .filter(|cwd| !cwd.trim().is_empty())
        .map_or_else(current_dir, PathBuf::from)
}

fn current_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "Failed to resolve current dir; using '.'");
        PathBuf::from(".")
    })
}
