//! Command handlers for the binary.
//!
//! - `hook.rs`: Claude Code hook event handlers

mod hook;

use clap::Subcommand;

pub use hook::cmd_hook;

/// Hook events.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum HookEvent {
    /// Stop hook: suggest a memory update after skill use.
    Stop,
    /// User prompt submit hook: prepare a task instance directory.
    UserPromptSubmit,
}

impl HookEvent {
    /// Returns the hook event as a lowercase hyphenated string.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stop => "stop",
            Self::UserPromptSubmit => "user-prompt-submit",
        }
    }
}
