//! Host agent hooks.
//!
//! Implements handlers for the hook events this crate responds to.
//!
//! # Hook Responses
//!
//! | Event | stdout | stderr |
//! |-------|--------|--------|
//! | `Stop` | `{"continue": true}`, plus `stopReason`/`decision`/`message` when skills were used | never |
//! | `UserPromptSubmit` | plain-text context after a `/task_medium` prompt | warning if allocation failed |
//!
//! Example Stop response when skills were detected:
//!
//! ```json
//! {
//!   "continue": true,
//!   "stopReason": "end_turn",
//!   "decision": "block",
//!   "message": "\n💡 **Memory Update Opportunity**\n\nEvolving skills used: investigate\n..."
//! }
//! ```
//!
//! Handlers never fail on bad input: malformed JSON and missing fields fall
//! back to defaults, and the process always exits 0.

mod skill_patterns;
mod skill_usage;
mod stop;
mod task_command;
mod user_prompt;

pub use skill_patterns::{
    INVESTIGATE_TRIGGERS, PLAN_IMPLEMENTATION_TRIGGERS, TRACE_FLOW_TRIGGERS, builtin_triggers,
};
pub use skill_usage::{KeywordTaxonomy, classify, compose_advisory};
pub use stop::StopHandler;
pub use task_command::{CommandMatch, TASK_COMMAND, compose_context, match_command};
pub use user_prompt::UserPromptHandler;

use crate::Result;
use serde_json::Value;

/// Trait for hook handlers.
pub trait HookHandler: Send + Sync {
    /// The hook event type this handler processes.
    fn event_type(&self) -> &'static str;

    /// Handles the hook event.
    ///
    /// # Errors
    ///
    /// Returns an error if the response cannot be produced. Input problems
    /// are not errors.
    fn handle(&self, input: &str) -> Result<HookResponse>;
}

/// What a hook writes back to the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HookResponse {
    stdout: Option<String>,
    stderr: Option<String>,
}

impl HookResponse {
    /// A response that writes nothing.
    #[must_use]
    pub const fn silent() -> Self {
        Self {
            stdout: None,
            stderr: None,
        }
    }

    /// A response written to stdout.
    #[must_use]
    pub fn output(text: impl Into<String>) -> Self {
        Self {
            stdout: Some(text.into()),
            stderr: None,
        }
    }

    /// A diagnostic written to stderr, with stdout left empty.
    #[must_use]
    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            stdout: None,
            stderr: Some(text.into()),
        }
    }

    /// Text for stdout, if any.
    #[must_use]
    pub fn stdout(&self) -> Option<&str> {
        self.stdout.as_deref()
    }

    /// Text for stderr, if any.
    #[must_use]
    pub fn stderr(&self) -> Option<&str> {
        self.stderr.as_deref()
    }

    /// True if neither stream is written.
    #[must_use]
    pub const fn is_silent(&self) -> bool {
        self.stdout.is_none() && self.stderr.is_none()
    }
}

/// Parses a hook envelope. Blank input is treated as `{}`.
///
/// Returns `None` when the input is not valid JSON.
pub(crate) fn parse_envelope(input: &str) -> Option<Value> {
    if input.trim().is_empty() {
        return Some(Value::Object(serde_json::Map::new()));
    }
    match serde_json::from_str::<Value>(input) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!(error = %e, "hook input is not valid JSON");
            None
        },
    }
}
