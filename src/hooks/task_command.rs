//! Task command detection and context text.

use crate::models::InstanceDirectory;
use crate::services::{PathManager, REPORT_FILES};

/// Command token that triggers task preparation.
pub const TASK_COMMAND: &str = "/task_medium";

/// A prompt that starts with the command token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandMatch {
    /// Text after the token, trimmed. Empty if the token stood alone.
    pub remainder: String,
}

/// Checks whether `prompt`, once trimmed, starts with `token`.
///
/// The token is matched as a plain prefix, so `/task_mediumX` also matches
/// with remainder `X`. A token anywhere but the start is ignored.
///
/// # Examples
///
/// ```rust
/// use sessionhooks::hooks::match_command;
///
/// let matched = match_command("  /task_medium fix the login bug", "/task_medium").unwrap();
/// assert_eq!(matched.remainder, "fix the login bug");
/// assert!(match_command("please /task_medium now", "/task_medium").is_none());
/// ```
#[must_use]
pub fn match_command(prompt: &str, token: &str) -> Option<CommandMatch> {
    if token.is_empty() {
        return None;
    }
    prompt
        .trim()
        .strip_prefix(token)
        .map(|rest| CommandMatch {
            remainder: rest.trim().to_string(),
        })
}

/// Builds the context injected into the conversation after allocation.
#[must_use]
pub fn compose_context(instance: &InstanceDirectory, paths: &PathManager, problem: &str) -> String {
    let [investigation, flow, plan] = REPORT_FILES;
    let mut context = format!(
        "Directory {} has been automatically created for this task session. \
         The subagents must create the {investigation}, {flow} and {plan} files inside {}.",
        instance.name,
        paths.display_instance_dir(instance.id),
    );
    if !problem.is_empty() {
        context.push_str(" Problem to solve: ");
        context.push_str(problem);
    }
    context
}
