//! Hook command handler.
//!
//! Reads the event envelope from stdin, dispatches to the handler, and writes
//! the response. Never fails: the host only understands the exit status as
//! "hook ran".

use std::io::{self, Read};
use sessionhooks::config::HooksConfig;
use sessionhooks::hooks::{HookHandler, HookResponse, StopHandler, UserPromptHandler};
use tracing::info_span;

use super::HookEvent;

/// Body the Stop hook prints when its handler errors.
const STOP_FALLBACK: &str = r#"{"continue":true}"#;

/// Hook command.
pub fn cmd_hook(event: HookEvent, config: &HooksConfig) {
    let span = info_span!(
        "sessionhooks.hook.invoke",
        component = "hooks",
        operation = "invoke",
        hook = event.as_str()
    );
    let _span_guard = span.enter();

    let input = read_hook_input().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "Failed to read hook input; using empty envelope");
        String::new()
    });

    let response = match event {
        HookEvent::Stop => StopHandler::new()
            .with_taxonomy(config.taxonomy.clone())
            .handle(&input),
        HookEvent::UserPromptSubmit => UserPromptHandler::new()
            .with_command(config.task.command.clone())
            .with_paths(config.task.path_manager())
            .handle(&input),
    };

    let response = response.unwrap_or_else(|err| {
        tracing::error!(error = %err, "Hook handler failed");
        fallback(event)
    });

    emit(&response);
}

/// Response used when a handler returns an error.
fn fallback(event: HookEvent) -> HookResponse {
    match event {
        HookEvent::Stop => HookResponse::output(STOP_FALLBACK),
        HookEvent::UserPromptSubmit => HookResponse::silent(),
    }
}

fn emit(response: &HookResponse) {
    if let Some(stdout) = response.stdout() {
        println!("{stdout}");
    }
    if let Some(stderr) = response.stderr() {
        eprintln!("{stderr}");
    }
}

/// Reads hook input from stdin as a string.
///
/// Blank input is passed through; the handlers treat it as `{}`.
fn read_hook_input() -> io::Result<String> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    Ok(input)
}
