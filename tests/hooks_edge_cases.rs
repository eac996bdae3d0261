//! Hook edge case tests.
//!
//! Tests hook handlers with edge cases, focusing on:
//! - Malformed input handling
//! - Empty/missing fields
//! - Hook response format compliance
//! - Filesystem outcomes for task preparation
//!
//! These tests drive the handlers directly with JSON envelopes, the same text
//! the binary reads from stdin.

// Integration tests use expect/unwrap for simplicity - panics are acceptable in tests
#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::panic,
    clippy::missing_const_for_fn
)]

use serde_json::{Value, json};

// ============================================================================
// Stop Handler Edge Cases
// ============================================================================

mod stop {
    use super::*;
    use sessionhooks::hooks::{HookHandler, StopHandler};

    fn respond(input: &str) -> Value {
        let response = StopHandler::default().handle(input).unwrap();
        assert!(response.stderr().is_none());
        serde_json::from_str(response.stdout().unwrap()).unwrap()
    }

    #[test]
    fn test_handle_empty_input() {
        assert_eq!(respond(""), json!({"continue": true}));
    }

    #[test]
    fn test_handle_invalid_json() {
        assert_eq!(respond("not valid json {{{{"), json!({"continue": true}));
    }

    #[test]
    fn test_handle_json_array_instead_of_object() {
        assert_eq!(respond("[1, 2, 3]"), json!({"continue": true}));
    }

    #[test]
    fn test_handle_transcript_not_an_array() {
        let input = json!({"transcript": "hypothesis"}).to_string();
        assert_eq!(respond(&input), json!({"continue": true}));
    }

    #[test]
    fn test_handle_empty_transcript() {
        let input = json!({"transcript": []}).to_string();
        assert_eq!(respond(&input), json!({"continue": true}));
    }

    #[test]
    fn test_handle_entries_missing_fields() {
        let input = json!({"transcript": [{}, {"role": "user"}, {"content": 42}, null]}).to_string();
        assert_eq!(respond(&input), json!({"continue": true}));
    }

    #[test]
    fn test_handle_non_string_content() {
        let input = json!({"transcript": [
            {"role": "assistant", "content": [{"type": "text", "text": "the call chain"}]}
        ]})
        .to_string();

        let response = respond(&input);
        assert!(
            response["message"]
                .as_str()
                .unwrap()
                .contains("Evolving skills used: trace-flow\n")
        );
    }

    #[test]
    fn test_handle_triggers_in_extra_entry_fields() {
        let input = json!({"transcript": [
            {"role": "assistant", "content": "", "tool_output": "walked the call chain"},
            {"type": "text", "text": "my hypothesis"}
        ]})
        .to_string();

        let response = respond(&input);
        assert!(
            response["message"]
                .as_str()
                .unwrap()
                .contains("Evolving skills used: investigate, trace-flow\n")
        );
    }

    #[test]
    fn test_handle_unrecognized_role_text_searched() {
        let input = json!({"transcript": [{"role": "planning-agent", "content": "done"}]})
            .to_string();

        let response = respond(&input);
        assert!(
            response["message"]
                .as_str()
                .unwrap()
                .contains("Evolving skills used: plan-implementation\n")
        );
    }

    #[test]
    fn test_handle_mixed_case_trigger() {
        let input = json!({"transcript": [{"role": "user", "content": "My HYPOTHESIS is wrong"}]})
            .to_string();
        let response = respond(&input);
        assert!(
            response["message"]
                .as_str()
                .unwrap()
                .contains("Evolving skills used: investigate\n")
        );
    }

    #[test]
    fn test_advisory_response_format() {
        let input = json!({"transcript": [
            {"role": "user", "content": "collect evidence"},
            {"role": "assistant", "content": "here is the implementation plan"}
        ]})
        .to_string();

        let response = respond(&input);
        let object = response.as_object().unwrap();
        assert_eq!(object.len(), 4);
        assert_eq!(response["continue"], json!(true));
        assert_eq!(response["stopReason"], json!("end_turn"));
        assert_eq!(response["decision"], json!("block"));

        let message = response["message"].as_str().unwrap();
        assert!(message.starts_with("\n💡 **Memory Update Opportunity**\n\n"));
        assert!(message.contains("Evolving skills used: investigate, plan-implementation\n"));
        assert!(message.ends_with("To skip: just continue with your next request.\n"));
    }

    #[test]
    fn test_extra_envelope_fields_ignored() {
        let input = json!({
            "session_id": "abc",
            "hook_event_name": "Stop",
            "stop_hook_active": true,
            "transcript": [{"role": "user", "content": "thanks"}]
        })
        .to_string();
        assert_eq!(respond(&input), json!({"continue": true}));
    }
}

// ============================================================================
// User Prompt Handler Edge Cases
// ============================================================================

mod user_prompt {
    use super::*;
    use sessionhooks::hooks::{HookHandler, UserPromptHandler};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn envelope(prompt: &str, cwd: &Path) -> String {
        json!({"prompt": prompt, "cwd": cwd.to_string_lossy()}).to_string()
    }

    #[test]
    fn test_handle_empty_input() {
        let response = UserPromptHandler::default().handle("").unwrap();
        assert!(response.is_silent());
    }

    #[test]
    fn test_handle_invalid_json() {
        let response = UserPromptHandler::default().handle("{not json").unwrap();
        assert!(response.is_silent());
    }

    #[test]
    fn test_handle_missing_prompt() {
        let tmp = TempDir::new().unwrap();
        let input = json!({"cwd": tmp.path().to_string_lossy()}).to_string();

        let response = UserPromptHandler::default().handle(&input).unwrap();

        assert!(response.is_silent());
        assert!(!tmp.path().join("claude-code-storage").exists());
    }

    #[test]
    fn test_handle_non_string_prompt() {
        let tmp = TempDir::new().unwrap();
        let input = json!({"prompt": ["/task_medium"], "cwd": tmp.path().to_string_lossy()})
            .to_string();

        let response = UserPromptHandler::default().handle(&input).unwrap();

        assert!(response.is_silent());
        assert!(!tmp.path().join("claude-code-storage").exists());
    }

    #[test]
    fn test_leading_whitespace_matches() {
        let tmp = TempDir::new().unwrap();
        let response = UserPromptHandler::default()
            .handle(&envelope("  /task_medium fix the login bug", tmp.path()))
            .unwrap();

        let context = response.stdout().unwrap();
        assert_eq!(
            context,
            "Directory claude-instance-1 has been automatically created for this task session. \
             The subagents must create the INVESTIGATION_REPORT.md, FLOW_REPORT.md and PLAN.md \
             files inside claude-code-storage/claude-instance-1/. \
             Problem to solve: fix the login bug"
        );
    }

    #[test]
    fn test_bare_command_has_no_problem_clause() {
        let tmp = TempDir::new().unwrap();
        let response = UserPromptHandler::default()
            .handle(&envelope("/task_medium", tmp.path()))
            .unwrap();

        let context = response.stdout().unwrap();
        assert!(context.ends_with("inside claude-code-storage/claude-instance-1/."));
        assert!(!context.contains("Problem to solve"));
    }

    #[test]
    fn test_command_is_case_sensitive() {
        let tmp = TempDir::new().unwrap();
        let response = UserPromptHandler::default()
            .handle(&envelope("/TASK_MEDIUM fix it", tmp.path()))
            .unwrap();

        assert!(response.is_silent());
    }

    #[test]
    fn test_next_id_follows_existing_instances() {
        let tmp = TempDir::new().unwrap();
        let storage = tmp.path().join("claude-code-storage");
        for name in ["claude-instance-1", "claude-instance-2", "claude-instance-5", "notes"] {
            fs::create_dir_all(storage.join(name)).unwrap();
        }
        fs::write(storage.join("claude-instance-9"), "a file, not a directory").unwrap();

        let response = UserPromptHandler::default()
            .handle(&envelope("/task_medium next", tmp.path()))
            .unwrap();

        assert!(response.stdout().unwrap().starts_with("Directory claude-instance-6 "));
        assert!(storage.join("claude-instance-6").is_dir());
        for id in [1, 2, 5] {
            assert!(storage.join(format!("claude-instance-{id}")).is_dir());
        }
    }

    #[test]
    fn test_sequential_prompts_never_reuse_ids() {
        let tmp = TempDir::new().unwrap();
        let handler = UserPromptHandler::default();

        for expected in 1..=3 {
            let response = handler
                .handle(&envelope("/task_medium again", tmp.path()))
                .unwrap();
            assert!(
                response
                    .stdout()
                    .unwrap()
                    .starts_with(&format!("Directory claude-instance-{expected} "))
            );
        }
    }

    #[test]
    fn test_storage_path_is_a_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("claude-code-storage"), "blocking file").unwrap();

        let response = UserPromptHandler::default()
            .handle(&envelope("/task_medium fix", tmp.path()))
            .unwrap();

        assert!(response.stdout().is_none());
        let warning = response.stderr().unwrap();
        assert!(warning.starts_with("Warning: Failed to create instance directory: "));
        assert!(!warning.contains('\n'));
    }
}
