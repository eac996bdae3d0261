//! Stop hook handler.

use super::skill_usage::{KeywordTaxonomy, classify, compose_advisory};
use super::{HookHandler, HookResponse, parse_envelope};
use crate::models::parse_transcript;
use crate::{Error, Result};
use serde::Serialize;
use tracing::instrument;

/// Handles Stop hook events.
///
/// Suggests saving learnings to memory when the finished turn shows
/// investigation, flow tracing, or implementation planning.
#[derive(Debug, Clone, Default)]
pub struct StopHandler {
    taxonomy: KeywordTaxonomy,
}

/// Stop hook response body.
#[derive(Debug, Serialize)]
struct StopResponse {
    #[serde(rename = "continue")]
    continue_: bool,
    #[serde(rename = "stopReason", skip_serializing_if = "Option::is_none")]
    stop_reason: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    decision: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl StopResponse {
    const fn pass() -> Self {
        Self {
            continue_: true,
            stop_reason: None,
            decision: None,
            message: None,
        }
    }

    fn advise(message: String) -> Self {
        Self {
            continue_: true,
            stop_reason: Some("end_turn"),
            decision: Some("block"),
            message: Some(message),
        }
    }
}

impl StopHandler {
    /// Creates a handler using the built-in taxonomy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the keyword taxonomy.
    #[must_use]
    pub fn with_taxonomy(mut self, taxonomy: KeywordTaxonomy) -> Self {
        self.taxonomy = taxonomy;
        self
    }

    /// Returns the keyword taxonomy.
    #[must_use]
    pub const fn taxonomy(&self) -> &KeywordTaxonomy {
        &self.taxonomy
    }
}

impl HookHandler for StopHandler {
    fn event_type(&self) -> &'static str {
        "Stop"
    }

    #[instrument(skip(self, input), fields(hook = "Stop"))]
    fn handle(&self, input: &str) -> Result<HookResponse> {
        let envelope = parse_envelope(input).unwrap_or_default();
        let transcript = parse_transcript(envelope.get("transcript"));
        let skills = classify(&transcript, &self.taxonomy);

        tracing::debug!(
            messages = transcript.len(),
            skills = %skills,
            "classified transcript"
        );

        let response = compose_advisory(&skills).map_or_else(StopResponse::pass, StopResponse::advise);

        serde_json::to_string(&response)
            .map(HookResponse::output)
            .map_err(|e| Error::OperationFailed {
                operation: "serialize_response".to_string(),
                cause: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SkillLabel;
    use serde_json::{Value, json};

    fn respond(handler: &StopHandler, input: &str) -> Value {
        let response = handler.handle(input).unwrap();
        serde_json::from_str(response.stdout().unwrap()).unwrap()
    }

    #[test]
    fn test_handler_creation() {
        let handler = StopHandler::default();
        assert_eq!(handler.event_type(), "Stop");
    }

    #[test]
    fn test_no_skills_passes_through() {
        let input = json!({"transcript": [{"role": "user", "content": "hi"}]}).to_string();
        assert_eq!(respond(&StopHandler::new(), &input), json!({"continue": true}));
    }

    #[test]
    fn test_skills_produce_advisory() {
        let input = json!({"transcript": [
            {"role": "user", "content": "trace the call chain"},
            {"role": "assistant", "content": "My hypothesis is a stale token"}
        ]})
        .to_string();

        let response = respond(&StopHandler::new(), &input);

        assert_eq!(response["continue"], json!(true));
        assert_eq!(response["stopReason"], json!("end_turn"));
        assert_eq!(response["decision"], json!("block"));
        let message = response["message"].as_str().unwrap();
        assert!(message.contains("Evolving skills used: investigate, trace-flow\n"));
    }

    #[test]
    fn test_key_order_matches_protocol() {
        let input = json!({"transcript": [{"role": "assistant", "content": "evidence"}]}).to_string();
        let response = StopHandler::new().handle(&input).unwrap();
        let text = response.stdout().unwrap();
        let positions: Vec<usize> = ["\"continue\"", "\"stopReason\"", "\"decision\"", "\"message\""]
            .iter()
            .map(|key| text.find(key).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_invalid_json_passes_through() {
        assert_eq!(respond(&StopHandler::new(), "not json"), json!({"continue": true}));
    }

    #[test]
    fn test_missing_transcript_passes_through() {
        assert_eq!(
            respond(&StopHandler::new(), r#"{"session_id": "abc"}"#),
            json!({"continue": true})
        );
    }

    #[test]
    fn test_custom_taxonomy() {
        let taxonomy = KeywordTaxonomy::builtin()
            .clone()
            .with_triggers(SkillLabel::PlanImplementation, &["roadmap"])
            .unwrap();
        let handler = StopHandler::new().with_taxonomy(taxonomy);

        let input = json!({"transcript": [{"role": "assistant", "content": "Roadmap ready"}]})
            .to_string();
        let response = respond(&handler, &input);

        assert!(
            response["message"]
                .as_str()
                .unwrap()
                .contains("Evolving skills used: plan-implementation")
        );
    }
}
