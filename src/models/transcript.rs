//! Conversation transcript messages.

use serde::Serialize;
use serde_json::{Map, Value};

/// Author of a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The human user.
    User,
    /// The assistant.
    Assistant,
    /// Missing or unrecognized role.
    #[default]
    Unknown,
}

impl Role {
    /// Parses a role string. Anything other than `user` or `assistant` is `Unknown`.
    ///
    /// The raw text of an unrecognized role is kept in [`Message::extra`].
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "user" => Self::User,
            "assistant" => Self::Assistant,
            _ => Self::Unknown,
        }
    }

    /// Returns the role as a string; `Unknown` is empty.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::Unknown => "",
        }
    }
}

/// A single transcript entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Message {
    /// Who wrote the message.
    pub role: Role,
    /// Message text.
    pub content: String,
    /// JSON text of any other fields of the entry, kept for keyword search.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub extra: String,
}

impl Message {
    /// Creates a message.
    #[must_use]
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            extra: String::new(),
        }
    }

    /// Creates a user message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Creates an assistant message.
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// Builds a message from an arbitrary JSON transcript entry.
    ///
    /// Never fails. Missing fields become empty, a non-string `content`
    /// (such as a list of content blocks) keeps its JSON text, and a bare
    /// non-object entry is treated as content. Every other field, including
    /// an unrecognized `role`, goes into [`Message::extra`] so that nothing
    /// in the entry escapes keyword search.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => {
                let role = map
                    .get("role")
                    .and_then(Value::as_str)
                    .map_or(Role::Unknown, Role::parse);
                let content = map.get("content").map_or_else(String::new, value_text);

                let rest: Map<String, Value> = map
                    .iter()
                    .filter(|(key, _)| match key.as_str() {
                        "content" => false,
                        "role" => role == Role::Unknown,
                        _ => true,
                    })
                    .map(|(key, value)| (key.clone(), value.clone()))
                    .collect();
                let extra = if rest.is_empty() {
                    String::new()
                } else {
                    Value::Object(rest).to_string()
                };

                Self {
                    role,
                    content,
                    extra,
                }
            },
            other => Self::new(Role::Unknown, value_text(other)),
        }
    }

    /// Lowercased text used for keyword search.
    #[must_use]
    pub fn search_text(&self) -> String {
        format!("{} {} {}", self.role.as_str(), self.content, self.extra).to_lowercase()
    }
}

/// Parses the `transcript` field of a hook envelope.
///
/// Anything that is not a JSON array yields an empty transcript.
#[must_use]
pub fn parse_transcript(value: Option<&Value>) -> Vec<Message> {
    value
        .and_then(Value::as_array)
        .map(|entries| entries.iter().map(Message::from_value).collect())
        .unwrap_or_default()
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
