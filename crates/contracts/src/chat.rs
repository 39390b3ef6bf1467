//! Chat message types for the conversation endpoint.

use serde::{Deserialize, Serialize};

/// Role of a message in the transcript
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "user" => Ok(ChatRole::User),
            "assistant" => Ok(ChatRole::Assistant),
            _ => Err(format!("Unknown chat role: {}", s)),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

/// A single entry in the conversation history.
///
/// Ids are assigned by whichever side creates the message; the backend's
/// updated history is authoritative and replaces the local list wholesale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
}

impl Message {
    pub fn user(id: String, content: String) -> Self {
        Self {
            id,
            role: ChatRole::User,
            content,
        }
    }
}

/// POST body for the chat endpoint: the full history including the
/// just-appended user message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub history: Vec<Message>,
}

/// Response of the chat endpoint.
///
/// Both fields are optional so that a malformed body still deserializes;
/// the client only acts when both are present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub response: Option<Message>,
    #[serde(default)]
    pub updated_history: Option<Vec<Message>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        assert_eq!(ChatRole::from_str("user"), Ok(ChatRole::User));
        assert_eq!(ChatRole::from_str("assistant"), Ok(ChatRole::Assistant));
        assert!(ChatRole::from_str("system").is_err());
        assert_eq!(ChatRole::User.as_str(), "user");
        assert_eq!(ChatRole::Assistant.as_str(), "assistant");
    }

    #[test]
    fn test_message_wire_shape() {
        let msg = Message::user("1".to_string(), "Hello".to_string());
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "1", "role": "user", "content": "Hello"})
        );
    }

    #[test]
    fn test_request_wire_shape() {
        let req = ChatRequest {
            history: vec![Message::user("1".to_string(), "Hello".to_string())],
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(
            json,
            r#"{"history":[{"id":"1","role":"user","content":"Hello"}]}"#
        );
    }

    #[test]
    fn test_response_with_updated_history() {
        let body = serde_json::json!({
            "response": {"id": "2", "role": "assistant", "content": "Hi!"},
            "updated_history": [
                {"id": "1", "role": "user", "content": "Hello"},
                {"id": "2", "role": "assistant", "content": "Hi!"}
            ]
        });
        let resp: ChatResponse = serde_json::from_value(body).unwrap();
        assert!(resp.response.is_some());
        let history = resp.updated_history.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].role, ChatRole::Assistant);
        assert_eq!(history[1].content, "Hi!");
    }

    #[test]
    fn test_response_tolerates_missing_fields() {
        let resp: ChatResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.response.is_none());
        assert!(resp.updated_history.is_none());

        let resp: ChatResponse =
            serde_json::from_str(r#"{"unexpected": true}"#).unwrap();
        assert!(resp.updated_history.is_none());
    }
}
