//! Conversation - Model (API functions and pure helpers)

use crate::shared::api_utils::api_url;
use contracts::chat::{ChatRequest, ChatResponse, ChatRole, Message};

/// POST the full history to the chat endpoint and return the parsed body.
pub async fn send_chat(history: &[Message]) -> Result<ChatResponse, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);

    let url = api_url("/api/chat/v2");
    let dto = ChatRequest {
        history: history.to_vec(),
    };
    let body_json = serde_json::to_string(&dto).map_err(|e| format!("{e}"))?;
    let body = wasm_bindgen::JsValue::from_str(&body_json);
    opts.set_body(&body);

    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;
    let data: ChatResponse = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;

    Ok(data)
}

/// Local id for the next message: list length plus one, stringified.
/// Not collision-safe once the server's history replaces the list; kept
/// for compatibility with the backend contract.
pub fn next_message_id(len: usize) -> String {
    (len + 1).to_string()
}

/// Append a locally constructed user message to the history.
pub fn append_user_message(messages: &mut Vec<Message>, content: String) {
    let id = next_message_id(messages.len());
    messages.push(Message::user(id, content));
}

/// The assistant-pending indicator is shown iff the last message exists
/// and was sent by the user.
pub fn should_show_pending(messages: &[Message]) -> bool {
    matches!(messages.last(), Some(message) if message.role == ChatRole::User)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assistant(id: &str, content: &str) -> Message {
        Message {
            id: id.to_string(),
            role: ChatRole::Assistant,
            content: content.to_string(),
        }
    }

    #[test]
    fn test_next_message_id() {
        assert_eq!(next_message_id(0), "1");
        assert_eq!(next_message_id(1), "2");
        assert_eq!(next_message_id(9), "10");
    }

    #[test]
    fn test_append_user_message_from_empty() {
        let mut messages = Vec::new();
        append_user_message(&mut messages, "Hello".to_string());
        assert_eq!(
            messages,
            vec![Message {
                id: "1".to_string(),
                role: ChatRole::User,
                content: "Hello".to_string(),
            }]
        );
    }

    #[test]
    fn test_pending_shown_only_after_user_message() {
        assert!(!should_show_pending(&[]));

        let mut messages = Vec::new();
        append_user_message(&mut messages, "Hello".to_string());
        assert!(should_show_pending(&messages));

        messages.push(assistant("2", "Hi!"));
        assert!(!should_show_pending(&messages));
    }

    #[test]
    fn test_server_replacement_scenario() {
        // Submit "Hello" on an empty transcript, then replace with the
        // server's canonical two-message history.
        let mut messages = Vec::new();
        append_user_message(&mut messages, "Hello".to_string());
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].id, "1");

        let updated = vec![messages[0].clone(), assistant("2", "Hi!")];
        messages = updated;
        assert_eq!(messages.len(), 2);
        assert!(!should_show_pending(&messages));
    }
}
