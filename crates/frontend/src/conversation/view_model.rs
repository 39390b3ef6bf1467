//! Conversation - View Model

use super::model::{append_user_message, send_chat};
use contracts::chat::Message;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ConversationVm {
    pub messages: RwSignal<Vec<Message>>,
    pub draft: RwSignal<String>,
    pub is_pending: RwSignal<bool>,
}

impl ConversationVm {
    pub fn new() -> Self {
        Self {
            messages: RwSignal::new(Vec::new()),
            draft: RwSignal::new(String::new()),
            is_pending: RwSignal::new(false),
        }
    }

    /// Submit the current draft.
    ///
    /// No-op on an empty draft. Otherwise appends the user message
    /// optimistically, POSTs the full history, and on a well-formed
    /// response replaces the whole list with the server's updated
    /// history. On any failure the optimistic append is kept and the
    /// error is only logged. The pending flag is cleared regardless.
    pub fn submit(&self) {
        let content = self.draft.get_untracked();
        if content.is_empty() {
            return;
        }

        self.is_pending.set(true);

        let mut history = self.messages.get_untracked();
        append_user_message(&mut history, content);
        self.messages.set(history.clone());
        self.draft.set(String::new());

        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match send_chat(&history).await {
                Ok(resp) => match (resp.response, resp.updated_history) {
                    (Some(_), Some(updated_history)) => {
                        vm.messages.set(updated_history);
                    }
                    _ => {
                        log::error!("Failed to send message");
                    }
                },
                Err(e) => {
                    log::error!("Failed to send message: {}", e);
                }
            }
            vm.is_pending.set(false);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_empty_draft_is_noop() {
        let vm = ConversationVm::new();
        vm.submit();
        assert!(vm.messages.get_untracked().is_empty());
        assert!(!vm.is_pending.get_untracked());
        assert_eq!(vm.draft.get_untracked(), "");
    }
}
