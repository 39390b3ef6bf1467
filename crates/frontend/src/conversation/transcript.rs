//! Conversation - transcript renderer

use super::model::should_show_pending;
use crate::shared::icons::icon;
use crate::shared::loading::LoadingSpinnerChat;
use contracts::chat::{ChatRole, Message};
use leptos::prelude::*;

/// Ordered transcript of user/assistant messages.
///
/// User messages align right, assistant messages align left, each with
/// its own icon. A pending spinner appears beneath the final message
/// only while the assistant's reply is awaited. Always scrolls to the
/// newest entry after a change.
#[component]
#[allow(non_snake_case)]
pub fn RenderConversations(#[prop(into)] messages: Signal<Vec<Message>>) -> impl IntoView {
    let last_element_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move |_| {
        let _ = messages.get();
        if let Some(last) = last_element_ref.get_untracked() {
            request_animation_frame(move || {
                last.scroll_into_view();
            });
        }
    });

    view! {
        <div style="box-sizing: border-box; display: flex; height: 100%; flex-direction: column; justify-content: flex-start; font-size: 14px; color: #2b3175;">
            <For
                each={move || messages.get().into_iter().enumerate().collect::<Vec<_>>()}
                key=|(index, message)| format!("{}-{}", message.id, index)
                children=move |(_, message): (usize, Message)| {
                    let is_user = message.role == ChatRole::User;
                    view! {
                        <div style=if is_user {
                            "display: flex; flex-direction: row-reverse; padding-bottom: 16px;"
                        } else {
                            "display: flex; flex-direction: row; padding-bottom: 16px;"
                        }>
                            <div style=if is_user {
                                "margin: 16px 8px 0; padding: 0 8px; display: flex; align-items: center; border-radius: 0 6px 6px 0; background: #e5e7eb; color: teal;"
                            } else {
                                "margin: 16px 8px 0; padding: 0 8px; display: flex; align-items: center; border-radius: 6px 0 0 6px; background: #e5e7eb; color: blue;"
                            }>
                                {icon(if is_user { "user" } else { "bot" })}
                            </div>
                            <div style=if is_user {
                                "margin-top: 16px; width: fit-content; padding: 8px 16px 8px 32px; border-radius: 6px 0 0 6px; background: #a7f3d0; font-weight: 700; white-space: pre-wrap;"
                            } else {
                                "margin-top: 16px; width: fit-content; padding: 8px 32px 8px 16px; border-radius: 0 6px 6px 0; background: #bfdbfe; font-weight: 700; white-space: pre-wrap;"
                            }>
                                {message.content.clone()}
                            </div>
                        </div>
                    }
                }
            />

            {move || {
                should_show_pending(&messages.get()).then(|| {
                    view! {
                        <div style="display: flex; justify-content: center; padding-bottom: 16px; border-bottom: 2px solid #e5e7eb;">
                            <div style="margin: 4px 0 0 10px;">
                                <LoadingSpinnerChat />
                            </div>
                        </div>
                    }
                })
            }}

            {move || {
                messages.get().is_empty().then(|| {
                    view! {
                        <div style="display: flex; height: 100%; align-items: center; justify-content: center;">
                            <div style="display: flex; width: 100%; flex-direction: column; align-items: center; justify-content: center;">
                                <div>{icon("chat")}</div>
                                <div style="margin-bottom: 8px; width: 75%; text-align: center; font-size: 18px; font-weight: 700;">
                                    "Ask the bot questions about the documents you've selected."
                                </div>
                            </div>
                        </div>
                    }
                })
            }}

            <div node_ref=last_element_ref></div>
        </div>
    }
}
