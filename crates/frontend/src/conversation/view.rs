//! Conversation - View Component

use super::transcript::RenderConversations;
use super::view_model::ConversationVm;
use crate::layout::global_context::{AppGlobalContext, Route};
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Chat page: back header, transcript, and the message input row.
#[component]
#[allow(non_snake_case)]
pub fn ConversationPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let vm = ConversationVm::new();

    let send_disabled = Signal::derive(move || vm.is_pending.get() || vm.draft.get().is_empty());

    view! {
        <div style="display: flex; height: 100vh; width: 100%; align-items: center; justify-content: center;">
            <div style="display: flex; height: 100vh; width: 100%; flex-direction: column; align-items: center; background: #fff; border-right: 2px solid #e5e7eb;">
                <Flex
                    justify=FlexJustify::SpaceBetween
                    align=FlexAlign::Center
                    style="height: 44px; width: 100%; border-bottom: 2px solid #e5e7eb;"
                >
                    <button
                        style="margin-left: 16px; display: flex; align-items: center; gap: 4px; border: none; background: none; cursor: pointer; font-weight: 300; color: #9ea2b0;"
                        on:click=move |_| ctx.navigate(Route::Landing)
                    >
                        {icon("back")}
                        " Back to Document Selection"
                    </button>
                </Flex>

                <div style="display: flex; max-height: calc(100vh - 114px); width: 100%; flex: 1; flex-direction: column; overflow-y: auto; padding: 0 28px;">
                    <RenderConversations messages=vm.messages />
                </div>

                <div style="position: relative; display: flex; align-items: flex-end; width: 100%; min-height: 70px; border-top: 1px solid #e5e7eb; border-bottom: 2px solid #e5e7eb;">
                    <div style="flex: 1; padding: 12px 56px 12px 20px;">
                        <Textarea
                            value=vm.draft
                            placeholder="Start typing your question..."
                            attr:style="width: 100%; min-height: 24px; resize: none; overflow: hidden;"
                            attr:autofocus=true
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    if !vm.is_pending.get_untracked() {
                                        vm.submit();
                                    }
                                }
                            }
                        />
                    </div>
                    <div style="position: absolute; right: 24px; top: 50%; transform: translateY(-50%);">
                        <Button
                            appearance=ButtonAppearance::Transparent
                            disabled=send_disabled
                            on_click=move |_| vm.submit()
                        >
                            {icon("send")}
                        </Button>
                    </div>
                </div>
            </div>
        </div>
    }
}
