//! Landing page - View Component

use super::api;
use crate::intake::{DragPanel, FileData};
use crate::layout::global_context::{AppGlobalContext, Route};
use crate::shared::icons::icon;
use crate::shared::loading::LoadingSpinner;
use leptos::prelude::*;
use thaw::*;

/// Landing page: title, intake panel, and the "start your conversation"
/// action. Owns the accepted-file list (single source of truth for the
/// intake widget).
#[component]
#[allow(non_snake_case)]
pub fn LandingPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let files = RwSignal::new(Vec::<FileData>::new());
    let is_loading_conversation = RwSignal::new(false);

    let handle_upload_click = move |_| {
        // The loading flag doubles as a re-entry guard.
        if is_loading_conversation.get_untracked() {
            return;
        }
        is_loading_conversation.set(true);

        let raw_files: Vec<web_sys::File> =
            files.with_untracked(|list| list.iter().map(|file| file.file.clone()).collect());

        wasm_bindgen_futures::spawn_local(async move {
            match api::bulk_upload(raw_files).await {
                Ok(resp) => {
                    is_loading_conversation.set(false);
                    log::info!("Uploaded filenames: {:?}", resp.filenames);
                    ctx.navigate(Route::Chat);
                }
                Err(e) => {
                    // Transport failures are not surfaced to the user here.
                    log::error!("Upload failed: {}", e);
                    is_loading_conversation.set(false);
                }
            }
        });
    };

    view! {
        <div style="height: 100vh; width: 100vw; position: relative; display: flex; flex-direction: column; align-items: center; justify-content: center; background: linear-gradient(180deg, #f5f7ff 0%, #ffffff 100%);">
            <div style="margin-top: 20px; display: flex; flex-direction: column; align-items: center; justify-content: center; width: 75%; max-width: 1200px; min-height: 400px; border: 2px solid #e5e7eb; border-radius: 8px; background: #fff;">
                <div style="padding: 16px; text-align: center; font-size: 20px; font-weight: 700;">
                    "Start your conversation by uploading the documents you want to explore"
                </div>

                <div style="margin-top: 8px; display: flex; flex-direction: column; justify-content: flex-start; width: 92%; padding: 0 16px; overflow-y: auto;">
                    <DragPanel files=files />
                </div>

                <Flex justify=FlexJustify::Center align=FlexAlign::Center style="width: 100%; margin-top: 8px;">
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || files.get().is_empty())
                        on_click=handle_upload_click
                    >
                        {move || {
                            if is_loading_conversation.get() {
                                view! {
                                    <Flex justify=FlexJustify::Center align=FlexAlign::Center style="width: 180px; height: 22px;">
                                        <LoadingSpinner />
                                    </Flex>
                                }
                                .into_any()
                            } else {
                                view! {
                                    <Flex align=FlexAlign::Center style="gap: 8px;">
                                        "start your conversation"
                                        {icon("arrow-right")}
                                    </Flex>
                                }
                                .into_any()
                            }
                        }}
                    </Button>
                </Flex>
            </div>
        </div>
    }
}
