//! File intake - drag-and-drop widget and controlled-component adapter

use super::model::{remove_at, validate_batch, FileData};
use crate::shared::icons::icon;
use crate::shared::notify::{NoticeIcon, Notifier};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Drag-and-drop / file-picker widget.
///
/// Holds no authoritative state: the accepted list always comes from the
/// owner through `files`, and changes are reported through `on_upload`
/// (whole validated batch) and `on_delete` (positional index).
#[component]
#[allow(non_snake_case)]
pub fn CustomDragDrop(
    #[prop(into)] files: Signal<Vec<FileData>>,
    on_upload: Callback<Vec<FileData>>,
    on_delete: Callback<usize>,
    count: usize,
    formats: Vec<String>,
) -> impl IntoView {
    let notify = use_context::<Notifier>().expect("Notifier not provided in context");
    let dragging = RwSignal::new(false);
    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    let accept_attr = formats
        .iter()
        .map(|format| format!("application/{}", format))
        .collect::<Vec<_>>()
        .join(",");
    let formats_label = format!("Only {} files", formats.join(", ").to_uppercase());

    // Both input paths (drop and manual pick) funnel through here.
    let accept_batch = Callback::new(move |batch: Vec<web_sys::File>| {
        let mime_types: Vec<String> = batch.iter().map(|file| file.type_()).collect();
        let accepted_len = files.with_untracked(|list| list.len());

        if let Err(rejection) = validate_batch(accepted_len, &mime_types, count, &formats) {
            notify.alert(rejection.icon(), rejection.title(), &rejection.text());
            return;
        }

        if batch.is_empty() {
            return;
        }

        let wrapped: Vec<FileData> = batch.into_iter().map(FileData::from_file).collect();
        on_upload.run(wrapped);
        notify.toast(NoticeIcon::Success, "File(s) uploaded");
    });

    view! {
        <div
            style=move || {
                if dragging.get() {
                    "margin: 16px auto 0; display: flex; align-items: center; justify-content: center; \
                     text-align: center; padding: 20px 0; border-radius: 6px; \
                     border: 2px solid #2b92ec; background: #edf2ff;"
                } else {
                    "margin: 16px auto 0; display: flex; align-items: center; justify-content: center; \
                     text-align: center; padding: 20px 0; border-radius: 6px; \
                     border: 2px dashed #e0e0e0;"
                }
            }
            on:dragover=move |ev: web_sys::DragEvent| {
                ev.prevent_default();
                ev.stop_propagation();
                dragging.set(true);
            }
            on:dragleave=move |ev: web_sys::DragEvent| {
                ev.prevent_default();
                ev.stop_propagation();
                dragging.set(false);
            }
            on:drop=move |ev: web_sys::DragEvent| {
                ev.prevent_default();
                ev.stop_propagation();
                dragging.set(false);

                let mut batch = Vec::new();
                if let Some(transfer) = ev.data_transfer() {
                    if let Some(list) = transfer.files() {
                        for i in 0..list.length() {
                            if let Some(file) = list.get(i) {
                                batch.push(file);
                            }
                        }
                    }
                }
                // Reset the input so the same file can be re-selected later.
                if let Some(input) = file_input_ref.get_untracked() {
                    input.set_value("");
                }
                accept_batch.run(batch);
            }
        >
            <div style="display: flex; flex: 1; flex-direction: column;">
                <div style="margin: 0 auto 8px; color: #9ca3af;">{icon("upload")}</div>
                <div style="font-size: 12px; color: #6b7280;">
                    <input
                        type="file"
                        multiple=true
                        accept=accept_attr
                        style="display: none;"
                        node_ref=file_input_ref
                        on:change=move |ev| {
                            let input: web_sys::HtmlInputElement =
                                ev.target().unwrap().dyn_into().unwrap();
                            let mut batch = Vec::new();
                            if let Some(list) = input.files() {
                                for i in 0..list.length() {
                                    if let Some(file) = list.get(i) {
                                        batch.push(file);
                                    }
                                }
                            }
                            input.set_value("");
                            accept_batch.run(batch);
                        }
                    />
                    <span
                        style="cursor: pointer; color: #4070f4;"
                        on:click=move |_| {
                            if let Some(input) = file_input_ref.get_untracked() {
                                input.click();
                            }
                        }
                    >
                        "Click to upload"
                    </span>
                    " or drag and drop"
                </div>
                <div style="font-size: 10px; color: #6b7280;">{formats_label}</div>
            </div>
        </div>

        {move || {
            (!files.get().is_empty()).then(|| {
                view! {
                    <div style="margin-top: 16px; display: grid; grid-template-columns: repeat(2, 1fr); gap: 16px;">
                        <For
                            each={move || files.get().into_iter().enumerate().collect::<Vec<_>>()}
                            key=|(index, file)| (*index, file.name.clone())
                            children=move |(index, file): (usize, FileData)| {
                                view! {
                                    <div style="width: 100%; border-radius: 6px; background: #e2e8f0; padding: 12px 14px;">
                                        <div style="display: flex; justify-content: space-between;">
                                            <div style="display: flex; align-items: center; gap: 8px; width: 70%;">
                                                <div style="color: #5e62ff;">{icon("file")}</div>
                                                <div>
                                                    <div style="font-size: 12px; font-weight: 500; color: #6b7280;">
                                                        {file.name.clone()}
                                                    </div>
                                                    <div style="font-size: 10px; font-weight: 500; color: #9ca3af;">
                                                        {format!("{} KB", (file.size / 1024.0).floor())}
                                                    </div>
                                                </div>
                                            </div>
                                            <button
                                                style="background: none; border: none; cursor: pointer; color: #6b7280; align-self: flex-start;"
                                                on:click=move |_| on_delete.run(index)
                                            >
                                                {icon("close")}
                                            </button>
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>
                }
            })
        }}
    }
}

/// Adapter that binds `CustomDragDrop` to a parent-held file list:
/// uploads append the batch, deletes remove by index.
#[component]
#[allow(non_snake_case)]
pub fn DragPanel(files: RwSignal<Vec<FileData>>) -> impl IntoView {
    let upload_files = Callback::new(move |batch: Vec<FileData>| {
        files.update(|list| list.extend(batch));
    });

    let delete_file = Callback::new(move |index: usize| {
        files.update(|list| remove_at(list, index));
    });

    view! {
        <div style="background: #fff; box-shadow: 0 1px 3px rgba(0,0,0,0.1); border-radius: 8px; width: 100%; padding: 12px 20px 20px;">
            <CustomDragDrop
                files=files
                on_upload=upload_files
                on_delete=delete_file
                count=10
                formats=vec!["pdf".to_string()]
            />
        </div>
    }
}
