//! Fire-and-forget toast and alert notifications.
//!
//! Usage:
//! ```text
//! let notify = use_context::<Notifier>().unwrap();
//! notify.toast(NoticeIcon::Success, "File(s) uploaded");
//! ```
//! `NoticeHost` must be rendered once at the app root.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::shared::icons::icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeIcon {
    Success,
    Warning,
    Error,
}

impl NoticeIcon {
    fn name(&self) -> &'static str {
        match self {
            NoticeIcon::Success => "success",
            NoticeIcon::Warning => "warning",
            NoticeIcon::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NoticeKind {
    Toast,
    Alert,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    id: u64,
    kind: NoticeKind,
    icon: NoticeIcon,
    title: String,
    text: String,
}

/// Service for transient, non-blocking notifications.
///
/// Notices are never queued or retried; each one removes itself after
/// its display time elapses.
#[derive(Clone, Copy)]
pub struct Notifier {
    notices: RwSignal<Vec<Notice>>,
    next_id: RwSignal<u64>,
}

const TOAST_DISPLAY_MS: u32 = 3000;
const ALERT_DISPLAY_MS: u32 = 1500;

impl Notifier {
    pub fn new() -> Self {
        Self {
            notices: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// Corner toast, used for success confirmations.
    pub fn toast(&self, icon: NoticeIcon, title: &str) {
        self.push(NoticeKind::Toast, icon, title, "", TOAST_DISPLAY_MS);
    }

    /// Centered alert, used for validation warnings and errors.
    pub fn alert(&self, icon: NoticeIcon, title: &str, text: &str) {
        self.push(NoticeKind::Alert, icon, title, text, ALERT_DISPLAY_MS);
    }

    fn push(&self, kind: NoticeKind, icon: NoticeIcon, title: &str, text: &str, display_ms: u32) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.notices.update(|list| {
            list.push(Notice {
                id,
                kind,
                icon,
                title: title.to_string(),
                text: text.to_string(),
            });
        });

        let notices = self.notices;
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(display_ms).await;
            notices.update(|list| list.retain(|notice| notice.id != id));
        });
    }

    fn of_kind(&self, kind: NoticeKind) -> Vec<Notice> {
        self.notices
            .get()
            .into_iter()
            .filter(|notice| notice.kind == kind)
            .collect()
    }
}

/// Renders active notices: toasts bottom-end, alerts centered.
/// Both layers ignore pointer events so the UI stays interactive.
#[component]
pub fn NoticeHost() -> impl IntoView {
    let notifier = use_context::<Notifier>().expect("Notifier not provided in context");

    view! {
        <div style="position: fixed; right: 16px; bottom: 16px; z-index: 1000; display: flex; flex-direction: column; gap: 8px; pointer-events: none;">
            <For
                each=move || notifier.of_kind(NoticeKind::Toast)
                key=|notice| notice.id
                let:notice
            >
                <div style="display: flex; align-items: center; gap: 10px; padding: 10px 16px; background: #fff; border: 1px solid #e0e0e0; border-radius: 8px; box-shadow: 0 2px 8px rgba(0,0,0,0.12);">
                    {icon(notice.icon.name())}
                    <span style="font-size: 14px; font-weight: 600;">{notice.title.clone()}</span>
                </div>
            </For>
        </div>

        <div style="position: fixed; inset: 0; z-index: 1001; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 12px; pointer-events: none;">
            <For
                each=move || notifier.of_kind(NoticeKind::Alert)
                key=|notice| notice.id
                let:notice
            >
                <div style="width: 420px; max-width: 90vw; padding: 20px 24px; background: #fff; border: 1px solid #e0e0e0; border-radius: 10px; box-shadow: 0 4px 16px rgba(0,0,0,0.18); text-align: center;">
                    <div style="display: flex; justify-content: center; margin-bottom: 8px;">
                        {icon(notice.icon.name())}
                    </div>
                    <div style="font-size: 16px; font-weight: 700; margin-bottom: 4px;">
                        {notice.title.clone()}
                    </div>
                    <div style="font-size: 13px; color: #6b7280;">{notice.text.clone()}</div>
                </div>
            </For>
        </div>
    }
}
