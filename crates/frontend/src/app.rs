use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::notify::{NoticeHost, Notifier};
use leptos::prelude::*;

// Global styles: the loading spinner animation cannot be expressed inline.
const APP_STYLES: &str = r#"
body { margin: 0; font-family: 'Segoe UI', Helvetica, Arial, sans-serif; }
.loader {
    border: 2px solid #e0e0e0;
    border-top-color: #6b7280;
    border-radius: 9999px;
    animation: loader-spin 1s linear infinite;
}
@keyframes loader-spin {
    to { transform: rotate(360deg); }
}
"#;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // Provide Notifier for fire-and-forget toasts and alerts
    provide_context(Notifier::new());

    view! {
        <style>{APP_STYLES}</style>
        <AppRoutes />
        <NoticeHost />
    }
}
