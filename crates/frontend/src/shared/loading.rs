use leptos::prelude::*;

/// Small spinner for inline button loading states.
#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! { <div class="loader" style="height: 12px; width: 12px;"></div> }
}

/// Larger spinner shown in the transcript while an assistant reply is pending.
#[component]
pub fn LoadingSpinnerChat() -> impl IntoView {
    view! { <div class="loader" style="height: 24px; width: 24px;"></div> }
}
