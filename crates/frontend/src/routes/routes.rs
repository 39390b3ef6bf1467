use crate::conversation::ConversationPage;
use crate::landing::LandingPage;
use crate::layout::global_context::{AppGlobalContext, Route};
use leptos::prelude::*;

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        {move || match ctx.route.get() {
            Route::Landing => view! { <LandingPage /> }.into_any(),
            Route::Chat => view! { <ConversationPage /> }.into_any(),
        }}
    }
}
