use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

/// Client-side route surface: the landing page and the chat page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Landing,
    Chat,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/chat" => Route::Chat,
            _ => Route::Landing,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Chat => "/chat",
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub route: RwSignal<Route>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            route: RwSignal::new(Route::Landing),
        }
    }

    pub fn init_router_integration(&self) {
        let initial = window()
            .and_then(|w| w.location().pathname().ok())
            .map(|path| Route::from_path(&path))
            .unwrap_or(Route::Landing);
        self.route.set(initial);

        let this = *self;
        if let Some(w) = window() {
            // Keep the route signal in sync with browser Back/Forward.
            let on_popstate = Closure::wrap(Box::new(move |_: web_sys::Event| {
                if let Some(path) = window().and_then(|w| w.location().pathname().ok()) {
                    this.route.set(Route::from_path(&path));
                }
            }) as Box<dyn FnMut(web_sys::Event)>);
            let _ = w.add_event_listener_with_callback(
                "popstate",
                on_popstate.as_ref().unchecked_ref(),
            );
            // Note: the closure is intentionally leaked (.forget()) since the
            // popstate listener lives for the whole application.
            on_popstate.forget();
        }
    }

    pub fn navigate(&self, route: Route) {
        if self.route.with_untracked(|current| *current == route) {
            return;
        }
        if let Some(w) = window() {
            if let Ok(history) = w.history() {
                let _ = history.push_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(route.path()),
                );
            }
        }
        self.route.set(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_from_path() {
        assert_eq!(Route::from_path("/"), Route::Landing);
        assert_eq!(Route::from_path(""), Route::Landing);
        assert_eq!(Route::from_path("/chat"), Route::Chat);
        assert_eq!(Route::from_path("/chat/"), Route::Chat);
        assert_eq!(Route::from_path("/anything-else"), Route::Landing);
    }

    #[test]
    fn test_route_path() {
        assert_eq!(Route::Landing.path(), "/");
        assert_eq!(Route::Chat.path(), "/chat");
        assert_eq!(Route::from_path(Route::Chat.path()), Route::Chat);
    }
}
