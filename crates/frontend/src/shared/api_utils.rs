//! Backend URL construction.
//!
//! A CSR bundle has no environment to read a backend URL from, so the
//! origin is derived from the page's own location: same protocol and
//! hostname, backend port 8000.

const BACKEND_PORT: u16 = 8000;

fn backend_origin() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Full URL for a backend API path such as "/api/chat/v2".
pub fn api_url(path: &str) -> String {
    format!("{}{}", backend_origin(), path)
}
