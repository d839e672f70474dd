//! Blocking browser alert for failed requests.

use crate::api::recommend_api::RequestFailed;

pub fn show_request_failure(failure: &RequestFailed) {
    alert(failure.user_message());
}

#[cfg(target_arch = "wasm32")]
fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn alert(message: &str) {
    dioxus::logger::tracing::warn!("alert: {}", message);
}
