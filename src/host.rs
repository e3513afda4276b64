//! Browser Host
//!
//! `Host` implementation backed by `window` dialogs, the console and the
//! collaborator DOM.

use crate::controller::Host;
use crate::dom;
use crate::error::ApiError;
use crate::models::TodoId;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHost;

impl Host for BrowserHost {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        if let Some(w) = web_sys::window() {
            let _ = w.alert_with_message(message);
        }
    }

    fn log_error(&self, context: &str, error: &ApiError) {
        web_sys::console::error_1(&format!("[DETAIL] {}: {}", context, error).into());
    }

    fn remove_list_item(&self, id: &TodoId) {
        dom::remove_list_item(id);
    }

    fn reload(&self) {
        if let Some(w) = web_sys::window() {
            let _ = w.location().reload();
        }
    }
}
