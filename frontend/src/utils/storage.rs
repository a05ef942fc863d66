use web_sys::{Storage, Window};

use crate::api::ApiError;

pub fn window() -> Result<Window, ApiError> {
    web_sys::window().ok_or_else(|| ApiError::storage("No window object"))
}

pub fn local_storage() -> Result<Storage, ApiError> {
    window()?
        .local_storage()
        .map_err(|_| ApiError::storage("No localStorage"))?
        .ok_or_else(|| ApiError::storage("No localStorage"))
}

/// Full-page navigation.
#[cfg(target_arch = "wasm32")]
pub fn redirect_to(path: &str) {
    if let Some(window) = web_sys::window() {
        let location = window.location();
        if location.pathname().map(|current| current == path).unwrap_or(false) {
            return;
        }
        let _ = location.set_href(path);
    }
}

/// Host builds have no window to navigate.
#[cfg(not(target_arch = "wasm32"))]
pub fn redirect_to(_path: &str) {}
