use wasm_bindgen::JsValue;
use web_sys::window;

/// Browser navigation side effects used by the token flow
pub trait Navigator {
    /// Leave the app for `url` (full page navigation)
    fn redirect(&self, url: &str);

    /// Replace the visible query string without reloading
    fn replace_query(&self, query: &str);
}

pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect(&self, url: &str) {
        let Some(w) = window() else {
            return;
        };
        log::info!("No access token, redirecting to authorization");
        if let Err(e) = w.location().replace(url) {
            log::error!("Redirect failed: {:?}", e);
        }
    }

    fn replace_query(&self, query: &str) {
        let Some(w) = window() else {
            return;
        };
        let new_url = if query.is_empty() {
            w.location().pathname().unwrap_or_else(|_| "/".to_string())
        } else {
            format!("?{}", query)
        };
        if let Ok(history) = w.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&new_url));
        }
    }
}

/// Current `location.search`, empty when unavailable
pub fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}
