use web_sys::window;

/// Key-value store scoped to the browser tab
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// `window.sessionStorage`
pub struct BrowserSession;

fn get_session_storage() -> Option<web_sys::Storage> {
    window()?.session_storage().ok()?
}

impl SessionStore for BrowserSession {
    fn get(&self, key: &str) -> Option<String> {
        get_session_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        match get_session_storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    log::warn!("Failed to write '{}' to session storage", key);
                }
            }
            None => log::warn!("Session storage is not available"),
        }
    }
}
