use serde::{Deserialize, Serialize};

/// Query string GitHub's authorization redirect lands on
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthCallbackQuery {
    #[serde(default)]
    pub access_token: Option<String>,
}

impl AuthCallbackQuery {
    /// Non-empty token carried by the callback, if any
    pub fn token(&self) -> Option<&str> {
        self.access_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}
