//! Access token capture: URL → session storage → authorization redirect.

use std::fmt;

use contracts::system::auth::AuthCallbackQuery;

use super::navigation::Navigator;
use super::storage::SessionStore;
use crate::config::AppConfig;

const TOKEN_PARAM: &str = "access_token";

/// Opaque GitHub credential
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(***)")
    }
}

/// Resolve the access token for this session.
///
/// A token in the query string wins and is persisted; otherwise the stored
/// token is used. With neither, the browser is sent to the authorization
/// endpoint and `None` is returned; the page reloads with a token on return.
pub fn get_token(
    search: &str,
    store: &impl SessionStore,
    navigator: &impl Navigator,
    config: &AppConfig,
) -> Option<Token> {
    let key = config.session.token_key.as_str();

    if let Some(token) = token_from_query(search) {
        log::info!("New access token received ({} chars)", token.len());
        store.set(key, &token);
        navigator.replace_query(&query_without_token(search));
        return Some(Token::new(token));
    }

    if let Some(existing) = store.get(key).filter(|t| !t.is_empty()) {
        log::debug!("Using access token from session storage");
        return Some(Token::new(existing));
    }

    navigator.redirect(&authorize_url(config));
    None
}

/// Authorization endpoint carrying the client id and requested scopes
pub fn authorize_url(config: &AppConfig) -> String {
    let github = &config.github;
    format!(
        "{}?scope={}&client_id={}",
        github.authorize_url,
        urlencoding::encode(&github.scopes.join(",")),
        urlencoding::encode(&github.client_id)
    )
}

fn query_pairs(search: &str) -> impl Iterator<Item = &str> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
}

fn is_token_pair(pair: &str) -> bool {
    pair.split('=').next() == Some(TOKEN_PARAM)
}

/// First non-empty token parameter. Only the token pairs are decoded, so
/// other parameters cannot make the token unreadable.
fn token_from_query(search: &str) -> Option<String> {
    query_pairs(search)
        .filter(|pair| is_token_pair(pair))
        .find_map(|pair| match serde_qs::from_str::<AuthCallbackQuery>(pair) {
            Ok(query) => query.token().map(str::to_string),
            Err(e) => {
                log::warn!("Ignoring malformed {} parameter: {}", TOKEN_PARAM, e);
                None
            }
        })
}

/// The query string with the token parameter dropped
fn query_without_token(search: &str) -> String {
    query_pairs(search)
        .filter(|pair| !is_token_pair(pair))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        items: RefCell<HashMap<String, String>>,
    }

    impl SessionStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.items
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }
    }

    #[derive(Default)]
    struct RecordingNavigator {
        redirects: RefCell<Vec<String>>,
        queries: RefCell<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn redirect(&self, url: &str) {
            self.redirects.borrow_mut().push(url.to_string());
        }

        fn replace_query(&self, query: &str) {
            self.queries.borrow_mut().push(query.to_string());
        }
    }

    fn config() -> AppConfig {
        parse_config("[github]\nclient_id = \"abc\"\n").unwrap()
    }

    #[test]
    fn test_no_token_anywhere_redirects_once() {
        let store = MemoryStore::default();
        let nav = RecordingNavigator::default();

        let token = get_token("", &store, &nav, &config());

        assert_eq!(token, None);
        assert_eq!(
            *nav.redirects.borrow(),
            vec!["https://github.com/login/oauth/authorize?scope=user%3Aemail%2Crepo&client_id=abc"]
        );
        assert!(store.items.borrow().is_empty());
    }

    #[test]
    fn test_token_in_url_is_persisted_and_returned() {
        let store = MemoryStore::default();
        let nav = RecordingNavigator::default();

        let token = get_token("?access_token=XYZ", &store, &nav, &config());

        assert_eq!(token, Some(Token::new("XYZ")));
        assert_eq!(store.get("token").as_deref(), Some("XYZ"));
        assert!(nav.redirects.borrow().is_empty());
        assert_eq!(*nav.queries.borrow(), vec![String::new()]);
    }

    #[test]
    fn test_url_token_replaces_stored_token() {
        let store = MemoryStore::default();
        store.set("token", "OLD");
        let nav = RecordingNavigator::default();

        let token = get_token("?tab=repos&access_token=NEW", &store, &nav, &config());

        assert_eq!(token, Some(Token::new("NEW")));
        assert_eq!(store.get("token").as_deref(), Some("NEW"));
        assert_eq!(*nav.queries.borrow(), vec!["tab=repos".to_string()]);
    }

    #[test]
    fn test_stored_token_used_without_redirect() {
        let store = MemoryStore::default();
        store.set("token", "STORED");
        let nav = RecordingNavigator::default();

        let token = get_token("?other=1", &store, &nav, &config());

        assert_eq!(token, Some(Token::new("STORED")));
        assert!(nav.redirects.borrow().is_empty());
        assert!(nav.queries.borrow().is_empty());
    }

    #[test]
    fn test_empty_token_param_counts_as_absent() {
        let store = MemoryStore::default();
        let nav = RecordingNavigator::default();

        assert_eq!(get_token("?access_token=", &store, &nav, &config()), None);
        assert_eq!(nav.redirects.borrow().len(), 1);
    }

    #[test]
    fn test_custom_token_key() {
        let cfg = parse_config(
            "[github]\nclient_id = \"abc\"\n[session]\ntoken_key = \"gh_token\"\n",
        )
        .unwrap();
        let store = MemoryStore::default();
        let nav = RecordingNavigator::default();

        get_token("?access_token=XYZ", &store, &nav, &cfg);

        assert_eq!(store.get("gh_token").as_deref(), Some("XYZ"));
        assert_eq!(store.get("token"), None);
    }

    #[test]
    fn test_token_debug_is_redacted() {
        assert_eq!(format!("{:?}", Token::new("secret")), "Token(***)");
    }

    #[test]
    fn test_token_survives_unparseable_neighbours() {
        assert_eq!(
            token_from_query("?access_token=XYZ&x[]=1&x=2").as_deref(),
            Some("XYZ")
        );
        assert_eq!(
            token_from_query("?access_token=XYZ&access_token=XYZ").as_deref(),
            Some("XYZ")
        );
        assert_eq!(
            token_from_query("?access_token=&access_token=ABC").as_deref(),
            Some("ABC")
        );
        assert_eq!(token_from_query("?x[]=1&x=2"), None);
    }

    #[test]
    fn test_url_token_with_odd_query_is_not_redirected() {
        let store = MemoryStore::default();
        let nav = RecordingNavigator::default();

        let token = get_token("?x[]=1&access_token=XYZ&x=2", &store, &nav, &config());

        assert_eq!(token, Some(Token::new("XYZ")));
        assert!(nav.redirects.borrow().is_empty());
        assert_eq!(*nav.queries.borrow(), vec!["x[]=1&x=2".to_string()]);
    }

    #[test]
    fn test_query_without_token() {
        assert_eq!(query_without_token("?access_token=1"), "");
        assert_eq!(query_without_token("?a=1&access_token=2&b=3"), "a=1&b=3");
        assert_eq!(query_without_token(""), "");
    }
}
