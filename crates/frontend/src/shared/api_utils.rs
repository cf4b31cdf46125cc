//! URL helpers for talking to the REST API

/// Join the API base URL and a relative path with exactly one `/` between them
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::api_url;
/// assert_eq!(api_url("https://api.github.com/", "/user/repos"), "https://api.github.com/user/repos");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Percent-encode a single path segment (org login, repo name)
pub fn path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
