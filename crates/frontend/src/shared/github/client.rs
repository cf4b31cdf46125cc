use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::shared::api_utils::api_url;
use crate::system::auth::Token;

/// Read-only access to the REST API.
///
/// Implemented by [`GithubClient`] in the browser; page logic is generic over
/// it so the fetch orchestration can run against in-memory doubles.
#[allow(async_fn_in_trait)]
pub trait GithubApi {
    /// GET `path` relative to the API base and decode the JSON body
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError>;
}

#[derive(Clone, Debug)]
pub struct GithubClient {
    base_url: String,
    token: Token,
}

impl GithubClient {
    pub fn new(base_url: impl Into<String>, token: Token) -> Self {
        Self {
            base_url: base_url.into(),
            token,
        }
    }
}

impl GithubApi for GithubClient {
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = api_url(&self.base_url, path);
        log::debug!("GET {}", url);

        let response = Request::get(&url)
            .header("Authorization", &format!("Bearer {}", self.token.as_str()))
            .header("Accept", "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| {
                log::warn!("GET {} failed: {}", url, e);
                ApiError::Network(e.to_string())
            })?;

        if !response.ok() {
            log::warn!("GET {} returned {}", url, response.status());
            return Err(ApiError::Status {
                status: response.status(),
                path: path.to_string(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}
