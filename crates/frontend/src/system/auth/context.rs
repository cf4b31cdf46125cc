use leptos::prelude::*;
use thaw::Spinner;

use super::navigation::{current_search, BrowserNavigator};
use super::storage::BrowserSession;
use super::token::get_token;
use crate::config::AppConfig;
use crate::shared::github::GithubClient;

/// Resolves the access token once and provides an authenticated
/// [`GithubClient`] to everything below it.
///
/// Without a token the browser is already on its way to the authorization
/// page, so only a placeholder is rendered.
#[component]
pub fn AuthProvider(config: AppConfig, children: Children) -> impl IntoView {
    match get_token(&current_search(), &BrowserSession, &BrowserNavigator, &config) {
        Some(token) => {
            provide_context(GithubClient::new(config.github.api_base.clone(), token));
            children().into_any()
        }
        None => view! {
            <div class="auth-redirect">
                <Spinner />
                <span>"Redirecting to GitHub..."</span>
            </div>
        }
        .into_any(),
    }
}

/// Hook to access the authenticated API client
pub fn use_github() -> GithubClient {
    use_context::<GithubClient>().expect("AuthProvider not found in component tree")
}
