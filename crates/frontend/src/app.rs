use crate::config::load_config;
use crate::pages::homepage::Homepage;
use crate::system::auth::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    match load_config() {
        Ok(config) => view! {
            <AuthProvider config=config>
                <Homepage />
            </AuthProvider>
        }
        .into_any(),
        Err(e) => {
            log::error!("Configuration error: {}", e);
            view! {
                <div class="error-card">
                    <strong>"Configuration error: "</strong>
                    {e.to_string()}
                </div>
            }
            .into_any()
        }
    }
}
