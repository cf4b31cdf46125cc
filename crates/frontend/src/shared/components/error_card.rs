use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize};

/// Failed fetch with a retry action. Shown in place of the content the fetch
/// would have filled; the rest of the page stays usable.
#[component]
pub fn ErrorCard(
    #[prop(into)] message: String,
    on_retry: Callback<()>,
    /// Disables the button while a retry is in flight
    #[prop(default = false.into(), into)]
    retrying: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="error-card">
            <strong>"Error: "</strong>
            {message}
            <div style="margin-top: 8px;">
                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    disabled=retrying
                    on_click=move |_| on_retry.run(())
                >
                    {move || if retrying.get() { "Retrying..." } else { "Retry" }}
                </Button>
            </div>
        </div>
    }
}
