use contracts::github::EventDto;
use leptos::prelude::*;
use thaw::Spinner;

use super::model::{event_line, load_feed};
use crate::shared::components::ErrorCard;
use crate::shared::date_utils::format_optional;
use crate::shared::github::GithubClient;
use crate::shared::task::ScopedTasks;
use crate::system::auth::use_github;

#[derive(Clone, Copy)]
struct FeedVm {
    events: RwSignal<Option<Vec<EventDto>>>,
    loading: RwSignal<bool>,
    error: RwSignal<Option<String>>,
}

impl FeedVm {
    fn new() -> Self {
        Self {
            events: RwSignal::new(None),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    fn fetch(&self, api: GithubClient, full_name: String) -> impl std::future::Future<Output = ()> {
        let vm = *self;
        vm.loading.set(true);
        vm.error.set(None);

        async move {
            match load_feed(&api, &full_name).await {
                Ok(events) => vm.events.set(Some(events)),
                Err(e) => {
                    log::warn!("Events of {} failed to load: {}", full_name, e);
                    vm.error.set(Some(e.to_string()));
                }
            }
            vm.loading.set(false);
        }
    }
}

#[component]
pub fn Feed(#[prop(into)] full_name: String) -> impl IntoView {
    let api = use_github();
    let vm = FeedVm::new();
    let tasks = ScopedTasks::new();

    tasks.spawn((), vm.fetch(api.clone(), full_name.clone()));

    let retry = Callback::new(move |_: ()| {
        if vm.loading.get_untracked() {
            return;
        }
        tasks.spawn((), vm.fetch(api.clone(), full_name.clone()));
    });

    view! {
        <div class="feed">
            {move || {
                if let Some(err) = vm.error.get() {
                    return view! {
                        <ErrorCard message=err on_retry=retry retrying=vm.loading />
                    }
                    .into_any();
                }
                if vm.loading.get() {
                    return view! { <Spinner /> }.into_any();
                }
                match vm.events.get() {
                    Some(events) if !events.is_empty() => view! {
                        <div>
                            {events
                                .iter()
                                .map(|e| {
                                    let when = format_optional(e.created_at.as_ref());
                                    view! {
                                        <div class="feed__event" title=when>{event_line(e)}</div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_any(),
                    _ => view! { <h2>"none"</h2> }.into_any(),
                }
            }}
        </div>
    }
}
