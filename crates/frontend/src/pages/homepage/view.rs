use contracts::github::RepoDto;
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor, Flex, FlexGap, Spinner};

use super::model::{repo_labels, Section, SectionKey};
use super::view_model::{HomeFetch, HomepageVm};
use crate::pages::feed::Feed;
use crate::shared::components::{ErrorCard, PageHeader};
use crate::shared::date_utils::format_optional;
use crate::shared::github::GithubClient;
use crate::shared::tabs::{Orientation, Tab, TabList};
use crate::shared::task::ScopedTasks;
use crate::system::auth::use_github;

#[component]
pub fn Homepage() -> impl IntoView {
    let api = use_github();
    let vm = HomepageVm::new();
    let tasks = ScopedTasks::new();

    vm.load(&tasks, api.clone());

    let sections = vm.sections();
    let has_data = vm.has_data();
    let tabs = {
        let api = api.clone();
        let tasks = tasks.clone();
        Signal::derive(move || {
            sections
                .get()
                .into_iter()
                .map(|section| section_tab(vm, tasks.clone(), api.clone(), section))
                .collect::<Vec<_>>()
        })
    };

    let reload = Callback::new(move |_: ()| vm.load(&tasks, api.clone()));

    view! {
        <div class="page">
            <PageHeader title="GitHub" subtitle="Repositories and organizations" />
            <div class="page__content">
                {move || {
                    if vm.loading.get() {
                        view! {
                            <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: 32px;">
                                <Spinner />
                                <span>"Loading..."</span>
                            </Flex>
                        }
                        .into_any()
                    } else if let Some(err) = vm.error.get() {
                        view! { <ErrorCard message=err on_retry=reload /> }.into_any()
                    } else if has_data.get() {
                        view! { <TabList tabs=tabs orientation=Orientation::Horizontal /> }.into_any()
                    } else {
                        view! { <div>"No data"</div> }.into_any()
                    }
                }}
            </div>
        </div>
    }
}

fn section_tab(
    vm: HomepageVm,
    tasks: ScopedTasks<HomeFetch>,
    api: GithubClient,
    section: Section,
) -> Tab {
    let Section { name, key, default } = section;
    let tab = Tab::new(name, move || {
        view! {
            <SectionPane vm=vm tasks=tasks.clone() api=api.clone() section_key=key.clone() />
        }
    });
    if default {
        tab.selected_by_default()
    } else {
        tab
    }
}

/// Repositories of one section as a vertical tab list
#[component]
fn SectionPane(
    vm: HomepageVm,
    tasks: ScopedTasks<HomeFetch>,
    api: GithubClient,
    section_key: SectionKey,
) -> impl IntoView {
    let repos = vm.branch(section_key.clone());
    let pending = vm.is_pending(section_key.clone());

    let retry = Callback::new(move |_: ()| vm.retry(&tasks, api.clone(), section_key.clone()));

    view! {
        {move || match repos.get() {
            None => view! { <div>"No data"</div> }.into_any(),
            Some(Err(e)) => view! {
                <ErrorCard message=e.to_string() on_retry=retry retrying=pending />
            }
            .into_any(),
            Some(Ok(list)) if list.is_empty() => {
                view! { <div class="empty">"No repositories"</div> }.into_any()
            }
            Some(Ok(list)) => view! { <RepoTabs repos=list /> }.into_any(),
        }}
    }
}

#[component]
fn RepoTabs(repos: Vec<RepoDto>) -> impl IntoView {
    let labels = repo_labels(&repos);
    let tabs: Vec<Tab> = repos
        .into_iter()
        .zip(labels)
        .map(|(repo, label)| Tab::new(label, move || view! { <RepoPane repo=repo.clone() /> }))
        .collect();

    view! { <TabList tabs=tabs orientation=Orientation::Vertical /> }
}

#[component]
fn RepoPane(repo: RepoDto) -> impl IntoView {
    let updated = format_optional(repo.updated_at.as_ref());
    let description = repo.description.clone().unwrap_or_default();

    view! {
        <div class="repo">
            <div class="repo__header">
                <h3>
                    <a href=repo.html_url.clone() target="_blank">{repo.full_name.clone()}</a>
                </h3>
                {repo.private.then(|| view! {
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Warning>"private"</Badge>
                })}
            </div>
            <div class="repo__meta">{description}</div>
            <div class="repo__meta">"Updated: " {updated}</div>
            <Feed full_name=repo.full_name />
        </div>
    }
}
