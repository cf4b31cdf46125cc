//! ViewModel for the homepage

use std::collections::HashSet;

use leptos::prelude::*;

use super::model::{load_branch, load_home, sections, HomeData, RepoList, Section, SectionKey};
use crate::shared::github::{GithubApi, GithubClient};
use crate::shared::task::ScopedTasks;

/// Fetches the homepage runs: the whole page, or one retried branch
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum HomeFetch {
    Page,
    Branch(SectionKey),
}

#[derive(Clone, Copy)]
pub struct HomepageVm {
    pub data: RwSignal<Option<HomeData>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    /// Branches with a retry in flight
    pub pending: RwSignal<HashSet<SectionKey>>,
}

impl HomepageVm {
    pub fn new() -> Self {
        Self {
            data: RwSignal::new(None),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            pending: RwSignal::new(HashSet::new()),
        }
    }

    /// Top-level sections; only changes when the set of orgs changes
    pub fn sections(&self) -> Memo<Vec<Section>> {
        let data = self.data;
        Memo::new(move |_| data.with(|d| d.as_ref().map(sections).unwrap_or_default()))
    }

    pub fn has_data(&self) -> Memo<bool> {
        let data = self.data;
        Memo::new(move |_| data.with(Option::is_some))
    }

    /// Result of one branch; untouched by updates to other branches
    pub fn branch(&self, key: SectionKey) -> Memo<Option<RepoList>> {
        let data = self.data;
        Memo::new(move |_| data.with(|d| d.as_ref().and_then(|d| d.branch(&key).cloned())))
    }

    pub fn is_pending(&self, key: SectionKey) -> Memo<bool> {
        let pending = self.pending;
        Memo::new(move |_| pending.with(|p| p.contains(&key)))
    }

    /// Load the whole page. Retries of the previous load are dropped.
    pub fn load(&self, tasks: &ScopedTasks<HomeFetch>, api: GithubClient) {
        let vm = *self;
        tasks.abort_all();
        vm.pending.set(HashSet::new());
        vm.loading.set(true);
        vm.error.set(None);

        tasks.spawn(HomeFetch::Page, async move {
            match load_home(&api).await {
                Ok(data) => {
                    log::info!("Homepage loaded: {} organizations", data.orgs.len());
                    vm.data.set(Some(data));
                }
                Err(e) => {
                    log::error!("Failed to load organizations: {}", e);
                    vm.error.set(Some(e.to_string()));
                }
            }
            vm.loading.set(false);
        });
    }

    /// Re-fetch one branch, leaving the others as they are. Ignored while a
    /// retry of the same branch is in flight.
    pub fn retry<A>(&self, tasks: &ScopedTasks<HomeFetch>, api: A, key: SectionKey)
    where
        A: GithubApi + 'static,
    {
        let vm = *self;
        if !vm.start_retry(&key) {
            return;
        }
        let aborted = key.clone();
        tasks.spawn_or_else(
            HomeFetch::Branch(key.clone()),
            vm.finish_retry(api, key),
            move || vm.clear_pending(&aborted),
        );
    }

    fn start_retry(&self, key: &SectionKey) -> bool {
        self.pending
            .try_update(|p| p.insert(key.clone()))
            .unwrap_or(false)
    }

    async fn finish_retry<A: GithubApi>(self, api: A, key: SectionKey) {
        let repos = load_branch(&api, &key).await;
        self.data.update(|d| {
            if let Some(d) = d {
                d.set_branch(&key, repos);
            }
        });
        self.clear_pending(&key);
    }

    fn clear_pending(&self, key: &SectionKey) {
        self.pending.try_update(|p| p.remove(key));
    }
}
