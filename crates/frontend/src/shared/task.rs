//! Async work bound to the lifetime of the component that started it.

use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::sync::{Arc, Mutex};

use futures::future::{AbortHandle, Abortable};
use leptos::prelude::*;

/// Fetches owned by one component, at most one running per key.
///
/// Starting a task under a key aborts the previous one under that key. When
/// the owning component is cleaned up every running task is aborted, so a
/// removed component never receives late results.
pub struct ScopedTasks<K> {
    running: Arc<Mutex<HashMap<K, AbortHandle>>>,
}

impl<K> Clone for ScopedTasks<K> {
    fn clone(&self) -> Self {
        Self {
            running: Arc::clone(&self.running),
        }
    }
}

impl<K> ScopedTasks<K>
where
    K: Eq + Hash + Send + 'static,
{
    /// Must be called while a component owner is current. Registers a single
    /// cleanup hook, however many tasks are started later.
    pub fn new() -> Self {
        let tasks = Self {
            running: Arc::new(Mutex::new(HashMap::new())),
        };
        let on_dispose = tasks.clone();
        on_cleanup(move || on_dispose.abort_all());
        tasks
    }

    pub fn spawn<F>(&self, key: K, fut: F)
    where
        F: Future<Output = ()> + 'static,
    {
        self.spawn_or_else(key, fut, || {});
    }

    /// Like [`spawn`](Self::spawn); `on_abort` runs if the task is aborted
    /// before it finishes.
    pub fn spawn_or_else<F, A>(&self, key: K, fut: F, on_abort: A)
    where
        F: Future<Output = ()> + 'static,
        A: FnOnce() + 'static,
    {
        wasm_bindgen_futures::spawn_local(self.guard(key, fut, on_abort));
    }

    pub fn abort_all(&self) {
        if let Ok(mut running) = self.running.lock() {
            for (_, handle) in running.drain() {
                handle.abort();
            }
        }
    }

    pub(crate) fn guard<F, A>(
        &self,
        key: K,
        fut: F,
        on_abort: A,
    ) -> impl Future<Output = ()> + 'static
    where
        F: Future<Output = ()> + 'static,
        A: FnOnce() + 'static,
    {
        let (handle, registration) = AbortHandle::new_pair();
        if let Ok(mut running) = self.running.lock() {
            if let Some(previous) = running.insert(key, handle) {
                previous.abort();
            }
        }

        async move {
            if Abortable::new(fut, registration).await.is_err() {
                log::debug!("Fetch cancelled before completion");
                on_abort();
            }
        }
    }
}
