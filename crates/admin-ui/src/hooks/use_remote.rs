//! Loading state for data fetched from the backend

use crate::models::AdminResult;
use dioxus::prelude::*;
use std::future::Future;

/// Fetched value plus its loading and error state
pub struct Remote<T: 'static> {
    pub data: Signal<T>,
    pub loading: Signal<bool>,
    pub error: Signal<Option<String>>,
    generation: Signal<u64>,
    sequence: Signal<LoadSequence>,
}

/// Orders overlapping loads so only the most recently started one settles.
///
/// Each filter change starts a new load while older ones may still be in
/// flight; their responses arrive in any order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadSequence {
    latest: u64,
}

impl LoadSequence {
    /// Start a load and return its ticket
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest == ticket
    }

    /// Pass `result` through if `ticket` is still the latest load
    pub fn settle<T>(&self, ticket: u64, result: AdminResult<T>) -> Option<AdminResult<T>> {
        self.is_current(ticket).then_some(result)
    }
}

impl<T: 'static> Clone for Remote<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Remote<T> {}

impl<T: 'static> Remote<T> {
    /// Run `fetch` and store its result. On failure the previous data is kept.
    ///
    /// A load superseded by a later one discards its result, so the data
    /// always matches the most recent request.
    pub fn load(self, fetch: impl Future<Output = AdminResult<T>> + 'static) {
        let Remote {
            mut data,
            mut loading,
            mut error,
            mut sequence,
            ..
        } = self;
        let ticket = sequence.write().begin();

        spawn(async move {
            loading.set(true);
            error.set(None);

            let result = fetch.await;
            let Some(result) = sequence.peek().settle(ticket, result) else {
                tracing::debug!("Discarding superseded load {}", ticket);
                return;
            };
            match result {
                Ok(value) => data.set(value),
                Err(e) => {
                    tracing::error!("Failed to load data: {}", e);
                    error.set(Some(e.user_message()));
                }
            }
            loading.set(false);
        });
    }

    /// Re-run the fetch given to [`use_remote`]
    pub fn refresh(self) {
        let mut generation = self.generation;
        generation += 1;
    }

    pub fn is_loading(&self) -> bool {
        (self.loading)()
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.read().clone()
    }
}

impl<T: 'static> Remote<Vec<T>> {
    /// Drop rows locally after a successful delete
    pub fn remove_where(self, predicate: impl Fn(&T) -> bool) {
        let mut data = self.data;
        data.write().retain(|item| !predicate(item));
    }

    /// Replace rows locally after a successful update
    pub fn replace_where(self, predicate: impl Fn(&T) -> bool, replacement: T)
    where
        T: Clone,
    {
        let mut data = self.data;
        for item in data.write().iter_mut().filter(|item| predicate(item)) {
            *item = replacement.clone();
        }
    }
}

/// Fetch on mount, and again whenever a signal read by `fetch` changes.
///
/// Signals must be read in the synchronous part of `fetch`, before the
/// returned future, for the refetch to be tracked.
pub fn use_remote<T, F, Fut>(fetch: F) -> Remote<T>
where
    T: Default + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = AdminResult<T>> + 'static,
{
    let remote = Remote {
        data: use_signal(T::default),
        loading: use_signal(|| true),
        error: use_signal(|| None),
        generation: use_signal(|| 0),
        sequence: use_signal(LoadSequence::default),
    };

    use_effect(move || {
        // subscribe to refresh()
        let _ = (remote.generation)();
        remote.load(fetch());
    });
    remote
}
