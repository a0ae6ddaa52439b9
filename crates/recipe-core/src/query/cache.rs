//! Keyed, deduplicating query cache.
//!
//! One slot per key. While a fetch is in flight every consumer of that key
//! awaits the same shared future; once it resolves the value stays cached.
//! A failed fetch is remembered until the next consumer retries it.
//!
//! Reads are stale-while-revalidate: `revalidate` hands back the cached value
//! at once together with a refetch that replaces it when it lands. Values the
//! cache's reuse rule rejects (empty placeholders) are never served stale.

use std::cell::RefCell;
use std::collections::HashMap;
use std::convert::Infallible;
use std::future::Future;
use std::hash::Hash;
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture, Shared};

type SharedFetch<V, E> = Shared<LocalBoxFuture<'static, Result<V, E>>>;

enum Slot<V, E> {
    InFlight(SharedFetch<V, E>),
    Refreshing { stale: V, fetch: SharedFetch<V, E> },
    Ready(V),
    Failed(E),
}

/// Observable state of one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryState<V, E = Infallible> {
    Pending,
    Ready(V),
    Error(E),
}

impl<V, E> QueryState<V, E> {
    pub fn is_pending(&self) -> bool {
        matches!(self, QueryState::Pending)
    }

    pub fn ready(&self) -> Option<&V> {
        match self {
            QueryState::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// Single-threaded cache; clones share the same slots.
pub struct QueryCache<K, V, E = Infallible> {
    slots: Rc<RefCell<HashMap<K, Slot<V, E>>>>,
    reuse: fn(&V) -> bool,
}

impl<K, V, E> Clone for QueryCache<K, V, E> {
    fn clone(&self) -> Self {
        Self {
            slots: Rc::clone(&self.slots),
            reuse: self.reuse,
        }
    }
}

impl<K, V, E> Default for QueryCache<K, V, E> {
    fn default() -> Self {
        Self {
            slots: Rc::new(RefCell::new(HashMap::new())),
            reuse: |_| true,
        }
    }
}

impl<K, V, E> QueryCache<K, V, E>
where
    K: Eq + Hash + Clone + 'static,
    V: Clone + 'static,
    E: Clone + 'static,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// A cache that refetches instead of serving values `reuse` rejects.
    pub fn reusing(reuse: fn(&V) -> bool) -> Self {
        Self {
            reuse,
            ..Self::default()
        }
    }

    /// Value for `key`, fetching it with `fetcher` only when nothing usable
    /// is cached or in flight. A key being revalidated serves its stale value.
    pub async fn fetch<F, Fut>(&self, key: K, fetcher: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>> + 'static,
    {
        let joined = match self.slots.borrow().get(&key) {
            Some(Slot::Ready(value)) if (self.reuse)(value) => return Ok(value.clone()),
            Some(Slot::Refreshing { stale, .. }) if (self.reuse)(stale) => {
                return Ok(stale.clone())
            }
            Some(Slot::InFlight(fetch)) | Some(Slot::Refreshing { fetch, .. }) => {
                Some(fetch.clone())
            }
            Some(Slot::Ready(_)) | Some(Slot::Failed(_)) | None => None,
        };

        let fetch = match joined {
            Some(fetch) => fetch,
            None => self.start(key.clone(), fetcher),
        };
        self.settle(key, fetch).await
    }

    /// The usable cached value for `key`, if any, plus a refetch that
    /// replaces it once it resolves. Joins a fetch already in flight.
    ///
    /// A failed refetch keeps the stale value in place.
    pub fn revalidate<F, Fut>(
        &self,
        key: K,
        fetcher: F,
    ) -> (Option<V>, LocalBoxFuture<'static, Result<V, E>>)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>> + 'static,
    {
        let stale = self.cached(&key);
        let joined = match self.slots.borrow().get(&key) {
            Some(Slot::InFlight(fetch)) | Some(Slot::Refreshing { fetch, .. }) => {
                Some(fetch.clone())
            }
            _ => None,
        };
        let fetch = match joined {
            Some(fetch) => fetch,
            None => self.start(key.clone(), fetcher),
        };

        let cache = self.clone();
        (stale, async move { cache.settle(key, fetch).await }.boxed_local())
    }

    fn start<F, Fut>(&self, key: K, fetcher: F) -> SharedFetch<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>> + 'static,
    {
        let fetch = fetcher().boxed_local().shared();
        let mut slots = self.slots.borrow_mut();
        let slot = match slots.remove(&key) {
            Some(Slot::Ready(stale)) | Some(Slot::Refreshing { stale, .. }) => Slot::Refreshing {
                stale,
                fetch: fetch.clone(),
            },
            _ => Slot::InFlight(fetch.clone()),
        };
        slots.insert(key, slot);
        fetch
    }

    async fn settle(&self, key: K, fetch: SharedFetch<V, E>) -> Result<V, E> {
        let result = fetch.clone().await;

        let mut slots = self.slots.borrow_mut();
        let owned = match slots.get(&key) {
            Some(Slot::InFlight(current)) | Some(Slot::Refreshing { fetch: current, .. }) => {
                current.ptr_eq(&fetch)
            }
            _ => false,
        };
        // Only the fetch that owns the slot settles it.
        if owned {
            let settled = match (slots.remove(&key), &result) {
                (_, Ok(value)) => Slot::Ready(value.clone()),
                (Some(Slot::Refreshing { stale, .. }), Err(_)) => Slot::Ready(stale),
                (_, Err(error)) => Slot::Failed(error.clone()),
            };
            slots.insert(key, settled);
        }
        result
    }

    pub fn state(&self, key: &K) -> Option<QueryState<V, E>> {
        self.slots.borrow().get(key).map(|slot| match slot {
            Slot::InFlight(fetch) => match fetch.peek() {
                Some(Ok(value)) => QueryState::Ready(value.clone()),
                Some(Err(error)) => QueryState::Error(error.clone()),
                None => QueryState::Pending,
            },
            Slot::Refreshing { stale, fetch } => match fetch.peek() {
                Some(Ok(value)) => QueryState::Ready(value.clone()),
                _ => QueryState::Ready(stale.clone()),
            },
            Slot::Ready(value) => QueryState::Ready(value.clone()),
            Slot::Failed(error) => QueryState::Error(error.clone()),
        })
    }

    /// Usable cached value without triggering a fetch.
    pub fn cached(&self, key: &K) -> Option<V> {
        match self.state(key)? {
            QueryState::Ready(value) if (self.reuse)(&value) => Some(value),
            _ => None,
        }
    }

    pub fn is_pending(&self, key: &K) -> bool {
        self.state(key).is_some_and(|state| state.is_pending())
    }

    pub fn invalidate(&self, key: &K) {
        self.slots.borrow_mut().remove(key);
    }

    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
