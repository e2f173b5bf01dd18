//! # Bounded Fan-Out Dispatch
//!
//! Launches one lookup task per key, gated by a semaphore, and joins every
//! task before returning (a full barrier). Outcomes land in a shared map
//! whose lock is held only for the insert itself, never across a lookup,
//! so the I/O-bound work stays parallel.
//!
//! Completion order is unspecified; the merge is keyed and commutative, so
//! it cannot affect the result.

use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::hash::Hash;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::warn;

use fleetscope_common::config::QueryConfig;
use fleetscope_common::error::LookupError;

/// Per-key outcomes of one dispatch. A key can be absent only when the
/// deadline expired or fail-fast aborted its task before it finished.
pub type DispatchMap<K, V> = HashMap<K, Result<V, LookupError>>;

/// A fan-out/fan-in executor for one query.
///
/// The semaphore lives on the struct, not in [`dispatch`](Self::dispatch),
/// so concurrent dispatches within the same query (the 2xN vehicle-row
/// lookups) share a single concurrency bound.
pub struct FanOut {
    gate: Arc<Semaphore>,
    fail_fast: bool,
    deadline: Option<Duration>,
}

impl FanOut {
    pub fn new(config: &QueryConfig) -> Self {
        Self {
            gate: Arc::new(Semaphore::new(config.max_concurrency.max(1))),
            fail_fast: config.fail_fast,
            deadline: config.deadline,
        }
    }

    /// Resolves every key in `keys` through `lookup`, concurrently but
    /// never with more than the configured number of lookups in flight.
    ///
    /// Duplicate keys are resolved once. The call returns only after every
    /// launched task has been joined, including aborted ones.
    pub async fn dispatch<K, V, F, Fut>(
        &self,
        keys: impl IntoIterator<Item = K>,
        lookup: F,
    ) -> DispatchMap<K, V>
    where
        K: Clone + Eq + Hash + Send + Sync + 'static,
        V: Send + 'static,
        F: Fn(K) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<V, LookupError>> + Send + 'static,
    {
        let keys: HashSet<K> = keys.into_iter().collect();
        let results: Arc<Mutex<DispatchMap<K, V>>> =
            Arc::new(Mutex::new(HashMap::with_capacity(keys.len())));
        let lookup = Arc::new(lookup);

        let mut tasks: JoinSet<bool> = JoinSet::new();
        for key in keys {
            let gate = self.gate.clone();
            let results = results.clone();
            let lookup = lookup.clone();

            tasks.spawn(async move {
                let Ok(_permit) = gate.acquire_owned().await else {
                    // The semaphore is never closed; an aborted acquire
                    // just means the dispatch is shutting down.
                    return true;
                };
                let outcome = lookup(key.clone()).await;
                let succeeded = outcome.is_ok();
                results.lock().unwrap().insert(key, outcome);
                succeeded
            });
        }

        self.join_barrier(&mut tasks).await;

        match Arc::try_unwrap(results) {
            Ok(map) => map.into_inner().unwrap(),
            // Unreachable once every task is joined, but draining is
            // cheaper than asserting on it.
            Err(shared) => shared.lock().unwrap().drain().collect(),
        }
    }

    /// Joins every task, honoring fail-fast and the per-dispatch deadline.
    async fn join_barrier(&self, tasks: &mut JoinSet<bool>) {
        match self.deadline {
            None => drain(tasks, self.fail_fast).await,
            Some(deadline) => {
                let joined = tokio::time::timeout(deadline, drain(tasks, self.fail_fast));
                if joined.await.is_err() {
                    warn!(?deadline, "dispatch deadline expired, keeping partial results");
                    tasks.abort_all();
                    while tasks.join_next().await.is_some() {}
                }
            }
        }
    }
}

/// Joins until the set is empty. On a failed lookup with fail-fast on, the
/// unfinished siblings are aborted but still joined, so the barrier holds.
async fn drain(tasks: &mut JoinSet<bool>, fail_fast: bool) {
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(succeeded) => {
                if !succeeded && fail_fast {
                    tasks.abort_all();
                }
            }
            Err(err) if err.is_cancelled() => {}
            Err(err) => warn!("fan-out task panicked: {err}"),
        }
    }
}
