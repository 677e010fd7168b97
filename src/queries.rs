//! Query Cache
//!
//! Explicit rendition of the fetch/caching layer: one cell per logical query
//! key, request coalescing so at most one fetch is in flight per key, and
//! invalidation by epoch. Cells are created in the application root scope, so
//! page unmounts dispose their effects but never the cached state; a response
//! arriving for a superseded epoch is discarded wholesale.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::error::ApiError;
use crate::models::{AuditItem, FunctionScore, GlobalScore, Kpi};

/// Lifecycle of one cached query.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    Loading,
    Ready(T),
    Failed(ApiError),
}

/// Returns whether a fetch must be issued for `epoch`. A fetch already in
/// flight or a result already loaded for the same epoch means later
/// subscribers attach to the shared state instead.
fn should_fetch(epoch: u64, pending: Option<u64>, loaded: Option<u64>) -> bool {
    pending != Some(epoch) && loaded != Some(epoch)
}

/// Cached state for one logical query key.
pub struct QueryCell<T: Clone + Send + Sync + 'static> {
    state: RwSignal<QueryState<T>>,
    epoch: RwSignal<u64>,
    loaded: StoredValue<Option<u64>>,
    pending: StoredValue<Option<u64>>,
}

impl<T: Clone + Send + Sync + 'static> Clone for QueryCell<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Clone + Send + Sync + 'static> Copy for QueryCell<T> {}

impl<T: Clone + Send + Sync + 'static> QueryCell<T> {
    fn new() -> Self {
        Self {
            state: RwSignal::new(QueryState::Loading),
            epoch: RwSignal::new(0),
            loaded: StoredValue::new(None),
            pending: StoredValue::new(None),
        }
    }

    /// Watch the cell from a view. Issues the fetch for the current epoch
    /// unless one is in flight or already loaded; re-runs when the epoch is
    /// bumped by an invalidation.
    pub fn subscribe<F, Fut>(self, fetch: F) -> ReadSignal<QueryState<T>>
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        Effect::new(move |_| {
            let epoch = self.epoch.get();
            if !should_fetch(epoch, self.pending.get_value(), self.loaded.get_value()) {
                return;
            }
            self.pending.set_value(Some(epoch));
            // Keep stale data visible during a refetch; Loading only shows
            // before the first success.
            if self.loaded.get_value().is_none() {
                self.state.set(QueryState::Loading);
            }
            let future = fetch();
            spawn_local(async move {
                let result = future.await;
                if self.pending.get_value() == Some(epoch) {
                    self.pending.set_value(None);
                }
                if self.epoch.get_untracked() != epoch {
                    return;
                }
                self.loaded.set_value(Some(epoch));
                self.state.set(match result {
                    Ok(value) => QueryState::Ready(value),
                    Err(err) => QueryState::Failed(err),
                });
            });
        });
        self.state.read_only()
    }

    /// Drop the cached result; subscribers refetch on their next effect run.
    pub fn invalidate(self) {
        self.epoch.update(|epoch| *epoch += 1);
    }
}

/// The four query cells, provided once via context at the application root.
#[derive(Clone, Copy)]
pub struct QueryClient {
    global_score: QueryCell<GlobalScore>,
    function_scores: QueryCell<Vec<FunctionScore>>,
    kpis: QueryCell<Vec<Kpi>>,
    audit_items: QueryCell<Vec<AuditItem>>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self {
            global_score: QueryCell::new(),
            function_scores: QueryCell::new(),
            kpis: QueryCell::new(),
            audit_items: QueryCell::new(),
        }
    }

    pub fn global_score(&self) -> ReadSignal<QueryState<GlobalScore>> {
        self.global_score.subscribe(api::fetch_global_score)
    }

    pub fn function_scores(&self) -> ReadSignal<QueryState<Vec<FunctionScore>>> {
        self.function_scores.subscribe(api::fetch_function_scores)
    }

    pub fn kpis(&self) -> ReadSignal<QueryState<Vec<Kpi>>> {
        self.kpis.subscribe(api::fetch_kpis)
    }

    pub fn audit_items(&self) -> ReadSignal<QueryState<Vec<AuditItem>>> {
        self.audit_items.subscribe(api::fetch_audit_items)
    }

    /// Invalidate the audit-items cell after a successful status update.
    pub fn invalidate_audit_items(&self) {
        self.audit_items.invalidate();
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the query client from context.
pub fn use_query_client() -> QueryClient {
    expect_context::<QueryClient>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_subscriber_fetches() {
        assert!(should_fetch(0, None, None));
    }

    #[test]
    fn test_concurrent_subscriber_attaches_to_pending_fetch() {
        assert!(!should_fetch(0, Some(0), None));
    }

    #[test]
    fn test_loaded_epoch_is_not_refetched() {
        assert!(!should_fetch(0, None, Some(0)));
    }

    #[test]
    fn test_invalidation_forces_refetch() {
        // Epoch bumped to 1; the stale flight and stale result do not count
        assert!(should_fetch(1, Some(0), Some(0)));
    }
}
