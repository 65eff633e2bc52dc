//! # List Binding State
//!
//! One generic binding drives every entity list in the console.
//!
//! ## State Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    List Binding Operations                              │
//! │                                                                         │
//! │  UI Action                Binding Method          Snapshot Change       │
//! │  ─────────                ──────────────          ───────────────       │
//! │                                                                         │
//! │  Screen opens ───────────► load() ──────────────► loading: true         │
//! │                               │                                         │
//! │                               ▼ repo.load(&query) (latency here)        │
//! │                                                                         │
//! │                            resolves ────────────► items replaced,       │
//! │                                                   error cleared,        │
//! │                                                   loading: false        │
//! │                                                                         │
//! │  Filter changes ─────────► set_query(q) ────────► same as load()        │
//! │                                                                         │
//! │  Form submits ───────────► create(draft) ───────► items + server record │
//! │                                                                         │
//! │  Row edited ─────────────► update(id, patch) ───► record replaced       │
//! │                                                                         │
//! │  Row removed ────────────► delete(id) ──────────► record removed        │
//! │                                                                         │
//! │  Screen closes ──────────► close() ─────────────► snapshot frozen       │
//! │                                                                         │
//! │  NOTE: Every patch applies the SERVER response after the call           │
//! │        resolves. The binding never guesses at the outcome.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Handling
//! A failed call stores the error's display string in the snapshot and,
//! for writes, also returns the `Err` so the calling form can react. Items
//! are left exactly as they were.
//!
//! ## The Close Guard
//! There is no cancellation anywhere in the store: an in-flight call always
//! completes. `close()` is what keeps that completion from patching state
//! that belongs to a screen the user already left. The repository write
//! still lands; only the snapshot stays frozen.

use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;
use tracing::{debug, warn};

use sugar_core::Entity;
use sugar_store::{Repository, StoreResult};

/// Point-in-time copy of one list's state.
///
/// Snapshots are defensive copies. Mutating one never touches the binding
/// or the repository.
#[derive(Debug, Clone, Serialize)]
pub struct ListSnapshot<E> {
    /// The rows as of the last applied server response.
    pub items: Vec<E>,
    /// Whether a `load` is in flight.
    pub loading: bool,
    /// Display message of the last failed call, if any.
    pub error: Option<String>,
}

/// Mutable state behind the binding's lock.
struct Inner<R: Repository> {
    items: Vec<R::Entity>,
    query: R::Query,
    loading: bool,
    error: Option<String>,
    closed: bool,
}

/// Binds one repository to reactive snapshot state.
///
/// ## Thread Safety
/// State lives in `Arc<Mutex<_>>` so clones share one snapshot, the same
/// way `Store` clones share collections. The lock is held only to copy
/// state in or out, never across a repository call.
///
/// ## Example
/// ```rust,ignore
/// let products = ListState::new(store.products());
/// products.load().await;
/// for product in products.items() {
///     println!("{}", product.name);
/// }
/// ```
pub struct ListState<R: Repository> {
    repo: Arc<R>,
    inner: Arc<Mutex<Inner<R>>>,
}

impl<R: Repository> ListState<R> {
    /// Binds a repository with the default (unfiltered) query.
    ///
    /// No I/O happens until the first `load`.
    pub fn new(repo: Arc<R>) -> Self {
        ListState::with_query(repo, R::Query::default())
    }

    /// Binds a repository with an initial query.
    pub fn with_query(repo: Arc<R>, query: R::Query) -> Self {
        ListState {
            repo,
            inner: Arc::new(Mutex::new(Inner {
                items: Vec::new(),
                query,
                loading: false,
                error: None,
                closed: false,
            })),
        }
    }

    /// Runs the current query and applies the response.
    ///
    /// `loading` transitions false → true → false exactly once. On success
    /// the items are replaced and any prior error is cleared; on failure
    /// the previous items stay and the error message is stored.
    pub async fn load(&self) {
        let query = {
            let mut inner = self.lock();
            if !inner.closed {
                inner.loading = true;
            }
            inner.query.clone()
        };

        let result = self.repo.load(&query).await;

        let mut inner = self.lock();
        if inner.closed {
            return;
        }
        inner.loading = false;
        match result {
            Ok(items) => {
                debug!(entity = R::Entity::KIND, count = items.len(), "List loaded");
                inner.items = items;
                inner.error = None;
            }
            Err(e) => {
                warn!(entity = R::Entity::KIND, error = %e, "List load failed");
                inner.error = Some(e.to_string());
            }
        }
    }

    /// Re-runs the current query.
    pub async fn refresh(&self) {
        self.load().await;
    }

    /// Replaces the query and reloads.
    pub async fn set_query(&self, query: R::Query) {
        {
            let mut inner = self.lock();
            inner.query = query;
        }
        self.load().await;
    }

    /// Creates a record and appends the server-returned copy to the list.
    ///
    /// The returned record carries the server-assigned id and timestamps;
    /// that copy is what lands in the snapshot, never the draft.
    pub async fn create(&self, draft: R::Draft) -> StoreResult<R::Entity> {
        let result = self.repo.create(draft).await;

        let mut inner = self.lock();
        if inner.closed {
            return result;
        }
        match &result {
            Ok(created) => {
                inner.items.push(created.clone());
                inner.error = None;
            }
            Err(e) => {
                warn!(entity = R::Entity::KIND, error = %e, "Create failed");
                inner.error = Some(e.to_string());
            }
        }
        result
    }

    /// Updates a record and replaces the matching row with the server copy.
    ///
    /// A row that is not currently in the list (filtered out, or loaded
    /// elsewhere) updates in the repository without a snapshot change.
    pub async fn update(&self, id: &str, patch: R::Patch) -> StoreResult<R::Entity> {
        let result = self.repo.update(id, patch).await;

        let mut inner = self.lock();
        if inner.closed {
            return result;
        }
        match &result {
            Ok(updated) => {
                if let Some(row) = inner.items.iter_mut().find(|item| item.id() == id) {
                    *row = updated.clone();
                }
                inner.error = None;
            }
            Err(e) => {
                warn!(entity = R::Entity::KIND, error = %e, "Update failed");
                inner.error = Some(e.to_string());
            }
        }
        result
    }

    /// Deletes a record and removes the matching row.
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        let result = self.repo.delete(id).await;

        let mut inner = self.lock();
        if inner.closed {
            return result;
        }
        match &result {
            Ok(()) => {
                inner.items.retain(|item| item.id() != id);
                inner.error = None;
            }
            Err(e) => {
                warn!(entity = R::Entity::KIND, error = %e, "Delete failed");
                inner.error = Some(e.to_string());
            }
        }
        result
    }

    /// Copies out the full snapshot.
    pub fn snapshot(&self) -> ListSnapshot<R::Entity> {
        let inner = self.lock();
        ListSnapshot {
            items: inner.items.clone(),
            loading: inner.loading,
            error: inner.error.clone(),
        }
    }

    /// Copies out the current rows.
    pub fn items(&self) -> Vec<R::Entity> {
        self.lock().items.clone()
    }

    /// Whether a `load` is in flight.
    pub fn is_loading(&self) -> bool {
        self.lock().loading
    }

    /// Display message of the last failed call, if any.
    pub fn error(&self) -> Option<String> {
        self.lock().error.clone()
    }

    /// Freezes the snapshot for teardown.
    ///
    /// In-flight and future calls still run against the repository and
    /// still return their results; they just stop patching this state.
    pub fn close(&self) {
        self.lock().closed = true;
    }

    /// Whether `close` has been called.
    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    fn lock(&self) -> MutexGuard<'_, Inner<R>> {
        self.inner.lock().expect("List state mutex poisoned")
    }
}

impl<R: Repository> Clone for ListState<R> {
    fn clone(&self) -> Self {
        ListState {
            repo: Arc::clone(&self.repo),
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sugar_core::{NewProduct, ProductCategory, ProductPatch, ProductUnit};
    use sugar_store::{Latency, ProductQuery, ProductRepository};

    fn sample_draft(name: &str, sku: &str) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            sku: sku.to_string(),
            description: String::new(),
            category: ProductCategory::Chocolates,
            unit: ProductUnit::Piece,
            price_cents: 2500,
            cost_cents: 1400,
            stock: 40,
            min_stock: 10,
            supplier_id: "sup-1".to_string(),
            supplier_name: "Dulces del Valle".to_string(),
        }
    }

    async fn seeded_repo() -> Arc<ProductRepository> {
        let repo = Arc::new(ProductRepository::new(vec![], Latency::none()));
        repo.create(sample_draft("Chocolate Bar 45g", "CHO-045"))
            .await
            .unwrap();
        repo.create(sample_draft("Gummy Bears 150g", "GUM-150"))
            .await
            .unwrap();
        repo.create(sample_draft("Mint Lollipop", "LOL-MEN"))
            .await
            .unwrap();
        repo
    }

    #[tokio::test]
    async fn test_load_replaces_items_and_clears_error() {
        let state = ListState::new(seeded_repo().await);

        // A failed write leaves an error behind
        let err = state.delete("ghost").await.unwrap_err();
        assert_eq!(err.to_string(), "Product not found: ghost");
        assert_eq!(state.error().as_deref(), Some("Product not found: ghost"));

        state.load().await;

        assert_eq!(state.items().len(), 3);
        assert_eq!(state.error(), None);
        assert!(!state.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn test_loading_flag_spans_the_request() {
        let repo = Arc::new(ProductRepository::new(vec![], Latency::from_millis(100, 200)));
        let state = ListState::new(repo);
        assert!(!state.is_loading());

        let task = tokio::spawn({
            let state = state.clone();
            async move { state.load().await }
        });
        tokio::task::yield_now().await;

        // The spawned load is parked on its latency sleep
        assert!(state.is_loading());

        task.await.unwrap();
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn test_create_appends_server_record() {
        let state = ListState::new(seeded_repo().await);
        state.load().await;
        assert_eq!(state.items().len(), 3);

        let created = state.create(sample_draft("X", "X-001")).await.unwrap();

        let items = state.items();
        assert_eq!(items.len(), 4);
        assert_eq!(items[3].name, "X");
        assert_eq!(items[3].id, created.id);
        assert!(!items[3].id.is_empty());
    }

    #[tokio::test]
    async fn test_failed_update_records_error_and_keeps_items() {
        let state = ListState::new(seeded_repo().await);
        state.load().await;

        let patch = ProductPatch {
            name: Some("Renamed".to_string()),
            ..ProductPatch::default()
        };
        let result = state.update("missing-id", patch).await;

        assert!(result.is_err());
        assert_eq!(
            state.error().as_deref(),
            Some("Product not found: missing-id")
        );
        let items = state.items();
        assert_eq!(items.len(), 3);
        assert!(items.iter().all(|p| p.name != "Renamed"));
    }

    #[tokio::test]
    async fn test_update_replaces_matching_row() {
        let state = ListState::new(seeded_repo().await);
        state.load().await;
        let target = state.items()[1].clone();

        let patch = ProductPatch {
            price_cents: Some(2800),
            ..ProductPatch::default()
        };
        state.update(&target.id, patch).await.unwrap();

        let items = state.items();
        assert_eq!(items.len(), 3);
        assert_eq!(items[1].id, target.id);
        assert_eq!(items[1].price_cents, 2800);
        assert_eq!(items[1].name, "Gummy Bears 150g");
    }

    #[tokio::test]
    async fn test_delete_removes_row() {
        let state = ListState::new(seeded_repo().await);
        state.load().await;
        let target_id = state.items()[0].id.clone();

        state.delete(&target_id).await.unwrap();

        let items = state.items();
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|p| p.id != target_id));
    }

    #[tokio::test]
    async fn test_set_query_reloads_with_filter() {
        let state = ListState::new(seeded_repo().await);
        state.load().await;
        assert_eq!(state.items().len(), 3);

        state
            .set_query(ProductQuery::Search("gummy".to_string()))
            .await;

        let items = state.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].sku, "GUM-150");
    }

    #[tokio::test]
    async fn test_close_freezes_snapshot_while_write_lands() {
        let repo = seeded_repo().await;
        let state = ListState::new(Arc::clone(&repo));
        state.load().await;

        state.close();
        assert!(state.is_closed());

        let created = state.create(sample_draft("Late Arrival", "LATE-01")).await.unwrap();

        // The write reached the repository
        assert_eq!(created.name, "Late Arrival");
        assert_eq!(repo.get_all().await.unwrap().len(), 4);
        // The snapshot did not move
        assert_eq!(state.items().len(), 3);
        assert_eq!(state.error(), None);
    }

    #[tokio::test]
    async fn test_snapshot_is_a_copy() {
        let state = ListState::new(seeded_repo().await);
        state.load().await;

        let mut snapshot = state.snapshot();
        snapshot.items.clear();
        snapshot.error = Some("local only".to_string());

        assert_eq!(state.items().len(), 3);
        assert_eq!(state.error(), None);
    }

    #[tokio::test]
    async fn test_clones_share_one_snapshot() {
        let state = ListState::new(seeded_repo().await);
        let view = state.clone();

        state.load().await;

        assert_eq!(view.items().len(), 3);
    }
}
