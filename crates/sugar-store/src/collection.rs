//! # Generic Collection
//!
//! The in-memory table every repository is built on.
//!
//! ## Defensive Copies
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Why Every Read Clones                                │
//! │                                                                         │
//! │  Collection<Product>                                                   │
//! │  ┌──────────────────────────────┐                                      │
//! │  │ Arc<RwLock<Vec<Product>>>    │ ← the only authoritative rows        │
//! │  └──────────────────────────────┘                                      │
//! │       │                                                                 │
//! │       │ all() / find() / filter()                                       │
//! │       ▼                                                                 │
//! │  Vec<Product> (clones) ──► caller mutates freely                       │
//! │                                                                         │
//! │  Caller edits NEVER reach the collection. The only write paths are     │
//! │  insert / update / remove / replace_all, and those also hand back      │
//! │  clones of what was stored.                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Locking
//! `tokio::sync::RwLock` so concurrent reads do not serialize. Guards are
//! held only for the Vec scan itself; the simulated latency always happens
//! before the lock is taken.

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use sugar_core::Entity;

/// A shared, clonable in-memory table of one entity type.
///
/// Cloning a `Collection` clones the handle, not the rows: all clones see
/// the same data.
#[derive(Debug)]
pub struct Collection<E: Entity> {
    rows: Arc<RwLock<Vec<E>>>,
}

impl<E: Entity> Clone for Collection<E> {
    fn clone(&self) -> Self {
        Collection {
            rows: Arc::clone(&self.rows),
        }
    }
}

impl<E: Entity> Collection<E> {
    /// Creates a collection holding the given rows.
    pub fn new(rows: Vec<E>) -> Self {
        Collection {
            rows: Arc::new(RwLock::new(rows)),
        }
    }

    /// Number of rows.
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    /// True when the collection holds no rows.
    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }

    /// Clones every row, preserving insertion order.
    pub async fn all(&self) -> Vec<E> {
        self.rows.read().await.clone()
    }

    /// Clones the row with the given id, if present.
    pub async fn find(&self, id: &str) -> Option<E> {
        self.rows
            .read()
            .await
            .iter()
            .find(|row| row.id() == id)
            .cloned()
    }

    /// Clones every row matching the predicate, preserving order.
    pub async fn filter<F>(&self, predicate: F) -> Vec<E>
    where
        F: Fn(&E) -> bool,
    {
        self.rows
            .read()
            .await
            .iter()
            .filter(|row| predicate(row))
            .cloned()
            .collect()
    }

    /// Appends a row and returns a clone of what was stored.
    pub async fn insert(&self, row: E) -> E {
        let stored = row.clone();
        self.rows.write().await.push(row);
        stored
    }

    /// Applies `mutate` to the row with the given id and returns a clone
    /// of the result.
    ///
    /// ## Returns
    /// * `Ok(E)` - the row after mutation
    /// * `Err(StoreError::NotFound)` - no row has that id
    pub async fn update<F>(&self, id: &str, mutate: F) -> StoreResult<E>
    where
        F: FnOnce(&mut E),
    {
        let mut rows = self.rows.write().await;
        match rows.iter_mut().find(|row| row.id() == id) {
            Some(row) => {
                mutate(row);
                Ok(row.clone())
            }
            None => Err(StoreError::not_found(E::KIND, id)),
        }
    }

    /// Removes the row with the given id and returns it.
    ///
    /// ## Returns
    /// * `Ok(E)` - the removed row
    /// * `Err(StoreError::NotFound)` - no row has that id
    pub async fn remove(&self, id: &str) -> StoreResult<E> {
        let mut rows = self.rows.write().await;
        match rows.iter().position(|row| row.id() == id) {
            Some(index) => Ok(rows.remove(index)),
            None => Err(StoreError::not_found(E::KIND, id)),
        }
    }

    /// Replaces the entire contents, dropping whatever was stored.
    pub async fn replace_all(&self, rows: Vec<E>) {
        *self.rows.write().await = rows;
    }
}

/// Generates a fresh entity id.
///
/// ## Usage
/// ```rust,ignore
/// let product = draft.into_product(generate_id(), Utc::now());
/// ```
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
