//! # Repository Module
//!
//! In-memory repository implementations for Sugar OS.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  Each entity type gets one repository with the same five operations.   │
//! │                                                                         │
//! │  Binding layer (sugar-state)                                           │
//! │       │                                                                 │
//! │       │  repo.load(&ProductQuery::Search("chocolate"))                 │
//! │       │  ↓                                                              │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── get_all() / get_by_id(id)        ← reads, never fail             │
//! │  ├── get_by_category() / search()     ← typed filters                 │
//! │  ├── create(draft)                    ← assigns id + timestamps       │
//! │  ├── update(id, patch)                ← shallow merge, NotFound       │
//! │  └── delete(id)                       ← NotFound on missing id        │
//! │       │                                                                 │
//! │       │  simulated latency, then Vec scan                              │
//! │       ▼                                                                 │
//! │  Collection<Product> (in-memory rows)                                  │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • The UI layer is written against a backend-shaped API                │
//! │  • Swapping in a real backend touches only this crate                  │
//! │  • Tests construct repositories directly with zero latency            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`product::ProductRepository`] - Catalog products
//! - [`supplier::SupplierRepository`] - Suppliers
//! - [`branch::BranchRepository`] - Branches
//! - [`warehouse::WarehouseRepository`] - Warehouses
//! - [`customer::CustomerRepository`] - Customers
//! - [`user::UserRepository`] - Console users
//! - [`role::RoleRepository`] - Roles
//! - [`permission::PermissionRepository`] - Permission catalog
//! - [`order::OrderRepository`] - In-store orders
//! - [`online_order::OnlineOrderRepository`] - Web-shop orders
//! - [`route_order::RouteOrderRepository`] - Route/delivery orders
//! - [`inventory::InventoryRepository`] - Stock levels per warehouse
//! - [`inventory::AlertRepository`] - Stock alerts
//! - [`movement::MovementRepository`] - Stock movement log

use async_trait::async_trait;

use crate::error::StoreResult;
use sugar_core::Entity;

pub mod branch;
pub mod customer;
pub mod inventory;
pub mod movement;
pub mod online_order;
pub mod order;
pub mod permission;
pub mod product;
pub mod role;
pub mod route_order;
pub mod supplier;
pub mod user;
pub mod warehouse;

/// The uniform face of every repository.
///
/// The binding layer (`sugar-state`) is generic over this trait: one
/// `ListState<R>` implementation drives all fourteen repositories. The
/// concrete repositories keep their typed filter methods as inherent
/// functions; `load` is the dispatch point that turns a [`Query`] value
/// into the right one.
///
/// [`Query`]: Repository::Query
#[async_trait]
pub trait Repository: Send + Sync + 'static {
    /// The stored entity type.
    type Entity: Entity;

    /// Caller-supplied fields for `create`.
    type Draft: Send;

    /// Partial update for `update`. Absent fields preserve current values.
    type Patch: Send;

    /// Read filter. `Default` must be the unfiltered variant.
    type Query: Clone + Default + Send + Sync;

    /// Runs the read selected by `query`.
    async fn load(&self, query: &Self::Query) -> StoreResult<Vec<Self::Entity>>;

    /// Looks up a single record. A miss is `Ok(None)`, not an error.
    async fn find(&self, id: &str) -> StoreResult<Option<Self::Entity>>;

    /// Materializes and stores a new record, returning a copy of it.
    async fn create(&self, draft: Self::Draft) -> StoreResult<Self::Entity>;

    /// Shallow-merges a patch into an existing record.
    async fn update(&self, id: &str, patch: Self::Patch) -> StoreResult<Self::Entity>;

    /// Removes a record.
    async fn delete(&self, id: &str) -> StoreResult<()>;
}
