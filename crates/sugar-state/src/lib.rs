//! # sugar-state: Console State Bindings for Sugar OS
//!
//! The layer the console UI talks to. Every screen binds a repository
//! through [`ListState`] and reads snapshots; the login screen drives
//! [`SessionState`].
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Sugar OS Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Console UI (out of scope)                    │   │
//! │  │    reads snapshots, calls binding methods                       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ sugar-state (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────────────────────┐  ┌──────────────────────────┐   │   │
//! │  │   │  ListState<R>            │  │  SessionState            │   │   │
//! │  │   │  items / loading / error │  │  user / redirects        │   │   │
//! │  │   │  close() teardown guard  │  │  dashboard allow-list    │   │   │
//! │  │   └──────────────────────────┘  └──────────────────────────┘   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    sugar-store (mock data layer)                │   │
//! │  │    In-memory repositories + simulated latency                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`binding`] - Generic list binding over any repository
//! - [`session`] - Signed-in user and redirect policy
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sugar_state::{ProductsState, SessionState};
//! use sugar_store::{Store, StoreConfig};
//!
//! let store = Store::new(StoreConfig::default());
//!
//! let session = SessionState::new(store.auth());
//! session.login("admin@sugaros.mx", "caramelo").await?;
//!
//! let products = ProductsState::new(store.products());
//! products.load().await;
//! let snapshot = products.snapshot();
//!
//! // Screen teardown: in-flight calls finish, the snapshot stays put
//! products.close();
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod binding;
pub mod session;

// =============================================================================
// Re-exports
// =============================================================================

pub use binding::{ListSnapshot, ListState};
pub use session::{SessionSnapshot, SessionState};

use sugar_store::{
    AlertRepository, BranchRepository, CustomerRepository, InventoryRepository,
    MovementRepository, OnlineOrderRepository, OrderRepository, PermissionRepository,
    ProductRepository, RoleRepository, RouteOrderRepository, SupplierRepository, UserRepository,
    WarehouseRepository,
};

// =============================================================================
// Per-Entity Aliases
// =============================================================================
// One name per console screen, all the same binding underneath.

/// Catalog product list.
pub type ProductsState = ListState<ProductRepository>;
/// Supplier list.
pub type SuppliersState = ListState<SupplierRepository>;
/// Branch list.
pub type BranchesState = ListState<BranchRepository>;
/// Warehouse list.
pub type WarehousesState = ListState<WarehouseRepository>;
/// Customer list.
pub type CustomersState = ListState<CustomerRepository>;
/// Console user list.
pub type UsersState = ListState<UserRepository>;
/// Role list.
pub type RolesState = ListState<RoleRepository>;
/// Permission catalog list.
pub type PermissionsState = ListState<PermissionRepository>;
/// In-store order list.
pub type OrdersState = ListState<OrderRepository>;
/// Web-shop order list.
pub type OnlineOrdersState = ListState<OnlineOrderRepository>;
/// Route/delivery order list.
pub type RouteOrdersState = ListState<RouteOrderRepository>;
/// Stock level list.
pub type InventoryState = ListState<InventoryRepository>;
/// Stock movement log.
pub type MovementsState = ListState<MovementRepository>;
/// Stock alert list.
pub type AlertsState = ListState<AlertRepository>;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use sugar_store::{Store, StoreConfig};

    #[tokio::test]
    async fn test_aliases_bind_store_repositories() {
        let store = Store::new(StoreConfig::instant());

        let products = ProductsState::new(store.products());
        let alerts = AlertsState::new(store.alerts());
        products.load().await;
        alerts.load().await;

        assert_eq!(products.items().len(), 0);
        assert_eq!(alerts.items().len(), 0);
    }

    #[tokio::test]
    async fn test_binding_sees_seeded_rows() {
        let store = Store::new(StoreConfig::instant().with_sample_data(true));

        let customers = CustomersState::new(store.customers());
        customers.load().await;

        assert!(!customers.items().is_empty());
    }

    #[tokio::test]
    async fn test_two_bindings_share_one_repository() {
        let store = Store::new(StoreConfig::instant());

        let screen_a = OrdersState::new(store.orders());
        let screen_b = OrdersState::new(store.orders());
        assert!(Arc::ptr_eq(&store.orders(), &store.orders()));

        screen_a.load().await;
        screen_b.load().await;
        assert_eq!(screen_a.items().len(), screen_b.items().len());
    }
}
