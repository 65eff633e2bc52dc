//! # Store Aggregate
//!
//! One handle bundling every repository plus the auth service.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Store Construction                               │
//! │                                                                         │
//! │  StoreConfig { latency, sample_data }                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Store::new(config) ← seed rows (or empty), build repositories         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │                Store                     │                           │
//! │  │  products()  suppliers()  branches()    │  each accessor hands      │
//! │  │  warehouses() customers() users()       │  out an Arc to the one    │
//! │  │  roles() permissions() orders()         │  shared repository        │
//! │  │  online_orders() route_orders()         │                           │
//! │  │  inventory() movements() alerts()       │                           │
//! │  │  auth()                                 │                           │
//! │  └─────────────────────────────────────────┘                           │
//! │       │                                                                 │
//! │       │ Store is Clone; clones share all collections                   │
//! │       ▼                                                                 │
//! │  Binding 1 ──► store.products()                                        │
//! │  Binding 2 ──► store.orders()                                          │
//! │  (Bindings hold only the repositories they read)                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There are no module-level singletons: every consumer receives its
//! repositories from a `Store` value built at startup.

use std::sync::Arc;

use tracing::info;

use crate::auth::AuthService;
use crate::config::StoreConfig;
use crate::repository::branch::BranchRepository;
use crate::repository::customer::CustomerRepository;
use crate::repository::inventory::{AlertRepository, InventoryRepository};
use crate::repository::movement::MovementRepository;
use crate::repository::online_order::OnlineOrderRepository;
use crate::repository::order::OrderRepository;
use crate::repository::permission::PermissionRepository;
use crate::repository::product::ProductRepository;
use crate::repository::role::RoleRepository;
use crate::repository::route_order::RouteOrderRepository;
use crate::repository::supplier::SupplierRepository;
use crate::repository::user::UserRepository;
use crate::repository::warehouse::WarehouseRepository;
use crate::seed::{self, SeedData};

/// Main store handle providing repository access.
///
/// ## Usage
/// ```rust,ignore
/// let store = Store::new(StoreConfig::default());
/// let products = store.products().get_all().await?;
/// let user = store.auth().login("admin@sugaros.mx", "caramelo").await?;
/// ```
#[derive(Debug, Clone)]
pub struct Store {
    products: Arc<ProductRepository>,
    suppliers: Arc<SupplierRepository>,
    branches: Arc<BranchRepository>,
    warehouses: Arc<WarehouseRepository>,
    customers: Arc<CustomerRepository>,
    users: Arc<UserRepository>,
    roles: Arc<RoleRepository>,
    permissions: Arc<PermissionRepository>,
    orders: Arc<OrderRepository>,
    online_orders: Arc<OnlineOrderRepository>,
    route_orders: Arc<RouteOrderRepository>,
    inventory: Arc<InventoryRepository>,
    movements: Arc<MovementRepository>,
    alerts: Arc<AlertRepository>,
    auth: AuthService,
}

impl Store {
    /// Builds a store from the given configuration.
    ///
    /// Construction is synchronous: the collections live in memory, so
    /// there is nothing to connect to.
    pub fn new(config: StoreConfig) -> Self {
        let data = if config.sample_data {
            seed::sample_data()
        } else {
            SeedData::default()
        };

        info!(
            sample_data = config.sample_data,
            read_ms = config.latency.read_delay().as_millis() as u64,
            write_ms = config.latency.write_delay().as_millis() as u64,
            "Opening mock store"
        );

        let latency = config.latency;
        let users = Arc::new(UserRepository::new(data.users, latency));
        let auth = AuthService::new(Arc::clone(&users), latency);

        Store {
            products: Arc::new(ProductRepository::new(data.products, latency)),
            suppliers: Arc::new(SupplierRepository::new(data.suppliers, latency)),
            branches: Arc::new(BranchRepository::new(data.branches, latency)),
            warehouses: Arc::new(WarehouseRepository::new(data.warehouses, latency)),
            customers: Arc::new(CustomerRepository::new(data.customers, latency)),
            users,
            roles: Arc::new(RoleRepository::new(data.roles, latency)),
            permissions: Arc::new(PermissionRepository::new(data.permissions, latency)),
            orders: Arc::new(OrderRepository::new(data.orders, latency)),
            online_orders: Arc::new(OnlineOrderRepository::new(data.online_orders, latency)),
            route_orders: Arc::new(RouteOrderRepository::new(data.route_orders, latency)),
            inventory: Arc::new(InventoryRepository::new(data.inventory, latency)),
            movements: Arc::new(MovementRepository::new(data.movements, latency)),
            alerts: Arc::new(AlertRepository::new(data.alerts, latency)),
            auth,
        }
    }

    /// A store with the default configuration: standard latency and the
    /// full sample dataset.
    pub fn seeded() -> Self {
        Self::new(StoreConfig::default())
    }

    /// A store with no rows and no delays. What tests want.
    pub fn empty() -> Self {
        Self::new(StoreConfig::instant())
    }

    /// Returns the product repository.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let low = store.products().get_low_stock().await?;
    /// ```
    pub fn products(&self) -> Arc<ProductRepository> {
        Arc::clone(&self.products)
    }

    /// Returns the supplier repository.
    pub fn suppliers(&self) -> Arc<SupplierRepository> {
        Arc::clone(&self.suppliers)
    }

    /// Returns the branch repository.
    pub fn branches(&self) -> Arc<BranchRepository> {
        Arc::clone(&self.branches)
    }

    /// Returns the warehouse repository.
    pub fn warehouses(&self) -> Arc<WarehouseRepository> {
        Arc::clone(&self.warehouses)
    }

    /// Returns the customer repository.
    pub fn customers(&self) -> Arc<CustomerRepository> {
        Arc::clone(&self.customers)
    }

    /// Returns the user repository.
    pub fn users(&self) -> Arc<UserRepository> {
        Arc::clone(&self.users)
    }

    /// Returns the role repository.
    pub fn roles(&self) -> Arc<RoleRepository> {
        Arc::clone(&self.roles)
    }

    /// Returns the permission repository.
    pub fn permissions(&self) -> Arc<PermissionRepository> {
        Arc::clone(&self.permissions)
    }

    /// Returns the in-store order repository.
    pub fn orders(&self) -> Arc<OrderRepository> {
        Arc::clone(&self.orders)
    }

    /// Returns the online order repository.
    pub fn online_orders(&self) -> Arc<OnlineOrderRepository> {
        Arc::clone(&self.online_orders)
    }

    /// Returns the route order repository.
    pub fn route_orders(&self) -> Arc<RouteOrderRepository> {
        Arc::clone(&self.route_orders)
    }

    /// Returns the inventory repository.
    pub fn inventory(&self) -> Arc<InventoryRepository> {
        Arc::clone(&self.inventory)
    }

    /// Returns the movement repository.
    pub fn movements(&self) -> Arc<MovementRepository> {
        Arc::clone(&self.movements)
    }

    /// Returns the alert repository.
    pub fn alerts(&self) -> Arc<AlertRepository> {
        Arc::clone(&self.alerts)
    }

    /// Returns the authentication service.
    pub fn auth(&self) -> AuthService {
        self.auth.clone()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
