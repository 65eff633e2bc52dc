//! # sugar-store: Mock Data Layer for Sugar OS
//!
//! This crate provides the in-memory mock backend for the Sugar OS
//! console. It keeps every collection in process memory, simulates
//! request latency, and exposes backend-shaped repositories so the
//! layers above are written as if a real service existed.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Sugar OS Data Flow                               │
//! │                                                                         │
//! │  Binding layer (sugar-state: ListState / SessionState)                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    sugar-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │     Store     │    │  Repositories │    │     Seed     │  │   │
//! │  │   │  (store.rs)   │    │ (product.rs)  │    │  (seed.rs)   │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ StoreConfig   │    │ ProductRepo   │    │ sample roles │  │   │
//! │  │   │ AuthService   │◄───│ OrderRepo     │    │ products     │  │   │
//! │  │   │ Latency       │    │ ... (14)      │    │ orders ...   │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Collection<E> (Vec behind tokio RwLock)            │   │
//! │  │        defensive copies in, defensive copies out                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The aggregate handle and its construction
//! - [`config`] - Construction-time configuration
//! - [`latency`] - Simulated request delays
//! - [`collection`] - The shared in-memory row container
//! - [`repository`] - Repository implementations (one per entity)
//! - [`auth`] - Mock credential checking
//! - [`seed`] - The sample dataset
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sugar_store::{Store, StoreConfig};
//!
//! // Open the store with sample data and standard delays
//! let store = Store::new(StoreConfig::default());
//!
//! // Use repositories
//! let products = store.products().search("chocolate").await?;
//!
//! // Authenticate
//! let user = store.auth().login("admin@sugaros.mx", "caramelo").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod auth;
pub mod collection;
pub mod config;
pub mod error;
pub mod latency;
pub mod repository;
pub mod seed;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use auth::AuthService;
pub use collection::{generate_id, Collection};
pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use latency::Latency;
pub use seed::{sample_data, SeedData};
pub use store::Store;

// Repository re-exports for convenience
pub use repository::branch::{BranchQuery, BranchRepository};
pub use repository::customer::{CustomerQuery, CustomerRepository};
pub use repository::inventory::{
    AlertQuery, AlertRepository, InventoryQuery, InventoryRepository,
};
pub use repository::movement::{MovementQuery, MovementRepository};
pub use repository::online_order::{OnlineOrderQuery, OnlineOrderRepository};
pub use repository::order::{OrderQuery, OrderRepository};
pub use repository::permission::{PermissionQuery, PermissionRepository};
pub use repository::product::{ProductQuery, ProductRepository};
pub use repository::role::{RoleQuery, RoleRepository};
pub use repository::route_order::{RouteOrderQuery, RouteOrderRepository};
pub use repository::supplier::{SupplierQuery, SupplierRepository};
pub use repository::user::{UserQuery, UserRepository};
pub use repository::warehouse::{WarehouseQuery, WarehouseRepository};
pub use repository::Repository;
