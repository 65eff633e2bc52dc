//! # Entity Types
//!
//! All entity record types for Sugar OS, grouped by console area.
//!
//! ## Organization
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  catalog    Product, Supplier, Branch, Warehouse                        │
//! │  orders     Order, OnlineOrder, RouteOrder, Customer, OrderItem         │
//! │  inventory  InventoryItem, InventoryMovement, InventoryAlert            │
//! │  identity   User, Role, Permission (+ assembled module views)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every stored entity follows the same shape:
//! - `id`: UUID v4 string - immutable, assigned by the store on create
//! - denormalized relations: foreign id + cached display name
//! - server timestamps: `created_at`, plus `updated_at` where the
//!   record is routinely edited
//!
//! Each entity comes with a draft type (`NewX`, the create payload) and a
//! patch type (`XPatch`, the shallow-merge update payload).

pub mod catalog;
pub mod identity;
pub mod inventory;
pub mod orders;

pub use catalog::*;
pub use identity::*;
pub use inventory::*;
pub use orders::*;

// =============================================================================
// Entity Trait
// =============================================================================

/// Minimal contract every stored record satisfies, letting the store
/// layer be generic over entity types.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Entity kind name used in error messages and logs ("Product").
    const KIND: &'static str;

    /// The unique identifier.
    fn id(&self) -> &str;
}
