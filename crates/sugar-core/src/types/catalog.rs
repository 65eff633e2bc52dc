//! # Catalog Types
//!
//! Entity records for the catalog side of the console: products,
//! suppliers, branches, and warehouses.
//!
//! ## Record / Draft / Patch
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Product        the stored record (id + server timestamps)             │
//! │  NewProduct     what a caller supplies to create()                     │
//! │  ProductPatch   what a caller supplies to update(): every mutable      │
//! │                 field as Option; None = keep the prior value           │
//! │                                                                         │
//! │  NewProduct ──create()──► Product ◄──update()── ProductPatch           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Relations are denormalized: a record copies the foreign id plus a cached
//! display name (e.g. `Product.supplier_id` + `Product.supplier_name`).
//! Nothing here recomputes cached fields; they change only when a caller
//! writes them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Entity;

// =============================================================================
// Product Category
// =============================================================================

/// Fixed product categorization for the candy catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Chocolates,
    Gummies,
    HardCandy,
    Lollipops,
    Marshmallows,
    Gum,
    Beverages,
    Seasonal,
}

// =============================================================================
// Product Unit
// =============================================================================

/// Unit a product is sold in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ProductUnit {
    /// Single piece.
    Piece,
    /// Sealed bag.
    Bag,
    /// Retail box.
    Box,
    /// Sold by weight.
    Kilogram,
    /// Counter display carton.
    Display,
}

impl Default for ProductUnit {
    fn default() -> Self {
        ProductUnit::Piece
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the chain-wide catalog.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name shown across the console.
    pub name: String,

    /// Stock Keeping Unit - business identifier.
    pub sku: String,

    /// Free-form description for the product detail view.
    pub description: String,

    /// Category, constrained to the fixed enumeration.
    pub category: ProductCategory,

    /// Sales unit, constrained to the fixed enumeration.
    pub unit: ProductUnit,

    /// Sale price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Acquisition cost in cents (for margin views).
    pub cost_cents: i64,

    /// Catalog-level stock count. Kept non-negative by the inventory
    /// adjustment path; a plain update stores whatever it is given.
    pub stock: i32,

    /// Threshold below which the product counts as low stock.
    pub min_stock: i32,

    /// Supplier relation (denormalized).
    pub supplier_id: String,

    /// Cached supplier display name; not refreshed when the supplier changes.
    pub supplier_name: String,

    /// Whether the product is visible in the console.
    pub is_active: bool,

    /// When the product was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the product was last updated (server-maintained).
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Returns the sale price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Returns the acquisition cost as a Money type.
    #[inline]
    pub fn cost(&self) -> Money {
        Money::from_cents(self.cost_cents)
    }

    /// Checks whether the product sits at or below its low-stock threshold.
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.min_stock
    }
}

impl Entity for Product {
    const KIND: &'static str = "Product";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Caller-supplied fields for creating a product.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewProduct {
    pub name: String,
    pub sku: String,
    pub description: String,
    pub category: ProductCategory,
    pub unit: ProductUnit,
    pub price_cents: i64,
    pub cost_cents: i64,
    pub stock: i32,
    pub min_stock: i32,
    pub supplier_id: String,
    pub supplier_name: String,
}

impl NewProduct {
    /// Materializes the stored record. The server assigns `id` and both
    /// timestamps; new products start active.
    pub fn into_product(self, id: String, now: DateTime<Utc>) -> Product {
        Product {
            id,
            name: self.name,
            sku: self.sku,
            description: self.description,
            category: self.category,
            unit: self.unit,
            price_cents: self.price_cents,
            cost_cents: self.cost_cents,
            stock: self.stock,
            min_stock: self.min_stock,
            supplier_id: self.supplier_id,
            supplier_name: self.supplier_name,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update for a product. `None` keeps the prior value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub description: Option<String>,
    pub category: Option<ProductCategory>,
    pub unit: Option<ProductUnit>,
    pub price_cents: Option<i64>,
    pub cost_cents: Option<i64>,
    pub stock: Option<i32>,
    pub min_stock: Option<i32>,
    pub supplier_id: Option<String>,
    pub supplier_name: Option<String>,
    pub is_active: Option<bool>,
}

impl ProductPatch {
    /// Shallow-merges the patch over an existing record.
    pub fn apply(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(sku) = &self.sku {
            product.sku = sku.clone();
        }
        if let Some(description) = &self.description {
            product.description = description.clone();
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(unit) = self.unit {
            product.unit = unit;
        }
        if let Some(price_cents) = self.price_cents {
            product.price_cents = price_cents;
        }
        if let Some(cost_cents) = self.cost_cents {
            product.cost_cents = cost_cents;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
        if let Some(min_stock) = self.min_stock {
            product.min_stock = min_stock;
        }
        if let Some(supplier_id) = &self.supplier_id {
            product.supplier_id = supplier_id.clone();
        }
        if let Some(supplier_name) = &self.supplier_name {
            product.supplier_name = supplier_name.clone();
        }
        if let Some(is_active) = self.is_active {
            product.is_active = is_active;
        }
    }
}

// =============================================================================
// Supplier
// =============================================================================

/// A supplier the chain buys from.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Supplier {
    /// Unique identifier (UUID v4).
    pub id: String,
    pub name: String,
    /// Tax registration id. Unique in practice, not enforced.
    pub rfc: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub is_active: bool,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Entity for Supplier {
    const KIND: &'static str = "Supplier";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Caller-supplied fields for creating a supplier.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewSupplier {
    pub name: String,
    pub rfc: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl NewSupplier {
    pub fn into_supplier(self, id: String, now: DateTime<Utc>) -> Supplier {
        Supplier {
            id,
            name: self.name,
            rfc: self.rfc,
            contact_name: self.contact_name,
            email: self.email,
            phone: self.phone,
            address: self.address,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update for a supplier.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SupplierPatch {
    pub name: Option<String>,
    pub rfc: Option<String>,
    pub contact_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub is_active: Option<bool>,
}

impl SupplierPatch {
    /// Shallow-merges the patch over an existing record.
    pub fn apply(&self, supplier: &mut Supplier) {
        if let Some(name) = &self.name {
            supplier.name = name.clone();
        }
        if let Some(rfc) = &self.rfc {
            supplier.rfc = rfc.clone();
        }
        if let Some(contact_name) = &self.contact_name {
            supplier.contact_name = contact_name.clone();
        }
        if let Some(email) = &self.email {
            supplier.email = email.clone();
        }
        if let Some(phone) = &self.phone {
            supplier.phone = phone.clone();
        }
        if let Some(address) = &self.address {
            supplier.address = address.clone();
        }
        if let Some(is_active) = self.is_active {
            supplier.is_active = is_active;
        }
    }
}

// =============================================================================
// Branch
// =============================================================================

/// A physical store location.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Branch {
    /// Unique identifier (UUID v4).
    pub id: String,
    pub name: String,
    /// Short business code ("CEN-01").
    pub code: String,
    pub address: String,
    pub phone: String,
    pub manager_name: String,
    /// Opening hour, "HH:MM" local time.
    pub opening_time: String,
    /// Closing hour, "HH:MM" local time.
    pub closing_time: String,
    /// Cached count of warehouses attached to this branch. Never
    /// recomputed from the warehouse list; protected across update.
    pub warehouse_count: u32,
    pub is_active: bool,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Entity for Branch {
    const KIND: &'static str = "Branch";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Caller-supplied fields for creating a branch.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewBranch {
    pub name: String,
    pub code: String,
    pub address: String,
    pub phone: String,
    pub manager_name: String,
    pub opening_time: String,
    pub closing_time: String,
}

impl NewBranch {
    /// New branches start with no warehouses attached.
    pub fn into_branch(self, id: String, now: DateTime<Utc>) -> Branch {
        Branch {
            id,
            name: self.name,
            code: self.code,
            address: self.address,
            phone: self.phone,
            manager_name: self.manager_name,
            opening_time: self.opening_time,
            closing_time: self.closing_time,
            warehouse_count: 0,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update for a branch.
///
/// `warehouse_count` is accepted for wire compatibility but ignored by
/// `apply`: the cached count is protected and survives any update verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BranchPatch {
    pub name: Option<String>,
    pub code: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub manager_name: Option<String>,
    pub opening_time: Option<String>,
    pub closing_time: Option<String>,
    pub warehouse_count: Option<u32>,
    pub is_active: Option<bool>,
}

impl BranchPatch {
    /// Shallow-merges the patch over an existing record.
    /// `warehouse_count` is protected and never written here.
    pub fn apply(&self, branch: &mut Branch) {
        if let Some(name) = &self.name {
            branch.name = name.clone();
        }
        if let Some(code) = &self.code {
            branch.code = code.clone();
        }
        if let Some(address) = &self.address {
            branch.address = address.clone();
        }
        if let Some(phone) = &self.phone {
            branch.phone = phone.clone();
        }
        if let Some(manager_name) = &self.manager_name {
            branch.manager_name = manager_name.clone();
        }
        if let Some(opening_time) = &self.opening_time {
            branch.opening_time = opening_time.clone();
        }
        if let Some(closing_time) = &self.closing_time {
            branch.closing_time = closing_time.clone();
        }
        if let Some(is_active) = self.is_active {
            branch.is_active = is_active;
        }
    }
}

// =============================================================================
// Warehouse Type
// =============================================================================

/// Kind of storage location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum WarehouseType {
    /// Chain-wide distribution center.
    Central,
    /// Back room of a branch.
    Branch,
    /// Delivery truck serving a route.
    RouteTruck,
}

impl Default for WarehouseType {
    fn default() -> Self {
        WarehouseType::Branch
    }
}

// =============================================================================
// Warehouse
// =============================================================================

/// A storage location attached to a branch.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Warehouse {
    /// Unique identifier (UUID v4).
    pub id: String,
    pub name: String,
    /// Branch relation (denormalized).
    pub branch_id: String,
    /// Cached branch display name.
    pub branch_name: String,
    pub warehouse_type: WarehouseType,
    /// Maximum units this location holds. `current_stock ≤ capacity` is
    /// expected but not enforced anywhere.
    pub capacity: i32,
    pub current_stock: i32,
    pub is_active: bool,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Entity for Warehouse {
    const KIND: &'static str = "Warehouse";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Caller-supplied fields for creating a warehouse.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewWarehouse {
    pub name: String,
    pub branch_id: String,
    pub branch_name: String,
    pub warehouse_type: WarehouseType,
    pub capacity: i32,
    pub current_stock: i32,
}

impl NewWarehouse {
    pub fn into_warehouse(self, id: String, now: DateTime<Utc>) -> Warehouse {
        Warehouse {
            id,
            name: self.name,
            branch_id: self.branch_id,
            branch_name: self.branch_name,
            warehouse_type: self.warehouse_type,
            capacity: self.capacity,
            current_stock: self.current_stock,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update for a warehouse.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WarehousePatch {
    pub name: Option<String>,
    pub branch_id: Option<String>,
    pub branch_name: Option<String>,
    pub warehouse_type: Option<WarehouseType>,
    pub capacity: Option<i32>,
    pub current_stock: Option<i32>,
    pub is_active: Option<bool>,
}

impl WarehousePatch {
    /// Shallow-merges the patch over an existing record.
    pub fn apply(&self, warehouse: &mut Warehouse) {
        if let Some(name) = &self.name {
            warehouse.name = name.clone();
        }
        if let Some(branch_id) = &self.branch_id {
            warehouse.branch_id = branch_id.clone();
        }
        if let Some(branch_name) = &self.branch_name {
            warehouse.branch_name = branch_name.clone();
        }
        if let Some(warehouse_type) = self.warehouse_type {
            warehouse.warehouse_type = warehouse_type;
        }
        if let Some(capacity) = self.capacity {
            warehouse.capacity = capacity;
        }
        if let Some(current_stock) = self.current_stock {
            warehouse.current_stock = current_stock;
        }
        if let Some(is_active) = self.is_active {
            warehouse.is_active = is_active;
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        NewProduct {
            name: "Gummy Bears 500g".to_string(),
            sku: "GUM-500".to_string(),
            description: "Classic fruit gummy bears".to_string(),
            category: ProductCategory::Gummies,
            unit: ProductUnit::Bag,
            price_cents: 299,
            cost_cents: 150,
            stock: 40,
            min_stock: 10,
            supplier_id: "sup-1".to_string(),
            supplier_name: "Dulces del Norte".to_string(),
        }
        .into_product("prod-1".to_string(), Utc::now())
    }

    #[test]
    fn test_new_product_materialization() {
        let product = sample_product();
        assert_eq!(product.id, "prod-1");
        assert_eq!(product.sku, "GUM-500");
        assert!(product.is_active);
        assert_eq!(product.created_at, product.updated_at);
        assert_eq!(product.price(), Money::from_cents(299));
    }

    #[test]
    fn test_product_patch_is_partial() {
        let mut product = sample_product();
        let patch = ProductPatch {
            price_cents: Some(349),
            ..ProductPatch::default()
        };
        patch.apply(&mut product);

        assert_eq!(product.price_cents, 349);
        // Everything else is untouched
        assert_eq!(product.name, "Gummy Bears 500g");
        assert_eq!(product.sku, "GUM-500");
        assert_eq!(product.stock, 40);
        assert!(product.is_active);
    }

    #[test]
    fn test_low_stock_threshold_is_inclusive() {
        let mut product = sample_product();
        product.stock = 10;
        assert!(product.is_low_stock());
        product.stock = 11;
        assert!(!product.is_low_stock());
    }

    #[test]
    fn test_branch_patch_protects_warehouse_count() {
        let mut branch = NewBranch {
            name: "Centro".to_string(),
            code: "CEN-01".to_string(),
            address: "Av. Juárez 100".to_string(),
            phone: "555-0100".to_string(),
            manager_name: "Laura P.".to_string(),
            opening_time: "08:00".to_string(),
            closing_time: "21:00".to_string(),
        }
        .into_branch("br-1".to_string(), Utc::now());
        branch.warehouse_count = 2;

        let patch = BranchPatch {
            name: Some("Centro Histórico".to_string()),
            warehouse_count: Some(999),
            ..BranchPatch::default()
        };
        patch.apply(&mut branch);

        assert_eq!(branch.name, "Centro Histórico");
        assert_eq!(branch.warehouse_count, 2);
    }

    #[test]
    fn test_empty_patch_changes_nothing() {
        let original = sample_product();
        let mut patched = original.clone();
        ProductPatch::default().apply(&mut patched);

        assert_eq!(patched.name, original.name);
        assert_eq!(patched.price_cents, original.price_cents);
        assert_eq!(patched.supplier_id, original.supplier_id);
    }

    #[test]
    fn test_status_enum_serde_names() {
        let json = serde_json::to_string(&ProductCategory::HardCandy).unwrap();
        assert_eq!(json, "\"hard_candy\"");
        let json = serde_json::to_string(&WarehouseType::RouteTruck).unwrap();
        assert_eq!(json, "\"route_truck\"");
    }
}
