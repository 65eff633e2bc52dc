//! # Inventory Types
//!
//! Entity records for inventory tracking: per-warehouse stock items, the
//! movements that change them, and stock alerts.
//!
//! ## The Two-Step Movement Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Recording a movement and applying it are SEPARATE calls:              │
//! │                                                                         │
//! │   1. movements.create(NewInventoryMovement { qty: -12, ... })          │
//! │   2. inventory.adjust_quantity(item_id, -12)                           │
//! │                                                                         │
//! │  Nothing ties them together. A caller can record without applying,     │
//! │  apply without recording, or crash in between. NON-ATOMIC BY DESIGN.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `InventoryItem.status` is derived from quantity vs min/max levels at
//! creation and by the adjustment path; a plain update stores caller
//! values verbatim and derives nothing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::Entity;

// =============================================================================
// Stock Status
// =============================================================================

/// Classification of an inventory item's quantity against its levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
    OverStock,
}

impl Default for StockStatus {
    fn default() -> Self {
        StockStatus::InStock
    }
}

impl StockStatus {
    /// Classifies a quantity against min/max levels.
    ///
    /// ## Example
    /// ```rust
    /// use sugar_core::types::StockStatus;
    ///
    /// assert_eq!(StockStatus::for_levels(0, 10, 100), StockStatus::OutOfStock);
    /// assert_eq!(StockStatus::for_levels(8, 10, 100), StockStatus::LowStock);
    /// assert_eq!(StockStatus::for_levels(50, 10, 100), StockStatus::InStock);
    /// assert_eq!(StockStatus::for_levels(120, 10, 100), StockStatus::OverStock);
    /// ```
    pub fn for_levels(quantity: i32, min_stock: i32, max_stock: i32) -> Self {
        if quantity <= 0 {
            StockStatus::OutOfStock
        } else if quantity <= min_stock {
            StockStatus::LowStock
        } else if quantity > max_stock {
            StockStatus::OverStock
        } else {
            StockStatus::InStock
        }
    }
}

// =============================================================================
// Inventory Item
// =============================================================================

/// Stock of one product in one warehouse.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InventoryItem {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Product relation (denormalized).
    pub product_id: String,
    /// Cached product display name.
    pub product_name: String,
    /// Cached product SKU.
    pub product_sku: String,

    /// Warehouse relation (denormalized).
    pub warehouse_id: String,
    /// Cached warehouse display name.
    pub warehouse_name: String,

    /// Units on hand. Kept non-negative by `adjust_quantity` (clamped);
    /// a plain update stores whatever it is given.
    pub quantity: i32,
    pub min_stock: i32,
    pub max_stock: i32,

    /// Derived classification; see module docs for when it is recomputed.
    pub status: StockStatus,

    /// When the quantity last changed through the adjustment path.
    #[ts(as = "Option<String>")]
    pub last_movement_at: Option<DateTime<Utc>>,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl InventoryItem {
    /// Checks whether the item sits at or below its low-stock threshold.
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.min_stock
    }
}

impl Entity for InventoryItem {
    const KIND: &'static str = "InventoryItem";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Caller-supplied fields for creating an inventory item.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewInventoryItem {
    pub product_id: String,
    pub product_name: String,
    pub product_sku: String,
    pub warehouse_id: String,
    pub warehouse_name: String,
    pub quantity: i32,
    pub min_stock: i32,
    pub max_stock: i32,
}

impl NewInventoryItem {
    /// Materializes the stored record; `status` is derived from the
    /// starting quantity and levels.
    pub fn into_inventory_item(self, id: String, now: DateTime<Utc>) -> InventoryItem {
        let status = StockStatus::for_levels(self.quantity, self.min_stock, self.max_stock);
        InventoryItem {
            id,
            product_id: self.product_id,
            product_name: self.product_name,
            product_sku: self.product_sku,
            warehouse_id: self.warehouse_id,
            warehouse_name: self.warehouse_name,
            quantity: self.quantity,
            min_stock: self.min_stock,
            max_stock: self.max_stock,
            status,
            last_movement_at: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update for an inventory item.
///
/// Merging is verbatim: setting `quantity` here does NOT re-derive
/// `status` and does not touch `last_movement_at`. The adjustment path
/// owns both.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InventoryItemPatch {
    pub product_name: Option<String>,
    pub product_sku: Option<String>,
    pub warehouse_name: Option<String>,
    pub quantity: Option<i32>,
    pub min_stock: Option<i32>,
    pub max_stock: Option<i32>,
    pub status: Option<StockStatus>,
}

impl InventoryItemPatch {
    /// Shallow-merges the patch over an existing record.
    pub fn apply(&self, item: &mut InventoryItem) {
        if let Some(product_name) = &self.product_name {
            item.product_name = product_name.clone();
        }
        if let Some(product_sku) = &self.product_sku {
            item.product_sku = product_sku.clone();
        }
        if let Some(warehouse_name) = &self.warehouse_name {
            item.warehouse_name = warehouse_name.clone();
        }
        if let Some(quantity) = self.quantity {
            item.quantity = quantity;
        }
        if let Some(min_stock) = self.min_stock {
            item.min_stock = min_stock;
        }
        if let Some(max_stock) = self.max_stock {
            item.max_stock = max_stock;
        }
        if let Some(status) = self.status {
            item.status = status;
        }
    }
}

// =============================================================================
// Movement Type
// =============================================================================

/// Direction/kind of an inventory movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum MovementType {
    /// Goods received into the warehouse.
    In,
    /// Goods leaving the warehouse (sale, dispatch).
    Out,
    /// Manual correction after a count.
    Adjustment,
    /// Stock moved between warehouses.
    Transfer,
}

// =============================================================================
// Inventory Movement
// =============================================================================

/// A recorded change of stock. Recording a movement does not change any
/// item quantity; see the module docs.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InventoryMovement {
    /// Unique identifier (UUID v4).
    pub id: String,
    /// Inventory item relation (denormalized).
    pub inventory_item_id: String,
    /// Cached product display name.
    pub product_name: String,
    pub warehouse_id: String,
    pub warehouse_name: String,
    pub movement_type: MovementType,
    /// Units moved; sign convention is the caller's (deltas are applied
    /// separately through the adjustment path).
    pub quantity: i32,
    /// Why the movement happened ("weekly count", "damaged goods").
    pub reason: Option<String>,
    /// Business reference, e.g. an order number.
    pub reference: Option<String>,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Entity for InventoryMovement {
    const KIND: &'static str = "InventoryMovement";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Caller-supplied fields for recording a movement.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewInventoryMovement {
    pub inventory_item_id: String,
    pub product_name: String,
    pub warehouse_id: String,
    pub warehouse_name: String,
    pub movement_type: MovementType,
    pub quantity: i32,
    pub reason: Option<String>,
    pub reference: Option<String>,
}

impl NewInventoryMovement {
    pub fn into_movement(self, id: String, now: DateTime<Utc>) -> InventoryMovement {
        InventoryMovement {
            id,
            inventory_item_id: self.inventory_item_id,
            product_name: self.product_name,
            warehouse_id: self.warehouse_id,
            warehouse_name: self.warehouse_name,
            movement_type: self.movement_type,
            quantity: self.quantity,
            reason: self.reason,
            reference: self.reference,
            created_at: now,
        }
    }
}

/// Partial update for a movement record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InventoryMovementPatch {
    pub movement_type: Option<MovementType>,
    pub quantity: Option<i32>,
    pub reason: Option<String>,
    pub reference: Option<String>,
}

impl InventoryMovementPatch {
    /// Shallow-merges the patch over an existing record.
    pub fn apply(&self, movement: &mut InventoryMovement) {
        if let Some(movement_type) = self.movement_type {
            movement.movement_type = movement_type;
        }
        if let Some(quantity) = self.quantity {
            movement.quantity = quantity;
        }
        if let Some(reason) = &self.reason {
            movement.reason = Some(reason.clone());
        }
        if let Some(reference) = &self.reference {
            movement.reference = Some(reference.clone());
        }
    }
}

// =============================================================================
// Alert Type / Status
// =============================================================================

/// What kind of stock problem an alert reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    LowStock,
    OutOfStock,
    OverStock,
}

/// Lifecycle of an alert in the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    /// Raised and unhandled.
    Active,
    /// Someone has seen it.
    Acknowledged,
    /// Handled; kept for history.
    Resolved,
}

impl Default for AlertStatus {
    fn default() -> Self {
        AlertStatus::Active
    }
}

// =============================================================================
// Inventory Alert
// =============================================================================

/// A stock alert shown on the inventory dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InventoryAlert {
    /// Unique identifier (UUID v4).
    pub id: String,
    pub inventory_item_id: String,
    pub product_name: String,
    pub warehouse_name: String,
    pub alert_type: AlertType,
    /// Human-readable message shown in the console.
    pub message: String,
    pub status: AlertStatus,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[ts(as = "Option<String>")]
    pub resolved_at: Option<DateTime<Utc>>,
}

impl InventoryAlert {
    /// Whether the alert still needs attention.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.status != AlertStatus::Resolved
    }
}

impl Entity for InventoryAlert {
    const KIND: &'static str = "InventoryAlert";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Caller-supplied fields for raising an alert.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewInventoryAlert {
    pub inventory_item_id: String,
    pub product_name: String,
    pub warehouse_name: String,
    pub alert_type: AlertType,
    pub message: String,
}

impl NewInventoryAlert {
    /// Materializes the stored record; new alerts start `Active`.
    pub fn into_alert(self, id: String, now: DateTime<Utc>) -> InventoryAlert {
        InventoryAlert {
            id,
            inventory_item_id: self.inventory_item_id,
            product_name: self.product_name,
            warehouse_name: self.warehouse_name,
            alert_type: self.alert_type,
            message: self.message,
            status: AlertStatus::default(),
            created_at: now,
            resolved_at: None,
        }
    }
}

/// Partial update for an alert.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InventoryAlertPatch {
    pub message: Option<String>,
    pub status: Option<AlertStatus>,
}

impl InventoryAlertPatch {
    /// Shallow-merges the patch over an existing record.
    /// Setting `status` here does not stamp `resolved_at`; the
    /// repository's `resolve` is the stamping path.
    pub fn apply(&self, alert: &mut InventoryAlert) {
        if let Some(message) = &self.message {
            alert.message = message.clone();
        }
        if let Some(status) = self.status {
            alert.status = status;
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
