//! # Inventory Repository
//!
//! Mock data access for per-warehouse stock items and the alerts raised
//! against them.
//!
//! ## The Adjustment Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │              adjust_quantity(id, delta): the ONLY path that             │
//! │              derives stock state                                        │
//! │                                                                         │
//! │   quantity:         quantity + delta, saturating  ← clamped at zero    │
//! │   status:           StockStatus::for_levels(...)  ← recomputed         │
//! │   last_movement_at: Some(now)                     ← stamped            │
//! │   updated_at:       now                           ← stamped            │
//! │                                                                         │
//! │   update(id, patch) by contrast merges caller values verbatim:         │
//! │   a patched quantity keeps the old status and last_movement_at.        │
//! │                                                                         │
//! │   Pairing an adjustment with its movement record is the CALLER's       │
//! │   job (two separate calls, non-atomic). See the movement module.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::collection::{generate_id, Collection};
use crate::error::StoreResult;
use crate::latency::Latency;
use crate::repository::Repository;
use sugar_core::{
    AlertStatus, InventoryAlert, InventoryAlertPatch, InventoryItem, InventoryItemPatch,
    NewInventoryAlert, NewInventoryItem, StockStatus,
};

// =============================================================================
// Inventory Items
// =============================================================================

/// Read filters for stock lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InventoryQuery {
    /// Every stock item.
    #[default]
    All,
    /// Stock held in one warehouse.
    Warehouse(String),
    /// Stock of one product across warehouses.
    Product(String),
    /// Items at or below their low-stock threshold.
    LowStock,
    /// Substring search over product name and SKU.
    Search(String),
}

/// Repository for per-warehouse stock data access.
#[derive(Debug, Clone)]
pub struct InventoryRepository {
    items: Collection<InventoryItem>,
    latency: Latency,
}

impl InventoryRepository {
    /// Creates a new InventoryRepository over the given rows.
    pub fn new(rows: Vec<InventoryItem>, latency: Latency) -> Self {
        InventoryRepository {
            items: Collection::new(rows),
            latency,
        }
    }

    /// Returns every stock item.
    pub async fn get_all(&self) -> StoreResult<Vec<InventoryItem>> {
        self.latency.read().await;
        Ok(self.items.all().await)
    }

    /// Gets a stock item by its ID.
    pub async fn get_by_id(&self, id: &str) -> StoreResult<Option<InventoryItem>> {
        self.latency.read().await;
        Ok(self.items.find(id).await)
    }

    /// Returns stock held in the given warehouse.
    pub async fn get_by_warehouse_id(&self, warehouse_id: &str) -> StoreResult<Vec<InventoryItem>> {
        self.latency.read().await;
        Ok(self
            .items
            .filter(|i| i.warehouse_id == warehouse_id)
            .await)
    }

    /// Returns stock of the given product across all warehouses.
    pub async fn get_by_product_id(&self, product_id: &str) -> StoreResult<Vec<InventoryItem>> {
        self.latency.read().await;
        Ok(self.items.filter(|i| i.product_id == product_id).await)
    }

    /// Returns items at or below their low-stock threshold.
    pub async fn get_low_stock(&self) -> StoreResult<Vec<InventoryItem>> {
        self.latency.read().await;
        Ok(self.items.filter(|i| i.is_low_stock()).await)
    }

    /// Searches stock items by product name or SKU.
    pub async fn search(&self, query: &str) -> StoreResult<Vec<InventoryItem>> {
        self.latency.read().await;

        let needle = query.trim().to_lowercase();
        debug!(query = %needle, "Searching inventory");

        if needle.is_empty() {
            return Ok(self.items.all().await);
        }

        Ok(self
            .items
            .filter(|i| {
                i.product_name.to_lowercase().contains(&needle)
                    || i.product_sku.to_lowercase().contains(&needle)
            })
            .await)
    }

    /// Stores a new stock item; `status` is derived from the starting
    /// quantity and levels.
    pub async fn create(&self, draft: NewInventoryItem) -> StoreResult<InventoryItem> {
        self.latency.write().await;

        let item = draft.into_inventory_item(generate_id(), Utc::now());
        debug!(id = %item.id, sku = %item.product_sku, "Creating inventory item");

        Ok(self.items.insert(item).await)
    }

    /// Shallow-merges a patch and stamps `updated_at`.
    ///
    /// Patched values are stored verbatim: `status` is not recomputed and
    /// `last_movement_at` is not touched. Quantity changes that should
    /// derive state go through [`adjust_quantity`](Self::adjust_quantity).
    pub async fn update(&self, id: &str, patch: InventoryItemPatch) -> StoreResult<InventoryItem> {
        self.latency.write().await;
        debug!(id = %id, "Updating inventory item");

        self.items
            .update(id, move |item| {
                patch.apply(item);
                item.updated_at = Utc::now();
            })
            .await
    }

    /// Applies a signed quantity delta to a stock item.
    ///
    /// The addition saturates at the `i32` limits and the result is
    /// clamped at zero. `status` is recomputed from the new quantity,
    /// and both `last_movement_at` and `updated_at` are stamped. This is
    /// the second half of applying a movement; recording the movement
    /// itself is a separate call.
    pub async fn adjust_quantity(&self, id: &str, delta: i32) -> StoreResult<InventoryItem> {
        self.latency.write().await;
        debug!(id = %id, delta = delta, "Adjusting inventory quantity");

        self.items
            .update(id, move |item| {
                let now = Utc::now();
                item.quantity = item.quantity.saturating_add(delta).max(0);
                item.status = StockStatus::for_levels(item.quantity, item.min_stock, item.max_stock);
                item.last_movement_at = Some(now);
                item.updated_at = now;
            })
            .await
    }

    /// Removes a stock item.
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        self.latency.write().await;
        debug!(id = %id, "Deleting inventory item");

        self.items.remove(id).await.map(|_| ())
    }
}

#[async_trait]
impl Repository for InventoryRepository {
    type Entity = InventoryItem;
    type Draft = NewInventoryItem;
    type Patch = InventoryItemPatch;
    type Query = InventoryQuery;

    async fn load(&self, query: &InventoryQuery) -> StoreResult<Vec<InventoryItem>> {
        match query {
            InventoryQuery::All => self.get_all().await,
            InventoryQuery::Warehouse(warehouse_id) => self.get_by_warehouse_id(warehouse_id).await,
            InventoryQuery::Product(product_id) => self.get_by_product_id(product_id).await,
            InventoryQuery::LowStock => self.get_low_stock().await,
            InventoryQuery::Search(text) => self.search(text).await,
        }
    }

    async fn find(&self, id: &str) -> StoreResult<Option<InventoryItem>> {
        self.get_by_id(id).await
    }

    async fn create(&self, draft: NewInventoryItem) -> StoreResult<InventoryItem> {
        InventoryRepository::create(self, draft).await
    }

    async fn update(&self, id: &str, patch: InventoryItemPatch) -> StoreResult<InventoryItem> {
        InventoryRepository::update(self, id, patch).await
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        InventoryRepository::delete(self, id).await
    }
}

// =============================================================================
// Inventory Alerts
// =============================================================================

/// Read filters for the alert list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertQuery {
    /// Every alert, resolved ones included.
    #[default]
    All,
    /// Alerts still needing attention (`Active` or `Acknowledged`).
    Active,
}

/// Repository for stock alert data access.
#[derive(Debug, Clone)]
pub struct AlertRepository {
    alerts: Collection<InventoryAlert>,
    latency: Latency,
}

impl AlertRepository {
    /// Creates a new AlertRepository over the given rows.
    pub fn new(rows: Vec<InventoryAlert>, latency: Latency) -> Self {
        AlertRepository {
            alerts: Collection::new(rows),
            latency,
        }
    }

    /// Returns every alert.
    pub async fn get_all(&self) -> StoreResult<Vec<InventoryAlert>> {
        self.latency.read().await;
        Ok(self.alerts.all().await)
    }

    /// Gets an alert by its ID.
    pub async fn get_by_id(&self, id: &str) -> StoreResult<Option<InventoryAlert>> {
        self.latency.read().await;
        Ok(self.alerts.find(id).await)
    }

    /// Returns alerts not yet resolved. Acknowledged alerts still count:
    /// someone has seen them, nobody has handled them.
    pub async fn get_active(&self) -> StoreResult<Vec<InventoryAlert>> {
        self.latency.read().await;
        Ok(self.alerts.filter(|a| a.is_open()).await)
    }

    /// Raises a new alert. New alerts start `Active`.
    pub async fn create(&self, draft: NewInventoryAlert) -> StoreResult<InventoryAlert> {
        self.latency.write().await;

        let alert = draft.into_alert(generate_id(), Utc::now());
        debug!(id = %alert.id, kind = ?alert.alert_type, "Raising alert");

        Ok(self.alerts.insert(alert).await)
    }

    /// Shallow-merges a patch into an existing alert. A `status` set this
    /// way does not stamp `resolved_at`.
    pub async fn update(&self, id: &str, patch: InventoryAlertPatch) -> StoreResult<InventoryAlert> {
        self.latency.write().await;
        debug!(id = %id, "Updating alert");

        self.alerts
            .update(id, move |alert| patch.apply(alert))
            .await
    }

    /// Marks an alert as seen without closing it.
    pub async fn acknowledge(&self, id: &str) -> StoreResult<InventoryAlert> {
        self.latency.write().await;
        debug!(id = %id, "Acknowledging alert");

        self.alerts
            .update(id, |alert| alert.status = AlertStatus::Acknowledged)
            .await
    }

    /// Closes an alert and stamps `resolved_at`.
    pub async fn resolve(&self, id: &str) -> StoreResult<InventoryAlert> {
        self.latency.write().await;
        debug!(id = %id, "Resolving alert");

        self.alerts
            .update(id, |alert| {
                alert.status = AlertStatus::Resolved;
                alert.resolved_at = Some(Utc::now());
            })
            .await
    }

    /// Removes an alert.
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        self.latency.write().await;
        debug!(id = %id, "Deleting alert");

        self.alerts.remove(id).await.map(|_| ())
    }
}

#[async_trait]
impl Repository for AlertRepository {
    type Entity = InventoryAlert;
    type Draft = NewInventoryAlert;
    type Patch = InventoryAlertPatch;
    type Query = AlertQuery;

    async fn load(&self, query: &AlertQuery) -> StoreResult<Vec<InventoryAlert>> {
        match query {
            AlertQuery::All => self.get_all().await,
            AlertQuery::Active => self.get_active().await,
        }
    }

    async fn find(&self, id: &str) -> StoreResult<Option<InventoryAlert>> {
        self.get_by_id(id).await
    }

    async fn create(&self, draft: NewInventoryAlert) -> StoreResult<InventoryAlert> {
        AlertRepository::create(self, draft).await
    }

    async fn update(&self, id: &str, patch: InventoryAlertPatch) -> StoreResult<InventoryAlert> {
        AlertRepository::update(self, id, patch).await
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        AlertRepository::delete(self, id).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use sugar_core::AlertType;

    fn sample_draft(sku: &str, warehouse_id: &str, quantity: i32) -> NewInventoryItem {
        NewInventoryItem {
            product_id: "p-1".to_string(),
            product_name: "Chocolate Bar 45g".to_string(),
            product_sku: sku.to_string(),
            warehouse_id: warehouse_id.to_string(),
            warehouse_name: "Bodega Central".to_string(),
            quantity,
            min_stock: 10,
            max_stock: 200,
        }
    }

    fn sample_alert(product_name: &str) -> NewInventoryAlert {
        NewInventoryAlert {
            inventory_item_id: "inv-1".to_string(),
            product_name: product_name.to_string(),
            warehouse_name: "Bodega Central".to_string(),
            alert_type: AlertType::LowStock,
            message: "Only 8 left, minimum is 10".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_derives_status() {
        let repo = InventoryRepository::new(vec![], Latency::none());

        let item = repo
            .create(sample_draft("CHO-045", "wh-1", 500))
            .await
            .unwrap();

        assert_eq!(item.status, StockStatus::OverStock);
        assert!(item.last_movement_at.is_none());
    }

    #[tokio::test]
    async fn test_adjust_quantity_recomputes_and_stamps() {
        let repo = InventoryRepository::new(vec![], Latency::none());
        let item = repo
            .create(sample_draft("CHO-045", "wh-1", 40))
            .await
            .unwrap();
        assert_eq!(item.status, StockStatus::InStock);

        let adjusted = repo.adjust_quantity(&item.id, -32).await.unwrap();

        assert_eq!(adjusted.quantity, 8);
        assert_eq!(adjusted.status, StockStatus::LowStock);
        assert!(adjusted.last_movement_at.is_some());
        assert!(adjusted.updated_at >= item.updated_at);
    }

    #[tokio::test]
    async fn test_adjust_quantity_clamps_at_zero() {
        let repo = InventoryRepository::new(vec![], Latency::none());
        let item = repo
            .create(sample_draft("CHO-045", "wh-1", 5))
            .await
            .unwrap();

        let adjusted = repo.adjust_quantity(&item.id, -20).await.unwrap();

        assert_eq!(adjusted.quantity, 0);
        assert_eq!(adjusted.status, StockStatus::OutOfStock);
    }

    #[tokio::test]
    async fn test_adjust_quantity_saturates_on_extreme_delta() {
        let repo = InventoryRepository::new(vec![], Latency::none());
        let item = repo
            .create(sample_draft("CHO-045", "wh-1", 40))
            .await
            .unwrap();

        let adjusted = repo.adjust_quantity(&item.id, i32::MAX).await.unwrap();

        assert_eq!(adjusted.quantity, i32::MAX);
        assert_eq!(adjusted.status, StockStatus::OverStock);
    }

    #[tokio::test]
    async fn test_patch_does_not_recompute_status() {
        let repo = InventoryRepository::new(vec![], Latency::none());
        let item = repo
            .create(sample_draft("CHO-045", "wh-1", 40))
            .await
            .unwrap();

        let patch = InventoryItemPatch {
            quantity: Some(0),
            ..InventoryItemPatch::default()
        };
        let updated = repo.update(&item.id, patch).await.unwrap();

        assert_eq!(updated.quantity, 0);
        assert_eq!(updated.status, StockStatus::InStock);
        assert!(updated.last_movement_at.is_none());
    }

    #[tokio::test]
    async fn test_low_stock_includes_boundary() {
        let repo = InventoryRepository::new(vec![], Latency::none());
        repo.create(sample_draft("CHO-045", "wh-1", 10))
            .await
            .unwrap();
        repo.create(sample_draft("GUM-500", "wh-1", 11))
            .await
            .unwrap();

        let low = repo.get_low_stock().await.unwrap();
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].product_sku, "CHO-045");
    }

    #[tokio::test]
    async fn test_warehouse_filter_and_sku_search() {
        let repo = InventoryRepository::new(vec![], Latency::none());
        repo.create(sample_draft("CHO-045", "wh-1", 40))
            .await
            .unwrap();
        repo.create(sample_draft("GUM-500", "wh-2", 40))
            .await
            .unwrap();

        let central = repo.get_by_warehouse_id("wh-1").await.unwrap();
        assert_eq!(central.len(), 1);

        let by_sku = repo.search("gum-5").await.unwrap();
        assert_eq!(by_sku.len(), 1);
        assert_eq!(by_sku[0].warehouse_id, "wh-2");
    }

    #[tokio::test]
    async fn test_acknowledged_alert_stays_active() {
        let repo = AlertRepository::new(vec![], Latency::none());
        let alert = repo.create(sample_alert("Chocolate Bar 45g")).await.unwrap();
        assert_eq!(alert.status, AlertStatus::Active);

        let seen = repo.acknowledge(&alert.id).await.unwrap();
        assert_eq!(seen.status, AlertStatus::Acknowledged);
        assert!(seen.resolved_at.is_none());

        let active = repo.get_active().await.unwrap();
        assert_eq!(active.len(), 1);
    }

    #[tokio::test]
    async fn test_resolve_stamps_and_hides_from_active() {
        let repo = AlertRepository::new(vec![], Latency::none());
        let alert = repo.create(sample_alert("Chocolate Bar 45g")).await.unwrap();
        repo.create(sample_alert("Gomitas Surtidas 500g"))
            .await
            .unwrap();

        let resolved = repo.resolve(&alert.id).await.unwrap();
        assert_eq!(resolved.status, AlertStatus::Resolved);
        assert!(resolved.resolved_at.is_some());

        let active = repo.get_active().await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].product_name, "Gomitas Surtidas 500g");

        // Resolved alerts stay in the full list for history
        assert_eq!(repo.get_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_resolve_missing_id_fails() {
        let repo = AlertRepository::new(vec![], Latency::none());
        let err = repo.resolve("ghost").await.unwrap_err();
        assert_eq!(err.to_string(), "InventoryAlert not found: ghost");
    }
}
