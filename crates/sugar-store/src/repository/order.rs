//! # Order Repository
//!
//! Mock data access for in-store orders.
//!
//! ## Two Update Paths
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Plain Patch vs. Status Transition                    │
//! │                                                                         │
//! │  update(id, patch)                                                     │
//! │  ────────────────                                                      │
//! │  • Shallow merge of whatever fields are present                        │
//! │  • May set `status`, but stamps NO transition timestamp                │
//! │  • The edit form uses this                                             │
//! │                                                                         │
//! │  update_status(id, status)                                             │
//! │  ─────────────────────────                                             │
//! │  • Sets `status` AND stamps confirmed_at / completed_at /              │
//! │    cancelled_at for the status entered                                 │
//! │  • The list-row action buttons use this                                │
//! │                                                                         │
//! │  Totals are never recomputed by either path: subtotal, tax,            │
//! │  discount, and total are caller-supplied and stored verbatim.          │
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
use sugar_core::{NewOrder, Order, OrderPatch, OrderStatus};

/// Read filters for in-store order lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderQuery {
    /// Every order.
    #[default]
    All,
    /// Orders in one status.
    Status(OrderStatus),
    /// Orders served from one warehouse.
    Warehouse(String),
    /// Orders for one customer.
    Customer(String),
    /// Substring search over order number and customer name.
    Search(String),
}

/// Repository for in-store order data access.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    orders: Collection<Order>,
    latency: Latency,
}

impl OrderRepository {
    /// Creates a new OrderRepository over the given rows.
    pub fn new(rows: Vec<Order>, latency: Latency) -> Self {
        OrderRepository {
            orders: Collection::new(rows),
            latency,
        }
    }

    /// Returns every order.
    pub async fn get_all(&self) -> StoreResult<Vec<Order>> {
        self.latency.read().await;
        Ok(self.orders.all().await)
    }

    /// Gets an order by its ID.
    pub async fn get_by_id(&self, id: &str) -> StoreResult<Option<Order>> {
        self.latency.read().await;
        Ok(self.orders.find(id).await)
    }

    /// Returns orders in the given status.
    pub async fn get_by_status(&self, status: OrderStatus) -> StoreResult<Vec<Order>> {
        self.latency.read().await;
        Ok(self.orders.filter(|o| o.status == status).await)
    }

    /// Returns orders served from the given warehouse.
    pub async fn get_by_warehouse_id(&self, warehouse_id: &str) -> StoreResult<Vec<Order>> {
        self.latency.read().await;
        Ok(self.orders.filter(|o| o.warehouse_id == warehouse_id).await)
    }

    /// Returns orders for the given customer.
    pub async fn get_by_customer_id(&self, customer_id: &str) -> StoreResult<Vec<Order>> {
        self.latency.read().await;
        Ok(self.orders.filter(|o| o.customer_id == customer_id).await)
    }

    /// Searches orders by order number or customer name.
    pub async fn search(&self, query: &str) -> StoreResult<Vec<Order>> {
        self.latency.read().await;

        let needle = query.trim().to_lowercase();
        debug!(query = %needle, "Searching orders");

        if needle.is_empty() {
            return Ok(self.orders.all().await);
        }

        Ok(self
            .orders
            .filter(|o| {
                o.order_number.to_lowercase().contains(&needle)
                    || o.customer_name.to_lowercase().contains(&needle)
            })
            .await)
    }

    /// Stores a new order. New orders start `Pending` with no transition
    /// timestamps.
    pub async fn create(&self, draft: NewOrder) -> StoreResult<Order> {
        self.latency.write().await;

        let order = draft.into_order(generate_id(), Utc::now());
        debug!(id = %order.id, number = %order.order_number, "Creating order");

        Ok(self.orders.insert(order).await)
    }

    /// Shallow-merges a patch into an existing order.
    ///
    /// A `status` in the patch is stored as-is, with no transition
    /// timestamp; use [`update_status`](Self::update_status) for that.
    pub async fn update(&self, id: &str, patch: OrderPatch) -> StoreResult<Order> {
        self.latency.write().await;
        debug!(id = %id, "Updating order");

        self.orders
            .update(id, move |order| patch.apply(order))
            .await
    }

    /// Moves an order to a new status and stamps the transition.
    pub async fn update_status(&self, id: &str, status: OrderStatus) -> StoreResult<Order> {
        self.latency.write().await;
        debug!(id = %id, status = ?status, "Transitioning order");

        self.orders
            .update(id, move |order| order.set_status(status, Utc::now()))
            .await
    }

    /// Removes an order.
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        self.latency.write().await;
        debug!(id = %id, "Deleting order");

        self.orders.remove(id).await.map(|_| ())
    }
}

#[async_trait]
impl Repository for OrderRepository {
    type Entity = Order;
    type Draft = NewOrder;
    type Patch = OrderPatch;
    type Query = OrderQuery;

    async fn load(&self, query: &OrderQuery) -> StoreResult<Vec<Order>> {
        match query {
            OrderQuery::All => self.get_all().await,
            OrderQuery::Status(status) => self.get_by_status(*status).await,
            OrderQuery::Warehouse(warehouse_id) => self.get_by_warehouse_id(warehouse_id).await,
            OrderQuery::Customer(customer_id) => self.get_by_customer_id(customer_id).await,
            OrderQuery::Search(text) => self.search(text).await,
        }
    }

    async fn find(&self, id: &str) -> StoreResult<Option<Order>> {
        self.get_by_id(id).await
    }

    async fn create(&self, draft: NewOrder) -> StoreResult<Order> {
        OrderRepository::create(self, draft).await
    }

    async fn update(&self, id: &str, patch: OrderPatch) -> StoreResult<Order> {
        OrderRepository::update(self, id, patch).await
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        OrderRepository::delete(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sugar_core::OrderItem;

    fn sample_item(product_name: &str, quantity: i32, unit_price_cents: i64) -> OrderItem {
        OrderItem {
            product_id: "p-1".to_string(),
            product_name: product_name.to_string(),
            quantity,
            unit_price_cents,
            line_total_cents: unit_price_cents * quantity as i64,
        }
    }

    fn sample_draft(order_number: &str) -> NewOrder {
        let items = vec![sample_item("Chocolate Bar 45g", 3, 2500)];
        NewOrder {
            order_number: order_number.to_string(),
            warehouse_id: "wh-1".to_string(),
            warehouse_name: "Bodega Central".to_string(),
            customer_id: "c-1".to_string(),
            customer_name: "Abarrotes La Esquina".to_string(),
            items,
            subtotal_cents: 7500,
            tax_cents: 1200,
            discount_cents: 0,
            total_cents: 8700,
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_create_starts_pending_without_stamps() {
        let repo = OrderRepository::new(vec![], Latency::none());

        let order = repo.create(sample_draft("ORD-1001")).await.unwrap();

        assert_eq!(order.status, OrderStatus::Pending);
        assert!(order.confirmed_at.is_none());
        assert!(order.completed_at.is_none());
        assert!(order.cancelled_at.is_none());
    }

    #[tokio::test]
    async fn test_update_status_stamps_transition() {
        let repo = OrderRepository::new(vec![], Latency::none());
        let order = repo.create(sample_draft("ORD-1001")).await.unwrap();

        let confirmed = repo
            .update_status(&order.id, OrderStatus::Confirmed)
            .await
            .unwrap();
        assert_eq!(confirmed.status, OrderStatus::Confirmed);
        assert!(confirmed.confirmed_at.is_some());

        let completed = repo
            .update_status(&order.id, OrderStatus::Completed)
            .await
            .unwrap();
        assert!(completed.completed_at.is_some());
        // Earlier stamp survives the later transition
        assert_eq!(completed.confirmed_at, confirmed.confirmed_at);
    }

    #[tokio::test]
    async fn test_plain_patch_does_not_stamp_status() {
        let repo = OrderRepository::new(vec![], Latency::none());
        let order = repo.create(sample_draft("ORD-1001")).await.unwrap();

        let patch = OrderPatch {
            status: Some(OrderStatus::Cancelled),
            ..OrderPatch::default()
        };
        let updated = repo.update(&order.id, patch).await.unwrap();

        assert_eq!(updated.status, OrderStatus::Cancelled);
        assert!(updated.cancelled_at.is_none());
    }

    #[tokio::test]
    async fn test_totals_stored_verbatim() {
        let repo = OrderRepository::new(vec![], Latency::none());
        // Deliberately inconsistent totals: the store must not correct them
        let mut draft = sample_draft("ORD-1001");
        draft.total_cents = 1;
        let order = repo.create(draft).await.unwrap();
        assert_eq!(order.total_cents, 1);
    }

    #[tokio::test]
    async fn test_status_filter_and_search() {
        let repo = OrderRepository::new(vec![], Latency::none());
        let order = repo.create(sample_draft("ORD-1001")).await.unwrap();
        repo.create(sample_draft("ORD-1002")).await.unwrap();
        repo.update_status(&order.id, OrderStatus::Confirmed)
            .await
            .unwrap();

        let pending = repo.get_by_status(OrderStatus::Pending).await.unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].order_number, "ORD-1002");

        let by_number = repo.search("1001").await.unwrap();
        assert_eq!(by_number.len(), 1);

        let by_customer = repo.search("esquina").await.unwrap();
        assert_eq!(by_customer.len(), 2);
    }

    #[tokio::test]
    async fn test_update_status_missing_id_fails() {
        let repo = OrderRepository::new(vec![], Latency::none());
        let err = repo
            .update_status("ghost", OrderStatus::Confirmed)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Order not found: ghost");
    }
}
