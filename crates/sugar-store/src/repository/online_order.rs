//! # Online Order Repository
//!
//! Mock data access for web-shop orders. Same two-path update rule as
//! in-store orders: `update` merges fields verbatim, `update_status`
//! stamps `processed_at` / `shipped_at` / `delivered_at` /
//! `cancelled_at` for the status entered.

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::collection::{generate_id, Collection};
use crate::error::StoreResult;
use crate::latency::Latency;
use crate::repository::Repository;
use sugar_core::{NewOnlineOrder, OnlineOrder, OnlineOrderPatch, OnlineOrderStatus};

/// Read filters for web-shop order lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnlineOrderQuery {
    /// Every online order.
    #[default]
    All,
    /// Orders in one status.
    Status(OnlineOrderStatus),
    /// Orders for one customer.
    Customer(String),
    /// Substring search over order number, customer name, and email.
    Search(String),
}

/// Repository for web-shop order data access.
#[derive(Debug, Clone)]
pub struct OnlineOrderRepository {
    orders: Collection<OnlineOrder>,
    latency: Latency,
}

impl OnlineOrderRepository {
    /// Creates a new OnlineOrderRepository over the given rows.
    pub fn new(rows: Vec<OnlineOrder>, latency: Latency) -> Self {
        OnlineOrderRepository {
            orders: Collection::new(rows),
            latency,
        }
    }

    /// Returns every online order.
    pub async fn get_all(&self) -> StoreResult<Vec<OnlineOrder>> {
        self.latency.read().await;
        Ok(self.orders.all().await)
    }

    /// Gets an online order by its ID.
    pub async fn get_by_id(&self, id: &str) -> StoreResult<Option<OnlineOrder>> {
        self.latency.read().await;
        Ok(self.orders.find(id).await)
    }

    /// Returns online orders in the given status.
    pub async fn get_by_status(&self, status: OnlineOrderStatus) -> StoreResult<Vec<OnlineOrder>> {
        self.latency.read().await;
        Ok(self.orders.filter(|o| o.status == status).await)
    }

    /// Returns online orders for the given customer.
    pub async fn get_by_customer_id(&self, customer_id: &str) -> StoreResult<Vec<OnlineOrder>> {
        self.latency.read().await;
        Ok(self.orders.filter(|o| o.customer_id == customer_id).await)
    }

    /// Searches online orders by order number, customer name, or email.
    pub async fn search(&self, query: &str) -> StoreResult<Vec<OnlineOrder>> {
        self.latency.read().await;

        let needle = query.trim().to_lowercase();
        debug!(query = %needle, "Searching online orders");

        if needle.is_empty() {
            return Ok(self.orders.all().await);
        }

        Ok(self
            .orders
            .filter(|o| {
                o.order_number.to_lowercase().contains(&needle)
                    || o.customer_name.to_lowercase().contains(&needle)
                    || o.email.to_lowercase().contains(&needle)
            })
            .await)
    }

    /// Stores a new online order. New orders start `Pending` with no
    /// fulfillment timestamps and no tracking number.
    pub async fn create(&self, draft: NewOnlineOrder) -> StoreResult<OnlineOrder> {
        self.latency.write().await;

        let order = draft.into_online_order(generate_id(), Utc::now());
        debug!(id = %order.id, number = %order.order_number, "Creating online order");

        Ok(self.orders.insert(order).await)
    }

    /// Shallow-merges a patch into an existing online order. Does not
    /// stamp fulfillment timestamps even when `status` is present.
    pub async fn update(&self, id: &str, patch: OnlineOrderPatch) -> StoreResult<OnlineOrder> {
        self.latency.write().await;
        debug!(id = %id, "Updating online order");

        self.orders
            .update(id, move |order| patch.apply(order))
            .await
    }

    /// Moves an online order to a new status and stamps the transition.
    pub async fn update_status(
        &self,
        id: &str,
        status: OnlineOrderStatus,
    ) -> StoreResult<OnlineOrder> {
        self.latency.write().await;
        debug!(id = %id, status = ?status, "Transitioning online order");

        self.orders
            .update(id, move |order| order.set_status(status, Utc::now()))
            .await
    }

    /// Removes an online order.
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        self.latency.write().await;
        debug!(id = %id, "Deleting online order");

        self.orders.remove(id).await.map(|_| ())
    }
}

#[async_trait]
impl Repository for OnlineOrderRepository {
    type Entity = OnlineOrder;
    type Draft = NewOnlineOrder;
    type Patch = OnlineOrderPatch;
    type Query = OnlineOrderQuery;

    async fn load(&self, query: &OnlineOrderQuery) -> StoreResult<Vec<OnlineOrder>> {
        match query {
            OnlineOrderQuery::All => self.get_all().await,
            OnlineOrderQuery::Status(status) => self.get_by_status(*status).await,
            OnlineOrderQuery::Customer(customer_id) => self.get_by_customer_id(customer_id).await,
            OnlineOrderQuery::Search(text) => self.search(text).await,
        }
    }

    async fn find(&self, id: &str) -> StoreResult<Option<OnlineOrder>> {
        self.get_by_id(id).await
    }

    async fn create(&self, draft: NewOnlineOrder) -> StoreResult<OnlineOrder> {
        OnlineOrderRepository::create(self, draft).await
    }

    async fn update(&self, id: &str, patch: OnlineOrderPatch) -> StoreResult<OnlineOrder> {
        OnlineOrderRepository::update(self, id, patch).await
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        OnlineOrderRepository::delete(self, id).await
    }
}
