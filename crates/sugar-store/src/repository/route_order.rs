//! # Route Order Repository
//!
//! Mock data access for truck-route deliveries. Route orders never pass
//! through `Pending`: they are born `Assigned` to a route and driver,
//! and move through `InTransit` to either `Delivered` or `Failed`.

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::collection::{generate_id, Collection};
use crate::error::StoreResult;
use crate::latency::Latency;
use crate::repository::Repository;
use sugar_core::{NewRouteOrder, RouteOrder, RouteOrderPatch, RouteOrderStatus};

/// Read filters for route delivery lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteOrderQuery {
    /// Every route order.
    #[default]
    All,
    /// Orders in one status.
    Status(RouteOrderStatus),
    /// Orders assigned to one named route.
    Route(String),
}

/// Repository for route delivery data access.
#[derive(Debug, Clone)]
pub struct RouteOrderRepository {
    orders: Collection<RouteOrder>,
    latency: Latency,
}

impl RouteOrderRepository {
    /// Creates a new RouteOrderRepository over the given rows.
    pub fn new(rows: Vec<RouteOrder>, latency: Latency) -> Self {
        RouteOrderRepository {
            orders: Collection::new(rows),
            latency,
        }
    }

    /// Returns every route order.
    pub async fn get_all(&self) -> StoreResult<Vec<RouteOrder>> {
        self.latency.read().await;
        Ok(self.orders.all().await)
    }

    /// Gets a route order by its ID.
    pub async fn get_by_id(&self, id: &str) -> StoreResult<Option<RouteOrder>> {
        self.latency.read().await;
        Ok(self.orders.find(id).await)
    }

    /// Returns route orders in the given status.
    pub async fn get_by_status(&self, status: RouteOrderStatus) -> StoreResult<Vec<RouteOrder>> {
        self.latency.read().await;
        Ok(self.orders.filter(|o| o.status == status).await)
    }

    /// Returns orders assigned to the given route, matched exactly by name.
    pub async fn get_by_route_name(&self, route_name: &str) -> StoreResult<Vec<RouteOrder>> {
        self.latency.read().await;
        debug!(route = %route_name, "Loading route orders");

        let route_name = route_name.to_string();
        Ok(self.orders.filter(|o| o.route_name == route_name).await)
    }

    /// Stores a new route order. New orders start `Assigned` with no
    /// delivery timestamps.
    pub async fn create(&self, draft: NewRouteOrder) -> StoreResult<RouteOrder> {
        self.latency.write().await;

        let order = draft.into_route_order(generate_id(), Utc::now());
        debug!(id = %order.id, route = %order.route_name, "Creating route order");

        Ok(self.orders.insert(order).await)
    }

    /// Shallow-merges a patch into an existing route order. Does not
    /// stamp delivery timestamps even when `status` is present.
    pub async fn update(&self, id: &str, patch: RouteOrderPatch) -> StoreResult<RouteOrder> {
        self.latency.write().await;
        debug!(id = %id, "Updating route order");

        self.orders
            .update(id, move |order| patch.apply(order))
            .await
    }

    /// Moves a route order to a new status and stamps the transition.
    pub async fn update_status(
        &self,
        id: &str,
        status: RouteOrderStatus,
    ) -> StoreResult<RouteOrder> {
        self.latency.write().await;
        debug!(id = %id, status = ?status, "Transitioning route order");

        self.orders
            .update(id, move |order| order.set_status(status, Utc::now()))
            .await
    }

    /// Removes a route order.
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        self.latency.write().await;
        debug!(id = %id, "Deleting route order");

        self.orders.remove(id).await.map(|_| ())
    }
}

#[async_trait]
impl Repository for RouteOrderRepository {
    type Entity = RouteOrder;
    type Draft = NewRouteOrder;
    type Patch = RouteOrderPatch;
    type Query = RouteOrderQuery;

    async fn load(&self, query: &RouteOrderQuery) -> StoreResult<Vec<RouteOrder>> {
        match query {
            RouteOrderQuery::All => self.get_all().await,
            RouteOrderQuery::Status(status) => self.get_by_status(*status).await,
            RouteOrderQuery::Route(route_name) => self.get_by_route_name(route_name).await,
        }
    }

    async fn find(&self, id: &str) -> StoreResult<Option<RouteOrder>> {
        self.get_by_id(id).await
    }

    async fn create(&self, draft: NewRouteOrder) -> StoreResult<RouteOrder> {
        RouteOrderRepository::create(self, draft).await
    }

    async fn update(&self, id: &str, patch: RouteOrderPatch) -> StoreResult<RouteOrder> {
        RouteOrderRepository::update(self, id, patch).await
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        RouteOrderRepository::delete(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sugar_core::OrderItem;

    fn sample_draft(order_number: &str, route_name: &str) -> NewRouteOrder {
        let items = vec![OrderItem {
            product_id: "p-1".to_string(),
            product_name: "Paleta de Tamarindo".to_string(),
            quantity: 40,
            unit_price_cents: 800,
            line_total_cents: 32000,
        }];
        NewRouteOrder {
            order_number: order_number.to_string(),
            route_name: route_name.to_string(),
            driver_name: "Jorge Ramírez".to_string(),
            customer_id: "c-1".to_string(),
            customer_name: "Abarrotes La Esquina".to_string(),
            delivery_address: "Av. 20 de Noviembre 512, Durango".to_string(),
            items,
            subtotal_cents: 32000,
            tax_cents: 5120,
            discount_cents: 0,
            total_cents: 37120,
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_create_starts_assigned() {
        let repo = RouteOrderRepository::new(vec![], Latency::none());

        let order = repo
            .create(sample_draft("RUT-3001", "Ruta Centro"))
            .await
            .unwrap();

        assert_eq!(order.status, RouteOrderStatus::Assigned);
        assert!(order.in_transit_at.is_none());
        assert!(order.delivered_at.is_none());
        assert!(order.failed_at.is_none());
    }

    #[tokio::test]
    async fn test_failed_delivery_stamps_failed_at() {
        let repo = RouteOrderRepository::new(vec![], Latency::none());
        let order = repo
            .create(sample_draft("RUT-3001", "Ruta Centro"))
            .await
            .unwrap();

        repo.update_status(&order.id, RouteOrderStatus::InTransit)
            .await
            .unwrap();
        let failed = repo
            .update_status(&order.id, RouteOrderStatus::Failed)
            .await
            .unwrap();

        assert_eq!(failed.status, RouteOrderStatus::Failed);
        assert!(failed.in_transit_at.is_some());
        assert!(failed.failed_at.is_some());
        assert!(failed.delivered_at.is_none());
    }

    #[tokio::test]
    async fn test_route_name_filter_is_exact() {
        let repo = RouteOrderRepository::new(vec![], Latency::none());
        repo.create(sample_draft("RUT-3001", "Ruta Centro"))
            .await
            .unwrap();
        repo.create(sample_draft("RUT-3002", "Ruta Centro"))
            .await
            .unwrap();
        repo.create(sample_draft("RUT-3003", "Ruta Guadiana"))
            .await
            .unwrap();

        let centro = repo.get_by_route_name("Ruta Centro").await.unwrap();
        assert_eq!(centro.len(), 2);

        // No substring or case folding on route names
        let partial = repo.get_by_route_name("Centro").await.unwrap();
        assert!(partial.is_empty());
    }

    #[tokio::test]
    async fn test_patch_reassigns_driver_without_stamping() {
        let repo = RouteOrderRepository::new(vec![], Latency::none());
        let order = repo
            .create(sample_draft("RUT-3001", "Ruta Centro"))
            .await
            .unwrap();

        let patch = RouteOrderPatch {
            driver_name: Some("Luis Soto".to_string()),
            status: Some(RouteOrderStatus::InTransit),
            ..RouteOrderPatch::default()
        };
        let updated = repo.update(&order.id, patch).await.unwrap();

        assert_eq!(updated.driver_name, "Luis Soto");
        assert_eq!(updated.status, RouteOrderStatus::InTransit);
        assert!(updated.in_transit_at.is_none());
    }
}
