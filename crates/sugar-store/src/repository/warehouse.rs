//! # Warehouse Repository
//!
//! Mock data access for warehouses (central, branch-attached, and the
//! route trucks that act as rolling mini-warehouses).

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::collection::{generate_id, Collection};
use crate::error::StoreResult;
use crate::latency::Latency;
use crate::repository::Repository;
use sugar_core::{NewWarehouse, Warehouse, WarehousePatch, WarehouseType};

/// Read filters for warehouse lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarehouseQuery {
    /// Every warehouse.
    #[default]
    All,
    /// Warehouses attached to one branch.
    Branch(String),
    /// Warehouses of one type.
    Type(WarehouseType),
}

/// Repository for warehouse data access.
#[derive(Debug, Clone)]
pub struct WarehouseRepository {
    warehouses: Collection<Warehouse>,
    latency: Latency,
}

impl WarehouseRepository {
    /// Creates a new WarehouseRepository over the given rows.
    pub fn new(rows: Vec<Warehouse>, latency: Latency) -> Self {
        WarehouseRepository {
            warehouses: Collection::new(rows),
            latency,
        }
    }

    /// Returns every warehouse.
    pub async fn get_all(&self) -> StoreResult<Vec<Warehouse>> {
        self.latency.read().await;
        Ok(self.warehouses.all().await)
    }

    /// Gets a warehouse by its ID.
    pub async fn get_by_id(&self, id: &str) -> StoreResult<Option<Warehouse>> {
        self.latency.read().await;
        Ok(self.warehouses.find(id).await)
    }

    /// Returns warehouses attached to the given branch.
    pub async fn get_by_branch_id(&self, branch_id: &str) -> StoreResult<Vec<Warehouse>> {
        self.latency.read().await;
        Ok(self.warehouses.filter(|w| w.branch_id == branch_id).await)
    }

    /// Returns warehouses of the given type.
    pub async fn get_by_type(&self, warehouse_type: WarehouseType) -> StoreResult<Vec<Warehouse>> {
        self.latency.read().await;
        Ok(self
            .warehouses
            .filter(|w| w.warehouse_type == warehouse_type)
            .await)
    }

    /// Stores a new warehouse.
    pub async fn create(&self, draft: NewWarehouse) -> StoreResult<Warehouse> {
        self.latency.write().await;

        let warehouse = draft.into_warehouse(generate_id(), Utc::now());
        debug!(id = %warehouse.id, name = %warehouse.name, "Creating warehouse");

        Ok(self.warehouses.insert(warehouse).await)
    }

    /// Shallow-merges a patch into an existing warehouse.
    pub async fn update(&self, id: &str, patch: WarehousePatch) -> StoreResult<Warehouse> {
        self.latency.write().await;
        debug!(id = %id, "Updating warehouse");

        self.warehouses
            .update(id, move |warehouse| {
                patch.apply(warehouse);
                warehouse.updated_at = Utc::now();
            })
            .await
    }

    /// Removes a warehouse.
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        self.latency.write().await;
        debug!(id = %id, "Deleting warehouse");

        self.warehouses.remove(id).await.map(|_| ())
    }
}

#[async_trait]
impl Repository for WarehouseRepository {
    type Entity = Warehouse;
    type Draft = NewWarehouse;
    type Patch = WarehousePatch;
    type Query = WarehouseQuery;

    async fn load(&self, query: &WarehouseQuery) -> StoreResult<Vec<Warehouse>> {
        match query {
            WarehouseQuery::All => self.get_all().await,
            WarehouseQuery::Branch(branch_id) => self.get_by_branch_id(branch_id).await,
            WarehouseQuery::Type(warehouse_type) => self.get_by_type(*warehouse_type).await,
        }
    }

    async fn find(&self, id: &str) -> StoreResult<Option<Warehouse>> {
        self.get_by_id(id).await
    }

    async fn create(&self, draft: NewWarehouse) -> StoreResult<Warehouse> {
        WarehouseRepository::create(self, draft).await
    }

    async fn update(&self, id: &str, patch: WarehousePatch) -> StoreResult<Warehouse> {
        WarehouseRepository::update(self, id, patch).await
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        WarehouseRepository::delete(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_draft(name: &str, branch_id: &str, warehouse_type: WarehouseType) -> NewWarehouse {
        NewWarehouse {
            name: name.to_string(),
            branch_id: branch_id.to_string(),
            branch_name: "Sucursal Centro".to_string(),
            warehouse_type,
            capacity: 5000,
            current_stock: 1200,
        }
    }

    #[tokio::test]
    async fn test_branch_filter() {
        let repo = WarehouseRepository::new(vec![], Latency::none());
        repo.create(sample_draft("Bodega Central", "br-1", WarehouseType::Central))
            .await
            .unwrap();
        repo.create(sample_draft("Bodega Norte", "br-2", WarehouseType::Branch))
            .await
            .unwrap();

        let for_branch = repo.get_by_branch_id("br-1").await.unwrap();
        assert_eq!(for_branch.len(), 1);
        assert_eq!(for_branch[0].name, "Bodega Central");
    }

    #[tokio::test]
    async fn test_type_filter_finds_route_trucks() {
        let repo = WarehouseRepository::new(vec![], Latency::none());
        repo.create(sample_draft("Bodega Central", "br-1", WarehouseType::Central))
            .await
            .unwrap();
        repo.create(sample_draft("Ruta 7", "br-1", WarehouseType::RouteTruck))
            .await
            .unwrap();

        let trucks = repo.get_by_type(WarehouseType::RouteTruck).await.unwrap();
        assert_eq!(trucks.len(), 1);
        assert_eq!(trucks[0].name, "Ruta 7");
    }

    #[tokio::test]
    async fn test_update_changes_capacity_only() {
        let repo = WarehouseRepository::new(vec![], Latency::none());
        let warehouse = repo
            .create(sample_draft("Bodega Central", "br-1", WarehouseType::Central))
            .await
            .unwrap();

        let patch = WarehousePatch {
            capacity: Some(8000),
            ..WarehousePatch::default()
        };
        let updated = repo.update(&warehouse.id, patch).await.unwrap();

        assert_eq!(updated.capacity, 8000);
        assert_eq!(updated.current_stock, 1200);
        assert_eq!(updated.branch_id, "br-1");
    }
}
