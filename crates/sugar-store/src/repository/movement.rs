//! # Movement Repository
//!
//! Mock data access for the stock movement log. Recording a movement
//! here changes nothing on the stock item it references; callers pair a
//! record with `InventoryRepository::adjust_quantity` themselves, and
//! the two calls are not atomic.

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::collection::{generate_id, Collection};
use crate::error::StoreResult;
use crate::latency::Latency;
use crate::repository::Repository;
use sugar_core::{InventoryMovement, InventoryMovementPatch, MovementType, NewInventoryMovement};

/// Read filters for the movement log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementQuery {
    /// Every movement.
    #[default]
    All,
    /// Movements touching one stock item.
    Item(String),
    /// Movements in one warehouse.
    Warehouse(String),
    /// Movements of one kind.
    Type(MovementType),
}

/// Repository for stock movement data access.
#[derive(Debug, Clone)]
pub struct MovementRepository {
    movements: Collection<InventoryMovement>,
    latency: Latency,
}

impl MovementRepository {
    /// Creates a new MovementRepository over the given rows.
    pub fn new(rows: Vec<InventoryMovement>, latency: Latency) -> Self {
        MovementRepository {
            movements: Collection::new(rows),
            latency,
        }
    }

    /// Returns every movement.
    pub async fn get_all(&self) -> StoreResult<Vec<InventoryMovement>> {
        self.latency.read().await;
        Ok(self.movements.all().await)
    }

    /// Gets a movement by its ID.
    pub async fn get_by_id(&self, id: &str) -> StoreResult<Option<InventoryMovement>> {
        self.latency.read().await;
        Ok(self.movements.find(id).await)
    }

    /// Returns the movement history of one stock item.
    pub async fn get_by_item_id(&self, item_id: &str) -> StoreResult<Vec<InventoryMovement>> {
        self.latency.read().await;
        Ok(self
            .movements
            .filter(|m| m.inventory_item_id == item_id)
            .await)
    }

    /// Returns movements in the given warehouse.
    pub async fn get_by_warehouse_id(
        &self,
        warehouse_id: &str,
    ) -> StoreResult<Vec<InventoryMovement>> {
        self.latency.read().await;
        Ok(self
            .movements
            .filter(|m| m.warehouse_id == warehouse_id)
            .await)
    }

    /// Returns movements of the given kind.
    pub async fn get_by_type(
        &self,
        movement_type: MovementType,
    ) -> StoreResult<Vec<InventoryMovement>> {
        self.latency.read().await;
        Ok(self
            .movements
            .filter(|m| m.movement_type == movement_type)
            .await)
    }

    /// Records a movement. The referenced item's quantity is not touched.
    pub async fn create(&self, draft: NewInventoryMovement) -> StoreResult<InventoryMovement> {
        self.latency.write().await;

        let movement = draft.into_movement(generate_id(), Utc::now());
        debug!(
            id = %movement.id,
            item = %movement.inventory_item_id,
            kind = ?movement.movement_type,
            "Recording movement"
        );

        Ok(self.movements.insert(movement).await)
    }

    /// Shallow-merges a patch into an existing movement record.
    pub async fn update(
        &self,
        id: &str,
        patch: InventoryMovementPatch,
    ) -> StoreResult<InventoryMovement> {
        self.latency.write().await;
        debug!(id = %id, "Updating movement");

        self.movements
            .update(id, move |movement| patch.apply(movement))
            .await
    }

    /// Removes a movement record.
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        self.latency.write().await;
        debug!(id = %id, "Deleting movement");

        self.movements.remove(id).await.map(|_| ())
    }
}

#[async_trait]
impl Repository for MovementRepository {
    type Entity = InventoryMovement;
    type Draft = NewInventoryMovement;
    type Patch = InventoryMovementPatch;
    type Query = MovementQuery;

    async fn load(&self, query: &MovementQuery) -> StoreResult<Vec<InventoryMovement>> {
        match query {
            MovementQuery::All => self.get_all().await,
            MovementQuery::Item(item_id) => self.get_by_item_id(item_id).await,
            MovementQuery::Warehouse(warehouse_id) => self.get_by_warehouse_id(warehouse_id).await,
            MovementQuery::Type(movement_type) => self.get_by_type(*movement_type).await,
        }
    }

    async fn find(&self, id: &str) -> StoreResult<Option<InventoryMovement>> {
        self.get_by_id(id).await
    }

    async fn create(&self, draft: NewInventoryMovement) -> StoreResult<InventoryMovement> {
        MovementRepository::create(self, draft).await
    }

    async fn update(&self, id: &str, patch: InventoryMovementPatch) -> StoreResult<InventoryMovement> {
        MovementRepository::update(self, id, patch).await
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        MovementRepository::delete(self, id).await
    }
}
