//! # Supplier Repository
//!
//! Mock data access for suppliers.
//!
//! ## Key Operations
//! - CRUD over the in-memory supplier list
//! - Active-only listing
//! - Substring search across name, RFC, contact, and email

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::collection::{generate_id, Collection};
use crate::error::StoreResult;
use crate::latency::Latency;
use crate::repository::Repository;
use sugar_core::{NewSupplier, Supplier, SupplierPatch};

/// Read filters for supplier lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplierQuery {
    /// Every supplier.
    #[default]
    All,
    /// Active suppliers only.
    Active,
    /// Substring search over name, RFC, contact name, and email.
    Search(String),
}

/// Repository for supplier data access.
#[derive(Debug, Clone)]
pub struct SupplierRepository {
    suppliers: Collection<Supplier>,
    latency: Latency,
}

impl SupplierRepository {
    /// Creates a new SupplierRepository over the given rows.
    pub fn new(rows: Vec<Supplier>, latency: Latency) -> Self {
        SupplierRepository {
            suppliers: Collection::new(rows),
            latency,
        }
    }

    /// Returns every supplier.
    pub async fn get_all(&self) -> StoreResult<Vec<Supplier>> {
        self.latency.read().await;
        Ok(self.suppliers.all().await)
    }

    /// Gets a supplier by its ID.
    pub async fn get_by_id(&self, id: &str) -> StoreResult<Option<Supplier>> {
        self.latency.read().await;
        Ok(self.suppliers.find(id).await)
    }

    /// Returns active suppliers only.
    pub async fn get_active(&self) -> StoreResult<Vec<Supplier>> {
        self.latency.read().await;
        Ok(self.suppliers.filter(|s| s.is_active).await)
    }

    /// Searches suppliers by name, RFC, contact name, or email.
    ///
    /// Case-insensitive substring match. An empty query returns everything.
    pub async fn search(&self, query: &str) -> StoreResult<Vec<Supplier>> {
        self.latency.read().await;

        let needle = query.trim().to_lowercase();
        debug!(query = %needle, "Searching suppliers");

        if needle.is_empty() {
            return Ok(self.suppliers.all().await);
        }

        Ok(self
            .suppliers
            .filter(|s| {
                s.name.to_lowercase().contains(&needle)
                    || s.rfc.to_lowercase().contains(&needle)
                    || s.contact_name.to_lowercase().contains(&needle)
                    || s.email.to_lowercase().contains(&needle)
            })
            .await)
    }

    /// Stores a new supplier.
    pub async fn create(&self, draft: NewSupplier) -> StoreResult<Supplier> {
        self.latency.write().await;

        let supplier = draft.into_supplier(generate_id(), Utc::now());
        debug!(id = %supplier.id, name = %supplier.name, "Creating supplier");

        Ok(self.suppliers.insert(supplier).await)
    }

    /// Shallow-merges a patch into an existing supplier.
    pub async fn update(&self, id: &str, patch: SupplierPatch) -> StoreResult<Supplier> {
        self.latency.write().await;
        debug!(id = %id, "Updating supplier");

        self.suppliers
            .update(id, move |supplier| {
                patch.apply(supplier);
                supplier.updated_at = Utc::now();
            })
            .await
    }

    /// Removes a supplier.
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        self.latency.write().await;
        debug!(id = %id, "Deleting supplier");

        self.suppliers.remove(id).await.map(|_| ())
    }
}

#[async_trait]
impl Repository for SupplierRepository {
    type Entity = Supplier;
    type Draft = NewSupplier;
    type Patch = SupplierPatch;
    type Query = SupplierQuery;

    async fn load(&self, query: &SupplierQuery) -> StoreResult<Vec<Supplier>> {
        match query {
            SupplierQuery::All => self.get_all().await,
            SupplierQuery::Active => self.get_active().await,
            SupplierQuery::Search(text) => self.search(text).await,
        }
    }

    async fn find(&self, id: &str) -> StoreResult<Option<Supplier>> {
        self.get_by_id(id).await
    }

    async fn create(&self, draft: NewSupplier) -> StoreResult<Supplier> {
        SupplierRepository::create(self, draft).await
    }

    async fn update(&self, id: &str, patch: SupplierPatch) -> StoreResult<Supplier> {
        SupplierRepository::update(self, id, patch).await
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        SupplierRepository::delete(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_draft(name: &str, rfc: &str) -> NewSupplier {
        NewSupplier {
            name: name.to_string(),
            rfc: rfc.to_string(),
            contact_name: "Laura Mendoza".to_string(),
            email: "ventas@example.mx".to_string(),
            phone: "555-0100".to_string(),
            address: "Av. Reforma 12, CDMX".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_starts_active() {
        let repo = SupplierRepository::new(vec![], Latency::none());

        let supplier = repo
            .create(sample_draft("Dulces del Valle", "DDV910101AB1"))
            .await
            .unwrap();

        assert!(supplier.is_active);
        assert!(!supplier.id.is_empty());
    }

    #[tokio::test]
    async fn test_active_filter_hides_deactivated() {
        let repo = SupplierRepository::new(vec![], Latency::none());
        let supplier = repo
            .create(sample_draft("Dulces del Valle", "DDV910101AB1"))
            .await
            .unwrap();
        repo.create(sample_draft("Azúcar Fina", "AZF850505XY9"))
            .await
            .unwrap();

        let patch = SupplierPatch {
            is_active: Some(false),
            ..SupplierPatch::default()
        };
        repo.update(&supplier.id, patch).await.unwrap();

        let active = repo.get_active().await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name, "Azúcar Fina");
    }

    #[tokio::test]
    async fn test_search_matches_rfc_and_contact() {
        let repo = SupplierRepository::new(vec![], Latency::none());
        repo.create(sample_draft("Dulces del Valle", "DDV910101AB1"))
            .await
            .unwrap();

        assert_eq!(repo.search("ddv9101").await.unwrap().len(), 1);
        assert_eq!(repo.search("laura").await.unwrap().len(), 1);
        assert_eq!(repo.search("no-such").await.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_delete_missing_id_fails() {
        let repo = SupplierRepository::new(vec![], Latency::none());
        let err = repo.delete("ghost").await.unwrap_err();
        assert_eq!(err.to_string(), "Supplier not found: ghost");
    }
}
