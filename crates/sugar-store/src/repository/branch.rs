//! # Branch Repository
//!
//! Mock data access for branches.
//!
//! `warehouse_count` is a cached counter owned by the seed data. Patches
//! carry the field but [`sugar_core::BranchPatch::apply`] never writes it,
//! so whatever a caller sends is ignored.

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::collection::{generate_id, Collection};
use crate::error::StoreResult;
use crate::latency::Latency;
use crate::repository::Repository;
use sugar_core::{Branch, BranchPatch, NewBranch};

/// Read filters for branch lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchQuery {
    /// Every branch.
    #[default]
    All,
    /// Active branches only.
    Active,
    /// Substring search over name, code, and address.
    Search(String),
}

/// Repository for branch data access.
#[derive(Debug, Clone)]
pub struct BranchRepository {
    branches: Collection<Branch>,
    latency: Latency,
}

impl BranchRepository {
    /// Creates a new BranchRepository over the given rows.
    pub fn new(rows: Vec<Branch>, latency: Latency) -> Self {
        BranchRepository {
            branches: Collection::new(rows),
            latency,
        }
    }

    /// Returns every branch.
    pub async fn get_all(&self) -> StoreResult<Vec<Branch>> {
        self.latency.read().await;
        Ok(self.branches.all().await)
    }

    /// Gets a branch by its ID.
    pub async fn get_by_id(&self, id: &str) -> StoreResult<Option<Branch>> {
        self.latency.read().await;
        Ok(self.branches.find(id).await)
    }

    /// Returns active branches only.
    pub async fn get_active(&self) -> StoreResult<Vec<Branch>> {
        self.latency.read().await;
        Ok(self.branches.filter(|b| b.is_active).await)
    }

    /// Searches branches by name, code, or address.
    pub async fn search(&self, query: &str) -> StoreResult<Vec<Branch>> {
        self.latency.read().await;

        let needle = query.trim().to_lowercase();
        debug!(query = %needle, "Searching branches");

        if needle.is_empty() {
            return Ok(self.branches.all().await);
        }

        Ok(self
            .branches
            .filter(|b| {
                b.name.to_lowercase().contains(&needle)
                    || b.code.to_lowercase().contains(&needle)
                    || b.address.to_lowercase().contains(&needle)
            })
            .await)
    }

    /// Stores a new branch. The warehouse counter starts at zero.
    pub async fn create(&self, draft: NewBranch) -> StoreResult<Branch> {
        self.latency.write().await;

        let branch = draft.into_branch(generate_id(), Utc::now());
        debug!(id = %branch.id, code = %branch.code, "Creating branch");

        Ok(self.branches.insert(branch).await)
    }

    /// Shallow-merges a patch into an existing branch.
    ///
    /// `warehouse_count` in the patch is ignored; the stored counter
    /// survives the merge untouched.
    pub async fn update(&self, id: &str, patch: BranchPatch) -> StoreResult<Branch> {
        self.latency.write().await;
        debug!(id = %id, "Updating branch");

        self.branches
            .update(id, move |branch| {
                patch.apply(branch);
                branch.updated_at = Utc::now();
            })
            .await
    }

    /// Removes a branch.
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        self.latency.write().await;
        debug!(id = %id, "Deleting branch");

        self.branches.remove(id).await.map(|_| ())
    }
}

#[async_trait]
impl Repository for BranchRepository {
    type Entity = Branch;
    type Draft = NewBranch;
    type Patch = BranchPatch;
    type Query = BranchQuery;

    async fn load(&self, query: &BranchQuery) -> StoreResult<Vec<Branch>> {
        match query {
            BranchQuery::All => self.get_all().await,
            BranchQuery::Active => self.get_active().await,
            BranchQuery::Search(text) => self.search(text).await,
        }
    }

    async fn find(&self, id: &str) -> StoreResult<Option<Branch>> {
        self.get_by_id(id).await
    }

    async fn create(&self, draft: NewBranch) -> StoreResult<Branch> {
        BranchRepository::create(self, draft).await
    }

    async fn update(&self, id: &str, patch: BranchPatch) -> StoreResult<Branch> {
        BranchRepository::update(self, id, patch).await
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        BranchRepository::delete(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_draft(name: &str, code: &str) -> NewBranch {
        NewBranch {
            name: name.to_string(),
            code: code.to_string(),
            address: "Calle Hidalgo 5, Puebla".to_string(),
            phone: "555-0200".to_string(),
            manager_name: "Carlos Ruiz".to_string(),
            opening_time: "09:00".to_string(),
            closing_time: "20:00".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_starts_with_zero_warehouses() {
        let repo = BranchRepository::new(vec![], Latency::none());

        let branch = repo
            .create(sample_draft("Sucursal Centro", "CEN-01"))
            .await
            .unwrap();

        assert_eq!(branch.warehouse_count, 0);
        assert!(branch.is_active);
    }

    #[tokio::test]
    async fn test_patch_cannot_touch_warehouse_count() {
        let repo = BranchRepository::new(vec![], Latency::none());
        let branch = repo
            .create(sample_draft("Sucursal Centro", "CEN-01"))
            .await
            .unwrap();

        let patch = BranchPatch {
            name: Some("Sucursal Centro Renovada".to_string()),
            warehouse_count: Some(999),
            ..BranchPatch::default()
        };
        let updated = repo.update(&branch.id, patch).await.unwrap();

        assert_eq!(updated.name, "Sucursal Centro Renovada");
        assert_eq!(updated.warehouse_count, 0);
    }

    #[tokio::test]
    async fn test_search_matches_code() {
        let repo = BranchRepository::new(vec![], Latency::none());
        repo.create(sample_draft("Sucursal Centro", "CEN-01"))
            .await
            .unwrap();
        repo.create(sample_draft("Sucursal Norte", "NOR-01"))
            .await
            .unwrap();

        let hits = repo.search("cen-").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Sucursal Centro");
    }
}
