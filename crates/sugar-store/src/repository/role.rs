//! # Role Repository
//!
//! Mock data access for roles.
//!
//! `users_count` is a cached counter owned by the seed data; patches carry
//! it but never write it. The `permissions` id list is stored verbatim and
//! replaced whole on update. Nothing resolves those ids for authorization;
//! the dashboard gate is the role-name allow-list in `sugar_core::access`.

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::collection::{generate_id, Collection};
use crate::error::StoreResult;
use crate::latency::Latency;
use crate::repository::Repository;
use sugar_core::{NewRole, Role, RolePatch};

/// Read filters for role lists. Roles are few; the console always lists
/// them all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleQuery {
    /// Every role.
    #[default]
    All,
}

/// Repository for role data access.
#[derive(Debug, Clone)]
pub struct RoleRepository {
    roles: Collection<Role>,
    latency: Latency,
}

impl RoleRepository {
    /// Creates a new RoleRepository over the given rows.
    pub fn new(rows: Vec<Role>, latency: Latency) -> Self {
        RoleRepository {
            roles: Collection::new(rows),
            latency,
        }
    }

    /// Returns every role.
    pub async fn get_all(&self) -> StoreResult<Vec<Role>> {
        self.latency.read().await;
        Ok(self.roles.all().await)
    }

    /// Gets a role by its ID.
    pub async fn get_by_id(&self, id: &str) -> StoreResult<Option<Role>> {
        self.latency.read().await;
        Ok(self.roles.find(id).await)
    }

    /// Looks a role up by exact display name.
    pub async fn get_by_name(&self, name: &str) -> StoreResult<Option<Role>> {
        self.latency.read().await;
        Ok(self
            .roles
            .filter(|r| r.name == name)
            .await
            .into_iter()
            .next())
    }

    /// Stores a new role. New roles start with `users_count` zero.
    pub async fn create(&self, draft: NewRole) -> StoreResult<Role> {
        self.latency.write().await;

        let role = draft.into_role(generate_id(), Utc::now());
        debug!(id = %role.id, name = %role.name, "Creating role");

        Ok(self.roles.insert(role).await)
    }

    /// Shallow-merges a patch into an existing role.
    ///
    /// `users_count` in the patch is ignored; the stored counter survives
    /// the merge untouched.
    pub async fn update(&self, id: &str, patch: RolePatch) -> StoreResult<Role> {
        self.latency.write().await;
        debug!(id = %id, "Updating role");

        self.roles.update(id, move |role| patch.apply(role)).await
    }

    /// Removes a role.
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        self.latency.write().await;
        debug!(id = %id, "Deleting role");

        self.roles.remove(id).await.map(|_| ())
    }
}

#[async_trait]
impl Repository for RoleRepository {
    type Entity = Role;
    type Draft = NewRole;
    type Patch = RolePatch;
    type Query = RoleQuery;

    async fn load(&self, query: &RoleQuery) -> StoreResult<Vec<Role>> {
        match query {
            RoleQuery::All => self.get_all().await,
        }
    }

    async fn find(&self, id: &str) -> StoreResult<Option<Role>> {
        self.get_by_id(id).await
    }

    async fn create(&self, draft: NewRole) -> StoreResult<Role> {
        RoleRepository::create(self, draft).await
    }

    async fn update(&self, id: &str, patch: RolePatch) -> StoreResult<Role> {
        RoleRepository::update(self, id, patch).await
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        RoleRepository::delete(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_draft(name: &str) -> NewRole {
        NewRole {
            name: name.to_string(),
            description: format!("{} role", name),
            permissions: vec!["orders.view".to_string()],
        }
    }

    #[tokio::test]
    async fn test_users_count_survives_any_patch() {
        let repo = RoleRepository::new(vec![], Latency::none());
        let role = repo.create(sample_draft("Cashier")).await.unwrap();
        assert_eq!(role.users_count, 0);

        let patch = RolePatch {
            name: Some("Senior Cashier".to_string()),
            users_count: Some(999),
            ..RolePatch::default()
        };
        let updated = repo.update(&role.id, patch).await.unwrap();

        assert_eq!(updated.name, "Senior Cashier");
        assert_eq!(updated.users_count, 0);
    }

    #[tokio::test]
    async fn test_lookup_by_name_is_exact() {
        let repo = RoleRepository::new(vec![], Latency::none());
        repo.create(sample_draft("Administrator")).await.unwrap();

        assert!(repo.get_by_name("Administrator").await.unwrap().is_some());
        assert!(repo.get_by_name("administrator").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_permission_list_replaced_whole() {
        let repo = RoleRepository::new(vec![], Latency::none());
        let role = repo.create(sample_draft("Cashier")).await.unwrap();

        let patch = RolePatch {
            permissions: Some(vec![
                "inventory.view".to_string(),
                "inventory.movements.create".to_string(),
            ]),
            ..RolePatch::default()
        };
        let updated = repo.update(&role.id, patch).await.unwrap();

        assert_eq!(updated.permissions.len(), 2);
        assert!(!updated.permissions.contains(&"orders.view".to_string()));
    }
}
