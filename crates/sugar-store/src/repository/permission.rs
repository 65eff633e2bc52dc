//! # Permission Repository
//!
//! Mock data access for the permission catalog.
//!
//! ## Flat Rows, Assembled Views
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Permission Hierarchy Assembly                        │
//! │                                                                         │
//! │  Stored: flat Permission rows                                          │
//! │                                                                         │
//! │  module      sub_module   action                                       │
//! │  ─────────   ──────────   ──────                                       │
//! │  Inventory   (none)       view                                         │
//! │  Inventory   Movements    create                                       │
//! │  Inventory   Movements    view                                         │
//! │  Orders      (none)       view                                         │
//! │                                                                         │
//! │  modules() assembles:                                                  │
//! │                                                                         │
//! │  Inventory                                                             │
//! │  ├── view                                                              │
//! │  └── Movements                                                         │
//! │      ├── create                                                        │
//! │      └── view                                                          │
//! │  Orders                                                                │
//! │  └── view                                                              │
//! │                                                                         │
//! │  A module appears only while it still has at least one permission;     │
//! │  delete the last row and the module drops out of the view.             │
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
    NewPermission, Permission, PermissionModule, PermissionPatch, PermissionSubModule,
};

/// Read filters for permission lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionQuery {
    /// Every permission, flat.
    #[default]
    All,
    /// Permissions of one module, flat.
    Module(String),
}

/// Repository for permission catalog access.
#[derive(Debug, Clone)]
pub struct PermissionRepository {
    permissions: Collection<Permission>,
    latency: Latency,
}

impl PermissionRepository {
    /// Creates a new PermissionRepository over the given rows.
    pub fn new(rows: Vec<Permission>, latency: Latency) -> Self {
        PermissionRepository {
            permissions: Collection::new(rows),
            latency,
        }
    }

    /// Returns every permission, flat.
    pub async fn get_all(&self) -> StoreResult<Vec<Permission>> {
        self.latency.read().await;
        Ok(self.permissions.all().await)
    }

    /// Gets a permission by its ID.
    pub async fn get_by_id(&self, id: &str) -> StoreResult<Option<Permission>> {
        self.latency.read().await;
        Ok(self.permissions.find(id).await)
    }

    /// Returns the permissions of one module, flat.
    pub async fn get_by_module(&self, module: &str) -> StoreResult<Vec<Permission>> {
        self.latency.read().await;
        Ok(self.permissions.filter(|p| p.module == module).await)
    }

    /// Assembles the Module → SubModule → Permission view.
    ///
    /// Modules and sub-modules appear in first-seen row order. A module
    /// with no remaining permissions is simply absent from the result.
    pub async fn modules(&self) -> StoreResult<Vec<PermissionModule>> {
        self.latency.read().await;
        Ok(assemble_modules(self.permissions.all().await))
    }

    /// Stores a new permission.
    pub async fn create(&self, draft: NewPermission) -> StoreResult<Permission> {
        self.latency.write().await;

        let permission = draft.into_permission(generate_id(), Utc::now());
        debug!(
            id = %permission.id,
            module = %permission.module,
            "Creating permission"
        );

        Ok(self.permissions.insert(permission).await)
    }

    /// Shallow-merges a patch into an existing permission.
    pub async fn update(&self, id: &str, patch: PermissionPatch) -> StoreResult<Permission> {
        self.latency.write().await;
        debug!(id = %id, "Updating permission");

        self.permissions
            .update(id, move |permission| patch.apply(permission))
            .await
    }

    /// Removes a permission.
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        self.latency.write().await;
        debug!(id = %id, "Deleting permission");

        self.permissions.remove(id).await.map(|_| ())
    }
}

/// Groups flat permission rows into the module tree.
fn assemble_modules(rows: Vec<Permission>) -> Vec<PermissionModule> {
    let mut modules: Vec<PermissionModule> = Vec::new();

    for permission in rows {
        let index = match modules.iter().position(|m| m.name == permission.module) {
            Some(index) => index,
            None => {
                modules.push(PermissionModule {
                    name: permission.module.clone(),
                    permissions: Vec::new(),
                    sub_modules: Vec::new(),
                });
                modules.len() - 1
            }
        };
        let module = &mut modules[index];

        match permission.sub_module.clone() {
            None => module.permissions.push(permission),
            Some(sub_name) => {
                match module
                    .sub_modules
                    .iter_mut()
                    .find(|sub| sub.name == sub_name)
                {
                    Some(sub) => sub.permissions.push(permission),
                    None => module.sub_modules.push(PermissionSubModule {
                        name: sub_name,
                        permissions: vec![permission],
                    }),
                }
            }
        }
    }

    modules
}

#[async_trait]
impl Repository for PermissionRepository {
    type Entity = Permission;
    type Draft = NewPermission;
    type Patch = PermissionPatch;
    type Query = PermissionQuery;

    async fn load(&self, query: &PermissionQuery) -> StoreResult<Vec<Permission>> {
        match query {
            PermissionQuery::All => self.get_all().await,
            PermissionQuery::Module(module) => self.get_by_module(module).await,
        }
    }

    async fn find(&self, id: &str) -> StoreResult<Option<Permission>> {
        self.get_by_id(id).await
    }

    async fn create(&self, draft: NewPermission) -> StoreResult<Permission> {
        PermissionRepository::create(self, draft).await
    }

    async fn update(&self, id: &str, patch: PermissionPatch) -> StoreResult<Permission> {
        PermissionRepository::update(self, id, patch).await
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        PermissionRepository::delete(self, id).await
    }
}
