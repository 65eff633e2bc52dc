//! # Identity Types
//!
//! Entity records for user/role/permission administration.
//!
//! ## Permission Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Permission rows are flat; the console shows them assembled:           │
//! │                                                                         │
//! │   Module ("Inventory")                                                  │
//! │   ├── Permission (view, direct child)                                  │
//! │   └── SubModule ("Movements")                                          │
//! │       ├── Permission (create)                                          │
//! │       └── Permission (delete)                                          │
//! │                                                                         │
//! │  A module with no permissions anywhere below it is NOT shown.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A Role holds a flat list of permission ids. Note that nothing resolves
//! those ids for authorization: dashboard access is decided by the
//! admin-role allow-list in `crate::access`. The permission data exists
//! for the administration screens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::Entity;

// =============================================================================
// Permission Action
// =============================================================================

/// What a permission allows on its module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PermissionAction {
    View,
    Create,
    Edit,
    Delete,
    Manage,
    Export,
}

// =============================================================================
// Permission
// =============================================================================

/// A single grantable permission, leaf of the module hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Permission {
    /// Unique identifier (UUID v4 or seeded slug).
    pub id: String,
    pub name: String,
    pub description: String,
    /// Top-level module this permission belongs to ("Inventory").
    pub module: String,
    /// Optional sub-module ("Movements"); None = direct child of module.
    pub sub_module: Option<String>,
    pub action: PermissionAction,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Entity for Permission {
    const KIND: &'static str = "Permission";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Caller-supplied fields for creating a permission.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewPermission {
    pub name: String,
    pub description: String,
    pub module: String,
    pub sub_module: Option<String>,
    pub action: PermissionAction,
}

impl NewPermission {
    pub fn into_permission(self, id: String, now: DateTime<Utc>) -> Permission {
        Permission {
            id,
            name: self.name,
            description: self.description,
            module: self.module,
            sub_module: self.sub_module,
            action: self.action,
            created_at: now,
        }
    }
}

/// Partial update for a permission.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PermissionPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub module: Option<String>,
    pub sub_module: Option<String>,
    pub action: Option<PermissionAction>,
}

impl PermissionPatch {
    /// Shallow-merges the patch over an existing record.
    pub fn apply(&self, permission: &mut Permission) {
        if let Some(name) = &self.name {
            permission.name = name.clone();
        }
        if let Some(description) = &self.description {
            permission.description = description.clone();
        }
        if let Some(module) = &self.module {
            permission.module = module.clone();
        }
        if let Some(sub_module) = &self.sub_module {
            permission.sub_module = Some(sub_module.clone());
        }
        if let Some(action) = self.action {
            permission.action = action;
        }
    }
}

// =============================================================================
// Permission Hierarchy Views
// =============================================================================

/// A sub-module grouping inside an assembled module view.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PermissionSubModule {
    pub name: String,
    pub permissions: Vec<Permission>,
}

/// An assembled Module → SubModule → Permission view for the console.
/// Built on demand from the flat permission list; never stored.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PermissionModule {
    pub name: String,
    /// Permissions directly under the module (no sub-module).
    pub permissions: Vec<Permission>,
    pub sub_modules: Vec<PermissionSubModule>,
}

impl PermissionModule {
    /// Total permissions in the module, including sub-modules.
    pub fn permission_count(&self) -> usize {
        self.permissions.len()
            + self
                .sub_modules
                .iter()
                .map(|sub| sub.permissions.len())
                .sum::<usize>()
    }
}

// =============================================================================
// Role
// =============================================================================

/// A role grouping permissions, assigned to users by name.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Role {
    /// Unique identifier (UUID v4).
    pub id: String,
    pub name: String,
    pub description: String,
    /// Flat list of permission ids. Pure data: nothing resolves these
    /// for authorization (see module docs).
    pub permissions: Vec<String>,
    /// Cached count of users holding this role. Never recalculated from
    /// the user list; protected across update.
    pub users_count: u32,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Entity for Role {
    const KIND: &'static str = "Role";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Caller-supplied fields for creating a role.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewRole {
    pub name: String,
    pub description: String,
    pub permissions: Vec<String>,
}

impl NewRole {
    /// New roles start with no users attached.
    pub fn into_role(self, id: String, now: DateTime<Utc>) -> Role {
        Role {
            id,
            name: self.name,
            description: self.description,
            permissions: self.permissions,
            users_count: 0,
            created_at: now,
        }
    }
}

/// Partial update for a role.
///
/// `users_count` is accepted for wire compatibility but ignored by
/// `apply`: the cached count is protected and survives any update
/// verbatim, whatever the caller sends.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RolePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub permissions: Option<Vec<String>>,
    pub users_count: Option<u32>,
}

impl RolePatch {
    /// Shallow-merges the patch over an existing record.
    /// `users_count` is protected and never written here.
    pub fn apply(&self, role: &mut Role) {
        if let Some(name) = &self.name {
            role.name = name.clone();
        }
        if let Some(description) = &self.description {
            role.description = description.clone();
        }
        if let Some(permissions) = &self.permissions {
            role.permissions = permissions.clone();
        }
    }
}

// =============================================================================
// User
// =============================================================================

/// A console user.
///
/// The password is stored and compared in PLAINTEXT. This is the mock
/// layer's documented behavior, not an oversight; there is no real
/// authentication anywhere in the system.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct User {
    /// Unique identifier (UUID v4).
    pub id: String,
    pub name: String,
    /// Login identifier; matched case-insensitively.
    pub email: String,
    /// Plaintext password (mock layer).
    pub password: String,
    /// Role relation (denormalized).
    pub role_id: String,
    /// Cached role display name; the admin allow-list checks this.
    pub role_name: String,
    /// Inactive users cannot log in.
    pub is_active: bool,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Entity for User {
    const KIND: &'static str = "User";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Caller-supplied fields for creating a user.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role_id: String,
    pub role_name: String,
}

impl NewUser {
    pub fn into_user(self, id: String, now: DateTime<Utc>) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            password: self.password,
            role_id: self.role_id,
            role_name: self.role_name,
            is_active: true,
            created_at: now,
        }
    }
}

/// Partial update for a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role_id: Option<String>,
    pub role_name: Option<String>,
    pub is_active: Option<bool>,
}

impl UserPatch {
    /// Shallow-merges the patch over an existing record.
    pub fn apply(&self, user: &mut User) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(password) = &self.password {
            user.password = password.clone();
        }
        if let Some(role_id) = &self.role_id {
            user.role_id = role_id.clone();
        }
        if let Some(role_name) = &self.role_name {
            user.role_name = role_name.clone();
        }
        if let Some(is_active) = self.is_active {
            user.is_active = is_active;
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_role() -> Role {
        let mut role = NewRole {
            name: "Cashier".to_string(),
            description: "Front register operations".to_string(),
            permissions: vec!["orders.view".to_string(), "orders.create".to_string()],
        }
        .into_role("role-1".to_string(), Utc::now());
        role.users_count = 2;
        role
    }

    #[test]
    fn test_role_patch_protects_users_count() {
        let mut role = sample_role();
        let patch = RolePatch {
            name: Some("New".to_string()),
            users_count: Some(999),
            ..RolePatch::default()
        };
        patch.apply(&mut role);

        assert_eq!(role.name, "New");
        assert_eq!(role.users_count, 2);
    }

    #[test]
    fn test_role_patch_replaces_permission_list_whole() {
        let mut role = sample_role();
        let patch = RolePatch {
            permissions: Some(vec!["inventory.view".to_string()]),
            ..RolePatch::default()
        };
        patch.apply(&mut role);

        assert_eq!(role.permissions, vec!["inventory.view".to_string()]);
        // Untouched fields survive
        assert_eq!(role.description, "Front register operations");
    }

    #[test]
    fn test_new_user_starts_active() {
        let user = NewUser {
            name: "Ana Torres".to_string(),
            email: "ana@sugaros.mx".to_string(),
            password: "caramelo".to_string(),
            role_id: "role-1".to_string(),
            role_name: "Cashier".to_string(),
        }
        .into_user("user-1".to_string(), Utc::now());

        assert!(user.is_active);
        assert_eq!(user.role_name, "Cashier");
    }

    #[test]
    fn test_user_patch_can_deactivate() {
        let mut user = NewUser {
            name: "Ana Torres".to_string(),
            email: "ana@sugaros.mx".to_string(),
            password: "caramelo".to_string(),
            role_id: "role-1".to_string(),
            role_name: "Cashier".to_string(),
        }
        .into_user("user-1".to_string(), Utc::now());

        let patch = UserPatch {
            is_active: Some(false),
            ..UserPatch::default()
        };
        patch.apply(&mut user);

        assert!(!user.is_active);
        assert_eq!(user.email, "ana@sugaros.mx");
    }

    #[test]
    fn test_permission_module_counts_sub_modules() {
        let perm = |id: &str, sub: Option<&str>| Permission {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            module: "Inventory".to_string(),
            sub_module: sub.map(|s| s.to_string()),
            action: PermissionAction::View,
            created_at: Utc::now(),
        };

        let module = PermissionModule {
            name: "Inventory".to_string(),
            permissions: vec![perm("inventory.view", None)],
            sub_modules: vec![PermissionSubModule {
                name: "Movements".to_string(),
                permissions: vec![
                    perm("movements.view", Some("Movements")),
                    perm("movements.create", Some("Movements")),
                ],
            }],
        };

        assert_eq!(module.permission_count(), 3);
    }
}
