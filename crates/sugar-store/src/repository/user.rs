//! # User Repository
//!
//! Mock data access for console users.
//!
//! Passwords live in the rows in plaintext and reads hand them back like
//! any other field. The whole layer is a stand-in; nothing here is a
//! security boundary.

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::collection::{generate_id, Collection};
use crate::error::StoreResult;
use crate::latency::Latency;
use crate::repository::Repository;
use sugar_core::{NewUser, User, UserPatch};

/// Read filters for user lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserQuery {
    /// Every user.
    #[default]
    All,
    /// Active users only.
    Active,
    /// Users holding one role.
    Role(String),
}

/// Repository for user data access.
#[derive(Debug, Clone)]
pub struct UserRepository {
    users: Collection<User>,
    latency: Latency,
}

impl UserRepository {
    /// Creates a new UserRepository over the given rows.
    pub fn new(rows: Vec<User>, latency: Latency) -> Self {
        UserRepository {
            users: Collection::new(rows),
            latency,
        }
    }

    /// Returns every user.
    pub async fn get_all(&self) -> StoreResult<Vec<User>> {
        self.latency.read().await;
        Ok(self.users.all().await)
    }

    /// Gets a user by its ID.
    pub async fn get_by_id(&self, id: &str) -> StoreResult<Option<User>> {
        self.latency.read().await;
        Ok(self.users.find(id).await)
    }

    /// Returns active users only.
    pub async fn get_active(&self) -> StoreResult<Vec<User>> {
        self.latency.read().await;
        Ok(self.users.filter(|u| u.is_active).await)
    }

    /// Looks a user up by email, case-insensitively.
    ///
    /// This is the login lookup. It carries no latency of its own;
    /// `AuthService` owns the delay for the login flow.
    pub async fn get_by_email(&self, email: &str) -> Option<User> {
        let needle = email.trim().to_lowercase();
        self.users
            .filter(|u| u.email.to_lowercase() == needle)
            .await
            .into_iter()
            .next()
    }

    /// Returns users holding the given role.
    pub async fn get_by_role_id(&self, role_id: &str) -> StoreResult<Vec<User>> {
        self.latency.read().await;
        Ok(self.users.filter(|u| u.role_id == role_id).await)
    }

    /// Stores a new user. New users start active.
    pub async fn create(&self, draft: NewUser) -> StoreResult<User> {
        self.latency.write().await;

        let user = draft.into_user(generate_id(), Utc::now());
        debug!(id = %user.id, email = %user.email, "Creating user");

        Ok(self.users.insert(user).await)
    }

    /// Shallow-merges a patch into an existing user.
    pub async fn update(&self, id: &str, patch: UserPatch) -> StoreResult<User> {
        self.latency.write().await;
        debug!(id = %id, "Updating user");

        self.users
            .update(id, move |user| patch.apply(user))
            .await
    }

    /// Removes a user.
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        self.latency.write().await;
        debug!(id = %id, "Deleting user");

        self.users.remove(id).await.map(|_| ())
    }
}

#[async_trait]
impl Repository for UserRepository {
    type Entity = User;
    type Draft = NewUser;
    type Patch = UserPatch;
    type Query = UserQuery;

    async fn load(&self, query: &UserQuery) -> StoreResult<Vec<User>> {
        match query {
            UserQuery::All => self.get_all().await,
            UserQuery::Active => self.get_active().await,
            UserQuery::Role(role_id) => self.get_by_role_id(role_id).await,
        }
    }

    async fn find(&self, id: &str) -> StoreResult<Option<User>> {
        self.get_by_id(id).await
    }

    async fn create(&self, draft: NewUser) -> StoreResult<User> {
        UserRepository::create(self, draft).await
    }

    async fn update(&self, id: &str, patch: UserPatch) -> StoreResult<User> {
        UserRepository::update(self, id, patch).await
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        UserRepository::delete(self, id).await
    }
}
