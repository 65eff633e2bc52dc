//! # Authentication Service
//!
//! Mock credential check over the user repository.
//!
//! ## Failure Collapsing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  login(email, password)                                                 │
//! │     │                                                                   │
//! │     ├── unknown email        ──┐                                        │
//! │     ├── wrong password       ──┼──►  Err(InvalidCredentials)            │
//! │     ├── account deactivated  ──┘     (one error, three causes)          │
//! │     │                                                                   │
//! │     └── all checks pass      ──►     Ok(User)                           │
//! │                                                                         │
//! │  The caller cannot tell the causes apart; the warn! logs can.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Passwords live in plaintext on the seeded user records and are
//! compared with `==`. That is the mock contract: no hashing, no
//! sessions, no tokens.

use std::sync::Arc;

use tracing::{info, warn};

use crate::error::{StoreError, StoreResult};
use crate::latency::Latency;
use crate::repository::user::UserRepository;
use sugar_core::User;

/// Mock authentication over the user repository.
#[derive(Debug, Clone)]
pub struct AuthService {
    users: Arc<UserRepository>,
    latency: Latency,
}

impl AuthService {
    /// Creates a new AuthService backed by the given user repository.
    pub fn new(users: Arc<UserRepository>, latency: Latency) -> Self {
        AuthService { users, latency }
    }

    /// Checks a credential pair and returns the matching user.
    ///
    /// The email match is case-insensitive; the password match is exact.
    /// Deactivated accounts fail even with correct credentials.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// match store.auth().login("admin@sugaros.mx", "caramelo").await {
    ///     Ok(user) => println!("welcome, {}", user.name),
    ///     Err(e) => eprintln!("{}", e),
    /// }
    /// ```
    pub async fn login(&self, email: &str, password: &str) -> StoreResult<User> {
        self.latency.write().await;

        let user = match self.users.get_by_email(email).await {
            Some(user) => user,
            None => {
                warn!(email = %email, "Login rejected: unknown email");
                return Err(StoreError::InvalidCredentials);
            }
        };

        if user.password != password {
            warn!(email = %user.email, "Login rejected: wrong password");
            return Err(StoreError::InvalidCredentials);
        }

        if !user.is_active {
            warn!(email = %user.email, "Login rejected: account deactivated");
            return Err(StoreError::InvalidCredentials);
        }

        info!(email = %user.email, role = %user.role_name, "Login succeeded");
        Ok(user)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
