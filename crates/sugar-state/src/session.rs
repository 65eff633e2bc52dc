//! # Session State
//!
//! Carries the signed-in user and the redirect policy around them.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Lifecycle                                    │
//! │                                                                         │
//! │  Signed out ──► login(email, password)                                  │
//! │                      │                                                  │
//! │                      ├─ Ok(user) ──► user stored                        │
//! │                      │               login_destination():               │
//! │                      │                 admin roles → /dashboard         │
//! │                      │                 everyone else → /                │
//! │                      │                                                  │
//! │                      └─ Err ───────► error stored, still signed out     │
//! │                                      (one message for every cause)      │
//! │                                                                         │
//! │  Signed in ──► logout() ──► user cleared, returns Home                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The dashboard gate is the role-name allow-list in `sugar_core::access`;
//! `Role.permissions` plays no part in it.

use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;
use tracing::debug;

use sugar_core::access::{is_admin_role, post_login_destination, post_logout_destination};
use sugar_core::{Destination, User};
use sugar_store::{AuthService, StoreResult};

/// Point-in-time copy of the session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    /// The signed-in user, if any.
    pub user: Option<User>,
    /// Whether a `login` is in flight.
    pub loading: bool,
    /// Display message of the last failed login, if any.
    pub error: Option<String>,
}

#[derive(Debug, Default)]
struct SessionInner {
    user: Option<User>,
    loading: bool,
    error: Option<String>,
}

/// Binds the auth flow to reactive session state.
///
/// Works like a single-row list binding: `login` drives `loading`, stores
/// the server response on success, and records the error message on
/// failure. Clones share one session.
#[derive(Clone)]
pub struct SessionState {
    auth: AuthService,
    inner: Arc<Mutex<SessionInner>>,
}

impl SessionState {
    /// Starts a signed-out session over an auth service.
    pub fn new(auth: AuthService) -> Self {
        SessionState {
            auth,
            inner: Arc::new(Mutex::new(SessionInner::default())),
        }
    }

    /// Attempts a login and stores the user on success.
    ///
    /// Every failure carries the same message, so the snapshot never
    /// reveals whether the email or the password was wrong.
    pub async fn login(&self, email: &str, password: &str) -> StoreResult<User> {
        {
            let mut inner = self.lock();
            inner.loading = true;
        }

        let result = self.auth.login(email, password).await;

        let mut inner = self.lock();
        inner.loading = false;
        match &result {
            Ok(user) => {
                inner.user = Some(user.clone());
                inner.error = None;
            }
            Err(e) => {
                inner.error = Some(e.to_string());
            }
        }
        result
    }

    /// Clears the user and returns where the console should land.
    pub fn logout(&self) -> Destination {
        let mut inner = self.lock();
        if let Some(user) = inner.user.take() {
            debug!(email = %user.email, "Session ended");
        }
        post_logout_destination()
    }

    /// The signed-in user, if any.
    pub fn current_user(&self) -> Option<User> {
        self.lock().user.clone()
    }

    /// Whether anyone is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.lock().user.is_some()
    }

    /// Whether the signed-in user's role clears the dashboard allow-list.
    pub fn can_access_dashboard(&self) -> bool {
        self.lock()
            .user
            .as_ref()
            .map(|user| is_admin_role(&user.role_name))
            .unwrap_or(false)
    }

    /// Where the console should land for the current session.
    ///
    /// Signed out means Home, same as a non-admin role.
    pub fn login_destination(&self) -> Destination {
        match self.lock().user.as_ref() {
            Some(user) => post_login_destination(&user.role_name),
            None => Destination::Home,
        }
    }

    /// Whether a `login` is in flight.
    pub fn is_loading(&self) -> bool {
        self.lock().loading
    }

    /// Display message of the last failed login, if any.
    pub fn error(&self) -> Option<String> {
        self.lock().error.clone()
    }

    /// Copies out the full snapshot.
    pub fn snapshot(&self) -> SessionSnapshot {
        let inner = self.lock();
        SessionSnapshot {
            user: inner.user.clone(),
            loading: inner.loading,
            error: inner.error.clone(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionInner> {
        self.inner.lock().expect("Session state mutex poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sugar_core::{NewUser, UserPatch};
    use sugar_store::{Latency, UserRepository};

    fn draft(name: &str, email: &str, password: &str, role_name: &str) -> NewUser {
        NewUser {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role_id: "role-1".to_string(),
            role_name: role_name.to_string(),
        }
    }

    async fn session() -> SessionState {
        let users = Arc::new(UserRepository::new(vec![], Latency::none()));
        users
            .create(draft(
                "Ana Torres",
                "ana@sugaros.mx",
                "caramelo",
                "Administrator",
            ))
            .await
            .unwrap();
        users
            .create(draft(
                "Benito Ruiz",
                "benito@sugaros.mx",
                "paleta",
                "Cashier",
            ))
            .await
            .unwrap();
        let frozen = users
            .create(draft(
                "Lupita Osuna",
                "lupita@sugaros.mx",
                "gomita",
                "Manager",
            ))
            .await
            .unwrap();
        users
            .update(
                &frozen.id,
                UserPatch {
                    is_active: Some(false),
                    ..UserPatch::default()
                },
            )
            .await
            .unwrap();
        SessionState::new(AuthService::new(users, Latency::none()))
    }

    #[tokio::test]
    async fn test_signed_out_defaults() {
        let session = session().await;

        assert!(!session.is_authenticated());
        assert!(!session.can_access_dashboard());
        assert_eq!(session.login_destination(), Destination::Home);
        assert!(session.current_user().is_none());
        assert_eq!(session.error(), None);
    }

    #[tokio::test]
    async fn test_login_success_stores_user() {
        let session = session().await;

        let user = session.login("ana@sugaros.mx", "caramelo").await.unwrap();

        assert_eq!(user.email, "ana@sugaros.mx");
        assert!(session.is_authenticated());
        assert!(!session.is_loading());
        assert_eq!(session.error(), None);

        let snapshot = session.snapshot();
        assert_eq!(snapshot.user.unwrap().name, "Ana Torres");
    }

    #[tokio::test]
    async fn test_admin_lands_on_dashboard() {
        let session = session().await;
        session.login("ana@sugaros.mx", "caramelo").await.unwrap();

        assert!(session.can_access_dashboard());
        assert_eq!(session.login_destination(), Destination::Dashboard);
        assert_eq!(session.login_destination().path(), "/dashboard");
    }

    #[tokio::test]
    async fn test_cashier_stays_home() {
        let session = session().await;
        session.login("benito@sugaros.mx", "paleta").await.unwrap();

        assert!(session.is_authenticated());
        assert!(!session.can_access_dashboard());
        assert_eq!(session.login_destination(), Destination::Home);
    }

    #[tokio::test]
    async fn test_failed_login_records_one_message() {
        let session = session().await;

        let wrong_password = session
            .login("ana@sugaros.mx", "chicloso")
            .await
            .unwrap_err();
        let unknown_email = session
            .login("nadie@sugaros.mx", "caramelo")
            .await
            .unwrap_err();
        let deactivated = session.login("lupita@sugaros.mx", "gomita").await.unwrap_err();

        assert_eq!(wrong_password.to_string(), "Invalid email or password");
        assert_eq!(unknown_email.to_string(), wrong_password.to_string());
        assert_eq!(deactivated.to_string(), wrong_password.to_string());
        assert!(!session.is_authenticated());
        assert_eq!(session.error().as_deref(), Some("Invalid email or password"));
    }

    #[tokio::test]
    async fn test_retry_after_failure_clears_error() {
        let session = session().await;

        session.login("ana@sugaros.mx", "wrong").await.unwrap_err();
        assert!(session.error().is_some());

        session.login("ana@sugaros.mx", "caramelo").await.unwrap();

        assert_eq!(session.error(), None);
        assert!(session.is_authenticated());
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let session = session().await;
        session.login("ana@sugaros.mx", "caramelo").await.unwrap();

        let destination = session.logout();

        assert_eq!(destination, Destination::Home);
        assert_eq!(destination.path(), "/");
        assert!(!session.is_authenticated());
        assert_eq!(session.login_destination(), Destination::Home);
    }
}
