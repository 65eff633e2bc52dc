//! # Access Policy
//!
//! Pure functions deciding where a user lands after login/logout and who
//! may enter the management console.
//!
//! ## The Allow-List Decision
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  login(email, password) ──► User { role_name, .. }                     │
//! │                                   │                                     │
//! │                                   ▼                                     │
//! │                      is_admin_role(role_name)?                         │
//! │                        │                  │                             │
//! │                       yes                 no                            │
//! │                        ▼                  ▼                             │
//! │                  /dashboard              /                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This fixed allow-list of role NAMES is the single operative
//! authorization mechanism. `Role.permissions` (the permission-id lists on
//! role records) is pure data for the administration screens; nothing
//! resolves it when gating the dashboard.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Admin Allow-List
// =============================================================================

/// Role names eligible for the management console.
///
/// Compared case-insensitively against `User.role_name`. Any role not
/// listed here lands on the public site after login.
pub const ADMIN_ROLES: &[&str] = &["Administrator", "Manager"];

/// Checks whether a role name is admin-capable.
///
/// ## Example
/// ```rust
/// use sugar_core::access::is_admin_role;
///
/// assert!(is_admin_role("Administrator"));
/// assert!(is_admin_role("manager"));
/// assert!(!is_admin_role("Cashier"));
/// ```
pub fn is_admin_role(role_name: &str) -> bool {
    ADMIN_ROLES
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(role_name.trim()))
}

// =============================================================================
// Redirect Destinations
// =============================================================================

/// Where the console shell sends a user after an auth event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    /// The management console.
    Dashboard,
    /// The public marketing site.
    Home,
}

impl Destination {
    /// The route path the shell navigates to.
    #[inline]
    pub const fn path(&self) -> &'static str {
        match self {
            Destination::Dashboard => "/dashboard",
            Destination::Home => "/",
        }
    }
}

/// Maps a role name to the post-login destination.
///
/// ## Example
/// ```rust
/// use sugar_core::access::{post_login_destination, Destination};
///
/// assert_eq!(post_login_destination("Administrator"), Destination::Dashboard);
/// assert_eq!(post_login_destination("Cashier"), Destination::Home);
/// ```
pub fn post_login_destination(role_name: &str) -> Destination {
    if is_admin_role(role_name) {
        Destination::Dashboard
    } else {
        Destination::Home
    }
}

/// Destination after logout, independent of who logged out.
pub const fn post_logout_destination() -> Destination {
    Destination::Home
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allow_list_is_case_insensitive() {
        assert!(is_admin_role("Administrator"));
        assert!(is_admin_role("ADMINISTRATOR"));
        assert!(is_admin_role("manager"));
        assert!(is_admin_role("  Manager  "));
    }

    #[test]
    fn test_non_admin_roles_rejected() {
        assert!(!is_admin_role("Cashier"));
        assert!(!is_admin_role("Warehouse Clerk"));
        assert!(!is_admin_role("Route Driver"));
        assert!(!is_admin_role(""));
    }

    #[test]
    fn test_login_destinations() {
        assert_eq!(post_login_destination("Manager"), Destination::Dashboard);
        assert_eq!(post_login_destination("Route Driver"), Destination::Home);
    }

    #[test]
    fn test_logout_always_goes_home() {
        assert_eq!(post_logout_destination(), Destination::Home);
        assert_eq!(post_logout_destination().path(), "/");
    }

    #[test]
    fn test_destination_paths() {
        assert_eq!(Destination::Dashboard.path(), "/dashboard");
        assert_eq!(Destination::Home.path(), "/");
    }
}
