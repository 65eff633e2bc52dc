//! # sugar-core: Pure Domain Layer for Sugar OS
//!
//! This crate is the foundation of Sugar OS, the management console of a
//! candy-store chain. It contains entity records and pure domain logic
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Sugar OS Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Console UI (out of scope)                    │   │
//! │  │    Catalog ──► Orders ──► Inventory ──► Administration          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    sugar-state (bindings)                       │   │
//! │  │    ListState per entity, SessionState for auth                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    sugar-store (mock data layer)                │   │
//! │  │    In-memory repositories + simulated latency                   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ sugar-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  access   │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │ allow-list│  │   rules   │  │   │
//! │  │   │   Order   │  │  totals   │  │ redirects │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORE • NO NETWORK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Entity records, drafts, and patches for all console areas
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Validation error taxonomy
//! - [`validation`] - Caller-side field validation
//! - [`access`] - Admin allow-list and redirect destinations
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Store, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use sugar_core::money::Money;
//!
//! // Create money from cents (never from floats!)
//! let subtotal = Money::from_cents(1797);
//! let total = Money::order_total(
//!     subtotal,
//!     Money::from_cents(288), // tax
//!     Money::zero(),          // discount
//!     Money::zero(),          // shipping
//! );
//! assert_eq!(total.cents(), 2085);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod access;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use sugar_core::Money` instead of
// `use sugar_core::money::Money`

pub use access::Destination;
pub use error::{ValidationError, ValidationResult};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single line item or stock adjustment.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
/// Checked by `validation::validate_quantity` for callers that opt in;
/// the store itself does not enforce it.
pub const MAX_ITEM_QUANTITY: i32 = 9999;

/// Maximum price in cents ($100,000.00).
///
/// ## Business Reason
/// A sanity ceiling for catalog entry typos. Checked by
/// `validation::validate_price` for callers that opt in.
pub const MAX_PRICE_CENTS: i64 = 10_000_000;
