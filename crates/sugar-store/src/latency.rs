//! # Latency Simulation
//!
//! Fixed artificial delays that stand in for network round-trips.
//!
//! ## Why Simulate Latency
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Simulated Request Timing                             │
//! │                                                                         │
//! │  UI calls repo.get_all()                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  latency.read().await ← sleeps 150ms (standard profile)                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Collection read ← instant, it is just a Vec behind a lock             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  UI sees loading spinners, race windows, and stale-response            │
//! │  ordering exactly as it would against a real backend                   │
//! │                                                                         │
//! │  Without the delay every operation resolves in the same tick and       │
//! │  loading states are untestable.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Profiles
//! - `standard()`: 150ms reads, 300ms writes. The default everywhere.
//! - `none()`: zero delay, skips the sleep call. For unit tests.
//! - `from_millis(read, write)`: anything else.

use std::time::Duration;

use tokio::time::sleep;

/// Fixed delays applied before every repository operation.
///
/// ## Example
/// ```
/// use sugar_store::Latency;
///
/// let latency = Latency::standard();
/// assert_eq!(latency.read_delay().as_millis(), 150);
/// assert_eq!(latency.write_delay().as_millis(), 300);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    read: Duration,
    write: Duration,
}

impl Latency {
    /// The standard profile: 150ms reads, 300ms writes.
    pub const fn standard() -> Self {
        Latency {
            read: Duration::from_millis(150),
            write: Duration::from_millis(300),
        }
    }

    /// Custom delays in milliseconds.
    pub const fn from_millis(read_ms: u64, write_ms: u64) -> Self {
        Latency {
            read: Duration::from_millis(read_ms),
            write: Duration::from_millis(write_ms),
        }
    }

    /// Zero delay. Repository tests use this so they run instantly.
    pub const fn none() -> Self {
        Latency {
            read: Duration::ZERO,
            write: Duration::ZERO,
        }
    }

    /// The configured read delay.
    #[inline]
    pub const fn read_delay(&self) -> Duration {
        self.read
    }

    /// The configured write delay.
    #[inline]
    pub const fn write_delay(&self) -> Duration {
        self.write
    }

    /// Waits out the read delay.
    pub async fn read(&self) {
        if !self.read.is_zero() {
            sleep(self.read).await;
        }
    }

    /// Waits out the write delay.
    pub async fn write(&self) {
        if !self.write.is_zero() {
            sleep(self.write).await;
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Latency::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_profile() {
        let latency = Latency::standard();
        assert_eq!(latency.read_delay(), Duration::from_millis(150));
        assert_eq!(latency.write_delay(), Duration::from_millis(300));
    }

    #[test]
    fn test_default_is_standard() {
        assert_eq!(Latency::default(), Latency::standard());
    }

    #[tokio::test(start_paused = true)]
    async fn test_none_resolves_instantly() {
        let latency = Latency::none();
        let before = tokio::time::Instant::now();

        latency.read().await;
        latency.write().await;

        assert_eq!(before.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_read_waits_configured_delay() {
        let latency = Latency::from_millis(150, 300);
        let before = tokio::time::Instant::now();

        latency.read().await;

        assert_eq!(before.elapsed(), Duration::from_millis(150));
    }

    #[tokio::test(start_paused = true)]
    async fn test_write_waits_configured_delay() {
        let latency = Latency::from_millis(150, 300);
        let before = tokio::time::Instant::now();

        latency.write().await;

        assert_eq!(before.elapsed(), Duration::from_millis(300));
    }
}
