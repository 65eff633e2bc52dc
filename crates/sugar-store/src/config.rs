//! # Store Configuration
//!
//! Construction-time knobs for the mock store.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     SUGAR_READ_DELAY_MS=0                                              │
//! │     SUGAR_WRITE_DELAY_MS=0                                             │
//! │     SUGAR_SAMPLE_DATA=false                                            │
//! │                                                                         │
//! │  2. Builder Methods                                                    │
//! │     StoreConfig::default().with_latency(Latency::none())               │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     Latency::standard() (150ms / 300ms), sample data seeded            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no config file: the whole store lives and dies with the
//! process, so everything is decided at construction.

use tracing::warn;

use crate::latency::Latency;

/// Construction-time configuration for [`Store`](crate::store::Store).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Simulated delay applied to repository calls.
    pub latency: Latency,

    /// Whether the store starts with the seeded sample dataset.
    /// When false, every collection starts empty.
    pub sample_data: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            latency: Latency::standard(),
            sample_data: true,
        }
    }
}

impl StoreConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// A configuration with no delays and no sample data. What tests want.
    pub fn instant() -> Self {
        StoreConfig {
            latency: Latency::none(),
            sample_data: false,
        }
    }

    /// Replaces the simulated latency.
    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    /// Sets whether the sample dataset is seeded.
    pub fn with_sample_data(mut self, sample_data: bool) -> Self {
        self.sample_data = sample_data;
        self
    }

    /// Builds the default configuration with environment overrides.
    ///
    /// Malformed values fall back silently for the numeric delays and
    /// with a `warn!` for the sample-data flag.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        let mut read_ms = self.latency.read_delay().as_millis() as u64;
        let mut write_ms = self.latency.write_delay().as_millis() as u64;

        if let Ok(ms) = std::env::var("SUGAR_READ_DELAY_MS") {
            if let Ok(parsed) = ms.parse::<u64>() {
                read_ms = parsed;
            }
        }

        if let Ok(ms) = std::env::var("SUGAR_WRITE_DELAY_MS") {
            if let Ok(parsed) = ms.parse::<u64>() {
                write_ms = parsed;
            }
        }

        self.latency = Latency::from_millis(read_ms, write_ms);

        if let Ok(flag) = std::env::var("SUGAR_SAMPLE_DATA") {
            match flag.to_lowercase().as_str() {
                "true" | "1" | "yes" => self.sample_data = true,
                "false" | "0" | "no" => self.sample_data = false,
                _ => warn!(value = %flag, "Unknown SUGAR_SAMPLE_DATA value in environment"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.latency, Latency::standard());
        assert!(config.sample_data);
    }

    #[test]
    fn test_instant_config() {
        let config = StoreConfig::instant();
        assert_eq!(config.latency.read_delay(), Duration::ZERO);
        assert_eq!(config.latency.write_delay(), Duration::ZERO);
        assert!(!config.sample_data);
    }

    #[test]
    fn test_builder_methods() {
        let config = StoreConfig::new()
            .with_latency(Latency::from_millis(10, 20))
            .with_sample_data(false);

        assert_eq!(config.latency.read_delay(), Duration::from_millis(10));
        assert_eq!(config.latency.write_delay(), Duration::from_millis(20));
        assert!(!config.sample_data);
    }

    // Env mutation is process-global, so every from_env phase lives in
    // one test.
    #[test]
    fn test_env_overrides_and_malformed_fallback() {
        std::env::set_var("SUGAR_READ_DELAY_MS", "10");
        std::env::set_var("SUGAR_WRITE_DELAY_MS", "20");
        std::env::set_var("SUGAR_SAMPLE_DATA", "false");

        let config = StoreConfig::from_env();
        assert_eq!(config.latency.read_delay(), Duration::from_millis(10));
        assert_eq!(config.latency.write_delay(), Duration::from_millis(20));
        assert!(!config.sample_data);

        std::env::set_var("SUGAR_READ_DELAY_MS", "abc");
        std::env::set_var("SUGAR_WRITE_DELAY_MS", "-40");
        std::env::set_var("SUGAR_SAMPLE_DATA", "garbage");

        let config = StoreConfig::from_env();
        assert_eq!(config.latency.read_delay(), Duration::from_millis(150));
        assert_eq!(config.latency.write_delay(), Duration::from_millis(300));
        assert!(config.sample_data);

        std::env::remove_var("SUGAR_READ_DELAY_MS");
        std::env::remove_var("SUGAR_WRITE_DELAY_MS");
        std::env::remove_var("SUGAR_SAMPLE_DATA");

        assert_eq!(StoreConfig::from_env(), StoreConfig::default());
    }
}
