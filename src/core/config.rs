/*!
 * Run Configuration
 *
 * Read once at startup, immutable afterwards, shared read-only with every
 * actor.
 *
 * Loading order:
 * 1. Built-in defaults (see `core::limits`)
 * 2. JSON file named by `MONITOR_QUEUE_CONFIG`, if set
 * 3. Per-field environment overrides
 * 4. Validation: every integer must be positive
 */

use super::errors::{ConfigError, ConfigResult};
use super::limits::*;
use super::sync::NotifyPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

/// Path to an optional JSON config file
pub const ENV_CONFIG_FILE: &str = "MONITOR_QUEUE_CONFIG";
pub const ENV_PRODUCERS: &str = "MONITOR_QUEUE_PRODUCERS";
pub const ENV_CONSUMERS: &str = "MONITOR_QUEUE_CONSUMERS";
pub const ENV_PRODUCER_DELAY_MS: &str = "MONITOR_QUEUE_PRODUCER_DELAY_MS";
pub const ENV_CONSUMER_DELAY_MS: &str = "MONITOR_QUEUE_CONSUMER_DELAY_MS";
pub const ENV_ITEMS: &str = "MONITOR_QUEUE_ITEMS";
pub const ENV_ATTEMPTS: &str = "MONITOR_QUEUE_ATTEMPTS";
pub const ENV_NOTIFY_POLICY: &str = "MONITOR_QUEUE_NOTIFY_POLICY";

/// Startup configuration for one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub producer_threads: u32,
    pub consumer_threads: u32,
    pub producer_wait_delay_ms: u64,
    pub consumer_wait_delay_ms: u64,
    /// Items enqueued by each producer
    pub items_to_produce: u32,
    /// Dequeue attempts made by each consumer
    pub consumer_attempts: u32,
    pub notify_policy: NotifyPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            producer_threads: DEFAULT_PRODUCER_THREADS,
            consumer_threads: DEFAULT_CONSUMER_THREADS,
            producer_wait_delay_ms: DEFAULT_PRODUCER_WAIT_DELAY_MS,
            consumer_wait_delay_ms: DEFAULT_CONSUMER_WAIT_DELAY_MS,
            items_to_produce: DEFAULT_ITEMS_TO_PRODUCE,
            consumer_attempts: DEFAULT_CONSUMER_ATTEMPTS,
            notify_policy: NotifyPolicy::default(),
        }
    }
}

impl AppConfig {
    /// Load from the process environment
    pub fn load() -> ConfigResult<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = match lookup(ENV_CONFIG_FILE) {
            Some(path) if !path.trim().is_empty() => Self::from_file(path.trim())?,
            _ => Self::default(),
        };

        let config = base.with_overrides(lookup)?;
        config.validate()?;
        debug!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Read a JSON config file. Missing fields keep their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&raw).map_err(|e| ConfigError::Malformed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Apply per-field overrides on top of `self`
    pub fn with_overrides<F>(mut self, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = parse_var(&lookup, ENV_PRODUCERS)? {
            self.producer_threads = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_CONSUMERS)? {
            self.consumer_threads = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_PRODUCER_DELAY_MS)? {
            self.producer_wait_delay_ms = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_CONSUMER_DELAY_MS)? {
            self.consumer_wait_delay_ms = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_ITEMS)? {
            self.items_to_produce = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_ATTEMPTS)? {
            self.consumer_attempts = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_NOTIFY_POLICY)? {
            self.notify_policy = v;
        }
        Ok(self)
    }

    /// Reject zero counts, delays and budgets
    pub fn validate(&self) -> ConfigResult<()> {
        let fields: [(&str, u64); 6] = [
            ("producer_threads", self.producer_threads.into()),
            ("consumer_threads", self.consumer_threads.into()),
            ("producer_wait_delay_ms", self.producer_wait_delay_ms),
            ("consumer_wait_delay_ms", self.consumer_wait_delay_ms),
            ("items_to_produce", self.items_to_produce.into()),
            ("consumer_attempts", self.consumer_attempts.into()),
        ];

        match fields.iter().find(|(_, value)| *value == 0) {
            Some((field, value)) => Err(ConfigError::NonPositive {
                field: (*field).to_string(),
                value: *value,
            }),
            None => Ok(()),
        }
    }

    #[inline]
    pub fn producer_wait_delay(&self) -> Duration {
        Duration::from_millis(self.producer_wait_delay_ms)
    }

    #[inline]
    pub fn consumer_wait_delay(&self) -> Duration {
        Duration::from_millis(self.consumer_wait_delay_ms)
    }

    /// Items every producer together will enqueue over the whole run
    #[inline]
    pub fn total_planned_items(&self) -> u64 {
        u64::from(self.producer_threads) * u64::from(self.items_to_produce)
    }

    /// Upper bound on items all consumers together can remove
    #[inline]
    pub fn total_consumer_attempts(&self) -> u64 {
        u64::from(self.consumer_threads) * u64::from(self.consumer_attempts)
    }
}

fn parse_var<F, T>(lookup: &F, var: &str) -> ConfigResult<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidEnv {
                var: var.to_string(),
                value: raw.clone(),
                reason: e.to_string(),
            }),
    }
}
