/*!
 * Shared State
 *
 * Everything the actors share, created once by the orchestrator and handed
 * to each actor thread behind an `Arc`.
 */

use crate::core::config::AppConfig;
use crate::core::sync::Monitor;
use crate::core::types::Item;
use crate::monitoring::StatusSink;
use std::sync::Arc;

/// Monitor, configuration and status sink for one run
pub struct SharedState {
    config: AppConfig,
    monitor: Monitor<Item>,
    sink: Arc<dyn StatusSink>,
}

impl SharedState {
    pub fn new(config: AppConfig, sink: Arc<dyn StatusSink>) -> Self {
        let monitor = Monitor::with_policy(config.notify_policy);
        Self {
            config,
            monitor,
            sink,
        }
    }

    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[inline]
    pub fn monitor(&self) -> &Monitor<Item> {
        &self.monitor
    }

    #[inline]
    pub fn sink(&self) -> &dyn StatusSink {
        self.sink.as_ref()
    }
}
