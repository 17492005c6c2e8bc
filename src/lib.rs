/*!
 * Monitor Queue Library
 * Bounded-wait producer/consumer coordination over one shared FIFO buffer
 */

pub mod actors;
pub mod core;
pub mod monitoring;

// Re-exports
pub use actors::{
    Actor, ActorHandle, ActorHandles, Consumer, ConsumerReport, Orchestrator, Producer,
    ProducerReport, RunSummary, SharedState,
};
pub use crate::core::sync::{
    Monitor, MonitorGuard, MonitorStatsSnapshot, NotifyPolicy, WaitOutcome, WakeResult,
};
pub use crate::core::{AppConfig, ConfigError, Item, OrchestratorError};
pub use monitoring::{init_tracing, MemorySink, StatusLine, StatusSink, TracingSink};
