/*!
 * Shared helpers for actor tests
 */

use monitor_queue::{AppConfig, MemorySink, Orchestrator, RunSummary};
use std::sync::Arc;

/// Configuration with the given shape and short delays
pub fn fast_config(producers: u32, consumers: u32, items: u32, attempts: u32) -> AppConfig {
    AppConfig {
        producer_threads: producers,
        consumer_threads: consumers,
        producer_wait_delay_ms: 1,
        consumer_wait_delay_ms: 2,
        items_to_produce: items,
        consumer_attempts: attempts,
        ..Default::default()
    }
}

/// Start every actor and wait for all of them
pub fn run_to_completion(config: AppConfig) -> (RunSummary, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let orchestrator = Orchestrator::new(config, sink.clone()).expect("valid config");
    let summary = orchestrator
        .start()
        .expect("actors spawned")
        .join_all()
        .expect("no actor panicked");
    (summary, sink)
}
