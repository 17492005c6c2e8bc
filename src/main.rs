/*!
 * Monitor Queue - Main Entry Point
 *
 * Loads configuration, starts the producer and consumer actors, and reports
 * the final buffer state once they have all finished.
 */

use anyhow::Context;
use monitor_queue::{init_tracing, AppConfig, Orchestrator};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    info!("Monitor queue starting...");

    let config = AppConfig::load().context("Failed to load configuration")?;
    info!(
        producers = config.producer_threads,
        consumers = config.consumer_threads,
        producer_wait_delay_ms = config.producer_wait_delay_ms,
        consumer_wait_delay_ms = config.consumer_wait_delay_ms,
        items_to_produce = config.items_to_produce,
        consumer_attempts = config.consumer_attempts,
        notify_policy = %config.notify_policy,
        "Configuration loaded"
    );

    let orchestrator = Orchestrator::with_tracing(config)?;
    let handles = orchestrator.start().context("Failed to start actors")?;

    // Actor threads die with the process once main returns, so wait for them here
    let summary = handles.join_all()?;

    info!(
        produced = summary.total_produced(),
        consumed = summary.total_consumed(),
        empty_attempts = summary.total_empty_attempts(),
        remaining = summary.remaining.len(),
        waits_notified = summary.stats.waits_notified,
        waits_timed_out = summary.stats.waits_timed_out,
        "Run complete"
    );
    tracing::debug!(
        summary = %serde_json::to_string(&summary).context("Failed to serialize run summary")?,
        "Run summary"
    );

    Ok(())
}
