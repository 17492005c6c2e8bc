/*!
 * End-to-end runs with the classic parameter sets
 */

use super::common::run_to_completion;
use monitor_queue::AppConfig;
use pretty_assertions::assert_eq;

#[test]
fn test_attempts_exceed_items_drains_buffer() {
    // 1 producer, 1 consumer, 10ms / 100ms, 10 items, 12 attempts
    let config = AppConfig::default();
    let (summary, _sink) = run_to_completion(config);

    assert_eq!(summary.total_produced(), 10);
    assert_eq!(summary.total_consumed(), 10);
    assert!(summary.remaining.is_empty());
    assert_eq!(summary.consumers[0].attempts(), 12);
}

#[test]
fn test_small_attempt_budget_leaves_items_behind() {
    let config = AppConfig {
        consumer_attempts: 5,
        ..Default::default()
    };
    let (summary, _sink) = run_to_completion(config);

    assert_eq!(summary.total_produced(), 10);
    assert!(summary.total_consumed() <= 5);
    assert!(summary.remaining.len() >= 5);
    assert_eq!(summary.consumers[0].attempts(), 5);
    assert!(summary.is_conserved());
}

#[test]
fn test_two_producers_one_consumer() {
    let config = AppConfig {
        producer_threads: 2,
        items_to_produce: 5,
        ..Default::default()
    };
    let (summary, _sink) = run_to_completion(config);

    assert_eq!(summary.total_produced(), 10);
    assert_eq!(summary.total_consumed() + summary.remaining.len(), 10);
}

#[test]
fn test_start_returns_before_actors_finish() {
    use monitor_queue::{MemorySink, Orchestrator};
    use std::sync::Arc;

    // Long enough that the consumer cannot possibly be done when start returns
    let config = AppConfig {
        consumer_wait_delay_ms: 200,
        consumer_attempts: 3,
        ..Default::default()
    };
    let orchestrator = Orchestrator::new(config, Arc::new(MemorySink::new())).unwrap();
    let handles = orchestrator.start().unwrap();

    assert!(!handles.all_finished());

    let summary = handles.join_all().unwrap();
    assert!(summary.is_conserved());
}
