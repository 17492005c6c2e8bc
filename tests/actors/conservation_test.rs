/*!
 * Conservation and ordering properties across random configurations
 */

use super::common::{fast_config, run_to_completion};
use monitor_queue::{Item, RunSummary};
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

/// Items of each producer appear in increasing sequence order
fn per_producer_order_holds(items: &[Item]) -> bool {
    let mut last: HashMap<&str, u64> = HashMap::new();
    items.iter().all(|item| {
        let previous = last.insert(item.producer(), item.sequence());
        previous.map_or(true, |prev| prev < item.sequence())
    })
}

fn assert_properties(summary: &RunSummary, planned: usize, attempts_per_consumer: u32) {
    // Nothing lost, nothing invented
    assert_eq!(summary.total_produced(), planned);
    assert!(summary.is_conserved());

    let produced: HashSet<&Item> = summary.producers.iter().flat_map(|p| p.produced.iter()).collect();
    let accounted: Vec<&Item> = summary.consumed_items().chain(summary.remaining.iter()).collect();
    let accounted_set: HashSet<&Item> = accounted.iter().copied().collect();
    assert_eq!(accounted.len(), accounted_set.len(), "an item was duplicated");
    assert_eq!(produced, accounted_set);

    // FIFO keeps each producer's items in order, wherever they ended up
    for consumer in &summary.consumers {
        assert!(per_producer_order_holds(&consumer.consumed));
        assert_eq!(consumer.attempts(), attempts_per_consumer);
    }
    assert!(per_producer_order_holds(&summary.remaining));

    // Monitor counters agree with the reports
    assert_eq!(summary.stats.enqueued as usize, summary.total_produced());
    assert_eq!(summary.stats.dequeued as usize, summary.total_consumed());
    assert_eq!(summary.stats.empty_polls, summary.total_empty_attempts());
    assert_eq!(summary.stats.in_flight() as usize, summary.remaining.len());
}

#[test]
fn test_many_producers_never_lose_items() {
    let config = fast_config(4, 2, 25, 10);
    let (summary, _sink) = run_to_completion(config);
    assert_properties(&summary, 100, 10);
    assert!(summary.total_consumed() <= 20);
}

#[test]
fn test_many_consumers_share_one_producer() {
    let config = fast_config(1, 4, 12, 6);
    let (summary, _sink) = run_to_completion(config);
    assert_properties(&summary, 12, 6);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    #[test]
    fn prop_conservation_for_any_shape(
        producers in 1u32..=3,
        consumers in 1u32..=3,
        items in 1u32..=6,
        attempts in 1u32..=6,
    ) {
        let config = fast_config(producers, consumers, items, attempts);
        let planned = config.total_planned_items() as usize;
        let budget = config.total_consumer_attempts() as usize;
        let (summary, _sink) = run_to_completion(config);

        assert_properties(&summary, planned, attempts);
        prop_assert!(summary.total_consumed() <= budget.min(planned));
    }
}
