/*!
 * Status lines emitted during a run
 */

use super::common::{fast_config, run_to_completion};
use monitor_queue::StatusLine;

#[test]
fn test_every_buffer_operation_is_reported() {
    let (summary, sink) = run_to_completion(fast_config(2, 2, 4, 5));
    let lines = sink.lines();

    let produced = lines
        .iter()
        .filter(|l| matches!(l, StatusLine::Produced { .. }))
        .count();
    let consumed = lines
        .iter()
        .filter(|l| matches!(l, StatusLine::Consumed { .. }))
        .count();
    let empty = lines
        .iter()
        .filter(|l| matches!(l, StatusLine::Empty { .. }))
        .count();

    assert_eq!(produced, summary.total_produced());
    assert_eq!(consumed, summary.total_consumed());
    assert_eq!(empty as u64, summary.total_empty_attempts());
    assert_eq!(lines.len(), 8 + 10);
}

#[test]
fn test_reported_sizes_follow_the_buffer() {
    let (_summary, sink) = run_to_completion(fast_config(1, 1, 6, 8));

    // Lines are emitted under the lock, so each size is the previous one +/- 1
    let mut size: usize = 0;
    for line in sink.lines() {
        match line {
            StatusLine::Produced { queue_size, .. } => {
                assert_eq!(queue_size, size + 1);
                size = queue_size;
            }
            StatusLine::Consumed { queue_size, .. } => {
                assert_eq!(queue_size + 1, size);
                size = queue_size;
            }
            StatusLine::Empty { .. } => assert_eq!(size, 0),
        }
    }
}

#[test]
fn test_consumed_lines_name_the_producer() {
    let (_summary, sink) = run_to_completion(fast_config(1, 1, 3, 6));

    for text in sink.rendered() {
        if text.contains("consumed a value") {
            assert!(text.starts_with("Consumer-1 consumed a value \"Producer-1::"));
            assert!(text.contains("\" | QueueSize: "));
        }
    }
}
