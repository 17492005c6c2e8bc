/*!
 * Consumer Actor
 *
 * Makes a fixed number of dequeue attempts, yielding the lock with a timed
 * wait after each. Its lifetime is bounded by the attempt budget, not by the
 * buffer running dry: items produced after the last attempt stay buffered.
 */

use super::state::SharedState;
use super::traits::Actor;
use crate::core::types::{ActorKind, ActorName, Item};
use crate::monitoring::{ActorSpan, StatusLine};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::trace;

#[derive(Debug, Clone)]
pub struct Consumer {
    name: ActorName,
    max_attempts: u32,
    wait_delay: Duration,
}

impl Consumer {
    pub fn new(name: ActorName, max_attempts: u32, wait_delay: Duration) -> Self {
        Self {
            name,
            max_attempts,
            wait_delay,
        }
    }
}

/// What a consumer removed, in removal order, and how often it came up empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumerReport {
    pub name: ActorName,
    pub consumed: Vec<Item>,
    pub empty_attempts: u32,
}

impl ConsumerReport {
    /// Total attempts made (always the configured budget)
    pub fn attempts(&self) -> u32 {
        self.consumed.len() as u32 + self.empty_attempts
    }
}

impl Actor for Consumer {
    type Report = ConsumerReport;

    fn kind(&self) -> ActorKind {
        ActorKind::Consumer
    }

    fn name(&self) -> &ActorName {
        &self.name
    }

    fn run(self, state: &SharedState) -> ConsumerReport {
        let span = ActorSpan::new(ActorKind::Consumer, &self.name, self.max_attempts);
        let _entered = span.enter();

        let monitor = state.monitor();
        let mut consumed = Vec::new();
        let mut empty_attempts = 0u32;

        for attempt in 0..self.max_attempts {
            let mut guard = monitor.lock();

            let line = match guard.try_dequeue() {
                Some(item) => {
                    let line = StatusLine::Consumed {
                        actor: self.name.clone(),
                        item: item.clone(),
                        queue_size: guard.size(),
                    };
                    consumed.push(item);
                    line
                }
                None => {
                    empty_attempts += 1;
                    StatusLine::Empty {
                        actor: self.name.clone(),
                    }
                }
            };
            state.sink().emit(&line);

            let woken = guard.notify();
            let outcome = guard.wait(self.wait_delay);
            trace!(attempt, woken = woken.count(), ?outcome, "consumer resumed");
            drop(guard);

            span.record_processed(consumed.len());
        }

        ConsumerReport {
            name: self.name,
            consumed,
            empty_attempts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::AppConfig;
    use crate::monitoring::MemorySink;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn state_with(sink: Arc<MemorySink>, items: &[u64]) -> SharedState {
        let state = SharedState::new(AppConfig::default(), sink);
        {
            let mut guard = state.monitor().lock();
            for &seq in items {
                guard.enqueue(Item::new(Arc::from("Producer-1"), seq));
            }
        }
        state
    }

    #[test]
    fn test_consumer_stops_after_budget() {
        let sink = Arc::new(MemorySink::new());
        let state = state_with(sink.clone(), &[1, 2, 3, 4]);
        let consumer = Consumer::new(Arc::from("Consumer-1"), 2, Duration::from_millis(1));

        let report = consumer.run(&state);

        assert_eq!(report.consumed.len(), 2);
        assert_eq!(report.empty_attempts, 0);
        assert_eq!(state.monitor().lock().size(), 2);
        assert_eq!(
            sink.rendered(),
            vec![
                "Consumer-1 consumed a value \"Producer-1::1\" | QueueSize: 3",
                "Consumer-1 consumed a value \"Producer-1::2\" | QueueSize: 2",
            ]
        );
    }

    #[test]
    fn test_consumer_reports_empty_attempts() {
        let sink = Arc::new(MemorySink::new());
        let state = state_with(sink.clone(), &[1]);
        let consumer = Consumer::new(Arc::from("Consumer-2"), 3, Duration::from_millis(1));

        let report = consumer.run(&state);

        assert_eq!(report.consumed.len(), 1);
        assert_eq!(report.empty_attempts, 2);
        assert_eq!(report.attempts(), 3);
        assert_eq!(
            sink.rendered()[1],
            "Consumer-2 could not consume as queue is empty. Trying again in a few moments"
        );
        assert_eq!(state.monitor().stats().snapshot().empty_polls, 2);
    }
}
