/*!
 * Producer Actor
 *
 * Appends a fixed number of items, one per critical section, yielding the
 * lock with a timed wait after each. Never checks whether its items were
 * consumed.
 */

use super::state::SharedState;
use super::traits::Actor;
use crate::core::limits::FIRST_SEQUENCE;
use crate::core::types::{ActorKind, ActorName, Item};
use crate::monitoring::{ActorSpan, StatusLine};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::trace;

#[derive(Debug, Clone)]
pub struct Producer {
    name: ActorName,
    items_to_produce: u32,
    wait_delay: Duration,
}

impl Producer {
    pub fn new(name: ActorName, items_to_produce: u32, wait_delay: Duration) -> Self {
        Self {
            name,
            items_to_produce,
            wait_delay,
        }
    }
}

/// Items a producer enqueued, in the order it enqueued them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProducerReport {
    pub name: ActorName,
    pub produced: Vec<Item>,
}

impl Actor for Producer {
    type Report = ProducerReport;

    fn kind(&self) -> ActorKind {
        ActorKind::Producer
    }

    fn name(&self) -> &ActorName {
        &self.name
    }

    fn run(self, state: &SharedState) -> ProducerReport {
        let span = ActorSpan::new(ActorKind::Producer, &self.name, self.items_to_produce);
        let _entered = span.enter();

        let monitor = state.monitor();
        let last = FIRST_SEQUENCE + u64::from(self.items_to_produce);
        let mut produced = Vec::with_capacity(self.items_to_produce as usize);

        for sequence in FIRST_SEQUENCE..last {
            let mut guard = monitor.lock();

            let item = Item::new(self.name.clone(), sequence);
            guard.enqueue(item.clone());
            state.sink().emit(&StatusLine::Produced {
                actor: self.name.clone(),
                sequence,
                queue_size: guard.size(),
            });

            let woken = guard.notify();
            let outcome = guard.wait(self.wait_delay);
            trace!(sequence, woken = woken.count(), ?outcome, "producer resumed");
            drop(guard);

            produced.push(item);
            span.record_processed(produced.len());
        }

        ProducerReport {
            name: self.name,
            produced,
        }
    }
}
