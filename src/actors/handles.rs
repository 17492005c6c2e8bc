/*!
 * Actor Handles
 *
 * Explicit handles to spawned actor threads. Holding them does not keep the
 * actors alive and dropping them does not stop the actors; `join_all` is an
 * opt-in for callers that need to observe the final state.
 */

use super::consumer::ConsumerReport;
use super::producer::ProducerReport;
use super::state::SharedState;
use crate::core::errors::{OrchestratorError, OrchestratorResult};
use crate::core::sync::MonitorStatsSnapshot;
use crate::core::types::{ActorKind, ActorName, Item};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::thread::JoinHandle;
use tracing::{debug, error};

/// Handle to one running actor thread
pub struct ActorHandle<R> {
    name: ActorName,
    kind: ActorKind,
    handle: JoinHandle<R>,
}

impl<R> ActorHandle<R> {
    pub(crate) fn new(name: ActorName, kind: ActorKind, handle: JoinHandle<R>) -> Self {
        Self { name, kind, handle }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ActorKind {
        self.kind
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Block until the actor's loop ends
    pub fn join(self) -> OrchestratorResult<R> {
        self.handle.join().map_err(|_| {
            error!(actor = %self.name, "Actor thread panicked");
            OrchestratorError::ActorPanicked(self.name.to_string())
        })
    }
}

/// Every actor spawned for one run
pub struct ActorHandles {
    state: Arc<SharedState>,
    producers: Vec<ActorHandle<ProducerReport>>,
    consumers: Vec<ActorHandle<ConsumerReport>>,
}

impl ActorHandles {
    pub(crate) fn new(state: Arc<SharedState>) -> Self {
        Self {
            state,
            producers: Vec::new(),
            consumers: Vec::new(),
        }
    }

    pub(crate) fn push_producer(&mut self, handle: ActorHandle<ProducerReport>) {
        self.producers.push(handle);
    }

    pub(crate) fn push_consumer(&mut self, handle: ActorHandle<ConsumerReport>) {
        self.consumers.push(handle);
    }

    pub fn producers(&self) -> &[ActorHandle<ProducerReport>] {
        &self.producers
    }

    pub fn consumers(&self) -> &[ActorHandle<ConsumerReport>] {
        &self.consumers
    }

    /// State shared with the running actors
    pub fn state(&self) -> &Arc<SharedState> {
        &self.state
    }

    pub fn len(&self) -> usize {
        self.producers.len() + self.consumers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True once every actor's loop has ended
    pub fn all_finished(&self) -> bool {
        self.producers.iter().all(ActorHandle::is_finished)
            && self.consumers.iter().all(ActorHandle::is_finished)
    }

    /// Wait for every actor, then capture what is left in the buffer
    pub fn join_all(self) -> OrchestratorResult<RunSummary> {
        let producers = self
            .producers
            .into_iter()
            .map(ActorHandle::join)
            .collect::<OrchestratorResult<Vec<_>>>()?;
        let consumers = self
            .consumers
            .into_iter()
            .map(ActorHandle::join)
            .collect::<OrchestratorResult<Vec<_>>>()?;

        let remaining = self.state.monitor().lock().snapshot();
        let stats = self.state.monitor().stats().snapshot();
        debug!(remaining = remaining.len(), "All actors joined");

        Ok(RunSummary {
            producers,
            consumers,
            remaining,
            stats,
        })
    }
}

/// Final state of a run, observed after every actor was joined
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub producers: Vec<ProducerReport>,
    pub consumers: Vec<ConsumerReport>,
    /// Buffer contents at join time, head first
    pub remaining: Vec<Item>,
    pub stats: MonitorStatsSnapshot,
}

impl RunSummary {
    pub fn total_produced(&self) -> usize {
        self.producers.iter().map(|p| p.produced.len()).sum()
    }

    pub fn total_consumed(&self) -> usize {
        self.consumers.iter().map(|c| c.consumed.len()).sum()
    }

    pub fn total_empty_attempts(&self) -> u64 {
        self.consumers
            .iter()
            .map(|c| u64::from(c.empty_attempts))
            .sum()
    }

    /// Every item removed by any consumer
    pub fn consumed_items(&self) -> impl Iterator<Item = &Item> {
        self.consumers.iter().flat_map(|c| c.consumed.iter())
    }

    /// Every produced item is either consumed or still buffered
    pub fn is_conserved(&self) -> bool {
        self.total_produced() == self.total_consumed() + self.remaining.len()
    }
}
