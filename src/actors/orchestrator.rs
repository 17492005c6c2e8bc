/*!
 * Orchestrator
 *
 * Builds the shared state once, spawns every producer and consumer on its
 * own named thread, issues a single wake signal and returns. It never waits
 * for the actors; callers that need the final state use
 * [`ActorHandles::join_all`].
 */

use super::consumer::Consumer;
use super::handles::{ActorHandle, ActorHandles};
use super::producer::Producer;
use super::state::SharedState;
use super::traits::Actor;
use crate::core::config::AppConfig;
use crate::core::errors::{OrchestratorError, OrchestratorResult};
use crate::core::sync::NotifyPolicy;
use crate::core::types::ActorKind;
use crate::monitoring::{StatusSink, TracingSink};
use std::sync::Arc;
use std::thread;
use tracing::{debug, info, warn};

pub struct Orchestrator {
    state: Arc<SharedState>,
}

impl Orchestrator {
    /// Validate `config` and build the shared state around it
    pub fn new(config: AppConfig, sink: Arc<dyn StatusSink>) -> OrchestratorResult<Self> {
        config.validate()?;

        if config.notify_policy == NotifyPolicy::WakeOne {
            warn!(
                policy = %config.notify_policy,
                "Actors will wake a single waiter per notify instead of broadcasting"
            );
        }

        Ok(Self {
            state: Arc::new(SharedState::new(config, sink)),
        })
    }

    /// Orchestrator that reports status lines through tracing
    pub fn with_tracing(config: AppConfig) -> OrchestratorResult<Self> {
        Self::new(config, Arc::new(TracingSink))
    }

    pub fn state(&self) -> &Arc<SharedState> {
        &self.state
    }

    /// Spawn every actor and return without waiting for any of them
    ///
    /// If a spawn fails, actors already started keep running.
    pub fn start(&self) -> OrchestratorResult<ActorHandles> {
        let config = self.state.config();
        let mut handles = ActorHandles::new(Arc::clone(&self.state));

        for index in 1..=config.producer_threads {
            let producer = Producer::new(
                ActorKind::Producer.actor_name(index),
                config.items_to_produce,
                config.producer_wait_delay(),
            );
            handles.push_producer(spawn_actor(&self.state, producer)?);
        }

        for index in 1..=config.consumer_threads {
            let consumer = Consumer::new(
                ActorKind::Consumer.actor_name(index),
                config.consumer_attempts,
                config.consumer_wait_delay(),
            );
            handles.push_consumer(spawn_actor(&self.state, consumer)?);
        }

        // Best-effort nudge: may fire before anyone waits, in which case it is lost
        let nudge = self.state.monitor().notify_all();
        debug!(woken = nudge.count(), "Initial wake signal issued");

        info!(
            producers = config.producer_threads,
            consumers = config.consumer_threads,
            planned_items = config.total_planned_items(),
            "Actors spawned"
        );
        Ok(handles)
    }
}

fn spawn_actor<A: Actor>(
    state: &Arc<SharedState>,
    actor: A,
) -> OrchestratorResult<ActorHandle<A::Report>> {
    let name = actor.name().clone();
    let kind = actor.kind();
    let state = Arc::clone(state);

    let handle = thread::Builder::new()
        .name(name.to_string())
        .spawn(move || actor.run(&state))
        .map_err(|e| {
            warn!(actor = %name, error = %e, "Failed to spawn actor thread");
            OrchestratorError::Spawn {
                name: name.to_string(),
                reason: e.to_string(),
            }
        })?;

    debug!(actor = %name, %kind, "Actor spawned");
    Ok(ActorHandle::new(name, kind, handle))
}
