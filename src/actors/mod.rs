/*!
 * Actors
 *
 * Producers and consumers contending for one monitor, and the orchestrator
 * that spawns them.
 *
 * # Architecture
 *
 * - [`Orchestrator`]: builds [`SharedState`] once and spawns one thread per actor
 * - [`Producer`]: enqueue, notify, timed wait; a fixed number of times
 * - [`Consumer`]: try to dequeue, notify, timed wait; a fixed number of times
 * - [`ActorHandles`]: explicit handles with an optional `join_all`
 */

mod consumer;
mod handles;
mod orchestrator;
mod producer;
mod state;
mod traits;

pub use consumer::{Consumer, ConsumerReport};
pub use handles::{ActorHandle, ActorHandles, RunSummary};
pub use orchestrator::Orchestrator;
pub use producer::{Producer, ProducerReport};
pub use state::SharedState;
pub use traits::Actor;
