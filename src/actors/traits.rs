/*!
 * Actor Traits
 */

use super::state::SharedState;
use crate::core::types::{ActorKind, ActorName};

/// A loop run on its own thread against the shared state
///
/// Actors never call each other; every interaction goes through the
/// monitor in [`SharedState`].
pub trait Actor: Send + 'static {
    /// What the actor hands back when its loop ends
    type Report: Send + 'static;

    fn kind(&self) -> ActorKind;

    fn name(&self) -> &ActorName;

    /// Run the loop to completion on the calling thread
    fn run(self, state: &SharedState) -> Self::Report;
}
