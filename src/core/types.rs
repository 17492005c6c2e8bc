/*!
 * Core Types
 * Common types shared by the monitor, the actors and the status sink
 */

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Per-producer sequence number, starting at 1
pub type Sequence = u64;

/// Human-readable actor name, shared cheaply between the actor and its items
pub type ActorName = Arc<str>;

/// Opaque token moved through the shared buffer
///
/// Rendered as `<producer>::<sequence>`. Immutable once created; unique as
/// long as producer names are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    producer: ActorName,
    sequence: Sequence,
}

impl Item {
    #[inline]
    pub fn new(producer: ActorName, sequence: Sequence) -> Self {
        Self { producer, sequence }
    }

    /// Name of the producer that created this item
    #[inline]
    pub fn producer(&self) -> &str {
        &self.producer
    }

    #[inline]
    pub fn sequence(&self) -> Sequence {
        self.sequence
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.producer, self.sequence)
    }
}

/// Which side of the handoff an actor plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorKind {
    Producer,
    Consumer,
}

impl ActorKind {
    /// Prefix used when naming spawned actors (`Producer-1`, `Consumer-2`, ...)
    pub fn name_prefix(&self) -> &'static str {
        match self {
            ActorKind::Producer => crate::core::limits::PRODUCER_NAME_PREFIX,
            ActorKind::Consumer => crate::core::limits::CONSUMER_NAME_PREFIX,
        }
    }

    /// Name for the `index`-th actor of this kind (1-based)
    pub fn actor_name(&self, index: u32) -> ActorName {
        Arc::from(format!("{}-{}", self.name_prefix(), index))
    }
}

impl fmt::Display for ActorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActorKind::Producer => write!(f, "producer"),
            ActorKind::Consumer => write!(f, "consumer"),
        }
    }
}
