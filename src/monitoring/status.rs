/*!
 * Status Lines
 *
 * The line-oriented status text each actor reports after touching the
 * buffer, and the sinks that accept it.
 */

use crate::core::limits::STATUS_TARGET;
use crate::core::types::{ActorName, Item, Sequence};
use parking_lot::Mutex;
use std::fmt;
use tracing::info;

/// One status report from an actor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLine {
    /// A producer appended its `sequence`-th item
    Produced {
        actor: ActorName,
        sequence: Sequence,
        queue_size: usize,
    },
    /// A consumer removed `item`; `queue_size` is the length afterwards
    Consumed {
        actor: ActorName,
        item: Item,
        queue_size: usize,
    },
    /// A consumer found the buffer empty
    Empty { actor: ActorName },
}

impl StatusLine {
    pub fn actor(&self) -> &str {
        match self {
            StatusLine::Produced { actor, .. }
            | StatusLine::Consumed { actor, .. }
            | StatusLine::Empty { actor } => &**actor,
        }
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusLine::Produced {
                actor,
                sequence,
                queue_size,
            } => write!(
                f,
                "{} Produced a value {} | QueueSize: {}",
                actor, sequence, queue_size
            ),
            StatusLine::Consumed {
                actor,
                item,
                queue_size,
            } => write!(
                f,
                "{} consumed a value \"{}\" | QueueSize: {}",
                actor, item, queue_size
            ),
            StatusLine::Empty { actor } => write!(
                f,
                "{} could not consume as queue is empty. Trying again in a few moments",
                actor
            ),
        }
    }
}

/// Destination for status lines
///
/// Called with the monitor lock held, so implementations must not block on
/// anything an actor could be holding.
pub trait StatusSink: Send + Sync {
    fn emit(&self, line: &StatusLine);
}

/// Writes status lines as `info` events
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl StatusSink for TracingSink {
    fn emit(&self, line: &StatusLine) {
        info!(target: STATUS_TARGET, "{}", line);
    }
}

/// Keeps every status line in memory, in emission order
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<StatusLine>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<StatusLine> {
        self.lines.lock().clone()
    }

    /// Rendered text of every line
    pub fn rendered(&self) -> Vec<String> {
        self.lines.lock().iter().map(ToString::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }
}

impl StatusSink for MemorySink {
    fn emit(&self, line: &StatusLine) {
        self.lines.lock().push(line.clone());
    }
}
