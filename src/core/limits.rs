/*!
 * Defaults and Constants
 *
 * Centralized location for default configuration values and naming
 * conventions. The defaults describe one producer handing ten items to one
 * consumer that has a slightly larger attempt budget.
 */

// =============================================================================
// ACTOR COUNTS
// =============================================================================

/// Producer threads spawned when nothing else is configured
pub const DEFAULT_PRODUCER_THREADS: u32 = 1;

/// Consumer threads spawned when nothing else is configured
pub const DEFAULT_CONSUMER_THREADS: u32 = 1;

// =============================================================================
// TIMED WAITS
// =============================================================================

/// Producer wait timeout after each enqueue (ms)
/// Short, so producers self-throttle without stalling
pub const DEFAULT_PRODUCER_WAIT_DELAY_MS: u64 = 10;

/// Consumer wait timeout after each attempt (ms)
/// Upper bound on how long a missed notification can delay a re-check
pub const DEFAULT_CONSUMER_WAIT_DELAY_MS: u64 = 100;

// =============================================================================
// BUDGETS
// =============================================================================

/// Items each producer enqueues before terminating
pub const DEFAULT_ITEMS_TO_PRODUCE: u32 = 10;

/// Dequeue attempts each consumer makes before terminating
/// Counted per attempt, not per item consumed
pub const DEFAULT_CONSUMER_ATTEMPTS: u32 = 12;

/// First sequence number a producer assigns
pub const FIRST_SEQUENCE: u64 = 1;

// =============================================================================
// NAMING
// =============================================================================

pub const PRODUCER_NAME_PREFIX: &str = "Producer";
pub const CONSUMER_NAME_PREFIX: &str = "Consumer";

/// Tracing target for status lines
pub const STATUS_TARGET: &str = "monitor_queue::status";
