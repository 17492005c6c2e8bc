/*!
 * Synchronization Primitives
 *
 * A single coarse monitor (mutex + condition variable) guarding the shared
 * FIFO buffer, with timed waits and broadcast notification.
 *
 * # Architecture
 *
 * - [`Monitor`]: owns the buffer, the lock and the condvar
 * - [`MonitorGuard`]: scoped critical section; the only way to touch the buffer
 * - [`MonitorStats`]: lock-free counters for every buffer and wait/notify event
 *
 * # Use Cases
 *
 * - **Producer/consumer handoff**: append, notify, wait with timeout
 * - **Bounded polling**: try to remove, notify, wait with timeout
 */

mod monitor;
mod stats;
mod traits;

pub use monitor::{Monitor, MonitorGuard};
pub use stats::{MonitorStats, MonitorStatsSnapshot};
pub use traits::{NotifyPolicy, WaitOutcome, WakeResult};
