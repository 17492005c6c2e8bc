/*!
 * Monitor
 *
 * One `parking_lot::Mutex` guarding the shared FIFO buffer, paired with one
 * `parking_lot::Condvar` scoped to the entire buffer.
 *
 * # Design: Guard-Only Access
 *
 * The buffer is only reachable through [`MonitorGuard`], so every enqueue,
 * dequeue and size read happens with the lock held. `wait` borrows the guard
 * mutably, which lets the condvar release and re-acquire the same lock
 * atomically while the caller keeps its critical section in scope.
 *
 * A single condvar is shared by producers and consumers, so a broadcast wakes
 * every suspended actor and they re-contend for the lock one at a time
 * (thundering herd). Woken actors re-check the buffer themselves.
 */

use super::stats::MonitorStats;
use super::traits::{NotifyPolicy, WaitOutcome, WakeResult};
use parking_lot::{Condvar, Mutex, MutexGuard};
use std::collections::vec_deque;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Lock + condition variable pair guarding an unbounded FIFO buffer
pub struct Monitor<T> {
    buffer: Mutex<VecDeque<T>>,
    condvar: Condvar,
    /// Actors currently suspended in `wait`. Only modified with the lock held.
    waiters: AtomicUsize,
    policy: NotifyPolicy,
    stats: MonitorStats,
}

impl<T> Monitor<T> {
    /// Create a monitor whose actors broadcast on every notify
    pub fn new() -> Self {
        Self::with_policy(NotifyPolicy::Broadcast)
    }

    /// Create a monitor with an explicit notify policy
    pub fn with_policy(policy: NotifyPolicy) -> Self {
        Self {
            buffer: Mutex::new(VecDeque::new()),
            condvar: Condvar::new(),
            waiters: AtomicUsize::new(0),
            policy,
            stats: MonitorStats::new(),
        }
    }

    /// Acquire the lock, blocking until it is available
    #[inline]
    pub fn lock(&self) -> MonitorGuard<'_, T> {
        MonitorGuard {
            monitor: self,
            buffer: self.buffer.lock(),
        }
    }

    /// Wake every actor suspended in `wait`
    ///
    /// Does not require the lock. Called without it, the signal may fire
    /// before any actor has started waiting, in which case it has no effect.
    pub fn notify_all(&self) -> WakeResult {
        self.stats.inc_notifications();
        match self.condvar.notify_all() {
            0 => WakeResult::NoWaiters,
            n => WakeResult::Woken(n),
        }
    }

    /// Wake at most one actor suspended in `wait`
    pub fn notify_one(&self) -> WakeResult {
        self.stats.inc_notifications();
        if self.condvar.notify_one() {
            WakeResult::Woken(1)
        } else {
            WakeResult::NoWaiters
        }
    }

    /// Notify according to the configured policy
    #[inline]
    pub fn notify(&self) -> WakeResult {
        match self.policy {
            NotifyPolicy::Broadcast => self.notify_all(),
            NotifyPolicy::WakeOne => self.notify_one(),
        }
    }

    /// Number of actors currently suspended in `wait`
    ///
    /// Exact when read under the lock, approximate otherwise.
    #[inline]
    pub fn waiter_count(&self) -> usize {
        self.waiters.load(Ordering::Acquire)
    }

    #[inline]
    pub fn policy(&self) -> NotifyPolicy {
        self.policy
    }

    #[inline]
    pub fn stats(&self) -> &MonitorStats {
        &self.stats
    }
}

impl<T> Default for Monitor<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Scoped critical section over the shared buffer
///
/// Dropping the guard releases the lock.
pub struct MonitorGuard<'a, T> {
    monitor: &'a Monitor<T>,
    buffer: MutexGuard<'a, VecDeque<T>>,
}

impl<'a, T> MonitorGuard<'a, T> {
    /// Append an item to the tail
    #[inline]
    pub fn enqueue(&mut self, item: T) {
        self.buffer.push_back(item);
        self.monitor.stats.inc_enqueued();
    }

    /// Remove and return the head, or `None` if the buffer is empty
    ///
    /// Never blocks. An empty buffer is left untouched.
    #[inline]
    pub fn try_dequeue(&mut self) -> Option<T> {
        match self.buffer.pop_front() {
            Some(item) => {
                self.monitor.stats.inc_dequeued();
                Some(item)
            }
            None => {
                self.monitor.stats.inc_empty_polls();
                None
            }
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Iterate over buffered items, head first
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.buffer.iter()
    }

    /// Release the lock and suspend until notified or `timeout` elapses
    ///
    /// The lock is re-acquired before this returns, so the caller must
    /// re-check buffer state rather than assume anything from before the
    /// wait.
    pub fn wait(&mut self, timeout: Duration) -> WaitOutcome {
        let monitor = self.monitor;
        monitor.waiters.fetch_add(1, Ordering::AcqRel);
        let result = monitor.condvar.wait_for(&mut self.buffer, timeout);
        monitor.waiters.fetch_sub(1, Ordering::AcqRel);

        let timed_out = result.timed_out();
        monitor.stats.record_wait(timed_out);
        if timed_out {
            WaitOutcome::TimedOut
        } else {
            WaitOutcome::Notified
        }
    }

    /// Broadcast to every suspended actor
    #[inline]
    pub fn notify_all(&self) -> WakeResult {
        self.monitor.notify_all()
    }

    /// Notify according to the monitor's policy
    #[inline]
    pub fn notify(&self) -> WakeResult {
        self.monitor.notify()
    }
}

impl<'a, T: Clone> MonitorGuard<'a, T> {
    /// Copy of the buffer contents, head first
    pub fn snapshot(&self) -> Vec<T> {
        self.buffer.iter().cloned().collect()
    }
}
