/*!
 * Lock-Free Monitor Statistics
 * Atomic counters updated on every buffer operation and wait/notify
 */

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic monitor statistics for lock-free updates
///
/// # Performance
/// - Cache-line aligned to prevent false sharing
/// - All operations use relaxed ordering; counters are read after actors
///   are joined or under the monitor lock, which provides the ordering
#[repr(C, align(64))]
#[derive(Debug, Default)]
pub struct MonitorStats {
    enqueued: AtomicU64,
    dequeued: AtomicU64,
    empty_polls: AtomicU64,
    notifications: AtomicU64,
    waits_notified: AtomicU64,
    waits_timed_out: AtomicU64,
}

impl MonitorStats {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub(crate) fn inc_enqueued(&self) {
        self.enqueued.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    pub(crate) fn inc_dequeued(&self) {
        self.dequeued.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    pub(crate) fn inc_empty_polls(&self) {
        self.empty_polls.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    pub(crate) fn inc_notifications(&self) {
        self.notifications.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    pub(crate) fn record_wait(&self, timed_out: bool) {
        if timed_out {
            self.waits_timed_out.fetch_add(1, Ordering::Relaxed);
        } else {
            self.waits_notified.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Read-only snapshot of all counters
    pub fn snapshot(&self) -> MonitorStatsSnapshot {
        MonitorStatsSnapshot {
            enqueued: self.enqueued.load(Ordering::Relaxed),
            dequeued: self.dequeued.load(Ordering::Relaxed),
            empty_polls: self.empty_polls.load(Ordering::Relaxed),
            notifications: self.notifications.load(Ordering::Relaxed),
            waits_notified: self.waits_notified.load(Ordering::Relaxed),
            waits_timed_out: self.waits_timed_out.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of [`MonitorStats`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorStatsSnapshot {
    pub enqueued: u64,
    pub dequeued: u64,
    pub empty_polls: u64,
    pub notifications: u64,
    pub waits_notified: u64,
    pub waits_timed_out: u64,
}

impl MonitorStatsSnapshot {
    /// Items currently accounted to the buffer
    pub fn in_flight(&self) -> u64 {
        self.enqueued.saturating_sub(self.dequeued)
    }
}
