/*!
 * Synchronization Traits
 *
 * Result types shared by the monitor's wait/notify operations.
 */

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Result of a wake operation
///
/// Compact representation (single usize) for efficient returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WakeResult {
    /// Signalled while N actors were suspended (N >= 1)
    Woken(usize),
    /// No actor was waiting when the signal fired
    NoWaiters,
}

impl WakeResult {
    /// Check if any waiters were woken
    #[inline(always)]
    pub fn is_woken(&self) -> bool {
        matches!(self, WakeResult::Woken(_))
    }

    /// Get number of woken waiters (0 if none)
    #[inline(always)]
    pub fn count(&self) -> usize {
        match self {
            WakeResult::Woken(n) => *n,
            WakeResult::NoWaiters => 0,
        }
    }
}

/// How a timed wait came to an end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitOutcome {
    /// Another actor issued a notify
    Notified,
    /// The timeout elapsed first
    TimedOut,
}

impl WaitOutcome {
    #[inline]
    pub fn timed_out(&self) -> bool {
        matches!(self, WaitOutcome::TimedOut)
    }
}

/// Which waiters an actor's notify reaches
///
/// `Broadcast` is the default and wakes every suspended actor, producers and
/// consumers alike. `WakeOne` hands the signal to a single waiter, which may
/// be an actor of the same kind as the notifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotifyPolicy {
    #[default]
    Broadcast,
    WakeOne,
}

impl fmt::Display for NotifyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotifyPolicy::Broadcast => write!(f, "broadcast"),
            NotifyPolicy::WakeOne => write!(f, "wake_one"),
        }
    }
}

impl FromStr for NotifyPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "broadcast" | "all" | "notify_all" => Ok(NotifyPolicy::Broadcast),
            "wake_one" | "one" | "notify_one" => Ok(NotifyPolicy::WakeOne),
            other => Err(format!("unknown notify policy '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wake_result_count() {
        assert_eq!(WakeResult::Woken(3).count(), 3);
        assert_eq!(WakeResult::NoWaiters.count(), 0);
        assert!(!WakeResult::NoWaiters.is_woken());
    }

    #[test]
    fn test_notify_policy_parse() {
        assert_eq!("broadcast".parse::<NotifyPolicy>(), Ok(NotifyPolicy::Broadcast));
        assert_eq!(" Wake_One ".parse::<NotifyPolicy>(), Ok(NotifyPolicy::WakeOne));
        assert!("sometimes".parse::<NotifyPolicy>().is_err());
    }
}
