/*!
 * Structured Tracing
 * Subscriber setup and per-actor spans using the tracing crate
 *
 * Features:
 * - Human-readable compact output with thread names (one thread per actor)
 * - Optional JSON output for structured parsing
 * - One span per actor carrying its name and kind
 * - Actor runtime and work counts recorded when the span closes
 */

use crate::core::types::ActorKind;
use std::time::Instant;
use tracing::{debug, info, span, Level};
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Enables JSON output when set to `1` or `true`
pub const ENV_TRACE_JSON: &str = "MONITOR_QUEUE_TRACE_JSON";

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - MONITOR_QUEUE_TRACE_JSON: Enable JSON output (default: false)
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var(ENV_TRACE_JSON)
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_names(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .init();
        info!("Structured tracing initialized with JSON output");
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_names(true)
                    .compact(),
            )
            .init();
        info!("Structured tracing initialized");
    }
}

/// Span covering one actor's whole loop
///
/// Entered on the actor's own thread. Records how long the actor ran and how
/// much work it did when dropped.
pub struct ActorSpan {
    span: tracing::Span,
    start: Instant,
}

impl ActorSpan {
    pub fn new(kind: ActorKind, name: &str, budget: u32) -> Self {
        let span = span!(
            Level::INFO,
            "actor",
            kind = %kind,
            actor = name,
            budget = budget,
            processed = tracing::field::Empty,
            duration_ms = tracing::field::Empty,
        );

        let _entered = span.enter();
        debug!(kind = %kind, actor = name, budget, "actor started");
        drop(_entered);

        Self {
            span,
            start: Instant::now(),
        }
    }

    /// Enter the span on the current thread
    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self.span.enter()
    }

    /// Items produced or consumed so far
    pub fn record_processed(&self, count: usize) {
        self.span.record("processed", count);
    }
}

impl Drop for ActorSpan {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        let _entered = self.span.enter();
        self.span.record("duration_ms", duration.as_millis() as u64);
        debug!(duration_ms = duration.as_millis() as u64, "actor finished");
    }
}
