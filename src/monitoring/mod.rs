/*!
 * Monitoring
 * Status reporting and structured tracing
 */

mod status;
mod tracer;

pub use status::{MemorySink, StatusLine, StatusSink, TracingSink};
pub use tracer::{init_tracing, ActorSpan, ENV_TRACE_JSON};
