/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 *
 * An empty buffer is not an error: it is reported as a status line and the
 * consumer simply tries again. Errors here cover startup (configuration,
 * thread spawning) and actor panics observed at join time.
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ConfigError {
    #[error("{field} must be a positive integer, got {value}")]
    #[diagnostic(
        code(config::non_positive),
        help("Actor counts, wait delays and budgets must all be at least 1.")
    )]
    NonPositive { field: String, value: u64 },

    #[error("Invalid value '{value}' for {var}: {reason}")]
    #[diagnostic(
        code(config::invalid_env),
        help("Unset the variable or give it a positive integer (or a notify policy name).")
    )]
    InvalidEnv {
        var: String,
        value: String,
        reason: String,
    },

    #[error("Failed to read config file {path}: {reason}")]
    #[diagnostic(
        code(config::unreadable),
        help("Check that the path in MONITOR_QUEUE_CONFIG exists and is readable.")
    )]
    Unreadable { path: String, reason: String },

    #[error("Failed to parse config file {path}: {reason}")]
    #[diagnostic(
        code(config::malformed),
        help("The file must be a JSON object using the AppConfig field names.")
    )]
    Malformed { path: String, reason: String },
}

/// Orchestration errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum OrchestratorError {
    #[error("Failed to spawn actor {name}: {reason}")]
    #[diagnostic(
        code(orchestrator::spawn_failed),
        help("The OS refused to create a thread. Lower the configured actor counts.")
    )]
    Spawn { name: String, reason: String },

    #[error("Actor {0} panicked")]
    #[diagnostic(
        code(orchestrator::actor_panicked),
        help("The actor thread unwound before finishing its loop. View logs for details.")
    )]
    ActorPanicked(String),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
pub type OrchestratorResult<T> = Result<T, OrchestratorError>;
