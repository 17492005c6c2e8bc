/*!
 * Core Module
 * Fundamental types, configuration, error handling and synchronization
 */

pub mod config;
pub mod errors;
pub mod limits;
pub mod sync;
pub mod types;

// Re-export for convenience
pub use config::AppConfig;
pub use errors::*;
pub use types::*;
