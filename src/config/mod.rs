//! Configuration: where the remote API lives and how loud logging is.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, LoggingConfig};
