//! HTTP access to the remote posts/users collections.

mod client;
mod error;
mod timeout;

pub use client::{ApiClient, DeleteOutcome};
pub use error::ApiError;
pub use timeout::TimeoutConfig;
