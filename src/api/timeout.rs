use std::time::Duration;

use crate::config::ApiConfig;

/// Timeouts applied to every remote call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutConfig {
    /// Upper bound for a whole request, response body included.
    pub request: Duration,
    /// Upper bound for establishing the connection.
    pub connect: Duration,
}

impl From<&ApiConfig> for TimeoutConfig {
    fn from(api: &ApiConfig) -> Self {
        Self {
            request: Duration::from_secs(u64::from(api.timeout_seconds)),
            connect: Duration::from_secs(u64::from(api.connect_timeout_seconds)),
        }
    }
}
