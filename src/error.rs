//! The one error type every store operation returns.

use thiserror::Error;

use crate::api::ApiError;

/// Coarse classification of a [`StoreError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    MalformedResponse,
    UnexpectedStatus,
    NotFound,
    InvalidInput,
}

/// Errors returned by store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The remote call failed: transport error, timeout or a non-2xx answer.
    #[error("{message}")]
    Network { message: String },

    /// The remote answered but the payload is unusable.
    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },

    /// Delete answered with something other than 200.
    #[error("{status}: {reason}")]
    UnexpectedStatus { status: u16, reason: String },

    /// No record with this id in the store.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: u64 },

    /// A required field of the input is empty.
    #[error("Invalid input: {field} must not be empty")]
    InvalidInput { field: &'static str },
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::Network { .. } => ErrorKind::Network,
            StoreError::MalformedResponse { .. } => ErrorKind::MalformedResponse,
            StoreError::UnexpectedStatus { .. } => ErrorKind::UnexpectedStatus,
            StoreError::NotFound { .. } => ErrorKind::NotFound,
            StoreError::InvalidInput { .. } => ErrorKind::InvalidInput,
        }
    }
}

impl From<ApiError> for StoreError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Decode { .. } => StoreError::MalformedResponse {
                message: err.to_string(),
            },
            ApiError::Client { .. }
            | ApiError::Transport { .. }
            | ApiError::Status { .. }
            | ApiError::Timeout { .. } => {
                StoreError::Network {
                    message: err.to_string(),
                }
            }
        }
    }
}
