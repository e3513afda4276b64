//! API error type

use thiserror::Error;

/// Failure of a backend exchange
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a usable JSON body
    #[error("transport error: {0}")]
    Transport(String),
    /// The backend answered `success: false`; holds its error text
    #[error("{0}")]
    Rejected(String),
}

impl ApiError {
    pub fn transport(message: impl Into<String>) -> Self {
        ApiError::Transport(message.into())
    }
}
