//! Unified error types surfaced by the runtime API.
//!
//! [`ApiError`] covers everything that can go wrong talking to the game
//! server; [`RuntimeError`] wraps it together with diagnostics failures so
//! callers can bubble them up with consistent context.
use std::error::Error as StdError;

use game_core::{ErrorSeverity, GameError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("failed to encode diagnostics")]
    Diagnostics(#[source] serde_json::Error),
}

/// Failures of a [`GameApi`](super::GameApi) call.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("transport failure")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    #[error("failed to decode server response: {0}")]
    Decode(String),

    #[error("server rejected request with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

impl ApiError {
    pub fn transport(error: impl StdError + Send + Sync + 'static) -> Self {
        ApiError::Transport(Box::new(error))
    }
}

impl GameError for ApiError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            ApiError::Transport(_) => ErrorSeverity::Recoverable,
            ApiError::Decode(_) => ErrorSeverity::Internal,
            ApiError::Rejected { status, .. } if *status >= 500 => ErrorSeverity::Recoverable,
            ApiError::Rejected { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ApiError::Transport(_) => "API_TRANSPORT",
            ApiError::Decode(_) => "API_DECODE",
            ApiError::Rejected { .. } => "API_REJECTED",
        }
    }
}
