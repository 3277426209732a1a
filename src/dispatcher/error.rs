//! Error types for the session dispatcher.

use crate::framework::FrameworkError;
use crate::token_store::TokenStoreError;
use crate::transport::ApiError;
use crate::validation::ValidationErrors;
use thiserror::Error;

/// Errors returned by [`SessionDispatcher`](super::SessionDispatcher) operations.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The input failed client-side validation; nothing was sent.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// The API call failed. Only `login` returns this; the other operations
    /// report network failures through session events.
    #[error("{0}")]
    Network(#[from] ApiError),

    /// The session store actor is gone.
    #[error("Session store unavailable: {0}")]
    Store(#[from] FrameworkError),

    /// A newer login was issued before this one completed; its result was discarded.
    #[error("Login superseded by a newer request")]
    Superseded,

    #[error(transparent)]
    TokenStore(#[from] TokenStoreError),
}

impl DispatchError {
    /// Field errors, if this is a validation failure.
    pub fn validation(&self) -> Option<&ValidationErrors> {
        match self {
            DispatchError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}
