use crate::token_store::TokenStoreError;
use crate::transport::ApiError;
use crate::validation::ValidationErrors;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("{0}")]
    Network(#[from] ApiError),

    /// A write was attempted with no token stored.
    #[error("Not logged in")]
    Unauthenticated,

    #[error(transparent)]
    TokenStore(#[from] TokenStoreError),
}
