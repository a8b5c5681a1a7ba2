use thiserror::Error;
use vitrine_contract::{IdentityStoreError, StorefrontApiError};

/// Failure of a view-level flow touching the backend or the identity store.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error(transparent)]
    Api(#[from] StorefrontApiError),

    #[error(transparent)]
    Identity(#[from] IdentityStoreError),

    /// A flow that requires an active cart session ran without one.
    #[error("no active cart session")]
    NoActiveCart,
}
