use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Opaque identifier naming a backend-tracked cart session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkflowId(String);

impl WorkflowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkflowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Error)]
pub enum IdentityStoreError {
    /// IO error from a persistent backend.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored value could not be decoded.
    #[error("invalid stored identity: {0}")]
    Invalid(String),
}

/// Store of the single `workflow` key naming the active cart session.
///
/// Zero or one value is live at a time. `get` returns `None` both when the
/// key was never written and after `clear`; `clear` persists the empty
/// string, which is what the original client leaves behind after checkout.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    async fn get(&self) -> Result<Option<WorkflowId>, IdentityStoreError>;

    async fn set(&self, id: &WorkflowId) -> Result<(), IdentityStoreError>;

    async fn clear(&self) -> Result<(), IdentityStoreError>;
}
