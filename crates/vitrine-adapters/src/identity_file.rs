use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use vitrine_contract::{IdentityStore, IdentityStoreError, WorkflowId};

/// File-backed identity store: one small file under a base directory holding
/// the workflow id, so the session survives process restarts.
pub struct FileIdentityStore {
    path: PathBuf,
}

impl FileIdentityStore {
    /// Store the `workflow` key under the given base directory.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            path: base_dir.into().join("workflow"),
        }
    }
}

#[async_trait]
impl IdentityStore for FileIdentityStore {
    async fn get(&self) -> Result<Option<WorkflowId>, IdentityStoreError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        if trimmed.chars().any(|c| c.is_control()) {
            return Err(IdentityStoreError::Invalid(format!(
                "workflow id contains control characters: {trimmed:?}"
            )));
        }
        Ok(Some(WorkflowId::new(trimmed)))
    }

    async fn set(&self, id: &WorkflowId) -> Result<(), IdentityStoreError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, id.as_str()).await?;
        Ok(())
    }

    async fn clear(&self) -> Result<(), IdentityStoreError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, "").await?;
        Ok(())
    }
}
