use async_trait::async_trait;
use tokio::sync::RwLock;
use vitrine_contract::{IdentityStore, IdentityStoreError, WorkflowId};

/// In-memory identity store for tests and single-run tooling.
///
/// `clear` stores the empty string rather than unsetting the key, mirroring
/// what the persistent stores leave behind after checkout.
#[derive(Default)]
pub struct MemoryIdentityStore {
    value: RwLock<Option<String>>,
}

impl MemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IdentityStore for MemoryIdentityStore {
    async fn get(&self) -> Result<Option<WorkflowId>, IdentityStoreError> {
        let value = self.value.read().await;
        Ok(value
            .as_deref()
            .filter(|v| !v.is_empty())
            .map(WorkflowId::new))
    }

    async fn set(&self, id: &WorkflowId) -> Result<(), IdentityStoreError> {
        *self.value.write().await = Some(id.as_str().to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<(), IdentityStoreError> {
        *self.value.write().await = Some(String::new());
        Ok(())
    }
}
