use crate::error::ViewError;
use crate::registry::{ViewId, ViewKind, ViewRegistry};
use std::sync::Arc;
use vitrine_contract::{CartItem, IdentityStore, StorefrontApi};

/// Where a checkout attempt stands.
///
/// The UI reflects settled states only: `Succeeded` and `Failed` are set
/// after the checkout request resolves, never before.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CheckoutPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// The checkout view: one-shot order finalization.
pub struct CheckoutView {
    api: Arc<dyn StorefrontApi>,
    identity: Arc<dyn IdentityStore>,
    view_id: Option<ViewId>,
    pub items: Vec<CartItem>,
    pub email: Option<String>,
    pub phase: CheckoutPhase,
}

impl CheckoutView {
    pub fn new(api: Arc<dyn StorefrontApi>, identity: Arc<dyn IdentityStore>) -> Self {
        Self {
            api,
            identity,
            view_id: None,
            items: Vec::new(),
            email: None,
            phase: CheckoutPhase::Idle,
        }
    }

    pub async fn activate(&mut self, registry: &mut ViewRegistry) {
        self.view_id = Some(registry.register(ViewKind::Checkout));
        match self.load_items().await {
            Ok(items) => self.items = items,
            Err(e) => tracing::warn!(error = %e, "checkout item load failed"),
        }
    }

    pub fn deactivate(&mut self, registry: &mut ViewRegistry) {
        if let Some(id) = self.view_id.take() {
            registry.deregister(id);
        }
    }

    async fn load_items(&self) -> Result<Vec<CartItem>, ViewError> {
        let workflow = self.identity.get().await?.ok_or(ViewError::NoActiveCart)?;
        Ok(self.api.get_cart(&workflow).await?.items)
    }

    /// Record the buyer's email on the backend session and locally.
    pub async fn set_email(&mut self, email: &str) -> Result<(), ViewError> {
        let workflow = self.identity.get().await?.ok_or(ViewError::NoActiveCart)?;
        self.api.update_email(&workflow, email).await?;
        self.email = Some(email.to_string());
        Ok(())
    }

    /// One-shot checkout.
    ///
    /// No email recorded means no request is issued and the phase stays
    /// `Idle`. Success clears the stored workflow id and the local items;
    /// failure settles `Failed` and leaves both intact.
    pub async fn end_checkout(&mut self) -> Result<(), ViewError> {
        let Some(email) = self.email.clone() else {
            return Ok(());
        };
        let workflow = self.identity.get().await?.ok_or(ViewError::NoActiveCart)?;
        self.phase = CheckoutPhase::Submitting;
        match self.api.checkout(&workflow, &email).await {
            Ok(()) => {
                self.phase = CheckoutPhase::Succeeded;
                self.items.clear();
                self.identity.clear().await?;
                Ok(())
            }
            Err(e) => {
                self.phase = CheckoutPhase::Failed;
                tracing::warn!(error = %e, "checkout failed");
                Ok(())
            }
        }
    }
}
