use crate::error::ViewError;
use crate::registry::{ViewId, ViewKind, ViewRegistry};
use std::sync::Arc;
use vitrine_contract::{CartItem, IdentityStore, Product, StorefrontApi, WorkflowId};

/// Transient feedback after an add-to-cart attempt.
///
/// The original client cleared its flag on a short timer; that is a
/// rendering concern, so the settled state is exposed here and the embedding
/// UI decides when to call `clear_feedback`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AddFeedback {
    #[default]
    Idle,
    Added,
    Failed,
}

/// The product-listing view.
///
/// Activation fetches the catalog and guarantees a valid cart session, the
/// two running concurrently and failing independently.
pub struct StoreView {
    api: Arc<dyn StorefrontApi>,
    identity: Arc<dyn IdentityStore>,
    view_id: Option<ViewId>,
    /// `None` until the catalog load settles successfully.
    pub products: Option<Vec<Product>>,
    pub feedback: AddFeedback,
}

impl StoreView {
    pub fn new(api: Arc<dyn StorefrontApi>, identity: Arc<dyn IdentityStore>) -> Self {
        Self {
            api,
            identity,
            view_id: None,
            products: None,
            feedback: AddFeedback::Idle,
        }
    }

    pub async fn activate(&mut self, registry: &mut ViewRegistry) {
        self.view_id = Some(registry.register(ViewKind::Store));
        let (products, bootstrap) = tokio::join!(
            self.api.get_products(),
            ensure_cart_session(self.api.as_ref(), self.identity.as_ref()),
        );
        match products {
            Ok(products) => self.products = Some(products),
            Err(e) => tracing::warn!(error = %e, "product catalog fetch failed"),
        }
        if let Err(e) = bootstrap {
            tracing::warn!(error = %e, "cart session bootstrap failed");
        }
    }

    pub fn deactivate(&mut self, registry: &mut ViewRegistry) {
        if let Some(id) = self.view_id.take() {
            registry.deregister(id);
        }
    }

    /// Add one unit of `product` to the active cart, recording transient
    /// feedback either way.
    pub async fn add_to_cart(&mut self, product: &Product) {
        let workflow = match self.identity.get().await {
            Ok(Some(id)) => id,
            Ok(None) => {
                self.feedback = AddFeedback::Failed;
                tracing::warn!("add to cart with no active cart session");
                return;
            }
            Err(e) => {
                self.feedback = AddFeedback::Failed;
                tracing::warn!(error = %e, "identity store read failed");
                return;
            }
        };
        match self
            .api
            .add_to_cart(&workflow, CartItem::single(product.id))
            .await
        {
            Ok(()) => self.feedback = AddFeedback::Added,
            Err(e) => {
                self.feedback = AddFeedback::Failed;
                tracing::warn!(error = %e, product = product.id, "add to cart failed");
            }
        }
    }

    /// Reset transient add-to-cart feedback.
    pub fn clear_feedback(&mut self) {
        self.feedback = AddFeedback::Idle;
    }
}

/// Guarantee a valid workflow id is stored before user interaction.
///
/// A stored id is validated by fetching its cart; validation failure and an
/// absent id both end in a fresh cart whose id overwrites the stored value.
pub async fn ensure_cart_session(
    api: &dyn StorefrontApi,
    identity: &dyn IdentityStore,
) -> Result<WorkflowId, ViewError> {
    if let Some(existing) = identity.get().await? {
        match api.get_cart(&existing).await {
            Ok(_) => return Ok(existing),
            Err(e) => {
                tracing::debug!(error = %e, workflow = %existing, "stored cart session failed validation");
            }
        }
    }
    let created = api.create_cart().await?;
    let id = WorkflowId::new(created.workflow_id);
    identity.set(&id).await?;
    Ok(id)
}
