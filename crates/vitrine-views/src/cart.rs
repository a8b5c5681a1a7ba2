use crate::error::ViewError;
use crate::registry::{ViewId, ViewKind, ViewRegistry};
use std::sync::Arc;
use vitrine_contract::{
    CartItem, IdentityStore, Product, ProductId, StorefrontApi, remove_units,
};

/// The cart view, home of the cart state synchronizer.
pub struct CartView {
    api: Arc<dyn StorefrontApi>,
    identity: Arc<dyn IdentityStore>,
    view_id: Option<ViewId>,
    pub items: Vec<CartItem>,
    pub products: Option<Vec<Product>>,
    /// Whether the cart holds anything to check out.
    pub ready: bool,
    pub loading: bool,
    pub last_error: Option<String>,
}

impl CartView {
    pub fn new(api: Arc<dyn StorefrontApi>, identity: Arc<dyn IdentityStore>) -> Self {
        Self {
            api,
            identity,
            view_id: None,
            items: Vec::new(),
            products: None,
            ready: false,
            loading: true,
            last_error: None,
        }
    }

    /// Load the cart, then the catalog. No stored session means loading
    /// finishes with an empty cart; failures are recorded on the view.
    pub async fn activate(&mut self, registry: &mut ViewRegistry) {
        self.view_id = Some(registry.register(ViewKind::Cart));
        self.loading = true;
        if let Err(e) = self.load().await {
            self.last_error = Some(e.to_string());
            tracing::warn!(error = %e, "cart load failed");
        }
        self.loading = false;
    }

    pub fn deactivate(&mut self, registry: &mut ViewRegistry) {
        if let Some(id) = self.view_id.take() {
            registry.deregister(id);
        }
    }

    async fn load(&mut self) -> Result<(), ViewError> {
        let Some(workflow) = self.identity.get().await? else {
            return Ok(());
        };
        let snapshot = self.api.get_cart(&workflow).await?;
        self.items = snapshot.items;
        self.ready = !self.items.is_empty();
        // Sequenced after the cart, as in the original client.
        self.products = Some(self.api.get_products().await?);
        Ok(())
    }

    /// Whether checkout may begin; an empty cart stays on the cart view.
    pub fn can_checkout(&self) -> bool {
        !self.items.is_empty()
    }

    /// Remove one unit of `product_id` from the cart.
    ///
    /// Fire, then patch: the backend removal is issued first, and on success
    /// the local collection is corrected for exactly one removed unit with
    /// no re-fetch: an absent line is a no-op, quantity 1 drops the line,
    /// otherwise the quantity decrements by 1. On failure nothing local
    /// changes. Taking `&mut self` means removals on one view instance
    /// cannot overlap.
    pub async fn remove_item(&mut self, product_id: ProductId) -> Result<(), ViewError> {
        let workflow = self.identity.get().await?.ok_or(ViewError::NoActiveCart)?;
        self.api
            .remove_from_cart(&workflow, CartItem::single(product_id))
            .await?;
        remove_units(&mut self.items, product_id, 1);
        Ok(())
    }
}
