use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;
use vitrine_contract::{
    CartItem, CartSnapshot, CreatedCart, Product, StorefrontApi, StorefrontApiError, WorkflowId,
    add_units, remove_units,
};

struct CartEntry {
    items: Vec<CartItem>,
    email: String,
    checked_out: bool,
}

/// Per-operation call counters, for test assertions.
#[derive(Default)]
struct CallCounters {
    create_cart: AtomicUsize,
    get_cart: AtomicUsize,
    get_products: AtomicUsize,
    add_to_cart: AtomicUsize,
    remove_from_cart: AtomicUsize,
    update_email: AtomicUsize,
    checkout: AtomicUsize,
}

/// In-process fake backend for tests and local development.
///
/// Externally observable semantics match the real backend: numbered
/// `CART-{n}` workflow ids, add merges quantity per product, removing the
/// last unit drops the line, and an unknown workflow id fails the way a 404
/// does. Checkout closes the session: a closed session reads like a missing
/// one and refuses further mutation, so a stale stored id fails validation
/// and the client bootstraps a fresh cart.
#[derive(Default)]
pub struct InMemoryStorefront {
    products: Vec<Product>,
    carts: RwLock<HashMap<String, CartEntry>>,
    next_cart: AtomicUsize,
    calls: CallCounters,
}

impl InMemoryStorefront {
    pub fn new() -> Self {
        Self::default()
    }

    /// A storefront with the given catalog.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products,
            ..Self::default()
        }
    }

    /// How many cart sessions `create_cart` has produced.
    pub fn created_carts(&self) -> usize {
        self.calls.create_cart.load(Ordering::SeqCst)
    }

    /// How many checkout requests were issued.
    pub fn checkout_calls(&self) -> usize {
        self.calls.checkout.load(Ordering::SeqCst)
    }

    /// Whether the session exists and has been checked out.
    pub async fn is_checked_out(&self, workflow: &WorkflowId) -> bool {
        let carts = self.carts.read().await;
        carts.get(workflow.as_str()).is_some_and(|c| c.checked_out)
    }

    fn not_found(workflow: &WorkflowId) -> StorefrontApiError {
        StorefrontApiError::Status {
            status: 404,
            message: format!("no cart session {workflow}"),
        }
    }

    fn closed(workflow: &WorkflowId) -> StorefrontApiError {
        StorefrontApiError::Status {
            status: 409,
            message: format!("cart session {workflow} already checked out"),
        }
    }
}

#[async_trait]
impl StorefrontApi for InMemoryStorefront {
    async fn create_cart(&self) -> Result<CreatedCart, StorefrontApiError> {
        self.calls.create_cart.fetch_add(1, Ordering::SeqCst);
        let n = self.next_cart.fetch_add(1, Ordering::SeqCst) + 1;
        let id = format!("CART-{n}");
        let mut carts = self.carts.write().await;
        carts.insert(
            id.clone(),
            CartEntry {
                items: Vec::new(),
                email: String::new(),
                checked_out: false,
            },
        );
        Ok(CreatedCart {
            workflow_id: id,
            cart: CartSnapshot::default(),
        })
    }

    async fn get_cart(&self, workflow: &WorkflowId) -> Result<CartSnapshot, StorefrontApiError> {
        self.calls.get_cart.fetch_add(1, Ordering::SeqCst);
        let carts = self.carts.read().await;
        let entry = carts
            .get(workflow.as_str())
            .ok_or_else(|| Self::not_found(workflow))?;
        if entry.checked_out {
            return Err(Self::not_found(workflow));
        }
        Ok(CartSnapshot {
            items: entry.items.clone(),
            email: entry.email.clone(),
        })
    }

    async fn get_products(&self) -> Result<Vec<Product>, StorefrontApiError> {
        self.calls.get_products.fetch_add(1, Ordering::SeqCst);
        Ok(self.products.clone())
    }

    async fn add_to_cart(
        &self,
        workflow: &WorkflowId,
        item: CartItem,
    ) -> Result<(), StorefrontApiError> {
        self.calls.add_to_cart.fetch_add(1, Ordering::SeqCst);
        let mut carts = self.carts.write().await;
        let entry = carts
            .get_mut(workflow.as_str())
            .ok_or_else(|| Self::not_found(workflow))?;
        if entry.checked_out {
            return Err(Self::closed(workflow));
        }
        add_units(&mut entry.items, item);
        Ok(())
    }

    async fn remove_from_cart(
        &self,
        workflow: &WorkflowId,
        item: CartItem,
    ) -> Result<(), StorefrontApiError> {
        self.calls.remove_from_cart.fetch_add(1, Ordering::SeqCst);
        let mut carts = self.carts.write().await;
        let entry = carts
            .get_mut(workflow.as_str())
            .ok_or_else(|| Self::not_found(workflow))?;
        if entry.checked_out {
            return Err(Self::closed(workflow));
        }
        remove_units(&mut entry.items, item.product_id, item.quantity);
        Ok(())
    }

    async fn update_email(
        &self,
        workflow: &WorkflowId,
        email: &str,
    ) -> Result<(), StorefrontApiError> {
        self.calls.update_email.fetch_add(1, Ordering::SeqCst);
        let mut carts = self.carts.write().await;
        let entry = carts
            .get_mut(workflow.as_str())
            .ok_or_else(|| Self::not_found(workflow))?;
        if entry.checked_out {
            return Err(Self::closed(workflow));
        }
        entry.email = email.to_string();
        Ok(())
    }

    async fn checkout(
        &self,
        workflow: &WorkflowId,
        email: &str,
    ) -> Result<(), StorefrontApiError> {
        self.calls.checkout.fetch_add(1, Ordering::SeqCst);
        let mut carts = self.carts.write().await;
        let entry = carts
            .get_mut(workflow.as_str())
            .ok_or_else(|| Self::not_found(workflow))?;
        if entry.checked_out {
            return Err(Self::closed(workflow));
        }
        entry.email = email.to_string();
        entry.checked_out = true;
        Ok(())
    }
}
