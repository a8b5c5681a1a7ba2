//! Storefront client for a REST cart/checkout backend.
//!
//! One crate to depend on: re-exports the contracts, the adapters, and the
//! view models.
//!
//! ```no_run
//! use std::sync::Arc;
//! use vitrine::{
//!     HttpApiConfig, HttpStorefrontApi, MemoryIdentityStore, StoreView, ViewRegistry,
//! };
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = Arc::new(HttpStorefrontApi::new(HttpApiConfig::new(
//!         "http://localhost:3001",
//!     ))?);
//!     let identity = Arc::new(MemoryIdentityStore::new());
//!
//!     let mut registry = ViewRegistry::new();
//!     let mut store = StoreView::new(api, identity);
//!     store.activate(&mut registry).await;
//!
//!     if let Some(products) = &store.products {
//!         if let Some(first) = products.first().cloned() {
//!             store.add_to_cart(&first).await;
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub use vitrine_adapters::{
    FileIdentityStore, HttpApiConfig, HttpStorefrontApi, InMemoryStorefront, MemoryIdentityStore,
};
pub use vitrine_contract::{
    Ack, CartItem, CartSnapshot, CreatedCart, EmailBody, ErrorBody, IdentityStore,
    IdentityStoreError, Product, ProductId, ProductList, StorefrontApi, StorefrontApiError,
    WorkflowId, add_units, remove_units,
};
pub use vitrine_views::{
    AddFeedback, CartView, CheckoutPhase, CheckoutView, StoreView, ViewError, ViewId, ViewKind,
    ViewObserver, ViewRegistry, ensure_cart_session,
};
