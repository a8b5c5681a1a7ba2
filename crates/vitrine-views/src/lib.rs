//! View models for the storefront client.
//!
//! Each view owns its transient UI state and talks to the backend through
//! the `StorefrontApi` and `IdentityStore` contracts. The cart view carries
//! the core synchronization logic: optimistic local patching of the item
//! list after a mutating call resolves, with no server re-fetch.

mod cart;
mod checkout;
mod error;
mod registry;
mod store;

pub use cart::CartView;
pub use checkout::{CheckoutPhase, CheckoutView};
pub use error::ViewError;
pub use registry::{ViewId, ViewKind, ViewObserver, ViewRegistry};
pub use store::{AddFeedback, StoreView, ensure_cart_session};
