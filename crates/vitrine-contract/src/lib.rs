//! Storefront contract: domain types, wire DTOs, and the client-side traits.

mod api;
mod cart;
mod identity;
mod product;
mod wire;

pub use api::{StorefrontApi, StorefrontApiError};
pub use cart::{CartItem, CartSnapshot, add_units, remove_units};
pub use identity::{IdentityStore, IdentityStoreError, WorkflowId};
pub use product::{Product, ProductId};
pub use wire::{Ack, CreatedCart, EmailBody, ErrorBody, ProductList};
