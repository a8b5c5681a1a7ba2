//! Adapters for the storefront contracts: the reqwest-backed API client, an
//! in-process fake backend, and the in-memory and file-backed identity
//! stores.

mod http;
mod identity_file;
mod identity_memory;
mod memory;

pub use http::{HttpApiConfig, HttpStorefrontApi};
pub use identity_file::FileIdentityStore;
pub use identity_memory::MemoryIdentityStore;
pub use memory::InMemoryStorefront;
