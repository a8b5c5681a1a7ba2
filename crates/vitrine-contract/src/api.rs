use crate::{CartItem, CartSnapshot, CreatedCart, Product, WorkflowId};
use async_trait::async_trait;
use thiserror::Error;

/// Failure of a backend call.
///
/// Callers do not branch on the variant: any of them means "request failed"
/// and the views treat them uniformly. The variants carry diagnostics for
/// logs.
#[derive(Debug, Error)]
pub enum StorefrontApiError {
    /// The request never produced an HTTP response.
    #[error("transport error: {0}")]
    Transport(String),

    /// The backend answered with an error status (>= 400).
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body did not decode as the documented shape.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// Client-side surface of the cart/checkout backend.
#[async_trait]
pub trait StorefrontApi: Send + Sync {
    /// Start a new cart session. `POST /cart`.
    async fn create_cart(&self) -> Result<CreatedCart, StorefrontApiError>;

    /// Fetch the current cart. `GET /cart/{workflowID}`.
    async fn get_cart(&self, workflow: &WorkflowId) -> Result<CartSnapshot, StorefrontApiError>;

    /// Fetch the product catalog. `GET /products`.
    async fn get_products(&self) -> Result<Vec<Product>, StorefrontApiError>;

    /// Add units of a product to the cart. `PUT /cart/{workflowID}/add`.
    async fn add_to_cart(
        &self,
        workflow: &WorkflowId,
        item: CartItem,
    ) -> Result<(), StorefrontApiError>;

    /// Remove units of a product from the cart. `PUT /cart/{workflowID}/remove`.
    async fn remove_from_cart(
        &self,
        workflow: &WorkflowId,
        item: CartItem,
    ) -> Result<(), StorefrontApiError>;

    /// Attach an email address to the cart session. `PUT /cart/{workflowID}/email`.
    async fn update_email(
        &self,
        workflow: &WorkflowId,
        email: &str,
    ) -> Result<(), StorefrontApiError>;

    /// Finalize the cart into an order. `PUT /cart/{workflowID}/checkout`.
    async fn checkout(&self, workflow: &WorkflowId, email: &str)
    -> Result<(), StorefrontApiError>;
}
