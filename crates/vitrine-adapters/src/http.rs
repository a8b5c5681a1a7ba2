use async_trait::async_trait;
use serde::de::DeserializeOwned;
use vitrine_contract::{
    Ack, CartItem, CartSnapshot, CreatedCart, EmailBody, ErrorBody, Product, ProductList,
    StorefrontApi, StorefrontApiError, WorkflowId,
};

/// Configuration for the HTTP adapter.
#[derive(Debug, Clone)]
pub struct HttpApiConfig {
    /// Base URL of the backend, e.g. `http://localhost:3001`.
    pub base_url: String,
}

impl HttpApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

/// `StorefrontApi` over HTTP.
///
/// Requests carry no timeout or cancellation: a hung request suspends only
/// its own continuation.
pub struct HttpStorefrontApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpStorefrontApi {
    pub fn new(config: HttpApiConfig) -> Result<Self, StorefrontApiError> {
        Self::with_client(config, reqwest::Client::new())
    }

    /// Use a preconfigured reqwest client (proxies, extra headers).
    pub fn with_client(
        config: HttpApiConfig,
        client: reqwest::Client,
    ) -> Result<Self, StorefrontApiError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(StorefrontApiError::Transport(
                "base URL cannot be empty".to_string(),
            ));
        }
        Ok(Self { base_url, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Send a request and decode the response body.
    ///
    /// Any status >= 400 is a failure; the backend's `{ Message }` error body
    /// is carried into the error when it decodes.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, StorefrontApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| StorefrontApiError::Transport(e.to_string()))?;
        let status = response.status();
        if status.as_u16() >= 400 {
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.message,
                Err(_) => String::new(),
            };
            tracing::debug!(status = status.as_u16(), message = %message, "storefront request failed");
            return Err(StorefrontApiError::Status {
                status: status.as_u16(),
                message,
            });
        }
        response
            .json::<T>()
            .await
            .map_err(|e| StorefrontApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl StorefrontApi for HttpStorefrontApi {
    async fn create_cart(&self) -> Result<CreatedCart, StorefrontApiError> {
        self.execute(self.client.post(self.url("/cart"))).await
    }

    async fn get_cart(&self, workflow: &WorkflowId) -> Result<CartSnapshot, StorefrontApiError> {
        self.execute(self.client.get(self.url(&format!("/cart/{workflow}"))))
            .await
    }

    async fn get_products(&self) -> Result<Vec<Product>, StorefrontApiError> {
        let list: ProductList = self.execute(self.client.get(self.url("/products"))).await?;
        Ok(list.products)
    }

    async fn add_to_cart(
        &self,
        workflow: &WorkflowId,
        item: CartItem,
    ) -> Result<(), StorefrontApiError> {
        let _: Ack = self
            .execute(
                self.client
                    .put(self.url(&format!("/cart/{workflow}/add")))
                    .json(&item),
            )
            .await?;
        Ok(())
    }

    async fn remove_from_cart(
        &self,
        workflow: &WorkflowId,
        item: CartItem,
    ) -> Result<(), StorefrontApiError> {
        let _: Ack = self
            .execute(
                self.client
                    .put(self.url(&format!("/cart/{workflow}/remove")))
                    .json(&item),
            )
            .await?;
        Ok(())
    }

    async fn update_email(
        &self,
        workflow: &WorkflowId,
        email: &str,
    ) -> Result<(), StorefrontApiError> {
        let body = EmailBody {
            email: email.to_string(),
        };
        let _: Ack = self
            .execute(
                self.client
                    .put(self.url(&format!("/cart/{workflow}/email")))
                    .json(&body),
            )
            .await?;
        Ok(())
    }

    async fn checkout(
        &self,
        workflow: &WorkflowId,
        email: &str,
    ) -> Result<(), StorefrontApiError> {
        let body = EmailBody {
            email: email.to_string(),
        };
        let _: Ack = self
            .execute(
                self.client
                    .put(self.url(&format!("/cart/{workflow}/checkout")))
                    .json(&body),
            )
            .await?;
        Ok(())
    }
}
