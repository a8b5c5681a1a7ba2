use serde::{Deserialize, Serialize};

/// Identifier of a catalog product.
pub type ProductId = i64;

/// A catalog product, read-only from the client's perspective.
///
/// Wire casing follows the backend's Go struct encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "Id")]
    pub id: ProductId,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Image")]
    pub image: String,
    #[serde(rename = "Price")]
    pub price: f32,
}
