use crate::{CartSnapshot, Product};
use serde::{Deserialize, Serialize};

/// Response of `POST /cart`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedCart {
    #[serde(rename = "workflowID")]
    pub workflow_id: String,
    #[serde(default)]
    pub cart: CartSnapshot,
}

/// Response of `GET /products`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductList {
    pub products: Vec<Product>,
}

/// Body of the email and checkout calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailBody {
    #[serde(rename = "Email")]
    pub email: String,
}

/// Acknowledgement returned by the mutating endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ack {
    pub ok: i64,
}

/// Error body the backend attaches to failed responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(rename = "Message")]
    pub message: String,
}
