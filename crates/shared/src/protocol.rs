use serde::{Deserialize, Serialize};

use crate::domain::ProductName;

/// Body of `POST /products`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRequest {
    pub product: String,
}

impl ProductRequest {
    pub fn new(product: &ProductName) -> Self {
        Self {
            product: product.as_str().to_string(),
        }
    }
}

/// Successful responses are arbitrary JSON handed to the view untouched.
pub type ProductResult = serde_json::Value;
