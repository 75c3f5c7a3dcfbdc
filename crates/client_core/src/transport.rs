//! HTTP transport for the products endpoint.

use async_trait::async_trait;
use hyper::ext::ReasonPhrase;
use reqwest::{Client, Response};
use shared::{
    error::error_detail_from_body,
    protocol::{ProductRequest, ProductResult},
};

use crate::error::{HttpFailure, RequestError};

#[async_trait]
pub trait ProductTransport: Send + Sync {
    async fn post_product(&self, request: &ProductRequest) -> Result<ProductResult, RequestError>;
}

#[derive(Debug, Clone)]
pub struct ProductClient {
    http: Client,
    products_url: String,
}

impl ProductClient {
    pub fn new(products_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            products_url: products_url.into(),
        }
    }

    pub fn products_url(&self) -> &str {
        &self.products_url
    }
}

#[async_trait]
impl ProductTransport for ProductClient {
    async fn post_product(&self, request: &ProductRequest) -> Result<ProductResult, RequestError> {
        let response = self
            .http
            .post(&self.products_url)
            .json(request)
            .send()
            .await?;
        let status = response.status();
        let status_text = reason_phrase(&response);
        let body = response.bytes().await?;

        if !status.is_success() {
            let detail = error_detail_from_body(&body)?;
            return Err(RequestError::Status(HttpFailure {
                status: status.as_u16(),
                status_text,
                detail,
            }));
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

/// Reason phrase as sent by the server, else the canonical one, else empty.
fn reason_phrase(response: &Response) -> String {
    if let Some(reason) = response.extensions().get::<ReasonPhrase>() {
        return String::from_utf8_lossy(reason.as_bytes()).into_owned();
    }
    response
        .status()
        .canonical_reason()
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;
