use std::future::Future;
use std::time::Duration;

use reqwest::StatusCode;

use crate::models::Product;

pub const PRODUCTS_PATH: &str = "/product/get-product";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server answered {0}")]
    Status(StatusCode),
    #[error("malformed product payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Somewhere the product catalog can be read from.
pub trait ProductSource: Send + Sync + 'static {
    fn fetch_products(&self) -> impl Future<Output = Result<Vec<Product>, FetchError>> + Send;
}

pub struct HttpProductSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpProductSource {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            endpoint: products_endpoint(base_url),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ProductSource for HttpProductSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        let response = self.client.get(&self.endpoint).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

pub fn products_endpoint(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), PRODUCTS_PATH)
}
