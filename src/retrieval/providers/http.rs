//! HTTP feed provider.
//!
//! Fetches a JSON array of resource records from a URL. No particular
//! server is assumed; anything that serves the feed shape works.

use async_trait::async_trait;
use log::{debug, info};

use crate::core::resource::{Resource, decode_store};
use crate::retrieval::provider::{ResourceProvider, RetrievalError};

pub struct HttpProvider {
    client: reqwest::Client,
}

impl HttpProvider {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResourceProvider for HttpProvider {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch(&self, source: &str) -> Result<Vec<Resource>, RetrievalError> {
        info!("Fetching resource feed from {source}");

        let response = self
            .client
            .get(source)
            .send()
            .await
            .map_err(|e| RetrievalError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RetrievalError::Http {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| RetrievalError::Network(e.to_string()))?;
        let store = decode_store(&body).map_err(|e| RetrievalError::Decode(e.to_string()))?;

        debug!("Decoded {} resources from {source}", store.len());
        Ok(store)
    }
}
