use crate::core::{CommerceApi, ConfigProvider, Establishment, OrderConfirmation, Product};
use crate::domain::model::OrderRequest;
use crate::utils::error::{ApiError, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Reqwest-backed client for the remote commerce API. Every operation is
/// a single stateless request/response exchange; no retry, no caching.
pub struct ApiClient<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> ApiClient<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T> {
        tracing::debug!("Making API request to: {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ApiError::Network)?;
        self.decode(response).await
    }

    /// Classifies the response: non-2xx becomes `Remote` with the status
    /// and body carried verbatim, a 2xx body is decoded as JSON.
    async fn decode<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        let body = response.text().await.map_err(ApiError::Network)?;
        if !status.is_success() {
            return Err(ApiError::Remote { status, body });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> CommerceApi for ApiClient<C> {
    async fn fetch_establishment(&self) -> Result<Establishment> {
        let url = format!(
            "{}/establishments/{}",
            self.config.base_url(),
            self.config.establishment_id()
        );
        self.get_json(url).await
    }

    async fn fetch_products(&self) -> Result<Vec<Product>> {
        let url = format!(
            "{}/establishments/{}/products",
            self.config.base_url(),
            self.config.establishment_id()
        );
        self.get_json(url).await
    }

    /// Submits the order payload as-is. No local validation and no
    /// reshaping happen here: an invalid request is forwarded untouched
    /// and rejected by the remote service. Use
    /// [`OrderRequest::validate`] beforehand to catch it locally.
    async fn create_order(&self, order: &OrderRequest) -> Result<OrderConfirmation> {
        let url = format!("{}/orders", self.config.base_url());
        tracing::debug!("Submitting order with {} item(s) to: {}", order.items.len(), url);

        let response = self
            .client
            .post(&url)
            .json(order)
            .send()
            .await
            .map_err(ApiError::Network)?;
        self.decode(response).await
    }
}
