use crate::domain::model::{Establishment, OrderConfirmation, OrderRequest, Product};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Port over the remote commerce API. Implemented by the reqwest-backed
/// client; callers that want a test double implement it themselves.
#[async_trait]
pub trait CommerceApi: Send + Sync {
    async fn fetch_establishment(&self) -> Result<Establishment>;
    async fn fetch_products(&self) -> Result<Vec<Product>>;
    async fn create_order(&self, order: &OrderRequest) -> Result<OrderConfirmation>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn establishment_id(&self) -> &str;
}
