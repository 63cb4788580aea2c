pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::ApiConfig;
pub use crate::core::client::ApiClient;
pub use crate::domain::model::{Establishment, LineItem, OrderConfirmation, OrderRequest, Product};
pub use crate::domain::ports::{CommerceApi, ConfigProvider};
pub use crate::utils::error::{ApiError, Result};
