pub mod client;
pub mod order;

pub use crate::domain::model::{
    Establishment, LineItem, OrderConfirmation, OrderRequest, Product,
};
pub use crate::domain::ports::{CommerceApi, ConfigProvider};
pub use crate::utils::error::Result;
