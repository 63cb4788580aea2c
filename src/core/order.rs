use crate::domain::model::{LineItem, OrderRequest};
use crate::utils::error::{ApiError, Result};
use std::collections::HashMap;

impl LineItem {
    pub fn new(product_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
            variants: None,
        }
    }

    /// Records a variant choice (e.g. size = "large"). Keys are unique;
    /// choosing the same variant twice keeps the last value.
    pub fn with_variant(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.variants
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }
}

impl OrderRequest {
    pub fn new(items: Vec<LineItem>, zone_id: impl Into<String>) -> Self {
        Self {
            items,
            zone_id: zone_id.into(),
        }
    }

    /// Opt-in hardening. The gateway itself forwards any payload as-is
    /// and lets the remote service reject bad input; callers that want
    /// to catch it before the network call use this.
    pub fn validate(&self) -> Result<()> {
        if self.items.is_empty() {
            return Err(ApiError::Validation {
                message: "order must contain at least one item".to_string(),
            });
        }

        if self.zone_id.trim().is_empty() {
            return Err(ApiError::Validation {
                message: "zoneId must not be empty".to_string(),
            });
        }

        for (index, item) in self.items.iter().enumerate() {
            if item.product_id.trim().is_empty() {
                return Err(ApiError::Validation {
                    message: format!("item {}: productId must not be empty", index),
                });
            }
            if item.quantity < 1 {
                return Err(ApiError::Validation {
                    message: format!("item {}: quantity must be at least 1", index),
                });
            }
        }

        Ok(())
    }
}
