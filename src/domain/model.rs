use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A merchant/venue record as returned by the remote catalog service.
/// No schema is enforced locally; the body passes through verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Establishment(pub serde_json::Value);

/// A sellable item record, opaque for the same reason as [`Establishment`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Product(pub serde_json::Value);

/// The server's response to an order submission (order id, status, etc.).
/// Passed through unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderConfirmation(pub serde_json::Value);

/// One product selection within an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product_id: String,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variants: Option<HashMap<String, String>>,
}

/// The order-submission payload: `{ "items": [...], "zoneId": "..." }`
/// on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub items: Vec<LineItem>,
    pub zone_id: String,
}
