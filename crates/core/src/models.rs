//! Wire models for the backend's catalog, order, and sync resources.
//!
//! These mirror the JSON the API serves (camelCase field names). The client
//! holds transient, fully-replaced copies; ownership stays with the backend.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Catalog product as served by `GET /products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub sku: String,
    pub stock: i64,
    pub category_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Payload for creating or updating a product.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub sku: String,
    pub stock: i64,
    pub category_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    #[serde(default)]
    pub products: i64,
}

/// Product category. `count` is server-computed and read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "_count", skip_serializing_if = "Option::is_none")]
    pub count: Option<CategoryCount>,
}

/// Payload for creating or updating a category.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryInput {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: String,
    pub product_id: String,
    pub product_name: String,
    pub quantity: i64,
    pub price: f64,
    pub total: f64,
}

/// Order as served by `GET /orders`. Status values observed from the backend:
/// `pending`, `processing`, `completed`, `cancelled`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    #[serde(default)]
    pub order_number: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: String,
    #[serde(default)]
    pub customer_phone: String,
    pub status: String,
    pub total: f64,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One server-reported past sync or import event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncHistoryEntry {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub platform: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response body of the per-platform action endpoints
/// (`connect`/`disconnect`/`sync`) and of the import trigger.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ActionResponse {
    /// An absent `success` field counts as failure, matching how the backend
    /// signals per-platform action outcomes.
    pub fn is_success(&self) -> bool {
        self.success.unwrap_or(false)
    }
}

/// Per-platform credential form values, keyed by credential field key.
pub type SettingsMap = HashMap<String, String>;
