//! Product resource client (`/products`).

use serde::Serialize;

use cleaver_core::ApiResult;
use cleaver_core::models::{Product, ProductInput};

use crate::client::ApiClient;

#[derive(Serialize)]
struct InventoryUpdate {
    stock: i64,
}

#[derive(Clone)]
pub struct ProductsApi {
    client: ApiClient,
}

impl ProductsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ApiResult<Vec<Product>> {
        self.client.get("/products").await
    }

    pub async fn get(&self, id: &str) -> ApiResult<Product> {
        self.client.get(&format!("/products/{id}")).await
    }

    pub async fn create(&self, product: &ProductInput) -> ApiResult<()> {
        self.client.post_no_content("/products", product).await
    }

    pub async fn update(&self, id: &str, product: &ProductInput) -> ApiResult<()> {
        self.client
            .put_no_content(&format!("/products/{id}"), product)
            .await
    }

    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        self.client.delete(&format!("/products/{id}")).await
    }

    /// Stock adjustment, separate from a full product update.
    pub async fn update_inventory(&self, id: &str, stock: i64) -> ApiResult<()> {
        self.client
            .put_no_content(&format!("/products/{id}/inventory"), &InventoryUpdate { stock })
            .await
    }
}
