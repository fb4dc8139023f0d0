//! Category resource client (`/categories`).

use cleaver_core::ApiResult;
use cleaver_core::models::{Category, CategoryInput};

use crate::client::ApiClient;

#[derive(Clone)]
pub struct CategoriesApi {
    client: ApiClient,
}

impl CategoriesApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ApiResult<Vec<Category>> {
        self.client.get("/categories").await
    }

    pub async fn get(&self, id: &str) -> ApiResult<Category> {
        self.client.get(&format!("/categories/{id}")).await
    }

    pub async fn create(&self, category: &CategoryInput) -> ApiResult<()> {
        self.client.post_no_content("/categories", category).await
    }

    pub async fn update(&self, id: &str, category: &CategoryInput) -> ApiResult<()> {
        self.client
            .put_no_content(&format!("/categories/{id}"), category)
            .await
    }

    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        self.client.delete(&format!("/categories/{id}")).await
    }
}
