//! Order resource client (`/orders`).
//!
//! Orders are created by the platforms, not by this client: only reads,
//! full updates, and status transitions are exposed.

use serde::Serialize;

use cleaver_core::ApiResult;
use cleaver_core::models::Order;

use crate::client::ApiClient;

#[derive(Serialize)]
struct StatusUpdate<'a> {
    status: &'a str,
}

#[derive(Clone)]
pub struct OrdersApi {
    client: ApiClient,
}

impl OrdersApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ApiResult<Vec<Order>> {
        self.client.get("/orders").await
    }

    pub async fn get(&self, id: &str) -> ApiResult<Order> {
        self.client.get(&format!("/orders/{id}")).await
    }

    pub async fn update(&self, id: &str, order: &Order) -> ApiResult<()> {
        self.client.put_no_content(&format!("/orders/{id}"), order).await
    }

    pub async fn update_status(&self, id: &str, status: &str) -> ApiResult<()> {
        self.client
            .patch_no_content(&format!("/orders/{id}/status"), &StatusUpdate { status })
            .await
    }
}
