//! Cross-platform sync resource client (`/sync/...`).

use cleaver_core::models::{ActionResponse, SyncHistoryEntry};
use cleaver_core::{ApiResult, PlatformId};

use crate::client::ApiClient;

#[derive(Clone)]
pub struct SyncApi {
    client: ApiClient,
}

impl SyncApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Trigger a catalog push across all connected platforms.
    pub async fn sync_products(&self) -> ApiResult<ActionResponse> {
        self.client.post_empty("/sync/products").await
    }

    /// Trigger an import from one platform.
    pub async fn import(&self, platform: PlatformId) -> ApiResult<ActionResponse> {
        self.client
            .post_empty(&format!("/sync/import/{platform}"))
            .await
    }

    /// Aggregate sync status feed; shape is owned by the backend, so it is
    /// passed through undecoded.
    pub async fn status(&self) -> ApiResult<serde_json::Value> {
        self.client.get("/sync/status").await
    }

    /// Full chronological sync/import history; no pagination.
    pub async fn history(&self) -> ApiResult<Vec<SyncHistoryEntry>> {
        self.client.get("/sync/history").await
    }
}
