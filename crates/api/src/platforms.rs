//! Platform resource client (`/platforms/...`).

use cleaver_core::models::{ActionResponse, SettingsMap};
use cleaver_core::platform::PlatformStatusMap;
use cleaver_core::{ApiResult, PlatformId};

use crate::client::ApiClient;

#[derive(Clone)]
pub struct PlatformsApi {
    client: ApiClient,
}

impl PlatformsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Connection and last-sync snapshot for all platforms, keyed by wire id.
    pub async fn status(&self) -> ApiResult<PlatformStatusMap> {
        self.client.get("/platforms/status").await
    }

    pub async fn connect(&self, platform: PlatformId) -> ApiResult<ActionResponse> {
        self.client
            .post_empty(&format!("/platforms/{platform}/connect"))
            .await
    }

    pub async fn disconnect(&self, platform: PlatformId) -> ApiResult<ActionResponse> {
        self.client
            .post_empty(&format!("/platforms/{platform}/disconnect"))
            .await
    }

    pub async fn sync(&self, platform: PlatformId) -> ApiResult<ActionResponse> {
        self.client
            .post_empty(&format!("/platforms/{platform}/sync"))
            .await
    }

    pub async fn settings(&self, platform: PlatformId) -> ApiResult<SettingsMap> {
        self.client
            .get(&format!("/platforms/{platform}/settings"))
            .await
    }

    pub async fn save_settings(&self, platform: PlatformId, values: &SettingsMap) -> ApiResult<()> {
        self.client
            .post_no_content(&format!("/platforms/{platform}/settings"), values)
            .await
    }
}
