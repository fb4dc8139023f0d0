//! Seam between the orchestrator and the backend's platform endpoints.

use cleaver_api::{PlatformsApi, SyncApi};
use cleaver_core::models::{ActionResponse, SyncHistoryEntry};
use cleaver_core::platform::PlatformStatusMap;
use cleaver_core::{ApiResult, PlatformId};

/// Backend calls the orchestrator depends on. Implemented over HTTP in
/// production and by scripted fakes in tests.
pub trait PlatformGateway {
    async fn status(&self) -> ApiResult<PlatformStatusMap>;
    async fn connect(&self, platform: PlatformId) -> ApiResult<ActionResponse>;
    async fn disconnect(&self, platform: PlatformId) -> ApiResult<ActionResponse>;
    async fn sync(&self, platform: PlatformId) -> ApiResult<ActionResponse>;
    async fn import(&self, platform: PlatformId) -> ApiResult<ActionResponse>;
    async fn history(&self) -> ApiResult<Vec<SyncHistoryEntry>>;
}

/// Production gateway delegating to the resource clients.
#[derive(Clone)]
pub struct HttpPlatformGateway {
    platforms: PlatformsApi,
    sync: SyncApi,
}

impl HttpPlatformGateway {
    pub fn new(platforms: PlatformsApi, sync: SyncApi) -> Self {
        Self { platforms, sync }
    }
}

impl PlatformGateway for HttpPlatformGateway {
    async fn status(&self) -> ApiResult<PlatformStatusMap> {
        self.platforms.status().await
    }

    async fn connect(&self, platform: PlatformId) -> ApiResult<ActionResponse> {
        self.platforms.connect(platform).await
    }

    async fn disconnect(&self, platform: PlatformId) -> ApiResult<ActionResponse> {
        self.platforms.disconnect(platform).await
    }

    async fn sync(&self, platform: PlatformId) -> ApiResult<ActionResponse> {
        self.platforms.sync(platform).await
    }

    async fn import(&self, platform: PlatformId) -> ApiResult<ActionResponse> {
        self.sync.import(platform).await
    }

    async fn history(&self) -> ApiResult<Vec<SyncHistoryEntry>> {
        self.sync.history().await
    }
}
