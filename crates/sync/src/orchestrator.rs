//! Multi-platform sync orchestrator.
//!
//! Holds the client-side platform list and drives connect/disconnect/sync/
//! import actions against the backend. Batch actions fan out with bounded
//! concurrency but collect results in input order, so the reported X/Y
//! counts are deterministic for a given backend response sequence. Failures
//! are contained at single-platform granularity; there is no retry anywhere,
//! the user re-triggers the action.

use futures::stream::{self, StreamExt};

use cleaver_core::models::SyncHistoryEntry;
use cleaver_core::platform::PlatformStatusMap;
use cleaver_core::{
    NEVER_SYNCED, Notification, NotificationSlot, Platform, PlatformId,
};

use crate::gateway::PlatformGateway;

/// Concurrency cap for batch connect/sync fan-out.
pub const DEFAULT_FANOUT: usize = 3;

/// Per-platform outcome of one batch sync attempt. Ephemeral: logged, counted
/// into the aggregate notification, then dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    pub platform: PlatformId,
    pub success: bool,
    pub message: String,
}

pub struct SyncOrchestrator<G> {
    gateway: G,
    platforms: Vec<Platform>,
    history: Vec<SyncHistoryEntry>,
    syncing: bool,
    connecting: bool,
    fanout: usize,
    notifications: NotificationSlot,
}

impl<G: PlatformGateway> SyncOrchestrator<G> {
    /// Seed the fixed platform list, all disconnected until the first
    /// status refresh.
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            platforms: Platform::seed_all(),
            history: Vec::new(),
            syncing: false,
            connecting: false,
            fanout: DEFAULT_FANOUT,
            notifications: NotificationSlot::new(),
        }
    }

    pub fn with_fanout(mut self, fanout: usize) -> Self {
        self.fanout = fanout.max(1);
        self
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn platform(&self, id: PlatformId) -> Option<&Platform> {
        self.platforms.iter().find(|p| p.id == id)
    }

    pub fn history(&self) -> &[SyncHistoryEntry] {
        &self.history
    }

    pub fn is_syncing(&self) -> bool {
        self.syncing
    }

    pub fn is_connecting(&self) -> bool {
        self.connecting
    }

    pub fn last_notification(&self) -> Option<&Notification> {
        self.notifications.current()
    }

    pub fn take_notification(&mut self) -> Option<Notification> {
        self.notifications.take()
    }

    /// Fetch the status snapshot and merge it into the platform list.
    /// Idempotent; overlapping calls are last-write-wins since status is
    /// re-derivable from the backend.
    pub async fn refresh_status(&mut self) {
        match self.gateway.status().await {
            Ok(statuses) => merge_status(&mut self.platforms, &statuses),
            Err(err) => {
                tracing::warn!(error = %err, "platform status refresh failed");
                self.notifications
                    .push(Notification::error("Failed to fetch platform status"));
            }
        }
    }

    /// Connect or disconnect one platform, whichever is the opposite of its
    /// current state. The local flag flips only on a successful response.
    pub async fn toggle_connection(&mut self, id: PlatformId) {
        let Some(connected) = self.platform(id).map(|p| p.connected) else {
            return;
        };

        let (action, result) = if connected {
            ("disconnect", self.gateway.disconnect(id).await)
        } else {
            ("connect", self.gateway.connect(id).await)
        };
        let name = id.display_name();

        match result {
            Ok(response) if response.is_success() => {
                if let Some(platform) = self.platforms.iter_mut().find(|p| p.id == id) {
                    platform.connected = !connected;
                }
                self.notifications
                    .push(Notification::success(format!("Successfully {action}ed {name}")));
            }
            Ok(response) => {
                let reason = response
                    .message
                    .unwrap_or_else(|| "Unknown error".to_string());
                self.notifications
                    .push(Notification::error(format!("Failed to {action} {name}: {reason}")));
            }
            Err(err) => {
                self.notifications.push(Notification::error(format!(
                    "Failed to {action} {name}: {}",
                    err.message
                )));
            }
        }
    }

    /// Connect every currently-disconnected platform and report one
    /// aggregate count. Platforms that fail stay disconnected; the status
    /// snapshot is refreshed afterwards regardless of outcome.
    pub async fn connect_all(&mut self) {
        if self.connecting {
            return;
        }
        self.connecting = true;

        let targets: Vec<PlatformId> = self
            .platforms
            .iter()
            .filter(|p| !p.connected)
            .map(|p| p.id)
            .collect();
        let total = targets.len();

        let results: Vec<(PlatformId, bool)> = {
            let gateway = &self.gateway;
            stream::iter(targets.into_iter().map(|id| async move {
                let ok = match gateway.connect(id).await {
                    Ok(response) if response.is_success() => true,
                    Ok(response) => {
                        tracing::debug!(platform = %id, message = ?response.message, "connect rejected");
                        false
                    }
                    Err(err) => {
                        tracing::debug!(platform = %id, error = %err, "connect failed");
                        false
                    }
                };
                (id, ok)
            }))
            .buffered(self.fanout)
            .collect()
            .await
        };

        let connected = results.iter().filter(|(_, ok)| *ok).count();
        for (id, ok) in &results {
            if *ok {
                if let Some(platform) = self.platforms.iter_mut().find(|p| p.id == *id) {
                    platform.connected = true;
                }
            }
        }

        let message = format!("Connected {connected}/{total} platforms successfully");
        self.notifications.push(if connected == total {
            Notification::success(message)
        } else {
            Notification::warning(message)
        });

        self.connecting = false;
        self.refresh_status().await;
    }

    /// Sync every currently-connected platform. Never mutates `connected`;
    /// only the follow-up status refresh can change it.
    pub async fn sync_all(&mut self) {
        if self.syncing {
            return;
        }
        self.syncing = true;

        let targets: Vec<PlatformId> = self
            .platforms
            .iter()
            .filter(|p| p.connected)
            .map(|p| p.id)
            .collect();
        let total = targets.len();

        let results: Vec<SyncOutcome> = {
            let gateway = &self.gateway;
            stream::iter(targets.into_iter().map(|id| async move {
                match gateway.sync(id).await {
                    Ok(response) => SyncOutcome {
                        platform: id,
                        success: response.is_success(),
                        message: response.message.unwrap_or_default(),
                    },
                    Err(err) => SyncOutcome {
                        platform: id,
                        success: false,
                        message: err.message,
                    },
                }
            }))
            .buffered(self.fanout)
            .collect()
            .await
        };

        let synced = results.iter().filter(|o| o.success).count();
        for outcome in &results {
            tracing::debug!(
                platform = %outcome.platform,
                success = outcome.success,
                message = %outcome.message,
                "platform sync outcome"
            );
        }

        let message = format!("Sync completed: {synced}/{total} platforms synced successfully");
        self.notifications.push(if synced == total {
            Notification::success(message)
        } else {
            Notification::error(message)
        });

        self.syncing = false;
        self.refresh_status().await;
    }

    /// Import catalog data from one platform, then refresh both the status
    /// snapshot and the history feed.
    pub async fn import_from(&mut self, id: PlatformId) {
        if self.syncing {
            return;
        }
        self.syncing = true;

        let name = id.display_name();
        match self.gateway.import(id).await {
            Ok(_) => {
                self.notifications
                    .push(Notification::success(format!("Import from {name} started successfully")));
            }
            Err(err) => {
                tracing::warn!(platform = %id, error = %err, "import failed");
                self.notifications
                    .push(Notification::error(format!("Failed to import from {name}")));
            }
        }

        self.syncing = false;
        self.refresh_status().await;
        self.refresh_history().await;
    }

    /// Fetch the full history feed; whatever the backend returns, unfiltered.
    pub async fn refresh_history(&mut self) {
        match self.gateway.history().await {
            Ok(entries) => self.history = entries,
            Err(err) => {
                tracing::warn!(error = %err, "sync history refresh failed");
                self.notifications
                    .push(Notification::error("Failed to load sync history"));
            }
        }
    }
}

/// Merge a status snapshot into the platform list by wire identifier.
/// Platforms absent from the snapshot fall back to disconnected/never-synced.
fn merge_status(platforms: &mut [Platform], statuses: &PlatformStatusMap) {
    for platform in platforms {
        match statuses.get(platform.id.as_str()) {
            Some(status) => {
                platform.connected = status.connected;
                platform.last_sync = status
                    .last_sync
                    .clone()
                    .unwrap_or_else(|| NEVER_SYNCED.to_string());
            }
            None => {
                platform.connected = false;
                platform.last_sync = NEVER_SYNCED.to_string();
            }
        }
    }
}
