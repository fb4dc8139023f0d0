//! `cleaver-sync` — multi-platform sync orchestration.
//!
//! The orchestrator drives connect/disconnect/sync/import actions across the
//! fixed platform set, contains per-platform failures so one bad platform
//! never aborts a batch, and reduces every batch to a single aggregate
//! notification. Backend access goes through the [`PlatformGateway`] seam.

pub mod gateway;
pub mod orchestrator;

pub use gateway::{HttpPlatformGateway, PlatformGateway};
pub use orchestrator::{DEFAULT_FANOUT, SyncOrchestrator, SyncOutcome};
