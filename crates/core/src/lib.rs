//! `cleaver-core` — shared client-side domain types.
//!
//! This crate contains the types every other crate agrees on: the normalized
//! API error, platform identifiers, the notification model, and the wire
//! models the backend serves. No HTTP or runtime concerns live here.

pub mod error;
pub mod models;
pub mod notification;
pub mod platform;

pub use error::{ApiError, ApiResult};
pub use notification::{Notification, NotificationSlot, Severity};
pub use platform::{
    NEVER_SYNCED, Platform, PlatformId, PlatformStatus, PlatformStatusMap, UnknownPlatform,
};
