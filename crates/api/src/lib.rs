//! `cleaver-api` — HTTP client and typed resource clients.
//!
//! One `ApiClient` owns the base URL, the auth session, and error
//! normalization. Resource clients are thin request builders mapping 1:1
//! onto REST endpoints; they carry no business logic and pass errors through
//! untouched.

pub mod categories;
pub mod client;
pub mod config;
pub mod orders;
pub mod platforms;
pub mod products;
pub mod session;
pub mod sync;

pub use categories::CategoriesApi;
pub use client::ApiClient;
pub use config::ApiConfig;
pub use orders::OrdersApi;
pub use platforms::PlatformsApi;
pub use products::ProductsApi;
pub use session::{LogUnauthorized, Session, UnauthorizedHandler};
pub use sync::SyncApi;
