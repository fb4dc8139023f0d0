//! `cleaver-pages` — page view models.
//!
//! One module per routed page. Each view model owns its loaded lists
//! (replaced wholesale on every load), a form draft, dialog state, and a
//! single-slot notification. Backend access goes through per-page traits so
//! the state machines are testable without HTTP.

pub mod categories;
pub mod dashboard;
pub mod orders;
pub mod products;
pub mod settings;

pub use categories::{CategoriesBackend, CategoriesPage, CategoryForm, HttpCategoriesBackend};
pub use dashboard::{DashboardBackend, DashboardPage, DashboardStats, HttpDashboardBackend};
pub use orders::{HttpOrdersBackend, OrdersBackend, OrdersPage};
pub use products::{HttpProductsBackend, ProductDraft, ProductsBackend, ProductsPage};
pub use settings::{
    HttpSettingsBackend, PlatformSettingsPage, SettingsBackend, SettingsField, settings_fields,
};
