//! Dashboard page: headline counts plus the most recent platform sync.

use cleaver_core::models::{Category, Order, Product};
use cleaver_core::platform::{NEVER_SYNCED, PlatformStatusMap};
use cleaver_core::{ApiResult, Notification, NotificationSlot};

use cleaver_api::{CategoriesApi, OrdersApi, PlatformsApi, ProductsApi};

pub trait DashboardBackend {
    async fn products(&self) -> ApiResult<Vec<Product>>;
    async fn categories(&self) -> ApiResult<Vec<Category>>;
    async fn orders(&self) -> ApiResult<Vec<Order>>;
    async fn platform_status(&self) -> ApiResult<PlatformStatusMap>;
}

#[derive(Clone)]
pub struct HttpDashboardBackend {
    products: ProductsApi,
    categories: CategoriesApi,
    orders: OrdersApi,
    platforms: PlatformsApi,
}

impl HttpDashboardBackend {
    pub fn new(
        products: ProductsApi,
        categories: CategoriesApi,
        orders: OrdersApi,
        platforms: PlatformsApi,
    ) -> Self {
        Self {
            products,
            categories,
            orders,
            platforms,
        }
    }
}

impl DashboardBackend for HttpDashboardBackend {
    async fn products(&self) -> ApiResult<Vec<Product>> {
        self.products.list().await
    }

    async fn categories(&self) -> ApiResult<Vec<Category>> {
        self.categories.list().await
    }

    async fn orders(&self) -> ApiResult<Vec<Order>> {
        self.orders.list().await
    }

    async fn platform_status(&self) -> ApiResult<PlatformStatusMap> {
        self.platforms.status().await
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_orders: usize,
    pub total_products: usize,
    pub total_categories: usize,
    /// Most recent `lastSync` across all platforms, or `"Never"`.
    pub last_sync: String,
}

impl Default for DashboardStats {
    fn default() -> Self {
        Self {
            total_orders: 0,
            total_products: 0,
            total_categories: 0,
            last_sync: NEVER_SYNCED.to_string(),
        }
    }
}

pub struct DashboardPage<B> {
    backend: B,
    stats: DashboardStats,
    recent_orders: Vec<Order>,
    loading: bool,
    notifications: NotificationSlot,
}

const RECENT_ORDERS: usize = 5;

impl<B: DashboardBackend> DashboardPage<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            stats: DashboardStats::default(),
            recent_orders: Vec::new(),
            loading: false,
            notifications: NotificationSlot::new(),
        }
    }

    pub fn stats(&self) -> &DashboardStats {
        &self.stats
    }

    pub fn recent_orders(&self) -> &[Order] {
        &self.recent_orders
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_notification(&self) -> Option<&Notification> {
        self.notifications.current()
    }

    pub fn take_notification(&mut self) -> Option<Notification> {
        self.notifications.take()
    }

    /// Refresh every headline figure. A failing source zeroes nothing; the
    /// previous figure for that source survives until a load succeeds.
    pub async fn load(&mut self) {
        self.loading = true;
        let mut failed = false;

        match self.backend.products().await {
            Ok(products) => self.stats.total_products = products.len(),
            Err(_) => failed = true,
        }
        match self.backend.categories().await {
            Ok(categories) => self.stats.total_categories = categories.len(),
            Err(_) => failed = true,
        }
        match self.backend.orders().await {
            Ok(orders) => {
                self.stats.total_orders = orders.len();
                self.recent_orders = orders.into_iter().take(RECENT_ORDERS).collect();
            }
            Err(_) => failed = true,
        }
        match self.backend.platform_status().await {
            Ok(statuses) => self.stats.last_sync = latest_sync(&statuses),
            Err(_) => failed = true,
        }

        if failed {
            tracing::warn!("dashboard load finished with at least one failed source");
            self.notifications
                .push(Notification::error("Failed to load dashboard data"));
        }
        self.loading = false;
    }
}

/// Most recent `lastSync` timestamp across all platforms. Timestamps are
/// ISO-8601 strings, so lexicographic max is chronological max.
fn latest_sync(statuses: &PlatformStatusMap) -> String {
    statuses
        .values()
        .filter_map(|s| s.last_sync.as_deref())
        .max()
        .unwrap_or(NEVER_SYNCED)
        .to_string()
}
