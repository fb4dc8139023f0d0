//! Orders page: incoming order list with detail selection and status moves.

use cleaver_core::models::Order;
use cleaver_core::{ApiResult, Notification, NotificationSlot};

use cleaver_api::OrdersApi;

pub trait OrdersBackend {
    async fn list(&self) -> ApiResult<Vec<Order>>;
    async fn update(&self, id: &str, order: &Order) -> ApiResult<()>;
    async fn update_status(&self, id: &str, status: &str) -> ApiResult<()>;
}

#[derive(Clone)]
pub struct HttpOrdersBackend {
    api: OrdersApi,
}

impl HttpOrdersBackend {
    pub fn new(api: OrdersApi) -> Self {
        Self { api }
    }
}

impl OrdersBackend for HttpOrdersBackend {
    async fn list(&self) -> ApiResult<Vec<Order>> {
        self.api.list().await
    }

    async fn update(&self, id: &str, order: &Order) -> ApiResult<()> {
        self.api.update(id, order).await
    }

    async fn update_status(&self, id: &str, status: &str) -> ApiResult<()> {
        self.api.update_status(id, status).await
    }
}

pub struct OrdersPage<B> {
    backend: B,
    orders: Vec<Order>,
    loading: bool,
    selected: Option<String>,
    notifications: NotificationSlot,
}

impl<B: OrdersBackend> OrdersPage<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            orders: Vec::new(),
            loading: false,
            selected: None,
            notifications: NotificationSlot::new(),
        }
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn selected(&self) -> Option<&Order> {
        let id = self.selected.as_deref()?;
        self.orders.iter().find(|o| o.id == id)
    }

    pub fn select(&mut self, id: &str) {
        self.selected = Some(id.to_string());
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn last_notification(&self) -> Option<&Notification> {
        self.notifications.current()
    }

    pub fn take_notification(&mut self) -> Option<Notification> {
        self.notifications.take()
    }

    pub async fn load(&mut self) {
        self.loading = true;
        match self.backend.list().await {
            Ok(orders) => self.orders = orders,
            Err(err) => {
                tracing::warn!(%err, "failed to load orders");
                self.notifications.push(Notification::error(format!(
                    "Failed to load orders: {}",
                    err.message
                )));
            }
        }
        self.loading = false;
    }

    /// Move an order to a new status. On success the local copy is patched in
    /// place; no reload, the list the user is looking at stays put.
    pub async fn update_status(&mut self, id: &str, status: &str) {
        match self.backend.update_status(id, status).await {
            Ok(()) => {
                if let Some(order) = self.orders.iter_mut().find(|o| o.id == id) {
                    order.status = status.to_string();
                }
                self.notifications
                    .push(Notification::success("Order status updated successfully"));
            }
            Err(err) => {
                self.notifications.push(Notification::error(format!(
                    "Failed to update order status: {}",
                    err.message
                )));
            }
        }
    }

    /// Full order update (notes, shipping address), then reload.
    pub async fn save(&mut self, order: &Order) {
        match self.backend.update(&order.id, order).await {
            Ok(()) => {
                self.notifications
                    .push(Notification::success("Order updated successfully"));
                self.load().await;
            }
            Err(err) => {
                self.notifications.push(Notification::error(format!(
                    "Failed to update order: {}",
                    err.message
                )));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use cleaver_core::{ApiError, Severity};

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        List,
        Update(String),
        Status(String, String),
    }

    #[derive(Default)]
    struct FakeBackend {
        inner: Mutex<Inner>,
    }

    #[derive(Default)]
    struct Inner {
        orders: Vec<Order>,
        fail_status: bool,
        calls: Vec<Call>,
    }

    impl FakeBackend {
        fn calls(&self) -> Vec<Call> {
            self.inner.lock().unwrap().calls.clone()
        }
    }

    impl OrdersBackend for &FakeBackend {
        async fn list(&self) -> ApiResult<Vec<Order>> {
            let mut inner = self.inner.lock().unwrap();
            inner.calls.push(Call::List);
            Ok(inner.orders.clone())
        }

        async fn update(&self, id: &str, _order: &Order) -> ApiResult<()> {
            let mut inner = self.inner.lock().unwrap();
            inner.calls.push(Call::Update(id.to_string()));
            Ok(())
        }

        async fn update_status(&self, id: &str, status: &str) -> ApiResult<()> {
            let mut inner = self.inner.lock().unwrap();
            inner
                .calls
                .push(Call::Status(id.to_string(), status.to_string()));
            if inner.fail_status {
                return Err(ApiError::server(422, Some("invalid transition".to_string())));
            }
            Ok(())
        }
    }

    fn order(id: &str, status: &str) -> Order {
        Order {
            id: id.to_string(),
            order_number: format!("ORD-{id}"),
            customer_name: "Jo Bloggs".to_string(),
            customer_email: String::new(),
            customer_phone: String::new(),
            status: status.to_string(),
            total: 42.0,
            items: Vec::new(),
            created_at: String::new(),
            platform: "shopify".to_string(),
            shipping_address: None,
            notes: None,
        }
    }

    #[tokio::test]
    async fn status_update_patches_local_copy_without_reload() {
        let backend = FakeBackend::default();
        backend.inner.lock().unwrap().orders.push(order("o1", "pending"));

        let mut page = OrdersPage::new(&backend);
        page.load().await;
        page.update_status("o1", "processing").await;

        assert_eq!(page.orders()[0].status, "processing");
        assert_eq!(
            page.last_notification().unwrap().message,
            "Order status updated successfully"
        );
        // one List from the initial load, none after the status move
        let list_calls = backend
            .calls()
            .iter()
            .filter(|c| **c == Call::List)
            .count();
        assert_eq!(list_calls, 1);
    }

    #[tokio::test]
    async fn failed_status_update_leaves_order_untouched() {
        let backend = FakeBackend::default();
        {
            let mut inner = backend.inner.lock().unwrap();
            inner.orders.push(order("o1", "pending"));
            inner.fail_status = true;
        }

        let mut page = OrdersPage::new(&backend);
        page.load().await;
        page.update_status("o1", "completed").await;

        assert_eq!(page.orders()[0].status, "pending");
        let note = page.last_notification().unwrap();
        assert_eq!(note.severity, Severity::Error);
        assert_eq!(note.message, "Failed to update order status: invalid transition");
    }

    #[tokio::test]
    async fn selection_resolves_against_the_current_list() {
        let backend = FakeBackend::default();
        backend.inner.lock().unwrap().orders.push(order("o2", "pending"));

        let mut page = OrdersPage::new(&backend);
        page.load().await;

        page.select("o2");
        assert_eq!(page.selected().unwrap().id, "o2");

        page.select("gone");
        assert!(page.selected().is_none());

        page.clear_selection();
        assert!(page.selected().is_none());
    }

    #[tokio::test]
    async fn save_sends_full_update_and_reloads() {
        let backend = FakeBackend::default();
        let o = order("o3", "pending");
        backend.inner.lock().unwrap().orders.push(o.clone());

        let mut page = OrdersPage::new(&backend);
        page.save(&o).await;

        assert_eq!(
            page.last_notification().unwrap().message,
            "Order updated successfully"
        );
        let calls = backend.calls();
        assert_eq!(calls[0], Call::Update("o3".to_string()));
        assert!(calls.contains(&Call::List));
    }
}
