//! Products page: catalog list, product form dialog, delete confirmation.

use cleaver_core::models::{Category, Product, ProductInput};
use cleaver_core::{ApiResult, Notification, NotificationSlot};

use cleaver_api::{CategoriesApi, ProductsApi};

/// Backend calls the products page depends on.
pub trait ProductsBackend {
    async fn list_products(&self) -> ApiResult<Vec<Product>>;
    async fn list_categories(&self) -> ApiResult<Vec<Category>>;
    async fn create_product(&self, input: &ProductInput) -> ApiResult<()>;
    async fn update_product(&self, id: &str, input: &ProductInput) -> ApiResult<()>;
    async fn delete_product(&self, id: &str) -> ApiResult<()>;
    async fn update_inventory(&self, id: &str, stock: i64) -> ApiResult<()>;
}

#[derive(Clone)]
pub struct HttpProductsBackend {
    products: ProductsApi,
    categories: CategoriesApi,
}

impl HttpProductsBackend {
    pub fn new(products: ProductsApi, categories: CategoriesApi) -> Self {
        Self { products, categories }
    }
}

impl ProductsBackend for HttpProductsBackend {
    async fn list_products(&self) -> ApiResult<Vec<Product>> {
        self.products.list().await
    }

    async fn list_categories(&self) -> ApiResult<Vec<Category>> {
        self.categories.list().await
    }

    async fn create_product(&self, input: &ProductInput) -> ApiResult<()> {
        self.products.create(input).await
    }

    async fn update_product(&self, id: &str, input: &ProductInput) -> ApiResult<()> {
        self.products.update(id, input).await
    }

    async fn delete_product(&self, id: &str) -> ApiResult<()> {
        self.products.delete(id).await
    }

    async fn update_inventory(&self, id: &str, stock: i64) -> ApiResult<()> {
        self.products.update_inventory(id, stock).await
    }
}

/// Form draft. `id` is `None` until the backend has assigned one, which is
/// what decides between POST and PUT on save.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub sku: String,
    pub stock: i64,
    pub category_id: String,
    pub weight: Option<f64>,
    pub image_url: Option<String>,
}

impl ProductDraft {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: Some(product.id.clone()),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            sku: product.sku.clone(),
            stock: product.stock,
            category_id: product.category_id.clone(),
            weight: product.weight,
            image_url: product.image_url.clone(),
        }
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    fn to_input(&self) -> ProductInput {
        ProductInput {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            sku: self.sku.clone(),
            stock: self.stock,
            category_id: self.category_id.clone(),
            weight: self.weight,
            image_url: self.image_url.clone(),
        }
    }
}

pub struct ProductsPage<B> {
    backend: B,
    products: Vec<Product>,
    categories: Vec<Category>,
    loading: bool,
    dialog_open: bool,
    draft: ProductDraft,
    delete_target: Option<Product>,
    notifications: NotificationSlot,
}

impl<B: ProductsBackend> ProductsPage<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            products: Vec::new(),
            categories: Vec::new(),
            loading: false,
            dialog_open: false,
            draft: ProductDraft::default(),
            delete_target: None,
            notifications: NotificationSlot::new(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ProductDraft {
        &mut self.draft
    }

    pub fn delete_target(&self) -> Option<&Product> {
        self.delete_target.as_ref()
    }

    pub fn last_notification(&self) -> Option<&Notification> {
        self.notifications.current()
    }

    pub fn take_notification(&mut self) -> Option<Notification> {
        self.notifications.take()
    }

    /// Replace both lists wholesale.
    pub async fn load(&mut self) {
        self.loading = true;
        match self.backend.list_products().await {
            Ok(products) => self.products = products,
            Err(err) => {
                tracing::warn!(%err, "failed to load products");
                self.notifications.push(Notification::error(format!(
                    "Failed to load products: {}",
                    err.message
                )));
            }
        }
        match self.backend.list_categories().await {
            Ok(categories) => self.categories = categories,
            Err(err) => {
                self.notifications.push(Notification::error(format!(
                    "Failed to load categories: {}",
                    err.message
                )));
            }
        }
        self.loading = false;
    }

    pub fn open_new(&mut self) {
        self.draft = ProductDraft::default();
        self.dialog_open = true;
    }

    pub fn open_edit(&mut self, product: &Product) {
        self.draft = ProductDraft::from_product(product);
        self.dialog_open = true;
    }

    pub fn close_dialog(&mut self) {
        self.dialog_open = false;
    }

    /// POST a new draft or PUT an existing one, then reload. A draft without
    /// a category is rejected before any request is made.
    pub async fn save(&mut self) {
        if self.draft.category_id.trim().is_empty() {
            self.notifications
                .push(Notification::error("Please select a category"));
            return;
        }

        let input = self.draft.to_input();
        let result = match self.draft.id.clone() {
            Some(id) => self.backend.update_product(&id, &input).await,
            None => self.backend.create_product(&input).await,
        };

        match result {
            Ok(()) => {
                let verb = if self.draft.is_new() { "added" } else { "updated" };
                self.notifications
                    .push(Notification::success(format!("Product {verb} successfully")));
                self.dialog_open = false;
                self.load().await;
            }
            Err(err) => {
                let verb = if self.draft.is_new() { "add" } else { "update" };
                self.notifications.push(Notification::error(format!(
                    "Failed to {verb} product: {}",
                    err.message
                )));
            }
        }
    }

    pub fn request_delete(&mut self, product: Product) {
        self.delete_target = Some(product);
    }

    pub fn cancel_delete(&mut self) {
        self.delete_target = None;
    }

    pub async fn confirm_delete(&mut self) {
        let Some(target) = self.delete_target.take() else {
            return;
        };
        match self.backend.delete_product(&target.id).await {
            Ok(()) => {
                self.notifications
                    .push(Notification::success("Product deleted successfully"));
                self.load().await;
            }
            Err(err) => {
                self.notifications.push(Notification::error(format!(
                    "Failed to delete product: {}",
                    err.message
                )));
            }
        }
    }

    /// Stock adjustment through the dedicated inventory endpoint.
    pub async fn adjust_stock(&mut self, id: &str, stock: i64) {
        match self.backend.update_inventory(id, stock).await {
            Ok(()) => self.load().await,
            Err(err) => {
                self.notifications.push(Notification::error(format!(
                    "Failed to update inventory: {}",
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
        ListProducts,
        ListCategories,
        Create,
        Update(String),
        Delete(String),
        Inventory(String, i64),
    }

    #[derive(Default)]
    struct FakeBackend {
        inner: Mutex<Inner>,
    }

    #[derive(Default)]
    struct Inner {
        products: Vec<Product>,
        categories: Vec<Category>,
        fail_save: bool,
        calls: Vec<Call>,
    }

    impl FakeBackend {
        fn calls(&self) -> Vec<Call> {
            self.inner.lock().unwrap().calls.clone()
        }
    }

    impl ProductsBackend for &FakeBackend {
        async fn list_products(&self) -> ApiResult<Vec<Product>> {
            let mut inner = self.inner.lock().unwrap();
            inner.calls.push(Call::ListProducts);
            Ok(inner.products.clone())
        }

        async fn list_categories(&self) -> ApiResult<Vec<Category>> {
            let mut inner = self.inner.lock().unwrap();
            inner.calls.push(Call::ListCategories);
            Ok(inner.categories.clone())
        }

        async fn create_product(&self, input: &ProductInput) -> ApiResult<()> {
            let mut inner = self.inner.lock().unwrap();
            inner.calls.push(Call::Create);
            if inner.fail_save {
                return Err(ApiError::server(422, Some("sku already exists".to_string())));
            }
            let id = format!("p{}", inner.products.len() + 1);
            inner.products.push(Product {
                id,
                name: input.name.clone(),
                description: input.description.clone(),
                price: input.price,
                sku: input.sku.clone(),
                stock: input.stock,
                category_id: input.category_id.clone(),
                weight: input.weight,
                image_url: input.image_url.clone(),
            });
            Ok(())
        }

        async fn update_product(&self, id: &str, _input: &ProductInput) -> ApiResult<()> {
            let mut inner = self.inner.lock().unwrap();
            inner.calls.push(Call::Update(id.to_string()));
            if inner.fail_save {
                return Err(ApiError::unavailable());
            }
            Ok(())
        }

        async fn delete_product(&self, id: &str) -> ApiResult<()> {
            let mut inner = self.inner.lock().unwrap();
            inner.calls.push(Call::Delete(id.to_string()));
            inner.products.retain(|p| p.id != id);
            Ok(())
        }

        async fn update_inventory(&self, id: &str, stock: i64) -> ApiResult<()> {
            let mut inner = self.inner.lock().unwrap();
            inner.calls.push(Call::Inventory(id.to_string(), stock));
            Ok(())
        }
    }

    fn draft_with_category() -> ProductDraft {
        ProductDraft {
            name: "Lamb chops".to_string(),
            price: 18.0,
            sku: "LC-200".to_string(),
            stock: 5,
            category_id: "lamb".to_string(),
            ..ProductDraft::default()
        }
    }

    #[tokio::test]
    async fn save_without_category_is_rejected_before_any_request() {
        let backend = FakeBackend::default();
        let mut page = ProductsPage::new(&backend);
        page.open_new();
        page.draft_mut().name = "Sausages".to_string();

        page.save().await;

        let note = page.last_notification().unwrap();
        assert_eq!(note.severity, Severity::Error);
        assert_eq!(note.message, "Please select a category");
        assert!(backend.calls().is_empty());
        assert!(page.is_dialog_open());
    }

    #[tokio::test]
    async fn save_posts_new_draft_and_reloads() {
        let backend = FakeBackend::default();
        let mut page = ProductsPage::new(&backend);
        page.open_new();
        *page.draft_mut() = draft_with_category();

        page.save().await;

        assert_eq!(
            page.last_notification().unwrap().message,
            "Product added successfully"
        );
        assert!(!page.is_dialog_open());
        assert_eq!(page.products().len(), 1);

        let calls = backend.calls();
        assert_eq!(calls[0], Call::Create);
        assert!(calls.contains(&Call::ListProducts));
    }

    #[tokio::test]
    async fn save_puts_draft_that_already_has_an_id() {
        let backend = FakeBackend::default();
        let mut page = ProductsPage::new(&backend);
        let mut draft = draft_with_category();
        draft.id = Some("p7".to_string());
        *page.draft_mut() = draft;

        page.save().await;

        assert_eq!(
            page.last_notification().unwrap().message,
            "Product updated successfully"
        );
        assert_eq!(backend.calls()[0], Call::Update("p7".to_string()));
    }

    #[tokio::test]
    async fn failed_save_keeps_dialog_open_and_list_intact() {
        let backend = FakeBackend::default();
        backend.inner.lock().unwrap().fail_save = true;
        let mut page = ProductsPage::new(&backend);
        page.open_new();
        *page.draft_mut() = draft_with_category();

        page.save().await;

        let note = page.last_notification().unwrap();
        assert_eq!(note.severity, Severity::Error);
        assert_eq!(note.message, "Failed to add product: sku already exists");
        assert!(page.is_dialog_open());
        assert!(page.products().is_empty());
    }

    #[tokio::test]
    async fn confirm_delete_removes_and_reloads() {
        let backend = FakeBackend::default();
        let product = Product {
            id: "p1".to_string(),
            name: "Ribeye".to_string(),
            description: String::new(),
            price: 24.5,
            sku: "RB-400".to_string(),
            stock: 3,
            category_id: "beef".to_string(),
            weight: None,
            image_url: None,
        };
        backend.inner.lock().unwrap().products.push(product.clone());

        let mut page = ProductsPage::new(&backend);
        page.load().await;
        page.request_delete(product);
        page.confirm_delete().await;

        assert_eq!(
            page.last_notification().unwrap().message,
            "Product deleted successfully"
        );
        assert!(page.products().is_empty());
        assert!(page.delete_target().is_none());
        assert!(backend.calls().contains(&Call::Delete("p1".to_string())));
    }

    #[tokio::test]
    async fn adjust_stock_goes_through_the_inventory_endpoint() {
        let backend = FakeBackend::default();
        let mut page = ProductsPage::new(&backend);

        page.adjust_stock("p1", 42).await;

        assert!(backend.calls().contains(&Call::Inventory("p1".to_string(), 42)));
    }
}
