//! Categories page: flat category list with an inline create/edit form.

use cleaver_core::models::{Category, CategoryInput};
use cleaver_core::{ApiResult, Notification, NotificationSlot};

use cleaver_api::CategoriesApi;

pub trait CategoriesBackend {
    async fn list(&self) -> ApiResult<Vec<Category>>;
    async fn create(&self, input: &CategoryInput) -> ApiResult<()>;
    async fn update(&self, id: &str, input: &CategoryInput) -> ApiResult<()>;
    async fn delete(&self, id: &str) -> ApiResult<()>;
}

#[derive(Clone)]
pub struct HttpCategoriesBackend {
    api: CategoriesApi,
}

impl HttpCategoriesBackend {
    pub fn new(api: CategoriesApi) -> Self {
        Self { api }
    }
}

impl CategoriesBackend for HttpCategoriesBackend {
    async fn list(&self) -> ApiResult<Vec<Category>> {
        self.api.list().await
    }

    async fn create(&self, input: &CategoryInput) -> ApiResult<()> {
        self.api.create(input).await
    }

    async fn update(&self, id: &str, input: &CategoryInput) -> ApiResult<()> {
        self.api.update(id, input).await
    }

    async fn delete(&self, id: &str) -> ApiResult<()> {
        self.api.delete(id).await
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryForm {
    pub name: String,
    pub description: String,
}

pub struct CategoriesPage<B> {
    backend: B,
    categories: Vec<Category>,
    loading: bool,
    form: CategoryForm,
    editing: Option<String>,
    notifications: NotificationSlot,
}

impl<B: CategoriesBackend> CategoriesPage<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            categories: Vec::new(),
            loading: false,
            form: CategoryForm::default(),
            editing: None,
            notifications: NotificationSlot::new(),
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn form(&self) -> &CategoryForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut CategoryForm {
        &mut self.form
    }

    /// Id of the category being edited, `None` when the form creates.
    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    pub fn can_save(&self) -> bool {
        !self.form.name.trim().is_empty()
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
            Ok(categories) => self.categories = categories,
            Err(err) => {
                tracing::warn!(%err, "failed to load categories");
                self.notifications.push(Notification::error(format!(
                    "Failed to load categories: {}",
                    err.message
                )));
            }
        }
        self.loading = false;
    }

    pub fn start_edit(&mut self, category: &Category) {
        self.editing = Some(category.id.clone());
        self.form = CategoryForm {
            name: category.name.clone(),
            description: category.description.clone(),
        };
    }

    pub fn reset_form(&mut self) {
        self.editing = None;
        self.form = CategoryForm::default();
    }

    /// Create or update depending on whether an edit is in progress. A blank
    /// name leaves the form untouched; the save button is disabled in that
    /// state anyway.
    pub async fn save(&mut self) {
        if !self.can_save() {
            return;
        }

        let input = CategoryInput {
            name: self.form.name.clone(),
            description: self.form.description.clone(),
        };
        let result = match self.editing.clone() {
            Some(id) => self.backend.update(&id, &input).await,
            None => self.backend.create(&input).await,
        };

        match result {
            Ok(()) => {
                let verb = if self.editing.is_some() { "updated" } else { "created" };
                self.notifications.push(Notification::success(format!(
                    "Category {verb} successfully"
                )));
                self.reset_form();
                self.load().await;
            }
            Err(err) => {
                let verb = if self.editing.is_some() { "update" } else { "create" };
                self.notifications.push(Notification::error(format!(
                    "Failed to {verb} category: {}",
                    err.message
                )));
            }
        }
    }

    pub async fn delete(&mut self, id: &str) {
        match self.backend.delete(id).await {
            Ok(()) => {
                self.notifications
                    .push(Notification::success("Category deleted successfully"));
                self.load().await;
            }
            Err(err) => {
                self.notifications.push(Notification::error(format!(
                    "Failed to delete category: {}",
                    err.message
                )));
            }
        }
    }
}
