//! Platform settings page: per-platform credential forms.
//!
//! Each platform exposes a fixed credential schema; the page holds the form
//! values and validates required fields before saving.

use cleaver_core::models::SettingsMap;
use cleaver_core::{ApiResult, Notification, NotificationSlot, PlatformId};

use cleaver_api::PlatformsApi;

/// One credential field in a platform's settings form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsField {
    pub label: &'static str,
    pub key: &'static str,
    pub required: bool,
    pub secret: bool,
    pub placeholder: &'static str,
}

const fn field(
    label: &'static str,
    key: &'static str,
    required: bool,
    secret: bool,
    placeholder: &'static str,
) -> SettingsField {
    SettingsField {
        label,
        key,
        required,
        secret,
        placeholder,
    }
}

const WOOCOMMERCE_FIELDS: &[SettingsField] = &[
    field("Store URL", "url", true, false, "https://yourstore.com"),
    field("Consumer Key", "consumerKey", true, false, "ck_..."),
    field("Consumer Secret", "consumerSecret", true, true, "cs_..."),
];

const SHOPIFY_FIELDS: &[SettingsField] = &[
    field("Shop Name", "shopName", true, false, "yourshop"),
    field("Access Token", "accessToken", true, true, "shpat_..."),
];

const UBEREATS_FIELDS: &[SettingsField] = &[
    field("Client ID", "clientId", true, false, ""),
    field("Client Secret", "clientSecret", true, true, ""),
];

const PRESTASHOP_FIELDS: &[SettingsField] = &[
    field("Store URL", "url", true, false, "https://yourstore.com"),
    field("API Key", "apiKey", true, true, ""),
];

const ODOO_FIELDS: &[SettingsField] = &[
    field("Server URL", "url", true, false, "https://yourcompany.odoo.com"),
    field("Database", "database", true, false, ""),
    field("Username", "username", true, false, ""),
    field("Password", "password", true, true, ""),
];

const DELIVEROO_FIELDS: &[SettingsField] = &[
    field("API Key", "apiKey", true, true, ""),
    field("Restaurant ID", "restaurantId", true, false, ""),
];

/// Credential schema for a platform's settings form.
pub fn settings_fields(platform: PlatformId) -> &'static [SettingsField] {
    match platform {
        PlatformId::Woocommerce => WOOCOMMERCE_FIELDS,
        PlatformId::Shopify => SHOPIFY_FIELDS,
        PlatformId::Ubereats => UBEREATS_FIELDS,
        PlatformId::Prestashop => PRESTASHOP_FIELDS,
        PlatformId::Odoo => ODOO_FIELDS,
        PlatformId::Deliveroo => DELIVEROO_FIELDS,
    }
}

pub trait SettingsBackend {
    async fn load(&self, platform: PlatformId) -> ApiResult<SettingsMap>;
    async fn save(&self, platform: PlatformId, values: &SettingsMap) -> ApiResult<()>;
}

#[derive(Clone)]
pub struct HttpSettingsBackend {
    api: PlatformsApi,
}

impl HttpSettingsBackend {
    pub fn new(api: PlatformsApi) -> Self {
        Self { api }
    }
}

impl SettingsBackend for HttpSettingsBackend {
    async fn load(&self, platform: PlatformId) -> ApiResult<SettingsMap> {
        self.api.settings(platform).await
    }

    async fn save(&self, platform: PlatformId, values: &SettingsMap) -> ApiResult<()> {
        self.api.save_settings(platform, values).await
    }
}

pub struct PlatformSettingsPage<B> {
    backend: B,
    platform: PlatformId,
    values: SettingsMap,
    loading: bool,
    saving: bool,
    notifications: NotificationSlot,
}

impl<B: SettingsBackend> PlatformSettingsPage<B> {
    pub fn new(backend: B, platform: PlatformId) -> Self {
        Self {
            backend,
            platform,
            values: SettingsMap::new(),
            loading: false,
            saving: false,
            notifications: NotificationSlot::new(),
        }
    }

    pub fn platform(&self) -> PlatformId {
        self.platform
    }

    pub fn fields(&self) -> &'static [SettingsField] {
        settings_fields(self.platform)
    }

    pub fn value(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn set_value(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_string(), value.into());
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn last_notification(&self) -> Option<&Notification> {
        self.notifications.current()
    }

    pub fn take_notification(&mut self) -> Option<Notification> {
        self.notifications.take()
    }

    /// Required fields whose current value is blank.
    pub fn missing_required(&self) -> Vec<&'static SettingsField> {
        self.fields()
            .iter()
            .filter(|f| f.required && self.value(f.key).trim().is_empty())
            .collect()
    }

    pub async fn load(&mut self) {
        self.loading = true;
        match self.backend.load(self.platform).await {
            Ok(values) => self.values = values,
            Err(err) => {
                tracing::warn!(platform = %self.platform, %err, "failed to load settings");
                self.notifications.push(Notification::error(format!(
                    "Failed to load settings: {}",
                    err.message
                )));
            }
        }
        self.loading = false;
    }

    /// Save the form. Nothing is sent while a required field is blank.
    pub async fn save(&mut self) {
        if let Some(missing) = self.missing_required().first() {
            self.notifications.push(Notification::error(format!(
                "{} is required",
                missing.label
            )));
            return;
        }

        self.saving = true;
        match self.backend.save(self.platform, &self.values).await {
            Ok(()) => {
                self.notifications
                    .push(Notification::success("Settings saved successfully"));
            }
            Err(err) => {
                self.notifications.push(Notification::error(format!(
                    "Failed to save settings: {}",
                    err.message
                )));
            }
        }
        self.saving = false;
    }
}
