//! Site Config Model
//!
//! Site-wide settings not modeled as repeatable entities travel as
//! key→JSON blobs. The server stores them opaquely; the typed structs
//! below decode the well-known ones, falling back to defaults when a blob
//! is absent or malformed.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Well-known config keys
pub mod config_keys {
    /// Section key → bool (absent = visible)
    pub const SECTION_VISIBILITY: &str = "section_visibility";
    /// Section key → numeric rank (absent = hardcoded default)
    pub const SECTION_ORDER: &str = "section_order";
    pub const MAINTENANCE_MODE: &str = "maintenance_mode";
    pub const GENERAL_INFO: &str = "general_info";
    pub const THEME_COLORS: &str = "theme_colors";
    pub const MARKETING_PIXELS: &str = "marketing_pixels";
    pub const HERO_CONTENT: &str = "hero_content";
    pub const ABOUT_CONTENT: &str = "about_content";
    pub const INSPIRATIONAL_QUOTE: &str = "inspirational_quote";
    pub const FOOTER_CONTENT: &str = "footer_content";
    pub const SEO: &str = "seo";
}

/// One config row as stored and served
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigEntry {
    pub key: String,
    pub value: Value,
    pub updated_at: i64,
}

/// Upsert payload for POST /api/admin/config
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigUpsert {
    pub key: String,
    pub value: Value,
}

/// Maintenance mode blob — short-circuits the whole public page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaintenanceMode {
    #[serde(default)]
    pub is_enabled: bool,
    pub message: Option<String>,
}

/// Practice contact details shown in the contact section and footer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralInfo {
    #[serde(default)]
    pub site_name: String,
    pub tagline: Option<String>,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub email: Option<String>,
    pub instagram: Option<String>,
    pub address: Option<String>,
}

/// Third-party marketing pixel IDs, injected by the frontend as-is
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketingPixels {
    pub google_analytics_id: Option<String>,
    pub facebook_pixel_id: Option<String>,
    pub google_ads_id: Option<String>,
}

/// SEO switches; `allow_indexing` drives the dynamic robots.txt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeoSettings {
    #[serde(default = "default_true")]
    pub allow_indexing: bool,
    pub meta_description: Option<String>,
}

impl Default for SeoSettings {
    fn default() -> Self {
        Self {
            allow_indexing: true,
            meta_description: None,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Decode a typed blob leniently: absent or malformed ⇒ defaults.
pub fn decode_or_default<T: serde::de::DeserializeOwned + Default>(value: Value) -> T {
    serde_json::from_value(value).unwrap_or_default()
}

/// Response of GET /api/maintenance-check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceCheck {
    pub maintenance: MaintenanceMode,
    pub general: GeneralInfo,
}
