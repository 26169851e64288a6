//! Service Item Model

use super::icon::IconKey;
use serde::{Deserialize, Serialize};

/// A therapy service offered by the practice
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ServiceItem {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub icon: IconKey,
    /// Accent color, hex string like "#7c9a92"
    pub color: Option<String>,
    pub duration_minutes: Option<i64>,
    /// Free-form price line ("a partir de 60€"), never arithmetic
    pub price_text: Option<String>,
    pub sort_order: i64,
    pub is_active: bool,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

/// Create service payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceItemCreate {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub icon: IconKey,
    pub color: Option<String>,
    pub duration_minutes: Option<i64>,
    pub price_text: Option<String>,
    pub sort_order: Option<i64>,
}

/// Update service payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceItemUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<IconKey>,
    pub color: Option<String>,
    pub duration_minutes: Option<i64>,
    pub price_text: Option<String>,
    pub sort_order: Option<i64>,
    pub is_active: Option<bool>,
}
