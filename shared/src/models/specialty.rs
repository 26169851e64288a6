//! Specialty Model

use super::icon::IconKey;
use serde::{Deserialize, Serialize};

/// Clinical specialty highlighted in the about/specialties block
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Specialty {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub icon: IconKey,
    pub sort_order: i64,
    pub is_active: bool,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

/// Create specialty payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialtyCreate {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub icon: IconKey,
    pub sort_order: Option<i64>,
}

/// Update specialty payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpecialtyUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<IconKey>,
    pub sort_order: Option<i64>,
    pub is_active: Option<bool>,
}
