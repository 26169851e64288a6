//! Gallery Photo Model

use serde::{Deserialize, Serialize};

/// Photo-carousel entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct GalleryPhoto {
    pub id: i64,
    pub image_url: String,
    pub alt_text: String,
    pub caption: Option<String>,
    pub sort_order: i64,
    pub is_active: bool,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

/// Create photo payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryPhotoCreate {
    pub image_url: String,
    pub alt_text: String,
    pub caption: Option<String>,
    pub sort_order: Option<i64>,
}

/// Update photo payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GalleryPhotoUpdate {
    pub image_url: Option<String>,
    pub alt_text: Option<String>,
    pub caption: Option<String>,
    pub sort_order: Option<i64>,
    pub is_active: Option<bool>,
}
