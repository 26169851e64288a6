//! FAQ Item Model

use serde::{Deserialize, Serialize};

/// FAQ entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct FaqItem {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub sort_order: i64,
    pub is_active: bool,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

/// Create FAQ payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqItemCreate {
    pub question: String,
    pub answer: String,
    pub sort_order: Option<i64>,
}

/// Update FAQ payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FaqItemUpdate {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub sort_order: Option<i64>,
    pub is_active: Option<bool>,
}
