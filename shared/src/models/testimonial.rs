//! Testimonial Model

use serde::{Deserialize, Serialize};

/// Testimonial entity (patient quote on the public page)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Testimonial {
    pub id: i64,
    pub author_name: String,
    /// e.g. "mãe de paciente", shown under the name
    pub author_title: Option<String>,
    pub quote: String,
    /// 1–5 stars, omitted when the author gave none
    pub rating: Option<i64>,
    pub avatar_url: Option<String>,
    pub sort_order: i64,
    pub is_active: bool,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

/// Create testimonial payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestimonialCreate {
    pub author_name: String,
    pub author_title: Option<String>,
    pub quote: String,
    pub rating: Option<i64>,
    pub avatar_url: Option<String>,
    pub sort_order: Option<i64>,
}

/// Update testimonial payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestimonialUpdate {
    pub author_name: Option<String>,
    pub author_title: Option<String>,
    pub quote: Option<String>,
    pub rating: Option<i64>,
    pub avatar_url: Option<String>,
    pub sort_order: Option<i64>,
    pub is_active: Option<bool>,
}
