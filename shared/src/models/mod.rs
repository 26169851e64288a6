//! Data models
//!
//! Shared between site-server and the admin/public frontends (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod admin_user;
pub mod faq_item;
pub mod gallery_photo;
pub mod icon;
pub mod section;
pub mod service_item;
pub mod site_config;
pub mod specialty;
pub mod testimonial;

// Re-exports
pub use admin_user::*;
pub use faq_item::*;
pub use gallery_photo::*;
pub use icon::*;
pub use section::*;
pub use service_item::*;
pub use site_config::*;
pub use specialty::*;
pub use testimonial::*;
