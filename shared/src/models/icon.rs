//! Icon Registry
//!
//! Closed enumeration of the icons the frontend can render for services
//! and specialties. Stored as lowercase TEXT; an unknown icon name fails
//! deserialization instead of silently falling back.

use serde::{Deserialize, Serialize};

/// Icon identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum IconKey {
    Brain,
    Heart,
    Users,
    Leaf,
    Sun,
    Star,
    Shield,
    Compass,
    Chat,
    Book,
}

impl IconKey {
    /// CSS class the frontend maps to the actual glyph.
    ///
    /// Exhaustive on purpose: adding an icon without a class is a compile
    /// error, not a blank spot on the page.
    pub fn css_class(&self) -> &'static str {
        match self {
            IconKey::Brain => "icon-brain",
            IconKey::Heart => "icon-heart",
            IconKey::Users => "icon-users",
            IconKey::Leaf => "icon-leaf",
            IconKey::Sun => "icon-sun",
            IconKey::Star => "icon-star",
            IconKey::Shield => "icon-shield",
            IconKey::Compass => "icon-compass",
            IconKey::Chat => "icon-chat",
            IconKey::Book => "icon-book",
        }
    }
}

impl Default for IconKey {
    fn default() -> Self {
        IconKey::Star
    }
}
