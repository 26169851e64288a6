//! Section Model
//!
//! The public page is composed of a fixed set of named sections. Which of
//! them render, and in what order, is driven by two config blobs
//! (`section_visibility`, `section_order`) resolved server-side.

use serde::{Deserialize, Serialize};

/// Section key — the fixed enumeration of page blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKey {
    Hero,
    About,
    Specialties,
    Gallery,
    Services,
    Testimonials,
    Faq,
    Contact,
    Inspirational,
}

impl SectionKey {
    /// Canonical enumeration, in default page order.
    pub const ALL: [SectionKey; 9] = [
        SectionKey::Hero,
        SectionKey::About,
        SectionKey::Specialties,
        SectionKey::Gallery,
        SectionKey::Services,
        SectionKey::Testimonials,
        SectionKey::Faq,
        SectionKey::Contact,
        SectionKey::Inspirational,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::Hero => "hero",
            SectionKey::About => "about",
            SectionKey::Specialties => "specialties",
            SectionKey::Gallery => "gallery",
            SectionKey::Services => "services",
            SectionKey::Testimonials => "testimonials",
            SectionKey::Faq => "faq",
            SectionKey::Contact => "contact",
            SectionKey::Inspirational => "inspirational",
        }
    }

    /// Fallback rank used when the order map has no entry for this key.
    /// Spaced by 10 so a future section can slot between two existing ones
    /// without renumbering.
    pub fn default_rank(&self) -> i64 {
        match self {
            SectionKey::Hero => 0,
            SectionKey::About => 10,
            SectionKey::Specialties => 20,
            SectionKey::Gallery => 30,
            SectionKey::Services => 40,
            SectionKey::Testimonials => 50,
            SectionKey::Faq => 60,
            SectionKey::Inspirational => 70,
            SectionKey::Contact => 80,
        }
    }

    /// Position within [`SectionKey::ALL`] — the explicit secondary sort
    /// key for sections sharing a rank. Map iteration order is never used.
    pub fn position(&self) -> usize {
        match self {
            SectionKey::Hero => 0,
            SectionKey::About => 1,
            SectionKey::Specialties => 2,
            SectionKey::Gallery => 3,
            SectionKey::Services => 4,
            SectionKey::Testimonials => 5,
            SectionKey::Faq => 6,
            SectionKey::Contact => 7,
            SectionKey::Inspirational => 8,
        }
    }
}

/// A mountable unit of the public page.
///
/// `about` and `specialties` are rendered by one combined component, so
/// they collapse into a single composite unit during resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderUnit {
    Hero,
    AboutSpecialties,
    Gallery,
    Services,
    Testimonials,
    Faq,
    Contact,
    Inspirational,
}

impl RenderUnit {
    /// Candidate units in default page order.
    pub const ALL: [RenderUnit; 8] = [
        RenderUnit::Hero,
        RenderUnit::AboutSpecialties,
        RenderUnit::Gallery,
        RenderUnit::Services,
        RenderUnit::Testimonials,
        RenderUnit::Faq,
        RenderUnit::Contact,
        RenderUnit::Inspirational,
    ];

    /// The section keys this unit is driven by. Composite units resolve
    /// against every constituent: visible if any is, ranked at the min.
    pub fn keys(&self) -> &'static [SectionKey] {
        match self {
            RenderUnit::Hero => &[SectionKey::Hero],
            RenderUnit::AboutSpecialties => &[SectionKey::About, SectionKey::Specialties],
            RenderUnit::Gallery => &[SectionKey::Gallery],
            RenderUnit::Services => &[SectionKey::Services],
            RenderUnit::Testimonials => &[SectionKey::Testimonials],
            RenderUnit::Faq => &[SectionKey::Faq],
            RenderUnit::Contact => &[SectionKey::Contact],
            RenderUnit::Inspirational => &[SectionKey::Inspirational],
        }
    }
}

/// One row of the admin "sections" screen: a toggleable, draggable entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionSetting {
    pub key: SectionKey,
    pub rank: i64,
    pub is_visible: bool,
}

/// Toggle payload for PUT /api/admin/sections/{key}/visibility
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisibilityUpdate {
    pub is_visible: bool,
}

/// Full key sequence after a drag-reorder, first = topmost
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionReorder {
    pub keys: Vec<SectionKey>,
}

/// Response of GET /api/page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageView {
    pub maintenance: super::MaintenanceMode,
    /// Render units in page order; empty while maintenance is enabled
    pub sections: Vec<RenderUnit>,
}
