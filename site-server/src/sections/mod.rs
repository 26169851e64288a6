//! Section Visibility & Ordering
//!
//! Resolves the two config blobs (`section_visibility`, `section_order`)
//! into the ordered list of render units the public page mounts, and into
//! the sorted, toggleable view the admin dashboard edits.

pub mod resolver;

#[cfg(test)]
mod tests;

pub use resolver::{
    admin_overview, reorder_map, resolve_render_units, section_rank, section_visible,
    toggle_visibility,
};
