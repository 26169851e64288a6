//! Cross-entity request payloads

use serde::{Deserialize, Serialize};

/// Batch reorder payload: the full id sequence after a drag-and-drop move,
/// first = topmost. Every id of the collection must be present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReorderRequest {
    pub ids: Vec<i64>,
}

impl ReorderRequest {
    /// Non-empty and duplicate-free; a duplicate id would assign two ranks
    /// to one row and silently drop another.
    pub fn validate(&self) -> Result<(), String> {
        if self.ids.is_empty() {
            return Err("ids must not be empty".to_string());
        }
        let unique: std::collections::HashSet<i64> = self.ids.iter().copied().collect();
        if unique.len() != self.ids.len() {
            return Err("ids contains duplicates".to_string());
        }
        Ok(())
    }
}
