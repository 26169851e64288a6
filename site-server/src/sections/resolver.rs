//! Section resolver
//!
//! Both maps are persisted as opaque JSON blobs and may be partial, empty
//! or hand-edited. Defaulting rules differ on purpose: visibility defaults
//! to "on", order defaults to a hardcoded per-section rank. Unknown keys
//! and malformed entries are treated as absent.

use serde_json::{Map, Value};
use shared::models::{RenderUnit, SectionKey, SectionSetting};

/// Effective rank of a section: the order-map entry when it is a JSON
/// number, the hardcoded default otherwise.
pub fn section_rank(key: SectionKey, order: &Value) -> i64 {
    order
        .get(key.as_str())
        .and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|f| f as i64)))
        .unwrap_or_else(|| key.default_rank())
}

/// A section is hidden only by an explicit JSON `false`; absent or
/// malformed entries leave it visible.
pub fn section_visible(key: SectionKey, visibility: &Value) -> bool {
    !matches!(visibility.get(key.as_str()), Some(Value::Bool(false)))
}

/// Resolve the ordered, visibility-filtered list of units to mount.
///
/// Sort key is `(rank, enumeration position)` — the position is the
/// explicit tie-break, so equal ranks keep canonical page order no matter
/// how the blobs were produced.
pub fn resolve_render_units(visibility: &Value, order: &Value) -> Vec<RenderUnit> {
    let mut units: Vec<(i64, usize, RenderUnit)> = RenderUnit::ALL
        .iter()
        .filter(|unit| unit.keys().iter().any(|k| section_visible(*k, visibility)))
        .map(|unit| {
            let rank = unit
                .keys()
                .iter()
                .map(|k| section_rank(*k, order))
                .min()
                .unwrap_or(i64::MAX);
            let position = unit
                .keys()
                .iter()
                .map(|k| k.position())
                .min()
                .unwrap_or(usize::MAX);
            (rank, position, *unit)
        })
        .collect();
    units.sort_by_key(|(rank, position, _)| (*rank, *position));
    units.into_iter().map(|(_, _, unit)| unit).collect()
}

/// All nine sections with their effective rank and visibility, sorted the
/// same way the public page sorts. The admin list shows hidden sections
/// too — that is the whole point of the screen.
pub fn admin_overview(visibility: &Value, order: &Value) -> Vec<SectionSetting> {
    let mut settings: Vec<SectionSetting> = SectionKey::ALL
        .iter()
        .map(|key| SectionSetting {
            key: *key,
            rank: section_rank(*key, order),
            is_visible: section_visible(*key, visibility),
        })
        .collect();
    settings.sort_by_key(|s| (s.rank, s.key.position()));
    settings
}

/// Recompute the entire order map after a drag: each key's rank is its
/// index in the dropped sequence. Keys missing from the sequence keep
/// falling back to their default rank on read.
pub fn reorder_map(keys: &[SectionKey]) -> Value {
    let mut map = Map::new();
    for (index, key) in keys.iter().enumerate() {
        map.insert(key.as_str().to_string(), Value::from(index as i64));
    }
    Value::Object(map)
}

/// Read-modify-write of the whole visibility blob (last writer wins).
/// A non-object current value is replaced by a fresh map.
pub fn toggle_visibility(current: &Value, key: SectionKey, is_visible: bool) -> Value {
    let mut map = match current {
        Value::Object(m) => m.clone(),
        _ => Map::new(),
    };
    map.insert(key.as_str().to_string(), Value::Bool(is_visible));
    Value::Object(map)
}
