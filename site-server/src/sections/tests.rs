use super::resolver::*;
use serde_json::{Value, json};
use shared::models::{RenderUnit, SectionKey};

fn empty() -> Value {
    json!({})
}

#[test]
fn absent_visibility_defaults_to_visible() {
    let units = resolve_render_units(&empty(), &empty());
    assert_eq!(units.len(), RenderUnit::ALL.len());
    for unit in RenderUnit::ALL {
        assert!(units.contains(&unit), "{unit:?} missing with empty maps");
    }
}

#[test]
fn empty_order_map_yields_default_rank_order() {
    let expected = vec![
        RenderUnit::Hero,
        RenderUnit::AboutSpecialties,
        RenderUnit::Gallery,
        RenderUnit::Services,
        RenderUnit::Testimonials,
        RenderUnit::Faq,
        RenderUnit::Inspirational,
        RenderUnit::Contact,
    ];

    // Deterministic across repeated calls
    for _ in 0..3 {
        assert_eq!(resolve_render_units(&empty(), &empty()), expected);
    }
}

#[test]
fn toggle_visibility_is_idempotent() {
    let once = toggle_visibility(&empty(), SectionKey::Faq, false);
    let twice = toggle_visibility(&once, SectionKey::Faq, false);
    assert_eq!(once, twice);
    assert!(!section_visible(SectionKey::Faq, &twice));
}

#[test]
fn toggle_preserves_other_entries() {
    let vis = toggle_visibility(&json!({"gallery": false}), SectionKey::Faq, false);
    assert!(!section_visible(SectionKey::Gallery, &vis));
    assert!(!section_visible(SectionKey::Faq, &vis));
    assert!(section_visible(SectionKey::Hero, &vis));
}

#[test]
fn toggle_replaces_malformed_blob() {
    let vis = toggle_visibility(&json!("not a map"), SectionKey::Hero, false);
    assert_eq!(vis, json!({"hero": false}));
}

#[test]
fn hidden_section_is_excluded_others_keep_relative_order() {
    let vis = json!({"testimonials": false});
    let units = resolve_render_units(&vis, &empty());
    assert!(!units.contains(&RenderUnit::Testimonials));

    let mut expected = resolve_render_units(&empty(), &empty());
    expected.retain(|u| *u != RenderUnit::Testimonials);
    assert_eq!(units, expected);
}

#[test]
fn composite_visible_when_either_constituent_is() {
    // about hidden, specialties visible
    let vis = json!({"about": false});
    assert!(resolve_render_units(&vis, &empty()).contains(&RenderUnit::AboutSpecialties));

    // specialties hidden, about visible
    let vis = json!({"specialties": false});
    assert!(resolve_render_units(&vis, &empty()).contains(&RenderUnit::AboutSpecialties));

    // both hidden
    let vis = json!({"about": false, "specialties": false});
    assert!(!resolve_render_units(&vis, &empty()).contains(&RenderUnit::AboutSpecialties));
}

#[test]
fn composite_ranks_at_min_of_constituents() {
    // specialties dragged to the top; about left far down
    let order = json!({"about": 99, "specialties": 0, "hero": 1});
    let units = resolve_render_units(&empty(), &order);
    assert_eq!(units[0], RenderUnit::AboutSpecialties);
    assert_eq!(units[1], RenderUnit::Hero);
}

#[test]
fn malformed_entries_are_treated_as_absent() {
    let vis = json!({"hero": "nope", "faq": 0, "gallery": null});
    for key in [SectionKey::Hero, SectionKey::Faq, SectionKey::Gallery] {
        assert!(section_visible(key, &vis));
    }

    let order = json!({"faq": "abc", "hero": {"nested": 1}});
    assert_eq!(section_rank(SectionKey::Faq, &order), SectionKey::Faq.default_rank());
    assert_eq!(section_rank(SectionKey::Hero, &order), SectionKey::Hero.default_rank());
}

#[test]
fn unknown_keys_are_ignored() {
    let vis = json!({"bogus": false});
    let order = json!({"bogus": -50});
    assert_eq!(
        resolve_render_units(&vis, &order),
        resolve_render_units(&empty(), &empty())
    );
}

#[test]
fn equal_ranks_tie_break_on_enumeration_position() {
    // Every section collapsed to rank 0: canonical page order must hold
    let mut map = serde_json::Map::new();
    for key in SectionKey::ALL {
        map.insert(key.as_str().to_string(), json!(0));
    }
    let order = Value::Object(map);
    assert_eq!(
        resolve_render_units(&empty(), &order),
        vec![
            RenderUnit::Hero,
            RenderUnit::AboutSpecialties,
            RenderUnit::Gallery,
            RenderUnit::Services,
            RenderUnit::Testimonials,
            RenderUnit::Faq,
            RenderUnit::Contact,
            RenderUnit::Inspirational,
        ]
    );
}

#[test]
fn fractional_ranks_are_truncated() {
    let order = json!({"contact": 2.7});
    assert_eq!(section_rank(SectionKey::Contact, &order), 2);
}

#[test]
fn reorder_map_assigns_positional_ranks() {
    let dragged = vec![
        SectionKey::Contact,
        SectionKey::Hero,
        SectionKey::Faq,
    ];
    let order = reorder_map(&dragged);
    assert_eq!(order, json!({"contact": 0, "hero": 1, "faq": 2}));

    let units = resolve_render_units(&empty(), &order);
    assert_eq!(units[0], RenderUnit::Contact);
    assert_eq!(units[1], RenderUnit::Hero);
    assert_eq!(units[2], RenderUnit::Faq);
}

#[test]
fn admin_overview_lists_all_sections_sorted() {
    let vis = json!({"gallery": false});
    let order = json!({"gallery": 0});
    let overview = admin_overview(&vis, &order);

    assert_eq!(overview.len(), SectionKey::ALL.len());
    // Hidden sections still appear, at their effective rank
    assert_eq!(overview[0].key, SectionKey::Gallery);
    assert!(!overview[0].is_visible);
    // Sorted by (rank, position)
    for pair in overview.windows(2) {
        assert!(
            (pair[0].rank, pair[0].key.position()) <= (pair[1].rank, pair[1].key.position())
        );
    }
}
