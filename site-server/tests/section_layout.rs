//! End-to-end tests for section visibility, ordering and the maintenance
//! short-circuit, driven through the public and admin REST surface.

mod common;

use common::{TestApp, body_json, body_text, get_request, json_request};
use serde_json::json;
use shared::models::{PageView, RenderUnit, SectionSetting};

#[tokio::test]
async fn admin_routes_reject_anonymous_requests() {
    let mut app = TestApp::spawn().await;

    let response = app.request(get_request("/api/admin/sections", None)).await;
    assert_eq!(response.status(), 401);

    let response = app
        .request(json_request(
            "POST",
            "/api/admin/config",
            None,
            json!({"key": "seo", "value": {}}),
        ))
        .await;
    assert_eq!(response.status(), 401);

    // Garbage token is rejected too
    let response = app
        .request(get_request("/api/admin/sections", Some("not-a-jwt")))
        .await;
    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn fresh_site_renders_all_sections_in_default_order() {
    let mut app = TestApp::spawn().await;

    let response = app.request(get_request("/api/page", None)).await;
    assert_eq!(response.status(), 200);
    let page: PageView = body_json(response).await;

    assert!(!page.maintenance.is_enabled);
    assert_eq!(
        page.sections,
        vec![
            RenderUnit::Hero,
            RenderUnit::AboutSpecialties,
            RenderUnit::Gallery,
            RenderUnit::Services,
            RenderUnit::Testimonials,
            RenderUnit::Faq,
            RenderUnit::Inspirational,
            RenderUnit::Contact,
        ]
    );
}

#[tokio::test]
async fn hiding_a_section_removes_only_that_section() {
    let mut app = TestApp::spawn().await;
    let token = app.login().await;

    let response = app
        .request(json_request(
            "PUT",
            "/api/admin/sections/testimonials/visibility",
            Some(&token),
            json!({"is_visible": false}),
        ))
        .await;
    assert_eq!(response.status(), 200);
    let overview: Vec<SectionSetting> = body_json(response).await;
    let testimonials = overview
        .iter()
        .find(|s| s.key.as_str() == "testimonials")
        .unwrap();
    assert!(!testimonials.is_visible);

    let page: PageView = body_json(app.request(get_request("/api/page", None)).await).await;
    assert!(!page.sections.contains(&RenderUnit::Testimonials));
    assert_eq!(
        page.sections,
        vec![
            RenderUnit::Hero,
            RenderUnit::AboutSpecialties,
            RenderUnit::Gallery,
            RenderUnit::Services,
            RenderUnit::Faq,
            RenderUnit::Inspirational,
            RenderUnit::Contact,
        ]
    );
}

#[tokio::test]
async fn composite_unit_survives_hiding_one_constituent() {
    let mut app = TestApp::spawn().await;
    let token = app.login().await;

    app.request(json_request(
        "PUT",
        "/api/admin/sections/about/visibility",
        Some(&token),
        json!({"is_visible": false}),
    ))
    .await;

    let page: PageView = body_json(app.request(get_request("/api/page", None)).await).await;
    assert!(page.sections.contains(&RenderUnit::AboutSpecialties));

    // Hiding the other constituent removes the combined block
    app.request(json_request(
        "PUT",
        "/api/admin/sections/specialties/visibility",
        Some(&token),
        json!({"is_visible": false}),
    ))
    .await;

    let page: PageView = body_json(app.request(get_request("/api/page", None)).await).await;
    assert!(!page.sections.contains(&RenderUnit::AboutSpecialties));
}

#[tokio::test]
async fn drag_reorder_round_trips_to_the_public_page() {
    let mut app = TestApp::spawn().await;
    let token = app.login().await;

    let response = app
        .request(json_request(
            "PUT",
            "/api/admin/sections/reorder",
            Some(&token),
            json!({"keys": [
                "contact", "hero", "about", "specialties", "gallery",
                "services", "testimonials", "faq", "inspirational"
            ]}),
        ))
        .await;
    assert_eq!(response.status(), 200);

    let page: PageView = body_json(app.request(get_request("/api/page", None)).await).await;
    assert_eq!(page.sections.first(), Some(&RenderUnit::Contact));
    assert_eq!(page.sections.get(1), Some(&RenderUnit::Hero));
}

#[tokio::test]
async fn reorder_rejects_duplicate_keys() {
    let mut app = TestApp::spawn().await;
    let token = app.login().await;

    let response = app
        .request(json_request(
            "PUT",
            "/api/admin/sections/reorder",
            Some(&token),
            json!({"keys": ["hero", "hero"]}),
        ))
        .await;
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn maintenance_mode_short_circuits_the_page() {
    let mut app = TestApp::spawn().await;
    let token = app.login().await;

    let response = app
        .request(json_request(
            "POST",
            "/api/admin/config",
            Some(&token),
            json!({"key": "maintenance_mode", "value": {"is_enabled": true, "message": "Voltamos já"}}),
        ))
        .await;
    assert_eq!(response.status(), 200);

    let page: PageView = body_json(app.request(get_request("/api/page", None)).await).await;
    assert!(page.maintenance.is_enabled);
    assert_eq!(page.maintenance.message.as_deref(), Some("Voltamos já"));
    assert!(page.sections.is_empty());

    // maintenance-check reports the same state alongside contact info
    let check: shared::models::MaintenanceCheck =
        body_json(app.request(get_request("/api/maintenance-check", None)).await).await;
    assert!(check.maintenance.is_enabled);

    // Disabling brings the sections back
    app.request(json_request(
        "POST",
        "/api/admin/config",
        Some(&token),
        json!({"key": "maintenance_mode", "value": {"is_enabled": false}}),
    ))
    .await;
    let page: PageView = body_json(app.request(get_request("/api/page", None)).await).await;
    assert_eq!(page.sections.len(), RenderUnit::ALL.len());
}

#[tokio::test]
async fn robots_txt_follows_the_seo_flag() {
    let mut app = TestApp::spawn().await;
    let token = app.login().await;

    let body = body_text(app.request(get_request("/robots.txt", None)).await).await;
    assert!(body.contains("Allow: /"));

    app.request(json_request(
        "POST",
        "/api/admin/config",
        Some(&token),
        json!({"key": "seo", "value": {"allow_indexing": false}}),
    ))
    .await;

    let body = body_text(app.request(get_request("/robots.txt", None)).await).await;
    assert!(body.contains("Disallow: /"));
}

#[tokio::test]
async fn malformed_visibility_blob_falls_back_to_visible() {
    let mut app = TestApp::spawn().await;
    let token = app.login().await;

    // Hand-edited garbage in the blob must not break the page
    app.request(json_request(
        "POST",
        "/api/admin/config",
        Some(&token),
        json!({"key": "section_visibility", "value": {"hero": "yes", "faq": 1}}),
    ))
    .await;

    let page: PageView = body_json(app.request(get_request("/api/page", None)).await).await;
    assert!(page.sections.contains(&RenderUnit::Hero));
    assert!(page.sections.contains(&RenderUnit::Faq));
}
