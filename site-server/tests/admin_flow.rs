//! End-to-end admin CRUD flows: entity lifecycle, batch reorder, config
//! blobs and account management, all through the REST surface.

mod common;

use common::{TestApp, body_json, get_request, json_request};
use serde_json::json;
use shared::models::{ConfigEntry, Testimonial};

#[tokio::test]
async fn testimonial_lifecycle_with_drag_reorder() {
    let mut app = TestApp::spawn().await;
    let token = app.login().await;

    // Create three entries
    let mut ids = Vec::new();
    for author in ["Ana", "Bruno", "Carla"] {
        let response = app
            .request(json_request(
                "POST",
                "/api/admin/testimonials",
                Some(&token),
                json!({"author_name": author, "quote": format!("Recomendo — {author}"), "rating": 5}),
            ))
            .await;
        assert_eq!(response.status(), 200);
        let created: Testimonial = body_json(response).await;
        ids.push(created.id);
    }

    // Drag index 2 to index 0
    let response = app
        .request(json_request(
            "PUT",
            "/api/admin/testimonials/reorder",
            Some(&token),
            json!({"ids": [ids[2], ids[0], ids[1]]}),
        ))
        .await;
    assert_eq!(response.status(), 200);

    // The public endpoint serves the new sequence without auth
    let rows: Vec<Testimonial> =
        body_json(app.request(get_request("/api/testimonials", None)).await).await;
    assert_eq!(
        rows.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![ids[2], ids[0], ids[1]]
    );
    assert_eq!(
        rows.iter().map(|r| r.sort_order).collect::<Vec<_>>(),
        vec![0, 1, 2]
    );

    // Deactivate one; the public list shrinks, the admin list does not
    let response = app
        .request(json_request(
            "PUT",
            &format!("/api/admin/testimonials/{}", ids[0]),
            Some(&token),
            json!({"is_active": false}),
        ))
        .await;
    assert_eq!(response.status(), 200);

    let public: Vec<Testimonial> =
        body_json(app.request(get_request("/api/testimonials", None)).await).await;
    assert_eq!(public.len(), 2);

    let admin: Vec<Testimonial> =
        body_json(app.request(get_request("/api/admin/testimonials", Some(&token))).await).await;
    assert_eq!(admin.len(), 3);

    // Delete and confirm the 404 on a repeat fetch
    let response = app
        .request(json_request(
            "DELETE",
            &format!("/api/admin/testimonials/{}", ids[1]),
            Some(&token),
            json!({}),
        ))
        .await;
    assert_eq!(response.status(), 200);

    let response = app
        .request(get_request(
            &format!("/api/admin/testimonials/{}", ids[1]),
            Some(&token),
        ))
        .await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn reorder_with_unknown_id_fails_and_changes_nothing() {
    let mut app = TestApp::spawn().await;
    let token = app.login().await;

    let mut ids = Vec::new();
    for author in ["Ana", "Bruno"] {
        let created: Testimonial = body_json(
            app.request(json_request(
                "POST",
                "/api/admin/testimonials",
                Some(&token),
                json!({"author_name": author, "quote": "ok"}),
            ))
            .await,
        )
        .await;
        ids.push(created.id);
    }

    let response = app
        .request(json_request(
            "PUT",
            "/api/admin/testimonials/reorder",
            Some(&token),
            json!({"ids": [ids[1], 424242, ids[0]]}),
        ))
        .await;
    assert_eq!(response.status(), 404);

    let rows: Vec<Testimonial> =
        body_json(app.request(get_request("/api/testimonials", None)).await).await;
    assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), ids);
}

#[tokio::test]
async fn create_rejects_invalid_payloads() {
    let mut app = TestApp::spawn().await;
    let token = app.login().await;

    // Empty required field
    let response = app
        .request(json_request(
            "POST",
            "/api/admin/testimonials",
            Some(&token),
            json!({"author_name": "  ", "quote": "ok"}),
        ))
        .await;
    assert_eq!(response.status(), 400);

    // Out-of-range rating
    let response = app
        .request(json_request(
            "POST",
            "/api/admin/testimonials",
            Some(&token),
            json!({"author_name": "Ana", "quote": "ok", "rating": 9}),
        ))
        .await;
    assert_eq!(response.status(), 400);

    // Unknown icon key is a deserialization error, not a silent fallback
    let response = app
        .request(json_request(
            "POST",
            "/api/admin/services",
            Some(&token),
            json!({"title": "Terapia", "description": "…", "icon": "unicorn"}),
        ))
        .await;
    assert_eq!(response.status(), 422);
}

#[tokio::test]
async fn config_blob_crud() {
    let mut app = TestApp::spawn().await;
    let token = app.login().await;

    let response = app
        .request(json_request(
            "POST",
            "/api/admin/config",
            Some(&token),
            json!({"key": "theme_colors", "value": {"primary": "#7c9a92", "accent": "#d9a47f"}}),
        ))
        .await;
    assert_eq!(response.status(), 200);
    let entry: ConfigEntry = body_json(response).await;
    assert_eq!(entry.key, "theme_colors");
    assert_eq!(entry.value["primary"], "#7c9a92");

    // Public config endpoint exposes the blob
    let all: Vec<ConfigEntry> =
        body_json(app.request(get_request("/api/config", None)).await).await;
    assert!(all.iter().any(|e| e.key == "theme_colors"));

    // Upsert overwrites the whole value (last writer wins)
    app.request(json_request(
        "POST",
        "/api/admin/config",
        Some(&token),
        json!({"key": "theme_colors", "value": {"primary": "#1a1a2e"}}),
    ))
    .await;
    let all: Vec<ConfigEntry> =
        body_json(app.request(get_request("/api/config", None)).await).await;
    let entry = all.iter().find(|e| e.key == "theme_colors").unwrap();
    assert_eq!(entry.value, json!({"primary": "#1a1a2e"}));

    // Delete removes it
    let response = app
        .request(json_request(
            "DELETE",
            "/api/admin/config/theme_colors",
            Some(&token),
            json!({}),
        ))
        .await;
    assert_eq!(response.status(), 200);
    let all: Vec<ConfigEntry> =
        body_json(app.request(get_request("/api/config", None)).await).await;
    assert!(!all.iter().any(|e| e.key == "theme_colors"));
}

#[tokio::test]
async fn password_change_flow() {
    let mut app = TestApp::spawn().await;
    let token = app.login().await;

    // Wrong current password is rejected
    let response = app
        .request(json_request(
            "POST",
            "/api/auth/change-password",
            Some(&token),
            json!({"old_password": "wrong", "new_password": "brand-new-password"}),
        ))
        .await;
    assert_eq!(response.status(), 400);

    // Too-short new password is rejected
    let response = app
        .request(json_request(
            "POST",
            "/api/auth/change-password",
            Some(&token),
            json!({"old_password": "test-password-123", "new_password": "short"}),
        ))
        .await;
    assert_eq!(response.status(), 400);

    let response = app
        .request(json_request(
            "POST",
            "/api/auth/change-password",
            Some(&token),
            json!({"old_password": "test-password-123", "new_password": "brand-new-password"}),
        ))
        .await;
    assert_eq!(response.status(), 200);

    // Old credentials no longer work; new ones do
    let response = app
        .request(json_request(
            "POST",
            "/api/auth/login",
            None,
            json!({"username": "admin", "password": "test-password-123"}),
        ))
        .await;
    assert_eq!(response.status(), 400);

    let response = app
        .request(json_request(
            "POST",
            "/api/auth/login",
            None,
            json!({"username": "admin", "password": "brand-new-password"}),
        ))
        .await;
    assert_eq!(response.status(), 200);
}
