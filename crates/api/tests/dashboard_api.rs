//! HTTP-level integration tests for `/dashboard`.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_page, get_auth};
use sqlx::PgPool;
use teamwiki_core::roles::Role;
use teamwiki_db::repositories::{CommentRepo, NotificationRepo};

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_dashboard_aggregates(pool: PgPool) {
    let editor = common::create_user(&pool, "Editor", Role::Editor).await;
    let other = common::create_user(&pool, "Other", Role::Editor).await;
    let token = common::token_for(&editor);
    let app = common::build_test_app(pool.clone());

    for n in 1..=6 {
        create_page(app.clone(), &token, &format!("Page {n}"), "<p>x</p>", &[]).await;
    }
    let theirs = create_page(
        app.clone(),
        &common::token_for(&other),
        "Their page",
        "<p>y</p>",
        &[],
    )
    .await;
    let page_id = theirs["id"].as_i64().unwrap();
    CommentRepo::create(&pool, page_id, editor.id, None, "mine")
        .await
        .unwrap();
    CommentRepo::create(&pool, page_id, other.id, None, "not mine")
        .await
        .unwrap();

    let response = get_auth(app, "/api/v1/dashboard", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    let recent: Vec<&str> = json["recentPages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect();
    assert_eq!(
        recent,
        vec!["Their page", "Page 6", "Page 5", "Page 4", "Page 3"]
    );
    assert!(json["recentPages"][0].get("content").is_none());
    assert!(json["recentPages"][0]["updatedAt"].is_string());

    assert_eq!(json["myPagesCount"], 6);
    assert_eq!(json["myCommentsCount"], 1);

    // Seven page creations broadcast to both editors; the dashboard caps at ten.
    let unread = json["unreadNotifications"].as_array().unwrap();
    assert_eq!(
        NotificationRepo::unread_count(&pool, editor.id).await.unwrap(),
        7
    );
    assert_eq!(unread.len(), 7);
    assert_eq!(unread[0]["message"], "Neue Seite erstellt: Their page");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_dashboard_unread_capped_at_ten(pool: PgPool) {
    let viewer = common::create_user(&pool, "Viewer", Role::Viewer).await;
    for n in 0..12 {
        NotificationRepo::create_many(&pool, &[viewer.id], &format!("n{n}"))
            .await
            .unwrap();
    }
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/dashboard", &common::token_for(&viewer)).await;
    let json = body_json(response).await;
    assert_eq!(json["unreadNotifications"].as_array().unwrap().len(), 10);
    assert_eq!(json["myPagesCount"], 0);
    assert_eq!(json["recentPages"], serde_json::json!([]));
}
