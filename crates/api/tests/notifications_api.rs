//! HTTP-level integration tests for notifications.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_page, get_auth, post_auth, put_json_auth};
use serde_json::json;
use sqlx::PgPool;
use teamwiki_core::roles::Role;
use teamwiki_db::repositories::NotificationRepo;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_page_changes_notify_admins_and_editors(pool: PgPool) {
    let admin = common::create_user(&pool, "Admin", Role::Admin).await;
    let editor = common::create_user(&pool, "Editor", Role::Editor).await;
    let viewer = common::create_user(&pool, "Viewer", Role::Viewer).await;
    let token = common::token_for(&editor);
    let app = common::build_test_app(pool);

    let page = create_page(app.clone(), &token, "Runbook", "<p>1</p>", &[]).await;
    put_json_auth(
        app.clone(),
        &format!("/api/v1/pages/{}", page["id"]),
        json!({ "title": "Runbook", "content": "<p>2</p>" }),
        &token,
    )
    .await;

    let response = get_auth(app.clone(), "/api/v1/notifications", &common::token_for(&admin)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let messages: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["message"].as_str().unwrap())
        .collect();
    assert_eq!(
        messages,
        vec!["Seite aktualisiert: Runbook", "Neue Seite erstellt: Runbook"]
    );
    assert_eq!(json[0]["read"], false);
    assert_eq!(json[0]["userId"], admin.id);

    let response = get_auth(app, "/api/v1/notifications", &common::token_for(&viewer)).await;
    assert_eq!(body_json(response).await, json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_mark_read_own_notification(pool: PgPool) {
    let editor = common::create_user(&pool, "Editor", Role::Editor).await;
    NotificationRepo::create_many(&pool, &[editor.id], "hello")
        .await
        .unwrap();
    let id = NotificationRepo::list_for_user(&pool, editor.id).await.unwrap()[0].id;
    let token = common::token_for(&editor);
    let app = common::build_test_app(pool.clone());

    let response = post_auth(app.clone(), &format!("/api/v1/notifications/{id}/read"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "updated": 1 }));

    let response = get_auth(app, "/api/v1/notifications/unread-count", &token).await;
    assert_eq!(body_json(response).await, json!({ "count": 0 }));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_mark_read_other_users_notification_is_ignored(pool: PgPool) {
    let owner = common::create_user(&pool, "Owner", Role::Editor).await;
    let intruder = common::create_user(&pool, "Intruder", Role::Admin).await;
    NotificationRepo::create_many(&pool, &[owner.id], "private")
        .await
        .unwrap();
    let id = NotificationRepo::list_for_user(&pool, owner.id).await.unwrap()[0].id;
    let app = common::build_test_app(pool.clone());

    let response = post_auth(
        app,
        &format!("/api/v1/notifications/{id}/read"),
        &common::token_for(&intruder),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "updated": 0 }));

    let notification = NotificationRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert!(!notification.read);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unread_count(pool: PgPool) {
    let editor = common::create_user(&pool, "Editor", Role::Editor).await;
    NotificationRepo::create_many(&pool, &[editor.id], "one")
        .await
        .unwrap();
    NotificationRepo::create_many(&pool, &[editor.id], "two")
        .await
        .unwrap();
    let app = common::build_test_app(pool);

    let response = get_auth(
        app,
        "/api/v1/notifications/unread-count",
        &common::token_for(&editor),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "count": 2 }));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_mark_read_with_non_numeric_id_is_json_bad_request(pool: PgPool) {
    let editor = common::create_user(&pool, "Editor", Role::Editor).await;
    let app = common::build_test_app(pool);

    let response = post_auth(
        app,
        "/api/v1/notifications/latest/read",
        &common::token_for(&editor),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}
