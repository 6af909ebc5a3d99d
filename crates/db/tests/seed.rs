use assert_matches::assert_matches;
use sqlx::PgPool;
use teamwiki_core::roles::Role;
use teamwiki_db::repositories::{CommentRepo, PageVersionRepo, TagRepo, UserRepo};
use teamwiki_db::seed::{seed_demo, SeedAccount, SeedError, WELCOME_COMMENT};

fn accounts() -> Vec<SeedAccount> {
    vec![
        SeedAccount {
            name: "Admin",
            email: "admin@example.com",
            role: Role::Admin,
            password_hash: "hash-a".to_string(),
        },
        SeedAccount {
            name: "Editor",
            email: "editor@example.com",
            role: Role::Editor,
            password_hash: "hash-e".to_string(),
        },
        SeedAccount {
            name: "Viewer",
            email: "viewer@example.com",
            role: Role::Viewer,
            password_hash: "hash-v".to_string(),
        },
    ]
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seed_creates_demo_data(pool: PgPool) {
    let report = seed_demo(&pool, &accounts()).await.unwrap();
    assert_eq!(report.users_created, 3);
    assert!(report.page_created);
    assert!(report.comment_created);

    let viewer = UserRepo::find_by_email(&pool, "viewer@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(viewer.role, Role::Viewer);

    let tags = TagRepo::list_for_page(&pool, report.page_id).await.unwrap();
    let names: Vec<&str> = tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["guide", "start"]);
    assert_eq!(PageVersionRepo::count_by_page(&pool, report.page_id).await.unwrap(), 1);

    let comments = CommentRepo::list_by_page(&pool, report.page_id).await.unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].comment.content, WELCOME_COMMENT);
    assert_eq!(comments[0].author.name, "Editor");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seed_is_idempotent(pool: PgPool) {
    let first = seed_demo(&pool, &accounts()).await.unwrap();
    let second = seed_demo(&pool, &accounts()).await.unwrap();

    assert_eq!(second.users_created, 0);
    assert!(!second.page_created);
    assert!(!second.comment_created);
    assert_eq!(first.page_id, second.page_id);
    assert_eq!(PageVersionRepo::count_by_page(&pool, first.page_id).await.unwrap(), 1);
    assert_eq!(TagRepo::count_links_for_page(&pool, first.page_id).await.unwrap(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seed_requires_admin_account(pool: PgPool) {
    let only_viewer: Vec<SeedAccount> = accounts()
        .into_iter()
        .filter(|a| a.role == Role::Viewer)
        .collect();
    assert_matches!(
        seed_demo(&pool, &only_viewer).await,
        Err(SeedError::MissingAccount(Role::Admin))
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seed_requires_editor_account(pool: PgPool) {
    let no_editor: Vec<SeedAccount> = accounts()
        .into_iter()
        .filter(|a| a.role != Role::Editor)
        .collect();
    let err = seed_demo(&pool, &no_editor).await.unwrap_err();
    assert_matches!(err, SeedError::MissingAccount(Role::Editor));
    assert_eq!(err.to_string(), "seed needs at least one EDITOR account");
}
