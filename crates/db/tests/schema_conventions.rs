use sqlx::PgPool;

/// All `id` columns must be bigint.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_pks_are_bigint(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name, data_type
         FROM information_schema.columns
         WHERE column_name = 'id'
           AND table_schema = 'public'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(!rows.is_empty());
    for (table, data_type) in &rows {
        assert_eq!(data_type, "bigint", "Table {table}.id should be bigint");
    }
}

/// Every `created_at` column must be timestamptz.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_created_at_is_timestamptz(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name, data_type
         FROM information_schema.columns
         WHERE column_name = 'created_at'
           AND table_schema = 'public'
           AND table_name != '_sqlx_migrations'",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    for (table, data_type) in &rows {
        assert_eq!(
            data_type, "timestamp with time zone",
            "Table {table}.created_at should be timestamptz"
        );
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_role_check_constraint(pool: PgPool) {
    let err = sqlx::query(
        "INSERT INTO users (name, email, password_hash, role)
         VALUES ('x', 'x@example.com', 'h', 'OWNER')",
    )
    .execute(&pool)
    .await
    .unwrap_err();
    let db_err = err.as_database_error().unwrap();
    assert_eq!(db_err.constraint(), Some("ck_users_role"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_pages_updated_at_trigger(pool: PgPool) {
    sqlx::query(
        "INSERT INTO users (id, name, email, password_hash) VALUES (1, 'a', 'a@example.com', 'h')",
    )
    .execute(&pool)
    .await
    .unwrap();
    let (created, _): (chrono::DateTime<chrono::Utc>, i64) = sqlx::query_as(
        "INSERT INTO pages (title, content, author_id, updated_at)
         VALUES ('t', 'c', 1, NOW() - INTERVAL '1 day')
         RETURNING updated_at, id",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    let (updated,): (chrono::DateTime<chrono::Utc>,) =
        sqlx::query_as("UPDATE pages SET title = 'u' RETURNING updated_at")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert!(updated > created);
}
