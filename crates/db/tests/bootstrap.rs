use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    todo_db::health_check(&pool).await.unwrap();

    for table in ["categories", "tasks"] {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// The task -> category reference is enforced on write.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_task_category_foreign_key(pool: PgPool) {
    let err = sqlx::query("INSERT INTO tasks (title, category_id) VALUES ('orphan', 999999)")
        .execute(&pool)
        .await
        .unwrap_err();

    let db_err = err.as_database_error().expect("expected a database error");
    assert_eq!(db_err.code().as_deref(), Some("23503"));
    assert_eq!(db_err.constraint(), Some("fk_tasks_category_id"));
}
