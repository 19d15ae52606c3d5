use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify seeded lookup rows.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    mfc_db::health_check(&pool).await.unwrap();

    let rows: Vec<(i16, String)> =
        sqlx::query_as("SELECT id, name FROM application_statuses ORDER BY id")
            .fetch_all(&pool)
            .await
            .unwrap();
    let names: Vec<&str> = rows.iter().map(|(_, n)| n.as_str()).collect();
    assert_eq!(names, ["Подано", "В работе", "Выполнено", "Отклонено"]);
    assert_eq!(rows[0].0, 1);
}

/// Every table carries the shared updated_at trigger.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_updated_at_triggers_installed(pool: PgPool) {
    let tables = [
        "users",
        "user_profiles",
        "service_categories",
        "services",
        "offices",
        "employees",
        "office_services",
        "application_statuses",
        "applications",
        "appointments",
        "news",
    ];

    for table in tables {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM information_schema.triggers
             WHERE event_object_table = $1 AND trigger_name = 'set_updated_at'",
        )
        .bind(table)
        .fetch_one(&pool)
        .await
        .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 1, "{table} should have the set_updated_at trigger");
    }
}
