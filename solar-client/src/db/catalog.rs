use sqlx::PgPool;

/// List all table names visible in the public schema, alphabetically.
///
/// Used by the database health check; an empty database yields an empty list,
/// not an error.
pub async fn list_public_tables(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>(PUBLIC_TABLES_SQL)
        .fetch_all(pool)
        .await
}

const PUBLIC_TABLES_SQL: &str = r#"
    SELECT table_name::text
    FROM information_schema.tables
    WHERE table_schema = 'public'
    ORDER BY table_name
"#;
