//! Database migrations

use anyhow::Context;
use sqlx::SqlitePool;
use tracing::info;

/// Migrations embedded from the crate's migrations directory
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
pub async fn run_migrations(pool: &SqlitePool) -> anyhow::Result<()> {
    MIGRATOR
        .run(pool)
        .await
        .context("database migrations failed")?;
    info!("database migrations applied");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::prepare_database;
    use advisory_config::DatabaseConfig;
    use tempfile::TempDir;

    #[tokio::test]
    async fn migrations_create_schema_and_rerun_cleanly() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("migrations.db");
        let db_url = format!("sqlite://{}", db_path.display());

        let config = DatabaseConfig {
            url: db_url,
            max_connections: 1,
        };

        let pool = prepare_database(&config).await.unwrap();
        run_migrations(&pool).await.unwrap();
        // idempotent
        run_migrations(&pool).await.unwrap();

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();

        let names: Vec<&str> = tables.iter().map(|(name,)| name.as_str()).collect();
        assert!(names.contains(&"students"));
        assert!(names.contains(&"supervisors"));
        assert!(names.contains(&"student_supervisor"));
    }
}
