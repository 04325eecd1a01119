//! Advisory Database Crate
//!
//! SQLite-backed storage for the advisory records backend: connection
//! management, migrations, and the student/supervisor repositories.

use advisory_config::DatabaseConfig;
use sqlx::SqlitePool;

pub mod connection;
pub mod entities;
pub mod migrations;
pub mod repos;
pub mod types;

pub use connection::prepare_database;
pub use migrations::{run_migrations, MIGRATOR};

// Re-export repositories
pub use repos::{StudentRepository, SupervisorRepository};

// Re-export entities
pub use entities::{
    student::{CreateStudentRequest, Student, UpdateStudentRequest},
    supervisor::{CreateSupervisorRequest, Supervisor, UpdateSupervisorRequest},
};

// Re-export types
pub use types::{
    errors::{DatabaseError, RepositoryError},
    DatabaseResult, RepoResult,
};

/// Prepare the connection pool and bring the schema up to date.
pub async fn initialize_database(config: &DatabaseConfig) -> DatabaseResult<SqlitePool> {
    let pool = prepare_database(config)
        .await
        .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

    run_migrations(&pool)
        .await
        .map_err(|e| DatabaseError::MigrationError(e.to_string()))?;

    Ok(pool)
}
