use advisory_database::{StudentRepository, SupervisorRepository};
use sqlx::SqlitePool;

/// Shared handler state: the connection pool and nothing else. Each
/// request checks a connection out of the pool for its duration.
#[derive(Clone)]
pub struct AppState {
    pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn students(&self) -> StudentRepository {
        StudentRepository::new(self.pool.clone())
    }

    pub fn supervisors(&self) -> SupervisorRepository {
        SupervisorRepository::new(self.pool.clone())
    }
}
