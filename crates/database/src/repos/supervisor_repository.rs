//! Repository for supervisor data access operations.

use crate::entities::{CreateSupervisorRequest, Supervisor, UpdateSupervisorRequest};
use crate::types::RepoResult;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::info;

/// Repository for supervisor database operations
#[derive(Clone)]
pub struct SupervisorRepository {
    pool: SqlitePool,
}

impl SupervisorRepository {
    /// Create a new supervisor repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a supervisor. Fails with `RepositoryError::Constraint` when
    /// `employee_id` or `mobile_number` collides with an existing one.
    pub async fn create(&self, request: &CreateSupervisorRequest) -> RepoResult<Supervisor> {
        let result = sqlx::query(
            "INSERT INTO supervisors (name, employee_id, mobile_number) VALUES (?, ?, ?)",
        )
        .bind(&request.name)
        .bind(&request.employee_id)
        .bind(&request.mobile_number)
        .execute(&self.pool)
        .await?;

        let supervisor_id = result.last_insert_rowid();

        info!(supervisor_id, "created supervisor");

        Ok(Supervisor {
            id: supervisor_id,
            name: request.name.clone(),
            employee_id: request.employee_id.clone(),
            mobile_number: request.mobile_number.clone(),
        })
    }

    /// List all supervisors, primary-key order.
    pub async fn find_all(&self) -> RepoResult<Vec<Supervisor>> {
        let rows = sqlx::query(
            "SELECT id, name, employee_id, mobile_number FROM supervisors ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(supervisor_from_row).collect())
    }

    /// Find a supervisor by ID; `None` when no row matches.
    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<Supervisor>> {
        let row = sqlx::query(
            "SELECT id, name, employee_id, mobile_number FROM supervisors WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(supervisor_from_row))
    }

    /// Partial update: only fields carried in the request change. Returns
    /// `None` when the supervisor does not exist.
    pub async fn update(
        &self,
        id: i64,
        request: &UpdateSupervisorRequest,
    ) -> RepoResult<Option<Supervisor>> {
        let mut query_parts = Vec::new();
        let mut values = Vec::new();

        if let Some(ref name) = request.name {
            query_parts.push("name = ?");
            values.push(name.clone());
        }

        if let Some(ref employee_id) = request.employee_id {
            query_parts.push("employee_id = ?");
            values.push(employee_id.clone());
        }

        if let Some(ref mobile_number) = request.mobile_number {
            query_parts.push("mobile_number = ?");
            values.push(mobile_number.clone());
        }

        if query_parts.is_empty() {
            return self.find_by_id(id).await;
        }

        let set_clause = query_parts.join(", ");
        let query_str = format!("UPDATE supervisors SET {} WHERE id = ?", set_clause);

        let mut query = sqlx::query(&query_str);
        for value in values {
            query = query.bind(value);
        }

        let result = query.bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    /// Delete a supervisor; link rows disappear via the FK cascade, so it
    /// vanishes from every student's supervisor set. Returns `false` when
    /// no row matched.
    pub async fn delete(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM supervisors WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(false);
        }

        info!(supervisor_id = id, "deleted supervisor");
        Ok(true)
    }
}

fn supervisor_from_row(row: &SqliteRow) -> Supervisor {
    Supervisor {
        id: row.get("id"),
        name: row.get("name"),
        employee_id: row.get("employee_id"),
        mobile_number: row.get("mobile_number"),
    }
}
