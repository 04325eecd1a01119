//! Repository for student data access operations.

use crate::entities::{CreateStudentRequest, Student, Supervisor, UpdateStudentRequest};
use crate::types::RepoResult;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection, SqlitePool};
use tracing::info;

/// Repository for student database operations
#[derive(Clone)]
pub struct StudentRepository {
    pool: SqlitePool,
}

impl StudentRepository {
    /// Create a new student repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a student and attach the resolvable subset of `supervisor_ids`.
    ///
    /// Fails with `RepositoryError::Constraint` when `registration_no` or
    /// `mobile_number` collides with an existing student.
    pub async fn create(&self, request: &CreateStudentRequest) -> RepoResult<Student> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            "INSERT INTO students (name, registration_no, mobile_number) VALUES (?, ?, ?)",
        )
        .bind(&request.name)
        .bind(&request.registration_no)
        .bind(&request.mobile_number)
        .execute(&mut *tx)
        .await?;

        let student_id = result.last_insert_rowid();

        let supervisors = resolve_supervisors(&mut tx, &request.supervisor_ids).await?;
        replace_links(&mut tx, student_id, &supervisors).await?;

        tx.commit().await?;

        info!(student_id, "created student");

        Ok(Student {
            id: student_id,
            name: request.name.clone(),
            registration_no: request.registration_no.clone(),
            mobile_number: request.mobile_number.clone(),
            supervisors,
        })
    }

    /// List all students with their supervisor relations populated,
    /// primary-key order.
    pub async fn find_all(&self) -> RepoResult<Vec<Student>> {
        let rows = sqlx::query(
            "SELECT id, name, registration_no, mobile_number FROM students ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut students = Vec::with_capacity(rows.len());
        for row in rows {
            let mut student = student_from_row(&row);
            student.supervisors = self.load_supervisors(student.id).await?;
            students.push(student);
        }

        Ok(students)
    }

    /// Find a student by ID; `None` when no row matches.
    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<Student>> {
        let row = sqlx::query(
            "SELECT id, name, registration_no, mobile_number FROM students WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut student = student_from_row(&row);
        student.supervisors = self.load_supervisors(student.id).await?;
        Ok(Some(student))
    }

    /// Partial update: only fields carried in the request change. A
    /// `supervisor_ids` value (even an empty one) replaces the full
    /// relation set. Returns `None` when the student does not exist.
    pub async fn update(
        &self,
        id: i64,
        request: &UpdateStudentRequest,
    ) -> RepoResult<Option<Student>> {
        let mut tx = self.pool.begin().await?;

        let exists = sqlx::query("SELECT id FROM students WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if exists.is_none() {
            return Ok(None);
        }

        let mut query_parts = Vec::new();
        let mut values = Vec::new();

        if let Some(ref name) = request.name {
            query_parts.push("name = ?");
            values.push(name.clone());
        }

        if let Some(ref registration_no) = request.registration_no {
            query_parts.push("registration_no = ?");
            values.push(registration_no.clone());
        }

        if let Some(ref mobile_number) = request.mobile_number {
            query_parts.push("mobile_number = ?");
            values.push(mobile_number.clone());
        }

        if !query_parts.is_empty() {
            let set_clause = query_parts.join(", ");
            let query_str = format!("UPDATE students SET {} WHERE id = ?", set_clause);

            let mut query = sqlx::query(&query_str);
            for value in values {
                query = query.bind(value);
            }
            query.bind(id).execute(&mut *tx).await?;
        }

        if let Some(ref supervisor_ids) = request.supervisor_ids {
            let supervisors = resolve_supervisors(&mut tx, supervisor_ids).await?;
            replace_links(&mut tx, id, &supervisors).await?;
        }

        tx.commit().await?;

        self.find_by_id(id).await
    }

    /// Delete a student; link rows disappear via the FK cascade. Returns
    /// `false` when no row matched.
    pub async fn delete(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(false);
        }

        info!(student_id = id, "deleted student");
        Ok(true)
    }

    /// Supervisors linked to a student, id order.
    async fn load_supervisors(&self, student_id: i64) -> RepoResult<Vec<Supervisor>> {
        let rows = sqlx::query(
            "SELECT s.id, s.name, s.employee_id, s.mobile_number
             FROM supervisors s
             JOIN student_supervisor l ON l.supervisor_id = s.id
             WHERE l.student_id = ?
             ORDER BY s.id",
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(supervisor_from_row).collect())
    }
}

fn student_from_row(row: &SqliteRow) -> Student {
    Student {
        id: row.get("id"),
        name: row.get("name"),
        registration_no: row.get("registration_no"),
        mobile_number: row.get("mobile_number"),
        supervisors: Vec::new(),
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

/// Resolve the given IDs against existing supervisors. IDs that match no
/// row are silently dropped.
async fn resolve_supervisors(
    conn: &mut SqliteConnection,
    ids: &[i64],
) -> RepoResult<Vec<Supervisor>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let placeholders = vec!["?"; ids.len()].join(", ");
    let query_str = format!(
        "SELECT id, name, employee_id, mobile_number FROM supervisors WHERE id IN ({}) ORDER BY id",
        placeholders
    );

    let mut query = sqlx::query(&query_str);
    for id in ids {
        query = query.bind(id);
    }

    let rows = query.fetch_all(conn).await?;
    Ok(rows.iter().map(supervisor_from_row).collect())
}

/// Replace the full supervisor set for a student.
async fn replace_links(
    conn: &mut SqliteConnection,
    student_id: i64,
    supervisors: &[Supervisor],
) -> RepoResult<()> {
    sqlx::query("DELETE FROM student_supervisor WHERE student_id = ?")
        .bind(student_id)
        .execute(&mut *conn)
        .await?;

    for supervisor in supervisors {
        sqlx::query("INSERT INTO student_supervisor (student_id, supervisor_id) VALUES (?, ?)")
            .bind(student_id)
            .bind(supervisor.id)
            .execute(&mut *conn)
            .await?;
    }

    Ok(())
}
