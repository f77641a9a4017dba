//! Repository for the `students` table.

use sqlx::PgPool;
use spmb_core::types::DbId;

use crate::models::student::{CreateStudent, Student, UpdateStudent};
use crate::{clamp_limit, clamp_offset};

/// Column list for `students` queries.
const COLUMNS: &str = "id, nama, email, telepon, program, created_at, updated_at";

/// Provides CRUD operations for students.
pub struct StudentRepo;

impl StudentRepo {
    /// List students, newest first.
    pub async fn list(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM students \
             ORDER BY created_at DESC, id DESC \
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(clamp_limit(limit))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await
    }

    /// Create a new student, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateStudent) -> Result<Student, sqlx::Error> {
        let query = format!(
            "INSERT INTO students (nama, email, telepon, program) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(&input.nama)
            .bind(&input.email)
            .bind(&input.telepon)
            .bind(&input.program)
            .fetch_one(pool)
            .await
    }

    /// Find a student by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE id = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Patch a student's fields.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStudent,
    ) -> Result<Student, sqlx::Error> {
        let query = format!(
            "UPDATE students SET \
                nama = COALESCE($1, nama), \
                email = COALESCE($2, email), \
                telepon = COALESCE($3, telepon), \
                program = COALESCE($4, program), \
                updated_at = now() \
             WHERE id = $5 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(&input.nama)
            .bind(&input.email)
            .bind(&input.telepon)
            .bind(&input.program)
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Delete a student (cascades to their applications).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
