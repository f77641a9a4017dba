//! Repository for the `applications` table.

use sqlx::PgPool;
use spmb_core::types::DbId;

use crate::models::application::{Application, CreateApplication, UpdateApplicationStatus};
use crate::{clamp_limit, clamp_offset};

/// Column list for `applications` queries.
const COLUMNS: &str = "id, student_id, program, status, catatan, created_at, updated_at";

/// Provides CRUD operations for enrollment applications.
pub struct ApplicationRepo;

impl ApplicationRepo {
    /// List applications, optionally filtered by status, newest first.
    pub async fn list(
        pool: &PgPool,
        status: Option<&str>,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Application>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM applications \
             WHERE ($1::TEXT IS NULL OR status = $1) \
             ORDER BY created_at DESC, id DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Application>(&query)
            .bind(status)
            .bind(clamp_limit(limit))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await
    }

    /// Create a new application with status `pending`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateApplication,
    ) -> Result<Application, sqlx::Error> {
        let query = format!(
            "INSERT INTO applications (student_id, program) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Application>(&query)
            .bind(input.student_id)
            .bind(&input.program)
            .fetch_one(pool)
            .await
    }

    /// Find an application by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Application>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM applications WHERE id = $1");
        sqlx::query_as::<_, Application>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Set an application's status. Transitions are unguarded, matching
    /// the submission workflow.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        input: &UpdateApplicationStatus,
    ) -> Result<Application, sqlx::Error> {
        let query = format!(
            "UPDATE applications SET \
                status = $1, \
                catatan = COALESCE($2, catatan), \
                updated_at = now() \
             WHERE id = $3 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Application>(&query)
            .bind(&input.status)
            .bind(&input.catatan)
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
