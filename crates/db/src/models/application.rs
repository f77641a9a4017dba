//! Enrollment application models.
//!
//! An application ties an existing student to an enrollment program with a
//! binary-outcome status. It follows the same permissive transition shape
//! as the submission workflow.

use serde::{Deserialize, Serialize};
use spmb_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `applications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Application {
    pub id: DbId,
    pub student_id: DbId,
    pub program: Option<String>,
    pub status: String,
    pub catatan: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new application. Status always starts at `pending`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateApplication {
    pub student_id: DbId,
    pub program: Option<String>,
}

/// DTO for updating an application's status.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateApplicationStatus {
    pub status: String,
    pub catatan: Option<String>,
}

/// Valid application status values.
pub const APPLICATION_STATUSES: &[&str] = &["pending", "approved", "rejected"];
