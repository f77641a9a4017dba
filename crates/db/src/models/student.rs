//! Student models for the admin area.

use serde::{Deserialize, Serialize};
use spmb_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `students` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Student {
    pub id: DbId,
    pub nama: String,
    pub email: Option<String>,
    pub telepon: Option<String>,
    pub program: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new student.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudent {
    pub nama: String,
    pub email: Option<String>,
    pub telepon: Option<String>,
    pub program: Option<String>,
}

/// DTO for updating an existing student.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStudent {
    pub nama: Option<String>,
    pub email: Option<String>,
    pub telepon: Option<String>,
    pub program: Option<String>,
}
