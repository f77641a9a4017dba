//! Handlers for student CRUD in the admin area.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use spmb_core::error::CoreError;
use spmb_core::types::DbId;
use spmb_db::models::student::{CreateStudent, UpdateStudent};
use spmb_db::repositories::StudentRepo;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Verify a student exists, for handlers that reference one by id.
pub async fn ensure_student_exists(pool: &spmb_db::DbPool, id: DbId) -> Result<(), AppError> {
    StudentRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id,
        }))?;
    Ok(())
}

/// GET /api/v1/students
pub async fn list_students(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let students = StudentRepo::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(DataResponse::new(students)))
}

/// POST /api/v1/students
pub async fn create_student(
    State(state): State<AppState>,
    Json(input): Json<CreateStudent>,
) -> AppResult<impl IntoResponse> {
    if input.nama.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "nama must not be empty".to_string(),
        )));
    }

    let student = StudentRepo::create(&state.pool, &input).await?;

    tracing::info!(student_id = student.id, "Student created");

    Ok((StatusCode::CREATED, Json(DataResponse::new(student))))
}

/// GET /api/v1/students/{id}
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let student = StudentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id,
        }))?;

    Ok(Json(DataResponse::new(student)))
}

/// PUT /api/v1/students/{id}
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStudent>,
) -> AppResult<impl IntoResponse> {
    ensure_student_exists(&state.pool, id).await?;

    let student = StudentRepo::update(&state.pool, id, &input).await?;
    Ok(Json(DataResponse::new(student)))
}

/// DELETE /api/v1/students/{id}
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_student_exists(&state.pool, id).await?;

    StudentRepo::delete(&state.pool, id).await?;

    tracing::info!(student_id = id, "Student deleted");

    Ok(StatusCode::NO_CONTENT)
}
