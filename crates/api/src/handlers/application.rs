//! Handlers for enrollment applications.
//!
//! Same binary-outcome transition shape as the submission workflow:
//! `pending` to `approved` or `rejected`, unguarded in either direction.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use spmb_core::error::CoreError;
use spmb_core::types::DbId;
use spmb_db::models::application::{
    CreateApplication, UpdateApplicationStatus, APPLICATION_STATUSES,
};
use spmb_db::repositories::ApplicationRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::student::ensure_student_exists;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query params for `GET /applications`.
#[derive(Debug, Deserialize)]
pub struct ApplicationListParams {
    pub status: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

fn validate_application_status(status: &str) -> Result<(), CoreError> {
    if APPLICATION_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid application status '{status}'. Must be one of: {}",
            APPLICATION_STATUSES.join(", ")
        )))
    }
}

/// GET /api/v1/applications?status=&limit=&offset=
pub async fn list_applications(
    State(state): State<AppState>,
    Query(params): Query<ApplicationListParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(status) = params.status.as_deref() {
        validate_application_status(status)?;
    }

    let applications = ApplicationRepo::list(
        &state.pool,
        params.status.as_deref(),
        params.limit,
        params.offset,
    )
    .await?;

    Ok(Json(DataResponse::new(applications)))
}

/// POST /api/v1/applications
pub async fn create_application(
    State(state): State<AppState>,
    Json(input): Json<CreateApplication>,
) -> AppResult<impl IntoResponse> {
    ensure_student_exists(&state.pool, input.student_id).await?;

    let application = ApplicationRepo::create(&state.pool, &input).await?;

    tracing::info!(
        application_id = application.id,
        student_id = application.student_id,
        "Application created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse::new(application))))
}

/// GET /api/v1/applications/{id}
pub async fn get_application(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let application = ApplicationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Application",
            id,
        }))?;

    Ok(Json(DataResponse::new(application)))
}

/// PUT /api/v1/applications/{id}/status
pub async fn update_application_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateApplicationStatus>,
) -> AppResult<impl IntoResponse> {
    validate_application_status(&input.status)?;

    let current = ApplicationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Application",
            id,
        }))?;

    let application = ApplicationRepo::update_status(&state.pool, id, &input).await?;

    tracing::info!(
        application_id = id,
        from_status = %current.status,
        to_status = %application.status,
        "Application status updated"
    );

    Ok(Json(DataResponse::new(application)))
}
