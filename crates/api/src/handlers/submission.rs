//! Handlers for the admission submission workflow.
//!
//! Covers the public submission endpoint and the admin listing, detail,
//! and review-update endpoints. The public status lookup lives in
//! `handlers::lookup`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use spmb_core::admission::{Jalur, SubmissionStatus};
use spmb_core::error::CoreError;
use spmb_core::types::DbId;
use spmb_db::models::submission::{
    CreateSubmission, Submission, SubmissionFilter, SubmissionStats, UpdateSubmissionReview,
};
use spmb_db::repositories::SubmissionRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Listing payload: the filtered rows plus the derived status counts over
/// the same filter.
#[derive(Debug, Serialize)]
pub struct SubmissionListData {
    pub submissions: Vec<Submission>,
    pub stats: SubmissionStats,
}

/// POST /api/v1/submissions
///
/// Public endpoint receiving the aggregated multi-step form payload.
/// Issues the registration number and persists the record as `pending`.
pub async fn create_submission(
    State(state): State<AppState>,
    Json(input): Json<CreateSubmission>,
) -> AppResult<impl IntoResponse> {
    let submission = SubmissionRepo::create(&state.pool, &input).await?;

    tracing::info!(
        submission_id = submission.id,
        registration_number = %submission.registration_number,
        jalur = %submission.jalur_pendaftaran,
        gelombang = %submission.gelombang_pendaftaran,
        "Submission created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse::new(submission))))
}

/// GET /api/v1/submissions?search=&status=&jalur=&limit=&offset=
///
/// Admin listing with derived stats over the filtered set.
pub async fn list_submissions(
    State(state): State<AppState>,
    Query(filter): Query<SubmissionFilter>,
) -> AppResult<impl IntoResponse> {
    if let Some(status) = filter.status.as_deref() {
        SubmissionStatus::from_str_db(status)?;
    }
    if let Some(jalur) = filter.jalur.as_deref() {
        Jalur::from_str_db(jalur)?;
    }

    let submissions = SubmissionRepo::list(&state.pool, &filter).await?;
    let stats = SubmissionRepo::stats(&state.pool, &filter).await?;

    Ok(Json(DataResponse::new(SubmissionListData {
        submissions,
        stats,
    })))
}

/// GET /api/v1/submissions/{id}
///
/// Full record for the admin detail view.
pub async fn get_submission(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let submission = SubmissionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Submission",
            id,
        }))?;

    Ok(Json(DataResponse::new(submission)))
}

/// PUT /api/v1/submissions/{id}
///
/// Admin review update: status, notes, and reviewer. The first transition
/// away from `pending` stamps `reviewed_at`; transitions are otherwise
/// unguarded, including back to `pending`.
pub async fn update_submission(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSubmissionReview>,
) -> AppResult<impl IntoResponse> {
    let new_status = input
        .status
        .as_deref()
        .map(SubmissionStatus::from_str_db)
        .transpose()?;

    let current = SubmissionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Submission",
            id,
        }))?;

    // reviewed_at and reviewed_by are both-set-or-both-null: the first
    // review transition must name its reviewer.
    let is_first_review = current.reviewed_at.is_none()
        && new_status.is_some_and(|s| s != SubmissionStatus::Pending);
    if is_first_review && input.reviewed_by.is_none() {
        return Err(AppError::Core(CoreError::Validation(
            "reviewed_by is required when changing the status of an unreviewed submission"
                .to_string(),
        )));
    }

    let updated = SubmissionRepo::update_review(&state.pool, id, &input).await?;

    tracing::info!(
        submission_id = id,
        registration_number = %updated.registration_number,
        from_status = %current.status,
        to_status = %updated.status,
        reviewed_by = ?updated.reviewed_by,
        "Submission review updated"
    );

    Ok(Json(DataResponse::new(updated)))
}
