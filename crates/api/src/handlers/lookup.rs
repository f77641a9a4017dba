//! Public status-lookup handler.
//!
//! Unauthenticated: knowledge of a registration number is the only
//! credential. A miss is a normal outcome (`found: false`), never an
//! error, and is not logged as one.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use spmb_db::models::submission::Submission;
use spmb_db::repositories::SubmissionRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Lookup outcome. `found: false` distinguishes a wrong or unsubmitted
/// number from a system fault, which would surface as a 5xx instead.
#[derive(Debug, Serialize)]
pub struct LookupResult {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission: Option<Submission>,
}

/// GET /api/v1/submissions/lookup/{registration_number}
///
/// Resolve a registration number (case-insensitive exact match) to the
/// submission's current state.
pub async fn lookup_submission(
    State(state): State<AppState>,
    Path(registration_number): Path<String>,
) -> AppResult<impl IntoResponse> {
    let submission =
        SubmissionRepo::find_by_registration_number(&state.pool, &registration_number).await?;

    Ok(Json(DataResponse::new(LookupResult {
        found: submission.is_some(),
        submission,
    })))
}
