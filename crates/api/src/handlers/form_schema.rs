//! Form-schema handler.
//!
//! The client renders only the fields the schema enables and marks the
//! required ones, so the gating configuration is served read-only here.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/form-schema
///
/// The active field gating configuration for the admission form.
pub async fn get_form_schema(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse::new(state.form_schema.as_ref().clone())))
}
