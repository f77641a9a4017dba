//! Route definitions for the admission submission workflow.
//!
//! The public lookup route shares the `/submissions` prefix; the static
//! `lookup` segment takes precedence over the `{id}` parameter.

use axum::routing::get;
use axum::Router;

use crate::handlers::{lookup, submission};
use crate::state::AppState;

/// Submission routes, nested under `/submissions`.
///
/// ```text
/// POST   /                               create_submission (public)
/// GET    /                               list_submissions (admin)
/// GET    /{id}                           get_submission (admin)
/// PUT    /{id}                           update_submission (admin)
/// GET    /lookup/{registration_number}   lookup_submission (public)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(submission::list_submissions).post(submission::create_submission),
        )
        .route(
            "/{id}",
            get(submission::get_submission).put(submission::update_submission),
        )
        .route(
            "/lookup/{registration_number}",
            get(lookup::lookup_submission),
        )
}
