//! Route definitions for enrollment applications.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::application;
use crate::state::AppState;

/// Application routes, nested under `/applications`.
///
/// ```text
/// GET    /               list_applications
/// POST   /               create_application
/// GET    /{id}           get_application
/// PUT    /{id}/status    update_application_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(application::list_applications).post(application::create_application),
        )
        .route("/{id}", get(application::get_application))
        .route(
            "/{id}/status",
            put(application::update_application_status),
        )
}
