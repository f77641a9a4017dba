pub mod application;
pub mod form_schema;
pub mod health;
pub mod student;
pub mod submission;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /submissions                                  create (public), list (admin)
/// /submissions/{id}                             get, update review (admin)
/// /submissions/lookup/{registration_number}     public status lookup
///
/// /form-schema                                  field gating config (public)
///
/// /students                                     list, create
/// /students/{id}                                get, update, delete
///
/// /applications                                 list, create
/// /applications/{id}                            get
/// /applications/{id}/status                     update status (PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/submissions", submission::router())
        .nest("/students", student::router())
        .nest("/applications", application::router())
        .merge(form_schema::router())
}
