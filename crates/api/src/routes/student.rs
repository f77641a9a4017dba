//! Route definitions for student CRUD.

use axum::routing::get;
use axum::Router;

use crate::handlers::student;
use crate::state::AppState;

/// Student routes, nested under `/students`.
///
/// ```text
/// GET    /          list_students
/// POST   /          create_student
/// GET    /{id}      get_student
/// PUT    /{id}      update_student
/// DELETE /{id}      delete_student
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(student::list_students).post(student::create_student))
        .route(
            "/{id}",
            get(student::get_student)
                .put(student::update_student)
                .delete(student::delete_student),
        )
}
